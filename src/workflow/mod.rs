pub mod keyword_ctx;
pub mod keyword_flow;

pub use keyword_ctx::KeywordCtx;
pub use keyword_flow::KeywordFlow;
