pub mod js_executor;
pub mod search_page;

pub use js_executor::JsExecutor;
pub use search_page::SearchPage;
