//! 工作簿读写（输入关键词 / 输出结果）

pub mod keyword_source;
pub mod result_sink;

pub use keyword_source::{filter_keyword_rows, KeywordSource};
pub use result_sink::{ResultSink, OUTPUT_HEADER};
