//! 编排层（Orchestration Layer）
//!
//! ## 模块划分
//!
//! ### `batch_processor` - 一次完整运行
//! - 确定星期、读取关键词（没有当天工作表时终止）
//! - 调用 `daily_batch` 处理
//! - 写出结果文件并输出统计
//!
//! ### `daily_batch` - 单日批处理
//! - 按顺序逐个处理关键词
//! - 隔离单个关键词的失败
//! - 保证输出与输入一一对应
//!
//! ## 层次关系
//!
//! ```text
//! batch_processor (KeywordSource → run_batch → ResultSink)
//!     ↓
//! daily_batch (处理 Vec<KeywordRecord>)
//!     ↓
//! workflow::KeywordFlow (处理单个关键词)
//!     ↓
//! services (能力层：联想词会话 / 排序)
//!     ↓
//! browser + infrastructure (浏览器会话、JsExecutor)
//! ```

pub mod batch_processor;
pub mod daily_batch;

pub use batch_processor::{App, RunSummary};
pub use daily_batch::run_batch;
