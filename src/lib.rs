//! # Keyword Suggest
//!
//! 按星期读取关键词表，用浏览器逐个查询搜索引擎的联想词，记录每个关键词最长和最短的联想词
//!
//! ## 架构设计
//!
//! ### ① 基础设施层（Browser / Infrastructure）
//! - `browser/` - 获取一次性的浏览器会话（启动新浏览器或连接调试端口）
//! - `JsExecutor` - 在会话的 page 上执行脚本
//! - `SearchPage` - 会话驱动页面的几个动作（导航、输入、查询、关闭）
//!
//! ### ② 业务能力层（Services）
//! - `SuggestionSession` - 一个关键词 → 一组联想词，超时有界，返回前必定关闭会话
//! - `rank` - 选出最长 / 最短联想词
//!
//! ### ③ 流程层（Workflow）
//! - `KeywordFlow` - 获取 → 记录失败 → 排序 → 组装结果
//!
//! ### ④ 编排层（Orchestration）
//! - `orchestrator/daily_batch` - 按顺序处理当天所有关键词
//! - `orchestrator/batch_processor` - 读取工作表、执行批处理、写出结果
//!
//! ### 工作簿（Workbook）
//! - `KeywordSource` / `ResultSink` - xlsx 输入输出

pub mod browser;
pub mod config;
pub mod error;
pub mod infrastructure;
pub mod logger;
pub mod models;
pub mod orchestrator;
pub mod services;
pub mod shutdown;
pub mod utils;
pub mod workbook;
pub mod workflow;

// 重新导出常用类型
pub use config::Config;
pub use error::{AppError, AppResult, SuggestionFailure};
pub use models::{DailyBatch, DayKey, KeywordRecord, RankedResult, SuggestionSet};
pub use orchestrator::{run_batch, App, RunSummary};
pub use services::{rank, ChromeSuggestionFetcher, SuggestionFetcher};
pub use shutdown::Shutdown;
pub use workbook::{KeywordSource, ResultSink};
pub use workflow::{KeywordCtx, KeywordFlow};
