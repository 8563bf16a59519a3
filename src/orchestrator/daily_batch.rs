//! 单日批处理 - 编排层
//!
//! ## 职责
//!
//! 按输入顺序逐个处理关键词，每个关键词只尝试一次，结果按原顺序排列。
//!
//! ## 设计特点
//!
//! - **严格串行**：上一个关键词的会话关闭后才开始下一个
//! - **失败隔离**：单个关键词失败只会得到空结果，不会中断整批
//! - **行数不变**：输入 N 个关键词，输出 N 条结果
//! - **可停止**：每个关键词开始前检查停止信号，之后的关键词直接记为空结果

use tracing::warn;

use crate::models::{DailyBatch, KeywordRecord, RankedResult};
use crate::services::SuggestionFetcher;
use crate::shutdown::Shutdown;
use crate::utils::logging::{log_keyword_result, log_keyword_start};
use crate::workflow::{KeywordCtx, KeywordFlow};

/// 处理当天所有关键词
pub async fn run_batch(
    fetcher: &dyn SuggestionFetcher,
    keywords: &[KeywordRecord],
    verbose_logging: bool,
    shutdown: &Shutdown,
) -> DailyBatch {
    let flow = KeywordFlow::new(fetcher, verbose_logging);
    let total = keywords.len();
    let mut batch = DailyBatch::with_capacity(total);

    for (idx, record) in keywords.iter().enumerate() {
        let ctx = KeywordCtx::new(idx + 1, total, record.source_position);

        if shutdown.is_requested() {
            warn!("{} 已收到停止信号，跳过: {}", ctx, record.text);
            batch.push(RankedResult::degraded(&record.text));
            continue;
        }

        log_keyword_start(ctx.index, total, &record.text);
        let result = flow.run(&record.text, &ctx, shutdown).await;
        log_keyword_result(ctx.index, total, &result);

        batch.push(result);
    }

    batch
}
