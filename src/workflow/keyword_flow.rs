//! 关键词处理流程 - 流程层
//!
//! 核心职责：定义"一个关键词"的完整处理流程
//!
//! 流程顺序：
//! 1. 获取联想词（失败时记录原因，按空集合继续）
//! 2. 选出最长 / 最短
//! 3. 组装结果

use tracing::{info, warn};

use crate::error::SuggestionFailure;
use crate::models::{RankedResult, SuggestionSet};
use crate::services::{rank, SuggestionFetcher};
use crate::shutdown::Shutdown;
use crate::workflow::keyword_ctx::KeywordCtx;

/// 关键词处理流程
///
/// - 只依赖联想词获取能力（SuggestionFetcher）
/// - 不持有浏览器资源
/// - 失败种类只在这里记日志，排序只看到归一化后的联想词集合
pub struct KeywordFlow<'a> {
    fetcher: &'a dyn SuggestionFetcher,
    verbose_logging: bool,
}

impl<'a> KeywordFlow<'a> {
    pub fn new(fetcher: &'a dyn SuggestionFetcher, verbose_logging: bool) -> Self {
        Self {
            fetcher,
            verbose_logging,
        }
    }

    /// 处理单个关键词，永远返回一条结果
    pub async fn run(&self, keyword: &str, ctx: &KeywordCtx, shutdown: &Shutdown) -> RankedResult {
        let outcome = self.fetcher.fetch_suggestions(keyword, shutdown).await;
        let suggestions = self.settle(outcome, keyword, ctx);

        if self.verbose_logging {
            self.log_suggestions(ctx, &suggestions);
        }

        let (longest, shortest) = rank(&suggestions);
        RankedResult {
            keyword: keyword.to_string(),
            longest,
            shortest,
        }
    }

    /// 失败一律归一化为空集合
    fn settle(
        &self,
        outcome: Result<SuggestionSet, SuggestionFailure>,
        keyword: &str,
        ctx: &KeywordCtx,
    ) -> SuggestionSet {
        match outcome {
            Ok(suggestions) => suggestions,
            Err(failure @ SuggestionFailure::Timeout { .. }) => {
                warn!("{} ⚠️ '{}' 等待联想词失败: {}", ctx, keyword, failure);
                Vec::new()
            }
            Err(SuggestionFailure::Cancelled) => {
                warn!("{} ⚠️ '{}' 已取消", ctx, keyword);
                Vec::new()
            }
            Err(failure) => {
                warn!("{} ⚠️ '{}' 会话出错: {}", ctx, keyword, failure);
                Vec::new()
            }
        }
    }

    fn log_suggestions(&self, ctx: &KeywordCtx, suggestions: &[String]) {
        info!("{} 共 {} 条联想词", ctx, suggestions.len());
        for (i, s) in suggestions.iter().enumerate() {
            info!("{}   {}. {}", ctx, i + 1, s);
        }
    }
}
