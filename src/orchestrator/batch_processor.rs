//! 运行入口 - 编排层
//!
//! ## 职责
//!
//! 本模块负责一次完整运行：确定星期、读取关键词、执行批处理、写出结果。
//!
//! ## 核心功能
//!
//! 1. **确定星期**：配置指定或取本地时间的今天
//! 2. **加载关键词**：读取当天的工作表；没有该工作表时整次运行终止，不写输出文件
//! 3. **批处理**：委托 `daily_batch::run_batch` 逐个处理
//! 4. **写出结果**：覆盖写入输出文件
//! 5. **全局统计**：汇总有结果 / 无结果数量

use std::sync::Arc;

use tracing::{info, warn};

use crate::config::Config;
use crate::error::{AppError, AppResult};
use crate::models::{DailyBatch, DayKey};
use crate::orchestrator::daily_batch::run_batch;
use crate::services::{ChromeSuggestionFetcher, SuggestionFetcher};
use crate::shutdown::Shutdown;
use crate::utils::logging::{log_keywords_loaded, log_startup, print_final_stats};
use crate::workbook::{KeywordSource, ResultSink};

/// 应用主结构
pub struct App {
    config: Arc<Config>,
    fetcher: Box<dyn SuggestionFetcher>,
    shutdown: Shutdown,
}

impl App {
    /// 使用真实浏览器
    pub fn new(config: Config) -> Self {
        let config = Arc::new(config);
        let fetcher = Box::new(ChromeSuggestionFetcher::new(config.clone()));
        Self {
            config,
            fetcher,
            shutdown: Shutdown::never(),
        }
    }

    /// 使用自定义的联想词获取方式
    pub fn with_fetcher(config: Config, fetcher: Box<dyn SuggestionFetcher>) -> Self {
        Self {
            config: Arc::new(config),
            fetcher,
            shutdown: Shutdown::never(),
        }
    }

    pub fn with_shutdown(mut self, shutdown: Shutdown) -> Self {
        self.shutdown = shutdown;
        self
    }

    /// 运行应用主逻辑
    pub async fn run(&self) -> AppResult<RunSummary> {
        let day = self.config.day_key()?;
        log_startup(day, &self.config);

        let keywords = {
            let mut source = KeywordSource::open(&self.config.input_file)?;
            source
                .keywords_for(day)?
                .ok_or_else(|| AppError::MissingDaySheet {
                    day,
                    path: source.path().to_string(),
                })?
        };

        log_keywords_loaded(day, keywords.len());
        if keywords.is_empty() {
            warn!("⚠️ {} 工作表中没有关键词，将只写出表头", day);
        }

        let batch = run_batch(
            self.fetcher.as_ref(),
            &keywords,
            self.config.verbose_logging,
            &self.shutdown,
        )
        .await;

        let sink = ResultSink::new(&self.config.output_file);
        sink.write(day, &batch)?;
        info!("✅ {} 的结果文件已生成: {}", day, sink.path());

        let summary = RunSummary::from_batch(day, &batch, sink.path());
        print_final_stats(
            summary.day,
            summary.total,
            summary.with_suggestions,
            summary.degraded,
            &summary.output,
        );

        Ok(summary)
    }
}

/// 运行统计
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    pub day: DayKey,
    pub total: usize,
    pub with_suggestions: usize,
    pub degraded: usize,
    pub output: String,
}

impl RunSummary {
    fn from_batch(day: DayKey, batch: &DailyBatch, output: &str) -> Self {
        let degraded = batch.iter().filter(|r| r.is_degraded()).count();
        Self {
            day,
            total: batch.len(),
            with_suggestions: batch.len() - degraded,
            degraded,
            output: output.to_string(),
        }
    }
}
