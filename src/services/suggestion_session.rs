//! 联想词会话 - 业务能力层
//!
//! 只负责"一个关键词 → 一组联想词"，不关心批次和排序。
//!
//! 每次调用都获取一个全新的浏览器会话：
//!
//! ```text
//! Init → Navigated → QueryTyped → AwaitingSuggestions → {SuggestionsReady | TimedOut} → Closed
//! ```
//!
//! 任何阶段出错都直接进入 `Closed`，会话在返回前一定会关闭。

use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use tokio::time::{sleep, timeout};
use tracing::{debug, warn};

use crate::browser::BrowserHandle;
use crate::config::Config;
use crate::error::SuggestionFailure;
use crate::infrastructure::SearchPage;
use crate::models::SuggestionSet;
use crate::shutdown::Shutdown;

/// 会话所处阶段
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Init,
    Navigated,
    QueryTyped,
    AwaitingSuggestions,
    SuggestionsReady,
    TimedOut,
    Closed,
}

/// 获取联想词的能力
///
/// 失败只通过返回值报告，不会 panic，也不会让调用方中断批次。
#[async_trait]
pub trait SuggestionFetcher: Send + Sync {
    async fn fetch_suggestions(
        &self,
        keyword: &str,
        shutdown: &Shutdown,
    ) -> Result<SuggestionSet, SuggestionFailure>;
}

/// 用真实浏览器获取联想词
pub struct ChromeSuggestionFetcher {
    config: Arc<Config>,
}

impl ChromeSuggestionFetcher {
    pub fn new(config: Arc<Config>) -> Self {
        Self { config }
    }
}

#[async_trait]
impl SuggestionFetcher for ChromeSuggestionFetcher {
    async fn fetch_suggestions(
        &self,
        keyword: &str,
        shutdown: &Shutdown,
    ) -> Result<SuggestionSet, SuggestionFailure> {
        let handle = BrowserHandle::acquire(&self.config)
            .await
            .map_err(|e| SuggestionFailure::fault(SessionState::Init, e))?;

        run_session(&self.config, handle, keyword, shutdown).await
    }
}

/// 在已获取的页面上跑完一次会话，无论结果如何都会关闭页面
pub async fn run_session<P: SearchPage>(
    config: &Config,
    page: P,
    keyword: &str,
    shutdown: &Shutdown,
) -> Result<SuggestionSet, SuggestionFailure> {
    let mut session = SuggestionSession::new(config, page);
    let outcome = session.run(keyword, shutdown).await;
    session.close().await;
    outcome
}

/// 单个关键词的浏览器会话
pub struct SuggestionSession<'a, P: SearchPage> {
    config: &'a Config,
    page: P,
    state: SessionState,
}

impl<'a, P: SearchPage> SuggestionSession<'a, P> {
    pub fn new(config: &'a Config, page: P) -> Self {
        Self {
            config,
            page,
            state: SessionState::Init,
        }
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    /// 导航 → 输入 → 等待 → 提取
    pub async fn run(
        &mut self,
        keyword: &str,
        shutdown: &Shutdown,
    ) -> Result<SuggestionSet, SuggestionFailure> {
        self.navigate().await?;
        self.type_query(keyword).await?;

        tokio::select! {
            _ = sleep(self.config.settle_delay()) => {}
            _ = shutdown.requested() => return Err(SuggestionFailure::Cancelled),
        }

        self.await_suggestions(shutdown).await?;
        self.extract().await
    }

    /// 关闭会话（成功和失败路径都要调用）
    pub async fn close(self) {
        debug!("关闭会话 (阶段: {:?} → {:?})", self.state, SessionState::Closed);
        self.page.close().await;
    }

    async fn navigate(&mut self) -> Result<(), SuggestionFailure> {
        let url = &self.config.search_url;
        self.page
            .goto(url)
            .await
            .map_err(|e| self.fault(format!("导航到 {} 失败: {:#}", url, e)))?;

        self.state = SessionState::Navigated;
        debug!("已导航到: {}", url);
        Ok(())
    }

    async fn type_query(&mut self, keyword: &str) -> Result<(), SuggestionFailure> {
        self.page
            .type_into(&self.config.query_input_selector, keyword)
            .await
            .map_err(|e| self.fault(format!("{:#}", e)))?;

        self.state = SessionState::QueryTyped;
        Ok(())
    }

    async fn await_suggestions(&mut self, shutdown: &Shutdown) -> Result<(), SuggestionFailure> {
        self.state = SessionState::AwaitingSuggestions;

        let config = self.config;
        let page = &self.page;
        let selector = config.suggestion_list_selector.as_str();
        let outcome = wait_until(
            move || async move {
                match page.exists(selector).await {
                    Ok(found) => found,
                    Err(e) => {
                        debug!("查询联想词列表失败，继续等待: {}", e);
                        false
                    }
                }
            },
            config.suggestion_timeout(),
            config.poll_interval(),
            shutdown,
        )
        .await;

        match outcome {
            WaitOutcome::Ready => {
                self.state = SessionState::SuggestionsReady;
                Ok(())
            }
            WaitOutcome::TimedOut => {
                self.state = SessionState::TimedOut;
                Err(SuggestionFailure::Timeout {
                    waited: config.suggestion_timeout(),
                })
            }
            WaitOutcome::Cancelled => Err(SuggestionFailure::Cancelled),
        }
    }

    async fn extract(&self) -> Result<SuggestionSet, SuggestionFailure> {
        let raw = self
            .page
            .inner_texts(&self.config.suggestion_item_selector)
            .await
            .map_err(|e| self.fault(format!("读取联想词失败: {}", e)))?;

        let suggestions = normalize_suggestions(raw);
        if suggestions.is_empty() {
            warn!("联想词列表已出现但内容为空");
        }
        Ok(suggestions)
    }

    fn fault(&self, message: String) -> SuggestionFailure {
        SuggestionFailure::fault(self.state, message)
    }
}

/// 有界等待的结果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WaitOutcome {
    Ready,
    TimedOut,
    Cancelled,
}

/// 每隔 `poll` 调用一次 `probe`，直到返回 true、超过 `limit` 或收到停止信号
pub async fn wait_until<F, Fut>(
    mut probe: F,
    limit: Duration,
    poll: Duration,
    shutdown: &Shutdown,
) -> WaitOutcome
where
    F: FnMut() -> Fut,
    Fut: Future<Output = bool>,
{
    let polling = async {
        loop {
            if probe().await {
                return;
            }
            sleep(poll).await;
        }
    };

    tokio::select! {
        res = timeout(limit, polling) => match res {
            Ok(()) => WaitOutcome::Ready,
            Err(_) => WaitOutcome::TimedOut,
        },
        _ = shutdown.requested() => WaitOutcome::Cancelled,
    }
}

/// 每条只取第一行、去掉首尾空白，丢弃空字符串，保持原顺序
pub fn normalize_suggestions<I, S>(raw: I) -> SuggestionSet
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    raw.into_iter()
        .filter_map(|text| {
            let first_line = text.as_ref().lines().next().unwrap_or("").trim();
            (!first_line.is_empty()).then(|| first_line.to_string())
        })
        .collect()
}
