//! 浏览器会话获取
//!
//! 每个关键词获取一个全新的会话，用完即关闭，不在关键词之间复用。

pub mod connection;
pub mod headless;

use chromiumoxide::{Browser, Handler, Page};
use futures::StreamExt;
use tokio::task::JoinHandle;
use tracing::{debug, warn};

pub use connection::connect_to_browser;
pub use headless::launch_browser;

use crate::config::Config;
use crate::error::BrowserError;

/// 会话来源
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Ownership {
    /// 本次启动的浏览器，关闭时结束整个进程
    Launched,
    /// 连接到已有浏览器，关闭时只关自己的标签页
    Connected,
}

/// 一次性浏览器会话：持有 Browser、Page 和事件处理任务
pub struct BrowserHandle {
    browser: Browser,
    page: Page,
    handler_task: JoinHandle<()>,
    ownership: Ownership,
}

impl BrowserHandle {
    pub fn page(&self) -> &Page {
        &self.page
    }

    /// 按配置获取新会话（启动或连接）
    pub async fn acquire(config: &Config) -> Result<Self, BrowserError> {
        match config.browser_debug_port {
            Some(port) => connect_to_browser(port).await,
            None => launch_browser(config).await,
        }
    }

    /// 关闭会话，错误只记日志
    pub async fn close(self) {
        let BrowserHandle {
            mut browser,
            page,
            handler_task,
            ownership,
        } = self;

        match ownership {
            Ownership::Launched => {
                if let Err(e) = browser.close().await {
                    warn!("关闭浏览器失败: {}", e);
                }
                if let Err(e) = browser.wait().await {
                    warn!("等待浏览器进程退出失败: {}", e);
                }
            }
            Ownership::Connected => {
                if let Err(e) = page.close().await {
                    warn!("关闭标签页失败: {}", e);
                }
            }
        }

        handler_task.abort();
        debug!("浏览器会话已关闭");
    }
}

/// 在后台处理浏览器事件
fn spawn_handler(mut handler: Handler) -> JoinHandle<()> {
    tokio::spawn(async move {
        while let Some(h) = handler.next().await {
            if h.is_err() {
                break;
            }
        }
    })
}
