use chromiumoxide::Browser;
use tokio::time::{sleep, Duration};
use tracing::{debug, error};

use super::{spawn_handler, BrowserHandle, Ownership};
use crate::error::BrowserError;

/// 连接到已打开的浏览器（远程调试端口），并新开一个标签页
pub async fn connect_to_browser(port: u16) -> Result<BrowserHandle, BrowserError> {
    let browser_url = format!("http://localhost:{}", port);
    debug!("正在连接到浏览器: {}", browser_url);

    let (browser, handler) = Browser::connect(&browser_url).await.map_err(|source| {
        error!("连接浏览器失败: {}", source);
        BrowserError::ConnectionFailed { port, source }
    })?;
    let handler_task = spawn_handler(handler);

    // 添加短暂延迟以等待浏览器状态同步
    sleep(Duration::from_millis(300)).await;

    let page = match browser.new_page("about:blank").await {
        Ok(page) => page,
        Err(source) => {
            handler_task.abort();
            return Err(BrowserError::PageCreationFailed { source });
        }
    };
    debug!("已连接浏览器并创建新标签页");

    Ok(BrowserHandle {
        browser,
        page,
        handler_task,
        ownership: Ownership::Connected,
    })
}
