use std::path::Path;

use chromiumoxide::{Browser, BrowserConfig};
use tokio::time::{sleep, Duration};
use tracing::{debug, error};

use super::{spawn_handler, BrowserHandle, Ownership};
use crate::config::Config;
use crate::error::BrowserError;

/// 启动一个新的浏览器并打开空白页
pub async fn launch_browser(config: &Config) -> Result<BrowserHandle, BrowserError> {
    debug!(
        "启动浏览器 (无头: {}, 语言: {})",
        config.headless, config.browser_lang
    );

    let browser_config = build_browser_config(config).map_err(|e| {
        error!("配置浏览器失败: {}", e);
        BrowserError::ConfigurationFailed(e)
    })?;

    let (browser, handler) = Browser::launch(browser_config)
        .await
        .map_err(|source| BrowserError::LaunchFailed { source })?;
    let handler_task = spawn_handler(handler);

    // 添加短暂延迟以等待浏览器状态同步
    sleep(Duration::from_millis(300)).await;

    let page = match browser.new_page("about:blank").await {
        Ok(page) => page,
        Err(source) => {
            let mut browser = browser;
            let _ = browser.close().await;
            let _ = browser.wait().await;
            handler_task.abort();
            return Err(BrowserError::PageCreationFailed { source });
        }
    };
    debug!("浏览器启动成功");

    Ok(BrowserHandle {
        browser,
        page,
        handler_task,
        ownership: Ownership::Launched,
    })
}

fn build_browser_config(config: &Config) -> Result<BrowserConfig, String> {
    let mut builder = BrowserConfig::builder();

    builder = if config.headless {
        builder.new_headless_mode()
    } else {
        builder.with_head()
    };

    if let Some(executable) = &config.chrome_executable {
        builder = builder.chrome_executable(Path::new(executable));
    }

    builder
        .args(launch_args(&config.browser_lang))
        .build()
}

fn launch_args(lang: &str) -> Vec<String> {
    vec![
        format!("--lang={}", lang),
        "--disable-gpu".to_string(),
        "--disable-dev-shm-usage".to_string(),
        "--no-first-run".to_string(),
        "--no-default-browser-check".to_string(),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_launch_args_carry_locale() {
        let args = launch_args("en-US");
        assert!(args.contains(&"--lang=en-US".to_string()));
        assert!(args.contains(&"--no-first-run".to_string()));
    }
}
