//! 搜索页操作 - 基础设施层
//!
//! 会话只通过这几个动作驱动页面，浏览器细节留在 `BrowserHandle` 里。

use anyhow::{Context, Result};
use async_trait::async_trait;

use crate::browser::BrowserHandle;
use crate::infrastructure::JsExecutor;

/// 一个会话独占的搜索页
#[async_trait]
pub trait SearchPage: Send + Sync {
    /// 打开页面
    async fn goto(&self, url: &str) -> Result<()>;

    /// 点击输入框并逐字输入
    async fn type_into(&self, selector: &str, text: &str) -> Result<()>;

    /// 是否存在匹配选择器的元素
    async fn exists(&self, selector: &str) -> Result<bool>;

    /// 所有匹配元素的 innerText
    async fn inner_texts(&self, selector: &str) -> Result<Vec<String>>;

    /// 释放页面，错误只记日志
    async fn close(self);
}

#[async_trait]
impl SearchPage for BrowserHandle {
    async fn goto(&self, url: &str) -> Result<()> {
        self.page().goto(url).await?;
        Ok(())
    }

    async fn type_into(&self, selector: &str, text: &str) -> Result<()> {
        let input = self
            .page()
            .find_element(selector)
            .await
            .with_context(|| format!("找不到输入框 {}", selector))?;

        input.click().await.context("点击输入框失败")?;
        input.type_str(text).await.context("输入关键词失败")?;
        Ok(())
    }

    async fn exists(&self, selector: &str) -> Result<bool> {
        JsExecutor::new(self.page()).exists(selector).await
    }

    async fn inner_texts(&self, selector: &str) -> Result<Vec<String>> {
        JsExecutor::new(self.page()).inner_texts(selector).await
    }

    async fn close(self) {
        BrowserHandle::close(self).await;
    }
}
