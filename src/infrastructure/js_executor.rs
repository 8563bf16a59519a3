//! JS 执行器 - 基础设施层
//!
//! 借用当前会话的 page，只暴露"执行 JS"和"查询元素"的能力

use anyhow::Result;
use chromiumoxide::Page;
use serde::de::DeserializeOwned;
use serde_json::Value as JsonValue;

/// JS 执行器
///
/// 职责：
/// - 在当前会话的 Page 上执行脚本
/// - 不认识关键词 / 联想词
/// - 不负责会话的打开和关闭
pub struct JsExecutor<'a> {
    page: &'a Page,
}

impl<'a> JsExecutor<'a> {
    pub fn new(page: &'a Page) -> Self {
        Self { page }
    }

    /// 执行 JS 代码并返回 JSON 结果
    pub async fn eval(&self, js_code: impl Into<String>) -> Result<JsonValue> {
        let result = self.page.evaluate(js_code.into()).await?;
        let json_value = result.into_value()?;
        Ok(json_value)
    }

    /// 执行 JS 代码并反序列化为指定类型
    pub async fn eval_as<T: DeserializeOwned>(&self, js_code: impl Into<String>) -> Result<T> {
        let json_value = self.eval(js_code).await?;
        let typed_value = serde_json::from_value(json_value)?;
        Ok(typed_value)
    }

    /// 页面中是否存在匹配选择器的元素
    pub async fn exists(&self, selector: &str) -> Result<bool> {
        let js_code = format!(
            "document.querySelector({}) !== null",
            serde_json::to_string(selector)?
        );
        self.eval_as(js_code).await
    }

    /// 读取所有匹配元素的 innerText
    pub async fn inner_texts(&self, selector: &str) -> Result<Vec<String>> {
        let js_code = format!(
            r#"
            Array.from(document.querySelectorAll({}))
                .map(el => (el.innerText || ''))
            "#,
            serde_json::to_string(selector)?
        );
        self.eval_as(js_code).await
    }
}
