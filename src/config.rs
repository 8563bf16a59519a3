use std::path::Path;
use std::time::Duration;

use serde::Deserialize;

use crate::error::ConfigError;
use crate::models::DayKey;

/// 默认配置文件名（位于工作目录）
pub const DEFAULT_CONFIG_FILE: &str = "keyword_suggest.toml";

/// 程序配置文件
#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct Config {
    /// 关键词输入文件
    pub input_file: String,
    /// 结果输出文件（每次运行覆盖）
    pub output_file: String,
    /// 指定星期，不设置时取本地时间的今天
    pub day: Option<String>,
    /// 搜索首页（带语言参数）
    pub search_url: String,
    /// 浏览器界面语言
    pub browser_lang: String,
    /// 搜索输入框选择器
    pub query_input_selector: String,
    /// 联想词列表容器选择器
    pub suggestion_list_selector: String,
    /// 联想词条目选择器
    pub suggestion_item_selector: String,
    /// 输入后等待联想层开始渲染的时间
    pub settle_delay_ms: u64,
    /// 等待联想词列表出现的最长时间
    pub suggestion_timeout_ms: u64,
    /// 轮询联想词列表的间隔
    pub poll_interval_ms: u64,
    /// 是否无头模式
    pub headless: bool,
    /// 浏览器可执行文件路径，不设置时自动查找
    pub chrome_executable: Option<String>,
    /// 设置后改为连接已打开的浏览器（调试端口），每个关键词开一个新标签页
    pub browser_debug_port: Option<u16>,
    /// 是否显示详细日志
    pub verbose_logging: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            input_file: "Excel.xlsx".to_string(),
            output_file: "Updated_Excel.xlsx".to_string(),
            day: None,
            search_url: "https://www.google.com/?hl=en".to_string(),
            browser_lang: "en-US".to_string(),
            query_input_selector: ".gLFyf".to_string(),
            suggestion_list_selector: r#"ul[role="listbox"]"#.to_string(),
            suggestion_item_selector: r#"ul[role="listbox"] li"#.to_string(),
            settle_delay_ms: 1000,
            suggestion_timeout_ms: 10_000,
            poll_interval_ms: 100,
            headless: false,
            chrome_executable: None,
            browser_debug_port: None,
            verbose_logging: false,
        }
    }
}

impl Config {
    /// 默认值 → 配置文件（可选）→ 环境变量
    pub fn load() -> Result<Self, ConfigError> {
        let path = std::env::var("KEYWORD_SUGGEST_CONFIG")
            .unwrap_or_else(|_| DEFAULT_CONFIG_FILE.to_string());

        let base = if Path::new(&path).exists() {
            Self::from_toml_file(&path)?
        } else {
            Self::default()
        };

        Ok(base.with_env_overrides())
    }

    /// 从 TOML 文件加载，缺省字段使用默认值
    pub fn from_toml_file(path: &str) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::ReadFailed {
            path: path.to_string(),
            source,
        })?;
        Self::from_toml_str(&content).map_err(|source| ConfigError::ParseFailed {
            path: path.to_string(),
            source,
        })
    }

    pub fn from_toml_str(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// 用环境变量覆盖当前配置，无法解析的值保留原值
    pub fn with_env_overrides(self) -> Self {
        Self {
            input_file: env_string("INPUT_FILE").unwrap_or(self.input_file),
            output_file: env_string("OUTPUT_FILE").unwrap_or(self.output_file),
            day: env_string("DAY_KEY").or(self.day),
            search_url: env_string("SEARCH_URL").unwrap_or(self.search_url),
            browser_lang: env_string("BROWSER_LANG").unwrap_or(self.browser_lang),
            query_input_selector: env_string("QUERY_INPUT_SELECTOR")
                .unwrap_or(self.query_input_selector),
            suggestion_list_selector: env_string("SUGGESTION_LIST_SELECTOR")
                .unwrap_or(self.suggestion_list_selector),
            suggestion_item_selector: env_string("SUGGESTION_ITEM_SELECTOR")
                .unwrap_or(self.suggestion_item_selector),
            settle_delay_ms: env_parse("SETTLE_DELAY_MS").unwrap_or(self.settle_delay_ms),
            suggestion_timeout_ms: env_parse("SUGGESTION_TIMEOUT_MS")
                .unwrap_or(self.suggestion_timeout_ms),
            poll_interval_ms: env_parse("POLL_INTERVAL_MS").unwrap_or(self.poll_interval_ms),
            headless: env_parse("HEADLESS").unwrap_or(self.headless),
            chrome_executable: env_string("CHROME_EXECUTABLE").or(self.chrome_executable),
            browser_debug_port: env_parse("BROWSER_DEBUG_PORT").or(self.browser_debug_port),
            verbose_logging: env_parse("VERBOSE_LOGGING").unwrap_or(self.verbose_logging),
        }
    }

    /// 本次运行的星期
    pub fn day_key(&self) -> Result<DayKey, ConfigError> {
        match &self.day {
            Some(day) => day.parse(),
            None => Ok(DayKey::today()),
        }
    }

    pub fn settle_delay(&self) -> Duration {
        Duration::from_millis(self.settle_delay_ms)
    }

    pub fn suggestion_timeout(&self) -> Duration {
        Duration::from_millis(self.suggestion_timeout_ms)
    }

    pub fn poll_interval(&self) -> Duration {
        Duration::from_millis(self.poll_interval_ms.max(1))
    }
}

fn env_string(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.trim().is_empty())
}

fn env_parse<T: std::str::FromStr>(name: &str) -> Option<T> {
    env_string(name).and_then(|v| v.trim().parse().ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_timing() {
        let config = Config::default();
        assert_eq!(config.settle_delay(), Duration::from_millis(1000));
        assert_eq!(config.suggestion_timeout(), Duration::from_secs(10));
        assert!(config.search_url.contains("hl=en"));
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config = Config::from_toml_str(
            r#"
            input_file = "keywords.xlsx"
            suggestion_timeout_ms = 2500
            headless = true
            day = "周五"
            "#,
        )
        .unwrap();

        assert_eq!(config.input_file, "keywords.xlsx");
        assert_eq!(config.output_file, "Updated_Excel.xlsx");
        assert_eq!(config.suggestion_timeout_ms, 2500);
        assert!(config.headless);
        assert_eq!(config.day_key().unwrap(), DayKey::Friday);
    }

    #[test]
    fn test_invalid_toml_is_an_error() {
        assert!(Config::from_toml_str("settle_delay_ms = \"soon\"").is_err());
    }

    #[test]
    fn test_invalid_day_key() {
        let config = Config {
            day: Some("Caturday".to_string()),
            ..Config::default()
        };
        assert!(matches!(
            config.day_key(),
            Err(ConfigError::InvalidDayKey(ref s)) if s == "Caturday"
        ));
    }

    #[test]
    fn test_poll_interval_never_zero() {
        let config = Config {
            poll_interval_ms: 0,
            ..Config::default()
        };
        assert_eq!(config.poll_interval(), Duration::from_millis(1));
    }
}
