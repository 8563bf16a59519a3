use std::time::Duration;

use thiserror::Error;

use crate::models::DayKey;
use crate::services::suggestion_session::SessionState;

/// 应用程序错误类型
#[derive(Debug, Error)]
pub enum AppError {
    /// 当天的关键词工作表不存在（整批不执行，也不写输出文件）
    #[error("未找到 {day} 对应的工作表 (文件: {path})")]
    MissingDaySheet { day: DayKey, path: String },
    /// 工作簿读写错误
    #[error("工作簿错误: {0}")]
    Workbook(#[from] WorkbookError),
    /// 浏览器相关错误
    #[error("浏览器错误: {0}")]
    Browser(#[from] BrowserError),
    /// 配置错误
    #[error("配置错误: {0}")]
    Config(#[from] ConfigError),
}

/// 工作簿读写错误
#[derive(Debug, Error)]
pub enum WorkbookError {
    /// 打开输入文件失败
    #[error("无法打开工作簿 {path}: {source}")]
    Open {
        path: String,
        #[source]
        source: calamine::XlsxError,
    },
    /// 读取工作表失败
    #[error("无法读取工作表 {sheet}: {source}")]
    ReadSheet {
        sheet: String,
        #[source]
        source: calamine::XlsxError,
    },
    /// 写入输出文件失败
    #[error("无法写入工作簿 {path}: {source}")]
    Write {
        path: String,
        #[source]
        source: rust_xlsxwriter::XlsxError,
    },
}

/// 浏览器相关错误
#[derive(Debug, Error)]
pub enum BrowserError {
    /// 浏览器配置失败
    #[error("浏览器配置失败: {0}")]
    ConfigurationFailed(String),
    /// 启动浏览器失败
    #[error("启动浏览器失败: {source}")]
    LaunchFailed {
        #[source]
        source: chromiumoxide::error::CdpError,
    },
    /// 连接浏览器失败
    #[error("无法连接到浏览器 (端口: {port}): {source}")]
    ConnectionFailed {
        port: u16,
        #[source]
        source: chromiumoxide::error::CdpError,
    },
    /// 创建页面失败
    #[error("创建页面失败: {source}")]
    PageCreationFailed {
        #[source]
        source: chromiumoxide::error::CdpError,
    },
}

/// 配置错误
#[derive(Debug, Error)]
pub enum ConfigError {
    /// 读取配置文件失败
    #[error("读取配置文件 {path} 失败: {source}")]
    ReadFailed {
        path: String,
        #[source]
        source: std::io::Error,
    },
    /// 配置文件解析失败
    #[error("配置文件 {path} 解析失败: {source}")]
    ParseFailed {
        path: String,
        #[source]
        source: toml::de::Error,
    },
    /// 无法识别的星期
    #[error("无法识别的星期: '{0}'")]
    InvalidDayKey(String),
}

/// 单个关键词的联想词获取失败原因
///
/// 只在流程层内部使用：记录日志后统一归一化为空的联想词集合，不会让整批失败。
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SuggestionFailure {
    /// 联想词列表在限定时间内没有出现
    #[error("等待联想词超时 ({}ms)", .waited.as_millis())]
    Timeout { waited: Duration },
    /// 启动、导航、输入或提取阶段出错
    #[error("会话在 {stage:?} 阶段出错: {message}")]
    Fault { stage: SessionState, message: String },
    /// 收到停止信号
    #[error("已取消")]
    Cancelled,
}

impl SuggestionFailure {
    /// 便捷构造：会话故障
    pub fn fault(stage: SessionState, err: impl std::fmt::Display) -> Self {
        SuggestionFailure::Fault {
            stage,
            message: err.to_string(),
        }
    }
}

// ========== Result 类型别名 ==========

/// 应用程序结果类型
pub type AppResult<T> = Result<T, AppError>;
