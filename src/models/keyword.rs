use serde::{Deserialize, Serialize};

/// 输入表中表头所在行的关键词文本
pub const HEADER_SENTINEL: &str = "Keyword";

/// 从当天工作表读出的一条关键词
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeywordRecord {
    /// 在源工作表中的行号（从 1 开始）
    pub source_position: usize,
    /// 关键词文本，非空且不等于表头
    pub text: String,
}

impl KeywordRecord {
    pub fn new(source_position: usize, text: impl Into<String>) -> Self {
        Self {
            source_position,
            text: text.into(),
        }
    }
}

/// 一次查询得到的联想词（已取首行、去空白、去空），可能为空
pub type SuggestionSet = Vec<String>;

/// 单个关键词的结果
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankedResult {
    pub keyword: String,
    pub longest: String,
    pub shortest: String,
}

impl RankedResult {
    /// 没有拿到联想词时的降级结果
    pub fn degraded(keyword: impl Into<String>) -> Self {
        Self {
            keyword: keyword.into(),
            ..Default::default()
        }
    }

    pub fn is_degraded(&self) -> bool {
        self.longest.is_empty() && self.shortest.is_empty()
    }
}

/// 当天所有结果，顺序与输入一致
pub type DailyBatch = Vec<RankedResult>;
