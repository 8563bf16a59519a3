//! 关键词处理上下文
//!
//! 封装"我正在处理第几个关键词、它在源表的哪一行"这一信息

use std::fmt::Display;

/// 关键词处理上下文
#[derive(Debug, Clone)]
pub struct KeywordCtx {
    /// 本批中的序号（从1开始，仅用于日志显示）
    pub index: usize,

    /// 本批关键词总数
    pub total: usize,

    /// 关键词在源工作表中的行号
    pub source_position: usize,
}

impl KeywordCtx {
    pub fn new(index: usize, total: usize, source_position: usize) -> Self {
        Self {
            index,
            total,
            source_position,
        }
    }
}

impl Display for KeywordCtx {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "[关键词 {}/{} 行#{}]",
            self.index, self.total, self.source_position
        )
    }
}
