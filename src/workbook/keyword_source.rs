//! 关键词来源：从输入工作簿中读取当天工作表的第一列

use std::fs::File;
use std::io::BufReader;

use calamine::{open_workbook, Data, Range, Reader, Xlsx};
use tracing::{debug, info};

use crate::error::{AppResult, WorkbookError};
use crate::models::{DayKey, KeywordRecord, HEADER_SENTINEL};

/// 关键词来源（xlsx 工作簿）
pub struct KeywordSource {
    path: String,
    workbook: Xlsx<BufReader<File>>,
}

impl KeywordSource {
    /// 打开输入工作簿
    pub fn open(path: impl Into<String>) -> AppResult<Self> {
        let path = path.into();
        let workbook: Xlsx<_> = open_workbook(&path).map_err(|source| WorkbookError::Open {
            path: path.clone(),
            source,
        })?;
        debug!("已打开工作簿: {}", path);
        Ok(Self { path, workbook })
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    /// 查找当天的工作表名：先精确匹配，再忽略大小写
    pub fn find_sheet(&self, day: DayKey) -> Option<String> {
        let names = self.workbook.sheet_names();
        names
            .iter()
            .find(|name| name.as_str() == day.as_str())
            .or_else(|| {
                names
                    .iter()
                    .find(|name| name.trim().eq_ignore_ascii_case(day.as_str()))
            })
            .cloned()
    }

    /// 读取当天的关键词
    ///
    /// # 返回
    /// - `None`：没有当天的工作表
    /// - `Some(vec)`：按行顺序排列的关键词，可能为空
    pub fn keywords_for(&mut self, day: DayKey) -> AppResult<Option<Vec<KeywordRecord>>> {
        let Some(sheet) = self.find_sheet(day) else {
            info!("工作簿 {} 中没有 {} 工作表", self.path, day);
            return Ok(None);
        };

        let range = self
            .workbook
            .worksheet_range(&sheet)
            .map_err(|source| WorkbookError::ReadSheet {
                sheet: sheet.clone(),
                source,
            })?;

        Ok(Some(filter_keyword_rows(first_column(&range))))
    }
}

/// 取第一列，返回 (行号从 1 开始, 单元格文本)
fn first_column(range: &Range<Data>) -> Vec<(usize, String)> {
    let (Some((start_row, _)), Some((end_row, _))) = (range.start(), range.end()) else {
        return Vec::new();
    };

    (start_row..=end_row)
        .map(|row| {
            let text = range
                .get_value((row, 0))
                .map(|cell| cell.to_string())
                .unwrap_or_default();
            (row as usize + 1, text)
        })
        .collect()
}

/// 过滤掉空行和表头行，文本去掉首尾空白
pub fn filter_keyword_rows<I, S>(rows: I) -> Vec<KeywordRecord>
where
    I: IntoIterator<Item = (usize, S)>,
    S: AsRef<str>,
{
    rows.into_iter()
        .filter_map(|(position, text)| {
            let text = text.as_ref().trim();
            if text.is_empty() || text == HEADER_SENTINEL {
                None
            } else {
                Some(KeywordRecord::new(position, text))
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_skips_header_and_empty_rows() {
        let rows = vec![(1, "Keyword"), (2, "sushi"), (3, ""), (4, "ramen")];
        assert_eq!(
            filter_keyword_rows(rows),
            vec![KeywordRecord::new(2, "sushi"), KeywordRecord::new(4, "ramen")]
        );
    }

    #[test]
    fn test_filter_trims_and_drops_whitespace_only() {
        let rows = vec![(1, "  "), (2, " pho \t"), (3, " Keyword ")];
        assert_eq!(filter_keyword_rows(rows), vec![KeywordRecord::new(2, "pho")]);
    }

    #[test]
    fn test_filter_keeps_sentinel_lookalikes() {
        let rows = vec![(5, "keyword"), (6, "Keywords")];
        assert_eq!(filter_keyword_rows(rows).len(), 2);
    }
}
