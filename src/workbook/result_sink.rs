//! 结果输出：把当天的结果写成只有一个工作表的 xlsx，覆盖旧文件

use rust_xlsxwriter::{Format, Workbook, XlsxError};
use tracing::debug;

use crate::error::{AppResult, WorkbookError};
use crate::models::{DailyBatch, DayKey};

/// 输出表头
pub const OUTPUT_HEADER: [&str; 3] = ["Keyword", "Longest", "Shortest"];

pub struct ResultSink {
    path: String,
}

impl ResultSink {
    pub fn new(path: impl Into<String>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    /// 写入当天结果（工作表名为星期名）
    pub fn write(&self, day: DayKey, batch: &DailyBatch) -> AppResult<()> {
        self.build_and_save(day, batch)
            .map_err(|source| WorkbookError::Write {
                path: self.path.clone(),
                source,
            })?;
        debug!("已写入 {} 行到 {}", batch.len(), self.path);
        Ok(())
    }

    fn build_and_save(&self, day: DayKey, batch: &DailyBatch) -> Result<(), XlsxError> {
        let mut workbook = Workbook::new();
        let header_format = Format::new().set_bold();

        let worksheet = workbook.add_worksheet();
        worksheet.set_name(day.as_str())?;

        for (col, title) in OUTPUT_HEADER.iter().enumerate() {
            worksheet.write_string_with_format(0, col as u16, *title, &header_format)?;
        }

        for (index, result) in batch.iter().enumerate() {
            let row = index as u32 + 1;
            let cells = [&result.keyword, &result.longest, &result.shortest];
            // 空字符串留作空白单元格
            for (col, text) in cells.into_iter().enumerate() {
                if !text.is_empty() {
                    worksheet.write_string(row, col as u16, text)?;
                }
            }
        }

        workbook.save(&self.path)
    }
}
