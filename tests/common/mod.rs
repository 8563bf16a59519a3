#![allow(dead_code)]

use std::collections::HashMap;
use std::path::Path;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;
use calamine::{open_workbook, Reader, Xlsx};
use keyword_suggest::{Shutdown, SuggestionFailure, SuggestionFetcher, SuggestionSet};

/// 按关键词返回预设结果的假会话，同时记录调用顺序和同时打开的会话数
#[derive(Default)]
pub struct ScriptedFetcher {
    responses: HashMap<String, Result<SuggestionSet, SuggestionFailure>>,
    delay: Duration,
    calls: Mutex<Vec<String>>,
    active: AtomicUsize,
    max_active: AtomicUsize,
}

impl ScriptedFetcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    pub fn ok(mut self, keyword: &str, suggestions: &[&str]) -> Self {
        self.responses.insert(
            keyword.to_string(),
            Ok(suggestions.iter().map(|s| s.to_string()).collect()),
        );
        self
    }

    pub fn fail(mut self, keyword: &str, failure: SuggestionFailure) -> Self {
        self.responses.insert(keyword.to_string(), Err(failure));
        self
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    pub fn max_active(&self) -> usize {
        self.max_active.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl SuggestionFetcher for ScriptedFetcher {
    async fn fetch_suggestions(
        &self,
        keyword: &str,
        _shutdown: &Shutdown,
    ) -> Result<SuggestionSet, SuggestionFailure> {
        self.calls.lock().unwrap().push(keyword.to_string());

        let now = self.active.fetch_add(1, Ordering::SeqCst) + 1;
        self.max_active.fetch_max(now, Ordering::SeqCst);

        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }

        self.active.fetch_sub(1, Ordering::SeqCst);
        self.responses
            .get(keyword)
            .cloned()
            .unwrap_or_else(|| Ok(Vec::new()))
    }
}

/// 写一个输入工作簿：每个 (工作表名, 第一列各行) 一张表，空字符串表示空单元格
pub fn write_input_workbook(path: &Path, sheets: &[(&str, &[&str])]) {
    let mut workbook = rust_xlsxwriter::Workbook::new();
    for (name, rows) in sheets {
        let worksheet = workbook.add_worksheet();
        worksheet.set_name(*name).unwrap();
        for (row, text) in rows.iter().enumerate() {
            if !text.is_empty() {
                worksheet.write_string(row as u32, 0, *text).unwrap();
            }
        }
    }
    workbook.save(path).unwrap();
}

/// 读回某张表的全部单元格文本
pub fn read_sheet(path: &Path, sheet: &str) -> Vec<Vec<String>> {
    let mut workbook: Xlsx<_> = open_workbook(path).unwrap();
    let range = workbook.worksheet_range(sheet).unwrap();
    range
        .rows()
        .map(|row| row.iter().map(|cell| cell.to_string()).collect())
        .collect()
}

pub fn sheet_names(path: &Path) -> Vec<String> {
    let workbook: Xlsx<_> = open_workbook(path).unwrap();
    workbook.sheet_names()
}
