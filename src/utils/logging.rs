//! 日志工具模块
//!
//! 提供日志格式化和输出的辅助函数

use tracing::info;

use crate::config::Config;
use crate::models::{DayKey, RankedResult};

/// 记录程序启动信息
pub fn log_startup(day: DayKey, config: &Config) {
    info!("{}", "=".repeat(60));
    info!("🚀 程序启动 - 关键词联想词采集");
    info!("📅 星期: {}", day);
    info!("📄 输入文件: {}", config.input_file);
    info!(
        "⏱️ 输入后等待 {}ms, 联想词超时 {}ms",
        config.settle_delay_ms, config.suggestion_timeout_ms
    );
    match config.browser_debug_port {
        Some(port) => info!("🌐 浏览器模式: 连接调试端口 {}", port),
        None => info!(
            "🌐 浏览器模式: 每个关键词启动新浏览器 ({})",
            if config.headless { "无头" } else { "有界面" }
        ),
    }
    info!("{}", "=".repeat(60));
}

/// 记录关键词加载信息
pub fn log_keywords_loaded(day: DayKey, total: usize) {
    info!("✓ 工作表 {} 中找到 {} 个关键词\n", day, total);
}

/// 记录关键词开始处理
pub fn log_keyword_start(index: usize, total: usize, keyword: &str) {
    info!("\n[关键词 {}/{}] {}", index, total, "─".repeat(30));
    info!("[关键词 {}/{}] 🔍 {}", index, total, truncate_text(keyword, 80));
}

/// 记录单个关键词的结果
pub fn log_keyword_result(index: usize, total: usize, result: &RankedResult) {
    info!("[关键词 {}/{}] ✓ 已处理: {}", index, total, result.keyword);
    info!("[关键词 {}/{}]   最长: {}", index, total, result.longest);
    info!("[关键词 {}/{}]   最短: {}", index, total, result.shortest);
}

/// 打印最终统计信息
pub fn print_final_stats(
    day: DayKey,
    total: usize,
    with_suggestions: usize,
    degraded: usize,
    output_file: &str,
) {
    info!("\n{}", "=".repeat(60));
    info!("📊 全部处理完成统计");
    info!(
        "完成时间: {}",
        chrono::Local::now().format("%Y-%m-%d %H:%M:%S")
    );
    info!("{}", "=".repeat(60));
    info!("✅ 有联想词: {}/{}", with_suggestions, total);
    info!("❌ 无结果: {}", degraded);
    info!("{}", "=".repeat(60));
    info!("\n{} 的结果已保存至: {}", day, output_file);
}

/// 截断长文本用于日志显示
///
/// # 参数
/// - `text`: 原始文本
/// - `max_len`: 最大长度
///
/// # 返回
/// 返回截断后的文本
pub fn truncate_text(text: &str, max_len: usize) -> String {
    if text.chars().count() > max_len {
        text.chars().take(max_len).collect::<String>() + "..."
    } else {
        text.to_string()
    }
}
