//! 日志工具模块
//!
//! 提供 tracing 初始化和报告文件头的辅助函数

use tracing_subscriber::EnvFilter;

/// 初始化 tracing 日志
///
/// 默认级别为 `info`（详细模式为 `debug`），可通过 `RUST_LOG` 覆盖。重复调用不会报错。
pub fn init(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    // 已有全局订阅者时（如宿主程序或测试）保留原订阅者
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init()
        .ok();
}

/// 生成带时间戳的文件头
pub fn log_header(title: &str) -> String {
    format!(
        "{}\n{} - {}\n{}\n\n",
        "=".repeat(60),
        title,
        chrono::Local::now().format("%Y-%m-%d %H:%M:%S"),
        "=".repeat(60)
    )
}

/// 截断长文本用于日志显示
pub fn truncate_text(text: &str, max_len: usize) -> String {
    if text.chars().count() > max_len {
        text.chars().take(max_len).collect::<String>() + "..."
    } else {
        text.to_string()
    }
}
