//! 进度通知
//!
//! 同步回调，批处理开始前 `start`，每个任务前 `progress`，结束时 `finish` 恰好一次。

use crate::error::ConvertError;
use tracing::{error, info};

pub trait ProgressSink {
    fn start(&mut self);
    /// `current` 从 1 开始
    fn progress(&mut self, current: usize, total: usize, message: &str);
    fn finish(&mut self, result: &Result<(), ConvertError>);
}

/// 把进度写到日志
#[derive(Debug, Default)]
pub struct LogProgress;

impl ProgressSink for LogProgress {
    fn start(&mut self) {
        info!("⏳ 批量转换开始");
    }

    fn progress(&mut self, current: usize, total: usize, message: &str) {
        info!("⏳ 进度 {}/{}: {}", current, total, message);
    }

    fn finish(&mut self, result: &Result<(), ConvertError>) {
        match result {
            Ok(()) => info!("✅ 批量转换结束"),
            Err(e) => error!("❌ 批量转换结束，存在失败:\n{}", e),
        }
    }
}
