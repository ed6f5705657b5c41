//! 失败报告写入服务 - 业务能力层
//!
//! 只负责把批处理中失败的任务写入报告文件

use crate::utils::logging::{log_header, truncate_text};
use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// 失败报告写入服务
pub struct FailureWriter {
    report_path: PathBuf,
}

impl FailureWriter {
    /// 报告写入指定路径
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            report_path: path.into(),
        }
    }

    pub fn report_path(&self) -> &Path {
        &self.report_path
    }

    /// 写入失败报告（覆盖旧报告）
    ///
    /// # 参数
    /// - `errors`: 每个失败任务一行
    /// - `total`: 任务总数
    pub fn write(&self, errors: &[String], total: usize) -> Result<()> {
        let mut report = log_header("批量转换失败报告");
        report.push_str(&format!("失败 {}/{}\n\n", errors.len(), total));
        for line in errors {
            debug!("写入失败记录: {}", truncate_text(line, 120));
            report.push_str(line);
            report.push('\n');
        }

        fs::write(&self.report_path, report)
            .with_context(|| format!("无法写入失败报告: {}", self.report_path.display()))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_lists_every_failure() {
        let dir = tempfile::tempdir().unwrap();
        let writer = FailureWriter::with_path(dir.path().join("report.txt"));

        writer
            .write(
                &["failed convert, err: a".to_string(), "failed convert, err: b".to_string()],
                5,
            )
            .unwrap();

        let report = fs::read_to_string(writer.report_path()).unwrap();
        assert!(report.contains("失败 2/5"));
        assert!(report.contains("failed convert, err: a\nfailed convert, err: b\n"));
    }
}
