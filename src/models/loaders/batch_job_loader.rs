//! 批处理任务文件加载
//!
//! 文件格式：
//!
//! ```json
//! [
//!     { "in": "a.mscz", "out": "a.pdf" },
//!     { "in": "b.mscz", "out": ["b.pdf", ["b-", ".mp3"]], "transpose": { ... } }
//! ]
//! ```
//!
//! `out` 为数组时每个元素生成一个任务；`[前缀, 后缀]` 展开为 `前缀*后缀`，
//! 其中 `*` 在转换时替换为声部名。其他形状的元素直接忽略。
//! 缺少 `in` 的条目和空的输出路径只跳过自身，不影响其他任务。

use crate::error::{ConvertError, Result};
use crate::models::job::{BatchJob, JobDescriptor, TransposeSpec};
use crate::models::transpose::parse_transpose_value;
use crate::utils::path::from_native_separators;
use serde_json::Value as JsonValue;
use std::fs;
use std::path::Path;
use tracing::{debug, info, warn};

/// 从文件加载批处理任务
pub fn load_batch_job(job_file: &Path) -> Result<BatchJob> {
    let data = fs::read(job_file).map_err(|source| ConvertError::FileOpen {
        path: job_file.to_path_buf(),
        source,
    })?;

    let jobs = parse_batch_job(&data)?;
    info!(
        "✓ 已加载批处理任务文件 {}，共 {} 个任务",
        job_file.display(),
        jobs.len()
    );
    Ok(jobs)
}

/// 解析批处理任务文档
///
/// 只有 `transpose` 无效时整个文档解析失败，其他有问题的条目只跳过自身。
pub fn parse_batch_job(data: &[u8]) -> Result<BatchJob> {
    let doc: JsonValue = serde_json::from_slice(data).map_err(|e| malformed(e.to_string()))?;
    let JsonValue::Array(entries) = doc else {
        return Err(malformed("顶层必须是 JSON 数组"));
    };

    let mut jobs = BatchJob::new();
    for (index, entry) in entries.iter().enumerate() {
        parse_entry(index, entry, &mut jobs)?;
    }

    Ok(jobs)
}

fn parse_entry(index: usize, entry: &JsonValue, jobs: &mut BatchJob) -> Result<()> {
    let input = from_native_separators(entry["in"].as_str().unwrap_or_default());
    if input.is_empty() {
        warn!("⚠️ 第 {} 个任务缺少 in，跳过", index + 1);
        return Ok(());
    }

    let transpose = match &entry["transpose"] {
        JsonValue::Object(obj) if !obj.is_empty() => Some(TransposeSpec::Parsed(
            parse_transpose_value(&entry["transpose"])?,
        )),
        _ => None,
    };

    let job = JobDescriptor {
        input: input.into(),
        output: Default::default(),
        transpose,
    };

    match &entry["out"] {
        JsonValue::String(out) => {
            push_output(index, &job, from_native_separators(out), jobs);
        }
        JsonValue::Array(outputs) => {
            for item in outputs {
                match item {
                    JsonValue::String(out) => {
                        push_output(index, &job, from_native_separators(out), jobs);
                    }
                    JsonValue::Array(pair) if pair.len() == 2 => {
                        let prefix = from_native_separators(pair[0].as_str().unwrap_or_default());
                        let suffix = pair[1].as_str().unwrap_or_default();
                        push_output(index, &job, format!("{}*{}", prefix, suffix), jobs);
                    }
                    // TODO: 改为报错，目前与旧任务文件保持兼容
                    other => debug!("第 {} 个任务忽略无法识别的输出: {}", index + 1, other),
                }
            }
        }
        _ => debug!("第 {} 个任务没有 out，跳过", index + 1),
    }

    Ok(())
}

/// 空输出路径只丢弃这一个输出
fn push_output(index: usize, job: &JobDescriptor, output: String, jobs: &mut BatchJob) {
    if output.is_empty() {
        warn!("⚠️ 第 {} 个任务的 out 为空，跳过", index + 1);
        return;
    }
    jobs.push(JobDescriptor {
        output: output.into(),
        ..job.clone()
    });
}

fn malformed(message: impl Into<String>) -> ConvertError {
    ConvertError::MalformedDocument {
        message: message.into(),
    }
}
