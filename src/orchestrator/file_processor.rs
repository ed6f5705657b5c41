//! 单文件转换入口 - 编排层
//!
//! 单文件模式下错误直接返回给调用方，不做汇总。

use crate::error::Result;
use crate::infrastructure::NotationEngine;
use crate::models::job::{JobDescriptor, TransposeSpec};
use crate::workflow::{ConvertFlow, JobCtx};
use std::path::{Path, PathBuf};

/// 转换单个文件
///
/// # 参数
/// - `transpose_json`: 原始移调参数，空串表示不移调
///
/// # 返回
/// 返回写出的文件列表
pub fn convert_file(
    engine: &NotationEngine,
    flow: &ConvertFlow,
    input: &Path,
    output: &Path,
    transpose_json: &str,
) -> Result<Vec<PathBuf>> {
    let mut job = JobDescriptor::new(input, output);
    if !transpose_json.trim().is_empty() {
        job = job.with_transpose(TransposeSpec::Raw(transpose_json.to_string()));
    }

    flow.run(engine, &job, &JobCtx::single())
}

/// 按声部导出，输出文件名中的 `*` 替换为声部名
pub fn convert_score_parts(
    engine: &NotationEngine,
    flow: &ConvertFlow,
    input: &Path,
    output: &Path,
) -> Result<Vec<PathBuf>> {
    flow.run_parts(engine, input, output, &JobCtx::single())
}
