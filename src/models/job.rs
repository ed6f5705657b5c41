//! 转换任务描述

use crate::models::transpose::TransposeOptions;
use std::fmt::Display;
use std::path::PathBuf;

/// 移调参数
///
/// 批处理文件中的 `transpose` 在解析时即被校验；单文件模式下可以先携带原始 JSON，
/// 到转换时再解析。
#[derive(Debug, Clone, PartialEq)]
pub enum TransposeSpec {
    /// 已解析的参数
    Parsed(TransposeOptions),
    /// 尚未解析的 JSON 文本
    Raw(String),
}

/// 单个转换任务：一个输入，一个输出
///
/// 输出文件名中的 `*` 在转换时按声部名展开。
#[derive(Debug, Clone, PartialEq)]
pub struct JobDescriptor {
    /// 输入文件
    pub input: PathBuf,
    /// 输出文件
    pub output: PathBuf,
    /// 可选的移调参数
    pub transpose: Option<TransposeSpec>,
}

impl JobDescriptor {
    pub fn new(input: impl Into<PathBuf>, output: impl Into<PathBuf>) -> Self {
        Self {
            input: input.into(),
            output: output.into(),
            transpose: None,
        }
    }

    pub fn with_transpose(mut self, transpose: TransposeSpec) -> Self {
        self.transpose = Some(transpose);
        self
    }
}

impl Display for JobDescriptor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "in: {}, out: {}",
            self.input.display(),
            self.output.display()
        )
    }
}

/// 按文件顺序排列的任务列表
pub type BatchJob = Vec<JobDescriptor>;
