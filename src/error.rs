//! 转换错误类型
//!
//! 每一种错误都保留协作方（引擎、写入器、扩展）返回的原始信息，
//! 批处理模式下再汇总为 `BatchConvert`。

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// 转换过程中的错误
#[derive(Debug, Error)]
pub enum ConvertError {
    /// 批处理任务文件无法打开
    #[error("无法打开批处理任务文件 ({}): {source}", path.display())]
    FileOpen {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// 批处理任务文件不是合法的 JSON 数组
    #[error("批处理任务文件解析失败: {message}")]
    MalformedDocument { message: String },

    /// 移调参数解析失败
    #[error("移调参数无效: {message}")]
    InvalidTransposeOptions { message: String },

    /// 没有为该后缀注册写入器
    #[error("未知的输出格式: {suffix:?}")]
    UnknownFormat { suffix: String },

    /// 加载输入工程失败
    #[error("加载输入文件失败 ({}): {message}", path.display())]
    InputLoad { path: PathBuf, message: String },

    /// 应用移调失败
    #[error("应用移调失败: {message}")]
    TransposeApply { message: String },

    /// 输出文件无法打开
    #[error("无法打开输出文件 ({}): {source}", path.display())]
    OutputOpen {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// 写入输出文件失败
    #[error("写入输出文件失败 ({}): {message}", path.display())]
    OutputWrite { path: PathBuf, message: String },

    /// 分声部导出不支持该格式
    #[error("分声部导出不支持格式: {suffix:?}")]
    UnsupportedPartFormat { suffix: String },

    /// 扩展执行失败
    #[error("扩展执行失败 ({uri}): {message}")]
    Extension { uri: String, message: String },

    /// 批处理中有任务失败，每行一个任务
    #[error("{}", errors.join("\n"))]
    BatchConvert { errors: Vec<String> },
}

impl ConvertError {
    /// 创建输出写入错误
    pub fn output_write(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        ConvertError::OutputWrite {
            path: path.into(),
            message: message.into(),
        }
    }

    /// 批处理汇总错误中的单条失败信息
    pub fn batch_errors(&self) -> &[String] {
        match self {
            ConvertError::BatchConvert { errors } => errors,
            _ => &[],
        }
    }
}

/// 转换结果类型
pub type Result<T, E = ConvertError> = std::result::Result<T, E>;
