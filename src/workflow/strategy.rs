//! 转换策略选择
//!
//! 每个任务只选择一次，优先级：声部通配符 > 扩展 > 原生保存 > 逐页 > 整份。

use crate::error::{ConvertError, Result};
use crate::services::output_service::{PartFormat, PART_WILDCARD};
use crate::utils::path::{complete_basename, suffix};
use std::fmt::Display;
use std::path::Path;

/// 引擎原生保存格式
pub const NATIVE_SUFFIXES: [&str; 3] = ["mscz", "mscx", "mscs"];

/// 逐页导出的格式
pub const PAGE_SUFFIXES: [&str; 2] = ["png", "svg"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConversionStrategy {
    /// 整份乐谱写入一个文件
    Full,
    /// 每页一个文件
    PageByPage,
    /// 每个声部一份
    PerPart(PartFormat),
    /// 由工程自身保存
    NativeSave,
    /// 先执行扩展再写入
    ExtensionDriven(String),
}

impl ConversionStrategy {
    /// 根据输出路径和扩展选择策略
    pub fn select(out: &Path, extension_uri: Option<&str>) -> Result<Self> {
        let suffix = suffix(out);

        if complete_basename(out).contains(PART_WILDCARD) {
            return PartFormat::from_suffix(&suffix)
                .map(ConversionStrategy::PerPart)
                .ok_or(ConvertError::UnsupportedPartFormat { suffix });
        }

        if let Some(uri) = extension_uri {
            return Ok(ConversionStrategy::ExtensionDriven(uri.to_string()));
        }

        let strategy = if NATIVE_SUFFIXES.contains(&suffix.as_str()) {
            ConversionStrategy::NativeSave
        } else if PAGE_SUFFIXES.contains(&suffix.as_str()) {
            ConversionStrategy::PageByPage
        } else {
            ConversionStrategy::Full
        };
        Ok(strategy)
    }
}

impl Display for ConversionStrategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConversionStrategy::Full => write!(f, "整份导出"),
            ConversionStrategy::PageByPage => write!(f, "逐页导出"),
            ConversionStrategy::PerPart(format) => write!(f, "按声部导出 ({})", format.suffix()),
            ConversionStrategy::NativeSave => write!(f, "原生保存"),
            ConversionStrategy::ExtensionDriven(uri) => write!(f, "扩展导出 ({})", uri),
        }
    }
}
