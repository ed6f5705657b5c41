//! 记谱引擎接口 - 基础设施层
//!
//! 乐谱的加载、排版、移调和各格式写入都由引擎实现，本 crate 只通过这里的
//! trait 调用它们。`NotationEngine` 持有工程工厂、扩展执行器和“当前工程”槽位。

use crate::error::{ConvertError, Result};
use crate::infrastructure::current_project::CurrentProjectSlot;
use crate::infrastructure::output_file::OutputFile;
use crate::models::transpose::TransposeOptions;
use std::path::Path;
use std::rc::Rc;
use thiserror::Error;

/// 引擎返回的错误，只携带原始信息
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct EngineError {
    pub message: String,
}

impl EngineError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

pub type EngineResult<T> = std::result::Result<T, EngineError>;

/// 一份可写出的乐谱视图（总谱或某个声部）
pub trait Notation {
    /// 名称，声部导出时用来替换文件名中的 `*`
    fn name(&self) -> String;
    /// 排版后的页数
    fn page_count(&self) -> usize;
}

/// 总谱及其声部
pub trait MasterNotation {
    fn notation(&self) -> &dyn Notation;
    fn excerpts(&self) -> Vec<&dyn Notation>;
    fn transpose(&mut self, options: &TransposeOptions) -> EngineResult<()>;
}

/// 一个记谱工程
pub trait NotationProject {
    fn load(&mut self, path: &Path, style_path: Option<&Path>, force_mode: bool)
        -> EngineResult<()>;
    /// 以引擎原生格式保存
    fn save(&mut self, path: &Path) -> EngineResult<()>;
    fn clear_track_input_params(&mut self);
    fn set_active_sound_profile(&mut self, profile: &str);
    fn master_notation(&self) -> &dyn MasterNotation;
    fn master_notation_mut(&mut self) -> &mut dyn MasterNotation;
}

/// 工程工厂
pub trait ProjectCreator {
    fn new_project(&self) -> Box<dyn NotationProject>;
}

/// 写入参数
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WriterOptions {
    /// 逐页导出时的页码（从 0 开始）
    pub page_number: Option<usize>,
    /// 按声部导出
    pub per_part: bool,
}

/// 某一输出格式的写入器
pub trait NotationWriter {
    fn write(
        &self,
        notation: &dyn Notation,
        out: &mut OutputFile,
        options: &WriterOptions,
    ) -> EngineResult<()>;
}

/// 扩展执行器，执行时可以修改乐谱
pub trait ExtensionRunner {
    fn perform(&self, uri: &str, project: &mut dyn NotationProject) -> EngineResult<()>;
}

/// 引擎协作方的集合
pub struct NotationEngine {
    creator: Box<dyn ProjectCreator>,
    extensions: Option<Box<dyn ExtensionRunner>>,
    current_project: Rc<CurrentProjectSlot>,
}

impl NotationEngine {
    pub fn new(creator: Box<dyn ProjectCreator>) -> Self {
        Self {
            creator,
            extensions: None,
            current_project: Rc::new(CurrentProjectSlot::default()),
        }
    }

    pub fn with_extensions(mut self, extensions: Box<dyn ExtensionRunner>) -> Self {
        self.extensions = Some(extensions);
        self
    }

    /// 创建一个空工程
    pub fn new_project(&self) -> Box<dyn NotationProject> {
        self.creator.new_project()
    }

    /// “当前工程”槽位，可以与其他协作方共享
    pub fn current_project(&self) -> Rc<CurrentProjectSlot> {
        Rc::clone(&self.current_project)
    }

    /// 执行扩展
    pub fn perform_extension(&self, uri: &str, project: &mut dyn NotationProject) -> Result<()> {
        let runner = self
            .extensions
            .as_ref()
            .ok_or_else(|| ConvertError::Extension {
                uri: uri.to_string(),
                message: "未配置扩展执行器".to_string(),
            })?;

        runner
            .perform(uri, project)
            .map_err(|e| ConvertError::Extension {
                uri: uri.to_string(),
                message: e.message,
            })
    }
}
