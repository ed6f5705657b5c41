//! 单文件转换流程 - 流程层
//!
//! 核心职责：定义"一个任务"的完整转换流程
//!
//! 流程顺序：
//! 1. 解析移调参数（如果还是原始 JSON）
//! 2. 查找写入器、选择策略（加载前完成，尽早失败）
//! 3. 加载工程 → 音色配置 → 移调
//! 4. 登记当前工程 → 按策略写出

use crate::error::{ConvertError, Result};
use crate::infrastructure::{NotationEngine, NotationProject, NotationWriter};
use crate::models::job::{JobDescriptor, TransposeSpec};
use crate::models::transpose::{parse_transpose_options, TransposeOptions};
use crate::services::output_service::{self, PartFormat};
use crate::services::WriterRegistry;
use crate::utils::path::suffix;
use crate::workflow::job_ctx::JobCtx;
use crate::workflow::strategy::ConversionStrategy;
use std::path::{Path, PathBuf};
use tracing::{error, info};

/// 所有任务共用的转换参数
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConvertOptions {
    /// 样式文件
    pub style_path: Option<PathBuf>,
    /// 强制加载不兼容的文件
    pub force_mode: bool,
    /// 音色配置名
    pub sound_profile: Option<String>,
    /// 转换前执行的扩展
    pub extension_uri: Option<String>,
}

/// 单文件转换流程
///
/// - 持有写入器注册表和转换参数
/// - 不持有引擎，每次运行时传入
pub struct ConvertFlow {
    writers: WriterRegistry,
    options: ConvertOptions,
}

impl ConvertFlow {
    pub fn new(writers: WriterRegistry, options: ConvertOptions) -> Self {
        Self { writers, options }
    }

    pub fn options(&self) -> &ConvertOptions {
        &self.options
    }

    pub fn writers(&self) -> &WriterRegistry {
        &self.writers
    }

    /// 转换一个任务，返回写出的文件
    pub fn run(
        &self,
        engine: &NotationEngine,
        job: &JobDescriptor,
        ctx: &JobCtx,
    ) -> Result<Vec<PathBuf>> {
        info!("{} {}", ctx, job);

        let transpose = resolve_transpose(job.transpose.as_ref())?;

        let writer = self.resolve_writer(&job.output)?;
        let strategy =
            ConversionStrategy::select(&job.output, self.options.extension_uri.as_deref())?;

        let mut project = self.load_project(engine, &job.input, ctx)?;

        if let Some(profile) = self.options.sound_profile.as_deref() {
            project.clear_track_input_params();
            project.set_active_sound_profile(profile);
        }

        if let Some(options) = &transpose {
            project
                .master_notation_mut()
                .transpose(options)
                .map_err(|e| {
                    error!("{} 应用移调失败: {}", ctx, e);
                    ConvertError::TransposeApply { message: e.message }
                })?;
        }

        let current_project = engine.current_project();
        let _current = current_project.enter(&job.input);

        info!("{} 🎼 {}", ctx, strategy);
        let written = dispatch(engine, writer, &mut *project, &strategy, &job.output);
        match &written {
            Ok(files) => info!("{} ✓ 已写出 {} 个文件", ctx, files.len()),
            Err(e) => error!("{} ❌ {} 失败: {}", ctx, strategy, e),
        }
        written
    }

    /// 只做按声部导出（不做音色和移调处理）
    pub fn run_parts(
        &self,
        engine: &NotationEngine,
        input: &Path,
        output: &Path,
        ctx: &JobCtx,
    ) -> Result<Vec<PathBuf>> {
        info!("{} 按声部导出 in: {}, out: {}", ctx, input.display(), output.display());

        let writer = self.resolve_writer(output)?;
        let suffix = suffix(output);
        let format = PartFormat::from_suffix(&suffix)
            .ok_or(ConvertError::UnsupportedPartFormat { suffix })?;

        let project = self.load_project(engine, input, ctx)?;

        let current_project = engine.current_project();
        let _current = current_project.enter(input);

        output_service::write_parts(writer, project.master_notation(), output, format)
    }

    fn resolve_writer(&self, output: &Path) -> Result<&dyn NotationWriter> {
        let suffix = suffix(output);
        self.writers
            .writer(&suffix)
            .ok_or(ConvertError::UnknownFormat { suffix })
    }

    fn load_project(
        &self,
        engine: &NotationEngine,
        input: &Path,
        ctx: &JobCtx,
    ) -> Result<Box<dyn NotationProject>> {
        let mut project = engine.new_project();
        project
            .load(
                input,
                self.options.style_path.as_deref(),
                self.options.force_mode,
            )
            .map_err(|e| {
                error!("{} 加载失败: {}, 路径: {}", ctx, e, input.display());
                ConvertError::InputLoad {
                    path: input.to_path_buf(),
                    message: e.message,
                }
            })?;
        Ok(project)
    }
}

fn resolve_transpose(transpose: Option<&TransposeSpec>) -> Result<Option<TransposeOptions>> {
    match transpose {
        None => Ok(None),
        Some(TransposeSpec::Parsed(options)) => Ok(Some(options.clone())),
        Some(TransposeSpec::Raw(json)) if json.trim().is_empty() => Ok(None),
        Some(TransposeSpec::Raw(json)) => parse_transpose_options(json).map(Some),
    }
}

fn dispatch(
    engine: &NotationEngine,
    writer: &dyn NotationWriter,
    project: &mut dyn NotationProject,
    strategy: &ConversionStrategy,
    out: &Path,
) -> Result<Vec<PathBuf>> {
    match strategy {
        ConversionStrategy::PerPart(format) => {
            output_service::write_parts(writer, project.master_notation(), out, *format)
        }
        ConversionStrategy::ExtensionDriven(uri) => {
            // 扩展可能修改乐谱，必须先于写入
            engine.perform_extension(uri, project)?;
            output_service::write_full_notation(writer, project.master_notation().notation(), out)
        }
        ConversionStrategy::NativeSave => {
            project
                .save(out)
                .map_err(|e| ConvertError::output_write(out, e.message))?;
            Ok(vec![out.to_path_buf()])
        }
        ConversionStrategy::PageByPage => {
            output_service::write_page_by_page(writer, project.master_notation().notation(), out)
        }
        ConversionStrategy::Full => {
            output_service::write_full_notation(writer, project.master_notation().notation(), out)
        }
    }
}
