//! 批量转换处理器 - 编排层
//!
//! ## 职责
//!
//! 本模块是批量转换的入口，持有引擎和转换流程。
//!
//! ## 核心功能
//!
//! 1. **任务加载**：解析批处理任务文件，失败则整个批处理不开始
//! 2. **顺序处理**：严格按文件顺序逐个转换，不并发
//! 3. **进度通知**：开始、每个任务、结束各通知一次
//! 4. **错误汇总**：单个任务失败只记录，最后合并成一个错误
//! 5. **失败报告**：可选地把失败列表写入文件
//!
//! ## 设计特点
//!
//! - **资源所有者**：唯一持有 `NotationEngine` 的模块
//! - **向下委托**：委托 `ConvertFlow` 处理单个任务

use crate::config::Config;
use crate::error::{ConvertError, Result};
use crate::infrastructure::NotationEngine;
use crate::models::job::JobDescriptor;
use crate::models::loaders::load_batch_job;
use crate::orchestrator::progress::ProgressSink;
use crate::services::{FailureWriter, WriterRegistry};
use crate::workflow::{ConvertFlow, ConvertOptions, JobCtx};
use std::path::{Path, PathBuf};
use tracing::{error, info, warn};

/// 批量转换器
pub struct BatchConverter {
    engine: NotationEngine,
    flow: ConvertFlow,
    failure_writer: Option<FailureWriter>,
}

impl BatchConverter {
    pub fn new(engine: NotationEngine, writers: WriterRegistry, options: ConvertOptions) -> Self {
        Self {
            engine,
            flow: ConvertFlow::new(writers, options),
            failure_writer: None,
        }
    }

    /// 按配置创建
    pub fn from_config(engine: NotationEngine, writers: WriterRegistry, config: &Config) -> Self {
        let converter = Self::new(engine, writers, config.convert_options());
        match &config.failure_report_file {
            Some(path) => converter.with_failure_report(path),
            None => converter,
        }
    }

    /// 批处理结束后把失败列表写入文件
    pub fn with_failure_report(mut self, path: impl Into<PathBuf>) -> Self {
        self.failure_writer = Some(FailureWriter::with_path(path));
        self
    }

    pub fn engine(&self) -> &NotationEngine {
        &self.engine
    }

    pub fn flow(&self) -> &ConvertFlow {
        &self.flow
    }

    /// 运行批处理任务文件
    pub fn run(&self, job_file: &Path, mut progress: Option<&mut dyn ProgressSink>) -> Result<()> {
        if let Some(p) = progress.as_mut() {
            p.start();
        }

        log_startup(job_file, self.flow.options());

        let result = match load_batch_job(job_file) {
            Ok(jobs) => self.process_all_jobs(&jobs, &mut progress),
            Err(e) => {
                error!("❌ 解析批处理任务文件失败: {}", e);
                Err(e)
            }
        };

        if let Some(p) = progress.as_mut() {
            p.finish(&result);
        }

        result
    }

    /// 转换单个任务（单文件模式，错误直接返回）
    pub fn convert(&self, job: &JobDescriptor) -> Result<Vec<PathBuf>> {
        self.flow.run(&self.engine, job, &JobCtx::single())
    }

    /// 处理所有任务
    fn process_all_jobs(
        &self,
        jobs: &[JobDescriptor],
        progress: &mut Option<&mut dyn ProgressSink>,
    ) -> Result<()> {
        let total = jobs.len();
        if total == 0 {
            warn!("⚠️ 批处理任务文件中没有任务");
        }

        let mut stats = ProcessingStats {
            total,
            ..Default::default()
        };
        let mut errors = Vec::new();

        for (index, job) in jobs.iter().enumerate() {
            let ctx = JobCtx::new(index + 1, total);
            if let Some(p) = progress.as_mut() {
                p.progress(ctx.index, total, &job.input.to_string_lossy());
            }

            match self.flow.run(&self.engine, job, &ctx) {
                Ok(files) => {
                    stats.success += 1;
                    stats.files += files.len();
                }
                Err(e) => {
                    stats.failed += 1;
                    errors.push(format_failure(&e, job));
                }
            }
        }

        print_final_stats(&stats);

        if errors.is_empty() {
            return Ok(());
        }

        if let Some(writer) = &self.failure_writer {
            match writer.write(&errors, total) {
                Ok(()) => info!("失败报告已保存至: {}", writer.report_path().display()),
                Err(e) => warn!("⚠️ 写入失败报告出错: {:#}", e),
            }
        }

        Err(ConvertError::BatchConvert { errors })
    }
}

/// 单个任务失败的记录行
pub fn format_failure(err: &ConvertError, job: &JobDescriptor) -> String {
    format!(
        "failed convert, err: {}, in: {}, out: {}",
        err,
        job.input.display(),
        job.output.display()
    )
}

/// 处理统计
#[derive(Debug, Default)]
struct ProcessingStats {
    success: usize,
    failed: usize,
    total: usize,
    files: usize,
}

// ========== 日志辅助函数 ==========

fn log_startup(job_file: &Path, options: &ConvertOptions) {
    info!("{}", "=".repeat(60));
    info!("🚀 批量转换启动");
    info!("📄 任务文件: {}", job_file.display());
    if let Some(style) = &options.style_path {
        info!("🎨 样式文件: {}", style.display());
    }
    if let Some(profile) = &options.sound_profile {
        info!("🎹 音色配置: {}", profile);
    }
    if let Some(uri) = &options.extension_uri {
        info!("🧩 扩展: {}", uri);
    }
    info!("{}", "=".repeat(60));
}

fn print_final_stats(stats: &ProcessingStats) {
    info!("\n{}", "=".repeat(60));
    info!("📊 全部处理完成统计");
    info!(
        "完成时间: {}",
        chrono::Local::now().format("%Y-%m-%d %H:%M:%S")
    );
    info!("{}", "=".repeat(60));
    info!("✅ 成功: {}/{} (写出 {} 个文件)", stats.success, stats.total, stats.files);
    info!("❌ 失败: {}", stats.failed);
    info!("{}", "=".repeat(60));
}
