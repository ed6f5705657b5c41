//! # Score Converter
//!
//! 乐谱文件批量转换：读取批处理任务文件，逐个加载乐谱并按输出格式写出
//!
//! ## 架构设计
//!
//! ### ① 基础设施层（Infrastructure）
//! - `infrastructure/` - 记谱引擎接口，持有工程工厂、扩展执行器和当前工程槽位
//! - `OutputFile` - 单次写入的输出文件
//!
//! ### ② 业务能力层（Services）
//! - `WriterRegistry` - 后缀 → 写入器
//! - `output_service` - 整份 / 逐页 / 按声部写出
//! - `FailureWriter` - 写失败报告
//!
//! ### ③ 流程层（Workflow）
//! - `ConversionStrategy` - 每个任务选择一次的转换策略
//! - `ConvertFlow` - 单个任务的转换流程（加载 → 配置 → 写出）
//!
//! ### ④ 编排层（Orchestration）
//! - `orchestrator/batch_processor` - 批量转换，顺序执行，汇总失败
//! - `orchestrator/file_processor` - 单文件转换入口
//!
//! ## 模块结构

pub mod config;
pub mod error;
pub mod infrastructure;

pub mod models;
pub mod orchestrator;
pub mod services;
pub mod utils;
pub mod workflow;

// 重新导出常用类型
pub use config::Config;
pub use error::{ConvertError, Result};
pub use infrastructure::NotationEngine;
pub use models::{JobDescriptor, TransposeOptions, TransposeSpec};
pub use orchestrator::{BatchConverter, LogProgress, ProgressSink};
pub use services::WriterRegistry;
pub use workflow::{ConversionStrategy, ConvertFlow, ConvertOptions, JobCtx};
