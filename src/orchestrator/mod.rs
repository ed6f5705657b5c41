//! 编排层（Orchestration Layer）
//!
//! ## 模块划分
//!
//! ### `batch_processor` - 批量转换
//! - 解析批处理任务文件（只解析一次）
//! - 按顺序逐个转换，报告进度
//! - 单个任务失败不中断批处理，最后汇总为一个错误
//!
//! ### `file_processor` - 单文件转换入口
//! - 携带原始移调 JSON 的单文件转换
//! - 单独的按声部导出
//!
//! ### `plan` - 试运行
//! - 只解析任务文件并选择策略，不调用引擎
//!
//! ## 层次关系
//!
//! ```text
//! batch_processor (处理 Vec<JobDescriptor>)
//!     ↓
//! workflow::ConvertFlow (处理单个任务)
//!     ↓
//! services (能力层：writer registry / output / failure report)
//!     ↓
//! infrastructure (基础设施：NotationEngine)
//! ```

pub mod batch_processor;
pub mod file_processor;
pub mod plan;
pub mod progress;

pub use batch_processor::BatchConverter;
pub use file_processor::{convert_file, convert_score_parts};
pub use plan::{plan_batch, PlannedJob};
pub use progress::{LogProgress, ProgressSink};
