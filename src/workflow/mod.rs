pub mod convert_flow;
pub mod job_ctx;
pub mod strategy;

pub use convert_flow::{ConvertFlow, ConvertOptions};
pub use job_ctx::JobCtx;
pub use strategy::ConversionStrategy;
