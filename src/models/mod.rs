pub mod job;
pub mod loaders;
pub mod transpose;

pub use job::{BatchJob, JobDescriptor, TransposeSpec};
pub use loaders::{load_batch_job, parse_batch_job};
pub use transpose::{
    parse_transpose_options, parse_transpose_value, TransposeDirection, TransposeMode,
    TransposeOptions,
};
