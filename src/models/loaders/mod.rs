pub mod batch_job_loader;

pub use batch_job_loader::{load_batch_job, parse_batch_job};
