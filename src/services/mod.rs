pub mod failure_writer;
pub mod output_service;
pub mod writer_registry;

pub use failure_writer::FailureWriter;
pub use output_service::{PartFormat, PART_WILDCARD};
pub use writer_registry::WriterRegistry;
