pub mod current_project;
pub mod engine;
pub mod output_file;

pub use current_project::{CurrentProjectGuard, CurrentProjectSlot};
pub use engine::{
    EngineError, EngineResult, ExtensionRunner, MasterNotation, Notation, NotationEngine,
    NotationProject, NotationWriter, ProjectCreator, WriterOptions,
};
pub use output_file::OutputFile;
