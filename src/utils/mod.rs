pub mod logging;
pub mod path;

pub use path::{complete_basename, dir_path, from_native_separators, suffix};
