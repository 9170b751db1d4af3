pub mod config;
pub mod error;
pub mod fs;
pub mod glob;
pub mod outcome;
pub mod vpath;

pub use config::VfsConfig;
pub use error::FsError;
pub use fs::{FileSystem, FileType, LocalFileSystem};
pub use outcome::{FailureCache, Outcome};
pub use vpath::PathTranslator;
