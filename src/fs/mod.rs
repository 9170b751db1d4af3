//! Filesystem contract and backends
//!
//! The backend-agnostic operation set and the local-storage backend.

pub mod contract;
pub mod local;

pub use contract::{FileSystem, FileType};
pub use local::LocalFileSystem;
