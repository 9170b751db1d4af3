//! Error types
//!
//! Defines the error taxonomy raised synchronously by filesystem operations.

use std::fmt;
use std::io;

/// Errors raised synchronously by filesystem operations.
///
/// Only caller-input constraint violations are raised this way. Policy
/// failures and best-effort deletion faults flow back as `Outcome` values
/// so batch-style callers can inspect them without unwinding.
#[derive(Debug)]
pub enum FsError {
    /// Addressed entry does not exist where existence was required.
    NotFound(String),
    /// Target exists and the caller did not request overwrite.
    AlreadyExists(String),
    /// Virtual path could not be translated (parent traversal, or a real
    /// path that is not a descendant of the base directory).
    InvalidPath(String),
    /// Unexpected fault from the underlying storage.
    Io(io::Error),
}

impl fmt::Display for FsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FsError::NotFound(p) => write!(f, "No such file or directory: {}", p),
            FsError::AlreadyExists(p) => write!(f, "Target already exists: {}", p),
            FsError::InvalidPath(p) => write!(f, "Invalid path: {}", p),
            FsError::Io(e) => write!(f, "I/O error: {}", e),
        }
    }
}

impl std::error::Error for FsError {}

impl From<io::Error> for FsError {
    fn from(error: io::Error) -> Self {
        FsError::Io(error)
    }
}
