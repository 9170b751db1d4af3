//! Error handlers
//!
//! Provides logging and classification helpers for filesystem errors.

use crate::error::types::FsError;
use log::error;

/// Log a filesystem error
pub fn handle_error(err: &FsError) {
    error!("Filesystem error ({}): {}", error_label(err), err);
}

/// Short classification label for an error, used in logs and outcome reports
pub fn error_label(err: &FsError) -> &'static str {
    match err {
        FsError::NotFound(_) => "not_found",
        FsError::AlreadyExists(_) => "already_exists",
        FsError::InvalidPath(_) => "invalid_path",
        FsError::Io(_) => "io",
    }
}
