//! Operation outcomes
//!
//! Uniform result value returned by every mutating filesystem operation,
//! plus the failure-reason cache that dedupes repeated policy failures.

use std::collections::HashMap;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, PoisonError};

/// Uniform result of a mutating operation.
///
/// Successful outcomes always carry the affected path; failure outcomes
/// never do. `cause` is human-readable and always present on failure.
/// `detail` is present only when the failure originates from an underlying
/// I/O fault, as opposed to a policy violation.
#[derive(Debug)]
pub struct Outcome {
    successful: bool,
    path: Option<PathBuf>,
    cause: Option<Arc<str>>,
    detail: Option<io::Error>,
}

impl Outcome {
    /// Constructs a successful outcome carrying the given path.
    pub fn success(path: impl Into<PathBuf>) -> Self {
        Outcome {
            successful: true,
            path: Some(path.into()),
            cause: None,
            detail: None,
        }
    }

    /// Constructs a fresh failure outcome from an underlying I/O fault.
    ///
    /// Carries the error's message as cause and the error itself as detail.
    /// Never cached: each call wraps a unique underlying error.
    pub fn error(err: io::Error) -> Self {
        Outcome {
            successful: false,
            path: None,
            cause: Some(err.to_string().into()),
            detail: Some(err),
        }
    }

    pub fn successful(&self) -> bool {
        self.successful
    }

    /// Path affected by the operation; present only on success.
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Human-readable failure reason; present on any unsuccessful outcome.
    pub fn cause(&self) -> Option<&str> {
        self.cause.as_deref()
    }

    /// Underlying I/O fault, when the failure was not a policy violation.
    pub fn detail(&self) -> Option<&io::Error> {
        self.detail.as_ref()
    }
}

/// Cache of failure reasons keyed by reason string.
///
/// Repeated policy violations (e.g. "create directory failure") share one
/// interned cause allocation. Owned by the filesystem instance, so test
/// isolation comes for free. Strictly an allocation optimization: callers
/// must not rely on identity semantics.
#[derive(Debug, Default)]
pub struct FailureCache {
    causes: Mutex<HashMap<String, Arc<str>>>,
}

impl FailureCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a failure outcome for the given reason, reusing the interned
    /// cause string for reasons seen before. No path, no error detail.
    pub fn failure(&self, reason: &str) -> Outcome {
        let mut causes = self
            .causes
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        let cause = causes
            .entry(reason.to_string())
            .or_insert_with(|| Arc::from(reason))
            .clone();
        Outcome {
            successful: false,
            path: None,
            cause: Some(cause),
            detail: None,
        }
    }
}
