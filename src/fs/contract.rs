//! Filesystem contract
//!
//! The backend-agnostic operation set. Every operation addresses entries by
//! virtual path; convenience forms are provided methods composing the
//! canonical operations, never reimplemented per backend.

use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use crate::error::FsError;
use crate::outcome::Outcome;

/// Entry kind filter used by the search operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileType {
    All,
    File,
    Dir,
}

/// The abstract operation set any backend must implement.
///
/// All operations are synchronous and blocking, take virtual paths, and
/// offer no cross-call atomicity: check-then-act sequences such as the
/// `cover = false` existence check race against concurrent callers, with the
/// final state decided by the underlying storage primitive. Callers needing
/// mutual exclusion must serialize externally.
pub trait FileSystem {
    /// Lists the children of a directory as virtual paths.
    ///
    /// Raises `NotFound` if the path does not exist. A plain file yields a
    /// single-element list containing the path unchanged. With `all = false`,
    /// entries hidden by host convention are excluded. Iteration order is
    /// backend dependent; compare as sets.
    fn list(&self, path: &Path, all: bool) -> Result<Vec<PathBuf>, FsError>;

    /// Returns the real-path handle for a virtual path.
    ///
    /// Existence is not checked; only translation itself can fail.
    fn get(&self, path: &Path) -> Result<PathBuf, FsError>;

    /// Creates a directory and all missing ancestors.
    ///
    /// Idempotent: an already existing directory is a success.
    fn mkdirs(&self, path: &Path) -> Result<Outcome, FsError>;

    /// Deletes the target entry.
    ///
    /// Recursive mode removes the whole subtree deepest-first, swallowing
    /// per-entry failures; the outcome reports whether the traversal itself
    /// completed. Non-recursive mode deletes exactly the target, treats a
    /// missing target as a no-op success, and leaves a non-empty directory
    /// untouched.
    fn remove(&self, path: &Path, recursive: bool) -> Result<Outcome, FsError>;

    /// Streams all bytes from `source` into the target file.
    ///
    /// Raises `AlreadyExists` when the target exists and `cover` is false;
    /// otherwise creates missing parent directories and writes the content.
    /// The caller owns the source stream's lifetime.
    fn save_stream(
        &self,
        source: &mut dyn Read,
        target: &Path,
        cover: bool,
    ) -> Result<Outcome, FsError>;

    /// Copies `source` to `target`.
    ///
    /// The target is validated first (`AlreadyExists` / parent creation),
    /// then the source (`NotFound`). A pre-existing, non-overwritable target
    /// is therefore reported even when the source is also missing.
    fn copy(&self, source: &Path, target: &Path, cover: bool) -> Result<Outcome, FsError>;

    /// Moves `source` to `target` by renaming the underlying entry.
    ///
    /// Same target-then-source validation precedence as `copy`.
    fn rename(&self, source: &Path, target: &Path, cover: bool) -> Result<Outcome, FsError>;

    /// Recursively searches `base` for entries whose kind matches
    /// `file_type` and whose name satisfies the pattern.
    ///
    /// `level < 0` means unlimited depth, `0` only the base entry itself,
    /// `n` the base plus up to `n` levels of descendants. A missing base
    /// yields an empty result; non-fatal walk errors are logged and skipped.
    fn search(
        &self,
        base: &Path,
        name: &str,
        file_type: FileType,
        level: i32,
    ) -> Result<Vec<PathBuf>, FsError>;

    /// Lists visible children only.
    fn ls(&self, path: &Path) -> Result<Vec<PathBuf>, FsError> {
        self.list(path, false)
    }

    /// Deletes the target and everything beneath it.
    fn rm(&self, path: &Path) -> Result<Outcome, FsError> {
        self.remove(path, true)
    }

    /// Streams `source` into the target, refusing to overwrite.
    fn save(&self, source: &mut dyn Read, target: &Path) -> Result<Outcome, FsError> {
        self.save_stream(source, target, false)
    }

    /// Saves a host file into the sandbox.
    ///
    /// Opens the source under scoped acquisition (closed on every exit path)
    /// and delegates to the stream form.
    fn save_file(&self, source: &Path, target: &Path, cover: bool) -> Result<Outcome, FsError> {
        let mut file = fs::File::open(source).map_err(|e| match e.kind() {
            io::ErrorKind::NotFound => FsError::NotFound(source.display().to_string()),
            _ => FsError::Io(e),
        })?;
        self.save_stream(&mut file, target, cover)
    }

    /// Copies `source` to `target`, refusing to overwrite.
    fn cp(&self, source: &Path, target: &Path) -> Result<Outcome, FsError> {
        self.copy(source, target, false)
    }

    /// Moves `source` to `target`, refusing to overwrite.
    fn mv(&self, source: &Path, target: &Path) -> Result<Outcome, FsError> {
        self.rename(source, target, false)
    }

    /// Searches `base` for any entry kind at unlimited depth.
    fn find(&self, base: &Path, name: &str) -> Result<Vec<PathBuf>, FsError> {
        self.search(base, name, FileType::All, -1)
    }
}
