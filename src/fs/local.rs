//! Local backend
//!
//! Implements the filesystem contract against the host's local storage,
//! composing path translation, the failure cache, and name patterns.

use std::fs;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};

use log::{info, warn};
use walkdir::WalkDir;

use crate::config::VfsConfig;
use crate::error::FsError;
use crate::fs::contract::{FileSystem, FileType};
use crate::glob::NamePattern;
use crate::outcome::{FailureCache, Outcome};
use crate::vpath::PathTranslator;

const DEFAULT_BUFFER_SIZE: usize = 8192;

/// Filesystem backend operating against the host's local storage.
///
/// All operations translate virtual paths to real paths beneath the base
/// directory before touching storage, and translate results back.
pub struct LocalFileSystem {
    translator: PathTranslator,
    failures: FailureCache,
    buffer_size: usize,
}

impl LocalFileSystem {
    /// Creates a backend rooted at `base`. The directory is not required to
    /// exist; operations that need it report against it normally.
    pub fn new(base: impl Into<PathBuf>) -> Self {
        LocalFileSystem {
            translator: PathTranslator::new(base),
            failures: FailureCache::new(),
            buffer_size: DEFAULT_BUFFER_SIZE,
        }
    }

    /// Builds a backend from loaded configuration, creating the base
    /// directory first when requested.
    pub fn from_config(config: &VfsConfig) -> Result<Self, FsError> {
        let base = config.base_dir_path();
        if config.create_base_dir && !base.exists() {
            fs::create_dir_all(&base)?;
        }
        let mut backend = Self::new(base);
        backend.buffer_size = config.buffer_size.max(8);
        Ok(backend)
    }

    /// The configured base directory.
    pub fn base(&self) -> &Path {
        self.translator.base()
    }

    /// Validates and resolves a target: an existing target without `cover`
    /// is refused, a fresh target gets its parent directories created.
    fn check_target(&self, target: &Path, cover: bool) -> Result<PathBuf, FsError> {
        let real = self.translator.to_real(target)?;
        if real.exists() {
            if !cover {
                return Err(FsError::AlreadyExists(target.display().to_string()));
            }
        } else if let Some(parent) = real.parent() {
            fs::create_dir_all(parent)?;
        }
        Ok(real)
    }

    /// Validates that a source exists and resolves it.
    fn check_source(&self, source: &Path) -> Result<PathBuf, FsError> {
        let real = self.translator.to_real(source)?;
        if !real.exists() {
            return Err(FsError::NotFound(source.display().to_string()));
        }
        Ok(real)
    }

    fn copy_stream(&self, source: &mut dyn Read, target: &mut fs::File) -> io::Result<u64> {
        let mut buffer = vec![0u8; self.buffer_size.max(8)];
        let mut written = 0u64;
        loop {
            let read = source.read(&mut buffer)?;
            if read == 0 {
                break;
            }
            target.write_all(&buffer[..read])?;
            written += read as u64;
        }
        Ok(written)
    }
}

/// Hidden by host convention: leading-dot file names.
fn is_hidden(name: &std::ffi::OsStr) -> bool {
    name.to_string_lossy().starts_with('.')
}

impl FileSystem for LocalFileSystem {
    fn list(&self, path: &Path, all: bool) -> Result<Vec<PathBuf>, FsError> {
        let real = self.translator.to_real(path)?;
        if !real.exists() {
            return Err(FsError::NotFound(path.display().to_string()));
        }
        if !real.is_dir() {
            // a plain file lists as itself, unchanged
            return Ok(vec![path.to_path_buf()]);
        }
        let mut entries = Vec::new();
        for entry in fs::read_dir(&real)? {
            let entry = entry?;
            if !all && is_hidden(&entry.file_name()) {
                continue;
            }
            entries.push(self.translator.to_virtual(&entry.path())?);
        }
        info!(
            "Listed {} (real: {}) - {} entries",
            path.display(),
            real.display(),
            entries.len()
        );
        Ok(entries)
    }

    fn get(&self, path: &Path) -> Result<PathBuf, FsError> {
        self.translator.to_real(path)
    }

    fn mkdirs(&self, path: &Path) -> Result<Outcome, FsError> {
        let real = self.translator.to_real(path)?;
        if real.is_dir() {
            return Ok(Outcome::success(real));
        }
        match fs::create_dir_all(&real) {
            Ok(()) => {
                info!("Created directory {} (real: {})", path.display(), real.display());
                Ok(Outcome::success(real))
            }
            Err(e) => {
                warn!(
                    "Failed to create directory {} (real: {}): {}",
                    path.display(),
                    real.display(),
                    e
                );
                Ok(self.failures.failure("create directory failure"))
            }
        }
    }

    fn remove(&self, path: &Path, recursive: bool) -> Result<Outcome, FsError> {
        let real = self.translator.to_real(path)?;
        if !recursive {
            let result = if real.is_dir() {
                fs::remove_dir(&real)
            } else {
                fs::remove_file(&real)
            };
            return match result {
                Ok(()) => Ok(Outcome::success(real)),
                // a missing target is an idempotent no-op
                Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(Outcome::success(real)),
                Err(e) => Ok(Outcome::error(e)),
            };
        }
        if !real.exists() {
            return Ok(Outcome::success(real));
        }
        // deepest-first so every descendant goes before its parent;
        // per-entry failures are swallowed and the walk continues
        let mut skipped = 0usize;
        for entry in WalkDir::new(&real).contents_first(true) {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    let fault = e
                        .into_io_error()
                        .unwrap_or_else(|| io::Error::other("filesystem loop detected"));
                    warn!("Aborted recursive delete of {}: {}", path.display(), fault);
                    return Ok(Outcome::error(fault));
                }
            };
            let result = if entry.file_type().is_dir() {
                fs::remove_dir(entry.path())
            } else {
                fs::remove_file(entry.path())
            };
            if let Err(e) = result {
                warn!("Leaving {} behind: {}", entry.path().display(), e);
                skipped += 1;
            }
        }
        if skipped > 0 {
            warn!(
                "Recursive delete of {} left {} entries behind",
                path.display(),
                skipped
            );
        } else {
            info!("Removed {} (real: {})", path.display(), real.display());
        }
        Ok(Outcome::success(real))
    }

    fn save_stream(
        &self,
        source: &mut dyn Read,
        target: &Path,
        cover: bool,
    ) -> Result<Outcome, FsError> {
        let real = self.check_target(target, cover)?;
        let mut file = fs::File::create(&real)?;
        let written = self.copy_stream(source, &mut file)?;
        info!(
            "Saved {} bytes to {} (real: {})",
            written,
            target.display(),
            real.display()
        );
        Ok(Outcome::success(real))
    }

    fn copy(&self, source: &Path, target: &Path, cover: bool) -> Result<Outcome, FsError> {
        // target first: an existing non-coverable target is reported even
        // when the source is also missing
        let real_target = self.check_target(target, cover)?;
        let real_source = self.check_source(source)?;
        fs::copy(&real_source, &real_target)?;
        info!("Copied {} to {}", source.display(), target.display());
        Ok(Outcome::success(real_target))
    }

    fn rename(&self, source: &Path, target: &Path, cover: bool) -> Result<Outcome, FsError> {
        let real_target = self.check_target(target, cover)?;
        let real_source = self.check_source(source)?;
        fs::rename(&real_source, &real_target)?;
        info!("Moved {} to {}", source.display(), target.display());
        Ok(Outcome::success(real_target))
    }

    fn search(
        &self,
        base: &Path,
        name: &str,
        file_type: FileType,
        level: i32,
    ) -> Result<Vec<PathBuf>, FsError> {
        let real_base = self.translator.to_real(base)?;
        let mut matches = Vec::new();
        if !real_base.exists() {
            return Ok(matches);
        }
        let pattern = NamePattern::compile(name);
        let mut walk = WalkDir::new(&real_base);
        if level >= 0 {
            walk = walk.max_depth(level as usize);
        }
        for entry in walk {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    warn!("Skipping unreadable entry under {}: {}", base.display(), e);
                    continue;
                }
            };
            // fresh stat: the entry must still exist at inspection time
            let qualifies = match file_type {
                FileType::All => entry.path().exists(),
                FileType::File => entry.path().is_file(),
                FileType::Dir => entry.path().is_dir(),
            };
            if !qualifies {
                continue;
            }
            if !pattern.matches(&entry.file_name().to_string_lossy()) {
                continue;
            }
            matches.push(self.translator.to_virtual(entry.path())?);
        }
        info!(
            "Search under {} for {:?} matched {} entries",
            base.display(),
            name,
            matches.len()
        );
        Ok(matches)
    }
}
