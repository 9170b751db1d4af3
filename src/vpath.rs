//! Virtual path translation
//!
//! Bidirectional mapping between virtual paths rooted at `/` and real paths
//! beneath the configured base directory. Translation is purely lexical: the
//! base prefix is joined with the virtual components, never resolved against
//! the filesystem, so every real path textually starts with the base
//! directory.

use std::path::{Component, Path, PathBuf};

use crate::error::FsError;

/// Maps virtual paths to real paths under one base directory and back.
pub struct PathTranslator {
    base: PathBuf,
}

impl PathTranslator {
    pub fn new(base: impl Into<PathBuf>) -> Self {
        PathTranslator { base: base.into() }
    }

    /// The configured base directory all real paths are confined beneath.
    pub fn base(&self) -> &Path {
        self.base.as_path()
    }

    /// Joins the base directory with the virtual path's components.
    ///
    /// Root and `.` components are dropped. Parent-traversal components are
    /// rejected so a virtual path can never address an entry above the base
    /// directory.
    pub fn to_real(&self, virtual_path: &Path) -> Result<PathBuf, FsError> {
        let mut real = self.base.clone();
        for component in virtual_path.components() {
            match component {
                Component::RootDir | Component::CurDir => {}
                Component::Normal(name) => real.push(name),
                Component::ParentDir => {
                    return Err(FsError::InvalidPath(format!(
                        "{}: parent traversal not allowed",
                        virtual_path.display()
                    )));
                }
                Component::Prefix(_) => {
                    return Err(FsError::InvalidPath(format!(
                        "{}: path prefix not allowed",
                        virtual_path.display()
                    )));
                }
            }
        }
        Ok(real)
    }

    /// Strips the base-directory prefix from a real path and re-roots the
    /// remainder at `/`. Fails for real paths that are not descendants of
    /// the base directory.
    pub fn to_virtual(&self, real_path: &Path) -> Result<PathBuf, FsError> {
        let relative = real_path.strip_prefix(&self.base).map_err(|_| {
            FsError::InvalidPath(format!(
                "{}: not under base directory {}",
                real_path.display(),
                self.base.display()
            ))
        })?;
        Ok(Path::new("/").join(relative))
    }
}
