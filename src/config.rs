//! Configuration
//!
//! Loads sandbox configuration from a TOML file with environment overrides.

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::PathBuf;

/// Sandbox configuration for a local filesystem backend.
#[derive(Debug, Deserialize, Clone)]
pub struct VfsConfig {
    /// Base directory all virtual paths resolve beneath
    pub base_dir: String,

    /// Create the base directory when it does not exist yet
    #[serde(default = "default_create_base_dir")]
    pub create_base_dir: bool,

    /// Buffer size for stream saves, clamped to a minimum of 8 bytes
    #[serde(default = "default_buffer_size")]
    pub buffer_size: usize,
}

fn default_create_base_dir() -> bool {
    true
}

fn default_buffer_size() -> usize {
    8192
}

impl VfsConfig {
    /// Load configuration from `./config.toml` with environment overrides
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from("config")
    }

    /// Load configuration from the named file (extension inferred), letting
    /// `SANDBOX_VFS`-prefixed environment variables override file values
    pub fn load_from(path: &str) -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::with_name(path).required(false))
            .add_source(Environment::with_prefix("SANDBOX_VFS"))
            .build()?;
        let config: VfsConfig = settings.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// Get the base directory as a PathBuf
    pub fn base_dir_path(&self) -> PathBuf {
        PathBuf::from(&self.base_dir)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.base_dir.is_empty() {
            return Err(ConfigError::Message("base_dir cannot be empty".into()));
        }
        if self.buffer_size == 0 {
            return Err(ConfigError::Message(
                "buffer_size must be greater than 0".into(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn loads_file_values_and_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("vfs.toml");
        let mut out = std::fs::File::create(&file).unwrap();
        writeln!(out, "base_dir = \"/srv/sandbox\"").unwrap();
        drop(out);

        let config = VfsConfig::load_from(file.to_str().unwrap()).unwrap();
        assert_eq!(config.base_dir, "/srv/sandbox");
        assert!(config.create_base_dir);
        assert_eq!(config.buffer_size, 8192);
    }

    #[test]
    fn rejects_empty_base_dir() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("vfs.toml");
        std::fs::write(&file, "base_dir = \"\"\n").unwrap();

        assert!(VfsConfig::load_from(file.to_str().unwrap()).is_err());
    }

    #[test]
    fn rejects_zero_buffer_size() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("vfs.toml");
        std::fs::write(&file, "base_dir = \"/srv/sandbox\"\nbuffer_size = 0\n").unwrap();

        assert!(VfsConfig::load_from(file.to_str().unwrap()).is_err());
    }
}
