//! Application settings and paths.
//!
//! Manages XDG-compliant paths for configuration and data.

use crate::error::{ConfigError, ConfigResult};
use crate::storage::WriteMode;
use directories::ProjectDirs;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Application directory paths following XDG Base Directory Specification.
#[derive(Debug, Clone)]
pub struct Paths {
    /// Configuration directory (~/.config/shelf)
    pub config_dir: PathBuf,
    /// Data directory (~/.local/share/shelf)
    pub data_dir: PathBuf,
}

impl Paths {
    /// Resolve paths using XDG directories.
    pub fn new() -> ConfigResult<Self> {
        let project =
            ProjectDirs::from("com", "shelf", "shelf").ok_or(ConfigError::DirectoryNotFound)?;

        Ok(Self {
            config_dir: project.config_dir().to_path_buf(),
            data_dir: project.data_dir().to_path_buf(),
        })
    }

    /// Get the path to the settings file.
    pub fn settings_file(&self) -> PathBuf {
        self.config_dir.join("settings.json")
    }

    /// Get the default path of the library file.
    pub fn library_file(&self) -> PathBuf {
        self.data_dir.join("library.json")
    }
}

/// Application-wide settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AppSettings {
    /// Library file; the XDG data directory is used when unset.
    pub library_file: Option<PathBuf>,
    /// Replace the library file via temp file and rename.
    pub atomic_writes: bool,
    /// Default output format for listings.
    pub default_format: String,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            library_file: None,
            atomic_writes: true,
            default_format: "plain".to_string(),
        }
    }
}

impl AppSettings {
    /// Load settings from the default location.
    pub fn load(paths: &Paths) -> ConfigResult<Self> {
        let file = paths.settings_file();

        if !file.exists() {
            return Ok(Self::default());
        }

        Self::load_from(&file)
    }

    /// Load settings from a specific file.
    pub fn load_from(path: &Path) -> ConfigResult<Self> {
        let content = fs::read_to_string(path).map_err(|e| ConfigError::ReadFailed {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

        serde_json::from_str(&content).map_err(|e| ConfigError::InvalidFormat(e.to_string()))
    }

    /// Library file to use, falling back to the XDG data directory.
    pub fn library_path(&self, paths: &Paths) -> PathBuf {
        self.library_file
            .clone()
            .unwrap_or_else(|| paths.library_file())
    }

    /// Write mode for the library store.
    pub fn write_mode(&self) -> WriteMode {
        WriteMode::from_atomic(self.atomic_writes)
    }
}
