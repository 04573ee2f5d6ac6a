//! Error types for Shelf.
//!
//! Uses `thiserror` for ergonomic error definitions.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised by the record store.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("failed to decode library at {path}: {source}")]
    Decode {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("IO error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to encode library: {0}")]
    Encode(#[from] serde_json::Error),

    #[error("cannot store non-finite rating {rating} for '{title}'")]
    NonFiniteRating { title: String, rating: f64 },
}

impl StoreError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// True if the stored content could not be parsed.
    pub fn is_decode(&self) -> bool {
        matches!(self, Self::Decode { .. })
    }
}

/// Result type alias for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// Errors raised by configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("could not determine a home directory for configuration")]
    DirectoryNotFound,

    #[error("failed to read {path}: {reason}")]
    ReadFailed { path: PathBuf, reason: String },

    #[error("invalid settings format: {0}")]
    InvalidFormat(String),
}

/// Result type alias for configuration operations.
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Errors surfaced by command handlers.
#[derive(Error, Debug)]
pub enum CliError {
    #[error(transparent)]
    Store(#[from] StoreError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("no book titled '{0}'")]
    NotFound(String),

    #[error("input ended before a value was entered")]
    Cancelled,

    #[error("{0}")]
    Other(String),
}

/// Result type alias for command handlers.
pub type CliResult<T> = Result<T, CliError>;
