//! Error types for play-history

use std::path::PathBuf;

use thiserror::Error;

/// Main error type for the application
#[derive(Error, Debug)]
pub enum Error {
    #[error("Database error: {0}")]
    Database(#[from] duckdb::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("TOML serialize error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid year: {0}")]
    InvalidYear(String),

    #[error("{kind} not found: {}", .path.display())]
    MissingFile { kind: &'static str, path: PathBuf },
}

/// Result type alias using our Error
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Create a configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create a missing file error
    pub fn missing_file(kind: &'static str, path: impl Into<PathBuf>) -> Self {
        Self::MissingFile {
            kind,
            path: path.into(),
        }
    }
}
