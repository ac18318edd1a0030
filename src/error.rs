//! Error Types
//!
//! Library-level error type. Composition itself never fails; these errors
//! come from parsing user input (documents, preferences, config patches)
//! and from the I/O performed by the export and watch collaborators.

use thiserror::Error;

/// Errors raised by readmecraft library code
#[derive(Debug, Error)]
pub enum ReadmeError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Watch error: {0}")]
    Watch(#[from] notify::Error),

    #[error("Unknown language: {0}")]
    UnknownLanguage(String),

    #[error("Unknown theme: {0}")]
    UnknownTheme(String),

    #[error("Unknown block type: {0}")]
    UnknownBlockType(String),

    #[error("Invalid config for block '{id}': {message}")]
    InvalidConfig { id: String, message: String },

    #[error("{0}")]
    Other(String),
}

/// Result alias for library operations
pub type Result<T> = std::result::Result<T, ReadmeError>;
