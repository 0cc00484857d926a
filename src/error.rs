//! Error types for the crate's edges: configuration, storage and rendering.
//!
//! Theme negotiation itself never fails; these errors only come from
//! loading files and producing HTML.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using the crate [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("template error: {0}")]
    Template(#[from] minijinja::Error),

    #[error("failed to read configuration file {path}: {source}")]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("storage file {path} is malformed: {message}")]
    StorageCorrupt { path: PathBuf, message: String },

    #[error("invalid {kind} '{value}' (expected one of: {expected})")]
    InvalidValue {
        kind: &'static str,
        value: String,
        expected: &'static str,
    },
}
