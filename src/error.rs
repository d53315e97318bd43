//! Error types for tbxmeta
//!
//! Centralized error handling using thiserror.

use std::path::PathBuf;
use thiserror::Error;

/// All error types that can occur in tbxmeta
#[derive(Debug, Error)]
pub enum TbxmetaError {
    /// Descriptor file missing or malformed
    #[error("Descriptor error: {0}")]
    Descriptor(String),

    /// Schema structure is inconsistent (unknown parent tag, duplicate tag)
    #[error("Schema error: {0}")]
    Schema(String),

    /// XML serialization error
    #[error("XML error: {0}")]
    Xml(String),

    /// Failed to write a generated document
    #[error("Failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// YAML deserialization error
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// JSON deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for tbxmeta operations
pub type Result<T> = std::result::Result<T, TbxmetaError>;
