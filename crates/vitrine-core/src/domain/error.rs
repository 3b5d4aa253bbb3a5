//! Domain-level error taxonomy for vitrine.

use std::path::PathBuf;

/// Errors produced by content-model construction and validation.
#[derive(Debug, thiserror::Error)]
pub enum ContentError {
    #[error("skill '{name}' has level {level}, outside 0-100")]
    LevelOutOfRange { name: String, level: u8 },

    #[error("{entity} has an empty {field}")]
    EmptyField {
        entity: &'static str,
        field: &'static str,
    },
}

/// Vitrine errors.
#[derive(Debug, thiserror::Error)]
pub enum VitrineError {
    #[error("invalid content: {0}")]
    Content(#[from] ContentError),

    #[error("content check failed: {findings} finding(s) under strict mode")]
    StrictCheckFailed { findings: usize },

    #[error("invalid profile file {path:?}: {reason}")]
    InvalidProfile { path: PathBuf, reason: String },

    #[error("config error: {0}")]
    Config(#[from] toml::de::Error),

    #[error("asset not found: {0:?}")]
    AssetNotFound(PathBuf),

    #[error("refusing to clean {0:?}: directory does not look like a generated bundle")]
    NotABundle(PathBuf),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for vitrine operations.
pub type Result<T> = std::result::Result<T, VitrineError>;
