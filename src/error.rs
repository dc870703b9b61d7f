// src/error.rs
use std::path::PathBuf;

/// Failures at the edges of the crate: reading passages and config files,
/// and encoding output. Training and querying themselves never fail.
#[derive(Debug, thiserror::Error)]
pub enum AutocompleteError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("error reading {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid config {path}: {source}")]
    Config {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, AutocompleteError>;
