// src/config.rs
use crate::error::{AutocompleteError, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Provider and start-up settings, loaded from TOML.
///
/// ```toml
/// limit = 5
/// passages = ["corpus/intro.txt", "corpus/notes.txt"]
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ProviderConfig {
    /// Maximum number of candidates a query returns. `None` returns all of them.
    pub limit: Option<usize>,
    /// Text files to train on before answering queries.
    pub passages: Vec<PathBuf>,
}

impl ProviderConfig {
    /// Load and merge config files in order; later files override earlier ones.
    pub fn load_all(paths: &[PathBuf]) -> Result<Self> {
        let mut config = Self::default();
        for path in paths {
            log::info!("loading config: {}", path.display());
            config.merge(read_file(path)?);
        }
        Ok(config)
    }

    /// Merge `src` into self. Set or non-empty values in `src` win.
    pub fn merge(&mut self, src: ProviderConfig) {
        if src.limit.is_some() {
            self.limit = src.limit;
        }
        if !src.passages.is_empty() {
            self.passages = src.passages;
        }
    }
}

fn read_file(path: &Path) -> Result<ProviderConfig> {
    let content = std::fs::read_to_string(path).map_err(|source| AutocompleteError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    toml::from_str(&content).map_err(|source| AutocompleteError::Config {
        path: path.to_path_buf(),
        source,
    })
}
