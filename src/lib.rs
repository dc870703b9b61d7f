// src/lib.rs

pub mod config;
pub mod core;
pub mod error;
pub mod learning;

pub use crate::config::ProviderConfig;
pub use crate::core::engine::AutocompleteProvider;
pub use crate::core::types::{Candidate, Confidence};
pub use crate::error::AutocompleteError;
