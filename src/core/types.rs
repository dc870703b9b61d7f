// src/core/types.rs
use serde::{Deserialize, Serialize};
use std::fmt;

/// Number of times a word was observed during training.
/// Used as the ranking score, not a probability.
pub type Confidence = u64;

/// A completed word paired with its confidence.
///
/// Both fields are independently optional so partially built fixtures
/// (no word, no confidence, or either alone) stay representable.
/// Candidates produced by a query always carry both.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Candidate {
    word: Option<String>,
    confidence: Option<Confidence>,
}

impl Candidate {
    pub fn new(word: impl Into<String>, confidence: Confidence) -> Self {
        Self { word: Some(word.into()), confidence: Some(confidence) }
    }

    pub fn with_word(word: impl Into<String>) -> Self {
        Self { word: Some(word.into()), confidence: None }
    }

    pub fn with_confidence(confidence: Confidence) -> Self {
        Self { word: None, confidence: Some(confidence) }
    }

    pub fn word(&self) -> Option<&str> {
        self.word.as_deref()
    }

    pub fn confidence(&self) -> Option<Confidence> {
        self.confidence
    }
}

impl fmt::Display for Candidate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let word = self.word.as_deref().unwrap_or("-");
        match self.confidence {
            Some(c) => write!(f, "{} ({})", word, c),
            None => write!(f, "{} (-)", word),
        }
    }
}
