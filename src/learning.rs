// File: src/learning.rs
use crate::core::normalize::preprocess;
use crate::core::trie::Memory;

/// What a single training call changed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TrainingReport {
    /// Tokens memorized, duplicates included.
    pub tokens: usize,
    /// Tokens seen for the first time.
    pub new_words: usize,
}

impl TrainingReport {
    pub fn merge(&mut self, other: TrainingReport) {
        self.tokens += other.tokens;
        self.new_words += other.new_words;
    }
}

/// Feeds normalized passages into a memory, one token at a time and in order.
#[derive(Debug, Default)]
pub struct Trainer;

impl Trainer {
    pub fn new() -> Self {
        Self
    }

    pub fn learn(&self, memory: &mut Memory, passage: &str) -> TrainingReport {
        let mut report = TrainingReport::default();
        for token in preprocess(passage) {
            if memory.memorize(&token) {
                report.new_words += 1;
            }
            report.tokens += 1;
        }

        log::debug!(
            "trained on {} tokens ({} new words, {} known, {} nodes)",
            report.tokens,
            report.new_words,
            memory.word_count(),
            memory.node_count()
        );
        report
    }
}
