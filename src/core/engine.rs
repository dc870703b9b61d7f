use crate::config::ProviderConfig;
use crate::core::normalize::fragment_token;
use crate::core::trie::{get_candidates, Memory};
use crate::core::types::Candidate;
use crate::error::{AutocompleteError, Result};
use crate::learning::{Trainer, TrainingReport};
use std::cmp::Reverse;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

// The provider owns the memory outright; all mutation goes through `&mut self`.
// Wrap it in a Mutex if it ever needs to be shared across threads.
#[derive(Debug, Default)]
pub struct AutocompleteProvider {
    memory: Memory,
    trainer: Trainer,
    limit: Option<usize>,
}

impl AutocompleteProvider {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: &ProviderConfig) -> Self {
        Self { limit: config.limit, ..Self::default() }
    }

    pub fn memory(&self) -> &Memory {
        &self.memory
    }

    /// Learns every word in `passage`. Training the same passage again adds
    /// the same counts again.
    pub fn train(&mut self, passage: &str) -> TrainingReport {
        self.trainer.learn(&mut self.memory, passage)
    }

    /// Trains on a reader line by line.
    pub fn train_reader<R: BufRead>(&mut self, reader: R) -> Result<TrainingReport> {
        let mut report = TrainingReport::default();
        for line in reader.lines() {
            report.merge(self.train(&line?));
        }
        Ok(report)
    }

    /// Trains on the contents of a text file.
    pub fn train_file(&mut self, path: &Path) -> Result<TrainingReport> {
        let file = File::open(path).map_err(|source| AutocompleteError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let report = self.train_reader(BufReader::new(file))?;
        log::info!(
            "trained on {}: {} tokens, {} new words",
            path.display(),
            report.tokens,
            report.new_words
        );
        Ok(report)
    }

    /// Returns every known completion of `fragment`, most frequent first.
    /// Equal confidences are ordered alphabetically. Unknown or empty
    /// fragments give an empty list.
    pub fn get_words(&self, fragment: &str) -> Vec<Candidate> {
        let Some(prefix) = fragment_token(fragment) else {
            return vec![];
        };

        let Some(bottom) = self.memory.get_bottom_node(&prefix) else {
            log::trace!("no memory of fragment '{}'", prefix);
            return vec![];
        };

        let mut candidates = get_candidates(&prefix, bottom.children());
        if bottom.confidence() > 0 {
            candidates.push(Candidate::new(prefix, bottom.confidence()));
        }

        // Stable sort over an alphabetical base keeps ties alphabetical.
        candidates.sort_by(|a, b| a.word().cmp(&b.word()));
        candidates.sort_by_key(|c| Reverse(c.confidence()));

        if let Some(limit) = self.limit {
            candidates.truncate(limit);
        }
        candidates
    }
}
