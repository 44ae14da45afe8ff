// Vocabulary artifact — the trained tokenizer's word index.
//
// The training pipeline exports its tokenizer's word_index as a flat JSON
// object mapping token -> positive integer id (id 0 is reserved for
// padding). The file is opaque external state: loaded once, never mutated.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use tracing::debug;

use super::traits::Vocabulary;

/// In-memory word index loaded from `word_index.json`.
pub struct WordIndex {
    index: HashMap<String, i64>,
}

impl WordIndex {
    /// Load the word index from a JSON file.
    pub fn load(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path)
            .with_context(|| format!("Failed to read vocabulary file {}", path.display()))?;
        let index: HashMap<String, i64> = serde_json::from_str(&raw)
            .with_context(|| format!("Vocabulary file {} is not valid JSON", path.display()))?;

        if index.values().any(|&id| id <= 0) {
            anyhow::bail!(
                "Vocabulary file {} contains non-positive ids; id 0 is reserved for padding",
                path.display()
            );
        }

        debug!(tokens = index.len(), "Loaded vocabulary");
        Ok(Self { index })
    }

    /// Build a word index directly from pairs. Used by tests and tooling.
    pub fn from_pairs(pairs: impl IntoIterator<Item = (String, i64)>) -> Self {
        Self {
            index: pairs.into_iter().collect(),
        }
    }
}

impl Vocabulary for WordIndex {
    fn encode(&self, token: &str) -> Option<i64> {
        self.index.get(token).copied()
    }

    fn len(&self) -> usize {
        self.index.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> WordIndex {
        WordIndex::from_pairs([("hate".to_string(), 1), ("speech".to_string(), 2)])
    }

    #[test]
    fn test_encode_known_token() {
        assert_eq!(sample().encode("hate"), Some(1));
    }

    #[test]
    fn test_encode_unknown_token() {
        assert_eq!(sample().encode("zebra"), None);
    }

    #[test]
    fn test_len() {
        assert_eq!(sample().len(), 2);
        assert!(!sample().is_empty());
    }
}
