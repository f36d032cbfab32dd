use serde::{Serialize, Deserialize};
use crate::core::types::EntryId;
use crate::index::inverted::InvertedIndex;

/// Immutable corpus + index pair produced by one build pass.
///
/// Read-only for its whole lifetime; a rebuild produces a fresh snapshot
/// that replaces this one wholesale. Safe to share across threads for
/// concurrent read-only lookups.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Snapshot {
    pub corpus: Vec<String>,
    pub index: InvertedIndex,
}

impl Snapshot {
    pub fn entry(&self, id: EntryId) -> Option<&str> {
        self.corpus.get(id.value() as usize).map(|entry| entry.as_str())
    }

    pub fn entry_count(&self) -> usize {
        self.corpus.len()
    }

    pub fn is_empty(&self) -> bool {
        self.corpus.is_empty()
    }
}
