use std::collections::HashMap;
use serde::{Serialize, Deserialize};
use crate::core::types::EntryId;

/// Inverted index: lowercase token → positions of the entries containing it.
///
/// Posting lists are append-only during the build pass and may hold
/// duplicates; they are normalized (sort + adjacent dedup) lazily, at read
/// time. Every stored position is a valid index into the corpus the build
/// produced alongside this index.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct InvertedIndex {
    pub postings: HashMap<String, Vec<EntryId>>,
    pub total_tokens: usize,
}

impl InvertedIndex {
    pub fn new() -> Self {
        InvertedIndex {
            postings: HashMap::new(),
            total_tokens: 0,
        }
    }

    /// Append one occurrence. No dedup here; writes stay cheap.
    pub fn add_token(&mut self, token: String, position: EntryId) {
        self.postings.entry(token).or_default().push(position);
        self.total_tokens += 1;
    }

    /// Raw posting list in append order, duplicates included.
    pub fn raw_postings(&self, token: &str) -> Option<&[EntryId]> {
        self.postings.get(token).map(|list| list.as_slice())
    }

    /// Sorted, duplicate-free positions for a token. Adjacent dedup after
    /// the sort is equivalent to full dedup. Unknown tokens yield an empty
    /// list, not an error.
    pub fn normalized_postings(&self, token: &str) -> Vec<EntryId> {
        let mut positions = match self.postings.get(token) {
            Some(list) => list.clone(),
            None => return Vec::new(),
        };
        positions.sort_unstable();
        positions.dedup();
        positions
    }

    pub fn term_count(&self) -> usize {
        self.postings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.postings.is_empty()
    }

    /// Terms in sorted order, for deterministic dumps.
    pub fn sorted_terms(&self) -> Vec<&String> {
        let mut terms: Vec<&String> = self.postings.keys().collect();
        terms.sort();
        terms
    }
}
