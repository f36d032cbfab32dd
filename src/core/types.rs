use serde::{Serialize, Deserialize};

/// Position of an entry in the corpus, 0-based, assigned in order of appearance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct EntryId(pub u32);

impl EntryId {
    pub fn new(id: u32) -> Self {
        EntryId(id)
    }

    pub fn value(&self) -> u32 {
        self.0
    }
}

impl From<u32> for EntryId {
    fn from(id: u32) -> Self {
        EntryId(id)
    }
}
