use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use tracing::debug;
use crate::core::error::Result;
use crate::index::snapshot::Snapshot;

/// Writes the full index as a human-readable mapping, one
/// `token: [pos, pos, ...]` line per token, tokens sorted. Posting lists are
/// written raw, in append order with duplicates, showing the index exactly as
/// built; normalization happens only at lookup. The format exists for
/// inspection only and is not a stability contract.
pub struct IndexDumper;

impl IndexDumper {
    pub fn dump(&self, snapshot: &Snapshot, path: &Path) -> Result<()> {
        let file = File::create(path)?;
        let mut out = BufWriter::new(file);

        for token in snapshot.index.sorted_terms() {
            let positions: Vec<u32> = snapshot.index.postings[token]
                .iter()
                .map(|id| id.value())
                .collect();
            writeln!(out, "{}: {:?}", token, positions)?;
        }

        out.flush()?;
        debug!(path = %path.display(), terms = snapshot.index.term_count(), "index dump written");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::tokenizer::SpaceTokenizer;
    use crate::index::builder::IndexBuilder;

    #[test]
    fn test_dump_writes_sorted_readable_mapping() {
        let snapshot = IndexBuilder::new(Box::new(SpaceTokenizer::default()))
            .build("b a \na a \n");

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("index.txt");
        IndexDumper.dump(&snapshot, &path).unwrap();

        // Raw posting lists: "a a " contributes position 1 twice.
        let written = std::fs::read_to_string(&path).unwrap();
        assert_eq!(written, "a: [0, 1, 1]\nb: [0]\n");
    }

    #[test]
    fn test_dump_of_empty_index_writes_empty_file() {
        let snapshot = Snapshot::default();
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("index.txt");
        IndexDumper.dump(&snapshot, &path).unwrap();

        assert_eq!(std::fs::read_to_string(&path).unwrap(), "");
    }
}
