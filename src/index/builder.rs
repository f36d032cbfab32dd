use tracing::debug;
use crate::analysis::tokenizer::{SpaceTokenizer, Tokenizer};
use crate::core::config::Config;
use crate::core::types::EntryId;
use crate::index::inverted::InvertedIndex;
use crate::index::snapshot::Snapshot;

/// Single-pass index builder over raw corpus text.
///
/// Entries are cut at each newline byte; the text since the previous cutoff
/// (newline excluded) becomes one entry, tokenized and indexed under its
/// 0-based position. With `capture_unterminated_tail` off, a final fragment
/// not terminated by a newline is dropped, matching the original scanner;
/// turning it on captures that fragment as a last entry.
pub struct IndexBuilder {
    tokenizer: Box<dyn Tokenizer>,
    capture_unterminated_tail: bool,
}

impl IndexBuilder {
    pub fn new(tokenizer: Box<dyn Tokenizer>) -> Self {
        IndexBuilder {
            tokenizer,
            capture_unterminated_tail: false,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        IndexBuilder {
            tokenizer: Box::new(SpaceTokenizer {
                index_trailing_token: config.index_trailing_token,
            }),
            capture_unterminated_tail: config.capture_unterminated_tail,
        }
    }

    pub fn capture_unterminated_tail(mut self, capture: bool) -> Self {
        self.capture_unterminated_tail = capture;
        self
    }

    /// Build a fresh snapshot from raw text. Empty input is valid and yields
    /// an empty corpus and index. No I/O, no side effects.
    pub fn build(&self, raw_text: &str) -> Snapshot {
        let mut corpus = Vec::new();
        let mut index = InvertedIndex::new();

        let bytes = raw_text.as_bytes();
        let mut cutoff = 0;
        for i in 0..bytes.len() {
            if bytes[i] == b'\n' {
                self.index_entry(&raw_text[cutoff..i], &mut corpus, &mut index);
                cutoff = i + 1;
            }
        }

        if self.capture_unterminated_tail && cutoff < bytes.len() {
            self.index_entry(&raw_text[cutoff..], &mut corpus, &mut index);
        }

        debug!(
            entries = corpus.len(),
            terms = index.term_count(),
            tokens = index.total_tokens,
            "index built"
        );

        Snapshot { corpus, index }
    }

    fn index_entry(&self, entry: &str, corpus: &mut Vec<String>, index: &mut InvertedIndex) {
        let position = EntryId::new(corpus.len() as u32);
        for token in self.tokenizer.tokenize(entry) {
            index.add_token(token, position);
        }
        corpus.push(entry.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn builder() -> IndexBuilder {
        IndexBuilder::new(Box::new(SpaceTokenizer::default()))
    }

    #[test]
    fn test_build_reference_corpus() {
        let snapshot = builder().build("mưa rơi \nnắng lên \n");

        assert_eq!(snapshot.corpus, vec!["mưa rơi ", "nắng lên "]);
        assert_eq!(
            snapshot.index.normalized_postings("mưa"),
            vec![EntryId(0)]
        );
        assert_eq!(
            snapshot.index.normalized_postings("rơi"),
            vec![EntryId(0)]
        );
        assert_eq!(
            snapshot.index.normalized_postings("nắng"),
            vec![EntryId(1)]
        );
        assert_eq!(
            snapshot.index.normalized_postings("lên"),
            vec![EntryId(1)]
        );
        assert_eq!(snapshot.index.term_count(), 4);
    }

    #[test]
    fn test_empty_input_yields_empty_snapshot() {
        let snapshot = builder().build("");
        assert!(snapshot.is_empty());
        assert!(snapshot.index.is_empty());
    }

    #[test]
    fn test_entry_count_equals_newline_count() {
        let text = "a \nb \n\nc d \n";
        let snapshot = builder().build(text);
        let newlines = text.bytes().filter(|b| *b == b'\n').count();
        assert_eq!(snapshot.entry_count(), newlines);
    }

    #[test]
    fn test_unterminated_tail_dropped_by_default() {
        let snapshot = builder().build("mưa rơi \nnắng lên");
        assert_eq!(snapshot.corpus, vec!["mưa rơi "]);
    }

    #[test]
    fn test_unterminated_tail_captured_with_flag() {
        let snapshot = builder()
            .capture_unterminated_tail(true)
            .build("mưa rơi \nnắng lên ");
        assert_eq!(snapshot.corpus, vec!["mưa rơi ", "nắng lên "]);
        assert_eq!(
            snapshot.index.normalized_postings("nắng"),
            vec![EntryId(1)]
        );
    }

    #[test]
    fn test_last_token_of_entry_not_indexed_without_trailing_space() {
        let snapshot = builder().build("mưa rơi\n");
        assert_eq!(snapshot.corpus, vec!["mưa rơi"]);
        assert_eq!(snapshot.index.normalized_postings("mưa"), vec![EntryId(0)]);
        assert!(snapshot.index.normalized_postings("rơi").is_empty());
    }

    #[test]
    fn test_from_config_fixed_mode_indexes_every_token() {
        let config = Config {
            index_trailing_token: true,
            capture_unterminated_tail: true,
            ..Config::default()
        };
        let snapshot = IndexBuilder::from_config(&config).build("mưa rơi\nnắng lên");

        assert_eq!(snapshot.corpus, vec!["mưa rơi", "nắng lên"]);
        assert_eq!(snapshot.index.normalized_postings("rơi"), vec![EntryId(0)]);
        assert_eq!(snapshot.index.normalized_postings("lên"), vec![EntryId(1)]);
    }

    #[test]
    fn test_positions_are_monotonic_and_valid() {
        let snapshot = builder().build("x a \ny a \nz a \n");
        assert_eq!(
            snapshot.index.normalized_postings("a"),
            vec![EntryId(0), EntryId(1), EntryId(2)]
        );
        for positions in snapshot.index.postings.values() {
            for id in positions {
                assert!(snapshot.entry(*id).is_some());
            }
        }
    }

    #[test]
    fn test_tokens_lowercased_at_build_time() {
        let snapshot = builder().build("Mưa To \n");
        assert_eq!(snapshot.index.normalized_postings("mưa"), vec![EntryId(0)]);
        assert!(snapshot.index.normalized_postings("Mưa").is_empty());
    }
}
