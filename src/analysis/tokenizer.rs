pub trait Tokenizer: Send + Sync {
    fn tokenize(&self, entry: &str) -> Vec<String>;

    fn name(&self) -> &str;

    fn clone_box(&self) -> Box<dyn Tokenizer>;
}

/// Single-space scanner matching the legacy dictionary format.
///
/// A token is captured each time a space byte is seen: the substring since
/// the last cutoff, lowercased. Consecutive or leading spaces therefore
/// capture empty-string tokens, exactly like the original scanner. With
/// `index_trailing_token` off the fragment after the last space is dropped
/// ("mưa rơi" yields only "mưa"); turning it on captures that fragment too.
#[derive(Clone)]
pub struct SpaceTokenizer {
    pub index_trailing_token: bool,
}

impl Default for SpaceTokenizer {
    fn default() -> Self {
        SpaceTokenizer {
            index_trailing_token: false,
        }
    }
}

impl Tokenizer for SpaceTokenizer {
    fn tokenize(&self, entry: &str) -> Vec<String> {
        let bytes = entry.as_bytes();
        let mut tokens = Vec::new();
        let mut cutoff = 0;

        // Space is ASCII, so every cutoff lands on a char boundary.
        for j in 0..bytes.len() {
            if bytes[j] == b' ' {
                tokens.push(entry[cutoff..j].to_lowercase());
                cutoff = j + 1;
            }
        }

        if self.index_trailing_token && cutoff < bytes.len() {
            tokens.push(entry[cutoff..].to_lowercase());
        }

        tokens
    }

    fn name(&self) -> &str {
        "space"
    }

    fn clone_box(&self) -> Box<dyn Tokenizer> {
        Box::new(self.clone())
    }
}
