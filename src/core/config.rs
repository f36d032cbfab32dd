use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct Config {
    pub corpus_path: PathBuf,
    pub dump_path: Option<PathBuf>,

    // Compatibility switches for the legacy scanner quirks. Both default to
    // off, which reproduces the original index bit-for-bit: the token after
    // the last space of an entry is not indexed, and a final line without a
    // terminating newline is not captured.
    pub index_trailing_token: bool,
    pub capture_unterminated_tail: bool,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            corpus_path: PathBuf::from("./vn_dict.txt"),
            dump_path: Some(PathBuf::from("./index.txt")),
            index_trailing_token: false,
            capture_unterminated_tail: false,
        }
    }
}
