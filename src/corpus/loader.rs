use std::fs;
use std::path::Path;
use crate::core::error::Result;

/// Supplies raw corpus text for a source identifier. The builder never does
/// I/O itself; a failed load is reported to the caller, which decides policy
/// (the binary logs it and continues with an empty corpus).
pub trait CorpusLoader: Send + Sync {
    fn load(&self, source: &Path) -> Result<String>;

    fn name(&self) -> &str;
}

/// Whole-file loader. Non-UTF-8 bytes are replaced rather than rejected;
/// the legacy reader never validated encoding.
pub struct FileCorpusLoader;

impl CorpusLoader for FileCorpusLoader {
    fn load(&self, source: &Path) -> Result<String> {
        let bytes = fs::read(source)?;
        Ok(String::from_utf8_lossy(&bytes).into_owned())
    }

    fn name(&self) -> &str {
        "file"
    }
}
