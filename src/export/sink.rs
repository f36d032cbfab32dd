use crate::core::error::Result;

/// Consumes lookup results for display or export.
pub trait ResultSink {
    fn emit(&mut self, query: &str, results: &[&str]) -> Result<()>;
}

/// Prints results to standard output, one entry per line.
pub struct StdoutSink;

impl ResultSink for StdoutSink {
    fn emit(&mut self, query: &str, results: &[&str]) -> Result<()> {
        println!("Words that rhyme with '{}':", query);
        for entry in results {
            println!("{}", entry);
        }
        println!("=== END ===");
        Ok(())
    }
}

/// Collects emitted results in memory, for tests and embedding.
#[derive(Default)]
pub struct MemorySink {
    pub emitted: Vec<(String, Vec<String>)>,
}

impl MemorySink {
    pub fn new() -> Self {
        MemorySink::default()
    }
}

impl ResultSink for MemorySink {
    fn emit(&mut self, query: &str, results: &[&str]) -> Result<()> {
        self.emitted.push((
            query.to_string(),
            results.iter().map(|entry| entry.to_string()).collect(),
        ));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_sink_records_emissions() {
        let mut sink = MemorySink::new();
        sink.emit("mưa", &["mưa rơi "]).unwrap();
        sink.emit("rain", &[]).unwrap();

        assert_eq!(sink.emitted.len(), 2);
        assert_eq!(sink.emitted[0].0, "mưa");
        assert_eq!(sink.emitted[0].1, vec!["mưa rơi "]);
        assert!(sink.emitted[1].1.is_empty());
    }
}
