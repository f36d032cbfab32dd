use clap::Parser;
use std::path::PathBuf;
use tracing::{info, warn};

use rhymedex::core::config::Config;
use rhymedex::corpus::loader::{CorpusLoader, FileCorpusLoader};
use rhymedex::export::dump::IndexDumper;
use rhymedex::export::sink::{ResultSink, StdoutSink};
use rhymedex::index::builder::IndexBuilder;
use rhymedex::query::resolver::QueryResolver;

#[derive(Parser)]
#[command(name = "rhymedex")]
#[command(about = "Exact-token lookup over a line-delimited corpus", long_about = None)]
struct Args {
    /// Corpus file, one entry per line, tokens separated by spaces
    #[arg(long, env = "RHYMEDEX_CORPUS", default_value = "./vn_dict.txt")]
    corpus: PathBuf,

    /// Token to look up (lowercased before lookup)
    #[arg(long, env = "RHYMEDEX_QUERY")]
    query: String,

    /// Write a human-readable dump of the full index to this path
    #[arg(long, env = "RHYMEDEX_DUMP")]
    dump: Option<PathBuf>,

    /// Also index the final token of entries without a trailing space
    #[arg(long)]
    index_trailing_token: bool,

    /// Capture a final line not terminated by a newline
    #[arg(long)]
    capture_unterminated_tail: bool,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let args = Args::parse();
    let config = Config {
        corpus_path: args.corpus,
        dump_path: args.dump,
        index_trailing_token: args.index_trailing_token,
        capture_unterminated_tail: args.capture_unterminated_tail,
    };

    // A missing or unreadable corpus is not fatal: the build runs on empty
    // text and the query reports no matches. Exit status stays 0 throughout.
    let raw_text = match FileCorpusLoader.load(&config.corpus_path) {
        Ok(text) => text,
        Err(err) => {
            warn!(
                path = %config.corpus_path.display(),
                error = %err,
                "corpus read failed, continuing with empty corpus"
            );
            String::new()
        }
    };

    let snapshot = IndexBuilder::from_config(&config).build(&raw_text);
    info!(
        entries = snapshot.entry_count(),
        terms = snapshot.index.term_count(),
        "corpus indexed"
    );

    if let Some(dump_path) = &config.dump_path {
        if let Err(err) = IndexDumper.dump(&snapshot, dump_path) {
            warn!(path = %dump_path.display(), error = %err, "index dump failed");
        }
    }

    let query = args.query.to_lowercase();
    let results = QueryResolver::new().lookup(&snapshot, &query);

    if let Err(err) = StdoutSink.emit(&query, &results) {
        warn!(error = %err, "result emit failed");
    }
}
