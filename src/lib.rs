pub mod core;
pub mod corpus;
pub mod analysis;
pub mod index;
pub mod query;
pub mod export;

/*
┌──────────────────────────────────────────────────────────────────────────┐
│                        RHYMEDEX STRUCT ARCHITECTURE                       │
└──────────────────────────────────────────────────────────────────────────┘

┌────────────────────────────── CORE LAYER ────────────────────────────────┐
│                                                                           │
│  ┌──────────────────────────┐  ┌───────────────────┐  ┌───────────────┐  │
│  │ struct Config            │  │ struct EntryId    │  │ struct Error  │  │
│  │ • corpus_path            │  │ • 0: u32          │  │ • kind        │  │
│  │ • dump_path              │  └───────────────────┘  │ • context     │  │
│  │ • index_trailing_token   │                         └───────────────┘  │
│  │ • capture_unterminated_tail                                           │
│  └──────────────────────────┘                                            │
└───────────────────────────────────────────────────────────────────────────┘

┌──────────────────────────── INDEXING LAYER ──────────────────────────────┐
│                                                                           │
│  ┌──────────────────────────┐  ┌────────────────────────────────────┐    │
│  │ struct IndexBuilder      │  │ struct InvertedIndex               │    │
│  │ • tokenizer: Box<dyn>    │  │ • postings: HashMap<String,        │    │
│  │ • capture_unterminated   │  │              Vec<EntryId>>         │    │
│  │ • build() -> Snapshot    │  │ • total_tokens: usize              │    │
│  └──────────────────────────┘  │ • normalized_postings()            │    │
│                                └────────────────────────────────────┘    │
│  ┌──────────────────────────┐  ┌────────────────────────────────────┐    │
│  │ trait Tokenizer          │  │ struct Snapshot                    │    │
│  │ • tokenize()             │  │ • corpus: Vec<String>              │    │
│  │ • SpaceTokenizer         │  │ • index: InvertedIndex             │    │
│  └──────────────────────────┘  └────────────────────────────────────┘    │
└───────────────────────────────────────────────────────────────────────────┘

┌───────────────────────────── QUERY LAYER ────────────────────────────────┐
│                                                                           │
│  ┌──────────────────────────┐  ┌────────────────────────────────────┐    │
│  │ struct QueryResolver     │  │ trait ResultSink                   │    │
│  │ • lookup(&Snapshot,      │  │ • StdoutSink / MemorySink          │    │
│  │   token) -> Vec<&str>    │  └────────────────────────────────────┘    │
│  └──────────────────────────┘  ┌────────────────────────────────────┐    │
│                                │ struct IndexDumper                 │    │
│  ┌──────────────────────────┐  │ • dump(&Snapshot, path)            │    │
│  │ trait CorpusLoader       │  └────────────────────────────────────┘    │
│  │ • FileCorpusLoader       │                                            │
│  └──────────────────────────┘                                            │
└───────────────────────────────────────────────────────────────────────────┘

┌──────────────────────────── RELATIONSHIPS ───────────────────────────────┐
│                                                                           │
│  CorpusLoader ──supplies──> raw text ──build──> IndexBuilder             │
│       IndexBuilder ──produces──> Snapshot { Corpus, InvertedIndex }      │
│       QueryResolver ──reads──> Snapshot ──results──> ResultSink          │
│       IndexDumper ──serializes──> InvertedIndex (debug dump)             │
│                                                                           │
│  Snapshot is immutable once built; a rebuild swaps in a fresh one.       │
└───────────────────────────────────────────────────────────────────────────┘
*/
