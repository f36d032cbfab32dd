use crate::index::snapshot::Snapshot;

/// Exact-token lookup over a built snapshot.
///
/// The query token is expected to be lowercase already; the index keys are
/// lowercased at build time and the resolver does not lowercase again.
pub struct QueryResolver;

impl QueryResolver {
    pub fn new() -> Self {
        QueryResolver
    }

    /// All entries containing `token`, deduplicated, in ascending entry
    /// position order. Unknown tokens yield an empty result, never an error.
    pub fn lookup<'a>(&self, snapshot: &'a Snapshot, token: &str) -> Vec<&'a str> {
        snapshot
            .index
            .normalized_postings(token)
            .into_iter()
            // Valid by construction: the index holds no position outside the
            // corpus it was built with.
            .map(|id| snapshot.corpus[id.value() as usize].as_str())
            .collect()
    }
}

impl Default for QueryResolver {
    fn default() -> Self {
        QueryResolver::new()
    }
}
