use std::collections::HashMap;

use smartrail_core::models::QueryResponse;

/// Session-lifetime cache of parse results, keyed by the raw query string.
///
/// Keys are exact-match only; no normalization, so "Delhi to Mumbai" and
/// "delhi to mumbai" are distinct entries. No eviction, no size bound, no
/// TTL.
#[derive(Debug, Default)]
pub struct ResultCache {
    entries: HashMap<String, QueryResponse>,
}

impl ResultCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lookup(&self, query: &str) -> Option<&QueryResponse> {
        self.entries.get(query)
    }

    /// Record a parse result. Only successful responses are kept: caching a
    /// failure would replay it when the user resubmits the same corrected
    /// string.
    pub fn store(&mut self, query: &str, response: QueryResponse) {
        if !response.is_query_valid {
            tracing::debug!("Not caching invalid response for query: {}", query);
            return;
        }
        self.entries.insert(query.to_string(), response);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
