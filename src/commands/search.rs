//! One-shot search command
//!
//! Runs a single query and packages the words for display.

use crate::search::{QueryKind, QueryType, Search, SearchEngine};
use std::time::{Duration, Instant};

/// Configuration for a single search
pub struct SearchConfig {
    pub query: QueryType,
    pub limit: Option<usize>,
}

impl SearchConfig {
    #[must_use]
    pub const fn new(query: QueryType) -> Self {
        Self { query, limit: None }
    }

    #[must_use]
    pub const fn with_limit(mut self, limit: Option<usize>) -> Self {
        self.limit = limit;
        self
    }
}

/// Result of a single search
pub struct SearchResult {
    pub label: String,
    pub kind: QueryKind,
    /// Words to show, after sorting and the limit
    pub words: Vec<String>,
    /// Number of words found before the limit was applied
    pub total: usize,
    pub duration: Duration,
}

impl SearchResult {
    /// True if the limit hid some words
    #[must_use]
    pub fn truncated(&self) -> bool {
        self.words.len() < self.total
    }
}

/// Run the configured query
///
/// Completions keep their word-before-extensions order; scrabble and match
/// results are sorted alphabetically.
#[must_use]
pub fn run_search(engine: &SearchEngine, config: SearchConfig) -> SearchResult {
    let start = Instant::now();
    let mut words = engine.run(&config.query);
    let duration = start.elapsed();

    let kind = config.query.kind();
    if kind != QueryKind::Autocomplete {
        words.sort();
    }

    let total = words.len();
    if let Some(limit) = config.limit {
        words.truncate(limit);
    }

    SearchResult {
        label: config.query.describe(),
        kind,
        words,
        total,
        duration,
    }
}
