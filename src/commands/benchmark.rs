//! Benchmark command
//!
//! Generates random queries from the word list and runs them in parallel
//! against a shared prefix map.

use crate::search::{QueryKind, QueryType, SearchEngine};
use crate::wordlists::WordList;
use indicatif::{ProgressBar, ProgressStyle};
use rand::prelude::IndexedRandom;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rayon::prelude::*;
use std::collections::BTreeMap;
use std::time::{Duration, Instant};

/// Configuration for a benchmark run
pub struct BenchmarkConfig {
    pub count: usize,
    pub seed: u64,
    /// Random tiles added to each generated scrabble rack
    pub extra_tiles: usize,
    pub show_progress: bool,
}

impl BenchmarkConfig {
    #[must_use]
    pub const fn new(count: usize) -> Self {
        Self {
            count,
            seed: 42,
            extra_tiles: 2,
            show_progress: true,
        }
    }
}

/// Per-kind totals
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KindStats {
    pub queries: usize,
    pub total_hits: usize,
    pub min_hits: usize,
    pub max_hits: usize,
    /// Queries whose source word came back in the result
    pub self_hits: usize,
}

impl KindStats {
    #[must_use]
    pub fn mean_hits(&self) -> f64 {
        if self.queries == 0 {
            0.0
        } else {
            self.total_hits as f64 / self.queries as f64
        }
    }
}

/// Result of a benchmark run
pub struct BenchmarkResult {
    pub total_queries: usize,
    pub per_kind: BTreeMap<&'static str, KindStats>,
    pub duration: Duration,
    pub queries_per_second: f64,
}

impl BenchmarkResult {
    #[must_use]
    pub fn self_hits(&self) -> usize {
        self.per_kind.values().map(|k| k.self_hits).sum()
    }
}

/// A generated query and the word it was derived from
struct Probe {
    source: String,
    query: QueryType,
}

/// Run `config.count` random queries derived from `words`
///
/// Kinds rotate autocomplete, scrabble, match. Every generated query admits
/// its source word, so on a map built from `words` every query is a self hit.
#[must_use]
pub fn run_benchmark(
    engine: &SearchEngine,
    words: &WordList,
    config: &BenchmarkConfig,
) -> BenchmarkResult {
    let probes = generate_probes(words, config);
    log::info!(
        "benchmark: {} queries generated (seed {})",
        probes.len(),
        config.seed
    );

    let pb = if config.show_progress {
        ProgressBar::new(probes.len() as u64)
    } else {
        ProgressBar::hidden()
    };
    if let Ok(style) = ProgressStyle::default_bar()
        .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
    {
        pb.set_style(style.progress_chars("█▓▒░"));
    }
    pb.set_message("searching");

    let start = Instant::now();
    let outcomes: Vec<(QueryKind, usize, bool)> = probes
        .par_iter()
        .map(|probe| {
            let hits = engine.run(&probe.query);
            pb.inc(1);
            (
                probe.query.kind(),
                hits.len(),
                hits.iter().any(|w| *w == probe.source),
            )
        })
        .collect();
    let duration = start.elapsed();
    pb.finish_with_message("done");

    let mut per_kind: BTreeMap<&'static str, KindStats> = BTreeMap::new();
    for (kind, hits, self_hit) in outcomes {
        let stats = per_kind.entry(kind.name()).or_insert(KindStats {
            min_hits: usize::MAX,
            ..KindStats::default()
        });
        stats.queries += 1;
        stats.total_hits += hits;
        stats.min_hits = stats.min_hits.min(hits);
        stats.max_hits = stats.max_hits.max(hits);
        stats.self_hits += usize::from(self_hit);
    }

    let total_queries = probes.len();
    let secs = duration.as_secs_f64();
    BenchmarkResult {
        total_queries,
        per_kind,
        duration,
        queries_per_second: if secs > 0.0 {
            total_queries as f64 / secs
        } else {
            0.0
        },
    }
}

fn generate_probes(words: &WordList, config: &BenchmarkConfig) -> Vec<Probe> {
    let mut rng = StdRng::seed_from_u64(config.seed);
    let pool = words.words();

    (0..config.count)
        .filter_map(|i| {
            let source = pool.choose(&mut rng)?.clone();
            let kind = QueryKind::ALL[i % QueryKind::ALL.len()];
            let query = build_probe(kind, &source, config.extra_tiles, &mut rng)?;
            Some(Probe { source, query })
        })
        .collect()
}

fn build_probe(kind: QueryKind, word: &str, extra_tiles: usize, rng: &mut StdRng) -> Option<QueryType> {
    let letters: Vec<char> = word.chars().collect();
    let len = letters.len();
    if len == 0 {
        return None;
    }

    let query = match kind {
        QueryKind::Autocomplete => {
            let cut = rng.random_range(1..=len);
            let prefix: String = letters[..cut].iter().collect();
            kind.build(&prefix, 0)
        }
        QueryKind::Scrabble => {
            let mut tiles = letters;
            for _ in 0..extra_tiles {
                tiles.push(char::from(rng.random_range(b'a'..=b'z')));
            }
            tiles.shuffle(rng);
            let rack: String = tiles.into_iter().collect();
            kind.build(&rack, len)
        }
        QueryKind::Match => {
            let template: String = letters
                .into_iter()
                .map(|c| if rng.random_bool(0.5) { '?' } else { c })
                .collect();
            kind.build(&template, 0)
        }
    };

    // Words in a valid list always produce valid queries
    query.ok()
}
