//! Command implementations

pub mod benchmark;
pub mod search;
pub mod simple;
pub mod stats;

pub use benchmark::{BenchmarkConfig, BenchmarkResult, KindStats, run_benchmark};
pub use search::{SearchConfig, SearchResult, run_search};
pub use simple::run_simple;
pub use stats::{MapStatistics, analyze_map};
