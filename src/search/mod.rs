//! Search algorithms over a prefix map
//!
//! Autocomplete, scrabble rack search and wildcard matching, plus the query
//! types that let callers pick a search at runtime.

mod autocomplete;
mod engine;
mod matcher;
pub mod query;
mod rack;
mod scrabble;
mod template;

pub use autocomplete::autocomplete;
pub use engine::SearchEngine;
pub use matcher::{match_parsed, match_template};
pub use query::{Autocomplete, Match, QueryKind, QueryType, Scrabble, Search};
pub use rack::Rack;
pub use scrabble::{scrabble, scrabble_rack};
pub use template::{Slot, Template};
