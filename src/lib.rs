//! Word Search
//!
//! Word lookup over a prefix map: every prefix of every word maps to the set
//! of letters that can follow it, plus an end marker for complete words.
//!
//! # Quick Start
//!
//! ```rust
//! use wordsearch::core::PrefixMap;
//! use wordsearch::search::SearchEngine;
//!
//! let map = PrefixMap::from_words(["the", "be", "to", "of", "and", "a", "in", "that", "have", "it"])
//!     .unwrap();
//! let engine = SearchEngine::new(&map);
//!
//! assert_eq!(engine.autocomplete("th").unwrap(), vec!["that", "the"]);
//! assert_eq!(engine.scrabble("eavhi", 4).unwrap(), vec!["have"]);
//! assert_eq!(engine.match_template("a?d").unwrap(), vec!["and"]);
//! ```

// Core domain types
pub mod core;

// Search algorithms
pub mod search;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
