//! Query types
//!
//! Defines the Search trait and the validated query for each search kind.
//! Construction validates the input once; running a query never fails.

use super::autocomplete::complete_unchecked;
use super::matcher::match_parsed;
use super::rack::Rack;
use super::scrabble::scrabble_rack;
use super::template::Template;
use crate::core::{Argument, PrefixMap, SearchError, check_letters};
use std::fmt;

/// A query that can be run against a prefix map
pub trait Search {
    /// Run the query; an empty result means no word qualifies
    fn search(&self, map: &PrefixMap) -> Vec<String>;

    /// Short human-readable label, e.g. `match a?d`
    fn describe(&self) -> String;
}

/// Words starting with a prefix
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Autocomplete {
    prefix: String,
}

impl Autocomplete {
    /// # Errors
    /// Returns `SearchError::InvalidInput` if `prefix` is not letters only.
    pub fn new(prefix: &str) -> Result<Self, SearchError> {
        check_letters(prefix, Argument::Prefix)?;
        Ok(Self {
            prefix: prefix.to_string(),
        })
    }

    #[must_use]
    pub fn prefix(&self) -> &str {
        &self.prefix
    }
}

impl Search for Autocomplete {
    fn search(&self, map: &PrefixMap) -> Vec<String> {
        complete_unchecked(&self.prefix, map)
    }

    fn describe(&self) -> String {
        format!("complete {}", self.prefix)
    }
}

/// Words using exactly `size` tiles of a rack
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Scrabble {
    rack: Rack,
    size: usize,
}

impl Scrabble {
    /// # Errors
    /// Returns `SearchError::InvalidInput` if `rack` is not letters only.
    pub fn new(rack: &str, size: usize) -> Result<Self, SearchError> {
        Ok(Self {
            rack: Rack::new(rack)?,
            size,
        })
    }

    #[must_use]
    pub const fn rack(&self) -> &Rack {
        &self.rack
    }

    #[must_use]
    pub const fn size(&self) -> usize {
        self.size
    }
}

impl Search for Scrabble {
    fn search(&self, map: &PrefixMap) -> Vec<String> {
        scrabble_rack(&self.rack, self.size, map)
    }

    fn describe(&self) -> String {
        format!("scrabble {} {}", self.rack, self.size)
    }
}

/// Words fitting a wildcard template
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Match {
    template: Template,
}

impl Match {
    /// # Errors
    /// Returns `SearchError::InvalidInput` if `template` has characters other
    /// than letters and `?`.
    pub fn new(template: &str) -> Result<Self, SearchError> {
        Ok(Self {
            template: Template::new(template)?,
        })
    }

    #[must_use]
    pub const fn template(&self) -> &Template {
        &self.template
    }
}

impl Search for Match {
    fn search(&self, map: &PrefixMap) -> Vec<String> {
        match_parsed(&self.template, map)
    }

    fn describe(&self) -> String {
        format!("match {}", self.template)
    }
}

/// The three kinds of search, without their arguments
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum QueryKind {
    Autocomplete,
    Scrabble,
    Match,
}

impl QueryKind {
    pub const ALL: [Self; 3] = [Self::Autocomplete, Self::Scrabble, Self::Match];

    /// Look up a kind by command name or its one-letter alias
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "complete" | "autocomplete" | "c" => Some(Self::Autocomplete),
            "scrabble" | "rack" | "s" => Some(Self::Scrabble),
            "match" | "m" => Some(Self::Match),
            _ => None,
        }
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Autocomplete => "complete",
            Self::Scrabble => "scrabble",
            Self::Match => "match",
        }
    }

    /// The next kind in cycling order
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::Autocomplete => Self::Scrabble,
            Self::Scrabble => Self::Match,
            Self::Match => Self::Autocomplete,
        }
    }

    /// Build a query of this kind from its text argument
    ///
    /// `size` is only used by scrabble.
    ///
    /// # Errors
    /// Returns `SearchError::InvalidInput` if `input` fails validation.
    pub fn build(self, input: &str, size: usize) -> Result<QueryType, SearchError> {
        match self {
            Self::Autocomplete => Autocomplete::new(input).map(QueryType::Autocomplete),
            Self::Scrabble => Scrabble::new(input, size).map(QueryType::Scrabble),
            Self::Match => Match::new(input).map(QueryType::Match),
        }
    }
}

impl fmt::Display for QueryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Enum wrapper for all query types
///
/// Allows choosing the query at runtime while keeping static dispatch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryType {
    Autocomplete(Autocomplete),
    Scrabble(Scrabble),
    Match(Match),
}

impl QueryType {
    #[must_use]
    pub const fn kind(&self) -> QueryKind {
        match self {
            Self::Autocomplete(_) => QueryKind::Autocomplete,
            Self::Scrabble(_) => QueryKind::Scrabble,
            Self::Match(_) => QueryKind::Match,
        }
    }
}

impl Search for QueryType {
    fn search(&self, map: &PrefixMap) -> Vec<String> {
        match self {
            Self::Autocomplete(q) => q.search(map),
            Self::Scrabble(q) => q.search(map),
            Self::Match(q) => q.search(map),
        }
    }

    fn describe(&self) -> String {
        match self {
            Self::Autocomplete(q) => q.describe(),
            Self::Scrabble(q) => q.describe(),
            Self::Match(q) => q.describe(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn short_map() -> PrefixMap {
        PrefixMap::from_words([
            "the", "be", "to", "of", "and", "a", "in", "that", "have", "it",
        ])
        .unwrap()
    }

    #[test]
    fn kind_from_name() {
        assert_eq!(QueryKind::from_name("complete"), Some(QueryKind::Autocomplete));
        assert_eq!(QueryKind::from_name("c"), Some(QueryKind::Autocomplete));
        assert_eq!(QueryKind::from_name("rack"), Some(QueryKind::Scrabble));
        assert_eq!(QueryKind::from_name("m"), Some(QueryKind::Match));
        assert_eq!(QueryKind::from_name("solve"), None);
    }

    #[test]
    fn kind_cycles_through_all() {
        let mut kind = QueryKind::Autocomplete;
        for expected in QueryKind::ALL.iter().cycle().skip(1).take(6) {
            kind = kind.next();
            assert_eq!(kind, *expected);
        }
    }

    #[test]
    fn build_runs_each_kind() {
        let map = short_map();

        let complete = QueryKind::Autocomplete.build("th", 0).unwrap();
        assert_eq!(complete.kind(), QueryKind::Autocomplete);
        assert_eq!(complete.search(&map), vec!["that", "the"]);

        let rack = QueryKind::Scrabble.build("eavhi", 4).unwrap();
        assert_eq!(rack.search(&map), vec!["have"]);
        assert_eq!(rack.describe(), "scrabble aehiv 4");

        let template = QueryKind::Match.build("a?d", 0).unwrap();
        assert_eq!(template.search(&map), vec!["and"]);
        assert_eq!(template.describe(), "match a?d");
    }

    #[test]
    fn build_validates_input() {
        assert!(QueryKind::Autocomplete.build("a?", 0).is_err());
        assert!(QueryKind::Scrabble.build("a?", 2).is_err());
        assert!(QueryKind::Match.build("a?", 0).is_ok());
        assert!(QueryKind::Match.build("a-", 0).is_err());
    }

    #[test]
    fn accessors() {
        let scrabble = Scrabble::new("tto", 2).unwrap();
        assert_eq!(scrabble.size(), 2);
        assert_eq!(scrabble.rack().count('t'), 2);

        let complete = Autocomplete::new("ha").unwrap();
        assert_eq!(complete.prefix(), "ha");

        let template = Match::new("??t").unwrap();
        assert_eq!(template.template().wildcards(), 2);
    }
}
