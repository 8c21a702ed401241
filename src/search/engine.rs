//! Main search interface

use super::query::{Autocomplete, Match, Scrabble, Search};
use crate::core::{PrefixMap, SearchError};

/// Read-only search front end over a prefix map
///
/// The engine only borrows the map, so any number of engines (or threads)
/// can share one map.
#[derive(Debug, Clone, Copy)]
pub struct SearchEngine<'a> {
    map: &'a PrefixMap,
}

impl<'a> SearchEngine<'a> {
    #[must_use]
    pub const fn new(map: &'a PrefixMap) -> Self {
        Self { map }
    }

    /// The underlying prefix map
    #[must_use]
    pub const fn map(&self) -> &'a PrefixMap {
        self.map
    }

    /// Run any query against the map
    pub fn run<Q: Search + ?Sized>(&self, query: &Q) -> Vec<String> {
        let words = query.search(self.map);
        log::debug!("{} -> {} words", query.describe(), words.len());
        words
    }

    /// Words starting with `prefix`, the prefix itself first if it is a word
    ///
    /// # Errors
    /// Returns `SearchError::InvalidInput` if `prefix` is not letters only.
    pub fn autocomplete(&self, prefix: &str) -> Result<Vec<String>, SearchError> {
        Ok(self.run(&Autocomplete::new(prefix)?))
    }

    /// Words using exactly `size` tiles from `rack`
    ///
    /// # Errors
    /// Returns `SearchError::InvalidInput` if `rack` is not letters only.
    pub fn scrabble(&self, rack: &str, size: usize) -> Result<Vec<String>, SearchError> {
        Ok(self.run(&Scrabble::new(rack, size)?))
    }

    /// Words fitting a `?` wildcard template
    ///
    /// # Errors
    /// Returns `SearchError::InvalidInput` if `template` has characters other
    /// than letters and `?`.
    pub fn match_template(&self, template: &str) -> Result<Vec<String>, SearchError> {
        Ok(self.run(&Match::new(template)?))
    }

    #[must_use]
    pub fn contains_word(&self, word: &str) -> bool {
        self.map.contains_word(word)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::QueryKind;
    use std::collections::BTreeSet;

    fn short_map() -> PrefixMap {
        PrefixMap::from_words([
            "the", "be", "to", "of", "and", "a", "in", "that", "have", "it",
        ])
        .unwrap()
    }

    fn set(words: Vec<String>) -> BTreeSet<String> {
        words.into_iter().collect()
    }

    #[test]
    fn engine_scenarios() {
        let map = short_map();
        let engine = SearchEngine::new(&map);

        assert_eq!(
            set(engine.autocomplete("th").unwrap()),
            set(vec!["the".into(), "that".into()])
        );
        assert!(engine.autocomplete("x").unwrap().is_empty());

        assert_eq!(engine.scrabble("eavhi", 4).unwrap(), vec!["have"]);
        assert!(engine.scrabble("", 4).unwrap().is_empty());
        assert!(engine.scrabble("eavhi", 0).unwrap().is_empty());
        assert_eq!(
            set(engine.scrabble("tinfoeb", 2).unwrap()),
            set(vec![
                "be".into(),
                "to".into(),
                "of".into(),
                "in".into(),
                "it".into()
            ])
        );

        assert_eq!(engine.match_template("???t").unwrap(), vec!["that"]);
        assert_eq!(engine.match_template("a?d").unwrap(), vec!["and"]);
        assert!(engine.match_template("b???").unwrap().is_empty());
    }

    #[test]
    fn run_accepts_dynamic_queries() {
        let map = short_map();
        let engine = SearchEngine::new(&map);

        let queries: Vec<Box<dyn Search>> = vec![
            Box::new(Autocomplete::new("a").unwrap()),
            Box::new(Match::new("?").unwrap()),
        ];
        for query in &queries {
            assert!(engine.run(query.as_ref()).contains(&"a".to_string()));
        }

        let query = QueryKind::Scrabble.build("ebht", 3).unwrap();
        assert_eq!(engine.run(&query), vec!["the"]);
    }

    #[test]
    fn errors_fail_fast() {
        let map = short_map();
        let engine = SearchEngine::new(&map);
        assert!(engine.autocomplete("th3").is_err());
        assert!(engine.scrabble("ab c", 2).is_err());
        assert!(engine.match_template("a_d").is_err());
    }

    #[test]
    fn engine_is_copy_and_shares_map() {
        let map = short_map();
        let engine = SearchEngine::new(&map);
        let other = engine;
        assert!(std::ptr::eq(engine.map(), other.map()));
        assert!(other.contains_word("have"));
        assert!(!other.contains_word("hav"));
    }
}
