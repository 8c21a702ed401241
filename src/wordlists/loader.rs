//! Word list loading utilities
//!
//! Reads newline-delimited word sources into an ordered [`WordList`].

use crate::core::{PrefixMap, SearchError, is_word};
use std::fs;
use std::io;
use std::path::Path;

/// An ordered collection of words
///
/// Order is the order of the source; nothing is deduplicated or validated
/// until [`WordList::retain_valid`] or [`WordList::to_prefix_map`] runs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WordList {
    words: Vec<String>,
}

impl WordList {
    /// Parse one word per line
    ///
    /// Line terminators (`\n` or `\r\n`) are trimmed and blank lines skipped.
    ///
    /// # Examples
    /// ```
    /// use wordsearch::wordlists::WordList;
    ///
    /// let list = WordList::from_lines("the\r\nbe\n\nto\n");
    /// assert_eq!(list.words(), ["the", "be", "to"]);
    /// ```
    #[must_use]
    pub fn from_lines(text: &str) -> Self {
        let words = text
            .lines()
            .filter(|line| !line.is_empty())
            .map(ToString::to_string)
            .collect();
        Self { words }
    }

    /// Load words from a file, one per line
    ///
    /// # Errors
    ///
    /// Returns an I/O error if the file cannot be read or opened.
    ///
    /// # Examples
    /// ```no_run
    /// use wordsearch::wordlists::WordList;
    ///
    /// let list = WordList::load("data/common.txt").unwrap();
    /// println!("Loaded {} words", list.len());
    /// ```
    pub fn load<P: AsRef<Path>>(path: P) -> io::Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)?;
        let list = Self::from_lines(&content);
        log::info!("loaded {} words from {}", list.len(), path.display());
        Ok(list)
    }

    /// Convert an embedded string slice to a word list
    ///
    /// # Examples
    /// ```
    /// use wordsearch::wordlists::{SHORT, WordList};
    ///
    /// let list = WordList::from_slice(SHORT);
    /// assert_eq!(list.len(), SHORT.len());
    /// ```
    #[must_use]
    pub fn from_slice(slice: &[&str]) -> Self {
        Self {
            words: slice.iter().map(ToString::to_string).collect(),
        }
    }

    /// Words whose length (in characters) is exactly `size`, in list order
    #[must_use]
    pub fn by_size(&self, size: usize) -> Self {
        Self {
            words: self
                .words
                .iter()
                .filter(|w| w.chars().count() == size)
                .cloned()
                .collect(),
        }
    }

    /// `prefix` prepended to every word, sorted alphabetically
    ///
    /// # Examples
    /// ```
    /// use wordsearch::wordlists::WordList;
    ///
    /// let list = WordList::from_slice(&["at", "rap"]);
    /// assert_eq!(list.extend_with_prefix("c").words(), ["cat", "crap"]);
    /// ```
    #[must_use]
    pub fn extend_with_prefix(&self, prefix: &str) -> Self {
        let mut words: Vec<String> = self.words.iter().map(|w| format!("{prefix}{w}")).collect();
        words.sort();
        Self { words }
    }

    /// Drop entries that are not valid words, returning what was dropped
    pub fn retain_valid(&mut self) -> Vec<String> {
        let (valid, invalid): (Vec<String>, Vec<String>) =
            self.words.drain(..).partition(|w| is_word(w));
        self.words = valid;

        if !invalid.is_empty() {
            log::warn!(
                "dropped {} invalid entries (first: {:?})",
                invalid.len(),
                invalid[0]
            );
        }
        invalid
    }

    /// Build the prefix map for this list
    ///
    /// # Errors
    /// Returns `SearchError::InvalidInput` for the first entry that is not a
    /// valid word.
    pub fn to_prefix_map(&self) -> Result<PrefixMap, SearchError> {
        PrefixMap::from_words(&self.words)
    }

    #[must_use]
    pub fn words(&self) -> &[String] {
        &self.words
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl FromIterator<String> for WordList {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        Self {
            words: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::{COMMON, SHORT};

    #[test]
    fn from_lines_preserves_order() {
        let list = WordList::from_lines("the\nbe\nto\nof\nand\na\nin\nthat\nhave\nit\n");
        assert_eq!(list.words(), SHORT);
    }

    #[test]
    fn from_lines_without_trailing_newline() {
        let list = WordList::from_lines("at\nby");
        assert_eq!(list.words(), ["at", "by"]);
    }

    #[test]
    fn load_reads_file() {
        let path = std::env::temp_dir().join(format!("wordsearch-{}.txt", std::process::id()));
        fs::write(&path, "crane\nslate\r\n\nirate\n").unwrap();

        let list = WordList::load(&path).unwrap();
        fs::remove_file(&path).unwrap();

        assert_eq!(list.words(), ["crane", "slate", "irate"]);
    }

    #[test]
    fn load_missing_file_errors() {
        assert!(WordList::load("/definitely/not/here.txt").is_err());
    }

    #[test]
    fn by_size_filters_and_keeps_order() {
        let list = WordList::from_slice(SHORT);
        assert_eq!(list.by_size(2).words(), ["be", "to", "of", "in", "it"]);
        assert!(list.by_size(0).is_empty());
        assert!(list.by_size(5).is_empty());
        assert!(WordList::default().by_size(2).is_empty());

        let small = WordList::from_slice(&["a", "at", "axe", "by"]);
        assert_eq!(small.by_size(2).words(), ["at", "by"]);
    }

    #[test]
    fn extend_with_prefix_sorts() {
        let list = WordList::from_slice(&["o", "at", "ong"]);
        assert_eq!(list.extend_with_prefix("s").words(), ["sat", "so", "song"]);
        assert_eq!(
            list.extend_with_prefix("pr").words(),
            ["prat", "pro", "prong"]
        );
        // Original untouched
        assert_eq!(list.words(), ["o", "at", "ong"]);
    }

    #[test]
    fn retain_valid_reports_dropped() {
        let mut list = WordList::from_lines("don't\nstop\nbelieving\n42\n");
        let dropped = list.retain_valid();
        assert_eq!(list.words(), ["stop", "believing"]);
        assert_eq!(dropped, ["don't", "42"]);
    }

    #[test]
    fn to_prefix_map_round_trips() {
        let list = WordList::from_slice(COMMON);
        let map = list.to_prefix_map().unwrap();
        assert_eq!(map.word_count(), COMMON.len());
        assert!(list.iter().all(|w| map.contains_word(w)));
    }

    #[test]
    fn to_prefix_map_rejects_invalid() {
        let list = WordList::from_lines("fine\nnot fine\n");
        assert!(list.to_prefix_map().is_err());
    }

    #[test]
    fn collects_from_iterator() {
        let list: WordList = ["b", "a"].iter().map(ToString::to_string).collect();
        assert_eq!(list.words(), ["b", "a"]);
    }
}
