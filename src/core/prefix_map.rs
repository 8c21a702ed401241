//! Prefix map: a trie flattened into a hash map
//!
//! Every prefix of every inserted word (including the empty prefix) is a key.
//! Its value is the set of characters that may follow it, plus
//! [`Successor::End`] when the prefix is itself a word.

use super::error::SearchError;
use super::successors::{Successor, Successors};
use super::validate::check_word;
use rustc_hash::FxHashMap;
use std::time::Instant;

/// Mapping from prefix to the successors that extend it
///
/// # Examples
/// ```
/// use wordsearch::core::PrefixMap;
///
/// let map = PrefixMap::from_words(["at", "as"]).unwrap();
/// assert!(map.contains_word("at"));
/// assert!(!map.contains_word("a"));
///
/// let next: Vec<char> = map.successors("a").unwrap().letters().collect();
/// assert_eq!(next, vec!['s', 't']);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PrefixMap {
    entries: FxHashMap<String, Successors>,
}

impl PrefixMap {
    /// Create an empty prefix map
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a prefix map from a sequence of words
    ///
    /// # Errors
    /// Returns `SearchError::InvalidInput` for the first word that is empty or
    /// contains a non-alphabetic character.
    pub fn from_words<I, S>(words: I) -> Result<Self, SearchError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let start = Instant::now();
        let mut map = Self::new();
        let mut inserted = 0usize;

        for word in words {
            map.insert_word(word.as_ref())?;
            inserted += 1;
        }

        log::info!(
            "built prefix map: {inserted} words, {} prefixes in {:.2?}",
            map.len(),
            start.elapsed()
        );
        Ok(map)
    }

    /// Add a word and all of its prefixes
    ///
    /// Each prefix gains the next letter of the word as a successor and the
    /// word itself gains [`Successor::End`]. Existing successors are never
    /// duplicated, so inserting a word twice leaves the map unchanged.
    ///
    /// If the word is already a key its prefixes are all present, so the
    /// per-letter scan is skipped; the completion marker is still ensured.
    ///
    /// # Errors
    /// Returns `SearchError::InvalidInput` if `word` is empty or contains a
    /// non-alphabetic character. The map is not modified in that case.
    pub fn insert_word(&mut self, word: &str) -> Result<(), SearchError> {
        check_word(word)?;

        if !self.entries.contains_key(word) {
            for (pos, letter) in word.char_indices() {
                self.entries
                    .entry(word[..pos].to_string())
                    .or_default()
                    .insert(Successor::Letter(letter));
            }
        }

        self.entries
            .entry(word.to_string())
            .or_default()
            .insert(Successor::End);

        log::trace!("inserted {word:?}");
        Ok(())
    }

    /// True if `word` was inserted as a word
    ///
    /// The empty string is never a word, even though it is always a key of a
    /// non-empty map.
    #[must_use]
    pub fn contains_word(&self, word: &str) -> bool {
        !word.is_empty() && self.entries.get(word).is_some_and(Successors::is_word)
    }

    /// True if `prefix` is a key (a prefix of some word, or a word)
    #[inline]
    #[must_use]
    pub fn contains_prefix(&self, prefix: &str) -> bool {
        self.entries.contains_key(prefix)
    }

    /// Successors of `prefix`, or `None` if no word starts with it
    #[inline]
    #[must_use]
    pub fn successors(&self, prefix: &str) -> Option<&Successors> {
        self.entries.get(prefix)
    }

    /// Every stored word, in unspecified order
    #[must_use]
    pub fn to_word_list(&self) -> Vec<String> {
        self.entries
            .iter()
            .filter(|(_, successors)| successors.is_word())
            .map(|(prefix, _)| prefix.clone())
            .collect()
    }

    /// Number of stored words
    #[must_use]
    pub fn word_count(&self) -> usize {
        self.entries.values().filter(|s| s.is_word()).count()
    }

    /// Iterate over `(prefix, successors)` entries in unspecified order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Successors)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Number of prefix entries (including the empty prefix)
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
