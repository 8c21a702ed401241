//! Tile rack as an immutable letter multiset

use crate::core::{Argument, SearchError, check_letters};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// A multiset of letter tiles
///
/// Letters are kept as counts, so duplicate tiles are tried once per distinct
/// letter during a search. Consuming a tile returns a new rack.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Rack {
    counts: BTreeMap<char, usize>,
    len: usize,
}

impl Rack {
    /// Create a rack from a string of tiles
    ///
    /// # Errors
    /// Returns `SearchError::InvalidInput` if any tile is not a letter.
    ///
    /// # Examples
    /// ```
    /// use wordsearch::search::Rack;
    ///
    /// let rack = Rack::new("tinfoeb").unwrap();
    /// assert_eq!(rack.len(), 7);
    /// assert!(rack.can_spell("often"));
    /// assert!(!rack.can_spell("toot"));
    /// assert!(Rack::new("ab?").is_err());
    /// ```
    pub fn new(tiles: &str) -> Result<Self, SearchError> {
        check_letters(tiles, Argument::Rack)?;

        let mut counts = BTreeMap::new();
        for tile in tiles.chars() {
            *counts.entry(tile).or_insert(0) += 1;
        }

        Ok(Self {
            counts,
            len: tiles.chars().count(),
        })
    }

    /// Distinct letters on the rack, in ascending order
    pub fn letters(&self) -> impl Iterator<Item = char> + '_ {
        self.counts.keys().copied()
    }

    /// How many tiles show `letter`
    #[must_use]
    pub fn count(&self, letter: char) -> usize {
        self.counts.get(&letter).copied().unwrap_or(0)
    }

    /// The rack with one `letter` tile removed
    ///
    /// Returns an unchanged copy if the letter is not on the rack.
    #[must_use]
    pub fn without(&self, letter: char) -> Self {
        let mut next = self.clone();
        if let Some(count) = next.counts.get_mut(&letter) {
            *count -= 1;
            if *count == 0 {
                next.counts.remove(&letter);
            }
            next.len -= 1;
        }
        next
    }

    /// True if every letter of `word` can be covered by a distinct tile
    #[must_use]
    pub fn can_spell(&self, word: &str) -> bool {
        let mut needed: BTreeMap<char, usize> = BTreeMap::new();
        for letter in word.chars() {
            *needed.entry(letter).or_insert(0) += 1;
        }
        needed
            .iter()
            .all(|(&letter, &count)| self.count(letter) >= count)
    }

    /// Total number of tiles
    #[must_use]
    pub const fn len(&self) -> usize {
        self.len
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }
}

impl FromStr for Rack {
    type Err = SearchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl fmt::Display for Rack {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (&letter, &count) in &self.counts {
            for _ in 0..count {
                write!(f, "{letter}")?;
            }
        }
        Ok(())
    }
}
