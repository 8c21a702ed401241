//! Successor sets stored under each prefix
//!
//! A prefix maps to the characters that may follow it. `Successor::End` is the
//! completion sentinel: it marks the prefix itself as a word and can never be
//! confused with a letter or with the empty prefix.

use std::collections::BTreeSet;
use std::fmt;

/// One element of a successor set
///
/// `End` sorts before every letter, so iteration yields the completion marker
/// first and then letters in ascending order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Successor {
    /// The prefix is itself a complete word
    End,
    /// The prefix can be extended by this letter
    Letter(char),
}

impl fmt::Display for Successor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::End => f.write_str("ε"),
            Self::Letter(c) => write!(f, "{c}"),
        }
    }
}

/// The set of successors of a prefix
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Successors {
    items: BTreeSet<Successor>,
}

impl Successors {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a successor; returns false if it was already present
    pub fn insert(&mut self, successor: Successor) -> bool {
        self.items.insert(successor)
    }

    #[inline]
    #[must_use]
    pub fn contains(&self, successor: Successor) -> bool {
        self.items.contains(&successor)
    }

    /// True if the completion marker is present
    #[inline]
    #[must_use]
    pub fn is_word(&self) -> bool {
        self.contains(Successor::End)
    }

    #[inline]
    #[must_use]
    pub fn has_letter(&self, letter: char) -> bool {
        self.contains(Successor::Letter(letter))
    }

    /// True if the set is exactly `{End}`: a word with no extensions
    #[inline]
    #[must_use]
    pub fn is_leaf(&self) -> bool {
        self.items.len() == 1 && self.is_word()
    }

    /// Letters that extend the prefix, in ascending order, never `End`
    pub fn letters(&self) -> impl Iterator<Item = char> + '_ {
        self.items.iter().filter_map(|s| match s {
            Successor::End => None,
            Successor::Letter(c) => Some(*c),
        })
    }

    /// Number of letter successors (the branching factor)
    #[must_use]
    pub fn letter_count(&self) -> usize {
        self.items.len() - usize::from(self.is_word())
    }

    pub fn iter(&self) -> impl Iterator<Item = Successor> + '_ {
        self.items.iter().copied()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl FromIterator<Successor> for Successors {
    fn from_iter<I: IntoIterator<Item = Successor>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}

impl fmt::Display for Successors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        for (i, successor) in self.items.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{successor}")?;
        }
        f.write_str("}")
    }
}
