//! Match templates: fixed-length patterns of letters and wildcards

use crate::core::{SearchError, WILDCARD, check_template};
use std::fmt;
use std::str::FromStr;

/// One position of a template
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Slot {
    /// Must be exactly this letter
    Letter(char),
    /// Any letter with a valid continuation
    Any,
}

/// A parsed match template such as `a?d`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Template {
    slots: Vec<Slot>,
}

impl Template {
    /// Parse a template of letters and `?` wildcards
    ///
    /// # Errors
    /// Returns `SearchError::InvalidInput` if the template contains anything
    /// other than letters and `?`.
    ///
    /// # Examples
    /// ```
    /// use wordsearch::search::{Slot, Template};
    ///
    /// let template = Template::new("a?d").unwrap();
    /// assert_eq!(template.slots(), &[Slot::Letter('a'), Slot::Any, Slot::Letter('d')]);
    /// assert!(template.matches("and"));
    /// assert!(Template::new("a*d").is_err());
    /// ```
    pub fn new(text: &str) -> Result<Self, SearchError> {
        check_template(text)?;

        let slots = text
            .chars()
            .map(|c| if c == WILDCARD { Slot::Any } else { Slot::Letter(c) })
            .collect();

        Ok(Self { slots })
    }

    #[must_use]
    pub fn slots(&self) -> &[Slot] {
        &self.slots
    }

    /// Number of positions (the length of every match)
    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Number of wildcard positions
    #[must_use]
    pub fn wildcards(&self) -> usize {
        self.slots.iter().filter(|s| **s == Slot::Any).count()
    }

    /// True if `word` has the template's length and agrees on every letter
    #[must_use]
    pub fn matches(&self, word: &str) -> bool {
        word.chars().count() == self.slots.len()
            && word.chars().zip(&self.slots).all(|(c, slot)| match slot {
                Slot::Letter(l) => *l == c,
                Slot::Any => true,
            })
    }
}

impl FromStr for Template {
    type Err = SearchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl fmt::Display for Template {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for slot in &self.slots {
            match slot {
                Slot::Letter(c) => write!(f, "{c}")?,
                Slot::Any => write!(f, "{WILDCARD}")?,
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_letters_and_wildcards() {
        let template = Template::new("??t").unwrap();
        assert_eq!(template.len(), 3);
        assert_eq!(template.wildcards(), 2);
        assert_eq!(template.slots()[2], Slot::Letter('t'));
        assert_eq!(template.to_string(), "??t");
    }

    #[test]
    fn empty_template() {
        let template = Template::new("").unwrap();
        assert!(template.is_empty());
        assert!(template.matches(""));
        assert!(!template.matches("a"));
    }

    #[test]
    fn matches_checks_length_and_letters() {
        let template: Template = "a?e".parse().unwrap();
        assert!(template.matches("axe"));
        assert!(template.matches("ate"));
        assert!(!template.matches("axes"));
        assert!(!template.matches("eat"));
    }

    #[test]
    fn rejects_other_symbols() {
        assert!(Template::new("a.e").is_err());
        assert!(Template::new("a?e!").is_err());
        assert!(Template::new("1??").is_err());
    }
}
