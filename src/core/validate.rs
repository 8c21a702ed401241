//! Input validation shared by the builder and the query entry points

use super::error::{Argument, SearchError};

/// Wildcard accepted in match templates
pub const WILDCARD: char = '?';

/// True if every character of `text` is alphabetic (vacuously true for "")
#[inline]
#[must_use]
pub fn is_letters(text: &str) -> bool {
    text.chars().all(char::is_alphabetic)
}

/// True if `text` is a well-formed word: non-empty and letters only
///
/// # Examples
/// ```
/// use wordsearch::core::is_word;
///
/// assert!(is_word("have"));
/// assert!(!is_word(""));
/// assert!(!is_word("don't"));
/// ```
#[inline]
#[must_use]
pub fn is_word(text: &str) -> bool {
    !text.is_empty() && is_letters(text)
}

pub(crate) fn check_word(word: &str) -> Result<(), SearchError> {
    if is_word(word) {
        Ok(())
    } else {
        Err(SearchError::invalid(Argument::Word, word))
    }
}

/// Prefixes and racks may be empty
pub(crate) fn check_letters(text: &str, argument: Argument) -> Result<(), SearchError> {
    if is_letters(text) {
        Ok(())
    } else {
        Err(SearchError::invalid(argument, text))
    }
}

pub(crate) fn check_template(template: &str) -> Result<(), SearchError> {
    if template
        .chars()
        .all(|c| c == WILDCARD || c.is_alphabetic())
    {
        Ok(())
    } else {
        Err(SearchError::invalid(Argument::Template, template))
    }
}
