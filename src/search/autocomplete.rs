//! Prefix completion
//!
//! Walks the prefix map depth-first from `prefix`, collecting every word below
//! it. A prefix that is itself a word is emitted before its extensions, and
//! extensions follow successor order (ascending letters).

use crate::core::{Argument, PrefixMap, SearchError, check_letters};

/// Every word in `map` that starts with `prefix`, including `prefix` itself
///
/// # Errors
/// Returns `SearchError::InvalidInput` if `prefix` contains a non-alphabetic
/// character.
///
/// # Examples
/// ```
/// use wordsearch::core::PrefixMap;
/// use wordsearch::search::autocomplete;
///
/// let map = PrefixMap::from_words(["a", "at", "are", "be"]).unwrap();
/// assert_eq!(autocomplete("a", &map).unwrap(), vec!["a", "are", "at"]);
/// assert!(autocomplete("x", &map).unwrap().is_empty());
/// ```
pub fn autocomplete(prefix: &str, map: &PrefixMap) -> Result<Vec<String>, SearchError> {
    check_letters(prefix, Argument::Prefix)?;
    Ok(complete_unchecked(prefix, map))
}

/// Completion over an already validated prefix
pub(crate) fn complete_unchecked(prefix: &str, map: &PrefixMap) -> Vec<String> {
    let mut words = Vec::new();
    let mut buffer = prefix.to_string();
    complete_from(&mut buffer, map, &mut words);
    words
}

fn complete_from(prefix: &mut String, map: &PrefixMap, words: &mut Vec<String>) {
    // Unknown prefix: nothing completes it
    let Some(successors) = map.successors(prefix) else {
        return;
    };

    if successors.is_leaf() {
        words.push(prefix.clone());
        return;
    }

    if successors.is_word() {
        words.push(prefix.clone());
    }

    // letters() never yields End, so the recursion always grows the prefix
    for letter in successors.letters() {
        prefix.push(letter);
        complete_from(prefix, map, words);
        prefix.pop();
    }
}
