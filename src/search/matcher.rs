//! Wildcard template matching
//!
//! Consumes the template one slot at a time. A literal slot extends the prefix
//! without branching; a wildcard branches over the prefix's letter successors.

use super::template::{Slot, Template};
use crate::core::{PrefixMap, SearchError};

/// Every word that fits `template`, where `?` stands for any letter
///
/// # Errors
/// Returns `SearchError::InvalidInput` if `template` contains a character
/// that is neither a letter nor `?`.
///
/// # Examples
/// ```
/// use wordsearch::core::PrefixMap;
/// use wordsearch::search::match_template;
///
/// let map = PrefixMap::from_words(["ate", "are", "ale", "axe", "axes"]).unwrap();
/// assert_eq!(match_template("a?e", &map).unwrap(), vec!["ale", "are", "ate", "axe"]);
/// assert!(match_template("b??", &map).unwrap().is_empty());
/// ```
pub fn match_template(template: &str, map: &PrefixMap) -> Result<Vec<String>, SearchError> {
    let template = Template::new(template)?;
    Ok(match_parsed(&template, map))
}

/// Matching over an already parsed template
#[must_use]
pub fn match_parsed(template: &Template, map: &PrefixMap) -> Vec<String> {
    let mut words = Vec::new();
    let mut prefix = String::with_capacity(template.len());
    match_from(&mut prefix, template.slots(), map, &mut words);
    words
}

fn match_from(prefix: &mut String, slots: &[Slot], map: &PrefixMap, words: &mut Vec<String>) {
    // Dead branch: nothing in the map starts with this prefix
    let Some(successors) = map.successors(prefix) else {
        return;
    };

    let Some((slot, rest)) = slots.split_first() else {
        // Length is fixed by construction, so only wordhood is left to check
        if !prefix.is_empty() && successors.is_word() {
            words.push(prefix.clone());
        }
        return;
    };

    match *slot {
        Slot::Letter(letter) => {
            prefix.push(letter);
            match_from(prefix, rest, map, words);
            prefix.pop();
        }
        Slot::Any => {
            for letter in successors.letters() {
                prefix.push(letter);
                match_from(prefix, rest, map, words);
                prefix.pop();
            }
        }
    }
}
