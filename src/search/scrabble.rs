//! Rack word formation
//!
//! Draws tiles one at a time, and only when the drawn letter is a successor of
//! the current prefix. Dead branches are cut at the first letter that leaves
//! the prefix map instead of after a full permutation.

use super::rack::Rack;
use crate::core::{PrefixMap, SearchError};

/// Every word that uses exactly `size` tiles from `rack`
///
/// Each tile is used at most once; leftover tiles are allowed. Each distinct
/// word appears once, even when the rack has duplicate tiles.
///
/// # Errors
/// Returns `SearchError::InvalidInput` if `rack` contains a non-alphabetic
/// character.
///
/// # Examples
/// ```
/// use wordsearch::core::PrefixMap;
/// use wordsearch::search::scrabble;
///
/// let map = PrefixMap::from_words(["the", "be", "to", "have", "it"]).unwrap();
/// assert_eq!(scrabble("eavhi", 4, &map).unwrap(), vec!["have"]);
/// assert_eq!(scrabble("theob", 2, &map).unwrap(), vec!["be", "to"]);
/// assert!(scrabble("eavhi", 0, &map).unwrap().is_empty());
/// ```
pub fn scrabble(rack: &str, size: usize, map: &PrefixMap) -> Result<Vec<String>, SearchError> {
    let rack = Rack::new(rack)?;
    Ok(scrabble_rack(&rack, size, map))
}

/// Search over an already validated rack
#[must_use]
pub fn scrabble_rack(rack: &Rack, size: usize, map: &PrefixMap) -> Vec<String> {
    let mut words = Vec::new();
    let mut prefix = String::with_capacity(size);
    scrabble_from(&mut prefix, rack.clone(), size, map, &mut words);
    words
}

/// `remaining` counts the tiles still to place; a word qualifies only on the
/// draw that brings it to zero, i.e. when it has used exactly the requested
/// number of tiles from the root call.
fn scrabble_from(
    prefix: &mut String,
    rack: Rack,
    remaining: usize,
    map: &PrefixMap,
    words: &mut Vec<String>,
) {
    if remaining == 0 || rack.is_empty() {
        return;
    }

    let Some(successors) = map.successors(prefix) else {
        return;
    };

    for letter in rack.letters() {
        if !successors.has_letter(letter) {
            continue;
        }

        prefix.push(letter);
        if remaining == 1 && map.contains_word(prefix) {
            words.push(prefix.clone());
        }
        scrabble_from(prefix, rack.without(letter), remaining - 1, map, words);
        prefix.pop();
    }
}
