//! Prefix map statistics
//!
//! Summarises the shape of a prefix map: size, word lengths and branching.

use crate::core::{PrefixMap, Successors};
use std::collections::BTreeMap;

/// Shape summary of a prefix map
#[derive(Debug, Clone, PartialEq)]
pub struct MapStatistics {
    pub words: usize,
    /// Number of keys, including the empty prefix
    pub prefixes: usize,
    pub longest_word: usize,
    /// Word length -> number of words with that length
    pub length_distribution: BTreeMap<usize, usize>,
    /// Words with no extensions
    pub leaf_words: usize,
    /// Letter successors of the empty prefix
    pub root_fanout: usize,
    /// Mean letter successors over prefixes that have any
    pub mean_branching: f64,
}

/// Compute statistics for `map`
#[must_use]
pub fn analyze_map(map: &PrefixMap) -> MapStatistics {
    let mut words = 0;
    let mut leaf_words = 0;
    let mut longest_word = 0;
    let mut length_distribution = BTreeMap::new();
    let mut branching_total = 0;
    let mut branching_nodes = 0;

    for (prefix, successors) in map.iter() {
        if successors.is_word() && !prefix.is_empty() {
            let len = prefix.chars().count();
            words += 1;
            longest_word = longest_word.max(len);
            *length_distribution.entry(len).or_insert(0) += 1;
            if successors.is_leaf() {
                leaf_words += 1;
            }
        }

        let fanout = successors.letter_count();
        if fanout > 0 {
            branching_total += fanout;
            branching_nodes += 1;
        }
    }

    let mean_branching = if branching_nodes == 0 {
        0.0
    } else {
        branching_total as f64 / branching_nodes as f64
    };

    MapStatistics {
        words,
        prefixes: map.len(),
        longest_word,
        length_distribution,
        leaf_words,
        root_fanout: map.successors("").map_or(0, Successors::letter_count),
        mean_branching,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::{COMMON, SHORT};

    #[test]
    fn short_list_statistics() {
        let map = PrefixMap::from_words(SHORT).unwrap();
        let stats = analyze_map(&map);

        assert_eq!(stats.words, 10);
        assert_eq!(stats.longest_word, 4);
        assert_eq!(stats.root_fanout, 6); // a b h i o t
        assert_eq!(stats.length_distribution.get(&1), Some(&1));
        assert_eq!(stats.length_distribution.get(&2), Some(&5));
        assert_eq!(stats.length_distribution.get(&3), Some(&2));
        assert_eq!(stats.length_distribution.get(&4), Some(&2));
        // Every word except "a" is a leaf
        assert_eq!(stats.leaf_words, 9);
        assert_eq!(stats.prefixes, map.len());
    }

    #[test]
    fn distribution_sums_to_word_count() {
        let map = PrefixMap::from_words(COMMON).unwrap();
        let stats = analyze_map(&map);

        let sum: usize = stats.length_distribution.values().sum();
        assert_eq!(sum, stats.words);
        assert_eq!(stats.words, COMMON.len());
        assert!(stats.mean_branching >= 1.0);
        assert!(stats.leaf_words <= stats.words);
    }

    #[test]
    fn empty_map_statistics() {
        let stats = analyze_map(&PrefixMap::new());
        assert_eq!(stats.words, 0);
        assert_eq!(stats.prefixes, 0);
        assert_eq!(stats.root_fanout, 0);
        assert!(stats.mean_branching.abs() < f64::EPSILON);
    }
}
