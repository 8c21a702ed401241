//! Formatting utilities for terminal output

use crate::search::QueryKind;

/// Lay words out in left-aligned columns no wider than `width` characters
///
/// Column width is the longest word plus two spaces of gutter.
#[must_use]
pub fn columns(words: &[String], width: usize) -> Vec<String> {
    let longest = words.iter().map(|w| w.chars().count()).max().unwrap_or(0);
    let cell = longest + 2;
    let per_line = (width / cell.max(1)).max(1);

    words
        .chunks(per_line)
        .map(|row| {
            let line: String = row.iter().map(|w| format!("{w:<cell$}")).collect();
            line.trim_end().to_string()
        })
        .collect()
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }
    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Plural suffix for a count
#[must_use]
pub const fn plural(count: usize) -> &'static str {
    if count == 1 { "" } else { "s" }
}

/// How the words of a search result are ordered
#[must_use]
pub const fn result_order(kind: QueryKind) -> &'static str {
    match kind {
        QueryKind::Autocomplete => "prefix first, then by next letter",
        QueryKind::Scrabble | QueryKind::Match => "alphabetical",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(list: &[&str]) -> Vec<String> {
        list.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn columns_wrap_at_width() {
        let lines = columns(&words(&["be", "in", "it", "of", "to"]), 12);
        // cell = 4, three per line
        assert_eq!(lines, vec!["be  in  it", "of  to"]);
    }

    #[test]
    fn columns_single_long_word() {
        let lines = columns(&words(&["extraordinarily"]), 5);
        assert_eq!(lines, vec!["extraordinarily"]);
    }

    #[test]
    fn columns_empty() {
        assert!(columns(&[], 80).is_empty());
    }

    #[test]
    fn progress_bar_empty() {
        let bar = create_progress_bar(0.0, 100.0, 10);
        assert_eq!(bar, "░░░░░░░░░░");
    }

    #[test]
    fn progress_bar_full() {
        let bar = create_progress_bar(100.0, 100.0, 10);
        assert_eq!(bar, "██████████");
    }

    #[test]
    fn progress_bar_half() {
        let bar = create_progress_bar(50.0, 100.0, 10);
        assert_eq!(bar, "█████░░░░░");
    }

    #[test]
    fn progress_bar_zero_max() {
        assert_eq!(create_progress_bar(3.0, 0.0, 4), "░░░░");
    }

    #[test]
    fn plural_suffix() {
        assert_eq!(plural(1), "");
        assert_eq!(plural(0), "s");
        assert_eq!(plural(2), "s");
    }

    #[test]
    fn result_order_by_kind() {
        assert_eq!(result_order(QueryKind::Scrabble), "alphabetical");
        assert_eq!(result_order(QueryKind::Match), "alphabetical");
        assert!(result_order(QueryKind::Autocomplete).starts_with("prefix first"));
    }
}
