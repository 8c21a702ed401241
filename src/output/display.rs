//! Display functions for command results

use super::formatters::{columns, create_progress_bar, plural, result_order};
use crate::commands::{BenchmarkResult, MapStatistics, SearchResult};
use colored::Colorize;

const LINE_WIDTH: usize = 60;

/// Print the words found by a search
pub fn print_search_result(result: &SearchResult) {
    println!("\n{}", "─".repeat(LINE_WIDTH).cyan());
    println!(
        "{} {}",
        "Query:".bright_cyan().bold(),
        result.label.bright_yellow().bold()
    );
    println!("{}", "─".repeat(LINE_WIDTH).cyan());

    if result.words.is_empty() {
        println!("\n{}", "No words found.".red());
        return;
    }

    println!();
    for line in columns(&result.words, LINE_WIDTH) {
        println!("  {line}");
    }

    println!();
    let summary = if result.truncated() {
        format!(
            "Showing {} of {} words ({:.2?})",
            result.words.len(),
            result.total,
            result.duration
        )
    } else {
        format!(
            "{} word{} ({:.2?})",
            result.total,
            plural(result.total),
            result.duration
        )
    };
    println!("{}", summary.green().bold());
    println!("{}", format!("Order: {}", result_order(result.kind)).dimmed());
}

/// Print whether a single word is present
pub fn print_word_check(word: &str, present: bool) {
    if present {
        println!("✅ {} is in the word list", word.bright_yellow().bold());
    } else {
        println!("❌ {} is not in the word list", word.bright_yellow().bold());
    }
}

/// Print prefix map statistics
pub fn print_map_statistics(stats: &MapStatistics) {
    println!("\n{}", "═".repeat(LINE_WIDTH).cyan());
    println!(" {} ", "PREFIX MAP".bright_cyan().bold());
    println!("{}", "═".repeat(LINE_WIDTH).cyan());

    println!("\n📊 {}", "Size:".bright_cyan().bold());
    println!(
        "   Words:            {}",
        stats.words.to_string().bright_yellow().bold()
    );
    println!("   Prefixes:         {}", stats.prefixes);
    println!("   Leaf words:       {}", stats.leaf_words);
    println!("   Longest word:     {}", stats.longest_word);
    println!("   Root fan-out:     {}", stats.root_fanout);
    println!("   Mean branching:   {:.2}", stats.mean_branching);

    let Some(&peak) = stats.length_distribution.values().max() else {
        return;
    };

    println!("\n📈 {}", "Word lengths:".bright_cyan().bold());
    for (&len, &count) in &stats.length_distribution {
        let pct = count as f64 / stats.words as f64 * 100.0;
        let bar = create_progress_bar(count as f64, peak as f64, 30);
        println!("   {len:2}: {} {count:5} ({pct:5.1}%)", bar.green());
    }
}

/// Print the result of a benchmark
pub fn print_benchmark_result(result: &BenchmarkResult) {
    println!("\n{}", "═".repeat(LINE_WIDTH).cyan());
    println!(" {} ", "BENCHMARK RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(LINE_WIDTH).cyan());

    println!("\n📊 {}", "Performance:".bright_cyan().bold());
    println!("   Queries run:      {}", result.total_queries);
    println!("   Time taken:       {:.3}s", result.duration.as_secs_f64());
    println!(
        "   Queries/second:   {}",
        format!("{:.0}", result.queries_per_second)
            .bright_yellow()
            .bold()
    );

    let self_hits = result.self_hits();
    let check = if self_hits == result.total_queries {
        format!("{self_hits}/{}", result.total_queries).green()
    } else {
        format!("{self_hits}/{}", result.total_queries).red()
    };
    println!("   Source found:     {check}");

    println!("\n📈 {}", "By query kind:".bright_cyan().bold());
    for (name, stats) in &result.per_kind {
        println!(
            "   {name:<9} {:5} queries | hits min {:4} max {:5} mean {:8.1}",
            stats.queries,
            stats.min_hits,
            stats.max_hits,
            stats.mean_hits()
        );
    }
}
