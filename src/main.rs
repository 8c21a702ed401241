//! Word Search - CLI
//!
//! Prefix-map word search with TUI and CLI modes: autocomplete, scrabble racks
//! and wildcard templates.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use log::LevelFilter;
use std::io;
use wordsearch::{
    commands::{
        BenchmarkConfig, SearchConfig, analyze_map, run_benchmark, run_search, run_simple,
    },
    core::PrefixMap,
    output::{
        print_benchmark_result, print_map_statistics, print_search_result, print_word_check,
    },
    search::{QueryKind, SearchEngine},
    wordlists::{COMMON, SHORT, WordList},
};

#[derive(Parser)]
#[command(
    name = "wordsearch",
    about = "Word search over a prefix map: autocomplete, scrabble racks and ? templates",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Wordlist: 'all' (default, common English words), 'short' (10 words), or path to file
    #[arg(short = 'w', long, global = true, default_value = "all")]
    wordlist: String,

    /// Increase log output (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default - live search as you type)
    Play,

    /// Simple CLI mode (line-based prompt without TUI)
    Simple,

    /// List words starting with a prefix
    #[command(alias = "c")]
    Complete {
        /// Prefix to complete
        prefix: String,

        /// Show at most this many words
        #[arg(short, long)]
        limit: Option<usize>,
    },

    /// List words spelled with exactly SIZE tiles from a rack
    #[command(alias = "s")]
    Scrabble {
        /// Available letters; repeats count as separate tiles
        rack: String,

        /// Word length
        size: usize,

        /// Show at most this many words
        #[arg(short, long)]
        limit: Option<usize>,
    },

    /// List words fitting a template where ? matches any letter
    #[command(alias = "m")]
    Match {
        /// Template such as 'a?d'
        template: String,

        /// Show at most this many words
        #[arg(short, long)]
        limit: Option<usize>,
    },

    /// Check whether a word is in the list
    Has {
        /// Word to look up
        word: String,
    },

    /// Show prefix map statistics
    Stats,

    /// Benchmark random queries against the map
    Benchmark {
        /// Number of random queries to run
        #[arg(short = 'n', long, default_value = "300")]
        count: usize,

        /// Seed for query generation
        #[arg(long, default_value = "42")]
        seed: u64,
    },
}

/// Set up logging from the -v count; `RUST_LOG` takes precedence
fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
}

/// Load the word list selected by the -w flag
///
/// - "all": embedded common English words
/// - "short": embedded ten-word list
/// - "<path>": one word per line from a file
fn load_wordlist(wordlist_mode: &str) -> Result<WordList> {
    let mut words = match wordlist_mode {
        "all" => WordList::from_slice(COMMON),
        "short" => WordList::from_slice(SHORT),
        path => WordList::load(path)
            .with_context(|| format!("Failed to load word list from '{path}'"))?,
    };

    let dropped = words.retain_valid();
    if !dropped.is_empty() {
        eprintln!(
            "Skipped {} invalid entr{} in word list",
            dropped.len(),
            if dropped.len() == 1 { "y" } else { "ies" }
        );
    }
    Ok(words)
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let words = load_wordlist(&cli.wordlist)?;
    let map = words
        .to_prefix_map()
        .context("Failed to build prefix map")?;
    let engine = SearchEngine::new(&map);

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    match command {
        Commands::Play => run_play_command(engine),
        Commands::Simple => {
            run_simple(&engine, io::stdin().lock(), io::stdout().lock())?;
            Ok(())
        }
        Commands::Complete { prefix, limit } => {
            run_query_command(&engine, QueryKind::Autocomplete, &prefix, 0, limit)
        }
        Commands::Scrabble { rack, size, limit } => {
            run_query_command(&engine, QueryKind::Scrabble, &rack, size, limit)
        }
        Commands::Match { template, limit } => {
            run_query_command(&engine, QueryKind::Match, &template, 0, limit)
        }
        Commands::Has { word } => {
            print_word_check(&word, engine.contains_word(&word));
            Ok(())
        }
        Commands::Stats => {
            run_stats_command(&map);
            Ok(())
        }
        Commands::Benchmark { count, seed } => {
            run_benchmark_command(&engine, &words, count, seed);
            Ok(())
        }
    }
}

fn run_query_command(
    engine: &SearchEngine,
    kind: QueryKind,
    input: &str,
    size: usize,
    limit: Option<usize>,
) -> Result<()> {
    let query = kind.build(input, size)?;
    let result = run_search(engine, SearchConfig::new(query).with_limit(limit));
    print_search_result(&result);
    Ok(())
}

fn run_stats_command(map: &PrefixMap) {
    let stats = analyze_map(map);
    print_map_statistics(&stats);
}

fn run_benchmark_command(engine: &SearchEngine, words: &WordList, count: usize, seed: u64) {
    println!("Running benchmark on {count} random queries (seed {seed})...");

    let config = BenchmarkConfig {
        seed,
        ..BenchmarkConfig::new(count)
    };
    let result = run_benchmark(engine, words, &config);
    print_benchmark_result(&result);
}

fn run_play_command(engine: SearchEngine) -> Result<()> {
    use wordsearch::interactive::{App, run_tui};

    let app = App::new(engine);
    run_tui(app)
}
