//! Simple interactive CLI mode
//!
//! Line-based search prompt without the TUI.

use crate::search::{QueryKind, QueryType, Search, SearchEngine};
use std::io::{self, BufRead, Write};

const HELP: &str = "\
Commands:
  complete <prefix>      words starting with prefix      (alias: c)
  scrabble <rack> <n>    words using exactly n tiles      (alias: s)
  match <template>       words fitting template, ? = any  (alias: m)
  has <word>             is the word in the list?
  help                   show this help
  quit                   leave (aliases: q, exit)";

/// Maximum words printed per answer
const MAX_SHOWN: usize = 40;

/// What one input line asks for
#[derive(Debug, PartialEq, Eq)]
enum Command {
    Query(QueryType),
    Has(String),
    Help,
    Quit,
    Empty,
}

/// Parse one input line
fn parse_line(line: &str) -> Result<Command, String> {
    let mut parts = line.split_whitespace();
    let Some(name) = parts.next() else {
        return Ok(Command::Empty);
    };
    let args: Vec<&str> = parts.collect();
    let name = name.to_lowercase();

    match name.as_str() {
        "quit" | "q" | "exit" => return Ok(Command::Quit),
        "help" | "h" | "?" => return Ok(Command::Help),
        "has" => {
            return match args.as_slice() {
                [word] => Ok(Command::Has((*word).to_string())),
                _ => Err("usage: has <word>".to_string()),
            };
        }
        _ => {}
    }

    let kind = QueryKind::from_name(&name)
        .ok_or_else(|| format!("unknown command '{name}' (try 'help')"))?;

    let query = match (kind, args.as_slice()) {
        (QueryKind::Autocomplete, []) => kind.build("", 0),
        (QueryKind::Autocomplete | QueryKind::Match, [text]) => kind.build(text, 0),
        (QueryKind::Scrabble, [rack, size]) => {
            let size: usize = size
                .parse()
                .map_err(|_| format!("size must be a non-negative integer, got '{size}'"))?;
            kind.build(rack, size)
        }
        (QueryKind::Autocomplete, _) => return Err("usage: complete <prefix>".to_string()),
        (QueryKind::Scrabble, _) => return Err("usage: scrabble <rack> <size>".to_string()),
        (QueryKind::Match, _) => return Err("usage: match <template>".to_string()),
    };

    query.map(Command::Query).map_err(|e| e.to_string())
}

/// Run the prompt until `quit` or end of input
///
/// # Errors
///
/// Returns an error if reading from `input` or writing to `output` fails.
pub fn run_simple<R: BufRead, W: Write>(
    engine: &SearchEngine,
    mut input: R,
    mut output: W,
) -> io::Result<()> {
    writeln!(
        output,
        "Word search ready: {} words loaded. Type 'help' for commands.",
        engine.map().word_count()
    )?;

    let mut line = String::new();
    loop {
        write!(output, "> ")?;
        output.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            writeln!(output)?;
            break;
        }

        match parse_line(line.trim()) {
            Ok(Command::Quit) => break,
            Ok(Command::Empty) => {}
            Ok(Command::Help) => writeln!(output, "{HELP}")?,
            Ok(Command::Has(word)) => {
                let verdict = if engine.contains_word(&word) {
                    "is a word"
                } else {
                    "is not a word"
                };
                writeln!(output, "'{word}' {verdict}")?;
            }
            Ok(Command::Query(query)) => {
                let mut words = engine.run(&query);
                if query.kind() != QueryKind::Autocomplete {
                    words.sort();
                }
                write_words(&mut output, &query, &words)?;
            }
            Err(message) => writeln!(output, "error: {message}")?,
        }
    }

    writeln!(output, "Bye!")?;
    Ok(())
}

fn write_words<W: Write>(output: &mut W, query: &QueryType, words: &[String]) -> io::Result<()> {
    if words.is_empty() {
        return writeln!(output, "{}: no words", query.describe());
    }

    let shown = &words[..words.len().min(MAX_SHOWN)];
    writeln!(
        output,
        "{}: {} word{}",
        query.describe(),
        words.len(),
        if words.len() == 1 { "" } else { "s" }
    )?;
    writeln!(output, "  {}", shown.join(" "))?;
    if words.len() > shown.len() {
        writeln!(output, "  ...and {} more", words.len() - shown.len())?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::PrefixMap;
    use crate::wordlists::SHORT;
    use std::io::Cursor;

    fn session(input: &str) -> String {
        let map = PrefixMap::from_words(SHORT).unwrap();
        let engine = SearchEngine::new(&map);
        let mut output = Vec::new();
        run_simple(&engine, Cursor::new(input), &mut output).unwrap();
        String::from_utf8(output).unwrap()
    }

    #[test]
    fn parse_commands() {
        assert_eq!(parse_line("quit"), Ok(Command::Quit));
        assert_eq!(parse_line("Q"), Ok(Command::Quit));
        assert_eq!(parse_line(""), Ok(Command::Empty));
        assert_eq!(parse_line("help"), Ok(Command::Help));
        assert_eq!(parse_line("has cat"), Ok(Command::Has("cat".to_string())));
        assert!(matches!(
            parse_line("s eavhi 4"),
            Ok(Command::Query(QueryType::Scrabble(_)))
        ));
        assert!(matches!(
            parse_line("complete"),
            Ok(Command::Query(QueryType::Autocomplete(_)))
        ));
    }

    #[test]
    fn parse_errors() {
        assert!(parse_line("solve crane").is_err());
        assert!(parse_line("scrabble eavhi").is_err());
        assert!(parse_line("scrabble eavhi -1").is_err());
        assert!(parse_line("match a?d extra").is_err());
        assert!(parse_line("has").is_err());

        let err = parse_line("match a*d").unwrap_err();
        assert!(err.contains("template"), "{err}");
    }

    #[test]
    fn session_runs_queries() {
        let out = session("complete th\nscrabble tinfoeb 2\nmatch ???t\nquit\n");

        assert!(out.contains("complete th: 2 words\n  that the\n"), "{out}");
        assert!(
            out.contains("scrabble befinot 2: 5 words\n  be in it of to\n"),
            "{out}"
        );
        assert!(out.contains("match ???t: 1 word\n  that\n"), "{out}");
        assert!(out.trim_end().ends_with("Bye!"));
    }

    #[test]
    fn session_reports_empty_and_errors() {
        let out = session("m b???\nc x1\nhas have\nhas hav\n");

        assert!(out.contains("match b???: no words"), "{out}");
        assert!(out.contains("error: Invalid prefix \"x1\""), "{out}");
        assert!(out.contains("'have' is a word"));
        assert!(out.contains("'hav' is not a word"));
    }

    #[test]
    fn session_ends_at_eof() {
        let out = session("");
        assert!(out.starts_with("Word search ready: 10 words loaded."));
        assert!(out.trim_end().ends_with("Bye!"));
    }
}
