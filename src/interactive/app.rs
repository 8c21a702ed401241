//! TUI application state and logic

use crate::search::{QueryKind, SearchEngine, Template};
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use std::time::{Duration, Instant};

/// Largest scrabble size reachable with the arrow keys
pub const MAX_SIZE: usize = 15;

/// Application state
pub struct App<'a> {
    pub engine: SearchEngine<'a>,
    pub kind: QueryKind,
    pub input_buffer: String,
    /// Word length for scrabble queries
    pub size: usize,
    pub results: Vec<String>,
    /// Validation error for the current input, shown instead of results
    pub error: Option<String>,
    pub last_duration: Duration,
    pub messages: Vec<Message>,
    pub should_quit: bool,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Error,
}

impl<'a> App<'a> {
    #[must_use]
    pub fn new(engine: SearchEngine<'a>) -> Self {
        let mut app = Self {
            engine,
            kind: QueryKind::Autocomplete,
            input_buffer: String::new(),
            size: 3,
            results: Vec::new(),
            error: None,
            last_duration: Duration::ZERO,
            messages: vec![
                Message {
                    text: format!("{} words loaded.", engine.map().word_count()),
                    style: MessageStyle::Info,
                },
                Message {
                    text: "Type to search. TAB switches mode.".to_string(),
                    style: MessageStyle::Info,
                },
            ],
            should_quit: false,
        };
        app.refresh();
        app
    }

    /// Re-run the current query against the map
    pub fn refresh(&mut self) {
        let start = Instant::now();
        match self.kind.build(&self.input_buffer, self.size) {
            Ok(query) => {
                let mut words = self.engine.run(&query);
                if self.kind != QueryKind::Autocomplete {
                    words.sort();
                }
                self.results = words;
                self.error = None;
            }
            Err(e) => {
                self.results.clear();
                self.error = Some(e.to_string());
            }
        }
        self.last_duration = start.elapsed();
    }

    pub fn push_char(&mut self, c: char) {
        self.input_buffer.push(c);
        self.refresh();
    }

    pub fn pop_char(&mut self) {
        if self.input_buffer.pop().is_some() {
            self.refresh();
        }
    }

    pub fn clear_input(&mut self) {
        self.input_buffer.clear();
        self.refresh();
    }

    /// Switch to the next search mode, keeping the input
    pub fn cycle_mode(&mut self) {
        self.kind = self.kind.next();
        self.add_message(&format!("Mode: {}", self.kind), MessageStyle::Info);
        self.refresh();
    }

    pub fn increase_size(&mut self) {
        if self.size < MAX_SIZE {
            self.size += 1;
            self.refresh();
        } else {
            self.add_message(&format!("Size is capped at {MAX_SIZE}"), MessageStyle::Error);
        }
    }

    pub fn decrease_size(&mut self) {
        if self.size > 1 {
            self.size -= 1;
            self.refresh();
        } else {
            self.add_message("Size must be at least 1", MessageStyle::Error);
        }
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        // Keep only last 5 messages
        if self.messages.len() > 5 {
            self.messages.remove(0);
        }
    }

    /// Wildcards in the current match template, if the input is one
    #[must_use]
    pub fn wildcard_count(&self) -> Option<usize> {
        if self.kind != QueryKind::Match {
            return None;
        }
        Template::new(&self.input_buffer)
            .ok()
            .map(|template| template.wildcards())
    }

    /// Hint shown in the input box title
    #[must_use]
    pub const fn input_hint(&self) -> &'static str {
        match self.kind {
            QueryKind::Autocomplete => "prefix",
            QueryKind::Scrabble => "rack letters",
            QueryKind::Match => "template, ? = any letter",
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(app: App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {err}");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }

            match key.code {
                KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                    app.should_quit = true;
                }
                KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                    app.clear_input();
                }
                KeyCode::Esc => {
                    app.should_quit = true;
                }
                KeyCode::Tab => app.cycle_mode(),
                KeyCode::Up => app.increase_size(),
                KeyCode::Down => app.decrease_size(),
                KeyCode::Backspace => app.pop_char(),
                KeyCode::Char(c) => app.push_char(c),
                _ => {}
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::PrefixMap;
    use crate::wordlists::SHORT;

    fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            app.push_char(c);
        }
    }

    #[test]
    fn starts_with_every_word() {
        let map = PrefixMap::from_words(SHORT).unwrap();
        let app = App::new(SearchEngine::new(&map));

        // Empty prefix completes to the whole list
        assert_eq!(app.kind, QueryKind::Autocomplete);
        assert_eq!(app.results.len(), SHORT.len());
        assert!(app.error.is_none());
    }

    #[test]
    fn typing_requeries() {
        let map = PrefixMap::from_words(SHORT).unwrap();
        let mut app = App::new(SearchEngine::new(&map));

        type_text(&mut app, "th");
        assert_eq!(app.results, vec!["that", "the"]);

        app.push_char('e');
        assert_eq!(app.results, vec!["the"]);

        app.pop_char();
        app.pop_char();
        assert_eq!(app.input_buffer, "t");
        assert_eq!(app.results, vec!["that", "the", "to"]);
    }

    #[test]
    fn invalid_input_shows_error() {
        let map = PrefixMap::from_words(SHORT).unwrap();
        let mut app = App::new(SearchEngine::new(&map));

        type_text(&mut app, "t?");
        assert!(app.results.is_empty());
        let error = app.error.clone().unwrap();
        assert!(error.contains("prefix"), "{error}");

        // Same text is a valid template
        app.cycle_mode();
        app.cycle_mode();
        assert_eq!(app.kind, QueryKind::Match);
        assert!(app.error.is_none());
        assert_eq!(app.results, vec!["to"]);
    }

    #[test]
    fn scrabble_size_adjusts() {
        let map = PrefixMap::from_words(SHORT).unwrap();
        let mut app = App::new(SearchEngine::new(&map));

        app.cycle_mode();
        assert_eq!(app.kind, QueryKind::Scrabble);
        type_text(&mut app, "tinfoeb");

        app.decrease_size();
        assert_eq!(app.size, 2);
        assert_eq!(app.results, vec!["be", "in", "it", "of", "to"]);

        app.decrease_size();
        app.decrease_size();
        assert_eq!(app.size, 1);
        assert!(app.results.is_empty());

        for _ in 0..MAX_SIZE + 3 {
            app.increase_size();
        }
        assert_eq!(app.size, MAX_SIZE);
        let last = app.messages.last().unwrap();
        assert_eq!(last.style, MessageStyle::Error);
    }

    #[test]
    fn clear_and_messages() {
        let map = PrefixMap::from_words(SHORT).unwrap();
        let mut app = App::new(SearchEngine::new(&map));

        type_text(&mut app, "have");
        app.clear_input();
        assert!(app.input_buffer.is_empty());
        assert_eq!(app.results.len(), SHORT.len());

        for _ in 0..10 {
            app.cycle_mode();
        }
        assert_eq!(app.messages.len(), 5);
        assert_eq!(app.kind, QueryKind::Scrabble);
        assert_eq!(app.input_hint(), "rack letters");
    }

    #[test]
    fn wildcard_count_only_in_match_mode() {
        let map = PrefixMap::from_words(SHORT).unwrap();
        let mut app = App::new(SearchEngine::new(&map));

        type_text(&mut app, "?h?");
        assert_eq!(app.wildcard_count(), None);

        app.cycle_mode();
        app.cycle_mode();
        assert_eq!(app.kind, QueryKind::Match);
        assert_eq!(app.wildcard_count(), Some(2));
        assert_eq!(app.results, vec!["the"]);

        app.push_char('-');
        assert_eq!(app.wildcard_count(), None);
    }
}
