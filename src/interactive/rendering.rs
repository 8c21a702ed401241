//! TUI rendering with ratatui
//!
//! Live search view: header, input, results and status.

use super::app::{App, MessageStyle};
use crate::output::formatters::{columns, plural};
use crate::search::QueryKind;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, Paragraph, Wrap},
};

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Length(3), // Input area
            Constraint::Min(8),    // Main content
            Constraint::Length(3), // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);
    render_input(f, app, chunks[1]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(70), Constraint::Percentage(30)])
        .split(chunks[2]);

    render_results(f, app, main_chunks[0]);
    render_messages(f, app, main_chunks[1]);

    render_status(f, app, chunks[3]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("🔎 WORD SEARCH - Interactive Mode")
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

fn mode_color(kind: QueryKind) -> Color {
    match kind {
        QueryKind::Autocomplete => Color::Yellow,
        QueryKind::Scrabble => Color::Green,
        QueryKind::Match => Color::Magenta,
    }
}

fn render_input(f: &mut Frame, app: &App, area: Rect) {
    let color = mode_color(app.kind);
    let title = match (app.kind, app.wildcard_count()) {
        (QueryKind::Scrabble, _) => {
            format!(" {} ({}) | size {} ", app.kind, app.input_hint(), app.size)
        }
        (QueryKind::Match, Some(wildcards)) => format!(
            " {} ({}) | {wildcards} wildcard{} ",
            app.kind,
            app.input_hint(),
            plural(wildcards)
        ),
        _ => format!(" {} ({}) ", app.kind, app.input_hint()),
    };

    let input = Paragraph::new(app.input_buffer.as_str())
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .style(Style::default().fg(color)),
        );

    f.render_widget(input, area);
}

fn render_results(f: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .title(format!(" Results ({}) ", app.results.len()))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded);

    let content: Vec<Line> = if let Some(ref error) = app.error {
        vec![Line::from(Span::styled(
            error.clone(),
            Style::default().fg(Color::Red),
        ))]
    } else if app.results.is_empty() {
        vec![Line::from(Span::styled(
            "No words found",
            Style::default().fg(Color::DarkGray),
        ))]
    } else {
        // Pack words into rows that fit the panel
        let inner_width = usize::from(area.width.saturating_sub(2));
        let visible_rows = usize::from(area.height.saturating_sub(2));
        columns(&app.results, inner_width)
            .into_iter()
            .take(visible_rows)
            .map(Line::from)
            .collect()
    };

    let paragraph = Paragraph::new(content)
        .block(block)
        .wrap(Wrap { trim: false });
    f.render_widget(paragraph, area);
}

fn render_messages(f: &mut Frame, app: &App, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let messages_list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));

    f.render_widget(messages_list, area);
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(20),
            Constraint::Percentage(25),
            Constraint::Percentage(55),
        ])
        .split(area);

    let mode = Paragraph::new(format!("Mode: {}", app.kind))
        .alignment(Alignment::Center)
        .style(Style::default().fg(mode_color(app.kind)));
    f.render_widget(mode, chunks[0]);

    let timing = Paragraph::new(format!(
        "{} words | {:.2?}",
        app.results.len(),
        app.last_duration
    ))
    .alignment(Alignment::Center);
    f.render_widget(timing, chunks[1]);

    let help = Paragraph::new("Esc: Quit | TAB: Mode | ↑/↓: Size | Ctrl-U: Clear")
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[2]);
}
