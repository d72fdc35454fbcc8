//! TUI rendering with ratatui
//!
//! Manual cross-out board, live elimination and messages.

use super::app::{App, MessageStyle};
use crate::core::{FlamesLetter, NameSide};
use crate::manual::LetterKey;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Gauge, List, ListItem, Paragraph},
};

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Main content
            Constraint::Length(3), // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(60), // Names
            Constraint::Percentage(40), // Result and messages
        ])
        .split(chunks[1]);

    render_board(f, app, main_chunks[0]);
    render_info_panel(f, app, main_chunks[1]);

    render_status(f, app, chunks[2]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("🔥 FLAMES - Cross It Out Yourself")
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

fn name_line(app: &App, side: NameSide) -> Line<'static> {
    let name = app.tracker.name(side);
    let mut spans = Vec::with_capacity(name.len() * 2);

    for (position, &letter) in name.letters().iter().enumerate() {
        let key = LetterKey::new(side, position);
        let mut style = if app.tracker.is_crossed(key) {
            Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::CROSSED_OUT)
        } else {
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD)
        };
        if key == app.cursor {
            style = style.add_modifier(Modifier::REVERSED);
        }
        spans.push(Span::styled(letter.to_uppercase().to_string(), style));
        spans.push(Span::raw(" "));
    }

    Line::from(spans)
}

fn render_board(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(4), Constraint::Length(4), Constraint::Min(3)])
        .split(area);

    for (side, chunk) in [(NameSide::First, chunks[0]), (NameSide::Second, chunks[1])] {
        let title = format!(" {} ", app.tracker.name(side).display());
        let style = if app.cursor.side == side {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default()
        };
        let paragraph = Paragraph::new(name_line(app, side)).block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(style),
        );
        f.render_widget(paragraph, chunk);
    }

    render_rounds(f, app, chunks[2]);
}

fn render_rounds(f: &mut Frame, app: &App, area: Rect) {
    let outcome = app.elimination();
    let mut items = vec![ListItem::new(sequence(&FlamesLetter::SEQUENCE))];

    for (i, round) in outcome.rounds.iter().enumerate() {
        items.push(ListItem::new(Line::from(vec![
            Span::raw(format!("{}: ", i + 1)),
            Span::styled(
                format!("-{} ", round.eliminated),
                Style::default().fg(Color::Red),
            ),
            Span::raw(sequence(&round.remaining)),
        ])));
    }

    let list = List::new(items).block(
        Block::default()
            .title(format!(" Elimination (count {}) ", app.tracker.remaining_count()))
            .borders(Borders::ALL),
    );
    f.render_widget(list, area);
}

fn sequence(letters: &[FlamesLetter]) -> String {
    crate::output::formatters::sequence_line(letters)
}

fn render_info_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(6), // Result
            Constraint::Length(3), // Progress
            Constraint::Min(3),    // Messages
        ])
        .split(area);

    render_result(f, app, chunks[0]);
    render_progress(f, app, chunks[1]);
    render_messages(f, app, chunks[2]);
}

fn render_result(f: &mut Frame, app: &App, area: Rect) {
    let relationship = app.current_result().resolve();
    let maximal = app.tracker.is_maximal();

    let content = vec![
        Line::from(vec![
            Span::raw("Result:    "),
            Span::styled(
                format!("{} - {}", relationship.letter, relationship.label),
                Style::default()
                    .fg(if maximal { Color::Green } else { Color::Yellow })
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(relationship.meaning),
        Line::from(format!("Remaining: {} letters", app.tracker.remaining_count())),
        Line::from(if maximal {
            "Nothing left to cross out".to_string()
        } else {
            format!("Full count would be {}", app.tracker.batch_remainder())
        }),
    ];

    let paragraph = Paragraph::new(content).block(
        Block::default()
            .title(" Current Result ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(paragraph, area);
}

fn render_progress(f: &mut Frame, app: &App, area: Rect) {
    let total = app.tracker.name(NameSide::First).len() + app.tracker.name(NameSide::Second).len();
    let target = total - app.tracker.batch_remainder();
    let crossed = app.tracker.crossed_count();
    let percent = if target == 0 {
        100
    } else {
        (crossed * 100 / target).min(100) as u16
    };

    let gauge = Gauge::default()
        .block(Block::default().title(" Crossed Out ").borders(Borders::ALL))
        .gauge_style(Style::default().fg(Color::Cyan))
        .percent(percent)
        .label(format!("{crossed}/{target} letters"));
    f.render_widget(gauge, area);
}

fn render_messages(f: &mut Frame, app: &App, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default().fg(Color::Green),
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
        .constraints([Constraint::Percentage(30), Constraint::Percentage(70)])
        .split(area);

    let crossed = Paragraph::new(format!("Crossed: {}", app.tracker.crossed_count()))
        .alignment(Alignment::Center);
    f.render_widget(crossed, chunks[0]);

    let help = Paragraph::new(
        "←/→: Move | ↑/↓/Tab: Switch | Space: Toggle | c: Complete | r: Reset | q: Quit",
    )
    .alignment(Alignment::Center)
    .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[1]);
}
