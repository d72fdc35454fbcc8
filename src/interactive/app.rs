//! TUI application state and logic

use crate::core::{FlamesLetter, NameSide};
use crate::engine::{Elimination, EliminationOutcome};
use crate::manual::{CrossOutTracker, LetterKey, ToggleOutcome};
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

/// Application state
pub struct App {
    pub tracker: CrossOutTracker,
    pub cursor: LetterKey,
    pub messages: Vec<Message>,
    pub should_quit: bool,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

impl App {
    #[must_use]
    pub fn new(tracker: CrossOutTracker) -> Self {
        // Start on whichever name has letters
        let side = if tracker.name(NameSide::First).is_empty() {
            NameSide::Second
        } else {
            NameSide::First
        };

        Self {
            tracker,
            cursor: LetterKey::new(side, 0),
            messages: vec![Message {
                text: "Cross out the letters both names share.".to_string(),
                style: MessageStyle::Info,
            }],
            should_quit: false,
        }
    }

    /// Move the cursor within the current name, wrapping at both ends
    pub fn move_horizontal(&mut self, forward: bool) {
        let len = self.tracker.name(self.cursor.side).len();
        if len == 0 {
            return;
        }
        let position = self.cursor.position.min(len - 1);
        self.cursor.position = if forward {
            (position + 1) % len
        } else {
            (position + len - 1) % len
        };
    }

    /// Switch the cursor to the other name, keeping the column where possible
    pub fn switch_name(&mut self) {
        let other = self.cursor.side.other();
        let len = self.tracker.name(other).len();
        if len == 0 {
            return;
        }
        self.cursor = LetterKey::new(other, self.cursor.position.min(len - 1));
    }

    pub fn toggle_at_cursor(&mut self) {
        let letter = self
            .tracker
            .letter_at(self.cursor)
            .map_or_else(String::new, |c| c.to_uppercase().to_string());

        match self.tracker.toggle(self.cursor) {
            ToggleOutcome::Crossed { .. } => {
                self.add_message(&format!("Crossed out {letter}"), MessageStyle::Success);
            }
            ToggleOutcome::Uncrossed { .. } => {
                self.add_message(&format!("Restored {letter}"), MessageStyle::Info);
            }
            ToggleOutcome::NoPartner => {
                self.add_message(
                    &format!("No {letter} left to pair with in the other name"),
                    MessageStyle::Error,
                );
            }
            ToggleOutcome::OutOfRange => {}
        }

        if self.tracker.is_maximal() {
            self.add_message("All common letters are crossed out!", MessageStyle::Success);
        }
    }

    pub fn complete(&mut self) {
        self.tracker.complete();
        self.add_message("Crossed out all remaining pairs", MessageStyle::Info);
    }

    pub fn reset(&mut self) {
        self.tracker.reset();
        self.add_message("Reset", MessageStyle::Info);
    }

    /// Elimination for the current remaining count
    #[must_use]
    pub fn elimination(&self) -> EliminationOutcome {
        Elimination::new(self.tracker.remaining_count()).run_to_completion()
    }

    #[must_use]
    pub fn current_result(&self) -> FlamesLetter {
        self.tracker.result()
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

    /// Apply a key press
    pub fn handle_key(&mut self, code: KeyCode, modifiers: KeyModifiers) {
        match code {
            KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => {
                self.should_quit = true;
            }
            KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
            KeyCode::Left => self.move_horizontal(false),
            KeyCode::Right => self.move_horizontal(true),
            KeyCode::Up | KeyCode::Down | KeyCode::Tab => self.switch_name(),
            KeyCode::Char(' ') | KeyCode::Enter => self.toggle_at_cursor(),
            KeyCode::Char('c') => self.complete(),
            KeyCode::Char('r') => self.reset(),
            _ => {}
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

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }
            app.handle_key(key.code, key.modifiers);
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

    fn new_app(a: &str, b: &str) -> App {
        App::new(CrossOutTracker::from_strs(a, b))
    }

    #[test]
    fn cursor_wraps_within_name() {
        let mut app = new_app("Bob", "Al");
        app.move_horizontal(false);
        assert_eq!(app.cursor, LetterKey::first(2));
        app.move_horizontal(true);
        assert_eq!(app.cursor, LetterKey::first(0));
    }

    #[test]
    fn switch_clamps_column() {
        let mut app = new_app("Naren", "Al");
        app.cursor = LetterKey::first(4);
        app.switch_name();
        assert_eq!(app.cursor, LetterKey::second(1));
        app.switch_name();
        assert_eq!(app.cursor, LetterKey::first(1));
    }

    #[test]
    fn starts_on_second_name_when_first_empty() {
        let mut app = new_app("", "Bob");
        assert_eq!(app.cursor, LetterKey::second(0));
        app.switch_name();
        assert_eq!(app.cursor, LetterKey::second(0));
    }

    #[test]
    fn keys_drive_tracker() {
        let mut app = new_app("Naren", "Priya");
        app.handle_key(KeyCode::Right, KeyModifiers::NONE);
        app.handle_key(KeyCode::Char(' '), KeyModifiers::NONE);
        assert!(app.tracker.is_crossed(LetterKey::second(4)));
        assert_eq!(app.tracker.remaining_count(), 8);

        app.handle_key(KeyCode::Char('c'), KeyModifiers::NONE);
        assert_eq!(app.tracker.remaining_count(), 6);
        assert_eq!(app.current_result(), FlamesLetter::M);

        app.handle_key(KeyCode::Char('r'), KeyModifiers::NONE);
        assert_eq!(app.tracker.crossed_count(), 0);
    }

    #[test]
    fn quit_keys() {
        let mut app = new_app("a", "b");
        app.handle_key(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert!(app.should_quit);

        let mut app = new_app("a", "b");
        app.handle_key(KeyCode::Char('q'), KeyModifiers::NONE);
        assert!(app.should_quit);
    }

    #[test]
    fn no_partner_reports_error() {
        let mut app = new_app("Naren", "Priya");
        app.toggle_at_cursor();
        assert!(matches!(
            app.messages.last().map(|m| &m.style),
            Some(MessageStyle::Error)
        ));
        assert_eq!(app.tracker.crossed_count(), 0);
    }

    #[test]
    fn messages_capped() {
        let mut app = new_app("a", "b");
        for i in 0..10 {
            app.add_message(&format!("m{i}"), MessageStyle::Info);
        }
        assert_eq!(app.messages.len(), 5);
        assert_eq!(app.messages[4].text, "m9");
    }

    #[test]
    fn elimination_follows_remaining_count() {
        let app = new_app("Naren", "Priya");
        assert_eq!(app.elimination().survivor, crate::engine::eliminate(10));
    }
}
