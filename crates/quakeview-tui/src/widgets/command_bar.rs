//! Vim-style command bar: a single-line overlay at the bottom of the screen.
//!
//! Activated by pressing `:` from the table. Displays a `:` prefix followed
//! by the typed command. `Enter` parses the command; `Escape` cancels.
//!
//! # Supported commands
//!
//! | Command | Action |
//! |---------|--------|
//! | `q`, `quit` | Quit |
//! | `help` | Toggle the help popup |
//! | `theme <name>` | Switch theme (`default`, `gruvbox`) |
//! | `age` | Toggle the Time Ago column |
//! | `quality` | Toggle the quality column |
//! | `top`, `bottom` | Jump to the first / last row |
//! | `filter <terms>` | Replace the location filter |
//! | `clear` | Clear the location filter |

use super::line_edit;
use crate::commands::{Command, CommandError};
use crate::event::{AppEvent, Direction};
use crate::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Clear, Widget},
};

/// What the app shell should do after the bar handled a key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Keep the bar open.
    Pending,
    /// Close the bar without acting.
    Cancel,
    /// Close the bar and run the command.
    Run(Command),
}

// ---------------------------------------------------------------------------
// State
// ---------------------------------------------------------------------------

/// Persistent state for the command bar.
#[derive(Debug, Default)]
pub struct CommandBarState {
    /// The text typed after the `:` prefix.
    pub input: String,
    /// Byte offset of the cursor within `input`.
    pub cursor: usize,
    /// Error message from the last failed command, cleared on the next key.
    pub error: Option<String>,
}

impl CommandBarState {
    /// Reset to a blank, error-free state. Call when opening the bar.
    pub fn clear(&mut self) {
        self.input.clear();
        self.cursor = 0;
        self.error = None;
    }

    /// Handle a key event while the command bar is focused.
    pub fn handle(&mut self, event: &AppEvent) -> Outcome {
        self.error = None;

        match event {
            AppEvent::Escape => {
                tracing::debug!("command bar cancelled");
                self.clear();
                Outcome::Cancel
            }
            AppEvent::Enter => match Command::parse(&self.input) {
                Ok(cmd) => {
                    self.clear();
                    Outcome::Run(cmd)
                }
                Err(CommandError::Empty) => {
                    self.clear();
                    Outcome::Cancel
                }
                Err(e) => {
                    self.error = Some(e.to_string());
                    Outcome::Pending
                }
            },
            AppEvent::Char(c) => {
                line_edit::insert(&mut self.input, &mut self.cursor, *c);
                Outcome::Pending
            }
            AppEvent::Backspace => {
                line_edit::delete_back(&mut self.input, &mut self.cursor);
                Outcome::Pending
            }
            AppEvent::Nav(Direction::Left) => {
                line_edit::step_left(&self.input, &mut self.cursor);
                Outcome::Pending
            }
            AppEvent::Nav(Direction::Right) => {
                line_edit::step_right(&self.input, &mut self.cursor);
                Outcome::Pending
            }
            _ => Outcome::Pending,
        }
    }

    /// Absolute terminal column of the text cursor within `area`.
    ///
    /// The `:` glyph occupies column 0, so the cursor starts at column 1.
    pub fn cursor_col(&self, area: Rect) -> u16 {
        let col = 1 + line_edit::column(&self.input, self.cursor);
        (area.x + col).min(area.right().saturating_sub(1))
    }
}

// ---------------------------------------------------------------------------
// Widget
// ---------------------------------------------------------------------------

/// Single-row command-bar overlay.
///
/// The caller passes a 1-row `Rect` at the bottom of the terminal.
pub struct CommandBar<'a> {
    state: &'a CommandBarState,
    theme: &'a Theme,
}

impl<'a> CommandBar<'a> {
    pub fn new(state: &'a CommandBarState, theme: &'a Theme) -> Self {
        Self { state, theme }
    }
}

impl Widget for CommandBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Clear.render(area, buf);

        let line = if let Some(ref err) = self.state.error {
            Line::from(Span::styled(
                format!("E  {err}"),
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            ))
        } else {
            Line::from(vec![
                Span::styled(":", self.theme.border_command_bar.add_modifier(Modifier::BOLD)),
                Span::raw(self.state.input.as_str()),
            ])
        };

        buf.set_line(area.x, area.y, &line, area.width);
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn type_str(s: &mut CommandBarState, text: &str) {
        for c in text.chars() {
            s.handle(&AppEvent::Char(c));
        }
    }

    #[test]
    fn enter_runs_parsed_command() {
        let mut s = CommandBarState::default();
        type_str(&mut s, "age");
        assert_eq!(s.handle(&AppEvent::Enter), Outcome::Run(Command::Age));
        assert!(s.input.is_empty());
    }

    #[test]
    fn bad_command_keeps_bar_open_with_error() {
        let mut s = CommandBarState::default();
        type_str(&mut s, "nope");
        assert_eq!(s.handle(&AppEvent::Enter), Outcome::Pending);
        assert!(s.error.as_deref().unwrap().contains("nope"));
        s.handle(&AppEvent::Char('x'));
        assert!(s.error.is_none());
    }

    #[test]
    fn empty_enter_cancels() {
        let mut s = CommandBarState::default();
        assert_eq!(s.handle(&AppEvent::Enter), Outcome::Cancel);
    }

    #[test]
    fn char_insert_and_backspace() {
        let mut s = CommandBarState::default();
        type_str(&mut s, "foo");
        assert_eq!(s.cursor, 3);
        s.handle(&AppEvent::Backspace);
        assert_eq!(s.input, "fo");
        assert_eq!(s.cursor, 2);
    }
}
