//! Filter bar widget: the location filter input at the bottom of the screen.
//!
//! # Editing
//!
//! - `Char(c)` inserts at the cursor.
//! - `Backspace` deletes the character before the cursor.
//! - `Nav(Left)` / `Nav(Right)` move the cursor.
//!
//! [`FilterBarState::handle`] reports whether the query text changed so the
//! app shell re-runs the filter exactly once per edit.

use super::line_edit;
use crate::event::{AppEvent, Direction};
use crate::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Direction as LayoutDir, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Paragraph, Widget},
};

const TITLE: &str = "Filter by location (e.g. marmara, istanbul)";
const PLACEHOLDER: &str = "enter locations, separated by commas";

// ---------------------------------------------------------------------------
// State
// ---------------------------------------------------------------------------

#[derive(Debug, Default)]
pub struct FilterBarState {
    /// The raw query typed by the user.
    pub query: String,
    /// Byte offset of the cursor within `query`.
    pub cursor: usize,
}

impl FilterBarState {
    /// Handle a key event from the app shell. Returns `true` when the query
    /// text changed.
    pub fn handle(&mut self, event: &AppEvent) -> bool {
        match event {
            AppEvent::Char(c) => {
                line_edit::insert(&mut self.query, &mut self.cursor, *c);
                tracing::debug!(query = %self.query, cursor = self.cursor, "filter: char inserted");
                true
            }
            AppEvent::Backspace => {
                let changed = line_edit::delete_back(&mut self.query, &mut self.cursor);
                if changed {
                    tracing::debug!(query = %self.query, cursor = self.cursor, "filter: backspace");
                }
                changed
            }
            AppEvent::Nav(Direction::Left) => {
                line_edit::step_left(&self.query, &mut self.cursor);
                false
            }
            AppEvent::Nav(Direction::Right) => {
                line_edit::step_right(&self.query, &mut self.cursor);
                false
            }
            _ => false,
        }
    }

    /// Clear the query. Returns `true` when there was something to clear.
    pub fn clear(&mut self) -> bool {
        let changed = !self.query.is_empty();
        self.query.clear();
        self.cursor = 0;
        changed
    }
}

// ---------------------------------------------------------------------------
// Widget
// ---------------------------------------------------------------------------

pub struct FilterBar<'a> {
    state: &'a FilterBarState,
    focused: bool,
    theme: &'a Theme,
    /// (visible, total) row counts shown at the right edge.
    counts: (usize, usize),
}

impl<'a> FilterBar<'a> {
    pub fn new(
        state: &'a FilterBarState,
        focused: bool,
        theme: &'a Theme,
        counts: (usize, usize),
    ) -> Self {
        Self { state, focused, theme, counts }
    }

    /// Absolute terminal position of the text cursor within this widget's
    /// rendered area. Pass to `frame.set_cursor_position()` after rendering.
    pub fn cursor_position(&self, area: Rect) -> (u16, u16) {
        // The block adds 1-cell borders; text starts at (area.x+1, area.y+1).
        let col = line_edit::column(&self.state.query, self.state.cursor);
        let x = (area.x + 1 + col).min(area.right().saturating_sub(1));
        (x, area.y + 1)
    }
}

impl Widget for FilterBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let border_style = if self.focused {
            self.theme.border_focused
        } else {
            self.theme.border_unfocused
        };

        let block = Block::bordered().title(TITLE).border_style(border_style);
        let inner = block.inner(area);
        block.render(area, buf);

        let chunks = Layout::default()
            .direction(LayoutDir::Horizontal)
            .constraints([Constraint::Fill(1), Constraint::Length(16)])
            .split(inner);

        let query_line = if self.state.query.is_empty() && !self.focused {
            Line::from(Span::styled(
                PLACEHOLDER,
                Style::default().add_modifier(Modifier::DIM),
            ))
        } else {
            Line::from(self.state.query.as_str())
        };
        Paragraph::new(query_line).render(chunks[0], buf);

        let (visible, total) = self.counts;
        Paragraph::new(Line::from(format!("{visible}/{total}")).right_aligned())
            .render(chunks[1], buf);
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn typing_reports_change() {
        let mut s = FilterBarState::default();
        assert!(s.handle(&AppEvent::Char('Ş')));
        assert!(s.handle(&AppEvent::Char('i')));
        assert_eq!(s.query, "Şi");
        assert_eq!(s.cursor, 3);
        assert!(s.handle(&AppEvent::Backspace));
        assert_eq!(s.query, "Ş");
    }

    #[test]
    fn cursor_moves_do_not_change_query() {
        let mut s = FilterBarState::default();
        s.handle(&AppEvent::Char('a'));
        s.handle(&AppEvent::Char('b'));
        assert!(!s.handle(&AppEvent::Nav(Direction::Left)));
        assert_eq!(s.cursor, 1);
        s.handle(&AppEvent::Char(','));
        assert_eq!(s.query, "a,b");
        assert!(!s.handle(&AppEvent::Nav(Direction::Right)));
        assert_eq!(s.cursor, 3);
    }

    #[test]
    fn backspace_at_start_is_noop() {
        let mut s = FilterBarState::default();
        assert!(!s.handle(&AppEvent::Backspace));
    }

    #[test]
    fn clear_reports_change_once() {
        let mut s = FilterBarState::default();
        s.handle(&AppEvent::Char('x'));
        assert!(s.clear());
        assert!(!s.clear());
    }
}
