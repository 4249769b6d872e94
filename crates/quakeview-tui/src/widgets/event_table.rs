//! Event table widget: the scrollable list of parsed events.
//!
//! # Navigation (when the table is focused)
//!
//! | Key | Action |
//! |-----|--------|
//! | `↑` / `k` | Move cursor up one row |
//! | `↓` / `j` | Move cursor down one row |
//! | `PageUp` / `Ctrl+u` | Scroll up one page |
//! | `PageDown` / `Ctrl+d` | Scroll down one page |
//! | `g` / `G` | Jump to first / last row |
//! | `a` | Toggle the "Time Ago" column |
//!
//! # Scroll semantics
//!
//! `cursor` and `offset` index into `visible`, the filtered view of
//! `records`. Records themselves never change after construction; a new
//! filter only rebuilds `visible`.

use std::cell::Cell;

use crate::event::{AppEvent, Direction};
use crate::theme::Theme;
use chrono::{DateTime, Utc};
use quakeview_core::{time_ago_at, EventRecord, LocationFilter, SearchIndex};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{
        Block, Cell as TableCell, Paragraph, Row, Scrollbar, ScrollbarOrientation, ScrollbarState,
        StatefulWidget, Table, Widget,
    },
};

const PAGE_STEP: usize = 10;

// ---------------------------------------------------------------------------
// State
// ---------------------------------------------------------------------------

pub struct EventTableState {
    pub records: Vec<EventRecord>,
    index: SearchIndex,
    filter: LocationFilter,
    /// Indices into `records` that pass the current filter, in record order.
    pub visible: Vec<usize>,
    /// Position within `visible` of the highlighted row.
    pub cursor: usize,
    /// Position within `visible` of the first rendered row.
    pub offset: usize,
    pub show_age: bool,
    pub show_quality: bool,
    /// Cached from the last render so `handle()` can page by screen height.
    last_height: Cell<usize>,
}

impl EventTableState {
    pub fn new(records: Vec<EventRecord>) -> Self {
        let index = SearchIndex::new(&records);
        let visible = (0..records.len()).collect();
        Self {
            records,
            index,
            filter: LocationFilter::default(),
            visible,
            cursor: 0,
            offset: 0,
            show_age: true,
            show_quality: true,
            last_height: Cell::new(20),
        }
    }

    fn height(&self) -> usize {
        self.last_height.get().max(1)
    }

    pub fn filter(&self) -> &LocationFilter {
        &self.filter
    }

    /// Re-run the location filter for a new raw query and reset the view to
    /// the first matching row.
    pub fn apply_filter(&mut self, raw_query: &str) {
        self.filter = LocationFilter::new(raw_query);
        self.visible = self.index.visible(&self.filter);
        self.cursor = 0;
        self.offset = 0;
    }

    /// The record under the cursor, if any row is visible.
    pub fn selected(&self) -> Option<&EventRecord> {
        self.visible.get(self.cursor).map(|&i| &self.records[i])
    }

    /// Handle a navigation event from the app shell.
    pub fn handle(&mut self, event: &AppEvent) {
        if let AppEvent::ToggleAge = event {
            self.show_age = !self.show_age;
            tracing::debug!(show_age = self.show_age, "table: toggled age column");
            return;
        }

        let total = self.visible.len();
        if total == 0 {
            return;
        }
        let last = total - 1;

        match event {
            AppEvent::Nav(Direction::Up) => self.cursor = self.cursor.saturating_sub(1),
            AppEvent::Nav(Direction::Down) => self.cursor = (self.cursor + 1).min(last),
            AppEvent::ScrollUp => {
                self.cursor = self.cursor.saturating_sub(PAGE_STEP.max(self.height()));
            }
            AppEvent::ScrollDown => {
                self.cursor = (self.cursor + PAGE_STEP.max(self.height())).min(last);
            }
            AppEvent::ScrollToTop => self.cursor = 0,
            AppEvent::ScrollToBottom => self.cursor = last,
            _ => return,
        }

        self.follow_cursor();
        tracing::debug!(cursor = self.cursor, offset = self.offset, "table: moved");
    }

    /// Keep the cursor inside the rendered window.
    fn follow_cursor(&mut self) {
        let height = self.height();
        if self.cursor < self.offset {
            self.offset = self.cursor;
        } else if self.cursor >= self.offset + height {
            self.offset = self.cursor + 1 - height;
        }
    }
}

// ---------------------------------------------------------------------------
// Widget
// ---------------------------------------------------------------------------

pub struct EventTable<'a> {
    state: &'a EventTableState,
    focused: bool,
    theme: &'a Theme,
    now: DateTime<Utc>,
}

impl<'a> EventTable<'a> {
    pub fn new(
        state: &'a EventTableState,
        focused: bool,
        theme: &'a Theme,
        now: DateTime<Utc>,
    ) -> Self {
        Self { state, focused, theme, now }
    }

    fn columns(&self) -> (Vec<&'static str>, Vec<Constraint>) {
        let mut captions = vec![
            "Date", "Time", "Lat(N)", "Lon(E)", "Depth(km)", "MD", "ML", "Mw", "Location",
        ];
        let mut widths = vec![
            Constraint::Length(10),
            Constraint::Length(8),
            Constraint::Length(8),
            Constraint::Length(8),
            Constraint::Length(9),
            Constraint::Length(4),
            Constraint::Length(4),
            Constraint::Length(4),
            Constraint::Fill(1),
        ];
        if self.state.show_quality {
            captions.push("Quality");
            widths.push(Constraint::Length(10));
        }
        if self.state.show_age {
            captions.push("Time Ago");
            widths.push(Constraint::Length(10));
        }
        (captions, widths)
    }

    fn row(&self, idx: usize, selected: bool) -> Row<'static> {
        let rec = &self.state.records[idx];
        let centered = |s: &str| TableCell::from(Line::from(s.to_string()).centered());

        let location = match self.state.index.key(idx) {
            Some(key) => highlight(&rec.location, key, self.state.filter.terms(), self.theme),
            None => Line::from(rec.location.clone()),
        };

        let mut cells = vec![
            TableCell::from(rec.date.clone()),
            TableCell::from(rec.time.clone()),
            TableCell::from(rec.lat.clone()),
            TableCell::from(rec.lon.clone()),
            centered(&rec.depth),
            centered(&rec.md),
            centered(&rec.ml),
            centered(&rec.mw),
            TableCell::from(location),
        ];
        if self.state.show_quality {
            cells.push(TableCell::from(rec.quality.clone()));
        }
        if self.state.show_age {
            cells.push(centered(&time_ago_at(&rec.event_time, self.now)));
        }

        let mut style = self.theme.magnitude_style(rec.magnitude());
        if selected {
            style = style.add_modifier(Modifier::REVERSED);
        }
        Row::new(cells).style(style)
    }
}

impl Widget for EventTable<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let border_style = if self.focused {
            self.theme.border_focused
        } else {
            self.theme.border_unfocused
        };

        let block = Block::bordered().title("Events").border_style(border_style);
        let inner = block.inner(area);
        block.render(area, buf);

        let total = self.state.visible.len();
        if total == 0 {
            let msg = if self.state.records.is_empty() {
                "no events in listing"
            } else {
                "no events match the filter"
            };
            Paragraph::new(Line::from(Span::styled(
                msg,
                Style::default().add_modifier(Modifier::DIM),
            )))
            .render(inner, buf);
            return;
        }

        // One row is taken by the column captions.
        let height = (inner.height as usize).saturating_sub(1).max(1);
        self.state.last_height.set(height);

        let start = self.state.offset.min(total.saturating_sub(1));
        let end = (start + height).min(total);

        let rows: Vec<Row> = self.state.visible[start..end]
            .iter()
            .enumerate()
            .map(|(i, &idx)| self.row(idx, self.focused && start + i == self.state.cursor))
            .collect();

        let (captions, widths) = self.columns();
        let header = Row::new(captions).style(self.theme.header_columns);

        let text_area = Rect { width: inner.width.saturating_sub(1), ..inner };
        let sb_area = Rect {
            x: inner.right().saturating_sub(1),
            width: 1,
            ..inner
        };

        Widget::render(
            Table::new(rows, widths).header(header).column_spacing(1),
            text_area,
            buf,
        );

        let mut sb_state = ScrollbarState::new(total)
            .position(start)
            .viewport_content_length(height);
        StatefulWidget::render(
            Scrollbar::new(ScrollbarOrientation::VerticalRight)
                .begin_symbol(None)
                .end_symbol(None),
            sb_area,
            buf,
            &mut sb_state,
        );
    }
}

// ---------------------------------------------------------------------------
// Location highlighting
// ---------------------------------------------------------------------------

/// Render `location` with the first filter term match highlighted.
///
/// `key` is the normalized location. Normalization maps one char to one char
/// for Turkish and ASCII text, so char positions in `key` line up with
/// `location`; when they do not, the text is rendered plain.
pub fn highlight(location: &str, key: &str, terms: &[String], theme: &Theme) -> Line<'static> {
    let plain = || Line::from(location.to_string());

    if location.chars().count() != key.chars().count() {
        return plain();
    }

    let Some((byte_start, term)) = terms
        .iter()
        .filter_map(|t| key.find(t.as_str()).map(|pos| (pos, t)))
        .min_by_key(|(pos, _)| *pos)
    else {
        return plain();
    };

    let char_start = key[..byte_start].chars().count();
    let char_len = term.chars().count();
    let to_byte = |n: usize| {
        location
            .char_indices()
            .nth(n)
            .map(|(i, _)| i)
            .unwrap_or(location.len())
    };
    let (from, to) = (to_byte(char_start), to_byte(char_start + char_len));

    Line::from(vec![
        Span::raw(location[..from].to_string()),
        Span::styled(location[from..to].to_string(), theme.search_highlight),
        Span::raw(location[to..].to_string()),
    ])
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
