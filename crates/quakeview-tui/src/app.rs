//! Top-level application state and the main event loop.
//!
//! [`App::run`] sets up the terminal, drives the crossterm event loop, and
//! tears everything down cleanly on exit or panic.

use crate::{
    commands::execute_command,
    event::{AppEvent, Keymap},
    theme::Theme,
    widgets::{
        command_bar::{CommandBar, CommandBarState, Outcome},
        event_table::{EventTable, EventTableState},
        filter_bar::{FilterBar, FilterBarState},
        header_panel::HeaderPanel,
        help::HelpPopup,
    },
};
use chrono::Utc;
use crossterm::{
    event::{self as ct_event, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use quakeview_core::{config::Config, HeaderInfo, Report};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction as LayoutDir, Layout, Rect},
    Frame, Terminal,
};
use std::{io, time::Duration};

// ---------------------------------------------------------------------------
// Focus
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Table,
    Filter,
    /// Vim-style `:` command line is active.
    Command,
}

// ---------------------------------------------------------------------------
// AppState
// ---------------------------------------------------------------------------

pub struct AppState {
    pub header: HeaderInfo,
    pub table: EventTableState,
    pub filter_bar: FilterBarState,
    pub focus: Focus,
    /// Focus before entering command mode, restored on exit.
    pub prev_focus: Focus,
    pub theme: Theme,
    pub config: Config,
    pub keymap: Keymap,
    pub show_help: bool,
    pub command_bar: CommandBarState,
    pub quit: bool,
}

// ---------------------------------------------------------------------------
// App
// ---------------------------------------------------------------------------

pub struct App {
    state: AppState,
}

impl App {
    pub fn new(report: Report, config: Config, theme: Theme) -> Self {
        let Report { header, records, diagnostics } = report;
        if !diagnostics.is_empty() {
            tracing::debug!(skipped = diagnostics.len(), "rows skipped while parsing");
        }

        let mut table = EventTableState::new(records);
        table.show_age = config.ui.show_age;
        table.show_quality = config.ui.show_quality;

        let state = AppState {
            header,
            table,
            filter_bar: FilterBarState::default(),
            focus: Focus::Table,
            prev_focus: Focus::Table,
            theme,
            keymap: Keymap::from_config(&config.keybindings),
            config,
            show_help: false,
            command_bar: CommandBarState::default(),
            quit: false,
        };

        App { state }
    }

    /// Start with `query` already typed into the filter bar.
    pub fn with_filter(mut self, query: &str) -> Self {
        let s = &mut self.state;
        s.filter_bar.query = query.to_string();
        s.filter_bar.cursor = query.len();
        s.table.apply_filter(query);
        tracing::debug!(query, visible = s.table.visible.len(), "initial filter");
        self
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Set up the terminal, run the event loop, and restore the terminal on exit.
    pub fn run(mut self) -> anyhow::Result<()> {
        install_panic_hook();

        enable_raw_mode()?;
        execute!(io::stdout(), EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(io::stdout());
        let mut terminal = Terminal::new(backend)?;

        let result = self.event_loop(&mut terminal);

        // Always restore terminal, even if the loop returned an error
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        let _ = terminal.show_cursor();

        result
    }

    fn event_loop(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    ) -> anyhow::Result<()> {
        loop {
            {
                let s = &self.state;
                terminal.draw(|frame| draw(frame, s))?;
            }

            if self.state.quit {
                break;
            }

            // The age column ticks, so redraw at least once a second.
            if !ct_event::poll(Duration::from_millis(250))? {
                continue;
            }

            let raw = ct_event::read()?;
            if let Event::Key(key) = &raw {
                if key.kind != crossterm::event::KeyEventKind::Press {
                    continue;
                }
            }

            let keymap = self.state.keymap;
            let app_event = if is_insert_mode(self.state.focus) {
                keymap.to_app_event_insert(raw)
            } else {
                keymap.to_app_event(raw)
            };
            if let Some(ev) = app_event {
                tracing::debug!(focus = ?self.state.focus, event = ?ev, "key event");
                self.handle(ev);
            }
        }
        Ok(())
    }

    /// Apply one semantic event to the application state.
    pub fn handle(&mut self, event: AppEvent) {
        let s = &mut self.state;

        // Help popup intercepts all events; only close keys pass through.
        if s.show_help {
            if matches!(event, AppEvent::Char('?') | AppEvent::Escape | AppEvent::Quit) {
                tracing::debug!("help popup closed");
                s.show_help = false;
            }
            return;
        }

        if s.focus == Focus::Command {
            match s.command_bar.handle(&event) {
                Outcome::Pending => {}
                Outcome::Cancel => s.focus = s.prev_focus,
                Outcome::Run(cmd) => {
                    s.focus = s.prev_focus;
                    execute_command(s, cmd);
                }
            }
            return;
        }

        match event {
            AppEvent::Char('?') if s.focus == Focus::Table => {
                tracing::debug!("help popup opened");
                s.show_help = true;
            }

            AppEvent::Char(':') if s.focus == Focus::Table => {
                tracing::debug!("entering command mode");
                s.prev_focus = s.focus;
                s.command_bar.clear();
                s.focus = Focus::Command;
            }

            AppEvent::Quit => {
                tracing::debug!("quit");
                s.quit = true;
            }

            AppEvent::Escape => {
                if s.focus == Focus::Filter {
                    tracing::debug!("focus: Filter -> Table");
                    s.focus = Focus::Table;
                }
            }

            AppEvent::FocusNext => {
                s.focus = match s.focus {
                    Focus::Table => Focus::Filter,
                    Focus::Filter | Focus::Command => Focus::Table,
                };
                tracing::debug!(to = ?s.focus, "focus cycle");
            }

            AppEvent::FilterFocus => s.focus = Focus::Filter,

            // Enter in the filter bar hands the result set to the table.
            AppEvent::Enter if s.focus == Focus::Filter => s.focus = Focus::Table,

            // Terminal resize is handled automatically by ratatui
            AppEvent::Resize(_, _) => {}

            other => dispatch_to_focused(s, other),
        }
    }
}

/// True when a text-input widget has focus, so alphabetic keys type
/// characters instead of triggering shortcuts.
fn is_insert_mode(focus: Focus) -> bool {
    matches!(focus, Focus::Filter | Focus::Command)
}

/// Route an event to the widget that owns the current focus.
fn dispatch_to_focused(s: &mut AppState, event: AppEvent) {
    match s.focus {
        Focus::Table => s.table.handle(&event),
        Focus::Filter => {
            // Up/down still move through results while typing.
            if matches!(event, AppEvent::Nav(crate::event::Direction::Up | crate::event::Direction::Down)) {
                s.table.handle(&event);
            } else if s.filter_bar.handle(&event) {
                s.table.apply_filter(&s.filter_bar.query);
            }
        }
        Focus::Command => {} // handled before dispatch
    }
}

// ---------------------------------------------------------------------------
// Rendering
// ---------------------------------------------------------------------------

fn draw(frame: &mut Frame, state: &AppState) {
    let area = frame.area();
    let now = Utc::now();

    // Vertical: header | table | 3-line filter bar
    let vert = Layout::default()
        .direction(LayoutDir::Vertical)
        .constraints([
            Constraint::Length(HeaderPanel::height(&state.header)),
            Constraint::Fill(1),
            Constraint::Length(3),
        ])
        .split(area);

    let counts = (state.table.visible.len(), state.table.records.len());

    frame.render_widget(HeaderPanel::new(&state.header, &state.theme), vert[0]);
    frame.render_widget(
        EventTable::new(&state.table, state.focus == Focus::Table, &state.theme, now),
        vert[1],
    );
    frame.render_widget(
        FilterBar::new(&state.filter_bar, state.focus == Focus::Filter, &state.theme, counts),
        vert[2],
    );

    if state.show_help {
        frame.render_widget(HelpPopup::new(&state.theme, &state.keymap), area);
    }

    // Command bar overlays the bottom row of the screen
    if state.focus == Focus::Command {
        let cmd_area = Rect { y: area.bottom().saturating_sub(1), height: 1, ..area };
        frame.render_widget(CommandBar::new(&state.command_bar, &state.theme), cmd_area);
        let col = state.command_bar.cursor_col(cmd_area);
        frame.set_cursor_position((col, cmd_area.y));
        return;
    }

    if state.focus == Focus::Filter {
        let fb = FilterBar::new(&state.filter_bar, true, &state.theme, counts);
        frame.set_cursor_position(fb.cursor_position(vert[2]));
    }
}

// ---------------------------------------------------------------------------
// Terminal helpers
// ---------------------------------------------------------------------------

fn install_panic_hook() {
    let original = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        original(info);
    }));
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::{backend::TestBackend, Terminal};

    fn row(date: &str, time: &str, ml: &str, mw: &str, location: &str) -> String {
        format!(
            "{:<10} {:<8}  {:<7}   {:<7}  {:>10}    {:>4} {:>4} {:>4}   {:<47} {}",
            date, time, "40.7812", "29.1234", "7.2", "-.-", ml, mw, location, "İlksel"
        )
    }

    fn listing() -> String {
        [
            "RECENT EARTHQUAKES".to_string(),
            "-".repeat(64),
            row("2024.01.15", "10:23:45", "2.1", "-.-", "MARMARA DENIZI"),
            row("2024.01.15", "09:10:00", "3.4", "-.-", "SEFERIHISAR (IZMIR)"),
            row("2024.01.15", "08:00:00", "4.2", "4.1", "AKDENIZ"),
        ]
        .join("\n")
    }

    fn app() -> App {
        let report = quakeview_core::parse(&listing());
        App::new(report, Config::defaults(), Theme::load_default())
    }

    fn type_str(app: &mut App, text: &str) {
        for c in text.chars() {
            app.handle(AppEvent::Char(c));
        }
    }

    #[test]
    fn typing_in_filter_narrows_table() {
        let mut app = app();
        assert_eq!(app.state().table.visible.len(), 3);
        app.handle(AppEvent::FilterFocus);
        type_str(&mut app, "İzmir");
        assert_eq!(app.state().table.visible, vec![1]);
        app.handle(AppEvent::Backspace);
        app.handle(AppEvent::Backspace);
        app.handle(AppEvent::Backspace);
        app.handle(AppEvent::Backspace);
        app.handle(AppEvent::Backspace);
        assert_eq!(app.state().table.visible.len(), 3);
    }

    #[test]
    fn shortcuts_are_text_while_filtering() {
        let mut app = app();
        app.handle(AppEvent::FilterFocus);
        app.handle(AppEvent::Char('?'));
        assert!(!app.state().show_help);
        assert_eq!(app.state().filter_bar.query, "?");
    }

    #[test]
    fn command_filter_and_clear() {
        let mut app = app();
        app.handle(AppEvent::Char(':'));
        assert_eq!(app.state().focus, Focus::Command);
        type_str(&mut app, "filter marmara, akdeniz");
        app.handle(AppEvent::Enter);
        assert_eq!(app.state().focus, Focus::Table);
        assert_eq!(app.state().table.visible, vec![0, 2]);

        app.handle(AppEvent::Char(':'));
        type_str(&mut app, "clear");
        app.handle(AppEvent::Enter);
        assert_eq!(app.state().table.visible.len(), 3);
        assert!(app.state().filter_bar.query.is_empty());
    }

    #[test]
    fn initial_filter_is_shown_and_applied() {
        let mut app = app().with_filter("akdeniz, İzmir");
        assert_eq!(app.state().filter_bar.query, "akdeniz, İzmir");
        assert_eq!(app.state().table.visible, vec![1, 2]);

        // Editing continues from the end of the seeded text.
        app.handle(AppEvent::FilterFocus);
        for _ in 0.."akdeniz, İzmir".chars().count() {
            app.handle(AppEvent::Backspace);
        }
        assert!(app.state().filter_bar.query.is_empty());
        assert_eq!(app.state().table.visible.len(), 3);
    }

    #[test]
    fn help_swallows_events_until_closed() {
        let mut app = app();
        app.handle(AppEvent::Char('?'));
        assert!(app.state().show_help);
        app.handle(AppEvent::Nav(crate::event::Direction::Down));
        assert_eq!(app.state().table.cursor, 0);
        app.handle(AppEvent::Escape);
        assert!(!app.state().show_help);
    }

    #[test]
    fn draws_header_and_rows() {
        let app = app();
        let mut terminal = Terminal::new(TestBackend::new(160, 12)).unwrap();
        terminal.draw(|f| draw(f, app.state())).unwrap();
        let buf = terminal.backend().buffer().clone();
        let text: String = (0..buf.area.height)
            .map(|y| {
                (0..buf.area.width)
                    .map(|x| buf[(x, y)].symbol().to_string())
                    .collect::<String>()
            })
            .collect::<Vec<_>>()
            .join("\n");
        assert!(text.contains("RECENT EARTHQUAKES"));
        assert!(text.contains("MARMARA DENIZI"));
        assert!(text.contains("Time Ago"));
        assert!(text.contains("3/3"));
    }
}
