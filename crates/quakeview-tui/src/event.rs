//! Semantic application events: crossterm key events mapped to a
//! widget-agnostic vocabulary so widgets never touch crossterm directly.
//!
//! # Usage
//!
//! In the main event loop, call [`Keymap::to_app_event`] on every
//! [`crossterm::event::Event`] and match on the returned [`AppEvent`] instead
//! of crossterm types.
//!
//! # Keybindings
//!
//! | Key(s)                  | Event                      |
//! |-------------------------|----------------------------|
//! | `q`, `Ctrl+c`           | `Quit`                     |
//! | `Tab`                   | `FocusNext`                |
//! | `/` (configurable)      | `FilterFocus`              |
//! | `PageUp`, `Ctrl+u`      | `ScrollUp`                 |
//! | `PageDown`, `Ctrl+d`    | `ScrollDown`               |
//! | `g` (configurable)      | `ScrollToTop`              |
//! | `G` (configurable)      | `ScrollToBottom`           |
//! | `a` (configurable)      | `ToggleAge`                |
//! | `↑` / `k`               | `Nav(Up)`                  |
//! | `↓` / `j`               | `Nav(Down)`                |
//! | `←` / `h`               | `Nav(Left)`                |
//! | `→` / `l`               | `Nav(Right)`               |
//! | printable char          | `Char(c)`                  |
//! | `Backspace`             | `Backspace`                |
//! | `Enter`                 | `Enter`                    |
//! | terminal resize         | `Resize(w, h)`             |
//!
//! ## Insert mode
//!
//! When a text-input widget (filter bar, command bar) is focused, the event
//! loop calls [`Keymap::to_app_event_insert`] instead. Every printable key
//! types its character; only `Ctrl+c`, `Escape`, `Enter`, `Tab`, `Backspace`
//! and the arrow keys keep their special bindings.

use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers};
use quakeview_core::config::KeybindingsConfig;

/// Cardinal direction for table and text-cursor navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

/// A semantic application event derived from a raw crossterm [`Event`].
///
/// Widgets receive `AppEvent` values; the App shell routes them based on the
/// current focus state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppEvent {
    /// Exit the application.
    Quit,
    /// Move keyboard focus between the table and the filter bar.
    FocusNext,
    /// Transfer focus to the filter bar.
    FilterFocus,
    /// Scroll the table up one page.
    ScrollUp,
    /// Scroll the table down one page.
    ScrollDown,
    /// Jump to the first visible row.
    ScrollToTop,
    /// Jump to the last visible row.
    ScrollToBottom,
    /// Show or hide the "Time Ago" column.
    ToggleAge,
    /// Row navigation, or text-cursor movement in an input widget.
    Nav(Direction),
    /// A printable character forwarded to the active text input.
    Char(char),
    /// Delete the character before the cursor in the active text input.
    Backspace,
    /// Confirm the active input.
    Enter,
    /// The terminal was resized to the given (width, height).
    Resize(u16, u16),
    /// Dismiss the active modal (filter focus, help popup, command bar).
    Escape,
}

/// Normal-mode character bindings resolved from the user config.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Keymap {
    pub filter_focus: char,
    pub toggle_age: char,
    pub scroll_top: char,
    pub scroll_bottom: char,
}

impl Default for Keymap {
    fn default() -> Self {
        Self::from_config(&KeybindingsConfig::default())
    }
}

impl Keymap {
    /// Build from config, falling back to the default key for any empty binding.
    pub fn from_config(cfg: &KeybindingsConfig) -> Self {
        Self {
            filter_focus: KeybindingsConfig::key(&cfg.filter_focus).unwrap_or('/'),
            toggle_age: KeybindingsConfig::key(&cfg.toggle_age).unwrap_or('a'),
            scroll_top: KeybindingsConfig::key(&cfg.scroll_top).unwrap_or('g'),
            scroll_bottom: KeybindingsConfig::key(&cfg.scroll_bottom).unwrap_or('G'),
        }
    }

    /// Map a raw crossterm [`Event`] to an [`AppEvent`] (normal / navigation mode).
    ///
    /// Returns `None` for events that carry no meaning for the application
    /// (mouse events, unbound keys).
    pub fn to_app_event(&self, event: Event) -> Option<AppEvent> {
        match event {
            Event::Resize(w, h) => Some(AppEvent::Resize(w, h)),
            Event::Key(key) => self.map_key(key),
            _ => None,
        }
    }

    /// Map a raw crossterm [`Event`] to an [`AppEvent`] for text-input mode.
    pub fn to_app_event_insert(&self, event: Event) -> Option<AppEvent> {
        match event {
            Event::Resize(w, h) => Some(AppEvent::Resize(w, h)),
            Event::Key(key) => map_key_insert(key),
            _ => None,
        }
    }

    fn map_key(&self, key: KeyEvent) -> Option<AppEvent> {
        use KeyCode::*;
        use KeyModifiers as Mod;

        let plain = key.modifiers == Mod::NONE || key.modifiers == Mod::SHIFT;

        match key.code {
            Char('q') if key.modifiers == Mod::NONE => Some(AppEvent::Quit),
            Char('c') if key.modifiers == Mod::CONTROL => Some(AppEvent::Quit),

            Tab if key.modifiers == Mod::NONE => Some(AppEvent::FocusNext),

            PageUp => Some(AppEvent::ScrollUp),
            PageDown => Some(AppEvent::ScrollDown),
            Char('u') if key.modifiers == Mod::CONTROL => Some(AppEvent::ScrollUp),
            Char('d') if key.modifiers == Mod::CONTROL => Some(AppEvent::ScrollDown),
            Home => Some(AppEvent::ScrollToTop),
            End => Some(AppEvent::ScrollToBottom),

            // Configurable bindings; SHIFT may or may not accompany uppercase
            // letters depending on the terminal.
            Char(c) if plain && c == self.filter_focus => Some(AppEvent::FilterFocus),
            Char(c) if plain && c == self.scroll_top => Some(AppEvent::ScrollToTop),
            Char(c) if plain && c == self.scroll_bottom => Some(AppEvent::ScrollToBottom),
            Char(c) if plain && c == self.toggle_age => Some(AppEvent::ToggleAge),

            Up | Char('k') if key.modifiers == Mod::NONE => Some(AppEvent::Nav(Direction::Up)),
            Down | Char('j') if key.modifiers == Mod::NONE => Some(AppEvent::Nav(Direction::Down)),
            Left | Char('h') if key.modifiers == Mod::NONE => Some(AppEvent::Nav(Direction::Left)),
            Right | Char('l') if key.modifiers == Mod::NONE => {
                Some(AppEvent::Nav(Direction::Right))
            }

            Char(c) if plain => Some(AppEvent::Char(c)),

            Backspace if key.modifiers == Mod::NONE => Some(AppEvent::Backspace),
            Enter if key.modifiers == Mod::NONE => Some(AppEvent::Enter),
            Esc => Some(AppEvent::Escape),

            _ => None,
        }
    }
}

/// Key mapping for text-input / insert mode.
fn map_key_insert(key: KeyEvent) -> Option<AppEvent> {
    use KeyCode::*;
    use KeyModifiers as Mod;

    match key.code {
        // Ctrl+c always quits, even while typing
        Char('c') if key.modifiers == Mod::CONTROL => Some(AppEvent::Quit),

        Up => Some(AppEvent::Nav(Direction::Up)),
        Down => Some(AppEvent::Nav(Direction::Down)),
        Left => Some(AppEvent::Nav(Direction::Left)),
        Right => Some(AppEvent::Nav(Direction::Right)),

        Tab if key.modifiers == Mod::NONE => Some(AppEvent::FocusNext),

        Char(c) if key.modifiers == Mod::NONE || key.modifiers == Mod::SHIFT => {
            Some(AppEvent::Char(c))
        }

        Backspace if key.modifiers == Mod::NONE => Some(AppEvent::Backspace),
        Enter if key.modifiers == Mod::NONE => Some(AppEvent::Enter),
        Esc => Some(AppEvent::Escape),

        _ => None,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
