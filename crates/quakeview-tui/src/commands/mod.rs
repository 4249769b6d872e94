// ---------------------------------------------------------------------------
// Command
// ---------------------------------------------------------------------------

use crate::{app::AppState, event::AppEvent, theme::Theme};
use thiserror::Error;

/// A parsed, validated command ready to be executed by the app shell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Quit,
    Help,
    // Switch theme by name
    Theme(String),
    // Show or hide the Time Ago column
    Age,
    // Show or hide the quality column
    Quality,
    Top,
    Bottom,
    // Replace the filter query
    Filter(String),
    // Clear the filter query
    Clear,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    /// Blank input: close the bar without acting.
    #[error("")]
    Empty,
    #[error("usage: {0}")]
    Usage(&'static str),
    #[error("unknown command: {0}")]
    Unknown(String),
}

impl Command {
    /// Parse a raw command string (the text after the `:` prefix).
    pub fn parse(input: &str) -> Result<Command, CommandError> {
        let input = input.trim();
        if input.is_empty() {
            return Err(CommandError::Empty);
        }

        let (word, rest) = input
            .split_once(char::is_whitespace)
            .map(|(w, r)| (w, r.trim()))
            .unwrap_or((input, ""));

        match word {
            "q" | "quit" | "q!" => Ok(Command::Quit),
            "help" => Ok(Command::Help),
            "age" => Ok(Command::Age),
            "quality" => Ok(Command::Quality),
            "top" => Ok(Command::Top),
            "bottom" => Ok(Command::Bottom),
            "clear" => Ok(Command::Clear),
            "theme" => {
                if rest.is_empty() {
                    Err(CommandError::Usage("theme <default|gruvbox>"))
                } else {
                    Ok(Command::Theme(rest.to_string()))
                }
            }
            "f" | "filter" => {
                if rest.is_empty() {
                    Err(CommandError::Usage("filter <term>[, <term>…]"))
                } else {
                    Ok(Command::Filter(rest.to_string()))
                }
            }
            other => Err(CommandError::Unknown(other.to_string())),
        }
    }
}

/// Execute a parsed [`Command`] against the application state.
pub fn execute_command(s: &mut AppState, cmd: Command) {
    tracing::debug!(command = ?cmd, "executing command");
    match cmd {
        Command::Quit => s.quit = true,
        Command::Help => s.show_help = !s.show_help,
        Command::Theme(name) => s.theme = Theme::by_name(&name),
        Command::Age => s.table.handle(&AppEvent::ToggleAge),
        Command::Quality => s.table.show_quality = !s.table.show_quality,
        Command::Top => s.table.handle(&AppEvent::ScrollToTop),
        Command::Bottom => s.table.handle(&AppEvent::ScrollToBottom),
        Command::Filter(query) => {
            s.filter_bar.query = query;
            s.filter_bar.cursor = s.filter_bar.query.len();
            s.table.apply_filter(&s.filter_bar.query);
        }
        Command::Clear => {
            if s.filter_bar.clear() {
                s.table.apply_filter("");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_quit() {
        assert_eq!(Command::parse("q"), Ok(Command::Quit));
        assert_eq!(Command::parse("  quit  "), Ok(Command::Quit));
    }

    #[test]
    fn parse_theme() {
        assert_eq!(
            Command::parse("theme gruvbox"),
            Ok(Command::Theme("gruvbox".to_string()))
        );
        assert!(matches!(Command::parse("theme"), Err(CommandError::Usage(_))));
    }

    #[test]
    fn parse_filter_keeps_commas() {
        assert_eq!(
            Command::parse("filter marmara, ege"),
            Ok(Command::Filter("marmara, ege".to_string()))
        );
    }

    #[test]
    fn parse_empty_is_sentinel() {
        assert_eq!(Command::parse(""), Err(CommandError::Empty));
        assert_eq!(Command::parse("  "), Err(CommandError::Empty));
    }

    #[test]
    fn parse_unknown() {
        let err = Command::parse("frobnicate").unwrap_err();
        assert!(err.to_string().contains("frobnicate"));
    }
}
