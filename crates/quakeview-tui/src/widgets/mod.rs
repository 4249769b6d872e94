//! Ratatui widgets for the quakeview TUI.

pub mod command_bar;
pub mod event_table;
pub mod filter_bar;
pub mod header_panel;
pub mod help;
mod line_edit;
