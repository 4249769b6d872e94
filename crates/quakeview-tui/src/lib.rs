//! quakeview TUI: ratatui application shell for a parsed event listing.

pub mod app;
pub mod commands;
pub mod event;
pub mod theme;
pub mod widgets;

pub use app::App;

use quakeview_core::{config::Config, Report};

/// Show `report` in the interactive viewer until the user quits.
///
/// `filter` seeds the location filter bar; pass `""` for no filter.
pub fn run(report: Report, config: Config, theme: theme::Theme, filter: &str) -> anyhow::Result<()> {
    tracing::info!(
        records = report.records.len(),
        theme = %config.ui.theme,
        "starting viewer"
    );
    App::new(report, config, theme).with_filter(filter).run()
}
