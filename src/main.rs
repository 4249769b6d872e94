mod headless;

use anyhow::Context;
use clap::Parser;
use headless::Format;
use quakeview_core::{
    config::{parse_offset, Config},
    parse_with_offset, LocationFilter,
};
use quakeview_tui::theme::Theme;
use std::{
    io::{self, Read, Write},
    path::PathBuf,
};

#[derive(Parser)]
#[command(
    name = "quakeview",
    version,
    about = "Terminal viewer for fixed-width earthquake listings"
)]
struct Cli {
    /// Listing to read. Reads stdin when absent or `-`.
    file: Option<PathBuf>,

    /// Print the listing instead of opening the viewer.
    #[arg(long)]
    headless: bool,

    /// Comma-separated location terms; a row is kept if any term matches.
    /// In the viewer this pre-fills the filter bar.
    #[arg(long, value_name = "QUERY")]
    filter: Option<String>,

    /// Headless output format.
    #[arg(long, value_enum, default_value_t = Format::Table)]
    format: Format,

    /// UTC offset of the listing's timestamps, e.g. `+03:00`.
    #[arg(long, value_name = "OFFSET")]
    utc_offset: Option<String>,

    /// Colour theme for the viewer (`default`, `gruvbox`).
    #[arg(long)]
    theme: Option<String>,

    /// Write debug logs to /tmp/quakeview-debug.log (tail -f to inspect).
    #[arg(long)]
    debug: bool,

    /// Log to stderr in headless mode.
    #[arg(long)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(&cli)?;

    let raw = read_input(cli.file.as_deref())?;

    let mut config = Config::load().unwrap_or_else(|e| {
        tracing::warn!(error = %e, "config unusable, falling back to defaults");
        Config::defaults()
    });
    if let Some(theme) = &cli.theme {
        config.ui.theme = theme.clone();
    }
    let offset = match &cli.utc_offset {
        Some(s) => parse_offset(s)?,
        None => config.source.offset()?,
    };

    let report = parse_with_offset(&raw, offset);
    for d in &report.diagnostics {
        tracing::debug!(line = d.line_number, error = %d.error, "skipped row");
    }

    // Nothing recognisable: hand the input back untouched.
    if report.is_empty() {
        tracing::warn!("no earthquake data found after parsing");
        let mut stdout = io::stdout().lock();
        stdout.write_all(raw.as_bytes())?;
        stdout.flush()?;
        return Ok(());
    }

    let query = cli.filter.as_deref().unwrap_or("");

    if cli.headless {
        let filter = LocationFilter::new(query);
        let mut stdout = io::stdout().lock();
        return match headless::write_report(&mut stdout, &report, &filter, cli.format, chrono::Utc::now()) {
            // Closed pipe (e.g. `| head`) is a normal way to stop reading.
            Err(e) if e.kind() == io::ErrorKind::BrokenPipe => Ok(()),
            other => other.context("writing headless output"),
        };
    }

    let theme = Theme::by_name(&config.ui.theme);
    quakeview_tui::run(report, config, theme, query)
}

fn init_logging(cli: &Cli) -> anyhow::Result<()> {
    let env_filter = |default: &str| {
        tracing_subscriber::EnvFilter::try_from_env("RUST_LOG")
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default))
    };

    if cli.debug {
        let file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open("/tmp/quakeview-debug.log")?;
        tracing_subscriber::fmt()
            .with_writer(std::sync::Mutex::new(file))
            .with_ansi(false)
            .with_env_filter(env_filter("debug"))
            .init();
        tracing::info!("quakeview debug log started, tail -f /tmp/quakeview-debug.log");
    } else if cli.verbose && cli.headless {
        tracing_subscriber::fmt()
            .with_writer(io::stderr)
            .with_env_filter(env_filter("info"))
            .init();
    }
    Ok(())
}

fn read_input(path: Option<&std::path::Path>) -> anyhow::Result<String> {
    match path {
        Some(p) if p.as_os_str() != "-" => std::fs::read_to_string(p)
            .with_context(|| format!("reading {}", p.display())),
        _ => {
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf).context("reading stdin")?;
            Ok(buf)
        }
    }
}
