//! Non-interactive output: print a parsed report to a writer.

use chrono::{DateTime, Utc};
use clap::ValueEnum;
use quakeview_core::{time_ago_at, EventRecord, LocationFilter, Report, SearchIndex};
use serde::Serialize;
use std::io::{self, Write};

/// Headless output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum Format {
    /// Header lines followed by one aligned row per event.
    #[default]
    Table,
    /// One JSON object per event.
    Jsonl,
}

#[derive(Serialize)]
struct JsonLine<'a> {
    #[serde(flatten)]
    record: &'a EventRecord,
    time_ago: String,
}

/// Write the records of `report` that pass `filter` in `format`.
pub fn write_report<W: Write>(
    out: &mut W,
    report: &Report,
    filter: &LocationFilter,
    format: Format,
    now: DateTime<Utc>,
) -> io::Result<()> {
    let index = SearchIndex::new(&report.records);
    let visible = index.visible(filter);
    tracing::debug!(
        visible = visible.len(),
        total = report.records.len(),
        ?format,
        "writing headless output"
    );

    match format {
        Format::Table => {
            for line in report.header.lines() {
                writeln!(out, "{line}")?;
            }
            for &idx in &visible {
                writeln!(out, "{}", table_row(&report.records[idx], now))?;
            }
        }
        Format::Jsonl => {
            for &idx in &visible {
                let rec = &report.records[idx];
                let line = JsonLine { record: rec, time_ago: time_ago_at(&rec.event_time, now) };
                serde_json::to_writer(&mut *out, &line)?;
                out.write_all(b"\n")?;
            }
        }
    }
    out.flush()
}

fn table_row(rec: &EventRecord, now: DateTime<Utc>) -> String {
    format!(
        "{:<10}  {:<8}  {:>7}  {:>7}  {:>6}  {:>4} {:>4} {:>4}  {:<47}  {:<10}  {}",
        rec.date,
        rec.time,
        rec.lat,
        rec.lon,
        rec.depth,
        rec.md,
        rec.ml,
        rec.mw,
        rec.location,
        rec.quality,
        time_ago_at(&rec.event_time, now),
    )
}
