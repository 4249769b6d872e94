//! Parser: turns the raw fixed-width listing into a [`Report`].
//!
//! The listing is a short free-text header, a horizontal rule of dashes, and
//! then one event per line at fixed column offsets (see [`crate::layout`]).
//!
//! Parsing is best-effort per row: every candidate row evaluates to a
//! `Result<EventRecord, RowError>`. Failures land in
//! [`Report::diagnostics`] and never abort the parse.

use crate::error::RowError;
use crate::layout::{column, Field};
use crate::types::{EventRecord, HeaderInfo, Report, RowDiagnostic};
use chrono::{DateTime, Days, FixedOffset, NaiveDateTime, Timelike};
use once_cell::sync::Lazy;
use regex::Regex;

/// Number of free-text lines captured before the rule line.
const MAX_HEADER_LINES: usize = 3;

/// A rule line starts with at least this many dashes.
const RULE_PREFIX: &str = "----------";

/// Offset of the published listing's local clock (Turkey, UTC+3).
pub const DEFAULT_UTC_OFFSET_SECS: i32 = 3 * 3600;

static DATA_ROW: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]{4}\.").expect("data-row pattern must compile"));

const TIMESTAMP_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M"];

/// The offset used by [`parse`].
pub fn default_offset() -> FixedOffset {
    FixedOffset::east_opt(DEFAULT_UTC_OFFSET_SECS).expect("+03:00 is a valid offset")
}

/// Parse a listing whose timestamps are in [`default_offset`].
pub fn parse(raw: &str) -> Report {
    parse_with_offset(raw, default_offset())
}

/// Parse a listing whose timestamps are local time at `offset`.
pub fn parse_with_offset(raw: &str, offset: FixedOffset) -> Report {
    let mut report = Report::default();
    let mut header_lines = 0usize;
    let mut in_data = false;
    let raw = raw.strip_prefix('\u{feff}').unwrap_or(raw);

    for (idx, line) in raw.lines().enumerate() {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }

        let is_rule = trimmed.starts_with(RULE_PREFIX);

        if !in_data && !is_rule && header_lines < MAX_HEADER_LINES {
            let cleaned = trimmed.trim_matches('.').trim().to_string();
            match header_lines {
                0 => report.header.title = cleaned,
                1 => report.header.subtitle = cleaned,
                _ => report.header.note = cleaned,
            }
            header_lines += 1;
            continue;
        }

        if is_rule {
            if !in_data {
                tracing::debug!(line = idx + 1, "data section starts");
                in_data = true;
            }
            continue;
        }

        if !in_data || !DATA_ROW.is_match(trimmed) {
            continue;
        }

        match parse_row(line, offset) {
            Ok(record) => report.records.push(record),
            Err(error) => {
                tracing::warn!(line = idx + 1, %error, "skipping row");
                report.diagnostics.push(RowDiagnostic {
                    line_number: idx + 1,
                    line: line.to_string(),
                    error,
                });
            }
        }
    }

    tracing::info!(
        records = report.records.len(),
        skipped = report.diagnostics.len(),
        "parsed listing"
    );
    report
}

/// Parse only the header block of a listing.
pub fn parse_header(raw: &str) -> HeaderInfo {
    parse_with_offset(raw, default_offset()).header
}

/// Slice one data row into an [`EventRecord`].
pub fn parse_row(line: &str, offset: FixedOffset) -> Result<EventRecord, RowError> {
    let get = |field| column(field).extract(line).to_string();

    let date = get(Field::Date);
    let time = get(Field::Time);
    let event_time = parse_timestamp(&date, &time, offset)?;

    Ok(EventRecord {
        lat: get(Field::Lat),
        lon: get(Field::Lon),
        depth: get(Field::Depth),
        md: get(Field::Md),
        ml: get(Field::Ml),
        mw: get(Field::Mw),
        location: get(Field::Location),
        quality: get(Field::Quality),
        date,
        time,
        event_time,
        source_line: line.to_string(),
    })
}

/// Join `YYYY.MM.DD` and `HH:MM:SS` into an instant at `offset`.
///
/// `24:00:00` is midnight at the end of `date`. Leap seconds (`23:59:60`) are
/// rejected because the listing's clock never shows them.
pub fn parse_timestamp(
    date: &str,
    time: &str,
    offset: FixedOffset,
) -> Result<DateTime<FixedOffset>, RowError> {
    let day = date.replace('.', "-");
    let value = format!("{day}T{time}");
    let end_of_day = is_end_of_day(time);
    let text = if end_of_day { format!("{day}T00:00:00") } else { value.clone() };

    let naive = TIMESTAMP_FORMATS[1..]
        .iter()
        .fold(NaiveDateTime::parse_from_str(&text, TIMESTAMP_FORMATS[0]), |acc, fmt| {
            acc.or_else(|_| NaiveDateTime::parse_from_str(&text, fmt))
        })
        .map_err(|source| RowError::InvalidTimestamp { value: value.clone(), source })?;

    // chrono encodes a leap second as nanosecond >= 1e9.
    if naive.nanosecond() >= 1_000_000_000 {
        return Err(RowError::OutOfRange { value });
    }

    let naive = if end_of_day {
        naive
            .checked_add_days(Days::new(1))
            .ok_or_else(|| RowError::OutOfRange { value: value.clone() })?
    } else {
        naive
    };

    Ok(DateTime::from_naive_utc_and_offset(naive - offset, offset))
}

/// `24:00`, `24:00:00` or `24:00:00.000…`: the instant that closes a day.
fn is_end_of_day(time: &str) -> bool {
    match time.strip_prefix("24:00") {
        Some("") => true,
        Some(rest) => rest.strip_prefix(":00").is_some_and(|frac| {
            frac.is_empty()
                || frac
                    .strip_prefix('.')
                    .is_some_and(|d| !d.is_empty() && d.bytes().all(|b| b == b'0'))
        }),
        None => false,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
