//! Core types for quakeview-core.
//!
//! This module defines the data structures shared across the parser, the
//! filter, and every rendering collaborator: the report [`HeaderInfo`], one
//! parsed [`EventRecord`] per table row, and the [`Report`] that bundles them
//! with per-row [`RowDiagnostic`]s.

use crate::error::RowError;
use chrono::{DateTime, FixedOffset};
use serde::Serialize;

/// Up to three free-text lines that precede the data table.
///
/// Any field may be empty when the source has fewer header lines.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct HeaderInfo {
    pub title: String,
    pub subtitle: String,
    pub note: String,
}

impl HeaderInfo {
    /// Non-empty header lines in display order.
    pub fn lines(&self) -> impl Iterator<Item = &str> {
        [&self.title, &self.subtitle, &self.note]
            .into_iter()
            .map(String::as_str)
            .filter(|s| !s.is_empty())
    }
}

/// One parsed row of the event table.
///
/// All column values are kept as the raw text sliced from the source line so
/// that the original precision and formatting survive. Empty magnitude columns
/// are meaningful (the agency did not compute that scale) and stay empty.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EventRecord {
    /// `YYYY.MM.DD` as printed in the report.
    pub date: String,
    /// `HH:MM:SS` as printed in the report.
    pub time: String,
    pub lat: String,
    pub lon: String,
    /// Depth in kilometres.
    pub depth: String,
    /// Duration magnitude.
    pub md: String,
    /// Local magnitude.
    pub ml: String,
    /// Moment magnitude.
    pub mw: String,
    /// Region text, right-trimmed only.
    pub location: String,
    /// Solution quality qualifier (e.g. `İlksel`, `REVIZE01`).
    pub quality: String,
    /// Event instant derived from `date` + `time` in the report's UTC offset.
    pub event_time: DateTime<FixedOffset>,
    /// The source line, verbatim.
    #[serde(skip)]
    pub source_line: String,
}

impl EventRecord {
    /// Best available magnitude, preferring `Mw`, then `ML`, then `MD`.
    ///
    /// Returns `None` when no magnitude column holds a number.
    pub fn magnitude(&self) -> Option<f64> {
        [&self.mw, &self.ml, &self.md]
            .into_iter()
            .find_map(|m| m.parse::<f64>().ok())
    }

    /// Normalized location text used for filter matching.
    pub fn search_key(&self) -> String {
        crate::normalizer::normalize(&self.location)
    }
}

/// A candidate data row that was dropped, with the reason.
#[derive(Debug, Clone, PartialEq)]
pub struct RowDiagnostic {
    /// 1-based line number in the input text.
    pub line_number: usize,
    pub line: String,
    pub error: RowError,
}

/// Output of a single parse: header, ordered records, and dropped rows.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Report {
    pub header: HeaderInfo,
    pub records: Vec<EventRecord>,
    pub diagnostics: Vec<RowDiagnostic>,
}

impl Report {
    /// True when no data rows survived parsing. Callers decide whether that
    /// is notable; it is never an error.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
