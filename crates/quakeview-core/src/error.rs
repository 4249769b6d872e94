//! Error types for quakeview-core.
//!
//! Row-level failures never abort a parse; they are collected into
//! [`Report::diagnostics`](crate::Report::diagnostics). Configuration errors
//! surface to the binary through `anyhow`.

use thiserror::Error;

/// Why a candidate data row was dropped.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RowError {
    /// The joined date and time columns do not form a valid date-time
    /// (bad month, truncated line, stray characters).
    #[error("invalid event timestamp {value:?}: {source}")]
    InvalidTimestamp {
        value: String,
        #[source]
        source: chrono::ParseError,
    },
    /// The timestamp parses but names an instant that does not exist on the
    /// source clock, such as the leap second `23:59:60`.
    #[error("event timestamp {value:?} is out of range")]
    OutOfRange { value: String },
}

/// Errors raised while resolving configuration values.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("invalid UTC offset {0:?} (expected +HH:MM or -HH:MM)")]
    InvalidOffset(String),
}
