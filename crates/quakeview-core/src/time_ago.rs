//! Relative-time formatting: "3h 12m ago", "2w ago", "1y ago".
//!
//! Buckets are evaluated coarsest first. Only whole, non-negative units are
//! ever rendered, and at most two units appear in one string.

use chrono::{DateTime, TimeZone, Utc};

pub const INVALID_DATE: &str = "Invalid date";
pub const JUST_NOW: &str = "just now";

const MINUTE: i64 = 60;
const HOUR: i64 = 60 * MINUTE;
const DAY: i64 = 24 * HOUR;

const DAYS_PER_MONTH: f64 = 30.44;
const DAYS_PER_YEAR: f64 = 365.25;

/// Age of `instant` relative to the current wall clock.
pub fn time_ago<Tz: TimeZone>(instant: &DateTime<Tz>) -> String {
    time_ago_at(instant, Utc::now())
}

/// Age of an RFC 3339 timestamp string, or [`INVALID_DATE`] when the text is
/// not a timestamp.
pub fn time_ago_str(text: &str) -> String {
    match DateTime::parse_from_rfc3339(text.trim()) {
        Ok(instant) => time_ago(&instant),
        Err(e) => {
            tracing::debug!(text, error = %e, "unparseable timestamp");
            INVALID_DATE.to_string()
        }
    }
}

/// Age of `instant` relative to `now`.
pub fn time_ago_at<Tz: TimeZone>(instant: &DateTime<Tz>, now: DateTime<Utc>) -> String {
    let total = now.signed_duration_since(instant.with_timezone(&Utc)).num_seconds();
    format_elapsed(total)
}

/// Render a number of elapsed whole seconds.
pub fn format_elapsed(total: i64) -> String {
    if total < 1 {
        return JUST_NOW.to_string();
    }

    let days = total / DAY;
    if days >= 7 {
        let weeks = days / 7;
        if weeks >= 4 {
            let months = (days as f64 / DAYS_PER_MONTH).floor() as i64;
            if months >= 12 {
                let years = (days as f64 / DAYS_PER_YEAR).floor() as i64;
                return format!("{years}y ago");
            }
            return format!("{months}mo ago");
        }
        return format!("{weeks}w ago");
    }

    if days >= 1 {
        let hours = (total % DAY) / HOUR;
        return if hours > 0 {
            format!("{days}d {hours}h ago")
        } else {
            format!("{days}d ago")
        };
    }

    let hours = total / HOUR;
    let minutes = (total % HOUR) / MINUTE;
    let seconds = total % MINUTE;

    match (hours, minutes, seconds) {
        (h, 0, _) if h >= 1 => format!("{h}h ago"),
        (h, m, _) if h >= 1 => format!("{h}h {m}m ago"),
        (_, m, 0) if m >= 1 => format!("{m}m ago"),
        (_, m, s) if m >= 1 => format!("{m}m {s}s ago"),
        (_, _, s) => format!("{}s ago", s.max(0)),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
