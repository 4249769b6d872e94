//! Static listings used across harnesses.

use super::builders::{ListingBuilder, RowBuilder};
use chrono::{DateTime, FixedOffset, TimeZone, Utc};

/// The feed's default timestamp offset (+03:00).
pub fn turkey_offset() -> FixedOffset {
    FixedOffset::east_opt(3 * 3600).unwrap()
}

/// Reference "now" for age assertions: 2024-01-15 12:00:00 UTC.
pub fn fixed_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 1, 15, 12, 0, 0).unwrap()
}

/// One header line, the rule, three valid rows and one row with month 13.
pub fn sample_listing() -> String {
    ListingBuilder::new()
        .header("RECENT EARTHQUAKES IN TURKEY AND ITS VICINITY")
        .rule()
        .row(
            RowBuilder::new("2024.01.15", "10:23:45")
                .ml("2.1")
                .location("MARMARA DENIZI"),
        )
        .row(
            RowBuilder::new("2024.01.15", "09:10:00")
                .lat("38.1950")
                .lon("26.8367")
                .depth("12.4")
                .ml("3.4")
                .location("SEFERIHISAR (IZMIR)"),
        )
        .row(
            RowBuilder::new("2024.01.14", "22:05:31")
                .lat("40.7198")
                .lon("29.8590")
                .depth("5.0")
                .ml("4.3")
                .mw("4.1")
                .location("GÖLCÜK (KOCAELİ)")
                .quality("REVIZE01"),
        )
        .row(RowBuilder::new("2024.13.01", "10:00:00").location("BAD MONTH"))
        .build()
}

/// A three-line header as published by the feed, dots included.
pub fn full_header_listing() -> String {
    ListingBuilder::new()
        .header("....RECENT EARTHQUAKES....")
        .header("Last 500 events")
        .header("Times are local.")
        .rule()
        .row(RowBuilder::new("2024.01.15", "10:23:45"))
        .build()
}

/// Prose with no data rows at all.
pub const NO_DATA: &str = "Service temporarily unavailable.\nPlease try again later.\n";
