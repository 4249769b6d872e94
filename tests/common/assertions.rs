//! Domain-specific assertion macros for quakeview harnesses.
//!
//! These wrap `pretty_assertions` and add context-rich failure messages that
//! make it clear which record or location broke the expectation.

// ---------------------------------------------------------------------------
// Record assertions
// ---------------------------------------------------------------------------

/// Assert the locations of a record slice, in order.
///
/// ```rust
/// assert_locations!(report.records, ["MARMARA DENIZI", "AKDENIZ"]);
/// ```
#[macro_export]
macro_rules! assert_locations {
    ($records:expr, [$($loc:expr),* $(,)?]) => {{
        let actual: Vec<&str> = $records.iter().map(|r| r.location.as_str()).collect();
        let expected: Vec<&str> = vec![$($loc),*];
        pretty_assertions::assert_eq!(actual, expected, "record locations differ");
    }};
}

/// Assert that every field of a record is free of surrounding whitespace,
/// except the location which may keep its leading padding.
#[macro_export]
macro_rules! assert_fields_trimmed {
    ($record:expr) => {{
        let r: &quakeview_core::EventRecord = &$record;
        for (name, value) in [
            ("date", &r.date),
            ("time", &r.time),
            ("lat", &r.lat),
            ("lon", &r.lon),
            ("depth", &r.depth),
            ("md", &r.md),
            ("ml", &r.ml),
            ("mw", &r.mw),
            ("quality", &r.quality),
        ] {
            assert_eq!(
                value.trim(),
                value.as_str(),
                "assert_fields_trimmed! failed: field {name} = {value:?}"
            );
        }
        assert_eq!(
            r.location.trim_end(),
            r.location.as_str(),
            "assert_fields_trimmed! failed: location has trailing space: {:?}",
            r.location
        );
    }};
}

// ---------------------------------------------------------------------------
// Filter assertions
// ---------------------------------------------------------------------------

/// Assert that a raw query keeps or drops a raw location.
///
/// ```rust
/// assert_filter!("izmir", "SEFERİHİSAR (İZMİR)" => keep);
/// assert_filter!("van", "MARMARA DENIZI" => drop);
/// ```
#[macro_export]
macro_rules! assert_filter {
    ($query:expr, $location:expr => keep) => {
        $crate::assert_filter!(@check $query, $location, true)
    };
    ($query:expr, $location:expr => drop) => {
        $crate::assert_filter!(@check $query, $location, false)
    };
    (@check $query:expr, $location:expr, $expected:expr) => {{
        let filter = quakeview_core::LocationFilter::new($query);
        let key = quakeview_core::normalize($location);
        assert_eq!(
            filter.matches(&key),
            $expected,
            "assert_filter! failed: query {:?} vs location {:?} (key {:?})",
            $query,
            $location,
            key
        );
    }};
}
