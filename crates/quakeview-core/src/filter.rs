//! Location filter.
//!
//! A query is a comma-separated list of alternatives. A record is visible when
//! any alternative occurs as a substring of its normalized location; an empty
//! query shows everything.
//!
//! ```
//! use quakeview_core::filter::LocationFilter;
//!
//! let filter = LocationFilter::new("Marmara, EGE");
//! assert!(filter.matches("sea of marmara region"));
//! assert!(!filter.matches("akdeniz"));
//! ```

use crate::normalizer::normalize;
use crate::types::EventRecord;

/// Split an already-normalized query into trimmed, non-empty terms.
pub fn terms(normalized_query: &str) -> Vec<&str> {
    normalized_query
        .split(',')
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .collect()
}

/// True when `normalized_location` contains any term of `normalized_query`,
/// or when the query has no terms.
pub fn matches(normalized_query: &str, normalized_location: &str) -> bool {
    let terms = terms(normalized_query);
    terms.is_empty() || terms.iter().any(|t| normalized_location.contains(t))
}

/// A raw user query, normalized and split once.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LocationFilter {
    terms: Vec<String>,
}

impl LocationFilter {
    pub fn new(raw_query: &str) -> Self {
        let normalized = normalize(raw_query);
        Self {
            terms: terms(&normalized).into_iter().map(str::to_string).collect(),
        }
    }

    pub fn terms(&self) -> &[String] {
        &self.terms
    }

    /// No terms: every record is visible.
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    pub fn matches(&self, normalized_location: &str) -> bool {
        self.is_empty() || self.terms.iter().any(|t| normalized_location.contains(t.as_str()))
    }
}

/// Precomputed search keys for a record sequence.
///
/// Keys are built once per parse; each query change only re-runs
/// [`SearchIndex::visible`].
#[derive(Debug, Clone, Default)]
pub struct SearchIndex {
    keys: Vec<String>,
}

impl SearchIndex {
    pub fn new(records: &[EventRecord]) -> Self {
        Self {
            keys: records.iter().map(EventRecord::search_key).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    pub fn key(&self, idx: usize) -> Option<&str> {
        self.keys.get(idx).map(String::as_str)
    }

    /// Indices of visible records, in record order.
    pub fn visible(&self, filter: &LocationFilter) -> Vec<usize> {
        let visible: Vec<usize> = self
            .keys
            .iter()
            .enumerate()
            .filter(|(_, key)| filter.matches(key))
            .map(|(i, _)| i)
            .collect();
        tracing::debug!(
            terms = ?filter.terms(),
            visible = visible.len(),
            total = self.keys.len(),
            "filter applied"
        );
        visible
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
