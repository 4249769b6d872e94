//! quakeview-core: parsing and search for fixed-width seismic event listings.
//!
//! # Architecture
//!
//! ```text
//! raw text ──► parser ──► Report { header, records, diagnostics }
//!                            │
//!                            ├──► normalizer ──► SearchIndex ◄── LocationFilter ◄── query
//!                            └──► time_ago
//! ```
//!
//! Everything here is synchronous and pure; rendering collaborators (the TUI
//! and the headless printer) own all I/O.

pub mod config;
pub mod error;
pub mod filter;
pub mod layout;
pub mod normalizer;
pub mod parser;
pub mod time_ago;
pub mod types;

pub use error::{ConfigError, RowError};
pub use filter::{LocationFilter, SearchIndex};
pub use normalizer::normalize;
pub use parser::{parse, parse_with_offset};
pub use time_ago::{time_ago, time_ago_at};
pub use types::{EventRecord, HeaderInfo, Report, RowDiagnostic};
