//! Test builders: fixed-width data rows and whole listings.
//!
//! These builders are designed for readability in test assertions, not for
//! production use. Each field is padded into its column so the output lines
//! parse exactly like the real feed.

// ---------------------------------------------------------------------------
// RowBuilder
// ---------------------------------------------------------------------------

/// Fluent builder for one fixed-width data row.
///
/// # Example
///
/// ```rust
/// let line = RowBuilder::new("2024.01.15", "10:23:45")
///     .ml("2.1")
///     .location("MARMARA DENIZI")
///     .build();
/// ```
#[derive(Debug, Clone)]
pub struct RowBuilder {
    date: String,
    time: String,
    lat: String,
    lon: String,
    depth: String,
    md: String,
    ml: String,
    mw: String,
    location: String,
    quality: String,
}

impl RowBuilder {
    pub fn new(date: impl Into<String>, time: impl Into<String>) -> Self {
        Self {
            date: date.into(),
            time: time.into(),
            lat: "40.7812".into(),
            lon: "29.1234".into(),
            depth: "7.2".into(),
            md: "-.-".into(),
            ml: "2.1".into(),
            mw: "-.-".into(),
            location: "MARMARA DENIZI".into(),
            quality: "İlksel".into(),
        }
    }

    pub fn lat(mut self, v: impl Into<String>) -> Self {
        self.lat = v.into();
        self
    }

    pub fn lon(mut self, v: impl Into<String>) -> Self {
        self.lon = v.into();
        self
    }

    pub fn depth(mut self, v: impl Into<String>) -> Self {
        self.depth = v.into();
        self
    }

    pub fn md(mut self, v: impl Into<String>) -> Self {
        self.md = v.into();
        self
    }

    pub fn ml(mut self, v: impl Into<String>) -> Self {
        self.ml = v.into();
        self
    }

    pub fn mw(mut self, v: impl Into<String>) -> Self {
        self.mw = v.into();
        self
    }

    pub fn location(mut self, v: impl Into<String>) -> Self {
        self.location = v.into();
        self
    }

    pub fn quality(mut self, v: impl Into<String>) -> Self {
        self.quality = v.into();
        self
    }

    /// Render the row with every field placed at its column.
    pub fn build(&self) -> String {
        format!(
            "{:<10} {:<8}  {:<7}   {:<7}  {:>10}    {:>4} {:>4} {:>4}   {:<47} {}",
            self.date,
            self.time,
            self.lat,
            self.lon,
            self.depth,
            self.md,
            self.ml,
            self.mw,
            self.location,
            self.quality,
        )
    }
}

// ---------------------------------------------------------------------------
// ListingBuilder
// ---------------------------------------------------------------------------

/// Assembles header lines, the dashed rule, and rows into listing text.
#[derive(Debug, Clone, Default)]
pub struct ListingBuilder {
    header: Vec<String>,
    rule: bool,
    body: Vec<String>,
}

impl ListingBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn header(mut self, line: impl Into<String>) -> Self {
        self.header.push(line.into());
        self
    }

    /// Add the dashed separator between header and data.
    pub fn rule(mut self) -> Self {
        self.rule = true;
        self
    }

    pub fn row(mut self, row: RowBuilder) -> Self {
        self.body.push(row.build());
        self
    }

    /// Add an arbitrary line to the body, verbatim.
    pub fn line(mut self, line: impl Into<String>) -> Self {
        self.body.push(line.into());
        self
    }

    pub fn build(&self) -> String {
        let mut lines = self.header.clone();
        if self.rule {
            lines.push("-".repeat(120));
        }
        lines.extend(self.body.iter().cloned());
        let mut text = lines.join("\n");
        text.push('\n');
        text
    }
}

/// `n` synthetic rows cycling through a handful of locations.
pub fn synthetic_listing(n: usize) -> String {
    const PLACES: &[&str] = &[
        "MARMARA DENIZI",
        "SEFERIHISAR (IZMIR)",
        "GÖLCÜK (KOCAELİ)",
        "AKDENIZ",
        "ŞİLE (İSTANBUL)",
        "ELBİSTAN (KAHRAMANMARAŞ)",
    ];
    let mut listing = ListingBuilder::new().header("SYNTHETIC LISTING").rule();
    for i in 0..n {
        let row = RowBuilder::new("2024.01.15", format!("{:02}:{:02}:{:02}", i / 3600 % 24, i / 60 % 60, i % 60))
            .ml(format!("{}.{}", 1 + i % 5, i % 10))
            .location(PLACES[i % PLACES.len()]);
        listing = listing.row(row);
    }
    listing.build()
}
