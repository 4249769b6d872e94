//! Fixed column layout of the event listing.
//!
//! Every field of a data row lives at a fixed character range. The whole
//! layout is the [`COLUMNS`] table; [`Column::extract`] is the only code that
//! slices a line, so a shift in the upstream layout is a one-table change.

/// A named field of a data row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Date,
    Time,
    Lat,
    Lon,
    Depth,
    Md,
    Ml,
    Mw,
    Location,
    Quality,
}

/// How surrounding whitespace is removed from a sliced field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trim {
    Both,
    End,
}

/// Half-open character range `[start, end)` for one field. `end == None`
/// runs to the end of the line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Column {
    pub field: Field,
    pub start: usize,
    pub end: Option<usize>,
    pub trim: Trim,
}

const fn col(field: Field, start: usize, end: usize) -> Column {
    Column { field, start, end: Some(end), trim: Trim::Both }
}

pub static COLUMNS: [Column; 10] = [
    col(Field::Date, 0, 10),
    col(Field::Time, 11, 19),
    col(Field::Lat, 21, 28),
    col(Field::Lon, 31, 38),
    col(Field::Depth, 40, 50),
    col(Field::Md, 54, 58),
    col(Field::Ml, 59, 63),
    col(Field::Mw, 64, 68),
    Column { field: Field::Location, start: 71, end: Some(118), trim: Trim::End },
    Column { field: Field::Quality, start: 119, end: None, trim: Trim::Both },
];

impl Column {
    /// Slice this column out of `line` by character position and trim it.
    ///
    /// Ranges past the end of the line clamp, so short lines yield empty
    /// fields instead of panicking.
    pub fn extract<'a>(&self, line: &'a str) -> &'a str {
        let raw = slice_chars(line, self.start, self.end);
        match self.trim {
            Trim::Both => raw.trim(),
            Trim::End => raw.trim_end(),
        }
    }
}

/// Look up the column definition for `field`.
pub fn column(field: Field) -> &'static Column {
    // COLUMNS is declared in Field discriminant order.
    &COLUMNS[field as usize]
}

/// Slice `s` by character indices, clamping both bounds to the string.
fn slice_chars(s: &str, start: usize, end: Option<usize>) -> &str {
    let byte_at = |n: usize| s.char_indices().nth(n).map(|(i, _)| i).unwrap_or(s.len());
    let from = byte_at(start);
    let to = match end {
        Some(end) if end > start => byte_at(end),
        Some(_) => from,
        None => s.len(),
    };
    &s[from..to]
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
