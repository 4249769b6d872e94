//! Normalizer: folds Turkish diacritics and case so location search is
//! forgiving about how the user types.
//!
//! Both sides of every comparison (query terms and location text) pass
//! through [`normalize`]. Dotted and dotless `i` collapse to the same letter.

use phf::phf_map;

static FOLD: phf::Map<char, char> = phf_map! {
    'ı' => 'i',
    'I' => 'i',
    'i' => 'i',
    'İ' => 'i',
    'ş' => 's',
    'Ş' => 's',
    'ğ' => 'g',
    'Ğ' => 'g',
    'ü' => 'u',
    'Ü' => 'u',
    'ö' => 'o',
    'Ö' => 'o',
    'ç' => 'c',
    'Ç' => 'c',
};

/// Fold Turkish letters to ASCII, then lowercase everything else.
///
/// The table runs first so that `İ` becomes `i` rather than the two-char
/// `i̇` produced by Unicode lowercasing.
pub fn normalize(s: &str) -> String {
    let folded: String = s
        .chars()
        .map(|c| FOLD.get(&c).copied().unwrap_or(c))
        .collect();
    folded.to_lowercase()
}

/// [`normalize`] for optional input; `None` folds to the empty string.
pub fn normalize_opt(s: Option<&str>) -> String {
    s.map(normalize).unwrap_or_default()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
