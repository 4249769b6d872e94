#![allow(unused)]
//! Normalizer integration harness.
//!
//! # What this covers
//!
//! - **Turkish folding**: every letter in the folding table maps to its ASCII
//!   base letter, in both cases.
//! - **Case folding**: output is lowercase regardless of input case.
//! - **Pass-through**: characters outside the table are only lowercased.
//! - **Properties** (proptest): output over the Turkish alphabet is ASCII
//!   lowercase; normalizing twice is the same as once; char count is kept.
//!
//! # Running
//!
//! ```sh
//! cargo test --test normalization_harness
//! ```

mod common;
use common::*;

use pretty_assertions::assert_eq;
use proptest::prelude::*;
use quakeview_core::{normalize, normalizer::normalize_opt};
use rstest::rstest;

// ---------------------------------------------------------------------------
// Folding table
// ---------------------------------------------------------------------------

#[rstest]
#[case('ı', 'i')]
#[case('İ', 'i')]
#[case('ğ', 'g')]
#[case('Ğ', 'g')]
#[case('ü', 'u')]
#[case('Ü', 'u')]
#[case('ş', 's')]
#[case('Ş', 's')]
#[case('ö', 'o')]
#[case('Ö', 'o')]
#[case('ç', 'c')]
#[case('Ç', 'c')]
fn each_turkish_letter_folds(#[case] input: char, #[case] expected: char) {
    assert_eq!(normalize(&input.to_string()), expected.to_string());
}

#[rstest]
#[case::city("KAHRAMANMARAŞ", "kahramanmaras")]
#[case::parenthesised("GÖLCÜK (KOCAELİ)", "golcuk (kocaeli)")]
#[case::mixed_case("Şile İstanbul", "sile istanbul")]
#[case::dotless_upper("ISPARTA", "isparta")]
#[case::digits_and_punct("AÇIKLARI-2 (EGE)", "aciklari-2 (ege)")]
#[case::empty("", "")]
fn location_names_fold(#[case] input: &str, #[case] expected: &str) {
    assert_eq!(normalize(input), expected);
}

#[test]
fn leading_padding_is_kept() {
    assert_eq!(normalize("  AKDENİZ"), "  akdeniz");
}

#[test]
fn missing_text_is_empty() {
    assert_eq!(normalize_opt(None), "");
    assert_eq!(normalize_opt(Some("İZMİR")), "izmir");
}

#[test]
fn parsed_locations_normalize_to_search_keys() {
    let report = quakeview_core::parse(&sample_listing());
    let keys: Vec<String> = report.records.iter().map(|r| r.search_key()).collect();
    assert_eq!(keys, ["marmara denizi", "seferihisar (izmir)", "golcuk (kocaeli)"]);
}

// ---------------------------------------------------------------------------
// Properties
// ---------------------------------------------------------------------------

const TURKISH_ALPHABET: &str = "abcçdefgğhıijklmnoöprsştuüvyzABCÇDEFGĞHIİJKLMNOÖPRSŞTUÜVYZ ()-";

fn turkish_text() -> impl Strategy<Value = String> {
    let alphabet: Vec<char> = TURKISH_ALPHABET.chars().collect();
    prop::collection::vec(prop::sample::select(alphabet), 0..48)
        .prop_map(|chars| chars.into_iter().collect())
}

proptest! {
    #[test]
    fn turkish_alphabet_folds_to_ascii_lowercase(s in turkish_text()) {
        let out = normalize(&s);
        prop_assert!(out.is_ascii(), "{:?} -> {:?}", s, out);
        prop_assert!(!out.chars().any(|c| c.is_ascii_uppercase()), "{:?} -> {:?}", s, out);
    }

    #[test]
    fn normalize_is_idempotent(s in turkish_text()) {
        let once = normalize(&s);
        prop_assert_eq!(normalize(&once), once);
    }

    #[test]
    fn char_count_is_preserved(s in turkish_text()) {
        prop_assert_eq!(normalize(&s).chars().count(), s.chars().count());
    }
}
