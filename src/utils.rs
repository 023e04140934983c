// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Text helpers for preparing words, queries and documents.

#[cfg(feature = "unicode-normalization")]
use unicode_normalization::{char::is_combining_mark, UnicodeNormalization};

/// Fold a string for dictionary lookup: strip diacritics, lowercase, and
/// collapse runs of whitespace to a single space.
///
/// - "Café" → "cafe"
/// - "  naïve   words " → "naive words"
///
/// The automaton itself compares raw code points, so words and queries must
/// be folded the same way for lookups to agree.
///
/// Without the `unicode-normalization` feature only lowercasing and
/// whitespace collapsing happen.
#[cfg(feature = "unicode-normalization")]
pub fn normalize(value: &str) -> String {
    let folded: String = value.nfd().filter(|&c| !is_combining_mark(c)).collect();
    collapse_whitespace(&folded.to_lowercase())
}

#[cfg(not(feature = "unicode-normalization"))]
pub fn normalize(value: &str) -> String {
    collapse_whitespace(&value.to_lowercase())
}

fn collapse_whitespace(value: &str) -> String {
    value.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Words from a one-word-per-line list: each line trimmed, blank lines
/// skipped.
pub fn word_lines(text: &str) -> impl Iterator<Item = &str> {
    text.lines().map(str::trim).filter(|line| !line.is_empty())
}
