// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Test utilities shared across unit and integration tests.
//!
//! This module is always compiled but hidden from documentation.

#![doc(hidden)]

use std::collections::BTreeSet;

use crate::dawg::Dawg;
use crate::types::Fragment;

/// The dictionary used throughout the test suite.
pub const SAMPLE_WORDS: [&str; 4] = ["top", "tops", "tap", "taps"];

pub fn sample_dawg() -> Dawg {
    Dawg::from_words(SAMPLE_WORDS)
}

/// Distinct non-empty words, sorted. This is what a dictionary built from
/// `words` should enumerate to.
pub fn expected_words<S: AsRef<str>>(words: &[S]) -> Vec<String> {
    words
        .iter()
        .map(|w| w.as_ref())
        .filter(|w| !w.is_empty())
        .map(str::to_string)
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

/// Concatenated fragment text.
pub fn rejoin(fragments: &[Fragment]) -> String {
    fragments.iter().map(|f| f.text.as_str()).collect()
}

/// Every non-empty prefix of `word`, shortest first.
pub fn prefixes(word: &str) -> impl Iterator<Item = &str> {
    word.char_indices()
        .skip(1)
        .map(move |(i, _)| &word[..i])
        .chain(std::iter::once(word).filter(|w| !w.is_empty()))
}
