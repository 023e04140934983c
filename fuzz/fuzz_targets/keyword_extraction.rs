// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Keyword extraction over arbitrary dictionaries and documents.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use lexdawg::{extract_keywords, Dawg};

#[derive(Arbitrary, Debug)]
struct Input {
    words: Vec<String>,
    document: String,
}

fuzz_target!(|input: Input| {
    let dawg = Dawg::from_words(&input.words);
    let fragments = extract_keywords(&dawg, &input.document);

    // Fragments tile the document
    let rejoined: String = fragments.iter().map(|f| f.text.as_str()).collect();
    assert_eq!(rejoined, input.document);

    let mut next = 0;
    for f in &fragments {
        assert_eq!(f.start, next);
        assert!(!f.text.is_empty());
        if f.matched {
            assert!(dawg.contains(&f.text));
        }
        next += f.text.chars().count();
    }

    for pair in fragments.windows(2) {
        assert!(pair[0].matched || pair[1].matched);
    }
});
