// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzzy search with arbitrary costs.
//!
//! Budgets are kept small so each run stays fast; the point is that invalid
//! costs are rejected and valid ones never report a word above budget.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use lexdawg::{fuzzy_search, CostConfig, Dawg};

#[derive(Arbitrary, Debug)]
struct Input {
    words: Vec<String>,
    query: String,
    costs: [f32; 4],
    budget: u8,
}

fuzz_target!(|input: Input| {
    if input.query.chars().count() > 16 {
        return;
    }
    let dawg = Dawg::from_words(&input.words);
    let [insertion, deletion, substitution, transposition] = input.costs;
    let costs = CostConfig {
        insertion,
        deletion,
        substitution,
        transposition,
        budget: f32::from(input.budget % 3),
    };
    // Tiny positive weights would make the search explode
    if costs.validate().is_ok() && [insertion, deletion, substitution, transposition].iter().any(|&c| c < 0.25) {
        return;
    }

    match fuzzy_search(&dawg, &input.query, &costs) {
        Ok(hits) => {
            assert!(costs.validate().is_ok());
            for hit in &hits {
                assert!(hit.cost <= costs.budget);
                assert!(dawg.contains(&hit.word));
            }
            if dawg.contains(&input.query) {
                assert!(hits.iter().any(|h| h.word == input.query && h.cost == 0.0));
            }
        }
        Err(_) => assert!(costs.validate().is_err()),
    }
});
