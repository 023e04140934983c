// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Automaton decoding under adversarial input.
//!
//! A crafted `.dawg` file should produce an error, never a panic, a hang or
//! a huge allocation. Garbage counts, negative targets, surrogate code points
//! and cycles must all be turned away.

#![no_main]

use libfuzzer_sys::fuzz_target;
use std::time::Duration;

use lexdawg::{Dawg, Deadline};

fuzz_target!(|data: &[u8]| {
    let Ok(dawg) = Dawg::from_bytes(data) else {
        return;
    };

    // INVARIANT 1: accepted automata are acyclic, so enumeration terminates
    assert!(lexdawg::verify::find_cycle(dawg.states()).is_none());
    // Path counts can be exponential in the state count
    let deadline = Deadline::after(Duration::from_millis(100));
    let words = dawg.starts_with_until("", false, 1000, &deadline).items;

    // INVARIANT 2: every enumerated word is contained
    for word in &words {
        assert!(dawg.contains(word));
    }

    // INVARIANT 3: re-encoding is lossless
    let again = Dawg::from_bytes(&dawg.to_bytes()).expect("re-encoded automaton must decode");
    assert_eq!(again, dawg);
});
