// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Non-deterministic construction graph.
//!
//! Lives only while words are being added. A (state, code point) pair may
//! point at several targets, so each label maps to a set. Ordered sets keep
//! the union step in subset construction independent of insertion order.

use std::collections::{BTreeMap, BTreeSet};

/// The NFA start state.
pub(crate) const START: usize = 0;

#[derive(Debug, Clone, Default)]
pub(crate) struct NfaState {
    pub(crate) edges: BTreeMap<char, BTreeSet<usize>>,
    pub(crate) accepting: bool,
}

#[derive(Debug, Clone)]
pub(crate) struct Nfa {
    pub(crate) states: Vec<NfaState>,
}

impl Nfa {
    pub(crate) fn new() -> Self {
        Self {
            states: vec![NfaState::default()],
        }
    }

    pub(crate) fn add_state(&mut self) -> usize {
        self.states.push(NfaState::default());
        self.states.len() - 1
    }

    /// Add `from --ch--> to`. Existing edges on `ch` are kept.
    pub(crate) fn add_edge(&mut self, from: usize, ch: char, to: usize) {
        self.states[from].edges.entry(ch).or_default().insert(to);
    }

    pub(crate) fn mark_accepting(&mut self, state: usize) {
        self.states[state].accepting = true;
    }

    pub(crate) fn len(&self) -> usize {
        self.states.len()
    }
}
