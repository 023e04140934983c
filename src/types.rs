// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Core types shared by the automaton, the searchers and the codec.
//!
//! A compiled automaton is a flat `Vec<State>` indexed by [`StateId`]. State 0
//! is always the root. Each state keeps its outgoing edges sorted by code
//! point, which gives O(log degree) lookups and a deterministic traversal
//! order for enumeration and encoding.

use serde::Serialize;

/// Index of a state inside a compiled automaton.
pub type StateId = u32;

/// The root state. Every automaton has one, even an empty dictionary.
pub const ROOT: StateId = 0;

/// One deterministic state: sorted outgoing edges plus an accepting flag.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct State {
    pub(crate) edges: Vec<(char, StateId)>,
    pub(crate) accepting: bool,
}

impl State {
    pub(crate) fn new(edges: Vec<(char, StateId)>, accepting: bool) -> Self {
        Self { edges, accepting }
    }

    /// Outgoing edges, sorted by code point.
    #[inline]
    pub fn transitions(&self) -> &[(char, StateId)] {
        &self.edges
    }

    /// Target of the edge labeled `ch`, if any.
    #[inline]
    pub fn next(&self, ch: char) -> Option<StateId> {
        self.edges
            .binary_search_by_key(&ch, |&(label, _)| label)
            .ok()
            .map(|i| self.edges[i].1)
    }

    /// Does a complete word end here?
    #[inline]
    pub fn is_accepting(&self) -> bool {
        self.accepting
    }

    /// Number of outgoing edges.
    #[inline]
    pub fn degree(&self) -> usize {
        self.edges.len()
    }
}

/// A dictionary word found by fuzzy search, with the cheapest edit cost that
/// reached it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FuzzyMatch {
    pub word: String,
    pub cost: f32,
}

/// One piece of a segmented document.
///
/// `start` is the offset of the first character, counted in code points.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Fragment {
    pub text: String,
    pub matched: bool,
    pub start: usize,
}

impl Fragment {
    pub fn matched(start: usize, text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            matched: true,
            start,
        }
    }

    pub fn unmatched(start: usize, text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            matched: false,
            start,
        }
    }
}

/// Results of a traversal that may have been stopped by an [`Interrupt`].
///
/// `complete` is false when the traversal was cut short; `items` then holds
/// whatever was found before the stop.
///
/// [`Interrupt`]: crate::Interrupt
#[derive(Debug, Clone, PartialEq)]
pub struct Partial<T> {
    pub items: Vec<T>,
    pub complete: bool,
}
