// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Automaton construction: word list → NFA → deterministic automaton.
//!
//! Words go into an NFA one at a time. Identical *suffixes* are shared through
//! a suffix cache: the first word that needs "match `ing`, then accept" creates
//! that chain of states, and every later word ending in `ing` links straight
//! into it. Prefixes are never merged here. Two words starting with `t` simply
//! give the root two `t` edges, and determinization folds them together later.
//!
//! ```text
//!   add "top", "tap"             build()
//!
//!        ┌─t─▶ (op) ─o─┐         root ─t─▶ {op,ap} ─o/a─▶ {p} ─p─▶ {ε}✓
//!   root ┤             ├─▶ (p)
//!        └─t─▶ (ap) ─a─┘    │
//!                           p
//!                           ▼
//!                          (ε) ✓
//! ```
//!
//! Construction is single-writer. [`DawgBuilder::build`] borrows the builder,
//! so it can be called again after more words are added and the new automaton
//! reflects everything added so far.

mod nfa;
mod subset;

use std::collections::HashMap;

use crate::dawg::Dawg;
use crate::verify::contracts::check_all_reachable;
use nfa::{Nfa, START};

/// Incremental word-list builder.
///
/// ```
/// use lexdawg::DawgBuilder;
///
/// let mut builder = DawgBuilder::new();
/// builder.add_word("top");
/// builder.add_word("tops");
/// let dawg = builder.build();
///
/// assert!(dawg.contains("tops"));
/// assert!(!dawg.contains("to"));
/// ```
#[derive(Debug, Clone)]
pub struct DawgBuilder {
    nfa: Nfa,
    /// Remaining suffix → NFA state that matches exactly that suffix, then accepts.
    suffixes: HashMap<Vec<char>, usize>,
    words_added: usize,
}

impl Default for DawgBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl DawgBuilder {
    pub fn new() -> Self {
        Self {
            nfa: Nfa::new(),
            suffixes: HashMap::new(),
            words_added: 0,
        }
    }

    /// Builder pre-loaded with every word from `words`.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut builder = Self::new();
        builder.extend(words);
        builder
    }

    /// Add one word. The empty string is ignored.
    pub fn add_word(&mut self, word: &str) {
        let chars: Vec<char> = word.chars().collect();
        if chars.is_empty() {
            return;
        }
        self.words_added += 1;

        let mut current = START;
        for (pos, &ch) in chars.iter().enumerate() {
            let suffix = &chars[pos + 1..];

            if let Some(&shared) = self.suffixes.get(suffix) {
                // The rest of the word already exists behind `shared`. When
                // `suffix` is empty, `shared` is the one accepting end state.
                self.nfa.add_edge(current, ch, shared);
                return;
            }

            let next = self.nfa.add_state();
            self.suffixes.insert(suffix.to_vec(), next);
            self.nfa.add_edge(current, ch, next);
            current = next;
        }

        // Fell off the end without a cache hit: `current` is the freshly
        // created empty-suffix state.
        self.nfa.mark_accepting(current);
    }

    /// Compile everything added so far into an immutable automaton.
    pub fn build(&self) -> Dawg {
        let states = subset::determinize(&self.nfa);
        check_all_reachable(&states);
        Dawg::from_states(states)
    }

    /// Number of non-empty words passed to [`add_word`](Self::add_word),
    /// duplicates included.
    pub fn words_added(&self) -> usize {
        self.words_added
    }

    /// Number of NFA states, root included.
    pub fn nfa_len(&self) -> usize {
        self.nfa.len()
    }
}

impl<S: AsRef<str>> Extend<S> for DawgBuilder {
    fn extend<I: IntoIterator<Item = S>>(&mut self, words: I) {
        for word in words {
            self.add_word(word.as_ref());
        }
    }
}

impl<S: AsRef<str>> FromIterator<S> for DawgBuilder {
    fn from_iter<I: IntoIterator<Item = S>>(words: I) -> Self {
        Self::from_words(words)
    }
}
