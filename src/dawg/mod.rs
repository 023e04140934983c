// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The compiled, immutable word automaton.
//!
//! A [`Dawg`] is a flat table of deterministic states. It never changes after
//! compilation, so it is `Send + Sync` and any number of threads can query
//! one instance at once (wrap it in an `Arc` to share ownership).
//!
//! Queries are all walks from the root:
//!
//! - [`contains`](Dawg::contains): the walk consumes the word and ends on an accepting state
//! - [`contains_prefix`](Dawg::contains_prefix): the walk consumes the word
//! - [`starts_with`](Dawg::starts_with): walk the prefix, then enumerate every
//!   accepting completion below it

mod enumerate;

use crate::types::{Partial, State, StateId, ROOT};
use crate::verify::contracts::check_dawg_well_formed;
use crate::{DawgBuilder, Interrupt, Never};

/// An immutable word automaton.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dawg {
    states: Vec<State>,
}

impl Default for Dawg {
    /// The automaton of the empty dictionary: a lone, non-accepting root.
    fn default() -> Self {
        Self {
            states: vec![State::default()],
        }
    }
}

impl Dawg {
    /// Wrap a state table. Callers guarantee a root exists and every target is
    /// in range; debug builds check it.
    pub(crate) fn from_states(states: Vec<State>) -> Self {
        check_dawg_well_formed(&states);
        Self { states }
    }

    /// Build an automaton straight from a word list.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        DawgBuilder::from_words(words).build()
    }

    // ------------------------------------------------------------------
    // Structure
    // ------------------------------------------------------------------

    /// Number of states, root included. Never zero.
    pub fn state_count(&self) -> usize {
        self.states.len()
    }

    /// Total number of edges across all states.
    pub fn edge_count(&self) -> usize {
        self.states.iter().map(State::degree).sum()
    }

    /// Number of accepting states.
    pub fn accepting_count(&self) -> usize {
        self.states.iter().filter(|s| s.is_accepting()).count()
    }

    pub fn root(&self) -> &State {
        &self.states[ROOT as usize]
    }

    pub fn state(&self, id: StateId) -> Option<&State> {
        self.states.get(id as usize)
    }

    /// All states in index order.
    pub fn states(&self) -> &[State] {
        &self.states
    }

    /// Internal lookup for ids that came out of this automaton's own edges.
    #[inline]
    pub(crate) fn at(&self, id: StateId) -> &State {
        &self.states[id as usize]
    }

    // ------------------------------------------------------------------
    // Walks
    // ------------------------------------------------------------------

    /// Follow `word` from the root. `None` as soon as an edge is missing.
    pub fn walk(&self, word: &str) -> Option<StateId> {
        word.chars()
            .try_fold(ROOT, |state, ch| self.at(state).next(ch))
    }

    /// Follow `word` as far as it goes. Returns the last state reached and
    /// whether the whole word was consumed.
    fn walk_partial(&self, word: &str) -> (StateId, bool) {
        let mut state = ROOT;
        for ch in word.chars() {
            match self.at(state).next(ch) {
                Some(next) => state = next,
                None => return (state, false),
            }
        }
        (state, true)
    }

    /// Is `word` in the dictionary?
    pub fn contains(&self, word: &str) -> bool {
        self.walk(word)
            .is_some_and(|state| self.at(state).is_accepting())
    }

    /// Is `word` a prefix of some dictionary word (or a word itself)?
    pub fn contains_prefix(&self, word: &str) -> bool {
        self.walk(word).is_some()
    }

    // ------------------------------------------------------------------
    // Enumeration
    // ------------------------------------------------------------------

    /// Every dictionary word that starts with `prefix`, in code point order.
    ///
    /// `limit == 0` means no limit; otherwise at most `limit` words come back.
    ///
    /// When the prefix leaves the automaton part-way and `allow_partial` is
    /// true, enumeration starts from the last state reached and each result is
    /// `prefix` followed by a completion from there. Those results are not
    /// dictionary words: the unmatched tail of `prefix` is treated as if it had
    /// been consumed. With `allow_partial` false the answer is empty instead.
    pub fn starts_with(&self, prefix: &str, allow_partial: bool, limit: usize) -> Vec<String> {
        self.starts_with_until(prefix, allow_partial, limit, &Never)
            .items
    }

    /// [`starts_with`](Self::starts_with) that polls `interrupt` between steps.
    pub fn starts_with_until<I>(
        &self,
        prefix: &str,
        allow_partial: bool,
        limit: usize,
        interrupt: &I,
    ) -> Partial<String>
    where
        I: Interrupt + ?Sized,
    {
        let (anchor, consumed) = self.walk_partial(prefix);
        if !consumed && !allow_partial {
            return Partial {
                items: Vec::new(),
                complete: true,
            };
        }
        enumerate::completions(self, anchor, prefix, limit, interrupt)
    }

    /// The whole dictionary, in code point order.
    pub fn words(&self) -> Vec<String> {
        self.starts_with("", false, 0)
    }

    /// Number of distinct words, computed without materializing them.
    pub fn word_count(&self) -> u64 {
        enumerate::count_words(self)
    }
}
