// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Subset construction: NFA → deterministic automaton.
//!
//! Each deterministic state stands for a set of NFA states (a closure). The
//! construction has no epsilon moves to chase, so the successor of a closure
//! on `c` is just the union of every member's targets on `c`.
//!
//! Closures are keyed by their sorted member vector. Two closures with the same
//! members always collapse into one deterministic state, whatever order they
//! were discovered in. Only closures reachable from `{START}` are ever built,
//! and the construction graph is acyclic, so the worklist drains.

use std::collections::{BTreeMap, BTreeSet, HashMap, VecDeque};

use super::nfa::{Nfa, START};
use crate::types::{State, StateId, ROOT};

/// Canonical closure key: member indices in ascending order.
type ClosureKey = Vec<usize>;

pub(crate) fn determinize(nfa: &Nfa) -> Vec<State> {
    let mut states: Vec<State> = vec![State::default()];
    let mut memo: HashMap<ClosureKey, StateId> = HashMap::new();
    let mut queue: VecDeque<(StateId, ClosureKey)> = VecDeque::new();

    memo.insert(vec![START], ROOT);
    queue.push_back((ROOT, vec![START]));

    while let Some((id, closure)) = queue.pop_front() {
        let mut accepting = false;
        let mut moves: BTreeMap<char, BTreeSet<usize>> = BTreeMap::new();

        for &member in &closure {
            let nfa_state = &nfa.states[member];
            accepting |= nfa_state.accepting;
            for (&ch, targets) in &nfa_state.edges {
                moves.entry(ch).or_default().extend(targets.iter().copied());
            }
        }

        // BTreeMap iteration keeps the edge list sorted by code point
        let mut edges = Vec::with_capacity(moves.len());
        for (ch, targets) in moves {
            let key: ClosureKey = targets.into_iter().collect();
            let target = match memo.get(&key) {
                Some(&existing) => existing,
                None => {
                    let fresh = states.len() as StateId;
                    states.push(State::default());
                    memo.insert(key.clone(), fresh);
                    queue.push_back((fresh, key));
                    fresh
                }
            };
            edges.push((ch, target));
        }

        states[id as usize] = State::new(edges, accepting);
    }

    states
}
