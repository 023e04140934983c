// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Structural checks over a state table.
//!
//! Two consumers:
//!
//! 1. **The decoder**, which must refuse a stream describing a cycle. Every
//!    traversal in this crate assumes the graph is a DAG, and a cyclic table
//!    would make unlimited enumeration run forever.
//!
//! 2. **Runtime contracts** ([`contracts`]) that panic in debug builds when a
//!    freshly compiled automaton breaks an invariant. Zero-cost in release.

pub mod contracts;

use std::collections::VecDeque;

use crate::types::{State, StateId, ROOT};

/// Some state that lies on a cycle, if the graph has one.
///
/// Iterative three-color DFS over every state, reachable or not.
pub fn find_cycle(states: &[State]) -> Option<StateId> {
    #[derive(Clone, Copy, PartialEq, Eq)]
    enum Mark {
        Unseen,
        OnStack,
        Done,
    }

    let mut marks = vec![Mark::Unseen; states.len()];
    let mut stack: Vec<(usize, usize)> = Vec::new();

    for start in 0..states.len() {
        if marks[start] != Mark::Unseen {
            continue;
        }
        marks[start] = Mark::OnStack;
        stack.push((start, 0));

        while let Some(frame) = stack.last_mut() {
            let (state, next) = *frame;
            match states[state].edges.get(next) {
                Some(&(_, target)) => {
                    frame.1 += 1;
                    let target = target as usize;
                    match marks.get(target).copied() {
                        Some(Mark::OnStack) => return Some(target as StateId),
                        Some(Mark::Unseen) => {
                            marks[target] = Mark::OnStack;
                            stack.push((target, 0));
                        }
                        Some(Mark::Done) | None => {}
                    }
                }
                None => {
                    marks[state] = Mark::Done;
                    stack.pop();
                }
            }
        }
    }

    None
}

/// States that cannot be reached from the root, in index order.
pub fn unreachable_states(states: &[State]) -> Vec<StateId> {
    if states.is_empty() {
        return Vec::new();
    }

    let mut seen = vec![false; states.len()];
    let mut queue = VecDeque::from([ROOT as usize]);
    seen[ROOT as usize] = true;

    while let Some(state) = queue.pop_front() {
        for &(_, target) in &states[state].edges {
            let target = target as usize;
            if target < states.len() && !seen[target] {
                seen[target] = true;
                queue.push_back(target);
            }
        }
    }

    seen.iter()
        .enumerate()
        .filter(|(_, &reached)| !reached)
        .map(|(id, _)| id as StateId)
        .collect()
}
