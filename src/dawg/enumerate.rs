// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Depth-first enumeration over the automaton.
//!
//! Both traversals keep an explicit stack of `(state, next edge index)` frames
//! instead of recursing, so a very long word cannot overflow the call stack.

use super::Dawg;
use crate::types::{Partial, StateId, ROOT};
use crate::Interrupt;

/// Every accepting completion below `anchor`, each prefixed with `prefix`.
///
/// Results come out in code point order because edges are sorted. Stops after
/// exactly `limit` results when `limit > 0`.
pub(super) fn completions<I>(
    dawg: &Dawg,
    anchor: StateId,
    prefix: &str,
    limit: usize,
    interrupt: &I,
) -> Partial<String>
where
    I: Interrupt + ?Sized,
{
    let mut items = Vec::new();
    let full = |items: &Vec<String>| limit > 0 && items.len() >= limit;

    let mut word = prefix.to_string();
    if dawg.at(anchor).is_accepting() {
        items.push(word.clone());
        if full(&items) {
            return Partial {
                items,
                complete: true,
            };
        }
    }

    let mut stack: Vec<(StateId, usize)> = vec![(anchor, 0)];
    while let Some(frame) = stack.last_mut() {
        if interrupt.should_stop() {
            return Partial {
                items,
                complete: false,
            };
        }

        let (state, next) = *frame;
        let Some(&(ch, target)) = dawg.at(state).transitions().get(next) else {
            stack.pop();
            // Every frame except the anchor pushed one character
            if !stack.is_empty() {
                word.pop();
            }
            continue;
        };
        frame.1 += 1;

        word.push(ch);
        if dawg.at(target).is_accepting() {
            items.push(word.clone());
            if full(&items) {
                break;
            }
        }
        stack.push((target, 0));
    }

    Partial {
        items,
        complete: true,
    }
}

/// Number of accepting paths from the root, i.e. distinct words.
///
/// Post-order over the DAG with a memo, so shared suffix states are counted
/// once per incoming path without being re-walked. Saturates at `u64::MAX`.
pub(super) fn count_words(dawg: &Dawg) -> u64 {
    let mut memo: Vec<Option<u64>> = vec![None; dawg.state_count()];
    let mut stack: Vec<(StateId, usize)> = vec![(ROOT, 0)];

    while let Some(frame) = stack.last_mut() {
        let (state, next) = *frame;
        match dawg.at(state).transitions().get(next) {
            Some(&(_, target)) => {
                frame.1 += 1;
                if memo[target as usize].is_none() {
                    stack.push((target, 0));
                }
            }
            None => {
                let node = dawg.at(state);
                let below: u64 = node
                    .transitions()
                    .iter()
                    .map(|&(_, target)| memo[target as usize].unwrap_or(0))
                    .fold(0u64, u64::saturating_add);
                memo[state as usize] = Some(below.saturating_add(u64::from(node.is_accepting())));
                stack.pop();
            }
        }
    }

    memo[ROOT as usize].unwrap_or(0)
}
