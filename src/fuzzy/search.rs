// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Cost-pruned traversal of (state, query offset, cost, output) branches.
//!
//! # Operations
//!
//! From state `S` at query offset `p` with accumulated cost `e`:
//!
//! | Branch        | Requires                          | Moves to          | Offset | Appends            |
//! |---------------|-----------------------------------|-------------------|--------|--------------------|
//! | deletion      | every edge `S -c-> T`             | `T`               | `p`    | `c`                |
//! | match         | edge on `query[p]`                | target            | `p+1`  | `query[p]`         |
//! | insertion     | `p < len`                         | `S`               | `p+1`  | nothing            |
//! | substitution  | every edge on `c != query[p]`     | `T`               | `p+1`  | `c`                |
//! | transposition | `S -query[p+1]-> T -query[p]-> U` | `U`               | `p+2`  | `query[p+1]query[p]` |
//!
//! A branch is only spawned when `e` plus the operation's cost stays within
//! the budget. Every operation except match costs something, and match
//! advances `p`, so the traversal terminates.
//!
//! A word is recorded when a branch sits on an accepting state with the whole
//! query consumed. The same word can be reached along many edit paths; only
//! the cheapest cost is kept.

use std::collections::HashMap;

use super::costs::{CostConfig, CostError};
use crate::dawg::Dawg;
use crate::types::{FuzzyMatch, Partial, StateId, ROOT};
use crate::{Interrupt, Never};

/// One pending traversal branch.
struct Branch {
    state: StateId,
    pos: usize,
    cost: f32,
    word: String,
}

impl Branch {
    fn spawn(&self, state: StateId, pos: usize, cost: f32, append: &[char]) -> Self {
        let mut word = self.word.clone();
        word.extend(append);
        Self {
            state,
            pos,
            cost,
            word,
        }
    }
}

/// Every dictionary word within `costs.budget` of `query`.
///
/// Results are sorted by cost, then by word.
///
/// ```
/// use lexdawg::{fuzzy_search, CostConfig, Dawg};
///
/// let dawg = Dawg::from_words(["top"]);
/// let hits = fuzzy_search(&dawg, "tap", &CostConfig::default()).unwrap();
/// assert_eq!(hits.len(), 1);
/// assert_eq!(hits[0].word, "top");
/// assert_eq!(hits[0].cost, 2.0);
/// ```
pub fn fuzzy_search(
    dawg: &Dawg,
    query: &str,
    costs: &CostConfig,
) -> Result<Vec<FuzzyMatch>, CostError> {
    fuzzy_search_until(dawg, query, costs, &Never).map(|partial| partial.items)
}

/// [`fuzzy_search`] that polls `interrupt` once per expanded branch.
///
/// On interruption the matches found so far come back with
/// `complete == false`. Their costs are the cheapest seen so far, which may
/// be higher than the true minimum.
pub fn fuzzy_search_until<I>(
    dawg: &Dawg,
    query: &str,
    costs: &CostConfig,
    interrupt: &I,
) -> Result<Partial<FuzzyMatch>, CostError>
where
    I: Interrupt + ?Sized,
{
    costs.validate()?;

    let query: Vec<char> = query.chars().collect();
    let len = query.len();
    let budget = costs.budget;

    let mut best: HashMap<String, f32> = HashMap::new();
    let mut stack = vec![Branch {
        state: ROOT,
        pos: 0,
        cost: 0.0,
        word: String::new(),
    }];
    let mut complete = true;

    while let Some(branch) = stack.pop() {
        if interrupt.should_stop() {
            complete = false;
            break;
        }

        let node = dawg.at(branch.state);
        let Branch { pos, cost, .. } = branch;

        let deleted = cost + costs.deletion;
        if deleted <= budget {
            for &(ch, target) in node.transitions() {
                stack.push(branch.spawn(target, pos, deleted, &[ch]));
            }
        }

        if pos == len {
            if node.is_accepting() {
                best.entry(branch.word)
                    .and_modify(|seen| *seen = seen.min(cost))
                    .or_insert(cost);
            }
            continue;
        }

        let expected = query[pos];

        if let Some(target) = node.next(expected) {
            stack.push(branch.spawn(target, pos + 1, cost, &[expected]));
        }

        let inserted = cost + costs.insertion;
        if inserted <= budget {
            stack.push(branch.spawn(branch.state, pos + 1, inserted, &[]));
        }

        let substituted = cost + costs.substitution;
        if substituted <= budget {
            for &(ch, target) in node.transitions() {
                if ch != expected {
                    stack.push(branch.spawn(target, pos + 1, substituted, &[ch]));
                }
            }
        }

        let transposed = cost + costs.transposition;
        if transposed <= budget && pos + 1 < len {
            let swapped = query[pos + 1];
            let landing = node
                .next(swapped)
                .and_then(|middle| dawg.at(middle).next(expected));
            if let Some(target) = landing {
                stack.push(branch.spawn(target, pos + 2, transposed, &[swapped, expected]));
            }
        }
    }

    let mut items: Vec<FuzzyMatch> = best
        .into_iter()
        .map(|(word, cost)| FuzzyMatch { word, cost })
        .collect();
    items.sort_by(|a, b| a.cost.total_cmp(&b.cost).then_with(|| a.word.cmp(&b.word)));

    Ok(Partial { items, complete })
}
