// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzzy search: every dictionary word within a weighted edit budget.
//!
//! Rather than comparing the query against each word, the search walks the
//! automaton and the query together. A branch is (state, query offset, cost so
//! far, word so far), and each edit operation spawns new branches. Any branch
//! that would exceed the budget is dropped, so the traversal only visits the
//! part of the automaton within reach of the query.

mod costs;
mod search;

pub use costs::{CostConfig, CostError, EditOp};
pub use search::{fuzzy_search, fuzzy_search_until};
