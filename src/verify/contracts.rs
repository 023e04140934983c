// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Debug-build assertions on automaton invariants.
//!
//! These use `debug_assert!` and compile to nothing in release builds.
//!
//! # INVARIANTS (DO NOT REMOVE THESE CHECKS)
//!
//! | Contract                     | Invariant                                  |
//! |------------------------------|--------------------------------------------|
//! | `check_dawg_well_formed`     | root exists, targets in range, edges sorted, acyclic |
//! | `check_all_reachable`        | every compiled state is reachable from root |

use super::{find_cycle, unreachable_states};
use crate::types::State;

/// Check the invariants every `Dawg` relies on.
///
/// # Panics (debug builds only)
/// Panics on an empty table, an out-of-range target, unsorted or duplicate
/// edge labels, or a cycle.
#[inline]
pub fn check_dawg_well_formed(states: &[State]) {
    debug_assert!(
        !states.is_empty(),
        "Contract violation: automaton has no root state"
    );

    if cfg!(debug_assertions) {
        for (id, state) in states.iter().enumerate() {
            for pair in state.edges.windows(2) {
                debug_assert!(
                    pair[0].0 < pair[1].0,
                    "Contract violation: state {} edges not strictly sorted ({:?} then {:?})",
                    id,
                    pair[0].0,
                    pair[1].0
                );
            }
            for &(ch, target) in &state.edges {
                debug_assert!(
                    (target as usize) < states.len(),
                    "Contract violation: state {} edge {:?} targets {} >= state count {}",
                    id,
                    ch,
                    target,
                    states.len()
                );
            }
        }

        debug_assert!(
            find_cycle(states).is_none(),
            "Contract violation: automaton contains a cycle"
        );
    }
}

/// Check that subset construction produced no orphan states.
///
/// # Panics (debug builds only)
#[inline]
pub fn check_all_reachable(states: &[State]) {
    if cfg!(debug_assertions) {
        let orphans = unreachable_states(states);
        debug_assert!(
            orphans.is_empty(),
            "Contract violation: states {:?} unreachable from root",
            orphans
        );
    }
}
