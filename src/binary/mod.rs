// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Binary format for compiled automata.
//!
//! The layout is bit-exact and deliberately plain: a state count followed by
//! one block per state, in index order. All fields are signed 32-bit
//! little-endian integers.
//!
//! # Format Overview
//!
//! ```text
//! ┌────────────────────────────────────────────────────────────┐
//! │ state_count: i32                                           │
//! ├────────────────────────────────────────────────────────────┤
//! │ STATE 0 (root)                                             │
//! │   edge_count: i32                                          │
//! │   edge_count × { code_point: i32, target: i32 }            │
//! ├────────────────────────────────────────────────────────────┤
//! │ STATE 1 .. STATE N-1 (same shape)                          │
//! └────────────────────────────────────────────────────────────┘
//! ```
//!
//! The accepting flag travels as one extra edge record whose code point is
//! [`ACCEPT_MARKER`] (-1, outside the Unicode scalar range). Its target field
//! is written as -1 and ignored on read. In memory the flag is a plain `bool`;
//! the marker exists only on the wire.
//!
//! The encoder writes real edges in code point order, then the marker, so the
//! same automaton always encodes to the same bytes. The decoder accepts records
//! in any order.
//!
//! # Security Considerations
//!
//! Streams may come from untrusted sources:
//! - The state count is capped at [`MAX_STATES`] and never blindly preallocated
//! - Edge counts above the number of distinct labels are rejected
//! - Every code point and target is range-checked
//! - Cyclic graphs are rejected, so traversals always terminate
//!
//! Any failure returns an error; a partially decoded automaton never escapes.

mod encoding;
mod error;

pub use error::{DecodeError, Field};

use std::io::{self, Read, Write};

use encoding::{read_count, read_i32, write_i32};

use crate::dawg::Dawg;
use crate::types::{State, StateId};
use crate::verify::find_cycle;

// ============================================================================
// CONSTANTS
// ============================================================================

/// Code point value of the edge record that flags a state as accepting.
pub const ACCEPT_MARKER: i32 = -1;

/// Maximum number of states accepted from a stream.
pub const MAX_STATES: u32 = 100_000_000;

/// Upper bound on edge records per state: one per Unicode scalar value plus
/// the accept marker.
pub const MAX_EDGES_PER_STATE: u32 = 0x11_0000 + 1;

/// States preallocated up front before the stream proves it is that long.
const PREALLOC_STATES: usize = 1 << 16;

// ============================================================================
// ENCODING
// ============================================================================

/// Write `dawg` to `w`.
pub fn encode<W: Write + ?Sized>(dawg: &Dawg, w: &mut W) -> io::Result<()> {
    write_i32(w, dawg.state_count() as i32)?;

    for state in dawg.states() {
        let records = state.degree() + usize::from(state.is_accepting());
        write_i32(w, records as i32)?;

        for &(ch, target) in state.transitions() {
            write_i32(w, ch as i32)?;
            write_i32(w, target as i32)?;
        }
        if state.is_accepting() {
            write_i32(w, ACCEPT_MARKER)?;
            write_i32(w, ACCEPT_MARKER)?;
        }
    }

    Ok(())
}

/// Encoded size in bytes, without encoding.
pub fn encoded_len(dawg: &Dawg) -> usize {
    let records: usize = dawg
        .states()
        .iter()
        .map(|s| s.degree() + usize::from(s.is_accepting()))
        .sum();
    4 + 4 * dawg.state_count() + 8 * records
}

// ============================================================================
// DECODING
// ============================================================================

/// Read exactly one automaton from `r`. Bytes after it are left unread.
pub fn decode<R: Read + ?Sized>(r: &mut R) -> Result<Dawg, DecodeError> {
    let count = read_count(r, Field::StateCount)?;
    if count == 0 {
        return Err(DecodeError::EmptyAutomaton);
    }
    if count > MAX_STATES {
        return Err(DecodeError::TooManyStates { count });
    }

    let mut states = Vec::with_capacity((count as usize).min(PREALLOC_STATES));
    for id in 0..count {
        states.push(decode_state(r, id, count)?);
    }

    if let Some(state) = find_cycle(&states) {
        return Err(DecodeError::Cycle { state });
    }

    Ok(Dawg::from_states(states))
}

fn decode_state<R: Read + ?Sized>(
    r: &mut R,
    id: StateId,
    state_count: u32,
) -> Result<State, DecodeError> {
    let records = read_count(r, Field::EdgeCount { state: id })?;
    if records > MAX_EDGES_PER_STATE {
        return Err(DecodeError::TooManyEdges {
            state: id,
            count: records,
        });
    }

    let mut edges: Vec<(char, StateId)> = Vec::with_capacity((records as usize).min(256));
    let mut accepting = false;

    for index in 0..records {
        let field = Field::EdgeRecord { state: id, index };
        let raw_ch = read_i32(r, field)?;
        let raw_target = read_i32(r, field)?;

        if raw_ch == ACCEPT_MARKER {
            if accepting {
                return Err(DecodeError::DuplicateEdge { state: id, ch: None });
            }
            accepting = true;
            continue;
        }

        let ch = u32::try_from(raw_ch)
            .ok()
            .and_then(char::from_u32)
            .ok_or(DecodeError::InvalidCodePoint {
                state: id,
                value: raw_ch,
            })?;
        let target = u32::try_from(raw_target)
            .ok()
            .filter(|&t| t < state_count)
            .ok_or(DecodeError::TargetOutOfRange {
                state: id,
                target: raw_target,
                states: state_count,
            })?;

        edges.push((ch, target));
    }

    edges.sort_unstable_by_key(|&(ch, _)| ch);
    if let Some(pair) = edges.windows(2).find(|pair| pair[0].0 == pair[1].0) {
        return Err(DecodeError::DuplicateEdge {
            state: id,
            ch: Some(pair[0].0),
        });
    }

    Ok(State::new(edges, accepting))
}

// ============================================================================
// CONVENIENCE ENTRY POINTS
// ============================================================================

impl Dawg {
    /// Serialize into `w`. See the [module docs](crate::binary) for the layout.
    pub fn write_to<W: Write>(&self, mut w: W) -> io::Result<()> {
        encode(self, &mut w)
    }

    /// Serialize into a fresh buffer.
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut buf = Vec::with_capacity(encoded_len(self));
        // Writing into a Vec cannot fail
        let _ = encode(self, &mut buf);
        buf
    }

    /// Deserialize one automaton from `r`, leaving any following bytes unread.
    pub fn read_from<R: Read>(mut r: R) -> Result<Self, DecodeError> {
        decode(&mut r)
    }

    /// Deserialize from a buffer that must hold exactly one automaton.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, DecodeError> {
        let mut rest = bytes;
        let dawg = decode(&mut rest)?;
        if !rest.is_empty() {
            return Err(DecodeError::TrailingBytes { extra: rest.len() });
        }
        Ok(dawg)
    }
}
