// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Decode failures.
//!
//! A stream that ends early is reported as [`DecodeError::Truncated`] so
//! callers can tell a short read apart from a stream that is complete but
//! describes an impossible automaton.

use std::fmt;
use std::io;

use crate::types::StateId;

/// Which part of the stream was being read when decoding stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    /// The leading 32-bit state count.
    StateCount,
    /// The 32-bit edge count that opens a state.
    EdgeCount { state: StateId },
    /// An 8-byte (code point, target) record.
    EdgeRecord { state: StateId, index: u32 },
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Field::StateCount => write!(f, "state count"),
            Field::EdgeCount { state } => write!(f, "edge count of state {}", state),
            Field::EdgeRecord { state, index } => {
                write!(f, "edge record {} of state {}", index, state)
            }
        }
    }
}

/// Error type for automaton decoding.
#[derive(Debug)]
pub enum DecodeError {
    /// The stream ended while `Field` was still due.
    Truncated(Field),
    /// A count field held a negative value.
    NegativeCount { field: Field, value: i32 },
    /// The stream declared zero states; every automaton has a root.
    EmptyAutomaton,
    /// A state count larger than [`MAX_STATES`](super::MAX_STATES).
    TooManyStates { count: u32 },
    /// More edge records than there are distinct labels.
    TooManyEdges { state: StateId, count: u32 },
    /// Code point field is neither a Unicode scalar value nor the accept marker.
    InvalidCodePoint { state: StateId, value: i32 },
    /// Target field does not name a state of this automaton.
    TargetOutOfRange {
        state: StateId,
        target: i32,
        states: u32,
    },
    /// Two records for the same label (`None` = the accept marker).
    DuplicateEdge { state: StateId, ch: Option<char> },
    /// The edges describe a cycle through `state`.
    Cycle { state: StateId },
    /// Bytes left over after a complete automaton.
    TrailingBytes { extra: usize },
    /// The byte source failed for a reason other than ending early.
    Io(io::Error),
}

impl DecodeError {
    /// Did the stream simply end too soon?
    pub fn is_truncated(&self) -> bool {
        matches!(self, DecodeError::Truncated(_))
    }
}

impl fmt::Display for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DecodeError::Truncated(field) => {
                write!(f, "truncated stream: missing {}", field)
            }
            DecodeError::NegativeCount { field, value } => {
                write!(f, "{} is negative ({})", field, value)
            }
            DecodeError::EmptyAutomaton => write!(f, "automaton declares zero states"),
            DecodeError::TooManyStates { count } => {
                write!(f, "state count {} exceeds limit {}", count, super::MAX_STATES)
            }
            DecodeError::TooManyEdges { state, count } => {
                write!(f, "state {} declares {} edges", state, count)
            }
            DecodeError::InvalidCodePoint { state, value } => {
                write!(f, "state {} has invalid code point {:#x}", state, value)
            }
            DecodeError::TargetOutOfRange {
                state,
                target,
                states,
            } => {
                write!(
                    f,
                    "state {} points at {} but only {} states exist",
                    state, target, states
                )
            }
            DecodeError::DuplicateEdge { state, ch: Some(ch) } => {
                write!(f, "state {} has two edges labeled {:?}", state, ch)
            }
            DecodeError::DuplicateEdge { state, ch: None } => {
                write!(f, "state {} has two accept markers", state)
            }
            DecodeError::Cycle { state } => {
                write!(f, "edges form a cycle through state {}", state)
            }
            DecodeError::TrailingBytes { extra } => {
                write!(f, "{} trailing bytes after automaton", extra)
            }
            DecodeError::Io(err) => write!(f, "read failed: {}", err),
        }
    }
}

impl std::error::Error for DecodeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            DecodeError::Io(err) => Some(err),
            _ => None,
        }
    }
}
