// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Immutable word automata with exact, prefix, fuzzy and keyword search.
//!
//! A word list is compiled into a deterministic acyclic automaton that shares
//! both prefixes and suffixes. The compiled [`Dawg`] never changes, so it can
//! be queried from any number of threads at once.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────┐    ┌──────────────┐    ┌──────────────┐
//! │ DawgBuilder  │───▶│ determinize  │───▶│     Dawg     │
//! │ (NFA with    │    │ (subset      │    │ (flat state  │
//! │  suffix      │    │  construction│    │  table)      │
//! │  sharing)    │    │  BFS)        │    │              │
//! └──────────────┘    └──────────────┘    └──────┬───────┘
//!                                                │
//!        ┌─────────────┬──────────────┬──────────┼────────────┐
//!        ▼             ▼              ▼          ▼            ▼
//!  ┌───────────┐ ┌───────────┐ ┌────────────┐ ┌────────┐ ┌─────────┐
//!  │ contains  │ │ fuzzy     │ │ extract    │ │ binary │ │ export  │
//!  │ prefix    │ │ (weighted │ │ (leftmost  │ │ (LE    │ │ (dot,   │
//!  │ starts_   │ │  edits)   │ │  longest)  │ │ codec) │ │ mermaid)│
//!  │ with      │ │           │ │            │ │        │ │         │
//!  └───────────┘ └───────────┘ └────────────┘ └────────┘ └─────────┘
//! ```
//!
//! # Usage
//!
//! ```
//! use lexdawg::{extract_keywords, fuzzy_search, CostConfig, Dawg};
//!
//! let dawg = Dawg::from_words(["top", "tops", "tap", "taps"]);
//!
//! assert!(dawg.contains("top"));
//! assert!(!dawg.contains("to"));
//! assert!(dawg.contains_prefix("to"));
//! assert_eq!(dawg.starts_with("ta", false, 0), vec!["tap", "taps"]);
//!
//! let hits = fuzzy_search(&dawg, "tip", &CostConfig::default()).unwrap();
//! assert_eq!(hits[0].word, "tap");
//!
//! let fragments = extract_keywords(&dawg, "xtopy");
//! assert_eq!(fragments[1].text, "top");
//!
//! let copy = Dawg::from_bytes(&dawg.to_bytes()).unwrap();
//! assert_eq!(copy.words(), dawg.words());
//! ```
//!
//! # Features
//!
//! - `parallel`: batch queries over rayon ([`parallel`]) and CLI progress bars
//! - `unicode-normalization`: diacritic folding in [`normalize`]
//! - `serde_json`: JSON cost files and JSON output in the CLI

pub mod binary;
mod build;
mod dawg;
pub mod export;
mod extract;
mod fuzzy;
mod interrupt;
#[cfg(feature = "parallel")]
pub mod parallel;
pub mod testing;
mod types;
mod utils;
pub mod verify;

// Re-exports for public API
pub use binary::{DecodeError, MAX_STATES};
pub use build::DawgBuilder;
pub use dawg::Dawg;
pub use extract::extract_keywords;
pub use fuzzy::{fuzzy_search, fuzzy_search_until, CostConfig, CostError, EditOp};
pub use interrupt::{Deadline, Interrupt, Never};
pub use types::{Fragment, FuzzyMatch, Partial, State, StateId, ROOT};
pub use utils::{normalize, word_lines};
