// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Keyword extraction: split a document into dictionary words and the text
//! between them.
//!
//! # Algorithm
//!
//! The document is scanned once. Each position that could start a word opens
//! an *attempt*, and every open attempt advances on each character. An attempt
//! remembers the longest length at which it passed an accepting state.
//!
//! ```text
//! text:     x  t  o  p  y  t  a  p  z  ⊥
//! attempt:     t──o──p✓ ✗                  → best 3, emit "top"
//!                          t──a──p✓ ✗      → best 3, emit "tap"
//! ```
//!
//! Attempts are resolved in anchor order from the front of a queue. When the
//! front attempt dies with a recorded match, that match is emitted and every
//! attempt anchored inside it is discarded. When it dies without one, its
//! anchor character joins the unmatched backlog. This gives leftmost, longest,
//! non-overlapping matches.
//!
//! One position past the end (`⊥`) acts as a sentinel: no transition exists on
//! it, so every open attempt dies and the queue drains.
//!
//! # Complexity
//!
//! O(document length × open attempts). Open attempts never exceed the length
//! of the longest dictionary word, but there are no failure links, so a
//! dictionary of very long words sharing prefixes is the slow case.

use std::collections::VecDeque;

use crate::dawg::Dawg;
use crate::types::{Fragment, StateId, ROOT};

/// An open (or dead but unresolved) match attempt.
#[derive(Debug)]
struct Attempt {
    anchor: usize,
    /// `None` once no transition matched.
    state: Option<StateId>,
    /// Longest accepted length from `anchor`, 0 if none yet.
    best: usize,
}

/// Accumulates output fragments and the unmatched backlog.
struct Segments<'t> {
    text: &'t [char],
    out: Vec<Fragment>,
    backlog_start: usize,
    backlog: String,
}

impl<'t> Segments<'t> {
    fn new(text: &'t [char]) -> Self {
        Self {
            text,
            out: Vec::new(),
            backlog_start: 0,
            backlog: String::new(),
        }
    }

    fn push_unmatched(&mut self, pos: usize) {
        if self.backlog.is_empty() {
            self.backlog_start = pos;
        }
        self.backlog.push(self.text[pos]);
    }

    fn flush(&mut self) {
        if !self.backlog.is_empty() {
            let text = std::mem::take(&mut self.backlog);
            self.out.push(Fragment::unmatched(self.backlog_start, text));
        }
    }

    fn push_matched(&mut self, start: usize, len: usize) {
        self.flush();
        let text: String = self.text[start..start + len].iter().collect();
        self.out.push(Fragment::matched(start, text));
    }

    fn finish(mut self) -> Vec<Fragment> {
        self.flush();
        self.out
    }
}

/// Segment `document` into matched dictionary words and unmatched text.
///
/// Concatenating the fragments' text reproduces `document` exactly. Matched
/// fragments are whole dictionary words; adjacent unmatched text is always
/// merged into a single fragment.
///
/// ```
/// use lexdawg::{extract_keywords, Dawg};
///
/// let dawg = Dawg::from_words(["top", "tap"]);
/// let parts: Vec<(bool, String)> = extract_keywords(&dawg, "xtopytapz")
///     .into_iter()
///     .map(|f| (f.matched, f.text))
///     .collect();
///
/// assert_eq!(parts, vec![
///     (false, "x".to_string()),
///     (true, "top".to_string()),
///     (false, "y".to_string()),
///     (true, "tap".to_string()),
///     (false, "z".to_string()),
/// ]);
/// ```
pub fn extract_keywords(dawg: &Dawg, document: &str) -> Vec<Fragment> {
    let text: Vec<char> = document.chars().collect();
    let root = dawg.root();

    let mut segments = Segments::new(&text);
    let mut attempts: VecDeque<Attempt> = VecDeque::new();

    for pos in 0..=text.len() {
        // `None` is the end-of-text sentinel
        let ch = text.get(pos).copied();

        if let Some(c) = ch {
            if attempts.is_empty() && root.next(c).is_none() {
                segments.push_unmatched(pos);
                continue;
            }
            attempts.push_back(Attempt {
                anchor: pos,
                state: Some(ROOT),
                best: 0,
            });
        }

        for attempt in attempts.iter_mut() {
            let Some(state) = attempt.state else {
                continue;
            };
            attempt.state = ch.and_then(|c| dawg.at(state).next(c));
            if let Some(next) = attempt.state {
                if dawg.at(next).is_accepting() {
                    attempt.best = pos + 1 - attempt.anchor;
                }
            }
        }

        while let Some(front) = attempts.front() {
            if front.state.is_some() {
                break;
            }
            let (anchor, best) = (front.anchor, front.best);
            attempts.pop_front();

            if best > 0 {
                segments.push_matched(anchor, best);
                let end = anchor + best;
                while attempts.front().is_some_and(|a| a.anchor < end) {
                    attempts.pop_front();
                }
            } else {
                segments.push_unmatched(anchor);
            }
        }
    }

    segments.finish()
}
