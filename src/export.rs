// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Graph text export for visualizing an automaton.
//!
//! Both writers only read `(index, transitions, accepting)` per state. States
//! are emitted in index order and edges in code point order, so output is
//! stable for a given automaton.

use std::io::{self, Write};

use crate::dawg::Dawg;

/// Graphviz `digraph`. Accepting states get a double border.
///
/// ```text
/// digraph dawg {
///   rankdir = LR;
///   node [shape = circle];
///   0;
///   1 [peripheries = 2];
///   0 -> 1 [label = "a"];
/// }
/// ```
pub fn write_dot<W: Write>(dawg: &Dawg, mut w: W) -> io::Result<()> {
    writeln!(w, "digraph dawg {{")?;
    writeln!(w, "  rankdir = LR;")?;
    writeln!(w, "  node [shape = circle];")?;

    for (id, state) in dawg.states().iter().enumerate() {
        if state.is_accepting() {
            writeln!(w, "  {} [peripheries = 2];", id)?;
        } else {
            writeln!(w, "  {};", id)?;
        }
    }
    for (id, state) in dawg.states().iter().enumerate() {
        for &(ch, target) in state.transitions() {
            writeln!(w, "  {} -> {} [label = \"{}\"];", id, target, escape(ch))?;
        }
    }

    writeln!(w, "}}")
}

/// Mermaid `flowchart`. Accepting states are drawn as double circles.
pub fn write_mermaid<W: Write>(dawg: &Dawg, mut w: W) -> io::Result<()> {
    writeln!(w, "flowchart LR")?;

    for (id, state) in dawg.states().iter().enumerate() {
        if state.is_accepting() {
            writeln!(w, "  s{}((({})))", id, id)?;
        } else {
            writeln!(w, "  s{}(({}))", id, id)?;
        }
    }
    for (id, state) in dawg.states().iter().enumerate() {
        for &(ch, target) in state.transitions() {
            writeln!(w, "  s{} -- \"{}\" --> s{}", id, mermaid_label(ch), target)?;
        }
    }

    Ok(())
}

/// Escape a label for a double-quoted DOT string.
fn escape(ch: char) -> String {
    match ch {
        '"' => "\\\"".to_string(),
        '\\' => "\\\\".to_string(),
        '\n' => "\\n".to_string(),
        c if c.is_control() => format!("U+{:04X}", c as u32),
        c => c.to_string(),
    }
}

/// Mermaid has no backslash escapes; quotes become an entity code.
fn mermaid_label(ch: char) -> String {
    match ch {
        '"' => "#quot;".to_string(),
        c if c.is_control() || c.is_whitespace() => format!("U+{:04X}", c as u32),
        c => c.to_string(),
    }
}
