// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the lexdawg command-line interface.
//!
//! `build` compiles a word list into a `.dawg` file. Every other subcommand
//! loads one and queries it: `contains`, `prefix`, `fuzzy`, `extract`, plus
//! `inspect` for statistics and `export` for graph text.

pub mod display;

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

#[derive(Parser)]
#[command(
    name = "lexdawg",
    about = "Compile word lists into automata and search them",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Compile a word list (one word per line) into a .dawg file
    Build {
        /// Word list; blank lines are skipped
        #[arg(short, long)]
        input: PathBuf,

        /// Output .dawg file
        #[arg(short, long)]
        output: PathBuf,

        /// Lowercase, strip diacritics and collapse whitespace in each word
        #[arg(long)]
        normalize: bool,
    },

    /// Check whether words are in the dictionary
    Contains {
        /// Path to .dawg file
        file: PathBuf,

        /// Words to look up
        #[arg(required = true)]
        words: Vec<String>,

        /// Normalize each word before lookup
        #[arg(long)]
        normalize: bool,
    },

    /// List dictionary words starting with a prefix
    Prefix {
        /// Path to .dawg file
        file: PathBuf,

        /// Prefix to complete
        prefix: String,

        /// Maximum number of words (0 = no limit)
        #[arg(short, long, default_value = "20")]
        limit: usize,

        /// Complete from wherever the prefix stops matching
        ///
        /// The unmatched tail of the prefix is kept in every result, so the
        /// results are not dictionary words.
        #[arg(long)]
        partial: bool,

        /// Stop after this many milliseconds and print what was found
        #[arg(long)]
        timeout_ms: Option<u64>,

        /// Normalize the prefix before lookup
        #[arg(long)]
        normalize: bool,
    },

    /// Find dictionary words within a weighted edit budget
    Fuzzy {
        /// Path to .dawg file
        file: PathBuf,

        /// Queries to search for
        #[arg(required = true)]
        queries: Vec<String>,

        #[command(flatten)]
        costs: CostArgs,

        /// Stop each query after this many milliseconds
        #[arg(long)]
        timeout_ms: Option<u64>,

        /// Print results as JSON
        #[arg(long)]
        json: bool,

        /// Normalize each query before searching
        #[arg(long)]
        normalize: bool,
    },

    /// Split a document into dictionary words and unmatched text
    Extract {
        /// Path to .dawg file
        file: PathBuf,

        /// Document text (reads stdin when neither --text nor --document is given)
        #[arg(long, conflicts_with = "document")]
        text: Option<String>,

        /// Read the document from a file
        #[arg(long)]
        document: Option<PathBuf>,

        /// Print fragments as JSON
        #[arg(long)]
        json: bool,

        /// Normalize the document first (fragment offsets refer to the normalized text)
        #[arg(long)]
        normalize: bool,
    },

    /// Show automaton statistics for a .dawg file
    Inspect {
        /// Path to .dawg file
        file: PathBuf,
    },

    /// Write the automaton as graph text
    Export {
        /// Path to .dawg file
        file: PathBuf,

        #[arg(short, long, value_enum, default_value = "dot")]
        format: ExportFormat,

        /// Output file (stdout when omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

/// Edit costs. Flags override values loaded from `--costs`.
#[derive(Args, Debug, Default)]
pub struct CostArgs {
    /// JSON file with any of: insertion, deletion, substitution, transposition, budget
    #[arg(long)]
    pub costs: Option<PathBuf>,

    #[arg(long)]
    pub insertion: Option<f32>,

    #[arg(long)]
    pub deletion: Option<f32>,

    #[arg(long)]
    pub substitution: Option<f32>,

    #[arg(long)]
    pub transposition: Option<f32>,

    /// Maximum total edit cost
    #[arg(short = 'k', long)]
    pub budget: Option<f32>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    /// Graphviz DOT
    Dot,
    /// Mermaid flowchart
    Mermaid,
}
