// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

use std::fs;
use std::io::{self, BufWriter, Read, Write};
use std::path::Path;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use clap::Parser;
#[cfg(feature = "parallel")]
use indicatif::{ProgressBar, ProgressStyle};
use serde::Serialize;

use lexdawg::binary::encoded_len;
use lexdawg::{
    export, extract_keywords, fuzzy_search_until, normalize, word_lines, CostConfig, Dawg,
    DawgBuilder, Deadline, Fragment, FuzzyMatch, Interrupt, Never,
};

mod cli;
use cli::display::*;
use cli::{Cli, Commands, CostArgs, ExportFormat};

fn main() {
    let cli = Cli::parse();
    if let Err(e) = run(cli.command) {
        eprintln!("❌ {:#}", e);
        std::process::exit(1);
    }
}

fn run(command: Commands) -> Result<()> {
    match command {
        Commands::Build {
            input,
            output,
            normalize,
        } => run_build(&input, &output, normalize),
        Commands::Contains {
            file,
            words,
            normalize,
        } => run_contains(&file, &words, normalize),
        Commands::Prefix {
            file,
            prefix,
            limit,
            partial,
            timeout_ms,
            normalize,
        } => run_prefix(&file, &prefix, limit, partial, timeout_ms, normalize),
        Commands::Fuzzy {
            file,
            queries,
            costs,
            timeout_ms,
            json,
            normalize,
        } => run_fuzzy(&file, &queries, &costs, timeout_ms, json, normalize),
        Commands::Extract {
            file,
            text,
            document,
            json,
            normalize,
        } => run_extract(&file, text, document.as_deref(), json, normalize),
        Commands::Inspect { file } => run_inspect(&file),
        Commands::Export {
            file,
            format,
            output,
        } => run_export(&file, format, output.as_deref()),
    }
}

// ============================================================================
// HELPERS
// ============================================================================

fn load_dawg(path: &Path) -> Result<Dawg> {
    let bytes = fs::read(path).with_context(|| format!("Failed to read {}", path.display()))?;
    Dawg::from_bytes(&bytes).with_context(|| format!("Invalid automaton in {}", path.display()))
}

fn fold(value: &str, enabled: bool) -> String {
    if enabled {
        normalize(value)
    } else {
        value.to_string()
    }
}

fn interrupt_for(timeout_ms: Option<u64>) -> Box<dyn Interrupt> {
    match timeout_ms {
        Some(ms) => Box::new(Deadline::after(Duration::from_millis(ms))),
        None => Box::new(Never),
    }
}

#[cfg(feature = "serde_json")]
fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    let text = serde_json::to_string_pretty(value).context("Failed to serialize output")?;
    println!("{}", text);
    Ok(())
}

#[cfg(not(feature = "serde_json"))]
fn print_json<T: Serialize + ?Sized>(_value: &T) -> Result<()> {
    anyhow::bail!("JSON output requires the serde_json feature")
}

#[cfg(feature = "parallel")]
fn create_progress_style() -> ProgressStyle {
    ProgressStyle::with_template("{spinner:.cyan} {prefix:<10} [{bar:40.cyan/dim}] {pos}/{len} {msg}")
        .map(|style| style.progress_chars("━━╸"))
        .unwrap_or_else(|_| ProgressStyle::default_bar())
}

// ============================================================================
// BUILD
// ============================================================================

fn run_build(input: &Path, output: &Path, normalize_words: bool) -> Result<()> {
    let started = Instant::now();
    let text = fs::read_to_string(input)
        .with_context(|| format!("Failed to read word list {}", input.display()))?;
    let lines: Vec<&str> = word_lines(&text).collect();

    #[cfg(feature = "parallel")]
    let pb = ProgressBar::new(lines.len() as u64);
    #[cfg(feature = "parallel")]
    pb.set_style(create_progress_style());
    #[cfg(feature = "parallel")]
    pb.set_prefix("Adding");

    let mut builder = DawgBuilder::new();
    for line in &lines {
        builder.add_word(&fold(line, normalize_words));
        #[cfg(feature = "parallel")]
        pb.inc(1);
    }

    #[cfg(feature = "parallel")]
    pb.finish_with_message(format!("{} words", builder.words_added()));

    if builder.words_added() == 0 {
        eprintln!("⚠️  {} has no words; writing an empty dictionary", input.display());
    }

    let dawg = builder.build();

    let file = fs::File::create(output)
        .with_context(|| format!("Failed to create {}", output.display()))?;
    let mut w = BufWriter::new(file);
    dawg.write_to(&mut w)
        .and_then(|()| w.flush())
        .with_context(|| format!("Failed to write {}", output.display()))?;

    eprintln!(
        "✓ {} words → {} states, {} edges ({}) in {:.1?}",
        builder.words_added(),
        dawg.state_count(),
        dawg.edge_count(),
        format_size(encoded_len(&dawg)),
        started.elapsed()
    );
    Ok(())
}

// ============================================================================
// QUERIES
// ============================================================================

fn run_contains(file: &Path, words: &[String], normalize_words: bool) -> Result<()> {
    let dawg = load_dawg(file)?;
    let words: Vec<String> = words.iter().map(|w| fold(w, normalize_words)).collect();

    #[cfg(feature = "parallel")]
    let found = lexdawg::parallel::contains_many(&dawg, &words);
    #[cfg(not(feature = "parallel"))]
    let found: Vec<bool> = words.iter().map(|w| dawg.contains(w)).collect();

    for (word, hit) in words.iter().zip(found) {
        println!("{} {}", verdict(hit), word);
    }
    Ok(())
}

fn run_prefix(
    file: &Path,
    prefix: &str,
    limit: usize,
    partial: bool,
    timeout_ms: Option<u64>,
    normalize_prefix: bool,
) -> Result<()> {
    let dawg = load_dawg(file)?;
    let prefix = fold(prefix, normalize_prefix);
    let interrupt = interrupt_for(timeout_ms);

    let result = dawg.starts_with_until(&prefix, partial, limit, interrupt.as_ref());
    for word in &result.items {
        println!("{}", word);
    }
    if !result.complete {
        eprintln!("⚠️  timed out after {} results", result.items.len());
    }
    Ok(())
}

fn resolve_costs(args: &CostArgs) -> Result<CostConfig> {
    let mut costs = match &args.costs {
        Some(path) => load_cost_file(path)?,
        None => CostConfig::default(),
    };
    if let Some(v) = args.insertion {
        costs.insertion = v;
    }
    if let Some(v) = args.deletion {
        costs.deletion = v;
    }
    if let Some(v) = args.substitution {
        costs.substitution = v;
    }
    if let Some(v) = args.transposition {
        costs.transposition = v;
    }
    if let Some(v) = args.budget {
        costs.budget = v;
    }
    costs.validate().context("Invalid cost configuration")?;
    Ok(costs)
}

#[cfg(feature = "serde_json")]
fn load_cost_file(path: &Path) -> Result<CostConfig> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("Failed to read cost file {}", path.display()))?;
    serde_json::from_str(&text).with_context(|| format!("Invalid cost JSON in {}", path.display()))
}

#[cfg(not(feature = "serde_json"))]
fn load_cost_file(_path: &Path) -> Result<CostConfig> {
    anyhow::bail!("--costs requires the serde_json feature")
}

#[derive(Serialize)]
struct QueryHits<'a> {
    query: &'a str,
    matches: &'a [FuzzyMatch],
    complete: bool,
}

fn run_fuzzy(
    file: &Path,
    queries: &[String],
    cost_args: &CostArgs,
    timeout_ms: Option<u64>,
    json: bool,
    normalize_queries: bool,
) -> Result<()> {
    let costs = resolve_costs(cost_args)?;
    let dawg = load_dawg(file)?;

    let mut results = Vec::with_capacity(queries.len());
    for query in queries {
        let query = fold(query, normalize_queries);
        // Each query gets its own deadline
        let interrupt = interrupt_for(timeout_ms);
        let partial = fuzzy_search_until(&dawg, &query, &costs, interrupt.as_ref())?;
        results.push((query, partial));
    }

    if json {
        let report: Vec<QueryHits<'_>> = results
            .iter()
            .map(|(query, partial)| QueryHits {
                query,
                matches: &partial.items,
                complete: partial.complete,
            })
            .collect();
        return print_json(&report);
    }

    for (query, partial) in &results {
        section_top(query);
        if partial.items.is_empty() {
            row(&themed(GRAY, &[], "  no matches"));
        }
        for hit in &partial.items {
            row(&format!("  {}  {}", cost_colored(hit.cost, costs.budget), hit.word));
        }
        if !partial.complete {
            row(&themed(YELLOW, &[], "  timed out, results may be incomplete"));
        }
        section_bot();
    }
    Ok(())
}

fn run_extract(
    file: &Path,
    text: Option<String>,
    document: Option<&Path>,
    json: bool,
    normalize_document: bool,
) -> Result<()> {
    let dawg = load_dawg(file)?;

    let raw = match (text, document) {
        (Some(text), _) => text,
        (None, Some(path)) => fs::read_to_string(path)
            .with_context(|| format!("Failed to read document {}", path.display()))?,
        (None, None) => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read document from stdin")?;
            buf
        }
    };
    let document = fold(&raw, normalize_document);
    let fragments: Vec<Fragment> = extract_keywords(&dawg, &document);

    if json {
        return print_json(&fragments);
    }

    let mut out = String::with_capacity(document.len());
    for fragment in &fragments {
        if fragment.matched {
            out.push_str(&highlight(&fragment.text));
        } else {
            out.push_str(&fragment.text);
        }
    }
    println!("{}", out);

    let matched = fragments.iter().filter(|f| f.matched).count();
    eprintln!("✓ {} keywords in {} fragments", matched, fragments.len());
    Ok(())
}

// ============================================================================
// INSPECT / EXPORT
// ============================================================================

fn brotli_size(data: &[u8]) -> Result<usize> {
    let mut compressed = Vec::new();
    {
        let mut encoder = brotli::CompressorWriter::new(&mut compressed, 4096, 11, 22);
        encoder.write_all(data).context("Brotli compression failed")?;
    }
    Ok(compressed.len())
}

fn run_inspect(file: &Path) -> Result<()> {
    let bytes = fs::read(file).with_context(|| format!("Failed to read {}", file.display()))?;
    let dawg = Dawg::from_bytes(&bytes)
        .with_context(|| format!("Invalid automaton in {}", file.display()))?;
    let compressed = brotli_size(&bytes)?;

    let max_degree = dawg.states().iter().map(|s| s.degree()).max().unwrap_or(0);

    title(&format!("LEXDAWG  {}", file.display()));

    section_top("AUTOMATON");
    field("states", &dawg.state_count().to_string());
    field("edges", &dawg.edge_count().to_string());
    field("accepting states", &dawg.accepting_count().to_string());
    field("words", &dawg.word_count().to_string());
    field("root fan-out", &dawg.root().degree().to_string());
    field("max fan-out", &max_degree.to_string());

    section_mid("ENCODING");
    field("size", &format_size(bytes.len()));
    field(
        "brotli",
        &format!(
            "{} ({})",
            format_size(compressed),
            savings_colored(bytes.len(), compressed)
        ),
    );
    field("crc32", &format!("{:08x}", crc32fast::hash(&bytes)));
    section_bot();
    Ok(())
}

fn run_export(file: &Path, format: ExportFormat, output: Option<&Path>) -> Result<()> {
    let dawg = load_dawg(file)?;

    let mut w: Box<dyn Write> = match output {
        Some(path) => Box::new(BufWriter::new(
            fs::File::create(path).with_context(|| format!("Failed to create {}", path.display()))?,
        )),
        None => Box::new(BufWriter::new(io::stdout().lock())),
    };

    let written = match format {
        ExportFormat::Dot => export::write_dot(&dawg, &mut w),
        ExportFormat::Mermaid => export::write_mermaid(&dawg, &mut w),
    };
    written
        .and_then(|()| w.flush())
        .context("Failed to write export")
}
