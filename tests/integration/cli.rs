//! End-to-end runs of the `lexdawg` binary.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use lexdawg::Dawg;
use tempfile::TempDir;

fn lexdawg(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_lexdawg"))
        .args(args)
        .env("NO_COLOR", "1")
        .output()
        .expect("failed to run lexdawg")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

fn build_fixture(dir: &Path) -> PathBuf {
    let words = dir.join("words.txt");
    fs::write(&words, "top\ntops\n\n  tap\ntaps\n").unwrap();
    let dawg = dir.join("words.dawg");
    let out = lexdawg(&[
        "build",
        "--input",
        words.to_str().unwrap(),
        "--output",
        dawg.to_str().unwrap(),
    ]);
    assert!(out.status.success(), "build failed: {}", String::from_utf8_lossy(&out.stderr));
    dawg
}

#[test]
fn test_build_writes_loadable_file() {
    let dir = TempDir::new().unwrap();
    let path = build_fixture(dir.path());
    let dawg = Dawg::from_bytes(&fs::read(path).unwrap()).unwrap();
    assert_eq!(dawg.words(), vec!["tap", "taps", "top", "tops"]);
}

#[test]
fn test_contains_and_prefix() {
    let dir = TempDir::new().unwrap();
    let path = build_fixture(dir.path());
    let file = path.to_str().unwrap();

    let out = stdout(&lexdawg(&["contains", file, "top", "to"]));
    assert_eq!(out, "✓ top\n✗ to\n");

    let out = stdout(&lexdawg(&["prefix", file, "ta", "--limit", "0"]));
    assert_eq!(out, "tap\ntaps\n");

    let out = stdout(&lexdawg(&["prefix", file, "t", "--limit", "1"]));
    assert_eq!(out, "tap\n");
}

#[cfg(feature = "serde_json")]
#[test]
fn test_fuzzy_json() {
    let dir = TempDir::new().unwrap();
    let path = build_fixture(dir.path());

    let out = lexdawg(&["fuzzy", path.to_str().unwrap(), "tip", "--json"]);
    assert!(out.status.success());
    let report: serde_json::Value = serde_json::from_slice(&out.stdout).unwrap();
    assert_eq!(report[0]["query"], "tip");
    assert_eq!(report[0]["complete"], true);
    assert_eq!(report[0]["matches"][0]["word"], "tap");
    assert_eq!(report[0]["matches"][1]["word"], "top");
}

#[cfg(feature = "serde_json")]
#[test]
fn test_fuzzy_cost_file_and_override() {
    let dir = TempDir::new().unwrap();
    let path = build_fixture(dir.path());
    let costs = dir.path().join("costs.json");
    fs::write(&costs, r#"{"substitution": 0.5, "budget": 0.5}"#).unwrap();

    let out = lexdawg(&[
        "fuzzy",
        path.to_str().unwrap(),
        "tip",
        "--costs",
        costs.to_str().unwrap(),
        "--json",
    ]);
    let report: serde_json::Value = serde_json::from_slice(&out.stdout).unwrap();
    assert_eq!(report[0]["matches"].as_array().unwrap().len(), 2);

    // A flag beats the file
    let out = lexdawg(&[
        "fuzzy",
        path.to_str().unwrap(),
        "tip",
        "--costs",
        costs.to_str().unwrap(),
        "--substitution",
        "1",
        "--json",
    ]);
    let report: serde_json::Value = serde_json::from_slice(&out.stdout).unwrap();
    assert!(report[0]["matches"].as_array().unwrap().is_empty());
}

#[test]
fn test_fuzzy_rejects_bad_costs() {
    let dir = TempDir::new().unwrap();
    let path = build_fixture(dir.path());
    let out = lexdawg(&["fuzzy", path.to_str().unwrap(), "tip", "--insertion", "0"]);
    assert!(!out.status.success());
    assert!(String::from_utf8_lossy(&out.stderr).contains("insertion cost"));
}

#[test]
fn test_extract_plain() {
    let dir = TempDir::new().unwrap();
    let path = build_fixture(dir.path());
    let out = stdout(&lexdawg(&["extract", path.to_str().unwrap(), "--text", "xtopytapz"]));
    assert_eq!(out, "x[top]y[tap]z\n");
}

#[test]
fn test_export_dot_to_file() {
    let dir = TempDir::new().unwrap();
    let path = build_fixture(dir.path());
    let dot = dir.path().join("graph.dot");
    let out = lexdawg(&[
        "export",
        path.to_str().unwrap(),
        "--format",
        "dot",
        "--output",
        dot.to_str().unwrap(),
    ]);
    assert!(out.status.success());
    let text = fs::read_to_string(dot).unwrap();
    assert!(text.starts_with("digraph dawg {"));
}

#[test]
fn test_inspect_reports_counts() {
    let dir = TempDir::new().unwrap();
    let path = build_fixture(dir.path());
    let out = stdout(&lexdawg(&["inspect", path.to_str().unwrap()]));
    assert!(out.contains("states"));
    assert!(out.contains("crc32"));
}

#[test]
fn test_corrupt_file_fails() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("bad.dawg");
    fs::write(&path, [5, 0, 0]).unwrap();
    let out = lexdawg(&["contains", path.to_str().unwrap(), "x"]);
    assert!(!out.status.success());
    assert!(String::from_utf8_lossy(&out.stderr).contains("truncated"));
}
