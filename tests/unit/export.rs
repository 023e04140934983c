//! Graph text export.

use lexdawg::export::{write_dot, write_mermaid};
use lexdawg::Dawg;

use crate::common::sample_dawg;

fn render(f: fn(&Dawg, &mut Vec<u8>) -> std::io::Result<()>, dawg: &Dawg) -> String {
    let mut out = Vec::new();
    f(dawg, &mut out).unwrap();
    String::from_utf8(out).unwrap()
}

fn dot(dawg: &Dawg, out: &mut Vec<u8>) -> std::io::Result<()> {
    write_dot(dawg, out)
}

fn mermaid(dawg: &Dawg, out: &mut Vec<u8>) -> std::io::Result<()> {
    write_mermaid(dawg, out)
}

#[test]
fn test_dot_lists_every_state_and_edge() {
    let dawg = sample_dawg();
    let text = render(dot, &dawg);
    assert!(text.starts_with("digraph dawg {\n"));
    assert!(text.ends_with("}\n"));
    assert_eq!(text.matches(" -> ").count(), dawg.edge_count());
    assert_eq!(text.matches("[peripheries = 2]").count(), dawg.accepting_count());
    assert!(text.contains("  1 -> 2 [label = \"a\"];\n"));
    assert!(text.contains("  1 -> 2 [label = \"o\"];\n"));
}

#[test]
fn test_mermaid_lists_every_state_and_edge() {
    let dawg = sample_dawg();
    let text = render(mermaid, &dawg);
    assert_eq!(text.matches(" --> ").count(), dawg.edge_count());
    assert_eq!(text.matches("(((").count(), dawg.accepting_count());
    assert!(text.contains("  s3(((3)))\n"));
}

#[test]
fn test_empty_dictionary_exports_lone_root() {
    let text = render(dot, &Dawg::default());
    assert_eq!(
        text,
        "digraph dawg {\n  rankdir = LR;\n  node [shape = circle];\n  0;\n}\n"
    );
}
