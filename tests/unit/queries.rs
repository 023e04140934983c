//! Exact, prefix and completion queries.

use std::sync::atomic::AtomicBool;

use lexdawg::{Dawg, Deadline, ROOT};

use crate::common::{english_dawg, prefixes, sample_dawg, ENGLISH, MULTILINGUAL};

// ============================================================================
// CONTAINS / CONTAINS_PREFIX
// ============================================================================

#[test]
fn test_sample_scenario() {
    let dawg = sample_dawg();
    assert!(dawg.contains("top"));
    assert!(!dawg.contains("to"));
    assert!(dawg.contains_prefix("to"));
    assert!(!dawg.contains_prefix("tapsy"));

    let mut found = dawg.starts_with("ta", false, 0);
    found.sort();
    assert_eq!(found, vec!["tap", "taps"]);
}

#[test]
fn test_every_prefix_of_every_word() {
    let dawg = english_dawg();
    for word in ENGLISH {
        for prefix in prefixes(word) {
            assert!(dawg.contains_prefix(prefix), "{} is a prefix of {}", prefix, word);
        }
    }
}

#[test]
fn test_words_not_added_are_rejected() {
    let dawg = english_dawg();
    for word in ["bak", "bakes", "cakers", "wakes", "takings", "ake", "b", ""] {
        assert!(!dawg.contains(word), "{} should not be contained", word);
    }
}

#[test]
fn test_multilingual_lookups() {
    let dawg = Dawg::from_words(MULTILINGUAL);
    for word in MULTILINGUAL {
        assert!(dawg.contains(word), "missing {}", word);
    }
    assert!(!dawg.contains("cafe"));
    assert!(dawg.contains_prefix("🦀"));
    assert!(!dawg.contains("🦀"));
}

#[test]
fn test_walk_reaches_root_on_empty() {
    let dawg = sample_dawg();
    assert_eq!(dawg.walk(""), Some(ROOT));
    assert!(dawg.walk("tx").is_none());
    let state = dawg.walk("top").and_then(|id| dawg.state(id)).unwrap();
    assert!(state.is_accepting());
    assert_eq!(state.next('s').map(|id| dawg.state(id).unwrap().is_accepting()), Some(true));
}

// ============================================================================
// STARTS_WITH
// ============================================================================

#[test]
fn test_starts_with_code_point_order() {
    let dawg = english_dawg();
    assert_eq!(
        dawg.starts_with("bak", false, 0),
        vec!["bake", "baked", "baker", "bakers", "baking"]
    );
}

#[test]
fn test_starts_with_includes_prefix_itself() {
    let dawg = english_dawg();
    assert_eq!(dawg.starts_with("maker", false, 0), vec!["maker", "makers"]);
}

#[test]
fn test_starts_with_limit_exact() {
    let dawg = english_dawg();
    for limit in 1..=5 {
        assert_eq!(dawg.starts_with("", false, limit).len(), limit);
    }
    assert_eq!(dawg.starts_with("", false, 0).len(), ENGLISH.len());
    assert_eq!(dawg.starts_with("", false, 1000).len(), ENGLISH.len());
}

#[test]
fn test_starts_with_limit_returns_first_in_order() {
    let dawg = english_dawg();
    let all = dawg.starts_with("ta", false, 0);
    let first_two = dawg.starts_with("ta", false, 2);
    assert_eq!(first_two, all[..2].to_vec());
}

#[test]
fn test_starts_with_unmatched_prefix() {
    let dawg = sample_dawg();
    assert!(dawg.starts_with("x", false, 0).is_empty());
    // With partial the walk stops at the root, so the whole dictionary is
    // completed behind "x"
    assert_eq!(
        dawg.starts_with("x", true, 0),
        vec!["xtap", "xtaps", "xtop", "xtops"]
    );
}

#[test]
fn test_starts_with_partial_fully_matched_prefix_is_plain() {
    let dawg = sample_dawg();
    assert_eq!(dawg.starts_with("to", true, 0), dawg.starts_with("to", false, 0));
}

#[test]
fn test_starts_with_until_complete_without_stop() {
    let dawg = english_dawg();
    let result = dawg.starts_with_until("", false, 0, &Deadline::after(std::time::Duration::from_secs(60)));
    assert!(result.complete);
    assert_eq!(result.items.len(), ENGLISH.len());
}

#[test]
fn test_starts_with_until_stopped() {
    let dawg = english_dawg();
    let result = dawg.starts_with_until("", false, 0, &AtomicBool::new(true));
    assert!(!result.complete);
}

#[test]
fn test_introspection_counts() {
    let dawg = sample_dawg();
    // root -t-> {op,ap} -o/a-> {p} -p-> {s,ε}✓ -s-> {ε}✓
    assert_eq!(dawg.state_count(), 5);
    assert_eq!(dawg.edge_count(), 5);
    assert_eq!(dawg.accepting_count(), 2);
    assert_eq!(dawg.word_count(), 4);
    assert_eq!(dawg.root().degree(), 1);
}
