//! Keyword extraction: leftmost-longest segmentation.

use lexdawg::{extract_keywords, Dawg, Fragment};

use crate::common::{english_dawg, parts, rejoin};

fn m(text: &str) -> (bool, String) {
    (true, text.to_string())
}

fn u(text: &str) -> (bool, String) {
    (false, text.to_string())
}

#[test]
fn test_scenario() {
    let dawg = Dawg::from_words(["top", "tap"]);
    assert_eq!(
        parts(&dawg, "xtopytapz"),
        vec![u("x"), m("top"), u("y"), m("tap"), u("z")]
    );
}

#[test]
fn test_sentence() {
    let dawg = english_dawg();
    let doc = "the baker was baking cakes while others were waking";
    let fragments = extract_keywords(&dawg, doc);
    assert_eq!(rejoin(&fragments), doc);

    let matched: Vec<&str> = fragments
        .iter()
        .filter(|f| f.matched)
        .map(|f| f.text.as_str())
        .collect();
    assert_eq!(matched, vec!["baker", "baking", "cakes", "waking"]);
}

#[test]
fn test_matches_inside_words() {
    // No word-boundary logic: "remake" contains "make"
    let dawg = english_dawg();
    assert_eq!(parts(&dawg, "remake"), vec![u("re"), m("make")]);
}

#[test]
fn test_overlapping_candidates_resolve_leftmost() {
    // "taken" starts at 0; "ken" would start inside it and is never considered
    let dawg = Dawg::from_words(["taken", "ken", "kens"]);
    assert_eq!(parts(&dawg, "takens"), vec![m("taken"), u("s")]);
}

#[test]
fn test_whole_document_is_a_word() {
    let dawg = english_dawg();
    assert_eq!(parts(&dawg, "makers"), vec![m("makers")]);
}

#[test]
fn test_no_dictionary_word() {
    let dawg = english_dawg();
    assert_eq!(parts(&dawg, "zzz qqq"), vec![u("zzz qqq")]);
}

#[test]
fn test_empty_dictionary_returns_one_fragment() {
    let dawg = Dawg::default();
    assert_eq!(
        extract_keywords(&dawg, "anything at all"),
        vec![Fragment::unmatched(0, "anything at all")]
    );
}

#[test]
fn test_offsets_cover_document() {
    let dawg = english_dawg();
    let doc = "ä baker, ü cake";
    let fragments = extract_keywords(&dawg, doc);
    let mut next = 0;
    for fragment in &fragments {
        assert_eq!(fragment.start, next);
        next += fragment.text.chars().count();
    }
    assert_eq!(next, doc.chars().count());
}

#[test]
fn test_unmatched_fragments_never_adjacent() {
    let dawg = english_dawg();
    let fragments = extract_keywords(&dawg, "bak cak mak bake ba");
    for pair in fragments.windows(2) {
        assert!(pair[0].matched || pair[1].matched, "adjacent unmatched: {:?}", pair);
    }
}
