//! Construction tests: suffix sharing, determinization and rebuilds.

use lexdawg::{Dawg, DawgBuilder};

use crate::common::{assert_dawg_well_formed, english_dawg, expected_words, words_by_walking, ENGLISH};

#[test]
fn test_every_added_word_is_contained() {
    let dawg = english_dawg();
    for word in ENGLISH {
        assert!(dawg.contains(word), "missing {}", word);
    }
    assert_dawg_well_formed(&dawg);
}

#[test]
fn test_enumeration_equals_input_set() {
    let dawg = english_dawg();
    assert_eq!(dawg.words(), expected_words(ENGLISH));
    assert_eq!(dawg.word_count(), ENGLISH.len() as u64);
}

#[test]
fn test_duplicates_collapse() {
    let mut builder = DawgBuilder::new();
    builder.add_word("echo");
    builder.add_word("echo");
    builder.add_word("echo");
    assert_eq!(builder.words_added(), 3);
    let dawg = builder.build();
    assert_eq!(dawg.words(), vec!["echo"]);
}

#[test]
fn test_insertion_order_does_not_change_language() {
    let forward = Dawg::from_words(ENGLISH);
    let backward = Dawg::from_words(ENGLISH.iter().rev());
    assert_eq!(forward.words(), backward.words());
}

#[test]
fn test_shared_suffixes_keep_automaton_small() {
    // 20 words with ~110 characters in total
    let dawg = english_dawg();
    let chars: usize = ENGLISH.iter().map(|w| w.chars().count()).sum();
    assert!(
        dawg.state_count() < chars / 2,
        "{} states for {} input characters",
        dawg.state_count(),
        chars
    );
}

#[test]
fn test_walked_paths_match_enumeration() {
    let dawg = english_dawg();
    let walked: Vec<String> = words_by_walking(&dawg).into_iter().collect();
    assert_eq!(walked, dawg.words());
}

#[test]
fn test_multibyte_words() {
    let words = ["日本", "日本語", "🦀", "🦀🦀"];
    let dawg = Dawg::from_words(words);
    for word in words {
        assert!(dawg.contains(word));
    }
    assert!(!dawg.contains("日"));
    assert!(dawg.contains_prefix("日"));
    assert_dawg_well_formed(&dawg);
}

#[test]
fn test_empty_builder() {
    let dawg = DawgBuilder::new().build();
    assert_eq!(dawg, Dawg::default());
    assert!(dawg.words().is_empty());
    assert!(!dawg.contains(""));
    assert!(dawg.contains_prefix(""));
}
