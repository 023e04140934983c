//! One compiled automaton queried from many threads.

use std::sync::Arc;
use std::thread;

use lexdawg::{extract_keywords, fuzzy_search, CostConfig, Dawg};

use crate::common::{english_dawg, ENGLISH};

#[test]
fn test_dawg_is_send_and_sync() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Dawg>();
}

#[test]
fn test_parallel_readers_agree() {
    let dawg = Arc::new(english_dawg());
    let expected_fuzzy = fuzzy_search(&dawg, "bakre", &CostConfig::unit(1.0)).unwrap();

    let handles: Vec<_> = (0..8)
        .map(|i| {
            let dawg = Arc::clone(&dawg);
            let expected_fuzzy = expected_fuzzy.clone();
            thread::spawn(move || {
                for word in ENGLISH.iter().cycle().skip(i).take(200) {
                    assert!(dawg.contains(word));
                    assert!(dawg.contains_prefix(&word[..1]));
                }
                let hits = fuzzy_search(&dawg, "bakre", &CostConfig::unit(1.0)).unwrap();
                assert_eq!(hits, expected_fuzzy);
                let fragments = extract_keywords(&dawg, "a baker and a taker");
                assert_eq!(fragments.iter().filter(|f| f.matched).count(), 2);
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }
}

#[test]
fn test_scoped_threads_borrow() {
    let owned = english_dawg();
    let dawg = &owned;
    let counts: Vec<usize> = thread::scope(|s| {
        let handles: Vec<_> = ["b", "c", "m", "t", "w"]
            .into_iter()
            .map(|p| s.spawn(move || dawg.starts_with(p, false, 0).len()))
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });
    assert_eq!(counts.iter().sum::<usize>(), ENGLISH.len());
}

#[cfg(feature = "parallel")]
#[test]
fn test_rayon_batches() {
    use lexdawg::parallel::{contains_many, extract_keywords_many, fuzzy_search_many};

    let dawg = english_dawg();
    let probes: Vec<String> = ENGLISH.iter().map(|w| format!("{}x", w)).collect();
    assert!(contains_many(&dawg, ENGLISH).iter().all(|&hit| hit));
    assert!(contains_many(&dawg, &probes).iter().all(|&hit| !hit));

    let batch = fuzzy_search_many(&dawg, &probes, &CostConfig::unit(1.0)).unwrap();
    for (probe, hits) in probes.iter().zip(&batch) {
        // dropping the trailing x always recovers the source word
        assert!(hits.iter().any(|h| h.word == probe[..probe.len() - 1] && h.cost == 1.0));
    }

    assert!(fuzzy_search_many(&dawg, &probes, &CostConfig::unit(-1.0)).is_err());

    let docs = vec!["bake a cake"; 16];
    for fragments in extract_keywords_many(&dawg, &docs) {
        assert_eq!(fragments.iter().filter(|f| f.matched).count(), 2);
    }
}
