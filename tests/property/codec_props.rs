//! Codec properties: round trips, truncation and garbage input.

use lexdawg::{Dawg, DecodeError};
use proptest::prelude::*;

use crate::common::{assert_same_language, expected_words};
use crate::strategies::{dictionary, unicode_dictionary};

proptest! {
    #![proptest_config(ProptestConfig::with_cases(300))]

    /// Property: decode(encode(d)) is the same automaton.
    #[test]
    fn prop_roundtrip(words in unicode_dictionary()) {
        let dawg = Dawg::from_words(&words);
        let decoded = Dawg::from_bytes(&dawg.to_bytes()).unwrap();
        assert_same_language(&dawg, &decoded);
        prop_assert_eq!(decoded.words(), expected_words(&words));
        prop_assert_eq!(&decoded, &dawg);
    }

    /// Property: every strict prefix of a valid stream is a truncation error.
    #[test]
    fn prop_truncation_detected(words in dictionary(), cut in any::<prop::sample::Index>()) {
        let bytes = Dawg::from_words(&words).to_bytes();
        let cut = cut.index(bytes.len());
        let err = Dawg::from_bytes(&bytes[..cut]).unwrap_err();
        prop_assert!(err.is_truncated(), "cut {} of {}: {:?}", cut, bytes.len(), err);
    }

    /// Property: arbitrary bytes never panic, and anything accepted is a
    /// well-formed automaton that re-encodes losslessly.
    #[test]
    fn prop_garbage_never_panics(bytes in prop::collection::vec(any::<u8>(), 0..96)) {
        if let Ok(dawg) = Dawg::from_bytes(&bytes) {
            // decoded tables may hold unreachable states, but never a cycle
            prop_assert!(lexdawg::verify::find_cycle(dawg.states()).is_none());
            let again = Dawg::from_bytes(&dawg.to_bytes()).unwrap();
            prop_assert_eq!(again, dawg);
        }
    }

    /// Property: appending bytes is rejected by from_bytes but not read_from.
    #[test]
    fn prop_trailing_bytes(words in dictionary(), tail in prop::collection::vec(any::<u8>(), 1..8)) {
        let dawg = Dawg::from_words(&words);
        let mut bytes = dawg.to_bytes();
        bytes.extend_from_slice(&tail);

        let is_trailing = matches!(
            Dawg::from_bytes(&bytes),
            Err(DecodeError::TrailingBytes { extra }) if extra == tail.len()
        );
        prop_assert!(is_trailing);

        let mut src = bytes.as_slice();
        prop_assert_eq!(Dawg::read_from(&mut src).unwrap(), dawg);
        prop_assert_eq!(src, &tail[..]);
    }
}
