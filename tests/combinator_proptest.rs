//! Property-based tests for the combinator contracts.

use proptest::prelude::*;

use tsumugi::prelude::*;
use tsumugi::run;

proptest! {
    #[test]
    fn byte_parser_contract(
        expected: u8,
        input in prop::collection::vec(any::<u8>(), 0..16),
    ) {
        let parser = byte(expected);

        match run(&parser, Input::new(&input)) {
            Ok((found, remaining)) => {
                prop_assert_eq!(found, expected);
                prop_assert_eq!(input.first().copied(), Some(expected));
                prop_assert_eq!(remaining.len(), input.len() - 1);
            }
            Err(ParseError::InputExhausted) => prop_assert!(input.is_empty()),
            Err(ParseError::Failure) => {
                prop_assert_ne!(input.first().copied(), Some(expected));
            }
            Err(error) => prop_assert!(false, "unexpected error kind: {}", error),
        }
    }

    #[test]
    fn literal_parser_contract(
        pattern in prop::collection::vec(any::<u8>(), 0..8),
        input in prop::collection::vec(any::<u8>(), 0..16),
    ) {
        let parser = literal(pattern.as_slice());

        match run(&parser, Input::new(&input)) {
            Ok((matched, remaining)) => {
                prop_assert_eq!(matched.as_bytes(), pattern.as_slice());
                prop_assert!(input.starts_with(&pattern));
                prop_assert_eq!(remaining.len(), input.len() - pattern.len());
            }
            Err(ParseError::InputExhausted) => {
                prop_assert!(input.len() < pattern.len());
            }
            Err(ParseError::Failure) => {
                prop_assert!(input.len() >= pattern.len());
                prop_assert!(!input.starts_with(&pattern));
            }
            Err(error) => prop_assert!(false, "unexpected error kind: {}", error),
        }
    }

    #[test]
    fn advance_to_or_past_the_end_yields_the_canonical_empty_view(
        input in prop::collection::vec(any::<u8>(), 0..16),
        extra in 0usize..8,
    ) {
        let view = Input::new(&input);
        let advanced = view.advance(input.len() + extra);

        prop_assert!(advanced.is_empty());
        prop_assert_eq!(advanced, Input::empty());
    }

    #[test]
    fn sequencing_is_associative(input in prop::collection::vec(any::<u8>(), 0..8)) {
        let left = and_then(and_then(byte(b'a'), byte(b'b')), byte(b'c'));
        let right = and_then(byte(b'a'), and_then(byte(b'b'), byte(b'c')));

        let view = Input::new(&input);
        match (run(&left, view), run(&right, view)) {
            (Ok((_, left_rest)), Ok((_, right_rest))) => {
                prop_assert_eq!(left_rest, right_rest);
            }
            (Err(left_err), Err(right_err)) => prop_assert_eq!(left_err, right_err),
            (left_result, right_result) => prop_assert!(
                false,
                "associativity broken: left ok={}, right ok={}",
                left_result.is_ok(),
                right_result.is_ok()
            ),
        }
    }
}
