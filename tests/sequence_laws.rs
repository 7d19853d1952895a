#![cfg(feature = "sequence")]
//! Property-based tests for the sequence combinators.
//!
//! ## Laws
//!
//! 1. **Map shape**: `map(s, f).len() == s.len()` and `map(s, f)[i] == f(&s[i])`
//! 2. **Filter subset**: every kept element satisfies the predicate, and the
//!    kept elements form a subsequence of the input
//! 3. **Filter idempotence**: `filter(filter(s, p), p) == filter(s, p)`
//! 4. **De Morgan**: `any(s, p) == !all(s, !p)`
//! 5. **Reduce as fold**: for non-empty `s`, `reduce(s, f) == fold(tail, head, f)`
//! 6. **Empty reduce**: `reduce(&[], f)` is an error

use funcseq::sequence as combinators;
use funcseq::sequence::{ReduceError, filter, fold, map, reduce};
use proptest::prelude::*;
use rstest::rstest;

fn is_even(value: &i64) -> bool {
    value % 2 == 0
}

fn is_subsequence(candidate: &[i64], sequence: &[i64]) -> bool {
    let mut remaining = sequence.iter();
    candidate
        .iter()
        .all(|wanted| remaining.any(|element| element == wanted))
}

proptest! {
    #[test]
    fn prop_map_preserves_length_and_index(sequence in prop::collection::vec(any::<i32>(), 0..64)) {
        let mapped = map(&sequence, |value| i64::from(*value) * 3);
        prop_assert_eq!(mapped.len(), sequence.len());
        for (index, value) in sequence.iter().enumerate() {
            prop_assert_eq!(mapped[index], i64::from(*value) * 3);
        }
    }

    #[test]
    fn prop_filter_keeps_matching_subsequence(sequence in prop::collection::vec(any::<i64>(), 0..64)) {
        let kept = filter(&sequence, is_even);
        prop_assert!(kept.iter().all(is_even));
        prop_assert!(is_subsequence(&kept, &sequence));
        prop_assert_eq!(kept.len(), sequence.iter().filter(|value| is_even(value)).count());
    }

    #[test]
    fn prop_filter_is_idempotent(
        sequence in prop::collection::vec(any::<i64>(), 0..64),
        threshold in any::<i64>(),
    ) {
        let predicate = |value: &i64| *value < threshold;
        let once = filter(&sequence, predicate);
        let twice = filter(&once, predicate);
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn prop_any_is_not_all_of_negation(
        sequence in prop::collection::vec(any::<i64>(), 0..64),
        threshold in any::<i64>(),
    ) {
        let predicate = |value: &i64| *value > threshold;
        prop_assert_eq!(
            combinators::any(&sequence, predicate),
            !combinators::all(&sequence, |value| !predicate(value))
        );
    }

    #[test]
    fn prop_reduce_equals_fold_over_tail(sequence in prop::collection::vec(any::<i64>(), 1..64)) {
        let reducer = |left: i64, right: i64| left.wrapping_sub(right);
        let expected = fold(&sequence[1..], sequence[0], |total, value| reducer(total, *value));
        prop_assert_eq!(reduce(&sequence, reducer), Ok(expected));
    }

    #[test]
    fn prop_reduce_of_singleton_is_element(value in any::<i64>()) {
        prop_assert_eq!(reduce(&[value], |_, _| unreachable!()), Ok(value));
    }
}

#[rstest]
fn empty_reduce_is_an_error() {
    let empty: Vec<String> = Vec::new();
    assert_eq!(
        reduce(&empty, |left, right| left + &right),
        Err(ReduceError::EmptySequence)
    );
}

#[rstest]
fn empty_sequence_identities() {
    let empty: [i64; 0] = [];
    assert!(map(&empty, |value| value + 1).is_empty());
    assert!(filter(&empty, is_even).is_empty());
    assert!(!combinators::any(&empty, is_even));
    assert!(combinators::all(&empty, is_even));
}
