#![cfg(feature = "sequence")]
//! Integration tests for the eager sequence combinators.

use funcseq::sequence::{
    ReduceError, SequenceExt, all, any, filter, fold, map, reduce, reduce_or_default,
};
use rstest::rstest;

// =============================================================================
// map
// =============================================================================

#[rstest]
fn map_squares_in_order() {
    assert_eq!(map(&[1, 2, 3], |value| value * value), vec![1, 4, 9]);
}

#[rstest]
fn map_changes_element_type() {
    let lengths = map(&["a", "bb", "ccc"], |word| word.len());
    assert_eq!(lengths, vec![1, 2, 3]);
}

#[rstest]
fn map_results_may_borrow_input() {
    let words = vec![String::from("left"), String::from("right")];
    let slices: Vec<&str> = map(&words, String::as_str);
    assert_eq!(slices, vec!["left", "right"]);
}

#[rstest]
fn map_leaves_input_untouched() {
    let input = vec![1, 2, 3];
    let _ = map(&input, |value| value + 1);
    assert_eq!(input, vec![1, 2, 3]);
}

// =============================================================================
// filter
// =============================================================================

#[rstest]
#[case(&[1, 2, 3, 4], vec![2, 4])]
#[case(&[1, 3, 5], vec![])]
#[case(&[], vec![])]
fn filter_keeps_even_numbers(#[case] input: &[i64], #[case] expected: Vec<i64>) {
    assert_eq!(filter(input, |value| value % 2 == 0), expected);
}

#[rstest]
fn filter_preserves_relative_order() {
    let kept = filter(&[9, 1, 8, 2, 7, 3], |value| *value > 2);
    assert_eq!(kept, vec![9, 8, 7, 3]);
}

// =============================================================================
// reduce and fold
// =============================================================================

#[rstest]
fn reduce_sums_and_multiplies() {
    let numbers: Vec<i64> = (1..=10).collect();
    assert_eq!(reduce(&numbers, |left, right| left + right), Ok(55));
    assert_eq!(reduce(&numbers, |left, right| left * right), Ok(3_628_800));
}

#[rstest]
fn reduce_is_left_associative() {
    let joined = reduce(&["a", "b", "c"].map(String::from), |left, right| {
        format!("({left}{right})")
    });
    assert_eq!(joined.as_deref(), Ok("((ab)c)"));
}

#[rstest]
fn reduce_on_empty_reports_error() {
    let empty: [i64; 0] = [];
    assert_eq!(
        reduce(&empty, |left, right| left + right),
        Err(ReduceError::EmptySequence)
    );
    assert_eq!(reduce_or_default(&empty, |left, right| left + right), 0);
}

#[rstest]
fn fold_starts_from_seed() {
    assert_eq!(fold(&[1_i64, 2, 3], 10, |total, value| total + value), 16);
    assert_eq!(fold(&[] as &[i64], 10_i64, |total, value| total + value), 10);
}

// =============================================================================
// any and all
// =============================================================================

#[rstest]
#[case(&[1, 2, 3, 4, 5], true, false)]
#[case(&[2, 4, 6], true, true)]
#[case(&[1, 3, 5], false, false)]
#[case(&[], false, true)]
fn any_and_all_parity(#[case] input: &[i64], #[case] some_even: bool, #[case] every_even: bool) {
    assert_eq!(any(input, |value| value % 2 == 0), some_even);
    assert_eq!(all(input, |value| value % 2 == 0), every_even);
}

// =============================================================================
// Method syntax
// =============================================================================

#[rstest]
fn extension_methods_chain() {
    let numbers: Vec<i64> = (1..=6).collect();
    let total = numbers
        .as_slice()
        .filter(|value| value % 2 == 0)
        .as_slice()
        .map(|value| value * 10)
        .as_slice()
        .reduce(|left, right| left + right);
    assert_eq!(total, Ok(120));
    assert!(numbers.as_slice().any(|value| *value == 6));
    assert!(numbers.as_slice().all(|value| *value > 0));
}
