//! Plain integer predicates, transformers and reducers.
//!
//! Predicates and transformers take their argument by reference so they can
//! be passed straight to [`crate::sequence`] combinators; reducers take
//! their arguments by value.
//!
//! Arithmetic wraps on overflow instead of panicking.

#![allow(clippy::trivially_copy_pass_by_ref)]

/// Returns `true` for even numbers.
#[inline]
pub const fn is_even(value: &i64) -> bool {
    *value % 2 == 0
}

/// Returns `true` for odd numbers.
#[inline]
pub const fn is_odd(value: &i64) -> bool {
    *value % 2 != 0
}

/// Squares a number, wrapping on overflow.
#[inline]
pub const fn square(value: &i64) -> i64 {
    value.wrapping_mul(*value)
}

/// Sum reducer, wrapping on overflow.
#[inline]
pub const fn add(first: i64, second: i64) -> i64 {
    first.wrapping_add(second)
}

/// Product reducer, wrapping on overflow.
#[inline]
pub const fn multiply(first: i64, second: i64) -> i64 {
    first.wrapping_mul(second)
}

/// Applies `predicate` to `value`.
///
/// # Examples
///
/// ```rust
/// use funcseq::factory::{check_match, is_even, is_odd};
///
/// assert!(check_match(2, is_even));
/// assert!(!check_match(2, is_odd));
/// ```
pub fn check_match<P>(value: i64, predicate: P) -> bool
where
    P: FnOnce(&i64) -> bool,
{
    predicate(&value)
}
