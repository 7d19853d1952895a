//! Eager combinators over ordered sequences.
//!
//! This module provides the generic operations that the rest of the crate
//! is built on:
//!
//! - [`map`]: Transform every element, preserving length and order
//! - [`filter`]: Keep the elements satisfying a predicate, preserving order
//! - [`reduce`]: Fold left-to-right starting from the first element
//! - [`fold`]: Fold left-to-right starting from an explicit seed
//! - [`reduce_or_default`]: [`reduce`] with a `Default` fallback for empty input
//! - [`any`]: Existential check, short-circuits on the first match
//! - [`all`]: Universal check, short-circuits on the first failure
//!
//! Sequences are borrowed as slices and never mutated. Operations that
//! return a sequence return a newly allocated `Vec`.
//!
//! # Laws
//!
//! ## Map preserves shape
//!
//! ```text
//! map(s, f).len() == s.len()
//! map(s, f)[i] == f(&s[i])
//! ```
//!
//! ## Filter is order-preserving and idempotent
//!
//! ```text
//! filter(s, p).len() <= s.len()
//! filter(&filter(s, p), p) == filter(s, p)
//! ```
//!
//! ## De Morgan
//!
//! ```text
//! all(s, p) == !any(s, |x| !p(x))
//! ```
//!
//! ## Reduce agrees with fold over the tail
//!
//! ```text
//! reduce(s, r) == Ok(fold(&s[1..], s[0], |a, e| r(a, e)))   // s non-empty
//! ```
//!
//! # Empty input
//!
//! [`reduce`] reports [`ReduceError::EmptySequence`] instead of inventing a
//! value. Use [`fold`] with an identity seed when empty input is expected,
//! or [`reduce_or_default`] when the `Default` value is an acceptable answer.
//!
//! # Examples
//!
//! ```rust
//! use funcseq::sequence::{all, any, filter, map, reduce};
//!
//! let numbers = vec![1, 2, 3, 4, 5];
//!
//! assert_eq!(map(&numbers, |x| x * x), vec![1, 4, 9, 16, 25]);
//! assert_eq!(filter(&numbers, |x| x % 2 == 0), vec![2, 4]);
//! assert_eq!(reduce(&numbers, |a, b| a + b), Ok(15));
//! assert!(any(&numbers, |x| x % 2 == 0));
//! assert!(!all(&numbers, |x| x % 2 == 0));
//! ```

mod combinators;
mod ext;
mod reduce;

pub use combinators::{all, any, filter, map};
pub use ext::SequenceExt;
pub use reduce::{ReduceError, fold, reduce, reduce_or_default};
