//! Method syntax for the sequence combinators.

use super::{ReduceError, combinators};

/// Extension trait exposing the combinators as methods on slices.
///
/// Every method delegates to the free function of the same name in
/// [`crate::sequence`], so both forms behave identically. `Vec<T>` gets the
/// methods through deref to `[T]`.
///
/// Fixed-size arrays have an inherent `map` that takes precedence; call
/// through a slice (`array.as_slice().map(..)`) to reach this one.
///
/// # Examples
///
/// ```rust
/// use funcseq::sequence::SequenceExt;
///
/// let numbers = vec![1, 2, 3, 4, 5];
///
/// let evens = numbers.filter(|x| x % 2 == 0);
/// assert_eq!(evens, vec![2, 4]);
/// assert_eq!(evens.map(|x| x * 10), vec![20, 40]);
/// assert_eq!(numbers.reduce(|a, b| a + b), Ok(15));
/// assert!(numbers.any(|x| *x == 3));
/// assert!(numbers.all(|x| *x > 0));
/// ```
pub trait SequenceExt<T> {
    /// See [`crate::sequence::map`].
    fn map<'a, B, F>(&'a self, function: F) -> Vec<B>
    where
        T: 'a,
        F: FnMut(&'a T) -> B;

    /// See [`crate::sequence::filter`].
    fn filter<P>(&self, predicate: P) -> Vec<T>
    where
        T: Clone,
        P: FnMut(&T) -> bool;

    /// See [`crate::sequence::reduce`].
    ///
    /// # Errors
    ///
    /// Returns [`ReduceError::EmptySequence`] when the slice is empty.
    fn reduce<F>(&self, reducer: F) -> Result<T, ReduceError>
    where
        T: Clone,
        F: FnMut(T, T) -> T;

    /// See [`crate::sequence::any`].
    fn any<P>(&self, predicate: P) -> bool
    where
        P: FnMut(&T) -> bool;

    /// See [`crate::sequence::all`].
    fn all<P>(&self, predicate: P) -> bool
    where
        P: FnMut(&T) -> bool;
}

impl<T> SequenceExt<T> for [T] {
    #[inline]
    fn map<'a, B, F>(&'a self, function: F) -> Vec<B>
    where
        T: 'a,
        F: FnMut(&'a T) -> B,
    {
        combinators::map(self, function)
    }

    #[inline]
    fn filter<P>(&self, predicate: P) -> Vec<T>
    where
        T: Clone,
        P: FnMut(&T) -> bool,
    {
        combinators::filter(self, predicate)
    }

    #[inline]
    fn reduce<F>(&self, reducer: F) -> Result<T, ReduceError>
    where
        T: Clone,
        F: FnMut(T, T) -> T,
    {
        super::reduce(self, reducer)
    }

    #[inline]
    fn any<P>(&self, predicate: P) -> bool
    where
        P: FnMut(&T) -> bool,
    {
        combinators::any(self, predicate)
    }

    #[inline]
    fn all<P>(&self, predicate: P) -> bool
    where
        P: FnMut(&T) -> bool,
    {
        combinators::all(self, predicate)
    }
}
