//! Left folds: `reduce`, `fold` and `reduce_or_default`.

/// Errors reported by [`reduce`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ReduceError {
    /// The sequence had no first element to start the fold from.
    #[error("cannot reduce an empty sequence without a seed")]
    EmptySequence,
}

/// Folds the sequence left-to-right, starting from its first element.
///
/// For `[e0, e1, e2]` the result is `reducer(reducer(e0, e1), e2)`. The
/// reducer need not be associative; a non-associative reducer simply yields
/// the left-to-right result.
///
/// # Errors
///
/// Returns [`ReduceError::EmptySequence`] when `sequence` is empty. Use
/// [`fold`] with an explicit seed if empty input is legitimate.
///
/// # Examples
///
/// ```rust
/// use funcseq::sequence::{ReduceError, reduce};
///
/// let numbers = [1, 2, 3, 4, 5, 6, 7, 8, 9, 10];
/// assert_eq!(reduce(&numbers, |a, b| a + b), Ok(55));
/// assert_eq!(reduce(&numbers, |a, b| a * b), Ok(3_628_800));
///
/// let empty: [i32; 0] = [];
/// assert_eq!(reduce(&empty, |a, b| a + b), Err(ReduceError::EmptySequence));
/// ```
pub fn reduce<A, F>(sequence: &[A], mut reducer: F) -> Result<A, ReduceError>
where
    A: Clone,
    F: FnMut(A, A) -> A,
{
    let Some((first, rest)) = sequence.split_first() else {
        tracing::debug!("reduce called on an empty sequence");
        return Err(ReduceError::EmptySequence);
    };

    Ok(rest.iter().fold(first.clone(), |accumulator, element| {
        reducer(accumulator, element.clone())
    }))
}

/// Folds the sequence left-to-right, starting from `seed`.
///
/// Total: an empty sequence yields `seed` unchanged.
///
/// # Examples
///
/// ```rust
/// use funcseq::sequence::fold;
///
/// assert_eq!(fold(&[1, 2, 3], 0, |accumulator, element| accumulator + element), 6);
/// assert_eq!(fold(&[] as &[i32], 1, |accumulator, element| accumulator * element), 1);
///
/// let joined = fold(&["a", "b", "c"], String::new(), |mut accumulator, element| {
///     accumulator.push_str(element);
///     accumulator
/// });
/// assert_eq!(joined, "abc");
/// ```
pub fn fold<A, B, F>(sequence: &[A], seed: B, reducer: F) -> B
where
    F: FnMut(B, &A) -> B,
{
    sequence.iter().fold(seed, reducer)
}

/// Like [`reduce`], but yields `A::default()` for an empty sequence.
///
/// The default value cannot be told apart from a genuine result (the sum of
/// `[]` and of `[0]` are both `0`). Prefer [`reduce`] or [`fold`] unless that
/// ambiguity is acceptable.
///
/// # Examples
///
/// ```rust
/// use funcseq::sequence::reduce_or_default;
///
/// assert_eq!(reduce_or_default(&[2, 3, 4], |a, b| a * b), 24);
/// assert_eq!(reduce_or_default(&[] as &[i32], |a, b| a * b), 0);
/// ```
pub fn reduce_or_default<A, F>(sequence: &[A], reducer: F) -> A
where
    A: Clone + Default,
    F: FnMut(A, A) -> A,
{
    reduce(sequence, reducer).unwrap_or_default()
}
