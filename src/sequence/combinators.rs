//! `map`, `filter`, `any` and `all`.

/// Applies `function` to every element, returning the results in order.
///
/// The result has the same length as `sequence`, and element `i` of the
/// result is `function(&sequence[i])`. `function` is invoked exactly once per
/// element, in index order. The results may borrow from `sequence`.
///
/// # Examples
///
/// ```rust
/// use funcseq::sequence::map;
///
/// assert_eq!(map(&[1, 2, 3], |x| x * x), vec![1, 4, 9]);
/// assert_eq!(map(&[1, 2, 3], |x| x % 2 == 0), vec![false, true, false]);
/// ```
pub fn map<'a, A, B, F>(sequence: &'a [A], function: F) -> Vec<B>
where
    F: FnMut(&'a A) -> B,
{
    sequence.iter().map(function).collect()
}

/// Returns the elements satisfying `predicate`, in their original order.
///
/// The input is left untouched; kept elements are cloned into a new `Vec`.
///
/// # Examples
///
/// ```rust
/// use funcseq::sequence::filter;
///
/// let numbers = [1, 2, 3, 4, 5, 6, 7, 8, 9, 10];
/// assert_eq!(filter(&numbers, |x| x % 2 == 0), vec![2, 4, 6, 8, 10]);
/// ```
pub fn filter<T, P>(sequence: &[T], mut predicate: P) -> Vec<T>
where
    T: Clone,
    P: FnMut(&T) -> bool,
{
    sequence
        .iter()
        .filter(|&element| predicate(element))
        .cloned()
        .collect()
}

/// Returns `true` if at least one element satisfies `predicate`.
///
/// Traversal stops at the first match. An empty sequence yields `false`.
///
/// # Examples
///
/// ```rust
/// use funcseq::sequence::any;
///
/// assert!(any(&[1, 2, 3, 4, 5], |x| x % 2 == 0));
/// assert!(!any(&[] as &[i32], |_| true));
/// ```
pub fn any<T, P>(sequence: &[T], predicate: P) -> bool
where
    P: FnMut(&T) -> bool,
{
    sequence.iter().any(predicate)
}

/// Returns `true` if every element satisfies `predicate`.
///
/// Traversal stops at the first failure. An empty sequence yields `true`
/// (vacuous truth).
///
/// # Examples
///
/// ```rust
/// use funcseq::sequence::all;
///
/// assert!(!all(&[1, 2, 3, 4, 5], |x| x % 2 == 0));
/// assert!(all(&[] as &[i32], |_| false));
/// ```
pub fn all<T, P>(sequence: &[T], predicate: P) -> bool
where
    P: FnMut(&T) -> bool,
{
    sequence.iter().all(predicate)
}
