/// Creates a predicate that holds for values within `[min, max]`, inclusive.
///
/// No ordering is enforced between the bounds: when `min > max` the range is
/// empty and the predicate is false for every input.
///
/// # Examples
///
/// ```rust
/// use funcseq::factory::make_range_predicate;
/// use funcseq::sequence::filter;
///
/// let client_error = make_range_predicate(400, 499);
/// assert!(client_error(&418));
/// assert!(!client_error(&500));
///
/// let statuses = [200, 400, 500, 503, 429, 418];
/// assert_eq!(filter(&statuses, client_error), vec![400, 429, 418]);
///
/// let inverted = make_range_predicate(10, 1);
/// assert!(!inverted(&5));
/// ```
pub fn make_range_predicate(min: i64, max: i64) -> impl Fn(&i64) -> bool + Clone + Send + Sync {
    move |value: &i64| (min..=max).contains(value)
}
