//! Environment filtering over an ordered set of predicates.

use std::fmt;

use static_assertions::assert_impl_all;

use crate::sequence::{any, filter, map};

/// A boxed predicate over environment names.
pub type EnvironmentFilter = Box<dyn Fn(&str) -> bool + Send + Sync>;

/// An ordered list of environment filters.
///
/// Insertion order is evaluation order. A `FilterSet` is passed to
/// [`filter_environments`] at call time; nothing is registered globally.
///
/// # Examples
///
/// ```rust
/// use funcseq::factory::{FilterSet, prod_filter};
///
/// let filters = FilterSet::new()
///     .with(prod_filter)
///     .with(|environment: &str| environment == "local");
///
/// assert_eq!(filters.len(), 2);
/// assert!(filters.excludes("PROD3"));
/// assert!(filters.excludes("local"));
/// assert!(!filters.excludes("staging"));
///
/// let empty = FilterSet::new();
/// assert!(!empty.excludes("anything"));
/// ```
#[derive(Default)]
pub struct FilterSet {
    filters: Vec<EnvironmentFilter>,
}

assert_impl_all!(FilterSet: Send, Sync);

impl FilterSet {
    /// Creates an empty filter set, which excludes nothing.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a filter and returns the set.
    #[must_use]
    pub fn with<F>(mut self, filter: F) -> Self
    where
        F: Fn(&str) -> bool + Send + Sync + 'static,
    {
        self.push(filter);
        self
    }

    /// Appends a filter.
    pub fn push<F>(&mut self, filter: F)
    where
        F: Fn(&str) -> bool + Send + Sync + 'static,
    {
        self.filters.push(Box::new(filter));
    }

    /// Number of filters in the set.
    pub fn len(&self) -> usize {
        self.filters.len()
    }

    /// Returns `true` if the set holds no filters.
    pub fn is_empty(&self) -> bool {
        self.filters.is_empty()
    }

    /// Returns `true` if any filter matches `environment`.
    ///
    /// Filters are evaluated in insertion order and evaluation stops at the
    /// first match.
    pub fn excludes(&self, environment: &str) -> bool {
        any(&self.filters, |predicate| predicate(environment))
    }
}

impl From<Vec<EnvironmentFilter>> for FilterSet {
    fn from(filters: Vec<EnvironmentFilter>) -> Self {
        Self { filters }
    }
}

impl<F> FromIterator<F> for FilterSet
where
    F: Fn(&str) -> bool + Send + Sync + 'static,
{
    fn from_iter<I: IntoIterator<Item = F>>(iterator: I) -> Self {
        let mut set = Self::new();
        for filter in iterator {
            set.push(filter);
        }
        set
    }
}

impl fmt::Debug for FilterSet {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("FilterSet")
            .field("filters", &self.filters.len())
            .finish()
    }
}

/// Matches environments whose name starts with `prod`, ignoring case.
pub fn prod_filter(environment: &str) -> bool {
    environment.to_lowercase().starts_with("prod")
}

/// Matches every environment that [`prod_filter`] does not.
pub fn non_prod_filter(environment: &str) -> bool {
    !prod_filter(environment)
}

/// Drops every environment matched by a filter and lowercases the rest.
///
/// An environment is kept when no filter in `filters` matches it, which
/// includes the case of an empty set. Output order follows input order.
///
/// # Examples
///
/// ```rust
/// use funcseq::factory::{FilterSet, filter_environments, non_prod_filter, prod_filter};
///
/// let environments = ["prod1", "prod2", "PROD3", "staging", "dev", "local"];
///
/// let non_prod = filter_environments(&environments, &FilterSet::new().with(prod_filter));
/// assert_eq!(non_prod, vec!["staging", "dev", "local"]);
///
/// let prod = filter_environments(&environments, &FilterSet::new().with(non_prod_filter));
/// assert_eq!(prod, vec!["prod1", "prod2", "prod3"]);
///
/// let all = filter_environments(&environments, &FilterSet::new());
/// assert_eq!(all.len(), 6);
/// ```
pub fn filter_environments<S>(environments: &[S], filters: &FilterSet) -> Vec<String>
where
    S: AsRef<str>,
{
    let names: Vec<&str> = map(environments, AsRef::as_ref);
    let kept = filter(&names, |environment| !filters.excludes(environment));

    tracing::debug!(
        total = environments.len(),
        kept = kept.len(),
        filters = filters.len(),
        "filtered environments"
    );

    map(&kept, |environment| environment.to_lowercase())
}
