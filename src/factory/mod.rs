//! Closure factories for configurable predicates and transformers.
//!
//! Each factory captures its configuration by value at creation time and
//! returns a closure that the [`crate::sequence`] combinators can consume
//! directly. Later changes to the arguments a factory was called with never
//! affect a closure that was already created.
//!
//! # Overview
//!
//! - [`make_range_predicate`]: inclusive numeric range check
//! - [`make_greeter`]: partial application of [`greet`] over its prefix
//! - [`make_default_greeting`]: greeting thunk with a default name
//! - [`filter_environments`]: exclude environments matched by any filter of
//!   a [`FilterSet`], lowercasing the rest
//!
//! Plain predicates and transformers used alongside the factories live here
//! too: [`is_even`], [`is_odd`], [`square`], [`add`], [`multiply`],
//! [`prod_filter`], [`non_prod_filter`].
//!
//! # Examples
//!
//! ```rust
//! use funcseq::factory::{FilterSet, filter_environments, make_greeter, prod_filter};
//!
//! let gday = make_greeter("G'day");
//! assert_eq!(gday("Gophers"), "G'day, Gophers");
//!
//! let environments = ["prod1", "PROD3", "staging", "Dev"];
//! let filters = FilterSet::new().with(prod_filter);
//! assert_eq!(filter_environments(&environments, &filters), vec!["staging", "dev"]);
//! ```

mod environment;
mod greeting;
mod numeric;
mod range;

pub use environment::{EnvironmentFilter, FilterSet, filter_environments, non_prod_filter, prod_filter};
pub use greeting::{DEFAULT_GREETING_NAME, greet, make_default_greeting, make_greeter};
pub use numeric::{add, check_match, is_even, is_odd, multiply, square};
pub use range::make_range_predicate;
