//! A record with two explicit update styles.
//!
//! [`Person`] can be updated either by returning a modified copy
//! ([`Person::with_name`], [`Person::with_age`]) or by mutating through a
//! unique borrow ([`Person::set_name`], [`Person::set_age`]). The two styles
//! never share a signature: builders consume and return a value, mutators
//! take `&mut self`.
//!
//! # Examples
//!
//! ```rust
//! use funcseq::record::Person;
//!
//! let built = Person::build("Gopher", 10);
//! let in_place = Person::build_in_place("Gopher", 10);
//! assert_eq!(built, *in_place);
//!
//! let older = built.clone().with_age(11);
//! assert_eq!(built.age, 10);
//! assert_eq!(older.age, 11);
//! ```

mod person;

pub use person::Person;
