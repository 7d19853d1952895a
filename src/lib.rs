//! # funcseq
//!
//! Eager sequence combinators and closure factories for building
//! configurable predicates and transformers.
//!
//! ## Overview
//!
//! - **Sequence combinators**: `map`, `filter`, `reduce`, `any`, `all` over
//!   slices. Every combinator that produces a sequence allocates a new one;
//!   the input is never mutated.
//! - **Closure factories**: functions that return predicates or transformers
//!   closing over configuration (a numeric range, a greeting prefix, an
//!   ordered set of environment filters).
//! - **Control**: `Trampoline` for bounded sequential work without call-stack
//!   growth.
//! - **Records**: builder-style and in-place update APIs over one record type.
//! - **Concurrent**: deterministic aggregation of per-task results, and a
//!   mutex-guarded accumulator.
//!
//! ## Feature Flags
//!
//! - `sequence`: Sequence combinators
//! - `factory`: Closure factories (enables `sequence`)
//! - `control`: `Trampoline` and stack-safe recursion helpers
//! - `record`: `Person` record with both update styles
//! - `concurrent`: Concurrent collection helpers
//! - `demo`: The `funcseq` command line demo
//! - `serde`: Serialization support for records
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use funcseq::prelude::*;
//!
//! let statuses = [200, 400, 500, 503, 429, 418];
//! let client_errors = filter(&statuses, make_range_predicate(400, 499));
//! assert_eq!(client_errors, vec![400, 429, 418]);
//!
//! let total = reduce(&[1, 2, 3, 4, 5, 6, 7, 8, 9, 10], add).unwrap();
//! assert_eq!(total, 55);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used functions and types.
///
/// # Usage
///
/// ```rust
/// use funcseq::prelude::*;
/// ```
pub mod prelude {

    #[cfg(feature = "sequence")]
    pub use crate::sequence::*;

    #[cfg(feature = "factory")]
    pub use crate::factory::*;

    #[cfg(feature = "control")]
    pub use crate::control::*;

    #[cfg(feature = "record")]
    pub use crate::record::*;

    #[cfg(feature = "concurrent")]
    pub use crate::concurrent::*;
}

#[cfg(feature = "sequence")]
pub mod sequence;

#[cfg(feature = "factory")]
pub mod factory;

#[cfg(feature = "control")]
pub mod control;

#[cfg(feature = "record")]
pub mod record;

#[cfg(feature = "concurrent")]
pub mod concurrent;

#[cfg(feature = "demo")]
pub mod demo;
