//! Bounded sequential work without call-stack growth.
//!
//! - [`Trampoline`]: Stack-safe recursion interpreted in a loop
//! - [`count_to`]: A deep recursion of caller-chosen depth
//! - [`factorial`]: Overflow-checked factorial
//!
//! # Examples
//!
//! ```rust
//! use funcseq::control::{Trampoline, factorial};
//!
//! fn sum_to(n: u64, accumulator: u64) -> Trampoline<u64> {
//!     if n == 0 {
//!         Trampoline::done(accumulator)
//!     } else {
//!         Trampoline::suspend(move || sum_to(n - 1, accumulator + n))
//!     }
//! }
//!
//! assert_eq!(sum_to(100_000, 0).run(), 5_000_050_000);
//! assert_eq!(factorial(5), Some(120));
//! ```

mod recursion;
mod trampoline;

pub use recursion::{COMPLETION_MESSAGE, count_to, factorial};
pub use trampoline::{Thunk, Trampoline};
