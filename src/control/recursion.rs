//! Recursive definitions evaluated through [`Trampoline`].

use super::Trampoline;

/// Value returned by [`count_to`] once the bound is reached.
pub const COMPLETION_MESSAGE: &str = "completed successfully";

/// Steps from `0` up to `bound`, one suspended step per increment.
///
/// The recursion depth equals `bound`, but the call stack stays flat, so
/// no stack-size tuning is needed however large the bound is.
///
/// # Examples
///
/// ```rust
/// use funcseq::control::{COMPLETION_MESSAGE, count_to};
///
/// assert_eq!(count_to(100_000), COMPLETION_MESSAGE);
/// ```
pub fn count_to(bound: u64) -> &'static str {
    fn step(current: u64, bound: u64) -> Trampoline<&'static str> {
        if current >= bound {
            Trampoline::done(COMPLETION_MESSAGE)
        } else {
            Trampoline::suspend(move || step(current + 1, bound))
        }
    }

    tracing::debug!(bound, "counting with trampolined recursion");
    step(0, bound).run()
}

/// Computes `n!`, returning `None` when the result overflows `u64`.
///
/// # Examples
///
/// ```rust
/// use funcseq::control::factorial;
///
/// assert_eq!(factorial(0), Some(1));
/// assert_eq!(factorial(10), Some(3_628_800));
/// assert_eq!(factorial(21), None);
/// ```
pub fn factorial(n: u64) -> Option<u64> {
    fn step(n: u64, accumulator: u64) -> Trampoline<Option<u64>> {
        if n <= 1 {
            return Trampoline::done(Some(accumulator));
        }
        match accumulator.checked_mul(n) {
            Some(next) => Trampoline::suspend(move || step(n - 1, next)),
            None => Trampoline::done(None),
        }
    }

    step(n, 1).run()
}
