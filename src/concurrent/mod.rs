//! Collecting results from concurrent tasks without unsynchronized sharing.
//!
//! Two disciplines are offered:
//!
//! - [`collect_concurrently`]: every task returns its own result and the
//!   results are merged once, in task order. The output is deterministic.
//! - [`SharedAccumulator`]: tasks push into one container guarded by a
//!   mutex. The lock is held only for the duration of a single call, and the
//!   resulting order reflects scheduling, so callers needing a stable order
//!   must sort.
//!
//! The sequence combinators never use either; they are single-threaded.
//!
//! # Examples
//!
//! ```rust
//! use funcseq::concurrent::{SharedAccumulator, collect_concurrently};
//!
//! assert_eq!(collect_concurrently(5, |index| index * 10), vec![0, 10, 20, 30, 40]);
//!
//! let accumulator = SharedAccumulator::new();
//! std::thread::scope(|scope| {
//!     for index in 0..4 {
//!         let accumulator = &accumulator;
//!         scope.spawn(move || accumulator.push(index));
//!     }
//! });
//! let mut values = accumulator.into_inner();
//! values.sort_unstable();
//! assert_eq!(values, vec![0, 1, 2, 3]);
//! ```

use parking_lot::Mutex;
use static_assertions::assert_impl_all;
use std::panic;
use std::thread;

/// Runs `task(index)` for every index in `0..tasks` on scoped threads and
/// returns the results in index order.
///
/// Each task gets its own OS thread and no pool caps them, so `tasks` should
/// stay small. The demo limits it to `MAX_WORKERS` (256). If a thread
/// cannot be spawned, this function panics.
///
/// A panic in any task is re-raised on the calling thread once every task
/// has been joined.
pub fn collect_concurrently<T, F>(tasks: usize, task: F) -> Vec<T>
where
    T: Send,
    F: Fn(usize) -> T + Sync,
{
    tracing::debug!(tasks, "spawning concurrent tasks");

    let task = &task;
    thread::scope(|scope| {
        let handles: Vec<_> = (0..tasks)
            .map(|index| scope.spawn(move || task(index)))
            .collect();

        handles
            .into_iter()
            .map(|handle| handle.join().unwrap_or_else(|payload| panic::resume_unwind(payload)))
            .collect()
    })
}

/// A mutex-guarded `Vec` that concurrent tasks can append to.
#[derive(Debug)]
pub struct SharedAccumulator<T> {
    items: Mutex<Vec<T>>,
}

assert_impl_all!(SharedAccumulator<i32>: Send, Sync);

impl<T> SharedAccumulator<T> {
    /// Creates an empty accumulator.
    #[must_use]
    pub fn new() -> Self {
        Self {
            items: Mutex::new(Vec::new()),
        }
    }

    /// Appends `item` while holding the lock.
    pub fn push(&self, item: T) {
        self.items.lock().push(item);
    }

    /// Number of items pushed so far.
    pub fn len(&self) -> usize {
        self.items.lock().len()
    }

    /// Returns `true` if nothing has been pushed.
    pub fn is_empty(&self) -> bool {
        self.items.lock().is_empty()
    }

    /// Clones the current contents.
    pub fn snapshot(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.items.lock().clone()
    }

    /// Consumes the accumulator, returning the items in push order.
    pub fn into_inner(self) -> Vec<T> {
        self.items.into_inner()
    }
}

impl<T> Default for SharedAccumulator<T> {
    fn default() -> Self {
        Self::new()
    }
}
