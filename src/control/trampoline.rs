//! Stack-safe sequential work via trampolining.
//!
//! A `Trampoline<A>` represents a computation producing an `A` as a chain of
//! suspended steps. [`Trampoline::run`] interprets the chain in a loop, so
//! the depth of the chain is bounded by heap memory instead of the call
//! stack.
//!
//! # Examples
//!
//! ```rust
//! use funcseq::control::Trampoline;
//!
//! fn count_down(n: u64) -> Trampoline<u64> {
//!     if n == 0 {
//!         Trampoline::done(0)
//!     } else {
//!         Trampoline::suspend(move || count_down(n - 1))
//!     }
//! }
//!
//! // Plain recursion this deep would overflow the default stack.
//! assert_eq!(count_down(1_000_000).run(), 0);
//! ```

/// A suspended step: produces the next state when called.
pub type Thunk<A> = Box<dyn FnOnce() -> Trampoline<A> + 'static>;

/// A computation made of suspended steps, run in constant stack space.
///
/// # Type Parameters
///
/// * `A` - The type of the final result. Must be `'static` for
///   [`Trampoline::map`] because steps are boxed closures.
pub enum Trampoline<A> {
    /// The computation has completed with value `A`.
    Done(A),
    /// The computation needs another step.
    Suspend(Thunk<A>),
}

impl<A: std::fmt::Debug> std::fmt::Debug for Trampoline<A> {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Done(value) => formatter.debug_tuple("Done").field(value).finish(),
            Self::Suspend(_) => formatter.write_str("Suspend(<thunk>)"),
        }
    }
}

impl<A> Trampoline<A> {
    /// Creates a completed trampoline.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use funcseq::control::Trampoline;
    ///
    /// assert_eq!(Trampoline::done(42).run(), 42);
    /// ```
    #[inline]
    pub const fn done(value: A) -> Self {
        Self::Done(value)
    }

    /// Creates a trampoline that continues with `thunk`.
    ///
    /// The thunk is not evaluated until the trampoline is run or resumed.
    #[inline]
    pub fn suspend<F>(thunk: F) -> Self
    where
        F: FnOnce() -> Self + 'static,
    {
        Self::Suspend(Box::new(thunk))
    }

    /// Returns `true` if no steps remain.
    #[inline]
    pub const fn is_done(&self) -> bool {
        matches!(self, Self::Done(_))
    }

    /// Runs every remaining step and returns the final value.
    pub fn run(self) -> A {
        let mut current = self;

        loop {
            match current {
                Self::Done(value) => return value,
                Self::Suspend(thunk) => current = thunk(),
            }
        }
    }

    /// Takes a single step.
    ///
    /// # Errors
    ///
    /// Returns `Err` with the next state when the computation is not finished
    /// after this step.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use funcseq::control::Trampoline;
    ///
    /// let two_steps = Trampoline::suspend(|| Trampoline::suspend(|| Trampoline::done(7)));
    ///
    /// let one_step = two_steps.resume().unwrap_err();
    /// assert!(!one_step.is_done());
    /// let finished = one_step.resume().unwrap_err();
    /// assert!(finished.is_done());
    /// assert_eq!(finished.resume().ok(), Some(7));
    /// ```
    pub fn resume(self) -> Result<A, Self> {
        match self {
            Self::Done(value) => Ok(value),
            Self::Suspend(thunk) => Err(thunk()),
        }
    }
}

impl<A: 'static> Trampoline<A> {
    /// Applies `function` to the final value without running any step.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use funcseq::control::Trampoline;
    ///
    /// let pending = Trampoline::suspend(|| Trampoline::done(21));
    /// assert_eq!(pending.map(|value| value * 2).run(), 42);
    /// ```
    pub fn map<B, F>(self, function: F) -> Trampoline<B>
    where
        F: FnOnce(A) -> B + 'static,
        B: 'static,
    {
        match self {
            Self::Done(value) => Trampoline::Done(function(value)),
            Self::Suspend(thunk) => Trampoline::suspend(move || thunk().map(function)),
        }
    }
}
