//! # Call Probe
//!
//! Utilities for asserting *whether* a transformation ran, not just what it returned.
//!
//! The combinators in [`core`](crate::framework::core) promise that the function passed
//! to `map` / `flat_map` is never invoked on the absent path. A return value can't prove
//! that on its own, so wrap the function in a [`CallProbe`] and check [`CallProbe::calls`].

use std::sync::atomic::{AtomicUsize, Ordering};

/// A function wrapper that counts its invocations.
///
/// # Example
/// ```rust
/// use functor_recipe::framework::{probe::CallProbe, Optional};
///
/// let probe = CallProbe::new(|x: i32| x + 1);
///
/// assert_eq!(Optional::<i32>::Absent.map(probe.func()), Optional::Absent);
/// assert_eq!(probe.calls(), 0);
///
/// assert_eq!(Optional::present(1).map(probe.func()), Optional::present(2));
/// assert_eq!(probe.calls(), 1);
/// ```
pub struct CallProbe<F> {
    f: F,
    counter: AtomicUsize,
}

impl<F> CallProbe<F> {
    pub fn new(f: F) -> Self {
        Self {
            f,
            counter: AtomicUsize::new(0),
        }
    }

    /// Invokes the wrapped function, recording the call.
    pub fn call<A, R>(&self, arg: A) -> R
    where
        F: Fn(A) -> R,
    {
        self.counter.fetch_add(1, Ordering::SeqCst);
        (self.f)(arg)
    }

    /// Borrows the probe as a plain closure, suitable for passing to a combinator.
    pub fn func<A, R>(&self) -> impl Fn(A) -> R + '_
    where
        F: Fn(A) -> R,
    {
        move |arg| self.call(arg)
    }

    /// Number of times the wrapped function has run.
    pub fn calls(&self) -> usize {
        self.counter.load(Ordering::SeqCst)
    }
}
