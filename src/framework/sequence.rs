//! # Sequence Flat-Map
//!
//! Transforms every element of a sequence with an optional-producing function and keeps
//! only the present results, in their original order.
//!
//! Two equivalent constructions are provided:
//!
//! - [`flat_map_sequence`]: a single pass that checks presence while building the output.
//! - [`flat_map_sequence_staged`]: the textbook three-stage version
//!   (map everything, drop the absent entries, unwrap the rest).
//!
//! Both accept functions returning either [`Optional`](crate::framework::Optional) or
//! `Option` through the [`Presence`] trait.

use crate::framework::core::Presence;
use tracing::trace;

/// Maps `f` over `xs`, keeping the present results in input order.
///
/// The output is never longer than the input, and elements are neither reordered
/// nor deduplicated.
///
/// ```rust
/// use functor_recipe::framework::{flat_map_sequence, Optional};
///
/// let evens = flat_map_sequence(vec![1, 2, 3, 4], |x| {
///     if x % 2 == 0 { Optional::present(x * 10) } else { Optional::Absent }
/// });
/// assert_eq!(evens, vec![20, 40]);
/// ```
pub fn flat_map_sequence<I, F, R>(xs: I, mut f: F) -> Vec<R::Item>
where
    I: IntoIterator,
    F: FnMut(I::Item) -> R,
    R: Presence,
{
    // Sized by the kept elements, not the input.
    let mut out = Vec::new();
    let mut dropped = 0usize;

    for x in xs {
        match f(x).into_present() {
            Some(value) => out.push(value),
            None => dropped += 1,
        }
    }

    trace!(kept = out.len(), dropped, "flat_map_sequence");
    out
}

/// Same result as [`flat_map_sequence`], built in three explicit stages.
pub fn flat_map_sequence_staged<I, F, R>(xs: I, f: F) -> Vec<R::Item>
where
    I: IntoIterator,
    F: FnMut(I::Item) -> R,
    R: Presence,
{
    let mapped: Vec<Option<R::Item>> = xs.into_iter().map(f).map(Presence::into_present).collect();

    mapped
        .into_iter()
        .filter(Option::is_some)
        .flatten()
        .collect()
}

/// Method form of [`flat_map_sequence`], available on anything iterable.
///
/// ```rust
/// use functor_recipe::framework::SequenceExt;
///
/// let parsed = vec!["1", "two", "3"].flat_map_present(|s| s.parse::<i32>().ok());
/// assert_eq!(parsed, vec![1, 3]);
/// ```
pub trait SequenceExt: IntoIterator + Sized {
    fn flat_map_present<F, R>(self, f: F) -> Vec<R::Item>
    where
        F: FnMut(Self::Item) -> R,
        R: Presence,
    {
        flat_map_sequence(self, f)
    }
}

impl<I: IntoIterator> SequenceExt for I {}
