//! Generic functional containers.
//!
//! This module provides the two building blocks the rest of the crate is written with:
//! an optional container with `map` / `flat_map`, and a sequence combinator that drops
//! absent results.
//!
//! # Main Components
//!
//! - [`Optional`] - Present-or-absent container supporting `map` and `flat_map`
//! - [`OptionFunctor`] - The same pair as an extension on `std::option::Option`
//! - [`flat_map_sequence`] / [`SequenceExt`] - Map a sequence, keep only the present results
//!
//! # Testing
//!
//! See [`probe`] for a call-counting wrapper that proves a function was (or wasn't) invoked.

pub mod core;
pub mod probe;
pub mod sequence;

// Re-export core types for convenience
pub use self::core::*;
pub use self::sequence::*;
