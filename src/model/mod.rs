//! Pure data structures implementing the [`Record`](crate::record::Record) trait.

pub mod address;
pub mod friend;

pub use address::*;
pub use friend::*;
