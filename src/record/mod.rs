//! Record construction from untyped key-value data.
//!
//! - [`lookup`] - Typed, shape-checked field access (`get::<T>(map, key)`)
//! - [`Record`] - The contract structured records implement

pub mod entity;
pub mod lookup;

pub use entity::*;
pub use lookup::{get, get_object, object, FromJsonValue, JsonMap};
