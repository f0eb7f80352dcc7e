//! # Record Trait
//!
//! The `Record` trait defines the contract every structured record (Address, Friend, …)
//! implements to be built from untyped JSON. Construction is **all-or-nothing**: either
//! every required field validates and a record comes back, or the result is absent.
//!
//! # Architecture Note
//! Records implement one method, [`Record::from_json`], which takes an *already optional*
//! object. That lets a parent record hand a nested field straight through
//! (`Address::from_json(get_object(json, "address"))`) without unpacking it first, and
//! lets each record start its validation chain with a single `flat_map`.

use crate::framework::Optional;
use crate::record::lookup::{object, JsonMap};
use serde_json::Value;

/// A structured record built by validating an untyped JSON object.
pub trait Record: Sized {
    /// Short name used in log fields (e.g., `"Friend"`).
    const KIND: &'static str;

    /// Builds the record from an optional object.
    ///
    /// Returns [`Optional::Absent`] when `json` is absent or any required field is
    /// missing or has the wrong shape.
    fn from_json(json: Optional<&JsonMap>) -> Optional<Self>;

    /// Builds the record from any JSON value; non-objects are absent.
    fn from_value(value: &Value) -> Optional<Self> {
        Self::from_json(object(value))
    }
}
