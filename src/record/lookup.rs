//! Typed lookups into untyped JSON.
//!
//! Every lookup performs a runtime shape check: a missing key and a value of the wrong
//! shape both come back as [`Optional::Absent`]. Nothing here reports *why* a lookup
//! failed.

use crate::framework::Optional;
use serde_json::{Map, Value};

/// An untyped JSON object: field name to arbitrary value.
pub type JsonMap = Map<String, Value>;

/// A type that can be read out of a single JSON value, if the value has the right shape.
pub trait FromJsonValue: Sized {
    fn from_json_value(value: &Value) -> Optional<Self>;
}

impl FromJsonValue for String {
    fn from_json_value(value: &Value) -> Optional<Self> {
        Optional::from(value.as_str()).map(str::to_owned)
    }
}

impl FromJsonValue for i64 {
    fn from_json_value(value: &Value) -> Optional<Self> {
        value.as_i64().into()
    }
}

impl FromJsonValue for u64 {
    fn from_json_value(value: &Value) -> Optional<Self> {
        value.as_u64().into()
    }
}

impl FromJsonValue for f64 {
    fn from_json_value(value: &Value) -> Optional<Self> {
        value.as_f64().into()
    }
}

impl FromJsonValue for bool {
    fn from_json_value(value: &Value) -> Optional<Self> {
        value.as_bool().into()
    }
}

impl FromJsonValue for JsonMap {
    fn from_json_value(value: &Value) -> Optional<Self> {
        object(value).map(Clone::clone)
    }
}

impl FromJsonValue for Vec<Value> {
    fn from_json_value(value: &Value) -> Optional<Self> {
        Optional::from(value.as_array()).map(Clone::clone)
    }
}

/// Reads `key` from `map` as a `T`.
///
/// ```rust
/// use functor_recipe::framework::Optional;
/// use functor_recipe::record::lookup::{get, JsonMap};
/// use serde_json::json;
///
/// let json: JsonMap = serde_json::from_value(json!({ "city": "Tampere", "zip": 33100 })).unwrap();
///
/// assert_eq!(get::<String>(&json, "city"), Optional::present("Tampere".to_string()));
/// assert_eq!(get::<String>(&json, "zip"), Optional::Absent);
/// assert_eq!(get::<i64>(&json, "zip"), Optional::present(33100));
/// assert_eq!(get::<String>(&json, "street"), Optional::Absent);
/// ```
pub fn get<T: FromJsonValue>(map: &JsonMap, key: &str) -> Optional<T> {
    Optional::from(map.get(key)).flat_map(T::from_json_value)
}

/// Narrows an untyped value to an object, borrowing it.
pub fn object(value: &Value) -> Optional<&JsonMap> {
    value.as_object().into()
}

/// Reads `key` from `map` as a nested object, borrowing it.
pub fn get_object<'a>(map: &'a JsonMap, key: &str) -> Optional<&'a JsonMap> {
    Optional::from(map.get(key)).flat_map(object)
}
