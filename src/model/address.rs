use serde::{Deserialize, Serialize};
use std::fmt::Display;

use crate::framework::Optional;
use crate::record::{get, JsonMap, Record};

/// A street address.
///
/// # Record
/// This struct implements the [`Record`] trait: both `city` and `street` are required
/// strings, and a missing or mistyped field makes the whole address absent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Address {
    pub city: String,
    pub street: String,
}

impl Address {
    /// Creates a new Address instance.
    ///
    /// # Arguments
    /// * `city` - City name
    /// * `street` - Street name
    pub fn new(city: impl Into<String>, street: impl Into<String>) -> Self {
        Self {
            city: city.into(),
            street: street.into(),
        }
    }
}

impl Record for Address {
    const KIND: &'static str = "Address";

    fn from_json(json: Optional<&JsonMap>) -> Optional<Self> {
        json.flat_map(|json| {
            get::<String>(json, "city")
                .flat_map(|city| get::<String>(json, "street").map(|street| Self { city, street }))
        })
    }
}

impl Display for Address {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}, {}", self.city, self.street)
    }
}
