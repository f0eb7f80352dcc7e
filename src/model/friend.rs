use serde::{Deserialize, Serialize};
use std::fmt::Display;

use crate::framework::Optional;
use crate::model::Address;
use crate::record::{get, get_object, JsonMap, Record};

/// Represents a friend in the contact list.
///
/// # Record
/// This struct implements the [`Record`] trait.
///
/// - `firstname`, `lastname` and `phonenumber` are **required**: if any is missing or
///   not a string, the friend is absent.
/// - `address` is **optional**: it is built independently from the nested `address`
///   object, and any failure there leaves `address` as `None` without rejecting the friend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Friend {
    pub firstname: String,
    pub lastname: String,
    pub phonenumber: String,
    pub address: Option<Address>,
}

impl Friend {
    /// Creates a new Friend instance.
    ///
    /// # Arguments
    /// * `firstname` - Given name
    /// * `lastname` - Family name
    /// * `phonenumber` - Phone number, kept as text
    /// * `address` - Postal address, if known
    pub fn new(
        firstname: impl Into<String>,
        lastname: impl Into<String>,
        phonenumber: impl Into<String>,
        address: Option<Address>,
    ) -> Self {
        Self {
            firstname: firstname.into(),
            lastname: lastname.into(),
            phonenumber: phonenumber.into(),
            address,
        }
    }
}

impl Record for Friend {
    const KIND: &'static str = "Friend";

    fn from_json(json: Optional<&JsonMap>) -> Optional<Self> {
        json.flat_map(|json| {
            get::<String>(json, "firstname").flat_map(|firstname| {
                get::<String>(json, "lastname").flat_map(|lastname| {
                    get::<String>(json, "phonenumber").map(|phonenumber| Self {
                        firstname,
                        lastname,
                        phonenumber,
                        address: Address::from_json(get_object(json, "address")).into_option(),
                    })
                })
            })
        })
    }
}

impl Display for Friend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}, {}, {}", self.firstname, self.lastname, self.phonenumber)?;
        if let Some(address) = &self.address {
            write!(f, ", {}", address)?;
        }
        Ok(())
    }
}
