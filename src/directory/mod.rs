//! A list of friends parsed from an untyped JSON array.
//!
//! This is the main consumer of the [`framework`](crate::framework) combinators: every
//! entry is run through [`Friend::from_value`](crate::record::Record::from_value) and
//! [`flat_map_sequence`] keeps only the ones that validated.

pub mod error;

pub use error::*;

use serde_json::Value;
use tracing::{debug, info, instrument};

use crate::framework::{flat_map_sequence, Optional};
use crate::model::{Address, Friend};
use crate::record::Record;

/// Friends that survived validation, in document order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FriendDirectory {
    friends: Vec<Friend>,
}

impl FriendDirectory {
    /// Builds a directory from raw entries, dropping any entry that isn't a valid friend.
    #[instrument(skip(entries), fields(entry_count = entries.len()))]
    pub fn from_entries(entries: &[Value]) -> Self {
        let friends = flat_map_sequence(entries.iter().enumerate(), |(index, entry)| {
            let friend = Friend::from_value(entry);
            if friend.is_absent() {
                debug!(index, kind = Friend::KIND, "Entry rejected");
            }
            friend
        });

        info!(kept = friends.len(), dropped = entries.len() - friends.len(), "Directory built");
        Self { friends }
    }

    /// Parses `text` as a JSON array of entries.
    ///
    /// # Errors
    /// - [`DirectoryError::Json`] if `text` is not JSON
    /// - [`DirectoryError::NotAnArray`] if the root value isn't an array
    pub fn from_json_str(text: &str) -> Result<Self, DirectoryError> {
        let entries = parse_entries(text)?;
        Ok(Self::from_entries(&entries))
    }

    /// One slot per entry: the plain `map` result, before absent entries are dropped.
    pub fn parse_each(entries: &[Value]) -> Vec<Option<Friend>> {
        entries
            .iter()
            .map(|entry| Friend::from_value(entry).into_option())
            .collect()
    }

    /// One slot per entry: the address reached through an optional friend.
    ///
    /// An entry that isn't a valid friend and a friend without an address both give `None`.
    pub fn addresses_per_entry(entries: &[Value]) -> Vec<Option<Address>> {
        entries
            .iter()
            .map(|entry| {
                Friend::from_value(entry)
                    .flat_map(|friend| Optional::from(friend.address))
                    .into_option()
            })
            .collect()
    }

    pub fn friends(&self) -> &[Friend] {
        &self.friends
    }

    pub fn first(&self) -> Option<&Friend> {
        self.friends.first()
    }

    pub fn len(&self) -> usize {
        self.friends.len()
    }

    pub fn is_empty(&self) -> bool {
        self.friends.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Friend> {
        self.friends.iter()
    }

    /// Addresses of the friends that have one, in directory order.
    pub fn addresses(&self) -> Vec<Address> {
        flat_map_sequence(&self.friends, |friend| friend.address.clone())
    }
}

impl<'a> IntoIterator for &'a FriendDirectory {
    type Item = &'a Friend;
    type IntoIter = std::slice::Iter<'a, Friend>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Parses `text` into the raw entry list without validating entries.
pub fn parse_entries(text: &str) -> Result<Vec<Value>, DirectoryError> {
    match serde_json::from_str::<Value>(text)? {
        Value::Array(entries) => Ok(entries),
        other => Err(DirectoryError::NotAnArray(kind_of(&other))),
    }
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
