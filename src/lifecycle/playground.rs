use serde_json::Value;
use tracing::{info, info_span};

use super::config::PlaygroundConfig;
use super::error::PlaygroundError;
use crate::directory::{parse_entries, FriendDirectory};
use crate::framework::{flat_map_sequence, Optional, OptionFunctor};
use crate::model::{Address, Friend};
use crate::record::Record;

/// The name the greeting sections work with.
pub const OPTIONAL_NAME: Option<&str> = Some("Jimmy");

/// The integers the array sections double.
pub const ARRAY_OF_INTS: [i32; 3] = [2, 4, 6];

pub fn what_is_my_name(name: &str) -> String {
    format!("Your name is {}", name)
}

pub fn times_two(value: i32) -> i32 {
    value * 2
}

/// Everything the walkthrough computed, section by section.
#[derive(Debug, Clone, PartialEq)]
pub struct PlaygroundReport {
    /// 1.0 greeting built with `if let`.
    pub greeting_if_let: Option<String>,
    /// 1.0 greeting built with `map`.
    pub greeting_mapped: Option<String>,
    /// 2.0 doubled with a `for` loop.
    pub doubled_loop: Vec<i32>,
    /// 2.1 doubled by passing `times_two` to `map`.
    pub doubled_fn: Vec<i32>,
    /// 2.2 doubled with an inline closure.
    pub doubled_closure: Vec<i32>,
    /// 3.0 friends collected with a `for` loop.
    pub friends_loop: Vec<Friend>,
    /// 3.1 friends via `map`, one slot per entry.
    pub friends_mapped: Vec<Option<Friend>>,
    /// 4.0 `Optional(Optional(10))` flattened.
    pub nested_flattened: Optional<i32>,
    /// 4.1 `[Optional(10), Optional(20), Optional(30)]` flattened.
    pub optionals_flattened: Vec<i32>,
    /// 4.2 addresses via `map`.
    pub addresses_mapped: Vec<Option<Address>>,
    /// 4.3 addresses via flat-map.
    pub addresses_flat_mapped: Vec<Address>,
}

impl PlaygroundReport {
    /// The first friend found by the loop section, if any.
    pub fn first_friend(&self) -> Option<&Friend> {
        self.friends_loop.first()
    }
}

/// Runs the map / flat-map walkthrough over a list of raw friend entries.
///
/// # Example
///
/// ```rust
/// use functor_recipe::lifecycle::{Playground, PlaygroundConfig};
///
/// let playground = Playground::from_config(&PlaygroundConfig::default()).unwrap();
/// let report = playground.run();
///
/// assert_eq!(report.doubled_closure, vec![4, 8, 12]);
/// assert_eq!(report.addresses_flat_mapped.len(), 1);
/// ```
#[derive(Debug, Clone)]
pub struct Playground {
    entries: Vec<Value>,
}

impl Playground {
    pub fn new(entries: Vec<Value>) -> Self {
        Self { entries }
    }

    /// Loads the friend list named by `config`.
    pub fn from_config(config: &PlaygroundConfig) -> Result<Self, PlaygroundError> {
        let text = config.load_entries()?;
        Ok(Self::new(parse_entries(&text)?))
    }

    pub fn run(&self) -> PlaygroundReport {
        let _span = info_span!("playground", entries = self.entries.len()).entered();

        // 1.0 Basics of optional
        let greeting_if_let = if let Some(name) = OPTIONAL_NAME {
            Some(what_is_my_name(name))
        } else {
            None
        };
        let greeting_mapped = OPTIONAL_NAME.fmap(what_is_my_name);
        info!(greeting = ?greeting_mapped, "1.0 Optional name mapped");

        // 2. Arrays
        let mut doubled_loop = Vec::with_capacity(ARRAY_OF_INTS.len());
        for value in ARRAY_OF_INTS {
            doubled_loop.push(times_two(value));
        }
        info!(?doubled_loop, "2.0 Array of ints doubled in a for-loop");

        let doubled_fn: Vec<i32> = ARRAY_OF_INTS.iter().copied().map(times_two).collect();
        info!(?doubled_fn, "2.1 Array of ints doubled with a function as parameter");

        let doubled_closure: Vec<i32> = ARRAY_OF_INTS.iter().map(|x| x * 2).collect();
        info!(?doubled_closure, "2.2 Array of ints doubled with a closure");

        // 3. Map with objects
        let mut friends_loop = Vec::new();
        for entry in &self.entries {
            if let Optional::Present(friend) = Friend::from_value(entry) {
                friends_loop.push(friend);
            }
        }
        if let Some(first) = friends_loop.first() {
            info!(first = %first, "3.0 Friends created with a for-loop");
        }

        let friends_mapped = FriendDirectory::parse_each(&self.entries);
        for friend in &friends_mapped {
            info!(friend = ?friend.as_ref().map(ToString::to_string), "3.1 Friend created with map");
        }

        // 4. Flat-map
        let nested = Optional::present(Optional::present(10));
        let nested_flattened = nested.flat_map(|inner| inner);
        info!(?nested, flattened = ?nested_flattened, "4.0 Nested optional flat-mapped");

        let optional_array = [Optional::present(10), Optional::present(20), Optional::present(30)];
        let optionals_flattened = flat_map_sequence(optional_array, |x| x);
        info!(?optionals_flattened, "4.1 Optionals in an array flat-mapped");

        let addresses_mapped = FriendDirectory::addresses_per_entry(&self.entries);
        for address in &addresses_mapped {
            info!(address = ?address.as_ref().map(ToString::to_string), "4.2 Address created with map");
        }

        let addresses_flat_mapped = FriendDirectory::from_entries(&self.entries).addresses();
        for address in &addresses_flat_mapped {
            info!(address = %address, "4.3 Address created with flat-map");
        }

        PlaygroundReport {
            greeting_if_let,
            greeting_mapped,
            doubled_loop,
            doubled_fn,
            doubled_closure,
            friends_loop,
            friends_mapped,
            nested_flattened,
            optionals_flattened,
            addresses_mapped,
            addresses_flat_mapped,
        }
    }
}
