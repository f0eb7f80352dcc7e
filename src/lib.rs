#![doc(html_logo_url = "https://www.rust-lang.org/logos/rust-logo-128x128.png")]
#![doc(html_favicon_url = "https://www.rust-lang.org/favicon.ico")]
//! # Functor Recipe
//!
//! > **A Recipe for `map` and `flat_map` in Rust.**
//!
//! This crate demonstrates the functor and monad patterns on optional values and sequences,
//! and uses them to turn untyped JSON into structured records.
//!
//! ## 🏗️ Design Philosophy
//!
//! ### Absence is data
//!
//! Nothing in the core raises an error. A missing value is [`Optional::Absent`](framework::Optional),
//! and every step that might not produce a value returns an `Optional` so the next step can
//! keep composing:
//! - **`map`**: transform a present value, leave absence alone.
//! - **`flat_map`**: the transformation itself returns an `Optional`; the result is *not*
//!   wrapped again, so chains never nest.
//!
//! ### All-or-nothing records
//!
//! A record is produced only when every required field validates. Optional sub-records are
//! validated independently and simply come back as `None` when they don't.
//!
//! ## 🚀 Core Concepts
//!
//! ### `map` vs `flat_map`
//!
//! ```rust
//! use functor_recipe::framework::Optional;
//!
//! let half = |x: i32| if x % 2 == 0 { Optional::present(x / 2) } else { Optional::Absent };
//!
//! // map with an optional-producing step nests...
//! let nested: Optional<Optional<i32>> = Optional::present(10).map(half);
//! // ...flat_map doesn't.
//! let flat: Optional<i32> = Optional::present(10).flat_map(half);
//!
//! assert_eq!(nested.flatten(), flat);
//! ```
//!
//! ### Sequences
//!
//! ```rust
//! use functor_recipe::framework::SequenceExt;
//!
//! let ints = vec!["4", "x", "15"].flat_map_present(|s| s.parse::<i32>().ok());
//! assert_eq!(ints, vec![4, 15]);
//! ```
//!
//! ### Records
//!
//! ```rust
//! use functor_recipe::model::Friend;
//! use functor_recipe::record::Record;
//! use serde_json::json;
//!
//! let jimmy = json!({
//!     "firstname": "Jimmy",
//!     "lastname": "Swifty",
//!     "phonenumber": "1234567",
//!     "address": {}
//! });
//!
//! let friend = Friend::from_value(&jimmy).into_option().unwrap();
//! assert!(friend.address.is_none());
//! ```
//!
//! ## 🗺️ Module Tour
//!
//! ### 1. The Engine ([`framework`])
//! - **Role**: Generic containers and combinators, independent of any domain.
//! - **Key items**: [`Optional`](framework::Optional), [`flat_map_sequence`](framework::flat_map_sequence).
//!
//! ### 2. The Parser ([`record`])
//! - **Role**: Shape-checked lookups into untyped JSON and the [`Record`](record::Record) contract.
//!
//! ### 3. The Records ([`model`])
//! - **Role**: [`Address`](model::Address) and [`Friend`](model::Friend).
//!
//! ### 4. The Collection ([`directory`])
//! - **Role**: A friend list parsed from a JSON array, invalid entries dropped.
//!
//! ### 5. The Walkthrough ([`lifecycle`])
//! - **Role**: Configuration, tracing setup, and the section-by-section playground run.
//!
//! ## 🚀 Quick Start
//!
//! ```bash
//! # Run the walkthrough
//! cargo run
//!
//! # Run the tests
//! cargo test
//! ```

pub mod directory;
pub mod framework;
pub mod lifecycle;
pub mod model;
pub mod record;
