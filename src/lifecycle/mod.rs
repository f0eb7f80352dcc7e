//! Runtime orchestration for the playground binary.
//!
//! This module contains everything the demo needs around the library itself:
//!
//! - **Configuration**: Where the friend list comes from
//! - **Walkthrough**: Running each map / flat-map section and collecting the results
//! - **Observability setup**: Initializing tracing and logging
//!
//! # Main Components
//!
//! - [`Playground`] - Runs the walkthrough and returns a [`PlaygroundReport`]
//! - [`PlaygroundConfig`] - Settings read from the environment
//! - [`setup_tracing`] - Initializes the tracing/logging infrastructure

pub mod config;
pub mod error;
pub mod playground;
pub mod tracing;

pub use config::*;
pub use error::*;
pub use playground::*;
pub use self::tracing::*;
