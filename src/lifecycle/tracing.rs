//! # Observability & Tracing
//!
//! The [`setup_tracing`] function initializes structured logging with the `tracing` crate.
//!
//! ## Configuration
//!
//! Output uses the compact format without the crate/module prefix (`with_target(false)`).
//! Verbosity comes from `RUST_LOG`; when it is unset the filter falls back to `info`, so the
//! playground walkthrough is visible by default.
//!
//! ## What Gets Traced
//!
//! - **Playground sections**: One `info` line per section with its result as fields
//! - **Directory construction**: Kept/dropped counts, plus a `debug` line per rejected entry
//! - **Sequence flat-map**: Kept/dropped counts at `trace`
//!
//! ## Usage Examples
//!
//! ```bash
//! # Section results only (default)
//! cargo run
//!
//! # Also show which directory entries were rejected
//! RUST_LOG=debug cargo run
//!
//! # Every combinator call
//! RUST_LOG=trace cargo run
//! ```
//!
//! With `RUST_LOG=debug`, a rejected entry shows up as:
//!
//! ```text
//! DEBUG from_entries: Entry rejected entry_count=2 index=1 kind="Friend"
//! ```
use tracing_subscriber::EnvFilter;

/// Default filter used when `RUST_LOG` is not set.
pub const DEFAULT_FILTER: &str = "info";

pub fn setup_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false) // Module paths add nothing for a single-crate walkthrough
        .compact()
        .init();
}
