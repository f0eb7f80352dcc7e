//! # Functor Recipe Playground
//!
//! Walks through `map` and `flat_map` on optionals, arrays and parsed records,
//! logging each section's result.
//!
//! ## 📚 Quick Start
//!
//! ```bash
//! # Use the bundled friend list
//! cargo run
//!
//! # Use your own list and show rejected entries
//! FRIENDS_JSON=friends.json RUST_LOG=debug cargo run
//! ```

use functor_recipe::lifecycle::{setup_tracing, Playground, PlaygroundConfig, PlaygroundError};
use tracing::info;

fn main() -> Result<(), PlaygroundError> {
    // Setup tracing once for the entire application
    setup_tracing();

    let config = PlaygroundConfig::from_env();
    info!(source = ?config.friends_path, "Starting playground");

    let playground = Playground::from_config(&config)?;

    let report = playground.run();
    info!(
        friends = report.friends_loop.len(),
        addresses = report.addresses_flat_mapped.len(),
        "Playground completed successfully"
    );
    Ok(())
}
