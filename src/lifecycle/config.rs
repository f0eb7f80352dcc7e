//! Playground configuration.
//!
//! The only setting is where the friend list comes from. Set `FRIENDS_JSON` to a file
//! containing a JSON array of friend objects; leave it unset to use the bundled list.

use std::path::PathBuf;
use tracing::{debug, info};

use super::error::PlaygroundError;

/// Environment variable naming the friends file.
pub const FRIENDS_JSON_VAR: &str = "FRIENDS_JSON";

/// The two-friend list the walkthrough uses when no file is configured.
pub const BUNDLED_FRIENDS: &str = include_str!("../../fixtures/friends.json");

/// Runtime settings for the playground.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlaygroundConfig {
    /// File holding the friend list; `None` means the bundled list.
    pub friends_path: Option<PathBuf>,
}

impl PlaygroundConfig {
    /// Reads settings from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Reads settings through an arbitrary key lookup.
    ///
    /// An empty value counts as unset.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let friends_path = lookup(FRIENDS_JSON_VAR)
            .filter(|value| !value.trim().is_empty())
            .map(PathBuf::from);

        debug!(?friends_path, "Playground config loaded");
        Self { friends_path }
    }

    /// Returns the raw friend-list JSON.
    ///
    /// # Errors
    /// [`PlaygroundError::Io`] if the configured file can't be read.
    pub fn load_entries(&self) -> Result<String, PlaygroundError> {
        match &self.friends_path {
            Some(path) => {
                info!(path = %path.display(), "Reading friends file");
                std::fs::read_to_string(path).map_err(|source| PlaygroundError::Io {
                    path: path.clone(),
                    source,
                })
            }
            None => Ok(BUNDLED_FRIENDS.to_string()),
        }
    }
}
