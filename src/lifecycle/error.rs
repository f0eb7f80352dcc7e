//! Error types for running the playground.

use std::path::PathBuf;
use thiserror::Error;

use crate::directory::DirectoryError;

/// Errors that can stop the playground before it produces a report.
#[derive(Debug, Error)]
pub enum PlaygroundError {
    /// The configured friends file could not be read.
    #[error("Failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The friends document could not be read as a list of entries.
    #[error(transparent)]
    Directory(#[from] DirectoryError),
}
