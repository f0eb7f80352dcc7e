//! Error types for loading a friend directory.

use thiserror::Error;

/// Errors that can occur while reading a directory document.
///
/// These cover the *document* only. An individual entry that fails validation is
/// not an error; it is simply left out of the directory.
#[derive(Debug, Error)]
pub enum DirectoryError {
    /// The text is not valid JSON.
    #[error("Malformed directory JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// The document parsed, but its root is not an array of entries.
    #[error("Directory root must be an array, found {0}")]
    NotAnArray(&'static str),
}
