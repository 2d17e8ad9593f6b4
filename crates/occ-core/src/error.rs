//! Error types for OCC core.

use std::path::PathBuf;
use thiserror::Error;

/// Result type for OCC document operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while reading or writing configurator documents.
///
/// Conversion between the two document shapes never fails; these errors
/// only cover getting documents in and out of their serialized form.
#[derive(Debug, Error)]
pub enum Error {
    /// JSON parsing error for an in-memory document.
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    /// JSON parsing error for a document read from disk.
    #[error("JSON parse error in {file}: {source}")]
    JsonFile {
        /// Path to the JSON file with the error.
        file: PathBuf,
        /// The underlying JSON parsing error.
        #[source]
        source: serde_json::Error,
    },

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
