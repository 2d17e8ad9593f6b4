//! Error types for occ-i18n

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for translation operations
pub type Result<T> = std::result::Result<T, TranslationError>;

/// Errors raised while loading or resolving translations
#[derive(Error, Debug)]
pub enum TranslationError {
    /// No translation exists for the key
    #[error("Missing translation for key '{0}'")]
    MissingKey(String),

    /// A catalog entry is not a string or table
    #[error("Catalog entry '{0}' must be a string or a table")]
    InvalidEntry(String),

    /// Catalog file could not be parsed
    #[error("Failed to parse catalog {file}: {source}")]
    Parse {
        file: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    /// Catalog file could not be read
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
