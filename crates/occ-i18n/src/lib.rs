//! Translation lookup for the OCC configurator.
//!
//! Translations are resolved asynchronously through [`TranslationService`],
//! but the normalizer must stay synchronous. [`LabelCache`] bridges the two:
//! it resolves the small, fixed set of labels the normalizer needs once, up
//! front, and then answers lookups without awaiting.
//!
//! # Example
//!
//! ```no_run
//! use occ_i18n::{Catalog, LabelCache, keys};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), occ_i18n::TranslationError> {
//! let catalog = Catalog::english();
//! let labels = LabelCache::resolve(&catalog).await?;
//! assert_eq!(labels.get(keys::GENERAL_GROUP), "General");
//! # Ok(())
//! # }
//! ```

mod cache;
mod catalog;
mod error;

pub use cache::LabelCache;
pub use catalog::Catalog;
pub use error::{Result, TranslationError};

/// Translation keys used by the normalizer.
pub mod keys {
    /// Description of the synthetic general group
    pub const GENERAL_GROUP: &str = "configurator.group.general";

    /// Every key [`LabelCache`](crate::LabelCache) resolves up front
    pub const ALL: &[&str] = &[GENERAL_GROUP];
}

/// Asynchronous translation lookup.
///
/// # Errors
///
/// Implementations return [`TranslationError::MissingKey`] when a key has
/// no translation, and other variants for backend failures.
#[async_trait::async_trait]
pub trait TranslationService: Send + Sync {
    /// Resolve a translation key to its localized string
    async fn translate(&self, key: &str) -> Result<String>;
}
