//! Pre-resolved labels for synchronous lookup.

use crate::catalog::Catalog;
use crate::error::{Result, TranslationError};
use crate::{keys, TranslationService};
use std::collections::HashMap;

/// Labels resolved once from a [`TranslationService`].
///
/// Covers every key in [`keys::ALL`]. A key the service has no translation
/// for resolves to the key itself.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LabelCache {
    labels: HashMap<String, String>,
}

impl LabelCache {
    /// Resolve all known keys through an async translation service
    ///
    /// # Errors
    ///
    /// Propagates any service error other than a missing key.
    pub async fn resolve<T: TranslationService + ?Sized>(service: &T) -> Result<Self> {
        let mut labels = HashMap::with_capacity(keys::ALL.len());
        for key in keys::ALL {
            let text = match service.translate(key).await {
                Ok(text) => text,
                Err(TranslationError::MissingKey(_)) => {
                    tracing::warn!(key = *key, "no translation found, using key as label");
                    key.to_string()
                }
                Err(e) => return Err(e),
            };
            labels.insert(key.to_string(), text);
        }
        Ok(Self { labels })
    }

    /// Resolve all known keys from an in-memory catalog
    pub fn from_catalog(catalog: &Catalog) -> Self {
        let labels = keys::ALL
            .iter()
            .map(|&key| {
                let text = catalog.get(key).unwrap_or(key);
                (key.to_string(), text.to_string())
            })
            .collect();
        Self { labels }
    }

    /// Labels from the built-in English catalog
    pub fn english() -> Self {
        Self::from_catalog(&Catalog::english())
    }

    /// Look up a resolved label; unknown keys come back unchanged
    pub fn get<'a>(&'a self, key: &'a str) -> &'a str {
        self.labels.get(key).map(String::as_str).unwrap_or(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FailingService;

    #[async_trait::async_trait]
    impl TranslationService for FailingService {
        async fn translate(&self, _key: &str) -> Result<String> {
            Err(TranslationError::Io(std::io::Error::other("backend down")))
        }
    }

    #[tokio::test]
    async fn test_resolve_from_service() {
        let mut catalog = Catalog::new();
        catalog.insert(keys::GENERAL_GROUP, "Allgemein");

        let cache = LabelCache::resolve(&catalog).await.unwrap();
        assert_eq!(cache.get(keys::GENERAL_GROUP), "Allgemein");
    }

    #[tokio::test]
    async fn test_missing_key_falls_back_to_key() {
        let cache = LabelCache::resolve(&Catalog::new()).await.unwrap();
        assert_eq!(cache.get(keys::GENERAL_GROUP), keys::GENERAL_GROUP);
    }

    #[tokio::test]
    async fn test_service_failure_propagates() {
        let service: &dyn TranslationService = &FailingService;
        let result = LabelCache::resolve(service).await;
        assert!(matches!(result, Err(TranslationError::Io(_))));
    }

    #[test]
    fn test_english_labels() {
        assert_eq!(LabelCache::english().get(keys::GENERAL_GROUP), "General");
    }

    #[test]
    fn test_unknown_key_passes_through() {
        assert_eq!(LabelCache::english().get("configurator.unknown"), "configurator.unknown");
    }
}
