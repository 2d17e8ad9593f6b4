//! In-memory translation catalog loaded from TOML.

use crate::error::{Result, TranslationError};
use crate::{keys, TranslationService};
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Flat map of dotted translation keys to strings.
///
/// Catalog files nest keys as TOML tables:
///
/// ```toml
/// [configurator.group]
/// general = "General"
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    entries: HashMap<String, String>,
}

impl Catalog {
    /// Create an empty catalog
    pub fn new() -> Self {
        Self::default()
    }

    /// Built-in English labels
    pub fn english() -> Self {
        let mut catalog = Self::new();
        catalog.insert(keys::GENERAL_GROUP, "General");
        catalog
    }

    /// Add or replace a translation
    pub fn insert(&mut self, key: impl Into<String>, text: impl Into<String>) {
        self.entries.insert(key.into(), text.into());
    }

    /// Look up a translation without awaiting
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Parse a catalog from TOML text
    pub fn from_toml_str(contents: &str) -> Result<Self> {
        Self::parse(contents, PathBuf::from("<inline>"))
    }

    /// Read a catalog file
    pub async fn load(path: &Path) -> Result<Self> {
        let contents = tokio::fs::read_to_string(path).await?;
        let catalog = Self::parse(&contents, path.to_path_buf())?;
        tracing::debug!(path = %path.display(), entries = catalog.len(), "loaded translation catalog");
        Ok(catalog)
    }

    /// Layer another catalog on top of this one, the other side winning
    pub fn merge(mut self, other: Catalog) -> Self {
        self.entries.extend(other.entries);
        self
    }

    fn parse(contents: &str, file: PathBuf) -> Result<Self> {
        let table: toml::Table = toml::from_str(contents)
            .map_err(|source| TranslationError::Parse { file, source })?;

        let mut catalog = Self::new();
        flatten(&table, "", &mut catalog.entries)?;
        Ok(catalog)
    }
}

fn flatten(table: &toml::Table, prefix: &str, out: &mut HashMap<String, String>) -> Result<()> {
    for (name, value) in table {
        let key = if prefix.is_empty() {
            name.clone()
        } else {
            format!("{prefix}.{name}")
        };

        match value {
            toml::Value::String(text) => {
                out.insert(key, text.clone());
            }
            toml::Value::Table(nested) => flatten(nested, &key, out)?,
            _ => return Err(TranslationError::InvalidEntry(key)),
        }
    }
    Ok(())
}

#[async_trait::async_trait]
impl TranslationService for Catalog {
    async fn translate(&self, key: &str) -> Result<String> {
        self.get(key)
            .map(str::to_string)
            .ok_or_else(|| TranslationError::MissingKey(key.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_nested_tables_flatten_to_dotted_keys() {
        let catalog = Catalog::from_toml_str(
            r#"
[configurator.group]
general = "Allgemein"

[configurator.attribute]
required = "Pflichtfeld"
"#,
        )
        .unwrap();

        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.get(keys::GENERAL_GROUP), Some("Allgemein"));
        assert_eq!(catalog.get("configurator.attribute.required"), Some("Pflichtfeld"));
    }

    #[test]
    fn test_non_string_entry_is_rejected() {
        let result = Catalog::from_toml_str("[configurator]\ncount = 3\n");
        assert!(matches!(result, Err(TranslationError::InvalidEntry(key)) if key == "configurator.count"));
    }

    #[test]
    fn test_merge_prefers_overlay() {
        let mut overlay = Catalog::new();
        overlay.insert(keys::GENERAL_GROUP, "Général");

        let merged = Catalog::english().merge(overlay);
        assert_eq!(merged.get(keys::GENERAL_GROUP), Some("Général"));
    }

    #[tokio::test]
    async fn test_translate_missing_key() {
        let result = Catalog::new().translate(keys::GENERAL_GROUP).await;
        assert!(matches!(result, Err(TranslationError::MissingKey(_))));
    }

    #[tokio::test]
    async fn test_load_from_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("labels.toml");
        std::fs::write(&path, "[configurator.group]\ngeneral = \"Generale\"\n").unwrap();

        let catalog = Catalog::load(&path).await.unwrap();
        assert_eq!(catalog.translate(keys::GENERAL_GROUP).await.unwrap(), "Generale");
    }
}
