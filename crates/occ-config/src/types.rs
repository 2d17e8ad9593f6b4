use crate::validation::{validate_base_url, validate_prefix, ValidationError};
use serde::{Deserialize, Serialize};

/// Environment variable overriding `backend.occ.base_url`
pub const ENV_BASE_URL: &str = "OCC_BASE_URL";

/// Environment variable overriding `backend.media.base_url`
pub const ENV_MEDIA_BASE_URL: &str = "OCC_MEDIA_BASE_URL";

/// Read access to the two backend base URLs.
///
/// Both values are independently optional. Implementations return `None`
/// for unset or empty values.
pub trait BaseUrls: Send + Sync {
    /// Base URL of the OCC REST API
    fn api_base_url(&self) -> Option<&str>;

    /// Base URL of the media host serving images
    fn media_base_url(&self) -> Option<&str>;
}

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OccConfig {
    /// Schema version for migrations
    #[serde(default = "default_version")]
    pub version: String,

    #[serde(default)]
    pub backend: BackendConfig,
}

impl Default for OccConfig {
    fn default() -> Self {
        Self {
            version: default_version(),
            backend: BackendConfig::default(),
        }
    }
}

impl OccConfig {
    /// Build a config from explicit base URLs
    pub fn with_base_urls(api_base_url: Option<&str>, media_base_url: Option<&str>) -> Self {
        let mut config = Self::default();
        config.backend.occ.base_url = api_base_url.map(str::to_string);
        config.backend.media.base_url = media_base_url.map(str::to_string);
        config
    }

    /// Replace base URLs with any override that is set
    pub fn apply_overrides(mut self, base_url: Option<String>, media_base_url: Option<String>) -> Self {
        if let Some(url) = base_url {
            self.backend.occ.base_url = Some(url);
        }
        if let Some(url) = media_base_url {
            self.backend.media.base_url = Some(url);
        }
        self
    }

    /// Apply `OCC_BASE_URL` and `OCC_MEDIA_BASE_URL` from the environment
    pub fn with_env_overrides(self) -> Self {
        let base_url = std::env::var(ENV_BASE_URL).ok();
        let media_base_url = std::env::var(ENV_MEDIA_BASE_URL).ok();
        if base_url.is_some() || media_base_url.is_some() {
            tracing::debug!(
                base_url = base_url.as_deref(),
                media_base_url = media_base_url.as_deref(),
                "applying base URL overrides from environment"
            );
        }
        self.apply_overrides(base_url, media_base_url)
    }

    /// Check every configured URL and the API prefix
    pub fn validate(&self) -> Result<(), ValidationError> {
        if let Some(url) = non_empty(&self.backend.occ.base_url) {
            validate_base_url(url)?;
        }
        if let Some(url) = non_empty(&self.backend.media.base_url) {
            validate_base_url(url)?;
        }
        validate_prefix(&self.backend.occ.prefix)?;
        Ok(())
    }
}

impl BaseUrls for OccConfig {
    fn api_base_url(&self) -> Option<&str> {
        non_empty(&self.backend.occ.base_url)
    }

    fn media_base_url(&self) -> Option<&str> {
        non_empty(&self.backend.media.base_url)
    }
}

/// Backend endpoints
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct BackendConfig {
    #[serde(default)]
    pub occ: OccEndpointConfig,

    #[serde(default)]
    pub media: MediaConfig,
}

/// OCC REST API endpoint
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OccEndpointConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,

    /// Path prefix of the OCC API below the base URL
    #[serde(default = "default_prefix")]
    pub prefix: String,
}

impl Default for OccEndpointConfig {
    fn default() -> Self {
        Self {
            base_url: None,
            prefix: default_prefix(),
        }
    }
}

/// Media host serving product and value images
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct MediaConfig {
    /// Falls back to the OCC base URL when unset
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|s| !s.is_empty())
}

// Default value functions
fn default_version() -> String {
    "1.0".to_string()
}

fn default_prefix() -> String {
    "/occ/v2/".to_string()
}
