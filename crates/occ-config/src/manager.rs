use crate::types::OccConfig;
use crate::validation::ValidationError;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Environment variable pointing at the config file
pub const ENV_CONFIG_PATH: &str = "OCC_CONFIG";

/// File name used when no path is given
pub const DEFAULT_CONFIG_FILE: &str = "occ.toml";

/// Errors that can occur during config management
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("TOML serialization error: {0}")]
    TomlSer(#[from] toml::ser::Error),

    #[error("TOML deserialization error: {0}")]
    TomlDe(#[from] toml::de::Error),

    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("Config file not found at {0}")]
    ConfigNotFound(PathBuf),
}

/// Manager for the backend configuration file
///
/// The file lives at `$OCC_CONFIG`, or `./occ.toml` when unset.
pub struct ConfigManager {
    config_path: PathBuf,
    config: OccConfig,
}

impl ConfigManager {
    /// Get the default config path
    pub fn config_path() -> PathBuf {
        std::env::var_os(ENV_CONFIG_PATH)
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_FILE))
    }

    /// Load config from default location
    pub async fn load() -> Result<Self, ConfigError> {
        Self::load_from(&Self::config_path()).await
    }

    /// Load config from specific path (useful for testing)
    pub async fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !tokio::fs::try_exists(path).await? {
            return Err(ConfigError::ConfigNotFound(path.to_path_buf()));
        }

        let contents = tokio::fs::read_to_string(path).await?;
        let config: OccConfig = toml::from_str(&contents)?;
        tracing::debug!(path = %path.display(), "loaded configuration");

        Ok(Self {
            config_path: path.to_path_buf(),
            config,
        })
    }

    /// Load config from a path if given, falling back to defaults when the
    /// default location has no file
    pub async fn load_or_default(path: Option<&Path>) -> Result<OccConfig, ConfigError> {
        match path {
            Some(path) => Ok(Self::load_from(path).await?.config),
            None => match Self::load().await {
                Ok(manager) => Ok(manager.config),
                Err(ConfigError::ConfigNotFound(_)) => Ok(OccConfig::default()),
                Err(e) => Err(e),
            },
        }
    }

    /// Initialize a new config file at the default location
    pub async fn init() -> Result<Self, ConfigError> {
        Self::init_at(&Self::config_path()).await
    }

    /// Initialize config at specific path
    pub async fn init_at(path: &Path) -> Result<Self, ConfigError> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent).await?;
        }

        let manager = Self {
            config_path: path.to_path_buf(),
            config: OccConfig::default(),
        };
        manager.save().await?;

        Ok(manager)
    }

    /// Save config to disk atomically
    ///
    /// Uses a temporary file and atomic rename to prevent corruption
    pub async fn save(&self) -> Result<(), ConfigError> {
        let toml_str = toml::to_string_pretty(&self.config)?;

        let temp_path = self.config_path.with_extension("toml.tmp");
        tokio::fs::write(&temp_path, &toml_str).await?;
        tokio::fs::rename(&temp_path, &self.config_path).await?;

        Ok(())
    }

    /// Validate the loaded config
    pub fn validate(&self) -> Result<(), ConfigError> {
        Ok(self.config.validate()?)
    }

    /// Path this manager reads and writes
    pub fn path(&self) -> &Path {
        &self.config_path
    }

    /// Get reference to config
    pub fn config(&self) -> &OccConfig {
        &self.config
    }

    /// Get mutable reference to config (caller must call save())
    pub fn config_mut(&mut self) -> &mut OccConfig {
        &mut self.config
    }

    /// Consume the manager, keeping the config
    pub fn into_config(self) -> OccConfig {
        self.config
    }
}
