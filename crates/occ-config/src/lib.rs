pub mod manager;
pub mod types;
pub mod validation;

pub use manager::{ConfigError, ConfigManager};
pub use types::{BackendConfig, BaseUrls, MediaConfig, OccConfig, OccEndpointConfig};
pub use validation::{validate_base_url, validate_prefix, ValidationError};
