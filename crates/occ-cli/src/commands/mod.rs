pub mod config;
pub mod normalize;

pub use config::{handle_config_command, ConfigCommand};
pub use normalize::{handle_normalize_command, NormalizeArgs, OutputFormat};
