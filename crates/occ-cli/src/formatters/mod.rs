//! Output formatters for normalized configurations.

pub mod human;
pub mod json;

pub use human::HumanFormatter;
pub use json::JsonFormatter;

use anyhow::Result;
use occ_core::model::Configuration;

/// Trait for rendering a normalized configuration
pub trait Formatter {
    /// Render the configuration as printable text
    fn format(&self, configuration: &Configuration) -> Result<String>;
}

impl Formatter for HumanFormatter {
    fn format(&self, configuration: &Configuration) -> Result<String> {
        Ok(human::render(configuration))
    }
}

impl Formatter for JsonFormatter {
    fn format(&self, configuration: &Configuration) -> Result<String> {
        Ok(json::render(configuration, self.pretty)?)
    }
}
