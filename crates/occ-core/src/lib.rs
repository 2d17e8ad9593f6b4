//! OCC Core - Wire and view-model types for the product configurator.
//!
//! This crate provides the two document shapes the normalizer translates
//! between:
//!
//! - [`wire`]: the JSON shape returned by the OCC configurator endpoint,
//!   using the backend's own field names and enumerations
//! - [`model`]: the internal view model consumed by presentation logic
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │    occ-cli      │  (User interface)
//! └────────┬────────┘
//!          │
//!          ▼
//! ┌─────────────────┐     ┌─────────────────┐
//! │ occ-normalizer  │────▶│ occ-config      │
//! └────────┬────────┘     │ occ-i18n        │
//!          │              └─────────────────┘
//!          ▼
//! ┌─────────────────┐
//! │    occ-core     │  (This crate - document types)
//! └─────────────────┘
//! ```
//!
//! # Example
//!
//! ```
//! use occ_core::wire;
//!
//! let json = r#"{"complete": true, "rootProduct": "CONF_PRODUCT", "groups": []}"#;
//! let configuration = wire::Configuration::from_json_str(json)?;
//! assert_eq!(configuration.root_product, "CONF_PRODUCT");
//! # Ok::<(), occ_core::Error>(())
//! ```

pub mod error;
pub mod model;
pub mod wire;

pub use error::{Error, Result};
pub use model::{GroupType, ImageFormatType, ImageType, UiType};
pub use wire::{OccGroupType, OccImageFormatType, OccImageType, OccUiType};

/// Reserved group name the backend uses for attributes without a named group.
pub const GENERAL_GROUP_NAME: &str = "_GEN";
