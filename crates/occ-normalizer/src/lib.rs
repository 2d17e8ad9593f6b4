//! OCC Normalizer - Converts configurator wire documents into the view model.
//!
//! The conversion is pure and total: absent optional wire fields become
//! defaults, never errors. Two collaborators are injected:
//!
//! - [`BaseUrls`]: API and media base URLs for resolving image links
//! - [`LabelCache`]: the pre-resolved label for the general group
//!
//! # Example
//!
//! ```
//! use occ_config::OccConfig;
//! use occ_core::wire;
//! use occ_i18n::LabelCache;
//! use occ_normalizer::VariantNormalizer;
//!
//! let config = OccConfig::with_base_urls(Some("https://api/"), Some("https://media/"));
//! let normalizer = VariantNormalizer::new(config, LabelCache::english());
//!
//! let source = wire::Configuration::from_json_str(
//!     r#"{"complete": true, "rootProduct": "CONF_PRODUCT", "groups": [{"name": "_GEN"}]}"#,
//! )?;
//! let configuration = normalizer.convert(&source);
//!
//! assert_eq!(configuration.root_product, "CONF_PRODUCT");
//! assert_eq!(configuration.groups[0].description.as_deref(), Some("General"));
//! assert!(configuration.groups[0].sub_groups.is_empty());
//! # Ok::<(), occ_core::Error>(())
//! ```

pub mod completeness;
pub mod converter;
pub mod mapping;
pub mod normalizer;

pub use completeness::{compile_attribute_incomplete, is_attribute_incomplete, set_selected_single_value};
pub use converter::Converter;
pub use mapping::{convert_attribute_type, convert_group_type, convert_image_format_type, convert_image_type};
pub use normalizer::VariantNormalizer;

pub use occ_config::BaseUrls;
pub use occ_i18n::LabelCache;
