//! Wire shape of the OCC configurator endpoint.
//!
//! Field names follow the backend's camelCase JSON. Every field the backend
//! may omit is optional here, and every enumeration tolerates codes it does
//! not know, so any structurally valid document deserializes.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// UI type code as sent by the backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OccUiType {
    NotImplemented,
    RadioButton,
    CheckBox,
    CheckBoxList,
    Dropdown,
    DropdownAdditionalInput,
    ReadOnly,
    String,
    Numeric,
    SingleSelectionImage,
    MultiSelectionImage,
    /// Any code this crate does not know about
    #[serde(other)]
    Unknown,
}

/// Group type code as sent by the backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OccGroupType {
    /// Group of characteristics (attributes)
    CsticGroup,
    /// Sub-item instance of a multi-level product
    Instance,
    #[serde(other)]
    Unknown,
}

/// Image role as sent by the backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OccImageType {
    Primary,
    Gallery,
    #[serde(other)]
    Unknown,
}

/// Image format classification as sent by the backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OccImageFormatType {
    /// Image attached to a domain value
    ValueImage,
    /// Image attached to a characteristic
    CsticImage,
    #[serde(other)]
    Unknown,
}

/// A product configuration as returned by the backend.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Configuration {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub config_id: Option<String>,

    #[serde(default)]
    pub complete: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub consistent: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_number_of_issues: Option<u32>,

    #[serde(default)]
    pub root_product: String,

    #[serde(default)]
    pub groups: Vec<Group>,
}

impl Configuration {
    /// Parse a configuration from a JSON string.
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read and parse a configuration from a JSON file.
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        serde_json::from_str(&contents).map_err(|source| Error::JsonFile {
            file: path.to_path_buf(),
            source,
        })
    }
}

/// A group of attributes, optionally with nested sub-groups.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Group {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group_type: Option<OccGroupType>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub configurable: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub complete: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub consistent: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attributes: Option<Vec<Attribute>>,

    /// Nested groups; the backend sends at most one level.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sub_groups: Option<Vec<Group>>,
}

/// A configurable characteristic.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Attribute {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Language dependent label
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lang_dep_name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub required: Option<bool>,

    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub ui_type: Option<OccUiType>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub domain_values: Option<Vec<Value>>,

    /// Raw value for free-input attributes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,

    /// Value formatted for display, preferred over `value` when present
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub formatted_value: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub maxlength: Option<i32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub number_scale: Option<u32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub type_length: Option<u32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub negative_allowed: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub images: Option<Vec<Image>>,
}

/// One selectable domain value of an attribute.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Value {
    #[serde(default)]
    pub key: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lang_dep_name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub selected: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub images: Option<Vec<Image>>,
}

/// Image reference with a URL relative to the media host.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Image {
    #[serde(default)]
    pub url: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub format: Option<OccImageFormatType>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_type: Option<OccImageType>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alt_text: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gallery_index: Option<u32>,
}
