//! View model consumed by the configurator presentation layer.

use serde::{Deserialize, Serialize};

/// Normalized UI type of an attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum UiType {
    #[serde(rename = "NOT_IMPLEMENTED")]
    NotImplemented,
    #[serde(rename = "RADIOBUTTON")]
    RadioButton,
    #[serde(rename = "CHECKBOX")]
    Checkbox,
    #[serde(rename = "CHECKBOXLIST")]
    CheckboxList,
    #[serde(rename = "DROPDOWN")]
    Dropdown,
    #[serde(rename = "READ_ONLY")]
    ReadOnly,
    #[serde(rename = "STRING")]
    String,
    #[serde(rename = "NUMERIC")]
    Numeric,
    #[serde(rename = "SINGLE_SELECTION_IMAGE")]
    SingleSelectionImage,
    #[serde(rename = "MULTI_SELECTION_IMAGE")]
    MultiSelectionImage,
}

impl UiType {
    /// Returns the code used in the serialized view model
    pub fn code(&self) -> &'static str {
        match self {
            UiType::NotImplemented => "NOT_IMPLEMENTED",
            UiType::RadioButton => "RADIOBUTTON",
            UiType::Checkbox => "CHECKBOX",
            UiType::CheckboxList => "CHECKBOXLIST",
            UiType::Dropdown => "DROPDOWN",
            UiType::ReadOnly => "READ_ONLY",
            UiType::String => "STRING",
            UiType::Numeric => "NUMERIC",
            UiType::SingleSelectionImage => "SINGLE_SELECTION_IMAGE",
            UiType::MultiSelectionImage => "MULTI_SELECTION_IMAGE",
        }
    }
}

/// Normalized group classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum GroupType {
    AttributeGroup,
    SubItemGroup,
    /// The backend sent a group type without a view-model counterpart
    Unsupported,
}

/// Normalized image role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ImageType {
    Primary,
    Gallery,
    Unsupported,
}

/// Normalized image format classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ImageFormatType {
    ValueImage,
    AttributeImage,
    Unsupported,
}

/// A normalized product configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Configuration {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub config_id: Option<String>,

    pub complete: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub consistent: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_number_of_issues: Option<u32>,

    pub root_product: String,

    #[serde(default)]
    pub groups: Vec<Group>,

    /// All attribute groups of the tree in a single list, sub-groups first
    #[serde(default)]
    pub flat_groups: Vec<Group>,
}

impl Configuration {
    /// Walk every group of the tree, parents before their sub-groups
    pub fn all_groups(&self) -> Vec<&Group> {
        let mut out = Vec::new();
        for group in &self.groups {
            group.collect_into(&mut out);
        }
        out
    }

    /// Number of attributes flagged incomplete anywhere in the tree
    pub fn incomplete_attribute_count(&self) -> usize {
        self.all_groups()
            .iter()
            .flat_map(|group| group.attributes.iter())
            .filter(|attribute| attribute.incomplete)
            .count()
    }
}

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
    pub group_type: Option<GroupType>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub configurable: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub complete: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub consistent: Option<bool>,

    #[serde(default)]
    pub attributes: Vec<Attribute>,

    /// Always present, empty when the backend sent none
    #[serde(default)]
    pub sub_groups: Vec<Group>,
}

impl Group {
    fn collect_into<'a>(&'a self, out: &mut Vec<&'a Group>) {
        out.push(self);
        for sub_group in &self.sub_groups {
            sub_group.collect_into(out);
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Attribute {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attr_code: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub required: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ui_type: Option<UiType>,

    #[serde(default)]
    pub values: Vec<Value>,

    /// Code of the only selected value, absent unless exactly one is selected
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub selected_single_value: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_input: Option<String>,

    #[serde(default)]
    pub incomplete: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub maxlength: Option<i32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub num_decimal_places: Option<u32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub num_total_length: Option<u32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub negative_allowed: Option<bool>,

    #[serde(default)]
    pub images: Vec<Image>,
}

impl Attribute {
    /// Values currently marked as selected
    pub fn selected_values(&self) -> impl Iterator<Item = &Value> {
        self.values.iter().filter(|value| value.selected)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Value {
    pub value_code: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value_display: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(default)]
    pub selected: bool,

    #[serde(default)]
    pub images: Vec<Image>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Image {
    /// Absolute URL
    pub url: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alt_text: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gallery_index: Option<u32>,

    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub image_type: Option<ImageType>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub format: Option<ImageFormatType>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn value(code: &str, selected: bool) -> Value {
        Value {
            value_code: code.to_string(),
            selected,
            ..Default::default()
        }
    }

    #[test]
    fn test_ui_type_serializes_to_internal_code() {
        for ui_type in [
            UiType::NotImplemented,
            UiType::RadioButton,
            UiType::CheckboxList,
            UiType::SingleSelectionImage,
            UiType::ReadOnly,
        ] {
            let json = serde_json::to_string(&ui_type).unwrap();
            assert_eq!(json, format!("\"{}\"", ui_type.code()));
        }
    }

    #[test]
    fn test_group_type_serialization() {
        assert_eq!(
            serde_json::to_string(&GroupType::SubItemGroup).unwrap(),
            "\"SUB_ITEM_GROUP\""
        );
    }

    #[test]
    fn test_empty_sub_groups_are_serialized() {
        let group = Group {
            name: Some("GROUP1".to_string()),
            ..Default::default()
        };

        let json = serde_json::to_value(&group).unwrap();
        assert_eq!(json["subGroups"], serde_json::json!([]));
        assert!(json.get("description").is_none());
    }

    #[test]
    fn test_selected_values() {
        let attribute = Attribute {
            values: vec![value("BK", false), value("BE", true), value("RD", true)],
            ..Default::default()
        };

        let codes: Vec<_> = attribute
            .selected_values()
            .map(|v| v.value_code.as_str())
            .collect();
        assert_eq!(codes, vec!["BE", "RD"]);
    }

    #[test]
    fn test_incomplete_attribute_count_walks_sub_groups() {
        let incomplete = Attribute {
            incomplete: true,
            ..Default::default()
        };
        let configuration = Configuration {
            groups: vec![Group {
                attributes: vec![incomplete.clone(), Attribute::default()],
                sub_groups: vec![Group {
                    attributes: vec![incomplete],
                    ..Default::default()
                }],
                ..Default::default()
            }],
            ..Default::default()
        };

        assert_eq!(configuration.all_groups().len(), 2);
        assert_eq!(configuration.incomplete_attribute_count(), 2);
    }
}
