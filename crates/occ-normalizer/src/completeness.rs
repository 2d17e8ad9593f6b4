//! Selection and completeness rules for converted attributes.

use occ_core::model::Attribute;
use occ_core::UiType;

/// Set `selected_single_value` to the code of the only selected value.
///
/// The field is only written when exactly one value is selected; otherwise
/// any previous value is kept.
pub fn set_selected_single_value(attribute: &mut Attribute) {
    let only_selected = {
        let mut selected = attribute.selected_values();
        match (selected.next(), selected.next()) {
            (Some(only), None) => Some(only.value_code.clone()),
            _ => None,
        }
    };
    if only_selected.is_some() {
        attribute.selected_single_value = only_selected;
    }
}

/// Whether an attribute still lacks the input its UI type requires.
///
/// | UI type | complete when |
/// |---|---|
/// | string, numeric | user input is non-empty |
/// | radio button, dropdown, single-selection image | a single value is selected |
/// | checkbox, checkbox list, multi-selection image | at least one value is selected |
///
/// Every other type, and an absent type, counts as complete.
pub fn is_attribute_incomplete(attribute: &Attribute) -> bool {
    match attribute.ui_type {
        Some(UiType::String | UiType::Numeric) => is_blank(&attribute.user_input),
        Some(UiType::RadioButton | UiType::Dropdown | UiType::SingleSelectionImage) => {
            is_blank(&attribute.selected_single_value)
        }
        Some(UiType::Checkbox | UiType::CheckboxList | UiType::MultiSelectionImage) => {
            attribute.selected_values().next().is_none()
        }
        Some(UiType::ReadOnly | UiType::NotImplemented) | None => false,
    }
}

/// Compute and store the `incomplete` flag.
pub fn compile_attribute_incomplete(attribute: &mut Attribute) {
    attribute.incomplete = is_attribute_incomplete(attribute);
}

fn is_blank(value: &Option<String>) -> bool {
    value.as_deref().map_or(true, str::is_empty)
}
