//! Enumeration mappings from wire codes to view-model codes.
//!
//! Every mapping is total. Codes without a view-model counterpart map to an
//! explicit sentinel (`NotImplemented` or `Unsupported`) instead of failing.

use occ_core::{GroupType, ImageFormatType, ImageType, OccGroupType, OccImageFormatType, OccImageType, OccUiType, UiType};

/// Map a wire UI type to the view-model UI type.
pub fn convert_attribute_type(ui_type: OccUiType) -> UiType {
    match ui_type {
        OccUiType::RadioButton => UiType::RadioButton,
        OccUiType::CheckBoxList => UiType::CheckboxList,
        OccUiType::CheckBox => UiType::Checkbox,
        OccUiType::Dropdown => UiType::Dropdown,
        OccUiType::Numeric => UiType::Numeric,
        OccUiType::ReadOnly => UiType::ReadOnly,
        OccUiType::String => UiType::String,
        OccUiType::SingleSelectionImage => UiType::SingleSelectionImage,
        OccUiType::MultiSelectionImage => UiType::MultiSelectionImage,
        OccUiType::DropdownAdditionalInput | OccUiType::NotImplemented | OccUiType::Unknown => {
            tracing::debug!(?ui_type, "UI type has no view-model counterpart");
            UiType::NotImplemented
        }
    }
}

/// Map a wire group type to the view-model group type.
pub fn convert_group_type(group_type: OccGroupType) -> GroupType {
    match group_type {
        OccGroupType::CsticGroup => GroupType::AttributeGroup,
        OccGroupType::Instance => GroupType::SubItemGroup,
        OccGroupType::Unknown => GroupType::Unsupported,
    }
}

pub fn convert_image_type(image_type: OccImageType) -> ImageType {
    match image_type {
        OccImageType::Primary => ImageType::Primary,
        OccImageType::Gallery => ImageType::Gallery,
        OccImageType::Unknown => ImageType::Unsupported,
    }
}

pub fn convert_image_format_type(format: OccImageFormatType) -> ImageFormatType {
    match format {
        OccImageFormatType::ValueImage => ImageFormatType::ValueImage,
        OccImageFormatType::CsticImage => ImageFormatType::AttributeImage,
        OccImageFormatType::Unknown => ImageFormatType::Unsupported,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ui_type_table() {
        let table = [
            (OccUiType::RadioButton, UiType::RadioButton),
            (OccUiType::CheckBoxList, UiType::CheckboxList),
            (OccUiType::CheckBox, UiType::Checkbox),
            (OccUiType::Dropdown, UiType::Dropdown),
            (OccUiType::Numeric, UiType::Numeric),
            (OccUiType::ReadOnly, UiType::ReadOnly),
            (OccUiType::String, UiType::String),
            (OccUiType::SingleSelectionImage, UiType::SingleSelectionImage),
            (OccUiType::MultiSelectionImage, UiType::MultiSelectionImage),
        ];

        for (wire, expected) in table {
            assert_eq!(convert_attribute_type(wire), expected, "{wire:?}");
        }
    }

    #[test]
    fn test_unknown_ui_types_are_not_implemented() {
        assert_eq!(
            convert_attribute_type(OccUiType::DropdownAdditionalInput),
            UiType::NotImplemented
        );
        assert_eq!(convert_attribute_type(OccUiType::NotImplemented), UiType::NotImplemented);
        assert_eq!(convert_attribute_type(OccUiType::Unknown), UiType::NotImplemented);
    }

    #[test]
    fn test_group_types() {
        assert_eq!(convert_group_type(OccGroupType::CsticGroup), GroupType::AttributeGroup);
        assert_eq!(convert_group_type(OccGroupType::Instance), GroupType::SubItemGroup);
        assert_eq!(convert_group_type(OccGroupType::Unknown), GroupType::Unsupported);
    }

    #[test]
    fn test_image_types() {
        assert_eq!(convert_image_type(OccImageType::Primary), ImageType::Primary);
        assert_eq!(convert_image_type(OccImageType::Gallery), ImageType::Gallery);
        assert_eq!(
            convert_image_format_type(OccImageFormatType::CsticImage),
            ImageFormatType::AttributeImage
        );
        assert_eq!(
            convert_image_format_type(OccImageFormatType::Unknown),
            ImageFormatType::Unsupported
        );
    }
}
