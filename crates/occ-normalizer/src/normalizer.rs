//! Conversion of OCC variant configurations into the view model.

use crate::completeness::{compile_attribute_incomplete, set_selected_single_value};
use crate::converter::Converter;
use crate::mapping::{convert_attribute_type, convert_group_type, convert_image_format_type, convert_image_type};
use occ_config::{BaseUrls, OccConfig};
use occ_core::{model, wire, GroupType, OccGroupType, OccUiType, UiType, GENERAL_GROUP_NAME};
use occ_i18n::{keys, LabelCache, TranslationService};
use std::sync::Arc;

/// Normalizer for variant configurations.
///
/// Holds only read-only collaborators, so a single instance can be shared
/// across threads and used for any number of concurrent conversions.
///
/// Per-level operations return owned values; callers collect them into
/// their own sequences. The flat group list is the one accumulator passed
/// down explicitly, because groups from every nesting level land in it.
#[derive(Debug, Clone)]
pub struct VariantNormalizer<C: BaseUrls = OccConfig> {
    config: Arc<C>,
    labels: LabelCache,
}

impl<C: BaseUrls> VariantNormalizer<C> {
    /// Create a normalizer from a base-URL source and pre-resolved labels
    pub fn new(config: C, labels: LabelCache) -> Self {
        Self::from_shared(Arc::new(config), labels)
    }

    /// Create a normalizer sharing a base-URL source with other components
    pub fn from_shared(config: Arc<C>, labels: LabelCache) -> Self {
        Self { config, labels }
    }

    /// Create a normalizer, resolving labels through a translation service
    ///
    /// # Errors
    ///
    /// Returns an error if the translation service fails for a reason other
    /// than a missing key.
    pub async fn with_translations<T: TranslationService + ?Sized>(
        config: C,
        translations: &T,
    ) -> occ_i18n::Result<Self> {
        let labels = LabelCache::resolve(translations).await?;
        Ok(Self::new(config, labels))
    }

    /// Convert a wire configuration into a new view-model configuration
    pub fn convert(&self, source: &wire::Configuration) -> model::Configuration {
        let mut target = model::Configuration {
            config_id: source.config_id.clone(),
            complete: source.complete,
            consistent: source.consistent,
            total_number_of_issues: source.total_number_of_issues,
            root_product: source.root_product.clone(),
            groups: Vec::with_capacity(source.groups.len()),
            flat_groups: Vec::new(),
        };
        self.convert_groups(source, &mut target);
        target
    }

    /// Convert a wire configuration into an existing target
    ///
    /// Scalar fields are overwritten; groups and flat groups are appended.
    pub fn convert_into(&self, source: &wire::Configuration, target: &mut model::Configuration) {
        target.config_id = source.config_id.clone();
        target.complete = source.complete;
        target.consistent = source.consistent;
        target.total_number_of_issues = source.total_number_of_issues;
        target.root_product = source.root_product.clone();
        self.convert_groups(source, target);
    }

    fn convert_groups(&self, source: &wire::Configuration, target: &mut model::Configuration) {
        tracing::debug!(
            root_product = %source.root_product,
            groups = source.groups.len(),
            "converting configuration"
        );

        for group in &source.groups {
            let converted = self.convert_group(group, &mut target.flat_groups);
            target.groups.push(converted);
        }
    }

    /// Convert a group and, recursively, its sub-groups
    ///
    /// Attribute groups are appended to `flat_groups` after their own
    /// sub-groups.
    pub fn convert_group(&self, source: &wire::Group, flat_groups: &mut Vec<model::Group>) -> model::Group {
        tracing::trace!(name = source.name.as_deref(), id = source.id.as_deref(), "converting group");

        let attributes = source
            .attributes
            .iter()
            .flatten()
            .map(|attribute| self.convert_attribute(attribute))
            .collect();

        let sub_groups = source
            .sub_groups
            .iter()
            .flatten()
            .map(|sub_group| self.convert_group(sub_group, flat_groups))
            .collect();

        let mut group = model::Group {
            id: source.id.clone(),
            name: source.name.clone(),
            description: source.description.clone(),
            group_type: source.group_type.map(|t| self.convert_group_type(t)),
            configurable: source.configurable,
            complete: source.complete,
            consistent: source.consistent,
            attributes,
            sub_groups,
        };
        self.set_general_description(&mut group);

        if group.group_type == Some(GroupType::AttributeGroup) {
            flat_groups.push(group.clone());
        }
        group
    }

    /// Convert an attribute with its domain values and images
    pub fn convert_attribute(&self, source: &wire::Attribute) -> model::Attribute {
        let negative_allowed = source.negative_allowed.unwrap_or(false);

        let mut attribute = model::Attribute {
            name: source.name.clone(),
            label: source.lang_dep_name.clone(),
            attr_code: source.key.clone(),
            required: source.required,
            ui_type: source.ui_type.map(|t| self.convert_attribute_type(t)),
            values: source
                .domain_values
                .iter()
                .flatten()
                .map(|value| self.convert_value(value))
                .collect(),
            selected_single_value: None,
            user_input: source.formatted_value.clone().or_else(|| source.value.clone()),
            incomplete: false,
            // One extra character for the minus sign
            maxlength: source
                .maxlength
                .map(|len| if negative_allowed { len.saturating_add(1) } else { len }),
            num_decimal_places: source.number_scale,
            num_total_length: source.type_length,
            negative_allowed: source.negative_allowed,
            images: source
                .images
                .iter()
                .flatten()
                .map(|image| self.convert_image(image))
                .collect(),
        };

        self.set_selected_single_value(&mut attribute);
        self.compile_attribute_incomplete(&mut attribute);
        attribute
    }

    pub fn convert_value(&self, source: &wire::Value) -> model::Value {
        model::Value {
            value_code: source.key.clone(),
            value_display: source.lang_dep_name.clone(),
            name: source.name.clone(),
            selected: source.selected.unwrap_or(false),
            images: source
                .images
                .iter()
                .flatten()
                .map(|image| self.convert_image(image))
                .collect(),
        }
    }

    /// Convert an image, resolving its URL against the media host
    ///
    /// The media base URL wins when configured; otherwise the API base URL
    /// is used.
    pub fn convert_image(&self, source: &wire::Image) -> model::Image {
        let base_url = self
            .config
            .media_base_url()
            .or_else(|| self.config.api_base_url())
            .unwrap_or_default();

        model::Image {
            url: format!("{base_url}{}", source.url),
            alt_text: source.alt_text.clone(),
            gallery_index: source.gallery_index,
            image_type: source.image_type.map(convert_image_type),
            format: source.format.map(convert_image_format_type),
        }
    }

    pub fn convert_attribute_type(&self, ui_type: OccUiType) -> UiType {
        convert_attribute_type(ui_type)
    }

    pub fn convert_group_type(&self, group_type: OccGroupType) -> GroupType {
        convert_group_type(group_type)
    }

    pub fn set_selected_single_value(&self, attribute: &mut model::Attribute) {
        set_selected_single_value(attribute);
    }

    pub fn compile_attribute_incomplete(&self, attribute: &mut model::Attribute) {
        compile_attribute_incomplete(attribute);
    }

    /// Replace the description of the general group with its label
    ///
    /// Groups with any other name are left untouched.
    pub fn set_general_description(&self, group: &mut model::Group) {
        if group.name.as_deref() == Some(GENERAL_GROUP_NAME) {
            group.description = Some(self.labels.get(keys::GENERAL_GROUP).to_string());
        }
    }
}

impl<C: BaseUrls> Converter<wire::Configuration, model::Configuration> for VariantNormalizer<C> {
    fn convert(&self, source: &wire::Configuration) -> model::Configuration {
        VariantNormalizer::convert(self, source)
    }

    fn convert_into(&self, source: &wire::Configuration, target: &mut model::Configuration) {
        VariantNormalizer::convert_into(self, source, target)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MEDIA_URL: &str = "media?This%20%is%20%a%20%URL";

    fn normalizer() -> VariantNormalizer {
        let config = OccConfig::with_base_urls(
            Some("https://occBackendBaseUrl/"),
            Some("https://mediaBackendBaseUrl/"),
        );
        VariantNormalizer::new(config, LabelCache::english())
    }

    fn occ_image() -> wire::Image {
        wire::Image {
            url: MEDIA_URL.to_string(),
            format: Some(occ_core::OccImageFormatType::ValueImage),
            image_type: Some(occ_core::OccImageType::Primary),
            alt_text: Some("Alternate Text for Image".to_string()),
            gallery_index: None,
        }
    }

    #[test]
    fn test_convert_value() {
        let value = normalizer().convert_value(&wire::Value {
            key: "BK".to_string(),
            lang_dep_name: Some("Black".to_string()),
            ..Default::default()
        });

        assert_eq!(value.value_code, "BK");
        assert_eq!(value.value_display.as_deref(), Some("Black"));
        assert!(!value.selected);
        assert!(value.images.is_empty());
    }

    #[test]
    fn test_convert_image_prefers_media_url() {
        let image = normalizer().convert_image(&occ_image());
        assert_eq!(image.url, format!("https://mediaBackendBaseUrl/{MEDIA_URL}"));
        assert_eq!(image.alt_text.as_deref(), Some("Alternate Text for Image"));
        assert_eq!(image.image_type, Some(occ_core::ImageType::Primary));
        assert_eq!(image.format, Some(occ_core::ImageFormatType::ValueImage));
    }

    #[test]
    fn test_convert_image_falls_back_to_api_url() {
        let config = OccConfig::with_base_urls(Some("https://occBackendBaseUrl/"), None);
        let normalizer = VariantNormalizer::new(config, LabelCache::english());

        let image = normalizer.convert_image(&occ_image());
        assert_eq!(image.url, format!("https://occBackendBaseUrl/{MEDIA_URL}"));
    }

    #[test]
    fn test_convert_image_without_any_base_url() {
        let normalizer = VariantNormalizer::new(OccConfig::default(), LabelCache::english());
        assert_eq!(normalizer.convert_image(&occ_image()).url, MEDIA_URL);
    }

    #[test]
    fn test_convert_attribute_user_input_prefers_formatted_value() {
        let attribute = normalizer().convert_attribute(&wire::Attribute {
            value: Some("1000".to_string()),
            formatted_value: Some("1,000".to_string()),
            ui_type: Some(OccUiType::Numeric),
            ..Default::default()
        });

        assert_eq!(attribute.user_input.as_deref(), Some("1,000"));
        assert!(!attribute.incomplete);
    }

    #[test]
    fn test_convert_attribute_keeps_maxlength_without_negatives() {
        let attribute = normalizer().convert_attribute(&wire::Attribute {
            maxlength: Some(3),
            negative_allowed: Some(false),
            ..Default::default()
        });
        assert_eq!(attribute.maxlength, Some(3));
    }

    #[test]
    fn test_maxlength_saturates() {
        let attribute = normalizer().convert_attribute(&wire::Attribute {
            maxlength: Some(i32::MAX),
            negative_allowed: Some(true),
            ..Default::default()
        });
        assert_eq!(attribute.maxlength, Some(i32::MAX));
    }

    #[test]
    fn test_attribute_images_are_converted() {
        let attribute = normalizer().convert_attribute(&wire::Attribute {
            name: Some("name".to_string()),
            images: Some(vec![occ_image()]),
            ..Default::default()
        });

        assert_eq!(attribute.images.len(), 1);
        assert!(attribute.images[0].url.starts_with("https://mediaBackendBaseUrl/"));
    }

    #[test]
    fn test_set_general_description_ignores_other_groups() {
        let mut group = model::Group {
            name: Some("GROUP1".to_string()),
            description: Some("The Group Name".to_string()),
            ..Default::default()
        };
        normalizer().set_general_description(&mut group);
        assert_eq!(group.description.as_deref(), Some("The Group Name"));
    }

    #[test]
    fn test_normalizer_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<VariantNormalizer>();
    }
}
