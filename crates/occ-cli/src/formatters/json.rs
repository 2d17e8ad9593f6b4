//! JSON formatter for normalized configurations.

use occ_core::model::Configuration;

pub struct JsonFormatter {
    pub pretty: bool,
}

pub fn render(configuration: &Configuration, pretty: bool) -> serde_json::Result<String> {
    if pretty {
        serde_json::to_string_pretty(configuration)
    } else {
        serde_json::to_string(configuration)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use occ_core::model::Group;

    #[test]
    fn test_render_uses_view_model_field_names() {
        let configuration = Configuration {
            complete: true,
            root_product: "CONF_PRODUCT".to_string(),
            groups: vec![Group::default()],
            ..Default::default()
        };

        let value: serde_json::Value = serde_json::from_str(&render(&configuration, false).unwrap()).unwrap();
        assert_eq!(value["rootProduct"], "CONF_PRODUCT");
        assert_eq!(value["groups"][0]["subGroups"], serde_json::json!([]));
        assert_eq!(value["flatGroups"], serde_json::json!([]));
    }

    #[test]
    fn test_pretty_output_spans_lines() {
        let configuration = Configuration::default();
        assert!(render(&configuration, true).unwrap().contains('\n'));
        assert!(!render(&configuration, false).unwrap().contains('\n'));
    }

    #[test]
    fn test_formatter_returns_rendered_json() {
        use crate::formatters::Formatter;

        let configuration = Configuration {
            root_product: "P".to_string(),
            ..Default::default()
        };
        let output = JsonFormatter { pretty: false }.format(&configuration).unwrap();
        assert!(output.starts_with('{'));
        assert!(output.contains("\"rootProduct\":\"P\""));
    }
}
