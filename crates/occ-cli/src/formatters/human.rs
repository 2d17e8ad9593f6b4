//! Human-readable formatter for normalized configurations.

use colored::*;
use occ_core::model::{Attribute, Configuration, Group};
use std::fmt::Write;

pub struct HumanFormatter;

pub fn render(configuration: &Configuration) -> String {
    let mut out = String::new();

    let status = if configuration.complete {
        "complete".green()
    } else {
        "incomplete".yellow()
    };
    let _ = writeln!(out, "{} {} ({})", "Configuration".bold(), configuration.root_product, status);

    if let Some(config_id) = &configuration.config_id {
        let _ = writeln!(out, "  Config ID: {}", config_id);
    }
    if let Some(issues) = configuration.total_number_of_issues {
        let _ = writeln!(out, "  Issues: {}", issues);
    }
    let _ = writeln!(
        out,
        "  Groups: {} ({} attribute groups)",
        configuration.all_groups().len(),
        configuration.flat_groups.len()
    );
    let _ = writeln!(
        out,
        "  Incomplete attributes: {}",
        configuration.incomplete_attribute_count()
    );

    for group in &configuration.groups {
        out.push('\n');
        render_group(&mut out, group, 0);
    }

    out
}

fn render_group(out: &mut String, group: &Group, depth: usize) {
    let indent = "  ".repeat(depth);
    let title = group
        .description
        .as_deref()
        .or(group.name.as_deref())
        .unwrap_or("(unnamed group)");

    let _ = writeln!(out, "{}{}", indent, title.cyan().bold());
    for attribute in &group.attributes {
        render_attribute(out, attribute, depth + 1);
    }
    for sub_group in &group.sub_groups {
        render_group(out, sub_group, depth + 1);
    }
}

fn render_attribute(out: &mut String, attribute: &Attribute, depth: usize) {
    let indent = "  ".repeat(depth);
    let marker = if attribute.incomplete { "✗".red() } else { "✓".green() };
    let name = attribute
        .label
        .as_deref()
        .or(attribute.name.as_deref())
        .unwrap_or("(unnamed)");
    let ui_type = attribute.ui_type.map(|t| t.code()).unwrap_or("-");

    let selection: Vec<&str> = attribute
        .selected_values()
        .map(|value| value.value_display.as_deref().unwrap_or(value.value_code.as_str()))
        .collect();
    let current = if !selection.is_empty() {
        selection.join(", ")
    } else {
        attribute.user_input.clone().unwrap_or_default()
    };

    let _ = write!(out, "{}{} {} {}", indent, marker, name, format!("[{}]", ui_type).bright_black());
    if !current.is_empty() {
        let _ = write!(out, " = {}", current);
    }
    if attribute.required == Some(true) {
        let _ = write!(out, " {}", "*".red());
    }
    out.push('\n');
}

#[cfg(test)]
mod tests {
    use super::*;
    use occ_core::model::Value;
    use occ_core::UiType;

    fn sample() -> Configuration {
        Configuration {
            complete: false,
            root_product: "CPQ_LAPTOP".to_string(),
            groups: vec![Group {
                name: Some("_GEN".to_string()),
                description: Some("General".to_string()),
                attributes: vec![
                    Attribute {
                        name: Some("COLOUR".to_string()),
                        label: Some("Colour".to_string()),
                        ui_type: Some(UiType::RadioButton),
                        values: vec![Value {
                            value_code: "BK".to_string(),
                            value_display: Some("Black".to_string()),
                            selected: true,
                            ..Default::default()
                        }],
                        ..Default::default()
                    },
                    Attribute {
                        name: Some("ENGRAVING".to_string()),
                        ui_type: Some(UiType::String),
                        required: Some(true),
                        incomplete: true,
                        ..Default::default()
                    },
                ],
                ..Default::default()
            }],
            ..Default::default()
        }
    }

    #[test]
    fn test_render_tree() {
        colored::control::set_override(false);
        let text = render(&sample());

        assert!(text.contains("Configuration CPQ_LAPTOP (incomplete)"));
        assert!(text.contains("Incomplete attributes: 1"));
        assert!(text.contains("General\n"));
        assert!(text.contains("  ✓ Colour [RADIOBUTTON] = Black"));
        assert!(text.contains("  ✗ ENGRAVING [STRING] *"));
    }
}
