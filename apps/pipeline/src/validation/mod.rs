//! Structural validation of a UI description.
//!
//! Pure and local — no external calls. Checks the invariants every consumer
//! downstream relies on: a non-empty section list, per-type required fields
//! (empty allowed, absent not), and primitive theme values. `Unknown`
//! sections are explicitly tagged and structurally acceptable; the renderer
//! has a fallback path for them.

pub mod autofix;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::models::ui::{Section, UIDescription};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidationIssue {
    /// JSON-path-ish location, e.g. `sections[2].content.items`.
    pub path: String,
    pub message: String,
}

/// Produced fresh per validation attempt.
#[derive(Debug, Clone, Serialize)]
pub struct ValidationResult {
    pub ok: bool,
    pub errors: Vec<ValidationIssue>,
}

pub fn validate(ui: &UIDescription) -> ValidationResult {
    let mut errors = Vec::new();

    if ui.sections.is_empty() {
        errors.push(ValidationIssue {
            path: "sections".to_string(),
            message: "at least one section is required".to_string(),
        });
    }

    for (index, section) in ui.sections.iter().enumerate() {
        check_required_fields(index, section, &mut errors);
    }

    for (name, value) in ui.theme.fields() {
        if let Some(value) = value {
            if !is_primitive(value) {
                errors.push(ValidationIssue {
                    path: format!("theme.{name}"),
                    message: "must be a primitive string or number value".to_string(),
                });
            }
        }
    }

    ValidationResult {
        ok: errors.is_empty(),
        errors,
    }
}

/// Per-type required-field contracts. A present-but-empty value satisfies
/// the contract; only absence is an error.
fn check_required_fields(index: usize, section: &Section, errors: &mut Vec<ValidationIssue>) {
    let mut require = |field: &str, present: bool| {
        if !present {
            errors.push(ValidationIssue {
                path: format!("sections[{index}].content.{field}"),
                message: format!(
                    "required field '{field}' is absent for '{}' section",
                    section.kind()
                ),
            });
        }
    };

    match section {
        Section::Header(c) => require("name", c.name.is_some()),
        Section::Summary(c) => require("text", c.text.is_some()),
        Section::Experience(c) => require("items", c.items.is_some()),
        Section::Education(c) => require("items", c.items.is_some()),
        Section::Skills(c) => require("items", c.items.is_some()),
        Section::Projects(c) => require("items", c.items.is_some()),
        // Explicitly tagged unknown — no field contract, rendered via fallback.
        Section::Unknown { .. } => {}
    }
}

fn is_primitive(value: &Value) -> bool {
    value.is_string() || value.is_number()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn ui(value: serde_json::Value) -> UIDescription {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_valid_description_passes() {
        let result = validate(&ui(json!({
            "theme": {"primary_color": "#112233"},
            "sections": [
                {"type": "header", "content": {"name": "Ava Diaz"}},
                {"type": "skills", "content": {"items": ["Go", "Rust"]}}
            ]
        })));
        assert!(result.ok);
        assert!(result.errors.is_empty());
    }

    #[test]
    fn test_empty_sections_fail() {
        let result = validate(&UIDescription::default());
        assert!(!result.ok);
        assert_eq!(result.errors[0].path, "sections");
    }

    #[test]
    fn test_header_without_name_fails_with_path() {
        let result = validate(&ui(json!({
            "sections": [{"type": "header", "content": {"tagline": "Engineer"}}]
        })));
        assert!(!result.ok);
        assert_eq!(result.errors[0].path, "sections[0].content.name");
    }

    #[test]
    fn test_empty_name_is_allowed_absent_is_not() {
        let empty = validate(&ui(json!({
            "sections": [{"type": "header", "content": {"name": ""}}]
        })));
        assert!(empty.ok);

        let absent = validate(&ui(json!({
            "sections": [{"type": "header", "content": {}}]
        })));
        assert!(!absent.ok);
    }

    #[test]
    fn test_empty_items_list_is_allowed() {
        let result = validate(&ui(json!({
            "sections": [{"type": "experience", "content": {"items": []}}]
        })));
        assert!(result.ok);
    }

    #[test]
    fn test_absent_items_fail_for_each_list_section() {
        for kind in ["experience", "education", "skills", "projects"] {
            let result = validate(&ui(json!({
                "sections": [{"type": kind, "content": {}}]
            })));
            assert!(!result.ok, "{kind} with absent items must fail");
            assert_eq!(result.errors[0].path, "sections[0].content.items");
        }
    }

    #[test]
    fn test_unknown_section_is_structurally_acceptable() {
        let result = validate(&ui(json!({
            "sections": [{"type": "testimonials", "content": {"quotes": []}}]
        })));
        assert!(result.ok);
    }

    #[test]
    fn test_non_primitive_theme_value_fails() {
        let result = validate(&ui(json!({
            "theme": {"primary_color": {"r": 255}},
            "sections": [{"type": "header", "content": {"name": "A"}}]
        })));
        assert!(!result.ok);
        assert_eq!(result.errors[0].path, "theme.primary_color");
    }

    #[test]
    fn test_numeric_theme_value_is_primitive() {
        let result = validate(&ui(json!({
            "theme": {"font_family": 12},
            "sections": [{"type": "header", "content": {"name": "A"}}]
        })));
        assert!(result.ok);
    }

    #[test]
    fn test_errors_are_ordered_by_section_index() {
        let result = validate(&ui(json!({
            "sections": [
                {"type": "summary", "content": {}},
                {"type": "skills", "content": {}}
            ]
        })));
        assert_eq!(result.errors.len(), 2);
        assert!(result.errors[0].path.starts_with("sections[0]"));
        assert!(result.errors[1].path.starts_with("sections[1]"));
    }
}
