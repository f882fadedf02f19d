//! UI description — theme + ordered sections, the contract between the
//! Content Generator and the rendering/codegen side of the pipeline.
//!
//! `Section` is a closed tagged union over the fixed section vocabulary plus
//! an explicit `Unknown` variant carrying the raw record. Deserialization is
//! deliberately lenient: an unrecognized `type`, or content that does not
//! match the typed shape, degrades to `Unknown` instead of failing — the
//! generator cannot be trusted, and one malformed section must never sink
//! the whole description.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::models::resume::{EducationEntry, ExperienceEntry, ProjectEntry};

/// Top-level UI description. Immutable once it passes validation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UIDescription {
    #[serde(default)]
    pub theme: Theme,
    #[serde(default)]
    pub sections: Vec<Section>,
}

/// Theme tokens as emitted by the generator. Fields are raw JSON values —
/// the Theme Resolver defends against non-string and malformed entries.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Theme {
    #[serde(default)]
    pub primary_color: Option<Value>,
    #[serde(default)]
    pub secondary_color: Option<Value>,
    #[serde(default)]
    pub background_color: Option<Value>,
    #[serde(default)]
    pub text_color: Option<Value>,
    #[serde(default)]
    pub accent_color: Option<Value>,
    #[serde(default)]
    pub font_family: Option<Value>,
}

impl Theme {
    /// Field name / value pairs, in declaration order. Used by the validator.
    pub fn fields(&self) -> [(&'static str, &Option<Value>); 6] {
        [
            ("primary_color", &self.primary_color),
            ("secondary_color", &self.secondary_color),
            ("background_color", &self.background_color),
            ("text_color", &self.text_color),
            ("accent_color", &self.accent_color),
            ("font_family", &self.font_family),
        ]
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Section union
// ────────────────────────────────────────────────────────────────────────────

/// Wire form: `{ "type": "...", "content": { ... } }`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawSection {
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub content: Value,
}

/// One typed content block of the site. List sub-fields use `Option<Vec<_>>`
/// so validation can distinguish an absent list (contract violation) from an
/// empty one (allowed).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(from = "RawSection", into = "RawSection")]
pub enum Section {
    Header(HeaderContent),
    Summary(SummaryContent),
    Experience(ExperienceContent),
    Education(EducationContent),
    Skills(SkillsContent),
    Projects(ProjectsContent),
    /// Unrecognized type or type-mismatched content, preserved verbatim.
    Unknown { kind: String, content: Value },
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HeaderContent {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub tagline: Option<String>,
    #[serde(default)]
    pub bio: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SummaryContent {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub text: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ExperienceContent {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub items: Option<Vec<ExperienceEntry>>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EducationContent {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub items: Option<Vec<EducationEntry>>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SkillsContent {
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub items: Option<Vec<String>>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProjectsContent {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub items: Option<Vec<ProjectEntry>>,
}

impl Section {
    /// The wire-level type tag for this section.
    pub fn kind(&self) -> &str {
        match self {
            Section::Header(_) => "header",
            Section::Summary(_) => "summary",
            Section::Experience(_) => "experience",
            Section::Education(_) => "education",
            Section::Skills(_) => "skills",
            Section::Projects(_) => "projects",
            Section::Unknown { kind, .. } => kind,
        }
    }
}

impl From<RawSection> for Section {
    fn from(raw: RawSection) -> Self {
        // A missing content field parses as an all-empty record, not Unknown —
        // the validator reports the missing required fields with real paths.
        let content = if raw.content.is_null() {
            Value::Object(Default::default())
        } else {
            raw.content
        };

        fn typed<T: serde::de::DeserializeOwned>(
            kind: &str,
            content: Value,
            wrap: fn(T) -> Section,
        ) -> Section {
            match serde_json::from_value::<T>(content.clone()) {
                Ok(parsed) => wrap(parsed),
                Err(_) => Section::Unknown {
                    kind: kind.to_string(),
                    content,
                },
            }
        }

        match raw.kind.as_str() {
            "header" => typed(&raw.kind, content, Section::Header),
            "summary" => typed(&raw.kind, content, Section::Summary),
            "experience" => typed(&raw.kind, content, Section::Experience),
            "education" => typed(&raw.kind, content, Section::Education),
            "skills" => typed(&raw.kind, content, Section::Skills),
            "projects" => typed(&raw.kind, content, Section::Projects),
            _ => Section::Unknown {
                kind: raw.kind,
                content,
            },
        }
    }
}

impl From<Section> for RawSection {
    fn from(section: Section) -> Self {
        fn raw<T: Serialize>(kind: &str, content: &T) -> RawSection {
            RawSection {
                kind: kind.to_string(),
                content: serde_json::to_value(content).unwrap_or(Value::Null),
            }
        }

        match section {
            Section::Header(c) => raw("header", &c),
            Section::Summary(c) => raw("summary", &c),
            Section::Experience(c) => raw("experience", &c),
            Section::Education(c) => raw("education", &c),
            Section::Skills(c) => raw("skills", &c),
            Section::Projects(c) => raw("projects", &c),
            Section::Unknown { kind, content } => RawSection { kind, content },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header_section_deserializes_typed() {
        let json = r#"{"type": "header", "content": {"name": "Ava Diaz", "tagline": "Engineer"}}"#;
        let section: Section = serde_json::from_str(json).unwrap();
        match section {
            Section::Header(c) => {
                assert_eq!(c.name.as_deref(), Some("Ava Diaz"));
                assert_eq!(c.tagline.as_deref(), Some("Engineer"));
                assert!(c.bio.is_none());
            }
            other => panic!("expected header, got {:?}", other),
        }
    }

    #[test]
    fn test_unknown_type_is_preserved_not_dropped() {
        let json = r#"{"type": "testimonials", "content": {"quotes": ["Great work"]}}"#;
        let section: Section = serde_json::from_str(json).unwrap();
        match &section {
            Section::Unknown { kind, content } => {
                assert_eq!(kind, "testimonials");
                assert_eq!(content["quotes"][0], "Great work");
            }
            other => panic!("expected unknown, got {:?}", other),
        }
        // And it round-trips with the original tag and record intact.
        let wire = serde_json::to_value(&section).unwrap();
        assert_eq!(wire["type"], "testimonials");
        assert_eq!(wire["content"]["quotes"][0], "Great work");
    }

    #[test]
    fn test_type_mismatched_content_degrades_to_unknown() {
        // `items` must be a list; a string here must not fail the parse.
        let json = r#"{"type": "skills", "content": {"items": "Go, Rust"}}"#;
        let section: Section = serde_json::from_str(json).unwrap();
        assert!(matches!(section, Section::Unknown { .. }));
        assert_eq!(section.kind(), "skills");
    }

    #[test]
    fn test_missing_content_parses_as_empty_record() {
        let json = r#"{"type": "header"}"#;
        let section: Section = serde_json::from_str(json).unwrap();
        match section {
            Section::Header(c) => assert!(c.name.is_none()),
            other => panic!("expected header, got {:?}", other),
        }
    }

    #[test]
    fn test_absent_items_distinct_from_empty_items() {
        let absent: Section =
            serde_json::from_str(r#"{"type": "experience", "content": {}}"#).unwrap();
        let empty: Section =
            serde_json::from_str(r#"{"type": "experience", "content": {"items": []}}"#).unwrap();
        match (absent, empty) {
            (Section::Experience(a), Section::Experience(e)) => {
                assert!(a.items.is_none());
                assert_eq!(e.items.unwrap().len(), 0);
            }
            _ => panic!("expected experience sections"),
        }
    }

    #[test]
    fn test_typed_section_serializes_to_wire_form() {
        let section = Section::Skills(SkillsContent {
            category: Some("Languages".to_string()),
            items: Some(vec!["Go".to_string(), "Rust".to_string()]),
        });
        let wire = serde_json::to_value(&section).unwrap();
        assert_eq!(wire["type"], "skills");
        assert_eq!(wire["content"]["items"][1], "Rust");
    }

    #[test]
    fn test_theme_tolerates_non_string_values() {
        let json = r#"{"theme": {"primary_color": 42, "font_family": ["Inter"]}, "sections": []}"#;
        let ui: UIDescription = serde_json::from_str(json).unwrap();
        assert!(ui.theme.primary_color.is_some());
        assert!(ui.theme.secondary_color.is_none());
    }

    #[test]
    fn test_ui_description_defaults_when_fields_missing() {
        let ui: UIDescription = serde_json::from_str("{}").unwrap();
        assert!(ui.sections.is_empty());
        assert!(ui.theme.primary_color.is_none());
    }

    #[test]
    fn test_section_order_preserved() {
        let json = r#"{"sections": [
            {"type": "skills", "content": {"items": []}},
            {"type": "header", "content": {"name": "A"}},
            {"type": "summary", "content": {"text": "B"}}
        ]}"#;
        let ui: UIDescription = serde_json::from_str(json).unwrap();
        let kinds: Vec<&str> = ui.sections.iter().map(|s| s.kind()).collect();
        assert_eq!(kinds, vec!["skills", "header", "summary"]);
    }
}
