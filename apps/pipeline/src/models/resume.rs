//! Structured resume data — output of the `structure` and `enhance` stages.
//!
//! Every field is optional or defaulted: the Content Generator works from
//! OCR'd text and routinely omits whatever the source document lacked.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StructuredResume {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub links: Vec<ResumeLink>,
    #[serde(default)]
    pub summary: Option<String>,
    #[serde(default)]
    pub experience: Vec<ExperienceEntry>,
    #[serde(default)]
    pub education: Vec<EducationEntry>,
    #[serde(default)]
    pub skills: Vec<SkillGroup>,
    #[serde(default)]
    pub projects: Vec<ProjectEntry>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResumeLink {
    #[serde(default)]
    pub label: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ExperienceEntry {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub company: Option<String>,
    #[serde(default)]
    pub period: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub highlights: Vec<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EducationEntry {
    #[serde(default)]
    pub degree: Option<String>,
    #[serde(default)]
    pub institution: Option<String>,
    #[serde(default)]
    pub period: Option<String>,
    #[serde(default)]
    pub details: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SkillGroup {
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub items: Vec<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProjectEntry {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub tech_stack: Vec<String>,
    #[serde(default)]
    pub link: Option<String>,
    #[serde(default)]
    pub featured: Option<bool>,
}

impl StructuredResume {
    /// A resume with no name, no skills, no experience, and no projects has
    /// nothing to build a site from.
    pub fn has_content(&self) -> bool {
        self.name.is_some()
            || !self.skills.is_empty()
            || !self.experience.is_empty()
            || !self.projects.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserializes_from_sparse_json() {
        let json = r#"{"name": "Ava Diaz", "skills": [{"category": "Languages", "items": ["Go", "Rust"]}]}"#;
        let resume: StructuredResume = serde_json::from_str(json).unwrap();
        assert_eq!(resume.name.as_deref(), Some("Ava Diaz"));
        assert_eq!(resume.skills.len(), 1);
        assert_eq!(resume.skills[0].items, vec!["Go", "Rust"]);
        assert!(resume.experience.is_empty());
        assert!(resume.summary.is_none());
    }

    #[test]
    fn test_empty_object_deserializes() {
        let resume: StructuredResume = serde_json::from_str("{}").unwrap();
        assert!(!resume.has_content());
    }

    #[test]
    fn test_has_content_with_experience_only() {
        let resume = StructuredResume {
            experience: vec![ExperienceEntry {
                title: Some("Engineer".to_string()),
                ..Default::default()
            }],
            ..Default::default()
        };
        assert!(resume.has_content());
    }
}
