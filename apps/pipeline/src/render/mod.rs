//! Section Renderer — pure mapping from one typed UI section to markup.
//!
//! Rules (uniform across all renderers):
//! - every nested field is optional; a missing field renders as an empty
//!   placeholder, never a panic;
//! - all generator-supplied text is escaped before it touches markup;
//! - list fields render in input order — insertion order is display order;
//! - an `Unknown` section routes to a generic fallback that serializes the
//!   raw record legibly. One malformed section never aborts the page.

pub mod theme;

use serde_json::Value;

use crate::models::resume::{EducationEntry, ExperienceEntry, ProjectEntry};
use crate::models::ui::{
    EducationContent, ExperienceContent, HeaderContent, ProjectsContent, Section, SkillsContent,
    SummaryContent, UIDescription,
};

/// Renders every section of a UI description in order and concatenates the
/// fragments into the page body.
pub fn render_sections(ui: &UIDescription) -> String {
    ui.sections.iter().map(render_section).collect()
}

/// Page body: the ordered sections, or the explicit empty-state placeholder
/// when the description has none. Always valid, renderable markup.
pub fn page_body(ui: &UIDescription) -> String {
    if ui.sections.is_empty() {
        return "<div class=\"empty-state\">\n  <h1>Nothing here yet</h1>\n  <p>This portfolio has no sections to show.</p>\n</div>\n"
            .to_string();
    }
    render_sections(ui)
}

/// Document title derived from the first header section, if any.
pub fn page_title(ui: &UIDescription) -> String {
    ui.sections
        .iter()
        .find_map(|s| match s {
            Section::Header(c) => c.name.as_deref().filter(|n| !n.is_empty()),
            _ => None,
        })
        .map(esc)
        .unwrap_or_else(|| "Portfolio".to_string())
}

/// Renders one section to a markup fragment. Exhaustive over the section
/// union; the `Unknown` arm is the generic fallback.
pub fn render_section(section: &Section) -> String {
    match section {
        Section::Header(c) => render_header(c),
        Section::Summary(c) => render_summary(c),
        Section::Experience(c) => render_experience(c),
        Section::Education(c) => render_education(c),
        Section::Skills(c) => render_skills(c),
        Section::Projects(c) => render_projects(c),
        Section::Unknown { kind, content } => render_unknown(kind, content),
    }
}

fn esc(text: &str) -> String {
    html_escape::encode_text(text).into_owned()
}

fn esc_attr(text: &str) -> String {
    html_escape::encode_double_quoted_attribute(text).into_owned()
}

/// Escaped field text, or an empty placeholder when the field is absent.
fn field(value: &Option<String>) -> String {
    value.as_deref().map(esc).unwrap_or_default()
}

/// Section heading with a default used when the generator omitted one.
fn heading(title: &Option<String>, default: &str) -> String {
    match title.as_deref() {
        Some(t) if !t.is_empty() => esc(t),
        _ => default.to_string(),
    }
}

/// Meta line joining two optional parts ("Acme · 2021–2024"); parts that are
/// absent or empty just drop out.
fn meta_line(left: &Option<String>, right: &Option<String>) -> String {
    [left, right]
        .iter()
        .filter_map(|part| part.as_deref())
        .filter(|part| !part.is_empty())
        .map(esc)
        .collect::<Vec<_>>()
        .join(" · ")
}

fn render_header(content: &HeaderContent) -> String {
    let mut contact: Vec<String> = Vec::new();
    for part in [&content.email, &content.location] {
        if let Some(text) = part.as_deref() {
            if !text.is_empty() {
                contact.push(esc(text));
            }
        }
    }
    let contact_line = if contact.is_empty() {
        String::new()
    } else {
        format!("\n  <p class=\"contact\">{}</p>", contact.join(" · "))
    };

    format!(
        "<header class=\"section section-header\">\n  <h1>{}</h1>\n  <p class=\"tagline\">{}</p>{}\n  <p class=\"bio\">{}</p>\n</header>\n",
        field(&content.name),
        field(&content.tagline),
        contact_line,
        field(&content.bio),
    )
}

fn render_summary(content: &SummaryContent) -> String {
    format!(
        "<section class=\"section section-summary\">\n  <h2>{}</h2>\n  <p>{}</p>\n</section>\n",
        heading(&content.title, "About"),
        field(&content.text),
    )
}

fn render_experience(content: &ExperienceContent) -> String {
    let items: String = content
        .items
        .iter()
        .flatten()
        .map(render_experience_item)
        .collect();
    format!(
        "<section class=\"section section-experience\">\n  <h2>{}</h2>\n{}</section>\n",
        heading(&content.title, "Experience"),
        items,
    )
}

fn render_experience_item(item: &ExperienceEntry) -> String {
    let highlights = if item.highlights.is_empty() {
        String::new()
    } else {
        let entries: String = item
            .highlights
            .iter()
            .map(|h| format!("      <li>{}</li>\n", esc(h)))
            .collect();
        format!("    <ul class=\"highlights\">\n{entries}    </ul>\n")
    };
    format!(
        "  <article class=\"item\">\n    <h3>{}</h3>\n    <p class=\"item-meta\">{}</p>\n    <p>{}</p>\n{}  </article>\n",
        field(&item.title),
        meta_line(&item.company, &item.period),
        field(&item.description),
        highlights,
    )
}

fn render_education(content: &EducationContent) -> String {
    let items: String = content
        .items
        .iter()
        .flatten()
        .map(render_education_item)
        .collect();
    format!(
        "<section class=\"section section-education\">\n  <h2>{}</h2>\n{}</section>\n",
        heading(&content.title, "Education"),
        items,
    )
}

fn render_education_item(item: &EducationEntry) -> String {
    format!(
        "  <article class=\"item\">\n    <h3>{}</h3>\n    <p class=\"item-meta\">{}</p>\n    <p>{}</p>\n  </article>\n",
        field(&item.degree),
        meta_line(&item.institution, &item.period),
        field(&item.details),
    )
}

fn render_skills(content: &SkillsContent) -> String {
    let items: String = content
        .items
        .iter()
        .flatten()
        .map(|skill| format!("    <li class=\"skill\">{}</li>\n", esc(skill)))
        .collect();
    format!(
        "<section class=\"section section-skills\">\n  <h2>{}</h2>\n  <ul class=\"skills-list\">\n{}  </ul>\n</section>\n",
        heading(&content.category, "Skills"),
        items,
    )
}

fn render_projects(content: &ProjectsContent) -> String {
    let items: String = content
        .items
        .iter()
        .flatten()
        .map(render_project_item)
        .collect();
    format!(
        "<section class=\"section section-projects\">\n  <h2>{}</h2>\n{}</section>\n",
        heading(&content.title, "Projects"),
        items,
    )
}

fn render_project_item(item: &ProjectEntry) -> String {
    let tech = if item.tech_stack.is_empty() {
        String::new()
    } else {
        let joined = item
            .tech_stack
            .iter()
            .map(|t| esc(t))
            .collect::<Vec<_>>()
            .join(" · ");
        format!("    <p class=\"tech-stack\">{joined}</p>\n")
    };
    format!(
        "  <article class=\"item\">\n    <h3>{}</h3>\n    <p>{}</p>\n{}{}  </article>\n",
        field(&item.title),
        field(&item.description),
        tech,
        project_link(&item.link),
    )
}

/// Only http(s) URLs become anchors; anything else from the generator is
/// rendered as inert text.
fn project_link(link: &Option<String>) -> String {
    match link.as_deref() {
        Some(url) if url.starts_with("https://") || url.starts_with("http://") => {
            format!(
                "    <p><a href=\"{}\">{}</a></p>\n",
                esc_attr(url),
                esc(url)
            )
        }
        Some(text) if !text.is_empty() => format!("    <p>{}</p>\n", esc(text)),
        _ => String::new(),
    }
}

/// Generic fallback: the section type as a heading and the raw record as
/// pretty-printed, escaped JSON. Keeps the content visible instead of
/// silently dropping it.
fn render_unknown(kind: &str, content: &Value) -> String {
    let raw = serde_json::to_string_pretty(content).unwrap_or_default();
    format!(
        "<section class=\"section section-unknown\" data-kind=\"{}\">\n  <h2>{}</h2>\n  <pre>{}</pre>\n</section>\n",
        esc_attr(kind),
        esc(kind),
        esc(&raw),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn section(json: serde_json::Value) -> Section {
        serde_json::from_value(json).unwrap()
    }

    #[test]
    fn test_header_renders_all_provided_fields_verbatim() {
        let html = render_section(&section(json!({
            "type": "header",
            "content": {"name": "Ava Diaz", "tagline": "Engineer", "email": "ava@example.com"}
        })));
        assert!(html.contains("Ava Diaz"));
        assert!(html.contains("Engineer"));
        assert!(html.contains("ava@example.com"));
    }

    #[test]
    fn test_header_missing_fields_render_empty_not_panic() {
        let html = render_section(&section(json!({"type": "header", "content": {}})));
        assert!(html.contains("<h1></h1>"));
        assert!(html.contains("section-header"));
    }

    #[test]
    fn test_text_is_escaped() {
        let html = render_section(&section(json!({
            "type": "summary",
            "content": {"text": "<script>alert('x')</script> & more"}
        })));
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
        assert!(html.contains("&amp; more"));
    }

    #[test]
    fn test_skills_items_render_in_input_order_as_distinct_tokens() {
        let html = render_section(&section(json!({
            "type": "skills",
            "content": {"category": "Languages", "items": ["Go", "Rust"]}
        })));
        assert!(html.contains("Languages"));
        let go = html.find("<li class=\"skill\">Go</li>").unwrap();
        let rust = html.find("<li class=\"skill\">Rust</li>").unwrap();
        assert!(go < rust);
    }

    #[test]
    fn test_experience_items_preserve_order_and_fields() {
        let html = render_section(&section(json!({
            "type": "experience",
            "content": {"items": [
                {"title": "Staff Engineer", "company": "Acme", "period": "2021–2024",
                 "description": "Led the platform team", "highlights": ["Cut costs 30%"]},
                {"title": "Engineer", "company": "Initech"}
            ]}
        })));
        assert!(html.contains("Staff Engineer"));
        assert!(html.contains("Acme · 2021–2024"));
        assert!(html.contains("Led the platform team"));
        assert!(html.contains("Cut costs 30%"));
        assert!(html.find("Staff Engineer").unwrap() < html.find("Initech").unwrap());
    }

    #[test]
    fn test_experience_without_items_renders_heading_only() {
        let html = render_section(&section(json!({"type": "experience", "content": {}})));
        assert!(html.contains("<h2>Experience</h2>"));
        assert!(!html.contains("<article"));
    }

    #[test]
    fn test_projects_render_tech_stack_and_safe_link() {
        let html = render_section(&section(json!({
            "type": "projects",
            "content": {"items": [{
                "title": "Orbit", "description": "A scheduler",
                "tech_stack": ["Rust", "Tokio"], "link": "https://example.com/orbit"
            }]}
        })));
        assert!(html.contains("Orbit"));
        assert!(html.contains("Rust · Tokio"));
        assert!(html.contains("href=\"https://example.com/orbit\""));
    }

    #[test]
    fn test_non_http_link_is_not_an_anchor() {
        let html = render_section(&section(json!({
            "type": "projects",
            "content": {"items": [{"title": "X", "link": "javascript:alert(1)"}]}
        })));
        assert!(!html.contains("href="));
        assert!(html.contains("javascript:alert(1)"));
    }

    #[test]
    fn test_unknown_section_uses_legible_fallback() {
        let html = render_section(&section(json!({
            "type": "testimonials",
            "content": {"quotes": ["Best engineer <ever>"]}
        })));
        assert!(html.contains("section-unknown"));
        assert!(html.contains("testimonials"));
        assert!(html.contains("Best engineer &lt;ever&gt;"));
    }

    #[test]
    fn test_render_sections_concatenates_in_order() {
        let ui: UIDescription = serde_json::from_value(json!({
            "sections": [
                {"type": "header", "content": {"name": "Ava"}},
                {"type": "skills", "content": {"items": ["Go"]}}
            ]
        }))
        .unwrap();
        let body = render_sections(&ui);
        assert!(body.find("section-header").unwrap() < body.find("section-skills").unwrap());
    }

    #[test]
    fn test_education_missing_subfields_render_empty() {
        let html = render_section(&section(json!({
            "type": "education",
            "content": {"items": [{"institution": "MIT"}]}
        })));
        assert!(html.contains("MIT"));
        assert!(html.contains("<h3></h3>"));
    }
}
