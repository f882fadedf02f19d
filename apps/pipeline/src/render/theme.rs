//! Theme Resolver — turns generator-supplied theme tokens into a complete,
//! trustworthy set of CSS values.
//!
//! `resolve` is total: every field has a hard-coded default used whenever the
//! input is absent, empty, non-string, or not a plausible CSS token. The
//! generated stylesheet embeds the resolved tokens as CSS custom properties
//! and is shared by the Bundle Assembler and the Preview Builder.

use serde_json::Value;

use crate::models::ui::Theme;

pub const DEFAULT_PRIMARY_COLOR: &str = "#3B82F6";
pub const DEFAULT_SECONDARY_COLOR: &str = "#6B7280";
pub const DEFAULT_BACKGROUND_COLOR: &str = "#FFFFFF";
pub const DEFAULT_TEXT_COLOR: &str = "#111827";
pub const DEFAULT_ACCENT_COLOR: &str = "#10B981";
pub const DEFAULT_FONT_FAMILY: &str = "Inter, system-ui, sans-serif";

/// Fully-resolved theme. Every field is a valid CSS token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedTheme {
    pub primary_color: String,
    pub secondary_color: String,
    pub background_color: String,
    pub text_color: String,
    pub accent_color: String,
    pub font_family: String,
}

impl Default for ResolvedTheme {
    fn default() -> Self {
        resolve(&Theme::default())
    }
}

/// Resolves a generator theme against the default palette. Never fails.
pub fn resolve(theme: &Theme) -> ResolvedTheme {
    ResolvedTheme {
        primary_color: pick(&theme.primary_color, DEFAULT_PRIMARY_COLOR),
        secondary_color: pick(&theme.secondary_color, DEFAULT_SECONDARY_COLOR),
        background_color: pick(&theme.background_color, DEFAULT_BACKGROUND_COLOR),
        text_color: pick(&theme.text_color, DEFAULT_TEXT_COLOR),
        accent_color: pick(&theme.accent_color, DEFAULT_ACCENT_COLOR),
        font_family: pick(&theme.font_family, DEFAULT_FONT_FAMILY),
    }
}

fn pick(value: &Option<Value>, default: &str) -> String {
    match value.as_ref().and_then(css_token) {
        Some(token) => token.to_string(),
        None => default.to_string(),
    }
}

/// Accepts only non-empty strings that can be embedded in a CSS declaration
/// without breaking out of it. Numbers, objects, and strings carrying CSS or
/// markup metacharacters are rejected and fall back to the default.
fn css_token(value: &Value) -> Option<&str> {
    let s = value.as_str()?.trim();
    if s.is_empty() {
        return None;
    }
    let safe = s
        .chars()
        .all(|c| !c.is_control() && !matches!(c, ';' | '{' | '}' | '<' | '>' | '\\'));
    safe.then_some(s)
}

/// Generated site stylesheet with resolved theme tokens.
pub fn stylesheet(theme: &ResolvedTheme) -> String {
    format!(
        r#":root {{
  --primary-color: {primary};
  --secondary-color: {secondary};
  --background-color: {background};
  --text-color: {text};
  --accent-color: {accent};
  --font-family: {font};
}}

* {{ box-sizing: border-box; }}

body {{
  margin: 0;
  font-family: var(--font-family);
  background: var(--background-color);
  color: var(--text-color);
  line-height: 1.6;
}}

.site {{
  max-width: 820px;
  margin: 0 auto;
  padding: 2rem 1.25rem 4rem;
}}

.section {{ margin-bottom: 2.5rem; }}
.section h2 {{
  color: var(--primary-color);
  border-bottom: 2px solid var(--accent-color);
  padding-bottom: 0.25rem;
}}

.section-header h1 {{
  font-size: 2.4rem;
  margin-bottom: 0.25rem;
  color: var(--primary-color);
}}
.section-header .tagline {{
  font-size: 1.2rem;
  color: var(--secondary-color);
  margin-top: 0;
}}
.section-header .contact {{ color: var(--secondary-color); }}

.item {{ margin-bottom: 1.25rem; }}
.item h3 {{ margin-bottom: 0.1rem; }}
.item .item-meta {{
  color: var(--secondary-color);
  margin-top: 0;
  font-size: 0.95rem;
}}

.skills-list {{
  list-style: none;
  padding: 0;
  display: flex;
  flex-wrap: wrap;
  gap: 0.5rem;
}}
.skills-list .skill {{
  background: var(--primary-color);
  color: var(--background-color);
  border-radius: 999px;
  padding: 0.2rem 0.75rem;
  font-size: 0.9rem;
}}

.tech-stack {{ color: var(--accent-color); font-size: 0.9rem; }}

.section-unknown pre {{
  background: rgba(0, 0, 0, 0.05);
  padding: 1rem;
  overflow-x: auto;
  border-left: 3px solid var(--secondary-color);
}}

.empty-state {{
  text-align: center;
  color: var(--secondary-color);
  padding: 4rem 0;
}}
"#,
        primary = theme.primary_color,
        secondary = theme.secondary_color,
        background = theme.background_color,
        text = theme.text_color,
        accent = theme.accent_color,
        font = theme.font_family,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn theme_with_primary(value: Value) -> Theme {
        Theme {
            primary_color: Some(value),
            ..Default::default()
        }
    }

    #[test]
    fn test_empty_theme_resolves_to_documented_defaults() {
        let resolved = resolve(&Theme::default());
        assert_eq!(resolved.primary_color, DEFAULT_PRIMARY_COLOR);
        assert_eq!(resolved.font_family, DEFAULT_FONT_FAMILY);
        assert_eq!(resolved.background_color, DEFAULT_BACKGROUND_COLOR);
    }

    #[test]
    fn test_valid_color_is_kept() {
        let resolved = resolve(&theme_with_primary(json!("#FF8800")));
        assert_eq!(resolved.primary_color, "#FF8800");
    }

    #[test]
    fn test_non_string_value_falls_back() {
        assert_eq!(
            resolve(&theme_with_primary(json!(42))).primary_color,
            DEFAULT_PRIMARY_COLOR
        );
        assert_eq!(
            resolve(&theme_with_primary(json!(["#fff"]))).primary_color,
            DEFAULT_PRIMARY_COLOR
        );
    }

    #[test]
    fn test_empty_and_whitespace_strings_fall_back() {
        assert_eq!(
            resolve(&theme_with_primary(json!(""))).primary_color,
            DEFAULT_PRIMARY_COLOR
        );
        assert_eq!(
            resolve(&theme_with_primary(json!("   "))).primary_color,
            DEFAULT_PRIMARY_COLOR
        );
    }

    #[test]
    fn test_css_breakout_attempt_falls_back() {
        let resolved = resolve(&theme_with_primary(json!("red; } body { display: none")));
        assert_eq!(resolved.primary_color, DEFAULT_PRIMARY_COLOR);
        let resolved = resolve(&theme_with_primary(json!("</style><script>")));
        assert_eq!(resolved.primary_color, DEFAULT_PRIMARY_COLOR);
    }

    #[test]
    fn test_stylesheet_embeds_resolved_tokens() {
        let resolved = resolve(&theme_with_primary(json!("#123456")));
        let css = stylesheet(&resolved);
        assert!(css.contains("--primary-color: #123456;"));
        assert!(css.contains(&format!("--accent-color: {DEFAULT_ACCENT_COLOR};")));
    }
}
