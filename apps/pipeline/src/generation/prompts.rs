// All LLM prompt constants for the content pipeline.
// Reuses cross-cutting fragments from llm_client::prompts.

/// System prompt for resume structuring — enforces JSON-only output.
pub const STRUCTURE_SYSTEM: &str =
    "You are an expert resume parser. \
    Convert raw extracted resume text into structured data. \
    You MUST respond with valid JSON only. \
    Do NOT include any text outside the JSON object. \
    Do NOT use markdown code fences. \
    Do NOT include explanations or apologies.";

/// Structuring prompt template. Replace `{resume_text}` before sending.
pub const STRUCTURE_PROMPT_TEMPLATE: &str = r#"{factual_instruction}

Parse the following resume text into a JSON object with this EXACT schema
(omit a field entirely only when the resume truly has no data for it):
{
  "name": "Ava Diaz",
  "email": "ava@example.com",
  "phone": "+1 555 0100",
  "location": "Lisbon, Portugal",
  "links": [{"label": "GitHub", "url": "https://github.com/avadiaz"}],
  "summary": "One-paragraph professional summary taken from the resume.",
  "experience": [
    {
      "title": "Staff Engineer",
      "company": "Acme",
      "period": "2021 - 2024",
      "description": "What the role was about.",
      "highlights": ["Reduced p99 latency by 40%"]
    }
  ],
  "education": [
    {"degree": "BSc Computer Science", "institution": "IST", "period": "2013 - 2017", "details": null}
  ],
  "skills": [
    {"category": "Languages", "items": ["Go", "Rust"]}
  ],
  "projects": [
    {
      "title": "Orbit",
      "description": "Distributed job scheduler.",
      "tech_stack": ["Rust", "Tokio"],
      "link": "https://github.com/avadiaz/orbit",
      "featured": true
    }
  ]
}

Resume text is OCR output and may contain noise, broken lines, and ordering
artifacts. Reconstruct the most plausible structure; never invent data to
fill gaps.

RESUME TEXT:
{resume_text}"#;

/// System prompt for content enhancement — enforces JSON-only output.
pub const ENHANCE_SYSTEM: &str =
    "You are an expert portfolio copywriter. \
    Polish structured resume data into confident, recruiter-ready content. \
    You MUST respond with valid JSON only, using the same schema you were given. \
    Do NOT include any text outside the JSON object. \
    Do NOT use markdown code fences.";

/// Enhancement prompt template. Replace `{resume_json}` before sending.
pub const ENHANCE_PROMPT_TEMPLATE: &str = r#"{factual_instruction}

Improve the following structured resume for use on a personal portfolio
website. Return the SAME JSON schema with enhanced content.

GUIDELINES:
- Professional, confident, human; action-oriented language
- No cliches ("passionate", "innovative", "results-driven")
- Tighten the summary into 2-3 strong sentences
- Make project and experience descriptions concrete and outcome-focused
- Keep every employer, date, metric, and fact exactly as provided

STRUCTURED RESUME:
{resume_json}"#;

/// System prompt for UI description generation — enforces JSON-only output.
pub const UI_SYSTEM: &str =
    "You are a portfolio site architect. \
    Turn structured resume data into a website UI description: a theme plus \
    an ordered list of typed sections. \
    You MUST respond with valid JSON only. \
    Do NOT include any text outside the JSON object. \
    Do NOT use markdown code fences.";

/// UI generation prompt template. Replace `{resume_json}` before sending.
pub const UI_PROMPT_TEMPLATE: &str = r##"{factual_instruction}

Build a UI description for a one-page portfolio site from this resume.

Return a JSON object with this EXACT shape:
{
  "theme": {
    "primary_color": "#3B82F6",
    "secondary_color": "#6B7280",
    "background_color": "#FFFFFF",
    "text_color": "#111827",
    "accent_color": "#10B981",
    "font_family": "Inter, system-ui, sans-serif"
  },
  "sections": [
    {"type": "header", "content": {"name": "...", "tagline": "...", "bio": "...", "email": "...", "location": "..."}},
    {"type": "summary", "content": {"title": "About", "text": "..."}},
    {"type": "experience", "content": {"title": "Experience", "items": [{"title": "...", "company": "...", "period": "...", "description": "...", "highlights": ["..."]}]}},
    {"type": "skills", "content": {"category": "Languages", "items": ["Go", "Rust"]}},
    {"type": "projects", "content": {"title": "Projects", "items": [{"title": "...", "description": "...", "tech_stack": ["..."], "link": null, "featured": false}]}},
    {"type": "education", "content": {"title": "Education", "items": [{"degree": "...", "institution": "...", "period": "...", "details": null}]}}
  ]
}

HARD RULES:
1. Section `type` values come from the closed set shown above — one section per type at most, except `skills`, which may repeat once per category
2. The `header` section comes first and MUST have a `name`
3. Every list-typed content MUST carry an `items` array (empty is allowed)
4. Theme values are plain CSS color strings / font stacks — pick a palette that suits the person's field
5. Order sections by strength of the resume: lead with what is most impressive

STRUCTURED RESUME:
{resume_json}"##;

/// System prompt for the auto-fix capability — enforces JSON-only output.
pub const FIX_SYSTEM: &str =
    "You are a strict JSON repair assistant for portfolio UI descriptions. \
    You receive a UI description that failed structural validation, plus the \
    ordered list of validation errors. Return a corrected UI description. \
    You MUST respond with valid JSON only. \
    Do NOT include any text outside the JSON object. \
    Do NOT use markdown code fences.";

/// Auto-fix prompt template. Replace `{ui_json}` and `{errors_json}`.
pub const FIX_PROMPT_TEMPLATE: &str = r#"The following UI description failed structural validation.

VALIDATION ERRORS (ordered, each with a JSON path):
{errors_json}

CURRENT UI DESCRIPTION:
{ui_json}

Fix ONLY what the errors describe:
- add required fields that are absent (use an empty string or empty array when the source has no better value)
- replace non-primitive theme values with plain CSS strings
- keep every other field, every section, and the section order exactly as they are

Return the complete corrected UI description as a JSON object with the same
{"theme": ..., "sections": [...]} shape."#;
