// Cross-cutting prompt fragments shared by the generation prompts.
// Each service that needs LLM calls defines its own prompts.rs alongside it.

/// Common instruction appended to every content prompt.
pub const FACTUAL_INSTRUCTION: &str = "\
    CRITICAL: Use ONLY facts present in the supplied resume data. \
    Do NOT invent employers, dates, metrics, degrees, or projects. \
    If the source does not support a claim, omit it entirely. \
    Rephrasing for clarity and impact is allowed; fabrication is not.";
