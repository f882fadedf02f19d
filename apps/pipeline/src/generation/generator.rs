//! Content Generator — the four LLM capabilities consumed by the pipeline:
//! `structure`, `enhance`, `generate_ui`, `fix`.
//!
//! The trait is the seam the orchestrator and the auto-fix loop depend on;
//! tests substitute scripted implementations. `structure`, `enhance`, and
//! `generate_ui` failures are pipeline-fatal. Only `fix` participates in the
//! bounded auto-fix loop, which does its own attempt accounting.

use async_trait::async_trait;
use tracing::info;

use crate::errors::PipelineError;
use crate::generation::prompts::{
    ENHANCE_PROMPT_TEMPLATE, ENHANCE_SYSTEM, FIX_PROMPT_TEMPLATE, FIX_SYSTEM,
    STRUCTURE_PROMPT_TEMPLATE, STRUCTURE_SYSTEM, UI_PROMPT_TEMPLATE, UI_SYSTEM,
};
use crate::llm_client::prompts::FACTUAL_INSTRUCTION;
use crate::llm_client::LlmClient;
use crate::models::resume::StructuredResume;
use crate::models::ui::UIDescription;
use crate::validation::ValidationIssue;

#[async_trait]
pub trait ContentGenerator: Send + Sync {
    /// Raw extracted text → structured resume.
    async fn structure(&self, text: &str) -> Result<StructuredResume, PipelineError>;

    /// Structured resume → same schema with polished content.
    async fn enhance(&self, resume: &StructuredResume) -> Result<StructuredResume, PipelineError>;

    /// Structured resume → UI description (theme + ordered sections).
    async fn generate_ui(&self, resume: &StructuredResume) -> Result<UIDescription, PipelineError>;

    /// Structurally invalid UI description + ordered errors → corrected
    /// description.
    async fn fix(
        &self,
        ui: &UIDescription,
        errors: &[ValidationIssue],
    ) -> Result<UIDescription, PipelineError>;
}

/// Production implementation over the shared LLM client.
#[derive(Clone)]
pub struct LlmContentGenerator {
    llm: LlmClient,
}

impl LlmContentGenerator {
    pub fn new(llm: LlmClient) -> Self {
        Self { llm }
    }

    fn to_json<T: serde::Serialize>(value: &T, what: &str) -> Result<String, PipelineError> {
        serde_json::to_string_pretty(value)
            .map_err(|e| PipelineError::Generation(format!("failed to serialize {what}: {e}")))
    }
}

#[async_trait]
impl ContentGenerator for LlmContentGenerator {
    async fn structure(&self, text: &str) -> Result<StructuredResume, PipelineError> {
        let prompt = STRUCTURE_PROMPT_TEMPLATE
            .replace("{factual_instruction}", FACTUAL_INSTRUCTION)
            .replace("{resume_text}", text);

        let resume: StructuredResume = self
            .llm
            .call_json(&prompt, STRUCTURE_SYSTEM)
            .await
            .map_err(|e| PipelineError::Generation(format!("structure call failed: {e}")))?;

        if !resume.has_content() {
            return Err(PipelineError::Generation(
                "structured resume has no usable content (no name, skills, experience, or projects)"
                    .to_string(),
            ));
        }

        info!(
            "Structured resume: {} experience, {} skill groups, {} projects",
            resume.experience.len(),
            resume.skills.len(),
            resume.projects.len()
        );
        Ok(resume)
    }

    async fn enhance(&self, resume: &StructuredResume) -> Result<StructuredResume, PipelineError> {
        let prompt = ENHANCE_PROMPT_TEMPLATE
            .replace("{factual_instruction}", FACTUAL_INSTRUCTION)
            .replace("{resume_json}", &Self::to_json(resume, "resume")?);

        self.llm
            .call_json(&prompt, ENHANCE_SYSTEM)
            .await
            .map_err(|e| PipelineError::Generation(format!("enhance call failed: {e}")))
    }

    async fn generate_ui(&self, resume: &StructuredResume) -> Result<UIDescription, PipelineError> {
        let prompt = UI_PROMPT_TEMPLATE
            .replace("{factual_instruction}", FACTUAL_INSTRUCTION)
            .replace("{resume_json}", &Self::to_json(resume, "resume")?);

        let ui: UIDescription = self
            .llm
            .call_json(&prompt, UI_SYSTEM)
            .await
            .map_err(|e| PipelineError::Generation(format!("generate_ui call failed: {e}")))?;

        info!("Generated UI description with {} sections", ui.sections.len());
        Ok(ui)
    }

    async fn fix(
        &self,
        ui: &UIDescription,
        errors: &[ValidationIssue],
    ) -> Result<UIDescription, PipelineError> {
        let prompt = FIX_PROMPT_TEMPLATE
            .replace("{errors_json}", &Self::to_json(&errors, "validation errors")?)
            .replace("{ui_json}", &Self::to_json(ui, "UI description")?);

        self.llm
            .call_json(&prompt, FIX_SYSTEM)
            .await
            .map_err(|e| PipelineError::Generation(format!("fix call failed: {e}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_templates_have_their_placeholders() {
        assert!(STRUCTURE_PROMPT_TEMPLATE.contains("{resume_text}"));
        assert!(ENHANCE_PROMPT_TEMPLATE.contains("{resume_json}"));
        assert!(UI_PROMPT_TEMPLATE.contains("{resume_json}"));
        assert!(FIX_PROMPT_TEMPLATE.contains("{ui_json}"));
        assert!(FIX_PROMPT_TEMPLATE.contains("{errors_json}"));
    }

    #[test]
    fn test_fix_prompt_embeds_errors_before_description() {
        // The model reads top-down; errors first keeps the repair targeted.
        let errors_at = FIX_PROMPT_TEMPLATE.find("{errors_json}").unwrap();
        let ui_at = FIX_PROMPT_TEMPLATE.find("{ui_json}").unwrap();
        assert!(errors_at < ui_at);
    }
}
