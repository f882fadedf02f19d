use anyhow::{Context, Result};
use std::path::PathBuf;

use crate::validation::autofix::ExhaustedPolicy;

/// Application configuration loaded from environment variables.
/// Fails at startup if required variables are missing.
#[derive(Debug, Clone)]
pub struct Config {
    pub anthropic_api_key: String,
    pub output_root: PathBuf,
    pub max_fix_attempts: u32,
    pub fix_timeout_secs: u64,
    pub llm_timeout_secs: u64,
    pub exhausted_policy: ExhaustedPolicy,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            anthropic_api_key: require_env("ANTHROPIC_API_KEY")?,
            output_root: PathBuf::from(
                std::env::var("OUTPUT_ROOT").unwrap_or_else(|_| "output".to_string()),
            ),
            max_fix_attempts: std::env::var("MAX_FIX_ATTEMPTS")
                .unwrap_or_else(|_| "3".to_string())
                .parse::<u32>()
                .context("MAX_FIX_ATTEMPTS must be a positive integer")?,
            fix_timeout_secs: std::env::var("FIX_TIMEOUT_SECS")
                .unwrap_or_else(|_| "60".to_string())
                .parse::<u64>()
                .context("FIX_TIMEOUT_SECS must be a number of seconds")?,
            llm_timeout_secs: std::env::var("LLM_TIMEOUT_SECS")
                .unwrap_or_else(|_| "120".to_string())
                .parse::<u64>()
                .context("LLM_TIMEOUT_SECS must be a number of seconds")?,
            exhausted_policy: ExhaustedPolicy::parse(
                &std::env::var("EXHAUSTED_POLICY").unwrap_or_default(),
            ),
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}

fn require_env(key: &str) -> Result<String> {
    std::env::var(key).with_context(|| format!("Required environment variable '{key}' is not set"))
}
