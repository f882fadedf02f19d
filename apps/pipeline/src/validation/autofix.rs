//! Validation / auto-fix loop — the one internal loop in the pipeline.
//!
//! State machine: `Checking → {Passed, Fixing → Checking, Exhausted}`.
//! An explicit attempt counter bounds the loop: each validation pass consumes
//! one attempt, and a fix call that errors or times out consumes its attempt
//! exactly like a validation failure (the current description is kept — never
//! a silent pass). Termination is guaranteed by the counter regardless of
//! what the Content Generator does.

use std::time::Duration;

use tracing::{info, warn};

use crate::generation::generator::ContentGenerator;
use crate::models::ui::UIDescription;
use crate::validation::{validate, ValidationIssue};

/// What the orchestrator does when the loop exhausts its attempts.
/// Default: proceed degraded through the fallback-tolerant renderer and
/// record a warning — the failure stays visible without killing the job.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExhaustedPolicy {
    #[default]
    DegradeAndWarn,
    Fail,
}

impl ExhaustedPolicy {
    /// Parses the policy from configuration. Unknown values fall back to the
    /// default rather than refusing to start.
    pub fn parse(value: &str) -> Self {
        match value.to_ascii_lowercase().as_str() {
            "fail" => ExhaustedPolicy::Fail,
            _ => ExhaustedPolicy::DegradeAndWarn,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LoopState {
    Checking,
    Fixing,
    Passed,
    Exhausted,
}

/// Terminal outcome of the loop. `Passed` descriptions are immutable from
/// here on; `Exhausted` carries the best-effort description and the errors
/// that remained.
#[derive(Debug)]
pub enum FixOutcome {
    Passed {
        description: UIDescription,
        attempts: u32,
    },
    Exhausted {
        description: UIDescription,
        attempts: u32,
        errors: Vec<ValidationIssue>,
    },
}

/// Runs the loop: validate, and on failure ask the generator's fix
/// capability for a corrected description, up to `max_attempts` validation
/// passes. `fix_timeout` bounds each fix call.
pub async fn validate_and_fix(
    generator: &dyn ContentGenerator,
    initial: UIDescription,
    max_attempts: u32,
    fix_timeout: Duration,
) -> FixOutcome {
    let max_attempts = max_attempts.max(1);
    let mut current = initial;
    let mut attempts = 0u32;
    let mut last_errors: Vec<ValidationIssue> = Vec::new();
    let mut state = LoopState::Checking;

    loop {
        match state {
            LoopState::Checking => {
                attempts += 1;
                let result = validate(&current);
                if result.ok {
                    state = LoopState::Passed;
                } else {
                    info!(
                        "Validation attempt {attempts}/{max_attempts}: {} error(s)",
                        result.errors.len()
                    );
                    last_errors = result.errors;
                    state = if attempts >= max_attempts {
                        LoopState::Exhausted
                    } else {
                        LoopState::Fixing
                    };
                }
            }
            LoopState::Fixing => {
                match tokio::time::timeout(fix_timeout, generator.fix(&current, &last_errors)).await
                {
                    Ok(Ok(fixed)) => current = fixed,
                    Ok(Err(e)) => {
                        // Counts against the ceiling like any failed attempt.
                        warn!("Fix call failed, keeping current description: {e}");
                    }
                    Err(_) => {
                        warn!(
                            "Fix call timed out after {}s, keeping current description",
                            fix_timeout.as_secs()
                        );
                    }
                }
                state = LoopState::Checking;
            }
            LoopState::Passed => {
                info!("Validation passed after {attempts} attempt(s)");
                return FixOutcome::Passed {
                    description: current,
                    attempts,
                };
            }
            LoopState::Exhausted => {
                warn!(
                    "Validation exhausted after {attempts} attempt(s); {} error(s) remain",
                    last_errors.len()
                );
                return FixOutcome::Exhausted {
                    description: current,
                    attempts,
                    errors: last_errors,
                };
            }
        }
    }
}
