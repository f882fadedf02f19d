//! Job status, stage log, and artifact naming shared with the Job Store.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum JobStatus {
    Pending,
    Processing,
    Completed,
    Failed,
}

/// Outcome of a single pipeline stage. `Warning` marks degraded-but-continuing
/// outcomes (an exhausted auto-fix loop) so they stay distinguishable from
/// hard failures in the log.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StageOutcome {
    Ok,
    Warning,
    Error,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StageLogEntry {
    pub stage: String,
    pub timestamp: DateTime<Utc>,
    pub outcome: StageOutcome,
    pub message: String,
}

impl StageLogEntry {
    pub fn new(stage: &str, outcome: StageOutcome, message: impl Into<String>) -> Self {
        Self {
            stage: stage.to_string(),
            timestamp: Utc::now(),
            outcome,
            message: message.into(),
        }
    }
}

/// Deterministic artifact naming: `{job_id}_{kind}`. Repeated runs of the
/// same job produce the same names, so artifacts are traceable and
/// overwritable rather than accumulating.
pub fn artifact_name(job_id: Uuid, kind: &str) -> String {
    format!("{job_id}_{kind}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_artifact_name_is_stable() {
        let id = Uuid::new_v4();
        assert_eq!(artifact_name(id, "bundle"), artifact_name(id, "bundle"));
        assert_eq!(artifact_name(id, "preview"), format!("{id}_preview"));
    }

    #[test]
    fn test_job_status_wire_format() {
        assert_eq!(
            serde_json::to_string(&JobStatus::Processing).unwrap(),
            r#""PROCESSING""#
        );
        let status: JobStatus = serde_json::from_str(r#""FAILED""#).unwrap();
        assert_eq!(status, JobStatus::Failed);
    }

    #[test]
    fn test_stage_log_entry_carries_outcome() {
        let entry = StageLogEntry::new("extract_text", StageOutcome::Ok, "1243 chars");
        assert_eq!(entry.stage, "extract_text");
        assert_eq!(entry.outcome, StageOutcome::Ok);
    }
}
