//! Job Store seam — status transitions, stage-log appends, and artifact
//! registration.
//!
//! The core only ever appends; it never reads job history back. Persistence
//! (database, queue, API) lives behind this trait in the hosting service.
//! `InMemoryJobStore` backs the CLI binary and the tests.

use std::collections::{BTreeMap, HashMap};
use std::sync::Mutex;

use async_trait::async_trait;
use uuid::Uuid;

use crate::models::job::{JobStatus, StageLogEntry};

#[async_trait]
pub trait JobStore: Send + Sync {
    async fn set_status(&self, job_id: Uuid, status: JobStatus);
    async fn append_stage(&self, job_id: Uuid, entry: StageLogEntry);
    async fn register_artifact(&self, job_id: Uuid, kind: &str, location: &str);
}

#[derive(Debug, Clone, Default)]
pub struct JobRecord {
    pub status: Option<JobStatus>,
    pub stage_log: Vec<StageLogEntry>,
    pub artifacts: BTreeMap<String, String>,
}

#[derive(Default)]
pub struct InMemoryJobStore {
    jobs: Mutex<HashMap<Uuid, JobRecord>>,
}

impl InMemoryJobStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn snapshot(&self, job_id: Uuid) -> Option<JobRecord> {
        let jobs = self.jobs.lock().unwrap_or_else(|e| e.into_inner());
        jobs.get(&job_id).cloned()
    }

    // Recovers from a poisoned lock: the map stays structurally valid after
    // a panic mid-update, and dropping an append would break the append-only
    // contract.
    fn with_record(&self, job_id: Uuid, update: impl FnOnce(&mut JobRecord)) {
        let mut jobs = self.jobs.lock().unwrap_or_else(|e| e.into_inner());
        update(jobs.entry(job_id).or_default());
    }
}

#[async_trait]
impl JobStore for InMemoryJobStore {
    async fn set_status(&self, job_id: Uuid, status: JobStatus) {
        self.with_record(job_id, |record| record.status = Some(status));
    }

    async fn append_stage(&self, job_id: Uuid, entry: StageLogEntry) {
        self.with_record(job_id, |record| record.stage_log.push(entry));
    }

    async fn register_artifact(&self, job_id: Uuid, kind: &str, location: &str) {
        self.with_record(job_id, |record| {
            record
                .artifacts
                .insert(kind.to_string(), location.to_string());
        });
    }
}
