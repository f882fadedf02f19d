//! Pipeline Orchestrator — runs the fixed stage sequence for one job:
//!
//! extract_text → structure → enhance → generate_ui → validate →
//! assemble_bundle → build_preview → deploy (when a deployer is configured)
//!
//! Every stage appends an entry to the job's stage log through the Job Store,
//! whether it succeeded or not. On a stage error the pipeline halts, marks
//! the job FAILED, and the log's last entry names the originating stage. An
//! exhausted validation loop is the one non-fatal degradation: under the
//! default policy the job continues with a warning entry and the report
//! carries `degraded = true`.

use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

use tracing::{error, info, warn};
use uuid::Uuid;

use crate::bundle::{self, BundleManifest};
use crate::deploy::Deployer;
use crate::errors::PipelineError;
use crate::extract::TextExtractor;
use crate::generation::generator::ContentGenerator;
use crate::jobstore::JobStore;
use crate::models::job::{artifact_name, JobStatus, StageLogEntry, StageOutcome};
use crate::models::ui::UIDescription;
use crate::preview::build_preview;
use crate::validation::autofix::{validate_and_fix, ExhaustedPolicy, FixOutcome};

pub struct PipelineConfig {
    pub output_root: PathBuf,
    pub max_fix_attempts: u32,
    pub fix_timeout: Duration,
    pub exhausted_policy: ExhaustedPolicy,
}

pub struct Pipeline {
    extractor: Arc<dyn TextExtractor>,
    generator: Arc<dyn ContentGenerator>,
    store: Arc<dyn JobStore>,
    deployer: Option<Arc<dyn Deployer>>,
    config: PipelineConfig,
}

/// What a completed run hands back to the caller. Artifact locations are
/// also registered with the Job Store as the run progresses.
#[derive(Debug)]
pub struct PipelineReport {
    pub job_id: Uuid,
    /// True when validation exhausted its attempts and the job proceeded
    /// through the fallback-tolerant renderer.
    pub degraded: bool,
    pub bundle: BundleManifest,
    pub ui_path: PathBuf,
    pub preview_path: PathBuf,
    pub deployed_url: Option<String>,
}

impl Pipeline {
    pub fn new(
        extractor: Arc<dyn TextExtractor>,
        generator: Arc<dyn ContentGenerator>,
        store: Arc<dyn JobStore>,
        deployer: Option<Arc<dyn Deployer>>,
        config: PipelineConfig,
    ) -> Self {
        Self {
            extractor,
            generator,
            store,
            deployer,
            config,
        }
    }

    pub async fn run(
        &self,
        job_id: Uuid,
        file: &Path,
        mime_type: &str,
    ) -> Result<PipelineReport, PipelineError> {
        info!("Job {job_id}: pipeline started for {}", file.display());
        self.store.set_status(job_id, JobStatus::Processing).await;

        match self.run_stages(job_id, file, mime_type).await {
            Ok(report) => {
                self.store.set_status(job_id, JobStatus::Completed).await;
                info!("Job {job_id}: pipeline completed");
                Ok(report)
            }
            Err(e) => {
                self.store.set_status(job_id, JobStatus::Failed).await;
                error!("Job {job_id}: pipeline failed: {e}");
                Err(e)
            }
        }
    }

    async fn run_stages(
        &self,
        job_id: Uuid,
        file: &Path,
        mime_type: &str,
    ) -> Result<PipelineReport, PipelineError> {
        let text = self
            .stage(
                job_id,
                "extract_text",
                self.extractor.extract_text(file, mime_type),
                |t| format!("{} characters extracted", t.len()),
            )
            .await?;

        let resume = self
            .stage(job_id, "structure", self.generator.structure(&text).await, |r| {
                format!(
                    "{} experience entries, {} skill groups, {} projects",
                    r.experience.len(),
                    r.skills.len(),
                    r.projects.len()
                )
            })
            .await?;

        let resume = self
            .stage(
                job_id,
                "enhance",
                self.generator.enhance(&resume).await,
                |_| "content enhanced".to_string(),
            )
            .await?;

        let ui = self
            .stage(
                job_id,
                "generate_ui",
                self.generator.generate_ui(&resume).await,
                |ui| format!("{} sections generated", ui.sections.len()),
            )
            .await?;

        let (ui, degraded) = self.validate_stage(job_id, ui).await?;

        let (ui_path, manifest) = self
            .stage(
                job_id,
                "assemble_bundle",
                self.assemble_outputs(job_id, &ui),
                |(_, m)| format!("{} files, archive {}", m.files.len(), m.archive_path.display()),
            )
            .await?;
        self.register(job_id, "ui", &ui_path.display().to_string()).await;
        self.register(job_id, "site", &manifest.site_dir.display().to_string())
            .await;
        self.register(job_id, "bundle", &manifest.archive_path.display().to_string())
            .await;

        let preview_path = self
            .stage(
                job_id,
                "build_preview",
                self.write_preview(job_id, &ui),
                |p| format!("preview at {}", p.display()),
            )
            .await?;
        self.register(job_id, "preview", &preview_path.display().to_string())
            .await;

        let deployed_url = match &self.deployer {
            Some(deployer) => {
                let url = self
                    .stage(job_id, "deploy", deployer.deploy(&manifest).await, |u| {
                        format!("deployed to {u}")
                    })
                    .await?;
                self.register(job_id, "deployment", &url).await;
                Some(url)
            }
            None => None,
        };

        Ok(PipelineReport {
            job_id,
            degraded,
            bundle: manifest,
            ui_path,
            preview_path,
            deployed_url,
        })
    }

    /// Runs the bounded validation / auto-fix loop and applies the
    /// exhaustion policy.
    async fn validate_stage(
        &self,
        job_id: Uuid,
        ui: UIDescription,
    ) -> Result<(UIDescription, bool), PipelineError> {
        let outcome = validate_and_fix(
            self.generator.as_ref(),
            ui,
            self.config.max_fix_attempts,
            self.config.fix_timeout,
        )
        .await;

        match outcome {
            FixOutcome::Passed {
                description,
                attempts,
            } => {
                self.log(
                    job_id,
                    "validate",
                    StageOutcome::Ok,
                    format!("passed after {attempts} attempt(s)"),
                )
                .await;
                Ok((description, false))
            }
            FixOutcome::Exhausted {
                description,
                attempts,
                errors,
            } => match self.config.exhausted_policy {
                ExhaustedPolicy::DegradeAndWarn => {
                    warn!(
                        "Job {job_id}: validation exhausted after {attempts} attempt(s), proceeding degraded"
                    );
                    self.log(
                        job_id,
                        "validate",
                        StageOutcome::Warning,
                        format!(
                            "exhausted after {attempts} attempt(s); {} error(s) remain, proceeding degraded",
                            errors.len()
                        ),
                    )
                    .await;
                    Ok((description, true))
                }
                ExhaustedPolicy::Fail => {
                    let e = PipelineError::ValidationExhausted { attempts };
                    self.log(job_id, "validate", StageOutcome::Error, e.to_string())
                        .await;
                    Err(e)
                }
            },
        }
    }

    /// Writes the validated description and assembles the site bundle.
    fn assemble_outputs(
        &self,
        job_id: Uuid,
        ui: &UIDescription,
    ) -> Result<(PathBuf, BundleManifest), PipelineError> {
        let manifest = bundle::assemble(ui, job_id, &self.config.output_root)?;

        let ui_path = self
            .config
            .output_root
            .join(format!("{}.json", artifact_name(job_id, "ui")));
        let json = serde_json::to_string_pretty(ui)
            .map_err(|e| PipelineError::Assembly(std::io::Error::from(e)))?;
        std::fs::write(&ui_path, json)?;

        Ok((ui_path, manifest))
    }

    fn write_preview(&self, job_id: Uuid, ui: &UIDescription) -> Result<PathBuf, PipelineError> {
        let path = self
            .config
            .output_root
            .join(format!("{}.html", artifact_name(job_id, "preview")));
        std::fs::write(&path, build_preview(ui))?;
        Ok(path)
    }

    /// Logs the stage outcome and propagates the value or error.
    async fn stage<T>(
        &self,
        job_id: Uuid,
        name: &str,
        result: Result<T, PipelineError>,
        describe: impl FnOnce(&T) -> String,
    ) -> Result<T, PipelineError> {
        match result {
            Ok(value) => {
                self.log(job_id, name, StageOutcome::Ok, describe(&value)).await;
                Ok(value)
            }
            Err(e) => {
                error!("Job {job_id}: stage {name} failed: {e}");
                self.log(job_id, name, StageOutcome::Error, e.to_string()).await;
                Err(e)
            }
        }
    }

    async fn log(&self, job_id: Uuid, stage: &str, outcome: StageOutcome, message: String) {
        self.store
            .append_stage(job_id, StageLogEntry::new(stage, outcome, message))
            .await;
    }

    async fn register(&self, job_id: Uuid, kind: &str, location: &str) {
        self.store.register_artifact(job_id, kind, location).await;
    }
}
