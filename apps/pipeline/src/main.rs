mod bundle;
mod config;
mod deploy;
mod errors;
mod extract;
mod generation;
mod jobstore;
mod llm_client;
mod models;
mod pipeline;
mod preview;
mod render;
mod validation;

use anyhow::{bail, Result};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};
use uuid::Uuid;

use crate::config::Config;
use crate::extract::{guess_mime, FileTextExtractor};
use crate::generation::generator::LlmContentGenerator;
use crate::jobstore::InMemoryJobStore;
use crate::llm_client::LlmClient;
use crate::pipeline::{Pipeline, PipelineConfig};

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on missing required env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting portfolio pipeline v{}", env!("CARGO_PKG_VERSION"));

    let mut args = std::env::args().skip(1);
    let Some(file) = args.next().map(PathBuf::from) else {
        bail!("usage: pipeline <resume-file> [mime-type]");
    };
    let mime_type = match args.next() {
        Some(explicit) => explicit,
        None => match guess_mime(&file) {
            Some(guessed) => guessed.to_string(),
            None => bail!(
                "cannot infer MIME type of {}; pass it explicitly",
                file.display()
            ),
        },
    };

    // Initialize LLM client
    let llm = LlmClient::new(
        config.anthropic_api_key.clone(),
        Duration::from_secs(config.llm_timeout_secs),
    )?;
    info!("LLM client initialized (model: {})", llm_client::MODEL);

    let store = Arc::new(InMemoryJobStore::new());
    let pipeline = Pipeline::new(
        Arc::new(FileTextExtractor),
        Arc::new(LlmContentGenerator::new(llm)),
        store.clone(),
        None, // deployment is wired in by the hosting service
        PipelineConfig {
            output_root: config.output_root.clone(),
            max_fix_attempts: config.max_fix_attempts,
            fix_timeout: Duration::from_secs(config.fix_timeout_secs),
            exhausted_policy: config.exhausted_policy,
        },
    );

    let job_id = Uuid::new_v4();
    let report = pipeline.run(job_id, &file, &mime_type).await?;

    if report.degraded {
        warn!("Job {job_id}: output is degraded (validation did not fully pass)");
    }
    if let Some(record) = store.snapshot(job_id) {
        for (kind, location) in &record.artifacts {
            info!("Artifact {kind}: {location}");
        }
    }
    info!(
        "Done. Preview: {} | Bundle: {}",
        report.preview_path.display(),
        report.bundle.archive_path.display()
    );

    Ok(())
}
