//! Deployer seam — hands a completed bundle to a hosting provider.
//!
//! Deployment is optional and external (Git hosting + static host in
//! production); the core only needs "consume a bundle, return a URL or a
//! `Deployment` error". The pipeline runs it as its last stage when a
//! deployer is configured.

use async_trait::async_trait;

use crate::bundle::BundleManifest;
use crate::errors::PipelineError;

#[async_trait]
pub trait Deployer: Send + Sync {
    async fn deploy(&self, manifest: &BundleManifest) -> Result<String, PipelineError>;
}
