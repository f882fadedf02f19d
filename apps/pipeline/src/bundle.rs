//! Bundle Assembler — deterministic static-site tree + archive from a
//! validated UI description.
//!
//! The file set is fixed: a project manifest with a fixed runtime dependency
//! set, a static-export config, the generated stylesheet, and one entry page
//! whose body is the ordered concatenation of all rendered sections. The
//! tree is staged in a temp directory and renamed into place only once every
//! file has been written, so a failed run leaves no partial output.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::info;
use uuid::Uuid;
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipWriter};

use crate::errors::PipelineError;
use crate::models::job::artifact_name;
use crate::models::ui::UIDescription;
use crate::render::theme::{resolve, stylesheet};
use crate::render::{page_body, page_title};

/// Fixed project manifest. The dependency set never varies with input.
const PACKAGE_JSON: &str = r#"{
  "name": "portfolio-site",
  "private": true,
  "scripts": {
    "dev": "serve .",
    "start": "serve ."
  },
  "dependencies": {
    "serve": "14.2.1"
  }
}
"#;

/// Static-export mode only — the deployed artifact needs no server runtime.
const SITE_CONFIG_JSON: &str = r#"{
  "mode": "static-export",
  "entry": "index.html"
}
"#;

#[derive(Debug, Clone, Serialize)]
pub struct BundleManifest {
    pub job_id: Uuid,
    pub site_dir: PathBuf,
    pub archive_path: PathBuf,
    /// Relative paths of every file in the site tree, in write order.
    pub files: Vec<String>,
}

/// Assembles the deployable site tree under `{output_root}/{job_id}_site`
/// and packages it as `{output_root}/{job_id}_bundle.zip`.
///
/// Deterministic: the same description and job id produce byte-equivalent
/// output. All-or-nothing: the archive is written while the tree is still
/// staged, and the site dir is renamed into place last — on any I/O failure
/// neither artifact is left behind.
pub fn assemble(
    ui: &UIDescription,
    job_id: Uuid,
    output_root: &Path,
) -> Result<BundleManifest, PipelineError> {
    fs::create_dir_all(output_root)?;

    let files = site_files(ui);

    // Stage the whole tree first; the TempDir guard removes it on any
    // early return.
    let staging = tempfile::Builder::new()
        .prefix(".site-staging-")
        .tempdir_in(output_root)?;
    for (name, contents) in &files {
        fs::write(staging.path().join(name), contents)?;
    }

    let archive_path = output_root.join(format!("{}.zip", artifact_name(job_id, "bundle")));
    write_archive(&archive_path, output_root, &files)?;

    let site_dir = output_root.join(artifact_name(job_id, "site"));
    if site_dir.exists() {
        if let Err(e) = fs::remove_dir_all(&site_dir) {
            let _ = fs::remove_file(&archive_path);
            return Err(e.into());
        }
    }
    let staged = staging.keep();
    if let Err(e) = fs::rename(&staged, &site_dir) {
        let _ = fs::remove_dir_all(&staged);
        let _ = fs::remove_file(&archive_path);
        return Err(e.into());
    }

    info!(
        "Assembled bundle for job {job_id}: {} files, archive {}",
        files.len(),
        archive_path.display()
    );

    Ok(BundleManifest {
        job_id,
        site_dir,
        archive_path,
        files: files.into_iter().map(|(name, _)| name).collect(),
    })
}

/// The complete file set of the site tree, in fixed order.
fn site_files(ui: &UIDescription) -> Vec<(String, String)> {
    let theme = resolve(&ui.theme);
    vec![
        ("package.json".to_string(), PACKAGE_JSON.to_string()),
        ("site.config.json".to_string(), SITE_CONFIG_JSON.to_string()),
        ("styles.css".to_string(), stylesheet(&theme)),
        ("index.html".to_string(), entry_page(ui)),
    ]
}

/// Entry page linking the generated stylesheet (the preview inlines it
/// instead; everything else is identical).
fn entry_page(ui: &UIDescription) -> String {
    format!(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n<title>{title}</title>\n<link rel=\"stylesheet\" href=\"styles.css\">\n</head>\n<body>\n<main class=\"site\">\n{body}</main>\n</body>\n</html>\n",
        title = page_title(ui),
        body = page_body(ui),
    )
}

/// Writes the archive atomically: into a temp file first, persisted to the
/// final name only after `finish` succeeds.
fn write_archive(
    archive_path: &Path,
    output_root: &Path,
    files: &[(String, String)],
) -> Result<(), PipelineError> {
    let tmp = tempfile::NamedTempFile::new_in(output_root)?;
    let mut writer = ZipWriter::new(tmp);
    let options = SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);

    for (name, contents) in files {
        writer.start_file(format!("site/{name}"), options)?;
        writer.write_all(contents.as_bytes())?;
    }

    let tmp = writer.finish()?;
    tmp.persist(archive_path).map_err(|e| e.error)?;
    Ok(())
}
