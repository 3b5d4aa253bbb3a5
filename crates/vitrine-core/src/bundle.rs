//! Bundle assembly and writing.
//!
//! A [`SiteBundle`] is the complete file set for one build, staged in
//! memory in a fixed order: the page, the stylesheet, the script, then
//! any copied assets sorted by name. Writing emits the files plus a
//! `manifest.json` listing every file with its byte length and SHA-256
//! digest; because rendering is deterministic, unchanged inputs produce
//! an identical manifest.

use std::path::{Path, PathBuf};
use std::time::Instant;

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use crate::config::SiteConfig;
use crate::domain::error::{Result, VitrineError};
use crate::domain::{ContentFinding, Profile};
use crate::obs;
use crate::render::{
    render_page, render_script, stylesheet, RenderContext, PAGE_FILE, RESUME_FILE, SCRIPT_FILE,
    STYLESHEET_FILE,
};

/// Name of the manifest written alongside the bundle files.
pub const MANIFEST_FILE: &str = "manifest.json";

fn sha256_hex(data: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(data);
    hex::encode(hasher.finalize())
}

/// One file staged for writing, named relative to the output directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StagedFile {
    pub name: String,
    pub contents: Vec<u8>,
}

/// One manifest row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManifestEntry {
    pub name: String,
    pub bytes: u64,
    pub sha256: String,
}

/// The persisted manifest. Lists every bundle file except itself.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BundleManifest {
    pub generator: String,
    pub files: Vec<ManifestEntry>,
}

/// Summary of one completed write, for logs and the CLI.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BundleReport {
    pub build_id: String,
    pub output_dir: PathBuf,
    pub files: usize,
    pub bytes: u64,
    pub duration_ms: u64,
}

/// The in-memory file set for one build.
#[derive(Debug, Clone)]
pub struct SiteBundle {
    files: Vec<StagedFile>,
}

impl SiteBundle {
    /// Render the site and stage every output file.
    ///
    /// Assets are copied byte-for-byte from the top level of `assets_dir`,
    /// sorted by file name; an asset clashing with a generated file name
    /// is skipped (the generated file wins). A missing resume document is
    /// only a warning, but the hero's download link will 404 without it.
    pub fn stage(
        profile: &Profile,
        ctx: &RenderContext,
        assets_dir: Option<&Path>,
    ) -> Result<Self> {
        let mut files = vec![
            StagedFile {
                name: PAGE_FILE.to_string(),
                contents: render_page(profile, ctx).into_bytes(),
            },
            StagedFile {
                name: STYLESHEET_FILE.to_string(),
                contents: stylesheet().as_bytes().to_vec(),
            },
            StagedFile {
                name: SCRIPT_FILE.to_string(),
                contents: render_script().into_bytes(),
            },
        ];

        if let Some(dir) = assets_dir {
            if !dir.is_dir() {
                return Err(VitrineError::AssetNotFound(dir.to_path_buf()));
            }
            let mut asset_paths: Vec<PathBuf> = std::fs::read_dir(dir)?
                .collect::<std::io::Result<Vec<_>>>()?
                .into_iter()
                .map(|entry| entry.path())
                .filter(|path| path.is_file())
                .collect();
            asset_paths.sort();
            for path in asset_paths {
                let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
                    continue;
                };
                if files.iter().any(|f| f.name == name) {
                    tracing::warn!(asset = %name, "asset clashes with a generated file, skipping");
                    continue;
                }
                files.push(StagedFile {
                    name: name.to_string(),
                    contents: std::fs::read(&path)?,
                });
            }
        }

        if !files.iter().any(|f| f.name == RESUME_FILE) {
            tracing::warn!(
                file = RESUME_FILE,
                "no resume asset staged; the download link will not resolve"
            );
        }

        Ok(Self { files })
    }

    pub fn files(&self) -> &[StagedFile] {
        &self.files
    }

    /// Manifest for the staged files, in staging order.
    pub fn manifest(&self) -> BundleManifest {
        BundleManifest {
            generator: format!("vitrine {}", crate::VERSION),
            files: self
                .files
                .iter()
                .map(|file| ManifestEntry {
                    name: file.name.clone(),
                    bytes: file.contents.len() as u64,
                    sha256: sha256_hex(&file.contents),
                })
                .collect(),
        }
    }

    /// Write every staged file plus the manifest into `output_dir`,
    /// creating it as needed. Returns a report of what landed on disk.
    pub fn write(&self, output_dir: &Path) -> Result<BundleReport> {
        self.write_as(output_dir, &new_build_id())
    }

    /// [`SiteBundle::write`] under a caller-chosen build id, so the
    /// report matches an already-opened build span.
    pub fn write_as(&self, output_dir: &Path, build_id: &str) -> Result<BundleReport> {
        let started = Instant::now();
        std::fs::create_dir_all(output_dir)?;

        let mut bytes: u64 = 0;
        for file in &self.files {
            std::fs::write(output_dir.join(&file.name), &file.contents)?;
            obs::emit_artifact_written(&file.name, file.contents.len());
            bytes += file.contents.len() as u64;
        }

        let manifest = serde_json::to_vec_pretty(&self.manifest())?;
        std::fs::write(output_dir.join(MANIFEST_FILE), &manifest)?;
        obs::emit_artifact_written(MANIFEST_FILE, manifest.len());
        bytes += manifest.len() as u64;

        Ok(BundleReport {
            build_id: build_id.to_string(),
            output_dir: output_dir.to_path_buf(),
            files: self.files.len() + 1,
            bytes,
            duration_ms: started.elapsed().as_millis() as u64,
        })
    }
}

fn new_build_id() -> String {
    let id = uuid::Uuid::new_v4().to_string();
    format!("b-{}", &id[..8])
}

/// Outcome of a full build: the write report plus any content findings
/// that were logged as warnings.
#[derive(Debug, Clone, Serialize)]
pub struct BuildOutcome {
    pub report: BundleReport,
    pub findings: Vec<ContentFinding>,
}

/// Run one complete build from a config: resolve the profile, check it,
/// stage, and write.
///
/// Under `strict` any content finding aborts before rendering; otherwise
/// findings are logged and the build proceeds.
pub fn build_site(config: &SiteConfig, fallback_year: i32) -> Result<BuildOutcome> {
    let build_id = new_build_id();
    let _span = obs::BuildSpan::enter(&build_id);
    obs::emit_build_started(
        &build_id,
        &config.output_dir.display().to_string(),
        config.strict,
    );
    let started = Instant::now();

    let profile = config.resolve_profile()?;
    let findings = profile.ensure_valid(config.strict)?;
    for finding in &findings {
        tracing::warn!(location = %finding.location, "{}", finding.message);
    }

    let ctx = config.render_context(fallback_year);
    let bundle = SiteBundle::stage(&profile, &ctx, config.assets_dir.as_deref())?;
    let mut report = bundle.write_as(&config.output_dir, &build_id)?;
    report.duration_ms = started.elapsed().as_millis() as u64;

    obs::emit_build_finished(&build_id, report.duration_ms, report.files, report.bytes);
    Ok(BuildOutcome { report, findings })
}

/// Delete a previously written bundle directory.
///
/// Returns `false` when the directory does not exist. Refuses to delete
/// a non-empty directory that carries neither a page nor a manifest, so
/// a mistyped `output_dir` cannot take out an unrelated tree.
pub fn clean_output(dir: &Path) -> Result<bool> {
    if !dir.exists() {
        return Ok(false);
    }
    let looks_generated = dir.join(PAGE_FILE).exists() || dir.join(MANIFEST_FILE).exists();
    let is_empty = std::fs::read_dir(dir)?.next().is_none();
    if !looks_generated && !is_empty {
        return Err(VitrineError::NotABundle(dir.to_path_buf()));
    }
    std::fs::remove_dir_all(dir)?;
    Ok(true)
}
