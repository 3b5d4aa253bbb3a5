//! Structured observability hooks for build and page lifecycle events.
//!
//! This module provides:
//! - Build-scoped tracing spans via the `BuildSpan` RAII guard
//! - Emission functions for key events: build start/finish, artifact
//!   writes, content checks, nav changes, contact submissions
//!
//! Events are emitted at `info!` level (configurable via `VITRINE_LOG`).
//! For JSON output, pass `--json` to the CLI.

use tracing::{debug, info, warn};

use crate::domain::Section;

/// RAII guard that enters a build-scoped tracing span for the duration
/// of one site build.
///
/// # Example
///
/// ```ignore
/// let _span = BuildSpan::enter("b-20240611-0001");
/// // All tracing calls are now associated with build_id = "b-20240611-0001"
/// ```
pub struct BuildSpan {
    _span: tracing::span::EnteredSpan,
}

impl BuildSpan {
    /// Create and enter a span tagged with the build id.
    pub fn enter(build_id: &str) -> Self {
        let span = tracing::info_span!("vitrine.build", build_id = %build_id);
        Self {
            _span: span.entered(),
        }
    }
}

/// Emit event: a site build started.
pub fn emit_build_started(build_id: &str, output_dir: &str, strict: bool) {
    info!(
        event = "build.started",
        build_id = %build_id,
        output_dir = %output_dir,
        strict = strict,
    );
}

/// Emit event: a site build finished with its artifact count and total size.
pub fn emit_build_finished(build_id: &str, duration_ms: u64, files: usize, bytes: u64) {
    info!(
        event = "build.finished",
        build_id = %build_id,
        duration_ms = duration_ms,
        files = files,
        bytes = bytes,
    );
}

/// Emit event: one artifact written to the output directory.
pub fn emit_artifact_written(path: &str, bytes: usize) {
    info!(event = "build.artifact_written", path = %path, bytes = bytes);
}

/// Emit event: content check completed with its finding count.
pub fn emit_content_checked(findings: usize, passed: bool) {
    info!(event = "content.checked", findings = findings, passed = passed);
}

/// Emit event: the tracked nav section changed (debug level; this fires
/// on every boundary crossing during simulation).
pub fn emit_section_changed(from: Section, to: Section, scroll_y: f64) {
    debug!(event = "nav.section_changed", from = %from, to = %to, scroll_y = scroll_y);
}

/// Emit event: a contact submission was handed to the gateway.
pub fn emit_submission_started(attempt: u32) {
    info!(event = "contact.submission_started", attempt = attempt);
}

/// Emit event: the gateway acknowledged a submission.
pub fn emit_submission_accepted(reference: &str, latency_ms: u64) {
    info!(
        event = "contact.submission_accepted",
        reference = %reference,
        latency_ms = latency_ms,
    );
}

/// Emit event: the gateway rejected a submission (warning level).
pub fn emit_submission_failed(error: &dyn std::fmt::Display) {
    warn!(event = "contact.submission_failed", error = %error);
}
