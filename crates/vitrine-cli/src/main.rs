//! Vitrine - portfolio site generator CLI
//!
//! The `vitrine` command renders the typed portfolio content model into a
//! fully static asset bundle.
//!
//! ## Commands
//!
//! - `build`: Render the site bundle into the output directory
//! - `check`: Validate profile content without writing any files
//! - `clean`: Remove a previously generated output directory
//! - `submit`: Dry-run a contact-form submission against the simulated gateway

use anyhow::{Context, Result};
use chrono::{Datelike, Utc};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{info, Level};

use vitrine_core::{
    build_site, clean_output, emit_content_checked, ContactMessage, FormSession, SimulatedGateway,
    SiteConfig, CONFIG_FILE, SUBMIT_LATENCY_MS,
};

#[derive(Parser)]
#[command(name = "vitrine")]
#[command(author = "Ananya Deshmukh")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Single-page portfolio site generator", long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Emit JSON-formatted log lines
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render the site bundle into the output directory
    Build {
        /// Path to the site configuration file
        #[arg(short, long, default_value = CONFIG_FILE)]
        config: PathBuf,

        /// Override the configured output directory
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Fail instead of warn when content checks find problems
        #[arg(long)]
        strict: bool,
    },

    /// Validate profile content without writing any files
    Check {
        /// Path to the site configuration file
        #[arg(short, long, default_value = CONFIG_FILE)]
        config: PathBuf,

        /// Exit non-zero when findings are present
        #[arg(long)]
        strict: bool,
    },

    /// Remove a previously generated output directory
    Clean {
        /// Path to the site configuration file
        #[arg(short, long, default_value = CONFIG_FILE)]
        config: PathBuf,
    },

    /// Dry-run a contact-form submission against the simulated gateway
    Submit {
        /// Sender name
        #[arg(long)]
        name: String,

        /// Sender email address
        #[arg(long)]
        email: String,

        /// Message subject
        #[arg(long)]
        subject: String,

        /// Message body
        #[arg(long)]
        body: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Setup logging
    let level = if cli.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };
    vitrine_core::init_tracing(cli.json, level);

    match cli.command {
        Commands::Build {
            config,
            output,
            strict,
        } => cmd_build(&config, output.as_deref(), strict),
        Commands::Check { config, strict } => cmd_check(&config, strict),
        Commands::Clean { config } => cmd_clean(&config),
        Commands::Submit {
            name,
            email,
            subject,
            body,
        } => cmd_submit(&name, &email, &subject, &body).await,
    }
}

/// Render the site bundle into the output directory
fn cmd_build(config_path: &Path, output: Option<&Path>, strict: bool) -> Result<()> {
    let mut config = SiteConfig::load_or_default(config_path)
        .with_context(|| format!("failed to load configuration from {:?}", config_path))?;
    if let Some(dir) = output {
        config.output_dir = dir.to_path_buf();
    }
    if strict {
        config.strict = true;
    }

    info!("building site into {:?}", config.output_dir);
    let outcome = build_site(&config, Utc::now().year())?;

    for finding in &outcome.findings {
        println!("warning: {}", finding);
    }
    println!("Build:    {}", outcome.report.build_id);
    println!("Output:   {}", outcome.report.output_dir.display());
    println!("Files:    {}", outcome.report.files);
    println!("Bytes:    {}", outcome.report.bytes);
    println!("Duration: {}ms", outcome.report.duration_ms);

    Ok(())
}

/// Validate profile content without writing any files
fn cmd_check(config_path: &Path, strict: bool) -> Result<()> {
    let config = SiteConfig::load_or_default(config_path)
        .with_context(|| format!("failed to load configuration from {:?}", config_path))?;
    let profile = config.resolve_profile()?;

    let findings = profile.validate();
    emit_content_checked(findings.len(), findings.is_empty());

    if findings.is_empty() {
        println!("Content check passed");
        return Ok(());
    }

    println!("Findings: {}", findings.len());
    for finding in &findings {
        println!("  - {}", finding);
    }

    if strict || config.strict {
        anyhow::bail!("content check failed with {} finding(s)", findings.len());
    }
    Ok(())
}

/// Remove a previously generated output directory
fn cmd_clean(config_path: &Path) -> Result<()> {
    let config = SiteConfig::load_or_default(config_path)
        .with_context(|| format!("failed to load configuration from {:?}", config_path))?;

    let removed = clean_output(&config.output_dir)
        .with_context(|| format!("failed to clean {:?}", config.output_dir))?;

    if removed {
        println!("Removed {}", config.output_dir.display());
    } else {
        println!("Nothing to clean at {}", config.output_dir.display());
    }
    Ok(())
}

/// Drive one contact-form submission through the simulated gateway
async fn cmd_submit(name: &str, email: &str, subject: &str, body: &str) -> Result<()> {
    let message = ContactMessage::new(name, email, subject, body);
    let mut session = FormSession::new(Arc::new(SimulatedGateway::new()));

    println!("Submitting ({}ms simulated latency)...", SUBMIT_LATENCY_MS);
    match session.submit(message).await {
        Ok(ack) => {
            println!("Accepted: {}", ack.id);
            println!("Received: {}", ack.received_at);
            Ok(())
        }
        Err(err) => anyhow::bail!("submission rejected: {err}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vitrine_core::builtin_profile;

    fn write_config(dir: &Path, out_dir: &Path) -> PathBuf {
        let config_path = dir.join("vitrine.toml");
        std::fs::write(
            &config_path,
            format!("output_dir = \"{}\"\n", out_dir.display()),
        )
        .unwrap();
        config_path
    }

    /// Config whose profile override carries a skill level outside [0, 100].
    fn write_config_with_broken_profile(dir: &Path, out_dir: &Path) -> PathBuf {
        let mut profile = serde_json::to_value(builtin_profile()).unwrap();
        profile["skills"][0]["items"][0]["level"] = serde_json::json!(250);
        let profile_path = dir.join("profile.json");
        std::fs::write(&profile_path, serde_json::to_vec(&profile).unwrap()).unwrap();

        let config_path = dir.join("vitrine.toml");
        std::fs::write(
            &config_path,
            format!(
                "output_dir = \"{}\"\nprofile = \"{}\"\n",
                out_dir.display(),
                profile_path.display()
            ),
        )
        .unwrap();
        config_path
    }

    #[test]
    fn test_cmd_build_writes_bundle() {
        let dir = tempfile::tempdir().unwrap();
        let out_dir = dir.path().join("site");
        let config_path = write_config(dir.path(), &out_dir);

        cmd_build(&config_path, None, false).unwrap();

        assert!(out_dir.join("index.html").exists());
        assert!(out_dir.join("styles.css").exists());
        assert!(out_dir.join("site.js").exists());
        assert!(out_dir.join("manifest.json").exists());
    }

    #[test]
    fn test_cmd_build_output_flag_overrides_config() {
        let dir = tempfile::tempdir().unwrap();
        let configured = dir.path().join("site");
        let overridden = dir.path().join("elsewhere");
        let config_path = write_config(dir.path(), &configured);

        cmd_build(&config_path, Some(&overridden), false).unwrap();

        assert!(overridden.join("index.html").exists());
        assert!(!configured.exists());
    }

    #[test]
    fn test_cmd_build_strict_rejects_broken_profile() {
        let dir = tempfile::tempdir().unwrap();
        let out_dir = dir.path().join("site");
        let config_path = write_config_with_broken_profile(dir.path(), &out_dir);

        let result = cmd_build(&config_path, None, true);

        assert!(result.is_err());
        assert!(!out_dir.exists(), "strict build must not write anything");
    }

    #[test]
    fn test_cmd_build_lenient_warns_but_writes() {
        let dir = tempfile::tempdir().unwrap();
        let out_dir = dir.path().join("site");
        let config_path = write_config_with_broken_profile(dir.path(), &out_dir);

        cmd_build(&config_path, None, false).unwrap();

        assert!(out_dir.join("index.html").exists());
    }

    #[test]
    fn test_cmd_check_passes_on_builtin_profile() {
        let dir = tempfile::tempdir().unwrap();
        // No file on disk: defaults plus the builtin profile.
        let config_path = dir.path().join("vitrine.toml");

        cmd_check(&config_path, true).unwrap();
    }

    #[test]
    fn test_cmd_check_strict_fails_on_findings() {
        let dir = tempfile::tempdir().unwrap();
        let out_dir = dir.path().join("site");
        let config_path = write_config_with_broken_profile(dir.path(), &out_dir);

        assert!(cmd_check(&config_path, true).is_err());
        assert!(cmd_check(&config_path, false).is_ok());
    }

    #[test]
    fn test_cmd_clean_removes_built_output() {
        let dir = tempfile::tempdir().unwrap();
        let out_dir = dir.path().join("site");
        let config_path = write_config(dir.path(), &out_dir);

        cmd_build(&config_path, None, false).unwrap();
        cmd_clean(&config_path).unwrap();
        assert!(!out_dir.exists());

        // Second clean is a no-op.
        cmd_clean(&config_path).unwrap();
    }

    #[tokio::test(start_paused = true)]
    async fn test_cmd_submit_acknowledges_valid_message() {
        let result = cmd_submit("Ada", "ada@example.com", "Hello", "Testing the form").await;
        assert!(result.is_ok());
    }

    #[tokio::test(start_paused = true)]
    async fn test_cmd_submit_rejects_invalid_email() {
        let result = cmd_submit("Ada", "not-an-email", "Hello", "Testing the form").await;
        assert!(result.is_err());
    }
}
