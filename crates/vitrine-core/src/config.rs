//! Site configuration loaded from `vitrine.toml`.
//!
//! Every key has a default matching the static-export posture: bundle
//! into `dist/`, same-directory asset links, findings as warnings. A
//! missing config file is not an error.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::content::builtin_profile;
use crate::domain::error::{Result, VitrineError};
use crate::domain::Profile;
use crate::render::RenderContext;

/// Default name of the config file, looked up in the working directory.
pub const CONFIG_FILE: &str = "vitrine.toml";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteConfig {
    /// Where the bundle is written.
    pub output_dir: PathBuf,
    /// Directory whose files are copied into the bundle as-is.
    pub assets_dir: Option<PathBuf>,
    /// Path prefix the bundle will be served under, e.g. "/portfolio".
    pub base_url: Option<String>,
    /// Promote content findings to hard build errors.
    pub strict: bool,
    /// External profile JSON replacing the builtin content.
    pub profile: Option<PathBuf>,
    /// Pin the footer year; unset means "year at build time".
    pub copyright_year: Option<i32>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("dist"),
            assets_dir: None,
            base_url: None,
            strict: false,
            profile: None,
            copyright_year: None,
        }
    }
}

impl SiteConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&raw)?)
    }

    /// Load `path` if it exists, fall back to defaults otherwise.
    pub fn load_or_default(path: &Path) -> Result<Self> {
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    /// The profile this site renders: the configured override file, or
    /// the builtin content.
    pub fn resolve_profile(&self) -> Result<Profile> {
        match &self.profile {
            None => Ok(builtin_profile()),
            Some(path) => {
                let raw = std::fs::read_to_string(path)?;
                serde_json::from_str(&raw).map_err(|err| VitrineError::InvalidProfile {
                    path: path.clone(),
                    reason: err.to_string(),
                })
            }
        }
    }

    /// The render context for one build. `fallback_year` is used when the
    /// config does not pin a copyright year.
    pub fn render_context(&self, fallback_year: i32) -> RenderContext {
        let ctx = RenderContext::for_year(self.copyright_year.unwrap_or(fallback_year));
        match &self.base_url {
            Some(base) => ctx.with_asset_prefix(base),
            None => ctx,
        }
    }
}
