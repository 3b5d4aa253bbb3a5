//! Vitrine Core Library
//!
//! Everything needed to model, check, and emit a single-page portfolio
//! site: the content model, scroll-position navigation rules, the contact
//! form machinery, the deterministic renderer, and the bundle writer.

pub mod bundle;
pub mod config;
pub mod contact;
pub mod content;
pub mod domain;
pub mod nav;
pub mod obs;
pub mod render;
pub mod telemetry;

pub use bundle::{
    build_site, clean_output, BuildOutcome, BundleManifest, BundleReport, ManifestEntry,
    SiteBundle, StagedFile, MANIFEST_FILE,
};

pub use config::{SiteConfig, CONFIG_FILE};

pub use contact::{
    ContactGateway, ContactMessage, FormSession, FormState, GatewayResult, MessageError,
    SimulatedGateway, SubmissionAck, SubmissionError, SubmissionId, SUBMIT_LATENCY_MS,
};

pub use content::builtin_profile;

pub use domain::{
    CareerStage, ContactDetails, ContentError, ContentFinding, EducationEntry, Profile, Project,
    Result, Section, Skill, SkillCategory, VitrineError,
};

pub use nav::{
    active_section, scroll_target, SectionGeometry, SectionLayout, SectionTracker,
    HEADER_OFFSET_PX, SCROLL_LOOKAHEAD_PX,
};

pub use obs::{
    emit_build_finished, emit_build_started, emit_content_checked, emit_section_changed,
    BuildSpan,
};

pub use render::{
    render_page, render_script, stylesheet, RenderContext, PAGE_FILE, RESUME_FILE, SCRIPT_FILE,
    STYLESHEET_FILE,
};

pub use telemetry::init_tracing;

/// Vitrine version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
