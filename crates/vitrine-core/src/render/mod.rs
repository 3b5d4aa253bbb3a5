//! Rendering: the page document, its stylesheet, and the page script.
//!
//! Rendering is pure: the same profile and context always produce the
//! same bytes. Anything that varies run to run (the copyright year)
//! enters through [`RenderContext`] so builds stay reproducible.

pub mod html;
pub mod page;
pub mod script;
pub mod sections;
pub mod styles;

pub use page::render_page;
pub use script::render_script;
pub use styles::stylesheet;

/// File names the page links to and the bundle writes. Kept in one place
/// so the references can never drift apart.
pub const PAGE_FILE: &str = "index.html";
pub const STYLESHEET_FILE: &str = "styles.css";
pub const SCRIPT_FILE: &str = "site.js";
pub const RESUME_FILE: &str = "resume.pdf";

/// Element ids shared between the rendered markup and the page script.
pub(crate) const CONTACT_FORM_ID: &str = "contact-form";
pub(crate) const CONTACT_SUBMIT_ID: &str = "contact-submit";
pub(crate) const FORM_STATUS_ID: &str = "form-status";
pub(crate) const NAV_MENU_ID: &str = "nav-menu";
pub(crate) const NAV_TOGGLE_ID: &str = "nav-toggle";

/// Per-build inputs to the renderer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderContext {
    /// Year shown in the footer copyright line.
    pub copyright_year: i32,
    /// Prefix applied to bundle-relative URLs. Empty means same-directory
    /// links; non-empty values always end in `/`.
    pub asset_prefix: String,
}

impl RenderContext {
    pub fn for_year(copyright_year: i32) -> Self {
        Self {
            copyright_year,
            asset_prefix: String::new(),
        }
    }

    /// Serve the bundle under a sub-path, e.g. `/portfolio` on a shared
    /// host. Trailing slashes are normalised away and re-added once.
    pub fn with_asset_prefix(mut self, prefix: &str) -> Self {
        let trimmed = prefix.trim_end_matches('/');
        self.asset_prefix = if trimmed.is_empty() {
            String::new()
        } else {
            format!("{trimmed}/")
        };
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_asset_prefix_normalisation() {
        let ctx = RenderContext::for_year(2025);
        assert_eq!(ctx.asset_prefix, "");
        let ctx = RenderContext::for_year(2025).with_asset_prefix("/portfolio");
        assert_eq!(ctx.asset_prefix, "/portfolio/");
        let ctx = RenderContext::for_year(2025).with_asset_prefix("/portfolio///");
        assert_eq!(ctx.asset_prefix, "/portfolio/");
        let ctx = RenderContext::for_year(2025).with_asset_prefix("/");
        assert_eq!(ctx.asset_prefix, "");
    }
}
