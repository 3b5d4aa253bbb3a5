//! The site stylesheet, embedded at compile time.

/// The stylesheet written alongside the page. Embedded so the binary is
/// self-contained and the bundle never depends on a source checkout.
pub fn stylesheet() -> &'static str {
    include_str!("../../assets/styles.css")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stylesheet_is_not_empty() {
        assert!(stylesheet().len() > 500);
    }

    #[test]
    fn test_stylesheet_covers_renderer_classes() {
        let css = stylesheet();
        for class in [
            ".site-header",
            ".nav-links",
            ".hero-badge",
            ".skill-bar-fill",
            ".project-card",
            ".timeline",
            ".contact-form",
            ".form-status",
        ] {
            assert!(css.contains(class), "stylesheet missing {class}");
        }
    }

    #[test]
    fn test_header_height_matches_scroll_offset() {
        // The fixed header must be as tall as the offset the nav subtracts.
        assert!(stylesheet().contains("height: 80px;"));
    }
}
