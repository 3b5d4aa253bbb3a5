//! Page sections and their declared navigation order.

use serde::{Deserialize, Serialize};

/// The sections of the page, in the order the navigation scans them.
///
/// The order of [`Section::ALL`] is load-bearing: the scroll tracker
/// resolves ties by taking the first matching section in this order, and
/// the renderer emits the `<section>` elements and nav links in the same
/// sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Section {
    Home,
    About,
    Skills,
    Projects,
    Experience,
    Education,
    Contact,
}

impl Section {
    /// Every section, in declared order.
    pub const ALL: [Section; 7] = [
        Section::Home,
        Section::About,
        Section::Skills,
        Section::Projects,
        Section::Experience,
        Section::Education,
        Section::Contact,
    ];

    /// Stable identifier used for element ids, anchors, and config keys.
    pub fn id(&self) -> &'static str {
        match self {
            Section::Home => "home",
            Section::About => "about",
            Section::Skills => "skills",
            Section::Projects => "projects",
            Section::Experience => "experience",
            Section::Education => "education",
            Section::Contact => "contact",
        }
    }

    /// Human-readable label shown in the navigation bar.
    pub fn label(&self) -> &'static str {
        match self {
            Section::Home => "Home",
            Section::About => "About",
            Section::Skills => "Skills",
            Section::Projects => "Projects",
            Section::Experience => "Experience",
            Section::Education => "Education",
            Section::Contact => "Contact",
        }
    }

    /// Resolve a section from its stable id.
    pub fn from_id(id: &str) -> Option<Section> {
        Section::ALL.iter().copied().find(|s| s.id() == id)
    }
}

impl std::fmt::Display for Section {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.id())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_declared_order_is_stable() {
        let ids: Vec<&str> = Section::ALL.iter().map(|s| s.id()).collect();
        assert_eq!(
            ids,
            vec![
                "home",
                "about",
                "skills",
                "projects",
                "experience",
                "education",
                "contact"
            ]
        );
    }

    #[test]
    fn test_from_id_round_trips() {
        for section in Section::ALL {
            assert_eq!(Section::from_id(section.id()), Some(section));
        }
        assert_eq!(Section::from_id("blog"), None);
        assert_eq!(Section::from_id(""), None);
    }

    #[test]
    fn test_ids_are_unique() {
        let mut ids: Vec<&str> = Section::ALL.iter().map(|s| s.id()).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), Section::ALL.len());
    }

    #[test]
    fn test_serde_uses_lowercase_ids() {
        let json = serde_json::to_string(&Section::Experience).unwrap();
        assert_eq!(json, "\"experience\"");
        let back: Section = serde_json::from_str("\"contact\"").unwrap();
        assert_eq!(back, Section::Contact);
    }

    #[test]
    fn test_display_matches_id() {
        assert_eq!(Section::Home.to_string(), "home");
        assert_eq!(Section::Education.to_string(), "education");
    }
}
