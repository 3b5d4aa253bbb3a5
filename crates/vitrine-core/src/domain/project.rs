//! Portfolio project entries.

use serde::{Deserialize, Serialize};

/// A single project card: what it is, what it was built with, and when.
///
/// `demo_url` is optional; cards without one render no demo link rather
/// than a dead anchor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub title: String,
    pub description: String,
    pub tags: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub demo_url: Option<String>,
    pub period: String,
    pub team_size: String,
}

impl Project {
    pub fn has_demo(&self) -> bool {
        self.demo_url.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Project {
        Project {
            title: "Ledger Dashboard".to_string(),
            description: "Realtime spend dashboard".to_string(),
            tags: vec!["React".to_string(), "TypeScript".to_string()],
            demo_url: Some("https://example.com/demo".to_string()),
            period: "2023".to_string(),
            team_size: "Team of 3".to_string(),
        }
    }

    #[test]
    fn test_has_demo() {
        let mut project = sample();
        assert!(project.has_demo());
        project.demo_url = None;
        assert!(!project.has_demo());
    }

    #[test]
    fn test_demo_url_omitted_when_absent() {
        let mut project = sample();
        project.demo_url = None;
        let json = serde_json::to_string(&project).unwrap();
        assert!(!json.contains("demo_url"));
    }

    #[test]
    fn test_deserialize_without_demo_url() {
        let json = r#"{
            "title": "CLI Toolkit",
            "description": "Internal developer tooling",
            "tags": ["Rust"],
            "period": "2024",
            "team_size": "Solo project"
        }"#;
        let project: Project = serde_json::from_str(json).unwrap();
        assert_eq!(project.demo_url, None);
    }
}
