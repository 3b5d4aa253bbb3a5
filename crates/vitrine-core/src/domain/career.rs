//! Career history and education entries.

use serde::{Deserialize, Serialize};

/// A headline metric attached to a career stage, e.g. "40%" / "faster page loads".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Metric {
    pub value: String,
    pub description: String,
}

/// One stage of the career timeline.
///
/// `metrics` is optional content; stages without measurable outcomes
/// simply render no metric row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CareerStage {
    pub role: String,
    pub company: String,
    pub period: String,
    pub technologies: Vec<String>,
    pub achievements: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub metrics: Vec<Metric>,
    pub responsibilities: Vec<String>,
}

/// A single education entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EducationEntry {
    pub degree: String,
    pub institution: String,
    pub location: String,
    pub period: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub grade: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_metrics_default_to_empty() {
        let json = r#"{
            "role": "Frontend Engineer",
            "company": "Acme",
            "period": "2021 - 2023",
            "technologies": ["React"],
            "achievements": ["Shipped the design system"],
            "responsibilities": ["Owned the component library"]
        }"#;
        let stage: CareerStage = serde_json::from_str(json).unwrap();
        assert!(stage.metrics.is_empty());
    }

    #[test]
    fn test_empty_metrics_omitted_from_json() {
        let stage = CareerStage {
            role: "Engineer".to_string(),
            company: "Acme".to_string(),
            period: "2020".to_string(),
            technologies: vec![],
            achievements: vec![],
            metrics: vec![],
            responsibilities: vec![],
        };
        let json = serde_json::to_string(&stage).unwrap();
        assert!(!json.contains("metrics"));
    }

    #[test]
    fn test_education_grade_and_note_are_optional() {
        let json = r#"{
            "degree": "B.Sc. Computer Science",
            "institution": "Fergusson College",
            "location": "Pune, India",
            "period": "2015 - 2018"
        }"#;
        let entry: EducationEntry = serde_json::from_str(json).unwrap();
        assert_eq!(entry.grade, None);
        assert_eq!(entry.note, None);
    }
}
