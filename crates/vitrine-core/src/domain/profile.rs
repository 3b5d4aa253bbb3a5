//! The profile: the single source of truth for everything on the page.

use serde::{Deserialize, Serialize};

use super::career::{CareerStage, EducationEntry};
use super::project::Project;
use super::skill::SkillCategory;

/// Document metadata emitted into `<head>`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageMeta {
    pub title: String,
    pub description: String,
    pub language: String,
}

/// A headline statistic shown under the hero copy, e.g. "4+" / "Years of Experience".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stat {
    pub value: String,
    pub label: String,
}

/// Hero section content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hero {
    pub name: String,
    pub headline: String,
    pub summary: String,
    /// Short availability note rendered as a badge above the name,
    /// e.g. "Available for hire". Absent means no badge.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub availability: Option<String>,
    pub stats: Vec<Stat>,
    pub tech_chips: Vec<String>,
}

/// A label/value row in the about section, e.g. "Location" / "Pune, India".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Fact {
    pub label: String,
    pub value: String,
}

/// An expertise card in the about section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Expertise {
    pub title: String,
    pub description: String,
}

/// About section content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct About {
    pub paragraphs: Vec<String>,
    pub facts: Vec<Fact>,
    pub expertise: Vec<Expertise>,
}

/// A social link rendered in the contact section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocialLink {
    pub label: String,
    pub url: String,
}

/// How to reach the site owner.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactDetails {
    pub email: String,
    pub phone: String,
    pub location: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub socials: Vec<SocialLink>,
}

/// The complete content model for one rendered page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    pub meta: PageMeta,
    pub hero: Hero,
    pub about: About,
    pub skills: Vec<SkillCategory>,
    /// Flat chip list rendered under the skill categories.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub extra_skills: Vec<String>,
    pub projects: Vec<Project>,
    pub career: Vec<CareerStage>,
    pub education: Vec<EducationEntry>,
    pub contact: ContactDetails,
}

/// A single validation finding: where in the profile, and what is wrong.
///
/// Findings are advisory by default; strict mode promotes their presence
/// to a hard failure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentFinding {
    pub location: String,
    pub message: String,
}

impl std::fmt::Display for ContentFinding {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.location, self.message)
    }
}

impl Profile {
    /// Walk the whole model and report everything that would render wrong.
    ///
    /// Deserialized content bypasses the validating constructors, so the
    /// walk re-checks structural invariants (skill levels in `0..=100`,
    /// non-blank titles) as well as softer content rules. Each content
    /// section must also have at least one entry; a profile that leaves a
    /// section with nothing to render is flagged rather than silently
    /// emitting an empty shell.
    pub fn validate(&self) -> Vec<ContentFinding> {
        let mut findings = Vec::new();
        let mut push = |location: String, message: &str| {
            findings.push(ContentFinding {
                location,
                message: message.to_string(),
            });
        };

        if self.meta.title.trim().is_empty() {
            push("meta.title".into(), "page title is empty");
        }
        if self.hero.name.trim().is_empty() {
            push("hero.name".into(), "name is empty");
        }
        if self.hero.headline.trim().is_empty() {
            push("hero.headline".into(), "headline is empty");
        }
        if self.about.paragraphs.is_empty() {
            push("about.paragraphs".into(), "about section has no paragraphs");
        }

        if self.skills.is_empty() {
            push("skills".into(), "skills section has no categories");
        }
        for (ci, category) in self.skills.iter().enumerate() {
            if category.title.trim().is_empty() {
                push(format!("skills[{ci}].title"), "category title is empty");
            }
            if category.items.is_empty() {
                push(format!("skills[{ci}].items"), "category has no skills");
            }
            for (si, skill) in category.items.iter().enumerate() {
                if skill.name.trim().is_empty() {
                    push(format!("skills[{ci}].items[{si}].name"), "skill name is empty");
                }
                if skill.level > 100 {
                    push(
                        format!("skills[{ci}].items[{si}].level"),
                        "level exceeds 100",
                    );
                }
            }
        }

        if self.projects.is_empty() {
            push("projects".into(), "projects section has no entries");
        }
        for (pi, project) in self.projects.iter().enumerate() {
            if project.title.trim().is_empty() {
                push(format!("projects[{pi}].title"), "project title is empty");
            }
            if project.description.trim().is_empty() {
                push(
                    format!("projects[{pi}].description"),
                    "project description is empty",
                );
            }
            if project.tags.is_empty() {
                push(format!("projects[{pi}].tags"), "project has no tags");
            }
        }

        if self.career.is_empty() {
            push("career".into(), "experience section has no stages");
        }
        for (si, stage) in self.career.iter().enumerate() {
            if stage.role.trim().is_empty() {
                push(format!("career[{si}].role"), "role is empty");
            }
            if stage.company.trim().is_empty() {
                push(format!("career[{si}].company"), "company is empty");
            }
        }

        if self.education.is_empty() {
            push("education".into(), "education section has no entries");
        }
        for (ei, entry) in self.education.iter().enumerate() {
            if entry.degree.trim().is_empty() {
                push(format!("education[{ei}].degree"), "degree is empty");
            }
        }

        if !self.contact.email.contains('@') {
            push("contact.email".into(), "email address looks invalid");
        }

        findings
    }

    /// Validate and, under strict mode, turn any finding into an error.
    pub fn ensure_valid(
        &self,
        strict: bool,
    ) -> super::error::Result<Vec<ContentFinding>> {
        let findings = self.validate();
        if strict && !findings.is_empty() {
            return Err(super::error::VitrineError::StrictCheckFailed {
                findings: findings.len(),
            });
        }
        Ok(findings)
    }
}
