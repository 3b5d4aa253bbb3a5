//! Skills and the categories that group them.

use serde::{Deserialize, Serialize};

use super::error::ContentError;

/// A single named skill with a proficiency level.
///
/// `level` is a percentage in `0..=100` and doubles as the rendered width
/// of the skill bar, so the proficiency a visitor reads off the page is
/// exactly the stored value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Skill {
    pub name: String,
    pub level: u8,
}

impl Skill {
    /// Build a skill, rejecting empty names and levels above 100.
    pub fn new(name: impl Into<String>, level: u8) -> Result<Self, ContentError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(ContentError::EmptyField {
                entity: "skill",
                field: "name",
            });
        }
        if level > 100 {
            return Err(ContentError::LevelOutOfRange { name, level });
        }
        Ok(Self { name, level })
    }

    /// Width of the rendered proficiency bar, as a CSS percentage.
    pub fn width_percent(&self) -> u8 {
        self.level
    }
}

/// A titled group of skills, rendered as one card in the skills grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillCategory {
    pub title: String,
    pub items: Vec<Skill>,
}

impl SkillCategory {
    pub fn new(title: impl Into<String>, items: Vec<Skill>) -> Self {
        Self {
            title: title.into(),
            items,
        }
    }
}
