//! Domain model: sections, content types, and the error taxonomy.

pub mod career;
pub mod error;
pub mod profile;
pub mod project;
pub mod section;
pub mod skill;

pub use career::{CareerStage, EducationEntry, Metric};
pub use error::{ContentError, Result, VitrineError};
pub use profile::{
    About, ContactDetails, ContentFinding, Expertise, Fact, Hero, PageMeta, Profile, SocialLink,
    Stat,
};
pub use project::Project;
pub use section::Section;
pub use skill::{Skill, SkillCategory};
