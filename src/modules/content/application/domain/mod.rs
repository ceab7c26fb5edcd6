pub mod entities;
pub mod icons;
pub mod kinds;

pub use entities::{ContentKind, ContentRecord, LocalizedContent};
pub use kinds::{
    Education, EducationText, Experience, ExperienceText, Hobby, HobbyIcon, HobbyText, Project,
    ProjectText, Skill, SkillText,
};
