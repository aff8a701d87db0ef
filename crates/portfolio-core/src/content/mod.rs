//! Static portfolio content.
//!
//! Three read-only collections loaded at compile time: skills grouped by
//! category, project cards with their modal details, and the experience
//! timeline. Nothing here is mutated at runtime.

mod experience;
mod projects;
mod skills;

pub use experience::{find_experience, Experience, EXPERIENCE};
pub use projects::{find_project, Project, ProjectDetails, PROJECTS};
pub use skills::{skills_for, Skill, SkillGroup, SKILLS};
