use crate::types::ExperienceKind;

/// A timeline entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Experience {
    pub id: &'static str,
    pub kind: ExperienceKind,
    /// Free-form date range, e.g. "2023 - 2024"
    pub date: &'static str,
    pub title: &'static str,
    pub organization: &'static str,
    pub description: &'static str,
    pub tags: &'static [&'static str],
}

pub static EXPERIENCE: &[Experience] = &[
    Experience {
        id: "intern-webdev",
        kind: ExperienceKind::Internship,
        date: "2024 - Present",
        title: "Web Development Intern",
        organization: "Tech Solutions Inc.",
        description: "Developing responsive web applications using modern JavaScript frameworks and contributing to open-source projects.",
        tags: &["JavaScript", "React", "Node.js", "Git"],
    },
    Experience {
        id: "freelance-frontend",
        kind: ExperienceKind::Freelance,
        date: "2023 - 2024",
        title: "Freelance Frontend Developer",
        organization: "Various Clients",
        description: "Created custom websites and web applications for small businesses, focusing on user experience and performance optimization.",
        tags: &["HTML", "CSS", "JavaScript", "WordPress"],
    },
    Experience {
        id: "project-lead",
        kind: ExperienceKind::Work,
        date: "2023",
        title: "Student Project Lead",
        organization: "University IT Department",
        description: "Led a team of 5 students in developing a campus event management system, coordinating development phases and ensuring project delivery.",
        tags: &["Leadership", "Project Management", "Full Stack Development"],
    },
];

/// Look up a timeline entry by id
pub fn find_experience(id: &str) -> Option<&'static Experience> {
    EXPERIENCE.iter().find(|e| e.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn each_kind_appears_once() {
        for kind in ExperienceKind::ALL {
            assert_eq!(EXPERIENCE.iter().filter(|e| e.kind == kind).count(), 1);
        }
    }

    #[test]
    fn find_by_id() {
        assert_eq!(find_experience("project-lead").map(|e| e.kind), Some(ExperienceKind::Work));
        assert!(find_experience("missing").is_none());
    }
}
