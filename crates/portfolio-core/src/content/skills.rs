use crate::types::SkillCategory;

/// A single skill bar
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Skill {
    pub name: &'static str,
    /// Proficiency as a percentage (0-100)
    pub level: u8,
}

/// Ordered skills of one category
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SkillGroup {
    pub category: SkillCategory,
    pub skills: &'static [Skill],
}

const fn skill(name: &'static str, level: u8) -> Skill {
    Skill { name, level }
}

pub static SKILLS: &[SkillGroup] = &[
    SkillGroup {
        category: SkillCategory::Frontend,
        skills: &[
            skill("HTML5 & CSS3", 90),
            skill("JavaScript (ES6+)", 85),
            skill("React.js", 80),
            skill("Vue.js", 75),
            skill("TypeScript", 70),
            skill("Responsive Design", 95),
            skill("CSS Frameworks", 85),
            skill("Web Performance", 80),
        ],
    },
    SkillGroup {
        category: SkillCategory::Backend,
        skills: &[
            skill("Node.js", 80),
            skill("Python", 85),
            skill("Java", 75),
            skill("Express.js", 80),
            skill("RESTful APIs", 85),
            skill("Database Design", 80),
            skill("MongoDB", 75),
            skill("MySQL", 80),
        ],
    },
    SkillGroup {
        category: SkillCategory::Tools,
        skills: &[
            skill("Git & GitHub", 90),
            skill("VS Code", 95),
            skill("Docker", 70),
            skill("Linux/Unix", 80),
            skill("Figma", 85),
            skill("Adobe Creative Suite", 75),
            skill("Testing Tools", 75),
            skill("CI/CD", 70),
        ],
    },
];

/// Skills of a single category, empty if the category has none.
pub fn skills_for(category: SkillCategory) -> &'static [Skill] {
    SKILLS
        .iter()
        .find(|g| g.category == category)
        .map(|g| g.skills)
        .unwrap_or(&[])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_category_has_eight_skills() {
        for category in SkillCategory::ALL {
            assert_eq!(skills_for(category).len(), 8, "{category:?}");
        }
    }

    #[test]
    fn levels_are_percentages() {
        for group in SKILLS {
            for skill in group.skills {
                assert!(skill.level <= 100, "{} has level {}", skill.name, skill.level);
            }
        }
    }
}
