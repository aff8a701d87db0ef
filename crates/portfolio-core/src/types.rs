//! Core types for the portfolio presentation layer

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::PortfolioError;

/// Visual mode applied to the document root via `data-theme`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// Value written to `data-theme` and to the preference store
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    /// The other theme
    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn is_dark(self) -> bool {
        self == Theme::Dark
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Theme {
    type Err = PortfolioError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            other => Err(PortfolioError::InvalidTheme(other.to_string())),
        }
    }
}

/// Page sections addressable by `#id` anchors, in document order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum SectionId {
    Home,
    About,
    Skills,
    Projects,
    Experience,
    Contact,
}

impl SectionId {
    pub const ALL: [SectionId; 6] = [
        SectionId::Home,
        SectionId::About,
        SectionId::Skills,
        SectionId::Projects,
        SectionId::Experience,
        SectionId::Contact,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SectionId::Home => "home",
            SectionId::About => "about",
            SectionId::Skills => "skills",
            SectionId::Projects => "projects",
            SectionId::Experience => "experience",
            SectionId::Contact => "contact",
        }
    }

    /// Display label used by the navigation menu
    pub fn label(&self) -> &'static str {
        match self {
            SectionId::Home => "Home",
            SectionId::About => "About",
            SectionId::Skills => "Skills",
            SectionId::Projects => "Projects",
            SectionId::Experience => "Experience",
            SectionId::Contact => "Contact",
        }
    }

    /// Resolve an `href` such as `#projects` or a bare `projects`.
    pub fn from_anchor(anchor: &str) -> Option<Self> {
        let id = anchor.strip_prefix('#').unwrap_or(anchor);
        Self::ALL.into_iter().find(|s| s.as_str() == id)
    }
}

impl fmt::Display for SectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Skill groupings, each rendered into its own container.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum SkillCategory {
    Frontend,
    Backend,
    Tools,
}

impl SkillCategory {
    pub const ALL: [SkillCategory; 3] = [
        SkillCategory::Frontend,
        SkillCategory::Backend,
        SkillCategory::Tools,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SkillCategory::Frontend => "frontend",
            SkillCategory::Backend => "backend",
            SkillCategory::Tools => "tools",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            SkillCategory::Frontend => "Frontend",
            SkillCategory::Backend => "Backend",
            SkillCategory::Tools => "Tools & Technologies",
        }
    }
}

/// Type tag of a timeline entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ExperienceKind {
    Work,
    Internship,
    Freelance,
}

impl ExperienceKind {
    pub const ALL: [ExperienceKind; 3] = [
        ExperienceKind::Work,
        ExperienceKind::Internship,
        ExperienceKind::Freelance,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ExperienceKind::Work => "work",
            ExperienceKind::Internship => "internship",
            ExperienceKind::Freelance => "freelance",
        }
    }
}

/// Active filter of the experience timeline.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ExperienceFilter {
    #[default]
    All,
    Kind(ExperienceKind),
    /// A `data-filter` value naming no known type; matches nothing
    Unmatched,
}

impl ExperienceFilter {
    /// Filter buttons in the order they appear above the timeline
    pub const ALL: [ExperienceFilter; 4] = [
        ExperienceFilter::All,
        ExperienceFilter::Kind(ExperienceKind::Work),
        ExperienceFilter::Kind(ExperienceKind::Internship),
        ExperienceFilter::Kind(ExperienceKind::Freelance),
    ];

    /// Value of the button's `data-filter` attribute
    pub fn as_str(&self) -> &'static str {
        match self {
            ExperienceFilter::All => "all",
            ExperienceFilter::Kind(kind) => kind.as_str(),
            ExperienceFilter::Unmatched => "none",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ExperienceFilter::All => "All",
            ExperienceFilter::Kind(ExperienceKind::Work) => "Work",
            ExperienceFilter::Kind(ExperienceKind::Internship) => "Internships",
            ExperienceFilter::Kind(ExperienceKind::Freelance) => "Freelance",
            ExperienceFilter::Unmatched => "None",
        }
    }

    pub fn matches(&self, kind: ExperienceKind) -> bool {
        match self {
            ExperienceFilter::All => true,
            ExperienceFilter::Kind(k) => *k == kind,
            ExperienceFilter::Unmatched => false,
        }
    }

    /// Read a button's `data-filter` value. Values naming no known type
    /// become [`ExperienceFilter::Unmatched`].
    pub fn from_attribute(raw: &str) -> Self {
        raw.parse().unwrap_or(ExperienceFilter::Unmatched)
    }
}

impl FromStr for ExperienceFilter {
    type Err = PortfolioError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|f| f.as_str() == s)
            .ok_or_else(|| PortfolioError::InvalidFilter(s.to_string()))
    }
}

impl fmt::Display for ExperienceFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Input type of a contact form field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldKind {
    Text,
    Email,
    TextArea,
}

/// Fields of the contact form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum FieldName {
    Name,
    Email,
    Subject,
    Message,
}

impl FieldName {
    pub const ALL: [FieldName; 4] = [
        FieldName::Name,
        FieldName::Email,
        FieldName::Subject,
        FieldName::Message,
    ];

    /// The field's `name` attribute (also its element id)
    pub fn as_str(&self) -> &'static str {
        match self {
            FieldName::Name => "name",
            FieldName::Email => "email",
            FieldName::Subject => "subject",
            FieldName::Message => "message",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            FieldName::Name => "Name",
            FieldName::Email => "Email",
            FieldName::Subject => "Subject",
            FieldName::Message => "Message",
        }
    }

    pub fn kind(&self) -> FieldKind {
        match self {
            FieldName::Email => FieldKind::Email,
            FieldName::Message => FieldKind::TextArea,
            FieldName::Name | FieldName::Subject => FieldKind::Text,
        }
    }

    pub fn required(&self) -> bool {
        !matches!(self, FieldName::Subject)
    }

    /// Id of the element that displays this field's error
    pub fn error_id(&self) -> String {
        format!("{}-error", self.as_str())
    }
}

/// Document loading state, mirroring `document.readyState`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ReadyState {
    Loading,
    #[default]
    Ready,
}

/// What had focus when a key was pressed
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum KeyTarget {
    #[default]
    Page,
    Input,
    TextArea,
}

impl KeyTarget {
    pub fn is_text_entry(&self) -> bool {
        matches!(self, KeyTarget::Input | KeyTarget::TextArea)
    }
}
