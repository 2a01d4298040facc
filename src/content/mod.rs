//! Content Module - the page's literal records.
//!
//! Every record is built once when the page mounts and never mutated.
//! Array index is display order; nothing here is sorted or filtered.

mod literal;

pub use literal::{education, portfolio, profile, projects, skills};

use std::fmt;

use crate::view::LinkTarget;

// =============================================================================
// SKILLS
// =============================================================================

/// Self-assessed proficiency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SkillLevel {
    Beginner,
    Skillful,
    Experienced,
}

impl SkillLevel {
    /// Label as shown on the skill card.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Beginner => "BEGINNER",
            Self::Skillful => "SKILLFUL",
            Self::Experienced => "EXPERIENCED",
        }
    }
}

impl fmt::Display for SkillLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkillEntry {
    pub name: String,
    pub level: SkillLevel,
}

impl SkillEntry {
    pub fn new(name: impl Into<String>, level: SkillLevel) -> Self {
        Self {
            name: name.into(),
            level,
        }
    }
}

// =============================================================================
// PROJECTS
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectEntry {
    pub title: String,
    pub date_range: String,
    /// Outbound link, opened in a fresh browsing context.
    pub link: String,
    pub description: String,
    pub bullet_points: Vec<String>,
}

// =============================================================================
// EDUCATION
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EducationEntry {
    pub institution: String,
    pub location: String,
    pub degree: String,
    pub period: String,
    pub grade: Option<String>,
}

// =============================================================================
// PROFILE
// =============================================================================

/// A spoken language with proficiency note.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Language {
    pub name: String,
    pub proficiency: String,
}

/// Social profile button in the footer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SocialLink {
    /// Icon name in the glyph table.
    pub icon: &'static str,
    pub label: String,
    pub target: LinkTarget,
}

/// Everything about the page owner that isn't a list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Profile {
    pub name: String,
    /// Highlighted trailing part of the name.
    pub name_highlight: String,
    /// Brand mark in the nav bar.
    pub mark: String,
    pub tagline: String,
    pub location: String,
    pub email: String,
    pub phone: String,
    pub summary: String,
    pub languages: Vec<Language>,
    pub role: String,
    pub closing_line: String,
    pub copyright: String,
    pub social: Vec<SocialLink>,
}

/// The full literal content set the page is built from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Portfolio {
    pub profile: Profile,
    pub skills: Vec<SkillEntry>,
    pub projects: Vec<ProjectEntry>,
    pub education: Vec<EducationEntry>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_skill_level_labels() {
        assert_eq!(SkillLevel::Beginner.to_string(), "BEGINNER");
        assert_eq!(SkillLevel::Experienced.label(), "EXPERIENCED");
    }

    #[test]
    fn test_literal_order_is_display_order() {
        let names: Vec<_> = skills().into_iter().map(|s| s.name).collect();
        assert_eq!(
            names,
            ["AI Tools", "Adaptability", "Time Management", "Teamwork", "Communication"]
        );

        let titles: Vec<_> = projects().into_iter().map(|p| p.title).collect();
        assert_eq!(titles, ["Smart Leave – For Staffs", "AI Chatbot"]);
    }

    #[test]
    fn test_only_school_entries_have_grades() {
        let edu = education();
        assert_eq!(edu.len(), 3);
        assert!(edu[0].grade.is_none());
        assert_eq!(edu[1].grade.as_deref(), Some("Percentage: 61"));
        assert_eq!(edu[2].grade.as_deref(), Some("Percentage: 57.2"));
    }

    #[test]
    fn test_social_links_stay_placeholders() {
        let profile = profile();
        let placeholders = profile
            .social
            .iter()
            .filter(|s| s.target == LinkTarget::Placeholder)
            .count();
        assert_eq!(placeholders, 2);
        assert!(profile
            .social
            .iter()
            .any(|s| s.target == LinkTarget::Mail(profile.email.clone())));
    }
}
