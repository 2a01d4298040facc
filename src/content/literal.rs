//! Hard-coded page content.

use super::{
    EducationEntry, Language, Portfolio, Profile, ProjectEntry, SkillEntry, SkillLevel,
    SocialLink,
};
use crate::view::LinkTarget;

const EMAIL: &str = "vengateshnavaneethaperumal@gmail.com";

pub fn skills() -> Vec<SkillEntry> {
    vec![
        SkillEntry::new("AI Tools", SkillLevel::Experienced),
        SkillEntry::new("Adaptability", SkillLevel::Skillful),
        SkillEntry::new("Time Management", SkillLevel::Skillful),
        SkillEntry::new("Teamwork", SkillLevel::Experienced),
        SkillEntry::new("Communication", SkillLevel::Beginner),
    ]
}

pub fn projects() -> Vec<ProjectEntry> {
    vec![
        ProjectEntry {
            title: "Smart Leave – For Staffs".to_string(),
            date_range: "11/2025 – 12/2025".to_string(),
            link: "https://smartleave.vercel.app/".to_string(),
            description: "Developed an AI-powered Smart Leave application for college staff, \
                          automating the entire leave management lifecycle from request to approval."
                .to_string(),
            bullet_points: vec![
                "Integrated advanced AI algorithms to intelligently process leave requests.".to_string(),
                "Significantly reducing manual review time and improving decision-making accuracy."
                    .to_string(),
            ],
        },
        ProjectEntry {
            title: "AI Chatbot".to_string(),
            date_range: "11/2025 – 11/2025".to_string(),
            link: "https://sankaraconnect-950441171205.us-west1.run.app".to_string(),
            description: "Developed for college to enhance the students and parents to get the \
                          details about the college."
                .to_string(),
            bullet_points: vec![
                "User-friendly interface with voice assistance and automations.".to_string(),
                "Supports both Tamil and English languages.".to_string(),
            ],
        },
    ]
}

pub fn education() -> Vec<EducationEntry> {
    vec![
        EducationEntry {
            institution: "Sankara College of Science and Commerce".to_string(),
            location: "Coimbatore".to_string(),
            degree: "Bachelor of Computer Science with Data Analytics".to_string(),
            period: "07/2024 – Present".to_string(),
            grade: None,
        },
        EducationEntry {
            institution: "Union Education Hr. Sec School".to_string(),
            location: "Madurai".to_string(),
            degree: "HSC".to_string(),
            period: "06/2023 – 04/2024".to_string(),
            grade: Some("Percentage: 61".to_string()),
        },
        EducationEntry {
            institution: "Union Education Hr. Sec School".to_string(),
            location: "Madurai".to_string(),
            degree: "SSLC".to_string(),
            period: "06/2021 – 04/2022".to_string(),
            grade: Some("Percentage: 57.2".to_string()),
        },
    ]
}

pub fn profile() -> Profile {
    Profile {
        name: "Vengateshwaran".to_string(),
        name_highlight: "N".to_string(),
        mark: "VN.".to_string(),
        tagline: "AVAILABLE FOR COLLABORATION".to_string(),
        location: "Madurai, India".to_string(),
        email: EMAIL.to_string(),
        phone: "9342085829".to_string(),
        summary: "Adaptable and fast-learning individual with strong active listening and \
                  decision-making skills. Creative in design and editing, with a problem-solving \
                  approach aimed at achieving academic success and meaningful collaboration."
            .to_string(),
        languages: vec![
            Language {
                name: "Tamil".to_string(),
                proficiency: "Native".to_string(),
            },
            Language {
                name: "English".to_string(),
                proficiency: "Working".to_string(),
            },
        ],
        role: "College Student & AI Developer".to_string(),
        closing_line: "Let's build something together.".to_string(),
        copyright: "© 2026 VENGATESHWARAN N".to_string(),
        social: vec![
            SocialLink {
                icon: "github",
                label: "GitHub".to_string(),
                target: LinkTarget::Placeholder,
            },
            SocialLink {
                icon: "linkedin",
                label: "LinkedIn".to_string(),
                target: LinkTarget::Placeholder,
            },
            SocialLink {
                icon: "mail",
                label: "Mail".to_string(),
                target: LinkTarget::Mail(EMAIL.to_string()),
            },
        ],
    }
}

/// All literal content in one value.
pub fn portfolio() -> Portfolio {
    Portfolio {
        profile: profile(),
        skills: skills(),
        projects: projects(),
        education: education(),
    }
}
