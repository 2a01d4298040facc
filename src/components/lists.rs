//! Content list renderers.
//!
//! Each renderer maps a literal slice to one row per entry, in slice order,
//! inside a plain container. An empty slice gives an empty container: no
//! placeholder row, no error.

use crate::content::{EducationEntry, ProjectEntry, SkillEntry};
use crate::theme::ColorRole;
use crate::types::{AlignItems, Attr, BorderStyle, Dimension, FlexDirection, JustifyContent};
use crate::view::{each, glyph, Edges, HoverEffect, LinkTarget, Node, Role, Transform};

/// Skill cards grow a column each side and light up under the pointer.
pub const SKILL_HOVER: HoverEffect = HoverEffect {
    transform: Transform::grow(1),
    highlight: Some(ColorRole::SurfaceHover),
    text: None,
};

/// Timeline rows slide right under the pointer.
pub const EDUCATION_HOVER: HoverEffect = HoverEffect {
    transform: Transform::shift_x(2),
    highlight: None,
    text: None,
};

const SKILL_CARD_WIDTH: u16 = 26;

// =============================================================================
// SKILLS
// =============================================================================

pub fn skills_grid(skills: &[SkillEntry]) -> Node {
    Node::boxed()
        .direction(FlexDirection::Row)
        .wrap()
        .gap(1)
        .padding(Edges::xy(1, 0))
        .children(each(skills, |_, skill| skill_card(skill)))
}

fn skill_card(skill: &SkillEntry) -> Node {
    let text = Node::boxed()
        .grow(1.0)
        .child(Node::text(&skill.name).fg(ColorRole::Bright).attrs(Attr::BOLD))
        .child(Node::text(skill.level.label()).fg(ColorRole::Dim));

    Node::boxed()
        .role(Role::SkillRow)
        .direction(FlexDirection::Row)
        .justify(JustifyContent::SpaceBetween)
        .align(AlignItems::Center)
        .width(Dimension::Cells(SKILL_CARD_WIDTH))
        .shrink(0.0)
        .border(BorderStyle::Rounded, ColorRole::Border)
        .padding(Edges::xy(1, 0))
        .bg(ColorRole::Surface)
        .hover(SKILL_HOVER)
        .child(text)
        .child(Node::icon("code").fg(ColorRole::Accent).shrink(0.0))
}

// =============================================================================
// EDUCATION
// =============================================================================

pub fn education_timeline(education: &[EducationEntry]) -> Node {
    Node::boxed()
        .gap(1)
        .children(each(education, |_, entry| education_row(entry)))
}

fn education_row(entry: &EducationEntry) -> Node {
    let header = Node::boxed()
        .direction(FlexDirection::Row)
        .wrap()
        .justify(JustifyContent::SpaceBetween)
        .gap(2)
        .child(Node::text(&entry.institution).fg(ColorRole::Bright).attrs(Attr::BOLD))
        .child(Node::text(&entry.period).fg(ColorRole::Accent).shrink(0.0));

    let mut details = Node::boxed()
        .direction(FlexDirection::Row)
        .gap(2)
        .child(super::hero::contact("map-pin", Node::text(&entry.location)));
    if let Some(grade) = &entry.grade {
        details = details.child(Node::text(grade).fg(ColorRole::Dim));
    }

    Node::boxed()
        .role(Role::EducationRow)
        .border(BorderStyle::LeftRule, ColorRole::AccentStrong)
        .padding(Edges { top: 0, right: 0, bottom: 0, left: 2 })
        .hover(EDUCATION_HOVER)
        .child(header)
        .child(Node::text(&entry.degree).fg(ColorRole::Muted))
        .child(details)
}

// =============================================================================
// PROJECTS
// =============================================================================

pub fn project_list(projects: &[ProjectEntry]) -> Node {
    Node::boxed()
        .gap(2)
        .children(each(projects, |_, project| project_row(project)))
}

fn project_row(project: &ProjectEntry) -> Node {
    let title = Node::boxed()
        .child(Node::text(&project.date_range).fg(ColorRole::AccentStrong))
        .child(
            Node::text(&project.title)
                .fg(ColorRole::Bright)
                .attrs(Attr::BOLD | Attr::ITALIC),
        );

    let view = Node::link(
        format!("VIEW PROJECT {}", glyph("external-link").unwrap_or_default()),
        LinkTarget::external(&project.link),
    )
    .fg(ColorRole::Accent)
    .attrs(Attr::BOLD)
    .shrink(0.0);

    let header = Node::boxed()
        .direction(FlexDirection::Row)
        .wrap()
        .justify(JustifyContent::SpaceBetween)
        .align(AlignItems::FlexEnd)
        .gap(2)
        .child(title)
        .child(view);

    let bullets = Node::boxed().children(each(&project.bullet_points, |_, point| bullet(point)));

    Node::boxed()
        .role(Role::ProjectRow)
        .gap(1)
        .child(header)
        .child(Node::text(&project.description).fg(ColorRole::Muted))
        .child(bullets)
}

fn bullet(point: &str) -> Node {
    Node::boxed()
        .role(Role::BulletPoint)
        .direction(FlexDirection::Row)
        .gap(1)
        .child(Node::icon("chevron-right").fg(ColorRole::AccentStrong).shrink(0.0))
        .child(Node::text(point).fg(ColorRole::Text).shrink(1.0))
}
