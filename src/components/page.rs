//! The whole page.
//!
//! The root has exactly two children: the nav bar (pinned, never scrolls)
//! and the body, which holds every section in document order. Section order
//! fixes both anchor order and paint order.

use crate::content::Portfolio;
use crate::theme::ColorRole;
use crate::view::{Edges, Node};

use super::footer::footer;
use super::hero::hero;
use super::lists::{education_timeline, project_list, skills_grid};
use super::nav::nav_bar;
use super::section::section;
use super::summary::summary;

/// Document index of the nav bar.
pub const NAV_INDEX: usize = 1;

pub fn page(portfolio: &Portfolio) -> Node {
    let profile = &portfolio.profile;

    let body = Node::boxed()
        .padding(Edges::xy(3, 0))
        .child(hero(profile))
        .child(summary(profile))
        .child(section(
            "education",
            "Education",
            [education_timeline(&portfolio.education)],
        ))
        .child(section("skills", "Expertise", [skills_grid(&portfolio.skills)]))
        .child(section(
            "projects",
            "Selected Works",
            [project_list(&portfolio.projects)],
        ))
        .child(footer(profile));

    Node::boxed()
        .bg(ColorRole::Background)
        .child(nav_bar(&profile.mark))
        .child(body)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content;
    use crate::view::Role;

    #[test]
    fn test_section_order() {
        let root = page(&content::portfolio());
        let anchors: Vec<_> = root
            .find_role(Role::Section)
            .into_iter()
            .filter_map(|n| n.anchor.as_deref())
            .collect();
        assert_eq!(anchors, ["about", "education", "skills", "projects"]);
        assert_eq!(root.walk()[NAV_INDEX].role, Role::NavBar);
    }
}
