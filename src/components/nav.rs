//! Navigation bar pinned above the scrolling page.

use crate::theme::ColorRole;
use crate::types::{AlignItems, Attr, FlexDirection, JustifyContent};
use crate::view::{Edges, LinkTarget, Node, RevealTrigger, Role, Transform};

/// Nav entries and the section anchors they jump to, in display order.
pub const NAV_ITEMS: [(&str, &str); 4] = [
    ("About", "about"),
    ("Education", "education"),
    ("Skills", "skills"),
    ("Projects", "projects"),
];

/// The brand mark slides in from the left when the page mounts.
const BRAND_FROM: Transform = Transform {
    dx: -2,
    dy: 0,
    inflate: 0,
};

pub fn nav_bar(mark: &str) -> Node {
    let items = NAV_ITEMS
        .iter()
        .map(|(label, anchor)| nav_item(label, anchor));

    Node::boxed()
        .role(Role::NavBar)
        .direction(FlexDirection::Row)
        .justify(JustifyContent::SpaceBetween)
        .align(AlignItems::Center)
        .padding(Edges::xy(2, 1))
        .bg(ColorRole::Surface)
        .child(
            Node::text(mark)
                .role(Role::Brand)
                .fg(ColorRole::Accent)
                .attrs(Attr::BOLD)
                .shrink(0.0)
                .reveal(RevealTrigger::Mount, BRAND_FROM),
        )
        .child(
            Node::boxed()
                .direction(FlexDirection::Row)
                .wrap()
                .gap(3)
                .children(items),
        )
}

fn nav_item(label: &str, anchor: &str) -> Node {
    Node::link(label.to_uppercase(), LinkTarget::Anchor(anchor.to_string()))
        .role(Role::NavItem)
        .fg(ColorRole::Muted)
        .shrink(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nav_items_in_order() {
        let nav = nav_bar("VN.");
        let items: Vec<_> = nav.find_role(Role::NavItem);
        assert_eq!(items.len(), 4);

        let labels: Vec<_> = items.iter().filter_map(|n| n.label()).collect();
        assert_eq!(labels, ["ABOUT", "EDUCATION", "SKILLS", "PROJECTS"]);
    }

    #[test]
    fn test_brand_reveals_on_mount() {
        let nav = nav_bar("VN.");
        let brand = nav.find_role(Role::Brand)[0];
        assert_eq!(brand.label(), Some("VN."));
        assert_eq!(brand.reveal.unwrap().trigger, RevealTrigger::Mount);
    }
}
