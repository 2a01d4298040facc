//! Reusable page section: heading, rule, body, reveal-on-scroll.

use crate::state::reveal::REVEAL_OFFSET;
use crate::theme::ColorRole;
use crate::types::{AlignItems, Attr, FlexDirection};
use crate::view::{Edges, Node, RevealTrigger, Role, Transform};

/// Where a section starts before it reveals: hidden, `REVEAL_OFFSET` rows low.
pub const SECTION_REVEAL_FROM: Transform = Transform {
    dx: 0,
    dy: REVEAL_OFFSET,
    inflate: 0,
};

/// Wrap `body` in a titled section.
///
/// The section carries the anchor `id`, so in-page links resolve to it even
/// while it is still hidden. It reveals the first time it scrolls into view.
pub fn section(id: &str, title: &str, body: impl IntoIterator<Item = Node>) -> Node {
    Node::boxed()
        .role(Role::Section)
        .anchor(id)
        .padding(Edges::xy(0, 1))
        .gap(1)
        .reveal(RevealTrigger::InView, SECTION_REVEAL_FROM)
        .child(heading(title))
        .children(body)
}

fn heading(title: &str) -> Node {
    Node::boxed()
        .role(Role::SectionHeading)
        .direction(FlexDirection::Row)
        .align(AlignItems::Center)
        .gap(2)
        .child(
            Node::text(title)
                .fg(ColorRole::Bright)
                .attrs(Attr::BOLD | Attr::ITALIC)
                .shrink(0.0),
        )
        .child(Node::divider().fg(ColorRole::AccentStrong))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_section_shape() {
        let node = section("about", "Summary", [Node::text("body")]);
        assert_eq!(node.anchor.as_deref(), Some("about"));
        assert_eq!(node.role, Role::Section);
        assert_eq!(node.children.len(), 2);
        assert_eq!(node.children[0].text_content(), "Summary");

        let reveal = node.reveal.unwrap();
        assert_eq!(reveal.trigger, RevealTrigger::InView);
        assert_eq!(reveal.from.dy, REVEAL_OFFSET);
    }

    #[test]
    fn test_empty_body_still_has_heading() {
        let node = section("skills", "Expertise", Vec::new());
        assert_eq!(node.children.len(), 1);
    }
}
