//! Footer: closing line, copyright, social links.

use crate::content::Profile;
use crate::theme::ColorRole;
use crate::types::{Attr, FlexDirection, JustifyContent};
use crate::view::{glyph, Edges, Node, Role};

pub fn footer(profile: &Profile) -> Node {
    let social = profile.social.iter().map(|link| {
        let icon = glyph(link.icon).unwrap_or_default();
        Node::link(format!("{icon} {}", link.label), link.target.clone())
            .fg(ColorRole::Muted)
            .shrink(0.0)
    });

    let signature = Node::boxed()
        .child(
            Node::text(&profile.closing_line)
                .fg(ColorRole::Bright)
                .attrs(Attr::BOLD | Attr::ITALIC),
        )
        .child(Node::text(&profile.copyright).fg(ColorRole::Dim));

    Node::boxed()
        .role(Role::Footer)
        .padding(Edges { top: 2, right: 0, bottom: 1, left: 0 })
        .gap(1)
        .child(Node::divider())
        .child(
            Node::boxed()
                .direction(FlexDirection::Row)
                .wrap()
                .justify(JustifyContent::SpaceBetween)
                .gap(2)
                .child(signature)
                .child(
                    Node::boxed()
                        .direction(FlexDirection::Row)
                        .gap(3)
                        .children(social),
                ),
        )
}
