//! Hero block: tagline, name, contact strip.

use crate::content::Profile;
use crate::theme::ColorRole;
use crate::types::{AlignItems, Attr, FlexDirection};
use crate::view::{Edges, LinkTarget, Node, RevealTrigger, Role, Transform};

const HERO_FROM: Transform = Transform {
    dx: 0,
    dy: 3,
    inflate: 0,
};

pub fn hero(profile: &Profile) -> Node {
    let name = Node::boxed()
        .direction(FlexDirection::Row)
        .gap(1)
        .child(
            Node::text(&profile.name)
                .fg(ColorRole::Bright)
                .attrs(Attr::BOLD | Attr::ITALIC)
                .shrink(0.0),
        )
        .child(
            Node::text(&profile.name_highlight)
                .fg(ColorRole::Accent)
                .attrs(Attr::BOLD | Attr::ITALIC)
                .shrink(0.0),
        );

    let contacts = Node::boxed()
        .direction(FlexDirection::Row)
        .wrap()
        .gap(3)
        .child(contact("map-pin", Node::text(&profile.location)))
        .child(contact(
            "mail",
            Node::link(&profile.email, LinkTarget::Mail(profile.email.clone())),
        ))
        .child(contact("phone", Node::text(&profile.phone)));

    Node::boxed()
        .role(Role::Hero)
        .padding(Edges { top: 2, right: 0, bottom: 3, left: 0 })
        .gap(1)
        .reveal(RevealTrigger::Mount, HERO_FROM)
        .child(Node::text(&profile.tagline).fg(ColorRole::Accent))
        .child(name)
        .child(contacts)
}

/// Icon followed by a value.
pub(crate) fn contact(icon: &str, value: Node) -> Node {
    Node::boxed()
        .direction(FlexDirection::Row)
        .align(AlignItems::Center)
        .gap(1)
        .child(Node::icon(icon).fg(ColorRole::AccentStrong).shrink(0.0))
        .child(value.fg(ColorRole::Muted))
}
