//! Summary section (`about`): paragraph plus two fact cards.

use crate::content::Profile;
use crate::theme::ColorRole;
use crate::types::{Attr, BorderStyle, Dimension, FlexDirection};
use crate::view::{Edges, Node};

use super::section::section;

pub fn summary(profile: &Profile) -> Node {
    let languages = profile.languages.iter().map(|lang| {
        Node::boxed()
            .direction(FlexDirection::Row)
            .gap(1)
            .child(Node::text(&lang.name).fg(ColorRole::Bright).shrink(0.0))
            .child(Node::text(format!("({})", lang.proficiency)).fg(ColorRole::Dim))
    });

    let cards = Node::boxed()
        .direction(FlexDirection::Row)
        .wrap()
        .gap(2)
        .child(card("LANGUAGES", languages))
        .child(card("ROLE", [Node::text(&profile.role).fg(ColorRole::Bright)]));

    section(
        "about",
        "Summary",
        [Node::text(&profile.summary).fg(ColorRole::Text), cards],
    )
}

fn card(title: &str, body: impl IntoIterator<Item = Node>) -> Node {
    Node::boxed()
        .border(BorderStyle::Rounded, ColorRole::Border)
        .padding(Edges::xy(2, 0))
        .min_width(Dimension::Cells(24))
        .bg(ColorRole::Surface)
        .child(Node::text(title).fg(ColorRole::Accent).attrs(Attr::BOLD))
        .children(body)
}
