//! View Module - declarative node descriptions.
//!
//! Components are pure functions from immutable content to a [`Node`] tree.
//! A node says what it is (box, text, link, divider), how it lays out
//! ([`Style`], converted to taffy by the layout bridge), how it paints
//! ([`Paint`], semantic colors only) and which behaviors it carries
//! (anchor id, hover effect, reveal transition).
//!
//! Nothing in a node tree is reactive. Interaction state (hover, scroll,
//! reveal progress) lives in `state` and is applied at paint time, keyed by
//! the node's index in document order.
//!
//! # Example
//!
//! ```rust
//! use folio_tui::view::{Node, Role};
//! use folio_tui::types::FlexDirection;
//!
//! let row = Node::boxed()
//!     .direction(FlexDirection::Row)
//!     .gap(2)
//!     .role(Role::SkillRow)
//!     .child(Node::text("Teamwork"))
//!     .child(Node::text("EXPERIENCED"));
//! assert_eq!(row.children.len(), 2);
//! ```

pub mod icon;
pub mod link;

pub use icon::{Icon, glyph};
pub use link::{Link, LinkPolicy, LinkTarget};

use crate::theme::ColorRole;
use crate::types::{
    AlignItems, Attr, BorderStyle, Dimension, FlexDirection, FlexWrap, JustifyContent,
};

// =============================================================================
// STYLE
// =============================================================================

/// Per-edge spacing in cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Edges {
    pub top: u16,
    pub right: u16,
    pub bottom: u16,
    pub left: u16,
}

impl Edges {
    pub const fn all(n: u16) -> Self {
        Self { top: n, right: n, bottom: n, left: n }
    }

    pub const fn xy(x: u16, y: u16) -> Self {
        Self { top: y, right: x, bottom: y, left: x }
    }
}

/// Flexbox layout properties.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Style {
    pub direction: FlexDirection,
    pub wrap: FlexWrap,
    pub justify: JustifyContent,
    pub align: AlignItems,
    pub grow: f32,
    pub shrink: f32,
    pub basis: Dimension,
    pub width: Dimension,
    pub min_width: Dimension,
    pub max_width: Dimension,
    pub height: Dimension,
    pub padding: Edges,
    pub margin: Edges,
    pub gap: u16,
    pub border: BorderStyle,
}

impl Default for Style {
    fn default() -> Self {
        Self {
            direction: FlexDirection::Column,
            wrap: FlexWrap::NoWrap,
            justify: JustifyContent::FlexStart,
            align: AlignItems::Stretch,
            grow: 0.0,
            shrink: 1.0,
            basis: Dimension::Auto,
            width: Dimension::Auto,
            min_width: Dimension::Auto,
            max_width: Dimension::Auto,
            height: Dimension::Auto,
            padding: Edges::default(),
            margin: Edges::default(),
            gap: 0,
            border: BorderStyle::None,
        }
    }
}

/// Visual properties, in theme roles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Paint {
    pub fg: ColorRole,
    pub bg: Option<ColorRole>,
    pub attrs: Attr,
    pub border_color: ColorRole,
}

// =============================================================================
// BEHAVIORS
// =============================================================================

/// Semantic role, used for hit-test actions and by tests to find rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub enum Role {
    #[default]
    None,
    NavBar,
    NavItem,
    Brand,
    Hero,
    Section,
    SectionHeading,
    SkillRow,
    ProjectRow,
    EducationRow,
    BulletPoint,
    Footer,
}

/// A small positional transform applied at paint time.
///
/// `inflate` grows the node's painted box by that many cells on the left and
/// right; it is the terminal's stand-in for a scale-up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Transform {
    pub dx: i16,
    pub dy: i16,
    pub inflate: u16,
}

impl Transform {
    pub const IDENTITY: Self = Self { dx: 0, dy: 0, inflate: 0 };

    pub const fn shift_x(dx: i16) -> Self {
        Self { dx, dy: 0, inflate: 0 }
    }

    pub const fn grow(inflate: u16) -> Self {
        Self { dx: 0, dy: 0, inflate }
    }

    pub fn is_identity(&self) -> bool {
        *self == Self::IDENTITY
    }

    /// Compose two transforms (offsets add, inflation takes the larger).
    pub fn then(self, other: Self) -> Self {
        Self {
            dx: self.dx.saturating_add(other.dx),
            dy: self.dy.saturating_add(other.dy),
            inflate: self.inflate.max(other.inflate),
        }
    }
}

/// What happens while the pointer is over a node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct HoverEffect {
    pub transform: Transform,
    /// Background role while hovered.
    pub highlight: Option<ColorRole>,
    /// Foreground role while hovered.
    pub text: Option<ColorRole>,
}

impl HoverEffect {
    pub const NONE: Self = Self {
        transform: Transform::IDENTITY,
        highlight: None,
        text: None,
    };

    pub fn is_none(&self) -> bool {
        *self == Self::NONE
    }
}

/// When an entrance transition starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealTrigger {
    /// First time the node intersects the viewport.
    InView,
    /// As soon as the page mounts.
    Mount,
}

/// Entrance transition: from hidden at `from` offset to visible in place.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RevealSpec {
    pub trigger: RevealTrigger,
    pub from: Transform,
}

// =============================================================================
// NODE
// =============================================================================

#[derive(Debug, Clone, PartialEq)]
pub enum NodeKind {
    /// Flex container.
    Box,
    /// Wrapped text.
    Text(String),
    /// Activatable text.
    Link(Link),
    /// Horizontal rule filling its width.
    Divider,
}

/// One element of the rendered document.
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    pub kind: NodeKind,
    pub style: Style,
    pub paint: Paint,
    pub role: Role,
    /// In-page anchor id.
    pub anchor: Option<String>,
    pub hover: HoverEffect,
    pub reveal: Option<RevealSpec>,
    pub children: Vec<Node>,
}

impl Node {
    fn new(kind: NodeKind) -> Self {
        Self {
            kind,
            style: Style::default(),
            paint: Paint::default(),
            role: Role::None,
            anchor: None,
            hover: HoverEffect::NONE,
            reveal: None,
            children: Vec::new(),
        }
    }

    /// Flex container.
    pub fn boxed() -> Self {
        Self::new(NodeKind::Box)
    }

    pub fn text(content: impl Into<String>) -> Self {
        Self::new(NodeKind::Text(content.into()))
    }

    /// Link; hovering tints it with the accent.
    pub fn link(label: impl Into<String>, target: LinkTarget) -> Self {
        let mut node = Self::new(NodeKind::Link(Link::new(label, target)));
        node.hover.text = Some(ColorRole::Accent);
        node
    }

    pub fn divider() -> Self {
        let mut node = Self::new(NodeKind::Divider);
        node.style.grow = 1.0;
        node.style.height = Dimension::Cells(1);
        node.paint.fg = ColorRole::Border;
        node
    }

    /// Glyph from the icon table; unknown names render nothing.
    pub fn icon(name: &str) -> Self {
        Self::text(glyph(name).unwrap_or_default())
    }

    // -- structure -----------------------------------------------------------

    pub fn child(mut self, child: Node) -> Self {
        self.children.push(child);
        self
    }

    pub fn children(mut self, children: impl IntoIterator<Item = Node>) -> Self {
        self.children.extend(children);
        self
    }

    pub fn role(mut self, role: Role) -> Self {
        self.role = role;
        self
    }

    pub fn anchor(mut self, id: impl Into<String>) -> Self {
        self.anchor = Some(id.into());
        self
    }

    pub fn hover(mut self, effect: HoverEffect) -> Self {
        self.hover = effect;
        self
    }

    pub fn reveal(mut self, trigger: RevealTrigger, from: Transform) -> Self {
        self.reveal = Some(RevealSpec { trigger, from });
        self
    }

    // -- style ---------------------------------------------------------------

    pub fn direction(mut self, direction: FlexDirection) -> Self {
        self.style.direction = direction;
        self
    }

    pub fn wrap(mut self) -> Self {
        self.style.wrap = FlexWrap::Wrap;
        self
    }

    pub fn justify(mut self, justify: JustifyContent) -> Self {
        self.style.justify = justify;
        self
    }

    pub fn align(mut self, align: AlignItems) -> Self {
        self.style.align = align;
        self
    }

    pub fn grow(mut self, grow: f32) -> Self {
        self.style.grow = grow;
        self
    }

    pub fn shrink(mut self, shrink: f32) -> Self {
        self.style.shrink = shrink;
        self
    }

    pub fn basis(mut self, basis: Dimension) -> Self {
        self.style.basis = basis;
        self
    }

    pub fn width(mut self, width: Dimension) -> Self {
        self.style.width = width;
        self
    }

    pub fn min_width(mut self, width: Dimension) -> Self {
        self.style.min_width = width;
        self
    }

    pub fn max_width(mut self, width: Dimension) -> Self {
        self.style.max_width = width;
        self
    }

    pub fn height(mut self, height: Dimension) -> Self {
        self.style.height = height;
        self
    }

    pub fn padding(mut self, padding: Edges) -> Self {
        self.style.padding = padding;
        self
    }

    pub fn margin(mut self, margin: Edges) -> Self {
        self.style.margin = margin;
        self
    }

    pub fn gap(mut self, gap: u16) -> Self {
        self.style.gap = gap;
        self
    }

    pub fn border(mut self, border: BorderStyle, color: ColorRole) -> Self {
        self.style.border = border;
        self.paint.border_color = color;
        self
    }

    // -- paint ---------------------------------------------------------------

    pub fn fg(mut self, role: ColorRole) -> Self {
        self.paint.fg = role;
        self
    }

    pub fn bg(mut self, role: ColorRole) -> Self {
        self.paint.bg = Some(role);
        self
    }

    pub fn attrs(mut self, attrs: Attr) -> Self {
        self.paint.attrs = attrs;
        self
    }

    // -- queries -------------------------------------------------------------

    /// Text content of a text or link node.
    pub fn label(&self) -> Option<&str> {
        match &self.kind {
            NodeKind::Text(s) => Some(s),
            NodeKind::Link(link) => Some(&link.label),
            _ => None,
        }
    }

    /// Depth-first, document-order walk.
    pub fn walk(&self) -> Vec<&Node> {
        let mut out = Vec::new();
        let mut stack = vec![self];
        while let Some(node) = stack.pop() {
            out.push(node);
            stack.extend(node.children.iter().rev());
        }
        out
    }

    /// All descendants (and self) with the given role, in document order.
    pub fn find_role(&self, role: Role) -> Vec<&Node> {
        self.walk().into_iter().filter(|n| n.role == role).collect()
    }

    /// Concatenated text of this subtree, in document order.
    pub fn text_content(&self) -> String {
        self.walk()
            .into_iter()
            .filter_map(Node::label)
            .filter(|s| !s.is_empty())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Map a literal slice to one node per item, preserving order.
///
/// No filtering, sorting or deduplication; an empty slice yields no nodes.
pub fn each<T>(items: &[T], render: impl Fn(usize, &T) -> Node) -> Vec<Node> {
    items.iter().enumerate().map(|(i, item)| render(i, item)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_walk_is_document_order() {
        let tree = Node::boxed()
            .child(Node::text("a").child(Node::text("a1")))
            .child(Node::text("b"));
        let labels: Vec<_> = tree.walk().into_iter().filter_map(Node::label).collect();
        assert_eq!(labels, ["a", "a1", "b"]);
    }

    #[test]
    fn test_each_preserves_order_and_length() {
        let items = ["z", "a", "a", "m"];
        let nodes = each(&items, |_, s| Node::text(*s));
        let labels: Vec<_> = nodes.iter().filter_map(Node::label).collect();
        assert_eq!(labels, ["z", "a", "a", "m"]);
    }

    #[test]
    fn test_each_empty() {
        let items: [u8; 0] = [];
        assert!(each(&items, |_, _| Node::boxed()).is_empty());
    }

    #[test]
    fn test_transform_compose() {
        let t = Transform::shift_x(2).then(Transform::grow(1));
        assert_eq!(t, Transform { dx: 2, dy: 0, inflate: 1 });
        assert!(Transform::IDENTITY.then(Transform::IDENTITY).is_identity());
    }

    #[test]
    fn test_link_hover_default() {
        let node = Node::link("About", LinkTarget::Anchor("about".into()));
        assert_eq!(node.hover.text, Some(ColorRole::Accent));
        assert_eq!(node.label(), Some("About"));
    }

    #[test]
    fn test_unknown_icon_is_empty_text() {
        assert_eq!(Node::icon("no-such-icon").label(), Some(""));
    }
}
