//! Paint pass - node tree + layout → FrameBuffer.
//!
//! Walks a laid-out subtree in document order and draws it, applying the
//! interaction state that lives outside the tree:
//!
//! - **Reveal**: a subtree at opacity 0 is skipped entirely (no cells, no hit
//!   regions). Part-way through, colors fade up from the page background and
//!   the subtree is drawn at its transition offset.
//! - **Hover**: the node's transform moves it (and its descendants); `inflate`
//!   widens its own box. Highlight and text roles override its colors.
//! - **Focus**: the focused node is drawn in the accent color, underlined.
//!
//! Hit regions are collected as data, parents before children, so filling a
//! hit grid in order leaves the innermost node on top.

use crate::layout::{wrap_text, ComputedLayout};
use crate::renderer::{FrameBuffer, Ink};
use crate::state::hover;
use crate::state::reveal::{RevealRegistry, RevealVisual};
use crate::theme::{ColorRole, Theme};
use crate::types::{Attr, ClipRect, Rgba};
use crate::view::{Node, NodeKind, Transform};

// =============================================================================
// Types
// =============================================================================

/// A hit region for mouse interaction detection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HitRegion {
    pub x: u16,
    pub y: u16,
    pub width: u16,
    pub height: u16,
    pub component_index: usize,
}

/// Result of one paint.
#[derive(Debug, Clone, PartialEq)]
pub struct FrameBufferResult {
    pub buffer: FrameBuffer,
    /// Hit regions for mouse interaction (collected as data, not side effects).
    pub hit_regions: Vec<HitRegion>,
    /// Terminal size at time of render.
    pub terminal_size: (u16, u16),
}

/// Everything the painter reads besides the tree and its layout.
pub struct PaintContext<'a> {
    pub theme: &'a Theme,
    /// `None` paints every reveal as already shown.
    pub reveals: Option<&'a RevealRegistry>,
    pub focused: Option<usize>,
}

impl<'a> PaintContext<'a> {
    /// Static paint: everything visible, nothing focused.
    pub fn fully_visible(theme: &'a Theme) -> Self {
        Self {
            theme,
            reveals: None,
            focused: None,
        }
    }

    fn reveal(&self, index: usize) -> RevealVisual {
        self.reveals
            .and_then(|r| r.visual(index))
            .unwrap_or(RevealVisual::VISIBLE)
    }
}

/// Where a subtree lands on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
    /// Added to every layout row (negative while scrolled).
    pub dy: i32,
    /// Screen area the subtree may draw into.
    pub clip: ClipRect,
}

/// State handed from parent to child while walking.
#[derive(Clone, Copy)]
struct Inherited {
    dx: i32,
    dy: i32,
    opacity: f32,
    text_role: Option<ColorRole>,
}

// =============================================================================
// Entry points
// =============================================================================

/// Number of nodes in a subtree (itself included).
pub fn subtree_len(node: &Node) -> usize {
    1 + node.children.iter().map(subtree_len).sum::<usize>()
}

/// Paint the subtree rooted at `node`, whose document index is `index`.
///
/// Returns the index just past the subtree.
pub fn paint_subtree(
    buffer: &mut FrameBuffer,
    node: &Node,
    index: usize,
    layout: &ComputedLayout,
    ctx: &PaintContext,
    placement: Placement,
    hit_regions: &mut Vec<HitRegion>,
) -> usize {
    let inherited = Inherited {
        dx: 0,
        dy: placement.dy,
        opacity: 1.0,
        text_role: None,
    };
    paint_node(buffer, node, index, layout, ctx, inherited, &placement.clip, hit_regions)
}

/// Paint a whole tree unscrolled into a fresh buffer sized to its content.
pub fn paint_document(root: &Node, layout: &ComputedLayout, ctx: &PaintContext) -> FrameBufferResult {
    let width = layout.content_width.max(1);
    let height = layout.content_height.max(1);
    let background = ctx.theme.resolve(ColorRole::Background);
    let mut buffer = FrameBuffer::filled(width, height, background);
    let mut hit_regions = Vec::new();

    let placement = Placement {
        dy: 0,
        clip: buffer.bounds(),
    };
    paint_subtree(&mut buffer, root, 0, layout, ctx, placement, &mut hit_regions);

    FrameBufferResult {
        buffer,
        hit_regions,
        terminal_size: (width, height),
    }
}

/// One-row status message at the bottom of the screen.
pub fn paint_status(buffer: &mut FrameBuffer, theme: &Theme, message: &str) {
    let Some(y) = buffer.height().checked_sub(1) else {
        return;
    };
    let width = buffer.width();
    let line = ClipRect::new(0, y, width, 1);
    buffer.fill(line, theme.resolve(ColorRole::Surface));
    buffer.text(1, y, message, Ink::fg(theme.resolve(ColorRole::Muted)), &line);
}

// =============================================================================
// Node rendering
// =============================================================================

#[allow(clippy::too_many_arguments)]
fn paint_node(
    buffer: &mut FrameBuffer,
    node: &Node,
    index: usize,
    layout: &ComputedLayout,
    ctx: &PaintContext,
    inherited: Inherited,
    clip: &ClipRect,
    hit_regions: &mut Vec<HitRegion>,
) -> usize {
    let next = index + subtree_len(node);

    let reveal = ctx.reveal(index);
    let opacity = inherited.opacity * reveal.opacity;
    if opacity <= 0.0 {
        return next;
    }

    let Some(bounds) = layout.bounds(index) else {
        return next;
    };

    let hover = hover::active_effect(index);
    let motion = reveal
        .offset
        .then(hover.map(|h| h.transform).unwrap_or(Transform::IDENTITY));

    let dx = inherited.dx + motion.dx as i32;
    let dy = inherited.dy + motion.dy as i32;
    let abs_x = bounds.x as i32 + dx;
    let abs_y = bounds.y as i32 + dy;

    let text_role = hover
        .and_then(|h| h.text)
        .or(inherited.text_role);
    let focused = ctx.focused == Some(index);

    let backdrop = ctx.theme.resolve(ColorRole::Background);
    let faded = |color: Rgba| fade(color, backdrop, opacity);

    // Painted box: layout box widened by inflate
    let inflate = motion.inflate as i32;
    let box_rect = screen_rect(
        abs_x - inflate,
        abs_y,
        bounds.width as i32 + inflate * 2,
        bounds.height as i32,
    );
    let Some(box_clip) = box_rect.and_then(|r| r.intersect(clip)) else {
        return next;
    };

    // Background
    let bg_role = hover.and_then(|h| h.highlight).or(node.paint.bg);
    if let Some(bg) = bg_role.and_then(|role| faded(ctx.theme.resolve(role))) {
        buffer.fill(box_clip, bg);
    }

    if matches!(node.kind, NodeKind::Link(_)) || !node.hover.is_none() {
        hit_regions.push(HitRegion {
            x: box_clip.x,
            y: box_clip.y,
            width: box_clip.width,
            height: box_clip.height,
            component_index: index,
        });
    }

    // Border
    if let (Some(rect), Some(color)) = (box_rect, faded(ctx.theme.resolve(node.paint.border_color))) {
        // A top edge pushed above the screen must not reappear at row 0
        let border_clip = if abs_y < 0 {
            ClipRect::new(box_clip.x, box_clip.y.max(1), box_clip.width, box_clip.height)
        } else {
            box_clip
        };
        buffer.border(rect, node.style.border, color, &border_clip);
    }

    // Content area (inside border and padding, unaffected by inflate)
    let (bt, br, bb, bl) = node.style.border.widths();
    let pad = node.style.padding;
    let content_x = abs_x + (bl + pad.left) as i32;
    let content_y = abs_y + (bt + pad.top) as i32;
    let content_w = bounds.width as i32 - (bl + pad.left + br + pad.right) as i32;
    let content_h = bounds.height as i32 - (bt + pad.top + bb + pad.bottom) as i32;

    let mut attrs = node.paint.attrs;
    let mut fg_role = text_role.unwrap_or(node.paint.fg);
    if focused {
        fg_role = ColorRole::Accent;
        attrs |= Attr::UNDERLINE;
    }

    if content_w > 0 && content_h > 0 {
        let content_clip = screen_rect(content_x, content_y, content_w, content_h)
            .and_then(|r| r.intersect(clip));

        if let (Some(content_clip), Some(fg)) = (content_clip, faded(ctx.theme.resolve(fg_role))) {
            let ink = Ink::fg(fg).attrs(attrs);
            match &node.kind {
                NodeKind::Box => {}
                NodeKind::Text(text) => {
                    draw_lines(buffer, text, content_x, content_y, content_w as u16, ink, &content_clip);
                }
                NodeKind::Link(link) => {
                    let slot = link
                        .target
                        .hyperlink()
                        .map(|url| buffer.link_slot(&url))
                        .unwrap_or(0);
                    draw_lines(buffer, &link.label, content_x, content_y, content_w as u16, ink.link(slot), &content_clip);
                }
                NodeKind::Divider => {
                    if content_y >= 0 {
                        let start = content_x.max(0);
                        let len = (content_x + content_w - start).max(0) as u16;
                        buffer.hline(start as u16, content_y as u16, len, '─', ink, &content_clip);
                    }
                }
            }
        }
    }

    // Children draw inside this node's (non-inflated) clip
    let child_clip = match screen_rect(abs_x, abs_y, bounds.width as i32, bounds.height as i32)
        .and_then(|r| r.intersect(clip))
    {
        Some(c) => c,
        None => return next,
    };
    let child_inherited = Inherited {
        dx,
        dy,
        opacity,
        text_role,
    };

    let mut child_index = index + 1;
    for child in &node.children {
        child_index = paint_node(buffer, child, child_index, layout, ctx, child_inherited, &child_clip, hit_regions);
    }

    next
}

/// Draw wrapped text lines starting at (x, y), skipping rows and columns
/// that fall off the top or left of the screen.
fn draw_lines(buffer: &mut FrameBuffer, text: &str, x: i32, y: i32, width: u16, ink: Ink, clip: &ClipRect) {
    for (i, line) in wrap_text(text, width).iter().enumerate() {
        let row = y + i as i32;
        if row < 0 {
            continue;
        }
        let (line, col) = if x < 0 {
            (skip_columns(line, (-x) as u16), 0u16)
        } else {
            (line.clone(), x as u16)
        };
        buffer.text(col, row as u16, &line, ink, clip);
    }
}

/// Drop the first `columns` display columns of a line.
fn skip_columns(line: &str, columns: u16) -> String {
    let mut skipped = 0u16;
    let mut out = String::new();
    for ch in line.chars() {
        if skipped < columns {
            skipped += crate::layout::char_width(ch);
            continue;
        }
        out.push(ch);
    }
    out
}

/// Rect with negative origin cut back to the screen. None if nothing is left.
fn screen_rect(x: i32, y: i32, width: i32, height: i32) -> Option<ClipRect> {
    let x0 = x.max(0);
    let y0 = y.max(0);
    let x1 = (x + width).min(u16::MAX as i32);
    let y1 = (y + height).min(u16::MAX as i32);
    if x1 <= x0 || y1 <= y0 {
        return None;
    }
    Some(ClipRect::new(x0 as u16, y0 as u16, (x1 - x0) as u16, (y1 - y0) as u16))
}

/// Color at `opacity` over the page background.
///
/// RGB colors blend; palette colors have no channels, so they appear once
/// the transition is half done. None means "draw nothing yet".
fn fade(color: Rgba, backdrop: Rgba, opacity: f32) -> Option<Rgba> {
    if opacity >= 1.0 {
        return Some(color);
    }
    if color.is_rgb() && backdrop.is_rgb() {
        return Some(Rgba::lerp(backdrop, color, opacity));
    }
    (opacity >= 0.5).then_some(color)
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::compute_layout;
    use crate::state::animate::{ManualClock, Transition};
    use crate::state::reveal::{Unobserved, ViewportObserver};
    use crate::theme::presets;
    use crate::types::{BorderStyle, Dimension};
    use crate::view::{HoverEffect, LinkTarget, RevealTrigger};
    use std::rc::Rc;
    use std::time::Duration;

    fn theme() -> Theme {
        presets::emerald()
    }

    fn paint(root: &Node, ctx: &PaintContext) -> FrameBufferResult {
        let layout = compute_layout(root, 30).unwrap();
        paint_document(root, &layout, ctx)
    }

    #[test]
    fn test_text_is_painted() {
        let theme = theme();
        let root = Node::boxed().child(Node::text("Vengateshwaran"));
        let result = paint(&root, &PaintContext::fully_visible(&theme));
        assert_eq!(result.buffer.row_text(0), "Vengateshwaran");
    }

    #[test]
    fn test_hidden_reveal_paints_nothing_and_no_hits() {
        hover::reset_hover_state();
        let theme = theme();
        let root = Node::boxed().child(
            Node::boxed()
                .reveal(RevealTrigger::InView, Transform { dx: 0, dy: 2, inflate: 0 })
                .child(Node::link("AI Chatbot", LinkTarget::external("https://example.org"))),
        );
        let layout = compute_layout(&root, 30).unwrap();

        let observer = ViewportObserver::new();
        let mut reveals = RevealRegistry::new(Transition::new(Duration::from_millis(600)), Rc::new(ManualClock::new()));
        reveals.attach(1, root.children[0].reveal.unwrap(), &observer);

        let ctx = PaintContext {
            theme: &theme,
            reveals: Some(&reveals),
            focused: None,
        };
        let result = paint_document(&root, &layout, &ctx);
        assert_eq!(result.buffer.to_plain_text().trim(), "");
        assert!(result.hit_regions.is_empty());
    }

    #[test]
    fn test_fail_open_reveal_paints() {
        let theme = theme();
        let root = Node::boxed().child(
            Node::boxed()
                .reveal(RevealTrigger::InView, Transform { dx: 0, dy: 2, inflate: 0 })
                .child(Node::text("Education")),
        );
        let layout = compute_layout(&root, 30).unwrap();
        let mut reveals = RevealRegistry::new(Transition::instant(), Rc::new(ManualClock::new()));
        reveals.attach(1, root.children[0].reveal.unwrap(), &Unobserved);

        let ctx = PaintContext {
            theme: &theme,
            reveals: Some(&reveals),
            focused: None,
        };
        let result = paint_document(&root, &layout, &ctx);
        assert_eq!(result.buffer.row_text(0), "Education");
    }

    #[test]
    fn test_links_get_hit_regions_and_hyperlinks() {
        let theme = theme();
        let root = Node::boxed().child(Node::link("mail", LinkTarget::Mail("a@b.c".into())));
        let result = paint(&root, &PaintContext::fully_visible(&theme));

        assert_eq!(result.hit_regions.len(), 1);
        assert_eq!(result.hit_regions[0].component_index, 1);
        let cell = result.buffer.get(0, 0).unwrap();
        assert_eq!(result.buffer.link_url(cell.link), Some("mailto:a@b.c"));
    }

    #[test]
    fn test_hover_shift_moves_subtree() {
        hover::reset_hover_state();
        let theme = theme();
        let effect = HoverEffect {
            transform: Transform::shift_x(2),
            ..HoverEffect::NONE
        };
        let root = Node::boxed().child(Node::boxed().hover(effect).child(Node::text("HSC")));

        let before = paint(&root, &PaintContext::fully_visible(&theme));
        assert_eq!(before.buffer.row_text(0), "HSC");

        hover::enter(1, effect);
        let during = paint(&root, &PaintContext::fully_visible(&theme));
        assert_eq!(during.buffer.row_text(0), "  HSC");

        hover::leave(1);
        let after = paint(&root, &PaintContext::fully_visible(&theme));
        assert_eq!(after.buffer, before.buffer);
    }

    #[test]
    fn test_inflate_widens_border() {
        hover::reset_hover_state();
        let theme = theme();
        let effect = HoverEffect {
            transform: Transform::grow(1),
            highlight: Some(ColorRole::SurfaceHover),
            text: None,
        };
        let root = Node::boxed().padding(crate::view::Edges::xy(2, 0)).child(
            Node::boxed()
                .width(Dimension::Cells(6))
                .border(BorderStyle::Rounded, ColorRole::Border)
                .hover(effect)
                .child(Node::text("AI")),
        );
        let layout = compute_layout(&root, 20).unwrap();
        let ctx = PaintContext::fully_visible(&theme);

        let resting = paint_document(&root, &layout, &ctx);
        assert_eq!(resting.buffer.get(2, 0).unwrap().char, '╭' as u32);

        hover::enter(1, effect);
        let hovered = paint_document(&root, &layout, &ctx);
        assert_eq!(hovered.buffer.get(1, 0).unwrap().char, '╭' as u32);
        assert_eq!(hovered.buffer.get(8, 0).unwrap().char, '╮' as u32);
        // Content stays put
        assert_eq!(hovered.buffer.get(3, 1).unwrap().char, 'A' as u32);
        hover::reset_hover_state();
    }

    #[test]
    fn test_focus_underlines() {
        let theme = theme();
        let root = Node::boxed().child(Node::link("About", LinkTarget::Anchor("about".into())));
        let layout = compute_layout(&root, 20).unwrap();
        let ctx = PaintContext {
            theme: &theme,
            reveals: None,
            focused: Some(1),
        };
        let result = paint_document(&root, &layout, &ctx);
        let cell = result.buffer.get(0, 0).unwrap();
        assert!(cell.attrs.contains(Attr::UNDERLINE));
        assert_eq!(cell.fg, theme.resolve(ColorRole::Accent));
    }

    #[test]
    fn test_scrolled_placement_clips() {
        let theme = theme();
        let root = Node::boxed()
            .child(Node::text("first"))
            .child(Node::text("second"))
            .child(Node::text("third"));
        let layout = compute_layout(&root, 20).unwrap();
        let mut buffer = FrameBuffer::new(20, 3);
        let mut hits = Vec::new();
        let placement = Placement {
            dy: -1,
            clip: ClipRect::new(0, 1, 20, 2),
        };
        paint_subtree(&mut buffer, &root, 0, &layout, &PaintContext::fully_visible(&theme), placement, &mut hits);

        // Row 0 is outside the clip; "second" lands on row 0 and is clipped
        assert_eq!(buffer.row_text(0), "");
        assert_eq!(buffer.row_text(1), "third");
    }

    #[test]
    fn test_fade() {
        let bg = Rgba::rgb(0, 0, 0);
        let fg = Rgba::rgb(200, 100, 50);
        assert_eq!(fade(fg, bg, 1.0), Some(fg));
        assert_eq!(fade(fg, bg, 0.5), Some(Rgba::rgb(100, 50, 25)));
        assert_eq!(fade(Rgba::ansi(2), bg, 0.25), None);
        assert_eq!(fade(Rgba::ansi(2), bg, 0.75), Some(Rgba::ansi(2)));
    }

    #[test]
    fn test_skip_columns() {
        assert_eq!(skip_columns("VN.", 2), ".");
        assert_eq!(skip_columns("VN.", 0), "VN.");
    }

    #[test]
    fn test_subtree_len() {
        let root = Node::boxed()
            .child(Node::boxed().child(Node::text("a")))
            .child(Node::text("b"));
        assert_eq!(subtree_len(&root), 4);
    }
}
