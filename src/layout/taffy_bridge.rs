//! Taffy Bridge - Integration with Taffy layout engine
//!
//! Converts view node styles to Taffy styles, runs layout computation,
//! and extracts results back to a [`ComputedLayout`].

use taffy::{
    AlignItems as TaffyAlignItems, AvailableSpace, Dimension as TaffyDimension, Display,
    FlexDirection as TaffyFlexDirection, FlexWrap as TaffyFlexWrap,
    JustifyContent as TaffyJustifyContent, LengthPercentage, LengthPercentageAuto, NodeId, Rect,
    Size, Style, TaffyTree,
};

use crate::error::{FolioError, Result};
use crate::types::{AlignItems, Dimension, FlexDirection, FlexWrap, JustifyContent};
use crate::view::{Node, NodeKind};

use super::text_measure::{min_content_width, string_width, wrap_text};
use super::types::ComputedLayout;

// =============================================================================
// DIMENSION CONVERSION
// =============================================================================

/// Convert our Dimension to Taffy's Dimension.
fn to_taffy_dimension(dim: Dimension) -> TaffyDimension {
    match dim {
        Dimension::Auto => TaffyDimension::Auto,
        Dimension::Cells(n) => TaffyDimension::Length(n as f32),
        Dimension::Percent(p) => TaffyDimension::Percent(p / 100.0),
    }
}

fn cells(n: u16) -> LengthPercentage {
    LengthPercentage::Length(n as f32)
}

// =============================================================================
// ENUM CONVERSIONS
// =============================================================================

fn to_taffy_flex_direction(dir: FlexDirection) -> TaffyFlexDirection {
    match dir {
        FlexDirection::Column => TaffyFlexDirection::Column,
        FlexDirection::Row => TaffyFlexDirection::Row,
    }
}

fn to_taffy_flex_wrap(wrap: FlexWrap) -> TaffyFlexWrap {
    match wrap {
        FlexWrap::NoWrap => TaffyFlexWrap::NoWrap,
        FlexWrap::Wrap => TaffyFlexWrap::Wrap,
    }
}

fn to_taffy_justify_content(justify: JustifyContent) -> Option<TaffyJustifyContent> {
    Some(match justify {
        JustifyContent::FlexStart => TaffyJustifyContent::FlexStart,
        JustifyContent::Center => TaffyJustifyContent::Center,
        JustifyContent::FlexEnd => TaffyJustifyContent::FlexEnd,
        JustifyContent::SpaceBetween => TaffyJustifyContent::SpaceBetween,
    })
}

fn to_taffy_align_items(align: AlignItems) -> Option<TaffyAlignItems> {
    Some(match align {
        AlignItems::Stretch => TaffyAlignItems::Stretch,
        AlignItems::FlexStart => TaffyAlignItems::FlexStart,
        AlignItems::Center => TaffyAlignItems::Center,
        AlignItems::FlexEnd => TaffyAlignItems::FlexEnd,
    })
}

// =============================================================================
// STYLE BUILDING
// =============================================================================

/// Build a Taffy Style from a view node.
fn build_style(node: &Node) -> Style {
    let s = &node.style;
    let (border_top, border_right, border_bottom, border_left) = s.border.widths();

    let mut style = Style {
        display: Display::Flex,

        flex_direction: to_taffy_flex_direction(s.direction),
        flex_wrap: to_taffy_flex_wrap(s.wrap),
        justify_content: to_taffy_justify_content(s.justify),
        align_items: to_taffy_align_items(s.align),

        flex_grow: s.grow,
        flex_shrink: s.shrink,
        flex_basis: to_taffy_dimension(s.basis),

        size: Size {
            width: to_taffy_dimension(s.width),
            height: to_taffy_dimension(s.height),
        },
        min_size: Size {
            width: to_taffy_dimension(s.min_width),
            height: TaffyDimension::Auto,
        },
        max_size: Size {
            width: to_taffy_dimension(s.max_width),
            height: TaffyDimension::Auto,
        },

        margin: Rect {
            top: LengthPercentageAuto::Length(s.margin.top as f32),
            right: LengthPercentageAuto::Length(s.margin.right as f32),
            bottom: LengthPercentageAuto::Length(s.margin.bottom as f32),
            left: LengthPercentageAuto::Length(s.margin.left as f32),
        },
        padding: Rect {
            top: cells(s.padding.top),
            right: cells(s.padding.right),
            bottom: cells(s.padding.bottom),
            left: cells(s.padding.left),
        },
        border: Rect {
            top: cells(border_top),
            right: cells(border_right),
            bottom: cells(border_bottom),
            left: cells(border_left),
        },
        gap: Size {
            width: cells(s.gap),
            height: cells(s.gap),
        },

        ..Default::default()
    };

    // Text sizes itself through the measure function
    if matches!(node.kind, NodeKind::Text(_) | NodeKind::Link(_)) {
        style.size = Size::auto();
    }

    style
}

// =============================================================================
// TEXT MEASUREMENT
// =============================================================================

/// Measure function for text content.
fn measure_text(
    content: &str,
    known_dimensions: Size<Option<f32>>,
    available_space: Size<AvailableSpace>,
) -> Size<f32> {
    if content.is_empty() {
        return Size::ZERO;
    }

    let avail_width = match available_space.width {
        AvailableSpace::Definite(w) => w.max(0.0) as u16,
        AvailableSpace::MinContent => min_content_width(content),
        AvailableSpace::MaxContent => u16::MAX,
    };
    let wrap_width = known_dimensions
        .width
        .map(|w| w.max(0.0) as u16)
        .unwrap_or(avail_width)
        .max(1);

    let lines = wrap_text(content, wrap_width);
    let text_width = lines.iter().map(|l| string_width(l)).max().unwrap_or(0);

    Size {
        width: known_dimensions.width.unwrap_or(text_width as f32),
        height: known_dimensions.height.unwrap_or(lines.len() as f32),
    }
}

// =============================================================================
// MAIN ENTRY POINT
// =============================================================================

fn build_tree(
    tree: &mut TaffyTree<usize>,
    node: &Node,
    parent: Option<usize>,
    ids: &mut Vec<NodeId>,
    parents: &mut Vec<Option<usize>>,
) -> Result<NodeId> {
    let idx = ids.len();
    let style = build_style(node);

    let node_id = match node.kind {
        NodeKind::Text(_) | NodeKind::Link(_) => tree.new_leaf_with_context(style, idx),
        NodeKind::Box | NodeKind::Divider => tree.new_leaf(style),
    }
    .map_err(|e| FolioError::Layout(e.to_string()))?;

    ids.push(node_id);
    parents.push(parent);

    for child in &node.children {
        let child_id = build_tree(tree, child, Some(idx), ids, parents)?;
        tree.add_child(node_id, child_id)
            .map_err(|e| FolioError::Layout(e.to_string()))?;
    }

    Ok(node_id)
}

/// Compute layout for a node tree using Taffy.
///
/// Width is fixed to `available_width`; height is unconstrained, so the
/// tree takes whatever height its content needs.
pub fn compute_layout_taffy(root: &Node, available_width: u16) -> Result<ComputedLayout> {
    let nodes = root.walk();
    let texts: Vec<&str> = nodes.iter().map(|n| n.label().unwrap_or_default()).collect();

    let mut tree: TaffyTree<usize> = TaffyTree::new();
    let mut ids = Vec::with_capacity(nodes.len());
    let mut parents = Vec::with_capacity(nodes.len());

    let root_id = build_tree(&mut tree, root, None, &mut ids, &mut parents)?;

    // An auto-width root spans the full available width
    if root.style.width == Dimension::Auto {
        let mut root_style = tree
            .style(root_id)
            .map_err(|e| FolioError::Layout(e.to_string()))?
            .clone();
        root_style.size.width = TaffyDimension::Length(available_width as f32);
        tree.set_style(root_id, root_style)
            .map_err(|e| FolioError::Layout(e.to_string()))?;
    }

    let available = Size {
        width: AvailableSpace::Definite(available_width as f32),
        height: AvailableSpace::MaxContent,
    };

    let mut measure_fn = |known_dimensions: Size<Option<f32>>,
                          available_space: Size<AvailableSpace>,
                          _node_id: NodeId,
                          context: Option<&mut usize>,
                          _style: &Style| {
        match context {
            Some(&mut idx) => measure_text(
                texts.get(idx).copied().unwrap_or_default(),
                known_dimensions,
                available_space,
            ),
            None => Size::ZERO,
        }
    };

    tree.compute_layout_with_measure(root_id, available, &mut measure_fn)
        .map_err(|e| FolioError::Layout(e.to_string()))?;

    let count = ids.len();
    let mut result = ComputedLayout {
        x: vec![0; count],
        y: vec![0; count],
        width: vec![0; count],
        height: vec![0; count],
        parent: parents,
        content_width: 0,
        content_height: 0,
    };

    // Taffy positions are parent-relative; parents precede children in
    // document order, so one forward pass accumulates absolute positions.
    for (idx, &node_id) in ids.iter().enumerate() {
        let layout = tree
            .layout(node_id)
            .map_err(|e| FolioError::Layout(e.to_string()))?;

        let (origin_x, origin_y) = match result.parent[idx] {
            Some(p) => (result.x[p] as f32, result.y[p] as f32),
            None => (0.0, 0.0),
        };

        result.x[idx] = (origin_x + layout.location.x).round().max(0.0) as u16;
        result.y[idx] = (origin_y + layout.location.y).round().max(0.0) as u16;
        result.width[idx] = layout.size.width.round().max(0.0) as u16;
        result.height[idx] = layout.size.height.round().max(0.0) as u16;
    }

    result.content_width = result.width.first().copied().unwrap_or(0);
    result.content_height = result.height.first().copied().unwrap_or(0);

    Ok(result)
}
