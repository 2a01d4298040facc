//! Layout output.

use crate::types::ClipRect;

/// Computed boxes for every node of one tree, indexed in document order.
///
/// Positions are absolute document coordinates (row 0 is the top of the
/// root), not scrolled.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ComputedLayout {
    pub x: Vec<u16>,
    pub y: Vec<u16>,
    pub width: Vec<u16>,
    pub height: Vec<u16>,
    /// Parent index of each node (None for the root).
    pub parent: Vec<Option<usize>>,
    pub content_width: u16,
    pub content_height: u16,
}

impl ComputedLayout {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.x.len()
    }

    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }

    pub fn bounds(&self, idx: usize) -> Option<ClipRect> {
        Some(ClipRect::new(
            *self.x.get(idx)?,
            *self.y.get(idx)?,
            *self.width.get(idx)?,
            *self.height.get(idx)?,
        ))
    }

    /// Top edge of a node in tree coordinates.
    pub fn top(&self, idx: usize) -> Option<u16> {
        self.y.get(idx).copied()
    }
}
