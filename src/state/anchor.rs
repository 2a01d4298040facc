//! In-page anchors.
//!
//! Anchor ids are collected from the node tree in document order. Jumping to
//! an anchor scrolls so the target's top row sits right under the pinned nav
//! bar, clamped to the scroll range.

use tracing::debug;

use crate::layout::ComputedLayout;
use crate::view::Node;

/// Anchor id → node index, in document order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnchorTable {
    entries: Vec<(String, usize)>,
}

impl AnchorTable {
    /// Collect every anchor in `root`. Indices follow [`Node::walk`] order.
    pub fn collect(root: &Node) -> Self {
        let entries = root
            .walk()
            .into_iter()
            .enumerate()
            .filter_map(|(idx, node)| node.anchor.clone().map(|id| (id, idx)))
            .collect();
        Self { entries }
    }

    /// First node carrying `id`.
    pub fn resolve(&self, id: &str) -> Option<usize> {
        self.entries
            .iter()
            .find(|(anchor, _)| anchor == id)
            .map(|(_, idx)| *idx)
    }

    /// How many nodes carry `id`.
    pub fn count(&self, id: &str) -> usize {
        self.entries.iter().filter(|(anchor, _)| anchor == id).count()
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(id, _)| id.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Scroll offset that puts anchor `id` at the top of the viewport.
    pub fn scroll_target(
        &self,
        id: &str,
        layout: &ComputedLayout,
        nav_height: u16,
        max_scroll: u16,
    ) -> Option<u16> {
        let idx = self.resolve(id)?;
        let top = layout.top(idx)?;
        let target = jump_target(top, nav_height, max_scroll);
        debug!(anchor = id, node = idx, top, target, "anchor resolved");
        Some(target)
    }
}

/// Scroll offset aligning a node at document row `top` with the viewport top.
///
/// The viewport starts `nav_height` rows into the document, so the offset is
/// `top - nav_height`, clamped to `[0, max_scroll]`.
pub fn jump_target(top: u16, nav_height: u16, max_scroll: u16) -> u16 {
    top.saturating_sub(nav_height).min(max_scroll)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::compute_layout;
    use crate::types::Dimension;

    fn page() -> Node {
        Node::boxed()
            .child(Node::boxed().height(Dimension::Cells(2)))
            .child(Node::boxed().anchor("about").height(Dimension::Cells(10)))
            .child(Node::boxed().anchor("skills").height(Dimension::Cells(10)))
    }

    #[test]
    fn test_collect_in_document_order() {
        let table = AnchorTable::collect(&page());
        assert_eq!(table.ids().collect::<Vec<_>>(), vec!["about", "skills"]);
        assert_eq!(table.resolve("about"), Some(2));
        assert_eq!(table.resolve("skills"), Some(3));
        assert_eq!(table.resolve("missing"), None);
        assert_eq!(table.count("about"), 1);
    }

    #[test]
    fn test_jump_target_clamps() {
        assert_eq!(jump_target(12, 2, 100), 10);
        assert_eq!(jump_target(1, 2, 100), 0);
        assert_eq!(jump_target(50, 2, 20), 20);
    }

    #[test]
    fn test_scroll_target_from_layout() {
        let root = page();
        let layout = compute_layout(&root, 40).unwrap();
        let table = AnchorTable::collect(&root);

        assert_eq!(table.scroll_target("about", &layout, 2, 100), Some(0));
        assert_eq!(table.scroll_target("skills", &layout, 2, 100), Some(10));
        assert_eq!(table.scroll_target("skills", &layout, 2, 4), Some(4));
    }
}
