//! Hover micro-interactions.
//!
//! A node with a [`HoverEffect`] gets it applied while the pointer is over it
//! and removed on exit. Nothing is remembered between hover cycles, so after
//! enter then leave the node's transform is exactly [`Transform::IDENTITY`].
//!
//! Enter/leave come from the mouse module's per-node handlers; the painter
//! reads [`transform`] and [`active_effect`] each frame.

use std::cell::RefCell;
use std::collections::HashMap;

use tracing::trace;

use crate::view::{HoverEffect, Transform};

thread_local! {
    static ACTIVE: RefCell<HashMap<usize, HoverEffect>> = RefCell::new(HashMap::new());
}

/// Pointer entered `index`. Effects that do nothing are not recorded.
pub fn enter(index: usize, effect: HoverEffect) {
    if effect.is_none() {
        return;
    }
    trace!(node = index, "hover enter");
    ACTIVE.with(|a| a.borrow_mut().insert(index, effect));
}

/// Pointer left `index`.
pub fn leave(index: usize) {
    if ACTIVE.with(|a| a.borrow_mut().remove(&index)).is_some() {
        trace!(node = index, "hover leave");
    }
}

/// Current hover transform of a node.
pub fn transform(index: usize) -> Transform {
    active_effect(index)
        .map(|effect| effect.transform)
        .unwrap_or(Transform::IDENTITY)
}

pub fn active_effect(index: usize) -> Option<HoverEffect> {
    ACTIVE.with(|a| a.borrow().get(&index).copied())
}

pub fn is_hovered(index: usize) -> bool {
    ACTIVE.with(|a| a.borrow().contains_key(&index))
}

pub fn reset_hover_state() {
    ACTIVE.with(|a| a.borrow_mut().clear());
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::ColorRole;

    fn grow_effect() -> HoverEffect {
        HoverEffect {
            transform: Transform::grow(1),
            highlight: Some(ColorRole::SurfaceHover),
            text: None,
        }
    }

    #[test]
    fn test_enter_applies_and_leave_reverts() {
        reset_hover_state();
        let before = transform(4);
        assert_eq!(before, Transform::IDENTITY);

        enter(4, grow_effect());
        assert_eq!(transform(4), Transform::grow(1));
        assert!(is_hovered(4));

        leave(4);
        assert_eq!(transform(4), before);
        assert!(active_effect(4).is_none());
    }

    #[test]
    fn test_repeated_cycles_leave_no_residue() {
        reset_hover_state();
        for _ in 0..5 {
            enter(2, HoverEffect { transform: Transform::shift_x(2), ..HoverEffect::NONE });
            leave(2);
        }
        assert_eq!(transform(2), Transform::IDENTITY);
    }

    #[test]
    fn test_empty_effect_is_ignored() {
        reset_hover_state();
        enter(1, HoverEffect::NONE);
        assert!(!is_hovered(1));
    }
}
