//! Keyboard focus over the nav links.
//!
//! The session registers the focusable nodes (nav items, in walk order) once
//! the page is built. Tab and Shift+Tab cycle through them with wrap-around,
//! Enter follows whichever one holds focus, and the painter underlines it.
//!
//! ```rust
//! use folio_tui::state::focus;
//!
//! focus::reset_focus_state();
//! focus::set_focusables(vec![3, 5, 7]);
//! focus::focus_next();
//! assert_eq!(focus::focused(), Some(3));
//! focus::focus_previous();
//! assert_eq!(focus::focused(), Some(7));
//! ```

use std::cell::RefCell;

use spark_signals::{signal, Signal};

thread_local! {
    static FOCUSED: Signal<Option<usize>> = signal(None);
    static FOCUSABLES: RefCell<Vec<usize>> = const { RefCell::new(Vec::new()) };
}

/// Node holding focus. Reading it inside an effect subscribes to changes.
pub fn focused() -> Option<usize> {
    FOCUSED.with(|s| s.get())
}

pub fn is_focused(index: usize) -> bool {
    focused() == Some(index)
}

fn set(index: Option<usize>) {
    if focused() != index {
        FOCUSED.with(|s| s.set(index));
    }
}

/// Replace the focusable nodes. Focus survives only if its node is still listed.
pub fn set_focusables(indices: Vec<usize>) {
    let keep = focused().filter(|idx| indices.contains(idx));
    FOCUSABLES.with(|f| *f.borrow_mut() = indices);
    set(keep);
}

pub fn focusables() -> Vec<usize> {
    FOCUSABLES.with(|f| f.borrow().clone())
}

/// Next focusable in `forward` order from the current one. With nothing
/// focused, forward starts at the first and backward at the last.
fn step(forward: bool) -> bool {
    let order = focusables();
    if order.is_empty() {
        return false;
    }
    let len = order.len();
    let target = match focused().and_then(|idx| order.iter().position(|&i| i == idx)) {
        Some(pos) if forward => order[(pos + 1) % len],
        Some(pos) => order[(pos + len - 1) % len],
        None if forward => order[0],
        None => order[len - 1],
    };
    let moved = focused() != Some(target);
    set(Some(target));
    moved
}

/// Returns false when focus did not move.
pub fn focus_next() -> bool {
    step(true)
}

pub fn focus_previous() -> bool {
    step(false)
}

/// Focus `index` if it is focusable.
pub fn focus(index: usize) -> bool {
    let ok = FOCUSABLES.with(|f| f.borrow().contains(&index));
    if ok {
        set(Some(index));
    }
    ok
}

pub fn blur() {
    set(None);
}

pub fn reset_focus_state() {
    set(None);
    FOCUSABLES.with(|f| f.borrow_mut().clear());
}

#[cfg(test)]
mod tests {
    use super::*;
    use spark_signals::effect;
    use std::cell::Cell;
    use std::rc::Rc;

    fn nav(items: &[usize]) {
        reset_focus_state();
        set_focusables(items.to_vec());
    }

    #[test]
    fn tab_cycles_and_wraps() {
        nav(&[2, 4, 6]);
        assert!(focus_next());
        assert_eq!(focused(), Some(2));
        focus_next();
        focus_next();
        assert_eq!(focused(), Some(6));
        focus_next();
        assert_eq!(focused(), Some(2));
    }

    #[test]
    fn shift_tab_from_nothing_lands_on_last() {
        nav(&[2, 4, 6]);
        assert!(focus_previous());
        assert_eq!(focused(), Some(6));
    }

    #[test]
    fn single_item_does_not_move() {
        nav(&[5]);
        assert!(focus_next());
        assert!(!focus_next());
        assert!(is_focused(5));
    }

    #[test]
    fn only_nav_items_take_focus() {
        nav(&[2, 4]);
        assert!(!focus(3));
        assert!(focus(4));
        assert!(is_focused(4));
        blur();
        assert_eq!(focused(), None);
    }

    #[test]
    fn no_nav_items_means_no_focus() {
        nav(&[]);
        assert!(!focus_next());
        assert_eq!(focused(), None);
    }

    #[test]
    fn rebuilt_nav_keeps_or_drops_focus() {
        nav(&[2, 4]);
        focus(4);
        set_focusables(vec![4, 8]);
        assert!(is_focused(4));
        set_focusables(vec![1]);
        assert_eq!(focused(), None);
    }

    #[test]
    fn focus_changes_rerun_effects() {
        nav(&[1, 2]);
        let runs = Rc::new(Cell::new(0));
        let counter = runs.clone();
        let stop = effect(move || {
            let _ = focused();
            counter.set(counter.get() + 1);
        });
        let before = runs.get();
        focus_next();
        assert_eq!(runs.get(), before + 1);
        stop();
    }
}
