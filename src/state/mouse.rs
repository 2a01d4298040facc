//! Pointer input: hit testing, hover tracking and clicks.
//!
//! Every frame the painter records which node owns each screen cell in the
//! [`HitGrid`]. Pointer events look the cell up and run the handlers the
//! session registered for that node with [`on_component`].
//!
//! Hover moves fire leave on the old node before enter on the new one. A
//! click needs press and release on the same node with the same button, so
//! dragging off a link cancels it.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use spark_signals::{signal, Signal};

use super::keyboard::Modifiers;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MouseAction {
    Down,
    Up,
    Move,
    Drag,
    Scroll,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MouseButton {
    Left,
    Middle,
    Right,
    #[default]
    None,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollDirection {
    Up,
    Down,
    Left,
    Right,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MouseEvent {
    pub action: MouseAction,
    pub button: MouseButton,
    /// Screen column, 0-based.
    pub x: u16,
    /// Screen row, 0-based.
    pub y: u16,
    pub modifiers: Modifiers,
    /// Wheel direction; `None` unless `action` is `Scroll`.
    pub scroll: Option<ScrollDirection>,
    /// Node under the pointer, set by [`dispatch`].
    pub component_index: Option<usize>,
}

impl MouseEvent {
    pub fn new(action: MouseAction, button: MouseButton, x: u16, y: u16) -> Self {
        Self {
            action,
            button,
            x,
            y,
            modifiers: Modifiers::default(),
            scroll: None,
            component_index: None,
        }
    }

    pub fn move_to(x: u16, y: u16) -> Self {
        Self::new(MouseAction::Move, MouseButton::None, x, y)
    }

    pub fn down(button: MouseButton, x: u16, y: u16) -> Self {
        Self::new(MouseAction::Down, button, x, y)
    }

    pub fn up(button: MouseButton, x: u16, y: u16) -> Self {
        Self::new(MouseAction::Up, button, x, y)
    }

    pub fn scroll(x: u16, y: u16, direction: ScrollDirection) -> Self {
        let mut event = Self::new(MouseAction::Scroll, MouseButton::None, x, y);
        event.scroll = Some(direction);
        event
    }
}

/// Screen cell to node index, rebuilt after every paint.
pub struct HitGrid {
    width: u16,
    height: u16,
    owners: Vec<Option<usize>>,
}

impl HitGrid {
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            width,
            height,
            owners: vec![None; usize::from(width) * usize::from(height)],
        }
    }

    /// Resize and forget every owner.
    pub fn reset(&mut self, width: u16, height: u16) {
        self.width = width;
        self.height = height;
        self.owners.clear();
        self.owners.resize(usize::from(width) * usize::from(height), None);
    }

    /// Claim a rectangle for `index`. Later claims win; the rect is clipped.
    pub fn claim(&mut self, x: u16, y: u16, width: u16, height: u16, index: usize) {
        let right = x.saturating_add(width).min(self.width);
        let bottom = y.saturating_add(height).min(self.height);
        if x >= right {
            return;
        }
        for row in y..bottom {
            let start = usize::from(row) * usize::from(self.width);
            self.owners[start + usize::from(x)..start + usize::from(right)].fill(Some(index));
        }
    }

    pub fn owner(&self, x: u16, y: u16) -> Option<usize> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.owners[usize::from(y) * usize::from(self.width) + usize::from(x)]
    }
}

/// Handlers for one node. Each gets the event that triggered it.
#[derive(Default, Clone)]
pub struct MouseHandlers {
    pub on_click: Option<Rc<dyn Fn(&MouseEvent)>>,
    pub on_mouse_enter: Option<Rc<dyn Fn(&MouseEvent)>>,
    pub on_mouse_leave: Option<Rc<dyn Fn(&MouseEvent)>>,
}

/// Where a press started, waiting for its release.
#[derive(Clone, Copy)]
struct Press {
    node: usize,
    button: MouseButton,
}

thread_local! {
    static GRID: RefCell<HitGrid> = RefCell::new(HitGrid::new(80, 24));
    static HANDLERS: RefCell<HashMap<usize, MouseHandlers>> = RefCell::new(HashMap::new());
    static PRESS: RefCell<Option<Press>> = const { RefCell::new(None) };
    static POSITION: Signal<(u16, u16)> = signal((0, 0));
    static HOVERED: Signal<Option<usize>> = signal(None);
}

pub fn resize_hit_grid(width: u16, height: u16) {
    GRID.with(|g| g.borrow_mut().reset(width, height));
}

pub fn fill_hit_rect(x: u16, y: u16, width: u16, height: u16, index: usize) {
    GRID.with(|g| g.borrow_mut().claim(x, y, width, height, index));
}

pub fn hit_test(x: u16, y: u16) -> Option<usize> {
    GRID.with(|g| g.borrow().owner(x, y))
}

pub fn mouse_position() -> (u16, u16) {
    POSITION.with(|s| s.get())
}

/// Node under the pointer. Reactive.
pub fn hovered_component() -> Option<usize> {
    HOVERED.with(|s| s.get())
}

/// Register `handlers` for `index`. Call the returned closure to remove them.
pub fn on_component(index: usize, handlers: MouseHandlers) -> impl FnOnce() {
    HANDLERS.with(|h| h.borrow_mut().insert(index, handlers));
    move || {
        HANDLERS.with(|h| h.borrow_mut().remove(&index));
        if hovered_component() == Some(index) {
            HOVERED.with(|s| s.set(None));
        }
    }
}

/// Cloned out so a handler may register or remove handlers itself.
fn handlers(index: usize) -> Option<MouseHandlers> {
    HANDLERS.with(|h| h.borrow().get(&index).cloned())
}

/// Route one pointer event. Returns true when it completed a click on a
/// node with a click handler.
pub fn dispatch(mut event: MouseEvent) -> bool {
    event.component_index = hit_test(event.x, event.y);
    POSITION.with(|s| s.set((event.x, event.y)));
    hover_to(&event);

    match event.action {
        MouseAction::Down => {
            let press = event.component_index.map(|node| Press { node, button: event.button });
            PRESS.with(|p| *p.borrow_mut() = press);
            false
        }
        MouseAction::Up => release(&event),
        _ => false,
    }
}

fn hover_to(event: &MouseEvent) {
    let old = hovered_component();
    let new = event.component_index;
    if old == new {
        return;
    }

    if let Some(leave) = old.and_then(handlers).and_then(|h| h.on_mouse_leave) {
        let mut left = event.clone();
        left.component_index = old;
        leave(&left);
    }
    if let Some(enter) = new.and_then(handlers).and_then(|h| h.on_mouse_enter) {
        enter(event);
    }
    HOVERED.with(|s| s.set(new));
}

fn release(event: &MouseEvent) -> bool {
    let Some(press) = PRESS.with(|p| p.borrow_mut().take()) else {
        return false;
    };
    if event.component_index != Some(press.node) || event.button != press.button {
        return false;
    }
    match handlers(press.node).and_then(|h| h.on_click) {
        Some(click) => {
            click(event);
            true
        }
        None => false,
    }
}

/// Leave whatever node is hovered, e.g. when the page scrolls under a
/// stationary pointer.
pub fn clear_hover() {
    hover_to(&MouseEvent::move_to(u16::MAX, u16::MAX));
}

pub fn reset_mouse_state() {
    HANDLERS.with(|h| h.borrow_mut().clear());
    PRESS.with(|p| *p.borrow_mut() = None);
    POSITION.with(|s| s.set((0, 0)));
    HOVERED.with(|s| s.set(None));
    resize_hit_grid(80, 24);
}
