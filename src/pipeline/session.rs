//! Session - one mounted page and everything it reacts to.
//!
//! A session owns the node tree, its layout, the reveal registry and the
//! per-node pointer handlers. It turns input events into state changes and
//! paints frames, but never touches the terminal itself; [`super::mount`]
//! does the I/O.
//!
//! # Viewport
//!
//! The nav bar is pinned to the top `nav_height` rows. The body scrolls
//! below it, so the visible document rows are
//! `[nav_height + scroll, nav_height + scroll + (height - nav_height))`.
//! Every change to scroll or layout pushes that range to the
//! [`ViewportObserver`], which is what triggers section reveals.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use spark_signals::effect;
use tracing::{debug, info};

use crate::components::{self, NAV_INDEX};
use crate::content::Portfolio;
use crate::error::{FolioError, Result};
use crate::layout::{compute_layout, ComputedLayout};
use crate::renderer::FrameBuffer;
use crate::state::animate::{Clock, Transition};
use crate::state::anchor::AnchorTable;
use crate::state::keyboard::{key_action, KeyAction, KeyboardEvent};
use crate::state::mouse::{self, MouseAction, MouseEvent, MouseHandlers, ScrollDirection};
use crate::state::reveal::{RevealRegistry, ViewportObserver};
use crate::state::{focus, hover, scroll, InputEvent};
use crate::theme::{ColorRole, Theme};
use crate::types::ClipRect;
use crate::view::{glyph, LinkTarget, Node, NodeKind, Role};

use super::frame_buffer::{paint_status, paint_subtree, subtree_len, FrameBufferResult, PaintContext, Placement};
use super::terminal::{set_terminal_size, terminal_height, terminal_width};

/// Something a pointer handler asked the session to do.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Action {
    Follow(LinkTarget),
}

pub struct Session {
    theme: Theme,
    page: Node,
    body_index: usize,
    layout: ComputedLayout,
    observer: Rc<ViewportObserver>,
    reveals: RevealRegistry,
    anchors: AnchorTable,
    /// Link target per node index.
    links: Vec<(usize, LinkTarget)>,
    actions: Rc<RefCell<Vec<Action>>>,
    status: Option<String>,
    dirty: Rc<Cell<bool>>,
    cleanups: Vec<Box<dyn FnOnce()>>,
}

impl Session {
    /// Build the page for `portfolio` at the current terminal size.
    pub fn new(
        portfolio: &Portfolio,
        theme: Theme,
        transition: Transition,
        clock: Rc<dyn Clock>,
    ) -> Result<Self> {
        let page = components::page(portfolio);
        let nav = page
            .children
            .first()
            .ok_or_else(|| FolioError::Layout("page has no nav bar".to_string()))?;
        let body_index = NAV_INDEX + subtree_len(nav);
        let layout = compute_layout(&page, terminal_width())?;

        let observer = Rc::new(ViewportObserver::new());
        let mut reveals = RevealRegistry::new(transition, clock);
        let anchors = AnchorTable::collect(&page);
        let actions = Rc::new(RefCell::new(Vec::new()));
        let mut cleanups: Vec<Box<dyn FnOnce()>> = Vec::new();
        let mut links = Vec::new();
        let mut nav_items = Vec::new();

        for (index, node) in page.walk().into_iter().enumerate() {
            if let Some(spec) = node.reveal {
                reveals.attach(index, spec, observer.as_ref());
            }
            if node.role == Role::NavItem {
                nav_items.push(index);
            }
            if let NodeKind::Link(link) = &node.kind {
                links.push((index, link.target.clone()));
            }
            if let Some(handlers) = pointer_handlers(index, node, &actions) {
                cleanups.push(Box::new(mouse::on_component(index, handlers)));
            }
        }

        focus::set_focusables(nav_items);

        // Anything painted reads these; a change means a new frame
        let dirty = Rc::new(Cell::new(true));
        let watch = dirty.clone();
        let stop = effect(move || {
            scroll::scroll_offset();
            mouse::hovered_component();
            focus::focused();
            terminal_height();
            watch.set(true);
        });
        cleanups.push(Box::new(stop));

        info!(
            nodes = layout.len(),
            reveals = reveals.len(),
            anchors = anchors.len(),
            "page mounted"
        );

        let session = Self {
            theme,
            page,
            body_index,
            layout,
            observer,
            reveals,
            anchors,
            links,
            actions,
            status: None,
            dirty,
            cleanups,
        };
        session.sync_viewport();
        Ok(session)
    }

    // -- queries -------------------------------------------------------------

    pub fn page(&self) -> &Node {
        &self.page
    }

    pub fn layout(&self) -> &ComputedLayout {
        &self.layout
    }

    pub fn reveals(&self) -> &RevealRegistry {
        &self.reveals
    }

    pub fn anchors(&self) -> &AnchorTable {
        &self.anchors
    }

    pub fn status(&self) -> Option<&str> {
        self.status.as_deref()
    }

    /// Rows taken by the pinned nav bar.
    pub fn nav_height(&self) -> u16 {
        self.layout
            .height
            .get(NAV_INDEX)
            .copied()
            .unwrap_or(0)
            .min(terminal_height())
    }

    /// Rows of scrolling document below the nav bar.
    pub fn viewport_height(&self) -> u16 {
        terminal_height().saturating_sub(self.nav_height())
    }

    /// Document rows currently on screen below the nav bar.
    pub fn viewport(&self) -> (u16, u16) {
        (self.nav_height() + scroll::scroll_offset(), self.viewport_height())
    }

    /// True when the next frame differs from the last one painted.
    pub fn needs_render(&self) -> bool {
        self.dirty.get() || self.reveals.is_animating()
    }

    // -- events --------------------------------------------------------------

    /// Apply one input event. Returns false when the page should close.
    pub fn handle_event(&mut self, event: InputEvent) -> Result<bool> {
        match event {
            InputEvent::Key(key) => return Ok(self.handle_key(key)),
            InputEvent::Mouse(mouse) => self.handle_mouse(mouse),
            InputEvent::Resize(width, height) => self.resize(width, height)?,
            InputEvent::None => {}
        }
        Ok(true)
    }

    fn handle_key(&mut self, event: KeyboardEvent) -> bool {
        let Some(action) = key_action(&event) else {
            return true;
        };
        self.set_status(None);

        match action {
            KeyAction::Quit => return false,
            KeyAction::ScrollLines(lines) => {
                self.scroll_by(lines * scroll::LINE_SCROLL as i32);
            }
            KeyAction::ScrollPages(pages) => {
                self.scroll_by(pages * scroll::page_delta(self.viewport_height()));
            }
            KeyAction::Top => {
                if scroll::scroll_to_top() {
                    self.after_scroll();
                }
            }
            KeyAction::Bottom => {
                if scroll::scroll_to_bottom() {
                    self.after_scroll();
                }
            }
            KeyAction::Jump(n) => {
                if let Some((_, anchor)) = components::NAV_ITEMS.get(n) {
                    self.jump_to(anchor);
                }
            }
            KeyAction::FocusNext => {
                focus::focus_next();
            }
            KeyAction::FocusPrev => {
                focus::focus_previous();
            }
            KeyAction::Activate => {
                if let Some(target) = focus::focused().and_then(|idx| self.link_target(idx)) {
                    self.follow(&target);
                }
            }
        }
        true
    }

    fn handle_mouse(&mut self, event: MouseEvent) {
        if event.action == MouseAction::Scroll {
            let delta = scroll::WHEEL_SCROLL as i32;
            match event.scroll {
                Some(ScrollDirection::Up) => self.scroll_by(-delta),
                Some(ScrollDirection::Down) => self.scroll_by(delta),
                _ => {}
            }
            return;
        }

        mouse::dispatch(event);

        let pending: Vec<Action> = self.actions.borrow_mut().drain(..).collect();
        for action in pending {
            match action {
                Action::Follow(target) => self.follow(&target),
            }
        }
    }

    /// Re-lay out the same tree at a new size. Reveals already played stay played.
    pub fn resize(&mut self, width: u16, height: u16) -> Result<()> {
        set_terminal_size(width, height);
        self.layout = compute_layout(&self.page, width)?;
        mouse::clear_hover();
        debug!(width, height, content_height = self.layout.content_height, "relayout");
        self.sync_viewport();
        self.dirty.set(true);
        Ok(())
    }

    // -- navigation ----------------------------------------------------------

    fn scroll_by(&mut self, delta: i32) {
        if scroll::scroll_by(delta) {
            self.after_scroll();
        }
    }

    fn after_scroll(&mut self) {
        // Whatever was under the pointer has moved
        mouse::clear_hover();
        self.sync_viewport();
    }

    /// Scroll so the node anchored at `id` sits at the top of the viewport.
    ///
    /// Returns false for an unknown anchor.
    pub fn jump_to(&mut self, id: &str) -> bool {
        let Some(target) =
            self.anchors
                .scroll_target(id, &self.layout, self.nav_height(), scroll::max_scroll())
        else {
            debug!(anchor = id, "no such anchor");
            return false;
        };
        info!(anchor = id, offset = target, "jump to anchor");
        if scroll::set_scroll_offset(target) {
            self.after_scroll();
        }
        true
    }

    /// Activate a link.
    pub fn follow(&mut self, target: &LinkTarget) {
        match target {
            LinkTarget::Anchor(id) => {
                self.jump_to(id);
            }
            LinkTarget::External { .. } | LinkTarget::Mail(_) => {
                let href = target.href();
                info!(href = %href, "link activated");
                let icon = glyph("external-link").unwrap_or_default();
                self.set_status(Some(format!("{icon} {href}")));
            }
            LinkTarget::Placeholder => {
                debug!("placeholder link activated");
            }
        }
    }

    fn link_target(&self, index: usize) -> Option<LinkTarget> {
        self.links
            .iter()
            .find(|(idx, _)| *idx == index)
            .map(|(_, target)| target.clone())
    }

    fn set_status(&mut self, status: Option<String>) {
        if self.status != status {
            self.status = status;
            self.dirty.set(true);
        }
    }

    /// Push the scroll bound and visible rows to the observer.
    fn sync_viewport(&self) {
        scroll::set_max_scroll(self.layout.content_height.saturating_sub(terminal_height()));
        let (top, height) = self.viewport();
        self.observer.update(top, height, &self.layout);
    }

    // -- paint ---------------------------------------------------------------

    /// Paint the current frame and load its hit regions into the hit grid.
    pub fn render_frame(&mut self) -> FrameBufferResult {
        let width = terminal_width();
        let height = terminal_height();
        let nav_height = self.nav_height();
        let scrolled = scroll::scroll_offset() as i32;

        let mut buffer = FrameBuffer::filled(width, height, self.theme.resolve(ColorRole::Background));
        let mut hit_regions = Vec::new();
        let ctx = PaintContext {
            theme: &self.theme,
            reveals: Some(&self.reveals),
            focused: focus::focused(),
        };

        if let (Some(nav), Some(body)) = (self.page.children.first(), self.page.children.get(1)) {
            if height > nav_height {
                let placement = Placement {
                    dy: -scrolled,
                    clip: ClipRect::new(0, nav_height, width, height - nav_height),
                };
                paint_subtree(&mut buffer, body, self.body_index, &self.layout, &ctx, placement, &mut hit_regions);
            }
            // Nav last so it stays on top
            let placement = Placement {
                dy: 0,
                clip: ClipRect::new(0, 0, width, nav_height),
            };
            paint_subtree(&mut buffer, nav, NAV_INDEX, &self.layout, &ctx, placement, &mut hit_regions);
        }

        if let Some(status) = &self.status {
            paint_status(&mut buffer, &self.theme, status);
        }

        mouse::resize_hit_grid(width, height);
        for region in &hit_regions {
            mouse::fill_hit_rect(region.x, region.y, region.width, region.height, region.component_index);
        }

        self.dirty.set(false);
        FrameBufferResult {
            buffer,
            hit_regions,
            terminal_size: (width, height),
        }
    }
}

impl Drop for Session {
    fn drop(&mut self) {
        for cleanup in self.cleanups.drain(..) {
            cleanup();
        }
        hover::reset_hover_state();
        focus::set_focusables(Vec::new());
    }
}

/// Pointer handlers for a link or hoverable node, if it is either.
fn pointer_handlers(
    index: usize,
    node: &Node,
    actions: &Rc<RefCell<Vec<Action>>>,
) -> Option<MouseHandlers> {
    let target = match &node.kind {
        NodeKind::Link(link) => Some(link.target.clone()),
        _ => None,
    };
    if target.is_none() && node.hover.is_none() {
        return None;
    }

    let effect = node.hover;
    let mut handlers = MouseHandlers {
        on_mouse_enter: Some(Rc::new(move |_: &MouseEvent| hover::enter(index, effect))),
        on_mouse_leave: Some(Rc::new(move |_: &MouseEvent| hover::leave(index))),
        ..MouseHandlers::default()
    };
    if let Some(target) = target {
        let actions = actions.clone();
        handlers.on_click = Some(Rc::new(move |_: &MouseEvent| {
            actions.borrow_mut().push(Action::Follow(target.clone()));
        }));
    }
    Some(handlers)
}
