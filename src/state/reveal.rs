//! Reveal-on-scroll.
//!
//! A revealable node starts hidden (opacity 0, shifted by its `from`
//! transform) and plays its entrance transition exactly once: the first
//! time it becomes visible, or on mount for nodes that do not wait for the
//! viewport.
//!
//! Visibility comes from a [`VisibilityCapability`]. The terminal implements
//! it with [`ViewportObserver`], which writes one `Signal<bool>` per observed
//! node; each reveal is an `effect` on that signal. When no capability is
//! available ([`Unobserved`]) the node is shown immediately, fully visible.
//!
//! # Example
//!
//! ```rust
//! use std::rc::Rc;
//! use folio_tui::state::animate::{ManualClock, Transition};
//! use folio_tui::state::reveal::{RevealRegistry, Unobserved};
//! use folio_tui::view::{RevealSpec, RevealTrigger, Transform};
//!
//! let mut reveals = RevealRegistry::new(Transition::instant(), Rc::new(ManualClock::new()));
//! let spec = RevealSpec { trigger: RevealTrigger::InView, from: Transform { dx: 0, dy: 2, inflate: 0 } };
//! reveals.attach(7, spec, &Unobserved);
//!
//! // No way to observe the viewport: shown straight away.
//! assert_eq!(reveals.visual(7).unwrap().opacity, 1.0);
//! ```

use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::rc::Rc;
use std::time::Instant;

use spark_signals::{effect, signal, Signal};
use tracing::debug;

use super::animate::{Clock, Transition};
use crate::layout::ComputedLayout;
use crate::view::{RevealSpec, RevealTrigger, Transform};

/// Rows a section sits below its resting place before it reveals.
pub const REVEAL_OFFSET: i16 = 2;

// =============================================================================
// VISIBILITY CAPABILITY
// =============================================================================

/// Something that can tell whether a laid-out node intersects the viewport.
pub trait VisibilityCapability {
    /// Start observing `node`. `None` means observation is unavailable.
    fn observe(&self, node: usize) -> Option<Signal<bool>>;
}

/// No viewport to observe (static output).
#[derive(Debug, Clone, Copy, Default)]
pub struct Unobserved;

impl VisibilityCapability for Unobserved {
    fn observe(&self, _node: usize) -> Option<Signal<bool>> {
        None
    }
}

/// Row-range intersection against the scrolled viewport.
#[derive(Default)]
pub struct ViewportObserver {
    watched: RefCell<Vec<(usize, Signal<bool>)>>,
}

impl ViewportObserver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.watched.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.watched.borrow().is_empty()
    }

    /// Recompute every observed node against the viewport rows
    /// `[viewport_top, viewport_top + viewport_height)`.
    ///
    /// Call after scrolling, resizing or re-layout.
    pub fn update(&self, viewport_top: u16, viewport_height: u16, layout: &ComputedLayout) {
        let view_top = viewport_top as u32;
        let view_bottom = view_top + viewport_height as u32;

        for (node, visible) in self.watched.borrow().iter() {
            let Some(bounds) = layout.bounds(*node) else {
                continue;
            };
            let top = bounds.y as u32;
            let bottom = top + bounds.height.max(1) as u32;
            let intersects = viewport_height > 0 && top < view_bottom && bottom > view_top;

            if visible.get() != intersects {
                visible.set(intersects);
            }
        }
    }
}

impl VisibilityCapability for ViewportObserver {
    fn observe(&self, node: usize) -> Option<Signal<bool>> {
        let visible = signal(false);
        self.watched.borrow_mut().push((node, visible.clone()));
        Some(visible)
    }
}

// =============================================================================
// PER-NODE STATE
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealPhase {
    Hidden,
    Running(Instant),
    Shown,
}

/// What the painter applies to a revealable subtree.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RevealVisual {
    pub opacity: f32,
    pub offset: Transform,
}

impl RevealVisual {
    pub const VISIBLE: Self = Self {
        opacity: 1.0,
        offset: Transform::IDENTITY,
    };

    pub fn hidden(from: Transform) -> Self {
        Self {
            opacity: 0.0,
            offset: from,
        }
    }

    fn at(from: Transform, progress: f32) -> Self {
        let remaining = 1.0 - progress;
        Self {
            opacity: progress,
            offset: Transform {
                dx: (from.dx as f32 * remaining).round() as i16,
                dy: (from.dy as f32 * remaining).round() as i16,
                inflate: 0,
            },
        }
    }
}

/// Monotonic reveal flag for one node. Clones share state.
#[derive(Debug, Clone)]
pub struct RevealState {
    phase: Rc<Cell<RevealPhase>>,
    from: Transform,
}

impl RevealState {
    pub fn new(from: Transform) -> Self {
        Self {
            phase: Rc::new(Cell::new(RevealPhase::Hidden)),
            from,
        }
    }

    pub fn phase(&self) -> RevealPhase {
        self.phase.get()
    }

    pub fn has_revealed(&self) -> bool {
        self.phase.get() != RevealPhase::Hidden
    }

    /// Start the transition. Returns false if it already started.
    pub fn trigger(&self, now: Instant) -> bool {
        if self.has_revealed() {
            return false;
        }
        self.phase.set(RevealPhase::Running(now));
        true
    }

    /// Skip the transition entirely.
    pub fn show(&self) {
        self.phase.set(RevealPhase::Shown);
    }

    pub fn visual(&self, transition: Transition, now: Instant) -> RevealVisual {
        match self.phase.get() {
            RevealPhase::Hidden => RevealVisual::hidden(self.from),
            RevealPhase::Shown => RevealVisual::VISIBLE,
            RevealPhase::Running(started) => {
                if transition.is_finished(started, now) {
                    self.phase.set(RevealPhase::Shown);
                    RevealVisual::VISIBLE
                } else {
                    RevealVisual::at(self.from, transition.progress(started, now))
                }
            }
        }
    }
}

// =============================================================================
// REGISTRY
// =============================================================================

/// Every reveal on the mounted page, keyed by node index.
///
/// Owns the observation effects and stops them on drop.
pub struct RevealRegistry {
    states: HashMap<usize, RevealState>,
    transition: Transition,
    clock: Rc<dyn Clock>,
    stops: Vec<Box<dyn FnOnce()>>,
}

impl RevealRegistry {
    pub fn new(transition: Transition, clock: Rc<dyn Clock>) -> Self {
        Self {
            states: HashMap::new(),
            transition,
            clock,
            stops: Vec::new(),
        }
    }

    pub fn attach(&mut self, node: usize, spec: RevealSpec, capability: &dyn VisibilityCapability) {
        let state = RevealState::new(spec.from);

        match spec.trigger {
            RevealTrigger::Mount => {
                state.trigger(self.clock.now());
            }
            RevealTrigger::InView => match capability.observe(node) {
                Some(visible) => {
                    let watcher = state.clone();
                    let clock = self.clock.clone();
                    let stop = effect(move || {
                        if visible.get() && watcher.trigger(clock.now()) {
                            debug!(node, "reveal triggered");
                        }
                    });
                    self.stops.push(Box::new(stop));
                }
                None => {
                    debug!(node, "visibility unavailable, revealing immediately");
                    state.show();
                }
            },
        }

        self.states.insert(node, state);
    }

    pub fn state(&self, node: usize) -> Option<&RevealState> {
        self.states.get(&node)
    }

    /// Current visual for a node, or None if it has no reveal.
    pub fn visual(&self, node: usize) -> Option<RevealVisual> {
        self.states
            .get(&node)
            .map(|state| state.visual(self.transition, self.clock.now()))
    }

    /// True while any started transition is still in flight.
    pub fn is_animating(&self) -> bool {
        let now = self.clock.now();
        self.states.values().any(|state| match state.phase() {
            RevealPhase::Running(started) => !self.transition.is_finished(started, now),
            _ => false,
        })
    }

    pub fn len(&self) -> usize {
        self.states.len()
    }

    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }
}

impl Drop for RevealRegistry {
    fn drop(&mut self) {
        for stop in self.stops.drain(..) {
            stop();
        }
    }
}
