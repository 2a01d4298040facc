//! State Module - Runtime state management systems
//!
//! The reactive state systems that power page interactivity:
//!
//! - **Mouse** - HitGrid, event dispatch, hover tracking
//! - **Keyboard** - Key events and bindings
//! - **Input** - crossterm event conversion and polling
//! - **Focus** - Tab cycling over nav items
//! - **Scroll** - Page scroll offset and bounds
//! - **Anchor** - In-page jump targets
//! - **Hover** - Hover transforms and highlights
//! - **Reveal** - Once-only entrance transitions, viewport observation
//! - **Animate** - Transition timing and clocks

pub mod anchor;
pub mod animate;
pub mod focus;
pub mod hover;
pub mod input;
pub mod keyboard;
pub mod mouse;
pub mod reveal;
pub mod scroll;

pub use anchor::AnchorTable;
pub use animate::{Clock, ManualClock, SystemClock, Transition};
pub use input::InputEvent;
pub use keyboard::{key_action, KeyAction, KeyState, KeyboardEvent, Modifiers};
pub use mouse::{MouseAction, MouseButton, MouseEvent, MouseHandlers, ScrollDirection};
pub use reveal::{
    RevealPhase, RevealRegistry, RevealState, RevealVisual, Unobserved, ViewportObserver,
    VisibilityCapability, REVEAL_OFFSET,
};
