//! Rendering Pipeline
//!
//! Connects the page components to the terminal output.
//!
//! # Pipeline Architecture
//!
//! ```text
//! components::page → Node tree → compute_layout → paint (frame_buffer) → renderer
//! ```
//!
//! ## Data Flow
//!
//! 1. **layout** - The node tree is laid out once per width, in document coordinates
//! 2. **session** - Input events move scroll, hover and focus state, and feed the
//!    viewport observer that triggers reveals
//! 3. **frame_buffer** - Paints the tree through the viewport into a FrameBuffer,
//!    collecting hit regions as data
//! 4. **mount** - Hands the frame to the diff renderer and loads the hit grid
//!
//! ## Key Design Principles
//!
//! - **Pure paint**: painting reads state, never writes it
//! - **Side effects at the edge**: only `mount` touches the terminal
//! - **Reactive dependencies**: scroll, hover, focus and terminal size are signals;
//!   a change marks the next frame dirty

pub mod frame_buffer;
pub mod mount;
pub mod session;
pub mod terminal;

// Re-exports
pub use frame_buffer::{paint_document, paint_subtree, FrameBufferResult, HitRegion, PaintContext, Placement};
pub use mount::{mount, print_page, run, tick, MountHandle};
pub use session::Session;
pub use terminal::{render_mode, set_render_mode, set_terminal_size, terminal_height, terminal_width, RenderMode};
