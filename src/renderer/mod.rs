//! Cells to bytes.
//!
//! The painter fills a [`FrameBuffer`]; a renderer turns it into escape
//! sequences. Nothing here knows about nodes, sections or reveals.
//!
//! ```text
//!   paint (pipeline) ──► FrameBuffer ──► DiffRenderer   ──► alternate screen
//!                                   └──► InlineRenderer ──► stdout / pipe
//! ```
//!
//! [`DiffRenderer`] drives the interactive page and rewrites only cells that
//! changed since the last frame. [`InlineRenderer`] prints the whole
//! document once, styled or plain.
//!
//! ```rust
//! use folio_tui::renderer::{DiffRenderer, FrameBuffer, Ink};
//! use folio_tui::types::{Attr, Rgba};
//!
//! let mut buffer = FrameBuffer::new(20, 2);
//! let all = buffer.bounds();
//! buffer.text(0, 0, "VN.", Ink::fg(Rgba::WHITE).attrs(Attr::BOLD), &all);
//!
//! let mut renderer = DiffRenderer::new();
//! let mut out = Vec::new();
//! renderer.render(&buffer, &mut out).unwrap();
//!
//! // Same frame again: no cell is rewritten
//! assert_eq!(renderer.render(&buffer, &mut out).unwrap(), 0);
//! ```

pub mod ansi;
pub mod buffer;
pub mod diff;
pub mod inline;
pub mod output;

pub use buffer::{FrameBuffer, Ink};
pub use diff::DiffRenderer;
pub use inline::InlineRenderer;
pub use output::CellWriter;
