//! Layout Module
//!
//! Flexbox layout computation for terminal UI using Taffy.
//!
//! # Architecture
//!
//! The layout module uses [Taffy](https://github.com/DioxusLabs/taffy) for
//! W3C-compliant flexbox computation. The bridge:
//!
//! 1. Converts view node styles → Taffy styles
//! 2. Builds a Taffy tree mirroring the node tree
//! 3. Provides a measure function for text intrinsic sizing
//! 4. Extracts absolute boxes into parallel arrays indexed in document order
//!
//! # Example
//!
//! ```rust
//! use folio_tui::layout::compute_layout;
//! use folio_tui::view::Node;
//!
//! let tree = Node::boxed().child(Node::text("Vengateshwaran"));
//! let layout = compute_layout(&tree, 80).unwrap();
//! assert_eq!(layout.height[1], 1);
//! ```

mod taffy_bridge;
mod text_measure;
mod types;

pub use taffy_bridge::compute_layout_taffy as compute_layout;
pub use text_measure::*;
pub use types::*;
