//! # folio-tui
//!
//! A personal portfolio page rendered as a reactive terminal UI.
//!
//! Built on [spark-signals](https://github.com/RLabs-Inc/spark-signals) for
//! fine-grained reactivity and [taffy](https://github.com/DioxusLabs/taffy)
//! for flexbox layout.
//!
//! ## Architecture
//!
//! The page is a tree of pure component functions returning [`view::Node`]
//! descriptions. Interaction state (scroll, hover, focus, reveal progress)
//! lives outside the tree in [`state`] and is applied at paint time:
//!
//! ```text
//! content → components → Node tree → layout → paint → FrameBuffer → renderer
//!                                      ▲          ▲
//!                          scroll / resize   hover / focus / reveals
//! ```
//!
//! ## Modules
//!
//! - [`content`] - Literal page content (skills, projects, education, profile)
//! - [`components`] - Page, sections, nav bar and list renderers
//! - [`view`] - Node descriptions, links, icons
//! - [`layout`] - Taffy layout bridge and text measurement
//! - [`state`] - Reveal, hover, anchors, scroll, focus, keyboard and mouse
//! - [`pipeline`] - Paint pass, session, mount loop and print mode
//! - [`renderer`] - Frame buffer and ANSI output (diff and inline)
//! - [`theme`] - Color roles and presets
//! - [`config`] - TOML configuration with CLI overrides
//!
//! ## Example
//!
//! ```rust
//! use folio_tui::{content, pipeline, theme};
//!
//! let mut out = Vec::new();
//! pipeline::print_page(&content::portfolio(), &theme::presets::mono(), 80, true, &mut out).unwrap();
//! assert!(String::from_utf8(out).unwrap().contains("Selected Works"));
//! ```

pub mod components;
pub mod config;
pub mod content;
pub mod error;
pub mod layout;
pub mod logging;
pub mod pipeline;
pub mod renderer;
pub mod state;
pub mod theme;
pub mod types;
pub mod view;

// Re-export commonly used items
pub use types::*;

pub use config::{CliOverrides, FolioConfig};
pub use content::{portfolio, Portfolio};
pub use error::{FolioError, Result};
pub use layout::{compute_layout, ComputedLayout};
pub use pipeline::{mount, print_page, run, tick, MountHandle, RenderMode, Session};
pub use renderer::{DiffRenderer, FrameBuffer, InlineRenderer};
pub use theme::{ColorRole, Theme};
pub use view::{LinkTarget, Node, Role};
