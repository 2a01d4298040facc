//! Theme System for folio-tui.
//!
//! Provides semantic color slots for the page. Nodes never carry concrete
//! colors; they name a [`ColorRole`] and the painter resolves it against the
//! active [`Theme`].
//!
//! # Color Types
//!
//! - `ThemeColor::Default` - Uses terminal's default color
//! - `ThemeColor::Ansi(n)` - ANSI palette index (0-255)
//! - `ThemeColor::Rgb(rgba)` - Explicit RGB color
//!
//! # Example
//!
//! ```rust
//! use folio_tui::theme::{get_preset, ColorRole};
//!
//! let theme = get_preset("emerald").unwrap();
//! let accent = theme.resolve(ColorRole::Accent);
//! assert!(!accent.is_terminal_default());
//! ```

pub mod presets;

pub use presets::*;

use crate::config::ColorOverrides;
use crate::error::{FolioError, Result};
use crate::types::Rgba;

// =============================================================================
// ThemeColor
// =============================================================================

/// A theme slot value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThemeColor {
    /// Use terminal's default color.
    #[default]
    Default,
    /// ANSI palette index (0-255).
    Ansi(u8),
    /// Explicit RGB color.
    Rgb(Rgba),
}

impl ThemeColor {
    /// Resolve to Rgba.
    pub fn resolve(&self) -> Rgba {
        match self {
            Self::Default => Rgba::TERMINAL_DEFAULT,
            Self::Ansi(i) => Rgba::ansi(*i),
            Self::Rgb(c) => *c,
        }
    }
}

impl From<Rgba> for ThemeColor {
    fn from(color: Rgba) -> Self {
        Self::Rgb(color)
    }
}

// =============================================================================
// ColorRole - what a node asks for
// =============================================================================

/// Semantic color a node paints with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub enum ColorRole {
    /// Body copy.
    #[default]
    Text,
    /// Headings and names.
    Bright,
    /// Secondary copy (degrees, descriptions).
    Muted,
    /// Tertiary copy (footnotes, levels).
    Dim,
    /// Brand accent.
    Accent,
    /// Stronger accent for markers and buttons.
    AccentStrong,
    /// Page background.
    Background,
    /// Card background.
    Surface,
    /// Card background while hovered.
    SurfaceHover,
    /// Dividers and card borders.
    Border,
}

// =============================================================================
// Theme
// =============================================================================

/// Theme definition with all semantic colors the page uses.
#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    pub name: String,
    pub text: ThemeColor,
    pub bright: ThemeColor,
    pub muted: ThemeColor,
    pub dim: ThemeColor,
    pub accent: ThemeColor,
    pub accent_strong: ThemeColor,
    pub background: ThemeColor,
    pub surface: ThemeColor,
    pub surface_hover: ThemeColor,
    pub border: ThemeColor,
}

impl Theme {
    /// Resolve a role to a concrete color.
    pub fn resolve(&self, role: ColorRole) -> Rgba {
        self.slot(role).resolve()
    }

    fn slot(&self, role: ColorRole) -> ThemeColor {
        match role {
            ColorRole::Text => self.text,
            ColorRole::Bright => self.bright,
            ColorRole::Muted => self.muted,
            ColorRole::Dim => self.dim,
            ColorRole::Accent => self.accent,
            ColorRole::AccentStrong => self.accent_strong,
            ColorRole::Background => self.background,
            ColorRole::Surface => self.surface,
            ColorRole::SurfaceHover => self.surface_hover,
            ColorRole::Border => self.border,
        }
    }

    /// Apply `#rrggbb` overrides from config on top of this theme.
    pub fn with_overrides(mut self, overrides: &ColorOverrides) -> Result<Self> {
        let slots: [(&str, &Option<String>, &mut ThemeColor); 6] = [
            ("text", &overrides.text, &mut self.text),
            ("bright", &overrides.bright, &mut self.bright),
            ("muted", &overrides.muted, &mut self.muted),
            ("accent", &overrides.accent, &mut self.accent),
            ("background", &overrides.background, &mut self.background),
            ("border", &overrides.border, &mut self.border),
        ];
        for (role, value, slot) in slots {
            if let Some(value) = value {
                let color = Rgba::parse_hex(value).ok_or_else(|| FolioError::InvalidColor {
                    role: role.to_string(),
                    value: value.clone(),
                })?;
                *slot = ThemeColor::Rgb(color);
            }
        }
        Ok(self)
    }
}

impl Default for Theme {
    fn default() -> Self {
        emerald()
    }
}

/// Look up a preset by name, as an error when unknown.
pub fn require_preset(name: &str) -> Result<Theme> {
    get_preset(name).ok_or_else(|| FolioError::UnknownTheme {
        name: name.to_string(),
        available: preset_names().join(", "),
    })
}
