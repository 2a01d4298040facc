//! Theme presets.
//!
//! - emerald (default - the portfolio's own palette)
//! - terminal (uses ANSI colors to respect the user's terminal theme)
//! - mono (no accent hue, for low-color terminals and screenshots)

use super::{Theme, ThemeColor};
use crate::types::Rgba;

/// Emerald on zinc - the page's native palette.
pub fn emerald() -> Theme {
    Theme {
        name: "emerald".to_string(),
        text: ThemeColor::Rgb(Rgba::rgb(0xd4, 0xd4, 0xd8)),          // zinc-300
        bright: ThemeColor::Rgb(Rgba::WHITE),
        muted: ThemeColor::Rgb(Rgba::rgb(0xa1, 0xa1, 0xaa)),         // zinc-400
        dim: ThemeColor::Rgb(Rgba::rgb(0x71, 0x71, 0x7a)),           // zinc-500
        accent: ThemeColor::Rgb(Rgba::rgb(0x34, 0xd3, 0x99)),        // emerald-400
        accent_strong: ThemeColor::Rgb(Rgba::rgb(0x10, 0xb9, 0x81)), // emerald-500
        background: ThemeColor::Rgb(Rgba::rgb(0x09, 0x09, 0x0b)),    // zinc-950
        surface: ThemeColor::Rgb(Rgba::rgb(0x18, 0x18, 0x1b)),       // zinc-900
        surface_hover: ThemeColor::Rgb(Rgba::rgb(0x27, 0x27, 0x2a)), // zinc-800
        border: ThemeColor::Rgb(Rgba::rgb(0x3f, 0x3f, 0x46)),        // zinc-700
    }
}

/// Terminal theme - ANSI colors only.
pub fn terminal() -> Theme {
    Theme {
        name: "terminal".to_string(),
        text: ThemeColor::Default,
        bright: ThemeColor::Ansi(15),
        muted: ThemeColor::Ansi(7),
        dim: ThemeColor::Ansi(8),
        accent: ThemeColor::Ansi(10),
        accent_strong: ThemeColor::Ansi(2),
        background: ThemeColor::Default,
        surface: ThemeColor::Default,
        surface_hover: ThemeColor::Ansi(0),
        border: ThemeColor::Ansi(8),
    }
}

/// Monochrome grays.
pub fn mono() -> Theme {
    Theme {
        name: "mono".to_string(),
        text: ThemeColor::Rgb(Rgba::rgb(0xd0, 0xd0, 0xd0)),
        bright: ThemeColor::Rgb(Rgba::WHITE),
        muted: ThemeColor::Rgb(Rgba::rgb(0xa0, 0xa0, 0xa0)),
        dim: ThemeColor::Rgb(Rgba::rgb(0x70, 0x70, 0x70)),
        accent: ThemeColor::Rgb(Rgba::rgb(0xf0, 0xf0, 0xf0)),
        accent_strong: ThemeColor::Rgb(Rgba::rgb(0xc0, 0xc0, 0xc0)),
        background: ThemeColor::Rgb(Rgba::rgb(0x10, 0x10, 0x10)),
        surface: ThemeColor::Rgb(Rgba::rgb(0x1c, 0x1c, 0x1c)),
        surface_hover: ThemeColor::Rgb(Rgba::rgb(0x2c, 0x2c, 0x2c)),
        border: ThemeColor::Rgb(Rgba::rgb(0x44, 0x44, 0x44)),
    }
}

/// Get a preset by name.
pub fn get_preset(name: &str) -> Option<Theme> {
    match name {
        "emerald" => Some(emerald()),
        "terminal" => Some(terminal()),
        "mono" => Some(mono()),
        _ => None,
    }
}

/// Names of all presets.
pub fn preset_names() -> &'static [&'static str] {
    &["emerald", "terminal", "mono"]
}
