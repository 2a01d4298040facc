//! Escape sequences the renderers write.
//!
//! Every function writes one sequence into any [`Write`] sink, usually the
//! [`CellWriter`](super::CellWriter) buffer. Fixed sequences come
//! from the `fixed!` table; colors, attributes and hyperlinks take arguments.

use crate::types::{Attr, Rgba};
use std::io::{Result, Write};

macro_rules! fixed {
    ($($(#[$doc:meta])* $name:ident => $seq:literal;)*) => {
        $(
            $(#[$doc])*
            #[inline]
            pub fn $name<W: Write>(w: &mut W) -> Result<()> {
                w.write_all($seq.as_bytes())
            }
        )*
    };
}

fixed! {
    cursor_hide => "\x1b[?25l";
    cursor_show => "\x1b[?25h";
    /// Clears the visible screen, not the scrollback.
    erase_screen => "\x1b[2J";
    enter_alt_screen => "\x1b[?1049h";
    exit_alt_screen => "\x1b[?1049l";
    /// Terminals that support mode 2026 hold output until [`end_sync`].
    begin_sync => "\x1b[?2026h";
    end_sync => "\x1b[?2026l";
    /// Drops every color and attribute.
    reset => "\x1b[0m";
    /// Ends the hyperlink opened by [`link_open`].
    link_close => "\x1b]8;;\x07";
}

/// Cell coordinates are 0-based; the terminal counts from 1.
#[inline]
pub fn cursor_to<W: Write>(w: &mut W, x: u16, y: u16) -> Result<()> {
    write!(w, "\x1b[{};{}H", y + 1, x + 1)
}

/// Which half of an SGR color pair to write.
#[derive(Clone, Copy)]
enum Layer {
    Fg,
    Bg,
}

impl Layer {
    /// (default, base of the 8 normal colors, base of the 8 bright ones, extended)
    const fn codes(self) -> (u8, u8, u8, u8) {
        match self {
            Layer::Fg => (39, 30, 90, 38),
            Layer::Bg => (49, 40, 100, 48),
        }
    }
}

fn color<W: Write>(w: &mut W, layer: Layer, color: Rgba) -> Result<()> {
    let (default, normal, bright, extended) = layer.codes();
    if color.is_terminal_default() {
        return write!(w, "\x1b[{default}m");
    }
    if !color.is_ansi() {
        return write!(w, "\x1b[{extended};2;{};{};{}m", color.r, color.g, color.b);
    }
    match color.ansi_index() {
        i @ 0..=7 => write!(w, "\x1b[{}m", normal + i),
        i @ 8..=15 => write!(w, "\x1b[{}m", bright + i - 8),
        i => write!(w, "\x1b[{extended};5;{i}m"),
    }
}

/// Theme colors resolve to truecolor; palette colors keep their 16/256 code.
#[inline]
pub fn fg<W: Write>(w: &mut W, c: Rgba) -> Result<()> {
    color(w, Layer::Fg, c)
}

#[inline]
pub fn bg<W: Write>(w: &mut W, c: Rgba) -> Result<()> {
    color(w, Layer::Bg, c)
}

const SGR_ATTRS: [(Attr, u8); 6] = [
    (Attr::BOLD, 1),
    (Attr::DIM, 2),
    (Attr::ITALIC, 3),
    (Attr::UNDERLINE, 4),
    (Attr::INVERSE, 7),
    (Attr::STRIKETHROUGH, 9),
];

/// Writes every set attribute in one SGR sequence. Nothing for an empty set.
pub fn attrs<W: Write>(w: &mut W, attr: Attr) -> Result<()> {
    let codes: Vec<String> = SGR_ATTRS
        .iter()
        .filter(|(flag, _)| attr.contains(*flag))
        .map(|(_, code)| code.to_string())
        .collect();
    if codes.is_empty() {
        return Ok(());
    }
    write!(w, "\x1b[{}m", codes.join(";"))
}

/// Window title, shown by most emulators in the tab bar.
#[inline]
pub fn set_title<W: Write>(w: &mut W, title: &str) -> Result<()> {
    write!(w, "\x1b]0;{title}\x07")
}

/// OSC 8: cells written until [`link_close`] open `url` when clicked.
#[inline]
pub fn link_open<W: Write>(w: &mut W, url: &str) -> Result<()> {
    write!(w, "\x1b]8;;{url}\x07")
}
