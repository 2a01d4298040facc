//! Cell output with a pen.
//!
//! [`CellWriter`] turns cells into bytes. It remembers where the cursor
//! stopped and which colors, attributes and hyperlink are active, so each
//! cell costs only the escapes that differ from the one before it. The bytes
//! collect in memory and reach the terminal in a single write.

use std::io::{self, Write};

use crate::types::{Attr, Cell, Rgba};

use super::ansi;

/// What the terminal currently has set.
#[derive(Debug, Default)]
struct Pen {
    /// Cell the cursor last wrote, if known.
    at: Option<(u16, u16)>,
    fg: Option<Rgba>,
    bg: Option<Rgba>,
    attrs: Attr,
    link: Option<String>,
}

/// Buffered, state-tracking cell writer shared by both renderers.
#[derive(Debug)]
pub struct CellWriter {
    bytes: Vec<u8>,
    pen: Pen,
}

impl CellWriter {
    pub fn new() -> Self {
        Self {
            bytes: Vec::with_capacity(16 * 1024),
            pen: Pen::default(),
        }
    }

    /// Forget the pen. The next cell re-emits position and style.
    pub fn begin(&mut self) {
        self.pen = Pen::default();
    }

    /// Close a hyperlink still open after the last cell.
    pub fn finish(&mut self) {
        self.set_link(None);
    }

    /// Write `cell` at (`x`, `y`), moving the cursor only when it is not
    /// already there.
    pub fn put(&mut self, x: u16, y: u16, cell: &Cell, link: Option<&str>) {
        if cell.char == 0 {
            // Right half of a wide glyph: the terminal advanced past it
            self.pen.at = Some((x, y));
            return;
        }

        let follows = matches!(self.pen.at, Some((px, py)) if py == y && px + 1 == x);
        if !follows {
            // Never let an open link span cells we skip over
            self.set_link(None);
            let _ = ansi::cursor_to(&mut self.bytes, x, y);
        }

        self.glyph(cell, link);
        self.pen.at = Some((x, y));
    }

    /// Write `cell` wherever the cursor is. Print mode streams rows this way.
    pub fn put_inline(&mut self, cell: &Cell, link: Option<&str>) {
        if cell.char != 0 {
            self.glyph(cell, link);
        }
    }

    fn glyph(&mut self, cell: &Cell, link: Option<&str>) {
        self.set_style(cell);
        self.set_link(link);
        if let Some(c) = char::from_u32(cell.char) {
            let mut utf8 = [0u8; 4];
            self.bytes.extend_from_slice(c.encode_utf8(&mut utf8).as_bytes());
        }
    }

    fn set_style(&mut self, cell: &Cell) {
        if cell.attrs != self.pen.attrs {
            // SGR has no per-attribute off switch that works everywhere
            let _ = ansi::reset(&mut self.bytes);
            let _ = ansi::attrs(&mut self.bytes, cell.attrs);
            self.pen.attrs = cell.attrs;
            self.pen.fg = None;
            self.pen.bg = None;
        }
        if self.pen.fg != Some(cell.fg) {
            let _ = ansi::fg(&mut self.bytes, cell.fg);
            self.pen.fg = Some(cell.fg);
        }
        if self.pen.bg != Some(cell.bg) {
            let _ = ansi::bg(&mut self.bytes, cell.bg);
            self.pen.bg = Some(cell.bg);
        }
    }

    fn set_link(&mut self, link: Option<&str>) {
        if self.pen.link.as_deref() == link {
            return;
        }
        if self.pen.link.take().is_some() {
            let _ = ansi::link_close(&mut self.bytes);
        }
        if let Some(url) = link {
            let _ = ansi::link_open(&mut self.bytes, url);
            self.pen.link = Some(url.to_owned());
        }
    }

    /// Raw sink for control sequences and text outside the cell grid.
    pub fn raw(&mut self) -> &mut Vec<u8> {
        &mut self.bytes
    }

    pub fn pending(&self) -> &[u8] {
        &self.bytes
    }

    /// Hand everything buffered to `writer` in one write.
    pub fn flush_to<W: Write>(&mut self, writer: &mut W) -> io::Result<()> {
        if self.bytes.is_empty() {
            return Ok(());
        }
        writer.write_all(&self.bytes)?;
        writer.flush()?;
        self.bytes.clear();
        Ok(())
    }
}

impl Default for CellWriter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cell(ch: char) -> Cell {
        Cell {
            char: ch as u32,
            fg: Rgba::WHITE,
            bg: Rgba::BLACK,
            ..Cell::default()
        }
    }

    fn taken(writer: &mut CellWriter) -> String {
        let text = String::from_utf8_lossy(writer.pending()).into_owned();
        writer.raw().clear();
        text
    }

    #[test]
    fn adjacent_cells_reuse_cursor_and_style() {
        let mut writer = CellWriter::new();
        writer.put(0, 0, &cell('V'), None);
        let first = taken(&mut writer);
        assert!(first.starts_with("\x1b[1;1H"));

        writer.put(1, 0, &cell('N'), None);
        assert_eq!(taken(&mut writer), "N");
    }

    #[test]
    fn gap_moves_the_cursor() {
        let mut writer = CellWriter::new();
        writer.put(0, 2, &cell('a'), None);
        taken(&mut writer);
        writer.put(5, 2, &cell('b'), None);
        assert_eq!(taken(&mut writer), "\x1b[3;6Hb");
    }

    #[test]
    fn wide_glyph_tail_writes_nothing() {
        let mut writer = CellWriter::new();
        writer.put(0, 0, &cell('\0'), None);
        assert!(writer.pending().is_empty());
    }

    #[test]
    fn link_opens_once_per_run() {
        let mut writer = CellWriter::new();
        let url = Some("https://example.org");
        writer.put(0, 0, &cell('g'), url);
        writer.put(1, 0, &cell('o'), url);
        writer.put(2, 0, &cell(' '), None);
        writer.finish();

        let text = taken(&mut writer);
        assert_eq!(text.matches("\x1b]8;;https://example.org\x07").count(), 1);
        assert_eq!(text.matches("\x1b]8;;\x07").count(), 1);
    }

    #[test]
    fn finish_closes_trailing_link() {
        let mut writer = CellWriter::new();
        writer.put_inline(&cell('m'), Some("mailto:a@b.c"));
        taken(&mut writer);
        writer.finish();
        assert_eq!(taken(&mut writer), "\x1b]8;;\x07");
    }

    #[test]
    fn flush_drains_buffer() {
        let mut writer = CellWriter::new();
        writer.put_inline(&cell('x'), None);
        let mut out = Vec::new();
        writer.flush_to(&mut out).unwrap();
        assert!(writer.pending().is_empty());
        assert!(String::from_utf8(out).unwrap().ends_with('x'));
    }
}
