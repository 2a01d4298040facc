//! Fullscreen renderer: write only what changed.
//!
//! Each frame is compared against the one before it. A cell is rewritten
//! when its glyph, colors, attributes or hyperlink target differ; everything
//! else stays on screen untouched. The whole frame goes out inside one
//! synchronized-output block.

use std::io::{self, Write};

use crate::types::Cell;

use super::ansi;
use super::buffer::FrameBuffer;
use super::output::CellWriter;

pub struct DiffRenderer {
    writer: CellWriter,
    previous: Option<FrameBuffer>,
}

impl DiffRenderer {
    pub fn new() -> Self {
        Self {
            writer: CellWriter::new(),
            previous: None,
        }
    }

    /// Draw `buffer`, returning how many cells were rewritten.
    pub fn render<W: Write>(&mut self, buffer: &FrameBuffer, out: &mut W) -> io::Result<usize> {
        let (width, height) = (buffer.width(), buffer.height());
        // A size change means nothing on screen can be trusted
        let previous = self
            .previous
            .take()
            .filter(|prev| prev.width() == width && prev.height() == height);

        ansi::begin_sync(self.writer.raw())?;
        self.writer.begin();

        let mut rewritten = 0;
        for y in 0..height {
            for x in 0..width {
                let Some(cell) = buffer.get(x, y) else {
                    continue;
                };
                let link = buffer.link_url(cell.link);
                let unchanged = previous.as_ref().is_some_and(|prev| {
                    prev.get(x, y)
                        .is_some_and(|old| same_look(old, cell) && prev.link_url(old.link) == link)
                });
                if !unchanged {
                    rewritten += 1;
                    self.writer.put(x, y, cell, link);
                }
            }
        }

        self.writer.finish();
        ansi::end_sync(self.writer.raw())?;
        self.writer.flush_to(out)?;

        self.previous = Some(buffer.clone());
        Ok(rewritten)
    }

    /// Make the next [`render`](Self::render) a full redraw.
    pub fn invalidate(&mut self) {
        self.previous = None;
    }

    pub fn has_previous(&self) -> bool {
        self.previous.is_some()
    }

    /// Switch to the alternate screen with a hidden cursor and a blank page.
    pub fn enter_fullscreen<W: Write>(&mut self, out: &mut W) -> io::Result<()> {
        let raw = self.writer.raw();
        ansi::enter_alt_screen(raw)?;
        ansi::cursor_hide(raw)?;
        ansi::erase_screen(raw)?;
        self.writer.flush_to(out)?;
        self.invalidate();
        Ok(())
    }

    pub fn exit_fullscreen<W: Write>(&mut self, out: &mut W) -> io::Result<()> {
        let raw = self.writer.raw();
        ansi::reset(raw)?;
        ansi::cursor_show(raw)?;
        ansi::exit_alt_screen(raw)?;
        self.writer.flush_to(out)
    }
}

impl Default for DiffRenderer {
    fn default() -> Self {
        Self::new()
    }
}

/// Link slots are numbered per frame, so they are compared by URL instead.
fn same_look(a: &Cell, b: &Cell) -> bool {
    a.char == b.char && a.fg == b.fg && a.bg == b.bg && a.attrs == b.attrs
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::Ink;
    use crate::types::Rgba;

    #[test]
    fn test_first_frame_writes_everything() {
        let mut renderer = DiffRenderer::new();
        let buffer = FrameBuffer::new(4, 2);
        let mut out = Vec::new();

        assert_eq!(renderer.render(&buffer, &mut out).unwrap(), 8);
        assert!(renderer.has_previous());
    }

    #[test]
    fn test_only_changed_cells_are_emitted() {
        let mut renderer = DiffRenderer::new();
        let mut buffer = FrameBuffer::new(10, 3);
        let mut out = Vec::new();
        renderer.render(&buffer, &mut out).unwrap();

        let all = buffer.bounds();
        buffer.text(2, 1, "ok", Ink::fg(Rgba::WHITE), &all);
        out.clear();
        assert_eq!(renderer.render(&buffer, &mut out).unwrap(), 2);
        let text = String::from_utf8(out.clone()).unwrap();
        assert!(text.contains("ok"));

        // Unchanged frame: nothing but the sync brackets
        out.clear();
        assert_eq!(renderer.render(&buffer, &mut out).unwrap(), 0);
        assert_eq!(String::from_utf8(out).unwrap(), "\x1b[?2026h\x1b[?2026l");
    }

    #[test]
    fn test_link_change_counts_as_change() {
        let mut renderer = DiffRenderer::new();
        let mut buffer = FrameBuffer::new(4, 1);
        let mut out = Vec::new();
        renderer.render(&buffer, &mut out).unwrap();

        let all = buffer.bounds();
        let slot = buffer.link_slot("https://example.org");
        buffer.text(0, 0, "  ", Ink::fg(Rgba::TERMINAL_DEFAULT).link(slot), &all);
        out.clear();
        assert_eq!(renderer.render(&buffer, &mut out).unwrap(), 2);
    }

    #[test]
    fn test_invalidate_forces_full_redraw() {
        let mut renderer = DiffRenderer::new();
        let buffer = FrameBuffer::new(3, 1);
        let mut out = Vec::new();
        renderer.render(&buffer, &mut out).unwrap();

        renderer.invalidate();
        assert!(!renderer.has_previous());
        assert_eq!(renderer.render(&buffer, &mut out).unwrap(), 3);
    }
}
