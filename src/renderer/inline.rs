//! Print-mode renderer.
//!
//! Streams a finished frame row by row into the normal buffer, a pipe or a
//! file, leaving it in scrollback. The plain form writes text only, without
//! colors, attributes or hyperlinks.

use std::io::{self, Write};

use super::ansi;
use super::buffer::FrameBuffer;
use super::output::CellWriter;

pub struct InlineRenderer {
    writer: CellWriter,
    plain: bool,
}

impl InlineRenderer {
    pub fn new() -> Self {
        Self {
            writer: CellWriter::new(),
            plain: false,
        }
    }

    pub fn plain() -> Self {
        Self {
            plain: true,
            ..Self::new()
        }
    }

    /// Write every row followed by a newline.
    pub fn render<W: Write>(&mut self, buffer: &FrameBuffer, out: &mut W) -> io::Result<()> {
        if self.plain {
            writeln!(self.writer.raw(), "{}", buffer.to_plain_text())?;
            return self.writer.flush_to(out);
        }

        for y in 0..buffer.height() {
            self.writer.begin();
            for x in 0..buffer.width() {
                if let Some(cell) = buffer.get(x, y) {
                    self.writer.put_inline(cell, buffer.link_url(cell.link));
                }
            }
            self.writer.finish();
            // Colors stop at the row end
            ansi::reset(self.writer.raw())?;
            self.writer.raw().push(b'\n');
        }

        self.writer.flush_to(out)
    }
}

impl Default for InlineRenderer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::Ink;
    use crate::types::{Attr, Rgba};

    fn sample() -> FrameBuffer {
        let mut buffer = FrameBuffer::new(12, 2);
        let all = buffer.bounds();
        buffer.text(0, 0, "Skills", Ink::fg(Rgba::rgb(52, 211, 153)).attrs(Attr::BOLD), &all);
        let slot = buffer.link_slot("mailto:me@example.org");
        buffer.text(0, 1, "mail", Ink::fg(Rgba::WHITE).link(slot), &all);
        buffer
    }

    #[test]
    fn test_plain_output_has_no_escapes() {
        let mut out = Vec::new();
        InlineRenderer::plain().render(&sample(), &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert_eq!(text, "Skills\nmail\n");
    }

    #[test]
    fn test_styled_output_carries_colors_and_links() {
        let mut out = Vec::new();
        InlineRenderer::new().render(&sample(), &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("\x1b[38;2;52;211;153m"));
        assert!(text.contains("\x1b]8;;mailto:me@example.org\x07mail"));
        assert_eq!(text.lines().count(), 2);
    }
}
