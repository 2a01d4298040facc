//! The cell grid every frame is painted into.
//!
//! Cells live in one row-major `Vec`. Drawing always goes through a
//! [`ClipRect`], so a card scrolled half under the nav bar simply loses its
//! clipped rows. Hyperlinks are kept in a per-frame table and cells refer to
//! them by slot, with slot 0 meaning no link.

use crate::layout::char_width;
use crate::types::{Attr, BorderStyle, Cell, ClipRect, Rgba};

/// How to draw: colors, attributes and hyperlink slot.
///
/// `bg: None` keeps whatever background is already in the cell, which is how
/// text sits on top of a card's fill.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ink {
    pub fg: Rgba,
    pub bg: Option<Rgba>,
    pub attrs: Attr,
    pub link: u16,
}

impl Ink {
    pub const fn fg(fg: Rgba) -> Self {
        Self {
            fg,
            bg: None,
            attrs: Attr::NONE,
            link: 0,
        }
    }

    pub const fn attrs(mut self, attrs: Attr) -> Self {
        self.attrs = attrs;
        self
    }

    pub const fn on(mut self, bg: Rgba) -> Self {
        self.bg = Some(bg);
        self
    }

    pub const fn link(mut self, slot: u16) -> Self {
        self.link = slot;
        self
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct FrameBuffer {
    width: u16,
    height: u16,
    cells: Vec<Cell>,
    links: Vec<String>,
}

impl FrameBuffer {
    pub fn new(width: u16, height: u16) -> Self {
        Self::filled(width, height, Rgba::TERMINAL_DEFAULT)
    }

    /// Blank buffer with every cell on `bg`.
    pub fn filled(width: u16, height: u16, bg: Rgba) -> Self {
        Self {
            width,
            height,
            cells: vec![Cell { bg, ..Cell::default() }; usize::from(width) * usize::from(height)],
            links: Vec::new(),
        }
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    /// The whole buffer as a clip.
    pub fn bounds(&self) -> ClipRect {
        ClipRect::new(0, 0, self.width, self.height)
    }

    fn offset(&self, x: u16, y: u16) -> Option<usize> {
        (x < self.width && y < self.height)
            .then(|| usize::from(y) * usize::from(self.width) + usize::from(x))
    }

    pub fn get(&self, x: u16, y: u16) -> Option<&Cell> {
        self.offset(x, y).map(|i| &self.cells[i])
    }

    /// Cell at (`x`, `y`) if it is on the buffer and inside `clip`.
    fn writable(&mut self, x: u16, y: u16, clip: &ClipRect) -> Option<&mut Cell> {
        if !clip.contains(x, y) {
            return None;
        }
        let i = self.offset(x, y)?;
        Some(&mut self.cells[i])
    }

    /// Slot for `url`, reused when the same url is linked twice in a frame.
    pub fn link_slot(&mut self, url: &str) -> u16 {
        let pos = match self.links.iter().position(|known| known == url) {
            Some(pos) => pos,
            None => {
                self.links.push(url.to_owned());
                self.links.len() - 1
            }
        };
        u16::try_from(pos + 1).unwrap_or(0)
    }

    pub fn link_url(&self, slot: u16) -> Option<&str> {
        let pos = usize::from(slot).checked_sub(1)?;
        self.links.get(pos).map(String::as_str)
    }

    /// Write one glyph. Returns false when it was clipped away.
    pub fn put(&mut self, x: u16, y: u16, ch: char, ink: Ink, clip: &ClipRect) -> bool {
        let Some(cell) = self.writable(x, y, clip) else {
            return false;
        };
        let bg = match ink.bg {
            Some(bg) => Rgba::blend(bg, cell.bg),
            None => cell.bg,
        };
        *cell = Cell {
            char: u32::from(ch),
            fg: ink.fg,
            bg,
            attrs: ink.attrs,
            link: ink.link,
        };
        true
    }

    /// Write `text` left to right from (`x`, `y`) and return the columns it
    /// advanced. Zero-width characters are dropped; a wide glyph claims the
    /// cell after it as a continuation (char 0).
    pub fn text(&mut self, x: u16, y: u16, text: &str, ink: Ink, clip: &ClipRect) -> u16 {
        let mut col = x;
        for ch in text.chars() {
            if col >= self.width {
                break;
            }
            let w = char_width(ch);
            if w == 0 {
                continue;
            }
            if self.put(col, y, ch, ink, clip) && w == 2 {
                let bg = self.get(col, y).map(|c| c.bg);
                if let (Some(tail), Some(bg)) = (self.writable(col + 1, y, clip), bg) {
                    *tail = Cell {
                        char: 0,
                        fg: ink.fg,
                        bg,
                        attrs: ink.attrs,
                        link: ink.link,
                    };
                }
            }
            col = col.saturating_add(w);
        }
        col.saturating_sub(x)
    }

    /// Paint `rect` blank on `bg`, dropping glyphs, attributes and links.
    pub fn fill(&mut self, rect: ClipRect, bg: Rgba) {
        let Some(rect) = rect.intersect(&self.bounds()) else {
            return;
        };
        let stride = usize::from(self.width);
        for row in rect.y..rect.y + rect.height {
            let start = usize::from(row) * stride + usize::from(rect.x);
            for cell in &mut self.cells[start..start + usize::from(rect.width)] {
                *cell = Cell {
                    bg: Rgba::blend(bg, cell.bg),
                    ..Cell::default()
                };
            }
        }
    }

    pub fn hline(&mut self, x: u16, y: u16, len: u16, ch: char, ink: Ink, clip: &ClipRect) {
        for col in x..x.saturating_add(len) {
            self.put(col, y, ch, ink, clip);
        }
    }

    pub fn vline(&mut self, x: u16, y: u16, len: u16, ch: char, ink: Ink, clip: &ClipRect) {
        for row in y..y.saturating_add(len) {
            self.put(x, row, ch, ink, clip);
        }
    }

    /// Draw the edges of `rect` in `style`. Boxes need at least 2x2 cells; a
    /// left rule needs only its column.
    pub fn border(&mut self, rect: ClipRect, style: BorderStyle, color: Rgba, clip: &ClipRect) {
        let ink = Ink::fg(color);
        let (tl, tr, bl, br, horiz, vert) = style.chars();
        match style {
            BorderStyle::None => {}
            BorderStyle::LeftRule => self.vline(rect.x, rect.y, rect.height, vert, ink, clip),
            BorderStyle::Single | BorderStyle::Rounded => {
                if rect.width < 2 || rect.height < 2 {
                    return;
                }
                let right = rect.x + rect.width - 1;
                let bottom = rect.y + rect.height - 1;
                let inner_w = rect.width - 2;
                let inner_h = rect.height - 2;

                self.hline(rect.x + 1, rect.y, inner_w, horiz, ink, clip);
                self.hline(rect.x + 1, bottom, inner_w, horiz, ink, clip);
                self.vline(rect.x, rect.y + 1, inner_h, vert, ink, clip);
                self.vline(right, rect.y + 1, inner_h, vert, ink, clip);
                for (x, y, corner) in [(rect.x, rect.y, tl), (right, rect.y, tr), (rect.x, bottom, bl), (right, bottom, br)] {
                    self.put(x, y, corner, ink, clip);
                }
            }
        }
    }

    /// Row `y` as text without trailing blanks.
    pub fn row_text(&self, y: u16) -> String {
        let Some(start) = self.offset(0, y) else {
            return String::new();
        };
        let row: String = self.cells[start..start + usize::from(self.width)]
            .iter()
            .filter(|c| c.char != 0)
            .map(|c| char::from_u32(c.char).unwrap_or(' '))
            .collect();
        row.trim_end().to_owned()
    }

    /// Every row as text, joined with newlines.
    pub fn to_plain_text(&self) -> String {
        (0..self.height).map(|y| self.row_text(y)).collect::<Vec<_>>().join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ACCENT: Rgba = Rgba::rgb(52, 211, 153);
    const SURFACE: Rgba = Rgba::rgb(24, 24, 27);

    #[test]
    fn put_respects_clip() {
        let mut buffer = FrameBuffer::new(8, 4);
        let clip = ClipRect::new(0, 1, 8, 3);
        assert!(!buffer.put(2, 0, 'x', Ink::fg(ACCENT), &clip));
        assert!(buffer.put(2, 1, 'x', Ink::fg(ACCENT).attrs(Attr::BOLD), &clip));

        let cell = buffer.get(2, 1).unwrap();
        assert_eq!(cell.char, u32::from('x'));
        assert_eq!(cell.fg, ACCENT);
        assert_eq!(cell.attrs, Attr::BOLD);
        assert_eq!(buffer.get(2, 0).unwrap().char, u32::from(' '));
    }

    #[test]
    fn text_keeps_card_background() {
        let mut buffer = FrameBuffer::new(12, 2);
        let all = buffer.bounds();
        buffer.fill(ClipRect::new(0, 0, 12, 1), SURFACE);
        let used = buffer.text(1, 0, "VN.", Ink::fg(Rgba::WHITE), &all);

        assert_eq!(used, 3);
        assert_eq!(buffer.get(1, 0).unwrap().bg, SURFACE);
        assert_eq!(buffer.row_text(0), " VN.");
        assert_eq!(buffer.to_plain_text(), " VN.\n");
    }

    #[test]
    fn fill_stays_inside_rect_and_buffer() {
        let mut buffer = FrameBuffer::new(10, 5);
        buffer.fill(ClipRect::new(6, 3, 10, 10), SURFACE);
        assert_eq!(buffer.get(6, 3).unwrap().bg, SURFACE);
        assert_eq!(buffer.get(9, 4).unwrap().bg, SURFACE);
        assert_eq!(buffer.get(5, 3).unwrap().bg, Rgba::TERMINAL_DEFAULT);
    }

    #[test]
    fn wide_glyph_claims_two_columns() {
        let mut buffer = FrameBuffer::new(10, 1);
        let all = buffer.bounds();
        let used = buffer.text(0, 0, "中a", Ink::fg(Rgba::WHITE), &all);
        assert_eq!(used, 3);
        assert_eq!(buffer.get(1, 0).unwrap().char, 0);
        assert_eq!(buffer.row_text(0), "中a");
    }

    #[test]
    fn links_share_slots_per_url() {
        let mut buffer = FrameBuffer::new(10, 1);
        let all = buffer.bounds();
        let site = buffer.link_slot("https://smartleave.vercel.app/");
        let mail = buffer.link_slot("mailto:x@y.z");
        assert_eq!(buffer.link_slot("https://smartleave.vercel.app/"), site);
        assert_ne!(site, mail);

        buffer.text(0, 0, "view", Ink::fg(ACCENT).link(site), &all);
        assert_eq!(buffer.get(3, 0).unwrap().link, site);
        assert_eq!(buffer.get(4, 0).unwrap().link, 0);
        assert_eq!(buffer.link_url(site), Some("https://smartleave.vercel.app/"));
        assert_eq!(buffer.link_url(0), None);
    }

    #[test]
    fn left_rule_is_one_column() {
        let mut buffer = FrameBuffer::new(5, 3);
        let all = buffer.bounds();
        buffer.border(ClipRect::new(1, 0, 4, 3), BorderStyle::LeftRule, ACCENT, &all);
        for y in 0..3 {
            assert_eq!(buffer.get(1, y).unwrap().char, u32::from('│'));
            assert_eq!(buffer.get(4, y).unwrap().char, u32::from(' '));
        }
    }

    #[test]
    fn rounded_card_corners() {
        let mut buffer = FrameBuffer::new(4, 3);
        let all = buffer.bounds();
        buffer.border(all, BorderStyle::Rounded, ACCENT, &all);
        assert_eq!(buffer.get(0, 0).unwrap().char, u32::from('╭'));
        assert_eq!(buffer.get(3, 2).unwrap().char, u32::from('╯'));
        assert_eq!(buffer.get(1, 0).unwrap().char, u32::from('─'));
        assert_eq!(buffer.get(0, 1).unwrap().char, u32::from('│'));
    }
}
