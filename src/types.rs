//! Shared value types: colors, cells, clip rects and the style enums the
//! view tree, layout and painter all speak.

/// A color as the painter sees it.
///
/// Channels are `i16` so two sentinels fit beside real RGB values:
/// `r == -1` is the terminal's own default color and `r == -2` is a palette
/// entry whose index sits in `g`. Both always count as opaque.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rgba {
    pub r: i16,
    pub g: i16,
    pub b: i16,
    pub a: i16,
}

const DEFAULT_MARK: i16 = -1;
const PALETTE_MARK: i16 = -2;

impl Rgba {
    pub const TERMINAL_DEFAULT: Self = Self { r: DEFAULT_MARK, g: DEFAULT_MARK, b: DEFAULT_MARK, a: DEFAULT_MARK };
    pub const TRANSPARENT: Self = Self { r: 0, g: 0, b: 0, a: 0 };
    pub const BLACK: Self = Self::rgb(0, 0, 0);
    pub const WHITE: Self = Self::rgb(255, 255, 255);

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r: r as i16, g: g as i16, b: b as i16, a: a as i16 }
    }

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::rgba(r, g, b, 255)
    }

    /// Entry `index` of the terminal's 256-color palette.
    pub const fn ansi(index: u8) -> Self {
        Self { r: PALETTE_MARK, g: index as i16, b: 0, a: 255 }
    }

    pub const fn is_terminal_default(&self) -> bool {
        self.r == DEFAULT_MARK
    }

    pub const fn is_ansi(&self) -> bool {
        self.r == PALETTE_MARK
    }

    /// Palette index. Meaningless unless [`is_ansi`](Self::is_ansi).
    pub const fn ansi_index(&self) -> u8 {
        self.g as u8
    }

    /// Real channels that can be mixed.
    pub const fn is_rgb(&self) -> bool {
        self.r >= 0
    }

    /// `src` composited over `dst`. Sentinel colors replace whatever is below
    /// them; as a backdrop they mix like black.
    pub fn blend(src: Self, dst: Self) -> Self {
        if !src.is_rgb() || src.a >= 255 {
            return src;
        }
        if src.a <= 0 {
            return dst;
        }

        let below = if dst.is_rgb() { dst } else { Self::BLACK };
        let (sa, da) = (i32::from(src.a), i32::from(below.a));
        // Weight of the backdrop after the source covers its share
        let carry = da * (255 - sa) / 255;
        let alpha = sa + carry;
        if alpha == 0 {
            return Self::TRANSPARENT;
        }
        let mix = |s: i16, d: i16| ((i32::from(s) * sa + i32::from(d) * carry) / alpha).clamp(0, 255) as i16;

        Self {
            r: mix(src.r, below.r),
            g: mix(src.g, below.g),
            b: mix(src.b, below.b),
            a: alpha.clamp(0, 255) as i16,
        }
    }

    /// Straight-line mix, `t` = 0 gives `from`, 1 gives `to`.
    pub fn lerp(from: Self, to: Self, t: f32) -> Self {
        let t = t.clamp(0.0, 1.0);
        let mix = |a: i16, b: i16| (f32::from(a) + (f32::from(b) - f32::from(a)) * t).round() as i16;
        Self {
            r: mix(from.r, to.r),
            g: mix(from.g, to.g),
            b: mix(from.b, to.b),
            a: mix(from.a, to.a),
        }
    }

    /// `#rrggbb` or the short `#rgb` form, as theme files write them.
    pub fn parse_hex(s: &str) -> Option<Self> {
        let digits = s.trim().strip_prefix('#')?;
        if !digits.is_ascii() {
            return None;
        }
        let byte = |h: &str| u8::from_str_radix(h, 16).ok();
        let [r, g, b] = match digits.len() {
            6 => [byte(&digits[0..2])?, byte(&digits[2..4])?, byte(&digits[4..6])?],
            3 => [
                byte(&digits[0..1])? * 17,
                byte(&digits[1..2])? * 17,
                byte(&digits[2..3])? * 17,
            ],
            _ => return None,
        };
        Some(Self::rgb(r, g, b))
    }
}

/// Size along one axis.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Dimension {
    #[default]
    Auto,
    Cells(u16),
    /// 0 to 100 of the parent.
    Percent(f32),
}

impl From<u16> for Dimension {
    /// Zero reads as "no size given".
    fn from(cells: u16) -> Self {
        match cells {
            0 => Self::Auto,
            n => Self::Cells(n),
        }
    }
}

bitflags::bitflags! {
    /// SGR text attributes carried per cell.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct Attr: u8 {
        const NONE = 0;
        const BOLD = 1;
        const DIM = 1 << 1;
        const ITALIC = 1 << 2;
        const UNDERLINE = 1 << 3;
        const INVERSE = 1 << 4;
        const STRIKETHROUGH = 1 << 5;
    }
}

/// One screen cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    /// Codepoint, or 0 for the right half of a wide glyph.
    pub char: u32,
    pub fg: Rgba,
    pub bg: Rgba,
    pub attrs: Attr,
    /// Slot in the frame's hyperlink table, 0 for none.
    pub link: u16,
}

impl Default for Cell {
    fn default() -> Self {
        Self {
            char: u32::from(' '),
            fg: Rgba::TERMINAL_DEFAULT,
            bg: Rgba::TERMINAL_DEFAULT,
            attrs: Attr::NONE,
            link: 0,
        }
    }
}

/// Screen-space rectangle that drawing is confined to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClipRect {
    pub x: u16,
    pub y: u16,
    pub width: u16,
    pub height: u16,
}

impl ClipRect {
    pub const fn new(x: u16, y: u16, width: u16, height: u16) -> Self {
        Self { x, y, width, height }
    }

    fn right(&self) -> u32 {
        u32::from(self.x) + u32::from(self.width)
    }

    fn bottom(&self) -> u32 {
        u32::from(self.y) + u32::from(self.height)
    }

    pub fn contains(&self, x: u16, y: u16) -> bool {
        x >= self.x && y >= self.y && u32::from(x) < self.right() && u32::from(y) < self.bottom()
    }

    /// Shared area, `None` when the two do not overlap.
    pub fn intersect(&self, other: &ClipRect) -> Option<ClipRect> {
        let x = self.x.max(other.x);
        let y = self.y.max(other.y);
        let right = self.right().min(other.right());
        let bottom = self.bottom().min(other.bottom());
        let width = u16::try_from(right.checked_sub(u32::from(x))?).ok()?;
        let height = u16::try_from(bottom.checked_sub(u32::from(y))?).ok()?;
        (width > 0 && height > 0).then_some(ClipRect::new(x, y, width, height))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FlexDirection {
    #[default]
    Column,
    Row,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FlexWrap {
    #[default]
    NoWrap,
    Wrap,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum JustifyContent {
    #[default]
    FlexStart,
    Center,
    FlexEnd,
    SpaceBetween,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AlignItems {
    #[default]
    Stretch,
    FlexStart,
    Center,
    FlexEnd,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BorderStyle {
    #[default]
    None,
    Single,
    /// Cards.
    Rounded,
    /// Left edge only, the education timeline's rail.
    LeftRule,
}

impl BorderStyle {
    /// Glyphs as (top-left, top-right, bottom-left, bottom-right, horizontal, vertical).
    pub fn chars(&self) -> (char, char, char, char, char, char) {
        match self {
            Self::None => (' ', ' ', ' ', ' ', ' ', ' '),
            Self::Single => ('┌', '┐', '└', '┘', '─', '│'),
            Self::Rounded => ('╭', '╮', '╰', '╯', '─', '│'),
            Self::LeftRule => ('│', ' ', '│', ' ', ' ', '│'),
        }
    }

    /// Cells taken from each side as (top, right, bottom, left).
    pub fn widths(&self) -> (u16, u16, u16, u16) {
        match self {
            Self::None => (0, 0, 0, 0),
            Self::Single | Self::Rounded => (1, 1, 1, 1),
            Self::LeftRule => (0, 0, 0, 1),
        }
    }
}
