//! Framebuffer and style types for terminal rendering.
//!
//! Emoji glyphs are often several code points (flags, skin tones, ZWJ
//! sequences) and occupy two terminal columns, so a cell holds a [`Glyph`]
//! rather than a bare `char`. A wide glyph is stored in its left cell and the
//! right cell is marked [`Glyph::Continuation`].

pub use crate::types::Rgb;

/// Minimal per-cell styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellStyle {
    pub fg: Rgb,
    pub bg: Rgb,
    pub bold: bool,
    pub dim: bool,
}

impl CellStyle {
    pub const fn new(fg: Rgb, bg: Rgb) -> Self {
        Self {
            fg,
            bg,
            bold: false,
            dim: false,
        }
    }

    pub const fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    pub const fn dim(mut self) -> Self {
        self.dim = true;
        self
    }

    /// Readable text on top of `bg`.
    pub const fn text_on(bg: Rgb) -> Self {
        let fg = if bg.is_dark() {
            Rgb::new(235, 235, 235)
        } else {
            Rgb::new(20, 20, 20)
        };
        Self::new(fg, bg)
    }
}

impl Default for CellStyle {
    fn default() -> Self {
        Self::new(Rgb::new(220, 220, 220), Rgb::BLACK)
    }
}

/// What a cell displays.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Glyph {
    /// A single-column character.
    Char(char),
    /// A two-column grapheme (usually an emoji).
    Wide(&'static str),
    /// Right half of the wide glyph to the left; never printed.
    Continuation,
}

impl Glyph {
    pub fn as_char(&self) -> Option<char> {
        match self {
            Glyph::Char(ch) => Some(*ch),
            _ => None,
        }
    }
}

/// A single terminal cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub glyph: Glyph,
    pub style: CellStyle,
}

impl Cell {
    pub const fn new(ch: char, style: CellStyle) -> Self {
        Self {
            glyph: Glyph::Char(ch),
            style,
        }
    }

    /// The character shown, or `None` for wide glyphs and continuations.
    pub fn ch(&self) -> Option<char> {
        self.glyph.as_char()
    }
}

impl Default for Cell {
    fn default() -> Self {
        Self::new(' ', CellStyle::default())
    }
}

/// 2D framebuffer of styled cells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameBuffer {
    width: u16,
    height: u16,
    cells: Vec<Cell>,
}

impl FrameBuffer {
    pub fn new(width: u16, height: u16) -> Self {
        let len = (width as usize) * (height as usize);
        Self {
            width,
            height,
            cells: vec![Cell::default(); len],
        }
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    /// Resize the framebuffer.
    ///
    /// This preserves the underlying allocation when possible.
    pub fn resize(&mut self, width: u16, height: u16) {
        if self.width == width && self.height == height {
            return;
        }
        self.width = width;
        self.height = height;
        let len = (width as usize) * (height as usize);
        self.cells.resize(len, Cell::default());
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    #[inline(always)]
    fn idx(&self, x: u16, y: u16) -> Option<usize> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some((y as usize) * (self.width as usize) + (x as usize))
    }

    pub fn get(&self, x: u16, y: u16) -> Option<Cell> {
        self.idx(x, y).map(|i| self.cells[i])
    }

    /// Write one cell.
    ///
    /// Overwriting either half of a wide glyph blanks the other half, so no
    /// orphaned continuation (or half-covered wide glyph) is left in the row.
    pub fn set(&mut self, x: u16, y: u16, cell: Cell) {
        let Some(i) = self.idx(x, y) else {
            return;
        };
        let restyle =
            cell.glyph == Glyph::Continuation && self.cells[i].glyph == Glyph::Continuation;
        if !restyle {
            self.detach(x, y);
        }
        self.cells[i] = cell;
    }

    /// Blank the partner of a wide glyph or continuation at `(x, y)`.
    fn detach(&mut self, x: u16, y: u16) {
        let Some(i) = self.idx(x, y) else {
            return;
        };
        let partner = match self.cells[i].glyph {
            Glyph::Wide(_) => self.idx(x.saturating_add(1), y),
            Glyph::Continuation if x > 0 => self.idx(x - 1, y),
            _ => None,
        };
        if let Some(p) = partner {
            let expected = match self.cells[i].glyph {
                Glyph::Wide(_) => self.cells[p].glyph == Glyph::Continuation,
                _ => matches!(self.cells[p].glyph, Glyph::Wide(_)),
            };
            if expected {
                self.cells[p].glyph = Glyph::Char(' ');
            }
        }
    }

    pub fn clear(&mut self, cell: Cell) {
        self.cells.fill(cell);
    }

    pub fn put_char(&mut self, x: u16, y: u16, ch: char, style: CellStyle) {
        self.set(x, y, Cell::new(ch, style));
    }

    pub fn put_str(&mut self, x: u16, y: u16, s: &str, style: CellStyle) {
        let mut cx = x;
        for ch in s.chars() {
            if cx >= self.width {
                break;
            }
            self.put_char(cx, y, ch, style);
            cx += 1;
        }
    }

    /// Place a two-column glyph with its left half at `(x, y)`.
    ///
    /// Falls back to a blank when the right half would be off-screen.
    pub fn put_wide(&mut self, x: u16, y: u16, glyph: &'static str, style: CellStyle) {
        if x.saturating_add(1) >= self.width {
            self.put_char(x, y, ' ', style);
            return;
        }
        self.detach(x, y);
        self.detach(x + 1, y);
        if let (Some(left), Some(right)) = (self.idx(x, y), self.idx(x + 1, y)) {
            self.cells[left] = Cell {
                glyph: Glyph::Wide(glyph),
                style,
            };
            self.cells[right] = Cell {
                glyph: Glyph::Continuation,
                style,
            };
        }
    }

    pub fn fill_rect(&mut self, x: u16, y: u16, w: u16, h: u16, ch: char, style: CellStyle) {
        for dy in 0..h {
            for dx in 0..w {
                self.put_char(x.saturating_add(dx), y.saturating_add(dy), ch, style);
            }
        }
    }

    /// Collect one row as text (wide glyphs included, continuations skipped).
    pub fn row_text(&self, y: u16) -> String {
        let mut out = String::new();
        for x in 0..self.width {
            if let Some(cell) = self.get(x, y) {
                match cell.glyph {
                    Glyph::Char(ch) => out.push(ch),
                    Glyph::Wide(s) => out.push_str(s),
                    Glyph::Continuation => {}
                }
            }
        }
        out
    }
}
