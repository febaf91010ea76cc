//! Framebuffer and style types for terminal rendering.
//!
//! Pictures are drawn with upper half blocks: a cell's foreground is the top
//! pixel and its background the bottom pixel, which gives square-ish pixels
//! on typical 1:2 terminal glyphs.

/// Glyph used for pixel cells.
pub const HALF_BLOCK: char = '▀';

/// 24-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub const BLACK: Rgb = Rgb::new(0, 0, 0);
    pub const WHITE: Rgb = Rgb::new(255, 255, 255);
}

/// Minimal per-cell styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellStyle {
    pub fg: Rgb,
    pub bg: Rgb,
    pub bold: bool,
    pub dim: bool,
}

impl Default for CellStyle {
    fn default() -> Self {
        Self {
            fg: Rgb::new(220, 220, 220),
            bg: Rgb::new(0, 0, 0),
            bold: false,
            dim: false,
        }
    }
}

/// A single terminal cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub ch: char,
    pub style: CellStyle,
}

impl Default for Cell {
    fn default() -> Self {
        Self {
            ch: ' ',
            style: CellStyle::default(),
        }
    }
}

impl Cell {
    /// A pixel cell whose two halves are both `rgb`.
    pub fn pixel(rgb: Rgb) -> Self {
        Self {
            ch: HALF_BLOCK,
            style: CellStyle {
                fg: rgb,
                bg: rgb,
                bold: false,
                dim: false,
            },
        }
    }
}

/// 2D framebuffer of styled character cells.
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

    pub fn set(&mut self, x: u16, y: u16, cell: Cell) {
        if let Some(i) = self.idx(x, y) {
            self.cells[i] = cell;
        }
    }

    pub fn clear(&mut self, cell: Cell) {
        self.cells.fill(cell);
    }

    /// Write text in `fg`, keeping whatever background each cell already has.
    pub fn overlay_str(&mut self, x: u16, y: u16, s: &str, fg: Rgb, bold: bool) {
        let mut cx = x;
        for ch in s.chars() {
            let Some(i) = self.idx(cx, y) else {
                break;
            };
            let bg = self.cells[i].style.bg;
            self.cells[i] = Cell {
                ch,
                style: CellStyle {
                    fg,
                    bg,
                    bold,
                    dim: false,
                },
            };
            cx += 1;
        }
    }

    /// Write `value` in decimal without allocating. Returns the column after
    /// the last digit.
    pub fn overlay_u32(&mut self, x: u16, y: u16, value: u32, fg: Rgb, bold: bool) -> u16 {
        let mut buf = [0u8; 10];
        let mut start = buf.len();
        let mut v = value;
        loop {
            start -= 1;
            buf[start] = b'0' + (v % 10) as u8;
            v /= 10;
            if v == 0 {
                break;
            }
        }
        // ASCII digits only.
        let digits = std::str::from_utf8(&buf[start..]).unwrap_or_default();
        self.overlay_str(x, y, digits, fg, bold);
        x.saturating_add(digits.len() as u16)
    }

    /// Set one half-block pixel. `py` counts pixel rows (two per cell row).
    pub fn set_pixel(&mut self, x: u16, py: u16, rgb: Rgb) {
        if let Some(i) = self.idx(x, py / 2) {
            let cell = &mut self.cells[i];
            cell.ch = HALF_BLOCK;
            if py % 2 == 0 {
                cell.style.fg = rgb;
            } else {
                cell.style.bg = rgb;
            }
        }
    }

    /// Read back a half-block pixel.
    pub fn pixel(&self, x: u16, py: u16) -> Option<Rgb> {
        let cell = self.get(x, py / 2)?;
        Some(if py % 2 == 0 {
            cell.style.fg
        } else {
            cell.style.bg
        })
    }

    /// The characters of row `y` as a string (for tests and debugging).
    pub fn row_text(&self, y: u16) -> String {
        (0..self.width)
            .filter_map(|x| self.get(x, y).map(|c| c.ch))
            .collect()
    }
}
