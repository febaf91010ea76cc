//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (core logic, terminal rendering, input mapping).
//!
//! # Canvas Geometry
//!
//! All positions are expressed in logical canvas units, independent of how
//! the canvas ends up on screen:
//!
//! - **Puzzle / end screens**: 600x600 units
//! - **Difficulty menu**: 300x300 units
//! - **Tile size**: `CANVAS_SIZE / cols`
//!
//! Coordinates are signed so tiles can be dragged past any edge of the canvas.
//!
//! # Timing Constants
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `TICKS_PER_SECOND` | 60 | Frame / countdown rate |
//! | `TICK_MS` | 16 | Fixed timestep interval (~60 FPS) |
//!
//! # Difficulty Presets
//!
//! | Difficulty | Grid | Time limit |
//! |------------|------|------------|
//! | Easy | 3x3 | 30s |
//! | Medium | 4x4 | 40s |
//! | Hard | 5x5 | 60s |
//!
//! # Examples
//!
//! ```
//! use picture_puzzle_types::{Difficulty, Point, Rect, CANVAS_SIZE};
//!
//! let d = Difficulty::from_str("medium").unwrap();
//! assert_eq!((d.rows(), d.cols(), d.duration_seconds()), (4, 4, 40));
//!
//! let r = Rect::new(0, 0, 10, 10);
//! assert!(r.contains(Point::new(10, 10)));
//! assert_eq!(CANVAS_SIZE, 600);
//! ```

/// Side length of the puzzle and end-screen canvas (600 units).
pub const CANVAS_SIZE: i32 = 600;

/// Side length of the difficulty menu canvas (300 units).
pub const MENU_CANVAS_SIZE: i32 = 300;

/// Frames (and countdown ticks) per second.
pub const TICKS_PER_SECOND: u32 = 60;

/// Fixed timestep interval in milliseconds (16ms ≈ 60 FPS)
pub const TICK_MS: u32 = 16;

/// Snap tolerance in canvas units, per axis.
pub const DEFAULT_SNAP_TOLERANCE: i32 = 30;

/// Upper bound on input events applied in a single frame.
pub const MAX_EVENTS_PER_FRAME: usize = 64;

/// Duration used for grids that match no preset.
pub const FALLBACK_DURATION_SECONDS: u32 = 30;

/// Width of one label character when sizing button hit boxes.
pub const LABEL_CHAR_WIDTH: i32 = 12;

/// Height of a label hit box.
pub const LABEL_HEIGHT: i32 = 24;


/// A point on the canvas, in logical units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Component-wise `self + other`.
    pub const fn offset(self, other: Point) -> Self {
        Self::new(self.x + other.x, self.y + other.y)
    }

    /// Component-wise `self - other`.
    pub const fn delta(self, other: Point) -> Self {
        Self::new(self.x - other.x, self.y - other.y)
    }
}

/// Axis-aligned rectangle in canvas units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

impl Rect {
    pub const fn new(x: i32, y: i32, w: i32, h: i32) -> Self {
        Self { x, y, w, h }
    }

    /// Rectangle of size `w`x`h` whose center is `center`.
    pub const fn centered(center: Point, w: i32, h: i32) -> Self {
        Self::new(center.x - w / 2, center.y - h / 2, w, h)
    }

    pub const fn origin(&self) -> Point {
        Point::new(self.x, self.y)
    }

    pub const fn center(&self) -> Point {
        Point::new(self.x + self.w / 2, self.y + self.h / 2)
    }

    /// Hit test against `[x, x+w] × [y, y+h]`, both edges included.
    pub const fn contains(&self, p: Point) -> bool {
        self.x <= p.x && p.x <= self.x + self.w && self.y <= p.y && p.y <= self.y + self.h
    }
}

/// The three fixed difficulty presets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    /// All presets in menu order.
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    pub const fn rows(&self) -> u32 {
        match self {
            Difficulty::Easy => 3,
            Difficulty::Medium => 4,
            Difficulty::Hard => 5,
        }
    }

    pub const fn cols(&self) -> u32 {
        self.rows()
    }

    /// Time limit in seconds.
    pub const fn duration_seconds(&self) -> u32 {
        match self {
            Difficulty::Easy => 30,
            Difficulty::Medium => 40,
            Difficulty::Hard => 60,
        }
    }

    /// Parse difficulty from string (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use picture_puzzle_types::Difficulty;
    ///
    /// assert_eq!(Difficulty::from_str("easy"), Some(Difficulty::Easy));
    /// assert_eq!(Difficulty::from_str("Hard"), Some(Difficulty::Hard));
    /// assert_eq!(Difficulty::from_str("unknown"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "easy" => Some(Difficulty::Easy),
            "medium" => Some(Difficulty::Medium),
            "hard" => Some(Difficulty::Hard),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        }
    }

    /// Menu label.
    pub fn label(&self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
        }
    }
}

/// Time limit for an arbitrary grid: the preset duration when the grid
/// matches a preset, otherwise [`FALLBACK_DURATION_SECONDS`].
pub fn duration_for_grid(rows: u32, cols: u32) -> u32 {
    Difficulty::ALL
        .iter()
        .find(|d| d.rows() == rows && d.cols() == cols)
        .map(|d| d.duration_seconds())
        .unwrap_or(FALLBACK_DURATION_SECONDS)
}

/// Terminal classification of a play session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    InProgress,
    Won,
    TimedOut,
}

impl Outcome {
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Outcome::InProgress)
    }
}

/// Input events consumed by the game, already translated to canvas units.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    Quit,
    PointerDown(Point),
    PointerUp(Point),
    PointerMove(Point),
}

/// How far (per axis) a released tile may be from its slot and still snap.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SnapTolerance {
    /// Same absolute tolerance on every grid.
    Fixed(i32),
    /// `tile_size * numerator / denominator`.
    TileFraction { numerator: i32, denominator: i32 },
}

impl SnapTolerance {
    /// Tolerance in canvas units for tiles of `tile_size`.
    pub fn resolve(&self, tile_size: i32) -> i32 {
        match *self {
            SnapTolerance::Fixed(units) => units,
            SnapTolerance::TileFraction {
                numerator,
                denominator,
            } => {
                if denominator == 0 {
                    0
                } else {
                    tile_size * numerator / denominator
                }
            }
        }
    }
}

impl Default for SnapTolerance {
    fn default() -> Self {
        SnapTolerance::Fixed(DEFAULT_SNAP_TOLERANCE)
    }
}

/// Tunables for a puzzle session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PuzzleConfig {
    pub ticks_per_second: u32,
    pub snap_tolerance: SnapTolerance,
}

impl Default for PuzzleConfig {
    fn default() -> Self {
        Self {
            ticks_per_second: TICKS_PER_SECOND,
            snap_tolerance: SnapTolerance::default(),
        }
    }
}

impl PuzzleConfig {
    pub fn with_snap_tolerance(mut self, snap_tolerance: SnapTolerance) -> Self {
        self.snap_tolerance = snap_tolerance;
        self
    }

    pub fn with_ticks_per_second(mut self, ticks_per_second: u32) -> Self {
        self.ticks_per_second = ticks_per_second;
        self
    }
}

/// Placement of a square canvas inside a terminal viewport.
///
/// Each terminal cell shows two vertically stacked canvas samples (half
/// blocks), so the canvas spans `cols` cells across and `rows` cells down
/// with `rows * 2 == cols` pixel rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CanvasMapping {
    /// Left column of the canvas area.
    pub origin_x: u16,
    /// Top row of the canvas area.
    pub origin_y: u16,
    /// Canvas width in terminal columns.
    pub cols: u16,
    /// Canvas height in terminal rows.
    pub rows: u16,
    /// Canvas side in logical units.
    pub canvas_size: i32,
}

impl CanvasMapping {
    /// Largest square canvas that fits in `width`x`height` cells, centered.
    pub fn fit(width: u16, height: u16, canvas_size: i32) -> Self {
        let rows = (width / 2).min(height).max(1);
        let cols = rows * 2;
        Self {
            origin_x: width.saturating_sub(cols) / 2,
            origin_y: height.saturating_sub(rows) / 2,
            cols,
            rows,
            canvas_size,
        }
    }

    /// Number of sample rows (two per terminal row).
    pub fn pixel_rows(&self) -> u16 {
        self.rows * 2
    }

    /// Canvas point at the center of terminal cell (`col`, `row`).
    ///
    /// Cells outside the canvas area map to points outside the canvas.
    pub fn cell_to_canvas(&self, col: u16, row: u16) -> Point {
        let cx = i32::from(col) - i32::from(self.origin_x);
        let cy = i32::from(row) - i32::from(self.origin_y);
        Point::new(
            center_of(cx, i32::from(self.cols), self.canvas_size),
            center_of(cy, i32::from(self.rows), self.canvas_size),
        )
    }

    /// Canvas point sampled by pixel (`px`, `py`) of the canvas area.
    pub fn sample_point(&self, px: u16, py: u16) -> Point {
        Point::new(
            center_of(i32::from(px), i32::from(self.cols), self.canvas_size),
            center_of(i32::from(py), i32::from(self.pixel_rows()), self.canvas_size),
        )
    }

    /// Terminal cell containing canvas point `p`, if it is on screen.
    pub fn canvas_to_cell(&self, p: Point) -> Option<(u16, u16)> {
        if p.x < 0 || p.y < 0 || p.x >= self.canvas_size || p.y >= self.canvas_size {
            return None;
        }
        let col = p.x * i32::from(self.cols) / self.canvas_size;
        let row = p.y * i32::from(self.rows) / self.canvas_size;
        let col = u16::try_from(col).ok()?.checked_add(self.origin_x)?;
        let row = u16::try_from(row).ok()?.checked_add(self.origin_y)?;
        Some((col, row))
    }
}

fn center_of(index: i32, count: i32, size: i32) -> i32 {
    // Floor division keeps cells left of / above the origin negative.
    ((index * 2 + 1) * size).div_euclid(count * 2)
}
