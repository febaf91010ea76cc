//! Grid model - tile geometry for a square canvas.
//!
//! Tiles are numbered in row-major raster order. Tile `i` belongs at
//! column `i % cols`, row `i / cols`.

use crate::types::{Point, Rect};

/// Tile geometry for one puzzle session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Grid {
    rows: u32,
    cols: u32,
    tile_size: i32,
}

impl Grid {
    /// Create a grid over a square canvas of side `canvas_size`.
    ///
    /// `rows` and `cols` are clamped to at least 1.
    pub fn new(rows: u32, cols: u32, canvas_size: i32) -> Self {
        let rows = rows.max(1);
        let cols = cols.max(1);
        Self {
            rows,
            cols,
            tile_size: canvas_size / cols as i32,
        }
    }

    pub fn rows(&self) -> u32 {
        self.rows
    }

    pub fn cols(&self) -> u32 {
        self.cols
    }

    pub fn tile_size(&self) -> i32 {
        self.tile_size
    }

    pub fn tile_count(&self) -> usize {
        (self.rows * self.cols) as usize
    }

    /// Solved-layout origin of tile `index`.
    pub fn correct_position(&self, index: usize) -> Point {
        let cols = self.cols as usize;
        Point::new(
            (index % cols) as i32 * self.tile_size,
            (index / cols) as i32 * self.tile_size,
        )
    }

    /// Correct positions of every tile, in index order.
    pub fn correct_positions(&self) -> Vec<Point> {
        (0..self.tile_count())
            .map(|i| self.correct_position(i))
            .collect()
    }

    /// Bounding box of a tile whose origin is `origin`.
    pub fn tile_rect(&self, origin: Point) -> Rect {
        Rect::new(origin.x, origin.y, self.tile_size, self.tile_size)
    }
}
