//! Puzzle state module - drag-and-drop interaction for one session
//!
//! Holds every tile's current position, its placed flag, the draw order and
//! the (at most one) held tile. All operations are total: input that has
//! nothing to act on is a no-op.
//!
//! # Lifecycle
//!
//! - A tile starts `Unplaced` and becomes `Placed` when released within the
//!   snap tolerance of its slot. Placed tiles never move again.
//! - The outcome starts `InProgress` and becomes `Won` once every tile is
//!   placed, or `TimedOut` when the countdown runs out. Both are final, and
//!   tile operations are ignored afterwards.

use tracing::debug;

use crate::grid::Grid;
use crate::rng::{scatter_positions, SimpleRng};
use crate::types::{InputEvent, Outcome, Point, PuzzleConfig, CANVAS_SIZE};

/// Per-tile mutable state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tile {
    pub position: Point,
    pub placed: bool,
}

/// The held tile and the vector from the pointer to its origin.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Selection {
    pub tile: usize,
    pub grab_offset: Point,
}

/// Result of releasing the held tile.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Release {
    /// Nothing was held.
    Idle,
    /// The tile stays where it was dropped.
    Dropped { tile: usize },
    /// The tile snapped into its slot.
    Placed { tile: usize },
}

/// Complete interaction state of one puzzle.
#[derive(Debug, Clone)]
pub struct PuzzleState {
    grid: Grid,
    tiles: Vec<Tile>,
    /// Paint order, last = topmost.
    draw_order: Vec<usize>,
    selection: Option<Selection>,
    snap_tolerance: i32,
    placed_count: usize,
    outcome: Outcome,
}

impl PuzzleState {
    /// Create a puzzle with tiles scattered randomly over the grid slots.
    pub fn new(rows: u32, cols: u32, config: &PuzzleConfig, rng: &mut SimpleRng) -> Self {
        let grid = Grid::new(rows, cols, CANVAS_SIZE);
        let positions = scatter_positions(&grid.correct_positions(), rng);
        Self::with_positions(grid, positions, config)
    }

    /// Create a puzzle with explicit starting positions (one per tile).
    ///
    /// Missing entries start on their own slot; extra entries are ignored.
    pub fn with_positions(grid: Grid, positions: Vec<Point>, config: &PuzzleConfig) -> Self {
        let tiles = (0..grid.tile_count())
            .map(|i| Tile {
                position: positions
                    .get(i)
                    .copied()
                    .unwrap_or_else(|| grid.correct_position(i)),
                placed: false,
            })
            .collect();

        Self {
            snap_tolerance: config.snap_tolerance.resolve(grid.tile_size()),
            draw_order: (0..grid.tile_count()).collect(),
            grid,
            tiles,
            selection: None,
            placed_count: 0,
            outcome: Outcome::InProgress,
        }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    pub fn tile(&self, index: usize) -> Option<&Tile> {
        self.tiles.get(index)
    }

    pub fn draw_order(&self) -> &[usize] {
        &self.draw_order
    }

    pub fn selection(&self) -> Option<Selection> {
        self.selection
    }

    pub fn selected_tile(&self) -> Option<usize> {
        self.selection.map(|s| s.tile)
    }

    pub fn snap_tolerance(&self) -> i32 {
        self.snap_tolerance
    }

    pub fn placed_count(&self) -> usize {
        self.placed_count
    }

    pub fn is_placed(&self, index: usize) -> bool {
        self.tiles.get(index).is_some_and(|t| t.placed)
    }

    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    /// `true` once every tile is placed.
    pub fn is_won(&self) -> bool {
        self.placed_count == self.tiles.len()
    }

    fn accepts_input(&self) -> bool {
        self.outcome == Outcome::InProgress
    }

    /// Topmost unplaced tile under `p`.
    pub fn tile_at(&self, p: Point) -> Option<usize> {
        self.draw_order.iter().rev().copied().find(|&i| {
            let tile = &self.tiles[i];
            !tile.placed && self.grid.tile_rect(tile.position).contains(p)
        })
    }

    /// Grab the topmost unplaced tile under `p` and raise it to the top.
    pub fn pick_up(&mut self, p: Point) -> Option<usize> {
        if !self.accepts_input() {
            return None;
        }
        let index = self.tile_at(p)?;
        self.selection = Some(Selection {
            tile: index,
            grab_offset: self.tiles[index].position.delta(p),
        });
        self.raise(index);
        debug!(tile = index, x = p.x, y = p.y, "tile picked up");
        Some(index)
    }

    /// Move the held tile so it stays rigidly attached to the pointer.
    pub fn drag(&mut self, p: Point) {
        if !self.accepts_input() {
            return;
        }
        if let Some(sel) = self.selection {
            self.tiles[sel.tile].position = p.offset(sel.grab_offset);
        }
    }

    /// Drop the held tile, snapping it into place when close enough.
    pub fn release(&mut self) -> Release {
        if !self.accepts_input() {
            return Release::Idle;
        }
        let Some(sel) = self.selection.take() else {
            return Release::Idle;
        };

        let index = sel.tile;
        let correct = self.grid.correct_position(index);
        let d = self.tiles[index].position.delta(correct);
        if d.x.abs() > self.snap_tolerance || d.y.abs() > self.snap_tolerance {
            return Release::Dropped { tile: index };
        }

        self.tiles[index] = Tile {
            position: correct,
            placed: true,
        };
        self.placed_count += 1;
        debug!(tile = index, placed = self.placed_count, "tile placed");

        // Loose tiles waiting on this slot would be hidden under it.
        let tiles = &self.tiles;
        let raised = raise_matching(&mut self.draw_order, |j| {
            j != index && !tiles[j].placed && tiles[j].position == correct
        });
        if raised > 0 {
            debug!(raised, "raised tiles sharing the filled slot");
        }

        if self.is_won() {
            self.outcome = Outcome::Won;
        }
        Release::Placed { tile: index }
    }

    /// Mark the session as timed out. Has no effect on a finished puzzle.
    pub fn time_out(&mut self) {
        if self.outcome == Outcome::InProgress {
            self.outcome = Outcome::TimedOut;
            self.selection = None;
        }
    }

    /// Apply a pointer event. Quit is not a puzzle concern and is ignored.
    pub fn apply(&mut self, event: InputEvent) {
        match event {
            InputEvent::PointerDown(p) => {
                self.pick_up(p);
            }
            InputEvent::PointerMove(p) => self.drag(p),
            InputEvent::PointerUp(_) => {
                self.release();
            }
            InputEvent::Quit => {}
        }
    }

    fn raise(&mut self, index: usize) {
        if let Some(pos) = self.draw_order.iter().position(|&i| i == index) {
            let i = self.draw_order.remove(pos);
            self.draw_order.push(i);
        }
    }
}

/// Stable partition: entries matching `pred` move to the end (topmost), both
/// groups keep their relative order. Returns how many moved.
fn raise_matching(order: &mut [usize], pred: impl Fn(usize) -> bool) -> usize {
    let mut kept = 0;
    for read in 0..order.len() {
        if !pred(order[read]) {
            order[kept..=read].rotate_right(1);
            kept += 1;
        }
    }
    order.len() - kept
}
