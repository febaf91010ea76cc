//! GameView: maps the current `core::Screen` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.
//!
//! Every screen is a square canvas scaled into the viewport with
//! [`CanvasMapping`]. Pictures become half-block pixels; text is overlaid on
//! top of them at the cell holding its canvas anchor.
//!
//! `render_into` does not allocate once the framebuffer has its size.

use std::ops::Range;

use crate::assets::{Assets, Picture, TileImage};
use crate::core::layout::{self, EndKind};
use crate::core::{Game, PuzzleState, Screen};
use crate::fb::{Cell, CellStyle, FrameBuffer, Rgb};
use crate::types::{CanvasMapping, Point};

const TIMER_COLOR: Rgb = Rgb::new(255, 0, 0);
const CONGRATS_COLOR: Rgb = Rgb::new(0, 255, 0);
const TIMES_UP_COLOR: Rgb = Rgb::new(255, 0, 0);
const LABEL_COLOR: Rgb = Rgb::new(75, 0, 130);

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// Renders menu, puzzle and end screens.
#[derive(Debug, Clone, Copy)]
pub struct GameView {
    /// Fill for the area outside the canvas.
    letterbox: Rgb,
    /// Fill behind the tiles while playing.
    backdrop: Rgb,
}

impl Default for GameView {
    fn default() -> Self {
        Self {
            letterbox: Rgb::BLACK,
            backdrop: Rgb::WHITE,
        }
    }
}

impl GameView {
    pub fn new() -> Self {
        Self::default()
    }

    /// Where the current screen's canvas sits in `viewport`.
    ///
    /// The input layer uses the same mapping to convert mouse cells back into
    /// canvas points, so hit tests line up with what is drawn.
    pub fn mapping(&self, game: &Game, viewport: Viewport) -> CanvasMapping {
        CanvasMapping::fit(viewport.width, viewport.height, game.canvas_size())
    }

    /// Render the current screen into an existing framebuffer.
    pub fn render_into(&self, game: &Game, assets: &Assets, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(Cell {
            ch: ' ',
            style: CellStyle {
                bg: self.letterbox,
                ..CellStyle::default()
            },
        });

        let m = self.mapping(game, viewport);

        match game.screen() {
            Screen::Menu => {
                paint_picture(fb, &m, &assets.start_background);
                for (_, button) in layout::menu_buttons() {
                    draw_centered(fb, &m, button.label, button.rect.center(), LABEL_COLOR, false);
                }
            }
            Screen::Playing(session) => {
                self.paint_puzzle(fb, &m, session.puzzle(), &assets.puzzle);
                if let Some((col, row)) = m.canvas_to_cell(layout::TIMER_ANCHOR) {
                    let seconds = session.timer().seconds_left();
                    draw_seconds(fb, col, row, layout::TIME_LEFT_PREFIX, seconds, TIMER_COLOR);
                }
            }
            Screen::Won { seconds_taken, .. } => {
                paint_picture(fb, &m, &assets.end_background);
                draw_centered(
                    fb,
                    &m,
                    layout::CONGRATULATIONS_TEXT,
                    layout::headline_anchor(),
                    CONGRATS_COLOR,
                    true,
                );
                let len = layout::TIME_TAKEN_PREFIX.len()
                    + decimal_len(*seconds_taken)
                    + layout::SECONDS_SUFFIX.len();
                if let Some((col, row)) = centered_start(&m, layout::time_taken_anchor(), len) {
                    draw_seconds(fb, col, row, layout::TIME_TAKEN_PREFIX, *seconds_taken, LABEL_COLOR);
                }
                draw_end_buttons(fb, &m, EndKind::Won);
            }
            Screen::TimedOut { .. } => {
                paint_picture(fb, &m, &assets.end_background);
                draw_centered(
                    fb,
                    &m,
                    layout::TIMES_UP_TEXT,
                    layout::headline_anchor(),
                    TIMES_UP_COLOR,
                    true,
                );
                draw_end_buttons(fb, &m, EndKind::TimedOut);
            }
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, game: &Game, assets: &Assets, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(game, assets, viewport, &mut fb);
        fb
    }

    /// Backdrop, then every tile in draw order so later tiles cover earlier ones.
    fn paint_puzzle(&self, fb: &mut FrameBuffer, m: &CanvasMapping, puzzle: &PuzzleState, picture: &Picture) {
        for py in 0..m.pixel_rows() {
            for px in 0..m.cols {
                put_sample(fb, m, px, py, self.backdrop);
            }
        }

        let sample_x = |px: u16| m.sample_point(px, 0).x;
        let sample_y = |py: u16| m.sample_point(0, py).y;
        let grid = puzzle.grid();
        let size = grid.tile_size();
        for &index in puzzle.draw_order() {
            let Some(tile) = puzzle.tile(index) else {
                continue;
            };
            let image = TileImage::for_tile(grid, index);
            let origin = tile.position;
            for py in span(m.pixel_rows(), origin.y, origin.y + size, sample_y) {
                for px in span(m.cols, origin.x, origin.x + size, sample_x) {
                    let p = Point::new(sample_x(px), sample_y(py));
                    if let Some(color) = image
                        .source_point(origin, p)
                        .and_then(|src| picture.pixel_at(src))
                    {
                        put_sample(fb, m, px, py, color);
                    }
                }
            }
        }
    }
}

/// Pixel indices in `0..n` whose sample falls in `lo..hi`.
///
/// Samples grow with the index, so both ends are found by bisection.
fn span(n: u16, lo: i32, hi: i32, sample: impl Fn(u16) -> i32) -> Range<u16> {
    let first_at_or_above = |bound: i32| {
        let (mut a, mut b) = (0u16, n);
        while a < b {
            let mid = a + (b - a) / 2;
            if sample(mid) < bound {
                a = mid + 1;
            } else {
                b = mid;
            }
        }
        a
    };
    first_at_or_above(lo)..first_at_or_above(hi)
}

fn put_sample(fb: &mut FrameBuffer, m: &CanvasMapping, px: u16, py: u16, color: Rgb) {
    let x = m.origin_x.saturating_add(px);
    let y = m.origin_y.saturating_mul(2).saturating_add(py);
    fb.set_pixel(x, y, color);
}

fn paint_picture(fb: &mut FrameBuffer, m: &CanvasMapping, picture: &Picture) {
    let scale = |v: i32| v * picture.size() as i32 / m.canvas_size.max(1);
    for py in 0..m.pixel_rows() {
        for px in 0..m.cols {
            let p = m.sample_point(px, py);
            if let Some(color) = picture.pixel_at(Point::new(scale(p.x), scale(p.y))) {
                put_sample(fb, m, px, py, color);
            }
        }
    }
}

fn draw_end_buttons(fb: &mut FrameBuffer, m: &CanvasMapping, kind: EndKind) {
    for button in [layout::restart_button(kind), layout::menu_button(kind)] {
        draw_centered(fb, m, button.label, button.rect.center(), LABEL_COLOR, false);
    }
}

/// First cell of a `len`-character line centered on `center`.
fn centered_start(m: &CanvasMapping, center: Point, len: usize) -> Option<(u16, u16)> {
    let (col, row) = m.canvas_to_cell(center)?;
    let half = u16::try_from(len / 2).unwrap_or(u16::MAX);
    Some((col.saturating_sub(half).max(m.origin_x), row))
}

fn draw_centered(fb: &mut FrameBuffer, m: &CanvasMapping, text: &str, center: Point, fg: Rgb, bold: bool) {
    if let Some((col, row)) = centered_start(m, center, text.chars().count()) {
        fb.overlay_str(col, row, text, fg, bold);
    }
}

/// `{prefix}{seconds} seconds`, written piecewise.
fn draw_seconds(fb: &mut FrameBuffer, col: u16, row: u16, prefix: &str, seconds: u32, fg: Rgb) {
    fb.overlay_str(col, row, prefix, fg, false);
    let col = col.saturating_add(prefix.len() as u16);
    let col = fb.overlay_u32(col, row, seconds, fg, false);
    fb.overlay_str(col, row, layout::SECONDS_SUFFIX, fg, false);
}

fn decimal_len(mut v: u32) -> usize {
    let mut len = 1;
    while v >= 10 {
        v /= 10;
        len += 1;
    }
    len
}
