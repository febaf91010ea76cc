//! Picture assets: loading, scaling and slicing into tiles.
//!
//! All three images are required. A missing or undecodable file is reported
//! as an [`AssetLoadError`] before the terminal is switched to game mode.

use std::path::{Path, PathBuf};

use image::imageops::FilterType;
use image::RgbImage;
use tracing::info;

use crate::core::Grid;
use crate::fb::Rgb;
use crate::types::{Point, Rect, CANVAS_SIZE, MENU_CANVAS_SIZE};

/// Puzzle picture file name.
pub const PUZZLE_IMAGE: &str = "img.png";

/// Background of the win / time's up screens.
pub const END_BACKGROUND: &str = "EndBg.png";

/// Background of the difficulty menu.
pub const START_BACKGROUND: &str = "StartBg.png";

/// Asset loading errors.
#[derive(Debug, thiserror::Error)]
pub enum AssetLoadError {
    /// The file does not exist.
    #[error("missing asset file {}", path.display())]
    Missing { path: PathBuf },

    /// The file exists but is not a readable image.
    #[error("could not decode asset {}: {source}", path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
}

/// A square RGB picture scaled to canvas size (one pixel per canvas unit).
#[derive(Debug, Clone)]
pub struct Picture {
    pixels: RgbImage,
}

impl Picture {
    /// Load an image file and stretch it to `size`x`size`.
    pub fn load(path: &Path, size: u32) -> Result<Self, AssetLoadError> {
        if !path.is_file() {
            return Err(AssetLoadError::Missing {
                path: path.to_path_buf(),
            });
        }
        let decoded = image::open(path).map_err(|source| AssetLoadError::Decode {
            path: path.to_path_buf(),
            source,
        })?;
        info!(
            path = %path.display(),
            width = decoded.width(),
            height = decoded.height(),
            size,
            "loaded picture"
        );
        Ok(Self {
            pixels: decoded.resize_exact(size, size, FilterType::Triangle).to_rgb8(),
        })
    }

    /// Build a picture from a pixel function.
    pub fn from_fn(size: u32, f: impl Fn(u32, u32) -> Rgb) -> Self {
        Self {
            pixels: RgbImage::from_fn(size, size, |x, y| {
                let c = f(x, y);
                image::Rgb([c.r, c.g, c.b])
            }),
        }
    }

    pub fn size(&self) -> u32 {
        self.pixels.width()
    }

    /// Pixel at canvas point `p`, or `None` outside the picture.
    pub fn pixel_at(&self, p: Point) -> Option<Rgb> {
        let x = u32::try_from(p.x).ok()?;
        let y = u32::try_from(p.y).ok()?;
        let px = self.pixels.get_pixel_checked(x, y)?;
        Some(Rgb::new(px[0], px[1], px[2]))
    }
}

/// The part of the puzzle picture a tile shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TileImage {
    pub source: Rect,
}

impl TileImage {
    /// Picture point shown at `p` when the tile's origin is at `origin`.
    ///
    /// `None` when `p` falls outside the tile (right and bottom edges excluded).
    pub fn source_point(&self, origin: Point, p: Point) -> Option<Point> {
        let d = p.delta(origin);
        if d.x < 0 || d.y < 0 || d.x >= self.source.w || d.y >= self.source.h {
            return None;
        }
        Some(self.source.origin().offset(d))
    }
}

impl TileImage {
    /// Region of tile `index`: the square of its own slot.
    pub fn for_tile(grid: &Grid, index: usize) -> Self {
        Self {
            source: grid.tile_rect(grid.correct_position(index)),
        }
    }
}

/// Cut the picture into one region per tile, indexed like the grid.
pub fn slice(grid: &Grid) -> Vec<TileImage> {
    (0..grid.tile_count()).map(|i| TileImage::for_tile(grid, i)).collect()
}

/// Every picture the game draws.
#[derive(Debug, Clone)]
pub struct Assets {
    pub puzzle: Picture,
    pub end_background: Picture,
    pub start_background: Picture,
}

impl Assets {
    /// Load the three fixed asset files from `dir`.
    pub fn load_from(dir: &Path) -> Result<Self, AssetLoadError> {
        Ok(Self {
            puzzle: Picture::load(&dir.join(PUZZLE_IMAGE), CANVAS_SIZE as u32)?,
            end_background: Picture::load(&dir.join(END_BACKGROUND), CANVAS_SIZE as u32)?,
            start_background: Picture::load(&dir.join(START_BACKGROUND), MENU_CANVAS_SIZE as u32)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_directory_reports_first_missing_file() {
        let dir = Path::new("/definitely/not/a/real/asset/dir");
        let err = Assets::load_from(dir).unwrap_err();
        match &err {
            AssetLoadError::Missing { path } => assert!(path.ends_with(PUZZLE_IMAGE)),
            other => panic!("unexpected error: {other:?}"),
        }
        assert!(err.to_string().contains("missing asset file"));
    }

    #[test]
    fn slices_follow_grid_slots() {
        let grid = Grid::new(3, 3, CANVAS_SIZE);
        let tiles = slice(&grid);
        assert_eq!(tiles.len(), 9);
        assert_eq!(tiles[4].source, Rect::new(200, 200, 200, 200));
    }

    #[test]
    fn source_point_is_relative_to_tile_origin() {
        let tile = TileImage {
            source: Rect::new(200, 0, 200, 200),
        };
        let origin = Point::new(-50, 300);
        assert_eq!(
            tile.source_point(origin, Point::new(-50, 300)),
            Some(Point::new(200, 0))
        );
        assert_eq!(
            tile.source_point(origin, Point::new(149, 499)),
            Some(Point::new(399, 199))
        );
        assert_eq!(tile.source_point(origin, Point::new(150, 300)), None);
        assert_eq!(tile.source_point(origin, Point::new(-51, 300)), None);
    }

    #[test]
    fn picture_pixels_are_bounds_checked() {
        let pic = Picture::from_fn(4, |x, y| Rgb::new(x as u8, y as u8, 0));
        assert_eq!(pic.size(), 4);
        assert_eq!(pic.pixel_at(Point::new(3, 2)), Some(Rgb::new(3, 2, 0)));
        assert_eq!(pic.pixel_at(Point::new(4, 0)), None);
        assert_eq!(pic.pixel_at(Point::new(-1, 0)), None);
    }
}
