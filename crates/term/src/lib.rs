//! Terminal "game renderer" module.
//!
//! This is a small, game-oriented rendering layer for terminal gameplay.
//! It avoids widget toolkits and instead renders into a simple framebuffer
//! that is flushed to the terminal as a diff.
//!
//! - [`assets`]: loads and scales the three pictures, slices the puzzle image
//! - [`game_view`]: pure rendering of each screen into a [`FrameBuffer`]
//! - [`renderer`]: terminal setup/teardown and diff flushing

pub mod assets;
pub mod fb;
pub mod game_view;
pub mod renderer;

pub use picture_puzzle_core as core;
pub use picture_puzzle_types as types;

pub use assets::{slice, AssetLoadError, Assets, Picture, TileImage};
pub use fb::{Cell, CellStyle, FrameBuffer, Rgb, HALF_BLOCK};
pub use game_view::{GameView, Viewport};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
