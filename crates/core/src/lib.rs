//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains the puzzle rules, session state, and the countdown.
//! It has **no dependencies** on terminal I/O or image decoding, making it:
//!
//! - **Deterministic**: Same seed produces the same scatter on every run
//! - **Testable**: Every interaction is a plain method call on owned state
//! - **Portable**: Any front end can drive it with canvas-space pointer events
//!
//! # Module Structure
//!
//! - [`grid`]: Tile size and row-major slot positions
//! - [`rng`]: Seeded LCG and the scatter (shuffle) of starting positions
//! - [`puzzle`]: Pick up / drag / release, snapping, draw order, win detection
//! - [`timer`]: Frame-driven countdown
//! - [`layout`]: Text anchors and button hit boxes shared with the view
//! - [`session`]: Menu → Playing → Won / TimedOut screen state machine
//!
//! # Example
//!
//! ```
//! use picture_puzzle_core::{Game, Screen};
//! use picture_puzzle_types::{Difficulty, InputEvent, Point, PuzzleConfig};
//!
//! let mut game = Game::new(12345, PuzzleConfig::default());
//!
//! // Click "Easy" on the 300x300 menu.
//! game.frame([InputEvent::PointerDown(Point::new(150, 155))]);
//! let session = game.session().unwrap();
//! assert_eq!(session.difficulty(), Difficulty::Easy);
//! assert_eq!(session.puzzle().tiles().len(), 9);
//!
//! // One frame has elapsed since the session started.
//! assert_eq!(session.timer().remaining_ticks(), 30 * 60 - 1);
//! assert!(matches!(game.screen(), Screen::Playing(_)));
//! ```
//!
//! # Timing
//!
//! The game uses a fixed timestep: call [`Game::frame`](session::Game::frame)
//! once per rendered frame (60 per second) with the input gathered since the
//! previous frame.

pub mod grid;
pub mod layout;
pub mod puzzle;
pub mod rng;
pub mod session;
pub mod timer;

pub use picture_puzzle_types as types;

// Re-export commonly used types for convenience
pub use grid::Grid;
pub use layout::{Button, EndKind};
pub use puzzle::{PuzzleState, Release, Selection, Tile};
pub use rng::{scatter_positions, SimpleRng};
pub use session::{Flow, Game, PlaySession, Screen};
pub use timer::Countdown;
