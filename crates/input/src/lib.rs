//! Terminal input module (engine-facing).
//!
//! This module is intentionally independent of any rendering code. It maps
//! `crossterm` mouse and key events into canvas-space
//! [`InputEvent`](crate::types::InputEvent)s and collects them in a bounded
//! per-frame queue that the frame loop drains once per tick.

pub mod map;
pub mod queue;

pub use picture_puzzle_types as types;

pub use map::{map_event, map_mouse, should_quit};
pub use queue::FrameEvents;
