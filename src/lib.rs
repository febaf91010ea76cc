//! Picture puzzle (workspace facade crate).
//!
//! Re-exports `picture_puzzle::{core,input,term,types}` while the
//! implementation lives in dedicated crates under `crates/`.

pub use picture_puzzle_core as core;
pub use picture_puzzle_input as input;
pub use picture_puzzle_term as term;
pub use picture_puzzle_types as types;
