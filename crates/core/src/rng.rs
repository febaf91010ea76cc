//! RNG module - tile scattering
//!
//! Scatters tiles by shuffling the list of correct positions, so every
//! starting position is some tile's slot and no two tiles start on the same
//! slot. A tile may start on its own slot; that does not count as placed.
//!
//! Also provides a simple LCG so a seed fully determines a shuffle.

use crate::types::Point;

/// Simple LCG (Linear Congruential Generator) RNG
/// Uses constants from Numerical Recipes
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u32) -> Self {
        // Avoid 0 seed which would produce all zeros
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    /// Generate next random u32
    pub fn next_u32(&mut self) -> u32 {
        // LCG formula: (a * state + c) mod m
        // Using Numerical Recipes constants: a=1664525, c=1013904223, m=2^32
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Generate random value in range [0, max)
    pub fn next_range(&mut self, max: u32) -> u32 {
        // High bits of an LCG are far better distributed than the low ones.
        ((u64::from(self.next_u32()) * u64::from(max)) >> 32) as u32
    }

    /// Shuffle a slice using Fisher-Yates
    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        for i in (1..slice.len()).rev() {
            let j = self.next_range((i + 1) as u32) as usize;
            slice.swap(i, j);
        }
    }

    /// Current generator state (feeds the next shuffle).
    pub fn state(&self) -> u32 {
        self.state
    }
}

/// Random starting positions: entry `i` is where tile `i` starts.
pub fn scatter_positions(correct: &[Point], rng: &mut SimpleRng) -> Vec<Point> {
    let mut positions = correct.to_vec();
    rng.shuffle(&mut positions);
    positions
}
