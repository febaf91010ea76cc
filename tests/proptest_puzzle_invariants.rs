//! Property-based invariant tests for the puzzle state machine.
//!
//! 1. Slot positions are a bijection onto the grid.
//! 2. Scatter is always a permutation of the slots.
//! 3. Draw order stays a permutation under any gesture sequence.
//! 4. Placement is monotonic and placed tiles sit exactly on their slot.
//! 5. Won iff every tile is placed.
//! 6. TimedOut is never left.

use std::collections::HashSet;

use picture_puzzle::core::{scatter_positions, Grid, PlaySession, PuzzleState, SimpleRng};
use picture_puzzle::types::{Difficulty, InputEvent, Outcome, Point, PuzzleConfig, CANVAS_SIZE};
use proptest::prelude::*;

// ── Helpers ─────────────────────────────────────────────────────────────

fn grid_dims() -> impl Strategy<Value = (u32, u32)> {
    (1u32..=8, 1u32..=8)
}

fn canvas_point() -> impl Strategy<Value = Point> {
    (-100i32..700, -100i32..700).prop_map(|(x, y)| Point::new(x, y))
}

/// Pointer gestures; `Snap` drops whatever is held near its own slot.
#[derive(Debug, Clone)]
enum Gesture {
    Event(InputEvent),
    Snap { jitter: Point },
}

fn gesture() -> impl Strategy<Value = Gesture> {
    prop_oneof![
        canvas_point().prop_map(|p| Gesture::Event(InputEvent::PointerDown(p))),
        canvas_point().prop_map(|p| Gesture::Event(InputEvent::PointerMove(p))),
        canvas_point().prop_map(|p| Gesture::Event(InputEvent::PointerUp(p))),
        (-40i32..=40, -40i32..=40).prop_map(|(x, y)| Gesture::Snap {
            jitter: Point::new(x, y)
        }),
    ]
}

fn apply(puzzle: &mut PuzzleState, g: &Gesture) {
    match g {
        Gesture::Event(e) => puzzle.apply(*e),
        Gesture::Snap { jitter } => {
            if let Some(sel) = puzzle.selection() {
                let target = puzzle.grid().correct_position(sel.tile).offset(*jitter);
                // Pointer position that puts the tile origin on `target`.
                puzzle.drag(target.delta(sel.grab_offset));
                puzzle.release();
            }
        }
    }
}

fn sorted(mut v: Vec<Point>) -> Vec<Point> {
    v.sort_by_key(|p| (p.y, p.x));
    v
}

// ═════════════════════════════════════════════════════════════════════════
// 1. Bijection
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn correct_positions_cover_the_grid_once((rows, cols) in grid_dims()) {
        let grid = Grid::new(rows, cols, CANVAS_SIZE);
        let size = grid.tile_size();
        let seen: HashSet<Point> = grid.correct_positions().into_iter().collect();
        prop_assert_eq!(seen.len(), (rows * cols) as usize);
        for r in 0..rows as i32 {
            for c in 0..cols as i32 {
                prop_assert!(seen.contains(&Point::new(c * size, r * size)));
            }
        }
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 2. Scatter permutation
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn scatter_is_a_permutation_of_slots(
        (rows, cols) in grid_dims(),
        seed in any::<u32>(),
    ) {
        let grid = Grid::new(rows, cols, CANVAS_SIZE);
        let mut rng = SimpleRng::new(seed);
        let scattered = scatter_positions(&grid.correct_positions(), &mut rng);
        prop_assert_eq!(sorted(scattered), sorted(grid.correct_positions()));
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 3-5. Gesture sequences
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn gesture_sequences_keep_invariants(
        difficulty in prop_oneof![
            Just(Difficulty::Easy),
            Just(Difficulty::Medium),
            Just(Difficulty::Hard),
        ],
        seed in any::<u32>(),
        gestures in proptest::collection::vec(gesture(), 0..200),
    ) {
        let config = PuzzleConfig::default();
        let mut rng = SimpleRng::new(seed);
        let mut puzzle = PuzzleState::new(difficulty.rows(), difficulty.cols(), &config, &mut rng);
        let n = puzzle.tiles().len();
        let mut placed_before = vec![false; n];

        for g in &gestures {
            apply(&mut puzzle, g);

            let mut order = puzzle.draw_order().to_vec();
            order.sort_unstable();
            prop_assert_eq!(order, (0..n).collect::<Vec<_>>());

            for (i, tile) in puzzle.tiles().iter().enumerate() {
                if placed_before[i] {
                    prop_assert!(tile.placed, "tile {} was unplaced", i);
                }
                if tile.placed {
                    prop_assert_eq!(tile.position, puzzle.grid().correct_position(i));
                }
                placed_before[i] = tile.placed;
            }

            let all_placed = puzzle.tiles().iter().all(|t| t.placed);
            prop_assert_eq!(all_placed, puzzle.outcome() == Outcome::Won);
            prop_assert_eq!(puzzle.placed_count(), placed_before.iter().filter(|&&p| p).count());
            if let Some(sel) = puzzle.selection() {
                prop_assert!(!puzzle.is_placed(sel.tile));
            }
        }
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 6. Time out is final
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn timed_out_sessions_stay_timed_out(
        seed in any::<u32>(),
        gestures in proptest::collection::vec(gesture(), 0..100),
    ) {
        let config = PuzzleConfig::default().with_ticks_per_second(1);
        let mut rng = SimpleRng::new(seed);
        let mut session = PlaySession::new(Difficulty::Easy, &config, &mut rng);
        for _ in 0..Difficulty::Easy.duration_seconds() {
            session.tick();
        }
        prop_assert_eq!(session.outcome(), Outcome::TimedOut);

        let before: Vec<Point> = session.puzzle().tiles().iter().map(|t| t.position).collect();
        for g in &gestures {
            apply(session.puzzle_mut(), g);
            session.tick();
            prop_assert_eq!(session.outcome(), Outcome::TimedOut);
        }
        let after: Vec<Point> = session.puzzle().tiles().iter().map(|t| t.position).collect();
        prop_assert_eq!(before, after);
    }
}
