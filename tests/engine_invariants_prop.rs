//! Property/invariant tests for `Board::apply`.
//!
//! Random seeded boards and random adjacent swaps; after every move:
//! - no cell is left empty,
//! - an accepted move leaves a grid with no runs,
//! - a rejected move leaves the grid exactly as it was and costs one point,
//! - the running total equals the sum of returned deltas.

use proptest::prelude::*;

use swapples::core::{find_runs, Board, BoardConfig};
use swapples::types::{Axis, Move};

fn arb_move(width: usize, height: usize) -> impl Strategy<Value = Move> {
    prop_oneof![
        (0..height, 0..width - 1)
            .prop_map(|(row, col)| Move::new(Axis::Horizontal, row, col, col + 1)),
        (0..width, 0..height - 1)
            .prop_map(|(col, row)| Move::new(Axis::Vertical, col, row, row + 1)),
    ]
}

proptest! {
    #[test]
    fn every_move_keeps_board_invariants(
        seed in any::<u32>(),
        moves in prop::collection::vec(arb_move(6, 7), 1..40),
    ) {
        let mut board = Board::new(BoardConfig::new(6, 7, 5).with_seed(seed)).unwrap();
        prop_assert!(find_runs(board.grid()).is_empty());

        let mut expected_total = 0;
        for mv in moves {
            let before = board.grid().clone();
            let outcome = board.apply(mv).unwrap();
            expected_total += outcome.score_delta;

            prop_assert!(!board.grid().has_empty());
            if outcome.accepted {
                prop_assert!(outcome.score_delta >= 3);
                prop_assert!(outcome.passes >= 1);
                prop_assert!(find_runs(board.grid()).is_empty());
            } else {
                prop_assert_eq!(outcome.score_delta, -1);
                prop_assert_eq!(board.grid(), &before);
            }
        }

        prop_assert_eq!(board.total_score(), expected_total);
    }

    #[test]
    fn accepted_score_matches_cleared_runs(
        seed in any::<u32>(),
        mv in arb_move(8, 8),
    ) {
        let mut board = Board::new(BoardConfig::default().with_seed(seed)).unwrap();
        let outcome = board.apply(mv).unwrap();
        let from_runs: i32 = outcome.runs.iter().map(|r| r.score()).sum();
        if outcome.accepted {
            prop_assert_eq!(outcome.score_delta, from_runs);
            prop_assert!(outcome.runs.iter().all(|r| r.len >= 3));
        } else {
            prop_assert!(outcome.runs.is_empty());
        }
    }

    #[test]
    fn new_boards_are_stable_for_any_shape(
        seed in any::<u32>(),
        width in 1usize..=26,
        height in 1usize..=10,
        n_colors in 3u8..=8,
    ) {
        let board = Board::new(BoardConfig::new(width, height, n_colors).with_seed(seed)).unwrap();
        prop_assert!(!board.grid().has_empty());
        prop_assert!(find_runs(board.grid()).is_empty());
        prop_assert_eq!(board.total_score(), 0);
    }
}
