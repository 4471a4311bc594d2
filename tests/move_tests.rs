//! Move validator tests - token grammar, check order and adjacency

use proptest::prelude::*;

use swapples::core::{parse_move, Board, BoardConfig, IllegalMove};
use swapples::types::{column_label, row_label, Axis, Move};

#[test]
fn test_token_forms() {
    // {row}{col}{col}: swap columns b and c in row 3
    assert_eq!(
        parse_move("3bc", 8, 8),
        Ok(Move::new(Axis::Horizontal, 3, 1, 2))
    );
    // {row}{row}{col}: swap rows 4 and 5 in column c
    assert_eq!(
        parse_move("45c", 8, 8),
        Ok(Move::new(Axis::Vertical, 2, 4, 5))
    );
}

#[test]
fn test_reasons_are_human_readable() {
    let reason = |token: &str| parse_move(token, 4, 4).unwrap_err().to_string();
    assert_eq!(reason("0a%"), "illegal column %");
    assert_eq!(reason("0ae"), "column e out of bounds");
    assert_eq!(reason("xab"), "illegal row x");
    assert_eq!(reason("4ab"), "row 4 out of bounds");
    assert_eq!(reason("0ac"), "can only swap adjacent cells");
    assert_eq!(reason("0a"), "move must be three characters, got 2");
}

#[test]
fn test_small_board_bounds() {
    assert!(parse_move("2bc", 3, 3).is_ok());
    assert_eq!(parse_move("2cd", 3, 3), Err(IllegalMove::ColumnOutOfBounds('d')));
    assert_eq!(parse_move("23a", 3, 3), Err(IllegalMove::RowOutOfBounds('3')));
}

#[test]
fn test_illegal_move_does_not_mutate_board() {
    let mut board = Board::new(BoardConfig::default().with_seed(5)).unwrap();
    let before = board.grid().clone();
    for token in ["", "zz", "0ac", "9ab", "0a!", "77h", "0aab"] {
        assert!(board.apply_move(token).is_err(), "{:?} should be rejected", token);
        assert_eq!(board.grid(), &before);
    }
    assert_eq!(board.moves_played(), 0);
}

fn horizontal_token(row: usize, a: usize, b: usize) -> String {
    [
        row_label(row).unwrap(),
        column_label(a).unwrap(),
        column_label(b).unwrap(),
    ]
    .iter()
    .collect()
}

fn vertical_token(col: usize, a: usize, b: usize) -> String {
    [
        row_label(a).unwrap(),
        row_label(b).unwrap(),
        column_label(col).unwrap(),
    ]
    .iter()
    .collect()
}

proptest! {
    #[test]
    fn non_adjacent_swaps_are_always_illegal(
        seed in any::<u32>(),
        fixed in 0usize..8,
        a in 0usize..8,
        b in 0usize..8,
        vertical in any::<bool>(),
    ) {
        prop_assume!(a.abs_diff(b) != 1);

        let mut board = Board::new(BoardConfig::default().with_seed(seed)).unwrap();
        let before = board.grid().clone();
        let token = if vertical {
            vertical_token(fixed, a, b)
        } else {
            horizontal_token(fixed, a, b)
        };

        prop_assert_eq!(board.apply_move(&token), Err(IllegalMove::NotAdjacent));
        prop_assert_eq!(board.grid(), &before);
    }

    #[test]
    fn adjacent_swaps_in_bounds_always_parse(
        fixed in 0usize..8,
        a in 0usize..7,
        forward in any::<bool>(),
        vertical in any::<bool>(),
    ) {
        let (a, b) = if forward { (a, a + 1) } else { (a + 1, a) };
        let (token, axis) = if vertical {
            (vertical_token(fixed, a, b), Axis::Vertical)
        } else {
            (horizontal_token(fixed, a, b), Axis::Horizontal)
        };

        let mv = parse_move(&token, 8, 8).unwrap();
        prop_assert_eq!(mv, Move::new(axis, fixed, a, b));
    }
}
