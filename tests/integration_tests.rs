//! Integration tests for a whole game session

use swapples::config::AppConfig;
use swapples::core::{apply_move, new_board, Board, IllegalMove};
use swapples::types::{Axis, Move};

#[test]
fn test_game_lifecycle() {
    let config = AppConfig::from_toml("[board]\nwidth = 6\nheight = 6\nseed = 12345\n").unwrap();
    let mut board = Board::new(config.board).unwrap();
    assert_eq!(board.width(), 6);
    assert_eq!(board.height(), 6);

    // Sweep every horizontal swap once; each one is either accepted or undone
    let mut total = 0;
    for row in 0..6 {
        for col in 0..5 {
            let outcome = board.apply(Move::new(Axis::Horizontal, row, col, col + 1)).unwrap();
            total += outcome.score_delta;
            assert!(outcome.accepted || outcome.score_delta == -1);
        }
    }

    assert_eq!(board.moves_played(), 30);
    assert_eq!(board.accepted_moves() + board.rejected_moves(), 30);
    assert_eq!(board.total_score(), total);
    assert!(!board.grid().has_empty());
}

#[test]
fn test_same_seed_same_game() {
    let play = || {
        let config = AppConfig::from_toml("[board]\nseed = 99\n").unwrap();
        let mut board = Board::new(config.board).unwrap();
        for token in ["0ab", "10a", "3cd", "45e", "7gh", "56c"] {
            board.apply_move(token).unwrap();
        }
        (board.grid().clone(), board.total_score())
    };
    assert_eq!(play(), play());
}

#[test]
fn test_illegal_moves_are_reported_not_applied() {
    let mut board = new_board(8, 8, 5).unwrap();
    let before = board.grid().clone();

    assert_eq!(apply_move(&mut board, "0ac"), Err(IllegalMove::NotAdjacent));
    assert_eq!(apply_move(&mut board, "quit"), Err(IllegalMove::WrongLength(4)));
    assert_eq!(board.grid(), &before);
    assert_eq!(board.total_score(), 0);

    // The session carries on normally afterwards
    assert!(apply_move(&mut board, "0ab").is_ok());
    assert_eq!(board.moves_played(), 1);
}
