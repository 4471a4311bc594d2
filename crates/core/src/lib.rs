//! Core game logic module - pure, deterministic, and testable
//!
//! This crate is the rule engine of a swap-and-match tile puzzle. It has
//! **zero dependencies** on terminals or I/O, making it:
//!
//! - **Deterministic**: Same seed produces identical boards and cascades
//! - **Testable**: Every random draw goes through a [`ColorSource`]
//! - **Portable**: Can be driven by any shell (terminal, GUI, headless)
//!
//! # Module Structure
//!
//! - [`grid`]: rectangular grid of color ids with snapshot/restore
//! - [`moves`]: move token parsing and validation
//! - [`resolver`]: run detection and the cascade loop
//! - [`gravity`]: collapsing cleared cells and refilling from the top
//! - [`scoring`]: fixed run-length score table
//! - [`board`]: a game session applying moves atomically
//! - [`rng`]: seedable color sources
//! - [`config`]: board shape and color settings
//!
//! # Game Rules
//!
//! - A move swaps two orthogonally adjacent cells
//! - Three or more same-colored cells in a row or column form a run and are cleared
//! - Runs score 3 / 10 / 25 points for lengths 3 / 4 / 5+
//! - Survivors fall, new cells drop in from the top, and new runs cascade
//! - A legal swap that creates no run is undone and costs 1 point
//!
//! # Example
//!
//! ```
//! use swapples_core::{Board, BoardConfig};
//!
//! let mut board = Board::new(BoardConfig::default().with_seed(12345)).unwrap();
//!
//! // Swap columns a and b in row 0
//! let outcome = board.apply_move("0ab").unwrap();
//! if outcome.accepted {
//!     assert!(outcome.score_delta >= 3);
//! } else {
//!     assert_eq!(outcome.score_delta, -1);
//! }
//!
//! // Malformed moves are rejected without touching the board
//! assert!(board.apply_move("0ac").is_err());
//! ```

pub mod board;
pub mod config;
pub mod error;
pub mod gravity;
pub mod grid;
pub mod moves;
pub mod resolver;
pub mod rng;
pub mod scoring;

pub use swapples_types as types;

// Re-export commonly used types for convenience
pub use board::{apply_move, new_board, Board, MoveOutcome};
pub use config::BoardConfig;
pub use error::{ConfigError, GridError, IllegalMove};
pub use grid::{Grid, GridSnapshot};
pub use moves::parse_move;
pub use resolver::{
    clear_pass, find_runs, resolve, resolve_observed, CascadeStep, Resolution, Run,
};
pub use rng::{ColorSource, ScriptedColors, SimpleRng};
pub use scoring::{calculate_run_score, calculate_score};
