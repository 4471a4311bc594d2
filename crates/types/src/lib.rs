//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the engine.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (core logic, terminal rendering, tests).
//!
//! # Board Dimensions
//!
//! The default board is 8 columns by 8 rows with 5 colors:
//!
//! - **Columns**: labelled `a`, `b`, `c`, ... (at most 26)
//! - **Rows**: labelled `0`, `1`, `2`, ... top to bottom (at most 10)
//! - **Colors**: `1..=n_colors`; `0` is the transient [`EMPTY`] marker
//!
//! # Scoring
//!
//! | Run length | Points |
//! |------------|--------|
//! | 3 | 3 |
//! | 4 | 10 |
//! | 5+ | 25 |
//!
//! A legal swap that produces no run costs [`UNPRODUCTIVE_PENALTY`] points.
//!
//! # Examples
//!
//! ```
//! use swapples_types::{column_index, column_label, row_index, Axis, Move, RUN_SCORES};
//!
//! assert_eq!(column_index('c'), Some(2));
//! assert_eq!(column_label(2), Some('c'));
//! assert_eq!(row_index('7'), Some(7));
//!
//! let mv = Move::new(Axis::Horizontal, 3, 1, 2);
//! assert_eq!(mv.cells(), ((3, 1), (3, 2)));
//!
//! assert_eq!(RUN_SCORES, [3, 10, 25]);
//! ```

/// Color identifier stored in each grid cell
pub type ColorId = u8;

/// Marker for a cleared cell awaiting refill
pub const EMPTY: ColorId = 0;

/// Default board width (8 columns)
pub const DEFAULT_WIDTH: usize = 8;

/// Default board height (8 rows)
pub const DEFAULT_HEIGHT: usize = 8;

/// Default number of colors (red, blue, green, yellow, purple)
pub const DEFAULT_COLORS: ColorId = 5;

/// Widest supported board; columns are labelled by a single letter
pub const MAX_WIDTH: usize = 26;

/// Tallest supported board; rows are labelled by a single digit
pub const MAX_HEIGHT: usize = 10;

/// Fewest colors a board may use.
///
/// With one or two colors nearly every refill produces a fresh run and the
/// cascade does not settle.
pub const MIN_COLORS: ColorId = 3;

/// Most colors a board may use (size of the render palette)
pub const MAX_COLORS: ColorId = 8;

/// Shortest sequence of same-colored cells that counts as a run
pub const MIN_RUN: usize = 3;

/// Run length at which the score table tops out
pub const MAX_SCORED_RUN: usize = 5;

/// Points per run length, indexed by `len - MIN_RUN`
pub const RUN_SCORES: [i32; 3] = [3, 10, 25];

/// Score delta returned for a legal swap that produced no run
pub const UNPRODUCTIVE_PENALTY: i32 = -1;

/// Column index for a column label (`a` = 0), case-insensitive
pub fn column_index(label: char) -> Option<usize> {
    let lower = label.to_ascii_lowercase();
    if lower.is_ascii_lowercase() {
        Some((lower as u8 - b'a') as usize)
    } else {
        None
    }
}

/// Column label for a column index, if one exists
pub fn column_label(index: usize) -> Option<char> {
    if index < MAX_WIDTH {
        Some((b'a' + index as u8) as char)
    } else {
        None
    }
}

/// Row index for a row label (`0` = top row)
pub fn row_index(label: char) -> Option<usize> {
    label.to_digit(10).map(|d| d as usize)
}

/// Row label for a row index, if one exists
pub fn row_label(index: usize) -> Option<char> {
    char::from_digit(index as u32, 10).filter(|_| index < MAX_HEIGHT)
}

/// Axis along which two cells are swapped or a run extends
///
/// - **Horizontal**: within one row, across columns
/// - **Vertical**: within one column, across rows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    Horizontal,
    Vertical,
}

impl Axis {
    pub fn as_str(&self) -> &'static str {
        match self {
            Axis::Horizontal => "horizontal",
            Axis::Vertical => "vertical",
        }
    }
}

/// A validated swap of two adjacent cells
///
/// `fixed` is the row (horizontal swap) or column (vertical swap) shared by
/// both cells; `a` and `b` are the positions along the moving axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    pub axis: Axis,
    pub fixed: usize,
    pub a: usize,
    pub b: usize,
}

impl Move {
    pub fn new(axis: Axis, fixed: usize, a: usize, b: usize) -> Self {
        Self { axis, fixed, a, b }
    }

    /// The two swapped cells as `(row, col)` pairs
    pub fn cells(&self) -> ((usize, usize), (usize, usize)) {
        match self.axis {
            Axis::Horizontal => ((self.fixed, self.a), (self.fixed, self.b)),
            Axis::Vertical => ((self.a, self.fixed), (self.b, self.fixed)),
        }
    }

    /// Whether the two positions are exactly one step apart
    pub fn is_adjacent(&self) -> bool {
        self.a.abs_diff(self.b) == 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn score_table_defaults() {
        assert_eq!(RUN_SCORES.len(), MAX_SCORED_RUN - MIN_RUN + 1);
        assert_eq!(RUN_SCORES, [3, 10, 25]);
        assert_eq!(UNPRODUCTIVE_PENALTY, -1);
    }

    #[test]
    fn labels_cover_supported_dimensions() {
        for i in 0..MAX_WIDTH {
            let label = column_label(i).unwrap();
            assert_eq!(column_index(label), Some(i));
            assert_eq!(column_index(label.to_ascii_uppercase()), Some(i));
        }
        assert_eq!(column_label(MAX_WIDTH), None);

        for i in 0..MAX_HEIGHT {
            let label = row_label(i).unwrap();
            assert_eq!(row_index(label), Some(i));
        }
        assert_eq!(row_label(MAX_HEIGHT), None);
    }

    #[test]
    fn non_labels_are_rejected() {
        assert_eq!(column_index('3'), None);
        assert_eq!(column_index('!'), None);
        assert_eq!(row_index('x'), None);
    }

    #[test]
    fn vertical_move_cells() {
        let mv = Move::new(Axis::Vertical, 2, 4, 5);
        assert_eq!(mv.cells(), ((4, 2), (5, 2)));
        assert!(mv.is_adjacent());
        assert!(!Move::new(Axis::Vertical, 2, 4, 6).is_adjacent());
    }
}
