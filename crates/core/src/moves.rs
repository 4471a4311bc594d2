//! Move validation - turns a three-character token into a [`Move`]
//!
//! Token layout is `{row}{row}{col}` (swap two rows within a column) or
//! `{row}{col}{col}` (swap two columns within a row). Rows are digits,
//! columns are letters. The first character is always a row and the last
//! always a column; the middle one decides the axis.
//!
//! Validation never touches the grid. A token that passes here is safe to
//! apply to any grid of the given dimensions.

use crate::error::IllegalMove;
use crate::types::{column_index, column_label, row_index, row_label, Axis, Move};

/// Parse and validate a move token against grid dimensions
///
/// Checks run in order: last character (column), first character (row),
/// middle character, adjacency.
///
/// # Examples
///
/// ```
/// use swapples_core::moves::parse_move;
/// use swapples_core::types::{Axis, Move};
///
/// assert_eq!(parse_move("3bc", 8, 8), Ok(Move::new(Axis::Horizontal, 3, 1, 2)));
/// assert_eq!(parse_move("45c", 8, 8), Ok(Move::new(Axis::Vertical, 2, 4, 5)));
/// assert!(parse_move("3bd", 8, 8).is_err());
/// ```
pub fn parse_move(token: &str, width: usize, height: usize) -> Result<Move, IllegalMove> {
    let chars: Vec<char> = token.trim().chars().collect();
    let [first, middle, last] = match chars.as_slice() {
        &[a, b, c] => [a, b, c],
        other => return Err(IllegalMove::WrongLength(other.len())),
    };

    let col = validate_col(last, width)?;
    let row = validate_row(first, height)?;

    let mv = if column_index(middle).is_some() {
        let other_col = validate_col(middle, width)?;
        Move::new(Axis::Horizontal, row, other_col, col)
    } else {
        let other_row = validate_row(middle, height)?;
        Move::new(Axis::Vertical, col, row, other_row)
    };

    validate(&mv, width, height)?;
    Ok(mv)
}

/// Check an already-built move against grid dimensions and adjacency
pub fn validate(mv: &Move, width: usize, height: usize) -> Result<(), IllegalMove> {
    let ((ra, ca), (rb, cb)) = mv.cells();
    for (row, col) in [(ra, ca), (rb, cb)] {
        if col >= width {
            let label = column_label(col).unwrap_or('#');
            return Err(IllegalMove::ColumnOutOfBounds(label));
        }
        if row >= height {
            let label = row_label(row).unwrap_or('#');
            return Err(IllegalMove::RowOutOfBounds(label));
        }
    }
    if !mv.is_adjacent() {
        return Err(IllegalMove::NotAdjacent);
    }
    Ok(())
}

fn validate_col(label: char, width: usize) -> Result<usize, IllegalMove> {
    let col = column_index(label).ok_or(IllegalMove::IllegalColumn(label))?;
    if col >= width {
        return Err(IllegalMove::ColumnOutOfBounds(label));
    }
    Ok(col)
}

fn validate_row(label: char, height: usize) -> Result<usize, IllegalMove> {
    let row = row_index(label).ok_or(IllegalMove::IllegalRow(label))?;
    if row >= height {
        return Err(IllegalMove::RowOutOfBounds(label));
    }
    Ok(row)
}
