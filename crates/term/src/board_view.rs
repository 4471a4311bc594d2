//! BoardView: plain-text projection of a grid.
//!
//! This module is pure (no I/O). It can be unit-tested.
//!
//! Layout for a 3x2 grid:
//!
//! ```text
//!    abc
//!    ___
//! 0 |RBG
//! 1 |YPR
//! ```

use crate::core::Grid;
use crate::palette::color_letter;
use crate::types::{column_label, row_label};

/// Width of the row-label gutter (`"0 |"`)
pub const GUTTER: usize = 3;

/// Column header line: gutter padding then one letter per column
pub fn header(width: usize) -> String {
    let mut line = " ".repeat(GUTTER);
    line.extend((0..width).map(|c| column_label(c).unwrap_or('?')));
    line
}

/// Underline below the header
pub fn underline(width: usize) -> String {
    let mut line = " ".repeat(GUTTER);
    line.push_str(&"_".repeat(width));
    line
}

/// Row prefix (`"3 |"`)
pub fn row_prefix(row: usize) -> String {
    format!("{} |", row_label(row).unwrap_or('?'))
}

/// Render the grid as labelled lines of color letters
pub fn render(grid: &Grid) -> String {
    let mut lines = Vec::with_capacity(grid.height() + 2);
    lines.push(header(grid.width()));
    lines.push(underline(grid.width()));
    for row in 0..grid.height() {
        let mut line = row_prefix(row);
        line.extend((0..grid.width()).map(|col| color_letter(grid.get(row, col))));
        lines.push(line);
    }
    lines.join("\n")
}
