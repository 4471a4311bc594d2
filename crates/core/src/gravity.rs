//! Gravity/refill - collapses surviving cells and tops columns up
//!
//! Each fix takes the topmost empty cell on the board (row-major order), the
//! contiguous empty block below it in that column, and everything above it.
//! That span is redrawn from the color source and the survivors that sat
//! above the block are written back onto its tail, so they land directly on
//! top of whatever sits below the block and new colors appear at the top.
//!
//! A column with several separate gaps takes one fix per gap; the loop runs
//! until no empty cell remains anywhere.

use log::trace;

use crate::grid::Grid;
use crate::rng::ColorSource;
use crate::types::{ColorId, EMPTY};

/// Remove every empty cell from the grid
///
/// Returns the number of column fixes performed.
pub fn refill<S: ColorSource + ?Sized>(grid: &mut Grid, source: &mut S) -> usize {
    let mut fixes = 0;
    while let Some((row, col)) = grid.first_empty() {
        fill_gap(grid, row, col, source);
        fixes += 1;
    }
    fixes
}

/// Fix the empty block whose top cell is (row, col)
fn fill_gap<S: ColorSource + ?Sized>(grid: &mut Grid, row: usize, col: usize, source: &mut S) {
    let mut depth = 1;
    while row + depth < grid.height() && grid.get(row + depth, col) == EMPTY {
        depth += 1;
    }

    let span = row + depth;
    let n_colors = grid.n_colors();
    let mut fresh: Vec<ColorId> = (0..span).map(|_| source.next_color(n_colors)).collect();
    for r in 0..row {
        fresh[depth + r] = grid.get(r, col);
    }
    for (r, &color) in fresh.iter().enumerate() {
        grid.set(r, col, color);
    }

    trace!(
        "refill col {}: gap rows {}..{} ({} new cells)",
        col,
        row,
        span,
        depth
    );
}
