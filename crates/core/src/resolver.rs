//! Match resolver - run detection and the cascade loop
//!
//! A pass walks the colors in ascending order. For each color it first scans
//! every column top to bottom, then every row left to right, looking for a
//! window of three matching cells. A hit is cleared at once and extended
//! forward while the color keeps matching. Because columns are cleared before
//! rows, a cell already taken by a vertical run is [`EMPTY`] by the time the
//! horizontal scan for the same color reaches it and cannot count twice.
//!
//! [`resolve`] repeats pass, refill, pass until a pass finds nothing.
//! [`resolve_observed`] does the same and hands the grid to a callback after
//! every clear and every refill, so a shell can show the cascade unfold.

use log::debug;

use crate::gravity;
use crate::grid::Grid;
use crate::rng::ColorSource;
use crate::scoring::calculate_run_score;
use crate::types::{Axis, ColorId, EMPTY, MIN_RUN};

/// A maximal line of same-colored cells found during a pass
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Run {
    pub axis: Axis,
    pub color: ColorId,
    /// Column of a vertical run, row of a horizontal one
    pub fixed: usize,
    /// First position along the run's axis
    pub start: usize,
    pub len: usize,
}

impl Run {
    pub fn score(&self) -> i32 {
        calculate_run_score(self.len)
    }

    /// Cells covered by the run as `(row, col)` pairs
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        (self.start..self.start + self.len).map(move |pos| cell_at(self.axis, self.fixed, pos))
    }
}

/// Outcome of resolving a grid to a stable state
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Resolution {
    /// At least one run was cleared
    pub accepted: bool,
    pub score: i32,
    /// Number of passes that cleared something (the final empty scan is not counted)
    pub passes: usize,
    /// Every run cleared, in the order it was found
    pub runs: Vec<Run>,
}

#[inline]
fn cell_at(axis: Axis, fixed: usize, pos: usize) -> (usize, usize) {
    match axis {
        Axis::Vertical => (pos, fixed),
        Axis::Horizontal => (fixed, pos),
    }
}

/// Scan one row or column for runs of `color`, clearing each as it is found
fn scan_line(grid: &mut Grid, axis: Axis, fixed: usize, color: ColorId, runs: &mut Vec<Run>) {
    let len = match axis {
        Axis::Vertical => grid.height(),
        Axis::Horizontal => grid.width(),
    };
    let matches = |grid: &Grid, pos: usize| {
        let (row, col) = cell_at(axis, fixed, pos);
        grid.get(row, col) == color
    };

    for start in 0..len.saturating_sub(MIN_RUN - 1) {
        if !(start..start + MIN_RUN).all(|pos| matches(grid, pos)) {
            continue;
        }

        let mut run_len = MIN_RUN;
        while start + run_len < len && matches(grid, start + run_len) {
            run_len += 1;
        }

        let run = Run {
            axis,
            color,
            fixed,
            start,
            len: run_len,
        };
        for (row, col) in run.cells() {
            grid.set(row, col, EMPTY);
        }
        debug!(
            "cleared {} run of color {} at {}:{} len {}",
            axis.as_str(),
            color,
            fixed,
            start,
            run_len
        );
        runs.push(run);
    }
}

/// Point in the cascade at which an observer sees the grid
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CascadeStep {
    /// The runs of `pass` were cleared; their cells are still [`EMPTY`]
    Cleared { pass: usize },
    /// Gravity and refill finished for `pass`
    Refilled { pass: usize },
}

/// Run one detection pass, clearing every run found
///
/// Cleared cells are left [`EMPTY`]; the caller must refill before the grid
/// is observed again.
pub fn clear_pass(grid: &mut Grid) -> Vec<Run> {
    let mut runs = Vec::new();
    for color in 1..=grid.n_colors() {
        for col in 0..grid.width() {
            scan_line(grid, Axis::Vertical, col, color, &mut runs);
        }
        for row in 0..grid.height() {
            scan_line(grid, Axis::Horizontal, row, color, &mut runs);
        }
    }
    runs
}

/// Runs a single pass would clear, without touching the grid
pub fn find_runs(grid: &Grid) -> Vec<Run> {
    let mut scratch = grid.clone();
    clear_pass(&mut scratch)
}

/// Clear, refill and rescan until the grid is stable
pub fn resolve<S: ColorSource + ?Sized>(grid: &mut Grid, source: &mut S) -> Resolution {
    resolve_observed(grid, source, |_, _| {})
}

/// [`resolve`], calling `observe` after each clear and each refill
///
/// A stable grid produces no calls.
pub fn resolve_observed<S, F>(grid: &mut Grid, source: &mut S, mut observe: F) -> Resolution
where
    S: ColorSource + ?Sized,
    F: FnMut(CascadeStep, &Grid),
{
    let mut resolution = Resolution::default();

    loop {
        let runs = clear_pass(grid);
        if runs.is_empty() {
            break;
        }

        let pass_score: i32 = runs.iter().map(Run::score).sum();
        resolution.passes += 1;
        resolution.score += pass_score;
        resolution.accepted = true;
        debug!(
            "pass {}: {} run(s), {} points",
            resolution.passes,
            runs.len(),
            pass_score
        );
        resolution.runs.extend(runs);
        observe(CascadeStep::Cleared { pass: resolution.passes }, grid);

        gravity::refill(grid, source);
        observe(CascadeStep::Refilled { pass: resolution.passes }, grid);
    }

    resolution
}
