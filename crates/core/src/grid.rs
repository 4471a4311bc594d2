//! Grid module - owns the colored cells
//!
//! The grid is `height` rows by `width` columns, each cell holding a color in
//! `1..=n_colors` or [`EMPTY`] while a clear is waiting for refill.
//! Uses a flat array for cache locality.
//! Coordinates: (row, col) where row 0 is the top and col 0 is the left edge.

use crate::error::{ConfigError, GridError};
use crate::rng::ColorSource;
use crate::types::{ColorId, EMPTY};
use crate::BoardConfig;

/// Colored cell grid using flat row-major storage
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    width: usize,
    height: usize,
    n_colors: ColorId,
    /// Flat array of cells, row-major order (row * width + col)
    cells: Vec<ColorId>,
}

/// Deep copy of a grid's cells, used to roll back a rejected move
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridSnapshot {
    cells: Vec<ColorId>,
}

impl Grid {
    /// Create a grid filled with independent uniform colors
    ///
    /// The shape and color count must pass [`BoardConfig::validate`].
    pub fn random<S: ColorSource + ?Sized>(
        width: usize,
        height: usize,
        n_colors: ColorId,
        source: &mut S,
    ) -> Result<Self, ConfigError> {
        BoardConfig::new(width, height, n_colors).validate()?;

        let mut grid = Self {
            width,
            height,
            n_colors,
            cells: vec![EMPTY; width * height],
        };
        grid.init_random(source);
        Ok(grid)
    }

    /// Build a grid from literal rows (top row first)
    ///
    /// Every cell must hold a color in `1..=n_colors`.
    pub fn from_rows(rows: &[Vec<ColorId>], n_colors: ColorId) -> Result<Self, GridError> {
        let height = rows.len();
        let width = rows.first().map_or(0, |r| r.len());
        if width == 0 {
            return Err(GridError::Empty);
        }
        BoardConfig::new(width, height, n_colors).validate()?;

        let mut cells = Vec::with_capacity(width * height);
        for (row, values) in rows.iter().enumerate() {
            if values.len() != width {
                return Err(GridError::Ragged {
                    row,
                    len: values.len(),
                    expected: width,
                });
            }
            for (col, &color) in values.iter().enumerate() {
                if color == EMPTY || color > n_colors {
                    return Err(GridError::ColorOutOfRange {
                        row,
                        col,
                        color,
                        n_colors,
                    });
                }
                cells.push(color);
            }
        }

        Ok(Self {
            width,
            height,
            n_colors,
            cells,
        })
    }

    /// Fill every cell independently from `1..=n_colors`
    ///
    /// The result may contain runs; resolve them before play starts.
    pub fn init_random<S: ColorSource + ?Sized>(&mut self, source: &mut S) {
        let n_colors = self.n_colors;
        for cell in &mut self.cells {
            *cell = source.next_color(n_colors);
        }
    }

    /// Calculate flat index from (row, col) coordinates
    #[inline(always)]
    fn index(&self, row: usize, col: usize) -> Option<usize> {
        if row >= self.height || col >= self.width {
            return None;
        }
        Some(row * self.width + col)
    }

    #[inline]
    fn checked_index(&self, row: usize, col: usize) -> usize {
        match self.index(row, col) {
            Some(idx) => idx,
            None => panic!(
                "cell ({}, {}) out of bounds for {}x{} grid",
                row, col, self.height, self.width
            ),
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn n_colors(&self) -> ColorId {
        self.n_colors
    }

    pub fn in_bounds(&self, row: usize, col: usize) -> bool {
        self.index(row, col).is_some()
    }

    /// Get the color at (row, col)
    ///
    /// # Panics
    ///
    /// Panics if the cell is out of bounds.
    pub fn get(&self, row: usize, col: usize) -> ColorId {
        self.cells[self.checked_index(row, col)]
    }

    /// Set the color at (row, col)
    ///
    /// # Panics
    ///
    /// Panics if the cell is out of bounds.
    pub fn set(&mut self, row: usize, col: usize, color: ColorId) {
        let idx = self.checked_index(row, col);
        self.cells[idx] = color;
    }

    /// Exchange the colors of two cells
    pub fn swap(&mut self, a: (usize, usize), b: (usize, usize)) {
        let ia = self.checked_index(a.0, a.1);
        let ib = self.checked_index(b.0, b.1);
        self.cells.swap(ia, ib);
    }

    /// Whether any cell is waiting for refill
    pub fn has_empty(&self) -> bool {
        self.cells.contains(&EMPTY)
    }

    /// First empty cell in row-major order (topmost row, then leftmost column)
    pub fn first_empty(&self) -> Option<(usize, usize)> {
        self.cells
            .iter()
            .position(|&c| c == EMPTY)
            .map(|idx| (idx / self.width, idx % self.width))
    }

    /// Copy of one column, top to bottom
    pub fn column(&self, col: usize) -> Vec<ColorId> {
        (0..self.height).map(|row| self.get(row, col)).collect()
    }

    pub fn snapshot(&self) -> GridSnapshot {
        GridSnapshot {
            cells: self.cells.clone(),
        }
    }

    /// Put back the cells captured by [`Grid::snapshot`]
    ///
    /// # Panics
    ///
    /// Panics if the snapshot was taken from a grid of another size.
    pub fn restore(&mut self, snapshot: &GridSnapshot) {
        assert_eq!(
            snapshot.cells.len(),
            self.cells.len(),
            "snapshot size does not match grid"
        );
        self.cells.copy_from_slice(&snapshot.cells);
    }

    /// Get a reference to the internal cells array
    pub fn cells(&self) -> &[ColorId] {
        &self.cells
    }

    /// Convert to rows (top row first)
    pub fn to_rows(&self) -> Vec<Vec<ColorId>> {
        self.cells.chunks(self.width).map(<[ColorId]>::to_vec).collect()
    }
}
