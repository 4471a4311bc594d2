//! Error types for move parsing, board configuration and literal grids

/// Rejection of a move token before any cell is touched.
///
/// The `Display` text is the human-readable reason shown to the player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum IllegalMove {
    #[error("move must be three characters, got {0}")]
    WrongLength(usize),

    #[error("illegal column {0}")]
    IllegalColumn(char),

    #[error("column {0} out of bounds")]
    ColumnOutOfBounds(char),

    #[error("illegal row {0}")]
    IllegalRow(char),

    #[error("row {0} out of bounds")]
    RowOutOfBounds(char),

    #[error("can only swap adjacent cells")]
    NotAdjacent,
}

/// Errors from board configuration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("config validation error: {0}")]
    Validation(String),
}

/// Errors building a grid from literal rows.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GridError {
    #[error("grid must have at least one row and one column")]
    Empty,

    #[error("row {row} has {len} cells, expected {expected}")]
    Ragged {
        row: usize,
        len: usize,
        expected: usize,
    },

    #[error("cell ({row}, {col}) holds color {color}, expected 1..={n_colors}")]
    ColorOutOfRange {
        row: usize,
        col: usize,
        color: u8,
        n_colors: u8,
    },

    #[error(transparent)]
    Config(#[from] ConfigError),
}
