use thiserror::Error;

/// Errors raised by the grid geometry stages.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GridError {
    #[error("invalid anchor box: width={width} height={height} (both must be positive)")]
    InvalidAnchor { width: i64, height: i64 },

    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("lattice has no intersection at row {row}, col {col}")]
    LatticeHole { row: usize, col: usize },

    #[error("ragged grid: row {row} has {found} cells, expected {expected}")]
    RaggedRows {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("cannot reshape {len} values into {rows}x{cols}")]
    ShapeMismatch { len: usize, rows: usize, cols: usize },
}

pub type Result<T> = std::result::Result<T, GridError>;
