#![doc = include_str!("../README.md")]

// Core geometry
pub mod error;
pub mod lines;
pub mod tiler;
pub mod types;

// Supporting stages and tooling
pub mod config;
pub mod diagnostics;
pub mod image;
pub mod matrix;
pub mod pipeline;
pub mod recognize;

// --- High-level re-exports -------------------------------------------------

pub use crate::error::{GridError, Result};
pub use crate::lines::{
    dedupe, detect_grid, intersect, LineAggregator, LineAggregatorParams, LineSegment,
};
pub use crate::matrix::to_matrix;
pub use crate::tiler::{region_creator, AnchorMode, GridTiler, PitchSession, TilerParams};
pub use crate::types::{CellBox, GridCells, GridShape, Point};

// --- Prelude ---------------------------------------------------------------

/// Small prelude for quick experiments.
///
/// ```
/// use grid_cells::prelude::*;
///
/// let anchor = CellBox::new(Point::new(0, 0), Point::new(10, 10));
/// let cells = GridTiler::default().tile(anchor, 100, 100).unwrap();
/// assert_eq!(cells.shape, GridShape::new(10, 10));
/// ```
pub mod prelude {
    pub use crate::lines::{LineAggregator, LineAggregatorParams, LineSegment};
    pub use crate::tiler::{AnchorMode, GridTiler, PitchSession, TilerParams};
    pub use crate::types::{CellBox, GridCells, GridShape, Point};
}
