//! Intersection lattice of deduplicated horizontal and vertical lines.
//!
//! Every horizontal representative `y` is extended to the full-width line
//! `(0, y)-(width, y)` and every vertical representative `x` to the
//! full-height line `(x, 0)-(x, height)`. The lattice stores the intersection
//! of each pair, row-major with rows following ascending `y` and columns
//! ascending `x`. Parallel pairs leave a hole (`None`).
//!
//! Cells are built with a diagonal pairing rule: the cell at `(i, j-1)` spans
//! from lattice point `(i, j-1)` to lattice point `(i+1, j)`. On an orthogonal
//! lattice this is the ordinary axis-aligned cell; otherwise the two corners
//! come from different rows and columns and the box is skewed accordingly.

use super::intersect::intersect;
use crate::error::{GridError, Result};
use crate::types::{CellBox, GridShape, Point};
use serde::Serialize;

#[derive(Clone, Debug, Serialize)]
pub struct Lattice {
    /// Horizontal line coordinates (ascending y).
    pub rows: Vec<i32>,
    /// Vertical line coordinates (ascending x).
    pub cols: Vec<i32>,
    points: Vec<Option<Point>>,
}

impl Lattice {
    /// Cross every horizontal line with every vertical line.
    ///
    /// `rows` and `cols` are expected in ascending order, as returned by
    /// [`dedupe`](super::dedupe).
    pub fn build(rows: Vec<i32>, cols: Vec<i32>, width: usize, height: usize) -> Self {
        let w = i32::try_from(width).unwrap_or(i32::MAX);
        let h = i32::try_from(height).unwrap_or(i32::MAX);
        let mut points = Vec::with_capacity(rows.len() * cols.len());
        for &y in &rows {
            let (o1, p1) = (Point::new(0, y), Point::new(w, y));
            for &x in &cols {
                let (o2, p2) = (Point::new(x, 0), Point::new(x, h));
                points.push(intersect(o1, p1, o2, p2));
            }
        }
        Self { rows, cols, points }
    }

    pub fn num_rows(&self) -> usize {
        self.rows.len()
    }

    pub fn num_cols(&self) -> usize {
        self.cols.len()
    }

    /// Intersection at `(row, col)`; `None` when out of range or a hole.
    pub fn point(&self, row: usize, col: usize) -> Option<Point> {
        if row >= self.rows.len() || col >= self.cols.len() {
            return None;
        }
        self.points[row * self.cols.len() + col]
    }

    pub fn holes(&self) -> usize {
        self.points.iter().filter(|p| p.is_none()).count()
    }

    /// Cell counts per axis: one less than the lattice size, zero when an
    /// axis has fewer than two lines.
    pub fn shape(&self) -> GridShape {
        GridShape::new(
            self.rows.len().saturating_sub(1),
            self.cols.len().saturating_sub(1),
        )
    }

    /// Cell boxes in row-major order using the diagonal pairing rule.
    ///
    /// Fails with [`GridError::LatticeHole`] on the first missing corner.
    pub fn cell_boxes(&self) -> Result<Vec<CellBox>> {
        let shape = self.shape();
        let mut boxes = Vec::with_capacity(shape.cell_count());
        for i in 0..shape.rows {
            for j in 1..self.cols.len() {
                let a = self
                    .point(i, j - 1)
                    .ok_or(GridError::LatticeHole { row: i, col: j - 1 })?;
                let b = self
                    .point(i + 1, j)
                    .ok_or(GridError::LatticeHole { row: i + 1, col: j })?;
                boxes.push(CellBox::new(a, b));
            }
        }
        Ok(boxes)
    }
}
