use serde::{Deserialize, Serialize};

/// Integer pixel coordinate.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl From<(i32, i32)> for Point {
    fn from((x, y): (i32, i32)) -> Self {
        Self { x, y }
    }
}

/// Cell region given by two opposite corners.
///
/// Boxes produced by the tiler are axis-aligned with `top_left` strictly above
/// and left of `bottom_right`. Boxes produced from a detected lattice take
/// their corners from two different lattice points and are only axis-aligned
/// when the detected lines are.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CellBox {
    pub top_left: Point,
    pub bottom_right: Point,
}

impl CellBox {
    pub const fn new(top_left: Point, bottom_right: Point) -> Self {
        Self {
            top_left,
            bottom_right,
        }
    }

    /// Signed extent along x (`bottom_right.x - top_left.x`), widened so any
    /// pair of corners is representable.
    pub fn width(&self) -> i64 {
        self.bottom_right.x as i64 - self.top_left.x as i64
    }

    /// Signed extent along y (`bottom_right.y - top_left.y`).
    pub fn height(&self) -> i64 {
        self.bottom_right.y as i64 - self.top_left.y as i64
    }

    pub fn center(&self) -> [f64; 2] {
        [
            0.5 * (self.top_left.x as f64 + self.bottom_right.x as f64),
            0.5 * (self.top_left.y as f64 + self.bottom_right.y as f64),
        ]
    }

    /// Same region with corners reordered so that width and height are non-negative.
    pub fn normalized(&self) -> Self {
        Self {
            top_left: Point::new(
                self.top_left.x.min(self.bottom_right.x),
                self.top_left.y.min(self.bottom_right.y),
            ),
            bottom_right: Point::new(
                self.top_left.x.max(self.bottom_right.x),
                self.top_left.y.max(self.bottom_right.y),
            ),
        }
    }

    /// Shifted copy; `None` when a corner leaves the `i32` range.
    pub fn translated(&self, dx: i32, dy: i32) -> Option<Self> {
        Some(Self {
            top_left: Point::new(
                self.top_left.x.checked_add(dx)?,
                self.top_left.y.checked_add(dy)?,
            ),
            bottom_right: Point::new(
                self.bottom_right.x.checked_add(dx)?,
                self.bottom_right.y.checked_add(dy)?,
            ),
        })
    }
}

/// Number of cell rows and columns of a grid.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridShape {
    pub rows: usize,
    pub cols: usize,
}

impl GridShape {
    pub const fn new(rows: usize, cols: usize) -> Self {
        Self { rows, cols }
    }

    pub fn cell_count(&self) -> usize {
        self.rows * self.cols
    }
}

/// Ordered cell boxes (row-major) together with the grid shape.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridCells {
    pub boxes: Vec<CellBox>,
    pub shape: GridShape,
}

impl GridCells {
    pub fn is_empty(&self) -> bool {
        self.boxes.is_empty()
    }

    pub fn len(&self) -> usize {
        self.boxes.len()
    }
}
