use serde::{Deserialize, Serialize};

/// Raw line segment as reported by an external line detector.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineSegment {
    pub p0: [i32; 2],
    pub p1: [i32; 2],
}

/// Axis a segment was assigned to during classification.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    Horizontal,
    Vertical,
}

impl LineSegment {
    pub const fn new(x1: i32, y1: i32, x2: i32, y2: i32) -> Self {
        Self {
            p0: [x1, y1],
            p1: [x2, y2],
        }
    }

    /// Absolute x extent, widened to `i64`.
    pub fn dx(&self) -> i64 {
        (self.p1[0] as i64 - self.p0[0] as i64).abs()
    }

    pub fn dy(&self) -> i64 {
        (self.p1[1] as i64 - self.p0[1] as i64).abs()
    }

    /// Floor of the midpoint x coordinate.
    pub fn mid_x(&self) -> i32 {
        floor_mid(self.p0[0], self.p1[0])
    }

    /// Floor of the midpoint y coordinate.
    pub fn mid_y(&self) -> i32 {
        floor_mid(self.p0[1], self.p1[1])
    }

    /// Classify by near axis alignment relative to the image size.
    ///
    /// The vertical test runs first, so a tiny segment passing both tests is
    /// vertical. Segments passing neither return `None`.
    pub fn classify(&self, width: usize, height: usize, tolerance: f32) -> Option<Orientation> {
        if (self.dx() as f32) < tolerance * width as f32 {
            Some(Orientation::Vertical)
        } else if (self.dy() as f32) < tolerance * height as f32 {
            Some(Orientation::Horizontal)
        } else {
            None
        }
    }

    /// Representative scalar of a classified segment: midpoint x for vertical
    /// lines, midpoint y for horizontal ones.
    pub fn representative(&self, orientation: Orientation) -> i32 {
        match orientation {
            Orientation::Vertical => self.mid_x(),
            Orientation::Horizontal => self.mid_y(),
        }
    }

    pub(crate) fn within(&self, width: usize, height: usize) -> bool {
        let inside = |p: &[i32; 2]| {
            p[0] >= 0 && p[1] >= 0 && p[0] as i64 <= width as i64 && p[1] as i64 <= height as i64
        };
        inside(&self.p0) && inside(&self.p1)
    }
}

// The floored mean of two i32 values lies between them, so it fits in i32.
fn floor_mid(a: i32, b: i32) -> i32 {
    (a as i64 + b as i64).div_euclid(2) as i32
}

impl From<[i32; 4]> for LineSegment {
    fn from(v: [i32; 4]) -> Self {
        Self::new(v[0], v[1], v[2], v[3])
    }
}

impl From<(i32, i32, i32, i32)> for LineSegment {
    fn from((x1, y1, x2, y2): (i32, i32, i32, i32)) -> Self {
        Self::new(x1, y1, x2, y2)
    }
}
