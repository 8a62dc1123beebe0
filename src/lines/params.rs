use crate::error::{GridError, Result};
use serde::{Deserialize, Serialize};

/// Knobs for line aggregation, both relative to the image size.
///
/// - `relative_dedup_distance`: two horizontal (vertical) coordinates closer
///   than this fraction of the image height (width) are the same grid line.
/// - `axis_tolerance_fraction`: a segment is vertical when its x extent is
///   below this fraction of the width, horizontal when its y extent is below
///   this fraction of the height.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LineAggregatorParams {
    pub relative_dedup_distance: f32,
    pub axis_tolerance_fraction: f32,
}

impl Default for LineAggregatorParams {
    fn default() -> Self {
        Self {
            relative_dedup_distance: 0.05,
            axis_tolerance_fraction: 0.05,
        }
    }
}

impl LineAggregatorParams {
    pub fn validate(&self) -> Result<()> {
        let d = self.relative_dedup_distance;
        if !d.is_finite() || d < 0.0 {
            return Err(GridError::InvalidInput(format!(
                "relative_dedup_distance must be finite and >= 0, got {d}"
            )));
        }
        let t = self.axis_tolerance_fraction;
        if !t.is_finite() || t <= 0.0 {
            return Err(GridError::InvalidInput(format!(
                "axis_tolerance_fraction must be finite and > 0, got {t}"
            )));
        }
        Ok(())
    }

    /// Dedup threshold in pixels for horizontal lines (y coordinates).
    pub fn row_threshold(&self, height: usize) -> f32 {
        self.relative_dedup_distance * height as f32
    }

    /// Dedup threshold in pixels for vertical lines (x coordinates).
    pub fn col_threshold(&self, width: usize) -> f32 {
        self.relative_dedup_distance * width as f32
    }
}
