use super::dedup::dedupe;
use super::lattice::Lattice;
use super::params::LineAggregatorParams;
use super::segment::{LineSegment, Orientation};
use crate::diagnostics::{LineStage, TimingBreakdown};
use crate::error::{GridError, Result};
use crate::types::GridCells;
use log::{debug, warn};
use std::time::Instant;

/// Representative coordinates of the classified segments, before dedup.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ClassifiedLines {
    /// Midpoint y of each horizontal segment.
    pub horizontal: Vec<i32>,
    /// Midpoint x of each vertical segment.
    pub vertical: Vec<i32>,
    pub discarded: usize,
}

/// Turns raw detector segments into a lattice of cell boxes.
#[derive(Clone, Debug, Default)]
pub struct LineAggregator {
    params: LineAggregatorParams,
}

impl LineAggregator {
    pub fn new(params: LineAggregatorParams) -> Self {
        Self { params }
    }

    pub fn params(&self) -> &LineAggregatorParams {
        &self.params
    }

    /// Split segments into horizontal and vertical representatives.
    pub fn classify(
        &self,
        segments: &[LineSegment],
        width: usize,
        height: usize,
    ) -> ClassifiedLines {
        let tol = self.params.axis_tolerance_fraction;
        let mut out = ClassifiedLines::default();
        for seg in segments {
            match seg.classify(width, height, tol) {
                Some(o @ Orientation::Vertical) => out.vertical.push(seg.representative(o)),
                Some(o @ Orientation::Horizontal) => out.horizontal.push(seg.representative(o)),
                None => out.discarded += 1,
            }
        }
        out
    }

    /// Deduplicate the classified coordinates and build the lattice.
    pub fn lattice(&self, classified: &ClassifiedLines, width: usize, height: usize) -> Lattice {
        let rows = dedupe(&classified.horizontal, self.params.row_threshold(height));
        let cols = dedupe(&classified.vertical, self.params.col_threshold(width));
        Lattice::build(rows, cols, width, height)
    }

    /// Detect the cell grid of a `width x height` image from raw segments.
    pub fn detect_grid(
        &self,
        segments: &[LineSegment],
        width: usize,
        height: usize,
    ) -> Result<GridCells> {
        self.detect_with_report(segments, width, height)
            .map(|(cells, _)| cells)
    }

    /// Same as [`detect_grid`](Self::detect_grid), also returning stage diagnostics.
    pub fn detect_with_report(
        &self,
        segments: &[LineSegment],
        width: usize,
        height: usize,
    ) -> Result<(GridCells, LineStage)> {
        let t0 = Instant::now();
        self.params.validate()?;
        validate_dims(width, height)?;
        if let Some(bad) = segments.iter().find(|s| !s.within(width, height)) {
            return Err(GridError::InvalidInput(format!(
                "segment {:?}-{:?} lies outside the {width}x{height} image",
                bad.p0, bad.p1
            )));
        }
        let mut timing = TimingBreakdown::default();

        let t_classify = Instant::now();
        let classified = self.classify(segments, width, height);
        timing.push("classify", elapsed_ms(t_classify));
        if classified.discarded > 0 && classified.discarded == segments.len() {
            warn!(
                "LineAggregator: all {} segments were off-axis and discarded",
                segments.len()
            );
        }

        let t_lattice = Instant::now();
        let lattice = self.lattice(&classified, width, height);
        timing.push("lattice", elapsed_ms(t_lattice));

        let t_cells = Instant::now();
        let boxes = lattice.cell_boxes()?;
        timing.push("cells", elapsed_ms(t_cells));

        let shape = lattice.shape();
        debug!(
            "LineAggregator::detect_grid segments={} h={}->{} v={}->{} discarded={} shape={}x{}",
            segments.len(),
            classified.horizontal.len(),
            lattice.num_rows(),
            classified.vertical.len(),
            lattice.num_cols(),
            classified.discarded,
            shape.rows,
            shape.cols
        );

        timing.total_ms = elapsed_ms(t0);
        let stage = LineStage {
            segments_total: segments.len(),
            horizontal_segments: classified.horizontal.len(),
            vertical_segments: classified.vertical.len(),
            discarded_segments: classified.discarded,
            row_lines: lattice.rows.clone(),
            col_lines: lattice.cols.clone(),
            shape,
            timing,
        };
        Ok((GridCells { boxes, shape }, stage))
    }
}

/// Detect the cell grid using explicit relative thresholds.
///
/// Returns the row-major boxes and `[rows, cols]` cell counts.
pub fn detect_grid(
    segments: &[LineSegment],
    width: usize,
    height: usize,
    relative_dedup_distance: f32,
    axis_tolerance_fraction: f32,
) -> Result<GridCells> {
    LineAggregator::new(LineAggregatorParams {
        relative_dedup_distance,
        axis_tolerance_fraction,
    })
    .detect_grid(segments, width, height)
}

pub(crate) fn validate_dims(width: usize, height: usize) -> Result<()> {
    if width == 0 || height == 0 {
        return Err(GridError::InvalidInput(format!(
            "image dimensions must be positive, got {width}x{height}"
        )));
    }
    if width > i32::MAX as usize || height > i32::MAX as usize {
        return Err(GridError::InvalidInput(format!(
            "image dimensions {width}x{height} exceed the pixel coordinate range"
        )));
    }
    Ok(())
}

#[inline]
fn elapsed_ms(t: Instant) -> f64 {
    t.elapsed().as_secs_f64() * 1000.0
}
