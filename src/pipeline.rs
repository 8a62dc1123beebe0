//! Glue between the external line detector and line aggregation.
//!
//! Line detection (edge map plus probabilistic Hough or similar) lives outside
//! this crate behind [`LineSource`]. Every image is independent, so batches
//! are spread over the rayon pool.

use crate::error::Result;
use crate::image::{ImageU8, ImageView};
use crate::lines::{LineAggregator, LineSegment};
use crate::types::GridCells;
use log::debug;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

/// External detector returning raw line segments in pixel coordinates.
pub trait LineSource {
    fn detect_lines(&self, image: &ImageU8<'_>) -> Result<Vec<LineSegment>>;
}

/// Segments of one image together with its size.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct LineInput {
    pub width: usize,
    pub height: usize,
    pub segments: Vec<LineSegment>,
}

/// Run `source` on `image`, then aggregate the segments into cells.
pub fn detect_grid_from_source<S: LineSource + ?Sized>(
    source: &S,
    image: &ImageU8<'_>,
    aggregator: &LineAggregator,
) -> Result<GridCells> {
    let segments = source.detect_lines(image)?;
    debug!(
        "line source returned {} segments for {}x{} image",
        segments.len(),
        image.width(),
        image.height()
    );
    aggregator.detect_grid(&segments, image.width(), image.height())
}

/// Aggregate several images in parallel; results keep the input order.
pub fn detect_grid_batch(
    inputs: &[LineInput],
    aggregator: &LineAggregator,
) -> Vec<Result<GridCells>> {
    inputs
        .par_iter()
        .map(|input| aggregator.detect_grid(&input.segments, input.width, input.height))
        .collect()
}
