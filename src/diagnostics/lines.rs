use super::TimingBreakdown;
use crate::types::GridShape;
use serde::Serialize;

/// Summary of one line-aggregation run.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LineStage {
    pub segments_total: usize,
    pub horizontal_segments: usize,
    pub vertical_segments: usize,
    pub discarded_segments: usize,
    /// Deduplicated horizontal line coordinates (y).
    pub row_lines: Vec<i32>,
    /// Deduplicated vertical line coordinates (x).
    pub col_lines: Vec<i32>,
    pub shape: GridShape,
    pub timing: TimingBreakdown,
}
