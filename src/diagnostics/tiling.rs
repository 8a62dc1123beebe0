use super::TimingBreakdown;
use crate::types::{CellBox, GridShape};
use serde::Serialize;

/// Summary of one tiling run.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TilingStage {
    pub anchor: CellBox,
    pub pitch: [i32; 2],
    /// Cells recorded per completed row.
    pub row_lengths: Vec<usize>,
    pub shape: GridShape,
    pub timing: TimingBreakdown,
}
