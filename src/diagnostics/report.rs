use super::{LineStage, TilingStage};
use crate::types::GridCells;
use serde::Serialize;

/// Input image description recorded alongside a run.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InputDescriptor {
    pub width: usize,
    pub height: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
}

/// Stage that produced the cells.
#[derive(Clone, Debug, Serialize)]
#[serde(tag = "mode", rename_all = "camelCase")]
pub enum StageTrace {
    Lines(LineStage),
    Tile(TilingStage),
}

/// Cells together with the trace of the stage that produced them.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GridReport {
    pub input: InputDescriptor,
    pub cells: GridCells,
    pub trace: StageTrace,
}
