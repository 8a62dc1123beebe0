use serde::{Deserialize, Serialize};

/// Whether the anchor box itself leads the output.
///
/// The first tiled box always coincides with the anchor. `Exclude` returns
/// only the tiled boxes; `Include` prepends the anchor as an extra leading
/// box, so the output holds `rows * cols + 1` boxes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AnchorMode {
    #[default]
    Exclude,
    Include,
}

/// Tiling parameters.
///
/// Offsets are added to the anchor size to obtain the pitch between adjacent
/// boxes. They are truncated toward zero to whole pixels before use.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TilerParams {
    pub x_offset: f32,
    pub y_offset: f32,
    pub anchor_mode: AnchorMode,
}

impl TilerParams {
    pub fn with_offsets(mut self, x_offset: f32, y_offset: f32) -> Self {
        self.x_offset = x_offset;
        self.y_offset = y_offset;
        self
    }

    pub fn with_anchor_mode(mut self, mode: AnchorMode) -> Self {
        self.anchor_mode = mode;
        self
    }
}
