use crate::image::RegionOptions;
use crate::lines::{LineAggregatorParams, LineSegment};
use crate::tiler::{PointerEvent, RectangleSelection, TilerParams};
use crate::types::{CellBox, Point};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Configuration of one `grid_cells_demo` run.
#[derive(Debug, Deserialize)]
pub struct RunConfig {
    /// Optional source image; supplies the dimensions and enables region export.
    #[serde(default)]
    pub input: Option<PathBuf>,
    /// Explicit image size, used when no `input` is given.
    #[serde(default)]
    pub width: Option<usize>,
    #[serde(default)]
    pub height: Option<usize>,
    pub stage: StageConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

#[derive(Debug, Deserialize)]
#[serde(tag = "mode", rename_all = "lowercase")]
pub enum StageConfig {
    Lines(LinesConfig),
    Tile(TileConfig),
}

#[derive(Debug, Deserialize)]
pub struct LinesConfig {
    /// Raw detector output as `[x1, y1, x2, y2]`.
    pub segments: Vec<[i32; 4]>,
    #[serde(default)]
    pub params: LineAggregatorParams,
}

impl LinesConfig {
    pub fn line_segments(&self) -> Vec<LineSegment> {
        self.segments.iter().copied().map(LineSegment::from).collect()
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct TileConfig {
    /// Anchor corners `[[x0, y0], [x1, y1]]`.
    pub anchor: Option<[[i32; 2]; 2]>,
    /// Recorded pointer events; used when `anchor` is absent.
    pub events: Vec<PointerEvent>,
    /// Offset proposals `[x, y]` replayed through a pitch session.
    pub proposals: Vec<[f32; 2]>,
    /// Offsets and anchor mode used when no proposals are given.
    pub params: TilerParams,
}

impl TileConfig {
    /// Anchor from explicit corners, or from replaying the recorded drag.
    pub fn resolve_anchor(&self) -> Result<CellBox, String> {
        if let Some([a, b]) = self.anchor {
            return Ok(CellBox::new(Point::new(a[0], a[1]), Point::new(b[0], b[1])));
        }
        let mut selection = RectangleSelection::new();
        for event in &self.events {
            selection.handle(*event);
        }
        selection
            .anchor()
            .ok_or_else(|| "Tile config needs an anchor or a completed drag in events".to_string())
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub json_out: Option<PathBuf>,
    /// Directory receiving one PNG per cell (requires `input`).
    pub regions_dir: Option<PathBuf>,
    pub regions: RegionOptions,
}

impl RunConfig {
    /// Image size from the explicit fields, falling back to the input file.
    pub fn dimensions(&self) -> Result<(usize, usize), String> {
        match (self.width, self.height, &self.input) {
            (Some(w), Some(h), _) => Ok((w, h)),
            (_, _, Some(path)) => crate::image::io::read_image_dimensions(path),
            _ => Err("Config needs either width/height or an input image".to_string()),
        }
    }
}

pub fn parse_config(contents: &str) -> Result<RunConfig, String> {
    serde_json::from_str(contents).map_err(|e| format!("Failed to parse config: {e}"))
}

pub fn load_config(path: &Path) -> Result<RunConfig, String> {
    let contents = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read config {}: {e}", path.display()))?;
    serde_json::from_str(&contents)
        .map_err(|e| format!("Failed to parse config {}: {e}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tiler::AnchorMode;

    #[test]
    fn parses_lines_mode() {
        let cfg = parse_config(
            r#"{
                "width": 200, "height": 100,
                "stage": {
                    "mode": "lines",
                    "segments": [[0, 10, 199, 10], [50, 0, 50, 99]],
                    "params": { "relative_dedup_distance": 0.02 }
                },
                "output": { "json_out": "out/report.json" }
            }"#,
        )
        .unwrap();
        assert_eq!(cfg.dimensions().unwrap(), (200, 100));
        let StageConfig::Lines(lines) = &cfg.stage else {
            panic!("expected lines mode");
        };
        assert_eq!(lines.line_segments()[1], LineSegment::new(50, 0, 50, 99));
        assert_eq!(lines.params.relative_dedup_distance, 0.02);
        assert_eq!(lines.params.axis_tolerance_fraction, 0.05);
        assert_eq!(cfg.output.regions.upscale, 6);
    }

    #[test]
    fn tile_anchor_from_events() {
        let cfg = parse_config(
            r#"{
                "width": 100, "height": 100,
                "stage": {
                    "mode": "tile",
                    "events": [
                        { "kind": "press", "x": 30, "y": 40 },
                        { "kind": "move", "x": 20, "y": 30 },
                        { "kind": "release", "x": 10, "y": 20 }
                    ],
                    "proposals": [[0, 0], [2, 1], [0, 0]],
                    "params": { "anchor_mode": "include" }
                }
            }"#,
        )
        .unwrap();
        let StageConfig::Tile(tile) = &cfg.stage else {
            panic!("expected tile mode");
        };
        assert_eq!(
            tile.resolve_anchor().unwrap(),
            CellBox::new(Point::new(10, 20), Point::new(30, 40))
        );
        assert_eq!(tile.proposals.len(), 3);
        assert_eq!(tile.params.anchor_mode, AnchorMode::Include);
    }

    #[test]
    fn missing_dimensions_are_reported() {
        let cfg = parse_config(r#"{ "stage": { "mode": "tile", "anchor": [[0, 0], [5, 5]] } }"#)
            .unwrap();
        assert!(cfg.dimensions().is_err());
    }
}
