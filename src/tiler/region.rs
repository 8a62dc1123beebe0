use super::params::{AnchorMode, TilerParams};
use crate::diagnostics::{TilingStage, TimingBreakdown};
use crate::error::{GridError, Result};
use crate::lines::validate_dims;
use crate::types::{CellBox, GridCells, GridShape, Point};
use log::debug;
use std::time::Instant;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum TileState {
    AdvancingRow,
    Wrapping,
    Done,
}

/// Tiles an anchor box across an image with a constant per-axis pitch.
#[derive(Clone, Debug, Default)]
pub struct GridTiler {
    params: TilerParams,
}

impl GridTiler {
    pub fn new(params: TilerParams) -> Self {
        Self { params }
    }

    pub fn params(&self) -> &TilerParams {
        &self.params
    }

    /// Tile `anchor` across a `width x height` image.
    pub fn tile(&self, anchor: CellBox, width: usize, height: usize) -> Result<GridCells> {
        self.tile_with_report(anchor, width, height)
            .map(|(cells, _)| cells)
    }

    /// Same as [`tile`](Self::tile), also returning stage diagnostics.
    pub fn tile_with_report(
        &self,
        anchor: CellBox,
        width: usize,
        height: usize,
    ) -> Result<(GridCells, TilingStage)> {
        let t0 = Instant::now();
        validate_dims(width, height)?;
        validate_anchor(&anchor, width, height)?;
        let x_pitch = pitch(anchor.width(), self.params.x_offset, "x")?;
        let y_pitch = pitch(anchor.height(), self.params.y_offset, "y")?;

        let (x0, y0) = (anchor.top_left.x as i64, anchor.top_left.y as i64);
        let right_limit = width as f64;
        let bottom_limit = height as f64;
        let [anchor_cx, anchor_cy] = anchor.center();

        let mut boxes: Vec<CellBox> = Vec::new();
        let mut row_lengths: Vec<usize> = Vec::new();
        let mut row_len = 0usize;
        let (mut x, mut y) = (x0, y0);
        let mut state = TileState::AdvancingRow;
        loop {
            match state {
                TileState::AdvancingRow => {
                    let (dx, dy) = (x - x0, y - y0);
                    if anchor_cy + dy as f64 >= bottom_limit {
                        state = TileState::Done;
                    } else if anchor_cx + dx as f64 >= right_limit {
                        state = TileState::Wrapping;
                    } else {
                        // The center is inside the image, so dx and dy fit in
                        // i32; only the far corner can leave the range.
                        let cell = anchor.translated(dx as i32, dy as i32).ok_or_else(|| {
                            GridError::InvalidInput(format!(
                                "tile at ({x}, {y}) exceeds the pixel coordinate range"
                            ))
                        })?;
                        boxes.push(cell);
                        row_len += 1;
                        x += x_pitch;
                    }
                }
                TileState::Wrapping => {
                    row_lengths.push(row_len);
                    row_len = 0;
                    x = x0;
                    y += y_pitch;
                    state = TileState::AdvancingRow;
                }
                // The bottom test fails on the first tile of a row, so no
                // partial row is pending here.
                TileState::Done => break,
            }
        }

        let shape = uniform_shape(&row_lengths)?;
        if self.params.anchor_mode == AnchorMode::Include {
            boxes.insert(0, anchor);
        }
        debug!(
            "GridTiler::tile anchor={:?} pitch=({}, {}) rows={} cols={} boxes={}",
            anchor,
            x_pitch,
            y_pitch,
            shape.rows,
            shape.cols,
            boxes.len()
        );

        let stage = TilingStage {
            anchor,
            pitch: [x_pitch as i32, y_pitch as i32],
            row_lengths,
            shape,
            timing: TimingBreakdown::with_total(t0.elapsed().as_secs_f64() * 1000.0),
        };
        Ok((GridCells { boxes, shape }, stage))
    }
}

/// Tile `anchor` with the given pitch offsets.
///
/// Returns the boxes (row-major) and `[num_rows, row_length]`.
pub fn region_creator(
    anchor: CellBox,
    width: usize,
    height: usize,
    x_offset: f32,
    y_offset: f32,
    anchor_mode: AnchorMode,
) -> Result<GridCells> {
    GridTiler::new(TilerParams {
        x_offset,
        y_offset,
        anchor_mode,
    })
    .tile(anchor, width, height)
}

/// Corners must lie inside the image, then both extents must be positive.
pub(super) fn validate_anchor(anchor: &CellBox, width: usize, height: usize) -> Result<()> {
    let inside = |p: &Point| {
        p.x >= 0 && p.y >= 0 && p.x as i64 <= width as i64 && p.y as i64 <= height as i64
    };
    if !inside(&anchor.top_left) || !inside(&anchor.bottom_right) {
        return Err(GridError::InvalidInput(format!(
            "anchor {:?}-{:?} lies outside the {width}x{height} image",
            anchor.top_left, anchor.bottom_right
        )));
    }
    if anchor.width() <= 0 || anchor.height() <= 0 {
        return Err(GridError::InvalidAnchor {
            width: anchor.width(),
            height: anchor.height(),
        });
    }
    Ok(())
}

fn pitch(shift: i64, offset: f32, axis: &str) -> Result<i64> {
    if !offset.is_finite() {
        return Err(GridError::InvalidInput(format!(
            "{axis} offset must be finite, got {offset}"
        )));
    }
    let p = shift + offset.trunc() as i64;
    if p <= 0 {
        return Err(GridError::InvalidInput(format!(
            "{axis} pitch must be positive, got shift {shift} + offset {offset}"
        )));
    }
    if p > i32::MAX as i64 {
        return Err(GridError::InvalidInput(format!(
            "{axis} pitch {p} exceeds the pixel coordinate range"
        )));
    }
    Ok(p)
}

fn uniform_shape(row_lengths: &[usize]) -> Result<GridShape> {
    let Some(&cols) = row_lengths.first() else {
        return Ok(GridShape::default());
    };
    if let Some((row, &found)) = row_lengths
        .iter()
        .enumerate()
        .find(|(_, len)| **len != cols)
    {
        return Err(GridError::RaggedRows {
            row,
            expected: cols,
            found,
        });
    }
    if cols == 0 {
        return Ok(GridShape::default());
    }
    Ok(GridShape::new(row_lengths.len(), cols))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn anchor(x0: i32, y0: i32, x1: i32, y1: i32) -> CellBox {
        CellBox::new(Point::new(x0, y0), Point::new(x1, y1))
    }

    #[test]
    fn ten_by_ten_on_hundred_pixels() {
        let cells =
            region_creator(anchor(0, 0, 10, 10), 100, 100, 0.0, 0.0, AnchorMode::Exclude).unwrap();
        assert_eq!(cells.shape, GridShape::new(10, 10));
        assert_eq!(cells.boxes.len(), 100);
        assert_eq!(cells.boxes[0], anchor(0, 0, 10, 10));
        assert_eq!(cells.boxes[9], anchor(90, 0, 100, 10));
        assert_eq!(cells.boxes[10], anchor(0, 10, 10, 20));
        assert_eq!(cells.boxes[99], anchor(90, 90, 100, 100));
    }

    #[test]
    fn center_test_is_strict() {
        // Columns start at 5, 15, ..., 85; the box at 95 has its center at 100.
        let cells =
            region_creator(anchor(5, 5, 15, 15), 100, 100, 0.0, 0.0, AnchorMode::Exclude).unwrap();
        assert_eq!(cells.shape, GridShape::new(9, 9));
        assert_eq!(cells.boxes.last(), Some(&anchor(85, 85, 95, 95)));

        // A box may extend past the border as long as its center is inside.
        let cells =
            region_creator(anchor(0, 0, 10, 10), 96, 100, 0.0, 0.0, AnchorMode::Exclude).unwrap();
        assert_eq!(cells.shape.cols, 10);
        assert_eq!(cells.boxes[9], anchor(90, 0, 100, 10));
    }

    #[test]
    fn offsets_change_pitch_and_truncate() {
        let cells =
            region_creator(anchor(0, 0, 10, 10), 100, 60, 5.9, -2.5, AnchorMode::Exclude).unwrap();
        // x pitch 15: 0, 15, ..., 90 (center 95 < 100), 105 stops.
        // y pitch 8: 0, 8, ..., 48 (center 53 < 60), 56 -> 61 stops.
        assert_eq!(cells.shape, GridShape::new(7, 7));
        assert_eq!(cells.boxes[1], anchor(15, 0, 25, 10));
        assert_eq!(cells.boxes[7], anchor(0, 8, 10, 18));
    }

    #[test]
    fn include_mode_prepends_anchor() {
        let a = anchor(0, 0, 50, 50);
        let cells = region_creator(a, 100, 100, 0.0, 0.0, AnchorMode::Include).unwrap();
        assert_eq!(cells.shape, GridShape::new(2, 2));
        assert_eq!(cells.boxes.len(), 5);
        assert_eq!(cells.boxes[0], a);
        assert_eq!(cells.boxes[1], a);
    }

    #[test]
    fn degenerate_anchor_is_rejected() {
        for bad in [anchor(10, 10, 10, 20), anchor(10, 10, 20, 10), anchor(20, 20, 10, 10)] {
            let err = region_creator(bad, 100, 100, 0.0, 0.0, AnchorMode::Exclude).unwrap_err();
            assert!(matches!(err, GridError::InvalidAnchor { .. }), "{err:?}");
        }
    }

    #[test]
    fn non_positive_pitch_is_rejected() {
        let err = region_creator(anchor(0, 0, 10, 10), 100, 100, -10.0, 0.0, AnchorMode::Exclude)
            .unwrap_err();
        assert!(matches!(err, GridError::InvalidInput(_)));
        let err = region_creator(anchor(0, 0, 10, 10), 100, 100, 0.0, f32::NAN, AnchorMode::Exclude)
            .unwrap_err();
        assert!(matches!(err, GridError::InvalidInput(_)));
    }

    #[test]
    fn anchor_outside_image_is_rejected() {
        let err = region_creator(
            anchor(0, 0, 10, 1_000_000),
            100,
            100,
            0.0,
            0.0,
            AnchorMode::Exclude,
        )
        .unwrap_err();
        assert!(matches!(err, GridError::InvalidInput(_)));
    }

    #[test]
    fn anchors_near_the_border_still_tile() {
        let cells =
            region_creator(anchor(0, 95, 10, 100), 100, 100, 0.0, 0.0, AnchorMode::Exclude)
                .unwrap();
        // Center 97.5 < 100, so one row of 10 cells fits.
        assert_eq!(cells.shape, GridShape::new(1, 10));

        let cells =
            region_creator(anchor(92, 0, 100, 8), 100, 100, 0.0, 0.0, AnchorMode::Exclude).unwrap();
        // Center 96 < 100 keeps one column per row.
        assert_eq!(cells.shape, GridShape::new(12, 1));

        let cells =
            region_creator(anchor(96, 96, 100, 100), 100, 100, 0.0, 0.0, AnchorMode::Exclude)
                .unwrap();
        assert_eq!(cells.shape, GridShape::new(1, 1));
    }

    #[test]
    fn report_records_row_lengths() {
        let tiler = GridTiler::new(TilerParams::default().with_offsets(2.0, 2.0));
        assert_eq!(tiler.params().anchor_mode, AnchorMode::Exclude);
        let (cells, stage) = tiler
            .tile_with_report(anchor(0, 0, 20, 10), 100, 50)
            .unwrap();
        // x pitch 22: 0, 22, 44, 66, 88 (center 98), 110 stops.
        // y pitch 12: 0, 12, 24, 36 (center 41), 48 -> 53 stops.
        assert_eq!(stage.row_lengths, vec![5, 5, 5, 5]);
        assert_eq!(stage.pitch, [22, 12]);
        assert_eq!(cells.shape, GridShape::new(4, 5));
    }

    #[test]
    fn extreme_anchor_coordinates_are_rejected() {
        for bad in [
            anchor(i32::MIN, 0, i32::MAX, 10),
            anchor(0, i32::MIN, 10, i32::MAX),
            anchor(i32::MAX, 0, i32::MIN, 10),
        ] {
            let err = region_creator(bad, 100, 100, 0.0, 0.0, AnchorMode::Exclude).unwrap_err();
            assert!(matches!(err, GridError::InvalidInput(_)), "{err:?}");
        }
    }

    #[test]
    fn wide_image_tiles_without_overflow() {
        let width = i32::MAX as usize;
        let cells = region_creator(
            anchor(0, 0, i32::MAX, 10),
            width,
            20,
            0.0,
            0.0,
            AnchorMode::Exclude,
        )
        .unwrap();
        assert_eq!(cells.shape, GridShape::new(2, 1));
        assert_eq!(cells.boxes[1], anchor(0, 10, i32::MAX, 20));
    }

    #[test]
    fn uneven_rows_are_reported() {
        assert_eq!(
            uniform_shape(&[3, 3, 2]),
            Err(GridError::RaggedRows {
                row: 2,
                expected: 3,
                found: 2
            })
        );
        assert_eq!(uniform_shape(&[0, 0]), Ok(GridShape::default()));
        assert_eq!(uniform_shape(&[4, 4, 4]), Ok(GridShape::new(3, 4)));
    }
}
