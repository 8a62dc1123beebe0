mod common;

use common::init_logging;
use common::synthetic::blocks_u8;
use grid_cells::image::{extract_regions, GrayImageU8, RegionOptions};
use grid_cells::recognize::recognize_cells;
use grid_cells::tiler::{PitchSession, PointerEvent, RectangleSelection, SessionStep};
use grid_cells::{region_creator, to_matrix, AnchorMode, CellBox, GridError, GridShape, Point};

#[test]
fn square_anchor_tiles_the_whole_image() {
    init_logging();
    let anchor = CellBox::new(Point::new(0, 0), Point::new(10, 10));
    let cells = region_creator(anchor, 100, 100, 0.0, 0.0, AnchorMode::Exclude).unwrap();

    assert_eq!(cells.shape, GridShape::new(10, 10));
    assert_eq!(cells.boxes.len(), 100);
    assert_eq!(cells.boxes[0], anchor);
    assert_eq!(
        cells.boxes[99],
        CellBox::new(Point::new(90, 90), Point::new(100, 100))
    );
}

#[test]
fn drag_then_pitch_session_then_recognition() {
    init_logging();
    let (width, height, cell) = (60usize, 40usize, 20usize);
    let buffer = blocks_u8(width, height, cell, |r, c| (20 * (r * 3 + c) + 10) as u8);
    let image = GrayImageU8::new(width, height, buffer).unwrap();

    let mut selection = RectangleSelection::new();
    for event in [
        PointerEvent::Press { x: 20, y: 20 },
        PointerEvent::Move { x: 5, y: 5 },
        PointerEvent::Release { x: 0, y: 0 },
    ] {
        selection.handle(event);
    }
    let anchor = selection.anchor().unwrap();
    assert_eq!(anchor, CellBox::new(Point::new(0, 0), Point::new(20, 20)));

    let mut session = PitchSession::new(anchor, width, height, AnchorMode::Exclude).unwrap();
    let SessionStep::Preview(preview) = session.propose(0.0, 0.0).unwrap() else {
        panic!("first proposal must preview");
    };
    assert_eq!(preview.shape, GridShape::new(2, 3));
    let SessionStep::Finished(cells) = session.propose(0.4, -0.7).unwrap() else {
        panic!("zero offsets after a preview must finish");
    };
    assert_eq!(cells, preview);

    let regions =
        extract_regions(&image.as_view(), &cells.boxes, RegionOptions { upscale: 2 }).unwrap();
    assert_eq!(regions.len(), 6);
    assert!(regions.iter().all(|r| r.width() == 40 && r.height() == 40));

    // Block index from the mean intensity; the last cell reads as garbage.
    let recognizer = |region: &GrayImageU8| -> grid_cells::Result<String> {
        let sum: u64 = region.data().iter().map(|&v| v as u64).sum();
        let mean = sum as f64 / region.data().len() as f64;
        let idx = (mean / 20.0).floor() as i64;
        Ok(if idx == 5 { "5?".to_string() } else { format!(" {idx}\n") })
    };
    let summary = recognize_cells(&recognizer, &regions).unwrap();
    assert_eq!(summary.errors, 1);

    let matrix = to_matrix(&summary.values, cells.shape).unwrap();
    assert_eq!((matrix.nrows(), matrix.ncols()), (2, 3));
    assert_eq!(matrix[(0, 0)], 0.0);
    assert_eq!(matrix[(0, 2)], 2.0);
    assert_eq!(matrix[(1, 1)], 4.0);
    assert!(matrix[(1, 2)].is_infinite());
}

#[test]
fn include_mode_prepends_the_anchor() {
    init_logging();
    let anchor = CellBox::new(Point::new(5, 5), Point::new(25, 25));
    let cells = region_creator(anchor, 60, 40, 0.0, 0.0, AnchorMode::Include).unwrap();
    assert_eq!(cells.boxes.len(), cells.shape.cell_count() + 1);
    assert_eq!(cells.boxes[0], anchor);
}

#[test]
fn degenerate_anchor_is_rejected() {
    init_logging();
    let anchor = CellBox::new(Point::new(10, 10), Point::new(10, 30));
    assert_eq!(
        region_creator(anchor, 100, 100, 0.0, 0.0, AnchorMode::Exclude),
        Err(GridError::InvalidAnchor {
            width: 0,
            height: 20
        })
    );
}
