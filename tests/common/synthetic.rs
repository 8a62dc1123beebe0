use grid_cells::LineSegment;

/// Full-length axis-aligned segments for the given line positions, each
/// followed by a near duplicate `dup` pixels away (skipped when `dup == 0`).
pub fn grid_segments(
    rows: &[i32],
    cols: &[i32],
    width: i32,
    height: i32,
    dup: i32,
) -> Vec<LineSegment> {
    let mut segments = Vec::new();
    for &y in rows {
        segments.push(LineSegment::new(0, y, width - 1, y));
        if dup != 0 {
            segments.push(LineSegment::new(3, y + dup, width - 4, y + dup));
        }
    }
    for &x in cols {
        segments.push(LineSegment::new(x, 0, x, height - 1));
        if dup != 0 {
            segments.push(LineSegment::new(x + dup, 2, x + dup, height - 3));
        }
    }
    segments
}

/// Image made of `cell x cell` blocks; block `(row, col)` is filled with
/// `value(row, col)`.
pub fn blocks_u8(
    width: usize,
    height: usize,
    cell: usize,
    value: impl Fn(usize, usize) -> u8,
) -> Vec<u8> {
    assert!(width > 0 && height > 0, "image dimensions must be positive");
    assert!(cell > 0, "cell size must be positive");

    let mut img = vec![0u8; width * height];
    for y in 0..height {
        for x in 0..width {
            img[y * width + x] = value(y / cell, x / cell);
        }
    }
    img
}
