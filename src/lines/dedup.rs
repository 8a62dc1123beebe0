//! Collapse near-duplicate line coordinates into representatives.
//!
//! Coordinates are sorted and scanned once. An element equal to, or closer
//! than the threshold to, the currently retained representative is dropped;
//! the scan
//! keeps comparing against that same representative until a gap of at least
//! the threshold appears. The representative of a group is therefore its
//! smallest member, not its mean, and a long chain of closely spaced values
//! can split into several groups whose representatives are exactly one
//! threshold apart or more.

/// Deduplicate `coords` with distance `threshold`, returning strictly
/// ascending representatives whose adjacent gaps are all `>= threshold`.
/// Equal values always merge, even with a zero threshold.
pub fn dedupe(coords: &[i32], threshold: f32) -> Vec<i32> {
    let mut sorted = coords.to_vec();
    sorted.sort_unstable();

    let threshold = threshold as f64;
    let mut out: Vec<i32> = Vec::with_capacity(sorted.len());
    for c in sorted {
        match out.last() {
            Some(&kept) if c == kept || ((c as i64 - kept as i64).abs() as f64) < threshold => {}
            _ => out.push(c),
        }
    }
    out
}
