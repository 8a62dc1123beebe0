use crate::types::Point;
use nalgebra::Vector2;

/// Below this |cross| the two directions are treated as parallel.
pub const PARALLEL_EPS: f64 = 1e-8;

#[inline]
fn cross(a: &Vector2<f64>, b: &Vector2<f64>) -> f64 {
    a.x * b.y - a.y * b.x
}

/// Intersection of the infinite lines through `(o1, p1)` and `(o2, p2)`.
///
/// Returns `None` for parallel or degenerate pairs. The result is truncated
/// toward zero, so callers see up to one pixel of bias.
pub fn intersect(o1: Point, p1: Point, o2: Point, p2: Point) -> Option<Point> {
    let o1 = Vector2::new(o1.x as f64, o1.y as f64);
    let o2 = Vector2::new(o2.x as f64, o2.y as f64);
    let d1 = Vector2::new(p1.x as f64, p1.y as f64) - o1;
    let d2 = Vector2::new(p2.x as f64, p2.y as f64) - o2;

    let denom = cross(&d1, &d2);
    if denom.abs() < PARALLEL_EPS {
        return None;
    }

    let t1 = cross(&(o2 - o1), &d2) / denom;
    let inter = o1 + d1 * t1;
    if !inter.x.is_finite() || !inter.y.is_finite() {
        return None;
    }
    Some(Point::new(inter.x as i32, inter.y as i32))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(x: i32, y: i32) -> Point {
        Point::new(x, y)
    }

    #[test]
    fn horizontal_meets_vertical() {
        assert_eq!(
            intersect(p(0, 0), p(10, 0), p(5, -5), p(5, 5)),
            Some(p(5, 0))
        );
    }

    #[test]
    fn parallel_lines_have_no_intersection() {
        assert_eq!(intersect(p(0, 0), p(10, 0), p(0, 1), p(10, 1)), None);
        // Degenerate: first "line" is a single point.
        assert_eq!(intersect(p(3, 3), p(3, 3), p(0, 0), p(0, 9)), None);
    }

    #[test]
    fn intersection_is_not_limited_to_segments() {
        assert_eq!(
            intersect(p(0, 0), p(1, 0), p(20, 5), p(20, 6)),
            Some(p(20, 0))
        );
    }

    #[test]
    fn result_truncates_toward_zero() {
        // Lines y = x and y = -x + 5 cross at (2.5, 2.5).
        assert_eq!(intersect(p(0, 0), p(1, 1), p(0, 5), p(5, 0)), Some(p(2, 2)));
        // Crossing at (-2.5, -2.5) truncates to (-2, -2), not floor.
        assert_eq!(
            intersect(p(0, 0), p(1, 1), p(0, -5), p(-5, 0)),
            Some(p(-2, -2))
        );
    }
}
