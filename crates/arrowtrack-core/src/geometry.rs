//! Point-level predicates shared by the classifier and the shape matcher.

use crate::points::{ConvexHull, Point};

/// Squared Euclidean distance, widened to avoid overflow on large coordinates.
#[inline]
pub fn squared_distance(a: Point, b: Point) -> i64 {
    let dx = i64::from(a.x) - i64::from(b.x);
    let dy = i64::from(a.y) - i64::from(b.y);
    dx * dx + dy * dy
}

/// `true` when `a` and `b` are within the squared-distance tolerance `tol`.
///
/// A tolerance of 49 accepts points up to 7 px apart.
#[inline]
pub fn points_similar(a: Point, b: Point, tol: i64) -> bool {
    squared_distance(a, b) <= tol
}

/// `true` iff the hull contains a point exactly equal to `(x, y)`.
#[inline]
pub fn point_in_hull(hull: &ConvexHull, x: i32, y: i32) -> bool {
    hull.contains(Point::new(x, y))
}

/// Same as [`point_in_hull`] on an interleaved `[x0, y0, ...]` buffer.
///
/// Returns `false` for an odd-length buffer.
pub fn point_in_hull_flat(coords: &[i32], x: i32, y: i32) -> bool {
    if coords.len() % 2 != 0 {
        return false;
    }
    coords.chunks_exact(2).any(|xy| xy[0] == x && xy[1] == y)
}

/// Absolute enclosed area of a closed polygon (shoelace formula).
pub fn polygon_area(points: &[Point]) -> f64 {
    let n = points.len();
    if n < 3 {
        return 0.0;
    }
    let twice: i64 = (0..n)
        .map(|i| {
            let a = points[i];
            let b = points[(i + 1) % n];
            i64::from(a.x) * i64::from(b.y) - i64::from(b.x) * i64::from(a.y)
        })
        .sum();
    twice.abs() as f64 * 0.5
}
