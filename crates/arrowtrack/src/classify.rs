//! Arrow recognition from a polygon and its convex hull.
//!
//! An arrow outline simplifies to a convex hull of 4 or 5 vertices plus
//! exactly two concave "notch" points where the head meets the shaft. The
//! tip is the hull vertex two steps away from both notches; the tail is the
//! midpoint of the two back corners.

use log::trace;

use arrowtrack_core::{ConvexHull, Point, PointSequence};

use crate::types::{Arrow, FramePolygon};

/// Why a polygon was not recognised as an arrow.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RejectReason {
    /// Hull is not 4 or 5 points, or the polygon is not two points larger.
    SideCount { hull: usize, poly: usize },
    /// Enclosed area below the configured minimum, or NaN.
    TooSmall,
    /// Number of polygon points missing from the hull is not two.
    NotchCount(usize),
    /// The two notches do not share a neighbour two steps away.
    NoSharedTip,
}

/// Classify `poly` against its `hull`.
pub fn classify_arrow(
    poly: &PointSequence,
    hull: &ConvexHull,
    area: f64,
    min_area: f64,
) -> Result<Arrow, RejectReason> {
    let hull_sides = hull.len();
    let n = poly.len();
    if !matches!(hull_sides, 4 | 5) || n != hull_sides + 2 {
        return Err(RejectReason::SideCount {
            hull: hull_sides,
            poly: n,
        });
    }
    if area.is_nan() || area < min_area {
        return Err(RejectReason::TooSmall);
    }

    let notches: Vec<usize> = poly
        .points()
        .iter()
        .enumerate()
        .filter(|(_, p)| !hull.contains(**p))
        .map(|(i, _)| i)
        .collect();
    let [i1, i2] = notches[..] else {
        return Err(RejectReason::NotchCount(notches.len()));
    };

    let ahead = |i: usize| (i + 2) % n;
    let behind = |i: usize| (i + n - 2) % n;

    let (tip, back_a, back_b) = if ahead(i1) == behind(i2) {
        (ahead(i1), behind(i1), ahead(i2))
    } else if behind(i1) == ahead(i2) {
        (behind(i1), ahead(i1), behind(i2))
    } else {
        return Err(RejectReason::NoSharedTip);
    };

    // All indices are already reduced mod n.
    let points = poly.points();
    Ok(Arrow {
        tip: points[tip],
        tail: midpoint(points[back_a], points[back_b]),
    })
}

/// Recognise a single pipeline record, logging the reason on rejection.
pub fn detect_arrow(frame_polygon: &FramePolygon, min_area: f64) -> Option<Arrow> {
    let area = frame_polygon.enclosed_area();
    match classify_arrow(&frame_polygon.polygon, &frame_polygon.hull, area, min_area) {
        Ok(arrow) => Some(arrow),
        Err(reason) => {
            trace!("polygon rejected: {reason:?}");
            None
        }
    }
}

/// Floor of the coordinate means, summed in `i64`. The mean of two `i32`
/// values always fits back into `i32`.
fn midpoint(a: Point, b: Point) -> Point {
    let mean = |u: i32, v: i32| (i64::from(u) + i64::from(v)).div_euclid(2) as i32;
    Point::new(mean(a.x, b.x), mean(a.y, b.y))
}
