//! Rotation-invariant comparison of closed point sequences.

use crate::geometry::points_similar;
use crate::points::PointSequence;

/// Find the rotation offset `k` aligning `b` onto `a`.
///
/// Returns the first `k` in `0..n` such that `a[i]` and `b[(i + k) % n]` are
/// within `tol` (squared pixels) for every `i`. Sequences of different length
/// never align, and neither do two empty sequences.
pub fn find_rotation(a: &PointSequence, b: &PointSequence, tol: i64) -> Option<usize> {
    let n = a.len();
    if n != b.len() {
        return None;
    }
    let a = a.points();
    let b = b.points();

    (0..n).find(|&k| {
        // anchor pair first; most offsets die here
        points_similar(a[0], b[k], tol)
            && (1..n).all(|i| points_similar(a[i], b[(i + k) % n], tol))
    })
}

/// `true` when `a` and `b` describe the same closed outline up to a shift of
/// the start point and per-point jitter within `tol`.
#[inline]
pub fn shapes_similar(a: &PointSequence, b: &PointSequence, tol: i64) -> bool {
    find_rotation(a, b, tol).is_some()
}
