use nalgebra::Point2;
use serde::{Deserialize, Serialize};

/// Integer pixel coordinate.
pub type Point = Point2<i32>;

/// Errors produced while building point sequences from raw buffers.
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum GeometryError {
    #[error("flat coordinate buffer has odd length {len}")]
    OddBufferLength { len: usize },
}

/// Closed polygon as an ordered, cyclic list of points.
///
/// The start index carries no meaning: the same outline may be reported
/// starting at any of its points from one frame to the next.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PointSequence {
    points: Vec<Point>,
}

impl PointSequence {
    pub fn new(points: Vec<Point>) -> Self {
        Self { points }
    }

    /// Build from an interleaved `[x0, y0, x1, y1, ...]` buffer.
    pub fn from_flat(coords: &[i32]) -> Result<Self, GeometryError> {
        points_from_flat(coords).map(Self::new)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    #[inline]
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Point at `index` wrapped around the cycle, `None` when empty.
    #[inline]
    pub fn at_cyclic(&self, index: usize) -> Option<Point> {
        if self.points.is_empty() {
            return None;
        }
        Some(self.points[index % self.points.len()])
    }

    /// Copy of this sequence that starts at point `offset`.
    pub fn rotated(&self, offset: usize) -> Self {
        if self.points.is_empty() {
            return self.clone();
        }
        let mut points = self.points.clone();
        points.rotate_left(offset % self.points.len());
        Self { points }
    }

    /// Interleaved `[x0, y0, x1, y1, ...]` coordinates.
    pub fn to_flat(&self) -> Vec<i32> {
        self.points.iter().flat_map(|p| [p.x, p.y]).collect()
    }
}

impl From<Vec<Point>> for PointSequence {
    fn from(points: Vec<Point>) -> Self {
        Self::new(points)
    }
}

impl FromIterator<Point> for PointSequence {
    fn from_iter<I: IntoIterator<Item = Point>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

/// Convex hull of a polygon, given as a subset of the polygon's points.
///
/// Containment is by value; hull order is irrelevant to the predicates here.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ConvexHull {
    points: Vec<Point>,
}

impl ConvexHull {
    pub fn new(points: Vec<Point>) -> Self {
        Self { points }
    }

    pub fn from_flat(coords: &[i32]) -> Result<Self, GeometryError> {
        points_from_flat(coords).map(Self::new)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    #[inline]
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        self.points.contains(&p)
    }
}

impl From<Vec<Point>> for ConvexHull {
    fn from(points: Vec<Point>) -> Self {
        Self::new(points)
    }
}

fn points_from_flat(coords: &[i32]) -> Result<Vec<Point>, GeometryError> {
    if coords.len() % 2 != 0 {
        return Err(GeometryError::OddBufferLength { len: coords.len() });
    }
    Ok(coords
        .chunks_exact(2)
        .map(|xy| Point::new(xy[0], xy[1]))
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flat_buffer_round_trips_point_order() {
        let seq = PointSequence::from_flat(&[1, 2, 3, 4, 5, 6]).expect("even buffer");
        assert_eq!(
            seq.points(),
            &[Point::new(1, 2), Point::new(3, 4), Point::new(5, 6)]
        );
        assert_eq!(seq.to_flat(), vec![1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn odd_flat_buffer_is_rejected() {
        assert_eq!(
            PointSequence::from_flat(&[1, 2, 3]),
            Err(GeometryError::OddBufferLength { len: 3 })
        );
        assert!(ConvexHull::from_flat(&[7]).is_err());
    }

    #[test]
    fn rotated_wraps_offset_and_keeps_cycle() {
        let seq: PointSequence = (0..4).map(|i| Point::new(i, -i)).collect();
        let r = seq.rotated(5);
        assert_eq!(r.points()[0], Point::new(1, -1));
        assert_eq!(r.points()[3], Point::new(0, 0));
        assert_eq!(seq.at_cyclic(6), Some(Point::new(2, -2)));
    }

    #[test]
    fn empty_sequence_has_no_cyclic_point() {
        assert_eq!(PointSequence::default().at_cyclic(3), None);
    }

    #[test]
    fn sequence_serializes_as_coordinate_pairs() {
        let seq = PointSequence::new(vec![Point::new(1, 2), Point::new(3, 4)]);
        let json = serde_json::to_string(&seq).expect("serialize");
        assert_eq!(json, "[[1,2],[3,4]]");
        let back: PointSequence = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(back, seq);
    }
}
