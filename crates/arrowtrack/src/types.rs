use serde::{Deserialize, Serialize};

use arrowtrack_core::{polygon_area, ConvexHull, GeometryError, Point, PointSequence};

/// One closed shape delivered by the image pipeline for the current frame.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FramePolygon {
    /// Simplified polygon approximating the contour.
    pub polygon: PointSequence,
    /// Convex hull of `polygon`, as a subset of its points.
    pub hull: ConvexHull,
    /// Area enclosed by the source contour. Derived from `polygon` when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub area: Option<f64>,
}

impl FramePolygon {
    pub fn new(polygon: PointSequence, hull: ConvexHull, area: f64) -> Self {
        Self {
            polygon,
            hull,
            area: Some(area),
        }
    }

    /// Build from interleaved `[x0, y0, ...]` buffers as handed out by
    /// contour libraries.
    pub fn from_flat(
        polygon: &[i32],
        hull: &[i32],
        area: Option<f64>,
    ) -> Result<Self, GeometryError> {
        Ok(Self {
            polygon: PointSequence::from_flat(polygon)?,
            hull: ConvexHull::from_flat(hull)?,
            area,
        })
    }

    /// Enclosed area used for the noise filter.
    pub fn enclosed_area(&self) -> f64 {
        self.area
            .unwrap_or_else(|| polygon_area(self.polygon.points()))
    }
}

/// Tip and tail of a recognised arrow.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Arrow {
    /// The sharp point shared by both notch neighbourhoods.
    pub tip: Point,
    /// Midpoint between the two back corners.
    pub tail: Point,
}

/// A classified arrow from one frame, ready to be matched against tracks.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ArrowCandidate {
    pub shape: PointSequence,
    pub tip: Point,
    pub tail: Point,
}

impl ArrowCandidate {
    pub fn new(shape: PointSequence, arrow: Arrow) -> Self {
        Self {
            shape,
            tip: arrow.tip,
            tail: arrow.tail,
        }
    }
}
