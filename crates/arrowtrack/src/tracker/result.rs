use serde::{Deserialize, Serialize};

use arrowtrack_core::{Point, PointSequence};

/// An arrow followed across frames.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TrackedArrow {
    /// Latest matched outline, owned by the tracker.
    pub shape: PointSequence,
    pub tip: Point,
    pub tail: Point,
    /// Hysteresis counter. Capped above; may be `-1` between a decay and the
    /// eviction check of the following frame.
    pub stability: i32,
}

/// A confirmed arrow reported for the current frame.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StableArrow {
    pub shape: PointSequence,
    pub tip: Point,
    pub tail: Point,
}

impl From<&TrackedArrow> for StableArrow {
    fn from(track: &TrackedArrow) -> Self {
        Self {
            shape: track.shape.clone(),
            tip: track.tip,
            tail: track.tail,
        }
    }
}

/// Per-frame bookkeeping counters.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FrameStats {
    /// Polygons that classified as arrows.
    pub candidates: usize,
    /// Candidates absorbed by an existing track.
    pub matched: usize,
    /// Candidates that started a new track.
    pub created: usize,
    /// Tracks dropped because their stability went negative.
    pub evicted: usize,
    /// Tracks reported as stable.
    pub stable: usize,
    /// Tracks alive after this frame.
    pub tracks: usize,
}
