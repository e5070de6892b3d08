//! Arrow-shaped polygon recognition and tracking.
//!
//! The crate consumes, per frame, the polygons and convex hulls produced by
//! an external contour pipeline, recognises arrow outlines, and follows them
//! across frames with a hysteresis filter so only arrows seen consistently
//! are reported.
//!
//! ## Quickstart
//!
//! ```
//! use arrowtrack::{ArrowTracker, FramePolygon, TrackerParams};
//!
//! let polygon = [0, 10, 20, 10, 20, 0, 40, 20, 20, 40, 20, 30, 0, 30];
//! let hull = [0, 10, 20, 0, 40, 20, 20, 40, 0, 30];
//! let frame = vec![FramePolygon::from_flat(&polygon, &hull, Some(800.0)).unwrap()];
//!
//! let mut tracker = ArrowTracker::new(TrackerParams::default());
//! let mut reported = Vec::new();
//! for _ in 0..4 {
//!     reported = tracker.process_frame(&frame);
//! }
//! assert_eq!(reported.len(), 1);
//! assert_eq!((reported[0].tip.x, reported[0].tip.y), (40, 20));
//! ```
//!
//! ## API map
//! - `arrowtrack::core`: point sequences, hull predicates, shape matching.
//! - [`classify_arrow`] / [`detect_arrow`]: single-polygon recognition.
//! - [`ArrowTracker`]: per-frame matching and stability filtering.
//! - [`replay`]: batch replay of recorded frames (used by the CLI).

pub use arrowtrack_core as core;

mod classify;
pub mod replay;
mod tracker;
mod types;

pub use classify::{classify_arrow, detect_arrow, RejectReason};
pub use tracker::{
    ArrowTracker, FrameStats, ParamsError, StableArrow, TrackedArrow, TrackerParams,
};
pub use types::{Arrow, ArrowCandidate, FramePolygon};
