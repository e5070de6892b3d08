//! Arrow tracking across frames.
//!
//! This module owns the set of tracked arrows, matches each frame's
//! classified candidates against it, and applies the attack/release
//! stability filter that decides which tracks are reported.

mod error;
mod params;
mod pipeline;
mod result;

pub use error::ParamsError;
pub use params::TrackerParams;
pub use pipeline::ArrowTracker;
pub use result::{FrameStats, StableArrow, TrackedArrow};
