//! Core types and utilities for arrow tracking.
//!
//! This crate is intentionally small and purely geometric. It does *not*
//! depend on any image pipeline: polygons and hulls arrive as integer point
//! lists produced elsewhere (contour extraction, polygon simplification,
//! hull computation).

mod geometry;
mod logger;
mod points;
mod shape_match;

pub use geometry::{
    point_in_hull, point_in_hull_flat, points_similar, polygon_area, squared_distance,
};
pub use points::{ConvexHull, GeometryError, Point, PointSequence};
pub use shape_match::{find_rotation, shapes_similar};

#[cfg(feature = "tracing")]
pub use logger::init_tracing;

pub use logger::init_with_level;
