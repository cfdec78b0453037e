//! # drawkit-geom
//!
//! Spatial primitives for the drawkit scene model.
//! Provides the fundamental 2D value types (points, rectangles, segments,
//! affine transforms) and the closed-form intersection routines the editor
//! core builds on.
//!
//! ## Core Components
//!
//! - **Point2**: 2D coordinate with distance and ordering helpers
//! - **Rect2**: normalized axis-aligned rectangle built from arbitrary corners
//! - **Line2**: segment with projection and distance queries
//! - **Matrix2**: 2D affine transform (composition, inversion)
//! - **intersect**: segment/segment, segment/rectangle and segment/ellipse
//!   intersections
//!
//! All intersection routines are segment-bounded and treat degenerate
//! geometry (zero-length segments, parallel lines, empty rectangles) as
//! "no intersection" rather than an error.

pub mod intersect;
pub mod line;
pub mod matrix;
pub mod point;
pub mod rect;

pub use intersect::{line_intersects_ellipse, line_intersects_line, line_intersects_rect};
pub use line::Line2;
pub use matrix::Matrix2;
pub use point::Point2;
pub use rect::Rect2;

/// Tolerance used by parallel/degeneracy tests across the crate.
pub const EPSILON: f64 = 1e-12;
