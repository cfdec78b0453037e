//! Error types for the scene core.
//!
//! Both errors signal caller wiring bugs and are surfaced immediately.
//! Degenerate geometry and empty containers are not errors anywhere in this
//! crate; those queries return empty results.

use thiserror::Error;

use crate::container::ShapeId;
use crate::model::GeometryKind;

/// Hit-test dispatch error.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum HitTestError {
    /// A shape variant reached dispatch without a registered strategy.
    #[error("no hit-test strategy registered for shape kind {kind:?}")]
    UnsupportedShapeKind {
        /// The variant tag that had no strategy.
        kind: GeometryKind,
    },
}

/// Intersection finder error.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum FinderError {
    /// The finder was invoked with a source shape of the wrong variant.
    #[error("intersection finder expected a {expected:?} source shape, got {actual:?}")]
    InvalidShapeKind {
        /// The variant the finder operates on.
        expected: GeometryKind,
        /// The variant it was given.
        actual: GeometryKind,
    },

    /// The source shape id is not present in the current container.
    #[error("source shape {id:?} not found in the current container")]
    ShapeNotFound {
        /// The missing shape id.
        id: ShapeId,
    },
}
