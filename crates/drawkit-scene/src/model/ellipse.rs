use drawkit_geom::Rect2;
use serde::{Deserialize, Serialize};

use crate::points::{PointArena, PointId};

/// Axis-aligned ellipse inscribed in the rectangle spanned by two shared
/// corner points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EllipseShape {
    pub top_left: PointId,
    pub bottom_right: PointId,
}

impl EllipseShape {
    pub fn new(top_left: PointId, bottom_right: PointId) -> Self {
        Self {
            top_left,
            bottom_right,
        }
    }

    /// Resolves the corner points into the bounding rectangle of the ellipse.
    pub fn resolve(&self, points: &PointArena) -> Option<Rect2> {
        Some(Rect2::from_points(
            points.position(self.top_left)?,
            points.position(self.bottom_right)?,
            0.0,
            0.0,
        ))
    }
}
