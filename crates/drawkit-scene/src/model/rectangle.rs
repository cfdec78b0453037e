use drawkit_geom::Rect2;
use serde::{Deserialize, Serialize};

use crate::points::{PointArena, PointId};

/// Axis-aligned rectangle spanned by two shared corner points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RectangleShape {
    pub top_left: PointId,
    pub bottom_right: PointId,
}

impl RectangleShape {
    pub fn new(top_left: PointId, bottom_right: PointId) -> Self {
        Self {
            top_left,
            bottom_right,
        }
    }

    /// Resolves the corner points into a normalized rectangle.
    pub fn resolve(&self, points: &PointArena) -> Option<Rect2> {
        Some(Rect2::from_points(
            points.position(self.top_left)?,
            points.position(self.bottom_right)?,
            0.0,
            0.0,
        ))
    }
}
