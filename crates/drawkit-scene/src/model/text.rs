use drawkit_geom::Rect2;
use serde::{Deserialize, Serialize};

use crate::points::{PointArena, PointId};

/// Text block laid out in the rectangle spanned by two shared corner points.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextShape {
    pub top_left: PointId,
    pub bottom_right: PointId,
    pub text: String,
}

impl TextShape {
    pub fn new(top_left: PointId, bottom_right: PointId, text: impl Into<String>) -> Self {
        Self {
            top_left,
            bottom_right,
            text: text.into(),
        }
    }

    pub fn resolve(&self, points: &PointArena) -> Option<Rect2> {
        Some(Rect2::from_points(
            points.position(self.top_left)?,
            points.position(self.bottom_right)?,
            0.0,
            0.0,
        ))
    }
}
