use drawkit_geom::Line2;
use serde::{Deserialize, Serialize};

use crate::points::{PointArena, PointId};

/// Line segment between two shared points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineShape {
    pub start: PointId,
    pub end: PointId,
}

impl LineShape {
    pub fn new(start: PointId, end: PointId) -> Self {
        Self { start, end }
    }

    /// Resolves the referenced points into segment geometry.
    pub fn resolve(&self, points: &PointArena) -> Option<Line2> {
        Some(Line2::new(
            points.position(self.start)?,
            points.position(self.end)?,
        ))
    }
}
