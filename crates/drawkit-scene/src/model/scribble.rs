use serde::{Deserialize, Serialize};

use crate::points::{PointArena, PointId};

/// Freehand polyline over an ordered list of shared points.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ScribbleShape {
    pub points: Vec<PointId>,
}

impl ScribbleShape {
    pub fn new(points: Vec<PointId>) -> Self {
        Self { points }
    }

    /// Drops intermediate points closer than `tolerance` to the previously
    /// kept point, releasing them from the arena. The first and last points
    /// are always kept. Returns the number of removed points.
    pub fn simplify(&mut self, arena: &mut PointArena, tolerance: f64) -> usize {
        if self.points.len() < 3 || tolerance <= 0.0 {
            return 0;
        }

        let last_index = self.points.len() - 1;
        let mut kept = Vec::with_capacity(self.points.len());
        let mut removed = 0;
        let mut anchor = match arena.position(self.points[0]) {
            Some(p) => p,
            None => return 0,
        };
        kept.push(self.points[0]);

        for (i, &id) in self.points.iter().enumerate().skip(1) {
            let Some(pos) = arena.position(id) else {
                kept.push(id);
                continue;
            };
            if i != last_index && anchor.distance_to(&pos) < tolerance {
                arena.release(id);
                removed += 1;
            } else {
                anchor = pos;
                kept.push(id);
            }
        }

        self.points = kept;
        removed
    }
}
