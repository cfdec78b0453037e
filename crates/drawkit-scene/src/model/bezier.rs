use drawkit_geom::Point2;
use serde::{Deserialize, Serialize};

use crate::points::{PointArena, PointId};

/// Cubic bezier over four shared points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CubicBezierShape {
    pub start: PointId,
    pub point1: PointId,
    pub point2: PointId,
    pub point3: PointId,
}

impl CubicBezierShape {
    pub fn new(start: PointId, point1: PointId, point2: PointId, point3: PointId) -> Self {
        Self {
            start,
            point1,
            point2,
            point3,
        }
    }

    pub fn resolve(&self, points: &PointArena) -> Option<[Point2; 4]> {
        Some([
            points.position(self.start)?,
            points.position(self.point1)?,
            points.position(self.point2)?,
            points.position(self.point3)?,
        ])
    }

    /// Flattens the curve into `steps` chords for hit-testing.
    pub fn flattened(&self, points: &PointArena, steps: usize) -> Vec<Point2> {
        let Some([p0, p1, p2, p3]) = self.resolve(points) else {
            return Vec::new();
        };
        (0..=steps)
            .map(|i| {
                let t = i as f64 / steps as f64;
                let u = 1.0 - t;
                Point2::new(
                    u * u * u * p0.x + 3.0 * u * u * t * p1.x + 3.0 * u * t * t * p2.x + t * t * t * p3.x,
                    u * u * u * p0.y + 3.0 * u * u * t * p1.y + 3.0 * u * t * t * p2.y + t * t * t * p3.y,
                )
            })
            .collect()
    }
}

/// Quadratic bezier over three shared points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuadraticBezierShape {
    pub start: PointId,
    pub point1: PointId,
    pub point2: PointId,
}

impl QuadraticBezierShape {
    pub fn new(start: PointId, point1: PointId, point2: PointId) -> Self {
        Self {
            start,
            point1,
            point2,
        }
    }

    pub fn resolve(&self, points: &PointArena) -> Option<[Point2; 3]> {
        Some([
            points.position(self.start)?,
            points.position(self.point1)?,
            points.position(self.point2)?,
        ])
    }

    /// Flattens the curve into `steps` chords for hit-testing.
    pub fn flattened(&self, points: &PointArena, steps: usize) -> Vec<Point2> {
        let Some([p0, p1, p2]) = self.resolve(points) else {
            return Vec::new();
        };
        (0..=steps)
            .map(|i| {
                let t = i as f64 / steps as f64;
                let u = 1.0 - t;
                Point2::new(
                    u * u * p0.x + 2.0 * u * t * p1.x + t * t * p2.x,
                    u * u * p0.y + 2.0 * u * t * p1.y + t * t * p2.y,
                )
            })
            .collect()
    }
}
