use serde::{Deserialize, Serialize};

use crate::point::Point2;

/// Line segment between two points.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Line2 {
    pub a: Point2,
    pub b: Point2,
}

impl Line2 {
    /// Creates a segment between two points.
    pub fn new(a: Point2, b: Point2) -> Self {
        Self { a, b }
    }

    /// Creates a segment between two points with a `(dx, dy)` offset applied
    /// to both at construction.
    pub fn from_points(a: Point2, b: Point2, dx: f64, dy: f64) -> Self {
        Self {
            a: a.translated(dx, dy),
            b: b.translated(dx, dy),
        }
    }

    pub fn length(&self) -> f64 {
        self.a.distance_to(&self.b)
    }

    pub fn midpoint(&self) -> Point2 {
        Point2::new((self.a.x + self.b.x) / 2.0, (self.a.y + self.b.y) / 2.0)
    }

    /// Closest point on the segment to `target`.
    ///
    /// A zero-length segment projects everything onto its single point.
    pub fn nearest_point(&self, target: Point2) -> Point2 {
        let dx = self.b.x - self.a.x;
        let dy = self.b.y - self.a.y;
        let len_sq = dx * dx + dy * dy;
        if len_sq == 0.0 {
            return self.a;
        }
        let t = ((target.x - self.a.x) * dx + (target.y - self.a.y) * dy) / len_sq;
        let t = t.clamp(0.0, 1.0);
        Point2::new(self.a.x + t * dx, self.a.y + t * dy)
    }

    /// Distance from `target` to the segment.
    pub fn distance_to(&self, target: Point2) -> f64 {
        self.nearest_point(target).distance_to(&target)
    }
}
