use serde::{Deserialize, Serialize};

use crate::line::Line2;
use crate::point::Point2;

/// Axis-aligned rectangle with non-negative width and height.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Rect2 {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect2 {
    /// Creates a rectangle from origin and size. Negative sizes are clamped
    /// to zero.
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width: width.max(0.0),
            height: height.max(0.0),
        }
    }

    /// Normalizes two arbitrary corner points into a rectangle, applying an
    /// optional `(dx, dy)` translation to both points first.
    ///
    /// Coincident corners yield a zero-area rectangle at that point.
    pub fn from_points(p1: Point2, p2: Point2, dx: f64, dy: f64) -> Self {
        let x1 = p1.x + dx;
        let y1 = p1.y + dy;
        let x2 = p2.x + dx;
        let y2 = p2.y + dy;
        let x = x1.min(x2);
        let y = y1.min(y2);
        Self {
            x,
            y,
            width: (x1 - x2).abs(),
            height: (y1 - y2).abs(),
        }
    }

    pub fn top_left(&self) -> Point2 {
        Point2::new(self.x, self.y)
    }

    pub fn bottom_right(&self) -> Point2 {
        Point2::new(self.x + self.width, self.y + self.height)
    }

    pub fn center(&self) -> Point2 {
        Point2::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    /// Checks whether the point lies inside the rectangle (boundary included).
    pub fn contains(&self, p: Point2) -> bool {
        p.x >= self.x
            && p.x <= self.x + self.width
            && p.y >= self.y
            && p.y <= self.y + self.height
    }

    /// Returns the rectangle grown by `amount` on every side. Used to turn a
    /// point probe radius into an area test.
    pub fn expanded(&self, amount: f64) -> Rect2 {
        Rect2::new(
            self.x - amount,
            self.y - amount,
            self.width + amount * 2.0,
            self.height + amount * 2.0,
        )
    }

    /// Checks whether two rectangles overlap (touching edges count).
    pub fn intersects(&self, other: &Rect2) -> bool {
        self.x <= other.x + other.width
            && self.x + self.width >= other.x
            && self.y <= other.y + other.height
            && self.y + self.height >= other.y
    }

    /// The four boundary segments in top, right, bottom, left order.
    pub fn edges(&self) -> [Line2; 4] {
        let tl = self.top_left();
        let tr = Point2::new(self.x + self.width, self.y);
        let br = self.bottom_right();
        let bl = Point2::new(self.x, self.y + self.height);
        [
            Line2::new(tl, tr),
            Line2::new(tr, br),
            Line2::new(br, bl),
            Line2::new(bl, tl),
        ]
    }
}
