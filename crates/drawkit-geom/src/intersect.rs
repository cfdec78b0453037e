//! Closed-form intersection routines.
//!
//! All routines are segment-bounded: intersections outside the parameter
//! range of either input segment are not reported. Degenerate inputs
//! (parallel or zero-length segments, empty rectangles, zero-radius
//! ellipses) yield "no intersection" rather than an error.

use crate::point::Point2;
use crate::rect::Rect2;
use crate::EPSILON;

/// Intersects segment `a0-b0` with segment `a1-b1`.
///
/// Returns `None` when the segments are parallel (including collinear and
/// identical segments) or when the crossing falls outside either segment.
pub fn line_intersects_line(a0: Point2, b0: Point2, a1: Point2, b1: Point2) -> Option<Point2> {
    let d0x = b0.x - a0.x;
    let d0y = b0.y - a0.y;
    let d1x = b1.x - a1.x;
    let d1y = b1.y - a1.y;

    let denom = d0x * d1y - d0y * d1x;
    if denom.abs() < EPSILON {
        return None;
    }

    let sx = a1.x - a0.x;
    let sy = a1.y - a0.y;
    let t = (sx * d1y - sy * d1x) / denom;
    let u = (sx * d0y - sy * d0x) / denom;

    if !(0.0..=1.0).contains(&t) || !(0.0..=1.0).contains(&u) {
        return None;
    }
    Some(Point2::new(a0.x + t * d0x, a0.y + t * d0y))
}

/// Clips segment `a-b` against `rect` using Liang-Barsky.
///
/// Returns the clipped segment endpoints when any part of the segment lies
/// inside the rectangle, `None` when the segment misses it entirely.
pub fn line_intersects_rect(a: Point2, b: Point2, rect: &Rect2) -> Option<(Point2, Point2)> {
    let dx = b.x - a.x;
    let dy = b.y - a.y;

    let p = [-dx, dx, -dy, dy];
    let q = [
        a.x - rect.x,
        rect.x + rect.width - a.x,
        a.y - rect.y,
        rect.y + rect.height - a.y,
    ];

    let mut t0 = 0.0f64;
    let mut t1 = 1.0f64;

    for i in 0..4 {
        if p[i].abs() < EPSILON {
            // Segment parallel to this boundary; outside means no hit.
            if q[i] < 0.0 {
                return None;
            }
        } else {
            let t = q[i] / p[i];
            if p[i] < 0.0 {
                t0 = t0.max(t);
            } else {
                t1 = t1.min(t);
            }
            if t0 > t1 {
                return None;
            }
        }
    }

    Some((
        Point2::new(a.x + t0 * dx, a.y + t0 * dy),
        Point2::new(a.x + t1 * dx, a.y + t1 * dy),
    ))
}

/// Intersects segment `a-b` with the axis-aligned ellipse inscribed in
/// `rect`. Returns zero, one or two points ordered by distance from `a`.
pub fn line_intersects_ellipse(a: Point2, b: Point2, rect: &Rect2) -> Vec<Point2> {
    let rx = rect.width / 2.0;
    let ry = rect.height / 2.0;
    if rx < EPSILON || ry < EPSILON {
        return Vec::new();
    }
    let center = rect.center();

    // Normalize into unit-circle space and solve the quadratic for the
    // segment parameter t.
    let ex = (a.x - center.x) / rx;
    let ey = (a.y - center.y) / ry;
    let fx = (b.x - a.x) / rx;
    let fy = (b.y - a.y) / ry;

    let qa = fx * fx + fy * fy;
    if qa < EPSILON {
        return Vec::new();
    }
    let qb = 2.0 * (ex * fx + ey * fy);
    let qc = ex * ex + ey * ey - 1.0;

    let disc = qb * qb - 4.0 * qa * qc;
    if disc < 0.0 {
        return Vec::new();
    }

    let sqrt_disc = disc.sqrt();
    let mut roots = vec![(-qb - sqrt_disc) / (2.0 * qa)];
    if sqrt_disc > EPSILON {
        roots.push((-qb + sqrt_disc) / (2.0 * qa));
    }

    roots
        .into_iter()
        .filter(|t| (0.0..=1.0).contains(t))
        .map(|t| Point2::new(a.x + t * (b.x - a.x), a.y + t * (b.y - a.y)))
        .collect()
}
