//! Per-variant hit-test strategies.
//!
//! Containment semantics are strategy-specific: lines and curves test
//! distance to the stroked geometry, rectangles and ellipses hit on both the
//! fill region and a `radius`-wide band around the boundary. Composite
//! strategies delegate each child back through the registry.

use drawkit_geom::{line_intersects_rect, Line2, Point2, Rect2};

use crate::error::HitTestError;
use crate::hit_test::{HitTestRegistry, HitTestStrategy};
use crate::model::Geometry;
use crate::points::{PointArena, PointId};

/// Chord count used to flatten bezier segments for proximity tests.
const FLATTEN_STEPS: usize = 32;

/// Nearest point of `ids` within `radius` of `target`; ties keep the first
/// id in iteration order.
fn nearest_point(
    points: &PointArena,
    ids: impl IntoIterator<Item = PointId>,
    target: Point2,
    radius: f64,
) -> Option<PointId> {
    let mut best: Option<(PointId, f64)> = None;
    for id in ids {
        let Some(pos) = points.position(id) else {
            continue;
        };
        let distance = pos.distance_to(&target);
        if distance <= radius && best.map_or(true, |(_, d)| distance < d) {
            best = Some((id, distance));
        }
    }
    best.map(|(id, _)| id)
}

fn polyline_contains(polyline: &[Point2], target: Point2, radius: f64) -> bool {
    polyline
        .windows(2)
        .any(|w| Line2::new(w[0], w[1]).distance_to(target) <= radius)
}

fn polyline_overlaps(polyline: &[Point2], rect: &Rect2) -> bool {
    polyline.iter().any(|p| rect.contains(*p))
        || polyline
            .windows(2)
            .any(|w| line_intersects_rect(w[0], w[1], rect).is_some())
}

pub struct PointHitTest;

impl HitTestStrategy for PointHitTest {
    fn try_get_point(
        &self,
        _registry: &HitTestRegistry,
        points: &PointArena,
        geometry: &Geometry,
        target: Point2,
        radius: f64,
    ) -> Result<Option<PointId>, HitTestError> {
        match geometry {
            Geometry::Point(id) => Ok(nearest_point(points, [*id], target, radius)),
            _ => Ok(None),
        }
    }

    fn contains(
        &self,
        _registry: &HitTestRegistry,
        points: &PointArena,
        geometry: &Geometry,
        target: Point2,
        radius: f64,
    ) -> Result<bool, HitTestError> {
        match geometry {
            Geometry::Point(id) => Ok(points
                .position(*id)
                .is_some_and(|p| p.distance_to(&target) <= radius)),
            _ => Ok(false),
        }
    }

    fn overlaps(
        &self,
        _registry: &HitTestRegistry,
        points: &PointArena,
        geometry: &Geometry,
        rect: &Rect2,
        radius: f64,
    ) -> Result<bool, HitTestError> {
        match geometry {
            Geometry::Point(id) => Ok(points
                .position(*id)
                .is_some_and(|p| rect.expanded(radius).contains(p))),
            _ => Ok(false),
        }
    }
}

pub struct LineHitTest;

impl HitTestStrategy for LineHitTest {
    fn try_get_point(
        &self,
        _registry: &HitTestRegistry,
        points: &PointArena,
        geometry: &Geometry,
        target: Point2,
        radius: f64,
    ) -> Result<Option<PointId>, HitTestError> {
        match geometry {
            Geometry::Line(s) => Ok(nearest_point(points, [s.start, s.end], target, radius)),
            _ => Ok(None),
        }
    }

    fn contains(
        &self,
        _registry: &HitTestRegistry,
        points: &PointArena,
        geometry: &Geometry,
        target: Point2,
        radius: f64,
    ) -> Result<bool, HitTestError> {
        match geometry {
            Geometry::Line(s) => Ok(s
                .resolve(points)
                .is_some_and(|line| line.distance_to(target) <= radius)),
            _ => Ok(false),
        }
    }

    fn overlaps(
        &self,
        _registry: &HitTestRegistry,
        points: &PointArena,
        geometry: &Geometry,
        rect: &Rect2,
        radius: f64,
    ) -> Result<bool, HitTestError> {
        match geometry {
            Geometry::Line(s) => {
                let Some(line) = s.resolve(points) else {
                    return Ok(false);
                };
                let rect = rect.expanded(radius);
                Ok(rect.contains(line.a)
                    || rect.contains(line.b)
                    || line_intersects_rect(line.a, line.b, &rect).is_some())
            }
            _ => Ok(false),
        }
    }
}

pub struct CubicBezierHitTest;

impl HitTestStrategy for CubicBezierHitTest {
    fn try_get_point(
        &self,
        _registry: &HitTestRegistry,
        points: &PointArena,
        geometry: &Geometry,
        target: Point2,
        radius: f64,
    ) -> Result<Option<PointId>, HitTestError> {
        match geometry {
            Geometry::CubicBezier(s) => Ok(nearest_point(
                points,
                [s.start, s.point1, s.point2, s.point3],
                target,
                radius,
            )),
            _ => Ok(None),
        }
    }

    fn contains(
        &self,
        _registry: &HitTestRegistry,
        points: &PointArena,
        geometry: &Geometry,
        target: Point2,
        radius: f64,
    ) -> Result<bool, HitTestError> {
        match geometry {
            Geometry::CubicBezier(s) => Ok(polyline_contains(
                &s.flattened(points, FLATTEN_STEPS),
                target,
                radius,
            )),
            _ => Ok(false),
        }
    }

    fn overlaps(
        &self,
        _registry: &HitTestRegistry,
        points: &PointArena,
        geometry: &Geometry,
        rect: &Rect2,
        radius: f64,
    ) -> Result<bool, HitTestError> {
        match geometry {
            Geometry::CubicBezier(s) => Ok(polyline_overlaps(
                &s.flattened(points, FLATTEN_STEPS),
                &rect.expanded(radius),
            )),
            _ => Ok(false),
        }
    }
}

pub struct QuadraticBezierHitTest;

impl HitTestStrategy for QuadraticBezierHitTest {
    fn try_get_point(
        &self,
        _registry: &HitTestRegistry,
        points: &PointArena,
        geometry: &Geometry,
        target: Point2,
        radius: f64,
    ) -> Result<Option<PointId>, HitTestError> {
        match geometry {
            Geometry::QuadraticBezier(s) => Ok(nearest_point(
                points,
                [s.start, s.point1, s.point2],
                target,
                radius,
            )),
            _ => Ok(None),
        }
    }

    fn contains(
        &self,
        _registry: &HitTestRegistry,
        points: &PointArena,
        geometry: &Geometry,
        target: Point2,
        radius: f64,
    ) -> Result<bool, HitTestError> {
        match geometry {
            Geometry::QuadraticBezier(s) => Ok(polyline_contains(
                &s.flattened(points, FLATTEN_STEPS),
                target,
                radius,
            )),
            _ => Ok(false),
        }
    }

    fn overlaps(
        &self,
        _registry: &HitTestRegistry,
        points: &PointArena,
        geometry: &Geometry,
        rect: &Rect2,
        radius: f64,
    ) -> Result<bool, HitTestError> {
        match geometry {
            Geometry::QuadraticBezier(s) => Ok(polyline_overlaps(
                &s.flattened(points, FLATTEN_STEPS),
                &rect.expanded(radius),
            )),
            _ => Ok(false),
        }
    }
}

pub struct RectangleHitTest;

impl HitTestStrategy for RectangleHitTest {
    fn try_get_point(
        &self,
        _registry: &HitTestRegistry,
        points: &PointArena,
        geometry: &Geometry,
        target: Point2,
        radius: f64,
    ) -> Result<Option<PointId>, HitTestError> {
        match geometry {
            Geometry::Rectangle(s) => Ok(nearest_point(
                points,
                [s.top_left, s.bottom_right],
                target,
                radius,
            )),
            _ => Ok(None),
        }
    }

    fn contains(
        &self,
        _registry: &HitTestRegistry,
        points: &PointArena,
        geometry: &Geometry,
        target: Point2,
        radius: f64,
    ) -> Result<bool, HitTestError> {
        match geometry {
            // Fill and a radius-wide stroke band in one test.
            Geometry::Rectangle(s) => Ok(s
                .resolve(points)
                .is_some_and(|rect| rect.expanded(radius).contains(target))),
            _ => Ok(false),
        }
    }

    fn overlaps(
        &self,
        _registry: &HitTestRegistry,
        points: &PointArena,
        geometry: &Geometry,
        rect: &Rect2,
        radius: f64,
    ) -> Result<bool, HitTestError> {
        match geometry {
            Geometry::Rectangle(s) => Ok(s
                .resolve(points)
                .is_some_and(|r| r.expanded(radius).intersects(rect))),
            _ => Ok(false),
        }
    }
}

pub struct EllipseHitTest;

impl EllipseHitTest {
    fn hits(rect: &Rect2, target: Point2, radius: f64) -> bool {
        let rx = rect.width / 2.0;
        let ry = rect.height / 2.0;
        if rx <= 0.0 || ry <= 0.0 {
            // Degenerate ellipse collapses to its bounding segment.
            return rect.expanded(radius).contains(target);
        }
        let center = rect.center();
        let nx = (target.x - center.x) / rx;
        let ny = (target.y - center.y) / ry;
        let r = (nx * nx + ny * ny).sqrt();
        if r <= 1.0 {
            return true;
        }
        // Stroke region: distance to the boundary point along the radial ray.
        let boundary = Point2::new(
            center.x + (target.x - center.x) / r,
            center.y + (target.y - center.y) / r,
        );
        boundary.distance_to(&target) <= radius
    }
}

impl HitTestStrategy for EllipseHitTest {
    fn try_get_point(
        &self,
        _registry: &HitTestRegistry,
        points: &PointArena,
        geometry: &Geometry,
        target: Point2,
        radius: f64,
    ) -> Result<Option<PointId>, HitTestError> {
        match geometry {
            Geometry::Ellipse(s) => Ok(nearest_point(
                points,
                [s.top_left, s.bottom_right],
                target,
                radius,
            )),
            _ => Ok(None),
        }
    }

    fn contains(
        &self,
        _registry: &HitTestRegistry,
        points: &PointArena,
        geometry: &Geometry,
        target: Point2,
        radius: f64,
    ) -> Result<bool, HitTestError> {
        match geometry {
            Geometry::Ellipse(s) => Ok(s
                .resolve(points)
                .is_some_and(|rect| Self::hits(&rect, target, radius))),
            _ => Ok(false),
        }
    }

    fn overlaps(
        &self,
        _registry: &HitTestRegistry,
        points: &PointArena,
        geometry: &Geometry,
        rect: &Rect2,
        radius: f64,
    ) -> Result<bool, HitTestError> {
        match geometry {
            Geometry::Ellipse(s) => Ok(s
                .resolve(points)
                .is_some_and(|r| r.expanded(radius).intersects(rect))),
            _ => Ok(false),
        }
    }
}

pub struct TextHitTest;

impl HitTestStrategy for TextHitTest {
    fn try_get_point(
        &self,
        _registry: &HitTestRegistry,
        points: &PointArena,
        geometry: &Geometry,
        target: Point2,
        radius: f64,
    ) -> Result<Option<PointId>, HitTestError> {
        match geometry {
            Geometry::Text(s) => Ok(nearest_point(
                points,
                [s.top_left, s.bottom_right],
                target,
                radius,
            )),
            _ => Ok(None),
        }
    }

    fn contains(
        &self,
        _registry: &HitTestRegistry,
        points: &PointArena,
        geometry: &Geometry,
        target: Point2,
        radius: f64,
    ) -> Result<bool, HitTestError> {
        match geometry {
            Geometry::Text(s) => Ok(s
                .resolve(points)
                .is_some_and(|rect| rect.expanded(radius).contains(target))),
            _ => Ok(false),
        }
    }

    fn overlaps(
        &self,
        _registry: &HitTestRegistry,
        points: &PointArena,
        geometry: &Geometry,
        rect: &Rect2,
        radius: f64,
    ) -> Result<bool, HitTestError> {
        match geometry {
            Geometry::Text(s) => Ok(s
                .resolve(points)
                .is_some_and(|r| r.expanded(radius).intersects(rect))),
            _ => Ok(false),
        }
    }
}

pub struct ScribbleHitTest;

impl ScribbleHitTest {
    fn resolve(points: &PointArena, ids: &[PointId]) -> Vec<Point2> {
        ids.iter().filter_map(|id| points.position(*id)).collect()
    }
}

impl HitTestStrategy for ScribbleHitTest {
    fn try_get_point(
        &self,
        _registry: &HitTestRegistry,
        points: &PointArena,
        geometry: &Geometry,
        target: Point2,
        radius: f64,
    ) -> Result<Option<PointId>, HitTestError> {
        match geometry {
            Geometry::Scribble(s) => Ok(nearest_point(
                points,
                s.points.iter().copied(),
                target,
                radius,
            )),
            _ => Ok(None),
        }
    }

    fn contains(
        &self,
        _registry: &HitTestRegistry,
        points: &PointArena,
        geometry: &Geometry,
        target: Point2,
        radius: f64,
    ) -> Result<bool, HitTestError> {
        match geometry {
            Geometry::Scribble(s) => Ok(polyline_contains(
                &Self::resolve(points, &s.points),
                target,
                radius,
            )),
            _ => Ok(false),
        }
    }

    fn overlaps(
        &self,
        _registry: &HitTestRegistry,
        points: &PointArena,
        geometry: &Geometry,
        rect: &Rect2,
        radius: f64,
    ) -> Result<bool, HitTestError> {
        match geometry {
            Geometry::Scribble(s) => Ok(polyline_overlaps(
                &Self::resolve(points, &s.points),
                &rect.expanded(radius),
            )),
            _ => Ok(false),
        }
    }
}

pub struct FigureHitTest;

impl HitTestStrategy for FigureHitTest {
    fn try_get_point(
        &self,
        registry: &HitTestRegistry,
        points: &PointArena,
        geometry: &Geometry,
        target: Point2,
        radius: f64,
    ) -> Result<Option<PointId>, HitTestError> {
        match geometry {
            Geometry::Figure(s) => {
                for segment in &s.segments {
                    if let Some(id) =
                        registry.try_get_point_in_shape(points, segment, target, radius, 1.0)?
                    {
                        return Ok(Some(id));
                    }
                }
                Ok(None)
            }
            _ => Ok(None),
        }
    }

    fn contains(
        &self,
        registry: &HitTestRegistry,
        points: &PointArena,
        geometry: &Geometry,
        target: Point2,
        radius: f64,
    ) -> Result<bool, HitTestError> {
        match geometry {
            Geometry::Figure(s) => {
                for segment in &s.segments {
                    if registry.contains(points, segment, target, radius, 1.0)? {
                        return Ok(true);
                    }
                }
                Ok(false)
            }
            _ => Ok(false),
        }
    }

    fn overlaps(
        &self,
        registry: &HitTestRegistry,
        points: &PointArena,
        geometry: &Geometry,
        rect: &Rect2,
        radius: f64,
    ) -> Result<bool, HitTestError> {
        match geometry {
            Geometry::Figure(s) => {
                for segment in &s.segments {
                    if registry.overlaps(points, segment, rect, radius, 1.0)? {
                        return Ok(true);
                    }
                }
                Ok(false)
            }
            _ => Ok(false),
        }
    }
}

pub struct PathHitTest;

impl HitTestStrategy for PathHitTest {
    fn try_get_point(
        &self,
        registry: &HitTestRegistry,
        points: &PointArena,
        geometry: &Geometry,
        target: Point2,
        radius: f64,
    ) -> Result<Option<PointId>, HitTestError> {
        match geometry {
            Geometry::Path(s) => {
                for figure in &s.figures {
                    for segment in &figure.segments {
                        if let Some(id) =
                            registry.try_get_point_in_shape(points, segment, target, radius, 1.0)?
                        {
                            return Ok(Some(id));
                        }
                    }
                }
                Ok(None)
            }
            _ => Ok(None),
        }
    }

    fn contains(
        &self,
        registry: &HitTestRegistry,
        points: &PointArena,
        geometry: &Geometry,
        target: Point2,
        radius: f64,
    ) -> Result<bool, HitTestError> {
        match geometry {
            Geometry::Path(s) => {
                for figure in &s.figures {
                    for segment in &figure.segments {
                        if registry.contains(points, segment, target, radius, 1.0)? {
                            return Ok(true);
                        }
                    }
                }
                Ok(false)
            }
            _ => Ok(false),
        }
    }

    fn overlaps(
        &self,
        registry: &HitTestRegistry,
        points: &PointArena,
        geometry: &Geometry,
        rect: &Rect2,
        radius: f64,
    ) -> Result<bool, HitTestError> {
        match geometry {
            Geometry::Path(s) => {
                for figure in &s.figures {
                    for segment in &figure.segments {
                        if registry.overlaps(points, segment, rect, radius, 1.0)? {
                            return Ok(true);
                        }
                    }
                }
                Ok(false)
            }
            _ => Ok(false),
        }
    }
}

pub struct GroupHitTest;

impl HitTestStrategy for GroupHitTest {
    fn try_get_point(
        &self,
        registry: &HitTestRegistry,
        points: &PointArena,
        geometry: &Geometry,
        target: Point2,
        radius: f64,
    ) -> Result<Option<PointId>, HitTestError> {
        match geometry {
            Geometry::Group(s) => {
                for child in &s.shapes {
                    if let Some(id) =
                        registry.try_get_point_in_shape(points, child, target, radius, 1.0)?
                    {
                        return Ok(Some(id));
                    }
                }
                Ok(None)
            }
            _ => Ok(None),
        }
    }

    fn contains(
        &self,
        registry: &HitTestRegistry,
        points: &PointArena,
        geometry: &Geometry,
        target: Point2,
        radius: f64,
    ) -> Result<bool, HitTestError> {
        match geometry {
            Geometry::Group(s) => {
                for child in &s.shapes {
                    if registry.contains(points, child, target, radius, 1.0)? {
                        return Ok(true);
                    }
                }
                Ok(false)
            }
            _ => Ok(false),
        }
    }

    fn overlaps(
        &self,
        registry: &HitTestRegistry,
        points: &PointArena,
        geometry: &Geometry,
        rect: &Rect2,
        radius: f64,
    ) -> Result<bool, HitTestError> {
        match geometry {
            Geometry::Group(s) => {
                for child in &s.shapes {
                    if registry.overlaps(points, child, rect, radius, 1.0)? {
                        return Ok(true);
                    }
                }
                Ok(false)
            }
            _ => Ok(false),
        }
    }
}
