//! Shape-intersection finders.
//!
//! A finder takes a source line shape, scans the current container for shapes
//! of its target kind, and materializes one selected point marker per
//! intersection in the working container. The current container is never
//! mutated; `clear` removes exactly the markers the finder created.

use drawkit_geom::{
    line_intersects_ellipse, line_intersects_line, line_intersects_rect, Line2, Point2, EPSILON,
};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::container::ShapeId;
use crate::context::EditContext;
use crate::error::FinderError;
use crate::model::{Geometry, GeometryKind, ShapeNode};

/// Settings shared by all intersection finders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct IntersectionSettings {
    pub is_enabled: bool,
}

impl Default for IntersectionSettings {
    fn default() -> Self {
        Self { is_enabled: true }
    }
}

/// Finds intersections between a source line and target shapes, marking each
/// hit with a transient point shape.
pub trait IntersectionFinder {
    /// Runs the finder for the line shape `shape_id` in the current
    /// container. Returns the number of markers created.
    fn find(&mut self, ctx: &mut EditContext, shape_id: ShapeId) -> Result<usize, FinderError>;

    /// Removes every marker this finder created. Idempotent.
    fn clear(&mut self, ctx: &mut EditContext);
}

/// Resolves the finder's source shape to a segment.
///
/// A missing shape is a caller wiring bug; missing points merely mean the
/// shape is not resolvable right now and yield no segment.
fn source_line(ctx: &EditContext, shape_id: ShapeId) -> Result<Option<Line2>, FinderError> {
    let shape = ctx
        .current
        .get(shape_id)
        .ok_or(FinderError::ShapeNotFound { id: shape_id })?;
    match &shape.node.geometry {
        Geometry::Line(s) => Ok(s.resolve(&ctx.points)),
        other => Err(FinderError::InvalidShapeKind {
            expected: GeometryKind::Line,
            actual: other.kind(),
        }),
    }
}

/// Appends `hit` unless an equal point is already present.
fn push_unique(hits: &mut Vec<Point2>, hit: Point2) {
    if !hits.iter().any(|p| p.distance_to(&hit) < EPSILON) {
        hits.push(hit);
    }
}

/// Materializes one selected point marker per hit in the working container.
fn mark_hits(ctx: &mut EditContext, hits: Vec<Point2>, markers: &mut Vec<ShapeId>) -> usize {
    let count = hits.len();
    for hit in hits {
        let pid = ctx.points.alloc(hit.x, hit.y, ctx.point_template);
        let sid = ctx.add_working_shape(ShapeNode::new(Geometry::Point(pid)));
        ctx.selection.select_shape(sid);
        ctx.selection.select_point(pid);
        markers.push(sid);
    }
    count
}

/// Removes tracked markers, releasing their points and selection entries.
fn clear_markers(ctx: &mut EditContext, markers: &mut Vec<ShapeId>) {
    debug!(count = markers.len(), "clear intersection markers");
    for id in markers.drain(..) {
        ctx.remove_working_shape(id);
    }
}

/// Marks crossings between the source line and every other line shape.
#[derive(Debug, Default)]
pub struct LineLineIntersections {
    pub settings: IntersectionSettings,
    markers: Vec<ShapeId>,
}

impl LineLineIntersections {
    pub fn new(settings: IntersectionSettings) -> Self {
        Self {
            settings,
            markers: Vec::new(),
        }
    }
}

impl IntersectionFinder for LineLineIntersections {
    fn find(&mut self, ctx: &mut EditContext, shape_id: ShapeId) -> Result<usize, FinderError> {
        if !self.settings.is_enabled {
            return Ok(0);
        }
        let Some(line) = source_line(ctx, shape_id)? else {
            return Ok(0);
        };

        let mut hits = Vec::new();
        for shape in ctx.current.shapes() {
            if shape.id == shape_id {
                continue;
            }
            let Geometry::Line(other) = &shape.node.geometry else {
                continue;
            };
            let Some(target) = other.resolve(&ctx.points) else {
                continue;
            };
            if let Some(hit) = line_intersects_line(line.a, line.b, target.a, target.b) {
                push_unique(&mut hits, hit);
            }
        }

        debug!(?shape_id, count = hits.len(), "line-line intersections");
        Ok(mark_hits(ctx, hits, &mut self.markers))
    }

    fn clear(&mut self, ctx: &mut EditContext) {
        clear_markers(ctx, &mut self.markers);
    }
}

/// Marks where the source line enters and leaves each rectangle shape.
#[derive(Debug, Default)]
pub struct LineRectangleIntersections {
    pub settings: IntersectionSettings,
    markers: Vec<ShapeId>,
}

impl LineRectangleIntersections {
    pub fn new(settings: IntersectionSettings) -> Self {
        Self {
            settings,
            markers: Vec::new(),
        }
    }
}

impl IntersectionFinder for LineRectangleIntersections {
    fn find(&mut self, ctx: &mut EditContext, shape_id: ShapeId) -> Result<usize, FinderError> {
        if !self.settings.is_enabled {
            return Ok(0);
        }
        let Some(line) = source_line(ctx, shape_id)? else {
            return Ok(0);
        };

        let mut hits = Vec::new();
        for shape in ctx.current.shapes() {
            if shape.id == shape_id {
                continue;
            }
            let Geometry::Rectangle(other) = &shape.node.geometry else {
                continue;
            };
            let Some(rect) = other.resolve(&ctx.points) else {
                continue;
            };
            if let Some((entry, exit)) = line_intersects_rect(line.a, line.b, &rect) {
                push_unique(&mut hits, entry);
                push_unique(&mut hits, exit);
            }
        }

        debug!(?shape_id, count = hits.len(), "line-rectangle intersections");
        Ok(mark_hits(ctx, hits, &mut self.markers))
    }

    fn clear(&mut self, ctx: &mut EditContext) {
        clear_markers(ctx, &mut self.markers);
    }
}

/// Marks where the source line crosses the boundary of each ellipse shape.
#[derive(Debug, Default)]
pub struct LineEllipseIntersections {
    pub settings: IntersectionSettings,
    markers: Vec<ShapeId>,
}

impl LineEllipseIntersections {
    pub fn new(settings: IntersectionSettings) -> Self {
        Self {
            settings,
            markers: Vec::new(),
        }
    }
}

impl IntersectionFinder for LineEllipseIntersections {
    fn find(&mut self, ctx: &mut EditContext, shape_id: ShapeId) -> Result<usize, FinderError> {
        if !self.settings.is_enabled {
            return Ok(0);
        }
        let Some(line) = source_line(ctx, shape_id)? else {
            return Ok(0);
        };

        let mut hits = Vec::new();
        for shape in ctx.current.shapes() {
            if shape.id == shape_id {
                continue;
            }
            let Geometry::Ellipse(other) = &shape.node.geometry else {
                continue;
            };
            let Some(rect) = other.resolve(&ctx.points) else {
                continue;
            };
            for hit in line_intersects_ellipse(line.a, line.b, &rect) {
                push_unique(&mut hits, hit);
            }
        }

        debug!(?shape_id, count = hits.len(), "line-ellipse intersections");
        Ok(mark_hits(ctx, hits, &mut self.markers))
    }

    fn clear(&mut self, ctx: &mut EditContext) {
        clear_markers(ctx, &mut self.markers);
    }
}
