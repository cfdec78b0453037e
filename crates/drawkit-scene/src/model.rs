//! Shape model: a closed set of geometry variants over shared points.
//!
//! `Geometry` is the tagged union of every drawable variant; `ShapeNode`
//! wraps a geometry with the common fields every shape carries (opaque style
//! reference, optional affine transform, dirty bit). Composite variants
//! (figures, paths, groups) own their children as nested `ShapeNode`s.
//!
//! Shapes are passive data holders manipulated by tools; the only shape-local
//! state is point-reference sharing, maintained through the [`PointArena`].

mod bezier;
mod ellipse;
mod group;
mod line;
mod path;
mod rectangle;
mod scribble;
mod text;

pub use bezier::{CubicBezierShape, QuadraticBezierShape};
pub use ellipse::EllipseShape;
pub use group::GroupShape;
pub use line::LineShape;
pub use path::{FigureShape, PathShape};
pub use rectangle::RectangleShape;
pub use scribble::ScribbleShape;
pub use text::TextShape;

use std::collections::HashSet;

use drawkit_geom::{Matrix2, Point2, Rect2};
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::points::{PointArena, PointId};
use crate::renderer::{PathOutline, PathVerb, ShapeRenderer};
use crate::selection::SelectionSet;
use crate::style::StyleId;

/// Control-point buffer sized for the common variants.
pub type PointIdBuf = SmallVec<[PointId; 8]>;

/// Variant tag of a [`Geometry`]. Used as the hit-test registry key and in
/// error payloads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GeometryKind {
    Point,
    Line,
    CubicBezier,
    QuadraticBezier,
    Rectangle,
    Ellipse,
    Text,
    Scribble,
    Figure,
    Path,
    Group,
}

/// Closed sum type over all shape variants.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Geometry {
    Point(PointId),
    Line(LineShape),
    CubicBezier(CubicBezierShape),
    QuadraticBezier(QuadraticBezierShape),
    Rectangle(RectangleShape),
    Ellipse(EllipseShape),
    Text(TextShape),
    Scribble(ScribbleShape),
    Figure(FigureShape),
    Path(PathShape),
    Group(GroupShape),
}

impl Geometry {
    pub fn kind(&self) -> GeometryKind {
        match self {
            Geometry::Point(_) => GeometryKind::Point,
            Geometry::Line(_) => GeometryKind::Line,
            Geometry::CubicBezier(_) => GeometryKind::CubicBezier,
            Geometry::QuadraticBezier(_) => GeometryKind::QuadraticBezier,
            Geometry::Rectangle(_) => GeometryKind::Rectangle,
            Geometry::Ellipse(_) => GeometryKind::Ellipse,
            Geometry::Text(_) => GeometryKind::Text,
            Geometry::Scribble(_) => GeometryKind::Scribble,
            Geometry::Figure(_) => GeometryKind::Figure,
            Geometry::Path(_) => GeometryKind::Path,
            Geometry::Group(_) => GeometryKind::Group,
        }
    }

    /// Appends the point references this geometry uses, in a stable,
    /// deterministic order. Downstream hit-testing and bounds computation
    /// depend on this order.
    pub fn point_ids(&self, out: &mut PointIdBuf) {
        match self {
            Geometry::Point(id) => out.push(*id),
            Geometry::Line(s) => {
                out.push(s.start);
                out.push(s.end);
            }
            Geometry::CubicBezier(s) => {
                out.push(s.start);
                out.push(s.point1);
                out.push(s.point2);
                out.push(s.point3);
            }
            Geometry::QuadraticBezier(s) => {
                out.push(s.start);
                out.push(s.point1);
                out.push(s.point2);
            }
            Geometry::Rectangle(s) => {
                out.push(s.top_left);
                out.push(s.bottom_right);
            }
            Geometry::Ellipse(s) => {
                out.push(s.top_left);
                out.push(s.bottom_right);
            }
            Geometry::Text(s) => {
                out.push(s.top_left);
                out.push(s.bottom_right);
            }
            Geometry::Scribble(s) => out.extend(s.points.iter().copied()),
            Geometry::Figure(s) => {
                for segment in &s.segments {
                    segment.geometry.point_ids(out);
                }
            }
            Geometry::Path(s) => {
                for figure in &s.figures {
                    for segment in &figure.segments {
                        segment.geometry.point_ids(out);
                    }
                }
            }
            Geometry::Group(s) => {
                for child in &s.shapes {
                    child.geometry.point_ids(out);
                }
            }
        }
    }

    /// Bounding box of the control points this geometry resolves to, or
    /// `None` when no referenced point is present in the arena.
    pub fn bounds(&self, points: &PointArena) -> Option<Rect2> {
        let mut ids = PointIdBuf::new();
        self.point_ids(&mut ids);

        let mut positions = ids.iter().filter_map(|id| points.position(*id));
        let first = positions.next()?;
        let mut min = first;
        let mut max = first;
        for p in positions {
            min = Point2::new(min.x.min(p.x), min.y.min(p.y));
            max = Point2::new(max.x.max(p.x), max.y.max(p.y));
        }
        Some(Rect2::from_points(min, max, 0.0, 0.0))
    }

    /// Delegates drawing to the renderer contract, one call per variant.
    pub fn draw<R: ShapeRenderer>(
        &self,
        points: &PointArena,
        renderer: &mut R,
        style: Option<StyleId>,
        dx: f64,
        dy: f64,
    ) {
        match self {
            Geometry::Point(id) => {
                if let Some(p) = points.get(*id) {
                    renderer.draw_point(p.position, p.template, dx, dy);
                }
            }
            Geometry::Line(s) => {
                if let Some(line) = s.resolve(points) {
                    renderer.draw_line(&line, style, dx, dy);
                }
            }
            Geometry::CubicBezier(s) => {
                if let Some(pts) = s.resolve(points) {
                    renderer.draw_cubic_bezier(&pts, style, dx, dy);
                }
            }
            Geometry::QuadraticBezier(s) => {
                if let Some(pts) = s.resolve(points) {
                    renderer.draw_quadratic_bezier(&pts, style, dx, dy);
                }
            }
            Geometry::Rectangle(s) => {
                if let Some(rect) = s.resolve(points) {
                    renderer.draw_rectangle(&rect, style, dx, dy);
                }
            }
            Geometry::Ellipse(s) => {
                if let Some(rect) = s.resolve(points) {
                    renderer.draw_ellipse(&rect, style, dx, dy);
                }
            }
            Geometry::Text(s) => {
                if let Some(rect) = s.resolve(points) {
                    renderer.draw_text(&rect, &s.text, style, dx, dy);
                }
            }
            Geometry::Scribble(s) => {
                let outline = scribble_outline(s, points);
                if !outline.verbs.is_empty() {
                    renderer.draw_path(&outline, style, dx, dy);
                }
            }
            Geometry::Figure(s) => {
                let outline = outline_from_figures(std::slice::from_ref(s), points);
                if !outline.verbs.is_empty() {
                    renderer.draw_path(&outline, style, dx, dy);
                }
            }
            Geometry::Path(s) => {
                let outline = outline_from_figures(&s.figures, points);
                if !outline.verbs.is_empty() {
                    renderer.draw_path(&outline, style, dx, dy);
                }
            }
            Geometry::Group(s) => {
                for child in &s.shapes {
                    child.draw(points, renderer, dx, dy);
                }
            }
        }
    }

    fn invalidate_children(&mut self) -> bool {
        match self {
            Geometry::Figure(s) => {
                let mut any = false;
                for segment in &mut s.segments {
                    any |= segment.invalidate();
                }
                any
            }
            Geometry::Path(s) => {
                let mut any = false;
                for figure in &mut s.figures {
                    for segment in &mut figure.segments {
                        any |= segment.invalidate();
                    }
                }
                any
            }
            Geometry::Group(s) => {
                let mut any = false;
                for child in &mut s.shapes {
                    any |= child.invalidate();
                }
                any
            }
            _ => false,
        }
    }
}

/// A shape value: geometry plus the common fields every shape carries.
///
/// The style is an externally owned reference; the transform is exclusively
/// owned by the shape and applied before drawing and hit-testing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShapeNode {
    pub geometry: Geometry,
    #[serde(default)]
    pub style: Option<StyleId>,
    #[serde(default)]
    pub transform: Option<Matrix2>,
    #[serde(skip)]
    dirty: bool,
}

impl ShapeNode {
    pub fn new(geometry: Geometry) -> Self {
        Self {
            geometry,
            style: None,
            transform: None,
            dirty: false,
        }
    }

    pub fn with_style(mut self, style: StyleId) -> Self {
        self.style = Some(style);
        self
    }

    pub fn with_transform(mut self, transform: Matrix2) -> Self {
        self.transform = Some(transform);
        self
    }

    /// Replaces the style reference and marks the shape dirty.
    pub fn set_style(&mut self, style: Option<StyleId>) {
        self.style = style;
        self.dirty = true;
    }

    /// Replaces the transform and marks the shape dirty.
    pub fn set_transform(&mut self, transform: Option<Matrix2>) {
        self.transform = transform;
        self.dirty = true;
    }

    /// Consumes the dirty bit of this shape and its children. Returns whether
    /// anything was invalidated; the caller uses this to bust renderer caches.
    pub fn invalidate(&mut self) -> bool {
        let mut any = std::mem::take(&mut self.dirty);
        any |= self.geometry.invalidate_children();
        any
    }

    pub fn point_ids(&self, out: &mut PointIdBuf) {
        self.geometry.point_ids(out);
    }

    pub fn bounds(&self, points: &PointArena) -> Option<Rect2> {
        self.geometry.bounds(points)
    }

    /// Translates this shape's points by `(dx, dy)`.
    ///
    /// Points already present in `moved` or in the selection's point set are
    /// skipped, so a point shared by several shapes in one drag is never
    /// translated twice and selected points keep their own move.
    pub fn move_by(
        &self,
        points: &mut PointArena,
        selection: &SelectionSet,
        dx: f64,
        dy: f64,
        moved: &mut HashSet<PointId>,
    ) {
        let mut ids = PointIdBuf::new();
        self.point_ids(&mut ids);
        for id in ids {
            if selection.contains_point(id) {
                continue;
            }
            if moved.insert(id) {
                points.translate(id, dx, dy);
            }
        }
    }

    /// Draws this shape, pushing its transform around the renderer call when
    /// one is set.
    pub fn draw<R: ShapeRenderer>(&self, points: &PointArena, renderer: &mut R, dx: f64, dy: f64) {
        let pushed = match &self.transform {
            Some(t) if !t.is_identity() => {
                renderer.push_matrix(t);
                true
            }
            _ => false,
        };
        self.geometry.draw(points, renderer, self.style, dx, dy);
        if pushed {
            renderer.pop_matrix();
        }
    }
}

fn segment_start(geometry: &Geometry) -> Option<PointId> {
    match geometry {
        Geometry::Line(s) => Some(s.start),
        Geometry::CubicBezier(s) => Some(s.start),
        Geometry::QuadraticBezier(s) => Some(s.start),
        _ => None,
    }
}

/// Builds a renderable outline from an ordered list of figures.
pub fn outline_from_figures(figures: &[FigureShape], points: &PointArena) -> PathOutline {
    let mut verbs = Vec::new();
    for figure in figures {
        let mut started = false;
        for segment in &figure.segments {
            if !started {
                let Some(start) = segment_start(&segment.geometry).and_then(|id| points.position(id))
                else {
                    continue;
                };
                verbs.push(PathVerb::MoveTo(start));
                started = true;
            }
            match &segment.geometry {
                Geometry::Line(s) => {
                    if let Some(p) = points.position(s.end) {
                        verbs.push(PathVerb::LineTo(p));
                    }
                }
                Geometry::CubicBezier(s) => {
                    if let (Some(p1), Some(p2), Some(p3)) = (
                        points.position(s.point1),
                        points.position(s.point2),
                        points.position(s.point3),
                    ) {
                        verbs.push(PathVerb::CubicTo(p1, p2, p3));
                    }
                }
                Geometry::QuadraticBezier(s) => {
                    if let (Some(p1), Some(p2)) =
                        (points.position(s.point1), points.position(s.point2))
                    {
                        verbs.push(PathVerb::QuadTo(p1, p2));
                    }
                }
                _ => {}
            }
        }
        if started && figure.is_closed {
            verbs.push(PathVerb::Close);
        }
    }
    PathOutline {
        verbs,
        is_filled: figures.iter().any(|f| f.is_filled),
    }
}

fn scribble_outline(scribble: &ScribbleShape, points: &PointArena) -> PathOutline {
    let mut verbs = Vec::new();
    let mut started = false;
    for id in &scribble.points {
        let Some(p) = points.position(*id) else {
            continue;
        };
        if started {
            verbs.push(PathVerb::LineTo(p));
        } else {
            verbs.push(PathVerb::MoveTo(p));
            started = true;
        }
    }
    PathOutline {
        verbs,
        is_filled: false,
    }
}
