//! Renderer contract consumed by shape drawing.
//!
//! Backends (Skia, a UI canvas, an SVG writer) implement [`ShapeRenderer`];
//! geometry code supplies resolved coordinates, the opaque style reference
//! and a translation offset, and never touches pixels itself. Selection
//! highlighting is driven by the caller's [`crate::SelectionSet`], not by
//! this contract.

use drawkit_geom::{Line2, Matrix2, Point2, Rect2};

use crate::style::StyleId;

/// One step of a resolved path outline.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PathVerb {
    MoveTo(Point2),
    LineTo(Point2),
    QuadTo(Point2, Point2),
    CubicTo(Point2, Point2, Point2),
    Close,
}

/// Resolved outline handed to [`ShapeRenderer::draw_path`].
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PathOutline {
    pub verbs: Vec<PathVerb>,
    pub is_filled: bool,
}

/// Drawing backend contract.
///
/// `push_matrix`/`pop_matrix` bracket a shape's transform; the renderer owns
/// the matrix stack. Each draw call receives geometry already resolved from
/// the point arena plus the `(dx, dy)` offset of the pass.
pub trait ShapeRenderer {
    fn push_matrix(&mut self, matrix: &Matrix2);
    fn pop_matrix(&mut self);

    fn draw_point(&mut self, point: Point2, template: Option<StyleId>, dx: f64, dy: f64);
    fn draw_line(&mut self, line: &Line2, style: Option<StyleId>, dx: f64, dy: f64);
    fn draw_cubic_bezier(&mut self, points: &[Point2; 4], style: Option<StyleId>, dx: f64, dy: f64);
    fn draw_quadratic_bezier(
        &mut self,
        points: &[Point2; 3],
        style: Option<StyleId>,
        dx: f64,
        dy: f64,
    );
    fn draw_rectangle(&mut self, rect: &Rect2, style: Option<StyleId>, dx: f64, dy: f64);
    fn draw_ellipse(&mut self, rect: &Rect2, style: Option<StyleId>, dx: f64, dy: f64);
    fn draw_text(&mut self, rect: &Rect2, text: &str, style: Option<StyleId>, dx: f64, dy: f64);
    fn draw_path(&mut self, outline: &PathOutline, style: Option<StyleId>, dx: f64, dy: f64);
}
