use drawkit_geom::Point2;
use drawkit_scene::{
    EditContext, EllipseShape, FinderError, Geometry, GeometryKind, IntersectionFinder,
    IntersectionSettings, LineEllipseIntersections, LineLineIntersections,
    LineRectangleIntersections, LineShape, RectangleShape, ShapeId, ShapeNode,
};

fn add_line(ctx: &mut EditContext, x1: f64, y1: f64, x2: f64, y2: f64) -> ShapeId {
    let a = ctx.points.alloc(x1, y1, None);
    let b = ctx.points.alloc(x2, y2, None);
    ctx.add_shape(ShapeNode::new(Geometry::Line(LineShape::new(a, b))))
}

fn add_rect(ctx: &mut EditContext, x1: f64, y1: f64, x2: f64, y2: f64) -> ShapeId {
    let a = ctx.points.alloc(x1, y1, None);
    let b = ctx.points.alloc(x2, y2, None);
    ctx.add_shape(ShapeNode::new(Geometry::Rectangle(RectangleShape::new(
        a, b,
    ))))
}

fn add_ellipse(ctx: &mut EditContext, x1: f64, y1: f64, x2: f64, y2: f64) -> ShapeId {
    let a = ctx.points.alloc(x1, y1, None);
    let b = ctx.points.alloc(x2, y2, None);
    ctx.add_shape(ShapeNode::new(Geometry::Ellipse(EllipseShape::new(a, b))))
}

fn marker_positions(ctx: &EditContext) -> Vec<Point2> {
    let mut positions: Vec<Point2> = ctx
        .working
        .shapes()
        .iter()
        .filter_map(|s| match &s.node.geometry {
            Geometry::Point(id) => ctx.points.position(*id),
            _ => None,
        })
        .collect();
    positions.sort_by(|p, q| p.cmp_xy(q));
    positions
}

#[test]
fn test_line_line_finder_marks_crossing() {
    let mut ctx = EditContext::new(100.0, 100.0);
    let source = add_line(&mut ctx, 0.0, 0.0, 10.0, 10.0);
    add_line(&mut ctx, 0.0, 10.0, 10.0, 0.0);

    let mut finder = LineLineIntersections::default();
    let count = finder.find(&mut ctx, source).unwrap();

    assert_eq!(count, 1);
    assert_eq!(marker_positions(&ctx), vec![Point2::new(5.0, 5.0)]);

    // The marker and its point are selected; the current container is
    // untouched.
    let marker = ctx.working.shapes()[0].id;
    assert!(ctx.selection.contains_shape(marker));
    assert_eq!(ctx.selection.point_count(), 1);
    assert_eq!(ctx.current.len(), 2);
}

#[test]
fn test_finder_clear_removes_exactly_its_markers() {
    let mut ctx = EditContext::new(100.0, 100.0);
    let source = add_line(&mut ctx, 0.0, 0.0, 10.0, 10.0);
    add_line(&mut ctx, 0.0, 10.0, 10.0, 0.0);
    let points_before = ctx.points.len();

    let mut finder = LineLineIntersections::default();
    finder.find(&mut ctx, source).unwrap();
    assert_eq!(ctx.working.len(), 1);

    finder.clear(&mut ctx);
    assert!(ctx.working.is_empty());
    assert!(ctx.selection.is_empty());
    assert_eq!(ctx.points.len(), points_before);

    // Clearing again is a no-op.
    finder.clear(&mut ctx);
    assert!(ctx.working.is_empty());
}

#[test]
fn test_finder_rejects_non_line_source() {
    let mut ctx = EditContext::new(100.0, 100.0);
    let source = add_rect(&mut ctx, 0.0, 0.0, 10.0, 10.0);

    let mut finder = LineLineIntersections::default();
    let result = finder.find(&mut ctx, source);
    assert_eq!(
        result,
        Err(FinderError::InvalidShapeKind {
            expected: GeometryKind::Line,
            actual: GeometryKind::Rectangle,
        })
    );
}

#[test]
fn test_finder_rejects_unknown_shape() {
    let mut ctx = EditContext::new(100.0, 100.0);
    let mut finder = LineLineIntersections::default();
    let missing = ShapeId(999);
    let result = finder.find(&mut ctx, missing);
    assert_eq!(result, Err(FinderError::ShapeNotFound { id: missing }));
}

#[test]
fn test_disabled_finder_finds_nothing() {
    let mut ctx = EditContext::new(100.0, 100.0);
    let source = add_line(&mut ctx, 0.0, 0.0, 10.0, 10.0);
    add_line(&mut ctx, 0.0, 10.0, 10.0, 0.0);

    let mut finder = LineLineIntersections::new(IntersectionSettings { is_enabled: false });
    assert_eq!(finder.find(&mut ctx, source).unwrap(), 0);
    assert!(ctx.working.is_empty());
}

#[test]
fn test_parallel_lines_find_nothing() {
    let mut ctx = EditContext::new(100.0, 100.0);
    let source = add_line(&mut ctx, 0.0, 0.0, 10.0, 0.0);
    add_line(&mut ctx, 0.0, 5.0, 10.0, 5.0);

    let mut finder = LineLineIntersections::default();
    assert_eq!(finder.find(&mut ctx, source).unwrap(), 0);
    assert!(ctx.working.is_empty());
}

#[test]
fn test_line_rectangle_finder_marks_clip_points() {
    let mut ctx = EditContext::new(100.0, 100.0);
    let source = add_line(&mut ctx, -5.0, 5.0, 15.0, 5.0);
    add_rect(&mut ctx, 0.0, 0.0, 10.0, 10.0);

    let mut finder = LineRectangleIntersections::default();
    let count = finder.find(&mut ctx, source).unwrap();

    assert_eq!(count, 2);
    assert_eq!(
        marker_positions(&ctx),
        vec![Point2::new(0.0, 5.0), Point2::new(10.0, 5.0)]
    );
}

#[test]
fn test_line_ellipse_finder_marks_boundary_crossings() {
    let mut ctx = EditContext::new(100.0, 100.0);
    let source = add_line(&mut ctx, -5.0, 5.0, 15.0, 5.0);
    add_ellipse(&mut ctx, 0.0, 0.0, 10.0, 10.0);

    let mut finder = LineEllipseIntersections::default();
    let count = finder.find(&mut ctx, source).unwrap();

    assert_eq!(count, 2);
    assert_eq!(
        marker_positions(&ctx),
        vec![Point2::new(0.0, 5.0), Point2::new(10.0, 5.0)]
    );
}

#[test]
fn test_finder_uses_point_template() {
    let mut ctx = EditContext::new(100.0, 100.0);
    ctx.point_template = Some(drawkit_scene::StyleId(3));
    let source = add_line(&mut ctx, 0.0, 0.0, 10.0, 10.0);
    add_line(&mut ctx, 0.0, 10.0, 10.0, 0.0);

    let mut finder = LineLineIntersections::default();
    finder.find(&mut ctx, source).unwrap();

    let Geometry::Point(id) = &ctx.working.shapes()[0].node.geometry else {
        panic!("expected a point marker");
    };
    assert_eq!(
        ctx.points.get(*id).unwrap().template,
        Some(drawkit_scene::StyleId(3))
    );
}
