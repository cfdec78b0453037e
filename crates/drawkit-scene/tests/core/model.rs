use std::collections::HashSet;

use drawkit_geom::Point2;
use drawkit_scene::{
    EditContext, Geometry, LineShape, PointArena, PointId, ScribbleShape, SelectionSet, ShapeId,
    ShapeNode, StyleId,
};

fn add_line(ctx: &mut EditContext, a: PointId, b: PointId) -> ShapeId {
    ctx.add_shape(ShapeNode::new(Geometry::Line(LineShape::new(a, b))))
}

#[test]
fn test_point_owner_counting() {
    let mut ctx = EditContext::new(100.0, 100.0);
    let id = ctx.points.alloc(1.0, 2.0, None);
    assert_eq!(ctx.points.owners(id), 1);

    ctx.points.acquire(id);
    assert_eq!(ctx.points.owners(id), 2);

    assert!(!ctx.points.release(id));
    assert!(ctx.points.release(id));
    assert!(ctx.points.get(id).is_none());
}

#[test]
fn test_shared_point_connects_lines() {
    let mut ctx = EditContext::new(100.0, 100.0);
    let a = ctx.points.alloc(0.0, 0.0, None);
    let b = ctx.points.alloc(10.0, 0.0, None);
    let c = ctx.points.alloc(20.0, 0.0, None);
    ctx.points.acquire(b);
    let first = add_line(&mut ctx, a, b);
    let second = add_line(&mut ctx, b, c);

    ctx.points.translate(b, 0.0, 5.0);

    let first = match &ctx.current.get(first).unwrap().node.geometry {
        Geometry::Line(s) => s.resolve(&ctx.points).unwrap(),
        _ => unreachable!(),
    };
    let second = match &ctx.current.get(second).unwrap().node.geometry {
        Geometry::Line(s) => s.resolve(&ctx.points).unwrap(),
        _ => unreachable!(),
    };
    assert_eq!(first.b, Point2::new(10.0, 5.0));
    assert_eq!(second.a, Point2::new(10.0, 5.0));
}

#[test]
fn test_move_selected_translates_shared_point_once() {
    let mut ctx = EditContext::new(100.0, 100.0);
    let a = ctx.points.alloc(0.0, 0.0, None);
    let b = ctx.points.alloc(10.0, 0.0, None);
    let c = ctx.points.alloc(20.0, 0.0, None);
    ctx.points.acquire(b);
    let first = add_line(&mut ctx, a, b);
    let second = add_line(&mut ctx, b, c);

    ctx.selection.select_shape(first);
    ctx.selection.select_shape(second);
    ctx.move_selected(5.0, 3.0);

    assert_eq!(ctx.points.position(a).unwrap(), Point2::new(5.0, 3.0));
    assert_eq!(ctx.points.position(b).unwrap(), Point2::new(15.0, 3.0));
    assert_eq!(ctx.points.position(c).unwrap(), Point2::new(25.0, 3.0));
}

#[test]
fn test_move_selected_with_selected_points() {
    let mut ctx = EditContext::new(100.0, 100.0);
    let a = ctx.points.alloc(0.0, 0.0, None);
    let b = ctx.points.alloc(10.0, 0.0, None);
    let id = add_line(&mut ctx, a, b);

    ctx.current.get(id).unwrap().select(&mut ctx.selection);
    assert!(ctx.selection.contains_shape(id));
    assert!(ctx.selection.contains_point(a));
    assert!(ctx.selection.contains_point(b));

    ctx.move_selected(1.0, 1.0);

    assert_eq!(ctx.points.position(a).unwrap(), Point2::new(1.0, 1.0));
    assert_eq!(ctx.points.position(b).unwrap(), Point2::new(11.0, 1.0));
}

#[test]
fn test_move_selected_empty_selection_is_noop() {
    let mut ctx = EditContext::new(100.0, 100.0);
    let a = ctx.points.alloc(0.0, 0.0, None);
    let b = ctx.points.alloc(10.0, 0.0, None);
    add_line(&mut ctx, a, b);

    ctx.move_selected(5.0, 5.0);

    assert_eq!(ctx.points.position(a).unwrap(), Point2::new(0.0, 0.0));
}

#[test]
fn test_move_by_skips_already_moved_points() {
    let mut points = PointArena::new();
    let a = points.alloc(0.0, 0.0, None);
    let b = points.alloc(10.0, 0.0, None);
    let c = points.alloc(20.0, 0.0, None);
    points.acquire(b);
    let first = ShapeNode::new(Geometry::Line(LineShape::new(a, b)));
    let second = ShapeNode::new(Geometry::Line(LineShape::new(b, c)));

    let selection = SelectionSet::new();
    let mut moved: HashSet<PointId> = HashSet::new();
    first.move_by(&mut points, &selection, 5.0, 0.0, &mut moved);
    second.move_by(&mut points, &selection, 5.0, 0.0, &mut moved);

    // The shared point translates once across both shapes.
    assert_eq!(points.position(a).unwrap(), Point2::new(5.0, 0.0));
    assert_eq!(points.position(b).unwrap(), Point2::new(15.0, 0.0));
    assert_eq!(points.position(c).unwrap(), Point2::new(25.0, 0.0));
    assert_eq!(moved.len(), 3);
}

#[test]
fn test_move_by_excludes_selected_points() {
    let mut points = PointArena::new();
    let a = points.alloc(0.0, 0.0, None);
    let b = points.alloc(10.0, 0.0, None);
    let node = ShapeNode::new(Geometry::Line(LineShape::new(a, b)));

    let mut selection = SelectionSet::new();
    selection.select_point(b);
    let mut moved: HashSet<PointId> = HashSet::new();
    node.move_by(&mut points, &selection, 5.0, 0.0, &mut moved);

    // The selected point is left for its own move.
    assert_eq!(points.position(a).unwrap(), Point2::new(5.0, 0.0));
    assert_eq!(points.position(b).unwrap(), Point2::new(10.0, 0.0));
    assert!(!moved.contains(&b));
}

#[test]
fn test_remove_shape_keeps_shared_point_alive() {
    let mut ctx = EditContext::new(100.0, 100.0);
    let a = ctx.points.alloc(0.0, 0.0, None);
    let b = ctx.points.alloc(10.0, 0.0, None);
    let c = ctx.points.alloc(20.0, 0.0, None);
    ctx.points.acquire(b);
    let first = add_line(&mut ctx, a, b);
    let second = add_line(&mut ctx, b, c);

    assert!(ctx.remove_shape(first));
    assert!(ctx.points.get(a).is_none());
    assert!(ctx.points.get(b).is_some());

    assert!(ctx.remove_shape(second));
    assert!(ctx.points.get(b).is_none());
    assert!(ctx.points.get(c).is_none());
}

#[test]
fn test_remove_shape_deselects_dropped_points_only() {
    let mut ctx = EditContext::new(100.0, 100.0);
    let a = ctx.points.alloc(0.0, 0.0, None);
    let b = ctx.points.alloc(10.0, 0.0, None);
    let c = ctx.points.alloc(20.0, 0.0, None);
    ctx.points.acquire(b);
    let first = add_line(&mut ctx, a, b);
    add_line(&mut ctx, b, c);

    ctx.selection.select_point(a);
    ctx.selection.select_point(b);
    ctx.remove_shape(first);

    // a was dropped and leaves the selection; b still has an owner.
    assert!(!ctx.selection.contains_point(a));
    assert!(ctx.selection.contains_point(b));
}

#[test]
fn test_shape_bounds() {
    let mut ctx = EditContext::new(100.0, 100.0);
    let a = ctx.points.alloc(10.0, 20.0, None);
    let b = ctx.points.alloc(4.0, 8.0, None);
    let id = add_line(&mut ctx, a, b);

    let bounds = ctx.current.get(id).unwrap().bounds(&ctx.points).unwrap();
    assert_eq!(bounds.x, 4.0);
    assert_eq!(bounds.y, 8.0);
    assert_eq!(bounds.width, 6.0);
    assert_eq!(bounds.height, 12.0);
}

#[test]
fn test_invalidate_consumes_dirty_bit() {
    let mut ctx = EditContext::new(100.0, 100.0);
    let a = ctx.points.alloc(0.0, 0.0, None);
    let b = ctx.points.alloc(10.0, 0.0, None);
    let id = add_line(&mut ctx, a, b);

    let shape = ctx.current.get_mut(id).unwrap();
    assert!(!shape.node.invalidate());

    shape.node.set_style(Some(StyleId(7)));
    assert!(shape.node.invalidate());
    assert!(!shape.node.invalidate());
}

#[test]
fn test_scribble_simplify_releases_points() {
    let mut ctx = EditContext::new(100.0, 100.0);
    let ids: Vec<_> = [0.0, 1.0, 10.0, 10.5, 20.0]
        .iter()
        .map(|x| ctx.points.alloc(*x, 0.0, None))
        .collect();
    let mut scribble = ScribbleShape::new(ids.clone());

    let removed = scribble.simplify(&mut ctx.points, 2.0);

    assert_eq!(removed, 2);
    assert_eq!(scribble.points, vec![ids[0], ids[2], ids[4]]);
    assert!(ctx.points.get(ids[1]).is_none());
    assert!(ctx.points.get(ids[3]).is_none());
}

#[test]
fn test_scribble_simplify_keeps_endpoints() {
    let mut ctx = EditContext::new(100.0, 100.0);
    let ids: Vec<_> = [0.0, 0.1, 0.2]
        .iter()
        .map(|x| ctx.points.alloc(*x, 0.0, None))
        .collect();
    let mut scribble = ScribbleShape::new(ids.clone());

    scribble.simplify(&mut ctx.points, 5.0);

    assert_eq!(scribble.points, vec![ids[0], ids[2]]);
}
