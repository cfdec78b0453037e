use drawkit_scene::{
    EditContext, Geometry, GeometryKind, LineShape, SceneShape, SelectionSet, ShapeContainer,
    ShapeId, ShapeNode,
};

fn line_shape(ctx: &mut EditContext, x1: f64, y1: f64, x2: f64, y2: f64) -> ShapeNode {
    let a = ctx.points.alloc(x1, y1, None);
    let b = ctx.points.alloc(x2, y2, None);
    ShapeNode::new(Geometry::Line(LineShape::new(a, b)))
}

#[test]
fn test_insert_preserves_order() {
    let mut ctx = EditContext::new(100.0, 100.0);
    let first = line_shape(&mut ctx, 0.0, 0.0, 1.0, 1.0);
    let second = line_shape(&mut ctx, 2.0, 2.0, 3.0, 3.0);
    let a = ctx.add_shape(first);
    let b = ctx.add_shape(second);

    let ids: Vec<ShapeId> = ctx.current.shapes().iter().map(|s| s.id).collect();
    assert_eq!(ids, vec![a, b]);
}

#[test]
fn test_remove_preserves_order_of_rest() {
    let mut container = ShapeContainer::new(100.0, 100.0);
    let mut ctx = EditContext::new(100.0, 100.0);
    for i in 0..3 {
        let node = line_shape(&mut ctx, i as f64, 0.0, i as f64, 1.0);
        container.insert(SceneShape::new(ShapeId(i + 1), node));
    }

    let removed = container.remove(ShapeId(2)).unwrap();
    assert_eq!(removed.id, ShapeId(2));
    let ids: Vec<ShapeId> = container.shapes().iter().map(|s| s.id).collect();
    assert_eq!(ids, vec![ShapeId(1), ShapeId(3)]);
    assert!(container.remove(ShapeId(2)).is_none());
}

#[test]
fn test_guides_are_independent_of_shapes() {
    let mut ctx = EditContext::new(100.0, 100.0);
    let shape = line_shape(&mut ctx, 0.0, 0.0, 1.0, 1.0);
    let guide = line_shape(&mut ctx, 0.0, 50.0, 100.0, 50.0);
    ctx.add_shape(shape);
    let guide_id = ctx.add_working_guide(guide);

    assert_eq!(ctx.current.len(), 1);
    assert_eq!(ctx.working.guides().len(), 1);
    assert!(ctx.working.is_empty());

    assert!(ctx.remove_working_guide(guide_id));
    assert!(ctx.working.guides().is_empty());
}

#[test]
fn test_commit_working_shape_keeps_id() {
    let mut ctx = EditContext::new(100.0, 100.0);
    let node = line_shape(&mut ctx, 0.0, 0.0, 1.0, 1.0);
    let id = ctx.add_working_shape(node);
    assert_eq!(ctx.working.len(), 1);

    assert_eq!(ctx.commit_working_shape(id), Some(id));
    assert!(ctx.working.is_empty());
    assert_eq!(ctx.current.get(id).unwrap().id, id);

    assert_eq!(ctx.commit_working_shape(id), None);
}

#[test]
fn test_select_deselect_idempotent() {
    let mut ctx = EditContext::new(100.0, 100.0);
    let node = line_shape(&mut ctx, 0.0, 0.0, 1.0, 1.0);
    let id = ctx.add_shape(node);

    let mut selection = SelectionSet::new();
    let shape = ctx.current.get(id).unwrap();
    shape.select(&mut selection);
    shape.select(&mut selection);
    assert_eq!(selection.shape_count(), 1);
    assert_eq!(selection.point_count(), 2);

    shape.deselect(&mut selection);
    shape.deselect(&mut selection);
    assert!(selection.is_empty());
}

#[test]
fn test_shape_kind() {
    let mut ctx = EditContext::new(100.0, 100.0);
    let node = line_shape(&mut ctx, 0.0, 0.0, 1.0, 1.0);
    let id = ctx.add_shape(node);
    assert_eq!(ctx.current.get(id).unwrap().kind(), GeometryKind::Line);
}

#[test]
fn test_generated_shape_ids_are_unique() {
    let mut ctx = EditContext::new(100.0, 100.0);
    let a = ctx.generate_shape_id();
    let b = ctx.generate_shape_id();
    assert_ne!(a, b);
}
