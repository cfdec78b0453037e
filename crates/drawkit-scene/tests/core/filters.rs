use drawkit_scene::{
    snap_grid, EditContext, Geometry, GridSnapFilter, GridSnapMode, GridSnapSettings, LineShape,
    LineSnapFilter, LineSnapMode, LineSnapSettings, LineSnapTarget, PointFilter, ShapeNode,
};

fn add_line(ctx: &mut EditContext, x1: f64, y1: f64, x2: f64, y2: f64) {
    let a = ctx.points.alloc(x1, y1, None);
    let b = ctx.points.alloc(x2, y2, None);
    ctx.add_shape(ShapeNode::new(Geometry::Line(LineShape::new(a, b))));
}

#[test]
fn test_snap_grid_rounds_to_nearest_multiple() {
    assert_eq!(snap_grid(7.0, 10.0), 10.0);
    assert_eq!(snap_grid(4.0, 10.0), 0.0);
    assert_eq!(snap_grid(5.0, 10.0), 10.0);
    assert_eq!(snap_grid(23.0, 10.0), 20.0);
    assert_eq!(snap_grid(30.0, 10.0), 30.0);
}

#[test]
fn test_snap_grid_ignores_non_positive_size() {
    assert_eq!(snap_grid(7.0, 0.0), 7.0);
    assert_eq!(snap_grid(7.0, -5.0), 7.0);
}

#[test]
fn test_grid_filter_snaps_both_axes() {
    let mut ctx = EditContext::new(100.0, 100.0);
    let mut filter = GridSnapFilter::new(GridSnapSettings {
        grid_size_x: 10.0,
        grid_size_y: 10.0,
        ..Default::default()
    });

    let mut x = 7.0;
    let mut y = 12.0;
    assert!(filter.process(&mut ctx, &mut x, &mut y));
    assert_eq!(x, 10.0);
    assert_eq!(y, 10.0);
}

#[test]
fn test_grid_filter_horizontal_only() {
    let mut ctx = EditContext::new(100.0, 100.0);
    let mut filter = GridSnapFilter::new(GridSnapSettings {
        mode: GridSnapMode::HORIZONTAL,
        grid_size_x: 10.0,
        grid_size_y: 10.0,
        ..Default::default()
    });

    let mut x = 7.0;
    let mut y = 12.0;
    assert!(filter.process(&mut ctx, &mut x, &mut y));
    assert_eq!(x, 10.0);
    assert_eq!(y, 12.0);
}

#[test]
fn test_grid_filter_already_on_grid_is_not_a_snap() {
    let mut ctx = EditContext::new(100.0, 100.0);
    let mut filter = GridSnapFilter::new(GridSnapSettings {
        grid_size_x: 10.0,
        grid_size_y: 10.0,
        guides_enabled: true,
        ..Default::default()
    });

    let mut x = 20.0;
    let mut y = 30.0;
    assert!(!filter.process(&mut ctx, &mut x, &mut y));
    assert!(ctx.working.guides().is_empty());
}

#[test]
fn test_grid_filter_guides_tracked_and_cleared() {
    let mut ctx = EditContext::new(100.0, 100.0);
    let mut filter = GridSnapFilter::new(GridSnapSettings {
        grid_size_x: 10.0,
        grid_size_y: 10.0,
        guides_enabled: true,
        ..Default::default()
    });

    let mut x = 7.0;
    let mut y = 12.0;
    assert!(filter.process(&mut ctx, &mut x, &mut y));
    assert_eq!(ctx.working.guides().len(), 2);

    filter.clear(&mut ctx);
    assert!(ctx.working.guides().is_empty());
    assert!(ctx.points.is_empty());

    filter.clear(&mut ctx);
    assert!(ctx.working.guides().is_empty());
}

#[test]
fn test_grid_filter_disabled() {
    let mut ctx = EditContext::new(100.0, 100.0);
    let mut filter = GridSnapFilter::new(GridSnapSettings {
        is_enabled: false,
        ..Default::default()
    });

    let mut x = 7.0;
    let mut y = 12.0;
    assert!(!filter.process(&mut ctx, &mut x, &mut y));
    assert_eq!(x, 7.0);
    assert_eq!(y, 12.0);
}

#[test]
fn test_line_snap_to_endpoint() {
    let mut ctx = EditContext::new(100.0, 100.0);
    add_line(&mut ctx, 0.0, 0.0, 50.0, 0.0);
    let mut filter = LineSnapFilter::new(LineSnapSettings {
        mode: LineSnapMode::POINT,
        threshold: 3.0,
        ..Default::default()
    });

    let mut x = 1.5;
    let mut y = 1.0;
    assert!(filter.process(&mut ctx, &mut x, &mut y));
    assert_eq!(x, 0.0);
    assert_eq!(y, 0.0);
}

#[test]
fn test_line_snap_to_midpoint() {
    let mut ctx = EditContext::new(100.0, 100.0);
    add_line(&mut ctx, 0.0, 0.0, 50.0, 0.0);
    let mut filter = LineSnapFilter::new(LineSnapSettings {
        mode: LineSnapMode::MIDDLE,
        threshold: 3.0,
        ..Default::default()
    });

    let mut x = 24.0;
    let mut y = 2.0;
    assert!(filter.process(&mut ctx, &mut x, &mut y));
    assert_eq!(x, 25.0);
    assert_eq!(y, 0.0);
}

#[test]
fn test_line_snap_to_nearest() {
    let mut ctx = EditContext::new(100.0, 100.0);
    add_line(&mut ctx, 0.0, 0.0, 50.0, 0.0);
    let mut filter = LineSnapFilter::new(LineSnapSettings {
        mode: LineSnapMode::NEAREST,
        threshold: 3.0,
        ..Default::default()
    });

    let mut x = 17.0;
    let mut y = 2.0;
    assert!(filter.process(&mut ctx, &mut x, &mut y));
    assert_eq!(x, 17.0);
    assert_eq!(y, 0.0);
}

#[test]
fn test_line_snap_to_intersection() {
    let mut ctx = EditContext::new(100.0, 100.0);
    add_line(&mut ctx, 0.0, 0.0, 10.0, 10.0);
    add_line(&mut ctx, 0.0, 10.0, 10.0, 0.0);
    let mut filter = LineSnapFilter::new(LineSnapSettings {
        mode: LineSnapMode::INTERSECTION,
        threshold: 3.0,
        ..Default::default()
    });

    let mut x = 6.0;
    let mut y = 4.5;
    assert!(filter.process(&mut ctx, &mut x, &mut y));
    assert_eq!(x, 5.0);
    assert_eq!(y, 5.0);
}

#[test]
fn test_line_snap_horizontal_alignment_adds_guide() {
    let mut ctx = EditContext::new(100.0, 100.0);
    add_line(&mut ctx, 0.0, 20.0, 10.0, 20.0);
    let mut filter = LineSnapFilter::new(LineSnapSettings {
        mode: LineSnapMode::HORIZONTAL,
        threshold: 3.0,
        ..Default::default()
    });

    let mut x = 70.0;
    let mut y = 21.5;
    assert!(filter.process(&mut ctx, &mut x, &mut y));
    assert_eq!(x, 70.0);
    assert_eq!(y, 20.0);
    assert_eq!(ctx.working.guides().len(), 1);

    filter.clear(&mut ctx);
    assert!(ctx.working.guides().is_empty());
}

#[test]
fn test_line_snap_vertical_alignment() {
    let mut ctx = EditContext::new(100.0, 100.0);
    add_line(&mut ctx, 20.0, 0.0, 20.0, 10.0);
    let mut filter = LineSnapFilter::new(LineSnapSettings {
        mode: LineSnapMode::VERTICAL,
        threshold: 3.0,
        ..Default::default()
    });

    let mut x = 21.5;
    let mut y = 70.0;
    assert!(filter.process(&mut ctx, &mut x, &mut y));
    assert_eq!(x, 20.0);
    assert_eq!(y, 70.0);
    assert_eq!(ctx.working.guides().len(), 1);
}

#[test]
fn test_line_snap_out_of_threshold() {
    let mut ctx = EditContext::new(100.0, 100.0);
    add_line(&mut ctx, 0.0, 0.0, 50.0, 0.0);
    let mut filter = LineSnapFilter::new(LineSnapSettings {
        mode: LineSnapMode::ALL,
        threshold: 3.0,
        ..Default::default()
    });

    let mut x = 25.0;
    let mut y = 40.0;
    assert!(!filter.process(&mut ctx, &mut x, &mut y));
    assert_eq!(x, 25.0);
    assert_eq!(y, 40.0);
}

#[test]
fn test_line_snap_ignores_excluded_targets() {
    let mut ctx = EditContext::new(100.0, 100.0);
    add_line(&mut ctx, 0.0, 0.0, 50.0, 0.0);
    let mut filter = LineSnapFilter::new(LineSnapSettings {
        mode: LineSnapMode::POINT,
        target: LineSnapTarget::GUIDES,
        threshold: 3.0,
        ..Default::default()
    });

    let mut x = 1.0;
    let mut y = 1.0;
    assert!(!filter.process(&mut ctx, &mut x, &mut y));
}

#[test]
fn test_line_snap_to_transient_working_guide() {
    let mut ctx = EditContext::new(100.0, 100.0);
    let a = ctx.points.alloc(0.0, 30.0, None);
    let b = ctx.points.alloc(100.0, 30.0, None);
    ctx.add_working_guide(ShapeNode::new(Geometry::Line(LineShape::new(a, b))));

    let mut filter = LineSnapFilter::new(LineSnapSettings {
        mode: LineSnapMode::NEAREST,
        target: LineSnapTarget::GUIDES,
        threshold: 3.0,
        ..Default::default()
    });

    let mut x = 40.0;
    let mut y = 31.5;
    assert!(filter.process(&mut ctx, &mut x, &mut y));
    assert_eq!(x, 40.0);
    assert_eq!(y, 30.0);
}

#[test]
fn test_filters_chain_in_sequence() {
    let mut ctx = EditContext::new(100.0, 100.0);
    add_line(&mut ctx, 0.0, 0.0, 50.0, 0.0);
    let mut line_snap = LineSnapFilter::new(LineSnapSettings {
        mode: LineSnapMode::POINT,
        threshold: 3.0,
        ..Default::default()
    });
    let mut grid_snap = GridSnapFilter::new(GridSnapSettings {
        grid_size_x: 10.0,
        grid_size_y: 10.0,
        ..Default::default()
    });

    // Line snap misses, grid snap sees the unchanged coordinates.
    let mut x = 27.0;
    let mut y = 42.0;
    let snapped = line_snap.process(&mut ctx, &mut x, &mut y)
        || grid_snap.process(&mut ctx, &mut x, &mut y);
    assert!(snapped);
    assert_eq!(x, 30.0);
    assert_eq!(y, 40.0);
}
