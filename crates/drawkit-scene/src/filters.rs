//! Point filters: pointer-coordinate adjustment during tool gestures.
//!
//! Tools run each pointer position through a filter chain; every filter sees
//! the previous filter's output and may snap the coordinates in place.
//! Filters that materialize transient guide lines track them and remove
//! exactly those guides in `clear`. Callers clear before re-processing a new
//! pointer position, so guides never accumulate across moves.

mod grid_snap;
mod line_snap;

pub use grid_snap::{snap_grid, GridSnapFilter, GridSnapMode, GridSnapSettings};
pub use line_snap::{LineSnapFilter, LineSnapMode, LineSnapSettings, LineSnapTarget};

use crate::container::ShapeId;
use crate::context::EditContext;
use crate::model::{Geometry, LineShape, ShapeNode};

/// Adjusts pointer coordinates, optionally materializing guide lines.
pub trait PointFilter {
    /// Processes one pointer position in place. Returns whether the
    /// coordinates were snapped.
    fn process(&mut self, ctx: &mut EditContext, x: &mut f64, y: &mut f64) -> bool;

    /// Removes every guide this filter created. Idempotent.
    fn clear(&mut self, ctx: &mut EditContext);
}

fn push_guide(
    ctx: &mut EditContext,
    ax: f64,
    ay: f64,
    bx: f64,
    by: f64,
    guides: &mut Vec<ShapeId>,
) {
    let start = ctx.points.alloc(ax, ay, None);
    let end = ctx.points.alloc(bx, by, None);
    let id = ctx.add_working_guide(ShapeNode::new(Geometry::Line(LineShape { start, end })));
    guides.push(id);
}

/// Horizontal guide line through `y`, spanning the working container.
fn push_horizontal_guide(ctx: &mut EditContext, y: f64, guides: &mut Vec<ShapeId>) {
    let width = ctx.working.width;
    push_guide(ctx, 0.0, y, width, y, guides);
}

/// Vertical guide line through `x`, spanning the working container.
fn push_vertical_guide(ctx: &mut EditContext, x: f64, guides: &mut Vec<ShapeId>) {
    let height = ctx.working.height;
    push_guide(ctx, x, 0.0, x, height, guides);
}

/// Cross-hair guides through a snapped point.
fn push_point_guides(ctx: &mut EditContext, x: f64, y: f64, guides: &mut Vec<ShapeId>) {
    push_horizontal_guide(ctx, y, guides);
    push_vertical_guide(ctx, x, guides);
}

fn clear_guides(ctx: &mut EditContext, guides: &mut Vec<ShapeId>) {
    for id in guides.drain(..) {
        ctx.remove_working_guide(id);
    }
}
