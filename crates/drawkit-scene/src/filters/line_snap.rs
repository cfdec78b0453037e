//! Line snapping: pointer attraction to existing line geometry.

use std::ops::{BitOr, BitOrAssign};

use drawkit_geom::{line_intersects_line, Line2, Point2};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::container::ShapeId;
use crate::context::EditContext;
use crate::model::Geometry;

use super::{clear_guides, push_horizontal_guide, push_vertical_guide, PointFilter};

/// Snap candidate selection, combinable with `|`. Modes are tried in
/// declaration order; the first hit wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineSnapMode(u8);

impl LineSnapMode {
    pub const NONE: Self = Self(0);
    /// Line endpoints.
    pub const POINT: Self = Self(1);
    /// Line midpoints.
    pub const MIDDLE: Self = Self(1 << 1);
    /// Closest point on a line.
    pub const NEAREST: Self = Self(1 << 2);
    /// Crossings between candidate lines.
    pub const INTERSECTION: Self = Self(1 << 3);
    /// Align the y coordinate with an existing point.
    pub const HORIZONTAL: Self = Self(1 << 4);
    /// Align the x coordinate with an existing point.
    pub const VERTICAL: Self = Self(1 << 5);
    pub const ALL: Self = Self(
        Self::POINT.0
            | Self::MIDDLE.0
            | Self::NEAREST.0
            | Self::INTERSECTION.0
            | Self::HORIZONTAL.0
            | Self::VERTICAL.0,
    );

    pub fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }
}

impl BitOr for LineSnapMode {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

impl BitOrAssign for LineSnapMode {
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}

/// Where snap candidates come from, combinable with `|`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineSnapTarget(u8);

impl LineSnapTarget {
    pub const NONE: Self = Self(0);
    /// Line shapes in the current container.
    pub const SHAPES: Self = Self(1);
    /// Guide lines, both persistent ones in the current container and
    /// transient ones in the working container.
    pub const GUIDES: Self = Self(1 << 1);
    pub const ALL: Self = Self(Self::SHAPES.0 | Self::GUIDES.0);

    pub fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }
}

impl BitOr for LineSnapTarget {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

impl BitOrAssign for LineSnapTarget {
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LineSnapSettings {
    pub is_enabled: bool,
    pub mode: LineSnapMode,
    pub target: LineSnapTarget,
    /// Snap radius in scene units.
    pub threshold: f64,
}

impl Default for LineSnapSettings {
    fn default() -> Self {
        Self {
            is_enabled: true,
            mode: LineSnapMode::POINT | LineSnapMode::MIDDLE | LineSnapMode::INTERSECTION,
            target: LineSnapTarget::ALL,
            threshold: 10.0,
        }
    }
}

/// Snaps pointer coordinates to existing line geometry.
#[derive(Debug, Default)]
pub struct LineSnapFilter {
    pub settings: LineSnapSettings,
    guides: Vec<ShapeId>,
}

impl LineSnapFilter {
    pub fn new(settings: LineSnapSettings) -> Self {
        Self {
            settings,
            guides: Vec::new(),
        }
    }

    /// Resolved candidate segments from the configured targets.
    fn candidate_lines(&self, ctx: &EditContext) -> Vec<Line2> {
        let mut lines = Vec::new();
        if self.settings.target.contains(LineSnapTarget::SHAPES) {
            for shape in ctx.current.shapes() {
                if let Geometry::Line(s) = &shape.node.geometry {
                    if let Some(line) = s.resolve(&ctx.points) {
                        lines.push(line);
                    }
                }
            }
        }
        if self.settings.target.contains(LineSnapTarget::GUIDES) {
            let guides = ctx.current.guides().iter().chain(ctx.working.guides());
            for guide in guides {
                if let Geometry::Line(s) = &guide.node.geometry {
                    if let Some(line) = s.resolve(&ctx.points) {
                        lines.push(line);
                    }
                }
            }
        }
        lines
    }
}

/// Nearest candidate within `threshold` of `target`, ties keeping the first.
fn nearest_within(
    candidates: impl IntoIterator<Item = Point2>,
    target: Point2,
    threshold: f64,
) -> Option<Point2> {
    let mut best: Option<(Point2, f64)> = None;
    for candidate in candidates {
        let distance = candidate.distance_to(&target);
        if distance <= threshold && best.map_or(true, |(_, d)| distance < d) {
            best = Some((candidate, distance));
        }
    }
    best.map(|(p, _)| p)
}

impl PointFilter for LineSnapFilter {
    fn process(&mut self, ctx: &mut EditContext, x: &mut f64, y: &mut f64) -> bool {
        if !self.settings.is_enabled || self.settings.mode == LineSnapMode::NONE {
            return false;
        }

        let target = Point2::new(*x, *y);
        let threshold = self.settings.threshold;
        let lines = self.candidate_lines(ctx);
        if lines.is_empty() {
            return false;
        }
        let endpoints: Vec<Point2> = lines.iter().flat_map(|l| [l.a, l.b]).collect();

        if self.settings.mode.contains(LineSnapMode::POINT) {
            if let Some(p) = nearest_within(endpoints.iter().copied(), target, threshold) {
                debug!(x = p.x, y = p.y, "line snap to endpoint");
                *x = p.x;
                *y = p.y;
                return true;
            }
        }

        if self.settings.mode.contains(LineSnapMode::MIDDLE) {
            if let Some(p) = nearest_within(lines.iter().map(Line2::midpoint), target, threshold) {
                debug!(x = p.x, y = p.y, "line snap to midpoint");
                *x = p.x;
                *y = p.y;
                return true;
            }
        }

        if self.settings.mode.contains(LineSnapMode::NEAREST) {
            if let Some(p) =
                nearest_within(lines.iter().map(|l| l.nearest_point(target)), target, threshold)
            {
                debug!(x = p.x, y = p.y, "line snap to nearest");
                *x = p.x;
                *y = p.y;
                return true;
            }
        }

        if self.settings.mode.contains(LineSnapMode::INTERSECTION) {
            let crossings = lines.iter().enumerate().flat_map(|(i, first)| {
                lines[i + 1..]
                    .iter()
                    .filter_map(|second| line_intersects_line(first.a, first.b, second.a, second.b))
            });
            if let Some(p) = nearest_within(crossings, target, threshold) {
                debug!(x = p.x, y = p.y, "line snap to intersection");
                *x = p.x;
                *y = p.y;
                return true;
            }
        }

        if self.settings.mode.contains(LineSnapMode::HORIZONTAL) {
            let aligned = endpoints
                .iter()
                .filter(|p| (p.y - target.y).abs() <= threshold)
                .map(|p| Point2::new(target.x, p.y));
            if let Some(p) = nearest_within(aligned, target, threshold) {
                debug!(y = p.y, "line snap to horizontal alignment");
                *y = p.y;
                push_horizontal_guide(ctx, p.y, &mut self.guides);
                return true;
            }
        }

        if self.settings.mode.contains(LineSnapMode::VERTICAL) {
            let aligned = endpoints
                .iter()
                .filter(|p| (p.x - target.x).abs() <= threshold)
                .map(|p| Point2::new(p.x, target.y));
            if let Some(p) = nearest_within(aligned, target, threshold) {
                debug!(x = p.x, "line snap to vertical alignment");
                *x = p.x;
                push_vertical_guide(ctx, p.x, &mut self.guides);
                return true;
            }
        }

        false
    }

    fn clear(&mut self, ctx: &mut EditContext) {
        clear_guides(ctx, &mut self.guides);
    }
}
