//! Grid snapping: per-axis round-to-nearest-multiple.

use std::ops::{BitOr, BitOrAssign};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::container::ShapeId;
use crate::context::EditContext;

use super::{clear_guides, push_point_guides, PointFilter};

/// Rounds `value` to the nearest multiple of `size`. Half-way values round
/// up. A non-positive `size` leaves the value unchanged.
pub fn snap_grid(value: f64, size: f64) -> f64 {
    if size <= 0.0 {
        return value;
    }
    let remainder = value % size;
    let mut snapped = value - remainder;
    if remainder >= size / 2.0 {
        snapped += size;
    }
    snapped
}

/// Axis selection for grid snapping, combinable with `|`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridSnapMode(u8);

impl GridSnapMode {
    pub const NONE: Self = Self(0);
    /// Snap along the horizontal axis (the x coordinate).
    pub const HORIZONTAL: Self = Self(1);
    /// Snap along the vertical axis (the y coordinate).
    pub const VERTICAL: Self = Self(1 << 1);
    pub const ALL: Self = Self(Self::HORIZONTAL.0 | Self::VERTICAL.0);

    pub fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }
}

impl BitOr for GridSnapMode {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

impl BitOrAssign for GridSnapMode {
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GridSnapSettings {
    pub is_enabled: bool,
    pub mode: GridSnapMode,
    pub grid_size_x: f64,
    pub grid_size_y: f64,
    /// Draw cross-hair guides through the snapped point.
    pub guides_enabled: bool,
}

impl Default for GridSnapSettings {
    fn default() -> Self {
        Self {
            is_enabled: true,
            mode: GridSnapMode::ALL,
            grid_size_x: 15.0,
            grid_size_y: 15.0,
            guides_enabled: false,
        }
    }
}

/// Snaps pointer coordinates to a rectangular grid.
#[derive(Debug, Default)]
pub struct GridSnapFilter {
    pub settings: GridSnapSettings,
    guides: Vec<ShapeId>,
}

impl GridSnapFilter {
    pub fn new(settings: GridSnapSettings) -> Self {
        Self {
            settings,
            guides: Vec::new(),
        }
    }
}

impl PointFilter for GridSnapFilter {
    fn process(&mut self, ctx: &mut EditContext, x: &mut f64, y: &mut f64) -> bool {
        if !self.settings.is_enabled || self.settings.mode == GridSnapMode::NONE {
            return false;
        }

        let mut snapped = false;
        if self.settings.mode.contains(GridSnapMode::HORIZONTAL) {
            let sx = snap_grid(*x, self.settings.grid_size_x);
            snapped |= sx != *x;
            *x = sx;
        }
        if self.settings.mode.contains(GridSnapMode::VERTICAL) {
            let sy = snap_grid(*y, self.settings.grid_size_y);
            snapped |= sy != *y;
            *y = sy;
        }

        if snapped {
            debug!(x, y, "grid snap");
            if self.settings.guides_enabled {
                push_point_guides(ctx, *x, *y, &mut self.guides);
            }
        }
        snapped
    }

    fn clear(&mut self, ctx: &mut EditContext) {
        clear_guides(ctx, &mut self.guides);
    }
}
