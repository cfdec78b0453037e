use serde::{Deserialize, Serialize};

use crate::point::Point2;
use crate::EPSILON;

/// 2D affine transform.
///
/// Stored row-major as the linear part `m11..m22` plus a translation
/// `(offset_x, offset_y)`. Points transform as
/// `x' = x * m11 + y * m21 + offset_x`, `y' = x * m12 + y * m22 + offset_y`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Matrix2 {
    pub m11: f64,
    pub m12: f64,
    pub m21: f64,
    pub m22: f64,
    pub offset_x: f64,
    pub offset_y: f64,
}

impl Matrix2 {
    pub fn new(m11: f64, m12: f64, m21: f64, m22: f64, offset_x: f64, offset_y: f64) -> Self {
        Self {
            m11,
            m12,
            m21,
            m22,
            offset_x,
            offset_y,
        }
    }

    pub fn identity() -> Self {
        Self::new(1.0, 0.0, 0.0, 1.0, 0.0, 0.0)
    }

    pub fn translation(dx: f64, dy: f64) -> Self {
        Self::new(1.0, 0.0, 0.0, 1.0, dx, dy)
    }

    /// Scale about a fixed center point.
    pub fn scale_at(sx: f64, sy: f64, center: Point2) -> Self {
        Self::new(
            sx,
            0.0,
            0.0,
            sy,
            center.x - sx * center.x,
            center.y - sy * center.y,
        )
    }

    /// Rotation (radians) about a fixed center point.
    pub fn rotation_at(angle: f64, center: Point2) -> Self {
        let cos = angle.cos();
        let sin = angle.sin();
        Self::new(
            cos,
            sin,
            -sin,
            cos,
            center.x - cos * center.x + sin * center.y,
            center.y - sin * center.x - cos * center.y,
        )
    }

    pub fn is_identity(&self) -> bool {
        *self == Self::identity()
    }

    /// Composition: applies `self` first, then `other`.
    pub fn then(&self, other: &Matrix2) -> Matrix2 {
        Matrix2::new(
            self.m11 * other.m11 + self.m12 * other.m21,
            self.m11 * other.m12 + self.m12 * other.m22,
            self.m21 * other.m11 + self.m22 * other.m21,
            self.m21 * other.m12 + self.m22 * other.m22,
            self.offset_x * other.m11 + self.offset_y * other.m21 + other.offset_x,
            self.offset_x * other.m12 + self.offset_y * other.m22 + other.offset_y,
        )
    }

    pub fn transform_point(&self, p: Point2) -> Point2 {
        Point2::new(
            p.x * self.m11 + p.y * self.m21 + self.offset_x,
            p.x * self.m12 + p.y * self.m22 + self.offset_y,
        )
    }

    pub fn determinant(&self) -> f64 {
        self.m11 * self.m22 - self.m12 * self.m21
    }

    /// Inverse transform, or `None` for a singular matrix.
    pub fn invert(&self) -> Option<Matrix2> {
        let det = self.determinant();
        if det.abs() < EPSILON {
            return None;
        }
        let inv_det = 1.0 / det;
        let m11 = self.m22 * inv_det;
        let m12 = -self.m12 * inv_det;
        let m21 = -self.m21 * inv_det;
        let m22 = self.m11 * inv_det;
        Some(Matrix2::new(
            m11,
            m12,
            m21,
            m22,
            -(self.offset_x * m11 + self.offset_y * m21),
            -(self.offset_x * m12 + self.offset_y * m22),
        ))
    }
}

impl Default for Matrix2 {
    fn default() -> Self {
        Self::identity()
    }
}
