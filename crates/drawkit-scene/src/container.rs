//! Shape containers: ordered root shapes plus an independent guide list.

use drawkit_geom::Rect2;
use serde::{Deserialize, Serialize};

use crate::model::{GeometryKind, PointIdBuf, ShapeNode};
use crate::points::PointArena;
use crate::renderer::ShapeRenderer;
use crate::selection::SelectionSet;

/// Stable identity of a root shape within an editing session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ShapeId(pub u64);

/// A root-level shape entry: an id plus the shape value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SceneShape {
    pub id: ShapeId,
    pub node: ShapeNode,
}

impl SceneShape {
    pub fn new(id: ShapeId, node: ShapeNode) -> Self {
        Self { id, node }
    }

    pub fn kind(&self) -> GeometryKind {
        self.node.geometry.kind()
    }

    pub fn bounds(&self, points: &PointArena) -> Option<Rect2> {
        self.node.bounds(points)
    }

    /// Adds this shape and its points to the selection. Idempotent.
    pub fn select(&self, selection: &mut SelectionSet) {
        selection.select_shape(self.id);
        let mut ids = PointIdBuf::new();
        self.node.point_ids(&mut ids);
        for id in ids {
            selection.select_point(id);
        }
    }

    /// Removes this shape and its points from the selection. Idempotent.
    pub fn deselect(&self, selection: &mut SelectionSet) {
        selection.deselect_shape(self.id);
        let mut ids = PointIdBuf::new();
        self.node.point_ids(&mut ids);
        for id in ids {
            selection.deselect_point(id);
        }
    }

    pub fn draw<R: ShapeRenderer>(&self, points: &PointArena, renderer: &mut R, dx: f64, dy: f64) {
        self.node.draw(points, renderer, dx, dy);
    }
}

/// Ordered, mutable collection of root shapes plus a parallel guide list.
///
/// Insertion order approximates z-order: later shapes draw on top, and
/// hit-test queries scan shapes in container order. Guides are transient
/// helper lines and are ordered independently of shapes.
///
/// Removal does not touch selection or point ownership; that cleanup is the
/// caller's obligation (see [`crate::EditContext::remove_working_shape`]).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ShapeContainer {
    pub width: f64,
    pub height: f64,
    shapes: Vec<SceneShape>,
    guides: Vec<SceneShape>,
}

impl ShapeContainer {
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            shapes: Vec::new(),
            guides: Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    pub fn shapes(&self) -> &[SceneShape] {
        &self.shapes
    }

    pub fn shapes_mut(&mut self) -> &mut [SceneShape] {
        &mut self.shapes
    }

    pub fn guides(&self) -> &[SceneShape] {
        &self.guides
    }

    pub fn insert(&mut self, shape: SceneShape) {
        self.shapes.push(shape);
    }

    pub fn get(&self, id: ShapeId) -> Option<&SceneShape> {
        self.shapes.iter().find(|s| s.id == id)
    }

    pub fn get_mut(&mut self, id: ShapeId) -> Option<&mut SceneShape> {
        self.shapes.iter_mut().find(|s| s.id == id)
    }

    /// Removes a shape and returns it, preserving the order of the rest.
    pub fn remove(&mut self, id: ShapeId) -> Option<SceneShape> {
        let index = self.shapes.iter().position(|s| s.id == id)?;
        Some(self.shapes.remove(index))
    }

    /// Appends a guide. Guides are line shapes by convention; the container
    /// does not enforce the kind.
    pub fn insert_guide(&mut self, guide: SceneShape) {
        self.guides.push(guide);
    }

    pub fn remove_guide(&mut self, id: ShapeId) -> Option<SceneShape> {
        let index = self.guides.iter().position(|s| s.id == id)?;
        Some(self.guides.remove(index))
    }

    pub fn clear(&mut self) {
        self.shapes.clear();
        self.guides.clear();
    }

    /// Draws guides first, then shapes in z-order.
    pub fn draw<R: ShapeRenderer>(&self, points: &PointArena, renderer: &mut R, dx: f64, dy: f64) {
        for guide in &self.guides {
            guide.draw(points, renderer, dx, dy);
        }
        for shape in &self.shapes {
            shape.draw(points, renderer, dx, dy);
        }
    }
}
