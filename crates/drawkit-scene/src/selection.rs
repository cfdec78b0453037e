//! Externally owned selection state.
//!
//! Tools and renderers share one `SelectionSet`; shapes toggle their own
//! membership through [`crate::SceneShape::select`] and
//! [`crate::SceneShape::deselect`]. All operations are idempotent.

use std::collections::HashSet;

use crate::container::ShapeId;
use crate::points::PointId;

/// Mutable set of selected shapes and points.
#[derive(Debug, Clone, Default)]
pub struct SelectionSet {
    shapes: HashSet<ShapeId>,
    points: HashSet<PointId>,
}

impl SelectionSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty() && self.points.is_empty()
    }

    pub fn clear(&mut self) {
        self.shapes.clear();
        self.points.clear();
    }

    pub fn select_shape(&mut self, id: ShapeId) -> bool {
        self.shapes.insert(id)
    }

    pub fn deselect_shape(&mut self, id: ShapeId) -> bool {
        self.shapes.remove(&id)
    }

    pub fn contains_shape(&self, id: ShapeId) -> bool {
        self.shapes.contains(&id)
    }

    pub fn select_point(&mut self, id: PointId) -> bool {
        self.points.insert(id)
    }

    pub fn deselect_point(&mut self, id: PointId) -> bool {
        self.points.remove(&id)
    }

    pub fn contains_point(&self, id: PointId) -> bool {
        self.points.contains(&id)
    }

    pub fn shape_count(&self) -> usize {
        self.shapes.len()
    }

    pub fn point_count(&self) -> usize {
        self.points.len()
    }

    /// Selected shape ids in ascending order. Deterministic for iteration
    /// during moves and for tests.
    pub fn shape_ids(&self) -> Vec<ShapeId> {
        let mut ids: Vec<ShapeId> = self.shapes.iter().copied().collect();
        ids.sort();
        ids
    }

    /// Selected point ids in ascending order.
    pub fn point_ids(&self) -> Vec<PointId> {
        let mut ids: Vec<PointId> = self.points.iter().copied().collect();
        ids.sort();
        ids
    }
}
