//! Editing context: the shared state one editor session operates on.

use std::collections::HashSet;

use tracing::debug;

use crate::container::{SceneShape, ShapeContainer, ShapeId};
use crate::hit_test::HitTestRegistry;
use crate::model::{PointIdBuf, ShapeNode};
use crate::points::{PointArena, PointId};
use crate::selection::SelectionSet;
use crate::style::StyleId;

/// Shared state for one editing session.
///
/// Two containers are active at once: `current` holds the committed scene,
/// `working` holds in-progress gesture shapes and transient markers. Both are
/// drawn; only `current` persists. The point arena is shared by both so that
/// point identity survives commits.
#[derive(Debug)]
pub struct EditContext {
    pub points: PointArena,
    pub current: ShapeContainer,
    pub working: ShapeContainer,
    pub selection: SelectionSet,
    /// Template applied to points created by finders and tools.
    pub point_template: Option<StyleId>,
    pub hit_test: HitTestRegistry,
    next_shape_id: u64,
}

impl EditContext {
    /// Creates a context with both containers sized `width` x `height` and
    /// every shape variant registered for hit-testing.
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            points: PointArena::new(),
            current: ShapeContainer::new(width, height),
            working: ShapeContainer::new(width, height),
            selection: SelectionSet::new(),
            point_template: None,
            hit_test: HitTestRegistry::with_defaults(),
            next_shape_id: 1,
        }
    }

    /// Generates a session-unique shape id.
    pub fn generate_shape_id(&mut self) -> ShapeId {
        let id = ShapeId(self.next_shape_id);
        self.next_shape_id += 1;
        id
    }

    /// Sets the next id to be generated. Used when restoring a session.
    pub fn set_next_shape_id(&mut self, id: u64) {
        self.next_shape_id = id;
    }

    /// Appends a shape to the current container.
    ///
    /// Point ownership must already be established: one owner per occurrence,
    /// via [`PointArena::alloc`] for fresh points or [`PointArena::acquire`]
    /// when reusing a shared point.
    pub fn add_shape(&mut self, node: ShapeNode) -> ShapeId {
        let id = self.generate_shape_id();
        debug!(?id, kind = ?node.geometry.kind(), "add shape to current container");
        self.current.insert(SceneShape::new(id, node));
        id
    }

    /// Appends a shape to the working container.
    pub fn add_working_shape(&mut self, node: ShapeNode) -> ShapeId {
        let id = self.generate_shape_id();
        debug!(?id, kind = ?node.geometry.kind(), "add shape to working container");
        self.working.insert(SceneShape::new(id, node));
        id
    }

    /// Appends a guide line to the working container.
    pub fn add_working_guide(&mut self, node: ShapeNode) -> ShapeId {
        let id = self.generate_shape_id();
        self.working.insert_guide(SceneShape::new(id, node));
        id
    }

    /// Moves a finished gesture shape from the working container into the
    /// current container, keeping its id and point references.
    pub fn commit_working_shape(&mut self, id: ShapeId) -> Option<ShapeId> {
        let shape = self.working.remove(id)?;
        debug!(?id, "commit working shape");
        self.current.insert(shape);
        Some(id)
    }

    /// Removes a shape from the current container, releasing its point
    /// owners and cleaning up selection state.
    pub fn remove_shape(&mut self, id: ShapeId) -> bool {
        match self.current.remove(id) {
            Some(shape) => {
                self.cleanup_removed(&shape);
                true
            }
            None => false,
        }
    }

    /// Removes a shape from the working container, releasing its point
    /// owners and cleaning up selection state.
    pub fn remove_working_shape(&mut self, id: ShapeId) -> bool {
        match self.working.remove(id) {
            Some(shape) => {
                self.cleanup_removed(&shape);
                true
            }
            None => false,
        }
    }

    /// Removes a guide from the working container, releasing its points.
    pub fn remove_working_guide(&mut self, id: ShapeId) -> bool {
        match self.working.remove_guide(id) {
            Some(guide) => {
                self.cleanup_removed(&guide);
                true
            }
            None => false,
        }
    }

    /// Translates the whole selection by `(dx, dy)`.
    ///
    /// Each point moves exactly once, no matter how many selected shapes
    /// reference it.
    pub fn move_selected(&mut self, dx: f64, dy: f64) {
        let mut moved: HashSet<PointId> = HashSet::new();

        for id in self.selection.shape_ids() {
            let Some(shape) = self.current.get(id).or_else(|| self.working.get(id)) else {
                continue;
            };
            shape
                .node
                .move_by(&mut self.points, &self.selection, dx, dy, &mut moved);
        }
        // Selected points move themselves, whether or not a selected shape
        // references them.
        for pid in self.selection.point_ids() {
            if moved.insert(pid) {
                self.points.translate(pid, dx, dy);
            }
        }
    }

    /// Releases one point owner per occurrence in the removed shape. A point
    /// leaves the selection only once no owner remains.
    fn cleanup_removed(&mut self, shape: &SceneShape) {
        debug!(id = ?shape.id, "remove shape");
        self.selection.deselect_shape(shape.id);
        let mut ids = PointIdBuf::new();
        shape.node.point_ids(&mut ids);
        for pid in ids {
            if self.points.release(pid) {
                self.selection.deselect_point(pid);
            }
        }
    }
}
