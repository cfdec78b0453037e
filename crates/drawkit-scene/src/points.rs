//! Arena-allocated scene points.
//!
//! Shapes store `PointId`s instead of coordinates; two shapes referencing the
//! same id are connected, and mutating the point moves every owner. Each
//! entry carries an owner count so that deleting one owning shape never drops
//! a point another shape still references.

use std::collections::HashMap;

use drawkit_geom::Point2;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::style::StyleId;

/// Stable identity of a point in the arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PointId(pub u64);

/// A scene point: a coordinate plus an optional template reference used to
/// render its visual marker. The template is not part of the point's
/// geometric identity.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PointShape {
    pub position: Point2,
    pub template: Option<StyleId>,
}

#[derive(Debug, Clone)]
struct Entry {
    shape: PointShape,
    owners: u32,
}

/// Id-keyed point storage with owner counting.
#[derive(Debug, Clone, Default)]
pub struct PointArena {
    entries: HashMap<PointId, Entry>,
    next_id: u64,
}

impl PointArena {
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
            next_id: 1,
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Allocates a new point with a single owner.
    pub fn alloc(&mut self, x: f64, y: f64, template: Option<StyleId>) -> PointId {
        let id = PointId(self.next_id);
        self.next_id += 1;
        self.entries.insert(
            id,
            Entry {
                shape: PointShape {
                    position: Point2::new(x, y),
                    template,
                },
                owners: 1,
            },
        );
        id
    }

    /// Inserts a point under a caller-supplied id with zero owners.
    ///
    /// Used when loading a scene file; owners are recounted by acquiring the
    /// point once per referencing shape.
    pub fn insert_record(&mut self, id: PointId, x: f64, y: f64, template: Option<StyleId>) {
        self.entries.insert(
            id,
            Entry {
                shape: PointShape {
                    position: Point2::new(x, y),
                    template,
                },
                owners: 0,
            },
        );
        if id.0 >= self.next_id {
            self.next_id = id.0 + 1;
        }
    }

    /// Registers one more owner for a shared point.
    pub fn acquire(&mut self, id: PointId) {
        match self.entries.get_mut(&id) {
            Some(entry) => entry.owners += 1,
            None => warn!(?id, "acquire on a point not present in the arena"),
        }
    }

    /// Drops one owner. The entry is removed once no owners remain; returns
    /// whether the point was dropped.
    pub fn release(&mut self, id: PointId) -> bool {
        match self.entries.get_mut(&id) {
            Some(entry) => {
                entry.owners = entry.owners.saturating_sub(1);
                if entry.owners == 0 {
                    self.entries.remove(&id);
                    true
                } else {
                    false
                }
            }
            None => {
                warn!(?id, "release on a point not present in the arena");
                false
            }
        }
    }

    pub fn owners(&self, id: PointId) -> u32 {
        self.entries.get(&id).map(|e| e.owners).unwrap_or(0)
    }

    pub fn get(&self, id: PointId) -> Option<&PointShape> {
        self.entries.get(&id).map(|e| &e.shape)
    }

    pub fn position(&self, id: PointId) -> Option<Point2> {
        self.entries.get(&id).map(|e| e.shape.position)
    }

    pub fn set_position(&mut self, id: PointId, position: Point2) {
        if let Some(entry) = self.entries.get_mut(&id) {
            entry.shape.position = position;
        }
    }

    /// Moves a point by `(dx, dy)`; every shape referencing it follows.
    pub fn translate(&mut self, id: PointId, dx: f64, dy: f64) {
        if let Some(entry) = self.entries.get_mut(&id) {
            entry.shape.position = entry.shape.position.translated(dx, dy);
        }
    }

    /// Ids currently in the arena, ascending. Deterministic order for
    /// serialization and tests.
    pub fn ids(&self) -> Vec<PointId> {
        let mut ids: Vec<PointId> = self.entries.keys().copied().collect();
        ids.sort();
        ids
    }
}
