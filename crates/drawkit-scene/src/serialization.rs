//! Scene files: versioned JSON documents for saving and loading scenes.
//!
//! The point arena is not serialized directly; points flatten into id-keyed
//! records so that a point shared by several shapes is written once. On load
//! the records are re-inserted under their original ids and owner counts are
//! recomputed by acquiring each point once per referencing occurrence, which
//! preserves connectedness across a round-trip.

use std::collections::BTreeSet;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::container::SceneShape;
use crate::context::EditContext;
use crate::model::PointIdBuf;
use crate::points::PointId;
use crate::style::StyleId;

/// Current scene file format version.
pub const SCENE_FILE_VERSION: u32 = 1;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SceneMetadata {
    pub name: String,
    pub created: DateTime<Utc>,
    pub modified: DateTime<Utc>,
}

impl SceneMetadata {
    pub fn new(name: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            name: name.into(),
            created: now,
            modified: now,
        }
    }
}

/// One flattened arena point.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
struct PointRecord {
    id: PointId,
    x: f64,
    y: f64,
    #[serde(default)]
    template: Option<StyleId>,
}

/// A complete scene document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SceneFile {
    pub version: u32,
    pub metadata: SceneMetadata,
    pub width: f64,
    pub height: f64,
    points: Vec<PointRecord>,
    shapes: Vec<SceneShape>,
    #[serde(default)]
    guides: Vec<SceneShape>,
}

impl SceneFile {
    /// Captures the committed scene of `ctx` into a document. The working
    /// container and selection are session state and are not captured; only
    /// points referenced by the current container's shapes and guides are
    /// written, so working-only points never leak into the file.
    pub fn from_context(ctx: &EditContext, name: impl Into<String>) -> Self {
        let mut referenced: BTreeSet<PointId> = BTreeSet::new();
        for shape in ctx.current.shapes().iter().chain(ctx.current.guides().iter()) {
            let mut ids = PointIdBuf::new();
            shape.node.point_ids(&mut ids);
            referenced.extend(ids);
        }

        let points = referenced
            .into_iter()
            .filter_map(|id| {
                ctx.points.get(id).map(|p| PointRecord {
                    id,
                    x: p.position.x,
                    y: p.position.y,
                    template: p.template,
                })
            })
            .collect();

        Self {
            version: SCENE_FILE_VERSION,
            metadata: SceneMetadata::new(name),
            width: ctx.current.width,
            height: ctx.current.height,
            points,
            shapes: ctx.current.shapes().to_vec(),
            guides: ctx.current.guides().to_vec(),
        }
    }

    /// Rebuilds an editing context from this document.
    ///
    /// Shape ids are restored as saved; the id generators resume past the
    /// highest restored id. Owner counts are recomputed from the restored
    /// shapes, so records no shape references are dropped on the next
    /// release.
    pub fn into_context(&self) -> EditContext {
        let mut ctx = EditContext::new(self.width, self.height);

        for record in &self.points {
            ctx.points
                .insert_record(record.id, record.x, record.y, record.template);
        }

        let mut max_shape_id = 0;
        for shape in self.shapes.iter().chain(self.guides.iter()) {
            max_shape_id = max_shape_id.max(shape.id.0);
            let mut ids = PointIdBuf::new();
            shape.node.point_ids(&mut ids);
            for id in ids {
                ctx.points.acquire(id);
            }
        }
        ctx.set_next_shape_id(max_shape_id + 1);

        for shape in &self.shapes {
            ctx.current.insert(shape.clone());
        }
        for guide in &self.guides {
            ctx.current.insert_guide(guide.clone());
        }

        debug!(
            shapes = self.shapes.len(),
            points = self.points.len(),
            "scene restored"
        );
        ctx
    }

    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).context("failed to serialize scene")
    }

    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).context("failed to deserialize scene")
    }

    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let json = self.to_json()?;
        fs::write(path, json)
            .with_context(|| format!("failed to write scene file: {}", path.display()))?;
        debug!(path = %path.display(), "scene saved");
        Ok(())
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = fs::read_to_string(path)
            .with_context(|| format!("failed to read scene file: {}", path.display()))?;
        Self::from_json(&json)
    }
}
