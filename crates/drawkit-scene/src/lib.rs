//! # drawkit-scene
//!
//! Mutable 2D scene graph for vector drawing editors: shape model,
//! containers, hit-testing, shape-intersection finders and point snapping.
//!
//! ## Core Components
//!
//! ### Shape Model
//! - **PointArena**: arena-allocated points with owner counting; sharing a
//!   `PointId` across shapes is what connects them
//! - **Geometry/ShapeNode**: closed set of shape variants (points, lines,
//!   beziers, rectangles, ellipses, text, scribbles, figures, paths, groups)
//!   with an opaque style reference and an optional affine transform
//! - **ShapeContainer**: ordered root shapes plus an independent guide list
//!
//! ### Editing Services
//! - **HitTestRegistry**: kind-keyed strategies for point lookup, containment
//!   and marquee overlap, recursing through composite shapes
//! - **Intersection finders**: line×line, line×rectangle and line×ellipse
//!   finders that materialize selected split markers in the working container
//! - **Point filters**: grid snapping and line snapping with transient guides
//!
//! ## Architecture
//!
//! ```text
//! EditContext
//!   ├── PointArena (shared point identity)
//!   ├── current ShapeContainer (committed scene)
//!   ├── working ShapeContainer (gesture scratch + guides)
//!   ├── SelectionSet (externally owned highlight/drag set)
//!   └── HitTestRegistry
//! ```
//!
//! Everything is single-threaded and synchronous; all operations are pure
//! computations over the current containers, re-run on each pointer event.

pub mod container;
pub mod context;
pub mod error;
pub mod filters;
pub mod intersections;
pub mod model;
pub mod points;
pub mod renderer;
pub mod selection;
pub mod serialization;
pub mod style;

pub use container::{SceneShape, ShapeContainer, ShapeId};
pub use context::EditContext;
pub use error::{FinderError, HitTestError};
pub use filters::{
    snap_grid, GridSnapFilter, GridSnapMode, GridSnapSettings, LineSnapFilter, LineSnapMode,
    LineSnapSettings, LineSnapTarget, PointFilter,
};
pub use hit_test::{HitTestRegistry, HitTestStrategy};
pub use intersections::{
    IntersectionFinder, IntersectionSettings, LineEllipseIntersections, LineLineIntersections,
    LineRectangleIntersections,
};
pub use model::{
    CubicBezierShape, EllipseShape, FigureShape, Geometry, GeometryKind, GroupShape, LineShape,
    PathShape, QuadraticBezierShape, RectangleShape, ScribbleShape, ShapeNode, TextShape,
};
pub use points::{PointArena, PointId, PointShape};
pub use renderer::{PathOutline, PathVerb, ShapeRenderer};
pub use selection::SelectionSet;
pub use serialization::{SceneFile, SceneMetadata};
pub use style::StyleId;
