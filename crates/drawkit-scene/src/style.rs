use serde::{Deserialize, Serialize};

/// Opaque reference to an externally owned style.
///
/// Geometry code never interprets or clones style contents; it only carries
/// the reference through to the renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct StyleId(pub u64);
