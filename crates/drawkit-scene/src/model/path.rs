use serde::{Deserialize, Serialize};

use crate::model::ShapeNode;

/// One contiguous figure of a path: an ordered run of segment shapes.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct FigureShape {
    pub segments: Vec<ShapeNode>,
    pub is_closed: bool,
    pub is_filled: bool,
}

impl FigureShape {
    pub fn new(segments: Vec<ShapeNode>, is_closed: bool, is_filled: bool) -> Self {
        Self {
            segments,
            is_closed,
            is_filled,
        }
    }
}

/// Path shape: an ordered list of figures.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PathShape {
    pub figures: Vec<FigureShape>,
}

impl PathShape {
    pub fn new(figures: Vec<FigureShape>) -> Self {
        Self { figures }
    }
}
