use serde::{Deserialize, Serialize};

use crate::model::ShapeNode;

/// Group of exclusively owned child shapes.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct GroupShape {
    pub shapes: Vec<ShapeNode>,
}

impl GroupShape {
    pub fn new(shapes: Vec<ShapeNode>) -> Self {
        Self { shapes }
    }
}
