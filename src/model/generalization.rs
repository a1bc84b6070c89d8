use serde::{Deserialize, Serialize};

use super::{ElementId, Position, Size, DEFAULT_GENERALIZATION_SIZE};

/// An ISA hierarchy: one parent entity specialized into child entities
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Generalization {
    pub id: ElementId,
    pub parent_id: ElementId,
    #[serde(default)]
    pub child_ids: Vec<ElementId>,
    #[serde(default)]
    pub is_total: bool,
    pub position: Position,
    #[serde(default = "default_generalization_size")]
    pub size: Size,
}

fn default_generalization_size() -> Size {
    DEFAULT_GENERALIZATION_SIZE
}

impl Generalization {
    pub fn new(
        id: ElementId,
        parent_id: ElementId,
        child_ids: Vec<ElementId>,
        is_total: bool,
        position: Position,
    ) -> Self {
        Self {
            id,
            parent_id,
            child_ids,
            is_total,
            position,
            size: DEFAULT_GENERALIZATION_SIZE,
        }
    }

    pub fn has_child(&self, id: ElementId) -> bool {
        self.child_ids.contains(&id)
    }
}
