use serde::{Deserialize, Serialize};

use super::{AttributeRecord, ElementId, Position, Size, DEFAULT_ENTITY_SIZE};

/// A Chen-notation entity (rectangle)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Entity {
    pub id: ElementId,
    pub name: String,
    #[serde(default)]
    pub attributes: Vec<AttributeRecord>,
    #[serde(default)]
    pub is_weak: bool,
    pub position: Position,
    #[serde(default = "default_entity_size")]
    pub size: Size,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rotation: Option<f32>,
    /// Warnings from the last validation pass
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub warnings: Vec<String>,
}

fn default_entity_size() -> Size {
    DEFAULT_ENTITY_SIZE
}

impl Entity {
    pub fn new(id: ElementId, name: impl Into<String>, position: Position) -> Self {
        Self {
            id,
            name: name.into(),
            attributes: Vec::new(),
            is_weak: false,
            position,
            size: DEFAULT_ENTITY_SIZE,
            rotation: None,
            warnings: Vec::new(),
        }
    }

    pub fn rect(&self) -> egui::Rect {
        super::element_rect(self.position, self.size)
    }

    pub fn has_key(&self) -> bool {
        self.attributes.iter().any(|a| a.flags.is_key)
    }

    pub fn has_discriminant(&self) -> bool {
        self.attributes.iter().any(|a| a.flags.is_discriminant)
    }
}
