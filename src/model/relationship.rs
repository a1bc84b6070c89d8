use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::{AttributeRecord, ElementId, Position, Size, DEFAULT_RELATIONSHIP_SIZE};

/// How many instances of an entity take part in a relationship
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cardinality {
    #[serde(rename = "1")]
    One,
    #[serde(rename = "N")]
    N,
    #[serde(rename = "M")]
    M,
}

impl Cardinality {
    pub fn as_str(&self) -> &'static str {
        match self {
            Cardinality::One => "1",
            Cardinality::N => "N",
            Cardinality::M => "M",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "1" => Some(Cardinality::One),
            "N" => Some(Cardinality::N),
            "M" => Some(Cardinality::M),
            _ => None,
        }
    }
}

impl fmt::Display for Cardinality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Whether every instance of an entity must take part in a relationship
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Participation {
    Partial,
    Total,
}

impl Participation {
    pub fn as_str(&self) -> &'static str {
        match self {
            Participation::Partial => "partial",
            Participation::Total => "total",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "partial" => Some(Participation::Partial),
            "total" => Some(Participation::Total),
            _ => None,
        }
    }
}

impl fmt::Display for Participation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A Chen-notation relationship (diamond)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Relationship {
    pub id: ElementId,
    pub name: String,
    /// Participating entities; a recursive relationship lists an entity twice
    #[serde(default)]
    pub entity_ids: Vec<ElementId>,
    #[serde(default)]
    pub attributes: Vec<AttributeRecord>,
    #[serde(default)]
    pub cardinality: IndexMap<ElementId, Cardinality>,
    #[serde(default)]
    pub participation: IndexMap<ElementId, Participation>,
    /// Identifying relationship of a weak entity
    #[serde(default)]
    pub is_weak: bool,
    pub position: Position,
    #[serde(default = "default_relationship_size")]
    pub size: Size,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub warnings: Vec<String>,
}

fn default_relationship_size() -> Size {
    DEFAULT_RELATIONSHIP_SIZE
}

impl Relationship {
    pub fn new(id: ElementId, name: impl Into<String>, position: Position) -> Self {
        Self {
            id,
            name: name.into(),
            entity_ids: Vec::new(),
            attributes: Vec::new(),
            cardinality: IndexMap::new(),
            participation: IndexMap::new(),
            is_weak: false,
            position,
            size: DEFAULT_RELATIONSHIP_SIZE,
            warnings: Vec::new(),
        }
    }

    pub fn rect(&self) -> egui::Rect {
        super::element_rect(self.position, self.size)
    }

    /// Drops one occurrence of `entity_id`, and its map entries once none remain
    pub(crate) fn remove_participant_once(&mut self, entity_id: ElementId) {
        if let Some(index) = self.entity_ids.iter().position(|id| *id == entity_id) {
            self.entity_ids.remove(index);
        }
        if !self.entity_ids.contains(&entity_id) {
            self.cardinality.shift_remove(&entity_id);
            self.participation.shift_remove(&entity_id);
        }
    }

    /// Drops every occurrence of `entity_id`
    pub(crate) fn remove_participant(&mut self, entity_id: ElementId) {
        self.entity_ids.retain(|id| *id != entity_id);
        self.cardinality.shift_remove(&entity_id);
        self.participation.shift_remove(&entity_id);
    }
}
