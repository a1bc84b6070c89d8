//! Typed records for every element kind of a Chen-notation ER diagram.
//!
//! Cross references between records are always [`ElementId`]s; the
//! [`Diagram`] aggregate owns every record and keeps the references
//! consistent through its mutation methods.

mod attribute;
mod connection;
mod diagram;
mod entity;
mod generalization;
mod relationship;

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

pub use attribute::{Attribute, AttributeFlags, AttributeOwner, AttributeRecord};
pub use connection::{Connection, ConnectionPoint, ConnectionUpdate, RoutingStyle};
pub use diagram::Diagram;
pub use entity::Entity;
pub use generalization::Generalization;
pub use relationship::{Cardinality, Participation, Relationship};

/// Position of an element's top-left corner on the canvas.
pub type Position = egui::Pos2;

/// Width (`x`) and height (`y`) of an element.
pub type Size = egui::Vec2;

pub const DEFAULT_ENTITY_SIZE: Size = Size::new(120.0, 60.0);
pub const DEFAULT_RELATIONSHIP_SIZE: Size = Size::new(120.0, 80.0);
pub const DEFAULT_ATTRIBUTE_SIZE: Size = Size::new(100.0, 50.0);
pub const DEFAULT_GENERALIZATION_SIZE: Size = Size::new(60.0, 40.0);

/// A stable identifier for any element in a diagram
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ElementId(Uuid);

impl ElementId {
    /// Creates a fresh random id
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    pub fn as_uuid(&self) -> Uuid {
        self.0
    }
}

impl Default for ElementId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ElementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The kind of record an [`ElementId`] refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ElementKind {
    Entity,
    Relationship,
    Attribute,
    Connection,
    Generalization,
}

impl ElementKind {
    pub fn name(&self) -> &'static str {
        match self {
            ElementKind::Entity => "entity",
            ElementKind::Relationship => "relationship",
            ElementKind::Attribute => "attribute",
            ElementKind::Connection => "connection",
            ElementKind::Generalization => "generalization",
        }
    }
}

impl fmt::Display for ElementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Bounding rectangle of an element placed at `position` with `size`
pub fn element_rect(position: Position, size: Size) -> egui::Rect {
    egui::Rect::from_min_size(position, size)
}
