use serde::{Deserialize, Serialize};

use super::{ElementId, Position, Size, DEFAULT_ATTRIBUTE_SIZE};

/// The modeling flags shared by embedded and standalone attribute records
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AttributeFlags {
    pub is_key: bool,
    pub is_discriminant: bool,
    pub is_multivalued: bool,
    pub is_derived: bool,
}

impl AttributeFlags {
    pub fn key() -> Self {
        Self {
            is_key: true,
            ..Self::default()
        }
    }

    pub fn discriminant() -> Self {
        Self {
            is_discriminant: true,
            ..Self::default()
        }
    }
}

/// The element an attribute belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", tag = "kind", content = "id")]
pub enum AttributeOwner {
    Entity(ElementId),
    Relationship(ElementId),
}

impl AttributeOwner {
    pub fn id(&self) -> ElementId {
        match self {
            AttributeOwner::Entity(id) | AttributeOwner::Relationship(id) => *id,
        }
    }
}

/// An attribute as embedded in its owning entity or relationship.
///
/// `id` is the id of the standalone [`Attribute`] twin.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttributeRecord {
    pub id: ElementId,
    pub name: String,
    #[serde(flatten)]
    pub flags: AttributeFlags,
}

/// The canvas-visible twin of an embedded attribute record.
///
/// Records built through the [`Diagram`](super::Diagram) API always have
/// exactly one owner. The owner ids are stored as two optional fields so
/// that diagrams deserialized from untyped sources keep whatever they
/// carried; validation reports both-set and neither-set records.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Attribute {
    pub id: ElementId,
    pub name: String,
    #[serde(flatten)]
    pub flags: AttributeFlags,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    entity_id: Option<ElementId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    relationship_id: Option<ElementId>,
    pub position: Position,
    #[serde(default = "default_attribute_size")]
    pub size: Size,
}

fn default_attribute_size() -> Size {
    DEFAULT_ATTRIBUTE_SIZE
}

impl Attribute {
    pub fn new(
        id: ElementId,
        name: impl Into<String>,
        flags: AttributeFlags,
        owner: AttributeOwner,
        position: Position,
    ) -> Self {
        let (entity_id, relationship_id) = match owner {
            AttributeOwner::Entity(id) => (Some(id), None),
            AttributeOwner::Relationship(id) => (None, Some(id)),
        };
        Self {
            id,
            name: name.into(),
            flags,
            entity_id,
            relationship_id,
            position,
            size: DEFAULT_ATTRIBUTE_SIZE,
        }
    }

    /// The owner, if exactly one owner id is set
    pub fn owner(&self) -> Option<AttributeOwner> {
        match (self.entity_id, self.relationship_id) {
            (Some(id), None) => Some(AttributeOwner::Entity(id)),
            (None, Some(id)) => Some(AttributeOwner::Relationship(id)),
            _ => None,
        }
    }

    pub fn entity_id(&self) -> Option<ElementId> {
        self.entity_id
    }

    pub fn relationship_id(&self) -> Option<ElementId> {
        self.relationship_id
    }

    /// True if either owner field points at `id`
    pub fn is_owned_by(&self, id: ElementId) -> bool {
        self.entity_id == Some(id) || self.relationship_id == Some(id)
    }

    pub fn record(&self) -> AttributeRecord {
        AttributeRecord {
            id: self.id,
            name: self.name.clone(),
            flags: self.flags,
        }
    }
}
