use indexmap::IndexMap;
use log::{debug, info, warn};
use serde::{Deserialize, Serialize};

use super::{
    Attribute, AttributeFlags, AttributeOwner, AttributeRecord, Cardinality, Connection, ConnectionUpdate,
    ElementId, ElementKind, Entity, Generalization, Participation, Position, Relationship, Size,
};
use crate::error::{DiagramError, DiagramResult};
use crate::geometry::{self, Endpoint};
use crate::validation::names;

/// The aggregate owning every element of one ER diagram.
///
/// Collections keep insertion order, which is also the order validation
/// reports issues in. All cross references are ids; the mutation methods
/// keep them consistent, including the cascades on delete.
///
/// Deserialized arenas are re-keyed by each record's own `id`, so a map key
/// that disagrees with its record cannot hide the record from lookups.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", from = "DiagramRecords")]
pub struct Diagram {
    entities: IndexMap<ElementId, Entity>,
    relationships: IndexMap<ElementId, Relationship>,
    attributes: IndexMap<ElementId, Attribute>,
    connections: IndexMap<ElementId, Connection>,
    generalizations: IndexMap<ElementId, Generalization>,
}

/// Wire shape of a [`Diagram`] before the arenas are re-keyed.
#[derive(Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
struct DiagramRecords {
    entities: IndexMap<ElementId, Entity>,
    relationships: IndexMap<ElementId, Relationship>,
    attributes: IndexMap<ElementId, Attribute>,
    connections: IndexMap<ElementId, Connection>,
    generalizations: IndexMap<ElementId, Generalization>,
}

fn rekey<T>(
    records: IndexMap<ElementId, T>,
    id_of: impl Fn(&T) -> ElementId,
) -> IndexMap<ElementId, T> {
    records
        .into_iter()
        .map(|(key, record)| {
            let id = id_of(&record);
            if key != id {
                warn!("record stored under {key} carries id {id}; re-keying");
            }
            (id, record)
        })
        .collect()
}

impl From<DiagramRecords> for Diagram {
    fn from(records: DiagramRecords) -> Self {
        Self {
            entities: rekey(records.entities, |e| e.id),
            relationships: rekey(records.relationships, |r| r.id),
            attributes: rekey(records.attributes, |a| a.id),
            connections: rekey(records.connections, |c| c.id),
            generalizations: rekey(records.generalizations, |g| g.id),
        }
    }
}

impl Diagram {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
            && self.relationships.is_empty()
            && self.attributes.is_empty()
            && self.connections.is_empty()
            && self.generalizations.is_empty()
    }

    // ---- queries ----

    pub fn entity(&self, id: ElementId) -> Option<&Entity> {
        self.entities.get(&id)
    }

    pub fn relationship(&self, id: ElementId) -> Option<&Relationship> {
        self.relationships.get(&id)
    }

    pub fn attribute(&self, id: ElementId) -> Option<&Attribute> {
        self.attributes.get(&id)
    }

    pub fn connection(&self, id: ElementId) -> Option<&Connection> {
        self.connections.get(&id)
    }

    pub fn generalization(&self, id: ElementId) -> Option<&Generalization> {
        self.generalizations.get(&id)
    }

    pub(crate) fn entity_mut(&mut self, id: ElementId) -> Option<&mut Entity> {
        self.entities.get_mut(&id)
    }

    pub(crate) fn relationship_mut(&mut self, id: ElementId) -> Option<&mut Relationship> {
        self.relationships.get_mut(&id)
    }

    pub(crate) fn connection_mut(&mut self, id: ElementId) -> Option<&mut Connection> {
        self.connections.get_mut(&id)
    }

    pub fn entities(&self) -> impl Iterator<Item = &Entity> + Clone {
        self.entities.values()
    }

    pub fn relationships(&self) -> impl Iterator<Item = &Relationship> + Clone {
        self.relationships.values()
    }

    pub fn attributes(&self) -> impl Iterator<Item = &Attribute> + Clone {
        self.attributes.values()
    }

    pub fn connections(&self) -> impl Iterator<Item = &Connection> + Clone {
        self.connections.values()
    }

    pub fn generalizations(&self) -> impl Iterator<Item = &Generalization> + Clone {
        self.generalizations.values()
    }

    /// Connections with `id` at either end
    pub fn connections_of(&self, id: ElementId) -> impl Iterator<Item = &Connection> + Clone {
        self.connections.values().filter(move |c| c.touches(id))
    }

    pub fn kind_of(&self, id: ElementId) -> Option<ElementKind> {
        if self.entities.contains_key(&id) {
            Some(ElementKind::Entity)
        } else if self.relationships.contains_key(&id) {
            Some(ElementKind::Relationship)
        } else if self.attributes.contains_key(&id) {
            Some(ElementKind::Attribute)
        } else if self.connections.contains_key(&id) {
            Some(ElementKind::Connection)
        } else if self.generalizations.contains_key(&id) {
            Some(ElementKind::Generalization)
        } else {
            None
        }
    }

    pub fn contains(&self, id: ElementId) -> bool {
        self.kind_of(id).is_some()
    }

    /// True if the entity is a child in any ISA hierarchy
    pub fn is_isa_child(&self, id: ElementId) -> bool {
        self.generalizations.values().any(|g| g.has_child(id))
    }

    /// Bounding rectangle of a positioned element
    pub fn element_rect(&self, id: ElementId) -> Option<egui::Rect> {
        match self.kind_of(id)? {
            ElementKind::Entity => self.entities.get(&id).map(Entity::rect),
            ElementKind::Relationship => self.relationships.get(&id).map(Relationship::rect),
            ElementKind::Attribute => self
                .attributes
                .get(&id)
                .map(|a| super::element_rect(a.position, a.size)),
            ElementKind::Generalization => self
                .generalizations
                .get(&id)
                .map(|g| super::element_rect(g.position, g.size)),
            ElementKind::Connection => None,
        }
    }

    /// Geometry of an element a connection can attach to
    pub fn endpoint(&self, id: ElementId) -> Option<Endpoint> {
        if let Some(entity) = self.entities.get(&id) {
            Some(Endpoint {
                id,
                kind: ElementKind::Entity,
                rect: entity.rect(),
            })
        } else {
            self.relationships.get(&id).map(|relationship| Endpoint {
                id,
                kind: ElementKind::Relationship,
                rect: relationship.rect(),
            })
        }
    }

    /// The `(entity, relationship)` pair a connection links, if it links one
    pub fn participant_pair(&self, connection: &Connection) -> Option<(ElementId, ElementId)> {
        let from = self.kind_of(connection.from_id)?;
        let to = self.kind_of(connection.to_id)?;
        match (from, to) {
            (ElementKind::Entity, ElementKind::Relationship) => {
                Some((connection.from_id, connection.to_id))
            }
            (ElementKind::Relationship, ElementKind::Entity) => {
                Some((connection.to_id, connection.from_id))
            }
            _ => None,
        }
    }

    // ---- raw insertion for importers ----

    /// Inserts records as-is, without checking any invariant. Meant for
    /// importers; the result should be run through validation.
    pub fn insert_entity(&mut self, entity: Entity) {
        self.entities.insert(entity.id, entity);
    }

    pub fn insert_relationship(&mut self, relationship: Relationship) {
        self.relationships.insert(relationship.id, relationship);
    }

    pub fn insert_attribute(&mut self, attribute: Attribute) {
        self.attributes.insert(attribute.id, attribute);
    }

    pub fn insert_connection(&mut self, connection: Connection) {
        self.connections.insert(connection.id, connection);
    }

    pub fn insert_generalization(&mut self, generalization: Generalization) {
        self.generalizations.insert(generalization.id, generalization);
    }

    // ---- creation ----

    /// Places a new entity with a generated name and no attributes
    pub fn add_entity(&mut self, position: Position) -> ElementId {
        let id = ElementId::new();
        let name = names::default_name("Entity", self.entities.values().map(|e| e.name.as_str()));
        info!("Adding entity {name} ({id})");
        self.entities.insert(id, Entity::new(id, name, position));
        id
    }

    pub fn add_relationship(&mut self, position: Position) -> ElementId {
        let id = ElementId::new();
        let name = names::default_name(
            "Relationship",
            self.relationships.values().map(|r| r.name.as_str()),
        );
        info!("Adding relationship {name} ({id})");
        self.relationships
            .insert(id, Relationship::new(id, name, position));
        id
    }

    /// Adds an attribute to an entity or relationship.
    ///
    /// Without a name, `Attribute N` is generated, unique within the owner.
    pub fn add_attribute(
        &mut self,
        owner: AttributeOwner,
        name: Option<&str>,
        flags: AttributeFlags,
        position: Position,
    ) -> DiagramResult<ElementId> {
        self.check_owner(owner)?;
        let name = match name {
            Some(name) => names::check_attribute_name(self, owner.id(), name, None)?,
            None => names::default_name(
                "Attribute",
                self.attributes
                    .values()
                    .filter(|a| a.is_owned_by(owner.id()))
                    .map(|a| a.name.as_str()),
            ),
        };

        let id = ElementId::new();
        let attribute = Attribute::new(id, name, flags, owner, position);
        let record = attribute.record();
        match owner {
            AttributeOwner::Entity(owner_id) => {
                if let Some(entity) = self.entities.get_mut(&owner_id) {
                    entity.attributes.push(record);
                }
            }
            AttributeOwner::Relationship(owner_id) => {
                if let Some(relationship) = self.relationships.get_mut(&owner_id) {
                    relationship.attributes.push(record);
                }
            }
        }
        info!("Adding attribute {} ({id}) to {}", attribute.name, owner.id());
        self.attributes.insert(id, attribute);
        Ok(id)
    }

    /// Links two entities/relationships and routes the new connection.
    ///
    /// Linking an entity to a relationship also registers the entity as a
    /// participant, with cardinality `1` and partial participation unless
    /// the relationship already had values for it.
    pub fn connect(&mut self, from: ElementId, to: ElementId) -> DiagramResult<ElementId> {
        if from == to {
            return Err(DiagramError::SelfConnection(from));
        }
        self.check_linkable(from)?;
        self.check_linkable(to)?;

        let id = ElementId::new();
        let mut connection = Connection::new(id, from, to);
        if let Some((entity_id, relationship_id)) = self.participant_pair(&connection) {
            connection.cardinality = Some(Cardinality::One.as_str().to_string());
            connection.participation = Some(Participation::Partial.as_str().to_string());
            if let Some(relationship) = self.relationships.get_mut(&relationship_id) {
                relationship.entity_ids.push(entity_id);
                relationship
                    .cardinality
                    .entry(entity_id)
                    .or_insert(Cardinality::One);
                relationship
                    .participation
                    .entry(entity_id)
                    .or_insert(Participation::Partial);
            }
        }

        info!("Connecting {from} to {to} ({id})");
        self.connections.insert(id, connection);
        geometry::reroute_connection(self, id);
        Ok(id)
    }

    /// Creates an ISA hierarchy. Duplicate child ids are collapsed.
    pub fn add_generalization(
        &mut self,
        parent_id: ElementId,
        child_ids: Vec<ElementId>,
        is_total: bool,
        position: Position,
    ) -> DiagramResult<ElementId> {
        self.check_kind(parent_id, ElementKind::Entity)?;
        if child_ids.is_empty() {
            return Err(DiagramError::NoChildren);
        }
        let mut children = Vec::with_capacity(child_ids.len());
        for child_id in child_ids {
            if child_id == parent_id {
                return Err(DiagramError::ParentIsChild(child_id));
            }
            self.check_kind(child_id, ElementKind::Entity)?;
            if !children.contains(&child_id) {
                children.push(child_id);
            }
        }

        let id = ElementId::new();
        info!("Adding generalization {id} of {parent_id} with {} child(ren)", children.len());
        self.generalizations.insert(
            id,
            Generalization::new(id, parent_id, children, is_total, position),
        );
        Ok(id)
    }

    // ---- updates ----

    /// Moves a positioned element. Connections touching a moved entity or
    /// relationship are rerouted before this returns.
    pub fn move_element(&mut self, id: ElementId, position: Position) -> DiagramResult<()> {
        match self.kind_of(id).ok_or(DiagramError::NotFound(id))? {
            ElementKind::Entity => {
                if let Some(entity) = self.entities.get_mut(&id) {
                    entity.position = position;
                }
                geometry::update_connection_points_on_move(self, id);
            }
            ElementKind::Relationship => {
                if let Some(relationship) = self.relationships.get_mut(&id) {
                    relationship.position = position;
                }
                geometry::update_connection_points_on_move(self, id);
            }
            ElementKind::Attribute => {
                if let Some(attribute) = self.attributes.get_mut(&id) {
                    attribute.position = position;
                }
            }
            ElementKind::Generalization => {
                if let Some(generalization) = self.generalizations.get_mut(&id) {
                    generalization.position = position;
                }
            }
            ElementKind::Connection => {
                return Err(DiagramError::WrongKind {
                    id,
                    expected: "positioned element",
                });
            }
        }
        debug!("Moved {id} to {position:?}");
        Ok(())
    }

    pub fn resize_element(&mut self, id: ElementId, size: Size) -> DiagramResult<()> {
        match self.kind_of(id).ok_or(DiagramError::NotFound(id))? {
            ElementKind::Entity => {
                if let Some(entity) = self.entities.get_mut(&id) {
                    entity.size = size;
                }
                geometry::update_connection_points_on_move(self, id);
            }
            ElementKind::Relationship => {
                if let Some(relationship) = self.relationships.get_mut(&id) {
                    relationship.size = size;
                }
                geometry::update_connection_points_on_move(self, id);
            }
            ElementKind::Attribute => {
                if let Some(attribute) = self.attributes.get_mut(&id) {
                    attribute.size = size;
                }
            }
            ElementKind::Generalization => {
                if let Some(generalization) = self.generalizations.get_mut(&id) {
                    generalization.size = size;
                }
            }
            ElementKind::Connection => {
                return Err(DiagramError::WrongKind {
                    id,
                    expected: "positioned element",
                });
            }
        }
        debug!("Resized {id} to {size:?}");
        Ok(())
    }

    pub fn set_rotation(&mut self, id: ElementId, rotation: Option<f32>) -> DiagramResult<()> {
        self.check_kind(id, ElementKind::Entity)?;
        if let Some(entity) = self.entities.get_mut(&id) {
            entity.rotation = rotation;
        }
        Ok(())
    }

    /// Renames an entity, relationship or attribute.
    ///
    /// Names are stored trimmed. Empty names and case-insensitive duplicates
    /// (among entities, among relationships, or among the attributes of one
    /// owner) are rejected.
    pub fn rename(&mut self, id: ElementId, name: &str) -> DiagramResult<()> {
        match self.kind_of(id).ok_or(DiagramError::NotFound(id))? {
            ElementKind::Entity => {
                let name = names::check_entity_name(self, name, Some(id))?;
                if let Some(entity) = self.entities.get_mut(&id) {
                    entity.name = name;
                }
            }
            ElementKind::Relationship => {
                let name = names::check_relationship_name(self, name, Some(id))?;
                if let Some(relationship) = self.relationships.get_mut(&id) {
                    relationship.name = name;
                }
            }
            ElementKind::Attribute => {
                let owner_id = self
                    .attributes
                    .get(&id)
                    .and_then(|a| a.entity_id().or(a.relationship_id()));
                let name = match owner_id {
                    Some(owner_id) => names::check_attribute_name(self, owner_id, name, Some(id))?,
                    None => names::trimmed(name)?,
                };
                if let Some(attribute) = self.attributes.get_mut(&id) {
                    attribute.name = name;
                }
                self.sync_embedded(id);
            }
            _ => {
                return Err(DiagramError::WrongKind {
                    id,
                    expected: "named element",
                });
            }
        }
        debug!("Renamed {id}");
        Ok(())
    }

    pub fn update_attribute_flags(
        &mut self,
        id: ElementId,
        flags: AttributeFlags,
    ) -> DiagramResult<()> {
        let attribute = self
            .attributes
            .get_mut(&id)
            .ok_or(DiagramError::NotFound(id))?;
        attribute.flags = flags;
        self.sync_embedded(id);
        Ok(())
    }

    /// Marks an entity as weak or a relationship as identifying
    pub fn set_weak(&mut self, id: ElementId, is_weak: bool) -> DiagramResult<()> {
        if let Some(entity) = self.entities.get_mut(&id) {
            entity.is_weak = is_weak;
        } else if let Some(relationship) = self.relationships.get_mut(&id) {
            relationship.is_weak = is_weak;
        } else if self.contains(id) {
            return Err(DiagramError::WrongKind {
                id,
                expected: "entity or relationship",
            });
        } else {
            return Err(DiagramError::NotFound(id));
        }
        Ok(())
    }

    /// Applies a partial update to a connection.
    ///
    /// Cardinality (`1`, `N`, `M`) and participation values are mirrored into
    /// the relationship's maps for the linked entity. Clearing a value, or
    /// setting one that does not parse, removes the entity's entry; the raw
    /// string stays on the connection. Changing the style or the waypoints
    /// rebuilds the path.
    pub fn update_connection(
        &mut self,
        id: ElementId,
        update: ConnectionUpdate,
    ) -> DiagramResult<()> {
        let reroutes = update.reroutes();
        let connection = self
            .connections
            .get_mut(&id)
            .ok_or(DiagramError::NotFound(id))?;

        let ConnectionUpdate {
            cardinality,
            participation,
            style,
            waypoints,
            label_position,
        } = update;
        if let Some(cardinality) = cardinality.clone() {
            connection.cardinality = cardinality;
        }
        if let Some(participation) = participation.clone() {
            connection.participation = participation;
        }
        if let Some(style) = style {
            connection.style = style;
        }
        if let Some(waypoints) = waypoints {
            connection.waypoints = waypoints;
        }
        if let Some(label_position) = label_position {
            connection.label_position = label_position;
        }

        let connection = connection.clone();
        if let Some((entity_id, relationship_id)) = self.participant_pair(&connection) {
            if let Some(relationship) = self.relationships.get_mut(&relationship_id) {
                // A cleared or unmappable value drops the entity's entry.
                if let Some(value) = cardinality {
                    match value.as_deref().map(str::trim).and_then(Cardinality::parse) {
                        Some(parsed) => {
                            relationship.cardinality.insert(entity_id, parsed);
                        }
                        None => {
                            relationship.cardinality.shift_remove(&entity_id);
                        }
                    }
                }
                if let Some(value) = participation {
                    match value.as_deref().map(str::trim).and_then(Participation::parse) {
                        Some(parsed) => {
                            relationship.participation.insert(entity_id, parsed);
                        }
                        None => {
                            relationship.participation.shift_remove(&entity_id);
                        }
                    }
                }
            }
        }

        if reroutes {
            geometry::reroute_connection(self, id);
        }
        Ok(())
    }

    pub fn add_child(&mut self, generalization_id: ElementId, child_id: ElementId) -> DiagramResult<()> {
        self.check_kind(child_id, ElementKind::Entity)?;
        let generalization = self
            .generalizations
            .get_mut(&generalization_id)
            .ok_or(DiagramError::NotFound(generalization_id))?;
        if generalization.parent_id == child_id {
            return Err(DiagramError::ParentIsChild(child_id));
        }
        if !generalization.has_child(child_id) {
            generalization.child_ids.push(child_id);
        }
        Ok(())
    }

    /// Removes a child from an ISA hierarchy; the hierarchy is kept even if
    /// no child remains.
    pub fn remove_child(
        &mut self,
        generalization_id: ElementId,
        child_id: ElementId,
    ) -> DiagramResult<()> {
        let generalization = self
            .generalizations
            .get_mut(&generalization_id)
            .ok_or(DiagramError::NotFound(generalization_id))?;
        generalization.child_ids.retain(|id| *id != child_id);
        Ok(())
    }

    pub fn set_total(&mut self, generalization_id: ElementId, is_total: bool) -> DiagramResult<()> {
        let generalization = self
            .generalizations
            .get_mut(&generalization_id)
            .ok_or(DiagramError::NotFound(generalization_id))?;
        generalization.is_total = is_total;
        Ok(())
    }

    // ---- deletion ----

    /// Deletes an element and everything that depends on it.
    ///
    /// Returns every removed id, starting with `id`.
    pub fn delete(&mut self, id: ElementId) -> DiagramResult<Vec<ElementId>> {
        let kind = self.kind_of(id).ok_or(DiagramError::NotFound(id))?;
        let mut removed = vec![id];

        match kind {
            ElementKind::Entity => {
                self.entities.shift_remove(&id);
                self.remove_owned_attributes(id, &mut removed);
                self.remove_connections_of(id, &mut removed);
                for relationship in self.relationships.values_mut() {
                    relationship.remove_participant(id);
                }
                let parented: Vec<ElementId> = self
                    .generalizations
                    .values()
                    .filter(|g| g.parent_id == id)
                    .map(|g| g.id)
                    .collect();
                for generalization_id in parented {
                    self.generalizations.shift_remove(&generalization_id);
                    removed.push(generalization_id);
                }
                for generalization in self.generalizations.values_mut() {
                    generalization.child_ids.retain(|child| *child != id);
                }
            }
            ElementKind::Relationship => {
                self.relationships.shift_remove(&id);
                self.remove_owned_attributes(id, &mut removed);
                self.remove_connections_of(id, &mut removed);
            }
            ElementKind::Attribute => {
                if let Some(attribute) = self.attributes.shift_remove(&id) {
                    self.remove_embedded(&attribute);
                }
            }
            ElementKind::Connection => {
                if let Some(connection) = self.connections.get(&id).cloned() {
                    if let Some((entity_id, relationship_id)) = self.participant_pair(&connection) {
                        if let Some(relationship) = self.relationships.get_mut(&relationship_id) {
                            relationship.remove_participant_once(entity_id);
                        }
                    }
                }
                self.connections.shift_remove(&id);
            }
            ElementKind::Generalization => {
                self.generalizations.shift_remove(&id);
            }
        }

        info!("Deleted {kind} {id} ({} element(s) removed)", removed.len());
        Ok(removed)
    }

    fn remove_owned_attributes(&mut self, owner_id: ElementId, removed: &mut Vec<ElementId>) {
        let owned: Vec<ElementId> = self
            .attributes
            .values()
            .filter(|a| a.is_owned_by(owner_id))
            .map(|a| a.id)
            .collect();
        for attribute_id in owned {
            if let Some(attribute) = self.attributes.shift_remove(&attribute_id) {
                self.remove_embedded(&attribute);
            }
            removed.push(attribute_id);
        }
    }

    fn remove_connections_of(&mut self, id: ElementId, removed: &mut Vec<ElementId>) {
        let touching: Vec<ElementId> = self.connections_of(id).map(|c| c.id).collect();
        for connection_id in touching {
            self.connections.shift_remove(&connection_id);
            removed.push(connection_id);
        }
    }

    /// Drops the embedded twin of `attribute` from whichever owner lists it
    fn remove_embedded(&mut self, attribute: &Attribute) {
        if let Some(entity) = attribute.entity_id().and_then(|id| self.entities.get_mut(&id)) {
            entity.attributes.retain(|record| record.id != attribute.id);
        }
        if let Some(relationship) = attribute
            .relationship_id()
            .and_then(|id| self.relationships.get_mut(&id))
        {
            relationship.attributes.retain(|record| record.id != attribute.id);
        }
    }

    /// Copies a standalone attribute's name and flags into its embedded twin
    fn sync_embedded(&mut self, attribute_id: ElementId) {
        let Some(attribute) = self.attributes.get(&attribute_id) else {
            return;
        };
        let record = attribute.record();
        let (entity_id, relationship_id) = (attribute.entity_id(), attribute.relationship_id());

        if let Some(entity) = entity_id.and_then(|id| self.entities.get_mut(&id)) {
            replace_record(&mut entity.attributes, &record);
        }
        if let Some(relationship) = relationship_id.and_then(|id| self.relationships.get_mut(&id)) {
            replace_record(&mut relationship.attributes, &record);
        }
    }

    // ---- checks ----

    fn check_kind(&self, id: ElementId, expected: ElementKind) -> DiagramResult<()> {
        match self.kind_of(id) {
            Some(kind) if kind == expected => Ok(()),
            Some(_) => Err(DiagramError::wrong_kind(id, expected)),
            None => Err(DiagramError::NotFound(id)),
        }
    }

    fn check_linkable(&self, id: ElementId) -> DiagramResult<()> {
        match self.kind_of(id) {
            Some(ElementKind::Entity | ElementKind::Relationship) => Ok(()),
            Some(_) => Err(DiagramError::WrongKind {
                id,
                expected: "entity or relationship",
            }),
            None => Err(DiagramError::NotFound(id)),
        }
    }

    fn check_owner(&self, owner: AttributeOwner) -> DiagramResult<()> {
        let exists = match owner {
            AttributeOwner::Entity(id) => self.entities.contains_key(&id),
            AttributeOwner::Relationship(id) => self.relationships.contains_key(&id),
        };
        if exists {
            Ok(())
        } else {
            Err(DiagramError::MissingOwner(owner.id()))
        }
    }
}

fn replace_record(list: &mut [AttributeRecord], record: &AttributeRecord) {
    if let Some(existing) = list.iter_mut().find(|r| r.id == record.id) {
        *existing = record.clone();
    }
}
