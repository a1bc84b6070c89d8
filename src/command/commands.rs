use serde::{Deserialize, Serialize};

use super::{Change, CommandOutcome};
use crate::error::DiagramResult;
use crate::model::{
    AttributeFlags, AttributeOwner, ConnectionUpdate, Diagram, ElementId, ElementKind, Position,
    Size,
};

/// Mutations the surrounding application can request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Command {
    /// Place a new entity with a generated name
    AddEntity { position: Position },

    /// Place a new relationship with a generated name
    AddRelationship { position: Position },

    /// Add an attribute to an entity or relationship
    AddAttribute {
        owner: AttributeOwner,
        name: Option<String>,
        flags: AttributeFlags,
        position: Position,
    },

    /// Link two entities/relationships
    Connect { from: ElementId, to: ElementId },

    /// Create an ISA hierarchy
    AddGeneralization {
        parent: ElementId,
        children: Vec<ElementId>,
        is_total: bool,
        position: Position,
    },

    Move { id: ElementId, position: Position },

    Resize { id: ElementId, size: Size },

    Rotate { id: ElementId, rotation: Option<f32> },

    Rename { id: ElementId, name: String },

    UpdateAttribute { id: ElementId, flags: AttributeFlags },

    SetWeak { id: ElementId, is_weak: bool },

    UpdateConnection {
        id: ElementId,
        update: ConnectionUpdate,
    },

    AddChild {
        generalization: ElementId,
        child: ElementId,
    },

    RemoveChild {
        generalization: ElementId,
        child: ElementId,
    },

    SetTotal {
        generalization: ElementId,
        is_total: bool,
    },

    /// Delete an element and everything depending on it
    Delete { id: ElementId },
}

impl Command {
    /// Apply the command to `diagram`.
    ///
    /// On error the diagram is left untouched.
    pub fn apply(&self, diagram: &mut Diagram) -> DiagramResult<CommandOutcome> {
        match self {
            Command::AddEntity { position } => Ok(CommandOutcome::added(
                diagram.add_entity(*position),
                ElementKind::Entity,
            )),

            Command::AddRelationship { position } => Ok(CommandOutcome::added(
                diagram.add_relationship(*position),
                ElementKind::Relationship,
            )),

            Command::AddAttribute {
                owner,
                name,
                flags,
                position,
            } => {
                let id = diagram.add_attribute(*owner, name.as_deref(), *flags, *position)?;
                let mut outcome = CommandOutcome::added(id, ElementKind::Attribute);
                outcome.changes.push(Change::Changed(owner.id()));
                Ok(outcome)
            }

            Command::Connect { from, to } => {
                let id = diagram.connect(*from, *to)?;
                Ok(CommandOutcome::added(id, ElementKind::Connection))
            }

            Command::AddGeneralization {
                parent,
                children,
                is_total,
                position,
            } => {
                let id =
                    diagram.add_generalization(*parent, children.clone(), *is_total, *position)?;
                Ok(CommandOutcome::added(id, ElementKind::Generalization))
            }

            Command::Move { id, position } => {
                diagram.move_element(*id, *position)?;
                Ok(CommandOutcome::moved(*id))
            }

            Command::Resize { id, size } => {
                diagram.resize_element(*id, *size)?;
                Ok(CommandOutcome::moved(*id))
            }

            Command::Rotate { id, rotation } => {
                diagram.set_rotation(*id, *rotation)?;
                Ok(CommandOutcome::moved(*id))
            }

            Command::Rename { id, name } => {
                diagram.rename(*id, name)?;
                Ok(CommandOutcome::changed(*id))
            }

            Command::UpdateAttribute { id, flags } => {
                diagram.update_attribute_flags(*id, *flags)?;
                Ok(CommandOutcome::changed(*id))
            }

            Command::SetWeak { id, is_weak } => {
                diagram.set_weak(*id, *is_weak)?;
                Ok(CommandOutcome::changed(*id))
            }

            Command::UpdateConnection { id, update } => {
                diagram.update_connection(*id, update.clone())?;
                Ok(CommandOutcome::changed(*id))
            }

            Command::AddChild {
                generalization,
                child,
            } => {
                diagram.add_child(*generalization, *child)?;
                Ok(CommandOutcome {
                    changes: vec![Change::Changed(*generalization), Change::Changed(*child)],
                })
            }

            Command::RemoveChild {
                generalization,
                child,
            } => {
                diagram.remove_child(*generalization, *child)?;
                Ok(CommandOutcome {
                    changes: vec![Change::Changed(*generalization), Change::Changed(*child)],
                })
            }

            Command::SetTotal {
                generalization,
                is_total,
            } => {
                diagram.set_total(*generalization, *is_total)?;
                Ok(CommandOutcome::changed(*generalization))
            }

            Command::Delete { id } => {
                let removed = diagram.delete(*id)?;
                Ok(CommandOutcome {
                    changes: removed.into_iter().map(Change::Deleted).collect(),
                })
            }
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Command::AddEntity { .. } => "AddEntity",
            Command::AddRelationship { .. } => "AddRelationship",
            Command::AddAttribute { .. } => "AddAttribute",
            Command::Connect { .. } => "Connect",
            Command::AddGeneralization { .. } => "AddGeneralization",
            Command::Move { .. } => "Move",
            Command::Resize { .. } => "Resize",
            Command::Rotate { .. } => "Rotate",
            Command::Rename { .. } => "Rename",
            Command::UpdateAttribute { .. } => "UpdateAttribute",
            Command::SetWeak { .. } => "SetWeak",
            Command::UpdateConnection { .. } => "UpdateConnection",
            Command::AddChild { .. } => "AddChild",
            Command::RemoveChild { .. } => "RemoveChild",
            Command::SetTotal { .. } => "SetTotal",
            Command::Delete { .. } => "Delete",
        }
    }
}
