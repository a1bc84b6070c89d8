use thiserror::Error;

use crate::model::{ElementId, ElementKind};

/// Reasons a diagram mutation is rejected.
///
/// A rejected mutation leaves the diagram exactly as it was.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DiagramError {
    #[error("No element with id {0}")]
    NotFound(ElementId),

    #[error("Element {id} is not a {expected}")]
    WrongKind { id: ElementId, expected: &'static str },

    #[error("Name must not be empty")]
    EmptyName,

    #[error("Name \"{0}\" is already in use")]
    DuplicateName(String),

    #[error("Cannot connect element {0} to itself")]
    SelfConnection(ElementId),

    #[error("Entity {0} cannot be a child of its own generalization")]
    ParentIsChild(ElementId),

    #[error("A generalization needs at least one child")]
    NoChildren,

    #[error("Attribute owner {0} does not exist")]
    MissingOwner(ElementId),
}

impl DiagramError {
    pub(crate) fn wrong_kind(id: ElementId, expected: ElementKind) -> Self {
        Self::WrongKind {
            id,
            expected: expected.name(),
        }
    }
}

/// Result type for diagram mutations
pub type DiagramResult<T> = Result<T, DiagramError>;
