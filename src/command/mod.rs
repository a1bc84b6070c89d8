mod commands;
mod history;

use thiserror::Error;

use crate::error::DiagramError;
use crate::model::{ElementId, ElementKind};

pub use commands::Command;
pub use history::History;

/// Result type for command operations
pub type CommandResult = Result<CommandOutcome, CommandError>;

/// Errors that can occur during command execution
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    /// The diagram rejected the mutation and was left unchanged
    #[error(transparent)]
    Rejected(#[from] DiagramError),

    #[error("Nothing to undo")]
    NothingToUndo,

    #[error("Nothing to redo")]
    NothingToRedo,
}

/// One effect a command had on the diagram
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Change {
    Added(ElementId, ElementKind),
    Changed(ElementId),
    Moved(ElementId),
    Deleted(ElementId),
}

impl Change {
    pub fn id(&self) -> ElementId {
        match self {
            Change::Added(id, _) | Change::Changed(id) | Change::Moved(id) | Change::Deleted(id) => {
                *id
            }
        }
    }
}

/// What a successfully applied command did
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandOutcome {
    pub changes: Vec<Change>,
}

impl CommandOutcome {
    pub fn added(id: ElementId, kind: ElementKind) -> Self {
        Self {
            changes: vec![Change::Added(id, kind)],
        }
    }

    pub fn changed(id: ElementId) -> Self {
        Self {
            changes: vec![Change::Changed(id)],
        }
    }

    pub fn moved(id: ElementId) -> Self {
        Self {
            changes: vec![Change::Moved(id)],
        }
    }

    /// The id of the element the command created, if any
    pub fn created(&self) -> Option<ElementId> {
        self.changes.iter().find_map(|change| match change {
            Change::Added(id, _) => Some(*id),
            _ => None,
        })
    }

    pub fn ids(&self) -> impl Iterator<Item = ElementId> + '_ {
        self.changes.iter().map(Change::id)
    }
}
