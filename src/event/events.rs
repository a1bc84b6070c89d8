use crate::model::{ElementId, ElementKind};

/// Notifications broadcast after a command has been applied
#[derive(Debug, Clone, PartialEq)]
pub enum DiagramEvent {
    ElementAdded {
        id: ElementId,
        kind: ElementKind,
    },
    /// Properties changed (name, flags, weak flag, connection values...)
    ElementChanged {
        id: ElementId,
    },
    /// Position or size changed; connection paths were recomputed
    ElementMoved {
        id: ElementId,
    },
    ElementDeleted {
        id: ElementId,
    },
    /// The cached warnings of an entity or relationship were refreshed
    WarningsChanged {
        id: ElementId,
        count: usize,
    },
    /// The whole diagram was replaced by an undo or redo
    HistoryRestored,
}
