//! The editing session: one diagram, its undo history and its listeners.
//!
//! Every mutation goes through [`Editor::execute`], which keeps three things
//! in step with the diagram:
//!
//! - the undo history (a snapshot is recorded for every applied command),
//! - the cached warnings of entities and relationships near the change,
//! - the subscribers of the [`EventBus`].
//!
//! # Example
//!
//! ```rust
//! use egui::pos2;
//! use er_editor::{Command, Editor, EditorConfig};
//!
//! let mut editor = Editor::new(EditorConfig::default());
//! let outcome = editor.execute(Command::AddEntity { position: pos2(10.0, 10.0) }).unwrap();
//! let id = outcome.created().unwrap();
//! assert!(!editor.warnings_for(id).is_empty());
//!
//! editor.undo().unwrap();
//! assert!(editor.diagram().is_empty());
//! ```

use indexmap::IndexSet;
use log::{debug, info, warn};

use crate::command::{Change, Command, CommandError, CommandOutcome, CommandResult, History};
use crate::config::EditorConfig;
use crate::event::{DiagramEvent, EventBus, EventHandler};
use crate::model::{Diagram, ElementId, ElementKind};
use crate::validation::{ValidationIssue, ValidationRules, Validator};

/// Owns the diagram being edited and coordinates history, validation and events.
#[derive(Debug)]
pub struct Editor {
    diagram: Diagram,
    config: EditorConfig,
    history: History,
    event_bus: EventBus,
}

impl Default for Editor {
    fn default() -> Self {
        Self::new(EditorConfig::default())
    }
}

impl Editor {
    /// Creates an editor with an empty diagram
    pub fn new(config: EditorConfig) -> Self {
        Self::with_diagram(Diagram::new(), config)
    }

    /// Creates an editor for an existing (possibly imported) diagram.
    ///
    /// Cached warnings are recomputed for every entity and relationship when
    /// validation is enabled, and cleared otherwise.
    pub fn with_diagram(diagram: Diagram, config: EditorConfig) -> Self {
        let mut editor = Self {
            diagram,
            history: History::new(config.history_limit),
            config,
            event_bus: EventBus::new(),
        };
        editor.refresh_all_warnings();
        editor
    }

    pub fn diagram(&self) -> &Diagram {
        &self.diagram
    }

    pub fn into_diagram(self) -> Diagram {
        self.diagram
    }

    pub fn config(&self) -> &EditorConfig {
        &self.config
    }

    pub fn event_bus(&self) -> &EventBus {
        &self.event_bus
    }

    /// Subscribe a handler to every event emitted from now on. Returns the
    /// number of subscribed handlers.
    pub fn subscribe(&self, handler: impl EventHandler + 'static) -> usize {
        self.event_bus.subscribe(Box::new(handler))
    }

    /// Apply `command`, record an undo snapshot and refresh nearby warnings.
    ///
    /// A rejected command leaves the diagram and the history untouched and
    /// emits nothing.
    pub fn execute(&mut self, command: Command) -> CommandResult {
        let before = self.diagram.clone();

        let outcome = match command.apply(&mut self.diagram) {
            Ok(outcome) => outcome,
            Err(err) => {
                warn!("Rejected {}: {}", command.name(), err);
                return Err(err.into());
            }
        };
        info!("Applied {} ({} changes)", command.name(), outcome.changes.len());

        let affected = if self.config.validation_enabled {
            let mut affected = IndexSet::new();
            for id in outcome.ids() {
                affected.insert(id);
                collect_neighbours(&before, id, &mut affected);
                collect_neighbours(&self.diagram, id, &mut affected);
            }
            affected
        } else {
            IndexSet::new()
        };

        self.history.record(before);
        self.emit_changes(&outcome);
        self.refresh_warnings(affected);

        Ok(outcome)
    }

    /// Restore the diagram as it was before the last applied command
    pub fn undo(&mut self) -> Result<(), CommandError> {
        let previous = self
            .history
            .undo(&self.diagram)
            .ok_or(CommandError::NothingToUndo)?;
        self.restore(previous);
        Ok(())
    }

    /// Re-apply the last undone command
    pub fn redo(&mut self) -> Result<(), CommandError> {
        let next = self
            .history
            .redo(&self.diagram)
            .ok_or(CommandError::NothingToRedo)?;
        self.restore(next);
        Ok(())
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    /// Turn incremental validation on or off. Turning it off clears every
    /// cached warning; turning it on recomputes them all.
    pub fn set_validation_enabled(&mut self, enabled: bool) {
        if self.config.validation_enabled == enabled {
            return;
        }
        self.config.validation_enabled = enabled;
        info!("Validation {}", if enabled { "enabled" } else { "disabled" });
        self.refresh_all_warnings();
    }

    pub fn set_rules(&mut self, rules: ValidationRules) {
        self.config.rules = rules;
        self.refresh_all_warnings();
    }

    /// Validate the whole diagram with the configured rules
    pub fn issues(&self) -> Vec<ValidationIssue> {
        Validator::new(&self.diagram, &self.config.rules).diagram()
    }

    /// Cached warnings of an entity or relationship; empty for anything else
    pub fn warnings_for(&self, id: ElementId) -> &[String] {
        if let Some(entity) = self.diagram.entity(id) {
            &entity.warnings
        } else if let Some(relationship) = self.diagram.relationship(id) {
            &relationship.warnings
        } else {
            &[]
        }
    }

    fn restore(&mut self, diagram: Diagram) {
        self.diagram = diagram;
        self.refresh_all_warnings();
        self.event_bus.emit(DiagramEvent::HistoryRestored);
    }

    fn emit_changes(&self, outcome: &CommandOutcome) {
        for change in &outcome.changes {
            let event = match *change {
                Change::Added(id, kind) => DiagramEvent::ElementAdded { id, kind },
                Change::Changed(id) => DiagramEvent::ElementChanged { id },
                Change::Moved(id) => DiagramEvent::ElementMoved { id },
                Change::Deleted(id) => DiagramEvent::ElementDeleted { id },
            };
            self.event_bus.emit(event);
        }
    }

    fn refresh_all_warnings(&mut self) {
        let ids: IndexSet<ElementId> = self
            .diagram
            .entities()
            .map(|entity| entity.id)
            .chain(self.diagram.relationships().map(|relationship| relationship.id))
            .collect();

        if self.config.validation_enabled {
            self.refresh_warnings(ids);
        } else {
            for id in ids {
                self.store_warnings(id, Vec::new());
            }
        }
    }

    /// Recompute and store the warnings of every entity/relationship in `ids`
    fn refresh_warnings(&mut self, ids: IndexSet<ElementId>) {
        if !self.config.validation_enabled {
            return;
        }

        let validator = Validator::new(&self.diagram, &self.config.rules);
        let fresh: Vec<(ElementId, Vec<String>)> = ids
            .into_iter()
            .filter(|id| {
                self.diagram.entity(*id).is_some() || self.diagram.relationship(*id).is_some()
            })
            .map(|id| (id, validator.element(id)))
            .collect();

        debug!("Refreshing warnings of {} elements", fresh.len());
        for (id, warnings) in fresh {
            let count = warnings.len();
            if self.store_warnings(id, warnings) {
                self.event_bus
                    .emit(DiagramEvent::WarningsChanged { id, count });
            }
        }
    }

    /// Returns true if the cached warnings differed
    fn store_warnings(&mut self, id: ElementId, warnings: Vec<String>) -> bool {
        let cache = match self.diagram.kind_of(id) {
            Some(ElementKind::Entity) => self.diagram.entity_mut(id).map(|e| &mut e.warnings),
            Some(ElementKind::Relationship) => {
                self.diagram.relationship_mut(id).map(|r| &mut r.warnings)
            }
            _ => None,
        };
        let Some(cache) = cache else {
            return false;
        };

        if *cache == warnings {
            false
        } else {
            *cache = warnings;
            true
        }
    }
}

/// Elements whose warnings can depend on `id`
fn collect_neighbours(diagram: &Diagram, id: ElementId, out: &mut IndexSet<ElementId>) {
    if diagram.entity(id).is_some() {
        out.extend(
            diagram
                .connections_of(id)
                .filter_map(|connection| connection.other_end(id)),
        );
        out.extend(
            diagram
                .relationships()
                .filter(|relationship| relationship.entity_ids.contains(&id))
                .map(|relationship| relationship.id),
        );
        for generalization in diagram.generalizations() {
            if generalization.parent_id == id || generalization.has_child(id) {
                out.insert(generalization.parent_id);
                out.extend(generalization.child_ids.iter().copied());
            }
        }
    } else if let Some(relationship) = diagram.relationship(id) {
        out.extend(relationship.entity_ids.iter().copied());
        out.extend(
            diagram
                .connections_of(id)
                .filter_map(|connection| connection.other_end(id)),
        );
    } else if let Some(attribute) = diagram.attribute(id) {
        if let Some(owner) = attribute.owner() {
            out.insert(owner.id());
        }
    } else if let Some(connection) = diagram.connection(id) {
        out.insert(connection.from_id);
        out.insert(connection.to_id);
    } else if let Some(generalization) = diagram.generalization(id) {
        out.insert(generalization.parent_id);
        out.extend(generalization.child_ids.iter().copied());
    }
}
