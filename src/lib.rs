#![warn(clippy::all, rust_2018_idioms)]

pub mod command;
pub mod config;
pub mod editor;
pub mod error;
pub mod event;
pub mod geometry;
pub mod model;
pub mod validation;

pub use command::{Command, CommandError, CommandOutcome, History};
pub use config::{ConfigError, EditorConfig};
pub use editor::Editor;
pub use error::{DiagramError, DiagramResult};
pub use event::{DiagramEvent, EventBus, EventHandler, EventRecorder};
pub use model::{
    Attribute, AttributeFlags, AttributeOwner, Cardinality, Connection, ConnectionPoint,
    ConnectionUpdate, Diagram, ElementId, ElementKind, Entity, Generalization, Participation,
    Position, Relationship, RoutingStyle, Size,
};
pub use validation::{
    validate_attribute, validate_connection, validate_diagram, validate_entity,
    validate_generalization, validate_relationship, ValidationIssue, ValidationRules, Validator,
};
