//! ER well-formedness checks.
//!
//! Every check returns human-readable warnings in a fixed order and never
//! fails: a malformed diagram is described, not rejected. There is no error
//! severity; all findings are advisory.

mod attribute;
mod connection;
mod entity;
mod generalization;
pub mod names;
mod relationship;

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::model::{Attribute, Connection, Diagram, ElementId, Entity, Generalization, Relationship};

pub use names::{
    is_attribute_name_available, is_entity_name_available, is_relationship_name_available,
};

/// Cardinality strings a connection may carry
pub const CARDINALITIES: [&str; 7] = ["1", "N", "1:N", "N:1", "1:1", "N:N", "M:N"];

/// Participation strings a connection may carry
pub const PARTICIPATIONS: [&str; 2] = ["partial", "total"];

/// Switches for the advisory rules whose strictness is a modeling choice
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ValidationRules {
    /// Warn about entities without any connection
    pub check_orphans: bool,
    /// Warn when a weak entity hangs off more than one identifying relationship
    pub require_single_identifying_relationship: bool,
    /// Warn about ISA hierarchies with a single child
    pub warn_single_isa_child: bool,
}

impl Default for ValidationRules {
    fn default() -> Self {
        Self {
            check_orphans: true,
            require_single_identifying_relationship: true,
            warn_single_isa_child: true,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    #[default]
    Warning,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Warning => f.write_str("warning"),
        }
    }
}

/// All warnings of one element, joined with `"; "`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationIssue {
    pub element_id: ElementId,
    pub message: String,
    pub severity: Severity,
}

impl fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} [{}]: {}", self.severity, self.element_id, self.message)
    }
}

/// Runs the rule sets against one diagram
#[derive(Debug, Clone, Copy)]
pub struct Validator<'a> {
    diagram: &'a Diagram,
    rules: &'a ValidationRules,
}

impl<'a> Validator<'a> {
    pub fn new(diagram: &'a Diagram, rules: &'a ValidationRules) -> Self {
        Self { diagram, rules }
    }

    pub fn entity(&self, entity: &Entity) -> Vec<String> {
        entity::check(entity, self.diagram, self.rules)
    }

    pub fn relationship(&self, relationship: &Relationship) -> Vec<String> {
        relationship::check(relationship, self.diagram)
    }

    pub fn attribute(&self, attribute: &Attribute) -> Vec<String> {
        attribute::check(attribute, self.diagram)
    }

    pub fn connection(&self, connection: &Connection) -> Vec<String> {
        connection::check(connection, self.diagram)
    }

    pub fn generalization(&self, generalization: &Generalization) -> Vec<String> {
        generalization::check(generalization, self.diagram, self.rules)
    }

    /// Warnings for whichever element `id` names; empty for unknown ids
    pub fn element(&self, id: ElementId) -> Vec<String> {
        let diagram = self.diagram;
        if let Some(entity) = diagram.entity(id) {
            self.entity(entity)
        } else if let Some(relationship) = diagram.relationship(id) {
            self.relationship(relationship)
        } else if let Some(attribute) = diagram.attribute(id) {
            self.attribute(attribute)
        } else if let Some(connection) = diagram.connection(id) {
            self.connection(connection)
        } else if let Some(generalization) = diagram.generalization(id) {
            self.generalization(generalization)
        } else {
            Vec::new()
        }
    }

    /// One issue per element with at least one warning
    pub fn diagram(&self) -> Vec<ValidationIssue> {
        let diagram = self.diagram;
        let mut issues = Vec::new();
        let mut push = |element_id: ElementId, warnings: Vec<String>| {
            if !warnings.is_empty() {
                issues.push(ValidationIssue {
                    element_id,
                    message: warnings.join("; "),
                    severity: Severity::Warning,
                });
            }
        };

        for entity in diagram.entities() {
            push(entity.id, self.entity(entity));
        }
        for relationship in diagram.relationships() {
            push(relationship.id, self.relationship(relationship));
        }
        for attribute in diagram.attributes() {
            push(attribute.id, self.attribute(attribute));
        }
        for connection in diagram.connections() {
            push(connection.id, self.connection(connection));
        }
        for generalization in diagram.generalizations() {
            push(generalization.id, self.generalization(generalization));
        }
        issues
    }
}

pub fn validate_entity(entity: &Entity, diagram: &Diagram) -> Vec<String> {
    Validator::new(diagram, &ValidationRules::default()).entity(entity)
}

pub fn validate_relationship(relationship: &Relationship, diagram: &Diagram) -> Vec<String> {
    Validator::new(diagram, &ValidationRules::default()).relationship(relationship)
}

pub fn validate_attribute(attribute: &Attribute, diagram: &Diagram) -> Vec<String> {
    Validator::new(diagram, &ValidationRules::default()).attribute(attribute)
}

pub fn validate_connection(connection: &Connection, diagram: &Diagram) -> Vec<String> {
    Validator::new(diagram, &ValidationRules::default()).connection(connection)
}

pub fn validate_generalization(generalization: &Generalization, diagram: &Diagram) -> Vec<String> {
    Validator::new(diagram, &ValidationRules::default()).generalization(generalization)
}

/// Validates every element with the default rules
pub fn validate_diagram(diagram: &Diagram) -> Vec<ValidationIssue> {
    Validator::new(diagram, &ValidationRules::default()).diagram()
}

/// A display name for an element referenced by id, falling back to the id
pub(crate) fn display_name(diagram: &Diagram, id: ElementId) -> String {
    if let Some(entity) = diagram.entity(id) {
        entity.name.clone()
    } else if let Some(relationship) = diagram.relationship(id) {
        relationship.name.clone()
    } else {
        id.to_string()
    }
}
