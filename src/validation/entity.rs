use super::{ValidationRules, display_name};
use crate::model::{Diagram, ElementId, Entity};

pub(super) fn check(entity: &Entity, diagram: &Diagram, rules: &ValidationRules) -> Vec<String> {
    let mut warnings = Vec::new();
    let name = &entity.name;
    // ISA children inherit their attributes and key from the parent.
    let isa_child = diagram.is_isa_child(entity.id);

    if entity.attributes.is_empty() && !isa_child {
        warnings.push(format!("Entity \"{name}\" must have at least one attribute"));
    }

    if !entity.is_weak && !isa_child && !entity.has_key() {
        warnings.push(format!("Entity \"{name}\" must have at least one key attribute"));
    }

    if entity.is_weak {
        check_weak(entity, diagram, rules, &mut warnings);
    }

    if rules.check_orphans && diagram.connections_of(entity.id).next().is_none() {
        warnings.push(format!("Entity \"{name}\" is not connected to anything (orphan)"));
    }

    warnings
}

fn check_weak(
    entity: &Entity,
    diagram: &Diagram,
    rules: &ValidationRules,
    warnings: &mut Vec<String>,
) {
    let name = &entity.name;

    if !entity.has_discriminant() {
        warnings.push(format!(
            "Weak entity \"{name}\" must have at least one discriminant attribute"
        ));
    }

    let mut identifying: Vec<ElementId> = Vec::new();
    for connection in diagram.connections_of(entity.id) {
        let Some(relationship) = connection
            .other_end(entity.id)
            .and_then(|id| diagram.relationship(id))
        else {
            continue;
        };
        if !relationship.is_weak {
            continue;
        }
        let relationship_name = display_name(diagram, relationship.id);

        if connection.cardinality.as_deref() == Some("1") {
            warnings.push(format!(
                "Weak entity \"{name}\" must be on the N side of identifying relationship \"{relationship_name}\""
            ));
        }
        if connection.participation.as_deref() != Some("total") {
            warnings.push(format!(
                "Weak entity \"{name}\" must have total participation in identifying relationship \"{relationship_name}\""
            ));
        }
        if !identifying.contains(&relationship.id) {
            identifying.push(relationship.id);
        }
    }

    match identifying.len() {
        0 => warnings.push(format!(
            "Weak entity \"{name}\" must connect to at least one identifying relationship"
        )),
        1 => {}
        count if rules.require_single_identifying_relationship => warnings.push(format!(
            "Weak entity \"{name}\" must connect to exactly one identifying relationship (currently has {count})"
        )),
        _ => {}
    }
}
