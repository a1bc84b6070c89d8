use super::display_name;
use crate::model::{Diagram, Relationship};

fn is_missing(value: Option<&str>) -> bool {
    value.is_none_or(|v| v.trim().is_empty())
}

pub(super) fn check(relationship: &Relationship, diagram: &Diagram) -> Vec<String> {
    let mut warnings = Vec::new();
    let name = &relationship.name;

    // A recursive relationship lists the same entity twice, which counts.
    if relationship.entity_ids.len() < 2 {
        warnings.push(format!(
            "Relationship \"{name}\" must connect at least two entities (currently has {})",
            relationship.entity_ids.len()
        ));
    }

    for entity_id in &relationship.entity_ids {
        let linked = diagram
            .connections()
            .any(|c| c.links(relationship.id, *entity_id));
        if !linked {
            warnings.push(format!(
                "Relationship \"{name}\" has no connection to entity \"{}\"",
                display_name(diagram, *entity_id)
            ));
        }
    }

    let connections: Vec<_> = diagram.connections_of(relationship.id).collect();
    if connections.iter().any(|c| is_missing(c.cardinality.as_deref())) {
        warnings.push(format!(
            "Relationship \"{name}\" has connections without a cardinality"
        ));
    }
    if connections.iter().any(|c| is_missing(c.participation.as_deref())) {
        warnings.push(format!(
            "Relationship \"{name}\" has connections without a participation"
        ));
    }

    if relationship.is_weak {
        let has_weak_participant = relationship
            .entity_ids
            .iter()
            .filter_map(|id| diagram.entity(*id))
            .any(|e| e.is_weak);
        if !has_weak_participant {
            warnings.push(format!(
                "Identifying relationship \"{name}\" must involve at least one weak entity"
            ));
        }
    }

    warnings
}
