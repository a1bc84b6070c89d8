use super::{CARDINALITIES, PARTICIPATIONS};
use crate::model::{Connection, Diagram, ElementId};

fn resolves(diagram: &Diagram, id: ElementId) -> bool {
    diagram.entity(id).is_some() || diagram.relationship(id).is_some()
}

pub(super) fn check(connection: &Connection, diagram: &Diagram) -> Vec<String> {
    let mut warnings = Vec::new();

    if !resolves(diagram, connection.from_id) {
        warnings.push(format!(
            "Connection source {} is not an existing entity or relationship",
            connection.from_id
        ));
    }
    if !resolves(diagram, connection.to_id) {
        warnings.push(format!(
            "Connection target {} is not an existing entity or relationship",
            connection.to_id
        ));
    }

    // Blank values count as absent; the owning relationship reports those.
    if let Some(cardinality) = connection.cardinality.as_deref().filter(|c| !c.trim().is_empty()) {
        if !CARDINALITIES.contains(&cardinality) {
            warnings.push(format!(
                "Invalid cardinality \"{cardinality}\" (expected one of {})",
                CARDINALITIES.join(", ")
            ));
        }
    }
    if let Some(participation) = connection
        .participation
        .as_deref()
        .filter(|p| !p.trim().is_empty())
    {
        if !PARTICIPATIONS.contains(&participation) {
            warnings.push(format!(
                "Invalid participation \"{participation}\" (expected partial or total)"
            ));
        }
    }

    warnings
}
