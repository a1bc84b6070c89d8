use crate::model::{Attribute, Diagram};

pub(super) fn check(attribute: &Attribute, diagram: &Diagram) -> Vec<String> {
    let mut warnings = Vec::new();
    let name = &attribute.name;
    let flags = attribute.flags;

    match (attribute.entity_id(), attribute.relationship_id()) {
        (Some(_), Some(_)) => warnings.push(format!(
            "Attribute \"{name}\" cannot belong to both an entity and a relationship"
        )),
        (None, None) => warnings.push(format!(
            "Attribute \"{name}\" must belong to an entity or a relationship"
        )),
        _ => {}
    }
    if let Some(id) = attribute.entity_id() {
        if diagram.entity(id).is_none() {
            warnings.push(format!("Attribute \"{name}\" belongs to a missing entity ({id})"));
        }
    }
    if let Some(id) = attribute.relationship_id() {
        if diagram.relationship(id).is_none() {
            warnings.push(format!(
                "Attribute \"{name}\" belongs to a missing relationship ({id})"
            ));
        }
    }

    if flags.is_key && flags.is_derived {
        warnings.push(format!("Attribute \"{name}\" cannot be both a key and derived"));
    }
    // Keys and discriminants identify an instance, so they must be single-valued.
    if flags.is_key && flags.is_multivalued {
        warnings.push(format!("Key attribute \"{name}\" cannot be multivalued"));
    }
    if flags.is_discriminant && flags.is_multivalued {
        warnings.push(format!("Discriminant attribute \"{name}\" cannot be multivalued"));
    }

    if attribute.relationship_id().is_some() {
        if flags.is_key {
            warnings.push(format!("Relationship attribute \"{name}\" cannot be a key"));
        }
        if flags.is_discriminant {
            warnings.push(format!(
                "Relationship attribute \"{name}\" cannot be a discriminant"
            ));
        }
    }

    if flags.is_discriminant {
        let owner = attribute.entity_id().and_then(|id| diagram.entity(id));
        if owner.is_some_and(|entity| !entity.is_weak) {
            warnings.push(format!(
                "Attribute \"{name}\" can only be a discriminant of a weak entity"
            ));
        }
    }

    warnings
}
