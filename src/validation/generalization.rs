use super::ValidationRules;
use crate::model::{Diagram, Generalization};

pub(super) fn check(
    generalization: &Generalization,
    diagram: &Diagram,
    rules: &ValidationRules,
) -> Vec<String> {
    let mut warnings = Vec::new();

    if diagram.entity(generalization.parent_id).is_none() {
        warnings.push(format!(
            "Generalization parent {} is not an existing entity",
            generalization.parent_id
        ));
    }

    match generalization.child_ids.len() {
        0 => warnings.push("Generalization must have at least one child".to_string()),
        1 if rules.warn_single_isa_child => warnings.push(
            "Generalization has only one child; ISA usually specializes into two or more subtypes"
                .to_string(),
        ),
        _ => {}
    }

    if generalization.has_child(generalization.parent_id) {
        warnings.push("Generalization parent cannot also be one of its children".to_string());
    }

    for child_id in &generalization.child_ids {
        if diagram.entity(*child_id).is_none() {
            warnings.push(format!(
                "Generalization child {child_id} is not an existing entity"
            ));
        }
    }

    warnings
}
