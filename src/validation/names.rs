//! Name rules applied before a rename is accepted.
//!
//! These are hard checks on mutation, not warnings: a rejected name leaves
//! the diagram unchanged.

use crate::error::{DiagramError, DiagramResult};
use crate::model::{Diagram, ElementId};

/// The trimmed name, or [`DiagramError::EmptyName`]
pub fn trimmed(name: &str) -> DiagramResult<String> {
    let name = name.trim();
    if name.is_empty() {
        Err(DiagramError::EmptyName)
    } else {
        Ok(name.to_string())
    }
}

fn same_name(a: &str, b: &str) -> bool {
    a.trim().to_lowercase() == b.trim().to_lowercase()
}

/// True if no other entity is called `name` (ignoring case)
pub fn is_entity_name_available(diagram: &Diagram, name: &str, except: Option<ElementId>) -> bool {
    !name.trim().is_empty()
        && !diagram
            .entities()
            .any(|e| Some(e.id) != except && same_name(&e.name, name))
}

/// True if no other relationship is called `name` (ignoring case)
pub fn is_relationship_name_available(
    diagram: &Diagram,
    name: &str,
    except: Option<ElementId>,
) -> bool {
    !name.trim().is_empty()
        && !diagram
            .relationships()
            .any(|r| Some(r.id) != except && same_name(&r.name, name))
}

/// True if no other attribute of `owner_id` is called `name` (ignoring case).
/// Attributes of different owners may share names.
pub fn is_attribute_name_available(
    diagram: &Diagram,
    owner_id: ElementId,
    name: &str,
    except: Option<ElementId>,
) -> bool {
    !name.trim().is_empty()
        && !diagram
            .attributes()
            .any(|a| Some(a.id) != except && a.is_owned_by(owner_id) && same_name(&a.name, name))
}

pub(crate) fn check_entity_name(
    diagram: &Diagram,
    name: &str,
    except: Option<ElementId>,
) -> DiagramResult<String> {
    let name = trimmed(name)?;
    if is_entity_name_available(diagram, &name, except) {
        Ok(name)
    } else {
        Err(DiagramError::DuplicateName(name))
    }
}

pub(crate) fn check_relationship_name(
    diagram: &Diagram,
    name: &str,
    except: Option<ElementId>,
) -> DiagramResult<String> {
    let name = trimmed(name)?;
    if is_relationship_name_available(diagram, &name, except) {
        Ok(name)
    } else {
        Err(DiagramError::DuplicateName(name))
    }
}

pub(crate) fn check_attribute_name(
    diagram: &Diagram,
    owner_id: ElementId,
    name: &str,
    except: Option<ElementId>,
) -> DiagramResult<String> {
    let name = trimmed(name)?;
    if is_attribute_name_available(diagram, owner_id, &name, except) {
        Ok(name)
    } else {
        Err(DiagramError::DuplicateName(name))
    }
}

/// `"{prefix} N"` with the smallest `N >= 1` not already taken
pub(crate) fn default_name<'a>(prefix: &str, taken: impl Iterator<Item = &'a str> + Clone) -> String {
    (1..)
        .map(|n| format!("{prefix} {n}"))
        .find(|candidate| !taken.clone().any(|name| same_name(name, candidate)))
        .unwrap_or_else(|| prefix.to_string())
}
