use egui::{pos2, vec2};
use er_editor::geometry::attachment_point;
use er_editor::{
    AttributeFlags, AttributeOwner, Cardinality, ConnectionUpdate, Diagram, DiagramError,
    ElementId, Participation,
};
use pretty_assertions::assert_eq;

// Two entities linked through one relationship, each entity with a key attribute
fn create_binary_diagram() -> (Diagram, ElementId, ElementId, ElementId) {
    let mut diagram = Diagram::new();
    let student = diagram.add_entity(pos2(0.0, 0.0));
    let course = diagram.add_entity(pos2(400.0, 0.0));
    let enrolls = diagram.add_relationship(pos2(200.0, 0.0));
    diagram.rename(student, "Student").unwrap();
    diagram.rename(course, "Course").unwrap();
    diagram.rename(enrolls, "Enrolls").unwrap();

    for (owner, name) in [(student, "student_id"), (course, "code")] {
        diagram
            .add_attribute(
                AttributeOwner::Entity(owner),
                Some(name),
                AttributeFlags::key(),
                pos2(0.0, 100.0),
            )
            .unwrap();
    }
    diagram.connect(student, enrolls).unwrap();
    diagram.connect(enrolls, course).unwrap();

    (diagram, student, course, enrolls)
}

#[test]
fn test_generated_names_are_unique() {
    let mut diagram = Diagram::new();
    let a = diagram.add_entity(pos2(0.0, 0.0));
    let b = diagram.add_entity(pos2(200.0, 0.0));
    let r = diagram.add_relationship(pos2(100.0, 0.0));

    assert_eq!(diagram.entity(a).unwrap().name, "Entity 1");
    assert_eq!(diagram.entity(b).unwrap().name, "Entity 2");
    assert_eq!(diagram.relationship(r).unwrap().name, "Relationship 1");
}

#[test]
fn test_connect_registers_participants() {
    let (diagram, student, course, enrolls) = create_binary_diagram();
    let relationship = diagram.relationship(enrolls).unwrap();

    assert_eq!(relationship.entity_ids, vec![student, course]);
    assert_eq!(relationship.cardinality.get(&student), Some(&Cardinality::One));
    assert_eq!(
        relationship.participation.get(&course),
        Some(&Participation::Partial)
    );
    for connection in diagram.connections_of(enrolls) {
        assert_eq!(connection.cardinality.as_deref(), Some("1"));
        assert_eq!(connection.participation.as_deref(), Some("partial"));
        assert_eq!(connection.points.len(), 2);
    }
}

#[test]
fn test_connection_update_mirrors_into_relationship() {
    let (mut diagram, student, _, enrolls) = create_binary_diagram();
    let connection = diagram
        .connections()
        .find(|c| c.links(student, enrolls))
        .unwrap()
        .id;

    diagram
        .update_connection(
            connection,
            ConnectionUpdate::default().cardinality("N").participation("total"),
        )
        .unwrap();

    let relationship = diagram.relationship(enrolls).unwrap();
    assert_eq!(relationship.cardinality.get(&student), Some(&Cardinality::N));
    assert_eq!(
        relationship.participation.get(&student),
        Some(&Participation::Total)
    );
}

#[test]
fn test_clearing_connection_values_drops_relationship_entries() {
    let (mut diagram, student, course, enrolls) = create_binary_diagram();
    let connection = diagram
        .connections()
        .find(|c| c.links(student, enrolls))
        .unwrap()
        .id;
    diagram
        .update_connection(
            connection,
            ConnectionUpdate::default().cardinality("N").participation("total"),
        )
        .unwrap();

    diagram
        .update_connection(
            connection,
            ConnectionUpdate {
                cardinality: Some(None),
                ..ConnectionUpdate::default()
            },
        )
        .unwrap();
    let relationship = diagram.relationship(enrolls).unwrap();
    assert_eq!(diagram.connection(connection).unwrap().cardinality, None);
    assert_eq!(relationship.cardinality.get(&student), None);
    assert_eq!(
        relationship.participation.get(&student),
        Some(&Participation::Total)
    );
    // The other participant keeps its entries.
    assert_eq!(relationship.cardinality.get(&course), Some(&Cardinality::One));

    diagram
        .update_connection(connection, ConnectionUpdate::default().participation("Total"))
        .unwrap();
    assert_eq!(
        diagram.relationship(enrolls).unwrap().participation.get(&student),
        None
    );

    diagram
        .update_connection(connection, ConnectionUpdate::default().cardinality(" M "))
        .unwrap();
    diagram
        .update_connection(connection, ConnectionUpdate::default().cardinality("1:N"))
        .unwrap();
    let relationship = diagram.relationship(enrolls).unwrap();
    assert_eq!(relationship.cardinality.get(&student), None);
    assert_eq!(
        diagram.connection(connection).unwrap().cardinality.as_deref(),
        Some("1:N")
    );
}

#[test]
fn test_rejected_mutations_leave_diagram_unchanged() {
    let (mut diagram, student, course, _) = create_binary_diagram();
    let before = diagram.clone();

    assert_eq!(
        diagram.rename(course, "  student "),
        Err(DiagramError::DuplicateName("student".to_string()))
    );
    assert_eq!(diagram.rename(course, "   "), Err(DiagramError::EmptyName));
    assert_eq!(
        diagram.connect(student, student),
        Err(DiagramError::SelfConnection(student))
    );
    assert_eq!(
        diagram.add_generalization(student, vec![student], true, pos2(0.0, 0.0)),
        Err(DiagramError::ParentIsChild(student))
    );
    assert_eq!(
        diagram.add_generalization(student, Vec::new(), true, pos2(0.0, 0.0)),
        Err(DiagramError::NoChildren)
    );
    let missing = ElementId::new();
    assert_eq!(
        diagram.add_attribute(
            AttributeOwner::Entity(missing),
            None,
            AttributeFlags::default(),
            pos2(0.0, 0.0)
        ),
        Err(DiagramError::MissingOwner(missing))
    );
    assert_eq!(diagram.delete(missing), Err(DiagramError::NotFound(missing)));

    assert_eq!(diagram, before);
}

#[test]
fn test_attribute_rename_updates_embedded_record() {
    let (mut diagram, student, _, _) = create_binary_diagram();
    let attribute = diagram
        .attributes()
        .find(|a| a.is_owned_by(student))
        .unwrap()
        .id;

    diagram.rename(attribute, "matriculation_no").unwrap();
    diagram
        .update_attribute_flags(
            attribute,
            AttributeFlags {
                is_key: true,
                is_derived: true,
                ..AttributeFlags::default()
            },
        )
        .unwrap();

    let record = &diagram.entity(student).unwrap().attributes[0];
    assert_eq!(record.id, attribute);
    assert_eq!(record.name, "matriculation_no");
    assert!(record.flags.is_derived);
}

#[test]
fn test_attribute_names_are_scoped_to_their_owner() {
    let (mut diagram, student, course, _) = create_binary_diagram();

    // Another owner may reuse the name.
    diagram
        .add_attribute(
            AttributeOwner::Entity(course),
            Some("student_id"),
            AttributeFlags::default(),
            pos2(0.0, 0.0),
        )
        .unwrap();

    let err = diagram
        .add_attribute(
            AttributeOwner::Entity(student),
            Some("STUDENT_ID"),
            AttributeFlags::default(),
            pos2(0.0, 0.0),
        )
        .unwrap_err();
    assert_eq!(err, DiagramError::DuplicateName("STUDENT_ID".to_string()));
}

#[test]
fn test_delete_entity_cascades() {
    let (mut diagram, student, course, enrolls) = create_binary_diagram();
    let undergrad = diagram.add_entity(pos2(0.0, 300.0));
    let postgrad = diagram.add_entity(pos2(200.0, 300.0));
    let isa = diagram
        .add_generalization(course, vec![student, undergrad, postgrad], false, pos2(0.0, 200.0))
        .unwrap();
    let owned_attribute = diagram
        .attributes()
        .find(|a| a.is_owned_by(student))
        .unwrap()
        .id;
    let student_connection = diagram
        .connections()
        .find(|c| c.touches(student))
        .unwrap()
        .id;

    let removed = diagram.delete(student).unwrap();

    assert_eq!(removed[0], student);
    assert!(removed.contains(&owned_attribute));
    assert!(removed.contains(&student_connection));
    assert!(diagram.entity(student).is_none());
    assert!(diagram.attribute(owned_attribute).is_none());
    assert!(diagram.connection(student_connection).is_none());

    let relationship = diagram.relationship(enrolls).unwrap();
    assert_eq!(relationship.entity_ids, vec![course]);
    assert!(!relationship.cardinality.contains_key(&student));
    assert!(!relationship.participation.contains_key(&student));

    assert_eq!(
        diagram.generalization(isa).unwrap().child_ids,
        vec![undergrad, postgrad]
    );
}

#[test]
fn test_delete_parent_removes_generalization() {
    let mut diagram = Diagram::new();
    let person = diagram.add_entity(pos2(0.0, 0.0));
    let child = diagram.add_entity(pos2(0.0, 200.0));
    let isa = diagram
        .add_generalization(person, vec![child], true, pos2(0.0, 100.0))
        .unwrap();

    let removed = diagram.delete(person).unwrap();

    assert!(removed.contains(&isa));
    assert!(diagram.generalization(isa).is_none());
    assert!(diagram.entity(child).is_some());
}

#[test]
fn test_delete_relationship_keeps_entities() {
    let (mut diagram, student, course, enrolls) = create_binary_diagram();
    let attribute = diagram
        .add_attribute(
            AttributeOwner::Relationship(enrolls),
            Some("grade"),
            AttributeFlags::default(),
            pos2(200.0, 100.0),
        )
        .unwrap();

    let removed = diagram.delete(enrolls).unwrap();

    assert!(removed.contains(&attribute));
    assert_eq!(diagram.connections().count(), 0);
    assert!(diagram.entity(student).is_some());
    assert!(diagram.entity(course).is_some());
}

#[test]
fn test_delete_connection_drops_one_participant_entry() {
    let mut diagram = Diagram::new();
    let person = diagram.add_entity(pos2(0.0, 0.0));
    let manages = diagram.add_relationship(pos2(300.0, 0.0));
    // Recursive relationship: the same entity takes part twice.
    let first = diagram.connect(person, manages).unwrap();
    diagram.connect(manages, person).unwrap();
    assert_eq!(
        diagram.relationship(manages).unwrap().entity_ids,
        vec![person, person]
    );

    diagram.delete(first).unwrap();

    assert_eq!(diagram.relationship(manages).unwrap().entity_ids, vec![person]);
}

#[test]
fn test_move_reroutes_touching_connections() {
    let (mut diagram, student, _, enrolls) = create_binary_diagram();

    diagram.move_element(student, pos2(200.0, 400.0)).unwrap();

    let entity = diagram.entity(student).unwrap();
    let relationship = diagram.relationship(enrolls).unwrap();
    let connection = diagram.connections().find(|c| c.touches(student)).unwrap();

    let start = attachment_point(entity.rect(), connection.point_on(student).unwrap());
    let end = attachment_point(relationship.rect(), connection.point_on(enrolls).unwrap());
    assert_eq!(connection.points.first(), Some(&start));
    assert_eq!(connection.points.last(), Some(&end));
    assert_eq!(connection.position, pos2(start.x.min(end.x), start.y.min(end.y)));
}

#[test]
fn test_resize_reroutes_touching_connections() {
    let (mut diagram, _, course, _) = create_binary_diagram();

    diagram.resize_element(course, vec2(240.0, 120.0)).unwrap();

    let entity = diagram.entity(course).unwrap();
    let connection = diagram.connections().find(|c| c.touches(course)).unwrap();
    let end = attachment_point(entity.rect(), connection.point_on(course).unwrap());
    assert_eq!(connection.points.last(), Some(&end));
}

#[test]
fn test_diagram_json_round_trip_keeps_references() {
    let (diagram, student, _, enrolls) = create_binary_diagram();

    let json = serde_json::to_string(&diagram).unwrap();
    let restored: Diagram = serde_json::from_str(&json).unwrap();

    assert_eq!(restored, diagram);
    assert_eq!(
        restored.relationship(enrolls).unwrap().entity_ids[0],
        student
    );
}

#[test]
fn test_import_rekeys_records_by_their_own_id() {
    let (diagram, student, _, enrolls) = create_binary_diagram();
    let mut json = serde_json::to_value(&diagram).unwrap();
    let entities = json["entities"].as_object_mut().unwrap();
    let record = entities.remove(&student.to_string()).unwrap();
    entities.insert(ElementId::new().to_string(), record);

    let mut restored: Diagram = serde_json::from_value(json).unwrap();

    assert_eq!(restored, diagram);
    assert_eq!(restored.entity(student).unwrap().name, "Student");
    let removed = restored.delete(student).unwrap();
    assert_eq!(removed[0], student);
    assert!(restored.entity(student).is_none());
    assert!(!restored.connections().any(|c| c.touches(student)));
    assert!(!restored
        .relationship(enrolls)
        .unwrap()
        .entity_ids
        .contains(&student));
}
