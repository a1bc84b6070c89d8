use egui::pos2;
use er_editor::{
    AttributeFlags, AttributeOwner, Command, CommandError, DiagramError, DiagramEvent, Editor,
    EditorConfig, ElementId, ElementKind, EventRecorder, ValidationRules,
};
use pretty_assertions::assert_eq;

fn add_entity(editor: &mut Editor, x: f32) -> ElementId {
    editor
        .execute(Command::AddEntity {
            position: pos2(x, 0.0),
        })
        .unwrap()
        .created()
        .unwrap()
}

fn add_relationship(editor: &mut Editor, x: f32) -> ElementId {
    editor
        .execute(Command::AddRelationship {
            position: pos2(x, 0.0),
        })
        .unwrap()
        .created()
        .unwrap()
}

#[test]
fn test_undo_redo_restores_snapshots() {
    let mut editor = Editor::default();
    let entity = add_entity(&mut editor, 0.0);
    editor
        .execute(Command::Rename {
            id: entity,
            name: "Customer".to_string(),
        })
        .unwrap();
    let renamed = editor.diagram().clone();

    editor.undo().unwrap();
    assert_eq!(editor.diagram().entity(entity).unwrap().name, "Entity 1");
    assert!(editor.can_redo());

    editor.redo().unwrap();
    assert_eq!(editor.diagram(), &renamed);

    editor.undo().unwrap();
    editor.undo().unwrap();
    assert!(editor.diagram().is_empty());
    assert_eq!(editor.undo(), Err(CommandError::NothingToUndo));
}

#[test]
fn test_new_command_clears_redo() {
    let mut editor = Editor::default();
    add_entity(&mut editor, 0.0);
    editor.undo().unwrap();
    assert!(editor.can_redo());

    add_entity(&mut editor, 100.0);
    assert!(!editor.can_redo());
}

#[test]
fn test_history_limit_drops_oldest() {
    let config = EditorConfig {
        history_limit: 2,
        ..EditorConfig::default()
    };
    let mut editor = Editor::new(config);
    for i in 0..4 {
        add_entity(&mut editor, i as f32 * 150.0);
    }

    editor.undo().unwrap();
    editor.undo().unwrap();
    assert_eq!(editor.undo(), Err(CommandError::NothingToUndo));
    assert_eq!(editor.diagram().entities().count(), 2);
}

#[test]
fn test_events_follow_command_effects() {
    let mut editor = Editor::default();
    let recorder = EventRecorder::new();
    editor.subscribe(recorder.clone());

    let entity = add_entity(&mut editor, 0.0);
    let events = recorder.drain();
    assert_eq!(
        events[0],
        DiagramEvent::ElementAdded {
            id: entity,
            kind: ElementKind::Entity
        }
    );
    assert_eq!(
        events[1],
        DiagramEvent::WarningsChanged {
            id: entity,
            count: 3
        }
    );

    editor
        .execute(Command::Move {
            id: entity,
            position: pos2(50.0, 50.0),
        })
        .unwrap();
    // Moving changes no warning.
    assert_eq!(recorder.drain(), vec![DiagramEvent::ElementMoved { id: entity }]);

    let removed = editor.execute(Command::Delete { id: entity }).unwrap();
    assert_eq!(removed.ids().collect::<Vec<_>>(), vec![entity]);
    assert_eq!(recorder.drain(), vec![DiagramEvent::ElementDeleted { id: entity }]);

    editor.undo().unwrap();
    assert_eq!(recorder.drain(), vec![DiagramEvent::HistoryRestored]);
}

#[test]
fn test_connect_revalidates_both_ends() {
    let mut editor = Editor::default();
    let a = add_entity(&mut editor, 0.0);
    let b = add_entity(&mut editor, 400.0);
    let r = add_relationship(&mut editor, 200.0);
    assert!(editor
        .warnings_for(r)
        .iter()
        .any(|w| w.contains("currently has 0")));

    editor.execute(Command::Connect { from: a, to: r }).unwrap();
    editor.execute(Command::Connect { from: r, to: b }).unwrap();

    assert!(editor.warnings_for(r).is_empty());
    for entity in [a, b] {
        assert!(!editor.warnings_for(entity).iter().any(|w| w.contains("orphan")));
    }
}

#[test]
fn test_weak_flag_revalidates_relationship_neighbours() {
    let mut editor = Editor::default();
    let a = add_entity(&mut editor, 0.0);
    let b = add_entity(&mut editor, 400.0);
    let r = add_relationship(&mut editor, 200.0);
    editor.execute(Command::Connect { from: a, to: r }).unwrap();
    editor.execute(Command::Connect { from: r, to: b }).unwrap();

    editor.execute(Command::SetWeak { id: r, is_weak: true }).unwrap();
    assert!(editor
        .warnings_for(r)
        .iter()
        .any(|w| w.contains("must involve at least one weak entity")));

    // Making an entity weak touches the relationship's cache too.
    editor.execute(Command::SetWeak { id: b, is_weak: true }).unwrap();
    assert!(editor.warnings_for(r).is_empty());
}

#[test]
fn test_deleting_attribute_revalidates_owner() {
    let mut editor = Editor::default();
    let entity = add_entity(&mut editor, 0.0);
    let attribute = editor
        .execute(Command::AddAttribute {
            owner: AttributeOwner::Entity(entity),
            name: Some("id".to_string()),
            flags: AttributeFlags::key(),
            position: pos2(0.0, 100.0),
        })
        .unwrap()
        .created()
        .unwrap();
    assert_eq!(editor.warnings_for(entity).len(), 1);

    editor.execute(Command::Delete { id: attribute }).unwrap();

    assert_eq!(editor.warnings_for(entity).len(), 3);
}

#[test]
fn test_rejected_command_is_not_recorded() {
    let mut editor = Editor::default();
    let entity = add_entity(&mut editor, 0.0);
    let before = editor.diagram().clone();

    let err = editor
        .execute(Command::Connect {
            from: entity,
            to: entity,
        })
        .unwrap_err();

    assert_eq!(err, CommandError::Rejected(DiagramError::SelfConnection(entity)));
    assert_eq!(editor.diagram(), &before);
    editor.undo().unwrap();
    assert!(!editor.can_undo());
}

#[test]
fn test_rules_change_refreshes_caches() {
    let mut editor = Editor::default();
    let entity = add_entity(&mut editor, 0.0);
    assert_eq!(editor.warnings_for(entity).len(), 3);

    editor.set_rules(ValidationRules {
        check_orphans: false,
        ..ValidationRules::default()
    });

    assert_eq!(editor.warnings_for(entity).len(), 2);
    assert_eq!(editor.issues().len(), 1);
}

#[test]
fn test_disabled_validation_skips_caches() {
    let config = EditorConfig {
        validation_enabled: false,
        ..EditorConfig::default()
    };
    let mut editor = Editor::new(config);
    let entity = add_entity(&mut editor, 0.0);

    assert!(editor.warnings_for(entity).is_empty());
    // On-demand validation still reports.
    assert_eq!(editor.issues().len(), 1);
}

#[test]
fn test_commands_deserialize_from_json() {
    let mut editor = Editor::default();
    let entity = add_entity(&mut editor, 0.0);
    let command: Command = serde_json::from_value(serde_json::json!({
        "Rename": { "id": entity, "name": "Invoice" }
    }))
    .unwrap();

    editor.execute(command).unwrap();

    assert_eq!(editor.diagram().entity(entity).unwrap().name, "Invoice");
}
