use crate::app::{AppCommand, AppIntent, SchematicEditor};
use glam::{IVec2, Vec2};
use std::sync::Arc;

use super::map_intent_to_commands;

/// Zwei Widerstände, verbunden durch einen Wire von (160,40) nach (320,40).
fn editor_with_wire() -> (SchematicEditor, u64, u64) {
    let mut editor = SchematicEditor::new();
    let def = editor.library.get("resistor").expect("resistor");
    let store = Arc::make_mut(&mut editor.instances);
    let a = store.place(def.clone(), IVec2::new(0, 0));
    let b = store.place(def, IVec2::new(4, 0));
    editor.start_wire(a, "right");
    let wire = editor.complete_wire(b, "left").expect("Wire");
    (editor, a, wire)
}

#[test]
fn save_requested_maps_to_save_file_without_path() {
    let editor = SchematicEditor::new();

    let commands = map_intent_to_commands(&editor, AppIntent::SaveRequested);

    assert_eq!(commands.len(), 1);
    assert!(matches!(commands[0], AppCommand::SaveFile { path: None }));
}

#[test]
fn endpoint_click_starts_or_completes_depending_on_session() {
    let (mut editor, a, _) = editor_with_wire();
    let intent = AppIntent::EndpointClicked {
        instance_id: a,
        endpoint_id: "left".to_string(),
    };

    let commands = map_intent_to_commands(&editor, intent.clone());
    assert!(matches!(commands[0], AppCommand::StartWire { instance_id, .. } if instance_id == a));

    editor.start_wire(a, "right");
    let commands = map_intent_to_commands(&editor, intent);
    assert_eq!(commands.len(), 1);
    assert!(matches!(commands[0], AppCommand::CompleteWire { .. }));
}

#[test]
fn wire_click_selects_when_idle_and_connects_while_drawing() {
    let (mut editor, a, wire) = editor_with_wire();
    let intent = AppIntent::WireClicked {
        wire_id: wire,
        world_pos: Vec2::new(240.0, 40.0),
        additive: true,
    };

    let commands = map_intent_to_commands(&editor, intent.clone());
    assert!(matches!(
        commands[0],
        AppCommand::SelectWire { additive: true, .. }
    ));

    editor.start_wire(a, "left");
    let commands = map_intent_to_commands(&editor, intent);
    assert!(matches!(
        commands[0],
        AppCommand::ConnectToWire { target_wire, .. } if target_wire == wire
    ));
}

#[test]
fn wire_pick_uses_hit_test() {
    let (editor, _, wire) = editor_with_wire();

    let hit = map_intent_to_commands(
        &editor,
        AppIntent::WirePickRequested {
            world_pos: Vec2::new(200.0, 43.0),
            additive: false,
        },
    );
    assert!(matches!(hit[0], AppCommand::SelectWire { wire_id, .. } if wire_id == wire));

    let miss = map_intent_to_commands(
        &editor,
        AppIntent::WirePickRequested {
            world_pos: Vec2::new(200.0, 200.0),
            additive: false,
        },
    );
    assert!(matches!(miss[0], AppCommand::ClearSelection));
}

#[test]
fn canvas_click_adds_waypoint_only_while_drawing() {
    let (mut editor, a, _) = editor_with_wire();
    let intent = AppIntent::CanvasClicked {
        world_pos: Vec2::new(500.0, 500.0),
    };

    assert!(matches!(
        map_intent_to_commands(&editor, intent.clone())[0],
        AppCommand::ClearSelection
    ));

    editor.start_wire(a, "left");
    assert!(matches!(
        map_intent_to_commands(&editor, intent)[0],
        AppCommand::AddWaypoint { .. }
    ));
}

#[test]
fn escape_cancels_wire_while_drawing() {
    let (mut editor, a, _) = editor_with_wire();
    editor.start_wire(a, "left");

    let commands = map_intent_to_commands(&editor, AppIntent::EscapePressed);

    assert_eq!(commands.len(), 1);
    assert!(matches!(commands[0], AppCommand::CancelWire));
}

#[test]
fn pointer_move_is_ignored_when_idle() {
    let editor = SchematicEditor::new();

    let commands = map_intent_to_commands(
        &editor,
        AppIntent::PointerMoved {
            world_pos: Vec2::ZERO,
        },
    );

    assert!(commands.is_empty());
}

#[test]
fn delete_prefers_wire_selection() {
    let (mut editor, a, wire) = editor_with_wire();
    assert!(map_intent_to_commands(&editor, AppIntent::DeleteSelectedRequested).is_empty());

    editor.selection.select_instance(a, false);
    assert!(matches!(
        map_intent_to_commands(&editor, AppIntent::DeleteSelectedRequested)[0],
        AppCommand::DeleteSelectedComponents
    ));

    editor.selection.select_wire(wire, false);
    assert!(matches!(
        map_intent_to_commands(&editor, AppIntent::DeleteSelectedRequested)[0],
        AppCommand::DeleteSelectedWires
    ));
}

#[test]
fn component_click_while_drawing_completes_at_suggested_pin() {
    let (mut editor, a, _) = editor_with_wire();
    let def = editor.library.get("diode").expect("diode");
    let diode = Arc::make_mut(&mut editor.instances).place(def, IVec2::new(0, 3));
    let body = Vec2::new(80.0, 280.0);

    let idle = map_intent_to_commands(
        &editor,
        AppIntent::ComponentPickRequested {
            world_pos: body,
            additive: false,
        },
    );
    assert!(matches!(idle[0], AppCommand::PickComponentAt { .. }));

    editor.start_wire(a, "left");
    let commands = map_intent_to_commands(
        &editor,
        AppIntent::ComponentPickRequested {
            world_pos: body,
            additive: false,
        },
    );
    assert_eq!(commands.len(), 1);
    assert!(matches!(
        &commands[0],
        AppCommand::CompleteWire { instance_id, endpoint_id }
            if *instance_id == diode && endpoint_id == "cathode"
    ));
}

#[test]
fn component_click_on_symmetric_part_picks_nearest_pin() {
    let (mut editor, a, _) = editor_with_wire();
    // Zweiter Widerstand bei (4,0): left (320,40), right (480,40)
    let b = editor
        .instances
        .iter()
        .map(|inst| inst.id)
        .find(|&id| id != a)
        .expect("zweiter Widerstand");
    editor.start_wire(a, "right");

    let commands = map_intent_to_commands(
        &editor,
        AppIntent::ComponentPickRequested {
            world_pos: Vec2::new(400.0, 40.0),
            additive: false,
        },
    );
    assert!(matches!(
        &commands[0],
        AppCommand::CompleteWire { instance_id, endpoint_id }
            if *instance_id == b && endpoint_id == "left"
    ));

    let miss = map_intent_to_commands(
        &editor,
        AppIntent::ComponentPickRequested {
            world_pos: Vec2::new(1000.0, 1000.0),
            additive: false,
        },
    );
    assert!(matches!(miss[0], AppCommand::AddWaypoint { .. }));
}
