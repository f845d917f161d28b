use glam::{IVec2, Vec2};
use schematic_wire_editor::core::geometry::count_bends;
use schematic_wire_editor::{
    AppCommand, AppController, AppIntent, EditorOptions, SchematicEditor, WireEnd, WireRouting,
};

/// Platziert ein Bauteil über den Intent-Pfad und gibt die neue Instanz-ID zurück.
fn drop_component(
    controller: &mut AppController,
    editor: &mut SchematicEditor,
    component_id: &str,
    grid_pos: IVec2,
) -> u64 {
    controller
        .handle_intent(
            editor,
            AppIntent::ComponentDropped {
                component_id: component_id.to_string(),
                grid_pos,
            },
        )
        .expect("ComponentDropped sollte durchlaufen");
    *editor
        .selection
        .instance_ids
        .last()
        .expect("Neues Bauteil sollte selektiert sein")
}

fn click_endpoint(
    controller: &mut AppController,
    editor: &mut SchematicEditor,
    instance_id: u64,
    endpoint_id: &str,
) {
    controller
        .handle_intent(
            editor,
            AppIntent::EndpointClicked {
                instance_id,
                endpoint_id: endpoint_id.to_string(),
            },
        )
        .expect("EndpointClicked sollte durchlaufen");
}

fn click_canvas(controller: &mut AppController, editor: &mut SchematicEditor, x: f32, y: f32) {
    controller
        .handle_intent(
            editor,
            AppIntent::CanvasClicked {
                world_pos: Vec2::new(x, y),
            },
        )
        .expect("CanvasClicked sollte durchlaufen");
}

/// A.right bei (0,40), B.left bei (240,40)
fn setup_facing_pair() -> (AppController, SchematicEditor, u64, u64) {
    let mut controller = AppController::new();
    let mut editor = SchematicEditor::new();
    let a = drop_component(&mut controller, &mut editor, "resistor", IVec2::new(-2, 0));
    let b = drop_component(&mut controller, &mut editor, "resistor", IVec2::new(3, 0));
    (controller, editor, a, b)
}

#[test]
fn test_facing_endpoints_route_without_detour() {
    let (mut controller, mut editor, a, b) = setup_facing_pair();

    click_endpoint(&mut controller, &mut editor, a, "right");
    click_endpoint(&mut controller, &mut editor, b, "left");

    assert_eq!(editor.wire_count(), 1);
    let wire = editor.wires.iter().next().expect("Wire vorhanden");
    assert_eq!(
        wire.waypoints,
        vec![
            Vec2::new(0.0, 40.0),
            Vec2::new(160.0, 40.0),
            Vec2::new(240.0, 40.0)
        ]
    );
    assert_eq!(wire.routing, WireRouting::Auto);
    assert!(!editor.session.is_drawing());
}

#[test]
fn test_seed_only_completion_hits_endpoints_exactly() {
    let mut controller = AppController::new();
    let mut editor = SchematicEditor::new();
    let a = drop_component(&mut controller, &mut editor, "diode", IVec2::new(0, 0));
    let b = drop_component(&mut controller, &mut editor, "led", IVec2::new(6, 4));

    click_endpoint(&mut controller, &mut editor, a, "cathode");
    click_endpoint(&mut controller, &mut editor, b, "anode");

    let wire = editor.wires.iter().next().expect("Wire vorhanden");
    assert_eq!(wire.first_point(), Some(Vec2::new(160.0, 40.0)));
    assert_eq!(wire.last_point(), Some(Vec2::new(480.0, 360.0)));
    for seg in wire.waypoints.windows(2) {
        let d = seg[1] - seg[0];
        assert!(d.x == 0.0 || d.y == 0.0, "Segment nicht achsparallel: {seg:?}");
    }
    assert_eq!(
        editor.ui.status_message.as_deref(),
        Some("Wire created from Diode to LED. Check polarity: anode to cathode")
    );
}

#[test]
fn test_manual_waypoints_are_snapped_orthogonally() {
    let (mut controller, mut editor, a, b) = setup_facing_pair();

    click_endpoint(&mut controller, &mut editor, a, "right");
    // dx=240 > dy=120 → horizontal
    click_canvas(&mut controller, &mut editor, 240.0, 160.0);
    // dx=0, dy=80 → vertikal; Gleichstand würde ebenfalls vertikal rasten
    click_canvas(&mut controller, &mut editor, 240.0, 80.0);
    click_endpoint(&mut controller, &mut editor, b, "left");

    let wire = editor.wires.iter().next().expect("Wire vorhanden");
    assert_eq!(
        wire.waypoints,
        vec![
            Vec2::new(0.0, 40.0),
            Vec2::new(240.0, 40.0),
            Vec2::new(240.0, 80.0),
            Vec2::new(240.0, 40.0)
        ]
    );
    assert_eq!(wire.routing, WireRouting::Manual);
}

#[test]
fn test_free_angle_mode_connects_directly() {
    let mut controller = AppController::new();
    let mut editor = SchematicEditor::new();
    let a = drop_component(&mut controller, &mut editor, "resistor", IVec2::new(0, 0));
    let b = drop_component(&mut controller, &mut editor, "resistor", IVec2::new(5, 3));

    controller
        .handle_intent(
            &mut editor,
            AppIntent::OrthogonalModeChanged { orthogonal: false },
        )
        .expect("Moduswechsel");
    click_endpoint(&mut controller, &mut editor, a, "right");
    click_endpoint(&mut controller, &mut editor, b, "left");

    let wire = editor.wires.iter().next().expect("Wire vorhanden");
    assert_eq!(
        wire.waypoints,
        vec![Vec2::new(160.0, 40.0), Vec2::new(400.0, 280.0)]
    );
    assert!(!wire.orthogonal);
}

#[test]
fn test_cancel_after_waypoints_leaves_store_unchanged() {
    let (mut controller, mut editor, a, _) = setup_facing_pair();

    click_endpoint(&mut controller, &mut editor, a, "right");
    click_canvas(&mut controller, &mut editor, 400.0, 40.0);
    click_canvas(&mut controller, &mut editor, 400.0, 400.0);
    let scene = controller.build_render_scene(&editor, [800.0, 600.0]);
    assert!(scene.highlighted_endpoint.is_some());
    assert_eq!(scene.waypoint_markers.len(), 3);

    controller
        .handle_intent(&mut editor, AppIntent::EscapePressed)
        .expect("Escape");

    assert_eq!(editor.wire_count(), 0);
    assert!(!editor.session.is_drawing());
    let scene = controller.build_render_scene(&editor, [800.0, 600.0]);
    assert!(scene.highlighted_endpoint.is_none());
    assert!(scene.preview_path.is_empty());
    assert!(matches!(
        editor.command_log.entries().last(),
        Some(AppCommand::CancelWire)
    ));
}

#[test]
fn test_clicking_start_endpoint_again_keeps_drawing() {
    let (mut controller, mut editor, a, _) = setup_facing_pair();

    click_endpoint(&mut controller, &mut editor, a, "right");
    click_endpoint(&mut controller, &mut editor, a, "right");

    assert!(editor.session.is_drawing());
    assert_eq!(editor.wire_count(), 0);
}

#[test]
fn test_junction_on_existing_wire() {
    let mut controller = AppController::new();
    let mut editor = SchematicEditor::new();
    let a = drop_component(&mut controller, &mut editor, "resistor", IVec2::new(0, 0));
    let b = drop_component(&mut controller, &mut editor, "resistor", IVec2::new(5, 0));
    let g = drop_component(&mut controller, &mut editor, "ground", IVec2::new(3, 3));

    click_endpoint(&mut controller, &mut editor, a, "right");
    click_endpoint(&mut controller, &mut editor, b, "left");
    let base = editor.wires.iter().next().map(|w| w.id).expect("Basis-Wire");

    click_endpoint(&mut controller, &mut editor, g, "top");
    controller
        .handle_intent(
            &mut editor,
            AppIntent::WirePickRequested {
                world_pos: Vec2::new(282.0, 42.0),
                additive: false,
            },
        )
        .expect("WirePick");

    assert_eq!(editor.wire_count(), 2);
    let junction = editor.wires.iter().last().expect("Junction-Wire");
    assert_eq!(
        junction.end,
        WireEnd::Junction {
            target_wire: base,
            point: Vec2::new(320.0, 80.0)
        }
    );
    assert_eq!(junction.first_point(), Some(Vec2::new(280.0, 240.0)));
    assert_eq!(junction.last_point(), Some(Vec2::new(320.0, 80.0)));

    let markers = editor.wires.junction_markers();
    assert_eq!(markers.len(), 1);
    assert_eq!(markers[0].wire_id, junction.id);
}

#[test]
fn test_delete_selected_wire_removes_only_that_wire() {
    let mut controller = AppController::new();
    let mut editor = SchematicEditor::new();
    let a = drop_component(&mut controller, &mut editor, "resistor", IVec2::new(0, 0));
    let b = drop_component(&mut controller, &mut editor, "resistor", IVec2::new(5, 0));
    let c = drop_component(&mut controller, &mut editor, "resistor", IVec2::new(0, 4));
    let g = drop_component(&mut controller, &mut editor, "ground", IVec2::new(3, 3));

    click_endpoint(&mut controller, &mut editor, a, "right");
    click_endpoint(&mut controller, &mut editor, b, "left");
    click_endpoint(&mut controller, &mut editor, c, "right");
    click_endpoint(&mut controller, &mut editor, b, "right");
    let ids: Vec<u64> = editor.wires.iter().map(|w| w.id).collect();
    click_endpoint(&mut controller, &mut editor, g, "top");
    controller
        .handle_intent(
            &mut editor,
            AppIntent::WireClicked {
                wire_id: ids[0],
                world_pos: Vec2::new(240.0, 40.0),
                additive: false,
            },
        )
        .expect("Junction");
    let junction_id = editor.wires.iter().last().map(|w| w.id).expect("Junction");
    let untouched = editor.wires.get(ids[1]).expect("w2").waypoints.clone();

    controller
        .handle_intent(
            &mut editor,
            AppIntent::WireClicked {
                wire_id: junction_id,
                world_pos: Vec2::ZERO,
                additive: false,
            },
        )
        .expect("Selektion");
    controller
        .handle_intent(&mut editor, AppIntent::DeleteSelectedRequested)
        .expect("Löschen");

    assert_eq!(editor.wire_count(), 2);
    assert!(!editor.wires.contains(junction_id));
    assert!(editor.wires.junction_markers().is_empty());
    assert_eq!(editor.wires.get(ids[1]).expect("w2").waypoints, untouched);
    assert!(editor.wires.broken_wires(&editor.instances).is_empty());
}

#[test]
fn test_undo_redo_wire_creation() {
    let (mut controller, mut editor, a, b) = setup_facing_pair();
    click_endpoint(&mut controller, &mut editor, a, "right");
    click_endpoint(&mut controller, &mut editor, b, "left");
    assert_eq!(editor.wire_count(), 1);

    controller
        .handle_intent(&mut editor, AppIntent::UndoRequested)
        .expect("Undo");
    assert_eq!(editor.wire_count(), 0);
    assert_eq!(editor.instance_count(), 2);

    controller
        .handle_intent(&mut editor, AppIntent::RedoRequested)
        .expect("Redo");
    assert_eq!(editor.wire_count(), 1);
}

#[test]
fn test_undo_cancels_active_session() {
    let (mut controller, mut editor, a, _) = setup_facing_pair();
    click_endpoint(&mut controller, &mut editor, a, "right");
    assert!(editor.session.is_drawing());

    controller
        .handle_intent(&mut editor, AppIntent::UndoRequested)
        .expect("Undo");

    assert!(!editor.session.is_drawing());
    assert_eq!(editor.instance_count(), 1);
}

#[test]
fn test_moving_component_reroutes_auto_wire() {
    let mut controller = AppController::new();
    let mut editor = SchematicEditor::new();
    let a = drop_component(&mut controller, &mut editor, "resistor", IVec2::new(0, 0));
    let b = drop_component(&mut controller, &mut editor, "resistor", IVec2::new(5, 0));
    click_endpoint(&mut controller, &mut editor, a, "right");
    click_endpoint(&mut controller, &mut editor, b, "left");

    controller
        .handle_intent(
            &mut editor,
            AppIntent::ComponentMoved {
                instance_id: b,
                grid_pos: IVec2::new(6, 4),
            },
        )
        .expect("Verschieben");

    let wire = editor.wires.iter().next().expect("Wire");
    assert_eq!(wire.first_point(), Some(Vec2::new(160.0, 40.0)));
    assert_eq!(wire.last_point(), Some(Vec2::new(480.0, 360.0)));
    assert!(count_bends(&wire.waypoints) <= 4);

    controller
        .handle_intent(&mut editor, AppIntent::UndoRequested)
        .expect("Undo");
    let wire = editor.wires.iter().next().expect("Wire");
    assert_eq!(wire.last_point(), Some(Vec2::new(400.0, 40.0)));
}

#[test]
fn test_command_log_records_mapped_commands() {
    let (mut controller, mut editor, a, _) = setup_facing_pair();
    let before = editor.command_log.len();

    click_endpoint(&mut controller, &mut editor, a, "right");
    controller
        .handle_intent(
            &mut editor,
            AppIntent::PointerMoved {
                world_pos: Vec2::new(300.0, 300.0),
            },
        )
        .expect("PointerMoved");

    assert_eq!(editor.command_log.len(), before + 2);
    assert!(matches!(
        editor.command_log.entries().last(),
        Some(AppCommand::UpdateWirePreview { .. })
    ));
}

#[test]
fn test_options_with_zero_grid_keep_default_grid() {
    let mut controller = AppController::new();
    let mut editor = SchematicEditor::new();
    let options = EditorOptions {
        grid_size: 0.0,
        undo_depth: 5,
        ..EditorOptions::default()
    };

    controller
        .handle_intent(&mut editor, AppIntent::OptionsChanged { options })
        .expect("Optionen");

    assert_eq!(editor.options.grid_size, 80.0);
    assert_eq!(editor.options.undo_depth, 5);
    assert_eq!(
        editor.view.grid.snap_to_grid(Vec2::new(250.0, 50.0)),
        Vec2::new(240.0, 80.0)
    );
}
