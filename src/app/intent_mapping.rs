//! Mapping von UI-Intents auf mutierende App-Commands.

use super::{AppCommand, AppIntent, SchematicEditor};
use crate::core::suggest_endpoint;
use glam::Vec2;

/// Übersetzt einen `AppIntent` in eine Sequenz ausführbarer `AppCommand`s.
///
/// Das Mapping liest den Zustand nur (laufende Session, Selektion,
/// Wire-Hit-Test), mutiert aber nichts.
pub fn map_intent_to_commands(editor: &SchematicEditor, intent: AppIntent) -> Vec<AppCommand> {
    let drawing = editor.session.is_drawing();
    match intent {
        AppIntent::SaveRequested => vec![AppCommand::SaveFile { path: None }],
        AppIntent::FileSelected { path } => vec![AppCommand::LoadFile { path }],
        AppIntent::SaveFilePathSelected { path } => {
            vec![AppCommand::SaveFile { path: Some(path) }]
        }

        AppIntent::ResetViewRequested => vec![AppCommand::ResetView],
        AppIntent::ZoomInRequested => vec![AppCommand::ZoomIn],
        AppIntent::ZoomOutRequested => vec![AppCommand::ZoomOut],
        AppIntent::ViewportResized { size } => vec![AppCommand::SetViewportSize { size }],
        AppIntent::CanvasPan { delta } => vec![AppCommand::PanView { delta }],
        AppIntent::CanvasZoom {
            factor,
            focus_screen,
        } => vec![AppCommand::ZoomView {
            factor,
            focus_screen,
        }],
        AppIntent::ToggleGridRequested => vec![AppCommand::ToggleGrid],

        AppIntent::EndpointClicked {
            instance_id,
            endpoint_id,
        } => {
            if drawing {
                vec![AppCommand::CompleteWire {
                    instance_id,
                    endpoint_id,
                }]
            } else {
                vec![AppCommand::StartWire {
                    instance_id,
                    endpoint_id,
                }]
            }
        }
        AppIntent::WireClicked {
            wire_id,
            world_pos,
            additive,
        } => wire_click_commands(drawing, wire_id, world_pos, additive),
        AppIntent::WirePickRequested {
            world_pos,
            additive,
        } => match editor
            .wires
            .hit_test(world_pos, editor.options.wire_pick_radius)
        {
            Some(wire_id) => wire_click_commands(drawing, wire_id, world_pos, additive),
            None => canvas_click_commands(drawing, world_pos),
        },
        AppIntent::CanvasClicked { world_pos } => canvas_click_commands(drawing, world_pos),
        AppIntent::PointerMoved { world_pos } => {
            if drawing {
                vec![AppCommand::UpdateWirePreview { world_pos }]
            } else {
                Vec::new()
            }
        }
        AppIntent::OrthogonalModeChanged { orthogonal } => {
            vec![AppCommand::SetOrthogonal { orthogonal }]
        }
        AppIntent::EscapePressed => {
            if drawing {
                vec![AppCommand::CancelWire]
            } else {
                vec![AppCommand::ClearSelection]
            }
        }
        AppIntent::RerouteAllRequested => vec![AppCommand::RerouteAll],

        AppIntent::ComponentDropped {
            component_id,
            grid_pos,
        } => vec![AppCommand::PlaceComponent {
            component_id,
            grid_pos,
        }],
        AppIntent::ComponentPickRequested {
            world_pos,
            additive,
        } => {
            if drawing {
                complete_on_component_commands(editor, world_pos)
            } else {
                vec![AppCommand::PickComponentAt {
                    world_pos,
                    additive,
                }]
            }
        }
        AppIntent::SelectComponentsInRectRequested {
            corner_a,
            corner_b,
            additive,
        } => vec![AppCommand::SelectComponentsInRect {
            corner_a,
            corner_b,
            additive,
        }],
        AppIntent::ComponentMoved {
            instance_id,
            grid_pos,
        } => vec![AppCommand::MoveComponent {
            instance_id,
            grid_pos,
        }],
        AppIntent::MoveSelectedRequested { delta } => vec![AppCommand::MoveSelected { delta }],
        AppIntent::RotateSelectedRequested => vec![AppCommand::RotateSelected],
        AppIntent::FlipSelectedRequested => vec![AppCommand::FlipSelected],
        AppIntent::DuplicateSelectedRequested => vec![AppCommand::DuplicateSelected],
        AppIntent::LabelChanged { label } => vec![AppCommand::SetLabel { label }],
        AppIntent::DeleteSelectedRequested => {
            if !editor.selection.wire_ids.is_empty() {
                vec![AppCommand::DeleteSelectedWires]
            } else if !editor.selection.instance_ids.is_empty() {
                vec![AppCommand::DeleteSelectedComponents]
            } else {
                Vec::new()
            }
        }
        AppIntent::ClearSchematicRequested => vec![AppCommand::ClearSchematic],

        AppIntent::UndoRequested => vec![AppCommand::Undo],
        AppIntent::RedoRequested => vec![AppCommand::Redo],
        AppIntent::OptionsChanged { options } => vec![AppCommand::ApplyOptions { options }],
    }
}

/// Wire-Klick: während des Zeichnens Junction, sonst Selektion.
fn wire_click_commands(
    drawing: bool,
    wire_id: u64,
    world_pos: Vec2,
    additive: bool,
) -> Vec<AppCommand> {
    if drawing {
        vec![AppCommand::ConnectToWire {
            target_wire: wire_id,
            world_pos,
        }]
    } else {
        vec![AppCommand::SelectWire { wire_id, additive }]
    }
}

/// Klick auf einen Bauteil-Körper während des Zeichnens: Abschluss am
/// vorgeschlagenen Pin. Ohne Treffer wird ein Wegpunkt gesetzt.
fn complete_on_component_commands(editor: &SchematicEditor, world_pos: Vec2) -> Vec<AppCommand> {
    let grid_size = editor.options.grid_size;
    let from = editor.session.waypoints().last().copied();
    let target = editor
        .instances
        .hit_test(world_pos, grid_size)
        .and_then(|id| editor.instances.get(id))
        .and_then(|instance| {
            suggest_endpoint(instance, false, from, grid_size)
                .map(|endpoint_id| (instance.id, endpoint_id))
        });
    match target {
        Some((instance_id, endpoint_id)) => vec![AppCommand::CompleteWire {
            instance_id,
            endpoint_id,
        }],
        None => canvas_click_commands(true, world_pos),
    }
}

/// Klick auf leere Canvas: während des Zeichnens Wegpunkt, sonst Selektion aufheben.
fn canvas_click_commands(drawing: bool, world_pos: Vec2) -> Vec<AppCommand> {
    if drawing {
        vec![AppCommand::AddWaypoint { world_pos }]
    } else {
        vec![AppCommand::ClearSelection]
    }
}

#[cfg(test)]
mod tests;
