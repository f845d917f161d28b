//! Application Controller für zentrale Event-Verarbeitung.

use super::render_scene;
use super::{AppCommand, AppIntent, SchematicEditor};
use crate::shared::RenderScene;

/// Orchestriert UI-Events und Use-Cases auf dem Editor-Zustand.
#[derive(Default)]
pub struct AppController;

impl AppController {
    /// Erstellt einen neuen Controller.
    pub fn new() -> Self {
        Self
    }

    /// Verarbeitet einen Intent über Intent->Command Mapping.
    pub fn handle_intent(
        &mut self,
        editor: &mut SchematicEditor,
        intent: AppIntent,
    ) -> anyhow::Result<()> {
        let commands = self.map_intent_to_commands(editor, intent);
        for command in commands {
            self.handle_command(editor, command)?;
        }

        Ok(())
    }

    fn map_intent_to_commands(&self, editor: &SchematicEditor, intent: AppIntent) -> Vec<AppCommand> {
        super::intent_mapping::map_intent_to_commands(editor, intent)
    }

    /// Führt mutierende Commands auf dem Editor aus.
    /// Dispatcht an Feature-Handler in `handlers/`.
    pub fn handle_command(
        &mut self,
        editor: &mut SchematicEditor,
        command: AppCommand,
    ) -> anyhow::Result<()> {
        editor.command_log.record(&command);
        use super::handlers;

        match command {
            // === Datei-I/O ===
            AppCommand::LoadFile { path } => handlers::file_io::load(editor, path)?,
            AppCommand::SaveFile { path } => handlers::file_io::save(editor, path)?,

            // === Ansicht ===
            AppCommand::ResetView => handlers::view::reset_view(editor),
            AppCommand::ZoomIn => handlers::view::zoom_in(editor),
            AppCommand::ZoomOut => handlers::view::zoom_out(editor),
            AppCommand::SetViewportSize { size } => handlers::view::set_viewport_size(editor, size),
            AppCommand::PanView { delta } => handlers::view::pan(editor, delta),
            AppCommand::ZoomView {
                factor,
                focus_screen,
            } => handlers::view::zoom_towards(editor, factor, focus_screen),
            AppCommand::ToggleGrid => handlers::view::toggle_grid(editor),

            // === Wires ===
            AppCommand::StartWire {
                instance_id,
                endpoint_id,
            } => handlers::wiring::start(editor, instance_id, &endpoint_id),
            AppCommand::AddWaypoint { world_pos } => {
                handlers::wiring::add_waypoint(editor, world_pos)
            }
            AppCommand::UpdateWirePreview { world_pos } => {
                handlers::wiring::update_preview(editor, world_pos)
            }
            AppCommand::CompleteWire {
                instance_id,
                endpoint_id,
            } => handlers::wiring::complete(editor, instance_id, &endpoint_id),
            AppCommand::ConnectToWire {
                target_wire,
                world_pos,
            } => handlers::wiring::connect_to_wire(editor, target_wire, world_pos),
            AppCommand::CancelWire => handlers::wiring::cancel(editor),
            AppCommand::SetOrthogonal { orthogonal } => {
                handlers::wiring::set_orthogonal(editor, orthogonal)
            }
            AppCommand::RerouteAll => handlers::wiring::reroute_all(editor),

            // === Selektion ===
            AppCommand::SelectWire { wire_id, additive } => {
                handlers::selection::select_wire(editor, wire_id, additive)
            }
            AppCommand::PickWireAt {
                world_pos,
                additive,
            } => handlers::selection::pick_wire(editor, world_pos, additive),
            AppCommand::PickComponentAt {
                world_pos,
                additive,
            } => handlers::selection::pick_component(editor, world_pos, additive),
            AppCommand::SelectComponentsInRect {
                corner_a,
                corner_b,
                additive,
            } => handlers::selection::select_in_rect(editor, corner_a, corner_b, additive),
            AppCommand::ClearSelection => handlers::selection::clear(editor),

            // === Editing ===
            AppCommand::PlaceComponent {
                component_id,
                grid_pos,
            } => handlers::editing::place_component(editor, &component_id, grid_pos),
            AppCommand::MoveComponent {
                instance_id,
                grid_pos,
            } => handlers::editing::move_component(editor, instance_id, grid_pos),
            AppCommand::MoveSelected { delta } => handlers::editing::move_selected(editor, delta),
            AppCommand::RotateSelected => handlers::editing::rotate_selected(editor),
            AppCommand::FlipSelected => handlers::editing::flip_selected(editor),
            AppCommand::DuplicateSelected => handlers::editing::duplicate_selected(editor),
            AppCommand::SetLabel { label } => handlers::editing::set_label(editor, &label),
            AppCommand::DeleteSelectedWires => handlers::editing::delete_selected_wires(editor),
            AppCommand::DeleteSelectedComponents => {
                handlers::editing::delete_selected_components(editor)
            }
            AppCommand::ClearSchematic => handlers::editing::clear_schematic(editor),

            // === History / Optionen ===
            AppCommand::Undo => handlers::history::undo(editor),
            AppCommand::Redo => handlers::history::redo(editor),
            AppCommand::ApplyOptions { options } => {
                handlers::options::apply_options(editor, options)
            }
        }

        Ok(())
    }

    /// Baut die Render-Szene aus dem aktuellen Editor-Zustand.
    pub fn build_render_scene(
        &self,
        editor: &SchematicEditor,
        viewport_size: [f32; 2],
    ) -> RenderScene {
        render_scene::build(editor, viewport_size)
    }
}
