//! Use-Case: Rechteck-Selektion von Bauteilen.

use crate::app::SchematicEditor;
use glam::Vec2;

/// Selektiert alle Bauteile, deren Bounding-Box das Rechteck überlappt.
pub fn select_instances_in_rect(
    editor: &mut SchematicEditor,
    corner_a: Vec2,
    corner_b: Vec2,
    additive: bool,
) {
    let hit_ids = editor
        .instances
        .ids_in_rect(corner_a, corner_b, editor.options.grid_size);

    if !additive {
        editor.selection.clear();
    } else if !editor.selection.wire_ids.is_empty() {
        editor.selection.wire_ids_mut().clear();
    }
    if !hit_ids.is_empty() {
        editor.selection.instance_ids_mut().extend(hit_ids);
    }
    log::debug!(
        "Rechteck-Selektion: {} Bauteile",
        editor.selection.instance_ids.len()
    );
}
