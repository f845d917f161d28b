//! Handler für Selektions-Operationen.

use crate::app::use_cases;
use crate::app::SchematicEditor;
use glam::Vec2;

/// Selektiert einen Wire per ID.
pub fn select_wire(editor: &mut SchematicEditor, wire_id: u64, additive: bool) {
    use_cases::selection::select_wire(editor, wire_id, additive);
}

/// Selektiert den nächsten Wire im Pick-Radius.
pub fn pick_wire(editor: &mut SchematicEditor, world_pos: Vec2, additive: bool) {
    use_cases::selection::pick_wire_at(editor, world_pos, additive);
}

/// Selektiert das Bauteil unter dem Punkt.
pub fn pick_component(editor: &mut SchematicEditor, world_pos: Vec2, additive: bool) {
    use_cases::selection::pick_instance_at(editor, world_pos, additive);
}

/// Selektiert alle Bauteile im Rechteck.
pub fn select_in_rect(editor: &mut SchematicEditor, corner_a: Vec2, corner_b: Vec2, additive: bool) {
    use_cases::selection::select_instances_in_rect(editor, corner_a, corner_b, additive);
}

/// Hebt die aktuelle Selektion auf.
pub fn clear(editor: &mut SchematicEditor) {
    use_cases::selection::clear_selection(editor);
}
