//! Handler für Bauteil- und Wire-Editing.

use crate::app::use_cases;
use crate::app::SchematicEditor;
use glam::IVec2;

/// Platziert ein Bauteil aus der Bibliothek.
pub fn place_component(editor: &mut SchematicEditor, component_id: &str, grid_pos: IVec2) {
    use_cases::editing::place_component(editor, component_id, grid_pos);
}

/// Verschiebt ein Bauteil.
pub fn move_component(editor: &mut SchematicEditor, instance_id: u64, grid_pos: IVec2) {
    use_cases::editing::move_instance(editor, instance_id, grid_pos);
}

/// Verschiebt die selektierten Bauteile.
pub fn move_selected(editor: &mut SchematicEditor, delta: IVec2) {
    use_cases::editing::move_selected_by(editor, delta);
}

/// Dreht die selektierten Bauteile.
pub fn rotate_selected(editor: &mut SchematicEditor) {
    use_cases::editing::rotate_selected(editor);
}

/// Spiegelt die selektierten Bauteile.
pub fn flip_selected(editor: &mut SchematicEditor) {
    use_cases::editing::flip_selected(editor);
}

/// Dupliziert die selektierten Bauteile.
pub fn duplicate_selected(editor: &mut SchematicEditor) {
    use_cases::editing::duplicate_selected(editor);
}

/// Setzt die Beschriftung.
pub fn set_label(editor: &mut SchematicEditor, label: &str) {
    use_cases::editing::set_label_of_selected(editor, label);
}

/// Löscht die selektierten Wires.
pub fn delete_selected_wires(editor: &mut SchematicEditor) {
    use_cases::editing::delete_selected_wires(editor);
}

/// Löscht die selektierten Bauteile.
pub fn delete_selected_components(editor: &mut SchematicEditor) {
    use_cases::editing::delete_selected_instances(editor);
}

/// Leert den Schaltplan.
pub fn clear_schematic(editor: &mut SchematicEditor) {
    use_cases::editing::clear_schematic(editor);
}
