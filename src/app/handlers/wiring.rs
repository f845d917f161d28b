//! Handler für die interaktive Wire-Erstellung.

use crate::app::use_cases;
use crate::app::SchematicEditor;
use glam::Vec2;

/// Startet einen Wire am Pin.
pub fn start(editor: &mut SchematicEditor, instance_id: u64, endpoint_id: &str) {
    use_cases::wiring::start_wire(editor, instance_id, endpoint_id);
}

/// Fügt einen Wegpunkt hinzu.
pub fn add_waypoint(editor: &mut SchematicEditor, world_pos: Vec2) {
    use_cases::wiring::add_waypoint(editor, world_pos);
}

/// Aktualisiert die Vorschau zum Cursor.
pub fn update_preview(editor: &mut SchematicEditor, world_pos: Vec2) {
    use_cases::wiring::update_cursor(editor, world_pos);
}

/// Schließt den Wire am Ziel-Pin ab.
pub fn complete(editor: &mut SchematicEditor, instance_id: u64, endpoint_id: &str) {
    use_cases::wiring::complete_wire(editor, instance_id, endpoint_id);
}

/// Schließt den Wire als Junction ab.
pub fn connect_to_wire(editor: &mut SchematicEditor, target_wire: u64, world_pos: Vec2) {
    use_cases::wiring::connect_to_wire(editor, target_wire, world_pos);
}

/// Bricht den laufenden Wire ab.
pub fn cancel(editor: &mut SchematicEditor) {
    use_cases::wiring::cancel_wire(editor);
}

/// Setzt den 90°-Modus.
pub fn set_orthogonal(editor: &mut SchematicEditor, orthogonal: bool) {
    use_cases::wiring::set_orthogonal(editor, orthogonal);
}

/// Routet alle intakten Wires neu (rückgängig machbar).
pub fn reroute_all(editor: &mut SchematicEditor) {
    use_cases::reroute::reroute_all_wires(editor);
}
