//! Use-Case: Bauteil aus der Bibliothek platzieren.

use crate::app::SchematicEditor;
use glam::IVec2;
use std::sync::Arc;

/// Platziert ein Bauteil der Bibliothek an der Grid-Position und selektiert es.
///
/// Unbekannte Bauteil-IDs werden mit Warnung ignoriert.
pub fn place_component(
    editor: &mut SchematicEditor,
    component_id: &str,
    grid_pos: IVec2,
) -> Option<u64> {
    let Some(def) = editor.library.get(component_id) else {
        log::warn!("Unbekanntes Bauteil '{component_id}'");
        editor.ui.status_message = Some(format!("Unknown component '{component_id}'"));
        return None;
    };

    editor.record_undo_snapshot();
    let name = def.name.clone();
    let id = Arc::make_mut(&mut editor.instances).place(def, grid_pos);
    editor.selection.select_instance(id, false);
    editor.ui.status_message = Some(format!("{name} placed"));
    log::info!("Bauteil {component_id} als Instanz {id} bei {grid_pos} platziert");
    Some(id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn place_selects_new_instance_and_records_undo() {
        let mut editor = SchematicEditor::new();
        let id = place_component(&mut editor, "diode", IVec2::new(2, 3)).expect("platziert");
        let inst = editor.instances.get(id).expect("Instanz");
        assert_eq!(inst.grid_pos, IVec2::new(2, 3));
        assert_eq!(inst.label, "Diode");
        assert!(editor.selection.instance_ids.contains(&id));
        assert!(editor.can_undo());
    }

    #[test]
    fn unknown_component_changes_nothing() {
        let mut editor = SchematicEditor::new();
        assert_eq!(place_component(&mut editor, "flux-capacitor", IVec2::ZERO), None);
        assert!(editor.instances.is_empty());
        assert!(!editor.can_undo());
    }
}
