//! Use-Case: Selektion per Klick.

use crate::app::SchematicEditor;
use glam::Vec2;

use super::helpers::clear_selection;

/// Selektiert einen Wire. Unbekannte IDs werden ignoriert.
///
/// Mit `additive` (Modifier) bleibt die bisherige Wire-Selektion erhalten;
/// eine Bauteil-Selektion wird immer aufgehoben.
pub fn select_wire(editor: &mut SchematicEditor, wire_id: u64, additive: bool) {
    if !editor.wires.contains(wire_id) {
        log::debug!("Wire {wire_id} existiert nicht, Selektion unverändert");
        return;
    }
    editor.selection.select_wire(wire_id, additive);
    editor.ui.status_message = Some(format!(
        "{} wire(s) selected",
        editor.selection.wire_ids.len()
    ));
}

/// Selektiert ein Bauteil; eine Wire-Selektion wird aufgehoben.
pub fn select_instance(editor: &mut SchematicEditor, instance_id: u64, additive: bool) {
    if !editor.instances.contains(instance_id) {
        log::debug!("Instanz {instance_id} existiert nicht, Selektion unverändert");
        return;
    }
    editor.selection.select_instance(instance_id, additive);
}

/// Selektiert den nächsten Wire im Pick-Radius.
///
/// Ohne Treffer wird (nicht-additiv) die Selektion aufgehoben.
pub fn pick_wire_at(editor: &mut SchematicEditor, world_pos: Vec2, additive: bool) -> Option<u64> {
    let hit = editor
        .wires
        .hit_test(world_pos, editor.options.wire_pick_radius);
    match hit {
        Some(wire_id) => select_wire(editor, wire_id, additive),
        None if !additive => clear_selection(editor),
        None => {}
    }
    hit
}

/// Selektiert das oberste Bauteil unter dem Punkt.
pub fn pick_instance_at(
    editor: &mut SchematicEditor,
    world_pos: Vec2,
    additive: bool,
) -> Option<u64> {
    let hit = editor
        .instances
        .hit_test(world_pos, editor.options.grid_size);
    match hit {
        Some(instance_id) => select_instance(editor, instance_id, additive),
        None if !additive => clear_selection(editor),
        None => {}
    }
    hit
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::IVec2;
    use std::sync::Arc;

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
    fn pick_wire_within_radius_selects_it() {
        let (mut editor, _, wire) = editor_with_wire();
        assert_eq!(pick_wire_at(&mut editor, Vec2::new(240.0, 44.0), false), Some(wire));
        assert!(editor.selection.wire_ids.contains(&wire));
    }

    #[test]
    fn pick_outside_radius_clears_selection() {
        let (mut editor, _, wire) = editor_with_wire();
        select_wire(&mut editor, wire, false);
        assert_eq!(pick_wire_at(&mut editor, Vec2::new(240.0, 60.0), false), None);
        assert!(editor.selection.is_empty());
    }

    #[test]
    fn selecting_instance_drops_wire_selection() {
        let (mut editor, a, wire) = editor_with_wire();
        select_wire(&mut editor, wire, false);
        assert_eq!(pick_instance_at(&mut editor, Vec2::new(80.0, 40.0), true), Some(a));
        assert!(editor.selection.wire_ids.is_empty());
        assert!(editor.selection.instance_ids.contains(&a));
    }

    #[test]
    fn unknown_wire_is_ignored() {
        let (mut editor, _, _) = editor_with_wire();
        select_wire(&mut editor, 99, false);
        assert!(editor.selection.is_empty());
    }
}
