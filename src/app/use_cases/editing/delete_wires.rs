//! Use-Case: Wires löschen (inkl. Junction-Marker).

use crate::app::SchematicEditor;
use crate::shared::options::DanglingWirePolicy;
use std::sync::Arc;

/// Löscht alle selektierten Wires und gibt die Anzahl entfernter Wires zurück.
pub fn delete_selected_wires(editor: &mut SchematicEditor) -> usize {
    let ids: Vec<u64> = editor.selection.wire_ids.iter().copied().collect();
    if ids.is_empty() {
        log::debug!("Keine Wires zum Löschen selektiert");
        return 0;
    }
    let removed = delete_wires_by_ids(editor, &ids);
    if !editor.selection.wire_ids.is_empty() {
        editor.selection.wire_ids_mut().clear();
    }
    removed
}

/// Löscht Wires per ID. Nicht existierende IDs sind ein No-op.
///
/// Junction-Marker der gelöschten Wires verschwinden mit. Wires, die einen
/// gelöschten Wire als Junction-Ziel nutzen, werden nur bei
/// `CascadeDelete` mitgelöscht.
pub fn delete_wires_by_ids(editor: &mut SchematicEditor, ids: &[u64]) -> usize {
    let targets: Vec<u64> = match editor.options.dangling_wires {
        DanglingWirePolicy::Detach => ids
            .iter()
            .copied()
            .filter(|&id| editor.wires.contains(id))
            .collect(),
        DanglingWirePolicy::CascadeDelete => editor.wires.cascade_closure(ids),
    };
    if targets.is_empty() {
        return 0;
    }

    // Snapshot VOR Mutation
    editor.record_undo_snapshot();
    let removed = Arc::make_mut(&mut editor.wires).remove_wires(&targets).len();

    editor.ui.status_message = Some(format!("Deleted {removed} wire(s)"));
    log::info!("{removed} Wires gelöscht");
    removed
}
