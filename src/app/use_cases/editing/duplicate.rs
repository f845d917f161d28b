//! Use-Case: Selektierte Bauteile duplizieren.

use crate::app::SchematicEditor;
use glam::IVec2;
use std::sync::Arc;

/// Dupliziert alle selektierten Bauteile mit Versatz und selektiert die Kopien.
///
/// Wires werden nicht mitkopiert.
pub fn duplicate_selected(editor: &mut SchematicEditor) -> Vec<u64> {
    let ids: Vec<u64> = editor.selection.instance_ids.iter().copied().collect();
    if ids.is_empty() {
        return Vec::new();
    }

    editor.record_undo_snapshot();
    let offset = IVec2::splat(editor.options.duplicate_offset_cells);
    let store = Arc::make_mut(&mut editor.instances);
    let copies: Vec<u64> = ids
        .into_iter()
        .filter_map(|id| store.duplicate(id, offset))
        .collect();

    editor.selection.clear();
    editor.selection.instance_ids_mut().extend(copies.iter().copied());
    editor.ui.status_message = Some(format!("{} component(s) duplicated", copies.len()));
    log::info!("{} Bauteile dupliziert", copies.len());
    copies
}
