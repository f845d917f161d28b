//! Use-Case: Schaltplan leeren.

use crate::app::SchematicEditor;
use crate::core::{InstanceStore, WireStore};
use std::sync::Arc;

/// Entfernt alle Bauteile und Wires (rückgängig machbar).
pub fn clear_schematic(editor: &mut SchematicEditor) {
    if editor.instances.is_empty() && editor.wires.is_empty() {
        return;
    }
    editor.record_undo_snapshot();
    editor.session.cancel();
    editor.instances = Arc::new(InstanceStore::new());
    editor.wires = Arc::new(WireStore::new());
    editor.selection.clear();
    editor.ui.status_message = Some("Canvas cleared".to_string());
    log::info!("Schaltplan geleert");
}
