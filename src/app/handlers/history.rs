//! Handler für Undo/Redo-Operationen.

use crate::app::history::Snapshot;
use crate::app::SchematicEditor;

/// Führt einen Undo-Schritt aus, falls vorhanden.
///
/// Eine laufende Routing-Session wird vorher abgebrochen.
pub fn undo(editor: &mut SchematicEditor) {
    editor.session.cancel();
    let current = Snapshot::from_state(editor);
    if let Some(prev) = editor.history.pop_undo_with_current(current) {
        prev.apply_to(editor);
        log::info!("Undo ausgeführt");
    } else {
        log::debug!("Undo: nichts zu tun");
    }
}

/// Führt einen Redo-Schritt aus, falls vorhanden.
pub fn redo(editor: &mut SchematicEditor) {
    editor.session.cancel();
    let current = Snapshot::from_state(editor);
    if let Some(next) = editor.history.pop_redo_with_current(current) {
        next.apply_to(editor);
        log::info!("Redo ausgeführt");
    } else {
        log::debug!("Redo: nichts zu tun");
    }
}
