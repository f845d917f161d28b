//! Use-Case: Beschriftung des ersten selektierten Bauteils setzen.

use crate::app::SchematicEditor;
use std::sync::Arc;

/// Setzt die Beschriftung des zuerst selektierten Bauteils.
pub fn set_label_of_selected(editor: &mut SchematicEditor, label: &str) -> bool {
    let Some(id) = editor.selection.instance_ids.first().copied() else {
        log::debug!("Kein Bauteil für Beschriftung selektiert");
        return false;
    };
    match editor.instances.get(id) {
        Some(instance) if instance.label != label => {}
        _ => return false,
    }

    editor.record_undo_snapshot();
    Arc::make_mut(&mut editor.instances).set_label(id, label)
}
