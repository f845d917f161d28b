use crate::app::SchematicEditor;

/// Hebt Bauteil- und Wire-Selektion auf.
pub fn clear_selection(editor: &mut SchematicEditor) {
    if editor.selection.is_empty() {
        return;
    }
    editor.selection.clear();
    log::debug!("Selektion aufgehoben");
}
