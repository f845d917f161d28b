//! Handler für Laufzeit-Optionen.

use crate::app::SchematicEditor;
use crate::shared::EditorOptions;

/// Übernimmt neue Optionen und gleicht abhängigen Zustand an.
pub fn apply_options(editor: &mut SchematicEditor, options: EditorOptions) {
    let options = options.sanitized();
    editor.view.grid.grid_size = options.grid_size;
    editor
        .view
        .grid
        .set_zoom_limits(options.zoom_min, options.zoom_max);
    if options.undo_depth != editor.options.undo_depth {
        editor.history.set_max_depth(options.undo_depth);
    }
    editor.options = options;
    log::info!("Optionen übernommen");
}
