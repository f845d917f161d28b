//! Use-Case-Funktionen für Pan/Zoom/Grid der Canvas.

use crate::app::SchematicEditor;
use glam::Vec2;

/// Zoomt um einen Schritt hinein (Fokus: Viewport-Mitte).
pub fn zoom_in(editor: &mut SchematicEditor) {
    let factor = editor.options.zoom_step;
    zoom_towards(editor, factor, None);
}

/// Zoomt um einen Schritt heraus (Fokus: Viewport-Mitte).
pub fn zoom_out(editor: &mut SchematicEditor) {
    let factor = 1.0 / editor.options.zoom_step;
    zoom_towards(editor, factor, None);
}

/// Zoomt um `factor`; mit `focus` bleibt der Punkt unter dem Cursor fix.
pub fn zoom_towards(editor: &mut SchematicEditor, factor: f32, focus: Option<Vec2>) {
    let focus = focus.or_else(|| {
        let [w, h] = editor.view.viewport_size;
        (w > 0.0 && h > 0.0).then(|| Vec2::new(w, h) * 0.5)
    });
    editor.view.grid.zoom_by(factor, focus);
}

/// Verschiebt die Ansicht um `delta` Screen-Pixel.
pub fn pan(editor: &mut SchematicEditor, delta: Vec2) {
    editor.view.grid.pan_by(delta);
}

/// Setzt Zoom und Pan zurück.
pub fn reset_view(editor: &mut SchematicEditor) {
    editor.view.grid.reset_view();
}

/// Schaltet die Raster-Anzeige um.
pub fn toggle_grid(editor: &mut SchematicEditor) {
    let visible = editor.view.grid.toggle_grid();
    log::debug!("Raster sichtbar: {visible}");
}

/// Aktualisiert die gespeicherte Viewport-Größe.
pub fn resize(editor: &mut SchematicEditor, size: [f32; 2]) {
    editor.view.viewport_size = size;
}
