//! Handler für Pan, Zoom, Raster und Viewport.

use crate::app::use_cases;
use crate::app::SchematicEditor;
use glam::Vec2;

/// Setzt Zoom und Pan zurück.
pub fn reset_view(editor: &mut SchematicEditor) {
    use_cases::view::reset_view(editor);
}

/// Zoomt stufenweise hinein.
pub fn zoom_in(editor: &mut SchematicEditor) {
    use_cases::view::zoom_in(editor);
}

/// Zoomt stufenweise heraus.
pub fn zoom_out(editor: &mut SchematicEditor) {
    use_cases::view::zoom_out(editor);
}

/// Aktualisiert die Viewport-Größe im State.
pub fn set_viewport_size(editor: &mut SchematicEditor, size: [f32; 2]) {
    use_cases::view::resize(editor, size);
}

/// Verschiebt die Ansicht um ein Screen-Delta.
pub fn pan(editor: &mut SchematicEditor, delta: Vec2) {
    use_cases::view::pan(editor, delta);
}

/// Zoomt mit optionalem Fokuspunkt (Screen-Koordinaten).
pub fn zoom_towards(editor: &mut SchematicEditor, factor: f32, focus_screen: Option<Vec2>) {
    use_cases::view::zoom_towards(editor, factor, focus_screen);
}

/// Schaltet die Raster-Anzeige um.
pub fn toggle_grid(editor: &mut SchematicEditor) {
    use_cases::view::toggle_grid(editor);
}
