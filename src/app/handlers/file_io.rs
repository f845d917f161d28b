//! Handler für Datei-Operationen (Öffnen, Speichern).

use crate::app::use_cases;
use crate::app::SchematicEditor;

/// Lädt einen Schaltplan aus dem übergebenen Pfad.
pub fn load(editor: &mut SchematicEditor, path: String) -> anyhow::Result<()> {
    use_cases::file_io::load_selected_file(editor, path)
}

/// Speichert den Schaltplan.
///
/// `None` speichert unter dem aktuell bekannten Pfad.
/// `Some(p)` speichert explizit unter dem neuen Pfad `p`.
pub fn save(editor: &mut SchematicEditor, path: Option<String>) -> anyhow::Result<()> {
    match path {
        Some(path) => use_cases::file_io::save_file_as(editor, path),
        None => use_cases::file_io::save_current_file(editor),
    }
}
