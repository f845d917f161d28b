//! Use-Case-Funktionen für Dateiaktionen.
//! Alle Dateisystem-Operationen (I/O) sind hier zentralisiert.

use crate::app::SchematicEditor;
use anyhow::Context;
use std::sync::Arc;

/// Lädt einen Schaltplan aus der Datei in den Editor.
///
/// Ersetzt Bauteile und Wires, verwirft Selektion, laufende Session und
/// Undo-Historie.
pub fn load_selected_file(editor: &mut SchematicEditor, path: String) -> anyhow::Result<()> {
    let json = std::fs::read_to_string(&path)
        .with_context(|| format!("Datei '{path}' konnte nicht gelesen werden"))?;
    let loaded = crate::storage::parse_schematic(&json, &editor.library)?;

    log::info!(
        "Schaltplan geladen: {} Bauteile, {} Wires",
        loaded.instances.len(),
        loaded.wires.len()
    );
    let broken = loaded.wires.broken_wires(&loaded.instances).len();

    editor.session.cancel();
    editor.selection.clear();
    editor.history.clear();
    editor.instances = Arc::new(loaded.instances);
    editor.wires = Arc::new(loaded.wires);
    editor.ui.schematic_name = if loaded.name.is_empty() {
        "Untitled".to_string()
    } else {
        loaded.name
    };
    // Merke Pfad für späteres Save
    editor.ui.current_file_path = Some(path);
    editor.ui.status_message = (broken > 0).then(|| format!("{broken} broken wire(s) loaded"));
    Ok(())
}

/// Speichert in die aktuelle Datei. Ohne bekannten Pfad passiert nichts.
pub fn save_current_file(editor: &mut SchematicEditor) -> anyhow::Result<()> {
    let Some(path) = editor.ui.current_file_path.clone() else {
        log::warn!("Kein Dateipfad bekannt, Speichern übersprungen");
        editor.ui.status_message = Some("No file path set, use Save As".to_string());
        return Ok(());
    };
    write_schematic_to_file(editor, &path)?;
    log::info!("File saved successfully");
    Ok(())
}

/// Speichert den Schaltplan unter dem angegebenen Pfad.
pub fn save_file_as(editor: &mut SchematicEditor, path: String) -> anyhow::Result<()> {
    write_schematic_to_file(editor, &path)?;
    log::info!("File saved as: {path}");
    editor.ui.current_file_path = Some(path);
    Ok(())
}

fn write_schematic_to_file(editor: &SchematicEditor, path: &str) -> anyhow::Result<()> {
    let json = crate::storage::write_schematic(
        &editor.ui.schematic_name,
        &editor.instances,
        &editor.wires,
    )?;
    std::fs::write(path, json).with_context(|| format!("Datei '{path}' nicht schreibbar"))?;
    Ok(())
}
