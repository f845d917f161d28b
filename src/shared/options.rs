//! Zentrale Konfiguration für den Schaltplan-Editor.
//!
//! `EditorOptions` enthält alle zur Laufzeit änderbaren Werte.
//! Die `const`-Werte bleiben als Fallback/Default erhalten.

use crate::core::RouterConfig;
use serde::{Deserialize, Serialize};

// ── Grid / Ansicht ──────────────────────────────────────────────────

/// Rasterweite in Welt-Pixeln.
pub const GRID_SIZE: f32 = 80.0;
/// Minimaler Zoom-Faktor.
pub const ZOOM_MIN: f32 = 0.25;
/// Maximaler Zoom-Faktor.
pub const ZOOM_MAX: f32 = 4.0;
/// Zoom-Schritt bei Menü-Buttons / Shortcuts.
pub const ZOOM_STEP: f32 = 1.2;

// ── Routing ─────────────────────────────────────────────────────────

/// Länge des Pin-Stubs in Grid-Zellen.
pub const EXIT_OFFSET_CELLS: f32 = 2.0;
/// Sicherheitsabstand um Bauteile bei der Ecken-Prüfung (Pixel).
pub const OBSTACLE_MARGIN: f32 = 5.0;
/// Maximale Suchweite der Ebenen-Suche (Grid-Zellen).
pub const LEVEL_SEARCH_STEPS: u32 = 10;

// ── Selektion ───────────────────────────────────────────────────────

/// Pick-Radius für Wire-Klicks in Welt-Pixeln.
pub const WIRE_PICK_RADIUS: f32 = 6.0;
/// Versatz beim Duplizieren (Grid-Zellen).
pub const DUPLICATE_OFFSET_CELLS: i32 = 2;

// ── Historie ────────────────────────────────────────────────────────

/// Maximale Undo-Tiefe.
pub const UNDO_DEPTH: usize = 100;

/// Umgang mit Wires, deren Referenzen gelöscht werden
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DanglingWirePolicy {
    /// Wires bleiben erhalten und gelten als defekt
    #[default]
    Detach,
    /// Abhängige Wires werden (transitiv) mitgelöscht
    CascadeDelete,
}

// ── Laufzeit-Optionen (serialisierbar) ─────────────────────────────

/// Alle zur Laufzeit änderbaren Editor-Optionen.
/// Wird als `schematic_wire_editor.toml` neben der Binary gespeichert.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EditorOptions {
    // ── Grid / Ansicht ──────────────────────────────────────────
    /// Rasterweite in Welt-Pixeln
    pub grid_size: f32,
    /// Minimaler Zoom-Faktor
    pub zoom_min: f32,
    /// Maximaler Zoom-Faktor
    pub zoom_max: f32,
    /// Zoom-Schritt
    pub zoom_step: f32,

    // ── Routing ─────────────────────────────────────────────────
    /// Länge des Pin-Stubs in Grid-Zellen
    pub exit_offset_cells: f32,
    /// Sicherheitsabstand um Bauteile (Pixel)
    pub obstacle_margin: f32,
    /// Suchweite der Ebenen-Suche (Grid-Zellen)
    pub level_search_steps: u32,
    /// Neue Wires standardmäßig im 90°-Modus
    #[serde(default = "default_true")]
    pub orthogonal_by_default: bool,

    // ── Selektion / Editieren ───────────────────────────────────
    /// Pick-Radius für Wire-Klicks (Welt-Pixel)
    pub wire_pick_radius: f32,
    /// Umgang mit Wires gelöschter Bauteile/Wires
    #[serde(default)]
    pub dangling_wires: DanglingWirePolicy,
    /// Versatz beim Duplizieren (Grid-Zellen)
    #[serde(default = "default_duplicate_offset")]
    pub duplicate_offset_cells: i32,

    // ── Historie ────────────────────────────────────────────────
    /// Maximale Undo-Tiefe
    #[serde(default = "default_undo_depth")]
    pub undo_depth: usize,
}

impl Default for EditorOptions {
    fn default() -> Self {
        Self {
            grid_size: GRID_SIZE,
            zoom_min: ZOOM_MIN,
            zoom_max: ZOOM_MAX,
            zoom_step: ZOOM_STEP,

            exit_offset_cells: EXIT_OFFSET_CELLS,
            obstacle_margin: OBSTACLE_MARGIN,
            level_search_steps: LEVEL_SEARCH_STEPS,
            orthogonal_by_default: true,

            wire_pick_radius: WIRE_PICK_RADIUS,
            dangling_wires: DanglingWirePolicy::Detach,
            duplicate_offset_cells: DUPLICATE_OFFSET_CELLS,

            undo_depth: UNDO_DEPTH,
        }
    }
}

fn default_true() -> bool {
    true
}

/// Serde-Default für `duplicate_offset_cells` (ältere TOML-Dateien).
fn default_duplicate_offset() -> i32 {
    DUPLICATE_OFFSET_CELLS
}

/// Serde-Default für `undo_depth` (ältere TOML-Dateien).
fn default_undo_depth() -> usize {
    UNDO_DEPTH
}

impl EditorOptions {
    /// Ersetzt unbrauchbare Werte durch die Standardwerte.
    ///
    /// Die Rasterweite muss endlich und positiv sein.
    pub fn sanitized(mut self) -> Self {
        if !(self.grid_size.is_finite() && self.grid_size > 0.0) {
            log::warn!(
                "Ungültige Rasterweite {}, verwende {}",
                self.grid_size,
                GRID_SIZE
            );
            self.grid_size = GRID_SIZE;
        }
        self
    }

    /// Lädt Optionen aus einer TOML-Datei. Bei Fehler: Standardwerte.
    pub fn load_from_file(path: &std::path::Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str::<Self>(&content) {
                Ok(opts) => {
                    log::info!("Optionen geladen aus: {}", path.display());
                    opts.sanitized()
                }
                Err(e) => {
                    log::warn!("Optionen-Datei fehlerhaft, verwende Standardwerte: {}", e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Keine Optionen-Datei gefunden, verwende Standardwerte");
                Self::default()
            }
        }
    }

    /// Speichert Optionen als TOML-Datei.
    pub fn save_to_file(&self, path: &std::path::Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        log::info!("Optionen gespeichert nach: {}", path.display());
        Ok(())
    }

    /// Ermittelt den Pfad zur Optionen-Datei neben der Binary.
    pub fn config_path() -> std::path::PathBuf {
        std::env::current_exe()
            .unwrap_or_else(|_| std::path::PathBuf::from("schematic_wire_editor"))
            .parent()
            .unwrap_or_else(|| std::path::Path::new("."))
            .join("schematic_wire_editor.toml")
    }

    /// Router-Parameter aus den aktuellen Optionen.
    pub fn router_config(&self) -> RouterConfig {
        RouterConfig {
            grid_size: self.grid_size,
            exit_offset_cells: self.exit_offset_cells,
            obstacle_margin: self.obstacle_margin,
            level_search_steps: self.level_search_steps,
            ..RouterConfig::default()
        }
    }
}
