//! Editor-State: zentrale Datenhaltung des Schaltplans.

mod selection;

pub use selection::SelectionState;

use super::history::{EditHistory, Snapshot};
use super::session::RoutingSession;
use super::use_cases;
use super::CommandLog;
use crate::core::{
    collect_obstacles, ComponentLibrary, GridView, InstanceStore, ManhattanRouter, Obstacle,
    WireStore,
};
use crate::shared::EditorOptions;
use glam::Vec2;
use std::sync::Arc;

/// View-bezogener Zustand
#[derive(Debug, Clone, Default)]
pub struct ViewState {
    /// Pan/Zoom/Grid der Canvas
    pub grid: GridView,
    /// Aktuelle Viewport-Größe in Pixel
    pub viewport_size: [f32; 2],
}

impl ViewState {
    /// Erstellt den View-Zustand passend zu den Optionen.
    pub fn from_options(options: &EditorOptions) -> Self {
        let mut grid = GridView::new(options.grid_size);
        grid.set_zoom_limits(options.zoom_min, options.zoom_max);
        Self {
            grid,
            viewport_size: [0.0, 0.0],
        }
    }
}

/// UI-bezogener Zustand
#[derive(Debug, Clone, Default)]
pub struct UiState {
    /// Temporäre Statusnachricht (Hinweise, Warnungen)
    pub status_message: Option<String>,
    /// Pfad der aktuell geladenen Datei (für Save ohne Pfad)
    pub current_file_path: Option<String>,
    /// Name des Schaltplans
    pub schematic_name: String,
}

impl UiState {
    /// Erstellt den Standard-UI-Zustand.
    pub fn new() -> Self {
        Self {
            status_message: None,
            current_file_path: None,
            schematic_name: "Untitled".to_string(),
        }
    }
}

/// Hauptzustand des Schaltplan-Editors
pub struct SchematicEditor {
    /// Bauteil-Bibliothek (geteilt, read-only)
    pub library: Arc<ComponentLibrary>,
    /// Platzierte Bauteile (Arc für O(1)-Undo-Snapshots)
    pub instances: Arc<InstanceStore>,
    /// Wires und Junction-Marker (Arc für O(1)-Undo-Snapshots)
    pub wires: Arc<WireStore>,
    /// Laufende Routing-Session
    pub session: RoutingSession,
    /// Selection-State
    pub selection: SelectionState,
    /// View-State
    pub view: ViewState,
    /// UI-State
    pub ui: UiState,
    /// Laufzeit-Optionen
    pub options: EditorOptions,
    /// Undo/Redo-History (Snapshot-basiert)
    pub history: EditHistory,
    /// Verlauf ausgeführter Commands
    pub command_log: CommandLog,
}

impl SchematicEditor {
    /// Leerer Editor mit eingebauter Bibliothek und Standard-Optionen.
    pub fn new() -> Self {
        Self::with_options(ComponentLibrary::builtin(), EditorOptions::default())
    }

    /// Leerer Editor mit eigener Bibliothek und Optionen.
    pub fn with_options(library: ComponentLibrary, options: EditorOptions) -> Self {
        let options = options.sanitized();
        Self {
            library: Arc::new(library),
            instances: Arc::new(InstanceStore::new()),
            wires: Arc::new(WireStore::new()),
            session: RoutingSession::new(options.orthogonal_by_default),
            selection: SelectionState::new(),
            view: ViewState::from_options(&options),
            ui: UiState::new(),
            history: EditHistory::new_with_capacity(options.undo_depth),
            command_log: CommandLog::new(),
            options,
        }
    }

    /// Router mit den aktuellen Optionen.
    pub fn router(&self) -> ManhattanRouter {
        ManhattanRouter::new(self.options.router_config())
    }

    /// Frisch abgeleitete Hindernisse aller Bauteile.
    pub fn obstacles(&self) -> Vec<Obstacle> {
        collect_obstacles(&self.instances, self.options.grid_size)
    }

    /// Anzahl der Bauteile (für UI-Anzeige)
    pub fn instance_count(&self) -> usize {
        self.instances.len()
    }

    /// Anzahl der Wires (für UI-Anzeige)
    pub fn wire_count(&self) -> usize {
        self.wires.len()
    }

    /// Gibt zurück, ob ein Undo-Schritt verfügbar ist.
    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    /// Gibt zurück, ob ein Redo-Schritt verfügbar ist.
    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    /// Erstellt einen Undo-Snapshot des aktuellen Zustands.
    pub fn record_undo_snapshot(&mut self) {
        let snap = Snapshot::from_state(self);
        self.history.record_snapshot(snap);
    }

    // ── Wire-Befehle (UI-Schnittstelle) ─────────────────────────────

    /// Beginnt einen Wire am Pin. `false`, wenn Instanz oder Pin fehlen.
    pub fn start_wire(&mut self, instance_id: u64, endpoint_id: &str) -> bool {
        use_cases::wiring::start_wire(self, instance_id, endpoint_id)
    }

    /// Fügt einen Wegpunkt an der (ungesnappten) Welt-Position hinzu.
    pub fn add_waypoint(&mut self, world_pos: Vec2) -> Option<Vec2> {
        use_cases::wiring::add_waypoint(self, world_pos)
    }

    /// Aktualisiert die Cursor-Vorschau.
    pub fn update_cursor(&mut self, world_pos: Vec2) {
        use_cases::wiring::update_cursor(self, world_pos);
    }

    /// Schließt den Wire am Ziel-Pin ab und gibt die neue Wire-ID zurück.
    pub fn complete_wire(&mut self, instance_id: u64, endpoint_id: &str) -> Option<u64> {
        use_cases::wiring::complete_wire(self, instance_id, endpoint_id)
    }

    /// Schließt den Wire als Junction auf einem bestehenden Wire ab.
    pub fn connect_to_wire(&mut self, target_wire: u64, world_pos: Vec2) -> Option<u64> {
        use_cases::wiring::connect_to_wire(self, target_wire, world_pos)
    }

    /// Bricht den laufenden Wire ab.
    pub fn cancel_wire(&mut self) {
        use_cases::wiring::cancel_wire(self);
    }

    /// Selektiert einen Wire (Bauteil-Selektion wird aufgehoben).
    pub fn select_wire(&mut self, wire_id: u64, additive: bool) {
        use_cases::selection::select_wire(self, wire_id, additive);
    }

    /// Löscht alle selektierten Wires; gibt die Anzahl entfernter Wires zurück.
    pub fn delete_selected_wires(&mut self) -> usize {
        use_cases::editing::delete_selected_wires(self)
    }

    /// Vorschau-Pfad der laufenden Session.
    pub fn preview_path(&self) -> Vec<Vec2> {
        self.session.preview_path()
    }
}

impl Default for SchematicEditor {
    fn default() -> Self {
        Self::new()
    }
}
