use crate::shared::EditorOptions;
use glam::{IVec2, Vec2};

/// Mutierende Commands, die zentral vom Controller ausgeführt werden.
#[derive(Debug, Clone)]
pub enum AppCommand {
    // ── Datei ───────────────────────────────────────────────────
    /// Datei laden
    LoadFile { path: String },
    /// Datei speichern (None = aktueller Pfad)
    SaveFile { path: Option<String> },

    // ── Ansicht ─────────────────────────────────────────────────
    /// Zoom und Pan zurücksetzen
    ResetView,
    /// Stufenweise hineinzoomen
    ZoomIn,
    /// Stufenweise herauszoomen
    ZoomOut,
    /// Viewport-Größe setzen
    SetViewportSize { size: [f32; 2] },
    /// Ansicht verschieben
    PanView { delta: Vec2 },
    /// Zoom mit optionalem Fokus (Screen-Koordinaten)
    ZoomView {
        factor: f32,
        focus_screen: Option<Vec2>,
    },
    /// Raster-Anzeige umschalten
    ToggleGrid,

    // ── Wires ───────────────────────────────────────────────────
    /// Routing-Session am Pin starten
    StartWire {
        instance_id: u64,
        endpoint_id: String,
    },
    /// Wegpunkt hinzufügen
    AddWaypoint { world_pos: Vec2 },
    /// Vorschau zum Cursor aktualisieren
    UpdateWirePreview { world_pos: Vec2 },
    /// Wire am Ziel-Pin abschließen
    CompleteWire {
        instance_id: u64,
        endpoint_id: String,
    },
    /// Wire als Junction auf bestehendem Wire abschließen
    ConnectToWire { target_wire: u64, world_pos: Vec2 },
    /// Laufenden Wire abbrechen
    CancelWire,
    /// 90°-Modus setzen
    SetOrthogonal { orthogonal: bool },
    /// Alle intakten Wires neu routen
    RerouteAll,

    // ── Selektion ───────────────────────────────────────────────
    /// Wire selektieren
    SelectWire { wire_id: u64, additive: bool },
    /// Nächsten Wire im Pick-Radius selektieren
    PickWireAt { world_pos: Vec2, additive: bool },
    /// Oberstes Bauteil unter dem Punkt selektieren
    PickComponentAt { world_pos: Vec2, additive: bool },
    /// Bauteile im Rechteck selektieren
    SelectComponentsInRect {
        corner_a: Vec2,
        corner_b: Vec2,
        additive: bool,
    },
    /// Selektion aufheben
    ClearSelection,

    // ── Editing ─────────────────────────────────────────────────
    /// Bauteil platzieren
    PlaceComponent {
        component_id: String,
        grid_pos: IVec2,
    },
    /// Bauteil verschieben
    MoveComponent { instance_id: u64, grid_pos: IVec2 },
    /// Selektierte Bauteile verschieben
    MoveSelected { delta: IVec2 },
    /// Selektierte Bauteile drehen
    RotateSelected,
    /// Selektierte Bauteile spiegeln
    FlipSelected,
    /// Selektierte Bauteile duplizieren
    DuplicateSelected,
    /// Beschriftung setzen
    SetLabel { label: String },
    /// Selektierte Wires löschen
    DeleteSelectedWires,
    /// Selektierte Bauteile löschen
    DeleteSelectedComponents,
    /// Schaltplan leeren
    ClearSchematic,

    // ── History / Optionen ──────────────────────────────────────
    /// Undo
    Undo,
    /// Redo
    Redo,
    /// Optionen übernehmen
    ApplyOptions { options: EditorOptions },
}
