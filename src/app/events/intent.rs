use crate::shared::EditorOptions;
use glam::{IVec2, Vec2};

/// App-Intent und App-Command Events.
/// Intents sind Eingaben aus UI/System ohne direkte Mutationslogik.
#[derive(Debug, Clone)]
pub enum AppIntent {
    // ── Datei ───────────────────────────────────────────────────
    /// Datei speichern (unter aktuellem Pfad)
    SaveRequested,
    /// Datei wurde zum Laden ausgewählt
    FileSelected { path: String },
    /// Speicherpfad wurde ausgewählt
    SaveFilePathSelected { path: String },

    // ── Ansicht ─────────────────────────────────────────────────
    /// Zoom und Pan zurücksetzen
    ResetViewRequested,
    /// Stufenweise hineinzoomen
    ZoomInRequested,
    /// Stufenweise herauszoomen
    ZoomOutRequested,
    /// Viewport-Größe hat sich geändert
    ViewportResized { size: [f32; 2] },
    /// Canvas um Delta verschieben (Screen-Pixel)
    CanvasPan { delta: Vec2 },
    /// Canvas zoomen (optional auf einen Fokuspunkt in Screen-Koordinaten)
    CanvasZoom {
        factor: f32,
        focus_screen: Option<Vec2>,
    },
    /// Raster-Anzeige umschalten
    ToggleGridRequested,

    // ── Wires ───────────────────────────────────────────────────
    /// Klick auf einen Bauteil-Pin
    EndpointClicked {
        instance_id: u64,
        endpoint_id: String,
    },
    /// Klick auf einen bestehenden Wire (Frontend hat den Treffer ermittelt)
    WireClicked {
        wire_id: u64,
        world_pos: Vec2,
        additive: bool,
    },
    /// Klick an Welt-Position; Wire-Treffer wird per Hit-Test ermittelt
    WirePickRequested { world_pos: Vec2, additive: bool },
    /// Klick auf leere Canvas
    CanvasClicked { world_pos: Vec2 },
    /// Mausbewegung (Welt-Koordinaten)
    PointerMoved { world_pos: Vec2 },
    /// Modifier für 90°-Modus geändert
    OrthogonalModeChanged { orthogonal: bool },
    /// Escape gedrückt
    EscapePressed,
    /// Alle Wires neu routen
    RerouteAllRequested,

    // ── Bauteile ────────────────────────────────────────────────
    /// Bauteil aus der Bibliothek auf die Canvas gezogen
    ComponentDropped {
        component_id: String,
        grid_pos: IVec2,
    },
    /// Klick auf einen Bauteil-Körper: selektiert, oder schließt einen
    /// laufenden Wire am vorgeschlagenen Pin ab
    ComponentPickRequested { world_pos: Vec2, additive: bool },
    /// Bauteile im Rechteck selektieren
    SelectComponentsInRectRequested {
        corner_a: Vec2,
        corner_b: Vec2,
        additive: bool,
    },
    /// Bauteil an neue Grid-Position gezogen
    ComponentMoved { instance_id: u64, grid_pos: IVec2 },
    /// Selektierte Bauteile um Grid-Zellen verschieben (Pfeiltasten)
    MoveSelectedRequested { delta: IVec2 },
    /// Selektierte Bauteile drehen
    RotateSelectedRequested,
    /// Selektierte Bauteile spiegeln
    FlipSelectedRequested,
    /// Selektierte Bauteile duplizieren
    DuplicateSelectedRequested,
    /// Beschriftung des selektierten Bauteils geändert
    LabelChanged { label: String },
    /// Selektion löschen (Wires oder Bauteile)
    DeleteSelectedRequested,
    /// Schaltplan leeren
    ClearSchematicRequested,

    // ── History / Optionen ──────────────────────────────────────
    /// Undo
    UndoRequested,
    /// Redo
    RedoRequested,
    /// Optionen übernehmen
    OptionsChanged { options: EditorOptions },
}
