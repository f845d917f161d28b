//! Render-Szene als expliziter Übergabevertrag zwischen App und Frontend.
//!
//! Alle Einträge sind über Entity-IDs adressiert; das Frontend hält seine
//! eigenen Handles (Grafikobjekte) in einem Index nach ID.

use crate::core::{GridView, JunctionMarker, Rotation};
use glam::Vec2;

/// Gezeichneter Bauteil-Körper
#[derive(Debug, Clone, PartialEq)]
pub struct ComponentBox {
    /// Instanz-ID
    pub instance_id: u64,
    /// Bibliotheks-ID der Definition
    pub component_id: String,
    /// Beschriftung
    pub label: String,
    /// Linke obere Ecke der (rotierten) Bounding-Box
    pub origin: Vec2,
    /// Größe der (rotierten) Bounding-Box
    pub size: Vec2,
    /// Rotation für das Symbol
    pub rotation: Rotation,
    /// Horizontal gespiegelt
    pub flip_x: bool,
    /// Vertikal gespiegelt
    pub flip_y: bool,
    /// Selektiert
    pub selected: bool,
    /// Pins mit Welt-Position
    pub pins: Vec<(String, Vec2)>,
}

/// Gezeichneter Wire
#[derive(Debug, Clone, PartialEq)]
pub struct WirePath {
    /// Wire-ID
    pub wire_id: u64,
    /// Polylinie in Welt-Koordinaten
    pub points: Vec<Vec2>,
    /// Selektiert
    pub selected: bool,
    /// Verweist auf gelöschte Instanzen/Pins/Wires
    pub broken: bool,
}

/// Read-only Daten für einen Render-Frame.
#[derive(Debug, Clone)]
pub struct RenderScene {
    /// Pan/Zoom/Raster für diesen Frame
    pub grid: GridView,
    /// Abstand der sichtbaren Raster-Punkte (Welt-Einheiten)
    pub grid_spacing: f32,
    /// Viewport-Größe in Pixeln [Breite, Höhe]
    pub viewport_size: [f32; 2],
    /// Bauteile in Platzierungsreihenfolge
    pub components: Vec<ComponentBox>,
    /// Wires in Erstellungsreihenfolge
    pub wires: Vec<WirePath>,
    /// Junction-Punkte
    pub junctions: Vec<JunctionMarker>,
    /// Vorschau des laufenden Wires (leer im Idle-Zustand)
    pub preview_path: Vec<Vec2>,
    /// Bereits gesetzte Wegpunkte des laufenden Wires
    pub waypoint_markers: Vec<Vec2>,
    /// Hervorgehobener Start-Pin
    pub highlighted_endpoint: Option<Vec2>,
    /// Statuszeile
    pub status_message: Option<String>,
}

impl RenderScene {
    /// Gibt zurück, ob es etwas zu zeichnen gibt.
    pub fn has_content(&self) -> bool {
        !self.components.is_empty() || !self.wires.is_empty()
    }

    /// Wire-Eintrag per ID.
    pub fn wire(&self, wire_id: u64) -> Option<&WirePath> {
        self.wires.iter().find(|w| w.wire_id == wire_id)
    }
}
