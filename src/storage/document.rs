//! Serialisierbares Dokumentformat.

use crate::core::{ComponentInstance, InstanceStore, JunctionMarker, Rotation, Wire, WireStore};
use serde::{Deserialize, Serialize};

/// Aktuelle Formatversion
pub const DOCUMENT_VERSION: u32 = 1;

/// Größte zulässige Instanz-/Wire-ID bzw. ID-Zähler im Dokument
pub const MAX_DOCUMENT_ID: u64 = u64::MAX >> 1;

/// Eine platzierte Instanz im Dokument
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InstanceRecord {
    /// Instanz-ID
    pub id: u64,
    /// ID der Bibliotheks-Definition
    pub component_id: String,
    /// Grid-Position X
    pub grid_x: i32,
    /// Grid-Position Y
    pub grid_y: i32,
    /// Rotation in Grad (0/90/180/270)
    #[serde(default)]
    pub rotation: Rotation,
    /// Horizontal gespiegelt
    #[serde(default)]
    pub flip_x: bool,
    /// Vertikal gespiegelt
    #[serde(default)]
    pub flip_y: bool,
    /// Beschriftung
    #[serde(default)]
    pub label: String,
}

impl From<&ComponentInstance> for InstanceRecord {
    fn from(instance: &ComponentInstance) -> Self {
        Self {
            id: instance.id,
            component_id: instance.def.id.clone(),
            grid_x: instance.grid_pos.x,
            grid_y: instance.grid_pos.y,
            rotation: instance.rotation,
            flip_x: instance.flip_x,
            flip_y: instance.flip_y,
            label: instance.label.clone(),
        }
    }
}

/// Vollständiges Schaltplan-Dokument
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SchematicDocument {
    /// Formatversion
    pub version: u32,
    /// Name des Schaltplans
    #[serde(default)]
    pub name: String,
    /// Bauteile in Platzierungsreihenfolge
    #[serde(default)]
    pub instances: Vec<InstanceRecord>,
    /// Wires in Erstellungsreihenfolge
    #[serde(default)]
    pub wires: Vec<Wire>,
    /// Junction-Marker
    #[serde(default)]
    pub junctions: Vec<JunctionMarker>,
    /// Nächste Instanz-ID
    #[serde(default)]
    pub next_instance_id: u64,
    /// Nächste Wire-ID
    #[serde(default)]
    pub next_wire_id: u64,
}

/// Ergebnis des Ladens: fertige Stores
#[derive(Debug, Clone)]
pub struct LoadedSchematic {
    /// Name des Schaltplans
    pub name: String,
    /// Wiederhergestellte Instanzen
    pub instances: InstanceStore,
    /// Wiederhergestellte Wires und Junction-Marker
    pub wires: WireStore,
}
