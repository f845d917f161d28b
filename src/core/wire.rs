//! Wire-Datenmodell: Endpunkt-Bindungen, Junctions und Gesundheitsstatus.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Bindung an einen Pin einer Bauteil-Instanz
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EndpointRef {
    /// Instanz-ID
    pub instance_id: u64,
    /// Pin-ID innerhalb der Definition
    pub endpoint_id: String,
}

impl EndpointRef {
    /// Erstellt eine neue Pin-Bindung.
    pub fn new(instance_id: u64, endpoint_id: impl Into<String>) -> Self {
        Self {
            instance_id,
            endpoint_id: endpoint_id.into(),
        }
    }
}

/// Ende eines Wires: Pin oder Junction auf einem anderen Wire
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum WireEnd {
    /// Endet an einem Bauteil-Pin
    Endpoint(EndpointRef),
    /// Endet auf einem bestehenden Wire
    Junction {
        /// Ziel-Wire
        target_wire: u64,
        /// Junction-Punkt (Welt-Koordinaten, auf dem Grid)
        point: Vec2,
    },
}

impl WireEnd {
    /// Pin-Bindung, falls das Ende an einem Bauteil liegt.
    pub fn endpoint(&self) -> Option<&EndpointRef> {
        match self {
            WireEnd::Endpoint(ep) => Some(ep),
            WireEnd::Junction { .. } => None,
        }
    }

    /// Ziel-Wire, falls das Ende eine Junction ist.
    pub fn junction_target(&self) -> Option<u64> {
        match self {
            WireEnd::Junction { target_wire, .. } => Some(*target_wire),
            WireEnd::Endpoint(_) => None,
        }
    }
}

/// Herkunft der Wegpunkte
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WireRouting {
    /// Vom Manhattan-Router berechnet
    #[default]
    Auto,
    /// Vom Benutzer gezeichnet (Wegpunkte per Klick)
    Manual,
}

/// Ein gezeichneter Wire
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Wire {
    /// Eindeutige, monoton steigende ID
    pub id: u64,
    /// Start-Pin
    pub start: EndpointRef,
    /// Ende (Pin oder Junction)
    pub end: WireEnd,
    /// Wegpunkte in Welt-Koordinaten, mindestens zwei
    pub waypoints: Vec<Vec2>,
    /// Im 90°-Modus gezeichnet
    pub orthogonal: bool,
    /// Auto-geroutet oder manuell
    #[serde(default)]
    pub routing: WireRouting,
}

impl Wire {
    /// Erster Wegpunkt.
    pub fn first_point(&self) -> Option<Vec2> {
        self.waypoints.first().copied()
    }

    /// Letzter Wegpunkt.
    pub fn last_point(&self) -> Option<Vec2> {
        self.waypoints.last().copied()
    }

    /// Hängt der Wire (Start oder Ende) an dieser Instanz?
    pub fn touches_instance(&self, instance_id: u64) -> bool {
        self.start.instance_id == instance_id
            || self
                .end
                .endpoint()
                .is_some_and(|ep| ep.instance_id == instance_id)
    }
}

/// Sichtbarer Junction-Punkt, markiert mit dem Wire, der ihn erzeugt hat
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct JunctionMarker {
    /// Erzeugender Wire
    pub wire_id: u64,
    /// Position in Welt-Koordinaten
    pub position: Vec2,
}

/// Grund, warum ein Wire auf nicht mehr existierende Objekte zeigt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BrokenReason {
    /// Instanz wurde gelöscht
    MissingInstance(u64),
    /// Instanz existiert, kennt den Pin aber nicht
    MissingEndpoint {
        /// Betroffene Instanz
        instance_id: u64,
        /// Unbekannte Pin-ID
        endpoint_id: String,
    },
    /// Junction-Ziel wurde gelöscht
    MissingTargetWire(u64),
}

impl std::fmt::Display for BrokenReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BrokenReason::MissingInstance(id) => write!(f, "Instanz {id} fehlt"),
            BrokenReason::MissingEndpoint {
                instance_id,
                endpoint_id,
            } => write!(f, "Pin '{endpoint_id}' an Instanz {instance_id} fehlt"),
            BrokenReason::MissingTargetWire(id) => write!(f, "Junction-Ziel Wire {id} fehlt"),
        }
    }
}

/// Ergebnis der (lazy) Referenz-Prüfung eines Wires
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WireHealth {
    /// Alle Referenzen gültig
    Intact,
    /// Mindestens eine Referenz zeigt ins Leere
    Broken(BrokenReason),
}

impl WireHealth {
    /// Gibt `true` zurück, wenn der Wire defekt ist.
    pub fn is_broken(&self) -> bool {
        matches!(self, WireHealth::Broken(_))
    }
}
