//! Interaktive Routing-Session: Idle → Drawing → Idle.
//!
//! Reine Zustandsmaschine ohne Store-Zugriff. Positionen kommen bereits
//! grid-gesnappt vom Aufrufer; das 90°-Snapping passiert hier.

use crate::core::{
    snap_orthogonal, Direction, EndpointRef, ManhattanRouter, Obstacle, ResolvedEndpoint,
    WireRouting,
};
use glam::Vec2;

/// Zustand eines laufenden Wire-Zeichenvorgangs
#[derive(Debug, Clone, PartialEq)]
pub struct DrawingState {
    /// Start-Pin (hervorgehoben)
    pub start: EndpointRef,
    /// Effektive Austrittsrichtung des Start-Pins
    pub start_direction: Option<Direction>,
    /// Wegpunkte, beginnend mit der Start-Position
    pub waypoints: Vec<Vec2>,
    /// Letzte (gesnappte) Cursor-Position für die Vorschau
    pub cursor: Option<Vec2>,
}

/// Phase der Routing-Session
#[derive(Debug, Clone, PartialEq, Default)]
pub enum SessionPhase {
    /// Kein Wire in Arbeit
    #[default]
    Idle,
    /// Wire wird gezeichnet
    Drawing(DrawingState),
}

/// Fertiger Pfad, bereit zum Speichern im `WireStore`
#[derive(Debug, Clone, PartialEq)]
pub struct CompletedPath {
    /// Start-Pin
    pub start: EndpointRef,
    /// Vollständige Wegpunkte (erster = Start, letzter = Ziel)
    pub waypoints: Vec<Vec2>,
    /// 90°-Modus beim Abschluss
    pub orthogonal: bool,
    /// Herkunft der Wegpunkte
    pub routing: WireRouting,
}

/// Session-Zustand inkl. Modus-Flag (bleibt über Wires hinweg erhalten)
#[derive(Debug, Clone)]
pub struct RoutingSession {
    phase: SessionPhase,
    orthogonal: bool,
}

impl Default for RoutingSession {
    fn default() -> Self {
        Self::new(true)
    }
}

impl RoutingSession {
    /// Erstellt eine Session im Idle-Zustand.
    pub fn new(orthogonal: bool) -> Self {
        Self {
            phase: SessionPhase::Idle,
            orthogonal,
        }
    }

    /// Aktuelle Phase.
    pub fn phase(&self) -> &SessionPhase {
        &self.phase
    }

    /// Wird gerade gezeichnet?
    pub fn is_drawing(&self) -> bool {
        matches!(self.phase, SessionPhase::Drawing(_))
    }

    /// 90°-Modus aktiv?
    pub fn orthogonal(&self) -> bool {
        self.orthogonal
    }

    /// Schaltet den 90°-Modus (Modifier-Taste).
    pub fn set_orthogonal(&mut self, orthogonal: bool) {
        self.orthogonal = orthogonal;
    }

    /// Hervorgehobener Start-Pin.
    pub fn highlighted_endpoint(&self) -> Option<&EndpointRef> {
        match &self.phase {
            SessionPhase::Drawing(drawing) => Some(&drawing.start),
            SessionPhase::Idle => None,
        }
    }

    /// Bisherige Wegpunkte (leer im Idle-Zustand).
    pub fn waypoints(&self) -> &[Vec2] {
        match &self.phase {
            SessionPhase::Drawing(drawing) => &drawing.waypoints,
            SessionPhase::Idle => &[],
        }
    }

    /// Startet einen neuen Wire am Pin. Ein laufender Vorgang wird verworfen.
    pub fn begin(&mut self, start: EndpointRef, resolved: ResolvedEndpoint) {
        self.phase = SessionPhase::Drawing(DrawingState {
            start,
            start_direction: resolved.direction,
            waypoints: vec![resolved.position],
            cursor: None,
        });
    }

    /// Hängt einen Wegpunkt an; im 90°-Modus relativ zum Vorgänger eingerastet.
    pub fn push_waypoint(&mut self, snapped: Vec2) -> Option<Vec2> {
        let orthogonal = self.orthogonal;
        let SessionPhase::Drawing(drawing) = &mut self.phase else {
            return None;
        };
        let point = match drawing.waypoints.last() {
            Some(&prev) if orthogonal => snap_orthogonal(prev, snapped),
            _ => snapped,
        };
        drawing.waypoints.push(point);
        Some(point)
    }

    /// Merkt die Cursor-Position für die Vorschau.
    pub fn set_cursor(&mut self, snapped: Vec2) {
        if let SessionPhase::Drawing(drawing) = &mut self.phase {
            drawing.cursor = Some(snapped);
        }
    }

    /// Vorschau: Wegpunkte plus projiziertes Segment zum Cursor.
    pub fn preview_path(&self) -> Vec<Vec2> {
        let SessionPhase::Drawing(drawing) = &self.phase else {
            return Vec::new();
        };
        let mut path = drawing.waypoints.clone();
        if let (Some(cursor), Some(&prev)) = (drawing.cursor, drawing.waypoints.last()) {
            let projected = if self.orthogonal {
                snap_orthogonal(prev, cursor)
            } else {
                cursor
            };
            path.push(projected);
        }
        path
    }

    /// Schließt am Ziel-Pin ab.
    ///
    /// Nur Start-Wegpunkt vorhanden: im 90°-Modus berechnet der Router den
    /// Pfad, im freien Modus entsteht eine direkte Strecke. Sonst wird die
    /// Ziel-Position angehängt. Klick auf den Start-Pin selbst wird ignoriert
    /// (`None`, Session bleibt aktiv).
    pub fn finish_at_endpoint(
        &mut self,
        end: &EndpointRef,
        end_resolved: ResolvedEndpoint,
        router: &ManhattanRouter,
        obstacles: &[Obstacle],
    ) -> Option<CompletedPath> {
        match &self.phase {
            SessionPhase::Drawing(drawing) if drawing.start != *end => {}
            _ => return None,
        }
        let SessionPhase::Drawing(drawing) = std::mem::take(&mut self.phase) else {
            return None;
        };

        let seed_only = match drawing.waypoints.as_slice() {
            [seed] => Some(*seed),
            _ => None,
        };
        let (waypoints, routing) = match seed_only {
            Some(seed) if self.orthogonal => (
                router.route(
                    seed,
                    end_resolved.position,
                    drawing.start_direction,
                    end_resolved.direction,
                    obstacles,
                ),
                WireRouting::Auto,
            ),
            Some(seed) => (vec![seed, end_resolved.position], WireRouting::Manual),
            None => {
                let mut points = drawing.waypoints;
                points.push(end_resolved.position);
                (points, WireRouting::Manual)
            }
        };

        Some(CompletedPath {
            start: drawing.start,
            waypoints,
            orthogonal: self.orthogonal,
            routing,
        })
    }

    /// Schließt an einem Junction-Punkt auf einem bestehenden Wire ab.
    pub fn finish_at_junction(&mut self, point: Vec2) -> Option<CompletedPath> {
        let SessionPhase::Drawing(mut drawing) = std::mem::take(&mut self.phase) else {
            return None;
        };
        drawing.waypoints.push(point);
        Some(CompletedPath {
            start: drawing.start,
            waypoints: drawing.waypoints,
            orthogonal: self.orthogonal,
            routing: WireRouting::Manual,
        })
    }

    /// Bricht ab (Escape). Gibt `true` zurück, wenn ein Vorgang lief.
    pub fn cancel(&mut self) -> bool {
        let was_drawing = self.is_drawing();
        self.phase = SessionPhase::Idle;
        was_drawing
    }
}
