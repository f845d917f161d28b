//! Hindernis-Modell: achsenparallele Bounding-Boxes aller platzierten Bauteile.
//!
//! Hindernisse werden nie gespeichert, sondern vor jedem Routing frisch aus
//! dem `InstanceStore` abgeleitet.

use super::InstanceStore;
use glam::Vec2;

/// Achsenparallele Box eines Bauteils in Welt-Koordinaten
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Obstacle {
    /// Linke obere Ecke
    pub origin: Vec2,
    /// Breite/Höhe in Pixeln
    pub size: Vec2,
    /// Instanz, aus der die Box stammt (0 = frei konstruiert)
    pub instance_id: u64,
}

impl Obstacle {
    /// Erstellt eine Box ohne Instanz-Bezug.
    pub fn new(origin: Vec2, size: Vec2) -> Self {
        Self {
            origin,
            size,
            instance_id: 0,
        }
    }

    /// Rechte untere Ecke.
    pub fn max(&self) -> Vec2 {
        self.origin + self.size
    }

    /// Um `margin` in alle Richtungen vergrößerte Box.
    pub fn expanded(&self, margin: f32) -> Self {
        Self {
            origin: self.origin - Vec2::splat(margin),
            size: self.size + Vec2::splat(2.0 * margin),
            instance_id: self.instance_id,
        }
    }

    /// Liegt `y` innerhalb der vertikalen Ausdehnung (Ränder inklusive)?
    pub fn covers_y(&self, y: f32) -> bool {
        y >= self.origin.y && y <= self.max().y
    }

    /// Überlappt die Box das Rechteck `min`..`max`?
    pub fn overlaps_rect(&self, min: Vec2, max: Vec2) -> bool {
        let own_max = self.max();
        self.origin.x <= max.x && own_max.x >= min.x && self.origin.y <= max.y && own_max.y >= min.y
    }

    /// Schneidet das Segment `a`–`b` die um `margin` erweiterte Box?
    ///
    /// Nur rein horizontale oder vertikale Segmente (Abweichung ≤ `tolerance`)
    /// werden geprüft; schräge Segmente gelten nie als blockiert.
    pub fn blocks_segment(&self, a: Vec2, b: Vec2, margin: f32, tolerance: f32) -> bool {
        let bx = self.expanded(margin);
        let min = bx.origin;
        let max = bx.max();

        if (a.y - b.y).abs() <= tolerance {
            let (x0, x1) = (a.x.min(b.x), a.x.max(b.x));
            return a.y >= min.y && a.y <= max.y && x1 >= min.x && x0 <= max.x;
        }
        if (a.x - b.x).abs() <= tolerance {
            let (y0, y1) = (a.y.min(b.y), a.y.max(b.y));
            return a.x >= min.x && a.x <= max.x && y1 >= min.y && y0 <= max.y;
        }
        false
    }
}

/// Leitet für alle Instanzen die aktuellen Hindernis-Boxen ab.
pub fn collect_obstacles(instances: &InstanceStore, grid_size: f32) -> Vec<Obstacle> {
    instances
        .iter()
        .map(|instance| instance.bounds(grid_size))
        .collect()
}
