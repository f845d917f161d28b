//! Geometrische Grundtypen: Pin-Richtungen, Rotation und Orthogonal-Snapping.
//!
//! Alle Welt-Koordinaten sind Pixel mit Y nach unten (Screen-Konvention),
//! d.h. `Direction::Up` verringert Y.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Natürliche Austrittsrichtung eines Pins
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// Austritt nach links (−x)
    Left,
    /// Austritt nach rechts (+x)
    Right,
    /// Austritt nach oben (−y)
    Up,
    /// Austritt nach unten (+y)
    Down,
}

impl Direction {
    /// Einheitsvektor in Welt-Koordinaten.
    pub fn unit(self) -> Vec2 {
        match self {
            Direction::Left => Vec2::new(-1.0, 0.0),
            Direction::Right => Vec2::new(1.0, 0.0),
            Direction::Up => Vec2::new(0.0, -1.0),
            Direction::Down => Vec2::new(0.0, 1.0),
        }
    }

    /// Eine Vierteldrehung im Uhrzeigersinn (auf dem Bildschirm).
    pub fn rotated_cw(self) -> Self {
        match self {
            Direction::Right => Direction::Down,
            Direction::Down => Direction::Left,
            Direction::Left => Direction::Up,
            Direction::Up => Direction::Right,
        }
    }

    /// Spiegelung an der vertikalen Achse (links ⇔ rechts).
    pub fn flipped_x(self) -> Self {
        match self {
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
            other => other,
        }
    }

    /// Spiegelung an der horizontalen Achse (oben ⇔ unten).
    pub fn flipped_y(self) -> Self {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            other => other,
        }
    }

    /// Wendet eine Rotation an.
    pub fn rotated(self, rotation: Rotation) -> Self {
        (0..rotation.quarter_turns()).fold(self, |dir, _| dir.rotated_cw())
    }
}

/// Rotation einer Bauteil-Instanz in 90°-Schritten (im Uhrzeigersinn)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "u16", into = "u16")]
pub enum Rotation {
    /// Keine Rotation
    #[default]
    Deg0,
    /// 90°
    Deg90,
    /// 180°
    Deg180,
    /// 270°
    Deg270,
}

impl Rotation {
    /// Anzahl Vierteldrehungen (0..=3).
    pub fn quarter_turns(self) -> u8 {
        match self {
            Rotation::Deg0 => 0,
            Rotation::Deg90 => 1,
            Rotation::Deg180 => 2,
            Rotation::Deg270 => 3,
        }
    }

    /// Winkel in Grad.
    pub fn degrees(self) -> u16 {
        u16::from(self.quarter_turns()) * 90
    }

    /// Nächste Stufe (+90°, modulo 360°).
    pub fn rotated_cw(self) -> Self {
        match self {
            Rotation::Deg0 => Rotation::Deg90,
            Rotation::Deg90 => Rotation::Deg180,
            Rotation::Deg180 => Rotation::Deg270,
            Rotation::Deg270 => Rotation::Deg0,
        }
    }

    /// Vertauscht diese Rotation Breite und Höhe?
    pub fn swaps_axes(self) -> bool {
        matches!(self, Rotation::Deg90 | Rotation::Deg270)
    }
}

impl TryFrom<u16> for Rotation {
    type Error = String;

    fn try_from(degrees: u16) -> Result<Self, Self::Error> {
        match degrees % 360 {
            0 => Ok(Rotation::Deg0),
            90 => Ok(Rotation::Deg90),
            180 => Ok(Rotation::Deg180),
            270 => Ok(Rotation::Deg270),
            other => Err(format!("Ungültige Rotation: {other}° (erlaubt: 0/90/180/270)")),
        }
    }
}

impl From<Rotation> for u16 {
    fn from(rotation: Rotation) -> Self {
        rotation.degrees()
    }
}

/// Dreht `point` im Uhrzeigersinn um `center`.
pub fn rotate_about(point: Vec2, center: Vec2, rotation: Rotation) -> Vec2 {
    let mut d = point - center;
    for _ in 0..rotation.quarter_turns() {
        d = Vec2::new(-d.y, d.x);
    }
    center + d
}

/// Rastet `raw` rein horizontal oder rein vertikal relativ zu `previous` ein.
///
/// Die Achse mit dem größeren Delta gewinnt; bei Gleichstand (strikter
/// `dx > dy`-Vergleich) wird vertikal eingerastet.
pub fn snap_orthogonal(previous: Vec2, raw: Vec2) -> Vec2 {
    let dx = (raw.x - previous.x).abs();
    let dy = (raw.y - previous.y).abs();
    if dx > dy {
        Vec2::new(raw.x, previous.y)
    } else {
        Vec2::new(previous.x, raw.y)
    }
}

/// Kürzester Abstand von `point` zum Segment `a`–`b`.
pub fn distance_to_segment(point: Vec2, a: Vec2, b: Vec2) -> f32 {
    let ab = b - a;
    let len_sq = ab.length_squared();
    if len_sq <= f32::EPSILON {
        return point.distance(a);
    }
    let t = ((point - a).dot(ab) / len_sq).clamp(0.0, 1.0);
    point.distance(a + ab * t)
}

/// Anzahl der Richtungswechsel eines Polylinienzugs (kollineare Punkte zählen nicht).
pub fn count_bends(points: &[Vec2]) -> usize {
    let dirs: Vec<Vec2> = points
        .windows(2)
        .map(|w| w[1] - w[0])
        .filter(|d| d.length_squared() > f32::EPSILON)
        .map(|d| d.normalize())
        .collect();
    dirs.windows(2)
        .filter(|w| w[0].distance(w[1]) > 1e-4)
        .count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn snap_prefers_horizontal_when_dx_larger() {
        let snapped = snap_orthogonal(Vec2::new(0.0, 0.0), Vec2::new(160.0, 80.0));
        assert_eq!(snapped, Vec2::new(160.0, 0.0));
    }

    #[test]
    fn snap_prefers_vertical_when_dy_larger() {
        let snapped = snap_orthogonal(Vec2::new(0.0, 0.0), Vec2::new(80.0, 240.0));
        assert_eq!(snapped, Vec2::new(0.0, 240.0));
    }

    #[test]
    fn snap_tie_goes_vertical() {
        let snapped = snap_orthogonal(Vec2::new(10.0, 10.0), Vec2::new(90.0, 90.0));
        assert_eq!(snapped, Vec2::new(10.0, 90.0));
    }

    #[test]
    fn direction_rotation_cycles() {
        assert_eq!(Direction::Right.rotated(Rotation::Deg90), Direction::Down);
        assert_eq!(Direction::Right.rotated(Rotation::Deg180), Direction::Left);
        assert_eq!(Direction::Up.rotated(Rotation::Deg270), Direction::Left);
        assert_eq!(Direction::Left.flipped_x(), Direction::Right);
        assert_eq!(Direction::Up.flipped_x(), Direction::Up);
    }

    #[test]
    fn rotate_about_center_quarter_turn() {
        let p = rotate_about(Vec2::new(2.0, 0.0), Vec2::ZERO, Rotation::Deg90);
        assert_eq!(p, Vec2::new(0.0, 2.0));
    }

    #[test]
    fn rotation_serde_uses_degrees() {
        let json = serde_json::to_string(&Rotation::Deg270).expect("serialisierbar");
        assert_eq!(json, "270");
        let parsed: Rotation = serde_json::from_str("90").expect("parsebar");
        assert_eq!(parsed, Rotation::Deg90);
        assert!(serde_json::from_str::<Rotation>("45").is_err());
    }

    #[test]
    fn segment_distance_clamps_to_ends() {
        let a = Vec2::new(0.0, 0.0);
        let b = Vec2::new(100.0, 0.0);
        assert_eq!(distance_to_segment(Vec2::new(50.0, 4.0), a, b), 4.0);
        assert_eq!(distance_to_segment(Vec2::new(-3.0, 4.0), a, b), 5.0);
        assert_eq!(distance_to_segment(Vec2::new(7.0, 0.0), a, a), 7.0);
    }

    #[test]
    fn bends_ignore_collinear_points() {
        let path = [
            Vec2::new(0.0, 40.0),
            Vec2::new(160.0, 40.0),
            Vec2::new(240.0, 40.0),
        ];
        assert_eq!(count_bends(&path), 0);

        let elbow = [
            Vec2::new(0.0, 0.0),
            Vec2::new(80.0, 0.0),
            Vec2::new(80.0, 80.0),
        ];
        assert_eq!(count_bends(&elbow), 1);
    }
}
