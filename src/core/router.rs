//! Heuristischer Manhattan-Router (max. zwei Knicke im Mittelteil).
//!
//! Ablauf:
//! 1. Austrittspunkt: Start um `exit_offset_cells` Grid-Zellen in Pin-Richtung versetzt
//! 2. Eintrittspunkt: Ende analog in Richtung des Ziel-Pins versetzt
//! 3. Mittelteil: HV-Ecke, VH-Ecke, freie horizontale Ebene oder HV-Fallback
//! 4. `[start, exit, mittelteil.., entry, end]` ohne doppelte Folgepunkte
//!
//! Routing schlägt nie fehl; Kollisionen sind im Fallback möglich.
//! Gleichgerichtete Pins auf einer Linie laufen über den Eintrittspunkt
//! hinaus und kehren zurück.

use super::{Direction, Obstacle};
use glam::Vec2;

/// Parameter des Routers (aus `EditorOptions` abgeleitet)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RouterConfig {
    /// Rasterweite in Pixeln
    pub grid_size: f32,
    /// Länge des Pin-Stubs in Grid-Zellen
    pub exit_offset_cells: f32,
    /// Sicherheitsabstand um Hindernisse für die Ecken-Prüfung
    pub obstacle_margin: f32,
    /// Maximale Suchweite der Ebenen-Suche in Grid-Zellen
    pub level_search_steps: u32,
    /// Toleranz für "liegt auf einer Achse"
    pub alignment_tolerance: f32,
}

impl RouterConfig {
    /// Standardwerte für eine gegebene Rasterweite.
    pub fn with_grid(grid_size: f32) -> Self {
        Self {
            grid_size,
            ..Self::default()
        }
    }

    fn exit_offset(&self) -> f32 {
        self.exit_offset_cells * self.grid_size
    }
}

impl Default for RouterConfig {
    fn default() -> Self {
        Self {
            grid_size: 80.0,
            exit_offset_cells: 2.0,
            obstacle_margin: 5.0,
            level_search_steps: 10,
            alignment_tolerance: 1.0,
        }
    }
}

/// Manhattan-Router über einer festen Konfiguration
#[derive(Debug, Clone, Copy, Default)]
pub struct ManhattanRouter {
    config: RouterConfig,
}

impl ManhattanRouter {
    /// Erstellt einen Router.
    pub fn new(config: RouterConfig) -> Self {
        Self { config }
    }

    /// Aktive Konfiguration.
    pub fn config(&self) -> &RouterConfig {
        &self.config
    }

    /// Berechnet den vollständigen Pfad von `start` nach `end`.
    pub fn route(
        &self,
        start: Vec2,
        end: Vec2,
        start_dir: Option<Direction>,
        end_dir: Option<Direction>,
        obstacles: &[Obstacle],
    ) -> Vec<Vec2> {
        let offset = self.config.exit_offset();
        let exit = start_dir.map(|d| start + d.unit() * offset);
        let mut entry = end_dir.map(|d| end + d.unit() * offset);

        // Gegenläufige Pins auf einer Linie mit überlappenden Stubs:
        // Eintritt fällt auf den Austritt
        if let (Some(exit_pt), Some(entry_pt), Some(s_dir), Some(e_dir)) =
            (exit, entry, start_dir, end_dir)
        {
            let facing = s_dir.unit().dot(e_dir.unit()) < 0.0;
            if facing
                && self.on_axis_line(start, end, s_dir)
                && (entry_pt - exit_pt).dot(s_dir.unit()) < 0.0
            {
                entry = Some(exit_pt);
            }
        }

        let from = exit.unwrap_or(start);
        let to = entry.unwrap_or(end);

        let mut path = Vec::with_capacity(8);
        path.push(start);
        path.extend(exit);
        path.extend(self.route_middle(from, to, obstacles));
        path.extend(entry);
        path.push(end);
        dedup_consecutive(path)
    }

    /// Ecken zwischen Austritts- und Eintrittspunkt (leer, wenn eine Gerade reicht).
    pub fn route_middle(&self, from: Vec2, to: Vec2, obstacles: &[Obstacle]) -> Vec<Vec2> {
        let tol = self.config.alignment_tolerance;
        let delta = (to - from).abs();
        if delta.x <= tol || delta.y <= tol {
            return Vec::new();
        }

        let hv_corner = Vec2::new(to.x, from.y);
        if !self.leg_blocked(from, hv_corner, to, obstacles) {
            return vec![hv_corner];
        }

        let vh_corner = Vec2::new(from.x, to.y);
        if !self.leg_blocked(from, vh_corner, to, obstacles) {
            return vec![vh_corner];
        }

        if let Some(y) = self.find_clear_level(from.y, to.y, obstacles) {
            log::debug!("Router: freie Ebene y={y} zwischen {from} und {to}");
            return vec![Vec2::new(from.x, y), Vec2::new(to.x, y)];
        }

        log::debug!("Router: keine freie Route, HV-Fallback zwischen {from} und {to}");
        vec![hv_corner]
    }

    /// Sucht eine horizontale Ebene, die keine vertikale Hindernis-Ausdehnung schneidet.
    ///
    /// Zuerst zwischen beiden Y-Werten in Grid-Schritten, danach abwechselnd
    /// oberhalb und unterhalb mit wachsendem Abstand.
    pub fn find_clear_level(&self, y_a: f32, y_b: f32, obstacles: &[Obstacle]) -> Option<f32> {
        let grid = self.config.grid_size;
        if grid <= 0.0 {
            return None;
        }
        let min_y = y_a.min(y_b);
        let max_y = y_a.max(y_b);
        let is_clear = |y: f32| obstacles.iter().all(|ob| !ob.covers_y(y));

        let mut y = min_y;
        while y <= max_y {
            if is_clear(y) {
                return Some(y);
            }
            y += grid;
        }

        (1..self.config.level_search_steps)
            .map(|step| step as f32 * grid)
            .flat_map(|offset| [min_y - offset, max_y + offset])
            .find(|&y| is_clear(y))
    }

    /// Blockiert irgendein Hindernis das Segment `a`–`b`?
    pub fn segment_blocked(&self, a: Vec2, b: Vec2, obstacles: &[Obstacle]) -> bool {
        obstacles.iter().any(|ob| {
            ob.blocks_segment(
                a,
                b,
                self.config.obstacle_margin,
                self.config.alignment_tolerance,
            )
        })
    }

    fn leg_blocked(&self, from: Vec2, corner: Vec2, to: Vec2, obstacles: &[Obstacle]) -> bool {
        self.segment_blocked(from, corner, obstacles) || self.segment_blocked(corner, to, obstacles)
    }

    /// Liegen `a` und `b` auf einer Linie entlang der Achse von `dir`?
    fn on_axis_line(&self, a: Vec2, b: Vec2, dir: Direction) -> bool {
        let tol = self.config.alignment_tolerance;
        let unit = dir.unit();
        if unit.x != 0.0 {
            (a.y - b.y).abs() <= tol
        } else {
            (a.x - b.x).abs() <= tol
        }
    }
}

fn dedup_consecutive(mut path: Vec<Vec2>) -> Vec<Vec2> {
    path.dedup_by(|b, a| a.distance_squared(*b) < 1e-6);
    path
}
