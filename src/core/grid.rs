//! Canvas-Ansicht: Pan, Zoom und Umrechnung Screen ⇔ Welt ⇔ Grid.

use glam::{IVec2, Vec2};

/// 2D-Ansicht des Schaltplans mit Pan, Zoom und Einrast-Raster
#[derive(Debug, Clone)]
pub struct GridView {
    /// Zoom-Level (1.0 = normal, 2.0 = doppelt so groß)
    pub zoom: f32,
    /// Verschiebung des Inhalts in Screen-Pixeln
    pub pan: Vec2,
    /// Rasterweite in Welt-Pixeln
    pub grid_size: f32,
    /// Raster-Punkte sichtbar
    pub show_grid: bool,
    zoom_min: f32,
    zoom_max: f32,
}

impl GridView {
    /// Standard-Rasterweite in Welt-Pixeln.
    pub const DEFAULT_GRID_SIZE: f32 = 80.0;
    /// Minimaler Zoom-Faktor.
    pub const ZOOM_MIN: f32 = 0.25;
    /// Maximaler Zoom-Faktor.
    pub const ZOOM_MAX: f32 = 4.0;
    /// Angestrebter Abstand der Raster-Punkte auf dem Bildschirm.
    const TARGET_SCREEN_SPACING: f32 = 80.0;

    /// Erstellt eine Ansicht mit gegebener Rasterweite.
    pub fn new(grid_size: f32) -> Self {
        Self {
            zoom: 1.0,
            pan: Vec2::ZERO,
            grid_size,
            show_grid: true,
            zoom_min: Self::ZOOM_MIN,
            zoom_max: Self::ZOOM_MAX,
        }
    }

    /// Setzt die Zoom-Grenzen (aus EditorOptions) und klemmt den aktuellen Zoom.
    pub fn set_zoom_limits(&mut self, min: f32, max: f32) {
        self.zoom_min = min.min(max);
        self.zoom_max = max.max(min);
        self.zoom = self.zoom.clamp(self.zoom_min, self.zoom_max);
    }

    /// Konvertiert Screen-Koordinaten (relativ zum Canvas) zu Welt-Koordinaten.
    pub fn screen_to_world(&self, screen_pos: Vec2) -> Vec2 {
        (screen_pos - self.pan) / self.zoom
    }

    /// Konvertiert Welt-Koordinaten zu Screen-Koordinaten.
    pub fn world_to_screen(&self, world_pos: Vec2) -> Vec2 {
        world_pos * self.zoom + self.pan
    }

    /// Welt → Grid. Rundet .5 nach oben (wie Browser-`Math.round`).
    pub fn world_to_grid(&self, world_pos: Vec2) -> IVec2 {
        let g = world_pos / self.grid_size;
        IVec2::new((g.x + 0.5).floor() as i32, (g.y + 0.5).floor() as i32)
    }

    /// Grid → Welt.
    pub fn grid_to_world(&self, grid_pos: IVec2) -> Vec2 {
        grid_pos.as_vec2() * self.grid_size
    }

    /// Rastet eine Welt-Position auf den nächsten Grid-Punkt ein.
    pub fn snap_to_grid(&self, world_pos: Vec2) -> Vec2 {
        self.grid_to_world(self.world_to_grid(world_pos))
    }

    /// Screen → Grid.
    pub fn screen_to_grid(&self, screen_pos: Vec2) -> IVec2 {
        self.world_to_grid(self.screen_to_world(screen_pos))
    }

    /// Verschiebt die Ansicht (Screen-Pixel)
    pub fn pan_by(&mut self, delta: Vec2) {
        self.pan += delta;
    }

    /// Ändert den Zoom-Level.
    ///
    /// Mit `focus` (Screen-Koordinaten) bleibt der Welt-Punkt unter dem Cursor fix.
    pub fn zoom_by(&mut self, factor: f32, focus: Option<Vec2>) {
        let old_zoom = self.zoom;
        let new_zoom = (old_zoom * factor).clamp(self.zoom_min, self.zoom_max);

        if let Some(focus) = focus {
            let world = (focus - self.pan) / old_zoom;
            self.pan = focus - world * new_zoom;
        }

        self.zoom = new_zoom;
    }

    /// Setzt Zoom und Pan zurück.
    pub fn reset_view(&mut self) {
        self.zoom = 1.0;
        self.pan = Vec2::ZERO;
    }

    /// Schaltet die Raster-Anzeige um und gibt den neuen Zustand zurück.
    pub fn toggle_grid(&mut self) -> bool {
        self.show_grid = !self.show_grid;
        self.show_grid
    }

    /// Abstand der angezeigten Raster-Punkte in Welt-Einheiten.
    ///
    /// Hält die Punktdichte auf dem Bildschirm etwa konstant: Vielfaches der
    /// Rasterweite mit Zweierpotenz-Multiplikator, damit Punkte auf dem
    /// Einrast-Raster liegen.
    pub fn grid_display_spacing(&self) -> f32 {
        let world_spacing = Self::TARGET_SCREEN_SPACING / self.zoom;
        let multiplier = (world_spacing / self.grid_size).round().max(1.0);
        let multiplier = 2f32.powf(multiplier.log2().round());
        self.grid_size * multiplier
    }
}

impl Default for GridView {
    fn default() -> Self {
        Self::new(Self::DEFAULT_GRID_SIZE)
    }
}
