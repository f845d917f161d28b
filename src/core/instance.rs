//! Platzierte Bauteil-Instanzen und ihr Store.

use super::geometry::rotate_about;
use super::{ComponentDef, Direction, Obstacle, Rotation};
use glam::{IVec2, Vec2};
use indexmap::IndexMap;
use std::sync::Arc;

/// Welt-Geometrie eines Pins nach Rotation/Spiegelung
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResolvedEndpoint {
    /// Welt-Position in Pixeln
    pub position: Vec2,
    /// Effektive Austrittsrichtung
    pub direction: Option<Direction>,
}

/// Eine auf dem Canvas platzierte Bauteil-Instanz
#[derive(Debug, Clone)]
pub struct ComponentInstance {
    /// Eindeutige Instanz-ID
    pub id: u64,
    /// Geteilte, unveränderliche Definition
    pub def: Arc<ComponentDef>,
    /// Linke obere Ecke in Grid-Koordinaten
    pub grid_pos: IVec2,
    /// Rotation (im Uhrzeigersinn)
    pub rotation: Rotation,
    /// Horizontal gespiegelt
    pub flip_x: bool,
    /// Vertikal gespiegelt
    pub flip_y: bool,
    /// Freitext-Beschriftung
    pub label: String,
}

impl ComponentInstance {
    /// Erstellt eine Instanz ohne Rotation und Spiegelung.
    pub fn new(id: u64, def: Arc<ComponentDef>, grid_pos: IVec2) -> Self {
        let label = def.name.clone();
        Self {
            id,
            def,
            grid_pos,
            rotation: Rotation::Deg0,
            flip_x: false,
            flip_y: false,
            label,
        }
    }

    /// Körpergröße (unrotiert) in Pixeln.
    pub fn body_size(&self, grid_size: f32) -> Vec2 {
        Vec2::new(self.def.width, self.def.height) * grid_size
    }

    /// Ursprung (linke obere Ecke, unrotiert) in Welt-Koordinaten.
    pub fn origin(&self, grid_size: f32) -> Vec2 {
        self.grid_pos.as_vec2() * grid_size
    }

    /// Mittelpunkt des Körpers in Welt-Koordinaten.
    pub fn center(&self, grid_size: f32) -> Vec2 {
        self.origin(grid_size) + self.body_size(grid_size) * 0.5
    }

    /// Löst einen Pin zu Welt-Position und effektiver Richtung auf.
    ///
    /// Reihenfolge: Spiegelung um die Körpermitte, danach Rotation um die
    /// Körpermitte. `None`, wenn die Definition den Pin nicht kennt.
    pub fn resolve_endpoint(&self, endpoint_id: &str, grid_size: f32) -> Option<ResolvedEndpoint> {
        let ep = self.def.endpoint(endpoint_id)?;
        let size = self.body_size(grid_size);
        let local_center = size * 0.5;

        let mut local = Vec2::new(ep.x, ep.y) * grid_size;
        let mut direction = ep.direction;
        if self.flip_x {
            local.x = size.x - local.x;
            direction = direction.map(Direction::flipped_x);
        }
        if self.flip_y {
            local.y = size.y - local.y;
            direction = direction.map(Direction::flipped_y);
        }

        let local = rotate_about(local, local_center, self.rotation);
        Some(ResolvedEndpoint {
            position: self.origin(grid_size) + local,
            direction: direction.map(|d| d.rotated(self.rotation)),
        })
    }

    /// Achsenparallele Bounding-Box unter Berücksichtigung der Rotation.
    pub fn bounds(&self, grid_size: f32) -> Obstacle {
        let size = self.body_size(grid_size);
        let size = if self.rotation.swaps_axes() {
            Vec2::new(size.y, size.x)
        } else {
            size
        };
        Obstacle {
            origin: self.center(grid_size) - size * 0.5,
            size,
            instance_id: self.id,
        }
    }
}

/// Store aller Instanzen in Platzierungsreihenfolge
#[derive(Debug, Clone)]
pub struct InstanceStore {
    instances: IndexMap<u64, ComponentInstance>,
    next_id: u64,
}

impl Default for InstanceStore {
    fn default() -> Self {
        Self::new()
    }
}

impl InstanceStore {
    /// Erstellt einen leeren Store.
    pub fn new() -> Self {
        Self {
            instances: IndexMap::new(),
            next_id: 1,
        }
    }

    /// Platziert eine neue Instanz und gibt ihre ID zurück.
    pub fn place(&mut self, def: Arc<ComponentDef>, grid_pos: IVec2) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.instances
            .insert(id, ComponentInstance::new(id, def, grid_pos));
        id
    }

    /// Übernimmt eine vollständige Instanz mit fester ID (Laden aus Datei).
    pub fn insert_with_id(&mut self, instance: ComponentInstance) {
        self.next_id = self.next_id.max(instance.id.saturating_add(1));
        self.instances.insert(instance.id, instance);
    }

    /// Nächste zu vergebende ID.
    pub fn next_id(&self) -> u64 {
        self.next_id
    }

    /// Setzt den ID-Zähler (nie unter bereits vergebene IDs).
    pub fn set_next_id(&mut self, next_id: u64) {
        let floor = self.instances.keys().max().map_or(1, |max| max.saturating_add(1));
        self.next_id = next_id.max(floor);
    }

    /// Entfernt eine Instanz. Wires bleiben unberührt.
    pub fn remove(&mut self, id: u64) -> Option<ComponentInstance> {
        self.instances.shift_remove(&id)
    }

    /// Lookup per ID.
    pub fn get(&self, id: u64) -> Option<&ComponentInstance> {
        self.instances.get(&id)
    }

    /// Mutabler Lookup per ID.
    pub fn get_mut(&mut self, id: u64) -> Option<&mut ComponentInstance> {
        self.instances.get_mut(&id)
    }

    /// Existiert die Instanz?
    pub fn contains(&self, id: u64) -> bool {
        self.instances.contains_key(&id)
    }

    /// Iterator in Platzierungsreihenfolge.
    pub fn iter(&self) -> impl Iterator<Item = &ComponentInstance> {
        self.instances.values()
    }

    /// Anzahl der Instanzen.
    pub fn len(&self) -> usize {
        self.instances.len()
    }

    /// Gibt `true` zurück, wenn keine Instanz platziert ist.
    pub fn is_empty(&self) -> bool {
        self.instances.is_empty()
    }

    /// Verschiebt eine Instanz. Gibt `false` zurück, wenn sie fehlt oder schon dort liegt.
    pub fn move_to(&mut self, id: u64, grid_pos: IVec2) -> bool {
        match self.instances.get_mut(&id) {
            Some(instance) if instance.grid_pos != grid_pos => {
                instance.grid_pos = grid_pos;
                true
            }
            _ => false,
        }
    }

    /// Dreht eine Instanz um 90° im Uhrzeigersinn.
    pub fn rotate_cw(&mut self, id: u64) -> bool {
        let Some(instance) = self.instances.get_mut(&id) else {
            return false;
        };
        instance.rotation = instance.rotation.rotated_cw();
        true
    }

    /// Schaltet die horizontale Spiegelung um.
    pub fn flip(&mut self, id: u64) -> bool {
        let Some(instance) = self.instances.get_mut(&id) else {
            return false;
        };
        instance.flip_x = !instance.flip_x;
        true
    }

    /// Setzt die Beschriftung.
    pub fn set_label(&mut self, id: u64, label: &str) -> bool {
        let Some(instance) = self.instances.get_mut(&id) else {
            return false;
        };
        instance.label = label.to_string();
        true
    }

    /// Dupliziert eine Instanz mit Versatz; die Kopie bekommt eine neue ID.
    pub fn duplicate(&mut self, id: u64, offset: IVec2) -> Option<u64> {
        let source = self.instances.get(&id)?.clone();
        let new_id = self.next_id;
        self.next_id += 1;
        self.instances.insert(
            new_id,
            ComponentInstance {
                id: new_id,
                grid_pos: source.grid_pos + offset,
                label: format!("{} (copy)", source.label),
                ..source
            },
        );
        Some(new_id)
    }

    /// IDs aller Instanzen, deren Bounding-Box das Rechteck überlappt.
    pub fn ids_in_rect(&self, a: Vec2, b: Vec2, grid_size: f32) -> Vec<u64> {
        let min = a.min(b);
        let max = a.max(b);
        self.instances
            .values()
            .filter(|instance| instance.bounds(grid_size).overlaps_rect(min, max))
            .map(|instance| instance.id)
            .collect()
    }

    /// Oberste Instanz (zuletzt platziert), deren Box den Punkt enthält.
    pub fn hit_test(&self, point: Vec2, grid_size: f32) -> Option<u64> {
        self.instances
            .values()
            .rev()
            .find(|instance| instance.bounds(grid_size).overlaps_rect(point, point))
            .map(|instance| instance.id)
    }
}
