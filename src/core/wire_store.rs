//! Store für Wires und Junction-Marker.
//!
//! Alle Operationen sind total: unbekannte IDs werden still ignoriert.

use super::geometry::distance_to_segment;
use super::wire::{
    BrokenReason, EndpointRef, JunctionMarker, Wire, WireEnd, WireHealth, WireRouting,
};
use super::InstanceStore;
use glam::Vec2;
use indexmap::{IndexMap, IndexSet};

/// Alle Wires und Junction-Marker eines Schaltplans
#[derive(Debug, Clone)]
pub struct WireStore {
    wires: IndexMap<u64, Wire>,
    junctions: Vec<JunctionMarker>,
    next_id: u64,
}

impl Default for WireStore {
    fn default() -> Self {
        Self::new()
    }
}

impl WireStore {
    /// Erstellt einen leeren Store.
    pub fn new() -> Self {
        Self {
            wires: IndexMap::new(),
            junctions: Vec::new(),
            next_id: 1,
        }
    }

    /// Legt einen neuen Wire an und gibt seine ID zurück.
    pub fn add(
        &mut self,
        start: EndpointRef,
        end: WireEnd,
        waypoints: Vec<Vec2>,
        orthogonal: bool,
        routing: WireRouting,
    ) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.wires.insert(
            id,
            Wire {
                id,
                start,
                end,
                waypoints,
                orthogonal,
                routing,
            },
        );
        id
    }

    /// Übernimmt einen Wire mit fester ID (Laden aus Datei).
    pub fn insert_with_id(&mut self, wire: Wire) {
        self.next_id = self.next_id.max(wire.id.saturating_add(1));
        self.wires.insert(wire.id, wire);
    }

    /// Setzt den ID-Zähler (nie unter bereits vergebene IDs).
    pub fn set_next_id(&mut self, next_id: u64) {
        let floor = self.wires.keys().max().map_or(1, |max| max.saturating_add(1));
        self.next_id = next_id.max(floor);
    }

    /// Nächste zu vergebende ID.
    pub fn next_id(&self) -> u64 {
        self.next_id
    }

    /// Fügt einen Junction-Marker hinzu, markiert mit dem erzeugenden Wire.
    pub fn add_junction_marker(&mut self, wire_id: u64, position: Vec2) {
        self.junctions.push(JunctionMarker { wire_id, position });
    }

    /// Alle Junction-Marker.
    pub fn junction_markers(&self) -> &[JunctionMarker] {
        &self.junctions
    }

    /// Lookup per ID.
    pub fn get(&self, id: u64) -> Option<&Wire> {
        self.wires.get(&id)
    }

    /// Mutabler Lookup per ID.
    pub fn get_mut(&mut self, id: u64) -> Option<&mut Wire> {
        self.wires.get_mut(&id)
    }

    /// Existiert der Wire?
    pub fn contains(&self, id: u64) -> bool {
        self.wires.contains_key(&id)
    }

    /// Iterator in Erzeugungsreihenfolge.
    pub fn iter(&self) -> impl Iterator<Item = &Wire> {
        self.wires.values()
    }

    /// Anzahl der Wires.
    pub fn len(&self) -> usize {
        self.wires.len()
    }

    /// Gibt `true` zurück, wenn keine Wires existieren.
    pub fn is_empty(&self) -> bool {
        self.wires.is_empty()
    }

    /// Entfernt Wires samt ihrer Junction-Marker.
    ///
    /// Wires, die einen gelöschten Wire als Junction-Ziel nutzen, bleiben
    /// erhalten. Gibt die tatsächlich entfernten Wires zurück.
    pub fn remove_wires(&mut self, ids: &[u64]) -> Vec<Wire> {
        let removed: Vec<Wire> = ids
            .iter()
            .filter_map(|id| self.wires.shift_remove(id))
            .collect();
        if !removed.is_empty() {
            let gone: IndexSet<u64> = removed.iter().map(|w| w.id).collect();
            self.junctions.retain(|marker| !gone.contains(&marker.wire_id));
        }
        removed
    }

    /// IDs aller Wires, deren Start oder Ende an der Instanz hängt.
    pub fn attached_to_instance(&self, instance_id: u64) -> Vec<u64> {
        self.wires
            .values()
            .filter(|wire| wire.touches_instance(instance_id))
            .map(|wire| wire.id)
            .collect()
    }

    /// Direkte Junction-Abhängige: Wires, deren Ende auf einem der Wires liegt.
    pub fn dependents_of(&self, wire_ids: &[u64]) -> Vec<u64> {
        self.wires
            .values()
            .filter(|wire| {
                wire.end
                    .junction_target()
                    .is_some_and(|target| wire_ids.contains(&target))
            })
            .map(|wire| wire.id)
            .collect()
    }

    /// Transitive Hülle: die Wires selbst plus alle (indirekten) Junction-Abhängigen.
    pub fn cascade_closure(&self, wire_ids: &[u64]) -> Vec<u64> {
        let mut closure: IndexSet<u64> = wire_ids
            .iter()
            .copied()
            .filter(|id| self.wires.contains_key(id))
            .collect();
        let mut frontier: Vec<u64> = closure.iter().copied().collect();
        while !frontier.is_empty() {
            let next: Vec<u64> = self
                .dependents_of(&frontier)
                .into_iter()
                .filter(|id| closure.insert(*id))
                .collect();
            frontier = next;
        }
        closure.into_iter().collect()
    }

    /// Prüft alle Referenzen eines Wires gegen den aktuellen Zustand.
    pub fn health(&self, wire: &Wire, instances: &InstanceStore) -> WireHealth {
        if let Some(reason) = endpoint_problem(&wire.start, instances) {
            return WireHealth::Broken(reason);
        }
        let reason = match &wire.end {
            WireEnd::Endpoint(ep) => endpoint_problem(ep, instances),
            WireEnd::Junction { target_wire, .. } => (!self.wires.contains_key(target_wire))
                .then_some(BrokenReason::MissingTargetWire(*target_wire)),
        };
        match reason {
            Some(reason) => WireHealth::Broken(reason),
            None => WireHealth::Intact,
        }
    }

    /// Alle defekten Wires mit Grund.
    pub fn broken_wires(&self, instances: &InstanceStore) -> Vec<(u64, BrokenReason)> {
        self.wires
            .values()
            .filter_map(|wire| match self.health(wire, instances) {
                WireHealth::Broken(reason) => Some((wire.id, reason)),
                WireHealth::Intact => None,
            })
            .collect()
    }

    /// Nächster Wire, dessen Polylinie höchstens `tolerance` vom Punkt entfernt ist.
    pub fn hit_test(&self, point: Vec2, tolerance: f32) -> Option<u64> {
        self.wires
            .values()
            .filter_map(|wire| {
                wire.waypoints
                    .windows(2)
                    .map(|seg| distance_to_segment(point, seg[0], seg[1]))
                    .reduce(f32::min)
                    .map(|dist| (wire.id, dist))
            })
            .filter(|(_, dist)| *dist <= tolerance)
            .min_by(|a, b| a.1.total_cmp(&b.1))
            .map(|(id, _)| id)
    }
}

fn endpoint_problem(ep: &EndpointRef, instances: &InstanceStore) -> Option<BrokenReason> {
    match instances.get(ep.instance_id) {
        None => Some(BrokenReason::MissingInstance(ep.instance_id)),
        Some(instance) if instance.def.endpoint(&ep.endpoint_id).is_none() => {
            Some(BrokenReason::MissingEndpoint {
                instance_id: ep.instance_id,
                endpoint_id: ep.endpoint_id.clone(),
            })
        }
        Some(_) => None,
    }
}
