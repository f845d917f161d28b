//! Use-Case: Wires nach Bauteil-Änderungen nachführen.
//!
//! - Auto-geroutete Wires werden komplett neu geroutet
//! - Manuelle Wires: erster/letzter Wegpunkt folgt dem Pin, im 90°-Modus
//!   wird der Nachbarpunkt achsparallel mitgezogen
//! - Junction-Punkte bleiben fix, defekte Wires werden übersprungen

use crate::app::SchematicEditor;
use crate::core::{
    InstanceStore, ManhattanRouter, Obstacle, ResolvedEndpoint, Wire, WireEnd, WireRouting,
    WireStore,
};
use glam::Vec2;
use indexmap::IndexSet;
use std::sync::Arc;

/// Führt alle Wires nach, die an einer der Instanzen hängen.
///
/// Gibt die Anzahl der angepassten Wires zurück.
pub fn reroute_wires_of_instances(editor: &mut SchematicEditor, instance_ids: &[u64]) -> usize {
    let wire_ids: IndexSet<u64> = instance_ids
        .iter()
        .flat_map(|&id| editor.wires.attached_to_instance(id))
        .collect();
    reroute_wires(editor, &wire_ids.into_iter().collect::<Vec<_>>())
}

/// Führt alle intakten Wires nach.
pub fn reroute_all(editor: &mut SchematicEditor) -> usize {
    let ids: Vec<u64> = editor.wires.iter().map(|w| w.id).collect();
    let count = reroute_wires(editor, &ids);
    log::info!("{count} Wires neu geroutet");
    count
}

/// Routet alle Wires neu, rückgängig machbar, mit Statusmeldung.
pub fn reroute_all_wires(editor: &mut SchematicEditor) -> usize {
    if editor.wires.is_empty() {
        return 0;
    }
    editor.record_undo_snapshot();
    let count = reroute_all(editor);
    editor.ui.status_message = Some(format!("Rerouted {count} wire(s)"));
    count
}

fn reroute_wires(editor: &mut SchematicEditor, wire_ids: &[u64]) -> usize {
    if wire_ids.is_empty() {
        return 0;
    }
    let router = editor.router();
    let obstacles = editor.obstacles();
    let grid_size = editor.options.grid_size;
    let tolerance = router.config().alignment_tolerance;

    // Gesundheit vor der Mutation prüfen (Junction-Ziele im selben Store)
    let intact: Vec<u64> = wire_ids
        .iter()
        .copied()
        .filter(|&id| {
            editor
                .wires
                .get(id)
                .is_some_and(|w| !editor.wires.health(w, &editor.instances).is_broken())
        })
        .collect();
    if intact.len() < wire_ids.len() {
        log::debug!(
            "{} defekte Wires beim Nachführen übersprungen",
            wire_ids.len() - intact.len()
        );
    }

    let instances = &editor.instances;
    let wires: &mut WireStore = Arc::make_mut(&mut editor.wires);
    let ctx = RerouteContext {
        instances,
        router: &router,
        obstacles: &obstacles,
        grid_size,
        tolerance,
    };
    intact
        .into_iter()
        .filter(|&id| wires.get_mut(id).is_some_and(|wire| ctx.reroute(wire)))
        .count()
}

struct RerouteContext<'a> {
    instances: &'a InstanceStore,
    router: &'a ManhattanRouter,
    obstacles: &'a [Obstacle],
    grid_size: f32,
    tolerance: f32,
}

impl RerouteContext<'_> {
    fn resolve(&self, instance_id: u64, endpoint_id: &str) -> Option<ResolvedEndpoint> {
        self.instances
            .get(instance_id)?
            .resolve_endpoint(endpoint_id, self.grid_size)
    }

    /// Passt einen Wire an; `true`, wenn sich Wegpunkte geändert haben.
    fn reroute(&self, wire: &mut Wire) -> bool {
        let Some(start) = self.resolve(wire.start.instance_id, &wire.start.endpoint_id) else {
            return false;
        };
        let end = match &wire.end {
            WireEnd::Endpoint(ep) => match self.resolve(ep.instance_id, &ep.endpoint_id) {
                Some(resolved) => resolved,
                None => return false,
            },
            WireEnd::Junction { point, .. } => ResolvedEndpoint {
                position: *point,
                direction: None,
            },
        };

        let before = wire.waypoints.clone();
        match wire.routing {
            WireRouting::Auto => {
                wire.waypoints = self.router.route(
                    start.position,
                    end.position,
                    start.direction,
                    end.direction,
                    self.obstacles,
                );
            }
            WireRouting::Manual => {
                self.move_terminal(wire, start.position, Terminal::First);
                if matches!(wire.end, WireEnd::Endpoint(_)) {
                    self.move_terminal(wire, end.position, Terminal::Last);
                }
            }
        }
        wire.waypoints != before
    }

    fn move_terminal(&self, wire: &mut Wire, target: Vec2, terminal: Terminal) {
        let len = wire.waypoints.len();
        if len < 2 {
            return;
        }
        let (idx, neighbor) = match terminal {
            Terminal::First => (0, 1),
            Terminal::Last => (len - 1, len - 2),
        };
        let old = wire.waypoints[idx];
        if old == target {
            return;
        }
        // Nachbar nur verschieben, wenn er nicht selbst ein Wire-Ende ist
        if wire.orthogonal && len > 2 {
            let n = wire.waypoints[neighbor];
            if (n.y - old.y).abs() <= self.tolerance {
                wire.waypoints[neighbor].y = target.y;
            } else if (n.x - old.x).abs() <= self.tolerance {
                wire.waypoints[neighbor].x = target.x;
            }
        }
        wire.waypoints[idx] = target;
    }
}

#[derive(Clone, Copy)]
enum Terminal {
    First,
    Last,
}
