//! Use-Cases der interaktiven Wire-Erstellung.

use crate::app::SchematicEditor;
use crate::core::{connection_hint, EndpointRef, ResolvedEndpoint, WireEnd};
use glam::Vec2;
use std::sync::Arc;

/// Löst einen Pin über den Instanz-Store auf.
pub fn resolve(
    editor: &SchematicEditor,
    instance_id: u64,
    endpoint_id: &str,
) -> Option<ResolvedEndpoint> {
    editor
        .instances
        .get(instance_id)?
        .resolve_endpoint(endpoint_id, editor.options.grid_size)
}

/// Startet die Routing-Session am Pin.
pub fn start_wire(editor: &mut SchematicEditor, instance_id: u64, endpoint_id: &str) -> bool {
    let Some(resolved) = resolve(editor, instance_id, endpoint_id) else {
        log::warn!("Wire-Start ignoriert: Pin {instance_id}/{endpoint_id} unbekannt");
        return false;
    };
    if editor.session.cancel() {
        log::debug!("Laufender Wire verworfen, neuer Start");
    }
    editor
        .session
        .begin(EndpointRef::new(instance_id, endpoint_id), resolved);

    let name = editor
        .instances
        .get(instance_id)
        .map(|inst| inst.def.name.clone())
        .unwrap_or_default();
    editor.ui.status_message = Some(format!(
        "Drawing wire from {name}. Click to add waypoints or click another endpoint to auto-route."
    ));
    log::info!("Wire gestartet an {instance_id}/{endpoint_id}");
    true
}

/// Fügt einen grid-gesnappten (und ggf. 90°-gesnappten) Wegpunkt hinzu.
pub fn add_waypoint(editor: &mut SchematicEditor, world_pos: Vec2) -> Option<Vec2> {
    let snapped = editor.view.grid.snap_to_grid(world_pos);
    let point = editor.session.push_waypoint(snapped)?;
    editor.ui.status_message = Some(format!(
        "Waypoint {} added",
        editor.session.waypoints().len()
    ));
    Some(point)
}

/// Aktualisiert die Cursor-Position der Vorschau.
pub fn update_cursor(editor: &mut SchematicEditor, world_pos: Vec2) {
    let snapped = editor.view.grid.snap_to_grid(world_pos);
    editor.session.set_cursor(snapped);
}

/// Schaltet zwischen 90°- und freiem Modus um.
pub fn set_orthogonal(editor: &mut SchematicEditor, orthogonal: bool) {
    editor.session.set_orthogonal(orthogonal);
}

/// Schließt den laufenden Wire am Ziel-Pin ab.
pub fn complete_wire(
    editor: &mut SchematicEditor,
    instance_id: u64,
    endpoint_id: &str,
) -> Option<u64> {
    if !editor.session.is_drawing() {
        return None;
    }
    let Some(end_resolved) = resolve(editor, instance_id, endpoint_id) else {
        log::warn!("Wire-Abschluss ignoriert: Pin {instance_id}/{endpoint_id} unbekannt");
        return None;
    };

    let end = EndpointRef::new(instance_id, endpoint_id);
    let router = editor.router();
    let obstacles = editor.obstacles();
    let Some(path) = editor
        .session
        .finish_at_endpoint(&end, end_resolved, &router, &obstacles)
    else {
        log::debug!("Klick auf Start-Pin ignoriert");
        return None;
    };

    editor.record_undo_snapshot();
    let start_instance = path.start.instance_id;
    let wire_id = Arc::make_mut(&mut editor.wires).add(
        path.start,
        WireEnd::Endpoint(end),
        path.waypoints,
        path.orthogonal,
        path.routing,
    );

    let start_def = editor.instances.get(start_instance).map(|i| i.def.clone());
    let end_def = editor.instances.get(instance_id).map(|i| i.def.clone());
    let message = match (start_def, end_def) {
        (Some(a), Some(b)) => {
            let hint = connection_hint(&a.id, &b.id);
            match hint.message {
                Some(msg) if !hint.valid => {
                    log::warn!("Wire {wire_id}: {msg}");
                    msg
                }
                Some(msg) => {
                    log::info!("Wire {wire_id}: {msg}");
                    format!("Wire created from {} to {}. {msg}", a.name, b.name)
                }
                None => format!("Wire created from {} to {}", a.name, b.name),
            }
        }
        _ => format!("Wire {wire_id} created"),
    };
    editor.ui.status_message = Some(message);
    log::info!("Wire {wire_id} erstellt");
    Some(wire_id)
}

/// Schließt den laufenden Wire als Junction auf `target_wire` ab.
///
/// Der Klickpunkt wird auf das Grid gesnappt und wird zum Wire-Ende.
pub fn connect_to_wire(
    editor: &mut SchematicEditor,
    target_wire: u64,
    world_pos: Vec2,
) -> Option<u64> {
    if !editor.session.is_drawing() {
        return None;
    }
    if !editor.wires.contains(target_wire) {
        log::warn!("Junction ignoriert: Wire {target_wire} existiert nicht");
        return None;
    }

    let point = editor.view.grid.snap_to_grid(world_pos);
    let path = editor.session.finish_at_junction(point)?;

    editor.record_undo_snapshot();
    let wires = Arc::make_mut(&mut editor.wires);
    let wire_id = wires.add(
        path.start,
        WireEnd::Junction { target_wire, point },
        path.waypoints,
        path.orthogonal,
        path.routing,
    );
    wires.add_junction_marker(wire_id, point);

    editor.ui.status_message = Some("Wire connected to existing wire".to_string());
    log::info!("Junction-Wire {wire_id} auf Wire {target_wire} bei {point}");
    Some(wire_id)
}

/// Bricht den laufenden Wire ab. Der Wire-Store bleibt unverändert.
pub fn cancel_wire(editor: &mut SchematicEditor) {
    if editor.session.cancel() {
        editor.ui.status_message = Some("Wire cancelled".to_string());
        log::info!("Wire abgebrochen");
    }
}
