//! Parser für Schaltplan-Dokumente (JSON).

use super::document::{LoadedSchematic, SchematicDocument, DOCUMENT_VERSION, MAX_DOCUMENT_ID};
use crate::core::{ComponentInstance, ComponentLibrary, InstanceStore, WireStore};
use anyhow::{bail, Context, Result};
use glam::IVec2;
use indexmap::IndexSet;

/// Parsed ein Schaltplan-Dokument und baut die Stores auf.
///
/// Schlägt fehl bei unbekannten Bauteil-IDs, doppelten IDs und Wires mit
/// weniger als zwei Wegpunkten. Verweise auf fehlende Instanzen oder Wires
/// sind erlaubt; solche Wires gelten nach dem Laden als defekt.
pub fn parse_schematic(json: &str, library: &ComponentLibrary) -> Result<LoadedSchematic> {
    let document: SchematicDocument =
        serde_json::from_str(json).context("Schaltplan-JSON ist ungültig")?;

    if document.version > DOCUMENT_VERSION {
        bail!(
            "Dokumentversion {} wird nicht unterstützt (maximal {})",
            document.version,
            DOCUMENT_VERSION
        );
    }

    check_id("next_instance_id", document.next_instance_id)?;
    check_id("next_wire_id", document.next_wire_id)?;

    let mut instances = InstanceStore::new();
    let mut seen_instances = IndexSet::new();
    for record in document.instances {
        check_id("Instanz-ID", record.id)?;
        if !seen_instances.insert(record.id) {
            bail!("Doppelte Instanz-ID {}", record.id);
        }
        let Some(def) = library.get(&record.component_id) else {
            bail!(
                "Unbekanntes Bauteil '{}' (Instanz {})",
                record.component_id,
                record.id
            );
        };
        let mut instance =
            ComponentInstance::new(record.id, def, IVec2::new(record.grid_x, record.grid_y));
        instance.rotation = record.rotation;
        instance.flip_x = record.flip_x;
        instance.flip_y = record.flip_y;
        if !record.label.is_empty() {
            instance.label = record.label;
        }
        instances.insert_with_id(instance);
    }
    instances.set_next_id(document.next_instance_id);

    let mut wires = WireStore::new();
    let mut seen_wires = IndexSet::new();
    for wire in document.wires {
        check_id("Wire-ID", wire.id)?;
        if !seen_wires.insert(wire.id) {
            bail!("Doppelte Wire-ID {}", wire.id);
        }
        if wire.waypoints.len() < 2 {
            bail!(
                "Wire {} hat {} Wegpunkt(e), mindestens 2 erforderlich",
                wire.id,
                wire.waypoints.len()
            );
        }
        wires.insert_with_id(wire);
    }
    for marker in document.junctions {
        if !wires.contains(marker.wire_id) {
            log::warn!(
                "Junction-Marker ohne Wire {} verworfen",
                marker.wire_id
            );
            continue;
        }
        wires.add_junction_marker(marker.wire_id, marker.position);
    }
    wires.set_next_id(document.next_wire_id);

    let broken = wires.broken_wires(&instances);
    if !broken.is_empty() {
        log::warn!("{} defekte Wires im Dokument", broken.len());
    }

    Ok(LoadedSchematic {
        name: document.name,
        instances,
        wires,
    })
}

fn check_id(field: &str, id: u64) -> Result<()> {
    if id > MAX_DOCUMENT_ID {
        bail!("{field} {id} liegt außerhalb des zulässigen Bereichs (maximal {MAX_DOCUMENT_ID})");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const MINIMAL: &str = r#"{
        "version": 1,
        "name": "Demo",
        "instances": [
            {"id": 1, "component_id": "resistor", "grid_x": 0, "grid_y": 0},
            {"id": 5, "component_id": "led", "grid_x": 4, "grid_y": 0, "rotation": 90, "label": "D1"}
        ],
        "wires": [
            {
                "id": 3,
                "start": {"instance_id": 1, "endpoint_id": "right"},
                "end": {"kind": "endpoint", "instance_id": 5, "endpoint_id": "anode"},
                "waypoints": [[160.0, 40.0], [400.0, -40.0]],
                "orthogonal": false
            }
        ],
        "junctions": [],
        "next_instance_id": 2,
        "next_wire_id": 0
    }"#;

    #[test]
    fn parse_restores_instances_and_wires() {
        let library = ComponentLibrary::builtin();
        let loaded = parse_schematic(MINIMAL, &library).expect("parsebar");
        assert_eq!(loaded.name, "Demo");
        assert_eq!(loaded.instances.len(), 2);

        let led = loaded.instances.get(5).expect("LED");
        assert_eq!(led.label, "D1");
        assert_eq!(led.rotation.degrees(), 90);
        assert_eq!(loaded.instances.get(1).expect("R").label, "Resistor");
        // Zähler nie unter vergebene IDs
        assert_eq!(loaded.instances.next_id(), 6);
        assert_eq!(loaded.wires.next_id(), 4);
        assert!(loaded.wires.broken_wires(&loaded.instances).is_empty());
    }

    #[test]
    fn unknown_component_is_rejected() {
        let json = MINIMAL.replace("\"led\"", "\"transistor\"");
        let err = parse_schematic(&json, &ComponentLibrary::builtin()).expect_err("Fehler");
        assert!(err.to_string().contains("transistor"));
    }

    #[test]
    fn wire_with_single_waypoint_is_rejected() {
        let json = MINIMAL.replace("[[160.0, 40.0], [400.0, -40.0]]", "[[160.0, 40.0]]");
        let err = parse_schematic(&json, &ComponentLibrary::builtin()).expect_err("Fehler");
        assert!(err.to_string().contains("mindestens 2"));
    }

    #[test]
    fn out_of_range_ids_are_rejected() {
        let library = ComponentLibrary::builtin();
        let max = u64::MAX.to_string();

        let json = MINIMAL.replace("{\"id\": 5,", &format!("{{\"id\": {max},"));
        let err = parse_schematic(&json, &library).expect_err("Instanz-ID zu groß");
        assert!(err.to_string().contains("Instanz-ID"));

        let json = MINIMAL.replace("\"id\": 3,", &format!("\"id\": {max},"));
        let err = parse_schematic(&json, &library).expect_err("Wire-ID zu groß");
        assert!(err.to_string().contains("Wire-ID"));

        let json = MINIMAL.replace("\"next_wire_id\": 0", &format!("\"next_wire_id\": {max}"));
        assert!(parse_schematic(&json, &library).is_err());
    }

    #[test]
    fn invalid_json_reports_context() {
        let err = parse_schematic("{ nope", &ComponentLibrary::builtin()).expect_err("Fehler");
        assert!(err.to_string().contains("ungültig"));
    }
}
