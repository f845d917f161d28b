//! Writer für Schaltplan-Dokumente (JSON).

use super::document::{InstanceRecord, SchematicDocument, DOCUMENT_VERSION};
use crate::core::{InstanceStore, WireStore};
use anyhow::{Context, Result};

/// Schreibt Instanzen und Wires als formatiertes JSON-Dokument.
pub fn write_schematic(name: &str, instances: &InstanceStore, wires: &WireStore) -> Result<String> {
    let document = SchematicDocument {
        version: DOCUMENT_VERSION,
        name: name.to_string(),
        instances: instances.iter().map(InstanceRecord::from).collect(),
        wires: wires.iter().cloned().collect(),
        junctions: wires.junction_markers().to_vec(),
        next_instance_id: instances.next_id(),
        next_wire_id: wires.next_id(),
    };
    serde_json::to_string_pretty(&document).context("Schaltplan konnte nicht serialisiert werden")
}
