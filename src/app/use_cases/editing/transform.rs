//! Use-Case: Bauteile verschieben, drehen und spiegeln.
//!
//! Nach jeder Änderung werden die angeschlossenen Wires nachgeführt.

use crate::app::use_cases::reroute::reroute_wires_of_instances;
use crate::app::SchematicEditor;
use crate::core::InstanceStore;
use glam::IVec2;
use std::sync::Arc;

/// Verschiebt ein Bauteil an eine Grid-Position.
///
/// `false`, wenn die Instanz fehlt oder die Position unverändert ist.
pub fn move_instance(editor: &mut SchematicEditor, instance_id: u64, grid_pos: IVec2) -> bool {
    match editor.instances.get(instance_id) {
        Some(instance) if instance.grid_pos != grid_pos => {}
        _ => return false,
    }
    editor.record_undo_snapshot();
    Arc::make_mut(&mut editor.instances).move_to(instance_id, grid_pos);
    let rerouted = reroute_wires_of_instances(editor, &[instance_id]);
    log::debug!("Instanz {instance_id} nach {grid_pos} verschoben, {rerouted} Wires nachgeführt");
    true
}

/// Verschiebt alle selektierten Bauteile um `delta` Grid-Zellen.
pub fn move_selected_by(editor: &mut SchematicEditor, delta: IVec2) -> usize {
    if delta == IVec2::ZERO {
        return 0;
    }
    apply_to_selected(editor, "verschoben", |store, id| {
        let Some(pos) = store.get(id).map(|inst| inst.grid_pos) else {
            return false;
        };
        store.move_to(id, pos + delta)
    })
}

/// Dreht alle selektierten Bauteile um 90° im Uhrzeigersinn.
pub fn rotate_selected(editor: &mut SchematicEditor) -> usize {
    apply_to_selected(editor, "gedreht", InstanceStore::rotate_cw)
}

/// Spiegelt alle selektierten Bauteile horizontal.
pub fn flip_selected(editor: &mut SchematicEditor) -> usize {
    apply_to_selected(editor, "gespiegelt", InstanceStore::flip)
}

fn apply_to_selected(
    editor: &mut SchematicEditor,
    verb: &str,
    mut op: impl FnMut(&mut InstanceStore, u64) -> bool,
) -> usize {
    let ids: Vec<u64> = editor
        .selection
        .instance_ids
        .iter()
        .copied()
        .filter(|id| editor.instances.contains(*id))
        .collect();
    if ids.is_empty() {
        log::debug!("Keine Bauteile selektiert");
        return 0;
    }

    // Snapshot VOR Mutation
    editor.record_undo_snapshot();
    let store = Arc::make_mut(&mut editor.instances);
    let changed: Vec<u64> = ids.into_iter().filter(|&id| op(store, id)).collect();
    let rerouted = reroute_wires_of_instances(editor, &changed);
    log::info!(
        "{} Bauteile {verb}, {rerouted} Wires nachgeführt",
        changed.len()
    );
    changed.len()
}
