//! Use-Case: Selektierte Bauteile löschen.

use crate::app::SchematicEditor;
use crate::shared::options::DanglingWirePolicy;
use indexmap::IndexSet;
use std::sync::Arc;

/// Löscht alle selektierten Bauteile.
///
/// `Detach`: angeschlossene Wires bleiben und gelten als defekt.
/// `CascadeDelete`: angeschlossene Wires und (transitiv) ihre
/// Junction-Abhängigen werden mitgelöscht.
pub fn delete_selected_instances(editor: &mut SchematicEditor) -> usize {
    if editor.selection.instance_ids.is_empty() {
        log::debug!("Nichts zum Löschen selektiert");
        return 0;
    }

    // Snapshot VOR Mutation
    editor.record_undo_snapshot();

    let ids: Vec<u64> = editor.selection.instance_ids.iter().copied().collect();
    let attached: IndexSet<u64> = ids
        .iter()
        .flat_map(|&id| editor.wires.attached_to_instance(id))
        .collect();

    let store = Arc::make_mut(&mut editor.instances);
    let removed = ids.iter().filter(|&&id| store.remove(id).is_some()).count();

    let removed_wires = match editor.options.dangling_wires {
        DanglingWirePolicy::Detach => {
            if !attached.is_empty() {
                log::info!("{} Wires verlieren ihr Bauteil", attached.len());
            }
            0
        }
        DanglingWirePolicy::CascadeDelete => {
            let attached: Vec<u64> = attached.into_iter().collect();
            let closure = editor.wires.cascade_closure(&attached);
            Arc::make_mut(&mut editor.wires).remove_wires(&closure).len()
        }
    };

    editor.selection.clear();
    editor.ui.status_message = Some(if removed_wires > 0 {
        format!("Deleted {removed} component(s) and {removed_wires} wire(s)")
    } else {
        format!("Deleted {removed} component(s)")
    });
    log::info!("{removed} Bauteile gelöscht, {removed_wires} Wires mitgelöscht");
    removed
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{BrokenReason, WireHealth};
    use glam::{IVec2, Vec2};

    /// R1 -w1- R2, Ground -w2-> Junction auf w1
    fn editor_with_junction() -> (SchematicEditor, u64, u64, u64) {
        let mut editor = SchematicEditor::new();
        let res = editor.library.get("resistor").expect("resistor");
        let gnd = editor.library.get("ground").expect("ground");
        let store = Arc::make_mut(&mut editor.instances);
        let a = store.place(res.clone(), IVec2::new(0, 0));
        let b = store.place(res, IVec2::new(4, 0));
        let g = store.place(gnd, IVec2::new(3, 3));

        editor.start_wire(a, "right");
        let w1 = editor.complete_wire(b, "left").expect("w1");
        editor.start_wire(g, "top");
        let w2 = editor
            .connect_to_wire(w1, Vec2::new(240.0, 40.0))
            .expect("w2");
        (editor, b, w1, w2)
    }

    #[test]
    fn detach_keeps_wires_as_broken() {
        let (mut editor, b, w1, w2) = editor_with_junction();
        editor.selection.select_instance(b, false);
        assert_eq!(delete_selected_instances(&mut editor), 1);

        assert_eq!(editor.wires.len(), 2);
        let wire = editor.wires.get(w1).expect("w1");
        assert_eq!(
            editor.wires.health(wire, &editor.instances),
            WireHealth::Broken(BrokenReason::MissingInstance(b))
        );
        assert!(editor.wires.contains(w2));
    }

    #[test]
    fn cascade_removes_attached_and_junction_dependents() {
        let (mut editor, b, _, _) = editor_with_junction();
        editor.options.dangling_wires = DanglingWirePolicy::CascadeDelete;
        editor.selection.select_instance(b, false);
        delete_selected_instances(&mut editor);

        assert!(editor.wires.is_empty());
        assert!(editor.wires.junction_markers().is_empty());
        assert_eq!(
            editor.ui.status_message.as_deref(),
            Some("Deleted 1 component(s) and 2 wire(s)")
        );
    }
}
