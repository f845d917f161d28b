//! Builder für Render-Szenen aus dem Editor-Zustand.

use crate::app::use_cases::wiring::resolve;
use crate::app::SchematicEditor;
use crate::shared::{ComponentBox, RenderScene, WirePath};

/// Baut eine RenderScene aus dem aktuellen Editor-Zustand.
pub fn build(editor: &SchematicEditor, viewport_size: [f32; 2]) -> RenderScene {
    let grid_size = editor.options.grid_size;

    let components = editor
        .instances
        .iter()
        .map(|instance| {
            let bounds = instance.bounds(grid_size);
            let pins = instance
                .def
                .endpoints
                .iter()
                .filter_map(|ep| {
                    instance
                        .resolve_endpoint(&ep.id, grid_size)
                        .map(|resolved| (ep.id.clone(), resolved.position))
                })
                .collect();
            ComponentBox {
                instance_id: instance.id,
                component_id: instance.def.id.clone(),
                label: instance.label.clone(),
                origin: bounds.origin,
                size: bounds.size,
                rotation: instance.rotation,
                flip_x: instance.flip_x,
                flip_y: instance.flip_y,
                selected: editor.selection.instance_ids.contains(&instance.id),
                pins,
            }
        })
        .collect();

    let wires = editor
        .wires
        .iter()
        .map(|wire| WirePath {
            wire_id: wire.id,
            points: wire.waypoints.clone(),
            selected: editor.selection.wire_ids.contains(&wire.id),
            broken: editor.wires.health(wire, &editor.instances).is_broken(),
        })
        .collect();

    let highlighted_endpoint = editor
        .session
        .highlighted_endpoint()
        .and_then(|ep| resolve(editor, ep.instance_id, &ep.endpoint_id))
        .map(|resolved| resolved.position);

    RenderScene {
        grid: editor.view.grid.clone(),
        grid_spacing: editor.view.grid.grid_display_spacing(),
        viewport_size,
        components,
        wires,
        junctions: editor.wires.junction_markers().to_vec(),
        preview_path: editor.session.preview_path(),
        waypoint_markers: editor.session.waypoints().to_vec(),
        highlighted_endpoint,
        status_message: editor.ui.status_message.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::build;
    use crate::app::SchematicEditor;
    use glam::{IVec2, Vec2};
    use std::sync::Arc;

    #[test]
    fn build_marks_selected_and_broken_wires() {
        let mut editor = SchematicEditor::new();
        let def = editor.library.get("resistor").expect("resistor");
        let store = Arc::make_mut(&mut editor.instances);
        let a = store.place(def.clone(), IVec2::new(0, 0));
        let b = store.place(def, IVec2::new(4, 0));
        editor.start_wire(a, "right");
        let wire = editor.complete_wire(b, "left").expect("Wire");
        editor.select_wire(wire, false);
        Arc::make_mut(&mut editor.instances).remove(b);

        let scene = build(&editor, [1280.0, 720.0]);
        assert_eq!(scene.components.len(), 1);
        let path = scene.wire(wire).expect("Wire in Szene");
        assert!(path.selected);
        assert!(path.broken);
        assert!(scene.preview_path.is_empty());
        assert_eq!(scene.highlighted_endpoint, None);
    }

    #[test]
    fn build_contains_session_preview() {
        let mut editor = SchematicEditor::new();
        let def = editor.library.get("resistor").expect("resistor");
        let a = Arc::make_mut(&mut editor.instances).place(def, IVec2::new(0, 0));
        editor.start_wire(a, "right");
        editor.update_cursor(Vec2::new(400.0, 100.0));

        let scene = build(&editor, [800.0, 600.0]);
        assert_eq!(scene.highlighted_endpoint, Some(Vec2::new(160.0, 40.0)));
        assert_eq!(scene.waypoint_markers, vec![Vec2::new(160.0, 40.0)]);
        // Cursor (400,80) gesnappt, 90°-Projektion horizontal
        assert_eq!(
            scene.preview_path,
            vec![Vec2::new(160.0, 40.0), Vec2::new(400.0, 40.0)]
        );
        let pins = &scene.components[0].pins;
        assert_eq!(pins.len(), 2);
    }
}
