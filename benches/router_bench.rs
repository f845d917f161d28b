use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use glam::{IVec2, Vec2};
use schematic_wire_editor::app::use_cases::reroute::reroute_all;
use schematic_wire_editor::core::collect_obstacles;
use schematic_wire_editor::{
    Direction, InstanceStore, ManhattanRouter, RouterConfig, SchematicEditor,
};
use std::hint::black_box;
use std::sync::Arc;

/// Raster aus Widerständen mit drei Zellen Abstand.
fn build_component_grid(editor: &mut SchematicEditor, columns: i32, rows: i32) -> Vec<u64> {
    let Some(def) = editor.library.get("resistor") else {
        return Vec::new();
    };
    let store = Arc::make_mut(&mut editor.instances);
    (0..rows)
        .flat_map(|row| (0..columns).map(move |col| IVec2::new(col * 5, row * 3)))
        .map(|pos| store.place(def.clone(), pos))
        .collect()
}

fn bench_route_single(c: &mut Criterion) {
    let router = ManhattanRouter::new(RouterConfig::default());

    c.bench_function("route_free_elbow", |b| {
        b.iter(|| {
            let path = router.route(
                black_box(Vec2::new(0.0, 40.0)),
                black_box(Vec2::new(800.0, 520.0)),
                Some(Direction::Right),
                Some(Direction::Left),
                &[],
            );
            black_box(path.len())
        })
    });
}

fn bench_route_with_obstacles(c: &mut Criterion) {
    let mut group = c.benchmark_group("route_obstacles");

    for &side in &[5i32, 20, 40] {
        let mut editor = SchematicEditor::new();
        build_component_grid(&mut editor, side, side);
        let obstacles = collect_obstacles(&editor.instances, editor.options.grid_size);
        let router = editor.router();
        let far = Vec2::new(side as f32 * 400.0, side as f32 * 240.0);

        group.bench_with_input(
            BenchmarkId::new("diagonal", obstacles.len()),
            &obstacles,
            |b, obstacles| {
                b.iter(|| {
                    let path = router.route(
                        black_box(Vec2::new(160.0, 40.0)),
                        black_box(far),
                        Some(Direction::Right),
                        Some(Direction::Left),
                        obstacles,
                    );
                    black_box(path.len())
                })
            },
        );
    }

    group.finish();
}

fn bench_reroute_all(c: &mut Criterion) {
    let mut group = c.benchmark_group("reroute_all");

    for &side in &[5i32, 15] {
        let mut editor = SchematicEditor::new();
        let ids = build_component_grid(&mut editor, side, side);
        for pair in ids.windows(2) {
            editor.start_wire(pair[0], "right");
            editor.complete_wire(pair[1], "left");
        }
        let wire_count = editor.wire_count();

        group.bench_function(BenchmarkId::new("wires", wire_count), |b| {
            b.iter(|| {
                // Verschieben erzwingt echte Neuberechnung
                let instances: &mut InstanceStore = Arc::make_mut(&mut editor.instances);
                if let Some(&first) = ids.first() {
                    let pos = instances.get(first).map(|i| i.grid_pos).unwrap_or_default();
                    instances.move_to(first, IVec2::new(pos.x, -pos.y - 1));
                }
                black_box(reroute_all(&mut editor))
            })
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_route_single,
    bench_route_with_obstacles,
    bench_reroute_all
);
criterion_main!(benches);
