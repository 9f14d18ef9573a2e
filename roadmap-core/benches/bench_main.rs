use std::hint::black_box;

use criterion::{Criterion, criterion_group, criterion_main};
use geo::Point;
use roadmap_core::prelude::*;

fn grid(side: i64) -> RoadGraph {
    let mut builder = RoadGraphBuilder::with_capacity((side * side) as usize, (side * side * 4) as usize);
    for y in 0..side {
        for x in 0..side {
            builder
                .add_intersection(y * side + x, Point::new(x as f64, y as f64))
                .unwrap();
        }
    }
    let road = builder.add_road(Road::new(1, "Grid Street")).unwrap();
    for y in 0..side {
        for x in 0..side {
            let id = y * side + x;
            let length = 1.0 + ((x + y) % 3) as f64 * 0.2;
            if x + 1 < side {
                builder.add_two_way_segment(road, id, id + 1, length, None).unwrap();
            }
            if y + 1 < side {
                builder.add_two_way_segment(road, id, id + side, length, None).unwrap();
            }
        }
    }
    builder.build()
}

fn bench_find_path(c: &mut Criterion) {
    let graph = grid(200);
    let start = graph.node_index(0).unwrap();
    let goal = graph.node_index(200 * 200 - 1).unwrap();
    let mut scratch = SearchScratch::for_graph(&graph);

    let mut group = c.benchmark_group("find_path");
    for heuristic in [Heuristic::Manhattan, Heuristic::Euclidean, Heuristic::Zero] {
        group.bench_function(format!("{heuristic:?}"), |b| {
            b.iter(|| {
                find_path_with(
                    black_box(&graph),
                    &mut scratch,
                    black_box(start),
                    black_box(goal),
                    heuristic,
                )
                .unwrap()
            });
        });
    }
    group.finish();
}

fn bench_articulation(c: &mut Criterion) {
    let graph = grid(200);
    let root = graph.node_index(0).unwrap();
    let mut scratch = SearchScratch::for_graph(&graph);

    c.bench_function("articulation_points", |b| {
        b.iter(|| find_articulation_points_with(black_box(&graph), &mut scratch, root).unwrap());
    });
}

criterion_group!(benches, bench_find_path, bench_articulation);
criterion_main!(benches);
