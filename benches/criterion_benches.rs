#[macro_use]
extern crate criterion;

use criterion::{Benchmark, Criterion};

use sokoban_search::config::Strategy;
use sokoban_search::{LoadLevel, Solve};

// allowing unused so i can bench just one or few
// and still notice other warnings if there are any
#[allow(unused)]
fn bench_two_boxes_bfs(c: &mut Criterion) {
    bench_level(c, Strategy::Bfs, "levels/04-two-boxes.txt", 50);
}

#[allow(unused)]
fn bench_two_boxes_ucs(c: &mut Criterion) {
    bench_level(c, Strategy::Ucs, "levels/04-two-boxes.txt", 50);
}

#[allow(unused)]
fn bench_two_boxes_a_star(c: &mut Criterion) {
    bench_level(c, Strategy::AStar, "levels/04-two-boxes.txt", 100);
}

#[allow(unused)]
fn bench_long_way_a_star(c: &mut Criterion) {
    // single corridor, mostly measures per-state overhead
    bench_level(c, Strategy::AStar, "levels/03-long-way.txt", 100);
}

fn bench_level(c: &mut Criterion, strategy: Strategy, level_path: &str, samples: usize) {
    let level = level_path.load_level().unwrap();

    c.bench(
        &format!("{}", strategy),
        Benchmark::new(level_path, move |b| {
            b.iter(|| {
                criterion::black_box(
                    level.solve(criterion::black_box(strategy), criterion::black_box(false)),
                )
            })
        })
        .sample_size(samples),
    );
}

criterion_group!(
    benches,
    bench_two_boxes_bfs,
    bench_two_boxes_ucs,
    bench_two_boxes_a_star,
    bench_long_way_a_star,
);
criterion_main!(benches);
