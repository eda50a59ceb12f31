//! Criterion benchmarks for bar layouts on random star outlines.
//! Focus sizes: vertex count in {8, 32, 128}; both layout modes.
//! Results: by default under target/criterion; to store under data/bench, run:
//!   CARGO_TARGET_DIR=data/bench cargo bench -p barsplit

use barsplit::geom::rand::{draw_star_contour, ReplayToken, StarCfg, VertexCount};
use barsplit::prelude::*;
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};

fn star(n: usize, seed: u64) -> Shape {
    let cfg = StarCfg {
        vertex_count: VertexCount::Fixed(n),
        ..StarCfg::default()
    };
    Shape::new(vec![draw_star_contour(cfg, ReplayToken { seed, index: 0 })])
}

fn bench_layout(c: &mut Criterion) {
    let mut group = c.benchmark_group("layout");
    for &n in &[8usize, 32, 128] {
        let shape = star(n, 43);
        group.bench_with_input(BenchmarkId::new("scanline", n), &shape, |b, s| {
            let layout = BarLayout::with_config(LayoutConfig::default());
            b.iter(|| layout.layout(s, 300.0))
        });
        group.bench_with_input(BenchmarkId::new("fit_contour", n), &shape, |b, s| {
            let layout = BarLayout::with_config(LayoutConfig {
                fit_contour: true,
                ..LayoutConfig::default()
            });
            b.iter(|| layout.layout(s, 300.0))
        });
    }
    group.finish();
}

fn bench_membership(c: &mut Criterion) {
    let mut group = c.benchmark_group("membership");
    for &n in &[8usize, 32, 128] {
        let shape = star(n, 44);
        group.bench_with_input(BenchmarkId::new("midline_scan", n), &shape, |b, s| {
            let m = RegionMembership::new(s, WindingRule::NonZero);
            b.iter(|| barsplit::bands::scanline::intervals(&m, 150.0, 0.0, 300.0, 0.4, 0.4))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_layout, bench_membership);
criterion_main!(benches);
