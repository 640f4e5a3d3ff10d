//! Criterion microbenches for the template generators and flattening.
//!
//! - build: one representative template per family.
//! - flatten: tree evaluation of the densest catalogue boards.
//!
//! Results live under `target/criterion`.

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use stringart::geom::flatten;
use stringart::patterns::{
    CircleParams, ConcentricParams, FlowerParams, PatternSpec, PolygonParams, SquarePlusParams,
    StarParams,
};

fn families() -> Vec<(&'static str, PatternSpec)> {
    vec![
        ("circle80", PatternSpec::Circle(CircleParams::new(80.0, 80))),
        (
            "concentric",
            PatternSpec::Concentric(ConcentricParams::new(45.0, 36, 18)),
        ),
        ("polygon6", PatternSpec::Polygon(PolygonParams::new(6, 45.0, 10))),
        ("star8", PatternSpec::Star(StarParams::new(45.0, 8, 10))),
        ("flower8", PatternSpec::Flower(FlowerParams::new(45.0, 8, 10))),
        (
            "square_plus",
            PatternSpec::SquarePlus(SquarePlusParams::new(80.0, 5)),
        ),
    ]
}

fn bench_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("build");
    for (name, spec) in families() {
        group.bench_with_input(BenchmarkId::new("pattern", name), &spec, |b, spec| {
            b.iter(|| spec.build().unwrap())
        });
    }
    group.finish();
}

fn bench_flatten(c: &mut Criterion) {
    let mut group = c.benchmark_group("flatten");
    for (name, spec) in families() {
        let shape = spec.build().unwrap();
        group.bench_with_input(BenchmarkId::new("tree", name), &shape, |b, shape| {
            b.iter(|| flatten(shape))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_build, bench_flatten);
criterion_main!(benches);
