use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};
use field::{fbm, DistanceField};
use glam::Vec3;

fn bench_fbm(c: &mut Criterion) {
    c.bench_function("fbm_eval", |b| {
        b.iter(|| fbm(black_box(Vec3::new(0.3, 1.7, -2.2))))
    });
}

fn bench_sdf(c: &mut Criterion) {
    let field = DistanceField::new(1.5, 1.0);
    c.bench_function("sdf_eval", |b| {
        b.iter(|| field.eval(black_box(Vec3::new(0.2, -1.1, 2.4)), black_box(0.5)))
    });
}

criterion_group!(benches, bench_fbm, bench_sdf);
criterion_main!(benches);
