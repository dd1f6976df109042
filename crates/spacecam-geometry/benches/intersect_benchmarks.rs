//! Benchmarks for the per-sample intersection routines.

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use spacecam_geometry::*;
use spacecam_math::Vector3;

const R: f64 = 6371.0;

fn camera() -> Vector3 {
    Vector3::new(R + 8800.0, 0.0, 0.0)
}

fn grazing_dir() -> Vector3 {
    Vector3::new(-1.0, 0.42, 0.05).normalize_or_zero()
}

fn bench_sphere_hit(c: &mut Criterion) {
    let origin = black_box(camera());
    let dir = black_box(-Vector3::X);
    c.bench_function("sphere_hit", |bencher| {
        bencher.iter(|| black_box(intersect_sphere_forward(origin, dir, R)))
    });
}

fn bench_sphere_miss(c: &mut Criterion) {
    let origin = black_box(camera());
    let dir = black_box(Vector3::Y);
    c.bench_function("sphere_miss", |bencher| {
        bencher.iter(|| black_box(intersect_sphere_forward(origin, dir, R)))
    });
}

fn bench_shadow_cylinder(c: &mut Criterion) {
    let origin = black_box(camera());
    let dir = black_box(grazing_dir());
    let axis = black_box(Vector3::new(0.3, -0.9, 0.1).normalize_or_zero());
    c.bench_function("half_cylinder", |bencher| {
        bencher.iter(|| black_box(intersect_half_cylinder_forward(origin, dir, axis, R)))
    });
}

fn bench_circle_overlap(c: &mut Criterion) {
    let r_sun = black_box(0.00465);
    let r_planet = black_box(0.4);
    let separation = black_box(0.402);
    c.bench_function("circle_overlap", |bencher| {
        bencher.iter(|| black_box(circle_overlap_area(r_sun, r_planet, separation)))
    });
}

criterion_group!(
    benches,
    bench_sphere_hit,
    bench_sphere_miss,
    bench_shadow_cylinder,
    bench_circle_overlap
);
criterion_main!(benches);
