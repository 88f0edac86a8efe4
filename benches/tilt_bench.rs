//! Micro-benchmarks for the pointer-to-tilt hot path.

// criterion builders return `&mut Self` for chaining
#![allow(missing_docs, unused_results)]

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use glam::Vec2;
use viso_tilt::{compute_tilt, Rect, Tilt};

fn compute_tilt_benchmark(c: &mut Criterion) {
    let rect = Rect::new(120.0, 80.0, 320.0, 200.0);
    c.bench_function("compute_tilt", |b| {
        b.iter(|| {
            black_box(compute_tilt(
                black_box(Vec2::new(250.0, 140.0)),
                black_box(&rect),
                black_box(10.0),
            ))
        })
    });
}

fn pointer_sweep_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("pointer_sweep");

    for count in [10, 100, 1000].iter() {
        let rect = Rect::new(0.0, 0.0, 320.0, 200.0);
        let points: Vec<Vec2> = (0..*count)
            .map(|i| {
                let t = i as f32 / *count as f32;
                Vec2::new(t * 320.0, (1.0 - t) * 200.0)
            })
            .collect();

        group.bench_with_input(
            format!("{count}_moves"),
            &points,
            |b, points| {
                b.iter(|| {
                    for p in points {
                        let _ = black_box(compute_tilt(*p, &rect, 10.0));
                    }
                })
            },
        );
    }

    group.finish();
}

fn css_transform_benchmark(c: &mut Criterion) {
    let tilt = Tilt::new(-4.375, 7.25);
    c.bench_function("css_transform", |b| {
        b.iter(|| black_box(black_box(tilt).to_css_transform()))
    });
}

criterion_group!(
    benches,
    compute_tilt_benchmark,
    pointer_sweep_benchmark,
    css_transform_benchmark
);
criterion_main!(benches);
