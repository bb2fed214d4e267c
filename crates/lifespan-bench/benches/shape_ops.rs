//! Criterion micro-benchmarks for shape area dispatch and formatting.

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};
use lifespan_bench::mixed_shapes;
use lifespan_shape::{area_line, format_general, Rectangle, Shape};

/// Benchmark: Sum areas of 10K shapes through `dyn Shape`.
fn bench_dyn_area_10k(c: &mut Criterion) {
    let shapes = mixed_shapes(10_000);

    c.bench_function("dyn_area_10k", |b| {
        b.iter(|| {
            let total: f32 = shapes.iter().map(|s| s.area()).sum();
            black_box(total);
        });
    });
}

/// Benchmark: Sum areas of 10K rectangles with static dispatch, for comparison.
fn bench_static_area_10k(c: &mut Criterion) {
    let rects: Vec<Rectangle> = (0..10_000)
        .map(|i| Rectangle::new((i % 17) as f32 + 1.0, 2.0))
        .collect();

    c.bench_function("static_area_10k", |b| {
        b.iter(|| {
            let total: f32 = rects.iter().map(|r| r.area()).sum();
            black_box(total);
        });
    });
}

/// Benchmark: Format area values in general notation.
fn bench_format_general(c: &mut Criterion) {
    c.bench_function("format_general_1k", |b| {
        b.iter(|| {
            for i in 0..1_000u32 {
                black_box(format_general(black_box(i as f32 * 2.5 + 0.125)));
            }
        });
    });
}

/// Benchmark: Render report lines for 1K shapes.
fn bench_area_lines(c: &mut Criterion) {
    let shapes = mixed_shapes(1_000);

    c.bench_function("area_lines_1k", |b| {
        b.iter(|| {
            for shape in &shapes {
                black_box(area_line(shape.as_ref()));
            }
        });
    });
}

criterion_group!(
    benches,
    bench_dyn_area_10k,
    bench_static_area_10k,
    bench_format_general,
    bench_area_lines
);
criterion_main!(benches);
