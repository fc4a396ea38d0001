//! Benchmarks for decoding and compositing.

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use ninepatch_core::{Color, NinePatch, PixelBuffer};

/// A 34x34 patch with two stretch bands and one repeat band per axis.
fn generate_patch() -> PixelBuffer {
    let size = 34;
    let mut img = PixelBuffer::filled(size, size, Color::rgb(40, 80, 120));
    for i in 0..size {
        for edge in [(i, 0), (0, i), (size - 1, i), (i, size - 1)] {
            img.set_pixel(edge.0, edge.1, [0, 0, 0, 0]);
        }
    }
    img.set_pixel(size - 1, 0, [255, 0, 0, 255]);
    for i in (4..8).chain(24..28) {
        img.set_pixel(i, 0, [0, 0, 0, 255]);
        img.set_pixel(0, i, [0, 0, 0, 255]);
    }
    for i in 14..18 {
        img.set_pixel(i, 0, [255, 0, 0, 255]);
        img.set_pixel(0, i, [255, 0, 0, 255]);
    }
    img
}

fn bench_decode(c: &mut Criterion) {
    let img = generate_patch();
    c.bench_function("decode_34x34", |b| {
        b.iter(|| NinePatch::decode(&img).unwrap());
    });
}

fn bench_composite(c: &mut Criterion) {
    let img = generate_patch();
    let patch = NinePatch::decode(&img).unwrap();
    let mut group = c.benchmark_group("render_grid");
    for size in [64u32, 256, 1024] {
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, &size| {
            b.iter(|| patch.render_grid(size, size).unwrap());
        });
    }
    group.finish();
}

criterion_group!(benches, bench_decode, bench_composite);
criterion_main!(benches);
