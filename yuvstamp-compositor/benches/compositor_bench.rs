//! Benchmarks for yuvstamp-compositor
//!
//! Measures colorspace conversion and overlay stamping throughput.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use yuvstamp_bitmap::RgbImage;
use yuvstamp_compositor::{overlay_centered, rgb_to_planar420};
use yuvstamp_video::{FrameGeometry, PlanarFrame};

fn solid_image(size: u32) -> RgbImage {
    let stride = (size as usize * 3 + 3) & !3;
    RgbImage::from_raw(size, size, stride, vec![0x5A; stride * size as usize])
}

fn bench_rgb_to_planar420(c: &mut Criterion) {
    let mut group = c.benchmark_group("rgb_to_planar420");

    for size in [64u32, 256, 512].iter() {
        let image = solid_image(*size);

        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, _| {
            b.iter(|| {
                let frame = rgb_to_planar420(black_box(&image)).unwrap();
                black_box(frame);
            });
        });
    }

    group.finish();
}

fn bench_overlay_centered(c: &mut Criterion) {
    let mut group = c.benchmark_group("overlay_centered");

    for size in [128u32, 256, 512].iter() {
        let mut frame = PlanarFrame::new(FrameGeometry::new(1920, 1080).unwrap());
        let overlay = PlanarFrame::new(FrameGeometry::new(*size, *size).unwrap());

        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, _| {
            b.iter(|| {
                overlay_centered(black_box(&mut frame), black_box(&overlay)).unwrap();
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_rgb_to_planar420, bench_overlay_centered);
criterion_main!(benches);
