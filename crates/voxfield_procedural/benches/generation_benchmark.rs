//! Benchmark for full world generation (fill + extraction).
//!
//! Run with: cargo bench --package voxfield_procedural --bench generation_benchmark

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use voxfield_procedural::{
    generate, GenerationParams, InstanceExtractor, TerrainGenerator, VoxelGrid, WorldSize,
};

fn benchmark_generate(c: &mut Criterion) {
    let params = GenerationParams::default();
    let mut group = c.benchmark_group("generate");

    for (width, height) in [(32, 16), (64, 32), (128, 64)] {
        let size = WorldSize::new(width, height);
        group.throughput(Throughput::Elements((width * width * height) as u64));
        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{width}x{height}x{width}")),
            &size,
            |b, &size| b.iter(|| black_box(generate(size, &params))),
        );
    }

    group.finish();
}

fn benchmark_extract_only(c: &mut Criterion) {
    let mut grid = VoxelGrid::new(64, 32).expect("valid dimensions");
    TerrainGenerator::new(&GenerationParams::default()).fill(&mut grid);

    c.bench_function("extract_64x32x64", |b| {
        b.iter(|| black_box(InstanceExtractor::extract(&mut grid)));
    });
}

criterion_group!(benches, benchmark_generate, benchmark_extract_only);
criterion_main!(benches);
