//! Benchmarks for the per-cycle pipeline
//!
//! Run with: cargo bench --package airnode-core

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};

use airnode_core::{
    analysis::{air_quality_score, Forecaster},
    CyclePipeline, NodeConfig, SensorSample,
};

/// Slowly varying room air with occasional jumps
fn create_series(n: usize) -> Vec<SensorSample> {
    (0..n)
        .map(|i| {
            let drift = 150.0 * ((i as f32) * 0.05).sin();
            let jump = if i % 97 == 0 { 80.0 } else { 0.0 };
            SensorSample::empty(i as u64 * 10_000)
                .with_climate(21.0 + 0.01 * i as f32 % 2.0, 40.0, 1013.0)
                .with_gas(600.0 + drift + jump, 80.0 + drift / 5.0)
        })
        .collect()
}

/// One full cycle against a warmed-up pipeline
fn bench_run_cycle(c: &mut Criterion) {
    let series = create_series(1_000);
    let mut pipeline = CyclePipeline::new(NodeConfig::default()).unwrap();
    for sample in &series[..100] {
        pipeline.run_cycle(*sample);
    }

    let mut group = c.benchmark_group("Cycle");
    group.throughput(Throughput::Elements(1));

    let mut i = 0;
    group.bench_function("run_cycle", |b| {
        b.iter(|| {
            i = (i + 1) % series.len();
            pipeline.run_cycle(black_box(series[i]))
        });
    });

    group.bench_function("cold_series_1000", |b| {
        b.iter(|| {
            let mut p = CyclePipeline::new(NodeConfig::default()).unwrap();
            for sample in &series {
                black_box(p.run_cycle(*sample));
            }
        });
    });

    group.finish();
}

fn bench_primitives(c: &mut Criterion) {
    let mut group = c.benchmark_group("Primitives");

    let mut forecaster = Forecaster::default();
    let mut x = 400.0f32;
    group.bench_function("forecaster_update", |b| {
        b.iter(|| {
            x += 0.5;
            forecaster.update(black_box(x));
            forecaster.predict(360)
        });
    });

    group.bench_function("air_quality_score", |b| {
        b.iter(|| air_quality_score(black_box(1_100.0), black_box(420.0)));
    });

    group.finish();
}

criterion_group!(benches, bench_run_cycle, bench_primitives);
criterion_main!(benches);
