//! Criterion benchmarks for the simulations and chart layout.
//!
//! Run with:
//!   cargo bench -p aion_core
//!
//! Results are saved to target/criterion/

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use aion_core::prelude::*;

/// Steady-state metric ticks with a full history window.
fn bench_metric_tick(c: &mut Criterion) {
    let mut group = c.benchmark_group("metric_tick");
    group.throughput(Throughput::Elements(1));

    group.bench_function("full_window", |b| {
        let mut engine = MetricEngine::seeded(42);
        engine.start();
        for _ in 0..200 {
            engine.tick();
        }
        b.iter(|| black_box(engine.tick()));
    });

    group.finish();
}

/// Layout cost against series length.
fn bench_chart_layout(c: &mut Criterion) {
    let mut group = c.benchmark_group("chart_layout");

    for len in [2usize, 25, 100].iter() {
        let mut engine = MetricEngine::seeded(7);
        engine.start();
        for _ in 0..*len {
            engine.tick();
        }
        let series = engine.pas_series();
        let viewport = Viewport::new(720.0, 256.0, 2.0);

        group.throughput(Throughput::Elements(*len as u64));
        group.bench_with_input(BenchmarkId::from_parameter(len), &series, |b, series| {
            b.iter(|| black_box(PasChart::layout(viewport, series)));
        });
    }

    group.finish();
}

/// One complete 7-phase run.
fn bench_pipeline_run(c: &mut Criterion) {
    c.bench_function("pipeline_full_run", |b| {
        let mut stepper = PipelineStepper::new();
        b.iter(|| {
            stepper.start();
            while let Some(advance) = stepper.tick() {
                black_box(advance);
            }
        });
    });
}

criterion_group!(benches, bench_metric_tick, bench_chart_layout, bench_pipeline_run);
criterion_main!(benches);
