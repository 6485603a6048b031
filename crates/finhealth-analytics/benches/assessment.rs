//! Benchmarks for the assessment pipeline.
//!
//! Run with: cargo bench -p finhealth-analytics

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use finhealth_analytics::{calculate_ratios, score_components, AssessmentEngine, EngineConfig};
use finhealth_core::FinancialSnapshot;

// =============================================================================
// TEST DATA GENERATORS
// =============================================================================

fn create_snapshot(id: usize) -> FinancialSnapshot {
    let industries = ["Retail", "Manufacturing", "Services", "Hospitality"];
    let scale = 1.0 + (id % 17) as f64 * 0.25;

    FinancialSnapshot::builder()
        .business_name(format!("Business {id:05}"))
        .industry(industries[id % industries.len()])
        .region("Maharashtra")
        .language(if id % 3 == 0 { "hi" } else { "en" })
        .revenue(1_250_000.0 * scale)
        .prior_revenue(1_180_000.0 * (1.0 + (id % 5) as f64 * 0.1))
        .expenses(860_000.0 * scale)
        .cogs(620_000.0 * scale)
        .receivables(180_000.0)
        .payables(140_000.0 + (id % 7) as f64 * 20_000.0)
        .inventory(220_000.0)
        .debt(350_000.0 * (id % 4) as f64)
        .cash_on_hand(90_000.0)
        .monthly_burn(25_000.0)
        .tax_liability(52_000.0)
        .deductions(18_000.0)
        .build()
        .expect("benchmark snapshot is valid")
}

fn create_batch(size: usize) -> Vec<FinancialSnapshot> {
    (0..size).map(create_snapshot).collect()
}

// =============================================================================
// SINGLE ASSESSMENT
// =============================================================================

fn bench_single(c: &mut Criterion) {
    let mut group = c.benchmark_group("single");
    let engine = AssessmentEngine::default();
    let snapshot = create_snapshot(1);

    group.bench_function("ratios", |b| b.iter(|| calculate_ratios(black_box(&snapshot))));

    let ratios = calculate_ratios(&snapshot).rounded();
    group.bench_function("score_components", |b| {
        b.iter(|| score_components(black_box(&ratios)))
    });

    group.bench_function("assess", |b| b.iter(|| engine.assess(black_box(&snapshot))));

    group.finish();
}

// =============================================================================
// BATCH ASSESSMENT
// =============================================================================

fn bench_batch(c: &mut Criterion) {
    let mut group = c.benchmark_group("batch");
    let sequential = AssessmentEngine::new(EngineConfig::sequential());
    let parallel = AssessmentEngine::new(EngineConfig::new().with_threshold(1));

    for size in [10, 100, 1_000] {
        let batch = create_batch(size);
        group.throughput(Throughput::Elements(size as u64));

        group.bench_with_input(BenchmarkId::new("sequential", size), &batch, |b, batch| {
            b.iter(|| sequential.assess_batch(black_box(batch)))
        });
        group.bench_with_input(BenchmarkId::new("parallel", size), &batch, |b, batch| {
            b.iter(|| parallel.assess_batch(black_box(batch)))
        });
    }

    group.finish();
}

// =============================================================================
// CRITERION GROUPS
// =============================================================================

criterion_group!(benches, bench_single, bench_batch);
criterion_main!(benches);
