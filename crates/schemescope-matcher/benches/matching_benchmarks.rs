//! Latency benchmarks for query resolution and autocomplete
//!
//! Run with: cargo bench -p schemescope-matcher

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use std::sync::Arc;

use schemescope_core::Catalog;
use schemescope_matcher::{Matcher, PredictionEngine, DEFAULT_PREDICTION_LIMIT, DEFAULT_SUGGESTION_LIMIT};

/// Benchmark each resolution rule, including the full miss path
fn benchmark_resolve(c: &mut Criterion) {
    let matcher = Matcher::new(Arc::new(Catalog::bundled()));

    let test_cases = vec![
        ("exact", "Pradhan Mantri Awas Yojana (PMAY)"),
        ("abbreviation", "pmay"),
        ("base_name", "national health mission"),
        ("substring", "ayushman"),
        ("miss", "interplanetary housing grant"),
    ];

    let mut group = c.benchmark_group("Matcher_Resolve");
    group.sample_size(100);

    for (name, query) in test_cases {
        group.bench_with_input(BenchmarkId::new("resolve", name), &query, |b, query| {
            b.iter(|| matcher.resolve(black_box(query)).ok());
        });
    }

    group.finish();
}

/// Benchmark suggestion and prediction scans
fn benchmark_suggest_and_predict(c: &mut Criterion) {
    let catalog = Arc::new(Catalog::bundled());
    let matcher = Matcher::new(catalog.clone());
    let engine = PredictionEngine::new(catalog);

    let mut group = c.benchmark_group("Matcher_Scan");
    group.sample_size(100);

    group.bench_function("suggest_two_words", |b| {
        b.iter(|| matcher.suggest(black_box("kisan samman"), DEFAULT_SUGGESTION_LIMIT));
    });

    group.bench_function("predict_prefix", |b| {
        b.iter(|| engine.predict(black_box("pra"), DEFAULT_PREDICTION_LIMIT));
    });

    group.finish();
}

criterion_group!(benches, benchmark_resolve, benchmark_suggest_and_predict);
criterion_main!(benches);
