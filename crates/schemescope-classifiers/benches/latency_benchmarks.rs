//! Latency benchmarks for classification and aggregation
//!
//! Run with: cargo bench -p schemescope-classifiers

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use schemescope_classifiers::{Classifier, SentimentAggregator, SentimentClassifier};
use schemescope_core::Comment;

/// Benchmark the lexicon classifier on typical comment lengths
fn benchmark_sentiment_classifier(c: &mut Criterion) {
    let classifier = SentimentClassifier::new();

    let test_cases = vec![
        ("short_neutral", "Does anyone know the eligibility criteria?"),
        ("short_positive", "Very helpful and easy to apply"),
        ("medium_mixed", "The benefit is good but the delay in payment is a real problem for small farmers in our district."),
        ("long_negative", "Terrible experience. The process is complicated, the office is corrupt, and every visit ends with another issue. Poor support, bad communication, awful follow-up."),
    ];

    let mut group = c.benchmark_group("Sentiment_Classifier");
    group.sample_size(100);

    for (name, text) in test_cases {
        group.bench_with_input(BenchmarkId::new("classify", name), &text, |b, text| {
            b.iter(|| classifier.classify(black_box(text)));
        });
    }

    group.finish();
}

/// Benchmark aggregation plus excerpt selection over a batch of comments
fn benchmark_aggregation(c: &mut Criterion) {
    let aggregator = SentimentAggregator::new().expect("Failed to create aggregator");

    let mut group = c.benchmark_group("Sentiment_Aggregator");

    for size in [5usize, 50, 500] {
        let comments: Vec<Comment> = (0..size)
            .map(|i| {
                let body = match i % 3 {
                    0 => "The scheme has been very helpful for my family. Support was good.",
                    1 => "Still waiting for approval, the delay is a problem.",
                    _ => "Implementation varies from state to state.",
                };
                Comment::new(i.to_string(), body)
            })
            .collect();

        group.bench_with_input(BenchmarkId::new("aggregate", size), &comments, |b, comments| {
            b.iter(|| {
                let summary = aggregator.aggregate(black_box(comments.clone()));
                aggregator.excerpt(&summary)
            });
        });
    }

    group.finish();
}

criterion_group!(benches, benchmark_sentiment_classifier, benchmark_aggregation);
criterion_main!(benches);
