//! Pipeline throughput benchmarks: scoring, aggregation, correlation.

use std::sync::Arc;

use chrono::NaiveDate;
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use sentilab_core::domain::{AlignedObservation, HeadlineRecord};
use sentilab_core::{aggregate_daily, correlate, Lexicon, LexiconModel, ScorerAdapter};

fn make_headlines(n: usize) -> Vec<HeadlineRecord> {
    let base = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
    (0..n)
        .map(|i| HeadlineRecord {
            date: base + chrono::Duration::days((i % 250) as i64),
            text: if i % 3 == 0 {
                format!("Shares surge on record profit, upgrade {i}")
            } else if i % 3 == 1 {
                format!("Stock plunges after fraud probe {i}")
            } else {
                format!("Company schedules shareholder meeting {i}")
            },
        })
        .collect()
}

fn bench_scoring(c: &mut Criterion) {
    let adapter = ScorerAdapter::new(Arc::new(LexiconModel::new(Arc::new(Lexicon::load()))));
    let headlines = make_headlines(10_000);

    c.bench_function("score_10k_headlines", |b| {
        b.iter(|| adapter.score_headlines(black_box(headlines.clone())))
    });
}

fn bench_aggregate(c: &mut Criterion) {
    let adapter = ScorerAdapter::new(Arc::new(LexiconModel::new(Arc::new(Lexicon::load()))));
    let scored = adapter.score_headlines(make_headlines(10_000));

    c.bench_function("aggregate_10k_scored", |b| {
        b.iter(|| aggregate_daily(black_box(&scored)))
    });
}

fn bench_correlate(c: &mut Criterion) {
    let base = NaiveDate::from_ymd_opt(2014, 1, 1).unwrap();
    let aligned: Vec<AlignedObservation> = (0..2_520)
        .map(|i| AlignedObservation {
            date: base + chrono::Duration::days(i as i64),
            return_pct: ((i * 37) % 19) as f64 - 9.0,
            mean_score: (((i * 13) % 11) as f64 - 5.0) / 5.0,
        })
        .collect();

    c.bench_function("correlate_10y_daily", |b| {
        b.iter(|| correlate(black_box(&aligned)))
    });
}

criterion_group!(benches, bench_scoring, bench_aggregate, bench_correlate);
criterion_main!(benches);
