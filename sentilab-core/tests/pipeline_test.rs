//! Stage-composition test: the full pipeline over in-memory tables.
//!
//! Drives score -> aggregate -> returns -> align -> correlate on concrete
//! data, checking the hand-computable end state at every stage boundary.

use std::sync::Arc;

use chrono::NaiveDate;
use sentilab_core::domain::{HeadlineRecord, PriceRecord};
use sentilab_core::{
    aggregate_daily, align, build_returns, correlate, Lexicon, LexiconModel, ScorerAdapter,
};

fn d(date: &str) -> NaiveDate {
    NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap()
}

#[test]
fn pipeline_end_state_is_hand_computable() {
    // Prices: 100 -> 110 (+10%) -> 99 (-10%).
    let prices = vec![
        PriceRecord { date: d("2024-01-01"), close: 100.0 },
        PriceRecord { date: d("2024-01-02"), close: 110.0 },
        PriceRecord { date: d("2024-01-03"), close: 99.0 },
    ];
    let returns = build_returns(&prices).unwrap();
    assert_eq!(returns.len(), 2);

    // Clearly positive news on the up day, clearly negative on the down day,
    // plus a headline on a non-trading day that must be dropped at the join.
    let adapter = ScorerAdapter::new(Arc::new(LexiconModel::new(Arc::new(Lexicon::load()))));
    let headlines = vec![
        HeadlineRecord { date: d("2024-01-02"), text: "Shares surge on record profit".into() },
        HeadlineRecord { date: d("2024-01-02"), text: "Analysts upgrade after strong growth".into() },
        HeadlineRecord { date: d("2024-01-03"), text: "Stock plunges as lawsuit widens losses".into() },
        HeadlineRecord { date: d("2024-01-06"), text: "Weekend feature: profit rally ahead?".into() },
    ];
    let scored = adapter.score_headlines(headlines);
    assert!(scored[0].score > 0.0);
    assert!(scored[2].score < 0.0);

    let daily = aggregate_daily(&scored);
    assert_eq!(daily.len(), 3);
    assert_eq!(daily[0].headline_count, 2);

    let aligned = align(&returns, &daily).unwrap();
    assert_eq!(aligned.observations.len(), 2);
    assert_eq!(aligned.dropped_sentiment, 1); // the weekend headline
    assert_eq!(aligned.dropped_returns, 0);

    // Positive sentiment paired with +10%, negative with -10%: r = 1.
    let result = correlate(&aligned.observations).unwrap();
    assert_eq!(result.sample_size, 2);
    assert!((result.coefficient - 1.0).abs() < 1e-9);
}

#[test]
fn pipeline_with_no_overlap_reports_insufficient_data() {
    let prices = vec![
        PriceRecord { date: d("2024-01-01"), close: 100.0 },
        PriceRecord { date: d("2024-01-02"), close: 105.0 },
    ];
    let returns = build_returns(&prices).unwrap();

    let adapter = ScorerAdapter::new(Arc::new(LexiconModel::new(Arc::new(Lexicon::load()))));
    let scored = adapter.score_headlines(vec![HeadlineRecord {
        date: d("2024-03-15"),
        text: "Company wins contract".into(),
    }]);
    let daily = aggregate_daily(&scored);

    let aligned = align(&returns, &daily).unwrap();
    assert!(aligned.observations.is_empty());
    assert!(correlate(&aligned.observations).is_err());
}
