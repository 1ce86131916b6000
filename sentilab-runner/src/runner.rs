//! Analysis runner — wires feeds, pipeline stages, and the result together.
//!
//! One synchronous pass: ingest news -> score -> aggregate, ingest prices ->
//! returns, align, correlate. Every stage fully consumes its input before
//! the next starts; concurrent runs over different datasets share nothing.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use sentilab_core::align::AlignError;
use sentilab_core::domain::{AlignedObservation, CorrelationResult, HeadlineRecord, PriceRecord};
use sentilab_core::returns::PriceSeriesError;
use sentilab_core::{
    aggregate_daily, align, build_returns, correlate, Lexicon, LexiconModel, ScorerAdapter,
};

use crate::config::{AnalysisConfig, ConfigError};
use crate::feeds::{load_news, load_prices, FeedError};

/// Current schema version for persisted artifacts.
pub const SCHEMA_VERSION: u32 = 1;

/// Errors from the runner.
///
/// Statistical errors from the correlation engine are deliberately absent:
/// they become a reported skip in the result, not a run failure.
#[derive(Debug, Error)]
pub enum RunError {
    #[error("config error: {0}")]
    Config(#[from] ConfigError),

    #[error("feed error: {0}")]
    Feed(#[from] FeedError),

    #[error("price series error: {0}")]
    Prices(#[from] PriceSeriesError),

    #[error("alignment error: {0}")]
    Align(#[from] AlignError),
}

/// Per-stage counts, surfaced so data loss is always observable.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PipelineDiagnostics {
    pub news_rows_read: usize,
    pub news_rows_dropped: usize,
    pub headlines_scored: usize,
    pub sentiment_days: usize,
    pub price_rows: usize,
    pub return_days: usize,
    /// Return days with no sentiment counterpart at the join.
    pub dropped_return_days: usize,
    /// Sentiment days with no return counterpart at the join.
    pub dropped_sentiment_days: usize,
}

/// Complete result of a single analysis run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisResult {
    /// Schema version for forward-compatible deserialization.
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,
    pub ticker: String,
    /// The aligned table: one row per date with both a return and a score.
    pub observations: Vec<AlignedObservation>,
    /// Pearson correlation, when the aligned sample supports one.
    pub correlation: Option<CorrelationResult>,
    /// Why `correlation` is `None` (insufficient data, zero variance).
    pub correlation_skipped: Option<String>,
    pub diagnostics: PipelineDiagnostics,
    /// Name of the sentiment model that scored the headlines.
    pub model: String,
    /// BLAKE3 over both input tables; identical inputs hash identically.
    pub dataset_hash: String,
}

fn default_schema_version() -> u32 {
    SCHEMA_VERSION
}

/// Run the full analysis with the built-in lexicon model.
pub fn run_analysis(config: &AnalysisConfig) -> Result<AnalysisResult, RunError> {
    let lexicon = Arc::new(Lexicon::load());
    let adapter = ScorerAdapter::new(Arc::new(LexiconModel::new(lexicon)));
    run_analysis_with_scorer(config, &adapter)
}

/// Run the full analysis with a caller-supplied scorer.
///
/// The seam exists so a different `SentimentModel` (or a stub in tests) can
/// drive the identical pipeline.
pub fn run_analysis_with_scorer(
    config: &AnalysisConfig,
    scorer: &ScorerAdapter,
) -> Result<AnalysisResult, RunError> {
    let news = load_news(&config.news_path)?;
    let prices = load_prices(&config.prices_path)?;

    let dataset_hash = compute_dataset_hash(&news.records, &prices);

    let mut diagnostics = PipelineDiagnostics {
        news_rows_read: news.rows_read,
        news_rows_dropped: news.rows_dropped,
        headlines_scored: news.records.len(),
        price_rows: prices.len(),
        ..Default::default()
    };

    let scored = scorer.score_headlines(news.records);
    let daily_sentiment = aggregate_daily(&scored);
    diagnostics.sentiment_days = daily_sentiment.len();

    let returns = build_returns(&prices)?;
    diagnostics.return_days = returns.len();

    let aligned = align(&returns, &daily_sentiment)?;
    diagnostics.dropped_return_days = aligned.dropped_returns;
    diagnostics.dropped_sentiment_days = aligned.dropped_sentiment;

    let (correlation, correlation_skipped) = match correlate(&aligned.observations) {
        Ok(result) => (Some(result), None),
        Err(reason) => (None, Some(reason.to_string())),
    };

    Ok(AnalysisResult {
        schema_version: SCHEMA_VERSION,
        ticker: config.ticker.clone(),
        observations: aligned.observations,
        correlation,
        correlation_skipped,
        diagnostics,
        model: scorer.model_name().to_owned(),
        dataset_hash,
    })
}

/// Deterministic BLAKE3 hash over both input tables.
///
/// News records hash in feed order, prices in date order; both orders are
/// themselves deterministic for a given pair of input files.
fn compute_dataset_hash(news: &[HeadlineRecord], prices: &[PriceRecord]) -> String {
    let mut hasher = blake3::Hasher::new();

    for record in news {
        hasher.update(record.date.to_string().as_bytes());
        hasher.update(record.text.as_bytes());
    }
    for price in prices {
        hasher.update(price.date.to_string().as_bytes());
        hasher.update(&price.close.to_le_bytes());
    }

    hasher.finalize().to_hex().to_string()
}
