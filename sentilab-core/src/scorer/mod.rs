//! Sentiment scoring — the model seam and the fail-open adapter.
//!
//! The `SentimentModel` trait abstracts over polarity implementations (the
//! built-in lexicon model, or anything heavier) so the pipeline only depends
//! on the `text -> polarity` contract. The adapter normalizes failure
//! behavior: a single unscoreable headline becomes `0.0`, never an error —
//! one bad row must not abort a feed of thousands.

pub mod lexicon;

use std::sync::Arc;

use rayon::prelude::*;
use thiserror::Error;

use crate::domain::{HeadlineRecord, ScoredHeadline};

pub use lexicon::{Lexicon, LexiconModel};

/// Errors a polarity model may raise. The adapter absorbs all of them.
#[derive(Debug, Error)]
pub enum ScoreError {
    #[error("text is empty or has no tokens")]
    EmptyText,

    #[error("model failure: {0}")]
    Model(String),
}

/// A polarity function: text in, score in [-1, 1] out.
///
/// Implementations must be pure and stateless per call; the adapter invokes
/// them concurrently across headlines.
pub trait SentimentModel: Send + Sync {
    /// Human-readable model name, recorded in diagnostics.
    fn name(&self) -> &str;

    /// Score one text. May fail; the adapter decides what failure means.
    fn polarity(&self, text: &str) -> Result<f64, ScoreError>;
}

/// Wraps a [`SentimentModel`] and normalizes its failure behavior.
///
/// `score` never panics and never propagates an error: any model failure or
/// non-finite output collapses to `0.0`, and every success is clamped to
/// [-1, 1].
pub struct ScorerAdapter {
    model: Arc<dyn SentimentModel>,
}

impl ScorerAdapter {
    pub fn new(model: Arc<dyn SentimentModel>) -> Self {
        Self { model }
    }

    pub fn model_name(&self) -> &str {
        self.model.name()
    }

    /// Score one text, fail-open.
    pub fn score(&self, text: &str) -> f64 {
        match self.model.polarity(text) {
            Ok(p) if p.is_finite() => p.clamp(-1.0, 1.0),
            _ => 0.0,
        }
    }

    /// Score a batch of headlines, preserving input order.
    ///
    /// Headlines are independent, so scoring fans out across threads; the
    /// collected `Vec` is the synchronization barrier the aggregator needs.
    pub fn score_headlines(&self, records: Vec<HeadlineRecord>) -> Vec<ScoredHeadline> {
        records
            .into_par_iter()
            .map(|record| {
                let score = self.score(&record.text);
                ScoredHeadline { record, score }
            })
            .collect()
    }
}
