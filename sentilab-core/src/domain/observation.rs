//! Aligned observations and the correlation statistic.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One paired observation: the day's return and the day's mean sentiment.
///
/// Exists only for dates present in both the return series and the daily
/// sentiment series (inner join). Asymmetric loss at the join is expected
/// and reported, never filled.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AlignedObservation {
    pub date: NaiveDate,
    pub return_pct: f64,
    pub mean_score: f64,
}

/// Pearson correlation over an aligned series.
///
/// Derived, not stored: recomputed on demand from the current observation
/// set. `coefficient` is always within [-1, 1].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CorrelationResult {
    pub coefficient: f64,
    pub sample_size: usize,
}
