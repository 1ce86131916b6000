//! Headline — the fundamental news data unit.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A single news headline, pinned to a calendar day.
///
/// The date is already timezone-normalized: ingestion converts every feed
/// timestamp to UTC and strips the time-of-day component before a record is
/// built. Rows without a usable date or text never become records.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HeadlineRecord {
    pub date: NaiveDate,
    pub text: String,
}

/// A headline plus its polarity score in [-1, 1].
///
/// Produced by the scorer adapter. A score of exactly 0.0 is either genuine
/// neutrality or the adapter's fail-open fallback; the two are deliberately
/// indistinguishable downstream.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredHeadline {
    pub record: HeadlineRecord,
    pub score: f64,
}

/// Mean sentiment for one calendar day.
///
/// One row per distinct date present in the scored set; `headline_count` is
/// always >= 1 (absent days are absent rows, never zero-filled).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailySentiment {
    pub date: NaiveDate,
    pub mean_score: f64,
    pub headline_count: usize,
}
