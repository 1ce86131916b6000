//! Price series types.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Daily closing price for the analyzed ticker.
///
/// A valid series is strictly ascending by date with no duplicates; the
/// return builder raises on violations rather than re-sorting, because
/// silently reordering a price series fabricates financial data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceRecord {
    pub date: NaiveDate,
    pub close: f64,
}

impl PriceRecord {
    /// A close must be positive and finite to anchor a percentage return.
    pub fn is_valid_anchor(&self) -> bool {
        self.close.is_finite() && self.close > 0.0
    }
}

/// Day-over-day percentage change of the close.
///
/// The first record of a price series has no prior value and produces no
/// return, so a series of N prices yields N-1 returns.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyReturn {
    pub date: NaiveDate,
    pub return_pct: f64,
}
