//! SentiLab Core — the sentiment-return correlation pipeline.
//!
//! Stage by stage:
//! - Date normalization: mixed feed timestamps -> UTC calendar dates
//! - Scoring: headline text -> polarity in [-1, 1] behind a model seam
//! - Aggregation: per-headline scores -> one mean per calendar day
//! - Return building: ordered closes -> day-over-day percentage changes
//! - Alignment: inner join of the two daily series, with drop accounting
//! - Correlation: Pearson's r over the aligned pairs
//!
//! Every stage consumes borrowed input and returns a fresh table, so the
//! pipeline is composable and testable one stage at a time. File I/O and
//! orchestration live in `sentilab-runner`.

pub mod aggregate;
pub mod align;
pub mod correlation;
pub mod dates;
pub mod domain;
pub mod returns;
pub mod scorer;

pub use aggregate::aggregate_daily;
pub use align::{align, AlignError, AlignedSeries};
pub use correlation::{correlate, CorrelationError};
pub use dates::parse_feed_date;
pub use returns::{build_returns, PriceSeriesError};
pub use scorer::{Lexicon, LexiconModel, ScoreError, ScorerAdapter, SentimentModel};

#[cfg(test)]
mod tests {
    use super::*;

    /// Compile-time check: pipeline outputs cross thread boundaries (rayon
    /// scoring, callers holding results across joins), so the core types
    /// must stay Send + Sync.
    #[allow(dead_code)]
    fn assert_send_sync() {
        fn require_send<T: Send>() {}
        fn require_sync<T: Sync>() {}

        require_send::<domain::HeadlineRecord>();
        require_sync::<domain::HeadlineRecord>();
        require_send::<domain::ScoredHeadline>();
        require_sync::<domain::ScoredHeadline>();
        require_send::<domain::DailySentiment>();
        require_sync::<domain::DailySentiment>();
        require_send::<domain::PriceRecord>();
        require_sync::<domain::PriceRecord>();
        require_send::<domain::DailyReturn>();
        require_sync::<domain::DailyReturn>();
        require_send::<domain::AlignedObservation>();
        require_sync::<domain::AlignedObservation>();
        require_send::<domain::CorrelationResult>();
        require_sync::<domain::CorrelationResult>();

        require_send::<AlignedSeries>();
        require_send::<ScorerAdapter>();
        require_sync::<ScorerAdapter>();
    }
}
