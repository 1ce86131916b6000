//! Domain types — immutable rows owned by the pipeline stages.

pub mod headline;
pub mod observation;
pub mod price;

pub use headline::{DailySentiment, HeadlineRecord, ScoredHeadline};
pub use observation::{AlignedObservation, CorrelationResult};
pub use price::{DailyReturn, PriceRecord};
