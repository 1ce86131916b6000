//! Daily series alignment.
//!
//! Inner-joins the return series and the daily sentiment series on exact
//! calendar-date equality. Dates present on only one side are dropped —
//! correlation needs paired observations — but the drop counts are kept so
//! asymmetric data loss stays observable.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use thiserror::Error;

use crate::domain::{AlignedObservation, DailyReturn, DailySentiment};

/// Contract violations at the join boundary.
#[derive(Debug, Error)]
pub enum AlignError {
    #[error("duplicate date {date} in the {side} series")]
    DuplicateDate { side: &'static str, date: NaiveDate },
}

/// The inner join plus drop accounting.
#[derive(Debug, Clone)]
pub struct AlignedSeries {
    /// Paired observations, ascending by date.
    pub observations: Vec<AlignedObservation>,
    /// Return days with no sentiment counterpart.
    pub dropped_returns: usize,
    /// Sentiment days with no return counterpart.
    pub dropped_sentiment: usize,
}

/// Inner-join returns and sentiment on calendar date.
///
/// Both inputs must be duplicate-free (the upstream stages guarantee it);
/// a repeated date here is a typed error, not a silent overwrite.
pub fn align(
    returns: &[DailyReturn],
    sentiment: &[DailySentiment],
) -> Result<AlignedSeries, AlignError> {
    let mut returns_by_date: BTreeMap<NaiveDate, f64> = BTreeMap::new();
    for ret in returns {
        if returns_by_date.insert(ret.date, ret.return_pct).is_some() {
            return Err(AlignError::DuplicateDate {
                side: "return",
                date: ret.date,
            });
        }
    }

    let mut sentiment_by_date: BTreeMap<NaiveDate, f64> = BTreeMap::new();
    for day in sentiment {
        if sentiment_by_date.insert(day.date, day.mean_score).is_some() {
            return Err(AlignError::DuplicateDate {
                side: "sentiment",
                date: day.date,
            });
        }
    }

    // BTreeMap iteration is ascending, so the output is too.
    let observations: Vec<AlignedObservation> = sentiment_by_date
        .iter()
        .filter_map(|(&date, &mean_score)| {
            returns_by_date.get(&date).map(|&return_pct| AlignedObservation {
                date,
                return_pct,
                mean_score,
            })
        })
        .collect();

    let matched = observations.len();
    Ok(AlignedSeries {
        dropped_returns: returns_by_date.len() - matched,
        dropped_sentiment: sentiment_by_date.len() - matched,
        observations,
    })
}
