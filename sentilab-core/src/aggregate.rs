//! Daily sentiment aggregation.
//!
//! Collapses per-headline scores to one arithmetic mean per calendar day.
//! Dates must already be timezone-normalized (see `dates`); the group key is
//! exact calendar-date equality.

use std::collections::BTreeMap;

use chrono::NaiveDate;

use crate::domain::{DailySentiment, ScoredHeadline};

/// Group scored headlines by date and average each group.
///
/// Output is ordered ascending by date. Days with no headlines are simply
/// absent, never zero-filled. Empty input yields empty output.
pub fn aggregate_daily(scored: &[ScoredHeadline]) -> Vec<DailySentiment> {
    let mut groups: BTreeMap<NaiveDate, (f64, usize)> = BTreeMap::new();

    for headline in scored {
        let entry = groups.entry(headline.record.date).or_insert((0.0, 0));
        entry.0 += headline.score;
        entry.1 += 1;
    }

    groups
        .into_iter()
        .map(|(date, (sum, count))| DailySentiment {
            date,
            mean_score: sum / count as f64,
            headline_count: count,
        })
        .collect()
}
