//! Return series builder.
//!
//! Day-over-day percentage change of the close:
//! return_pct[i] = (close[i] - close[i-1]) / close[i-1] * 100, for i >= 1.
//! The first record has no prior value and is dropped.

use chrono::NaiveDate;
use thiserror::Error;

use crate::domain::{DailyReturn, PriceRecord};

/// Precondition violations in a price series. Raised immediately; a price
/// series is never reordered or patched to make the computation go through.
#[derive(Debug, Error)]
pub enum PriceSeriesError {
    #[error("price series out of order: {prev} followed by {next} (dates must be strictly ascending)")]
    OutOfOrder { prev: NaiveDate, next: NaiveDate },

    #[error("close {close} on {date} is not a valid return anchor (must be positive and finite)")]
    NonPositiveClose { date: NaiveDate, close: f64 },
}

/// Build the daily return series from an ordered close-price series.
///
/// For N valid prices the result has N-1 returns; fewer than 2 prices yield
/// an empty series, not an error. Non-ascending dates (which also covers
/// duplicates) and non-positive prior closes are typed errors.
pub fn build_returns(prices: &[PriceRecord]) -> Result<Vec<DailyReturn>, PriceSeriesError> {
    let mut returns = Vec::with_capacity(prices.len().saturating_sub(1));

    for pair in prices.windows(2) {
        let (prev, next) = (&pair[0], &pair[1]);

        if next.date <= prev.date {
            return Err(PriceSeriesError::OutOfOrder {
                prev: prev.date,
                next: next.date,
            });
        }
        if !prev.is_valid_anchor() {
            return Err(PriceSeriesError::NonPositiveClose {
                date: prev.date,
                close: prev.close,
            });
        }

        returns.push(DailyReturn {
            date: next.date,
            return_pct: (next.close - prev.close) / prev.close * 100.0,
        });
    }

    Ok(returns)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn price(date: &str, close: f64) -> PriceRecord {
        PriceRecord {
            date: NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap(),
            close,
        }
    }

    #[test]
    fn basic_returns() {
        let prices = vec![
            price("2024-01-01", 100.0),
            price("2024-01-02", 110.0),
            price("2024-01-03", 99.0),
        ];

        let returns = build_returns(&prices).unwrap();

        assert_eq!(returns.len(), 2);
        assert_eq!(returns[0].date, prices[1].date);
        assert!((returns[0].return_pct - 10.0).abs() < 1e-10);
        assert!((returns[1].return_pct - (-10.0)).abs() < 1e-10);
    }

    #[test]
    fn first_record_produces_no_return() {
        let prices = vec![price("2024-01-01", 100.0), price("2024-01-02", 101.0)];
        let returns = build_returns(&prices).unwrap();
        assert_eq!(returns.len(), 1);
        assert_eq!(returns[0].date, prices[1].date);
    }

    #[test]
    fn short_series_is_empty_not_an_error() {
        assert!(build_returns(&[]).unwrap().is_empty());
        assert!(build_returns(&[price("2024-01-01", 100.0)])
            .unwrap()
            .is_empty());
    }

    #[test]
    fn out_of_order_dates_are_rejected() {
        let prices = vec![price("2024-01-03", 100.0), price("2024-01-02", 110.0)];
        assert!(matches!(
            build_returns(&prices),
            Err(PriceSeriesError::OutOfOrder { .. })
        ));
    }

    #[test]
    fn duplicate_dates_are_rejected() {
        let prices = vec![price("2024-01-02", 100.0), price("2024-01-02", 110.0)];
        assert!(matches!(
            build_returns(&prices),
            Err(PriceSeriesError::OutOfOrder { .. })
        ));
    }

    #[test]
    fn zero_prior_close_is_rejected() {
        let prices = vec![price("2024-01-01", 0.0), price("2024-01-02", 110.0)];
        let err = build_returns(&prices).unwrap_err();
        assert!(matches!(
            err,
            PriceSeriesError::NonPositiveClose { close, .. } if close == 0.0
        ));
    }

    #[test]
    fn negative_prior_close_is_rejected() {
        let prices = vec![price("2024-01-01", -5.0), price("2024-01-02", 110.0)];
        assert!(matches!(
            build_returns(&prices),
            Err(PriceSeriesError::NonPositiveClose { .. })
        ));
    }

    #[test]
    fn trailing_close_is_not_an_anchor() {
        // The last close never divides anything, so its value is not checked.
        let prices = vec![price("2024-01-01", 100.0), price("2024-01-02", 0.0)];
        let returns = build_returns(&prices).unwrap();
        assert!((returns[0].return_pct - (-100.0)).abs() < 1e-10);
    }
}
