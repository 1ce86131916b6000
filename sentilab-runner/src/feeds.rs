//! Feed ingestion — the thin, validated I/O layer over the two input CSVs.
//!
//! Two policies, one per feed:
//! - News rows are individually expendable: a missing field or unparseable
//!   date drops that row and bumps a counter. The pipeline continues.
//! - Price rows are not: a malformed price row is a typed error, because a
//!   silently-thinned price series fabricates gaps in financial data. The
//!   price feed is sorted ascending on load (its one permitted fix-up) and
//!   duplicate dates are rejected.

use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use thiserror::Error;

use sentilab_core::domain::{HeadlineRecord, PriceRecord};
use sentilab_core::parse_feed_date;

/// Errors from the feed layer.
#[derive(Debug, Error)]
pub enum FeedError {
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("csv error in {}: {detail}", path.display())]
    Csv { path: PathBuf, detail: String },

    #[error("{} is missing required column '{column}'", path.display())]
    MissingColumn { path: PathBuf, column: &'static str },

    #[error("malformed {field} '{value}' on row {row} of the price feed")]
    MalformedPriceRow {
        row: usize,
        field: &'static str,
        value: String,
    },

    #[error("duplicate date {date} in the price feed")]
    DuplicateDate { date: NaiveDate },
}

/// News records plus row-level drop accounting.
#[derive(Debug, Clone)]
pub struct NewsIngest {
    pub records: Vec<HeadlineRecord>,
    /// Data rows read from the file (header excluded).
    pub rows_read: usize,
    /// Rows excluded for a missing field or unparseable date.
    pub rows_dropped: usize,
}

/// Case-insensitive header lookup. Feeds disagree about casing; `Date`,
/// `DATE` and `date` are the same column.
fn find_column(headers: &csv::StringRecord, name: &str) -> Option<usize> {
    headers
        .iter()
        .position(|h| h.trim().eq_ignore_ascii_case(name))
}

/// Load the news feed: columns `date` (mixed timestamp formats) and
/// `headline`.
pub fn load_news(path: &Path) -> Result<NewsIngest, FeedError> {
    let mut reader = csv::Reader::from_path(path).map_err(|e| csv_error(path, e))?;

    let headers = reader
        .headers()
        .map_err(|e| csv_error(path, e))?
        .clone();
    let date_col = find_column(&headers, "date").ok_or_else(|| FeedError::MissingColumn {
        path: path.to_path_buf(),
        column: "date",
    })?;
    let headline_col =
        find_column(&headers, "headline").ok_or_else(|| FeedError::MissingColumn {
            path: path.to_path_buf(),
            column: "headline",
        })?;

    let mut records = Vec::new();
    let mut rows_read = 0usize;
    let mut rows_dropped = 0usize;

    for row in reader.records() {
        let row = row.map_err(|e| csv_error(path, e))?;
        rows_read += 1;

        let text = row.get(headline_col).unwrap_or("").trim();
        if text.is_empty() {
            rows_dropped += 1;
            continue;
        }
        let Some(date) = row.get(date_col).and_then(|raw| parse_feed_date(raw)) else {
            rows_dropped += 1;
            continue;
        };

        records.push(HeadlineRecord {
            date,
            text: text.to_owned(),
        });
    }

    Ok(NewsIngest {
        records,
        rows_read,
        rows_dropped,
    })
}

/// Load the price feed: columns `date` (`%Y-%m-%d`) and `close`.
///
/// Sorted ascending by date before return; duplicate dates are rejected.
pub fn load_prices(path: &Path) -> Result<Vec<PriceRecord>, FeedError> {
    let mut reader = csv::Reader::from_path(path).map_err(|e| csv_error(path, e))?;

    let headers = reader
        .headers()
        .map_err(|e| csv_error(path, e))?
        .clone();
    let date_col = find_column(&headers, "date").ok_or_else(|| FeedError::MissingColumn {
        path: path.to_path_buf(),
        column: "date",
    })?;
    let close_col = find_column(&headers, "close").ok_or_else(|| FeedError::MissingColumn {
        path: path.to_path_buf(),
        column: "close",
    })?;

    let mut prices = Vec::new();
    for (i, row) in reader.records().enumerate() {
        let row = row.map_err(|e| csv_error(path, e))?;
        let row_number = i + 1;

        let raw_date = row.get(date_col).unwrap_or("").trim();
        let date = NaiveDate::parse_from_str(raw_date, "%Y-%m-%d").map_err(|_| {
            FeedError::MalformedPriceRow {
                row: row_number,
                field: "date",
                value: raw_date.to_owned(),
            }
        })?;

        let raw_close = row.get(close_col).unwrap_or("").trim();
        let close: f64 = raw_close
            .parse()
            .ok()
            .filter(|c: &f64| c.is_finite())
            .ok_or_else(|| FeedError::MalformedPriceRow {
                row: row_number,
                field: "close",
                value: raw_close.to_owned(),
            })?;

        prices.push(PriceRecord { date, close });
    }

    prices.sort_by_key(|p| p.date);
    for pair in prices.windows(2) {
        if pair[0].date == pair[1].date {
            return Err(FeedError::DuplicateDate { date: pair[0].date });
        }
    }

    Ok(prices)
}

/// I/O problems surface as `Io`; everything else the csv crate reports
/// (ragged rows, bad UTF-8) as `Csv`.
fn csv_error(path: &Path, err: csv::Error) -> FeedError {
    let detail = err.to_string();
    match err.into_kind() {
        csv::ErrorKind::Io(source) => FeedError::Io {
            path: path.to_path_buf(),
            source,
        },
        _ => FeedError::Csv {
            path: path.to_path_buf(),
            detail,
        },
    }
}
