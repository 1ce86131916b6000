//! Correlation engine — Pearson's r over the aligned series.
//!
//! Pure, deterministic numeric computation. Failure is immediate and
//! terminal for the invocation, with no partial result and no retries.

use thiserror::Error;

use crate::domain::{AlignedObservation, CorrelationResult};

/// Below this, a column's squared-deviation sum counts as zero variance.
const VARIANCE_FLOOR: f64 = 1e-12;

/// Statistical error conditions. The caller decides whether these mean
/// "report no correlation computable" or abort.
#[derive(Debug, Error)]
pub enum CorrelationError {
    #[error("correlation undefined for {observed} observation(s) (need at least 2)")]
    InsufficientData { observed: usize },

    #[error("{column} column has zero variance, correlation denominator is zero")]
    DegenerateInput { column: &'static str },
}

/// Pearson correlation between `return_pct` and `mean_score`.
///
/// r = sum((x - mean_x)(y - mean_y)) / sqrt(sum((x - mean_x)^2) * sum((y - mean_y)^2))
pub fn correlate(aligned: &[AlignedObservation]) -> Result<CorrelationResult, CorrelationError> {
    let n = aligned.len();
    if n < 2 {
        return Err(CorrelationError::InsufficientData { observed: n });
    }

    let mean_x = aligned.iter().map(|o| o.return_pct).sum::<f64>() / n as f64;
    let mean_y = aligned.iter().map(|o| o.mean_score).sum::<f64>() / n as f64;

    let mut cross = 0.0;
    let mut sum_sq_x = 0.0;
    let mut sum_sq_y = 0.0;
    for obs in aligned {
        let dx = obs.return_pct - mean_x;
        let dy = obs.mean_score - mean_y;
        cross += dx * dy;
        sum_sq_x += dx * dx;
        sum_sq_y += dy * dy;
    }

    if sum_sq_x < VARIANCE_FLOOR {
        return Err(CorrelationError::DegenerateInput {
            column: "return_pct",
        });
    }
    if sum_sq_y < VARIANCE_FLOOR {
        return Err(CorrelationError::DegenerateInput {
            column: "mean_score",
        });
    }

    // Rounding can push |r| a hair past 1 for perfectly collinear data.
    let coefficient = (cross / (sum_sq_x.sqrt() * sum_sq_y.sqrt())).clamp(-1.0, 1.0);

    Ok(CorrelationResult {
        coefficient,
        sample_size: n,
    })
}
