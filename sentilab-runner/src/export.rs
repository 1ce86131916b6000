//! Artifact export — JSON manifest and aligned-table CSV.
//!
//! Persisted artifacts carry a `schema_version`; unknown versions are
//! rejected on load rather than misread.

use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};

use sentilab_core::domain::AlignedObservation;

use crate::runner::{AnalysisResult, SCHEMA_VERSION};

// ─── JSON export ────────────────────────────────────────────────────

/// Serialize an `AnalysisResult` to pretty JSON.
pub fn export_json(result: &AnalysisResult) -> Result<String> {
    serde_json::to_string_pretty(result).context("failed to serialize AnalysisResult to JSON")
}

/// Deserialize an `AnalysisResult`, rejecting unknown schema versions.
pub fn import_json(json: &str) -> Result<AnalysisResult> {
    let result: AnalysisResult =
        serde_json::from_str(json).context("failed to deserialize AnalysisResult from JSON")?;
    if result.schema_version > SCHEMA_VERSION {
        bail!(
            "unsupported schema version {} (max supported: {})",
            result.schema_version,
            SCHEMA_VERSION
        );
    }
    Ok(result)
}

// ─── CSV export ─────────────────────────────────────────────────────

/// Export the aligned table as CSV: date, return_pct, mean_score.
pub fn export_aligned_csv(observations: &[AlignedObservation]) -> Result<String> {
    let mut wtr = csv::Writer::from_writer(vec![]);

    wtr.write_record(["date", "return_pct", "mean_score"])?;
    for obs in observations {
        wtr.write_record([
            &obs.date.to_string(),
            &format!("{:.6}", obs.return_pct),
            &format!("{:.6}", obs.mean_score),
        ])?;
    }

    let data = wtr.into_inner().context("failed to flush CSV writer")?;
    String::from_utf8(data).context("CSV output is not valid UTF-8")
}

// ─── Artifact bundle ────────────────────────────────────────────────

/// Save the full artifact set for one analysis run.
///
/// Creates `{ticker}_{timestamp}/` under `output_dir` containing:
/// - `manifest.json` — the full `AnalysisResult`
/// - `aligned.csv` — the aligned table for external analysis tools
///
/// Returns the path to the created directory.
pub fn save_artifacts(result: &AnalysisResult, output_dir: &Path) -> Result<PathBuf> {
    let dirname = format!(
        "{}_{}",
        result.ticker,
        chrono::Local::now().format("%Y%m%d_%H%M%S")
    );
    let run_dir = output_dir.join(dirname);
    std::fs::create_dir_all(&run_dir)
        .with_context(|| format!("failed to create artifact dir: {}", run_dir.display()))?;

    let json = export_json(result)?;
    std::fs::write(run_dir.join("manifest.json"), &json)?;

    let aligned_csv = export_aligned_csv(&result.observations)?;
    std::fs::write(run_dir.join("aligned.csv"), &aligned_csv)?;

    Ok(run_dir)
}
