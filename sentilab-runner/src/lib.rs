//! SentiLab Runner — feed ingestion, configuration, orchestration, export.
//!
//! This crate builds on `sentilab-core` to provide:
//! - CSV ingestion for the news and price feeds, with drop accounting
//! - TOML analysis configuration
//! - The single-pass analysis runner with dataset hashing
//! - Artifact export (JSON manifest + aligned-table CSV)

pub mod config;
pub mod export;
pub mod feeds;
pub mod runner;

pub use config::{AnalysisConfig, ConfigError};
pub use export::{export_aligned_csv, export_json, import_json, save_artifacts};
pub use feeds::{load_news, load_prices, FeedError, NewsIngest};
pub use runner::{
    run_analysis, run_analysis_with_scorer, AnalysisResult, PipelineDiagnostics, RunError,
    SCHEMA_VERSION,
};
