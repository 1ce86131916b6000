//! Serializable analysis configuration.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors from loading or validating a config file.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("ticker must not be empty")]
    EmptyTicker,
}

/// Configuration for a single analysis run.
///
/// File paths and the ticker label are configuration inputs, not behavior:
/// nothing in the pipeline branches on them.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct AnalysisConfig {
    /// Ticker symbol the price feed belongs to (label for outputs).
    pub ticker: String,

    /// News feed CSV: `date` (mixed timestamp formats) + `headline`.
    pub news_path: PathBuf,

    /// Price feed CSV: `date` (`%Y-%m-%d`) + `close`.
    pub prices_path: PathBuf,

    /// Where artifacts are written.
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,
}

fn default_output_dir() -> PathBuf {
    PathBuf::from("results")
}

impl AnalysisConfig {
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(&content)
    }

    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: AnalysisConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.ticker.trim().is_empty() {
            return Err(ConfigError::EmptyTicker);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_minimal_config() {
        let config = AnalysisConfig::from_toml(
            r#"
            ticker = "AAPL"
            news_path = "data/news.csv"
            prices_path = "data/aapl.csv"
            "#,
        )
        .unwrap();

        assert_eq!(config.ticker, "AAPL");
        assert_eq!(config.output_dir, PathBuf::from("results"));
    }

    #[test]
    fn explicit_output_dir_wins() {
        let config = AnalysisConfig::from_toml(
            r#"
            ticker = "AAPL"
            news_path = "news.csv"
            prices_path = "prices.csv"
            output_dir = "out"
            "#,
        )
        .unwrap();
        assert_eq!(config.output_dir, PathBuf::from("out"));
    }

    #[test]
    fn unknown_fields_are_rejected() {
        let result = AnalysisConfig::from_toml(
            r#"
            ticker = "AAPL"
            news_path = "news.csv"
            prices_path = "prices.csv"
            plot = true
            "#,
        );
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn empty_ticker_is_rejected() {
        let result = AnalysisConfig::from_toml(
            r#"
            ticker = "  "
            news_path = "news.csv"
            prices_path = "prices.csv"
            "#,
        );
        assert!(matches!(result, Err(ConfigError::EmptyTicker)));
    }
}
