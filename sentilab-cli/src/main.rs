//! SentiLab CLI — sentiment-return correlation from the command line.
//!
//! Commands:
//! - `analyze` — run the full pipeline over a news CSV and a price CSV,
//!   print a summary, save artifacts
//! - `score` — score ad-hoc text with the built-in lexicon model (debug aid)

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{bail, Result};
use clap::{Parser, Subcommand};
use sentilab_core::{Lexicon, LexiconModel, ScorerAdapter};
use sentilab_runner::{run_analysis, save_artifacts, AnalysisConfig, AnalysisResult};

#[derive(Parser)]
#[command(
    name = "sentilab",
    about = "SentiLab CLI — news-sentiment vs daily-return correlation"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the correlation pipeline over a news feed and a price feed.
    Analyze {
        /// Path to a TOML config file (mutually exclusive with the flags below).
        #[arg(long)]
        config: Option<PathBuf>,

        /// News feed CSV with `date` and `headline` columns.
        #[arg(long)]
        news: Option<PathBuf>,

        /// Price feed CSV with `date` and `close` columns.
        #[arg(long)]
        prices: Option<PathBuf>,

        /// Ticker symbol, used to label outputs.
        #[arg(long)]
        ticker: Option<String>,

        /// Output directory for artifacts.
        #[arg(long, default_value = "results")]
        output_dir: PathBuf,

        /// Compute and print only; skip writing artifacts.
        #[arg(long, default_value_t = false)]
        no_artifacts: bool,
    },
    /// Score one or more texts with the built-in lexicon model.
    Score {
        /// Texts to score, one polarity per argument.
        #[arg(required = true)]
        text: Vec<String>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Analyze {
            config,
            news,
            prices,
            ticker,
            output_dir,
            no_artifacts,
        } => run_analyze(config, news, prices, ticker, output_dir, no_artifacts),
        Commands::Score { text } => run_score(&text),
    }
}

fn run_analyze(
    config_path: Option<PathBuf>,
    news: Option<PathBuf>,
    prices: Option<PathBuf>,
    ticker: Option<String>,
    output_dir: PathBuf,
    no_artifacts: bool,
) -> Result<()> {
    let inline_flags = news.is_some() || prices.is_some() || ticker.is_some();
    if config_path.is_some() && inline_flags {
        bail!("--config and --news/--prices/--ticker are mutually exclusive");
    }

    let config = if let Some(path) = config_path {
        AnalysisConfig::from_file(&path)?
    } else {
        let (Some(news), Some(prices), Some(ticker)) = (news, prices, ticker) else {
            bail!("either --config or all of --news, --prices, --ticker are required");
        };
        AnalysisConfig {
            ticker,
            news_path: news,
            prices_path: prices,
            output_dir,
        }
    };

    let result = run_analysis(&config)?;
    print_summary(&result);

    if !no_artifacts {
        let run_dir = save_artifacts(&result, &config.output_dir)?;
        println!("Artifacts saved to: {}", run_dir.display());
    }

    Ok(())
}

fn run_score(texts: &[String]) -> Result<()> {
    let adapter = ScorerAdapter::new(Arc::new(LexiconModel::new(Arc::new(Lexicon::load()))));

    for text in texts {
        println!("{:+.3}  {text}", adapter.score(text));
    }
    Ok(())
}

fn print_summary(result: &AnalysisResult) {
    let d = &result.diagnostics;

    println!();
    println!("=== Sentiment-Return Analysis ===");
    println!("Ticker:           {}", result.ticker);
    println!("Model:            {}", result.model);
    println!(
        "News rows:        {} read, {} dropped",
        d.news_rows_read, d.news_rows_dropped
    );
    println!(
        "Sentiment days:   {} ({} headlines scored)",
        d.sentiment_days, d.headlines_scored
    );
    println!(
        "Price rows:       {} ({} return days)",
        d.price_rows, d.return_days
    );
    println!(
        "Join drops:       {} return day(s), {} sentiment day(s)",
        d.dropped_return_days, d.dropped_sentiment_days
    );
    println!("Aligned days:     {}", result.observations.len());
    println!();
    match (&result.correlation, &result.correlation_skipped) {
        (Some(corr), _) => {
            println!(
                "Correlation:      {:.4} over {} day(s)",
                corr.coefficient, corr.sample_size
            );
        }
        (None, Some(reason)) => {
            println!("Correlation:      not computable ({reason})");
        }
        (None, None) => {
            println!("Correlation:      not computable");
        }
    }
    println!();
}
