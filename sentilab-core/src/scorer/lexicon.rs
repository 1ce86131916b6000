//! Lexicon-based polarity model.
//!
//! A weighted word-list model for financial news headlines. It stands in for
//! a heavier NLP model behind the `SentimentModel` seam: good enough to rank
//! "profit surge" above "fraud probe", cheap enough to score a feed of
//! headlines in milliseconds.

use std::collections::HashMap;
use std::sync::Arc;

use super::{ScoreError, SentimentModel};

/// The process-scoped language resource: word weights, negations,
/// intensifiers.
///
/// Built once via [`Lexicon::load`] and shared behind an `Arc`. Loading is
/// an explicit call the caller controls, never a side effect of using the
/// scorer.
#[derive(Debug)]
pub struct Lexicon {
    weights: HashMap<&'static str, f64>,
    intensifiers: HashMap<&'static str, f64>,
    negations: &'static [&'static str],
}

impl Lexicon {
    /// Build the built-in financial-news lexicon.
    pub fn load() -> Self {
        let mut weights = HashMap::new();

        for (word, weight) in [
            ("beat", 0.6),
            ("beats", 0.6),
            ("bullish", 0.85),
            ("buy", 0.4),
            ("buyback", 0.5),
            ("gain", 0.5),
            ("gains", 0.5),
            ("growth", 0.6),
            ("jump", 0.6),
            ("jumps", 0.6),
            ("profit", 0.6),
            ("rally", 0.7),
            ("rallies", 0.7),
            ("rebound", 0.5),
            ("record", 0.5),
            ("rise", 0.45),
            ("rises", 0.45),
            ("soar", 0.8),
            ("soars", 0.8),
            ("strong", 0.5),
            ("surge", 0.75),
            ("surges", 0.75),
            ("upgrade", 0.65),
            ("upgraded", 0.65),
            ("win", 0.5),
            ("wins", 0.5),
        ] {
            weights.insert(word, weight);
        }

        for (word, weight) in [
            ("bankruptcy", -0.9),
            ("bearish", -0.85),
            ("crash", -0.9),
            ("cut", -0.4),
            ("cuts", -0.4),
            ("decline", -0.5),
            ("declines", -0.5),
            ("downgrade", -0.65),
            ("downgraded", -0.65),
            ("drop", -0.55),
            ("drops", -0.55),
            ("fall", -0.5),
            ("falls", -0.5),
            ("fraud", -0.85),
            ("lawsuit", -0.6),
            ("layoffs", -0.6),
            ("loss", -0.6),
            ("losses", -0.6),
            ("miss", -0.6),
            ("misses", -0.6),
            ("plunge", -0.8),
            ("plunges", -0.8),
            ("probe", -0.5),
            ("recall", -0.55),
            ("sell", -0.4),
            ("slump", -0.65),
            ("slumps", -0.65),
            ("tumble", -0.7),
            ("tumbles", -0.7),
            ("warning", -0.5),
            ("weak", -0.5),
        ] {
            weights.insert(word, weight);
        }

        let intensifiers = HashMap::from([
            ("very", 1.5),
            ("extremely", 2.0),
            ("sharply", 1.6),
            ("significantly", 1.5),
            ("slightly", 0.6),
        ]);

        let negations: &[&str] = &["not", "no", "never", "without", "fails"];

        Self {
            weights,
            intensifiers,
            negations,
        }
    }

    fn weight(&self, token: &str) -> Option<f64> {
        self.weights.get(token).copied()
    }

    fn intensity(&self, token: &str) -> Option<f64> {
        self.intensifiers.get(token).copied()
    }

    fn is_negation(&self, token: &str) -> bool {
        self.negations.iter().any(|n| *n == token)
    }
}

/// `SentimentModel` over a shared [`Lexicon`].
#[derive(Debug, Clone)]
pub struct LexiconModel {
    lexicon: Arc<Lexicon>,
}

impl LexiconModel {
    pub fn new(lexicon: Arc<Lexicon>) -> Self {
        Self { lexicon }
    }
}

impl SentimentModel for LexiconModel {
    fn name(&self) -> &str {
        "lexicon"
    }

    /// Mean of matched word weights, with one-token negation/intensifier
    /// lookbehind. Headlines with no sentiment-bearing words are genuinely
    /// neutral (0.0), not an error.
    fn polarity(&self, text: &str) -> Result<f64, ScoreError> {
        let tokens: Vec<String> = text
            .to_lowercase()
            .split(|c: char| !c.is_alphanumeric())
            .filter(|t| !t.is_empty())
            .map(str::to_owned)
            .collect();

        if tokens.is_empty() {
            return Err(ScoreError::EmptyText);
        }

        let mut total = 0.0;
        let mut matched = 0usize;
        let mut negated = false;
        let mut intensity = 1.0;

        for token in &tokens {
            if self.lexicon.is_negation(token) {
                negated = true;
                continue;
            }
            if let Some(level) = self.lexicon.intensity(token) {
                intensity = level;
                continue;
            }
            if let Some(weight) = self.lexicon.weight(token) {
                let mut score = weight * intensity;
                if negated {
                    // A negated sentiment flips sign at reduced strength.
                    score = -score * 0.5;
                }
                total += score;
                matched += 1;
            }
            negated = false;
            intensity = 1.0;
        }

        if matched == 0 {
            return Ok(0.0);
        }
        Ok((total / matched as f64).clamp(-1.0, 1.0))
    }
}
