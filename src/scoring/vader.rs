// src/scoring/vader.rs
//! Compound / positive / neutral / negative scoring on top of VADER.

use serde::{Deserialize, Serialize};
use vader_sentiment::SentimentIntensityAnalyzer;

use super::{PolarityScorer, SentimentLabel};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CompoundScore {
    pub sentiment: SentimentLabel,
    pub compound: f64,
    pub positive: f64,
    pub neutral: f64,
    pub negative: f64,
}

impl CompoundScore {
    /// Builds a score and derives its label from `compound`.
    pub fn new(compound: f64, positive: f64, neutral: f64, negative: f64) -> Self {
        Self {
            sentiment: SentimentLabel::from_compound(compound),
            compound,
            positive,
            neutral,
            negative,
        }
    }

    /// All-zero score used for blank input.
    pub fn zero() -> Self {
        Self::new(0.0, 0.0, 0.0, 0.0)
    }
}

/// Thread-safe VADER wrapper; the lexicons are static inside `vader_sentiment`.
pub struct VaderScorer {
    analyzer: SentimentIntensityAnalyzer<'static>,
}

impl VaderScorer {
    pub fn new() -> Self {
        Self {
            analyzer: SentimentIntensityAnalyzer::new(),
        }
    }
}

impl Default for VaderScorer {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for VaderScorer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("VaderScorer").finish_non_exhaustive()
    }
}

impl PolarityScorer for VaderScorer {
    type Output = CompoundScore;

    fn name(&self) -> &'static str {
        "vader"
    }

    fn compute(&self, text: &str) -> CompoundScore {
        if text.trim().is_empty() {
            return CompoundScore::zero();
        }

        let scores = self.analyzer.polarity_scores(text);
        let get = |k: &str| scores.get(k).copied().unwrap_or(0.0);
        let (pos, neg) = (get("pos"), get("neg"));
        // `!`/`?` emphasis only amplifies a non-zero sentiment sum;
        // vader_sentiment 0.1.1 applies it to a zero sum as well.
        let compound = if pos == 0.0 && neg == 0.0 {
            0.0
        } else {
            get("compound").clamp(-1.0, 1.0)
        };
        CompoundScore::new(compound, pos, get("neu"), neg)
    }
}
