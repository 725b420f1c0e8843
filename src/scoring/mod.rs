// src/scoring/mod.rs
//! Polarity scoring strategies.
//!
//! Two independent scorers share one small contract: `compute(text)` is total
//! over every string (empty included), never blocks, and maps its numeric
//! output to a [`SentimentLabel`] with a pure threshold rule.
//!
//! - [`vader::VaderScorer`]: compound / positive / neutral / negative,
//!   labelled with a ±0.05 neutral band.
//! - [`pattern::PatternScorer`]: polarity / subjectivity, labelled by sign
//!   with no neutral band.

pub mod pattern;
pub mod vader;

use serde::{Deserialize, Serialize};
use std::fmt;

pub use pattern::{PatternLexicon, PatternScorer, PolaritySubjectivity};
pub use vader::{CompoundScore, VaderScorer};

/// Compound scores at or beyond ±this value leave the neutral band.
pub const COMPOUND_NEUTRAL_BAND: f64 = 0.05;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SentimentLabel {
    Positive,
    Negative,
    Neutral,
}

impl SentimentLabel {
    /// Label for a compound score: `>= 0.05` positive, `<= -0.05` negative.
    pub fn from_compound(compound: f64) -> Self {
        if compound >= COMPOUND_NEUTRAL_BAND {
            Self::Positive
        } else if compound <= -COMPOUND_NEUTRAL_BAND {
            Self::Negative
        } else {
            Self::Neutral
        }
    }

    /// Label for a polarity score, by sign only.
    pub fn from_polarity(polarity: f64) -> Self {
        if polarity > 0.0 {
            Self::Positive
        } else if polarity < 0.0 {
            Self::Negative
        } else {
            Self::Neutral
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Positive => "Positive",
            Self::Negative => "Negative",
            Self::Neutral => "Neutral",
        }
    }
}

impl fmt::Display for SentimentLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A polarity scoring strategy.
pub trait PolarityScorer: Send + Sync {
    type Output;

    /// Short name used in debug logs; matches the `Method` selector (`vader`, `textblob`).
    fn name(&self) -> &'static str;

    fn compute(&self, text: &str) -> Self::Output;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn compound_band_edges_are_inclusive() {
        assert_eq!(SentimentLabel::from_compound(0.05), SentimentLabel::Positive);
        assert_eq!(SentimentLabel::from_compound(-0.05), SentimentLabel::Negative);
        assert_eq!(SentimentLabel::from_compound(0.049_999), SentimentLabel::Neutral);
        assert_eq!(SentimentLabel::from_compound(-0.049_999), SentimentLabel::Neutral);
        assert_eq!(SentimentLabel::from_compound(0.0), SentimentLabel::Neutral);
        assert_eq!(SentimentLabel::from_compound(1.0), SentimentLabel::Positive);
        assert_eq!(SentimentLabel::from_compound(-1.0), SentimentLabel::Negative);
    }

    #[test]
    fn polarity_has_no_neutral_band() {
        assert_eq!(SentimentLabel::from_polarity(0.0), SentimentLabel::Neutral);
        assert_eq!(SentimentLabel::from_polarity(0.001), SentimentLabel::Positive);
        assert_eq!(SentimentLabel::from_polarity(-0.001), SentimentLabel::Negative);
        // Inside the compound band but still signed.
        assert_eq!(SentimentLabel::from_polarity(0.03), SentimentLabel::Positive);
    }

    #[test]
    fn label_serializes_capitalized() {
        let s = serde_json::to_string(&SentimentLabel::Neutral).unwrap();
        assert_eq!(s, "\"Neutral\"");
        assert_eq!(SentimentLabel::Negative.to_string(), "Negative");
    }
}
