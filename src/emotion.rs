// src/emotion.rs
//! Keyword-based emotion detection.
//!
//! Each emotion owns a small keyword list. A keyword counts once when it
//! appears anywhere in the lower-cased text, also inside a longer word
//! ("lovely" counts "love"). Lists overlap on purpose: "hate" feeds both
//! sadness and anger.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Emotion {
    Joy,
    Sadness,
    Anger,
    Fear,
    Surprise,
}

impl Emotion {
    pub const ALL: [Emotion; 5] = [
        Emotion::Joy,
        Emotion::Sadness,
        Emotion::Anger,
        Emotion::Fear,
        Emotion::Surprise,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Emotion::Joy => "joy",
            Emotion::Sadness => "sadness",
            Emotion::Anger => "anger",
            Emotion::Fear => "fear",
            Emotion::Surprise => "surprise",
        }
    }

    /// Capitalized name for reports and chart axes.
    pub fn title(&self) -> &'static str {
        match self {
            Emotion::Joy => "Joy",
            Emotion::Sadness => "Sadness",
            Emotion::Anger => "Anger",
            Emotion::Fear => "Fear",
            Emotion::Surprise => "Surprise",
        }
    }

    pub fn keywords(&self) -> &'static [&'static str] {
        match self {
            Emotion::Joy => &[
                "happy", "joy", "excited", "great", "wonderful", "amazing", "fantastic", "love",
                "like",
            ],
            Emotion::Sadness => &[
                "sad",
                "depressed",
                "unhappy",
                "terrible",
                "awful",
                "horrible",
                "disappointed",
                "hate",
            ],
            Emotion::Anger => &[
                "angry", "mad", "furious", "rage", "hate", "terrible", "awful", "horrible",
            ],
            Emotion::Fear => &[
                "afraid",
                "scared",
                "fear",
                "terrified",
                "worried",
                "anxious",
                "nervous",
            ],
            Emotion::Surprise => &[
                "surprised",
                "amazed",
                "shocked",
                "wow",
                "incredible",
                "unbelievable",
            ],
        }
    }
}

impl fmt::Display for Emotion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Count per emotion. Always holds all five emotions, zeros included.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EmotionScores(BTreeMap<Emotion, u32>);

impl EmotionScores {
    /// All emotions at zero.
    pub fn zeroed() -> Self {
        Self(Emotion::ALL.iter().map(|e| (*e, 0)).collect())
    }

    pub fn get(&self, e: Emotion) -> u32 {
        self.0.get(&e).copied().unwrap_or(0)
    }

    pub fn joy(&self) -> u32 {
        self.get(Emotion::Joy)
    }

    /// All five entries in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (Emotion, u32)> + '_ {
        self.0.iter().map(|(e, n)| (*e, *n))
    }

    /// Entries with a positive count, for presentation.
    pub fn non_zero(&self) -> impl Iterator<Item = (Emotion, u32)> + '_ {
        self.iter().filter(|(_, n)| *n > 0)
    }

    pub fn any(&self) -> bool {
        self.0.values().any(|n| *n > 0)
    }

    /// Sum of all counts; logged per analysis.
    pub fn total(&self) -> u32 {
        self.0.values().sum()
    }
}

impl Default for EmotionScores {
    fn default() -> Self {
        Self::zeroed()
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct EmotionDetector;

impl EmotionDetector {
    pub fn new() -> Self {
        Self
    }

    pub fn compute(&self, text: &str) -> EmotionScores {
        let lower = text.to_lowercase();
        let mut scores = EmotionScores::zeroed();
        for e in Emotion::ALL {
            let hits = e
                .keywords()
                .iter()
                .filter(|k| lower.contains(*k))
                .count() as u32;
            scores.0.insert(e, hits);
        }
        scores
    }
}
