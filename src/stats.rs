// src/stats.rs
//! Descriptive text statistics.

use serde::{Deserialize, Serialize};

use crate::preprocess::Preprocessor;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TextStats {
    pub total_words: usize,
    pub filtered_words: usize,
    /// Naive sentence count, see [`sentence_count`].
    pub sentences: usize,
    pub avg_word_length: f64,
}

impl TextStats {
    pub fn sentence_count(&self) -> usize {
        self.sentences
    }
}

/// Number of segments produced by splitting on `.`.
///
/// Not a sentence detector: `"A. B. C."` gives 4 (the trailing empty segment
/// counts) and text without a period gives 1.
pub fn sentence_count(text: &str) -> usize {
    text.split('.').count()
}

#[derive(Debug, Clone)]
pub struct TextStatistics {
    pre: Preprocessor,
}

impl TextStatistics {
    pub fn new(pre: Preprocessor) -> Self {
        Self { pre }
    }

    pub fn compute(&self, text: &str) -> TextStats {
        let tokens = self.pre.tokens(text);
        let content = self.pre.content_words(&tokens);

        let avg_word_length = if content.is_empty() {
            0.0
        } else {
            let chars: usize = content.iter().map(|w| w.chars().count()).sum();
            chars as f64 / content.len() as f64
        };

        TextStats {
            total_words: tokens.len(),
            filtered_words: content.len(),
            sentences: sentence_count(text),
            avg_word_length,
        }
    }
}
