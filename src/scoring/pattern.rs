// src/scoring/pattern.rs
//! Polarity / subjectivity scoring from a word lexicon.
//!
//! Every lexicon word found in the text becomes one assessment
//! `(polarity, subjectivity)`. Modifiers directly in front of it adjust it:
//! - an intensifier (`very`, `extremely`, ...) multiplies both values by its
//!   intensity,
//! - a negator (`not`, `n't`, `never`, ...) multiplies polarity by -0.5.
//!
//! Modifiers chain (`not very good`) but any other token clears them.
//! The result is the mean over assessments, clamped to [-1, 1] / [0, 1];
//! text without assessments scores (0, 0).

use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use super::{PolarityScorer, SentimentLabel};
use crate::error::{AnalyzeError, Result};
use crate::preprocess::Tokenizer;

/// Default lexicon shipped with the crate.
pub const EMBEDDED_LEXICON: &str = include_str!("../../resources/pattern_lexicon.json");

const NEGATION_FACTOR: f64 = -0.5;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PolaritySubjectivity {
    pub sentiment: SentimentLabel,
    pub polarity: f64,
    pub subjectivity: f64,
}

impl PolaritySubjectivity {
    pub fn new(polarity: f64, subjectivity: f64) -> Self {
        Self {
            sentiment: SentimentLabel::from_polarity(polarity),
            polarity,
            subjectivity,
        }
    }
}

/// On-disk shape of the lexicon (JSON).
#[derive(Debug, Deserialize)]
struct LexiconFile {
    words: HashMap<String, (f64, f64)>,
    #[serde(default)]
    intensifiers: HashMap<String, f64>,
    #[serde(default)]
    negators: Vec<String>,
}

#[derive(Debug)]
struct LexiconInner {
    words: HashMap<String, (f64, f64)>,
    intensifiers: HashMap<String, f64>,
    negators: HashSet<String>,
}

/// Parsed polarity lexicon, shared between clones.
#[derive(Debug, Clone)]
pub struct PatternLexicon(Arc<LexiconInner>);

impl PatternLexicon {
    pub fn from_json(raw: &str) -> Result<Self> {
        let file: LexiconFile =
            serde_json::from_str(raw).map_err(|e| AnalyzeError::resource("lexicon", e))?;
        if file.words.is_empty() {
            return Err(AnalyzeError::resource("lexicon", "no words defined"));
        }

        let mut words = HashMap::with_capacity(file.words.len());
        for (w, (p, s)) in file.words {
            if !(-1.0..=1.0).contains(&p) || !(0.0..=1.0).contains(&s) {
                return Err(AnalyzeError::resource(
                    "lexicon",
                    format!("entry '{w}' out of range: polarity {p}, subjectivity {s}"),
                ));
            }
            words.insert(w.to_lowercase(), (p, s));
        }

        Ok(Self(Arc::new(LexiconInner {
            words,
            intensifiers: file
                .intensifiers
                .into_iter()
                .map(|(k, v)| (k.to_lowercase(), v))
                .collect(),
            negators: file.negators.iter().map(|n| n.to_lowercase()).collect(),
        })))
    }

    pub fn embedded() -> Result<Self> {
        Self::from_json(EMBEDDED_LEXICON)
    }

    pub fn word(&self, w: &str) -> Option<(f64, f64)> {
        self.0.words.get(w).copied()
    }

    pub fn intensity(&self, w: &str) -> Option<f64> {
        self.0.intensifiers.get(w).copied()
    }

    pub fn is_negator(&self, w: &str) -> bool {
        self.0.negators.contains(w)
    }

    pub fn len(&self) -> usize {
        self.0.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.words.is_empty()
    }
}

#[derive(Debug, Clone)]
pub struct PatternScorer {
    tokenizer: Tokenizer,
    lexicon: PatternLexicon,
}

impl PatternScorer {
    pub fn new(tokenizer: Tokenizer, lexicon: PatternLexicon) -> Self {
        Self { tokenizer, lexicon }
    }

    fn assessments(&self, text: &str) -> Vec<(f64, f64)> {
        let mut out = Vec::new();
        let mut intensity = 1.0_f64;
        let mut negated = false;

        for tok in self.tokenizer.tokenize_lower(text) {
            let w = tok.as_str();
            if self.lexicon.is_negator(w) {
                negated = true;
                continue;
            }
            if let Some(k) = self.lexicon.intensity(w) {
                intensity *= k;
                continue;
            }
            if let Some((p, s)) = self.lexicon.word(w) {
                let mut p = p * intensity;
                if negated {
                    p *= NEGATION_FACTOR;
                }
                out.push((p.clamp(-1.0, 1.0), (s * intensity).clamp(0.0, 1.0)));
            }
            intensity = 1.0;
            negated = false;
        }
        out
    }
}

impl PolarityScorer for PatternScorer {
    type Output = PolaritySubjectivity;

    fn name(&self) -> &'static str {
        "textblob"
    }

    fn compute(&self, text: &str) -> PolaritySubjectivity {
        let a = self.assessments(text);
        if a.is_empty() {
            return PolaritySubjectivity::new(0.0, 0.0);
        }
        let n = a.len() as f64;
        let polarity = a.iter().map(|(p, _)| p).sum::<f64>() / n;
        let subjectivity = a.iter().map(|(_, s)| s).sum::<f64>() / n;
        PolaritySubjectivity::new(polarity.clamp(-1.0, 1.0), subjectivity.clamp(0.0, 1.0))
    }
}
