//! # Analysis Engine
//! Pure, testable logic that maps `(text, method)` → `AnalysisResult`.
//! No I/O after construction; safe to share across threads.
//!
//! Policy: the method selects which polarity scorer(s) run; emotion detection
//! and text statistics always run. Results depend only on the inputs.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing::{debug, enabled, Level};

use crate::emotion::{EmotionDetector, EmotionScores};
use crate::error::{AnalyzeError, Result};
use crate::resources::Resources;
use crate::scoring::{
    CompoundScore, PatternScorer, PolarityScorer, PolaritySubjectivity, VaderScorer,
};
use crate::stats::{TextStatistics, TextStats};
use crate::telemetry::anon_hash;

/// Which polarity scorer(s) to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Method {
    /// Compound / positive / neutral / negative.
    Vader,
    /// Polarity / subjectivity.
    TextBlob,
    Both,
}

impl Method {
    pub const ALL: [Method; 3] = [Method::Vader, Method::TextBlob, Method::Both];

    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Vader => "vader",
            Method::TextBlob => "textblob",
            Method::Both => "both",
        }
    }

    pub fn runs_vader(&self) -> bool {
        matches!(self, Method::Vader | Method::Both)
    }

    pub fn runs_textblob(&self) -> bool {
        matches!(self, Method::TextBlob | Method::Both)
    }
}

impl FromStr for Method {
    type Err = AnalyzeError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "vader" => Ok(Method::Vader),
            "textblob" => Ok(Method::TextBlob),
            "both" => Ok(Method::Both),
            _ => Err(AnalyzeError::InvalidArgument(s.to_string())),
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisRequest {
    pub text: String,
    pub method: Method,
}

impl AnalysisRequest {
    pub fn new(text: impl Into<String>, method: Method) -> Self {
        Self {
            text: text.into(),
            method,
        }
    }
}

/// Everything computed for one text. Read-only once built.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    vader: Option<CompoundScore>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    textblob: Option<PolaritySubjectivity>,
    emotions: EmotionScores,
    statistics: TextStats,
}

impl AnalysisResult {
    pub fn vader(&self) -> Option<&CompoundScore> {
        self.vader.as_ref()
    }

    pub fn textblob(&self) -> Option<&PolaritySubjectivity> {
        self.textblob.as_ref()
    }

    pub fn emotions(&self) -> &EmotionScores {
        &self.emotions
    }

    pub fn statistics(&self) -> &TextStats {
        &self.statistics
    }
}

/// The aggregator: owns one instance of every component.
#[derive(Debug)]
pub struct Analyzer {
    vader: VaderScorer,
    pattern: PatternScorer,
    emotions: EmotionDetector,
    stats: TextStatistics,
}

impl Analyzer {
    pub fn new(resources: Resources) -> Self {
        let Resources {
            preprocessor,
            lexicon,
        } = resources;
        Self {
            vader: VaderScorer::new(),
            pattern: PatternScorer::new(preprocessor.tokenizer().clone(), lexicon),
            emotions: EmotionDetector::new(),
            stats: TextStatistics::new(preprocessor),
        }
    }

    /// Analyzer over the embedded resources.
    pub fn with_embedded() -> Result<Self> {
        Ok(Self::new(Resources::embedded()?))
    }

    /// String-selector entry point: fails only on an unknown method name.
    pub fn analyze(&self, text: &str, method: &str) -> Result<AnalysisResult> {
        let method: Method = method.parse()?;
        Ok(self.analyze_with(text, method))
    }

    pub fn analyze_with(&self, text: &str, method: Method) -> AnalysisResult {
        let vader = method.runs_vader().then(|| self.vader.compute(text));
        let textblob = method.runs_textblob().then(|| self.pattern.compute(text));
        let result = AnalysisResult {
            vader,
            textblob,
            emotions: self.emotions.compute(text),
            statistics: self.stats.compute(text),
        };

        if enabled!(Level::DEBUG) {
            let id = anon_hash(text);
            if let Some(v) = &result.vader {
                debug!(
                    %id,
                    scorer = self.vader.name(),
                    compound = v.compound,
                    label = %v.sentiment,
                    "scored"
                );
            }
            if let Some(t) = &result.textblob {
                debug!(
                    %id,
                    scorer = self.pattern.name(),
                    polarity = t.polarity,
                    label = %t.sentiment,
                    "scored"
                );
            }
            debug!(
                %id,
                %method,
                emotion_hits = result.emotions.total(),
                words = result.statistics.total_words,
                "analysis done"
            );
        }
        result
    }

    pub fn aggregate(&self, req: &AnalysisRequest) -> AnalysisResult {
        self.analyze_with(&req.text, req.method)
    }
}
