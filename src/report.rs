// src/report.rs
//! Text report and JSON document built from an `AnalysisResult`.

use anyhow::{Context, Result};
use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::Path;

use crate::engine::{AnalysisResult, Method};

pub const RULE_WIDTH: usize = 60;
pub const TEXT_PREVIEW_CHARS: usize = 100;

/// First `max` chars of `text`, with `...` appended when cut.
pub fn preview(text: &str, max: usize) -> String {
    let mut out: String = text.chars().take(max).collect();
    if text.chars().count() > max {
        out.push_str("...");
    }
    out
}

/// Human-readable report: scores at 3 decimals, non-zero emotions only,
/// average word length at 1 decimal.
pub fn render_report(text: &str, result: &AnalysisResult, at: DateTime<Local>) -> String {
    Report { text, result, at }.to_string()
}

/// Borrowed view of one analysis, rendered through `Display`.
pub struct Report<'a> {
    pub text: &'a str,
    pub result: &'a AnalysisResult,
    pub at: DateTime<Local>,
}

impl fmt::Display for Report<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let heavy = "=".repeat(RULE_WIDTH);
        let light = "-".repeat(RULE_WIDTH);

        writeln!(f, "\n{heavy}")?;
        writeln!(f, "SENTIMENT ANALYSIS RESULTS")?;
        writeln!(f, "{heavy}")?;
        writeln!(f, "Text: {}", preview(self.text, TEXT_PREVIEW_CHARS))?;
        writeln!(f, "Analysis Time: {}", self.at.format("%Y-%m-%d %H:%M:%S"))?;
        writeln!(f, "{light}")?;

        if let Some(v) = self.result.vader() {
            writeln!(f, "VADER ANALYSIS:")?;
            writeln!(f, "  Sentiment: {}", v.sentiment)?;
            writeln!(f, "  Compound Score: {:.3}", v.compound)?;
            writeln!(f, "  Positive: {:.3}", v.positive)?;
            writeln!(f, "  Neutral: {:.3}", v.neutral)?;
            writeln!(f, "  Negative: {:.3}", v.negative)?;
            writeln!(f)?;
        }

        if let Some(t) = self.result.textblob() {
            writeln!(f, "TEXTBLOB ANALYSIS:")?;
            writeln!(f, "  Sentiment: {}", t.sentiment)?;
            writeln!(f, "  Polarity: {:.3}", t.polarity)?;
            writeln!(f, "  Subjectivity: {:.3}", t.subjectivity)?;
            writeln!(f)?;
        }

        let emotions = self.result.emotions();
        if emotions.any() {
            writeln!(f, "EMOTION ANALYSIS:")?;
            for (emotion, n) in emotions.non_zero() {
                writeln!(f, "  {}: {}", emotion.title(), n)?;
            }
            writeln!(f)?;
        }

        let s = self.result.statistics();
        writeln!(f, "TEXT STATISTICS:")?;
        writeln!(f, "  Total Words: {}", s.total_words)?;
        writeln!(f, "  Filtered Words: {}", s.filtered_words)?;
        writeln!(f, "  Sentences: {}", s.sentences)?;
        writeln!(f, "  Average Word Length: {:.1}", s.avg_word_length)?;
        writeln!(f)?;
        writeln!(f, "{heavy}")
    }
}

/// `{text, timestamp, method, results}` document for stdout, files and HTTP.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisDocument {
    pub text: String,
    /// Local time, ISO 8601 with microseconds.
    pub timestamp: String,
    pub method: Method,
    pub results: AnalysisResult,
}

impl AnalysisDocument {
    pub fn new(
        text: impl Into<String>,
        method: Method,
        results: AnalysisResult,
        at: DateTime<Local>,
    ) -> Self {
        Self {
            text: text.into(),
            timestamp: iso_timestamp(at),
            method,
            results,
        }
    }

    pub fn to_json_pretty(&self) -> Result<String> {
        serde_json::to_string_pretty(self).context("serializing analysis document")
    }

    pub fn write_to(&self, path: &Path) -> Result<()> {
        let json = self.to_json_pretty()?;
        fs::write(path, json).with_context(|| format!("writing results to {}", path.display()))
    }
}

pub fn iso_timestamp(at: DateTime<Local>) -> String {
    at.format("%Y-%m-%dT%H:%M:%S%.6f").to_string()
}
