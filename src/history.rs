//! history.rs: bounded in-memory log of analyses, plus the text export.

use anyhow::{Context, Result};
use chrono::{DateTime, Local};
use std::fmt::Write as _;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use crate::engine::{AnalysisResult, Method};
use crate::report::{preview, TEXT_PREVIEW_CHARS};

/// How many recent analyses an export contains.
pub const EXPORT_LAST_N: usize = 3;

/// Timestamp format of the text export.
pub const EXPORT_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

#[derive(Debug, Clone)]
pub struct HistoryEntry {
    pub at: DateTime<Local>,
    pub text: String,
    pub method: Method,
    pub result: AnalysisResult,
}

#[derive(Debug)]
pub struct History {
    inner: Mutex<Vec<HistoryEntry>>,
    cap: usize,
}

impl History {
    pub fn with_capacity(cap: usize) -> Self {
        let cap = cap.clamp(1, 10_000);
        Self {
            inner: Mutex::new(Vec::with_capacity(cap)),
            cap,
        }
    }

    pub fn push(&self, entry: HistoryEntry) {
        let mut v = self.inner.lock().expect("history mutex poisoned");
        v.push(entry);
        if v.len() > self.cap {
            let excess = v.len() - self.cap;
            v.drain(0..excess);
        }
    }

    /// Store an analysis; the text is kept as its 100-char preview.
    pub fn record(&self, text: &str, method: Method, result: &AnalysisResult) {
        self.push(HistoryEntry {
            at: Local::now(),
            text: preview(text, TEXT_PREVIEW_CHARS),
            method,
            result: result.clone(),
        });
    }

    /// Oldest first.
    pub fn snapshot_last_n(&self, n: usize) -> Vec<HistoryEntry> {
        let v = self.inner.lock().expect("history mutex poisoned");
        let start = v.len().saturating_sub(n);
        v[start..].to_vec()
    }

    pub fn len(&self) -> usize {
        self.inner.lock().expect("history mutex poisoned").len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Write the last three analyses to `dir/sentiment_analysis_<stamp>.txt`.
    /// Returns `None` when there is nothing to export.
    pub fn export_recent(&self, dir: &Path) -> Result<Option<PathBuf>> {
        let entries = self.snapshot_last_n(EXPORT_LAST_N);
        if entries.is_empty() {
            return Ok(None);
        }
        let name = format!(
            "sentiment_analysis_{}.txt",
            Local::now().format("%Y%m%d_%H%M%S")
        );
        let path = dir.join(name);
        fs::write(&path, render_export(&entries)?)
            .with_context(|| format!("writing export to {}", path.display()))?;
        Ok(Some(path))
    }
}

/// Plain-text dump: every section of each result, floats at 3 decimals.
pub fn render_export(entries: &[HistoryEntry]) -> Result<String> {
    let mut out = String::new();
    writeln!(out, "SENTIMENT ANALYSIS RESULTS")?;
    writeln!(out, "{}\n", "=".repeat(50))?;

    for e in entries {
        writeln!(out, "Timestamp: {}", e.at.format(EXPORT_TIME_FORMAT))?;
        writeln!(out, "Text: {}", e.text)?;
        writeln!(out, "Method: {}", e.method)?;
        writeln!(out, "{}", "-".repeat(30))?;

        let value = serde_json::to_value(&e.result).context("serializing result for export")?;
        let Some(sections) = value.as_object() else {
            continue;
        };
        for (section, data) in sections {
            writeln!(out, "{section}:")?;
            if let Some(fields) = data.as_object() {
                for (k, v) in fields {
                    writeln!(out, "  {k}: {}", format_value(v))?;
                }
            }
            writeln!(out)?;
        }
    }
    Ok(out)
}

fn format_value(v: &serde_json::Value) -> String {
    match v {
        serde_json::Value::Number(n) if n.is_f64() => {
            format!("{:.3}", n.as_f64().unwrap_or_default())
        }
        serde_json::Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
