// src/lib.rs
// Public library surface for the binaries and integration tests.

// Engine core
pub mod emotion;
pub mod engine;
pub mod error;
pub mod preprocess;
pub mod resources;
pub mod scoring;
pub mod stats;

// Presentation adapters over `AnalysisResult`
pub mod chart;
pub mod history;
pub mod interactive;
pub mod report;
pub mod samples;

// Runtime plumbing
pub mod api;
pub mod config;
pub mod metrics;
pub mod telemetry;

// ---- Re-exports for stable public API ----
pub use crate::api::router;
pub use crate::config::AnalyzerConfig;
pub use crate::emotion::{Emotion, EmotionScores};
pub use crate::engine::{AnalysisRequest, AnalysisResult, Analyzer, Method};
pub use crate::error::AnalyzeError;
pub use crate::resources::Resources;
pub use crate::scoring::{CompoundScore, PolaritySubjectivity, SentimentLabel};
pub use crate::stats::TextStats;

use tracing::info;

/// Startup sequence shared by the binaries: load config, load resources
/// once (failing fast), build the analyzer.
pub fn bootstrap() -> anyhow::Result<(AnalyzerConfig, Analyzer)> {
    let cfg = AnalyzerConfig::load()?;
    let resources = Resources::load(&cfg)?;
    info!(default_method = %cfg.default_method, "analyzer ready");
    Ok((cfg, Analyzer::new(resources)))
}
