// src/config.rs
//! Runtime configuration: TOML file + `.env` + environment overrides.
//!
//! Lookup order:
//! 1) `$ANALYZER_CONFIG_PATH` (must exist when set)
//! 2) `config/analyzer.toml` (optional; defaults when missing)
//! 3) individual `ANALYZER_*` env vars override file values
//!
//! ```toml
//! default_method = "both"
//! stopwords_path = "resources/stopwords_en.txt"
//! lexicon_path = "resources/pattern_lexicon.json"
//! history_cap = 100
//! bind = "127.0.0.1:8080"
//! ```

use anyhow::{anyhow, Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

use crate::engine::Method;

// --- env defaults & names ---
pub const DEFAULT_CONFIG_PATH: &str = "config/analyzer.toml";
pub const DEFAULT_BIND: &str = "127.0.0.1:8080";
pub const DEFAULT_HISTORY_CAP: usize = 100;
const MAX_HISTORY_CAP: usize = 10_000;

pub const ENV_CONFIG_PATH: &str = "ANALYZER_CONFIG_PATH";
pub const ENV_DEFAULT_METHOD: &str = "ANALYZER_DEFAULT_METHOD";
pub const ENV_STOPWORDS_PATH: &str = "ANALYZER_STOPWORDS_PATH";
pub const ENV_LEXICON_PATH: &str = "ANALYZER_LEXICON_PATH";
pub const ENV_HISTORY_CAP: &str = "ANALYZER_HISTORY_CAP";
pub const ENV_BIND: &str = "ANALYZER_BIND";

#[derive(Debug, Clone, PartialEq)]
pub struct AnalyzerConfig {
    pub default_method: Method,
    /// Replaces the embedded stopword table when set.
    pub stopwords_path: Option<PathBuf>,
    /// Replaces the embedded polarity lexicon when set.
    pub lexicon_path: Option<PathBuf>,
    pub history_cap: usize,
    pub bind: String,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            default_method: Method::Both,
            stopwords_path: None,
            lexicon_path: None,
            history_cap: DEFAULT_HISTORY_CAP,
            bind: DEFAULT_BIND.to_string(),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct FileConfig {
    default_method: Option<String>,
    stopwords_path: Option<PathBuf>,
    lexicon_path: Option<PathBuf>,
    history_cap: Option<usize>,
    bind: Option<String>,
}

impl AnalyzerConfig {
    /// Load `.env`, the config file and env overrides.
    pub fn load() -> Result<Self> {
        // No-op when there is no .env file.
        let _ = dotenvy::dotenv();

        let mut cfg = match std::env::var(ENV_CONFIG_PATH) {
            Ok(p) => {
                let pb = PathBuf::from(p);
                if !pb.exists() {
                    return Err(anyhow!(
                        "{ENV_CONFIG_PATH} points to non-existent path {}",
                        pb.display()
                    ));
                }
                Self::from_file(&pb)?
            }
            Err(_) => {
                let default = Path::new(DEFAULT_CONFIG_PATH);
                if default.exists() {
                    Self::from_file(default)?
                } else {
                    Self::default()
                }
            }
        };
        cfg.apply_env()?;
        Ok(cfg)
    }

    /// Parse a TOML file; fields left out keep their defaults.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("reading analyzer config from {}", path.display()))?;
        Self::from_toml_str(&content)
            .with_context(|| format!("parsing analyzer config {}", path.display()))
    }

    pub fn from_toml_str(s: &str) -> Result<Self> {
        let file: FileConfig = toml::from_str(s)?;
        let mut cfg = Self::default();
        if let Some(m) = file.default_method {
            cfg.default_method = m.parse()?;
        }
        cfg.stopwords_path = file.stopwords_path;
        cfg.lexicon_path = file.lexicon_path;
        if let Some(cap) = file.history_cap {
            cfg.history_cap = clamp_cap(cap);
        }
        if let Some(bind) = file.bind {
            cfg.bind = bind;
        }
        Ok(cfg)
    }

    fn apply_env(&mut self) -> Result<()> {
        if let Some(m) = env_nonempty(ENV_DEFAULT_METHOD) {
            self.default_method = m
                .parse()
                .with_context(|| format!("{ENV_DEFAULT_METHOD}={m}"))?;
        }
        if let Some(p) = env_nonempty(ENV_STOPWORDS_PATH) {
            self.stopwords_path = Some(PathBuf::from(p));
        }
        if let Some(p) = env_nonempty(ENV_LEXICON_PATH) {
            self.lexicon_path = Some(PathBuf::from(p));
        }
        if let Some(raw) = env_nonempty(ENV_HISTORY_CAP) {
            let cap: usize = raw
                .parse()
                .with_context(|| format!("{ENV_HISTORY_CAP} must be an integer, got '{raw}'"))?;
            self.history_cap = clamp_cap(cap);
        }
        if let Some(b) = env_nonempty(ENV_BIND) {
            self.bind = b;
        }
        Ok(())
    }
}

fn env_nonempty(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn clamp_cap(cap: usize) -> usize {
    cap.clamp(1, MAX_HISTORY_CAP)
}
