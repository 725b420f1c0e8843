// src/resources.rs
//! One-time loading of linguistic resources.
//!
//! Everything the engine needs besides code (tokenizer rules, stopword table,
//! polarity lexicon) is loaded here, once, before the first request. A broken
//! override file fails the load instead of surfacing mid-request.

use std::fs;
use std::path::Path;
use tracing::info;

use crate::config::AnalyzerConfig;
use crate::error::{AnalyzeError, Result};
use crate::preprocess::{Preprocessor, Stopwords, Tokenizer};
use crate::scoring::PatternLexicon;

#[derive(Debug, Clone)]
pub struct Resources {
    pub preprocessor: Preprocessor,
    pub lexicon: PatternLexicon,
}

impl Resources {
    /// Resources compiled into the binary.
    pub fn embedded() -> Result<Self> {
        Self::assemble(Stopwords::embedded()?, PatternLexicon::embedded()?)
    }

    /// Embedded resources, replaced by any override paths in `cfg`.
    pub fn load(cfg: &AnalyzerConfig) -> Result<Self> {
        let stopwords = match &cfg.stopwords_path {
            Some(p) => Stopwords::parse(&read_resource("stopwords", p)?)?,
            None => Stopwords::embedded()?,
        };
        let lexicon = match &cfg.lexicon_path {
            Some(p) => PatternLexicon::from_json(&read_resource("lexicon", p)?)?,
            None => PatternLexicon::embedded()?,
        };
        Self::assemble(stopwords, lexicon)
    }

    fn assemble(stopwords: Stopwords, lexicon: PatternLexicon) -> Result<Self> {
        let tokenizer = Tokenizer::new()?;
        info!(
            stopwords = stopwords.len(),
            lexicon_words = lexicon.len(),
            "linguistic resources loaded"
        );
        Ok(Self {
            preprocessor: Preprocessor::new(tokenizer, stopwords),
            lexicon,
        })
    }
}

fn read_resource(name: &str, path: &Path) -> Result<String> {
    fs::read_to_string(path)
        .map_err(|e| AnalyzeError::resource(name, format!("{}: {e}", path.display())))
}
