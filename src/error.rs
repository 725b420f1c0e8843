// src/error.rs
//! Error type for the analysis engine.
//!
//! Only two things can go wrong inside the crate: a caller names a method we
//! don't know, or a linguistic resource fails to load at startup. Everything
//! else (I/O at the edges, HTTP, terminal) is handled with `anyhow` by the
//! binaries.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum AnalyzeError {
    /// Unrecognized method selector. Valid values: `vader`, `textblob`, `both`.
    #[error("invalid argument: unknown analysis method '{0}' (expected vader, textblob or both)")]
    InvalidArgument(String),

    /// A stopword table, lexicon or tokenizer rule could not be loaded.
    /// Raised only from `Resources::load`, never from a request path.
    #[error("failed to load resource '{name}': {reason}")]
    Resource { name: String, reason: String },
}

impl AnalyzeError {
    pub(crate) fn resource(name: impl Into<String>, reason: impl ToString) -> Self {
        Self::Resource {
            name: name.into(),
            reason: reason.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, AnalyzeError>;
