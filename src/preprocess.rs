// src/preprocess.rs
//! Case folding, Treebank-style tokenization and stopword filtering.
//!
//! Tokens follow the conventions the statistics rely on:
//! punctuation marks are separate tokens and contraction suffixes are split
//! off (`don't` → `do`, `n't`; `it's` → `it`, `'s`). Only alphanumeric tokens
//! that are not stopwords count as content words.

use regex::Regex;
use std::collections::HashSet;
use std::sync::Arc;

use crate::error::{AnalyzeError, Result};

/// Default English stopword table shipped with the crate.
pub const EMBEDDED_STOPWORDS: &str = include_str!("../resources/stopwords_en.txt");

/// Treebank fixed splits: `cannot` → `can not`, `gonna` → `gon na`, `'tis` → `'t is`.
const FIXED_SPLITS: [&str; 8] = [
    r"(?i)\b(can)(not)\b",
    r"(?i)\b(gim)(me)\b",
    r"(?i)\b(gon)(na)\b",
    r"(?i)\b(got)(ta)\b",
    r"(?i)\b(lem)(me)\b",
    r"(?i)\b(wan)(na)\b",
    r"(?i)('t)(is)\b",
    r"(?i)('t)(was)\b",
];

/// Regex-driven word tokenizer. Cheap to clone (regexes are reference counted).
#[derive(Debug, Clone)]
pub struct Tokenizer {
    fixed: Vec<Regex>,
    negated: Regex,
    clitic: Regex,
    token: Regex,
}

impl Tokenizer {
    /// Compile the tokenizer rules. Called once while loading resources.
    pub fn new() -> Result<Self> {
        let compile =
            |name: &str, pat: &str| Regex::new(pat).map_err(|e| AnalyzeError::resource(name, e));
        let fixed = FIXED_SPLITS
            .iter()
            .map(|pat| compile("tokenizer.fixed", pat))
            .collect::<Result<Vec<_>>>()?;
        Ok(Self {
            fixed,
            negated: compile("tokenizer.negated", r"(?i)(\w)(n't)\b")?,
            clitic: compile("tokenizer.clitic", r"(?i)(\w)('(?:s|m|d|ll|re|ve))\b")?,
            token: compile(
                "tokenizer.token",
                r"(?iu)n't|'(?:s|m|d|ll|re|ve|t)\b|\d+(?:[.,]\d+)+|(?:[[:alpha:]]\.){2,}|\w+(?:[-']\w+)*|\.\.\.|[^\w\s]",
            )?,
        })
    }

    /// Split `text` into tokens, preserving case.
    pub fn tokenize(&self, text: &str) -> Vec<String> {
        let mut split = text.to_string();
        for re in &self.fixed {
            split = re.replace_all(&split, "$1 $2").into_owned();
        }
        let split = self.negated.replace_all(&split, "$1 $2");
        let split = self.clitic.replace_all(&split, "$1 $2");
        self.token
            .find_iter(&split)
            .map(|m| m.as_str().to_string())
            .collect()
    }

    /// Lower-case `text`, then tokenize.
    pub fn tokenize_lower(&self, text: &str) -> Vec<String> {
        self.tokenize(&text.to_lowercase())
    }
}

/// Immutable stopword set, shared between clones.
#[derive(Debug, Clone)]
pub struct Stopwords(Arc<HashSet<String>>);

impl Stopwords {
    /// Parse a one-word-per-line table. Blank lines and `#` comments are skipped.
    pub fn parse(raw: &str) -> Result<Self> {
        let set: HashSet<String> = raw
            .lines()
            .map(str::trim)
            .filter(|l| !l.is_empty() && !l.starts_with('#'))
            .map(str::to_lowercase)
            .collect();
        if set.is_empty() {
            return Err(AnalyzeError::resource("stopwords", "table is empty"));
        }
        Ok(Self(Arc::new(set)))
    }

    pub fn embedded() -> Result<Self> {
        Self::parse(EMBEDDED_STOPWORDS)
    }

    #[inline]
    pub fn contains(&self, word: &str) -> bool {
        self.0.contains(word)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// True when every char is alphanumeric (and there is at least one).
#[inline]
pub fn is_alphanumeric_token(tok: &str) -> bool {
    !tok.is_empty() && tok.chars().all(char::is_alphanumeric)
}

/// Tokenizer + stopword table, the shared front end of the engine.
#[derive(Debug, Clone)]
pub struct Preprocessor {
    tokenizer: Tokenizer,
    stopwords: Stopwords,
}

impl Preprocessor {
    pub fn new(tokenizer: Tokenizer, stopwords: Stopwords) -> Self {
        Self {
            tokenizer,
            stopwords,
        }
    }

    pub fn tokenizer(&self) -> &Tokenizer {
        &self.tokenizer
    }

    pub fn stopwords(&self) -> &Stopwords {
        &self.stopwords
    }

    /// Lower-cased word tokens of `text`, punctuation included.
    pub fn tokens(&self, text: &str) -> Vec<String> {
        self.tokenizer.tokenize_lower(text)
    }

    /// Content-bearing tokens: alphanumeric and not a stopword.
    pub fn content_words<'a>(&self, tokens: &'a [String]) -> Vec<&'a str> {
        tokens
            .iter()
            .map(String::as_str)
            .filter(|t| is_alphanumeric_token(t) && !self.stopwords.contains(t))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tk() -> Tokenizer {
        Tokenizer::new().expect("tokenizer rules compile")
    }

    #[test]
    fn punctuation_is_split_off() {
        let toks = tk().tokenize("I love this, it is great!");
        assert_eq!(toks, vec!["I", "love", "this", ",", "it", "is", "great", "!"]);
    }

    #[test]
    fn contractions_follow_treebank_split() {
        assert_eq!(tk().tokenize("don't"), vec!["do", "n't"]);
        assert_eq!(tk().tokenize("can't"), vec!["ca", "n't"]);
        assert_eq!(tk().tokenize("It's fine"), vec!["It", "'s", "fine"]);
        assert_eq!(tk().tokenize("I'm here"), vec!["I", "'m", "here"]);
    }

    #[test]
    fn fixed_treebank_splits() {
        assert_eq!(tk().tokenize("I cannot stay"), vec!["I", "can", "not", "stay"]);
        assert_eq!(tk().tokenize("Gonna win"), vec!["Gon", "na", "win"]);
        assert_eq!(tk().tokenize("wanna go"), vec!["wan", "na", "go"]);
        assert_eq!(tk().tokenize("'Tis true"), vec!["'T", "is", "true"]);
        // Only whole words split.
        assert_eq!(tk().tokenize("cannots gonnabe"), vec!["cannots", "gonnabe"]);
    }

    #[test]
    fn dotted_abbreviations_stay_whole() {
        assert_eq!(
            tk().tokenize("The U.S. economy, e.g. jobs"),
            vec!["The", "U.S.", "economy", ",", "e.g.", "jobs"]
        );
        assert_eq!(tk().tokenize("A. B."), vec!["A", ".", "B", "."]);
    }

    #[test]
    fn decimals_and_hyphens_stay_whole() {
        let toks = tk().tokenize("CPI cools to 3.2% in a well-known report");
        assert!(toks.contains(&"3.2".to_string()));
        assert!(toks.contains(&"%".to_string()));
        assert!(toks.contains(&"well-known".to_string()));
    }

    #[test]
    fn empty_text_has_no_tokens() {
        assert!(tk().tokenize("").is_empty());
        assert!(tk().tokenize("   \n\t").is_empty());
    }

    #[test]
    fn embedded_stopwords_cover_common_words() {
        let sw = Stopwords::embedded().unwrap();
        assert_eq!(sw.len(), 179);
        for w in ["the", "is", "it", "and", "don't", "very"] {
            assert!(sw.contains(w), "missing stopword {w}");
        }
        assert!(!sw.contains("love"));
    }

    #[test]
    fn stopword_parser_rejects_empty_table() {
        let err = Stopwords::parse("# only a comment\n\n").unwrap_err();
        assert!(matches!(err, AnalyzeError::Resource { .. }));
    }

    #[test]
    fn content_words_drop_stopwords_and_symbols() {
        let pre = Preprocessor::new(tk(), Stopwords::embedded().unwrap());
        let toks = pre.tokens("The product isn't BROKEN, it's great!");
        let content = pre.content_words(&toks);
        assert_eq!(content, vec!["product", "broken", "great"]);
    }

    #[test]
    fn alphanumeric_check_matches_unicode_letters() {
        assert!(is_alphanumeric_token("café"));
        assert!(is_alphanumeric_token("42"));
        assert!(!is_alphanumeric_token("n't"));
        assert!(!is_alphanumeric_token("well-known"));
        assert!(!is_alphanumeric_token(""));
    }
}
