//! Text preprocessing shared by training, expansion and search.

use newsfacts_core::{LexiconAnalyzer, MorphAnalyzer};
use regex::Regex;
use std::collections::HashSet;
use std::sync::{Arc, OnceLock};

use crate::config::SemanticConfig;
use crate::stopwords;

/// Shortest and longest raw token kept by [`simple_tokens`].
const RAW_TOKEN_CHARS: (usize, usize) = (2, 15);

static WORD_PATTERN: OnceLock<Regex> = OnceLock::new();

#[expect(
    clippy::expect_used,
    reason = "Static regex pattern validated at compile time"
)]
fn word_pattern() -> &'static Regex {
    WORD_PATTERN.get_or_init(|| {
        Regex::new(r"\p{L}+").expect("Static regex pattern is guaranteed to be valid")
    })
}

/// Lowercase alphabetic runs of 2 to 15 characters. Digits and punctuation
/// split words; longer or shorter runs are dropped, not truncated.
pub fn simple_tokens(text: &str) -> impl Iterator<Item = String> + '_ {
    word_pattern()
        .find_iter(text)
        .map(|m| m.as_str().to_lowercase())
        .filter(|token| {
            let len = token.chars().count();
            (RAW_TOKEN_CHARS.0..=RAW_TOKEN_CHARS.1).contains(&len)
        })
}

/// Tokenizer, stopword filter and normalizer in one context object.
pub struct Preprocessor {
    analyzer: Arc<dyn MorphAnalyzer>,
    stopwords: HashSet<String>,
    min_token_len: usize,
}

impl Preprocessor {
    #[must_use]
    pub fn new(
        analyzer: Arc<dyn MorphAnalyzer>,
        extra_stopwords: &[String],
        min_token_len: usize,
    ) -> Self {
        let stopwords = stopwords::defaults()
            .map(str::to_string)
            .chain(extra_stopwords.iter().map(|w| fold_yo(&w.to_lowercase())))
            .collect();
        Self {
            analyzer,
            stopwords,
            min_token_len,
        }
    }

    #[must_use]
    pub fn from_config(analyzer: Arc<dyn MorphAnalyzer>, config: &SemanticConfig) -> Self {
        Self::new(analyzer, &config.extra_stopwords, config.min_token_len)
    }

    #[must_use]
    pub fn with_defaults() -> Self {
        Self::from_config(
            Arc::new(LexiconAnalyzer::with_defaults()),
            &SemanticConfig::default(),
        )
    }

    #[must_use]
    pub fn is_stopword(&self, token: &str) -> bool {
        self.stopwords.contains(&fold_yo(&token.to_lowercase()))
    }

    /// Tokenize, drop stopwords and short tokens, then normalize.
    #[must_use]
    pub fn preprocess(&self, text: &str) -> Vec<String> {
        simple_tokens(text)
            .filter(|token| !self.is_stopword(token))
            .filter(|token| token.chars().count() >= self.min_token_len)
            .map(|token| self.normalize(&token))
            .collect()
    }

    /// Normal form of a single word. Idempotent.
    #[must_use]
    pub fn normalize(&self, word: &str) -> String {
        self.analyzer.normal_form(word)
    }

    #[must_use]
    pub fn stopword_count(&self) -> usize {
        self.stopwords.len()
    }
}

impl std::fmt::Debug for Preprocessor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Preprocessor")
            .field("stopwords", &self.stopwords.len())
            .field("min_token_len", &self.min_token_len)
            .finish_non_exhaustive()
    }
}

fn fold_yo(word: &str) -> String {
    word.replace('ё', "е")
}
