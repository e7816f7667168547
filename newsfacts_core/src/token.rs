//! Tokenization with morphological annotation.

use regex::Regex;
use std::ops::Range;
use std::sync::{Arc, OnceLock};

use crate::morph::{GrammemeSet, MorphAnalyzer};

/// Words (hyphenated compounds kept whole), ASCII integers, single symbols.
static TOKEN_PATTERN: OnceLock<Regex> = OnceLock::new();

#[expect(
    clippy::expect_used,
    reason = "Static regex pattern validated at compile time"
)]
fn token_pattern() -> &'static Regex {
    TOKEN_PATTERN.get_or_init(|| {
        Regex::new(r"\p{L}+(?:-\p{L}+)*|[0-9]+|[^\s\p{L}0-9]")
            .expect("Static regex pattern is guaranteed to be valid")
    })
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    Word,
    Int,
    Punct,
}

#[derive(Debug, Clone)]
pub struct Token {
    pub text: String,
    /// Byte range in the source text.
    pub span: Range<usize>,
    pub kind: TokenKind,
    /// Parsed value of an `Int` token, `None` on overflow.
    pub value: Option<i64>,
    pub normal_form: String,
    /// Union over all readings.
    pub grammemes: GrammemeSet,
}

impl Token {
    #[must_use]
    pub fn is_capitalized(&self) -> bool {
        self.text.chars().next().is_some_and(char::is_uppercase)
    }
}

/// Splits text into words, integers and punctuation and annotates each word
/// through a [`MorphAnalyzer`].
#[derive(Clone)]
pub struct Tokenizer {
    analyzer: Arc<dyn MorphAnalyzer>,
}

impl Tokenizer {
    #[must_use]
    pub fn new(analyzer: Arc<dyn MorphAnalyzer>) -> Self {
        Self { analyzer }
    }

    #[must_use]
    pub fn analyzer(&self) -> &Arc<dyn MorphAnalyzer> {
        &self.analyzer
    }

    #[must_use]
    pub fn tokenize(&self, text: &str) -> Vec<Token> {
        token_pattern()
            .find_iter(text)
            .map(|m| self.annotate(m.as_str(), m.range()))
            .collect()
    }

    fn annotate(&self, text: &str, span: Range<usize>) -> Token {
        let first = text.chars().next();
        let kind = match first {
            Some(c) if c.is_ascii_digit() => TokenKind::Int,
            Some(c) if c.is_alphabetic() => TokenKind::Word,
            _ => TokenKind::Punct,
        };

        let (normal_form, grammemes, value) = match kind {
            TokenKind::Punct => (text.to_string(), GrammemeSet::empty(), None),
            TokenKind::Int => (
                text.to_string(),
                self.analyzer.grammemes(text),
                text.parse::<i64>().ok(),
            ),
            TokenKind::Word => {
                let readings = self.analyzer.parse(text);
                let grammemes = readings
                    .iter()
                    .fold(GrammemeSet::empty(), |acc, p| acc.union(p.grammemes));
                let normal_form = readings
                    .into_iter()
                    .next()
                    .map_or_else(|| text.to_lowercase(), |p| p.normal_form);
                (normal_form, grammemes, None)
            }
        };

        Token {
            text: text.to_string(),
            span,
            kind,
            value,
            normal_form,
            grammemes,
        }
    }
}

impl std::fmt::Debug for Tokenizer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Tokenizer").finish_non_exhaustive()
    }
}
