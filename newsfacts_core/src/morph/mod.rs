//! Morphological analysis.
//!
//! The grammar and the semantic preprocessor only need two things from a
//! morphological analyzer: the normal form of a word and the grammemes it can
//! carry. [`MorphAnalyzer`] is that seam; [`LexiconAnalyzer`] is the built-in
//! dictionary/heuristic implementation.

mod analyzer;
mod builtin;
mod inflect;
mod lexicon;

use serde::{Deserialize, Serialize};
use std::str::FromStr;

pub use analyzer::LexiconAnalyzer;
pub use inflect::noun_forms;
pub use lexicon::{FormEntry, Lexicon, LexiconFile};

/// A morphological feature tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum Grammeme {
    /// Common noun.
    #[serde(rename = "NOUN")]
    Noun = 0,
    /// Verb, any form.
    #[serde(rename = "VERB")]
    Verb = 1,
    /// Preposition.
    #[serde(rename = "PREP")]
    Prep = 2,
    /// Numeral.
    #[serde(rename = "NUMR")]
    Numr = 3,
    /// Given name.
    Name = 4,
    /// Surname.
    Surn = 5,
    /// Patronymic.
    Patr = 6,
    /// Geographic entity.
    Geox = 7,
    /// Abbreviation.
    Abbr = 8,
    /// Latin-script word.
    #[serde(rename = "LATN")]
    Latn = 9,
    /// Unknown word.
    #[serde(rename = "UNKN")]
    Unkn = 10,
}

impl Grammeme {
    pub const ALL: [Self; 11] = [
        Self::Noun,
        Self::Verb,
        Self::Prep,
        Self::Numr,
        Self::Name,
        Self::Surn,
        Self::Patr,
        Self::Geox,
        Self::Abbr,
        Self::Latn,
        Self::Unkn,
    ];

    /// Returns the tag as written in `OpenCorpora` notation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Noun => "NOUN",
            Self::Verb => "VERB",
            Self::Prep => "PREP",
            Self::Numr => "NUMR",
            Self::Name => "Name",
            Self::Surn => "Surn",
            Self::Patr => "Patr",
            Self::Geox => "Geox",
            Self::Abbr => "Abbr",
            Self::Latn => "LATN",
            Self::Unkn => "UNKN",
        }
    }

    const fn bit(self) -> u16 {
        1 << (self as u8)
    }
}

impl FromStr for Grammeme {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|g| g.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| format!("unknown grammeme: {s}"))
    }
}

impl std::fmt::Display for Grammeme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Set of grammemes packed into a bitmask.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct GrammemeSet(u16);

impl GrammemeSet {
    #[must_use]
    pub const fn empty() -> Self {
        Self(0)
    }

    #[must_use]
    pub fn of(grammemes: &[Grammeme]) -> Self {
        grammemes.iter().fold(Self::empty(), |set, g| set.with(*g))
    }

    #[must_use]
    pub const fn with(self, grammeme: Grammeme) -> Self {
        Self(self.0 | grammeme.bit())
    }

    pub const fn insert(&mut self, grammeme: Grammeme) {
        self.0 |= grammeme.bit();
    }

    #[must_use]
    pub const fn contains(self, grammeme: Grammeme) -> bool {
        self.0 & grammeme.bit() != 0
    }

    #[must_use]
    pub const fn intersects(self, other: Self) -> bool {
        self.0 & other.0 != 0
    }

    #[must_use]
    pub const fn union(self, other: Self) -> Self {
        Self(self.0 | other.0)
    }

    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    pub fn iter(self) -> impl Iterator<Item = Grammeme> {
        Grammeme::ALL.into_iter().filter(move |g| self.contains(*g))
    }
}

impl FromIterator<Grammeme> for GrammemeSet {
    fn from_iter<T: IntoIterator<Item = Grammeme>>(iter: T) -> Self {
        iter.into_iter().fold(Self::empty(), Self::with)
    }
}

/// One reading of a word.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Parse {
    pub normal_form: String,
    pub grammemes: GrammemeSet,
}

impl Parse {
    #[must_use]
    pub fn new(normal_form: impl Into<String>, grammemes: GrammemeSet) -> Self {
        Self {
            normal_form: normal_form.into(),
            grammemes,
        }
    }
}

/// Lemma and grammeme lookup for single words.
pub trait MorphAnalyzer: Send + Sync {
    /// All readings of `word`, most likely first. Never empty.
    fn parse(&self, word: &str) -> Vec<Parse>;

    /// Canonical dictionary form of `word`.
    ///
    /// Implementations must be idempotent: normalizing a normal form returns
    /// it unchanged.
    fn normal_form(&self, word: &str) -> String {
        self.parse(word)
            .into_iter()
            .next()
            .map_or_else(|| word.to_lowercase(), |p| p.normal_form)
    }

    /// Union of the grammemes over every reading of `word`.
    fn grammemes(&self, word: &str) -> GrammemeSet {
        self.parse(word)
            .iter()
            .fold(GrammemeSet::empty(), |acc, p| acc.union(p.grammemes))
    }
}
