//! Atomic token predicates.

use newsfacts_core::{Grammeme, GrammemeSet, Token, TokenKind};
use std::collections::HashSet;

/// A test on a single token.
#[derive(Debug, Clone)]
pub enum Predicate {
    /// Token carries at least one of the grammemes.
    Gram(GrammemeSet),
    /// First character is uppercase.
    Capitalized,
    /// Token is an integer.
    Int,
    /// Integer value is at least the bound.
    Gte(i64),
    /// Integer value is at most the bound.
    Lte(i64),
    /// Normal form is one of the words.
    Dictionary(HashSet<String>),
    /// Every inner predicate holds.
    And(Vec<Self>),
    /// The inner predicate fails.
    Not(Box<Self>),
}

impl Predicate {
    #[must_use]
    pub fn gram(grammeme: Grammeme) -> Self {
        Self::Gram(GrammemeSet::of(&[grammeme]))
    }

    #[must_use]
    pub fn gram_any(grammemes: &[Grammeme]) -> Self {
        Self::Gram(GrammemeSet::of(grammemes))
    }

    /// Words are stored lowercased; matching is on the token's normal form.
    #[must_use]
    pub fn dictionary<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self::Dictionary(
            words
                .into_iter()
                .map(|w| w.as_ref().to_lowercase().replace('ё', "е"))
                .collect(),
        )
    }

    #[must_use]
    pub const fn and(predicates: Vec<Self>) -> Self {
        Self::And(predicates)
    }

    #[must_use]
    pub fn negate(predicate: Self) -> Self {
        Self::Not(Box::new(predicate))
    }

    /// Integer within `[min, max]`.
    #[must_use]
    pub fn int_between(min: i64, max: i64) -> Self {
        Self::And(vec![Self::Int, Self::Gte(min), Self::Lte(max)])
    }

    #[must_use]
    pub fn test(&self, token: &Token) -> bool {
        match self {
            Self::Gram(set) => token.grammemes.intersects(*set),
            Self::Capitalized => token.is_capitalized(),
            Self::Int => token.kind == TokenKind::Int,
            Self::Gte(bound) => token.value.is_some_and(|v| v >= *bound),
            Self::Lte(bound) => token.value.is_some_and(|v| v <= *bound),
            Self::Dictionary(words) => words.contains(&token.normal_form),
            Self::And(inner) => inner.iter().all(|p| p.test(token)),
            Self::Not(inner) => !inner.test(token),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use newsfacts_core::{LexiconAnalyzer, Tokenizer};
    use std::sync::Arc;

    fn tokens(text: &str) -> Vec<Token> {
        Tokenizer::new(Arc::new(LexiconAnalyzer::with_defaults())).tokenize(text)
    }

    #[test]
    fn int_bounds() {
        let day = Predicate::int_between(1, 31);
        let toks = tokens("0 1 31 32 май");
        let accepted: Vec<_> = toks.iter().map(|t| day.test(t)).collect();
        assert_eq!(accepted, vec![false, true, true, false, false]);
    }

    #[test]
    fn dictionary_uses_normal_form() {
        let months = Predicate::dictionary(["май", "март"]);
        let toks = tokens("мая марте апреля");
        assert!(months.test(&toks[0]));
        assert!(months.test(&toks[1]));
        assert!(!months.test(&toks[2]));
    }

    #[test]
    fn capitalized_geo() {
        let place = Predicate::and(vec![Predicate::gram(Grammeme::Geox), Predicate::Capitalized]);
        let toks = tokens("Москве москве Иване");
        assert!(place.test(&toks[0]));
        assert!(!place.test(&toks[1]));
        assert!(!place.test(&toks[2]));
    }

    #[test]
    fn gram_any_matches_one_of() {
        let person = Predicate::gram_any(&[Grammeme::Name, Grammeme::Surn, Grammeme::Patr]);
        let toks = tokens("Иванов Иван Петрович Москва");
        assert!(person.test(&toks[0]));
        assert!(person.test(&toks[1]));
        assert!(person.test(&toks[2]));
        assert!(!person.test(&toks[3]));
    }

    #[test]
    fn negation_inverts() {
        let not_name = Predicate::negate(Predicate::gram(Grammeme::Name));
        let toks = tokens("Иван Иванов");
        assert!(!not_name.test(&toks[0]));
        assert!(not_name.test(&toks[1]));
    }
}
