//! The birth-fact grammar.

use newsfacts_core::{Grammeme, Tokenizer};
use serde::{Deserialize, Serialize};

use crate::fact::Slot;
use crate::predicate::Predicate;
use crate::rule::Rule;

pub const MONTH_NAMES: [&str; 12] = [
    "январь", "февраль", "март", "апрель", "май", "июнь", "июль", "август", "сентябрь", "октябрь",
    "ноябрь", "декабрь",
];
pub const YEAR_WORDS: [&str; 2] = ["год", "г."];
pub const LOCATIVE_PREPOSITIONS: [&str; 3] = ["в", "во", "из"];
pub const BIRTH_WORDS: [&str; 5] = ["родился", "родилась", "родились", "уроженец", "уроженка"];

pub const DAY_RANGE: (i64, i64) = (1, 31);
pub const YEAR_RANGE: (i64, i64) = (1000, 2100);

/// Sentence shapes a birth fact can take, in matching priority.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BirthPattern {
    /// "Иванов Иван родился 5 мая 1980 года в Москве"
    NameVerbDatePlace,
    /// "Иванов родился в Москве"
    NameVerbPlace,
    /// "уроженец Москвы Иван Петров"
    VerbPlaceName,
}

impl BirthPattern {
    pub const ALL: [Self; 3] = [Self::NameVerbDatePlace, Self::NameVerbPlace, Self::VerbPlaceName];

    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::NameVerbDatePlace => "name_verb_date_place",
            Self::NameVerbPlace => "name_verb_place",
            Self::VerbPlaceName => "verb_place_name",
        }
    }

    /// Ordered sub-rules of this pattern.
    #[must_use]
    pub fn rule(self, grammar: &BirthGrammar) -> Rule {
        let parts = match self {
            Self::NameVerbDatePlace => vec![
                grammar.name.clone(),
                grammar.birth_verb.clone(),
                grammar.date.clone(),
                grammar.locative.clone(),
                grammar.place.clone(),
            ],
            Self::NameVerbPlace => vec![
                grammar.name.clone(),
                grammar.birth_verb.clone(),
                grammar.locative.clone(),
                grammar.place.clone(),
            ],
            Self::VerbPlaceName => vec![
                grammar.birth_verb.clone(),
                grammar.place.clone(),
                grammar.name.clone(),
            ],
        };
        Rule::seq(parts)
    }
}

impl std::fmt::Display for BirthPattern {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Sub-grammars shared by the sentence patterns.
#[derive(Debug, Clone)]
pub struct BirthGrammar {
    pub name: Rule,
    pub date: Rule,
    pub place: Rule,
    pub birth_verb: Rule,
    pub locative: Rule,
}

impl BirthGrammar {
    /// Builds the sub-grammars; `tokenizer` normalizes the closed word lists.
    #[must_use]
    pub fn new(tokenizer: &Tokenizer) -> Self {
        Self {
            name: name_rule(),
            date: date_rule(tokenizer),
            place: place_rule(),
            birth_verb: Rule::pipeline(tokenizer, &BIRTH_WORDS),
            locative: Rule::pipeline(tokenizer, &LOCATIVE_PREPOSITIONS),
        }
    }

    /// Patterns paired with their rules, in priority order.
    #[must_use]
    pub fn patterns(&self) -> Vec<(BirthPattern, Rule)> {
        BirthPattern::ALL
            .into_iter()
            .map(|pattern| (pattern, pattern.rule(self)))
            .collect()
    }
}

/// Consecutive capitalized person-name tokens with at least one first name:
/// surnames and patronymics alone are not enough.
fn name_rule() -> Rule {
    let capitalized = |grammemes: &[Grammeme]| {
        Predicate::and(vec![Predicate::gram_any(grammemes), Predicate::Capitalized])
    };
    let leading = Predicate::and(vec![
        capitalized(&[Grammeme::Surn, Grammeme::Patr]),
        Predicate::negate(Predicate::gram(Grammeme::Name)),
    ]);
    let person: &[Grammeme] = &[Grammeme::Name, Grammeme::Surn, Grammeme::Patr];

    Rule::seq(vec![
        Rule::token(leading).repeatable().optional(),
        Rule::token(capitalized(&[Grammeme::Name])),
        Rule::token(capitalized(person)).repeatable().optional(),
    ])
    .interpretation(Slot::Name)
}

/// One capitalized geographic name.
fn place_rule() -> Rule {
    Rule::token(Predicate::and(vec![
        Predicate::gram(Grammeme::Geox),
        Predicate::Capitalized,
    ]))
    .interpretation(Slot::BirthPlace)
}

/// Dates, most specific form first:
/// day month year [year-word] | day month year | day month | year year-word.
fn date_rule(tokenizer: &Tokenizer) -> Rule {
    let day = || Rule::token(Predicate::int_between(DAY_RANGE.0, DAY_RANGE.1));
    let month = || Rule::token(Predicate::dictionary(MONTH_NAMES));
    let year = || Rule::token(Predicate::int_between(YEAR_RANGE.0, YEAR_RANGE.1));
    let year_word = || Rule::pipeline(tokenizer, &YEAR_WORDS);

    Rule::or(vec![
        Rule::seq(vec![day(), month(), year(), year_word().optional()]),
        Rule::seq(vec![day(), month(), year()]),
        Rule::seq(vec![day(), month()]),
        Rule::seq(vec![year(), year_word()]),
    ])
    .interpretation(Slot::BirthDate)
}

#[cfg(test)]
mod tests {
    use super::*;
    use newsfacts_core::{LexiconAnalyzer, Token};
    use std::sync::Arc;

    fn setup() -> (Tokenizer, BirthGrammar) {
        let tokenizer = Tokenizer::new(Arc::new(LexiconAnalyzer::with_defaults()));
        let grammar = BirthGrammar::new(&tokenizer);
        (tokenizer, grammar)
    }

    fn span(text: &str, tokens: &[Token], range: std::ops::Range<usize>) -> String {
        text[tokens[range.start].span.start..tokens[range.end - 1].span.end].to_string()
    }

    fn dates(text: &str) -> Vec<String> {
        let (tokenizer, grammar) = setup();
        let tokens = tokenizer.tokenize(text);
        grammar
            .date
            .find_all(&tokens)
            .into_iter()
            .map(|c| span(text, &tokens, c.tokens))
            .collect()
    }

    #[test]
    fn full_date_with_year_word() {
        assert_eq!(dates("15 марта 2020 года"), vec!["15 марта 2020 года"]);
    }

    #[test]
    fn full_date_with_abbreviation() {
        assert_eq!(dates("1 января 1999 г."), vec!["1 января 1999 г."]);
    }

    #[test]
    fn day_month_year() {
        assert_eq!(dates("7 ноября 1917"), vec!["7 ноября 1917"]);
    }

    #[test]
    fn day_and_month() {
        assert_eq!(dates("31 декабря"), vec!["31 декабря"]);
    }

    #[test]
    fn year_only_form() {
        assert_eq!(dates("2020 год"), vec!["2020 год"]);
    }

    #[test]
    fn day_out_of_range_is_rejected() {
        assert!(dates("32 марта").is_empty());
        assert!(dates("0 марта").is_empty());
    }

    #[test]
    fn year_out_of_range_without_month() {
        assert!(dates("999 год").is_empty());
        assert!(dates("2101 год").is_empty());
    }

    #[test]
    fn bare_year_is_not_a_date() {
        assert!(dates("в 1980").is_empty());
    }

    #[test]
    fn name_takes_consecutive_capitalized_names() {
        let (tokenizer, grammar) = setup();
        let text = "Иванов Иван Петрович родился";
        let tokens = tokenizer.tokenize(text);
        let capture = grammar.name.first_match(&tokens, 0);
        assert_eq!(capture.map(|c| c.tokens), Some(0..3));
    }

    #[test]
    fn name_needs_a_first_name() {
        let (tokenizer, grammar) = setup();
        for text in ["Мужчина родился", "Пингвин родился", "Петров родился"] {
            let tokens = tokenizer.tokenize(text);
            assert!(grammar.name.find_all(&tokens).is_empty(), "{text}");
        }
    }

    #[test]
    fn name_may_start_with_surname() {
        let (tokenizer, grammar) = setup();
        let tokens = tokenizer.tokenize("Петров Павел и Анна Смирнова");
        let found: Vec<_> = grammar
            .name
            .find_all(&tokens)
            .into_iter()
            .map(|c| c.tokens)
            .collect();
        assert_eq!(found, vec![0..2, 3..5]);
    }

    #[test]
    fn patterns_are_in_priority_order() {
        let (_, grammar) = setup();
        let order: Vec<_> = grammar.patterns().into_iter().map(|(p, _)| p).collect();
        assert_eq!(order, BirthPattern::ALL.to_vec());
    }
}
