use newsfacts_core::{MorphAnalyzer, Token, Tokenizer};
use std::ops::Range;
use std::sync::Arc;
use tracing::debug;

use crate::birth::{BirthGrammar, BirthPattern};
use crate::fact::BirthFact;
use crate::rule::{Capture, Rule};

/// A birth fact together with the pattern that produced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FactMatch {
    pub pattern: BirthPattern,
    /// Byte range of the whole match in the source text.
    pub span: Range<usize>,
    pub fact: BirthFact,
}

/// Runs the birth patterns over text.
///
/// Scanning goes left to right. At each token the patterns are tried in
/// priority order and the first full match is accepted; scanning resumes
/// after it, so accepted matches never share a token.
#[derive(Debug, Clone)]
pub struct FactParser {
    tokenizer: Tokenizer,
    patterns: Vec<(BirthPattern, Rule)>,
}

impl FactParser {
    #[must_use]
    pub fn new(analyzer: Arc<dyn MorphAnalyzer>) -> Self {
        let tokenizer = Tokenizer::new(analyzer);
        let patterns = BirthGrammar::new(&tokenizer).patterns();
        Self {
            tokenizer,
            patterns,
        }
    }

    #[must_use]
    pub const fn tokenizer(&self) -> &Tokenizer {
        &self.tokenizer
    }

    /// Leftmost, priority-ordered, non-overlapping pattern matches.
    #[must_use]
    pub fn find_all(&self, tokens: &[Token]) -> Vec<(BirthPattern, Capture)> {
        let mut found = Vec::new();
        let mut pos = 0;
        while pos < tokens.len() {
            let hit = self
                .patterns
                .iter()
                .find_map(|(pattern, rule)| rule.first_match(tokens, pos).map(|c| (*pattern, c)));
            match hit {
                Some((pattern, capture)) => {
                    debug!(
                        "Pattern {pattern} matched tokens {:?}",
                        capture.tokens
                    );
                    pos = capture.tokens.end;
                    found.push((pattern, capture));
                }
                None => pos += 1,
            }
        }
        found
    }

    /// Tokenizes `text` and interprets every match.
    #[must_use]
    pub fn parse(&self, text: &str) -> Vec<FactMatch> {
        let tokens = self.tokenizer.tokenize(text);
        self.find_all(&tokens)
            .into_iter()
            .filter_map(|(pattern, capture)| {
                let fact = BirthFact::from_capture(text, &tokens, &capture)?;
                let first = tokens.get(capture.tokens.start)?;
                let last = tokens.get(capture.tokens.end.checked_sub(1)?)?;
                Some(FactMatch {
                    pattern,
                    span: first.span.start..last.span.end,
                    fact,
                })
            })
            .collect()
    }

    #[must_use]
    pub fn extract(&self, text: &str) -> Vec<BirthFact> {
        self.parse(text).into_iter().map(|m| m.fact).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use newsfacts_core::LexiconAnalyzer;

    fn parser() -> FactParser {
        FactParser::new(Arc::new(LexiconAnalyzer::with_defaults()))
    }

    #[test]
    fn pattern_a_full_record() {
        let matches = parser().parse("Иванов Иван родился 5 мая 1980 года в Москве");
        assert_eq!(matches.len(), 1);
        let m = &matches[0];
        assert_eq!(m.pattern, BirthPattern::NameVerbDatePlace);
        assert_eq!(m.fact.name, "Иванов Иван");
        assert_eq!(m.fact.birth_date.as_deref(), Some("5 мая 1980 года"));
        assert_eq!(m.fact.birth_place.as_deref(), Some("Москве"));
    }

    #[test]
    fn pattern_b_without_date() {
        let matches = parser().parse("Петрова Анна родилась в Казани.");
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].pattern, BirthPattern::NameVerbPlace);
        assert_eq!(matches[0].fact.name, "Петрова Анна");
        assert_eq!(matches[0].fact.birth_date, None);
        assert_eq!(matches[0].fact.birth_place.as_deref(), Some("Казани"));
    }

    #[test]
    fn pattern_c_inverted_order() {
        let facts = parser().extract("Известный уроженец Новосибирска Сергей Смирнов выступил");
        assert_eq!(facts.len(), 1);
        assert_eq!(facts[0].name, "Сергей Смирнов");
        assert_eq!(facts[0].birth_place.as_deref(), Some("Новосибирска"));
        assert_eq!(facts[0].birth_date, None);
    }

    #[test]
    fn year_only_date() {
        let facts = parser().extract("Ольга Кузнецова родилась 1975 году в Самаре");
        assert_eq!(facts.len(), 1);
        assert_eq!(facts[0].birth_date.as_deref(), Some("1975 году"));
    }

    #[test]
    fn no_match_without_place() {
        assert!(parser().extract("Иван Иванов родился 5 мая 1980 года").is_empty());
    }

    #[test]
    fn lowercase_place_is_rejected() {
        assert!(parser().extract("Иван Иванов родился в москве").is_empty());
    }

    #[test]
    fn two_facts_in_one_line() {
        let facts = parser()
            .extract("Иван Иванов родился в Москве, а Петров Павел родился 1 июня 1990 г. в Омске");
        assert_eq!(facts.len(), 2);
        assert_eq!(facts[0].name, "Иван Иванов");
        assert_eq!(facts[1].name, "Петров Павел");
        assert_eq!(facts[1].birth_date.as_deref(), Some("1 июня 1990 г."));
        assert_eq!(facts[1].birth_place.as_deref(), Some("Омске"));
    }

    #[test]
    fn span_covers_match() {
        let text = "Вчера Иван Иванов родился в Москве";
        let matches = parser().parse(text);
        assert_eq!(&text[matches[0].span.clone()], "Иван Иванов родился в Москве");
    }

    #[test]
    fn common_nouns_are_not_names() {
        let parser = parser();
        assert!(parser.extract("Мужчина родился в Москве").is_empty());
        assert!(parser.extract("Пингвин родился в Москве").is_empty());
        assert!(parser.extract("Петров родился в Москве").is_empty());
    }

    #[test]
    fn long_name_runs_stay_linear_per_start() {
        let text = format!("{}родился в Москве", "Иван ".repeat(2000));
        let started = std::time::Instant::now();
        let facts = parser().extract(&text);
        assert_eq!(facts.len(), 1);
        assert_eq!(facts[0].name.split(' ').count(), 2000);
        assert!(started.elapsed() < std::time::Duration::from_secs(10));
    }

    #[test]
    fn long_name_run_without_verb_finds_nothing() {
        let text = "Иван Петров ".repeat(500);
        let started = std::time::Instant::now();
        assert!(parser().extract(&text).is_empty());
        assert!(started.elapsed() < std::time::Duration::from_secs(10));
    }
}
