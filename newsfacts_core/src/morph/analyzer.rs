use super::lexicon::fold;
use super::{Grammeme, GrammemeSet, Lexicon, MorphAnalyzer, Parse};

/// Inflectional endings stripped from unknown words, longest first.
const ENDINGS: &[&str] = &[
    "иями", "ться", "ями", "ами", "ией", "иям", "иях", "ого", "его", "ому", "ему", "ыми", "ими",
    "лся", "ась", "ись", "ают", "яют", "ать", "ять", "ить", "еть", "ах", "ях", "ам", "ям", "ов",
    "ев", "ей", "ом", "ем", "ью", "ия", "ии", "ию", "ая", "яя", "ое", "ее", "ые", "ие", "ый", "ий",
    "ой", "ую", "юю", "ым", "им", "ых", "их", "а", "я", "ы", "и", "е", "у", "ю", "о", "ь", "й",
];

const MIN_STEM_CHARS: usize = 3;

/// Surname and patronymic endings for capitalized words missing from the
/// lexicon: (ending, lemma endings, grammeme).
const PERSON_ENDINGS: &[(&str, &[&str], Grammeme)] = &[
    ("овичем", &["ович"], Grammeme::Patr),
    ("евичем", &["евич"], Grammeme::Patr),
    ("овича", &["ович"], Grammeme::Patr),
    ("евича", &["евич"], Grammeme::Patr),
    ("овичу", &["ович"], Grammeme::Patr),
    ("евичу", &["евич"], Grammeme::Patr),
    ("ович", &["ович"], Grammeme::Patr),
    ("евич", &["евич"], Grammeme::Patr),
    ("овной", &["овна"], Grammeme::Patr),
    ("евной", &["евна"], Grammeme::Patr),
    ("ичной", &["ична"], Grammeme::Patr),
    ("овны", &["овна"], Grammeme::Patr),
    ("евны", &["евна"], Grammeme::Patr),
    ("овне", &["овна"], Grammeme::Patr),
    ("евне", &["евна"], Grammeme::Patr),
    ("овну", &["овна"], Grammeme::Patr),
    ("евну", &["евна"], Grammeme::Patr),
    ("овна", &["овна"], Grammeme::Patr),
    ("евна", &["евна"], Grammeme::Patr),
    ("ична", &["ична"], Grammeme::Patr),
    ("ского", &["ский"], Grammeme::Surn),
    ("скому", &["ский"], Grammeme::Surn),
    ("цкого", &["цкий"], Grammeme::Surn),
    ("цкому", &["цкий"], Grammeme::Surn),
    ("ским", &["ский"], Grammeme::Surn),
    ("ском", &["ский"], Grammeme::Surn),
    ("ский", &["ский"], Grammeme::Surn),
    ("ской", &["ская"], Grammeme::Surn),
    ("скую", &["ская"], Grammeme::Surn),
    ("ская", &["ская"], Grammeme::Surn),
    ("цким", &["цкий"], Grammeme::Surn),
    ("цкий", &["цкий"], Grammeme::Surn),
    ("цкой", &["цкая"], Grammeme::Surn),
    ("цкая", &["цкая"], Grammeme::Surn),
    ("овым", &["ов"], Grammeme::Surn),
    ("евым", &["ев"], Grammeme::Surn),
    ("иным", &["ин"], Grammeme::Surn),
    ("овой", &["ова"], Grammeme::Surn),
    ("евой", &["ева"], Grammeme::Surn),
    ("иной", &["ина"], Grammeme::Surn),
    ("ова", &["ова", "ов"], Grammeme::Surn),
    ("ева", &["ева", "ев"], Grammeme::Surn),
    ("ина", &["ина", "ин"], Grammeme::Surn),
    ("ову", &["ов", "ова"], Grammeme::Surn),
    ("еву", &["ев", "ева"], Grammeme::Surn),
    ("ину", &["ин", "ина"], Grammeme::Surn),
    ("ове", &["ов"], Grammeme::Surn),
    ("еве", &["ев"], Grammeme::Surn),
    ("ине", &["ин"], Grammeme::Surn),
    ("ов", &["ов"], Grammeme::Surn),
    ("ев", &["ев"], Grammeme::Surn),
    ("ин", &["ин"], Grammeme::Surn),
    ("ын", &["ын"], Grammeme::Surn),
];

/// Dictionary analyzer with suffix heuristics for out-of-lexicon words.
#[derive(Debug, Clone)]
pub struct LexiconAnalyzer {
    lexicon: Lexicon,
}

impl LexiconAnalyzer {
    #[must_use]
    pub const fn new(lexicon: Lexicon) -> Self {
        Self { lexicon }
    }

    #[must_use]
    pub fn with_defaults() -> Self {
        Self::new(Lexicon::builtin())
    }

    #[must_use]
    pub const fn lexicon(&self) -> &Lexicon {
        &self.lexicon
    }

    /// Lexicon lemma, or the suffix-stripped stem for unknown words.
    fn base_form(&self, folded: &str) -> String {
        if let Some(first) = self.lexicon.lookup(folded).and_then(<[Parse]>::first) {
            return first.normal_form.clone();
        }
        strip_ending(folded).to_string()
    }

    /// `base_form` restricted to its fixed points, so the result never
    /// changes when normalized again.
    fn stable_form(&self, folded: &str) -> String {
        let candidate = self.base_form(folded);
        if self.base_form(&candidate) == candidate {
            candidate
        } else {
            folded.to_string()
        }
    }

    fn person_readings(word: &str, folded: &str) -> Vec<Parse> {
        if !is_capitalized(word) || folded.chars().count() < 4 || !is_cyrillic_word(folded) {
            return Vec::new();
        }

        let Some((ending, lemma_endings, grammeme)) = PERSON_ENDINGS
            .iter()
            .find(|(ending, _, _)| folded.ends_with(ending))
        else {
            return Vec::new();
        };

        let stem = &folded[..folded.len() - ending.len()];
        let grammemes = GrammemeSet::of(&[Grammeme::Noun, *grammeme]);
        lemma_endings
            .iter()
            .map(|lemma_ending| Parse::new(format!("{stem}{lemma_ending}"), grammemes))
            .collect()
    }
}

impl Default for LexiconAnalyzer {
    fn default() -> Self {
        Self::with_defaults()
    }
}

impl MorphAnalyzer for LexiconAnalyzer {
    fn parse(&self, word: &str) -> Vec<Parse> {
        let folded = fold(word);

        if !folded.is_empty() && folded.chars().all(|c| c.is_ascii_digit()) {
            return vec![Parse::new(folded, GrammemeSet::of(&[Grammeme::Numr]))];
        }

        if let Some(readings) = self.lexicon.lookup(&folded) {
            return readings.to_vec();
        }

        let readings = Self::person_readings(word, &folded);
        if !readings.is_empty() {
            return readings;
        }

        let grammeme = if folded.chars().any(|c| c.is_ascii_alphabetic()) {
            Grammeme::Latn
        } else {
            Grammeme::Unkn
        };
        vec![Parse::new(
            self.stable_form(&folded),
            GrammemeSet::of(&[grammeme]),
        )]
    }

    /// Case-insensitive: capitalization-driven person readings do not take
    /// part, so `normal_form(normal_form(w)) == normal_form(w)`.
    fn normal_form(&self, word: &str) -> String {
        self.stable_form(&fold(word))
    }
}

fn strip_ending(folded: &str) -> &str {
    for ending in ENDINGS {
        if let Some(stem) = folded.strip_suffix(ending) {
            if stem.chars().count() >= MIN_STEM_CHARS && is_cyrillic_word(stem) {
                return stem;
            }
        }
    }
    folded
}

fn is_capitalized(word: &str) -> bool {
    word.chars().next().is_some_and(char::is_uppercase)
}

fn is_cyrillic_word(word: &str) -> bool {
    word.chars()
        .all(|c| matches!(c, 'а'..='я' | 'ё' | '-'))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lexicon_words_use_dictionary_lemma() {
        let analyzer = LexiconAnalyzer::with_defaults();
        assert_eq!(analyzer.normal_form("родилась"), "родиться");
        assert_eq!(analyzer.normal_form("Марта"), "март");
        assert_eq!(analyzer.normal_form("годом"), "год");
    }

    #[test]
    fn unknown_word_forms_collapse() {
        let analyzer = LexiconAnalyzer::with_defaults();
        let base = analyzer.normal_form("футбол");
        assert_eq!(base, "футбол");
        assert_eq!(analyzer.normal_form("футбола"), base);
        assert_eq!(analyzer.normal_form("футболу"), base);
        assert_eq!(analyzer.normal_form("футболом"), base);
    }

    #[test]
    fn short_stems_are_kept() {
        let analyzer = LexiconAnalyzer::with_defaults();
        assert_eq!(analyzer.normal_form("слов"), "слов");
        assert_eq!(analyzer.normal_form("дом"), "дом");
    }

    #[test]
    fn surname_guess_requires_capital() {
        let analyzer = LexiconAnalyzer::with_defaults();
        assert!(analyzer.grammemes("Петров").contains(Grammeme::Surn));
        assert!(!analyzer.grammemes("петров").contains(Grammeme::Surn));
        assert!(analyzer.grammemes("Петровича").contains(Grammeme::Patr));
    }

    #[test]
    fn feminine_surname_has_two_readings() {
        let analyzer = LexiconAnalyzer::with_defaults();
        let readings = analyzer.parse("Сидорова");
        let lemmas: Vec<_> = readings.iter().map(|p| p.normal_form.as_str()).collect();
        assert_eq!(lemmas, vec!["сидорова", "сидоров"]);
    }

    #[test]
    fn place_and_name_grammemes() {
        let analyzer = LexiconAnalyzer::with_defaults();
        assert!(analyzer.grammemes("Москве").contains(Grammeme::Geox));
        assert!(analyzer.grammemes("Иван").contains(Grammeme::Name));
        assert!(analyzer.grammemes("Ивана").contains(Grammeme::Name));
    }

    #[test]
    fn digits_are_numerals() {
        let analyzer = LexiconAnalyzer::with_defaults();
        assert!(analyzer.grammemes("1980").contains(Grammeme::Numr));
        assert_eq!(analyzer.normal_form("1980"), "1980");
    }

    #[test]
    fn yo_is_folded() {
        let analyzer = LexiconAnalyzer::with_defaults();
        assert_eq!(analyzer.normal_form("Пётр"), analyzer.normal_form("Петр"));
    }
}
