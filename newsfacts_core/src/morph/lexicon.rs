use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;

use super::builtin;
use super::inflect::noun_forms;
use super::{Grammeme, GrammemeSet, Parse};
use crate::{Error, Result};

/// An explicit word form with its lemma and grammemes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FormEntry {
    pub form: String,
    pub lemma: String,
    #[serde(default)]
    pub grammemes: Vec<Grammeme>,
}

/// On-disk lexicon extension.
///
/// Name and place lists hold lemmas; their case forms are generated.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LexiconFile {
    #[serde(default)]
    pub first_names: Vec<String>,
    #[serde(default)]
    pub surnames: Vec<String>,
    #[serde(default)]
    pub patronymics: Vec<String>,
    #[serde(default)]
    pub places: Vec<String>,
    #[serde(default)]
    pub forms: Vec<FormEntry>,
}

impl LexiconFile {
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        serde_json::from_str(&content).map_err(|source| Error::Lexicon {
            path: path.display().to_string(),
            source,
        })
    }
}

/// Word form to readings table.
#[derive(Debug, Clone, Default)]
pub struct Lexicon {
    entries: HashMap<String, Vec<Parse>>,
}

impl Lexicon {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Closed-class words, common given names and place names.
    #[must_use]
    pub fn builtin() -> Self {
        let mut lexicon = Self::new();

        for (lemma, forms) in builtin::CLOSED_CLASS {
            let grammemes = builtin::closed_class_grammemes(lemma);
            lexicon.add_forms(lemma, forms, grammemes);
        }
        for month in builtin::MONTHS {
            lexicon.add_paradigm(month, GrammemeSet::of(&[Grammeme::Noun]));
        }
        lexicon.extend(&LexiconFile {
            first_names: to_owned(builtin::FIRST_NAMES),
            places: to_owned(builtin::PLACES),
            ..LexiconFile::default()
        });
        lexicon
    }

    /// Adds every entry of `file`.
    pub fn extend(&mut self, file: &LexiconFile) {
        let person = |g| GrammemeSet::of(&[Grammeme::Noun, g]);
        for name in &file.first_names {
            self.add_paradigm(name, person(Grammeme::Name));
        }
        for name in &file.surnames {
            self.add_paradigm(name, person(Grammeme::Surn));
        }
        for name in &file.patronymics {
            self.add_paradigm(name, person(Grammeme::Patr));
        }
        for place in &file.places {
            self.add_paradigm(place, GrammemeSet::of(&[Grammeme::Noun, Grammeme::Geox]));
        }
        for entry in &file.forms {
            let grammemes = entry.grammemes.iter().copied().collect();
            self.insert(&entry.lemma, &entry.lemma, grammemes);
            self.insert(&entry.form, &entry.lemma, grammemes);
        }
    }

    /// Registers `lemma` with its generated case forms.
    pub fn add_paradigm(&mut self, lemma: &str, grammemes: GrammemeSet) {
        for form in noun_forms(lemma) {
            self.insert(&form, lemma, grammemes);
        }
    }

    /// Registers `lemma` itself plus the listed forms.
    pub fn add_forms(&mut self, lemma: &str, forms: &[&str], grammemes: GrammemeSet) {
        self.insert(lemma, lemma, grammemes);
        for form in forms {
            self.insert(form, lemma, grammemes);
        }
    }

    pub fn insert(&mut self, form: &str, lemma: &str, grammemes: GrammemeSet) {
        let parse = Parse::new(fold(lemma), grammemes);
        let readings = self.entries.entry(fold(form)).or_default();
        if let Some(existing) = readings
            .iter_mut()
            .find(|p| p.normal_form == parse.normal_form)
        {
            existing.grammemes = existing.grammemes.union(grammemes);
        } else {
            readings.push(parse);
        }
    }

    /// Readings for an already folded form.
    #[must_use]
    pub fn lookup(&self, folded: &str) -> Option<&[Parse]> {
        self.entries.get(folded).map(Vec::as_slice)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Lowercases and maps `ё` to `е`.
#[must_use]
pub fn fold(word: &str) -> String {
    word.to_lowercase().replace('ё', "е")
}

fn to_owned(words: &[&str]) -> Vec<String> {
    words.iter().map(|w| (*w).to_string()).collect()
}
