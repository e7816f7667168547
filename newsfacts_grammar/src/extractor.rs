//! Corpus-level birth fact extraction.
//!
//! Lines pass a keyword pre-filter before the grammar runs. The pre-filter
//! only skips work: any line containing a keyword stem is always parsed.

use newsfacts_core::{
    BodyColumn, CorpusLines, LexiconAnalyzer, MorphAnalyzer, body_text, open_corpus,
};
use serde::{Deserialize, Serialize};
use std::io::BufRead;
use std::path::Path;
use std::sync::Arc;
use tracing::{error, info};

use crate::birth::BirthPattern;
use crate::fact::BirthFact;
use crate::parser::FactParser;

/// Configuration for the extractor.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtractorConfig {
    /// Lowercase stems; a line is parsed only if it contains one of them.
    #[serde(default = "ExtractorConfig::default_keywords")]
    pub keywords: Vec<String>,

    /// Log progress every this many candidate lines.
    #[serde(default = "ExtractorConfig::default_progress_every")]
    pub progress_every: usize,

    /// Column holding the text of tab-separated records. Set from the
    /// corpus settings rather than read from this section.
    #[serde(skip)]
    pub column: BodyColumn,
}

impl ExtractorConfig {
    fn default_keywords() -> Vec<String> {
        vec!["родил".to_string(), "урожен".to_string()]
    }

    const fn default_progress_every() -> usize {
        1000
    }
}

impl Default for ExtractorConfig {
    fn default() -> Self {
        Self {
            keywords: Self::default_keywords(),
            progress_every: Self::default_progress_every(),
            column: BodyColumn::Last,
        }
    }
}

/// A fact and where it was found.
#[derive(Debug, Clone, Serialize)]
pub struct FoundFact {
    /// Zero-based line index in the corpus.
    pub line: usize,
    pub pattern: BirthPattern,
    #[serde(flatten)]
    pub fact: BirthFact,
}

/// Outcome of a corpus pass.
#[derive(Debug, Clone, Default)]
pub struct ExtractionReport {
    /// Non-empty lines read.
    pub lines_read: usize,
    /// Lines that passed the pre-filter and were parsed.
    pub candidate_lines: usize,
    /// Lines rejected by the pre-filter.
    pub skipped_lines: usize,
    pub facts: Vec<FoundFact>,
    /// Set when the pass stopped early on a read error.
    pub error: Option<String>,
}

pub struct BirthFactExtractor {
    parser: FactParser,
    config: ExtractorConfig,
}

impl BirthFactExtractor {
    #[must_use]
    pub fn new(analyzer: Arc<dyn MorphAnalyzer>, mut config: ExtractorConfig) -> Self {
        for keyword in &mut config.keywords {
            *keyword = keyword.to_lowercase();
        }
        Self {
            parser: FactParser::new(analyzer),
            config,
        }
    }

    #[must_use]
    pub fn with_defaults() -> Self {
        Self::new(
            Arc::new(LexiconAnalyzer::with_defaults()),
            ExtractorConfig::default(),
        )
    }

    #[must_use]
    pub const fn parser(&self) -> &FactParser {
        &self.parser
    }

    #[must_use]
    pub const fn config(&self) -> &ExtractorConfig {
        &self.config
    }

    /// Cheap keyword test deciding whether `text` is worth parsing.
    #[must_use]
    pub fn is_candidate(&self, text: &str) -> bool {
        let lower = text.to_lowercase();
        self.config.keywords.iter().any(|kw| lower.contains(kw))
    }

    /// Facts in a single text, behind the pre-filter.
    #[must_use]
    pub fn extract_text(&self, text: &str) -> Vec<BirthFact> {
        if self.is_candidate(text) {
            self.parser.extract(text)
        } else {
            Vec::new()
        }
    }

    /// Streams a corpus, calling `on_fact` for each fact as it is found.
    ///
    /// A read error ends the pass; it is logged and recorded in the report
    /// together with everything found up to that point.
    pub fn extract_lines<R, F>(&self, reader: R, mut on_fact: F) -> ExtractionReport
    where
        R: BufRead,
        F: FnMut(&FoundFact),
    {
        let mut report = ExtractionReport::default();

        for item in CorpusLines::from_reader(reader) {
            let (index, line) = match item {
                Ok(pair) => pair,
                Err(e) => {
                    error!("An error occurred: {e}");
                    report.error = Some(e.to_string());
                    break;
                }
            };

            let line = line.trim();
            if line.is_empty() {
                continue;
            }
            report.lines_read += 1;

            let text = body_text(line, self.config.column);
            if !self.is_candidate(text) {
                report.skipped_lines += 1;
                continue;
            }

            for found in self.parser.parse(text) {
                let found = FoundFact {
                    line: index,
                    pattern: found.pattern,
                    fact: found.fact,
                };
                on_fact(&found);
                report.facts.push(found);
            }

            report.candidate_lines += 1;
            if self.config.progress_every > 0
                && report.candidate_lines % self.config.progress_every == 0
            {
                info!(
                    "Processed {} candidate lines (Skipped {} irrelevant lines)...",
                    report.candidate_lines, report.skipped_lines
                );
            }
        }

        report
    }

    /// Opens `path` (gzip by extension) and runs [`Self::extract_lines`].
    ///
    /// # Errors
    /// Returns `CorpusNotFound` when the file does not exist and an IO error
    /// when it cannot be opened. Errors after that land in the report.
    pub fn extract_file<F>(&self, path: &Path, on_fact: F) -> newsfacts_core::Result<ExtractionReport>
    where
        F: FnMut(&FoundFact),
    {
        let reader = open_corpus(path)?;
        info!("Fast extracting from {}...", path.display());
        Ok(self.extract_lines(reader, on_fact))
    }
}

impl std::fmt::Debug for BirthFactExtractor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BirthFactExtractor")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn prefilter_needs_a_stem() {
        let extractor = BirthFactExtractor::with_defaults();
        assert!(extractor.is_candidate("Он РОДИЛСЯ в Москве"));
        assert!(extractor.is_candidate("уроженка Омска"));
        assert!(!extractor.is_candidate("Погода в Москве"));
    }

    #[test]
    fn prefiltered_line_is_never_parsed() {
        // grammatical enough to match pattern B, but "родиться" lacks the stem
        let extractor = BirthFactExtractor::with_defaults();
        let text = "Иван Иванов родиться в Москве";
        assert_eq!(extractor.parser().extract(text).len(), 1);
        assert!(extractor.extract_text(text).is_empty());

        let report = extractor.extract_lines(Cursor::new(text), |_| {});
        assert_eq!(report.skipped_lines, 1);
        assert_eq!(report.candidate_lines, 0);
        assert!(report.facts.is_empty());
    }

    #[test]
    fn candidate_without_match_is_still_counted() {
        let extractor = BirthFactExtractor::with_defaults();
        let report = extractor.extract_lines(Cursor::new("кто-то родился где-то\n"), |_| {});
        assert_eq!(report.candidate_lines, 1);
        assert!(report.facts.is_empty());
    }

    #[test]
    fn uses_last_column_of_records() {
        let extractor = BirthFactExtractor::with_defaults();
        let corpus = "\nculture\tИван родился в Омске\tПавел Петров родился в Томске\n";
        let mut seen = Vec::new();
        let report = extractor.extract_lines(Cursor::new(corpus), |f| seen.push(f.line));

        assert_eq!(report.lines_read, 1);
        assert_eq!(report.facts.len(), 1);
        assert_eq!(report.facts[0].fact.name, "Павел Петров");
        assert_eq!(seen, vec![1]);
    }

    #[test]
    fn read_error_keeps_partial_results() {
        let extractor = BirthFactExtractor::with_defaults();
        let mut bytes = "Иван Иванов родился в Москве\n".as_bytes().to_vec();
        bytes.extend_from_slice(b"\xff\xfe\n");
        bytes.extend_from_slice("Павел Петров родился в Омске\n".as_bytes());

        let report = extractor.extract_lines(Cursor::new(bytes), |_| {});
        assert_eq!(report.facts.len(), 1);
        assert!(report.error.is_some());
    }

    #[test]
    #[expect(clippy::expect_used, reason = "Test failure should panic with context")]
    fn config_defaults_from_empty_json() {
        let config: ExtractorConfig = serde_json::from_str("{}").expect("empty config is valid");
        assert_eq!(config.keywords, vec!["родил", "урожен"]);
        assert_eq!(config.progress_every, 1000);
        assert_eq!(config.column, BodyColumn::Last);
    }
}
