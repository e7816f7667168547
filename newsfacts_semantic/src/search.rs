//! Token-set search over corpus lines.

use newsfacts_core::CorpusLines;
use serde::Serialize;
use std::collections::BTreeSet;
use std::io::BufRead;
use tracing::{debug, info};

use crate::preprocess::Preprocessor;

/// A matching corpus line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchHit {
    /// Zero-based line index.
    pub line: usize,
    /// Search terms found on the line, sorted.
    pub matched: Vec<String>,
    /// The line, trimmed.
    pub text: String,
}

impl SearchHit {
    /// The line cut to `width` characters, with `...` when cut.
    #[must_use]
    pub fn preview(&self, width: usize) -> String {
        if self.text.chars().count() > width {
            let cut: String = self.text.chars().take(width).collect();
            format!("{cut}...")
        } else {
            self.text.clone()
        }
    }
}

impl std::fmt::Display for SearchHit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "[Line {}] [Matched: {}]: {}",
            self.line,
            self.matched.join(", "),
            self.text
        )
    }
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct SearchReport {
    pub hits: Vec<SearchHit>,
    /// Lines read before the scan ended.
    pub lines_scanned: usize,
    /// Whether the scan stopped at the hit cap.
    pub truncated: bool,
}

/// Scans a corpus for lines sharing a normalized token with a term set.
#[derive(Debug)]
pub struct Searcher<'a> {
    preprocessor: &'a Preprocessor,
    max_hits: usize,
}

impl<'a> Searcher<'a> {
    pub const DEFAULT_MAX_HITS: usize = 10;

    #[must_use]
    pub const fn new(preprocessor: &'a Preprocessor, max_hits: usize) -> Self {
        Self {
            preprocessor,
            max_hits,
        }
    }

    /// Scan `reader` line by line, calling `on_hit` for each match. Stops
    /// once `max_hits` lines have matched; an empty term set scans nothing.
    pub fn search<R, F>(
        &self,
        reader: R,
        terms: &BTreeSet<String>,
        mut on_hit: F,
    ) -> newsfacts_core::Result<SearchReport>
    where
        R: BufRead,
        F: FnMut(&SearchHit),
    {
        let mut report = SearchReport::default();
        if terms.is_empty() || self.max_hits == 0 {
            debug!("Nothing to search for");
            return Ok(report);
        }

        for item in CorpusLines::from_reader(reader) {
            let (index, line) = item?;
            report.lines_scanned += 1;

            let tokens: BTreeSet<String> = self.preprocessor.preprocess(&line).into_iter().collect();
            let matched: Vec<String> = terms.intersection(&tokens).cloned().collect();
            if matched.is_empty() {
                continue;
            }

            let hit = SearchHit {
                line: index,
                matched,
                text: line.trim().to_string(),
            };
            on_hit(&hit);
            report.hits.push(hit);

            if report.hits.len() >= self.max_hits {
                info!("Reached the display limit of {} lines, stopping", self.max_hits);
                report.truncated = true;
                break;
            }
        }

        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn terms(words: &[&str]) -> BTreeSet<String> {
        words.iter().map(|w| (*w).to_string()).collect()
    }

    #[test]
    #[expect(clippy::expect_used, reason = "Test failure should panic with context")]
    fn stops_at_the_cap() {
        let pre = Preprocessor::with_defaults();
        let corpus = (0..15)
            .map(|i| format!("Новость {i}: футбола снова много"))
            .collect::<Vec<_>>()
            .join("\n");

        let mut streamed = 0;
        let report = Searcher::new(&pre, Searcher::DEFAULT_MAX_HITS)
            .search(Cursor::new(corpus), &terms(&["футбол"]), |_| streamed += 1)
            .expect("in-memory read");

        assert_eq!(report.hits.len(), 10);
        assert_eq!(streamed, 10);
        assert_eq!(report.lines_scanned, 10);
        assert!(report.truncated);
    }

    #[test]
    #[expect(clippy::expect_used, reason = "Test failure should panic with context")]
    fn matches_by_normal_form() {
        let pre = Preprocessor::with_defaults();
        let corpus = "sport\tМатч\tВчера о футболе\nПогода хорошая\nТренер команды\n";
        let report = Searcher::new(&pre, 10)
            .search(Cursor::new(corpus), &terms(&["футбол", "тренер"]), |_| {})
            .expect("in-memory read");

        let lines: Vec<_> = report.hits.iter().map(|h| h.line).collect();
        assert_eq!(lines, vec![0, 2]);
        assert_eq!(report.hits[0].matched, vec!["футбол"]);
        assert_eq!(report.lines_scanned, 3);
        assert!(!report.truncated);
    }

    #[test]
    #[expect(clippy::expect_used, reason = "Test failure should panic with context")]
    fn substrings_do_not_match() {
        let pre = Preprocessor::with_defaults();
        let report = Searcher::new(&pre, 10)
            .search(Cursor::new("футболист забил"), &terms(&["футбол"]), |_| {})
            .expect("in-memory read");
        assert!(report.hits.is_empty());
    }

    #[test]
    #[expect(clippy::expect_used, reason = "Test failure should panic with context")]
    fn empty_terms_scan_nothing() {
        let pre = Preprocessor::with_defaults();
        let report = Searcher::new(&pre, 10)
            .search(Cursor::new("футбол\n"), &BTreeSet::new(), |_| {})
            .expect("in-memory read");
        assert_eq!(report.lines_scanned, 0);
    }

    #[test]
    fn read_error_aborts_the_scan() {
        let pre = Preprocessor::with_defaults();
        let bytes = b"\xff\xfe\n".to_vec();
        let result = Searcher::new(&pre, 10).search(Cursor::new(bytes), &terms(&["футбол"]), |_| {});
        assert!(result.is_err());
    }

    #[test]
    fn preview_cuts_long_lines() {
        let hit = SearchHit {
            line: 0,
            matched: vec!["гол".to_string()],
            text: "абвгд".to_string(),
        };
        assert_eq!(hit.preview(3), "абв...");
        assert_eq!(hit.preview(5), "абвгд");
    }
}
