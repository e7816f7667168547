//! Train-expand-search orchestration over one corpus file.

use anyhow::Context;
use newsfacts_core::{BodyColumn, CorpusLines, body_text, open_corpus};
use rayon::prelude::*;
use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing::info;

use crate::config::SemanticConfig;
use crate::expander::{QueryExpansion, SemanticExpander};
use crate::model::EmbeddingModel;
use crate::preprocess::Preprocessor;
use crate::search::{SearchHit, SearchReport, Searcher};
use crate::word2vec::Word2Vec;

/// Lines preprocessed per parallel batch while loading.
const BATCH_LINES: usize = 10_000;

/// Expansion and search result for one query.
#[derive(Debug, Clone, Serialize)]
pub struct GrepReport {
    pub expansion: QueryExpansion,
    pub search: SearchReport,
}

/// Semantic grep over a corpus: the model is trained lazily on first use
/// and reused for every later query.
#[derive(Debug)]
pub struct SemanticGrep {
    path: PathBuf,
    column: BodyColumn,
    preprocessor: Preprocessor,
    config: SemanticConfig,
    sentences: Vec<Vec<String>>,
    model: Option<EmbeddingModel>,
}

impl SemanticGrep {
    #[must_use]
    pub fn new(
        path: impl Into<PathBuf>,
        column: BodyColumn,
        preprocessor: Preprocessor,
        config: SemanticConfig,
    ) -> Self {
        Self {
            path: path.into(),
            column,
            preprocessor,
            config,
            sentences: Vec::new(),
            model: None,
        }
    }

    /// Use an already trained model instead of training one.
    #[must_use]
    pub fn with_model(mut self, model: EmbeddingModel) -> Self {
        self.model = Some(model);
        self
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    #[must_use]
    pub const fn preprocessor(&self) -> &Preprocessor {
        &self.preprocessor
    }

    #[must_use]
    pub const fn model(&self) -> Option<&EmbeddingModel> {
        self.model.as_ref()
    }

    #[must_use]
    pub fn sentences(&self) -> &[Vec<String>] {
        &self.sentences
    }

    /// Read the corpus and preprocess each line's body into a training
    /// sentence. Lines with no surviving tokens are dropped. Returns the
    /// number of sentences kept.
    pub fn load_sentences(&mut self) -> anyhow::Result<usize> {
        info!("Reading and preprocessing {} ...", self.path.display());
        let reader = open_corpus(&self.path)?;

        let mut sentences = Vec::new();
        let mut batch: Vec<String> = Vec::with_capacity(BATCH_LINES);
        let mut lines_read = 0;

        for item in CorpusLines::from_reader(reader) {
            let (_, line) = item.with_context(|| format!("Failed to read {}", self.path.display()))?;
            batch.push(line);
            lines_read += 1;

            if batch.len() == BATCH_LINES {
                self.preprocess_batch(&mut batch, &mut sentences);
            }
            if self.config.progress_every > 0 && lines_read % self.config.progress_every == 0 {
                info!("Processed {lines_read} lines...");
            }
        }
        self.preprocess_batch(&mut batch, &mut sentences);

        info!(
            "Loaded {} training sentences from {lines_read} lines",
            sentences.len()
        );
        self.sentences = sentences;
        Ok(self.sentences.len())
    }

    fn preprocess_batch(&self, batch: &mut Vec<String>, sentences: &mut Vec<Vec<String>>) {
        let column = self.column;
        let processed: Vec<Vec<String>> = batch
            .par_iter()
            .map(|line| self.preprocessor.preprocess(body_text(line.trim(), column)))
            .filter(|tokens| !tokens.is_empty())
            .collect();
        sentences.extend(processed);
        batch.clear();
    }

    /// Train the model, loading sentences first if needed.
    pub fn train(&mut self) -> anyhow::Result<&EmbeddingModel> {
        if self.sentences.is_empty() {
            self.load_sentences()?;
        }

        info!("Training word2vec model...");
        let model = Word2Vec::new(self.config.word2vec.clone())
            .train(&self.sentences)
            .context("Word2vec training failed")?;
        info!("Model trained: {} words", model.len());

        Ok(self.model.insert(model))
    }

    fn ensure_model(&mut self) -> anyhow::Result<()> {
        if self.model.is_none() {
            self.train()?;
        }
        Ok(())
    }

    /// Expand `query`, training first if needed.
    pub fn expand(&mut self, query: &str) -> anyhow::Result<QueryExpansion> {
        self.ensure_model()?;
        let model = self
            .model
            .as_ref()
            .context("Model is not trained")?;
        Ok(SemanticExpander::new(&self.preprocessor, model, self.config.topn).expand(query))
    }

    /// Expand `query` and scan the corpus for lines sharing any expanded
    /// term, calling `on_hit` as matches are found.
    pub fn grep<F>(&mut self, query: &str, on_hit: F) -> anyhow::Result<GrepReport>
    where
        F: FnMut(&SearchHit),
    {
        let expansion = self.expand(query)?;
        let terms = expansion.terms();
        if let Some(lemma) = expansion.lemma() {
            info!(
                "Query '{query}' -> '{lemma}', expanded terms: {:?}",
                terms
            );
        }

        let search = if terms.is_empty() {
            SearchReport::default()
        } else {
            let reader = open_corpus(&self.path)?;
            Searcher::new(&self.preprocessor, self.config.max_hits).search(reader, &terms, on_hit)?
        };

        Ok(GrepReport { expansion, search })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grep_over(path: &Path) -> SemanticGrep {
        SemanticGrep::new(
            path,
            BodyColumn::Nth(2),
            Preprocessor::with_defaults(),
            SemanticConfig::default(),
        )
    }

    #[test]
    fn missing_corpus_fails_to_load() {
        let path = std::env::temp_dir().join(format!("newsfacts_grep_{}.txt", uuid::Uuid::now_v7()));
        let mut grep = grep_over(&path);
        let Err(err) = grep.load_sentences() else {
            panic!("loading a missing corpus must fail");
        };
        assert!(err.to_string().contains("not found"));
    }

    #[test]
    #[expect(clippy::expect_used, reason = "Test failure should panic with context")]
    fn stopword_query_skips_the_scan() {
        let path = std::env::temp_dir().join(format!("newsfacts_grep_{}.txt", uuid::Uuid::now_v7()));
        let model = EmbeddingModel::from_vectors(vec![("футбол".to_string(), vec![1.0])]);
        let mut grep = grep_over(&path).with_model(model);

        // the corpus file does not exist: an empty expansion never opens it
        let report = grep.grep("эти", |_| {}).expect("no scan needed");
        assert!(report.expansion.terms().is_empty());
        assert_eq!(report.search.lines_scanned, 0);
    }
}
