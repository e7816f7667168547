//! Query expansion through the embedding space.
//!
//! A query word is normalized the same way corpus lines are, then widened
//! with its nearest neighbours. Queries that normalize to nothing, or to a
//! word the model never saw, expand to an empty set with a warning.

use serde::Serialize;
use std::collections::BTreeSet;
use tracing::{debug, warn};

use crate::model::EmbeddingModel;
use crate::preprocess::Preprocessor;

/// Outcome of expanding one query.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum QueryExpansion {
    /// Normalized query plus its nearest neighbours.
    Expanded {
        query: String,
        lemma: String,
        neighbors: Vec<String>,
    },
    /// Nothing survived preprocessing (stopword or too short).
    Filtered { query: String },
    /// The normalized query is not in the vocabulary.
    OutOfVocabulary { query: String, lemma: String },
}

impl QueryExpansion {
    /// Returns the string representation of the outcome.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Expanded { .. } => "expanded",
            Self::Filtered { .. } => "filtered",
            Self::OutOfVocabulary { .. } => "out_of_vocabulary",
        }
    }

    #[must_use]
    pub fn query(&self) -> &str {
        match self {
            Self::Expanded { query, .. }
            | Self::Filtered { query }
            | Self::OutOfVocabulary { query, .. } => query,
        }
    }

    /// Normal form of the query, when it survived preprocessing.
    #[must_use]
    pub fn lemma(&self) -> Option<&str> {
        match self {
            Self::Expanded { lemma, .. } | Self::OutOfVocabulary { lemma, .. } => Some(lemma),
            Self::Filtered { .. } => None,
        }
    }

    #[must_use]
    pub fn neighbors(&self) -> &[String] {
        match self {
            Self::Expanded { neighbors, .. } => neighbors,
            _ => &[],
        }
    }

    /// The search set: lemma and neighbours, or empty.
    #[must_use]
    pub fn terms(&self) -> BTreeSet<String> {
        match self {
            Self::Expanded {
                lemma, neighbors, ..
            } => std::iter::once(lemma)
                .chain(neighbors.iter())
                .cloned()
                .collect(),
            _ => BTreeSet::new(),
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        !matches!(self, Self::Expanded { .. })
    }
}

/// Expands query words with a trained model.
#[derive(Debug)]
pub struct SemanticExpander<'a> {
    preprocessor: &'a Preprocessor,
    model: &'a EmbeddingModel,
    topn: usize,
}

impl<'a> SemanticExpander<'a> {
    #[must_use]
    pub const fn new(preprocessor: &'a Preprocessor, model: &'a EmbeddingModel, topn: usize) -> Self {
        Self {
            preprocessor,
            model,
            topn,
        }
    }

    /// Expand a query word. Only the first token of a multi-word query
    /// is used.
    #[must_use]
    pub fn expand(&self, query: &str) -> QueryExpansion {
        let Some(lemma) = self.preprocessor.preprocess(query).into_iter().next() else {
            warn!("Query term '{query}' was ignored by the stopword filter");
            return QueryExpansion::Filtered {
                query: query.to_string(),
            };
        };

        if !self.model.contains(&lemma) {
            warn!("Word '{lemma}' (query: {query}) is not in the vocabulary (OOV)");
            return QueryExpansion::OutOfVocabulary {
                query: query.to_string(),
                lemma,
            };
        }

        let neighbors: Vec<String> = self
            .model
            .most_similar(&lemma, self.topn)
            .into_iter()
            .map(|(word, score)| {
                debug!("Neighbour of '{lemma}': {word} ({score:.3})");
                word
            })
            .collect();

        QueryExpansion::Expanded {
            query: query.to_string(),
            lemma,
            neighbors,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn model() -> EmbeddingModel {
        EmbeddingModel::from_vectors(vec![
            ("футбол".to_string(), vec![1.0, 0.0, 0.0]),
            ("турнир".to_string(), vec![0.9, 0.1, 0.0]),
            ("матч".to_string(), vec![0.8, 0.3, 0.0]),
            ("гол".to_string(), vec![0.7, 0.5, 0.0]),
            ("тренер".to_string(), vec![0.6, 0.6, 0.1]),
            ("банк".to_string(), vec![0.0, 0.0, 1.0]),
        ])
    }

    #[test]
    fn stopword_query_expands_to_nothing() {
        let pre = Preprocessor::with_defaults();
        let model = model();
        let expansion = SemanticExpander::new(&pre, &model, 4).expand("эти");
        assert!(matches!(expansion, QueryExpansion::Filtered { .. }));
        assert!(expansion.terms().is_empty());
        assert_eq!(expansion.lemma(), None);
    }

    #[test]
    fn unknown_word_expands_to_nothing() {
        let pre = Preprocessor::with_defaults();
        let model = model();
        let expansion = SemanticExpander::new(&pre, &model, 4).expand("погода");
        assert_eq!(expansion.as_str(), "out_of_vocabulary");
        assert_eq!(expansion.lemma(), Some(pre.normalize("погода").as_str()));
        assert!(expansion.terms().is_empty());
    }

    #[test]
    fn inflected_query_expands_with_lemma_and_neighbours() {
        let pre = Preprocessor::with_defaults();
        let model = model();
        let expansion = SemanticExpander::new(&pre, &model, 4).expand("Футболом");
        assert_eq!(expansion.lemma(), Some("футбол"));
        assert_eq!(expansion.neighbors(), &["турнир", "матч", "гол", "тренер"]);

        let terms = expansion.terms();
        assert_eq!(terms.len(), 5);
        assert!(terms.contains("футбол"));
        assert!(!terms.contains("банк"));
    }

    #[test]
    fn first_token_wins() {
        let pre = Preprocessor::with_defaults();
        let model = model();
        let expansion = SemanticExpander::new(&pre, &model, 1).expand("эти банк футбол");
        assert_eq!(expansion.lemma(), Some("банк"));
    }
}
