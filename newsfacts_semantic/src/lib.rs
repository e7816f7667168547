#![warn(
    clippy::all,
    clippy::nursery,
    clippy::pedantic,
    clippy::style,
    clippy::complexity,
    clippy::perf,
    clippy::correctness,
    clippy::suspicious,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(
    clippy::similar_names,
    clippy::missing_panics_doc,
    clippy::missing_errors_doc,
    clippy::module_name_repetitions,
    clippy::cast_possible_truncation,
    clippy::cast_precision_loss
)]

//! Semantic query expansion and search over a news corpus.
//!
//! Corpus lines are preprocessed into normalized tokens, a skip-gram
//! word2vec model is trained on them, and a query word is expanded into its
//! nearest neighbours before the corpus is scanned for lines sharing any of
//! the expanded terms.

mod config;
mod error;
pub mod expander;
pub mod grep;
pub mod model;
pub mod preprocess;
pub mod search;
pub mod stopwords;
pub mod vocab;
pub mod word2vec;

pub use config::SemanticConfig;
pub use error::{Result, TrainError};
pub use expander::{QueryExpansion, SemanticExpander};
pub use grep::{GrepReport, SemanticGrep};
pub use model::{EmbeddingModel, cosine_similarity};
pub use preprocess::Preprocessor;
pub use search::{SearchHit, SearchReport, Searcher};
pub use vocab::Vocabulary;
pub use word2vec::{Word2Vec, Word2VecParams};
