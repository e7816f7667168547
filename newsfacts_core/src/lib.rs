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
    clippy::module_name_repetitions
)]

//! Shared building blocks for the newsfacts pipelines: corpus ingestion,
//! tokenization and morphological analysis.

pub mod corpus;
mod error;
pub mod morph;
pub mod token;

pub use corpus::{BodyColumn, CorpusLines, body_text, open_corpus};
pub use error::{Error, Result};
pub use morph::{
    Grammeme, GrammemeSet, Lexicon, LexiconAnalyzer, LexiconFile, MorphAnalyzer, Parse,
};
pub use token::{Token, TokenKind, Tokenizer};
