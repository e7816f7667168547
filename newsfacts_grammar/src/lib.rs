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

//! Grammar-based extraction of birth facts from Russian news text.
//!
//! Token predicates are composed into [`Rule`] trees; three sentence
//! patterns built from those rules are matched left to right by
//! [`FactParser`], and [`BirthFactExtractor`] runs the parser over a corpus
//! behind a cheap keyword pre-filter.

pub mod birth;
pub mod extractor;
pub mod fact;
pub mod parser;
pub mod predicate;
pub mod rule;

pub use birth::{BirthGrammar, BirthPattern};
pub use extractor::{BirthFactExtractor, ExtractionReport, ExtractorConfig, FoundFact};
pub use fact::{BirthFact, Slot};
pub use parser::{FactMatch, FactParser};
pub use predicate::Predicate;
pub use rule::{Capture, Rule};
