use thiserror::Error;

pub type Result<T> = std::result::Result<T, TrainError>;

#[derive(Debug, Error)]
pub enum TrainError {
    #[error("No sentences to train on")]
    NoSentences,

    #[error("Vocabulary is empty: no token occurs at least {min_count} times")]
    EmptyVocabulary { min_count: u64 },

    #[error("Invalid training parameter: {0}")]
    InvalidParams(String),
}
