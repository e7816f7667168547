use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("File {} not found.", .0.display())]
    CorpusNotFound(PathBuf),

    #[error("Lexicon file {path} is invalid: {source}")]
    Lexicon {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
