use serde::{Deserialize, Serialize};

use crate::word2vec::Word2VecParams;

/// Settings for semantic expansion and search.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SemanticConfig {
    /// Stopwords added on top of the built-in Russian list.
    #[serde(default)]
    pub extra_stopwords: Vec<String>,

    /// Tokens shorter than this (in characters) are dropped.
    #[serde(default = "SemanticConfig::default_min_token_len")]
    pub min_token_len: usize,

    /// Number of neighbours added to an expanded query.
    #[serde(default = "SemanticConfig::default_topn")]
    pub topn: usize,

    /// Search stops after this many matching lines.
    #[serde(default = "SemanticConfig::default_max_hits")]
    pub max_hits: usize,

    /// Matched lines longer than this are cut for display.
    #[serde(default = "SemanticConfig::default_display_width")]
    pub display_width: usize,

    /// Log preprocessing progress every this many corpus lines.
    #[serde(default = "SemanticConfig::default_progress_every")]
    pub progress_every: usize,

    #[serde(default)]
    pub word2vec: Word2VecParams,
}

impl SemanticConfig {
    const fn default_min_token_len() -> usize {
        3
    }

    const fn default_topn() -> usize {
        4
    }

    const fn default_max_hits() -> usize {
        10
    }

    const fn default_display_width() -> usize {
        100
    }

    const fn default_progress_every() -> usize {
        10_000
    }
}

impl Default for SemanticConfig {
    fn default() -> Self {
        Self {
            extra_stopwords: Vec::new(),
            min_token_len: Self::default_min_token_len(),
            topn: Self::default_topn(),
            max_hits: Self::default_max_hits(),
            display_width: Self::default_display_width(),
            progress_every: Self::default_progress_every(),
            word2vec: Word2VecParams::default(),
        }
    }
}
