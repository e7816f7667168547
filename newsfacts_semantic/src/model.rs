use std::cmp::Ordering;

use crate::vocab::Vocabulary;

/// Compute cosine similarity between two embedding vectors.
///
/// Returns 0.0 if either vector has zero magnitude.
#[must_use]
pub fn cosine_similarity(a: &[f32], b: &[f32]) -> f64 {
    if a.len() != b.len() || a.is_empty() {
        return 0.0;
    }

    let mut dot = 0.0_f64;
    let mut mag_a = 0.0_f64;
    let mut mag_b = 0.0_f64;

    for (x, y) in a.iter().zip(b.iter()) {
        let x = f64::from(*x);
        let y = f64::from(*y);
        dot += x * y;
        mag_a += x * x;
        mag_b += y * y;
    }

    let denom = mag_a.sqrt() * mag_b.sqrt();
    if denom < f64::EPSILON {
        return 0.0;
    }

    dot / denom
}

/// Trained word vectors.
#[derive(Debug, Clone)]
pub struct EmbeddingModel {
    vocab: Vocabulary,
    vectors: Vec<f32>,
    dim: usize,
}

impl EmbeddingModel {
    /// `vectors` holds `vocab.len()` rows of `dim` values, row-major.
    #[must_use]
    pub fn new(vocab: Vocabulary, vectors: Vec<f32>, dim: usize) -> Self {
        debug_assert_eq!(vectors.len(), vocab.len() * dim);
        Self {
            vocab,
            vectors,
            dim,
        }
    }

    /// Builds a model from explicit word vectors. Rows shorter or longer
    /// than the first are padded or cut to its length.
    #[must_use]
    pub fn from_vectors(rows: Vec<(String, Vec<f32>)>) -> Self {
        let dim = rows.first().map_or(0, |(_, v)| v.len());
        let mut vectors = Vec::with_capacity(rows.len() * dim);
        let mut words = Vec::with_capacity(rows.len());
        for (word, mut vector) in rows {
            vector.resize(dim, 0.0);
            vectors.extend(vector);
            words.push((word, 1));
        }
        Self::new(Vocabulary::from_counts(words), vectors, dim)
    }

    #[must_use]
    pub const fn vocab(&self) -> &Vocabulary {
        &self.vocab
    }

    #[must_use]
    pub const fn dim(&self) -> usize {
        self.dim
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.vocab.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.vocab.is_empty()
    }

    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        self.vocab.contains(word)
    }

    #[must_use]
    pub fn vector(&self, word: &str) -> Option<&[f32]> {
        self.vocab.index_of(word).and_then(|i| self.row(i))
    }

    fn row(&self, index: usize) -> Option<&[f32]> {
        self.vectors.get(index * self.dim..(index + 1) * self.dim)
    }

    /// Cosine similarity of two known words.
    #[must_use]
    pub fn similarity(&self, a: &str, b: &str) -> Option<f64> {
        Some(cosine_similarity(self.vector(a)?, self.vector(b)?))
    }

    /// The `topn` words closest to `word` by cosine similarity, best first,
    /// excluding `word` itself. Empty when `word` is unknown.
    #[must_use]
    pub fn most_similar(&self, word: &str, topn: usize) -> Vec<(String, f64)> {
        let Some(index) = self.vocab.index_of(word) else {
            return Vec::new();
        };
        let Some(target) = self.row(index) else {
            return Vec::new();
        };

        let mut scored: Vec<(usize, f64)> = (0..self.vocab.len())
            .filter(|&i| i != index)
            .filter_map(|i| self.row(i).map(|v| (i, cosine_similarity(target, v))))
            .collect();
        scored.sort_by(|a, b| {
            b.1.partial_cmp(&a.1)
                .unwrap_or(Ordering::Equal)
                .then_with(|| a.0.cmp(&b.0))
        });

        scored
            .into_iter()
            .take(topn)
            .filter_map(|(i, score)| self.vocab.word(i).map(|w| (w.to_string(), score)))
            .collect()
    }
}
