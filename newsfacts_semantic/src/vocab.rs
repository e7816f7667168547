use std::collections::HashMap;

/// Token vocabulary with corpus counts, most frequent first.
#[derive(Debug, Clone, Default)]
pub struct Vocabulary {
    words: Vec<String>,
    counts: Vec<u64>,
    index: HashMap<String, usize>,
}

impl Vocabulary {
    /// Counts tokens over `sentences` and keeps those seen at least
    /// `min_count` times. Ties in frequency are ordered alphabetically.
    #[must_use]
    pub fn build(sentences: &[Vec<String>], min_count: u64) -> Self {
        let mut raw: HashMap<&str, u64> = HashMap::new();
        for token in sentences.iter().flatten() {
            *raw.entry(token.as_str()).or_default() += 1;
        }

        let mut kept: Vec<(&str, u64)> = raw
            .into_iter()
            .filter(|(_, count)| *count >= min_count)
            .collect();
        kept.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));

        Self::from_counts(kept.into_iter().map(|(w, c)| (w.to_string(), c)))
    }

    /// Vocabulary in the given order.
    pub fn from_counts(entries: impl IntoIterator<Item = (String, u64)>) -> Self {
        let mut vocab = Self::default();
        for (word, count) in entries {
            if vocab.index.contains_key(&word) {
                continue;
            }
            vocab.index.insert(word.clone(), vocab.words.len());
            vocab.words.push(word);
            vocab.counts.push(count);
        }
        vocab
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    #[must_use]
    pub fn index_of(&self, word: &str) -> Option<usize> {
        self.index.get(word).copied()
    }

    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        self.index.contains_key(word)
    }

    #[must_use]
    pub fn word(&self, index: usize) -> Option<&str> {
        self.words.get(index).map(String::as_str)
    }

    #[must_use]
    pub fn count(&self, index: usize) -> u64 {
        self.counts.get(index).copied().unwrap_or(0)
    }

    /// Sum of the counts of all kept tokens.
    #[must_use]
    pub fn total_count(&self) -> u64 {
        self.counts.iter().sum()
    }

    #[must_use]
    pub fn words(&self) -> &[String] {
        &self.words
    }

    #[must_use]
    pub fn counts(&self) -> &[u64] {
        &self.counts
    }
}
