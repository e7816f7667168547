//! Skip-gram word2vec with negative sampling.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::{Result, TrainError};
use crate::model::EmbeddingModel;
use crate::vocab::Vocabulary;

/// Logistic input beyond which the sigmoid is treated as saturated.
const MAX_EXP: f32 = 6.0;

/// Noise distribution exponent applied to token counts.
const NOISE_POWER: f64 = 0.75;

/// Training hyperparameters.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Word2VecParams {
    #[serde(default = "Word2VecParams::default_vector_size")]
    pub vector_size: usize,

    /// Maximum distance between a word and its context words.
    #[serde(default = "Word2VecParams::default_window")]
    pub window: usize,

    /// Tokens seen fewer times than this are ignored.
    #[serde(default = "Word2VecParams::default_min_count")]
    pub min_count: u64,

    #[serde(default = "Word2VecParams::default_epochs")]
    pub epochs: usize,

    /// Noise words drawn per positive pair.
    #[serde(default = "Word2VecParams::default_negative")]
    pub negative: usize,

    /// Initial learning rate, decayed linearly to `min_alpha`.
    #[serde(default = "Word2VecParams::default_alpha")]
    pub alpha: f32,

    #[serde(default = "Word2VecParams::default_min_alpha")]
    pub min_alpha: f32,

    /// Downsampling threshold for frequent words; 0 disables it.
    #[serde(default = "Word2VecParams::default_sample")]
    pub sample: f64,

    #[serde(default = "Word2VecParams::default_seed")]
    pub seed: u64,
}

impl Word2VecParams {
    const fn default_vector_size() -> usize {
        100
    }

    const fn default_window() -> usize {
        5
    }

    const fn default_min_count() -> u64 {
        5
    }

    const fn default_epochs() -> usize {
        10
    }

    const fn default_negative() -> usize {
        5
    }

    const fn default_alpha() -> f32 {
        0.025
    }

    const fn default_min_alpha() -> f32 {
        0.0001
    }

    const fn default_sample() -> f64 {
        1e-3
    }

    const fn default_seed() -> u64 {
        1
    }

    fn validate(&self) -> Result<()> {
        if self.vector_size == 0 {
            return Err(TrainError::InvalidParams("vector_size must be positive".into()));
        }
        if self.window == 0 {
            return Err(TrainError::InvalidParams("window must be positive".into()));
        }
        if self.epochs == 0 {
            return Err(TrainError::InvalidParams("epochs must be positive".into()));
        }
        if !(self.alpha > 0.0 && self.min_alpha >= 0.0 && self.min_alpha <= self.alpha) {
            return Err(TrainError::InvalidParams(format!(
                "learning rate must satisfy 0 <= min_alpha ({}) <= alpha ({}), alpha > 0",
                self.min_alpha, self.alpha
            )));
        }
        Ok(())
    }
}

impl Default for Word2VecParams {
    fn default() -> Self {
        Self {
            vector_size: Self::default_vector_size(),
            window: Self::default_window(),
            min_count: Self::default_min_count(),
            epochs: Self::default_epochs(),
            negative: Self::default_negative(),
            alpha: Self::default_alpha(),
            min_alpha: Self::default_min_alpha(),
            sample: Self::default_sample(),
            seed: Self::default_seed(),
        }
    }
}

/// Word2vec trainer. Deterministic for a given seed and input.
#[derive(Debug, Clone, Default)]
pub struct Word2Vec {
    params: Word2VecParams,
}

impl Word2Vec {
    #[must_use]
    pub const fn new(params: Word2VecParams) -> Self {
        Self { params }
    }

    #[must_use]
    pub const fn params(&self) -> &Word2VecParams {
        &self.params
    }

    /// Builds the vocabulary and trains input vectors over `sentences`.
    pub fn train(&self, sentences: &[Vec<String>]) -> Result<EmbeddingModel> {
        self.params.validate()?;
        if sentences.iter().all(Vec::is_empty) {
            return Err(TrainError::NoSentences);
        }

        let vocab = Vocabulary::build(sentences, self.params.min_count);
        if vocab.is_empty() {
            return Err(TrainError::EmptyVocabulary {
                min_count: self.params.min_count,
            });
        }

        info!(
            "Training word2vec: {} sentences, {} distinct tokens, {} epochs",
            sentences.len(),
            vocab.len(),
            self.params.epochs
        );

        let encoded: Vec<Vec<usize>> = sentences
            .iter()
            .map(|s| s.iter().filter_map(|t| vocab.index_of(t)).collect())
            .collect();

        let mut state = TrainState::new(&self.params, &vocab);
        let total_words = vocab.total_count() * self.params.epochs as u64;

        for epoch in 0..self.params.epochs {
            for sentence in &encoded {
                state.train_sentence(sentence, total_words);
            }
            debug!(
                "Epoch {}/{} done, alpha {:.6}",
                epoch + 1,
                self.params.epochs,
                state.current_alpha(total_words)
            );
        }

        info!("Word2vec training finished");
        Ok(EmbeddingModel::new(
            vocab,
            state.input,
            self.params.vector_size,
        ))
    }
}

struct TrainState<'a> {
    params: &'a Word2VecParams,
    dim: usize,
    input: Vec<f32>,
    output: Vec<f32>,
    keep_probability: Vec<f64>,
    noise: NoiseSampler,
    rng: StdRng,
    words_seen: u64,
    neu1e: Vec<f32>,
}

impl<'a> TrainState<'a> {
    fn new(params: &'a Word2VecParams, vocab: &Vocabulary) -> Self {
        let dim = params.vector_size;
        let mut rng = StdRng::seed_from_u64(params.seed);
        let input = (0..vocab.len() * dim)
            .map(|_| (rng.random::<f32>() - 0.5) / dim as f32)
            .collect();

        Self {
            params,
            dim,
            input,
            output: vec![0.0; vocab.len() * dim],
            keep_probability: keep_probabilities(vocab, params.sample),
            noise: NoiseSampler::new(vocab.counts()),
            rng,
            words_seen: 0,
            neu1e: vec![0.0; dim],
        }
    }

    fn current_alpha(&self, total_words: u64) -> f32 {
        let progress = self.words_seen as f32 / total_words.max(1) as f32;
        let alpha = self.params.alpha - (self.params.alpha - self.params.min_alpha) * progress;
        alpha.max(self.params.min_alpha)
    }

    fn train_sentence(&mut self, sentence: &[usize], total_words: u64) {
        let alpha = self.current_alpha(total_words);
        self.words_seen += sentence.len() as u64;

        let kept: Vec<usize> = sentence
            .iter()
            .copied()
            .filter(|&w| {
                let p = self.keep_probability[w];
                p >= 1.0 || self.rng.random::<f64>() < p
            })
            .collect();

        for (pos, &center) in kept.iter().enumerate() {
            let reduced = self.rng.random_range(0..self.params.window);
            let span = self.params.window - reduced;
            let start = pos.saturating_sub(span);
            let end = (pos + span + 1).min(kept.len());
            for (ctx_pos, &context) in kept.iter().enumerate().take(end).skip(start) {
                if ctx_pos != pos {
                    self.train_pair(context, center, alpha);
                }
            }
        }
    }

    /// One SGD step: the input vector of `context` predicts `target`
    /// against `negative` noise words.
    fn train_pair(&mut self, context: usize, target: usize, alpha: f32) {
        let dim = self.dim;
        let l1 = context * dim;
        self.neu1e.iter_mut().for_each(|x| *x = 0.0);

        for d in 0..=self.params.negative {
            let (word, label) = if d == 0 {
                (target, 1.0)
            } else {
                let noise = self.noise.sample(&mut self.rng);
                if noise == target {
                    continue;
                }
                (noise, 0.0)
            };

            let l2 = word * dim;
            let f: f32 = (0..dim)
                .map(|i| self.input[l1 + i] * self.output[l2 + i])
                .sum();
            let g = if f > MAX_EXP {
                (label - 1.0) * alpha
            } else if f < -MAX_EXP {
                label * alpha
            } else {
                (label - sigmoid(f)) * alpha
            };

            for i in 0..dim {
                self.neu1e[i] += g * self.output[l2 + i];
                self.output[l2 + i] += g * self.input[l1 + i];
            }
        }

        for i in 0..dim {
            self.input[l1 + i] += self.neu1e[i];
        }
    }
}

fn sigmoid(x: f32) -> f32 {
    1.0 / (1.0 + (-x).exp())
}

/// Probability of keeping each token under frequent-word downsampling.
fn keep_probabilities(vocab: &Vocabulary, sample: f64) -> Vec<f64> {
    let threshold = sample * vocab.total_count() as f64;
    vocab
        .counts()
        .iter()
        .map(|&count| {
            if sample <= 0.0 || count == 0 {
                return 1.0;
            }
            let count = count as f64;
            ((count / threshold).sqrt() + 1.0) * threshold / count
        })
        .collect()
}

/// Draws noise words from the unigram distribution raised to 3/4.
struct NoiseSampler {
    cumulative: Vec<f64>,
}

impl NoiseSampler {
    fn new(counts: &[u64]) -> Self {
        let mut total = 0.0;
        let mut cumulative: Vec<f64> = counts
            .iter()
            .map(|&c| {
                total += (c as f64).powf(NOISE_POWER);
                total
            })
            .collect();
        if total > 0.0 {
            cumulative.iter_mut().for_each(|c| *c /= total);
        }
        Self { cumulative }
    }

    fn sample(&self, rng: &mut StdRng) -> usize {
        let r = rng.random::<f64>();
        self.cumulative
            .partition_point(|&c| c <= r)
            .min(self.cumulative.len().saturating_sub(1))
    }
}
