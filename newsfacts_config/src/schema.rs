use newsfacts_core::{BodyColumn, Lexicon, LexiconAnalyzer, LexiconFile, MorphAnalyzer};
use newsfacts_grammar::ExtractorConfig;
use newsfacts_semantic::SemanticConfig;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::info;

const CONFIG_DIR: &str = "newsfacts";
const CONFIG_FILE: &str = "config.json";

const CONFIG_TEMPLATE: &str = r#"{
  "corpus": {
    "path": "news.txt",
    "extract_column": "last",
    "train_column": { "nth": 2 }
  },
  "extractor": {
    "keywords": ["родил", "урожен"],
    "progress_every": 1000
  },
  "semantic": {
    "extra_stopwords": [],
    "min_token_len": 3,
    "topn": 4,
    "max_hits": 10,
    "display_width": 100,
    "progress_every": 10000,
    "word2vec": {
      "vector_size": 100,
      "window": 5,
      "min_count": 5,
      "epochs": 10,
      "negative": 5,
      "alpha": 0.025,
      "min_alpha": 0.0001,
      "sample": 0.001,
      "seed": 1
    }
  },
  "lexicon": {
    "path": null
  }
}"#;

#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct Config {
    #[serde(default)]
    pub corpus: CorpusConfig,
    #[serde(default)]
    pub extractor: ExtractorConfig,
    #[serde(default)]
    pub semantic: SemanticConfig,
    #[serde(default)]
    pub lexicon: LexiconConfig,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct CorpusConfig {
    /// Corpus file; `.gz` files are decompressed on the fly.
    #[serde(default = "CorpusConfig::default_path")]
    pub path: PathBuf,
    /// Column the extractor reads from tab-separated records.
    #[serde(default = "CorpusConfig::default_extract_column")]
    pub extract_column: BodyColumn,
    /// Column training sentences are taken from.
    #[serde(default = "CorpusConfig::default_train_column")]
    pub train_column: BodyColumn,
}

impl Default for CorpusConfig {
    fn default() -> Self {
        Self {
            path: Self::default_path(),
            extract_column: Self::default_extract_column(),
            train_column: Self::default_train_column(),
        }
    }
}

impl CorpusConfig {
    fn default_path() -> PathBuf {
        PathBuf::from("news.txt")
    }

    const fn default_extract_column() -> BodyColumn {
        BodyColumn::Last
    }

    const fn default_train_column() -> BodyColumn {
        BodyColumn::Nth(2)
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct LexiconConfig {
    /// JSON lexicon merged into the built-in one.
    #[serde(default)]
    pub path: Option<PathBuf>,
}

impl Config {
    pub fn config_dir() -> anyhow::Result<PathBuf> {
        Ok(dirs::home_dir()
            .ok_or_else(|| anyhow::anyhow!("Cannot find home directory"))?
            .join(CONFIG_DIR))
    }

    pub fn default_path() -> anyhow::Result<PathBuf> {
        Ok(Self::config_dir()?.join(CONFIG_FILE))
    }

    /// Reads a config file.
    pub fn load_from(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Loads `explicit` if given (it must exist), otherwise
    /// `~/newsfacts/config.json`, falling back to defaults when that file is
    /// absent.
    pub fn load(explicit: Option<&Path>) -> anyhow::Result<Self> {
        if let Some(path) = explicit {
            if !path.exists() {
                anyhow::bail!("Config file not found at: {}", path.display());
            }
            info!("Loaded config from {}", path.display());
            return Self::load_from(path);
        }

        let path = Self::default_path()?;
        if path.exists() {
            info!("Loaded config from {}", path.display());
            Self::load_from(&path)
        } else {
            info!(
                "No config at {}, using defaults. Run 'newsfacts init' to create one.",
                path.display()
            );
            Ok(Self::default())
        }
    }

    pub fn ensure_config_dir() -> anyhow::Result<PathBuf> {
        let config_dir = Self::config_dir()?;
        std::fs::create_dir_all(&config_dir)?;
        Ok(config_dir)
    }

    pub fn create_config() -> anyhow::Result<()> {
        let config_dir = Self::ensure_config_dir()?;
        let config_path = config_dir.join(CONFIG_FILE);
        Self::write_template(&config_path)?;

        println!("✅ Created config file at: {}", config_path.display());
        println!();
        println!("📝 Next steps:");
        println!("   1. Point corpus.path at your news corpus (plain or .gz)");
        println!("   2. Run 'newsfacts extract' to pull birth facts");
        println!("   3. Run 'newsfacts grep <word>' for semantic search");
        println!();
        println!("🔧 Configuration options:");
        println!("   - extractor.keywords: stems a line must contain to be parsed");
        println!("   - semantic.topn: neighbours added to each query");
        println!("   - semantic.word2vec: embedding hyperparameters");
        println!("   - lexicon.path: extra names and places in JSON");
        println!();
        Ok(())
    }

    /// Writes the template to `path`, refusing to overwrite.
    pub fn write_template(path: &Path) -> anyhow::Result<()> {
        if path.exists() {
            anyhow::bail!(
                "Config file already exists at: {}. Please edit it directly.",
                path.display()
            );
        }
        std::fs::write(path, CONFIG_TEMPLATE)?;
        Ok(())
    }

    /// The built-in analyzer, extended with the configured lexicon file.
    pub fn analyzer(&self) -> anyhow::Result<Arc<dyn MorphAnalyzer>> {
        let mut lexicon = Lexicon::builtin();
        if let Some(path) = &self.lexicon.path {
            let file = LexiconFile::load(path)?;
            lexicon.extend(&file);
            info!("Extended lexicon from {}", path.display());
        }
        Ok(Arc::new(LexiconAnalyzer::new(lexicon)))
    }

    /// Extractor settings with the corpus extraction column applied.
    #[must_use]
    pub fn extractor_config(&self) -> ExtractorConfig {
        ExtractorConfig {
            column: self.corpus.extract_column,
            ..self.extractor.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("newsfacts_{name}_{}.json", uuid::Uuid::now_v7()))
    }

    #[test]
    #[expect(clippy::expect_used, reason = "Test failure should panic with context")]
    fn empty_object_is_all_defaults() {
        let config: Config = serde_json::from_str("{}").expect("empty config is valid");
        assert_eq!(config.corpus.path, PathBuf::from("news.txt"));
        assert_eq!(config.corpus.extract_column, BodyColumn::Last);
        assert_eq!(config.corpus.train_column, BodyColumn::Nth(2));
        assert_eq!(config.semantic.topn, 4);
        assert_eq!(config.semantic.max_hits, 10);
        assert_eq!(config.extractor.keywords, vec!["родил", "урожен"]);
        assert!(config.lexicon.path.is_none());
    }

    #[test]
    #[expect(clippy::expect_used, reason = "Test failure should panic with context")]
    fn template_matches_defaults() {
        let config: Config = serde_json::from_str(CONFIG_TEMPLATE).expect("template is valid");
        let defaults = Config::default();
        assert_eq!(config.corpus.path, defaults.corpus.path);
        assert_eq!(config.corpus.train_column, defaults.corpus.train_column);
        assert_eq!(config.semantic.word2vec.vector_size, 100);
        assert_eq!(config.semantic.word2vec.min_count, 5);
        assert_eq!(config.semantic.display_width, defaults.semantic.display_width);
        assert_eq!(config.extractor.progress_every, defaults.extractor.progress_every);
    }

    #[test]
    #[expect(clippy::expect_used, reason = "Test failure should panic with context")]
    fn partial_sections_keep_other_defaults() {
        let config: Config =
            serde_json::from_str(r#"{"semantic": {"topn": 7}, "corpus": {"path": "x.gz"}}"#)
                .expect("partial config is valid");
        assert_eq!(config.semantic.topn, 7);
        assert_eq!(config.semantic.max_hits, 10);
        assert_eq!(config.corpus.path, PathBuf::from("x.gz"));
        assert_eq!(config.corpus.extract_column, BodyColumn::Last);
    }

    #[test]
    fn explicit_missing_path_is_an_error() {
        let path = temp_path("missing");
        assert!(Config::load(Some(&path)).is_err());
    }

    #[test]
    #[expect(clippy::expect_used, reason = "Test failure should panic with context")]
    fn template_is_not_overwritten() {
        let path = temp_path("template");
        Config::write_template(&path).expect("first write succeeds");
        assert!(Config::write_template(&path).is_err());

        let loaded = Config::load(Some(&path)).expect("template loads");
        assert_eq!(loaded.semantic.topn, 4);
        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn extractor_config_takes_corpus_column() {
        let mut config = Config::default();
        config.corpus.extract_column = BodyColumn::Nth(1);
        assert_eq!(config.extractor_config().column, BodyColumn::Nth(1));
    }

    #[test]
    #[expect(clippy::expect_used, reason = "Test failure should panic with context")]
    fn lexicon_file_extends_analyzer() {
        let path = temp_path("lexicon");
        std::fs::write(&path, r#"{"places": ["Урюпинск"]}"#).expect("write lexicon");

        let mut config = Config::default();
        config.lexicon.path = Some(path.clone());
        let analyzer = config.analyzer().expect("lexicon loads");
        assert!(
            analyzer
                .grammemes("Урюпинске")
                .contains(newsfacts_core::Grammeme::Geox)
        );
        let _ = std::fs::remove_file(&path);
    }
}
