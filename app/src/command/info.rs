use newsfacts_config::Config;
use newsfacts_core::BodyColumn;
use std::path::PathBuf;

/// Strategy for displaying the effective configuration.
#[derive(Debug, Clone, Copy)]
pub struct InfoStrategy;

impl super::CommandStrategy for InfoStrategy {
    /// Explicit config path, if one was given.
    type Input = Option<PathBuf>;

    fn execute(&self, input: Self::Input) -> anyhow::Result<()> {
        let config = Config::load(input.as_deref())?;

        println!("=== newsfacts Configuration ===\n");

        println!("Config File:");
        match input {
            Some(path) => println!("  {}", path.display()),
            None => println!("  {}", Config::default_path()?.display()),
        }
        println!();

        println!("Corpus:");
        let corpus = &config.corpus;
        let status = if corpus.path.exists() {
            "found"
        } else {
            "missing"
        };
        println!("  Path: {} ({status})", corpus.path.display());
        println!("  Extract Column: {}", format_column(corpus.extract_column));
        println!("  Train Column: {}", format_column(corpus.train_column));
        println!();

        println!("Extractor:");
        println!("  Keywords: {}", config.extractor.keywords.join(", "));
        println!("  Progress Every: {}", config.extractor.progress_every);
        println!();

        let semantic = &config.semantic;
        println!("Semantic Search:");
        if semantic.extra_stopwords.is_empty() {
            println!("  Extra Stopwords: (none)");
        } else {
            println!("  Extra Stopwords: {}", semantic.extra_stopwords.join(", "));
        }
        println!("  Min Token Length: {}", semantic.min_token_len);
        println!("  Top N: {}", semantic.topn);
        println!("  Max Hits: {}", semantic.max_hits);
        println!("  Display Width: {}", semantic.display_width);
        println!("  Word2vec:");
        let w2v = &semantic.word2vec;
        println!("    Vector Size: {}", w2v.vector_size);
        println!("    Window: {}", w2v.window);
        println!("    Min Count: {}", w2v.min_count);
        println!("    Epochs: {}", w2v.epochs);
        println!("    Negative: {}", w2v.negative);
        println!("    Alpha: {} -> {}", w2v.alpha, w2v.min_alpha);
        println!("    Sample: {}", w2v.sample);
        println!("    Seed: {}", w2v.seed);
        println!();

        println!("Lexicon:");
        match &config.lexicon.path {
            Some(path) => println!("  Extension: {}", path.display()),
            None => println!("  Extension: (built-in only)"),
        }
        let analyzer_status = match config.analyzer() {
            Ok(_) => "OK".to_string(),
            Err(e) => format!("failed ({e})"),
        };
        println!("  Status: {analyzer_status}");

        Ok(())
    }
}

fn format_column(column: BodyColumn) -> String {
    match column {
        BodyColumn::Last => "last".to_string(),
        BodyColumn::Nth(i) => format!("#{i}"),
    }
}
