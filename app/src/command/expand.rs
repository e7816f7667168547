use newsfacts_config::Config;
use std::path::PathBuf;

pub struct ExpandInput {
    pub config: Config,
    pub corpus: Option<PathBuf>,
    pub query: String,
}

/// Strategy for printing the expansion of a query word as JSON.
#[derive(Debug, Clone, Copy)]
pub struct ExpandStrategy;

impl super::CommandStrategy for ExpandStrategy {
    type Input = ExpandInput;

    fn execute(&self, input: Self::Input) -> anyhow::Result<()> {
        let mut grep = super::semantic_grep(&input.config, input.corpus)?;
        let expansion = grep.expand(&input.query)?;

        println!("{}", serde_json::to_string_pretty(&expansion)?);
        let terms: Vec<String> = expansion.terms().into_iter().collect();
        println!("Search terms: {}", terms.join(", "));
        Ok(())
    }
}
