//! Static strategy pattern for CLI commands.
//!
//! Each command is a separate strategy type with its own input, dispatched
//! statically from `main`.

use newsfacts_config::Config;
use newsfacts_semantic::{Preprocessor, SemanticGrep};
use std::path::PathBuf;

mod expand;
mod extract;
mod grep;
mod info;
mod init;
mod parse;
mod version;

pub use expand::{ExpandInput, ExpandStrategy};
pub use extract::{ExtractInput, ExtractStrategy};
pub use grep::{GrepInput, GrepStrategy};
pub use info::InfoStrategy;
pub use init::InitStrategy;
pub use parse::ParseStrategy;
pub use version::VersionStrategy;

/// Core trait defining the contract for all command strategies.
///
/// Each strategy defines its own input type, so parameters are passed
/// without runtime casting or boxing.
pub trait CommandStrategy: Send + Sync + 'static {
    /// The input type this strategy accepts.
    type Input;

    /// Execute the command with the given input.
    ///
    /// # Errors
    /// Returns an error if command execution fails.
    fn execute(&self, input: Self::Input) -> anyhow::Result<()>;
}

/// Semantic grep over `corpus`, or the configured corpus.
fn semantic_grep(config: &Config, corpus: Option<PathBuf>) -> anyhow::Result<SemanticGrep> {
    let path = corpus.unwrap_or_else(|| config.corpus.path.clone());
    let preprocessor = Preprocessor::from_config(config.analyzer()?, &config.semantic);
    Ok(SemanticGrep::new(
        path,
        config.corpus.train_column,
        preprocessor,
        config.semantic.clone(),
    ))
}
