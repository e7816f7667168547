use newsfacts_config::Config;
use newsfacts_semantic::QueryExpansion;
use std::path::PathBuf;

pub struct GrepInput {
    pub config: Config,
    pub corpus: Option<PathBuf>,
    pub queries: Vec<String>,
}

/// Strategy for semantic search. The model is trained once and shared by
/// all queries of the run.
#[derive(Debug, Clone, Copy)]
pub struct GrepStrategy;

impl super::CommandStrategy for GrepStrategy {
    type Input = GrepInput;

    fn execute(&self, input: Self::Input) -> anyhow::Result<()> {
        let width = input.config.semantic.display_width;
        let mut grep = super::semantic_grep(&input.config, input.corpus)?;

        for query in &input.queries {
            println!("\nSearching: '{query}'");
            let report = grep.grep(query, |hit| {
                println!(
                    "[Line {}] [Matched: {}]: {}",
                    hit.line,
                    hit.matched.join(", "),
                    hit.preview(width)
                );
            })?;

            match &report.expansion {
                QueryExpansion::Filtered { .. } => {
                    println!("Query is not usable (probably a stopword).");
                }
                QueryExpansion::OutOfVocabulary { lemma, .. } => {
                    println!("Word '{lemma}' is not in the vocabulary, nothing to search.");
                }
                QueryExpansion::Expanded {
                    lemma, neighbors, ..
                } => {
                    println!("{}", "-".repeat(50));
                    println!("Query: '{query}' -> normal form: '{lemma}'");
                    println!("Related words: {neighbors:?}");
                    println!("Lines matched: {}", report.search.hits.len());
                    if report.search.truncated {
                        println!("... (display limit reached, output stopped)");
                    }
                }
            }
        }
        Ok(())
    }
}
