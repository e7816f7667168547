use newsfacts_config::Config;
use newsfacts_core::Error;
use newsfacts_grammar::{BirthFactExtractor, FoundFact};
use std::path::PathBuf;
use tracing::{error, info};

pub struct ExtractInput {
    pub config: Config,
    pub path: Option<PathBuf>,
    pub json: bool,
}

/// Strategy for extracting birth facts from a corpus file.
///
/// A missing corpus is reported and ends the run successfully; read errors
/// part-way through keep the facts found so far.
#[derive(Debug, Clone, Copy)]
pub struct ExtractStrategy;

impl super::CommandStrategy for ExtractStrategy {
    type Input = ExtractInput;

    fn execute(&self, input: Self::Input) -> anyhow::Result<()> {
        let ExtractInput { config, path, json } = input;
        let path = path.unwrap_or_else(|| config.corpus.path.clone());
        let extractor = BirthFactExtractor::new(config.analyzer()?, config.extractor_config());

        let print = |found: &FoundFact| {
            if json {
                match serde_json::to_string(found) {
                    Ok(line) => println!("{line}"),
                    Err(e) => error!("Failed to serialize fact: {e}"),
                }
            } else {
                println!("[Line {}] Found: {}", found.line, found.fact);
            }
        };

        let report = match extractor.extract_file(&path, print) {
            Ok(report) => report,
            Err(Error::CorpusNotFound(missing)) => {
                println!("Error: File {} not found.", missing.display());
                return Ok(());
            }
            Err(e) => return Err(e.into()),
        };

        info!(
            "Read {} lines: {} candidates, {} skipped",
            report.lines_read, report.candidate_lines, report.skipped_lines
        );
        if !json {
            println!("{}", "-".repeat(30));
            println!("Done! Total entries found: {}", report.facts.len());
        }
        Ok(())
    }
}
