use newsfacts_config::Config;
use newsfacts_grammar::FactParser;

/// Strategy for running the birth grammar over one text, bypassing the
/// keyword pre-filter.
#[derive(Debug, Clone, Copy)]
pub struct ParseStrategy;

impl super::CommandStrategy for ParseStrategy {
    type Input = (Config, String);

    fn execute(&self, (config, text): Self::Input) -> anyhow::Result<()> {
        let parser = FactParser::new(config.analyzer()?);
        let matches = parser.parse(&text);
        if matches.is_empty() {
            println!("No birth facts found.");
        }
        for m in matches {
            println!("[{}] {}", m.pattern, m.fact);
        }
        Ok(())
    }
}
