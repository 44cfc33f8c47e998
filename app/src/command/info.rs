use gamematch_config::Config;
use gamematch_matching::GameCatalog;
use tracing::info;

use super::build_matcher;

/// Strategy for displaying the effective configuration.
///
/// Prints the config file location, matcher settings, the pattern table in
/// use and the logging level. A missing config file is reported, not an error.
#[derive(Debug, Clone, Copy)]
pub struct InfoStrategy;

impl super::CommandStrategy for InfoStrategy {
    type Input = ();

    async fn execute(&self, _input: Self::Input) -> anyhow::Result<()> {
        let config_path = Config::config_path()?;
        let config = Config::load_or_default()?;

        println!("=== gamematch Configuration ===\n");

        println!("Config File:");
        println!("  Path: {}", config_path.display());
        if config_path.exists() {
            println!("  Status: Loaded");
        } else {
            println!("  Status: Not found (using defaults, run 'gamematch init')");
        }
        println!();

        println!("Matcher:");
        match &config.matcher.pattern_file {
            Some(path) => println!("  Pattern File: {}", path.display()),
            None => println!("  Pattern File: (built-in)"),
        }
        println!("  Suggestion Limit: {}", config.matcher.suggestion_limit);
        println!("  Use Advisor: {}", config.matcher.use_advisor);

        info!("Validating pattern table");
        match build_matcher(&config) {
            Ok(matcher) => {
                println!("  Patterns: {}", matcher.table().len());
                println!("  Games: {}", matcher.table().ids().join(", "));
            }
            Err(e) => {
                println!("  Patterns: Failed to load");
                println!("  Error: {e}");
            }
        }
        println!("  Catalog Entries: {}", GameCatalog::with_defaults().len());
        println!();

        println!("Logging:");
        println!("  Level: {}", config.logging.level);
        if let Ok(directive) = std::env::var("RUST_LOG") {
            println!("  RUST_LOG: {directive} (overrides level)");
        }

        Ok(())
    }
}
