//! Static strategy pattern for CLI commands.
//!
//! Each subcommand is a separate strategy type with its own input, so
//! dispatch in `main` is monomorphized and no trait objects are involved.

use gamematch_config::Config;
use gamematch_matching::{PromptMatcher, default_table};
use serde::Serialize;
use tracing::info;

mod catalog;
mod concepts;
mod info;
mod init;
mod match_cmd;
mod remix;
mod suggest;
mod version;

pub use catalog::{CatalogInput, CatalogStrategy};
pub use concepts::{ConceptsInput, ConceptsStrategy};
pub use info::InfoStrategy;
pub use init::InitStrategy;
pub use match_cmd::{MatchInput, MatchStrategy};
pub use remix::{RemixInput, RemixStrategy};
pub use suggest::{SuggestInput, SuggestStrategy};
pub use version::VersionStrategy;

/// Core trait defining the contract for all command strategies.
///
/// # Example
/// ```rust
/// struct MyStrategy;
///
/// impl CommandStrategy for MyStrategy {
///     type Input = MyInput;
///
///     async fn execute(&self, input: Self::Input) -> anyhow::Result<()> {
///         Ok(())
///     }
/// }
/// ```
pub trait CommandStrategy: Send + Sync + 'static {
    /// The input type this strategy accepts.
    type Input;

    /// # Errors
    /// Returns an error if command execution fails.
    async fn execute(&self, input: Self::Input) -> anyhow::Result<()>;
}

/// Keyword matcher over the configured pattern table, or the built-in one.
fn build_matcher(config: &Config) -> anyhow::Result<PromptMatcher> {
    if let Some(table) = config.pattern_table()? {
        info!("Using {} patterns from configured pattern file", table.len());
        return Ok(PromptMatcher::new(table));
    }
    Ok(PromptMatcher::new(default_table()))
}

fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn join_or_none(values: &[String]) -> String {
    if values.is_empty() {
        "(none)".to_string()
    } else {
        values.join(", ")
    }
}
