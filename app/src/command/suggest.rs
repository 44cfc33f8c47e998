use gamematch_config::Config;

use super::{build_matcher, print_json};

#[derive(Debug, Clone)]
pub struct SuggestInput {
    pub prompt: String,
    /// Overrides `matcher.suggestion_limit`.
    pub limit: Option<usize>,
    pub json: bool,
}

/// Strategy for listing the top-scoring games for a prompt.
#[derive(Debug, Clone, Copy)]
pub struct SuggestStrategy;

impl super::CommandStrategy for SuggestStrategy {
    type Input = SuggestInput;

    async fn execute(&self, input: Self::Input) -> anyhow::Result<()> {
        let config = Config::load_or_default()?;
        let matcher = build_matcher(&config)?;
        let limit = input.limit.unwrap_or(config.matcher.suggestion_limit);

        let suggestions = matcher.suggestions(&input.prompt, limit);

        if input.json {
            return print_json(&suggestions);
        }

        if suggestions.is_empty() {
            println!("No suggestions");
            return Ok(());
        }

        for (rank, suggestion) in suggestions.iter().enumerate() {
            println!(
                "{}. {} (score {}): {}",
                rank + 1,
                suggestion.game_id,
                suggestion.score,
                suggestion.reason
            );
        }
        Ok(())
    }
}
