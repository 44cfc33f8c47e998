use gamematch_config::Config;
use gamematch_core::{ConceptSet, MatchResult};
use gamematch_matching::{
    AdvisedMatcher, ConceptExtractor, GameCatalog, KeywordAdvisor, PromptMatcher, avatar,
};
use serde::Serialize;
use tracing::info;

use super::{build_matcher, join_or_none, print_json};

#[derive(Debug, Clone)]
pub struct MatchInput {
    pub prompt: String,
    /// Force the advisor path regardless of `matcher.use_advisor`.
    pub advisor: bool,
    pub json: bool,
}

#[derive(Debug, Serialize)]
struct MatchReport {
    prompt: String,
    #[serde(rename = "match")]
    best_match: Option<MatchResult>,
    concepts: ConceptSet,
}

/// Strategy for matching a prompt to a single game template.
///
/// Runs the keyword matcher (or the advisor in front of it) and the concept
/// extractor over the same prompt.
#[derive(Debug, Clone, Copy)]
pub struct MatchStrategy;

impl super::CommandStrategy for MatchStrategy {
    type Input = MatchInput;

    async fn execute(&self, input: Self::Input) -> anyhow::Result<()> {
        let config = Config::load_or_default()?;
        let matcher = build_matcher(&config)?;
        let catalog = GameCatalog::for_table(matcher.table());

        let best_match = find_match(
            matcher,
            catalog.clone(),
            input.advisor || config.matcher.use_advisor,
            &input.prompt,
        )
        .await;

        let report = MatchReport {
            concepts: ConceptExtractor::with_defaults().extract(&input.prompt),
            prompt: input.prompt,
            best_match,
        };

        if input.json {
            return print_json(&report);
        }

        match &report.best_match {
            Some(result) => {
                let label = catalog.get(&result.game_id).map_or_else(
                    || result.game_id.clone(),
                    |entry| {
                        let shown = avatar(&entry.name);
                        format!("{} {} ({})", shown.avatar, shown.display_name, entry.id)
                    },
                );
                println!("Best match: {label}");
                println!("  Score: {} ({})", result.score, result.confidence);
            }
            None => println!("No matching game found"),
        }

        let concepts = &report.concepts;
        println!("Concepts:");
        println!("  Mechanics: {}", join_or_none(&concepts.mechanics));
        println!("  Themes: {}", join_or_none(&concepts.themes));
        println!(
            "  Difficulty: {}",
            concepts
                .difficulty
                .map_or_else(|| "(none)".to_string(), |d| d.to_string())
        );
        println!("  Style: {}", join_or_none(&concepts.style));

        Ok(())
    }
}

/// Best match for `prompt`, through the keyword advisor when `use_advisor` is set.
///
/// `catalog` must describe the same games as the matcher's table, otherwise
/// the advisor's answers are rejected as unknown ids.
async fn find_match(
    matcher: PromptMatcher,
    catalog: GameCatalog,
    use_advisor: bool,
    prompt: &str,
) -> Option<MatchResult> {
    if !use_advisor {
        return matcher.best_match(prompt);
    }

    info!("Matching through keyword advisor");
    let advised = AdvisedMatcher::new(KeywordAdvisor::new(matcher.clone()), matcher, catalog);
    advised.best_match(prompt).await
}
