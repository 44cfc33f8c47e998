use gamematch_core::Difficulty;
use gamematch_matching::{GameCatalog, GameEntry, avatar};

use super::print_json;

#[derive(Debug, Clone, Default)]
pub struct CatalogInput {
    pub category: Option<String>,
    pub difficulty: Option<String>,
    pub search: Option<String>,
    pub json: bool,
}

/// Strategy for browsing the built-in game catalog.
///
/// Filters combine: an entry is listed only if it passes every filter given.
#[derive(Debug, Clone, Copy)]
pub struct CatalogStrategy;

impl super::CommandStrategy for CatalogStrategy {
    type Input = CatalogInput;

    async fn execute(&self, input: Self::Input) -> anyhow::Result<()> {
        let catalog = GameCatalog::with_defaults();
        let difficulty = input
            .difficulty
            .as_deref()
            .map(str::parse::<Difficulty>)
            .transpose()?;

        let entries = filter(
            &catalog,
            input.category.as_deref(),
            difficulty,
            input.search.as_deref(),
        );

        if input.json {
            return print_json(&entries);
        }

        if entries.is_empty() {
            println!("No games found");
            return Ok(());
        }

        for entry in entries {
            let shown = avatar(&entry.name);
            println!(
                "{} {:<16} {:<20} {:<7} {}",
                shown.avatar,
                entry.id,
                shown.display_name,
                entry.metadata.difficulty,
                entry.metadata.category.as_deref().unwrap_or("-")
            );
        }
        Ok(())
    }
}

fn filter<'a>(
    catalog: &'a GameCatalog,
    category: Option<&str>,
    difficulty: Option<Difficulty>,
    search: Option<&str>,
) -> Vec<&'a GameEntry> {
    let matched_search: Option<Vec<&GameEntry>> = search.map(|q| catalog.search(q));

    catalog
        .all()
        .iter()
        .filter(|entry| category.is_none_or(|c| entry.metadata.category.as_deref() == Some(c)))
        .filter(|entry| difficulty.is_none_or(|d| entry.metadata.difficulty == d))
        .filter(|entry| {
            matched_search
                .as_ref()
                .is_none_or(|found| found.iter().any(|e| e.id == entry.id))
        })
        .collect()
}
