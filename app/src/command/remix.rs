use gamematch_remix::{RemixRequest, RemixStore};
use std::path::PathBuf;
use tracing::info;

use super::print_json;

#[derive(Debug, Clone)]
pub struct RemixInput {
    /// File holding the remixed game source.
    pub file: PathBuf,
    pub name: Option<String>,
    pub description: Option<String>,
    pub json: bool,
}

/// Strategy for packaging a game source file as a remix entry.
///
/// The store lives only for the duration of the command, so this prints the
/// entry that a feed would receive.
#[derive(Debug, Clone, Copy)]
pub struct RemixStrategy;

impl super::CommandStrategy for RemixStrategy {
    type Input = RemixInput;

    async fn execute(&self, input: Self::Input) -> anyhow::Result<()> {
        let code = std::fs::read_to_string(&input.file)?;
        info!("Read {} bytes of game code from {}", code.len(), input.file.display());

        let store = RemixStore::new();
        let game = store.create(RemixRequest {
            code,
            name: input.name,
            description: input.description,
        })?;

        if input.json {
            return print_json(&game);
        }

        println!("{} {} ({})", game.metadata.icon, game.name, game.id);
        println!("  Description: {}", game.metadata.description);
        println!("  Tags: {}", game.metadata.tags.join(", "));
        println!("  Play time: {}", game.metadata.estimated_play_time);
        println!("  Content hash: {}", game.content_hash);
        Ok(())
    }
}
