//! Registry of the bundled game templates (metadata only).

use gamematch_core::{Difficulty, GamePattern, PatternTable};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameMetadata {
    pub difficulty: Difficulty,
    pub description: String,
    pub icon: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub estimated_play_time: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameEntry {
    pub id: String,
    pub name: String,
    pub metadata: GameMetadata,
}

impl GameEntry {
    #[allow(clippy::too_many_arguments)]
    fn builtin(
        id: &str,
        name: &str,
        difficulty: Difficulty,
        description: &str,
        icon: &str,
        category: &str,
        tags: &[&str],
        estimated_play_time: &str,
    ) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            metadata: GameMetadata {
                difficulty,
                description: description.to_string(),
                icon: icon.to_string(),
                category: Some(category.to_string()),
                tags: tags.iter().map(ToString::to_string).collect(),
                estimated_play_time: Some(estimated_play_time.to_string()),
            },
        }
    }

    /// Placeholder entry for a game known only by its pattern.
    fn from_pattern(id: &str, pattern: &GamePattern) -> Self {
        Self {
            id: id.to_string(),
            name: id.to_string(),
            metadata: GameMetadata {
                difficulty: Difficulty::Medium,
                description: pattern.description.clone(),
                icon: "🎮".to_string(),
                category: None,
                tags: pattern.keywords.clone(),
                estimated_play_time: None,
            },
        }
    }
}

/// Ordered game registry.
#[derive(Debug, Clone, Default)]
pub struct GameCatalog {
    entries: Vec<GameEntry>,
}

impl GameCatalog {
    #[must_use]
    pub const fn new(entries: Vec<GameEntry>) -> Self {
        Self { entries }
    }

    /// The ten bundled games, in feed order.
    #[must_use]
    pub fn with_defaults() -> Self {
        Self::new(default_entries())
    }

    /// Catalog of exactly the games in `table`, in table order.
    ///
    /// Bundled metadata is reused for known ids; other games get placeholder
    /// metadata derived from their pattern.
    #[must_use]
    pub fn for_table(table: &PatternTable) -> Self {
        let bundled = default_entries();
        let entries = table
            .iter()
            .map(|entry| {
                bundled
                    .iter()
                    .find(|known| known.id == entry.id)
                    .cloned()
                    .unwrap_or_else(|| GameEntry::from_pattern(&entry.id, &entry.pattern))
            })
            .collect();
        Self::new(entries)
    }

    #[must_use]
    pub fn all(&self) -> &[GameEntry] {
        &self.entries
    }

    #[must_use]
    pub fn get(&self, id: &str) -> Option<&GameEntry> {
        self.entries.iter().find(|entry| entry.id == id)
    }

    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    /// Exact, case-sensitive category match.
    #[must_use]
    pub fn by_category(&self, category: &str) -> Vec<&GameEntry> {
        self.entries
            .iter()
            .filter(|entry| entry.metadata.category.as_deref() == Some(category))
            .collect()
    }

    #[must_use]
    pub fn by_difficulty(&self, difficulty: Difficulty) -> Vec<&GameEntry> {
        self.entries
            .iter()
            .filter(|entry| entry.metadata.difficulty == difficulty)
            .collect()
    }

    /// Case-insensitive substring search over name, description and tags.
    #[must_use]
    pub fn search(&self, query: &str) -> Vec<&GameEntry> {
        let query = query.to_lowercase();
        self.entries
            .iter()
            .filter(|entry| {
                entry.name.to_lowercase().contains(&query)
                    || entry.metadata.description.to_lowercase().contains(&query)
                    || entry
                        .metadata
                        .tags
                        .iter()
                        .any(|tag| tag.to_lowercase().contains(&query))
            })
            .collect()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

fn default_entries() -> Vec<GameEntry> {
    vec![
        GameEntry::builtin(
            "flappy-bird",
            "Flappy Bird",
            Difficulty::Easy,
            "Classic endless flying game with obstacles",
            "🐦",
            "Arcade",
            &["endless", "timing", "obstacles"],
            "2-5 minutes",
        ),
        GameEntry::builtin(
            "tap-game",
            "Tap Game",
            Difficulty::Easy,
            "Simple timing-based tap game",
            "👆",
            "Reaction",
            &["timing", "reaction", "speed"],
            "30 seconds",
        ),
        GameEntry::builtin(
            "snake",
            "Snake Game",
            Difficulty::Medium,
            "Classic snake game with growing mechanics",
            "🐍",
            "Puzzle",
            &["strategy", "growing", "navigation"],
            "5-10 minutes",
        ),
        GameEntry::builtin(
            "endless-racer",
            "3D Endless Racer",
            Difficulty::Medium,
            "Real 3D endless racing game with arrow button controls and speed management",
            "🏎️",
            "Racing",
            &[
                "3d",
                "racing",
                "endless",
                "obstacles",
                "mobile",
                "threejs",
                "buttons",
                "speed",
            ],
            "5-10 minutes",
        ),
        GameEntry::builtin(
            "candy-crush",
            "Candy Crush",
            Difficulty::Medium,
            "Swap candies to line up three or more of the same color",
            "🍬",
            "Puzzle",
            &["match-3", "candy", "puzzle", "swap"],
            "5-10 minutes",
        ),
        GameEntry::builtin(
            "pixel-runner",
            "🏃 Pixel Runner",
            Difficulty::Medium,
            "2D pixel art platform runner with jumping, enemies, and collectibles",
            "🏃‍♂️",
            "Platform",
            &[
                "2d",
                "platform",
                "runner",
                "pixel-art",
                "jumping",
                "enemies",
                "collectibles",
                "procedural",
            ],
            "5-10 minutes",
        ),
        GameEntry::builtin(
            "memory-match",
            "Memory Match",
            Difficulty::Medium,
            "Test your memory by matching pairs of cards. Find all pairs to win!",
            "🧠",
            "Puzzle",
            &["memory", "matching", "puzzle", "cards", "brain"],
            "3-5 minutes",
        ),
        GameEntry::builtin(
            "sliding-puzzle",
            "Image Puzzle",
            Difficulty::Medium,
            "Arrange image pieces to recreate the original picture. Click pieces to swap their positions!",
            "🧩",
            "Puzzle",
            &["puzzle", "image", "logic", "brain", "click"],
            "5-10 minutes",
        ),
        GameEntry::builtin(
            "wordle",
            "Word Game",
            Difficulty::Medium,
            "Guess the 5-letter word in 6 tries. Green = correct letter and position, yellow = correct letter wrong position",
            "🔤",
            "Word",
            &["word", "puzzle", "guessing", "letters", "brain"],
            "3-5 minutes",
        ),
        GameEntry::builtin(
            "space-shooter",
            "Space Shooter",
            Difficulty::Medium,
            "Control your spaceship and shoot down enemies. Use arrow keys to move and spacebar to shoot!",
            "🚀",
            "Action",
            &["shooter", "space", "action", "arcade", "enemies"],
            "5-10 minutes",
        ),
    ]
}
