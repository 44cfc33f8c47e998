use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

/// Emoji blocks recognized in game names.
static EMOJI_PATTERN: OnceLock<Regex> = OnceLock::new();

#[expect(
    clippy::expect_used,
    reason = "Static regex pattern validated at compile time"
)]
fn emoji_pattern() -> &'static Regex {
    EMOJI_PATTERN.get_or_init(|| {
        Regex::new(
            r"[\x{1F600}-\x{1F64F}\x{1F300}-\x{1F5FF}\x{1F680}-\x{1F6FF}\x{1F1E0}-\x{1F1FF}\x{2600}-\x{26FF}\x{2700}-\x{27BF}]",
        )
        .expect("Static regex pattern is guaranteed to be valid")
    })
}

/// What the feed shows in a game's avatar bubble.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameAvatar {
    pub avatar: String,
    pub display_name: String,
}

/// First emoji of the name, or its uppercased first letter when it has none.
///
/// When an emoji is used it is removed from the display name.
#[must_use]
pub fn avatar(name: &str) -> GameAvatar {
    if let Some(found) = emoji_pattern().find(name) {
        let display_name = format!("{}{}", &name[..found.start()], &name[found.end()..]);
        return GameAvatar {
            avatar: found.as_str().to_string(),
            display_name: display_name.trim().to_string(),
        };
    }

    GameAvatar {
        avatar: name
            .chars()
            .next()
            .map(|c| c.to_uppercase().collect())
            .unwrap_or_default(),
        display_name: name.to_string(),
    }
}
