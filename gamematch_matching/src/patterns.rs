//! Built-in pattern table for the ten bundled game templates.
//!
//! Entries follow catalog order; the matcher relies on that order for ties.

use gamematch_core::{GamePattern, PatternEntry, PatternTable};

/// Default pattern table, in catalog order.
#[must_use]
pub fn default_table() -> PatternTable {
    let entries = default_entries();
    // Static data; validation only fails if this list is edited badly.
    PatternTable::new(entries).unwrap_or_default()
}

fn default_entries() -> Vec<PatternEntry> {
    vec![
        PatternEntry::new(
            "flappy-bird",
            GamePattern::new(
                &[
                    "flappy", "bird", "fly", "jump", "obstacle", "pipe", "tap", "click", "avoid",
                    "gravity",
                ],
                &[
                    "endless runner",
                    "tap to jump",
                    "avoid obstacles",
                    "gravity-based",
                    "side scroller",
                ],
                "A simple endless runner where you tap to make a bird jump and avoid obstacles",
            ),
        ),
        PatternEntry::new(
            "tap-game",
            GamePattern::new(
                &[
                    "tap", "click", "timing", "rhythm", "beat", "music", "reaction", "speed",
                ],
                &[
                    "rhythm game",
                    "timing-based",
                    "music",
                    "reaction time",
                    "tap sequences",
                ],
                "A rhythm-based game focused on tapping in time with music or patterns",
            ),
        ),
        PatternEntry::new(
            "snake",
            GamePattern::new(
                &[
                    "snake",
                    "grow",
                    "food",
                    "grid",
                    "direction",
                    "arrow",
                    "keys",
                    "eat",
                    "longer",
                ],
                &[
                    "grid-based movement",
                    "growing snake",
                    "food collection",
                    "directional control",
                    "classic arcade",
                ],
                "A classic grid-based game where you control a snake that grows by eating food",
            ),
        ),
        PatternEntry::new(
            "endless-racer",
            GamePattern::new(
                &[
                    "racer", "racing", "car", "speed", "3d", "endless", "road", "obstacle", "lane",
                ],
                &[
                    "3D racing",
                    "endless road",
                    "lane changing",
                    "obstacle avoidance",
                    "speed",
                ],
                "A 3D endless racing game where you dodge obstacles and change lanes",
            ),
        ),
        PatternEntry::new(
            "candy-crush",
            GamePattern::new(
                &[
                    "match", "three", "candy", "puzzle", "swap", "color", "row", "column", "chain",
                ],
                &[
                    "match-3 puzzle",
                    "color matching",
                    "swapping tiles",
                    "chain reactions",
                    "puzzle solving",
                ],
                "A match-3 puzzle game where you swap candies to create matches",
            ),
        ),
        PatternEntry::new(
            "pixel-runner",
            GamePattern::new(
                &[
                    "runner", "pixel", "platform", "jump", "coin", "collect", "side", "scroller",
                ],
                &[
                    "side-scrolling platformer",
                    "jumping",
                    "coin collection",
                    "pixel art",
                    "platforms",
                ],
                "A side-scrolling platformer with pixel art graphics",
            ),
        ),
        PatternEntry::new(
            "memory-match",
            GamePattern::new(
                &[
                    "memory",
                    "match",
                    "card",
                    "flip",
                    "pair",
                    "remember",
                    "concentration",
                ],
                &[
                    "memory game",
                    "card matching",
                    "flipping cards",
                    "memory training",
                    "pairs",
                ],
                "A memory game where you flip cards to find matching pairs",
            ),
        ),
        PatternEntry::new(
            "sliding-puzzle",
            GamePattern::new(
                &[
                    "slide", "puzzle", "tile", "move", "grid", "solve", "15", "number",
                ],
                &[
                    "sliding puzzle",
                    "tile movement",
                    "number puzzle",
                    "grid-based",
                    "solving",
                ],
                "A sliding puzzle game where you arrange tiles in order",
            ),
        ),
        PatternEntry::new(
            "wordle",
            GamePattern::new(
                &[
                    "word",
                    "guess",
                    "letter",
                    "hangman",
                    "spelling",
                    "vocabulary",
                    "dictionary",
                ],
                &[
                    "word game",
                    "letter guessing",
                    "vocabulary",
                    "spelling",
                    "word puzzle",
                ],
                "A word-guessing game where you try to find the correct word",
            ),
        ),
        PatternEntry::new(
            "space-shooter",
            GamePattern::new(
                &[
                    "space",
                    "shooter",
                    "shoot",
                    "enemy",
                    "laser",
                    "bullet",
                    "spaceship",
                    "alien",
                ],
                &[
                    "space shooter",
                    "shooting enemies",
                    "lasers",
                    "spaceship",
                    "alien invasion",
                ],
                "A space shooter game where you fight against alien enemies",
            ),
        ),
    ]
}
