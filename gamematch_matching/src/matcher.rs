//! Keyword-scored prompt matching.
//!
//! Each game's score is an additive bag-of-terms sum over its pattern:
//! keywords, concept phrases and long description words each add a fixed
//! weight when they occur anywhere in the lowercased prompt. Scores are not
//! normalized, so patterns with longer vocabularies win more often.

use gamematch_core::{
    Confidence, GamePattern, GameSuggestion, MatchResult, PatternTable, normalized_prompt,
};
use tracing::debug;

use crate::patterns::default_table;

/// Points for each keyword found in the prompt.
pub const KEYWORD_WEIGHT: f64 = 2.0;

/// Points for each concept phrase found in the prompt.
pub const CONCEPT_WEIGHT: f64 = 1.5;

/// Points for each description word found in the prompt.
pub const DESCRIPTION_WORD_WEIGHT: f64 = 0.5;

/// Description words must be strictly longer than this (in characters) to count.
pub const MIN_DESCRIPTION_WORD_LEN: usize = 3;

/// Default number of entries returned by [`PromptMatcher::suggestions`].
pub const DEFAULT_SUGGESTION_LIMIT: usize = 3;

const FALLBACK_REASON: &str = "Similar gameplay style";

/// Score a prompt against a single pattern.
///
/// Every keyword and concept is tested once for presence, so repeating a
/// term in the prompt never changes the result.
#[must_use]
pub fn score(prompt: &str, pattern: &GamePattern) -> f64 {
    score_lowercase(&prompt.to_lowercase(), pattern)
}

fn score_lowercase(prompt: &str, pattern: &GamePattern) -> f64 {
    let mut total = 0.0;

    for keyword in &pattern.keywords {
        if prompt.contains(keyword.to_lowercase().as_str()) {
            total += KEYWORD_WEIGHT;
        }
    }

    for concept in &pattern.concepts {
        if prompt.contains(concept.to_lowercase().as_str()) {
            total += CONCEPT_WEIGHT;
        }
    }

    // Counted per word of the description, duplicates included.
    for word in pattern.description.to_lowercase().split(' ') {
        if word.chars().count() > MIN_DESCRIPTION_WORD_LEN && prompt.contains(word) {
            total += DESCRIPTION_WORD_WEIGHT;
        }
    }

    total
}

/// Matches prompts against an ordered [`PatternTable`].
#[derive(Debug, Clone)]
pub struct PromptMatcher {
    table: PatternTable,
}

impl PromptMatcher {
    #[must_use]
    pub const fn new(table: PatternTable) -> Self {
        Self { table }
    }

    /// Matcher over the built-in table.
    #[must_use]
    pub fn with_defaults() -> Self {
        Self::new(default_table())
    }

    #[must_use]
    pub const fn table(&self) -> &PatternTable {
        &self.table
    }

    /// Score of `prompt` against one game, or `None` for an unknown id.
    #[must_use]
    pub fn score(&self, prompt: &str, game_id: &str) -> Option<f64> {
        self.table.get(game_id).map(|pattern| score(prompt, pattern))
    }

    /// Pick the highest-scoring game.
    ///
    /// Only a strictly higher score replaces the current leader, so ties go to
    /// the entry that appears first in the table. Scores below
    /// [`Confidence::MATCH_THRESHOLD`] and blank prompts yield `None`.
    #[must_use]
    pub fn best_match(&self, prompt: &str) -> Option<MatchResult> {
        let lower = normalized_prompt(prompt)?;

        let mut best_id = None;
        let mut best_score = 0.0;
        for entry in self.table.iter() {
            let score = score_lowercase(&lower, &entry.pattern);
            if score > best_score {
                best_score = score;
                best_id = Some(entry.id.as_str());
            }
        }

        let Some(confidence) = Confidence::from_score(best_score) else {
            debug!("No game scored above threshold (best score {best_score})");
            return None;
        };
        let game_id = best_id?;

        debug!("Matched prompt to {game_id} (score {best_score}, confidence {confidence})");
        Some(MatchResult {
            game_id: game_id.to_string(),
            score: best_score,
            confidence,
        })
    }

    /// Rank every game with a positive score, best first, keeping at most `limit`.
    ///
    /// The sort is stable, so equal scores keep table order.
    #[must_use]
    pub fn suggestions(&self, prompt: &str, limit: usize) -> Vec<GameSuggestion> {
        let Some(lower) = normalized_prompt(prompt) else {
            return Vec::new();
        };

        let mut suggestions: Vec<GameSuggestion> = self
            .table
            .iter()
            .filter_map(|entry| {
                let score = score_lowercase(&lower, &entry.pattern);
                (score > 0.0).then(|| GameSuggestion {
                    game_id: entry.id.clone(),
                    score,
                    reason: suggestion_reason(&lower, &entry.pattern),
                })
            })
            .collect();

        suggestions.sort_by(|a, b| b.score.total_cmp(&a.score));
        suggestions.truncate(limit);
        suggestions
    }
}

fn suggestion_reason(prompt: &str, pattern: &GamePattern) -> String {
    pattern
        .keywords
        .iter()
        .find(|keyword| prompt.contains(keyword.to_lowercase().as_str()))
        .map_or_else(
            || FALLBACK_REASON.to_string(),
            |keyword| format!("Contains \"{keyword}\" concept"),
        )
}

impl Default for PromptMatcher {
    fn default() -> Self {
        Self::with_defaults()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gamematch_core::PatternEntry;

    #[expect(clippy::expect_used, reason = "Test failure should panic with context")]
    fn table(entries: Vec<PatternEntry>) -> PatternTable {
        PatternTable::new(entries).expect("valid test table")
    }

    fn single(keywords: &[&str], concepts: &[&str], description: &str) -> PromptMatcher {
        PromptMatcher::new(table(vec![PatternEntry::new(
            "only",
            GamePattern::new(keywords, concepts, description),
        )]))
    }

    #[test]
    fn test_space_shooter_prompt() {
        let matcher = PromptMatcher::with_defaults();
        let result = matcher.best_match("I want a space shooter with lasers and aliens");

        assert_eq!(
            result,
            Some(MatchResult {
                game_id: "space-shooter".to_string(),
                score: 14.5,
                confidence: Confidence::High,
            })
        );
    }

    #[test]
    fn test_snake_prompt() {
        let matcher = PromptMatcher::with_defaults();
        let result = matcher.best_match("a snake that eats food and grows on a grid");

        assert_eq!(
            result.as_ref().map(|r| (r.game_id.as_str(), r.confidence)),
            Some(("snake", Confidence::High))
        );
        assert_eq!(result.map(|r| r.score), Some(12.0));
    }

    #[test]
    fn test_gibberish_has_no_match() {
        let matcher = PromptMatcher::with_defaults();
        assert_eq!(matcher.best_match("asdkjfh qwoeiru"), None);
    }

    #[test]
    fn test_blank_prompt_has_no_match() {
        let matcher = PromptMatcher::with_defaults();
        assert_eq!(matcher.best_match(""), None);
        assert_eq!(matcher.best_match("   \t "), None);
    }

    #[test]
    fn test_case_insensitive() {
        let matcher = PromptMatcher::with_defaults();
        let lower = matcher.best_match("a snake that eats food");
        let upper = matcher.best_match("A SNAKE THAT EATS FOOD");
        assert_eq!(lower, upper);
    }

    #[test]
    fn test_threshold_boundaries() {
        // Two concepts: exactly 3.0
        let matcher = single(&[], &["alpha", "bravo"], "");
        assert_eq!(
            matcher.best_match("alpha bravo").map(|r| r.confidence),
            Some(Confidence::High)
        );

        // One concept: exactly 1.5
        let matcher = single(&[], &["alpha"], "");
        assert_eq!(
            matcher.best_match("alpha").map(|r| r.confidence),
            Some(Confidence::Medium)
        );

        // One keyword: 2.0
        let matcher = single(&["alpha"], &[], "");
        assert_eq!(
            matcher.best_match("alpha").map(|r| r.confidence),
            Some(Confidence::Medium)
        );

        // Two description words: exactly 1.0
        let matcher = single(&[], &[], "alpha bravo");
        let result = matcher.best_match("alpha bravo");
        assert_eq!(result.as_ref().map(|r| r.score), Some(1.0));
        assert_eq!(result.map(|r| r.confidence), Some(Confidence::Low));

        // One description word: 0.5, below threshold
        let matcher = single(&[], &[], "alpha");
        assert_eq!(matcher.best_match("alpha"), None);
    }

    #[test]
    fn test_short_description_words_ignored() {
        // "game" has four characters and counts; "fun" has three and does not.
        let pattern = GamePattern::new(&[], &[], "fun game");
        assert!((score("fun game", &pattern) - 0.5).abs() < f64::EPSILON);
    }

    #[test]
    fn test_tie_breaks_by_table_order() {
        let pattern = GamePattern::new(&["zebra"], &[], "");
        let matcher = PromptMatcher::new(table(vec![
            PatternEntry::new("first", pattern.clone()),
            PatternEntry::new("second", pattern.clone()),
        ]));
        assert_eq!(
            matcher.best_match("a zebra game").map(|r| r.game_id),
            Some("first".to_string())
        );

        let reversed = PromptMatcher::new(table(vec![
            PatternEntry::new("second", pattern.clone()),
            PatternEntry::new("first", pattern),
        ]));
        assert_eq!(
            reversed.best_match("a zebra game").map(|r| r.game_id),
            Some("second".to_string())
        );
    }

    #[test]
    fn test_repeated_keywords_do_not_double_count() {
        let matcher = PromptMatcher::with_defaults();
        let once = matcher.score("snake", "snake");
        let thrice = matcher.score("snake snake snake", "snake");
        assert_eq!(once, thrice);
        assert_eq!(once, Some(2.5));
    }

    #[test]
    fn test_deterministic() {
        let matcher = PromptMatcher::with_defaults();
        let prompt = "tap to jump over pipes";
        assert_eq!(matcher.best_match(prompt), matcher.best_match(prompt));
    }

    #[test]
    fn test_score_unknown_game() {
        let matcher = PromptMatcher::with_defaults();
        assert_eq!(matcher.score("snake", "tetris"), None);
    }

    #[test]
    fn test_suggestions_ranked_with_reasons() {
        let matcher = PromptMatcher::with_defaults();
        let suggestions = matcher.suggestions("tap to jump over pipes", DEFAULT_SUGGESTION_LIMIT);

        let ranked: Vec<(&str, f64, &str)> = suggestions
            .iter()
            .map(|s| (s.game_id.as_str(), s.score, s.reason.as_str()))
            .collect();
        assert_eq!(
            ranked,
            vec![
                ("flappy-bird", 8.0, "Contains \"jump\" concept"),
                ("tap-game", 2.0, "Contains \"tap\" concept"),
                ("pixel-runner", 2.0, "Contains \"jump\" concept"),
            ]
        );
    }

    #[test]
    fn test_suggestions_fallback_reason_and_limits() {
        let matcher = PromptMatcher::with_defaults();

        let suggestions = matcher.suggestions("a classic", 3);
        assert_eq!(suggestions.len(), 1);
        assert_eq!(suggestions[0].game_id, "snake");
        assert_eq!(suggestions[0].reason, FALLBACK_REASON);
        // Half a point suggests but does not match.
        assert_eq!(matcher.best_match("a classic"), None);

        assert!(matcher.suggestions("tap to jump", 0).is_empty());
        assert!(matcher.suggestions("  ", 3).is_empty());
    }
}
