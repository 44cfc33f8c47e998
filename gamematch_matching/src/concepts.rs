//! Concept extraction: coarse gameplay tags for a prompt.
//!
//! Independent of the matcher. Every rule is a presence test of trigger
//! substrings against the lowercased prompt. The vocabulary is plain data that
//! callers can extend.

use gamematch_core::{ConceptSet, Difficulty, normalized_prompt};
use serde::{Deserialize, Serialize};

/// Emit `tag` when any trigger occurs in the prompt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TagRule {
    pub tag: String,
    pub triggers: Vec<String>,
}

impl TagRule {
    #[must_use]
    pub fn new(tag: impl Into<String>, triggers: &[&str]) -> Self {
        Self {
            tag: tag.into(),
            triggers: triggers.iter().map(ToString::to_string).collect(),
        }
    }

    /// `prompt` must already be lowercased.
    #[must_use]
    pub fn fires(&self, prompt: &str) -> bool {
        fires(&self.triggers, prompt)
    }
}

/// Difficulty signalled by any of `triggers`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DifficultyRule {
    pub difficulty: Difficulty,
    pub triggers: Vec<String>,
}

impl DifficultyRule {
    #[must_use]
    pub fn new(difficulty: Difficulty, triggers: &[&str]) -> Self {
        Self {
            difficulty,
            triggers: triggers.iter().map(ToString::to_string).collect(),
        }
    }
}

fn fires(triggers: &[String], prompt: &str) -> bool {
    triggers
        .iter()
        .any(|trigger| prompt.contains(trigger.to_lowercase().as_str()))
}

/// Full vocabulary used by [`ConceptExtractor`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConceptRules {
    pub mechanics: Vec<TagRule>,
    pub themes: Vec<TagRule>,
    /// Checked in order; the first rule that fires decides.
    pub difficulty: Vec<DifficultyRule>,
    pub style: Vec<TagRule>,
}

impl Default for ConceptRules {
    fn default() -> Self {
        Self {
            mechanics: vec![
                TagRule::new("jumping", &["jump", "platform"]),
                TagRule::new("shooting", &["shoot", "laser"]),
                TagRule::new("matching", &["match", "three"]),
                TagRule::new("tapping", &["tap", "click"]),
                TagRule::new("racing", &["race", "speed"]),
                TagRule::new("puzzle", &["puzzle", "solve"]),
                TagRule::new("memory", &["memory", "remember"]),
            ],
            themes: vec![
                TagRule::new("space", &["space", "alien"]),
                TagRule::new("racing", &["car", "road"]),
                TagRule::new("nature", &["bird", "fly"]),
                TagRule::new("candy", &["candy", "sweet"]),
                TagRule::new("pixel art", &["pixel", "retro"]),
            ],
            difficulty: vec![
                DifficultyRule::new(Difficulty::Easy, &["easy", "simple"]),
                DifficultyRule::new(Difficulty::Hard, &["hard", "difficult", "challenging"]),
                DifficultyRule::new(Difficulty::Medium, &["medium", "normal"]),
            ],
            style: vec![
                TagRule::new("3D", &["3d", "three dimension"]),
                TagRule::new("2D", &["2d", "two dimension"]),
                TagRule::new("pixel art", &["pixel", "retro"]),
                TagRule::new("modern", &["smooth", "modern"]),
            ],
        }
    }
}

/// Stateless classifier from prompt text to a [`ConceptSet`].
#[derive(Debug, Clone, Default)]
pub struct ConceptExtractor {
    rules: ConceptRules,
}

impl ConceptExtractor {
    #[must_use]
    pub const fn new(rules: ConceptRules) -> Self {
        Self { rules }
    }

    #[must_use]
    pub fn with_defaults() -> Self {
        Self::default()
    }

    #[must_use]
    pub const fn rules(&self) -> &ConceptRules {
        &self.rules
    }

    /// Never fails; a blank or unrecognized prompt yields an empty set.
    #[must_use]
    pub fn extract(&self, prompt: &str) -> ConceptSet {
        let Some(lower) = normalized_prompt(prompt) else {
            return ConceptSet::default();
        };

        ConceptSet {
            mechanics: collect_tags(&self.rules.mechanics, &lower),
            themes: collect_tags(&self.rules.themes, &lower),
            difficulty: self
                .rules
                .difficulty
                .iter()
                .find(|rule| fires(&rule.triggers, &lower))
                .map(|rule| rule.difficulty),
            style: collect_tags(&self.rules.style, &lower),
        }
    }
}

fn collect_tags(rules: &[TagRule], prompt: &str) -> Vec<String> {
    let mut tags: Vec<String> = Vec::new();
    for rule in rules {
        if rule.fires(prompt) && !tags.contains(&rule.tag) {
            tags.push(rule.tag.clone());
        }
    }
    tags
}
