#![warn(
    clippy::all,
    clippy::nursery,
    clippy::pedantic,
    clippy::style,
    clippy::complexity,
    clippy::perf,
    clippy::correctness,
    clippy::suspicious,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(
    clippy::similar_names,
    clippy::missing_safety_doc,
    clippy::missing_panics_doc,
    clippy::missing_errors_doc
)]

//! Prompt-to-game matching for the game remix feed.
//!
//! Matching is a keyword heuristic over an ordered pattern table. Concept
//! extraction runs independently over the same prompt. An optional
//! [`MatchAdvisor`] can sit in front of the heuristic; when it fails the
//! heuristic answers instead.

pub mod advisor;
mod avatar;
pub mod catalog;
pub mod concepts;
pub mod matcher;
pub mod patterns;

pub use advisor::{
    AdvisedMatcher, KeywordAdvisor, MatchAdvice, MatchAdvisor, advisor_error, advisor_prompt,
};
pub use avatar::{GameAvatar, avatar};
pub use catalog::{GameCatalog, GameEntry, GameMetadata};
pub use concepts::{ConceptExtractor, ConceptRules, DifficultyRule, TagRule};
pub use matcher::PromptMatcher;
pub use patterns::default_table;

pub use gamematch_core::{
    ConceptSet, Confidence, Difficulty, GamePattern, GameSuggestion, MatchResult,
    PatternEntry, PatternTable,
};
