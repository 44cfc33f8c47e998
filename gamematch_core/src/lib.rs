#![deny(
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

use serde::{Deserialize, Serialize};

pub mod error;
pub mod pattern;
pub mod util;

pub use error::{Error, Result};
pub use pattern::{GamePattern, PatternEntry, PatternTable};
pub use util::{content_hash, normalized_prompt};

/// Coarse confidence bucket derived from a match score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Confidence {
    Low,
    Medium,
    High,
}

impl Confidence {
    /// Minimum score for [`Confidence::High`].
    pub const HIGH_THRESHOLD: f64 = 3.0;
    /// Minimum score for [`Confidence::Medium`].
    pub const MEDIUM_THRESHOLD: f64 = 1.5;
    /// Minimum score for any match at all.
    pub const MATCH_THRESHOLD: f64 = 1.0;

    /// Map a raw score to a tier, or `None` when the score is below the match threshold.
    #[must_use]
    pub fn from_score(score: f64) -> Option<Self> {
        if score >= Self::HIGH_THRESHOLD {
            Some(Self::High)
        } else if score >= Self::MEDIUM_THRESHOLD {
            Some(Self::Medium)
        } else if score >= Self::MATCH_THRESHOLD {
            Some(Self::Low)
        } else {
            None
        }
    }

    /// Score reported when the tier comes from an advisor rather than the keyword scorer.
    ///
    /// Nominal scores are never fed back through [`Confidence::from_score`];
    /// `Medium` reports 3.0 even though that value scores as `High`.
    #[must_use]
    pub const fn nominal_score(self) -> f64 {
        match self {
            Self::High => 5.0,
            Self::Medium => 3.0,
            Self::Low => 1.0,
        }
    }

    #[must_use]
    pub const fn as_str(&self) -> &str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }
}

impl std::fmt::Display for Confidence {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Confidence {
    type Err = Error;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "low" => Ok(Self::Low),
            "medium" => Ok(Self::Medium),
            "high" => Ok(Self::High),
            _ => Err(Error::UnknownConfidence(s.to_string())),
        }
    }
}

/// Difficulty of a game, or the difficulty a prompt asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    #[must_use]
    pub const fn as_str(&self) -> &str {
        match self {
            Self::Easy => "easy",
            Self::Medium => "medium",
            Self::Hard => "hard",
        }
    }
}

impl std::fmt::Display for Difficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Difficulty {
    type Err = Error;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "easy" => Ok(Self::Easy),
            "medium" => Ok(Self::Medium),
            "hard" => Ok(Self::Hard),
            _ => Err(Error::UnknownDifficulty(s.to_string())),
        }
    }
}

/// Best game template for a prompt.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchResult {
    pub game_id: String,
    pub score: f64,
    pub confidence: Confidence,
}

/// One entry of a ranked suggestion list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameSuggestion {
    pub game_id: String,
    pub score: f64,
    /// Human-readable explanation, e.g. `Contains "snake" concept`.
    pub reason: String,
}

/// Gameplay attributes pulled out of a prompt.
///
/// The vectors behave as ordered sets: a tag appears at most once, in rule order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConceptSet {
    pub mechanics: Vec<String>,
    pub themes: Vec<String>,
    pub difficulty: Option<Difficulty>,
    pub style: Vec<String>,
}

impl ConceptSet {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.mechanics.is_empty()
            && self.themes.is_empty()
            && self.difficulty.is_none()
            && self.style.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn confidence_thresholds_are_inclusive() {
        assert_eq!(Confidence::from_score(3.0), Some(Confidence::High));
        assert_eq!(Confidence::from_score(2.5), Some(Confidence::Medium));
        assert_eq!(Confidence::from_score(1.5), Some(Confidence::Medium));
        assert_eq!(Confidence::from_score(1.0), Some(Confidence::Low));
        assert_eq!(Confidence::from_score(0.99), None);
        assert_eq!(Confidence::from_score(0.0), None);
    }

    #[test]
    fn nominal_scores_per_tier() {
        assert!((Confidence::High.nominal_score() - 5.0).abs() < f64::EPSILON);
        assert!((Confidence::Medium.nominal_score() - 3.0).abs() < f64::EPSILON);
        assert!((Confidence::Low.nominal_score() - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn confidence_parses_case_insensitively() {
        assert_eq!("HIGH".parse::<Confidence>().ok(), Some(Confidence::High));
        assert!("certain".parse::<Confidence>().is_err());
    }

    #[test]
    #[expect(clippy::expect_used, reason = "Test failure should panic with context")]
    fn match_result_serializes_lowercase_confidence() {
        let result = MatchResult {
            game_id: "snake".to_string(),
            score: 10.0,
            confidence: Confidence::High,
        };
        let json = serde_json::to_value(&result).expect("result should serialize");
        assert_eq!(json["confidence"], "high");
        assert_eq!(json["game_id"], "snake");
    }

    #[test]
    fn empty_concept_set() {
        assert!(ConceptSet::default().is_empty());
        let set = ConceptSet {
            difficulty: Some(Difficulty::Hard),
            ..ConceptSet::default()
        };
        assert!(!set.is_empty());
    }
}
