//! Advisor seam for model-backed matching.
//!
//! A [`MatchAdvisor`] is an external collaborator (typically an LLM) that
//! reads the catalog and names a game. [`AdvisedMatcher`] trusts its answer
//! when it names a known game and falls back to the keyword matcher when the
//! advisor errors.

use async_trait::async_trait;
use gamematch_core::{Confidence, Error, MatchResult, Result, normalized_prompt};
use serde::{Deserialize, Serialize};
use std::fmt::Write as _;
use tracing::{debug, info, warn};

use crate::catalog::GameCatalog;
use crate::matcher::PromptMatcher;

/// Structured answer from an advisor, in the JSON shape a model is asked to produce.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchAdvice {
    pub best_match: Option<String>,
    pub confidence: Confidence,
    #[serde(default)]
    pub reasoning: String,
    #[serde(default)]
    pub alternative_matches: Vec<String>,
}

impl MatchAdvice {
    /// Parse a model reply, ignoring any text around the outermost JSON object.
    pub fn from_json(reply: &str) -> Result<Self> {
        let start = reply.find('{');
        let end = reply.rfind('}');
        let body = match (start, end) {
            (Some(start), Some(end)) if start < end => &reply[start..=end],
            _ => reply,
        };
        Ok(serde_json::from_str(body)?)
    }

    fn no_match() -> Self {
        Self {
            best_match: None,
            confidence: Confidence::Low,
            reasoning: "No clear match found".to_string(),
            alternative_matches: Vec::new(),
        }
    }
}

/// Trait for anything that can recommend a game template for a prompt.
#[async_trait]
pub trait MatchAdvisor: Send + Sync {
    async fn advise(&self, prompt: &str, catalog: &GameCatalog) -> Result<MatchAdvice>;
}

/// Instruction text a model-backed advisor sends along with the prompt.
#[must_use]
pub fn advisor_prompt(prompt: &str, catalog: &GameCatalog) -> String {
    let mut templates = String::new();
    for entry in catalog.all() {
        let _ = writeln!(
            templates,
            "- {}: {} - {} (Category: {}, Tags: {})",
            entry.id,
            entry.name,
            entry.metadata.description,
            entry.metadata.category.as_deref().unwrap_or("arcade"),
            entry.metadata.tags.join(", ")
        );
    }

    format!(
        r#"You are a game analysis AI. Match the user's game request to the most appropriate existing game template.

User Request: "{prompt}"

Available Game Templates:
{templates}
Respond with ONLY a JSON object in this exact format:
{{
  "bestMatch": "game-id",
  "confidence": "high|medium|low",
  "reasoning": "brief explanation of why this game matches",
  "alternativeMatches": ["game-id-1", "game-id-2"]
}}

Do not include any other text."#
    )
}

/// Advisor backed by the keyword matcher; used when no model is configured.
#[derive(Debug, Clone, Default)]
pub struct KeywordAdvisor {
    matcher: PromptMatcher,
}

impl KeywordAdvisor {
    #[must_use]
    pub const fn new(matcher: PromptMatcher) -> Self {
        Self { matcher }
    }
}

#[async_trait]
impl MatchAdvisor for KeywordAdvisor {
    async fn advise(&self, prompt: &str, _catalog: &GameCatalog) -> Result<MatchAdvice> {
        Ok(self
            .matcher
            .best_match(prompt)
            .map_or_else(MatchAdvice::no_match, |result| MatchAdvice {
                best_match: Some(result.game_id),
                confidence: result.confidence,
                reasoning: format!("Matched based on keywords: {prompt}"),
                alternative_matches: Vec::new(),
            }))
    }
}

/// Advisor-first matcher with keyword fallback on advisor errors.
pub struct AdvisedMatcher<A: MatchAdvisor> {
    advisor: A,
    fallback: PromptMatcher,
    catalog: GameCatalog,
}

impl<A: MatchAdvisor> AdvisedMatcher<A> {
    #[must_use]
    pub const fn new(advisor: A, fallback: PromptMatcher, catalog: GameCatalog) -> Self {
        Self {
            advisor,
            fallback,
            catalog,
        }
    }

    #[must_use]
    pub const fn catalog(&self) -> &GameCatalog {
        &self.catalog
    }

    /// Ask the advisor, then resolve its answer against the catalog.
    ///
    /// Advisor scores are nominal per tier (see [`Confidence::nominal_score`]).
    pub async fn best_match(&self, prompt: &str) -> Option<MatchResult> {
        normalized_prompt(prompt)?;

        info!("Requesting match advice for prompt ({} chars)", prompt.len());
        debug!("Advisor instructions:\n{}", advisor_prompt(prompt, &self.catalog));
        match self.advisor.advise(prompt, &self.catalog).await {
            Ok(advice) => self.resolve(advice),
            Err(e) => {
                warn!("Advisor failed, falling back to keyword matching: {e}");
                self.fallback.best_match(prompt)
            }
        }
    }

    fn resolve(&self, advice: MatchAdvice) -> Option<MatchResult> {
        debug!(
            "Advice: best_match={:?}, confidence={}, reasoning={}",
            advice.best_match, advice.confidence, advice.reasoning
        );

        let game_id = advice.best_match?;
        if !self.catalog.contains(&game_id) {
            warn!("Advisor matched a game that is not in the catalog: {game_id}");
            return None;
        }

        Some(MatchResult {
            game_id,
            score: advice.confidence.nominal_score(),
            confidence: advice.confidence,
        })
    }
}

/// Wrap an arbitrary advisor failure.
pub fn advisor_error(err: impl Into<anyhow::Error>) -> Error {
    Error::Advisor(err.into())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct FixedAdvisor {
        reply: &'static str,
        calls: Arc<AtomicUsize>,
    }

    #[async_trait]
    impl MatchAdvisor for FixedAdvisor {
        async fn advise(&self, _prompt: &str, _catalog: &GameCatalog) -> Result<MatchAdvice> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            MatchAdvice::from_json(self.reply)
        }
    }

    struct FailingAdvisor;

    #[async_trait]
    impl MatchAdvisor for FailingAdvisor {
        async fn advise(&self, _prompt: &str, _catalog: &GameCatalog) -> Result<MatchAdvice> {
            Err(advisor_error(anyhow::anyhow!("model unavailable")))
        }
    }

    fn advised<A: MatchAdvisor>(advisor: A) -> AdvisedMatcher<A> {
        AdvisedMatcher::new(
            advisor,
            PromptMatcher::with_defaults(),
            GameCatalog::with_defaults(),
        )
    }

    #[tokio::test]
    async fn test_keyword_advisor_reports_nominal_score() {
        let matcher = advised(KeywordAdvisor::default());
        let result = matcher
            .best_match("I want a space shooter with lasers and aliens")
            .await;

        assert_eq!(
            result,
            Some(MatchResult {
                game_id: "space-shooter".to_string(),
                score: 5.0,
                confidence: Confidence::High,
            })
        );
    }

    #[tokio::test]
    async fn test_keyword_advisor_no_match() {
        let matcher = advised(KeywordAdvisor::default());
        assert_eq!(matcher.best_match("asdkjfh qwoeiru").await, None);
    }

    #[tokio::test]
    async fn test_failing_advisor_falls_back_to_keywords() {
        let matcher = advised(FailingAdvisor);
        let result = matcher
            .best_match("a snake that eats food and grows on a grid")
            .await;

        assert_eq!(result.as_ref().map(|r| r.game_id.as_str()), Some("snake"));
        assert_eq!(result.map(|r| r.score), Some(12.0));
    }

    #[tokio::test]
    async fn test_unknown_game_from_advisor_is_no_match() {
        let calls = Arc::new(AtomicUsize::new(0));
        let matcher = advised(FixedAdvisor {
            reply: r#"{"bestMatch": "tetris", "confidence": "high"}"#,
            calls: Arc::clone(&calls),
        });

        assert_eq!(matcher.best_match("falling blocks").await, None);
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_blank_prompt_skips_advisor() {
        let calls = Arc::new(AtomicUsize::new(0));
        let matcher = advised(FixedAdvisor {
            reply: r#"{"bestMatch": "snake", "confidence": "low"}"#,
            calls: Arc::clone(&calls),
        });

        assert_eq!(matcher.best_match("   ").await, None);
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_malformed_reply_falls_back() {
        let calls = Arc::new(AtomicUsize::new(0));
        let matcher = advised(FixedAdvisor {
            reply: "I think snake fits best",
            calls: Arc::clone(&calls),
        });

        let result = matcher.best_match("a snake game").await;
        assert_eq!(result.map(|r| r.game_id), Some("snake".to_string()));
    }

    #[test]
    #[expect(clippy::expect_used, reason = "Test failure should panic with context")]
    fn test_advice_parses_wrapped_json() {
        let reply = "Sure!\n```json\n{\"bestMatch\": \"wordle\", \"confidence\": \"medium\", \"reasoning\": \"letters\", \"alternativeMatches\": [\"memory-match\"]}\n```";
        let advice = MatchAdvice::from_json(reply).expect("reply should parse");

        assert_eq!(advice.best_match.as_deref(), Some("wordle"));
        assert_eq!(advice.confidence, Confidence::Medium);
        assert_eq!(advice.alternative_matches, vec!["memory-match"]);
    }

    #[test]
    fn test_advisor_prompt_lists_catalog() {
        let catalog = GameCatalog::with_defaults();
        let text = advisor_prompt("a racing game", &catalog);

        assert!(text.contains("User Request: \"a racing game\""));
        assert!(text.contains(
            "- snake: Snake Game - Classic snake game with growing mechanics (Category: Puzzle, Tags: strategy, growing, navigation)"
        ));
        assert!(text.contains("\"bestMatch\": \"game-id\""));
    }
}
