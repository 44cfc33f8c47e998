//! Ordered pattern table used by the prompt matcher.
//!
//! The table is a `Vec` rather than a map: the matcher breaks score ties by
//! table position, so iteration order must be stable.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;
use tracing::info;

use crate::error::{Error, Result};

/// Matchable vocabulary for one game template.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GamePattern {
    /// Worth 2 points each when contained in the prompt.
    pub keywords: Vec<String>,

    /// Worth 1.5 points each when contained in the prompt.
    #[serde(default)]
    pub concepts: Vec<String>,

    /// Words longer than three characters are worth 0.5 each.
    #[serde(default)]
    pub description: String,
}

impl GamePattern {
    #[must_use]
    pub fn new(keywords: &[&str], concepts: &[&str], description: impl Into<String>) -> Self {
        Self {
            keywords: keywords.iter().map(ToString::to_string).collect(),
            concepts: concepts.iter().map(ToString::to_string).collect(),
            description: description.into(),
        }
    }
}

/// A game id paired with its pattern.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PatternEntry {
    pub id: String,
    #[serde(flatten)]
    pub pattern: GamePattern,
}

impl PatternEntry {
    #[must_use]
    pub fn new(id: impl Into<String>, pattern: GamePattern) -> Self {
        Self {
            id: id.into(),
            pattern,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct PatternTable {
    entries: Vec<PatternEntry>,
}

impl PatternTable {
    /// Build a validated table.
    ///
    /// Rejects empty or duplicate ids and blank keywords/concepts, since an
    /// empty term is a substring of every prompt.
    pub fn new(entries: Vec<PatternEntry>) -> Result<Self> {
        let mut seen = HashSet::new();
        for (index, entry) in entries.iter().enumerate() {
            if entry.id.trim().is_empty() {
                return Err(Error::EmptyGameId { index });
            }
            if !seen.insert(entry.id.as_str()) {
                return Err(Error::DuplicateGameId(entry.id.clone()));
            }
            if entry.pattern.keywords.iter().any(|k| k.trim().is_empty()) {
                return Err(Error::BlankTerm {
                    game_id: entry.id.clone(),
                    field: "keyword",
                });
            }
            if entry.pattern.concepts.iter().any(|c| c.trim().is_empty()) {
                return Err(Error::BlankTerm {
                    game_id: entry.id.clone(),
                    field: "concept",
                });
            }
        }

        Ok(Self { entries })
    }

    /// Parse a JSON array of `{id, keywords, concepts, description}` objects.
    pub fn from_json(json: &str) -> Result<Self> {
        let entries: Vec<PatternEntry> = serde_json::from_str(json)?;
        Self::new(entries)
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let table = Self::from_json(&content)?;
        info!(
            "Loaded {} game patterns from {}",
            table.len(),
            path.display()
        );
        Ok(table)
    }

    pub fn iter(&self) -> impl Iterator<Item = &PatternEntry> {
        self.entries.iter()
    }

    #[must_use]
    pub fn get(&self, id: &str) -> Option<&GamePattern> {
        self.entries
            .iter()
            .find(|entry| entry.id == id)
            .map(|entry| &entry.pattern)
    }

    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    #[must_use]
    pub fn ids(&self) -> Vec<&str> {
        self.entries.iter().map(|entry| entry.id.as_str()).collect()
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
