use chrono::{DateTime, Utc};
use gamematch_core::{Error, Result, content_hash};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};
use tracing::info;
use uuid::Uuid;

const HASH_KIND: &str = "remix";
const DEFAULT_DESCRIPTION: &str = "A remixed game created by the user";
const DEFAULT_ICON: &str = "🎮";
const DEFAULT_PLAY_TIME: &str = "5-10 minutes";
const REMIX_CATEGORY: &str = "Remix";
const REMIX_DIFFICULTY: &str = "Custom";
const REMIX_TAGS: [&str; 3] = ["remix", "custom", "user-created"];

/// Input for [`RemixStore::create`].
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RemixRequest {
    #[serde(alias = "gameCode")]
    pub code: String,
    #[serde(default, alias = "gameName")]
    pub name: Option<String>,
    #[serde(default, alias = "gameDescription")]
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RemixMetadata {
    pub difficulty: String,
    pub description: String,
    pub icon: String,
    pub category: String,
    pub tags: Vec<String>,
    pub estimated_play_time: String,
    pub is_remix: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RemixGame {
    pub id: String,
    pub name: String,
    pub code: String,
    pub content_hash: String,
    pub metadata: RemixMetadata,
}

impl RemixGame {
    /// Build a remix from a request, filling in defaults for missing fields.
    pub fn from_request(request: RemixRequest, created_at: DateTime<Utc>) -> Result<Self> {
        if request.code.trim().is_empty() {
            return Err(Error::InvalidInput("game code is required".to_string()));
        }

        let name = non_blank(request.name)
            .unwrap_or_else(|| format!("Remix Game {}", created_at.format("%Y-%m-%d")));
        let description =
            non_blank(request.description).unwrap_or_else(|| DEFAULT_DESCRIPTION.to_string());

        Ok(Self {
            id: format!("remix-{}", Uuid::now_v7()),
            name,
            content_hash: content_hash(HASH_KIND, &request.code),
            code: request.code,
            metadata: RemixMetadata {
                difficulty: REMIX_DIFFICULTY.to_string(),
                description,
                icon: DEFAULT_ICON.to_string(),
                category: REMIX_CATEGORY.to_string(),
                tags: REMIX_TAGS.iter().map(ToString::to_string).collect(),
                estimated_play_time: DEFAULT_PLAY_TIME.to_string(),
                is_remix: true,
                created_at,
            },
        })
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

#[derive(Debug, Default)]
struct Inner {
    games: HashMap<String, RemixGame>,
    order: Vec<String>,
}

/// Thread-safe remix registry, keyed by remix id.
#[derive(Debug, Default)]
pub struct RemixStore {
    inner: RwLock<Inner>,
}

impl RemixStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, Inner>> {
        self.inner.read().map_err(|_| Error::StorePoisoned)
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, Inner>> {
        self.inner.write().map_err(|_| Error::StorePoisoned)
    }

    /// Create and store a remix. Every call yields a new id, even for identical code.
    pub fn create(&self, request: RemixRequest) -> Result<RemixGame> {
        let game = RemixGame::from_request(request, Utc::now())?;
        self.insert(game.clone())?;
        Ok(game)
    }

    /// Store a prebuilt remix, replacing any remix with the same id.
    pub fn insert(&self, game: RemixGame) -> Result<()> {
        let mut inner = self.write()?;
        info!(
            "Stored remix game: {} ({} bytes of code)",
            game.id,
            game.code.len()
        );
        if !inner.games.contains_key(&game.id) {
            inner.order.push(game.id.clone());
        }
        inner.games.insert(game.id.clone(), game);
        Ok(())
    }

    pub fn get(&self, id: &str) -> Result<Option<RemixGame>> {
        Ok(self.read()?.games.get(id).cloned())
    }

    /// All remixes in insertion order.
    pub fn list(&self) -> Result<Vec<RemixGame>> {
        let inner = self.read()?;
        Ok(inner
            .order
            .iter()
            .filter_map(|id| inner.games.get(id).cloned())
            .collect())
    }

    /// First stored remix whose code hashes the same as `code`.
    pub fn find_by_code(&self, code: &str) -> Result<Option<RemixGame>> {
        let hash = content_hash(HASH_KIND, code);
        let inner = self.read()?;
        Ok(inner
            .order
            .iter()
            .filter_map(|id| inner.games.get(id))
            .find(|game| game.content_hash == hash)
            .cloned())
    }

    pub fn len(&self) -> Result<usize> {
        Ok(self.read()?.games.len())
    }

    pub fn is_empty(&self) -> Result<bool> {
        Ok(self.read()?.games.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    fn request(code: &str) -> RemixRequest {
        RemixRequest {
            code: code.to_string(),
            ..RemixRequest::default()
        }
    }

    #[test]
    #[expect(clippy::expect_used, reason = "Test failure should panic with context")]
    fn test_create_fills_defaults() {
        let store = RemixStore::new();
        let game = store
            .create(request("const Game = () => <div/>;"))
            .expect("remix should be created");

        assert!(game.id.starts_with("remix-"));
        assert!(game.name.starts_with("Remix Game "));
        assert_eq!(game.metadata.description, DEFAULT_DESCRIPTION);
        assert_eq!(game.metadata.icon, "🎮");
        assert_eq!(game.metadata.category, "Remix");
        assert_eq!(game.metadata.difficulty, "Custom");
        assert_eq!(game.metadata.tags, vec!["remix", "custom", "user-created"]);
        assert!(game.metadata.is_remix);
        assert_eq!(game.content_hash.len(), 64);
    }

    #[test]
    #[expect(clippy::expect_used, reason = "Test failure should panic with context")]
    fn test_create_keeps_given_fields() {
        let store = RemixStore::new();
        let game = store
            .create(RemixRequest {
                code: "code".to_string(),
                name: Some("Neon Snake".to_string()),
                description: Some("Snake, but glowing".to_string()),
            })
            .expect("remix should be created");

        assert_eq!(game.name, "Neon Snake");
        assert_eq!(game.metadata.description, "Snake, but glowing");
    }

    #[test]
    fn test_blank_code_rejected() {
        let store = RemixStore::new();
        assert!(matches!(
            store.create(request("   ")),
            Err(Error::InvalidInput(_))
        ));
        assert!(matches!(store.is_empty(), Ok(true)));
    }

    #[test]
    #[expect(clippy::expect_used, reason = "Test failure should panic with context")]
    fn test_get_list_and_find() {
        let store = RemixStore::new();
        let first = store.create(request("first")).expect("create first");
        let second = store.create(request("second")).expect("create second");
        let again = store.create(request("first")).expect("create duplicate");

        assert_ne!(first.id, again.id);
        assert_eq!(store.len().expect("len"), 3);
        assert_eq!(
            store.get(&second.id).expect("get").map(|g| g.code),
            Some("second".to_string())
        );
        assert!(store.get("remix-missing").expect("get").is_none());

        let ids: Vec<String> = store.list().expect("list").into_iter().map(|g| g.id).collect();
        assert_eq!(ids, vec![first.id.clone(), second.id, again.id]);

        let found = store.find_by_code("first").expect("find");
        assert_eq!(found.map(|g| g.id), Some(first.id));
        assert!(store.find_by_code("third").expect("find").is_none());
    }

    #[test]
    #[expect(clippy::expect_used, reason = "Test failure should panic with context")]
    fn test_insert_replaces_same_id() {
        let store = RemixStore::new();
        let mut game = store.create(request("v1")).expect("create");
        game.code = "v2".to_string();
        store.insert(game.clone()).expect("insert");

        assert_eq!(store.len().expect("len"), 1);
        assert_eq!(
            store.get(&game.id).expect("get").map(|g| g.code),
            Some("v2".to_string())
        );
    }

    #[test]
    #[expect(clippy::expect_used, reason = "Test failure should panic with context")]
    fn test_concurrent_creates() {
        let store = Arc::new(RemixStore::new());
        let handles: Vec<_> = (0..8)
            .map(|i| {
                let store = Arc::clone(&store);
                std::thread::spawn(move || store.create(request(&format!("game {i}"))))
            })
            .collect();

        for handle in handles {
            handle
                .join()
                .expect("thread should not panic")
                .expect("create should succeed");
        }
        assert_eq!(store.len().expect("len"), 8);
    }

    #[test]
    #[expect(clippy::expect_used, reason = "Test failure should panic with context")]
    fn test_request_accepts_route_field_names() {
        let request: RemixRequest = serde_json::from_str(
            r#"{"gameCode": "x", "gameName": "My Game", "gameDescription": "Mine"}"#,
        )
        .expect("request should parse");

        assert_eq!(request.code, "x");
        assert_eq!(request.name.as_deref(), Some("My Game"));
        assert_eq!(request.description.as_deref(), Some("Mine"));
    }
}
